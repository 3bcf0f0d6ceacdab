//! Value objects shared between services and the presentation layer.

pub mod reset_step;

pub use reset_step::ResetStep;
