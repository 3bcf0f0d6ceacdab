//! Administrator login sessions

mod service;


pub use service::SessionService;
