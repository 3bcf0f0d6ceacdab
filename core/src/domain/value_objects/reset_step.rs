use serde::{Deserialize, Serialize};

/// Steps of the password reset wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetStep {
    Email,
    Code,
    Password,
    Success,
}

impl ResetStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetStep::Email => "email",
            ResetStep::Code => "code",
            ResetStep::Password => "password",
            ResetStep::Success => "success",
        }
    }
}

impl std::fmt::Display for ResetStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
