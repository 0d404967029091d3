use serde::{Deserialize, Serialize};

/// Ways a project can have failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureType {
    Abandoned,
    NeverLaunched,
    Overengineered,
    NoUsers,
    TechnicalDisaster,
    WrongProblem,
}

impl FailureType {
    /// Stable string code used on the wire and in storage
    pub fn code(&self) -> &'static str {
        match self {
            FailureType::Abandoned => "abandoned",
            FailureType::NeverLaunched => "never-launched",
            FailureType::Overengineered => "overengineered",
            FailureType::NoUsers => "no-users",
            FailureType::TechnicalDisaster => "technical-disaster",
            FailureType::WrongProblem => "wrong-problem",
        }
    }

    /// Human-readable label for the selector
    pub fn display_name(&self) -> &'static str {
        match self {
            FailureType::Abandoned => "Abandoned halfway",
            FailureType::NeverLaunched => "Never launched",
            FailureType::Overengineered => "Overengineered to death",
            FailureType::NoUsers => "Nobody showed up",
            FailureType::TechnicalDisaster => "Technical disaster",
            FailureType::WrongProblem => "Solved the wrong problem",
        }
    }

    /// All failure types in display order
    pub fn all() -> Vec<FailureType> {
        vec![
            FailureType::Abandoned,
            FailureType::NeverLaunched,
            FailureType::Overengineered,
            FailureType::NoUsers,
            FailureType::TechnicalDisaster,
            FailureType::WrongProblem,
        ]
    }

    /// Parse from a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "abandoned" => Some(FailureType::Abandoned),
            "never-launched" => Some(FailureType::NeverLaunched),
            "overengineered" => Some(FailureType::Overengineered),
            "no-users" => Some(FailureType::NoUsers),
            "technical-disaster" => Some(FailureType::TechnicalDisaster),
            "wrong-problem" => Some(FailureType::WrongProblem),
            _ => None,
        }
    }
}

impl std::fmt::Display for FailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
