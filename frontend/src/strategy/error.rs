use thiserror::Error;

/// Everything that can go wrong between the intake form and the plan card.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    /// Transport failure before any response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured deadline
    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// The endpoint answered with a non-2xx status
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The response text was not a complete plan
    #[error("Schema error: {0}")]
    Schema(String),

    /// An intake field is empty or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No API key configured for the strategy co-pilot")]
    MissingApiKey,

    /// A submission is already outstanding on this requester
    #[error("A flight plan is already being generated")]
    InFlight,

    /// The modal closed before the response came back
    #[error("Request abandoned")]
    Abandoned,
}

impl StrategyError {
    /// Worth one more attempt without the user doing anything.
    pub fn is_transient(&self) -> bool {
        matches!(self, StrategyError::Network(_) | StrategyError::Timeout(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            StrategyError::Validation(reason) => reason.clone(),
            StrategyError::Network(_) | StrategyError::Timeout(_) => {
                "Connectivity error: couldn't reach the co-pilot. Check your connection and try again.".to_string()
            }
            StrategyError::InFlight => "Hold short, a flight plan is already being generated.".to_string(),
            _ => "Error generating plan. Check API Key.".to_string(),
        }
    }
}
