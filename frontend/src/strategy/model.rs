use serde::{Deserialize, Serialize};

use super::error::StrategyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BusinessType {
    #[default]
    FlightSchool,
    CharterOp,
    AviationService,
    Consultant,
}

impl BusinessType {
    pub const ALL: [BusinessType; 4] = [
        BusinessType::FlightSchool,
        BusinessType::CharterOp,
        BusinessType::AviationService,
        BusinessType::Consultant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BusinessType::FlightSchool => "Flight School",
            BusinessType::CharterOp => "Charter Op",
            BusinessType::AviationService => "Aviation Service",
            BusinessType::Consultant => "High-Ticket Consultant",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw co-pilot form fields, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrategyDraft {
    pub name: String,
    pub business_type: BusinessType,
    pub current_leads: String,
    pub target_growth: String,
    pub pain_point: String,
}

impl StrategyDraft {
    /// The intake's first station only needs a name.
    pub fn can_advance(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn validate(&self) -> Result<StrategyRequest, StrategyError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StrategyError::Validation("Business name is required".to_string()));
        }
        let current_monthly_leads = self.current_leads.trim().parse::<u32>().map_err(|_| {
            StrategyError::Validation("Current leads per month must be a whole number".to_string())
        })?;
        let target_growth_percent = self
            .target_growth
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|growth| growth.is_finite() && *growth >= 0.0)
            .ok_or_else(|| StrategyError::Validation("Target growth must be a non-negative percentage".to_string()))?;

        Ok(StrategyRequest {
            name: name.to_string(),
            business_type: self.business_type,
            current_monthly_leads,
            target_growth_percent,
            pain_point: self.pain_point.trim().to_string(),
        })
    }
}

/// Validated intake; never changes once submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyRequest {
    pub name: String,
    pub business_type: BusinessType,
    pub current_monthly_leads: u32,
    pub target_growth_percent: f64,
    pub pain_point: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    pub strategy_name: String,
    pub focus_channels: Vec<String>,
    pub tactical_steps: Vec<String>,
    pub expected_outcome: String,
    pub operator_advice: String,
}

/// Wire shape before the presence check. Every field is optional here so a
/// missing one is reported by name rather than as a generic serde error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanPayload {
    strategy_name: Option<String>,
    focus_channels: Option<Vec<String>>,
    tactical_steps: Option<Vec<String>>,
    expected_outcome: Option<String>,
    operator_advice: Option<String>,
}

impl StrategyPlan {
    pub const FIELDS: [&'static str; 5] = [
        "strategyName",
        "focusChannels",
        "tacticalSteps",
        "expectedOutcome",
        "operatorAdvice",
    ];

    /// Parses the model's text. Either all five fields come back or the whole
    /// response is rejected.
    pub fn from_json(text: &str) -> Result<Self, StrategyError> {
        let payload: PlanPayload = serde_json::from_str(text.trim())
            .map_err(|e| StrategyError::Schema(format!("response is not a plan object: {}", e)))?;

        fn require<T>(value: Option<T>, field: &str) -> Result<T, StrategyError> {
            value.ok_or_else(|| StrategyError::Schema(format!("missing field `{}`", field)))
        }

        Ok(Self {
            strategy_name: require(payload.strategy_name, "strategyName")?,
            focus_channels: require(payload.focus_channels, "focusChannels")?,
            tactical_steps: require(payload.tactical_steps, "tacticalSteps")?,
            expected_outcome: require(payload.expected_outcome, "expectedOutcome")?,
            operator_advice: require(payload.operator_advice, "operatorAdvice")?,
        })
    }
}
