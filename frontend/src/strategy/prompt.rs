//! Request body for the generative-text endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::StrategyError;
use super::model::{StrategyPlan, StrategyRequest};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

pub fn build_prompt(request: &StrategyRequest) -> String {
    format!(
        "You are an expert Aviation Marketing Consultant for Stratus Marketing.\n\
         Analyze the following business data and provide a concise \"Flight Plan\" (Marketing Strategy).\n\
         Business Name: {name}\n\
         Business Type: {kind}\n\
         Current Monthly Leads: {leads}\n\
         Target Growth: {growth}%\n\
         Primary Pain Point: {pain}\n\
         \n\
         Respond with JSON only, using exactly these fields:\n\
         strategyName: a clever aviation-themed name\n\
         focusChannels: the marketing channels to focus on\n\
         tacticalSteps: three concrete steps, in order\n\
         expectedOutcome: a short summary of the expected ROI\n\
         operatorAdvice: one piece of high-level advice from a pilot/operator mindset",
        name = request.name,
        kind = request.business_type.label(),
        leads = request.current_monthly_leads,
        growth = request.target_growth_percent,
        pain = if request.pain_point.is_empty() { "Not specified" } else { request.pain_point.as_str() },
    )
}

/// Output schema; all five plan fields are required.
pub fn plan_schema() -> Value {
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "strategyName": { "type": "STRING" },
            "focusChannels": string_list,
            "tacticalSteps": string_list,
            "expectedOutcome": { "type": "STRING" },
            "operatorAdvice": { "type": "STRING" }
        },
        "required": StrategyPlan::FIELDS,
        "propertyOrdering": StrategyPlan::FIELDS,
    })
}

impl GenerateContentRequest {
    pub fn for_request(request: &StrategyRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(build_prompt(request)) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: plan_schema(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pulls the generated text out of a successful response body.
pub fn extract_text(body: &str) -> Result<String, StrategyError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| StrategyError::Schema(format!("unreadable response envelope: {}", e)))?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(StrategyError::Schema("response contained no text".to_string()));
    }
    Ok(text)
}

/// Best-effort message from a non-2xx body.
pub fn service_error(status: u16, body: &str) -> StrategyError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "no details".to_string()
            } else {
                trimmed.chars().take(200).collect()
            }
        });
    StrategyError::Service { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::model::BusinessType;

    fn blue_sky() -> StrategyRequest {
        StrategyRequest {
            name: "Blue Sky Aviation".to_string(),
            business_type: BusinessType::FlightSchool,
            current_monthly_leads: 10,
            target_growth_percent: 20.0,
            pain_point: "inconsistent leads".to_string(),
        }
    }

    #[test]
    fn prompt_carries_every_field() {
        let prompt = build_prompt(&blue_sky());
        assert!(prompt.contains("Business Name: Blue Sky Aviation"));
        assert!(prompt.contains("Business Type: Flight School"));
        assert!(prompt.contains("Current Monthly Leads: 10"));
        assert!(prompt.contains("Target Growth: 20%"));
        assert!(prompt.contains("Primary Pain Point: inconsistent leads"));
        for field in StrategyPlan::FIELDS {
            assert!(prompt.contains(field));
        }
    }

    #[test]
    fn empty_pain_point_is_marked() {
        let request = StrategyRequest { pain_point: String::new(), ..blue_sky() };
        assert!(build_prompt(&request).contains("Primary Pain Point: Not specified"));
    }

    #[test]
    fn body_requests_json_with_required_fields() {
        let body = serde_json::to_value(GenerateContentRequest::for_request(&blue_sky())).unwrap();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        let schema = &body["generationConfig"]["responseSchema"];
        assert_eq!(schema["required"].as_array().map(Vec::len), Some(5));
        assert_eq!(schema["properties"]["tacticalSteps"]["type"], "ARRAY");
        assert_eq!(body["contents"][0]["role"], "user");
        assert!(body["contents"][0]["parts"][0]["text"].as_str().unwrap().contains("Blue Sky"));
    }

    #[test]
    fn extracts_and_joins_candidate_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn empty_candidates_are_a_schema_error() {
        assert!(matches!(extract_text(r#"{"candidates":[]}"#), Err(StrategyError::Schema(_))));
        assert!(matches!(extract_text(r#"{"promptFeedback":{}}"#), Err(StrategyError::Schema(_))));
        assert!(matches!(extract_text("<html>"), Err(StrategyError::Schema(_))));
    }

    #[test]
    fn service_error_prefers_the_api_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            service_error(400, body),
            StrategyError::Service { status: 400, message: "API key not valid.".to_string() }
        );
        assert_eq!(
            service_error(502, ""),
            StrategyError::Service { status: 502, message: "no details".to_string() }
        );
    }
}
