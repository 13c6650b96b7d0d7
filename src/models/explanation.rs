//! Explanation request/response contract

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

/// Snapshot of algorithm-internal state, opaque to resolution
pub type StateSnapshot = Map<String, Value>;

/// A validated explanation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationRequest {
    pub algorithm: String,
    pub step: u64,
    pub state: StateSnapshot,
    pub question: Option<String>,
}

impl ExplanationRequest {
    pub fn new(algorithm: impl Into<String>, step: u64) -> Self {
        Self {
            algorithm: algorithm.into(),
            step,
            state: StateSnapshot::new(),
            question: None,
        }
    }

    pub fn with_state(mut self, state: StateSnapshot) -> Self {
        self.state = state;
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Parse and validate a decoded JSON body.
    ///
    /// Every violated field is reported, not only the first one.
    pub fn parse(body: Value) -> Result<Self, ValidationErrors> {
        if !body.is_object() {
            let mut errors = ValidationErrors::new();
            errors.add("body", violation("type", "request body must be a JSON object"));
            return Err(errors);
        }

        let raw: RawExplanationRequest = serde_json::from_value(body).map_err(|e| {
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("decode");
            err.message = Some(e.to_string().into());
            errors.add("body", err);
            errors
        })?;

        raw.into_request()
    }
}

/// Wire form of a request before validation.
///
/// Fields stay untyped so a wrong type is a field violation rather than a
/// decode failure that hides the remaining problems. `context` is the older
/// name for `state`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawExplanationRequest {
    #[serde(default)]
    pub algorithm: Option<Value>,
    #[serde(default)]
    pub step: Option<Value>,
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub question: Option<Value>,
}

impl RawExplanationRequest {
    pub fn into_request(self) -> Result<ExplanationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let algorithm = match self.algorithm {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::String(_)) => {
                errors.add("algorithm", violation("blank", "algorithm must not be blank"));
                None
            }
            Some(_) => {
                errors.add("algorithm", violation("type", "algorithm must be a string"));
                None
            }
            None => {
                errors.add("algorithm", violation("required", "algorithm is required"));
                None
            }
        };

        let step = match self.step {
            None => Some(0),
            Some(Value::Number(n)) => match step_from_number(&n) {
                Some(step) => Some(step),
                None => {
                    errors.add("step", violation("range", "step must be an integer >= 0"));
                    None
                }
            },
            Some(_) => {
                errors.add("step", violation("type", "step must be an integer >= 0"));
                None
            }
        };

        let state = match self.state.or(self.context) {
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                errors.add("state", violation("type", "state must be an object"));
                None
            }
            None => {
                errors.add("state", violation("required", "state is required"));
                None
            }
        };

        let question = match self.question {
            None => Some(None),
            Some(Value::String(q)) => Some(Some(q)),
            Some(_) => {
                errors.add("question", violation("type", "question must be a string"));
                None
            }
        };

        match (algorithm, step, state, question) {
            (Some(algorithm), Some(step), Some(state), Some(question)) => Ok(ExplanationRequest {
                algorithm,
                step,
                state,
                question,
            }),
            _ => Err(errors),
        }
    }
}

/// Non-negative integer steps, including integral floats such as `3.0`.
/// Values past `u64::MAX` are out of range.
fn step_from_number(n: &serde_json::Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Explanation returned to the visualizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationResponse {
    #[serde(alias = "text")]
    pub explanation: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, alias = "code_snippet", skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default, alias = "related_concepts")]
    pub related_concepts: Vec<String>,
}

impl ExplanationResponse {
    pub fn new(explanation: impl Into<String>) -> Self {
        Self {
            explanation: explanation.into(),
            suggestions: Vec::new(),
            code_snippet: None,
            related_concepts: Vec::new(),
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_code_snippet(mut self, code: impl Into<String>) -> Self {
        self.code_snippet = Some(code.into());
        self
    }

    pub fn with_related_concepts<I, S>(mut self, concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_concepts = concepts.into_iter().map(Into::into).collect();
        self
    }

    /// A response is only usable with a non-blank explanation
    pub fn is_usable(&self) -> bool {
        !self.explanation.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_names(errors: &ValidationErrors) -> Vec<String> {
        let mut names: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_parse_full_request() {
        let req = ExplanationRequest::parse(json!({
            "algorithm": "bfs",
            "step": 2,
            "state": {"queue": [1, 2]},
            "question": "why the queue?"
        }))
        .unwrap();

        assert_eq!(req.algorithm, "bfs");
        assert_eq!(req.step, 2);
        assert_eq!(req.state["queue"], json!([1, 2]));
        assert_eq!(req.question.as_deref(), Some("why the queue?"));
    }

    #[test]
    fn test_parse_defaults_and_nulls() {
        let req = ExplanationRequest::parse(json!({
            "algorithm": "dfs",
            "state": {},
            "question": null
        }))
        .unwrap();

        assert_eq!(req.step, 0);
        assert!(req.state.is_empty());
        assert_eq!(req.question, None);
    }

    #[test]
    fn test_context_alias_for_state() {
        let req = ExplanationRequest::parse(json!({
            "algorithm": "quick-sort",
            "step": 1,
            "context": {"pivot": 4}
        }))
        .unwrap();
        assert_eq!(req.state["pivot"], json!(4));

        let req = ExplanationRequest::parse(json!({
            "algorithm": "quick-sort",
            "state": {"from": "state"},
            "context": {"from": "context"}
        }))
        .unwrap();
        assert_eq!(req.state["from"], json!("state"));
    }

    #[test]
    fn test_missing_algorithm_is_named() {
        let errors = ExplanationRequest::parse(json!({"step": 1, "state": {}})).unwrap_err();
        assert_eq!(field_names(&errors), vec!["algorithm"]);
    }

    #[test]
    fn test_blank_algorithm_rejected() {
        let errors = ExplanationRequest::parse(json!({"algorithm": "   ", "state": {}})).unwrap_err();
        assert_eq!(field_names(&errors), vec!["algorithm"]);
    }

    #[test]
    fn test_negative_step_rejected() {
        let errors = ExplanationRequest::parse(json!({
            "algorithm": "bubble-sort",
            "step": -1,
            "state": {}
        }))
        .unwrap_err();
        assert_eq!(field_names(&errors), vec!["step"]);
    }

    #[test]
    fn test_fractional_step_rejected() {
        let errors = ExplanationRequest::parse(json!({
            "algorithm": "bubble-sort",
            "step": 1.5,
            "state": {}
        }))
        .unwrap_err();
        assert_eq!(field_names(&errors), vec!["step"]);
    }

    #[test]
    fn test_integral_float_step_accepted() {
        let req = ExplanationRequest::parse(json!({
            "algorithm": "merge-sort",
            "step": 3.0,
            "state": {}
        }))
        .unwrap();
        assert_eq!(req.step, 3);

        let errors = ExplanationRequest::parse(json!({
            "algorithm": "merge-sort",
            "step": 1e20,
            "state": {}
        }))
        .unwrap_err();
        assert_eq!(field_names(&errors), vec!["step"]);
    }

    #[test]
    fn test_missing_state_rejected() {
        let errors = ExplanationRequest::parse(json!({"algorithm": "bfs", "step": 0})).unwrap_err();
        assert_eq!(field_names(&errors), vec!["state"]);
    }

    #[test]
    fn test_every_violation_reported() {
        let errors = ExplanationRequest::parse(json!({
            "step": "three",
            "state": [1, 2, 3],
            "question": 42
        }))
        .unwrap_err();

        assert_eq!(field_names(&errors), vec!["algorithm", "question", "state", "step"]);
    }

    #[test]
    fn test_non_object_body_rejected() {
        let errors = ExplanationRequest::parse(json!(["bfs", 1])).unwrap_err();
        assert_eq!(field_names(&errors), vec!["body"]);
    }

    #[test]
    fn test_raw_request_defaults_report_required_fields() {
        let raw = RawExplanationRequest {
            algorithm: Some(json!("merge-sort")),
            state: Some(json!({})),
            ..Default::default()
        };
        assert!(raw.into_request().is_ok());

        let errors = RawExplanationRequest::default().into_request().unwrap_err();
        assert_eq!(field_names(&errors), vec!["algorithm", "state"]);
    }

    #[test]
    fn test_response_wire_shape() {
        let response = ExplanationResponse::new("Quick Sort picks a pivot.")
            .with_code_snippet("pivot = partition(arr, low, high)")
            .with_related_concepts(["divide and conquer"]);

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(
            wire,
            json!({
                "explanation": "Quick Sort picks a pivot.",
                "suggestions": [],
                "codeSnippet": "pivot = partition(arr, low, high)",
                "relatedConcepts": ["divide and conquer"]
            })
        );

        let bare = serde_json::to_value(ExplanationResponse::new("x")).unwrap();
        assert!(bare.get("codeSnippet").is_none());
    }

    #[test]
    fn test_response_accepts_legacy_field_names() {
        let response: ExplanationResponse = serde_json::from_value(json!({
            "text": "legacy",
            "code_snippet": "swap(a, b)",
            "related_concepts": ["stable sort"]
        }))
        .unwrap();

        assert_eq!(response.explanation, "legacy");
        assert_eq!(response.code_snippet.as_deref(), Some("swap(a, b)"));
        assert!(response.suggestions.is_empty());
    }
}
