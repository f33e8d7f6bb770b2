//! Request and response types for the predict endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single prediction request.
///
/// `input` is an open JSON object; the server decides which keys it
/// understands for the named model.
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub model: String,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl PredictRequest {
    pub fn new(model: impl Into<String>, input: Value) -> Self {
        Self {
            model: model.into(),
            input,
            version: None,
        }
    }

    /// Pin the request to a specific model version.
    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }
}

/// Prediction payload returned by the predict endpoint.
///
/// The endpoint returns an open JSON object. Well-known fields are exposed
/// through typed accessors; everything else stays reachable via [`get`]
/// untouched. Fields holding an unexpected type read as `None` rather than
/// failing deserialization.
///
/// The server labels classification results under the key `class`; it is
/// stored here as `class_` (see [`PredictResponse::from_payload`]).
///
/// [`get`]: PredictResponse::get
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictResponse {
    fields: Map<String, Value>,
}

impl PredictResponse {
    /// Normalize a parsed response body.
    ///
    /// Absent or non-object payloads become the empty response. An incoming
    /// `class` key is always removed; its value moves to `class_` unless
    /// that key is already present, in which case the preexisting value
    /// wins and the `class` value is dropped.
    pub(crate) fn from_payload(payload: Option<Value>) -> Self {
        let mut fields = match payload {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        if let Some(value) = fields.remove("class") {
            fields.entry("class_").or_insert(value);
        }
        Self { fields }
    }

    /// Numeric prediction score.
    pub fn score(&self) -> Option<f64> {
        self.fields.get("score").and_then(Value::as_f64)
    }

    /// Predicted class label.
    pub fn class_(&self) -> Option<&str> {
        self.fields.get("class_").and_then(Value::as_str)
    }

    /// Per-class probabilities.
    pub fn proba(&self) -> Option<Vec<f64>> {
        self.fields
            .get("proba")
            .and_then(Value::as_array)
            .map(|a| a.iter().filter_map(Value::as_f64).collect())
    }

    /// Identifier of the model that produced the prediction.
    pub fn model_id(&self) -> Option<&str> {
        self.fields.get("model_id").and_then(Value::as_str)
    }

    /// Human-readable model name.
    pub fn model_name(&self) -> Option<&str> {
        self.fields.get("model_name").and_then(Value::as_str)
    }

    /// Version of the model that served the request.
    pub fn version(&self) -> Option<i64> {
        self.fields.get("version").and_then(Value::as_i64)
    }

    /// Task type reported by the server (e.g. `classification`).
    pub fn task_type(&self) -> Option<&str> {
        self.fields.get("task_type").and_then(Value::as_str)
    }

    /// Raw access to any response field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The full response object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<PredictResponse> for Map<String, Value> {
    fn from(response: PredictResponse) -> Self {
        response.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization_omits_unset_version() {
        let request = PredictRequest::new("m1", json!({"x": 1}));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"model": "m1", "input": {"x": 1}}));
    }

    #[test]
    fn test_request_serialization_includes_version() {
        let request = PredictRequest::new("m1", json!({})).with_version(3);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"model": "m1", "input": {}, "version": 3}));
    }

    #[test]
    fn test_class_key_renamed() {
        let response = PredictResponse::from_payload(Some(json!({"score": 0.9, "class": "cat"})));
        assert_eq!(response.class_(), Some("cat"));
        assert_eq!(response.score(), Some(0.9));
        assert!(response.get("class").is_none());
    }

    #[test]
    fn test_preexisting_class_field_wins() {
        let response =
            PredictResponse::from_payload(Some(json!({"class": "cat", "class_": "dog"})));
        assert_eq!(response.class_(), Some("dog"));
        assert!(response.get("class").is_none());
    }

    #[test]
    fn test_unrecognized_fields_preserved() {
        let response = PredictResponse::from_payload(Some(json!({"class": "cat", "ttl": 60})));
        assert_eq!(response.get("ttl"), Some(&json!(60)));
    }

    #[test]
    fn test_absent_and_non_object_payloads_normalize_to_empty() {
        assert!(PredictResponse::from_payload(None).is_empty());
        assert!(PredictResponse::from_payload(Some(json!([1, 2]))).is_empty());
        assert!(PredictResponse::from_payload(Some(json!("ok"))).is_empty());
    }

    #[test]
    fn test_mistyped_fields_read_as_none() {
        let response = PredictResponse::from_payload(Some(json!({"score": "high"})));
        assert_eq!(response.score(), None);
        assert_eq!(response.get("score"), Some(&json!("high")));
    }

    #[test]
    fn test_typed_accessors() {
        let response = PredictResponse::from_payload(Some(json!({
            "proba": [0.1, 0.9],
            "model_id": "m-42",
            "model_name": "churn",
            "version": 2,
            "task_type": "classification"
        })));
        assert_eq!(response.proba(), Some(vec![0.1, 0.9]));
        assert_eq!(response.model_id(), Some("m-42"));
        assert_eq!(response.model_name(), Some("churn"));
        assert_eq!(response.version(), Some(2));
        assert_eq!(response.task_type(), Some("classification"));
    }
}
