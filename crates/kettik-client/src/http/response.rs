/*
[INPUT]:  Raw response status and body text
[OUTPUT]: Normalized response body and typed decoding
[POS]:    HTTP layer - response classification and error message derivation
[UPDATE]: When the backend error body shape changes
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{KettikError, Result};

/// Body fields consulted for an error message, highest priority first
pub const ERROR_MESSAGE_FIELDS: [&str; 3] = ["error", "detail", "message"];

/// Parsed response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Zero-length body
    Empty,
    Json(Value),
    /// Body that is not valid JSON, kept as received
    Text(String),
}

impl ResponseBody {
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return ResponseBody::Empty;
        }
        match serde_json::from_str(text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// First present value among [`ERROR_MESSAGE_FIELDS`]
    pub fn error_message(&self) -> Option<String> {
        let object = self.as_json()?.as_object()?;
        ERROR_MESSAGE_FIELDS
            .iter()
            .filter_map(|field| object.get(*field))
            .find(|value| is_present(value))
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    }
}

// null, "", false and 0 count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Standard reason phrase, or the numeric code when none exists
pub fn status_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Successful response from the executor
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Decode the body into `T`; any shape mismatch is an error.
    ///
    /// An empty body decodes as JSON `null`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        let value = match &self.body {
            ResponseBody::Empty => Value::Null,
            ResponseBody::Json(value) => value.clone(),
            ResponseBody::Text(text) => {
                return Err(KettikError::InvalidResponse(format!(
                    "expected a JSON body, got text: {}",
                    truncate(text, 120)
                )));
            }
        };
        serde_json::from_value(value).map_err(|e| KettikError::InvalidResponse(e.to_string()))
    }

    /// Like [`ApiResponse::parse`], but an empty body yields `T::default()`
    pub fn parse_or_default<T: DeserializeOwned + Default>(&self) -> Result<T> {
        if self.body.is_empty() {
            return Ok(T::default());
        }
        self.parse()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde::Deserialize;

    #[rstest]
    #[case(r#"{"error":"bad phone","detail":"d","message":"m"}"#, Some("bad phone"))]
    #[case(r#"{"detail":"expired","message":"m"}"#, Some("expired"))]
    #[case(r#"{"message":"only message"}"#, Some("only message"))]
    #[case(r#"{"error":"","detail":"fallthrough"}"#, Some("fallthrough"))]
    #[case(r#"{"error":null,"message":"m"}"#, Some("m"))]
    #[case(r#"{"error":{"code":7}}"#, Some(r#"{"code":7}"#))]
    #[case(r#"{"raw":"<html>"}"#, None)]
    #[case(r#"["error"]"#, None)]
    #[case("plain text", None)]
    #[case("", None)]
    fn test_error_message_priority(#[case] body: &str, #[case] expected: Option<&str>) {
        let body = ResponseBody::from_text(body);
        assert_eq!(body.error_message().as_deref(), expected);
    }

    #[test]
    fn test_from_text_classification() {
        assert_eq!(ResponseBody::from_text(""), ResponseBody::Empty);
        assert_eq!(
            ResponseBody::from_text("not json"),
            ResponseBody::Text("not json".to_string())
        );
        assert_eq!(
            ResponseBody::from_text(r#"{"balance":"10"}"#),
            ResponseBody::Json(serde_json::json!({"balance": "10"}))
        );
    }

    #[test]
    fn test_status_phrase() {
        assert_eq!(status_phrase(StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(status_phrase(StatusCode::from_u16(599).unwrap()), "599");
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        value: Option<u32>,
    }

    #[test]
    fn test_parse_fails_closed_on_text() {
        let response = ApiResponse {
            status: StatusCode::OK,
            body: ResponseBody::Text("<html>".to_string()),
        };
        let err = response.parse::<Sample>().unwrap_err();
        assert!(matches!(err, KettikError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_or_default_on_empty() {
        let response = ApiResponse {
            status: StatusCode::NO_CONTENT,
            body: ResponseBody::Empty,
        };
        assert_eq!(response.parse_or_default::<Sample>().unwrap(), Sample::default());
        assert!(response.parse::<Sample>().is_err());
    }
}
