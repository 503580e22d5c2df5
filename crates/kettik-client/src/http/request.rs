/*
[INPUT]:  Endpoint path, HTTP method, payload and extra headers
[OUTPUT]: RequestDescriptor ready for the executor
[POS]:    HTTP layer - description of one outbound call before execution
[UPDATE]: When adding new body kinds or header helpers
*/

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::http::{KettikError, Result};

/// One outbound HTTP call before execution
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Absolute URL, or a path appended to the configured base URL
    pub path: String,
    pub method: Method,
    /// Structured payload, sent as JSON
    pub payload: Option<serde_json::Value>,
    /// Raw body, sent unchanged when no payload is set
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            payload: None,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Attach a structured payload
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Attach a raw text body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Copy of this descriptor carrying `Authorization: Bearer <token>`.
    ///
    /// Other caller headers are preserved.
    pub fn with_bearer(&self, token: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| KettikError::Config(format!("access token is not a valid header value: {e}")))?;
        value.set_sensitive(true);

        let mut authed = self.clone();
        authed.headers.insert(AUTHORIZATION, value);
        Ok(authed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::ACCEPT_LANGUAGE;

    #[test]
    fn test_with_bearer_preserves_caller_headers() {
        let descriptor = RequestDescriptor::get("/users/balance/")
            .header(ACCEPT_LANGUAGE, HeaderValue::from_static("ru"))
            .header(AUTHORIZATION, HeaderValue::from_static("Basic old"));

        let authed = descriptor.with_bearer("abc").unwrap();

        assert_eq!(authed.headers.get(ACCEPT_LANGUAGE).unwrap(), "ru");
        assert_eq!(authed.headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(authed.headers.get_all(AUTHORIZATION).iter().count(), 1);
        // `descriptor` is left as it was
        assert_eq!(descriptor.headers.get(AUTHORIZATION).unwrap(), "Basic old");
    }

    #[test]
    fn test_with_bearer_rejects_control_characters() {
        let err = RequestDescriptor::get("/x").with_bearer("bad\ntoken").unwrap_err();
        assert!(matches!(err, KettikError::Config(_)));
    }

    #[test]
    fn test_json_payload_is_captured() {
        let descriptor = RequestDescriptor::post("/auth/bot/check/")
            .json(&serde_json::json!({"phone_number": "+996700000000", "code": "123456"}))
            .unwrap();

        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(
            descriptor.payload.unwrap()["code"],
            serde_json::Value::from("123456")
        );
    }
}
