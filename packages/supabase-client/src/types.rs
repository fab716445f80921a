use serde::Deserialize;
use serde_json::Value;

/// Error body shapes returned by edge functions, PostgREST and GoTrue.
///
/// Edge functions usually answer `{"error": "..."}`, PostgREST answers
/// `{"code", "details", "hint", "message"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<Value>,
    pub message: Option<String>,
    pub msg: Option<String>,
    pub error_description: Option<String>,
}

impl ErrorBody {
    /// First non-empty message field.
    pub fn message(&self) -> Option<String> {
        let from_error = self.error.as_ref().and_then(|e| match e {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
            _ => None,
        });

        [
            from_error,
            self.message.clone(),
            self.msg.clone(),
            self.error_description.clone(),
        ]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
    }
}

/// Extract a human-readable message from a non-2xx response body.
///
/// Returns `None` for an empty body.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(parsed) => parsed.message().or_else(|| Some(trimmed.to_string())),
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Decoded edge function response.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    pub status: u16,
    pub data: Value,
}

impl FunctionResponse {
    /// Decode a body by content type: JSON, plain text, or `null` when empty.
    pub(crate) fn decode(status: u16, content_type: Option<&str>, body: &str) -> Self {
        let data = if body.trim().is_empty() {
            Value::Null
        } else if content_type.is_some_and(|ct| ct.contains("application/json")) {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        } else {
            Value::String(body.to_string())
        };

        Self { status, data }
    }
}
