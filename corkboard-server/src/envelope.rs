//! The `{status, message, data}` response envelope.
//!
//! Every route answers with this shape; absent fields are omitted from the
//! JSON rather than serialized as null.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StructuredResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> StructuredResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: "ok",
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
            data: None,
        }
    }
}

/// An ok envelope that carries no payload.
pub fn ok_empty(message: impl Into<String>) -> StructuredResponse<()> {
    StructuredResponse {
        status: "ok",
        message: Some(message.into()),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let body = serde_json::to_value(ok_empty("done")).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok", "message": "done"}));
    }

    #[test]
    fn data_is_carried() {
        let body = serde_json::to_value(StructuredResponse::ok(7)).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok", "data": 7}));
    }

    #[test]
    fn errors_have_a_message() {
        let body = serde_json::to_value(StructuredResponse::<()>::error("nope")).unwrap();
        assert_eq!(body, serde_json::json!({"status": "error", "message": "nope"}));
    }
}
