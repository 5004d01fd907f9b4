//! Request bodies and the response view.

use pixela_common::{GraphColor, GraphId, PixelDate, ValueType};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Consent flag value the service expects.
pub const CONSENT_YES: &str = "yes";

/// Body of `POST /v1/users`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest<'a> {
    /// Token the new account will use
    pub token: &'a str,
    /// Requested account name
    pub username: &'a str,
    /// Always `"yes"`
    pub agree_terms_of_service: &'static str,
    /// Always `"yes"`
    pub not_minor: &'static str,
}

impl<'a> CreateUserRequest<'a> {
    /// Body for `username`/`token` with both consent flags set.
    pub const fn new(token: &'a str, username: &'a str) -> Self {
        Self {
            token,
            username,
            agree_terms_of_service: CONSENT_YES,
            not_minor: CONSENT_YES,
        }
    }
}

/// Body of `POST /v1/users/{username}/graphs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateGraphRequest<'a> {
    /// `graph<N>`
    pub id: &'a GraphId,
    /// Display name
    pub name: &'a str,
    /// Unit label
    pub unit: &'a str,
    /// `int` or `float`
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Pixel colour
    pub color: GraphColor,
}

/// Body of `POST /v1/users/{username}/graphs/{graphId}`.
#[derive(Debug, Clone, Serialize)]
pub struct RecordPixelRequest<'a> {
    /// `YYYYMMDD`
    pub date: PixelDate,
    /// Quantity as a decimal string
    pub quantity: &'a str,
}

/// Body of `PUT /v1/users/{username}/graphs/{graphId}/{date}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePixelRequest<'a> {
    /// New quantity as a decimal string
    pub quantity: &'a str,
}

/// A decoded response body, exactly as the service sent it.
///
/// The service reports most outcomes inside the payload (`message`,
/// `isSuccess`) rather than only through the status code, so a 2xx response
/// can still carry a rejection. The accessors read those fields without
/// altering the body.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelaResponse(Value);

impl PixelaResponse {
    /// Wraps a decoded body.
    pub const fn new(body: Value) -> Self {
        Self(body)
    }

    /// The `message` field, if present and a string.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// The `isSuccess` flag, if present.
    pub fn is_success(&self) -> Option<bool> {
        self.0.get("isSuccess").and_then(Value::as_bool)
    }

    /// True only when the payload explicitly says `isSuccess: false`.
    pub fn is_rejected(&self) -> bool {
        self.is_success() == Some(false)
    }

    /// The message, or the whole body when there is none.
    pub fn diagnostic(&self) -> String {
        self.message()
            .map_or_else(|| self.0.to_string(), str::to_string)
    }

    /// Borrow the raw body.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw body.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for PixelaResponse {
    fn from(body: Value) -> Self {
        Self(body)
    }
}

impl From<PixelaResponse> for Value {
    fn from(response: PixelaResponse) -> Self {
        response.0
    }
}

impl fmt::Display for PixelaResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.diagnostic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_body_keys() {
        let body = serde_json::to_value(CreateUserRequest::new("thisissecret", "alice")).unwrap();
        assert_eq!(
            body,
            json!({
                "token": "thisissecret",
                "username": "alice",
                "agreeTermsOfService": "yes",
                "notMinor": "yes"
            })
        );
    }

    #[test]
    fn test_create_graph_body_keys() {
        let id = GraphId::from_sequence(1).unwrap();
        let body = serde_json::to_value(CreateGraphRequest {
            id: &id,
            name: "Spanish words",
            unit: "Words",
            value_type: ValueType::Int,
            color: GraphColor::Shibafu,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "id": "graph1",
                "name": "Spanish words",
                "unit": "Words",
                "type": "int",
                "color": "shibafu"
            })
        );
    }

    #[test]
    fn test_pixel_bodies() {
        let date = PixelDate::from_ymd(2025, 9, 20).unwrap();
        let record = serde_json::to_value(RecordPixelRequest { date, quantity: "10" }).unwrap();
        assert_eq!(record, json!({"date": "20250920", "quantity": "10"}));

        let update = serde_json::to_value(UpdatePixelRequest { quantity: "20" }).unwrap();
        assert_eq!(update, json!({"quantity": "20"}));
    }

    #[test]
    fn test_response_accessors() {
        let ok = PixelaResponse::new(json!({"message": "Success.", "isSuccess": true}));
        assert_eq!(ok.message(), Some("Success."));
        assert_eq!(ok.is_success(), Some(true));
        assert!(!ok.is_rejected());
        assert_eq!(ok.diagnostic(), "Success.");

        let rejected = PixelaResponse::new(json!({
            "message": "Please retry this request.",
            "isSuccess": false
        }));
        assert!(rejected.is_rejected());

        let bare = PixelaResponse::new(json!({"id": "graph1"}));
        assert_eq!(bare.message(), None);
        assert_eq!(bare.is_success(), None);
        assert_eq!(bare.diagnostic(), r#"{"id":"graph1"}"#);
    }

    #[test]
    fn test_response_is_unmodified() {
        let body = json!({"message": "Success.", "isSuccess": true, "extra": [1, 2, 3]});
        let response = PixelaResponse::from(body.clone());
        assert_eq!(response.as_value(), &body);
        assert_eq!(Value::from(response), body);
    }
}
