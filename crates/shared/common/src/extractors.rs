//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that automatically validates the payload.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| {
            // Surface the first validation error message
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name cannot be empty"))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_payload_is_extracted() {
        let request = json_request(r#"{"name":"widget"}"#);
        let ValidatedJson(payload) = ValidatedJson::<Payload>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(payload.name, "widget");
    }

    #[tokio::test]
    async fn failing_rule_surfaces_its_message() {
        let request = json_request(r#"{"name":""}"#);
        let err = ValidatedJson::<Payload>::from_request(request, &())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg == "Name cannot be empty"));
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let request = json_request("{not json");
        let err = ValidatedJson::<Payload>::from_request(request, &())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
