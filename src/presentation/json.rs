// JSON body extractor whose rejections use the API error envelope
use crate::presentation::error::ApiError;
use axum::{
    Json,
    async_trait,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Works like `axum::Json<T>`, but a bad body is answered with the
/// `{"error": {code, message}}` envelope instead of a plain-text rejection.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Greeting {
        name: String,
    }

    async fn greet(ApiJson(body): ApiJson<Greeting>) -> String {
        body.name
    }

    async fn post_raw(content_type: Option<&str>, body: &'static str) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("POST").uri("/greet");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let app = Router::new().route("/greet", post(greet));
        let response = app.oneshot(builder.body(Body::from(body)).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let app = Router::new().route("/greet", post(greet));
        let request = Request::builder()
            .method("POST")
            .uri("/greet")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"ada"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ada");
    }

    #[tokio::test]
    async fn test_malformed_json_uses_envelope() {
        let (status, body) = post_raw(Some("application/json"), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
        assert!(body["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_wrong_shape_uses_envelope() {
        let (status, body) = post_raw(Some("application/json"), r#"{"nom":"ada"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_envelope() {
        let (status, body) = post_raw(None, r#"{"name":"ada"}"#).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }
}
