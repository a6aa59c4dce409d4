//! Extractor that validates path and body fields against a rule table.

use crate::errors::AppError;
use crate::validation::{FieldRule, RequestInput, validate};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A request type described by a table of [`FieldRule`]s.
///
/// `from_input` is only called once every rule has passed, so it may rely on
/// the coercions in [`crate::validation::rules`] succeeding. Returning `None`
/// means the table and the conversion disagree, which surfaces as a 500.
pub trait FromValidated: Sized {
    const RULES: &'static [FieldRule];

    fn from_input(input: &RequestInput) -> Option<Self>;
}

/// Validated request extractor.
///
/// Gathers path parameters and the JSON body, runs `T::RULES` and rejects with
/// a 400 listing every failed check. Bodies without a JSON content type, and
/// empty bodies, are treated as `{}` so required-field rules still report.
///
/// ```ignore
/// async fn create(Validated(input): Validated<CreateProduct>) -> impl IntoResponse {
///     // input.name and input.price are already checked
/// }
/// ```
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: FromValidated,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let path = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();
        let is_json = has_json_content_type(&parts.headers);

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let input = RequestInput::new(path, parse_body(is_json, &bytes)?);
        validate(T::RULES, &input).map_err(AppError::Validation)?;

        T::from_input(&input).map(Validated).ok_or_else(|| {
            AppError::InternalServerError("validated input could not be converted".to_string())
        })
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse_body(is_json: bool, bytes: &Bytes) -> Result<Value, AppError> {
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Check, Source, rules};
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        response::IntoResponse,
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct Rename {
        id: i32,
        name: String,
    }

    impl FromValidated for Rename {
        const RULES: &'static [FieldRule] = &[
            FieldRule::path("id", &[Check::new(rules::is_int, "ID must be an integer")]),
            FieldRule::body("name", &[Check::new(rules::is_present, "Name is required")]),
        ];

        fn from_input(input: &RequestInput) -> Option<Self> {
            Some(Self {
                id: rules::as_i32(input.get(Source::Path, "id"))?,
                name: rules::as_text(input.get(Source::Body, "name"))?,
            })
        }
    }

    async fn rename(Validated(input): Validated<Rename>) -> impl IntoResponse {
        format!("{}:{}", input.id, input.name)
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", post(rename))
    }

    async fn send(uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, String) {
        let mut request = HttpRequest::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let response = app()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_is_converted() {
        let (status, body) = send(
            "/items/4",
            Some("application/json"),
            r#"{"name":"  Shelf "}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "4:Shelf");
    }

    #[tokio::test]
    async fn test_reports_path_and_body_failures_together() {
        let (status, body) = send("/items/abc", Some("application/json"), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "VALIDATION_ERROR");
        assert_eq!(json["details"][0]["field"], "id");
        assert_eq!(json["details"][1]["field"], "name");
    }

    #[tokio::test]
    async fn test_non_json_body_is_treated_as_empty() {
        let (status, body) = send("/items/1", Some("text/plain"), r#"{"name":"x"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["details"][0]["message"], "Name is required");
    }

    #[tokio::test]
    async fn test_empty_json_body_is_treated_as_empty_object() {
        let (status, _) = send("/items/1", Some("application/json"), "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (status, body) = send("/items/1", Some("application/json"), "{name:").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "INVALID_JSON");
    }

    #[test]
    fn test_json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            "application/merge-patch+json".parse().unwrap(),
        );
        assert!(has_json_content_type(&headers));

        headers.insert(header::CONTENT_TYPE, "text/html".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }
}
