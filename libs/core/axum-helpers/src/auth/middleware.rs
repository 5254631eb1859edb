use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Extract a bearer token from the Authorization header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// JWT authentication middleware.
///
/// Rejects with the precise taxonomy code before the handler runs:
/// - no/malformed Authorization header → 401 `NO_TOKEN`
/// - expired token → 401 `TOKEN_EXPIRED`
/// - any other verification failure → 401 `INVALID_TOKEN`
///
/// On success the decoded [`super::AuthClaims`] are inserted into request
/// extensions for handlers to consume via `Extension<AuthClaims>`. The
/// token payload is trusted as-is; no store lookup happens here.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, routing::post, Router};
/// use axum_helpers::{require_auth, JwtAuth, JwtConfig};
///
/// let jwt = JwtAuth::new(&JwtConfig::from_env()?);
///
/// let protected = Router::new()
///     .route("/products", post(create_product))
///     .route_layer(middleware::from_fn_with_state(jwt.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(jwt): State<JwtAuth>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers()).ok_or(AppError::NoToken)?;

    let claims = jwt.verify_token(&token)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    const SECRET: &str = "middleware-test-secret-long-enough!!!";

    fn protected_app(jwt: JwtAuth) -> Router {
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(jwt, require_auth))
    }

    async fn error_code(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["error"]["code"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_missing_token_yields_no_token() {
        let app = protected_app(JwtAuth::new(&JwtConfig::new(SECRET)));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 401);
        assert_eq!(error_code(response).await, "NO_TOKEN");
    }

    #[tokio::test]
    async fn test_non_bearer_header_yields_no_token() {
        let app = protected_app(JwtAuth::new(&JwtConfig::new(SECRET)));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("authorization", "Basic dXNlcjpwYXNz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 401);
        assert_eq!(error_code(response).await, "NO_TOKEN");
    }

    #[tokio::test]
    async fn test_garbage_token_yields_invalid_token() {
        let app = protected_app(JwtAuth::new(&JwtConfig::new(SECRET)));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("authorization", "Bearer garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 401);
        assert_eq!(error_code(response).await, "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_expired_token_yields_token_expired() {
        let expired_auth = JwtAuth::new(&JwtConfig::new(SECRET).with_expiry_hours(-2));
        let token = expired_auth
            .create_token(Uuid::now_v7(), "a@b.com", "user")
            .unwrap();

        let app = protected_app(JwtAuth::new(&JwtConfig::new(SECRET)));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 401);
        assert_eq!(error_code(response).await, "TOKEN_EXPIRED");
    }

    #[tokio::test]
    async fn test_valid_token_passes_through() {
        let jwt = JwtAuth::new(&JwtConfig::new(SECRET));
        let token = jwt.create_token(Uuid::now_v7(), "a@b.com", "user").unwrap();

        let app = protected_app(jwt);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
    }
}
