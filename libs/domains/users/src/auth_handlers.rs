//! HTTP handlers for registration, login, and the authenticated profile

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, DuplicateFieldResponse, InternalServerErrorResponse,
        InvalidCredentialsResponse, UnauthorizedResponse,
    },
    require_auth, ApiResponse, AppError, AuthClaims, JwtAuth, ValidatedJson,
};
use utoipa::OpenApi;

use crate::error::UserError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Auth API
#[derive(OpenApi)]
#[openapi(
    paths(register, login, me),
    components(
        schemas(RegisterRequest, LoginRequest, AuthResponse, UserResponse),
        responses(
            BadRequestValidationResponse,
            DuplicateFieldResponse,
            InvalidCredentialsResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login, and profile endpoints")
    )
)]
pub struct ApiDoc;

/// Shared state for auth handlers
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the auth router. Register/login are public; `/me` sits behind the
/// bearer-token guard.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt: JwtAuth) -> Router {
    let state = AuthState {
        service,
        jwt: jwt.clone(),
    };

    let public = Router::new()
        .route("/register", post(register::<R>))
        .route("/login", post(login::<R>));

    let protected = Router::new()
        .route("/me", get(me::<R>))
        .route_layer(middleware::from_fn_with_state(jwt, require_auth));

    public.merge(protected).with_state(state)
}

fn issue_token<R: UserRepository>(
    state: &AuthState<R>,
    user: &crate::models::User,
) -> Result<String, UserError> {
    state
        .jwt
        .create_token(user.id, &user.email, &user.role.to_string())
        .map_err(|e| UserError::Internal(format!("Failed to create token: {}", e)))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 400, response = DuplicateFieldResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, UserError> {
    let user = state.service.register(input).await?;
    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(AuthResponse {
            user: user.into(),
            token,
        })),
    ))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = ApiResponse<AuthResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = InvalidCredentialsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, UserError> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;
    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(ApiResponse::new(AuthResponse {
        user: user.into(),
        token,
    })))
}

/// The authenticated user's public profile
#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn me<R: UserRepository>(
    State(state): State<AuthState<R>>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    // The guard trusts the token; the profile is read fresh so a token for a
    // since-deleted account stops working here
    let user = state.service.get_user(claims.sub).await.map_err(|e| match e {
        UserError::NotFound(_) => AppError::InvalidToken,
        other => other.into(),
    })?;

    Ok(Json(ApiResponse::new(user.into())))
}
