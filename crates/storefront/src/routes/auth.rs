//! Authentication route handlers.
//!
//! Registration and login are classic form posts. Outcomes travel between
//! pages as a `notice` query parameter on the redirect target:
//! a duplicate registration lands on the login page, a login attempt with an
//! unregistered email lands on the registration page, and a wrong password
//! re-renders the login page in place.

use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

use super::NoticeQuery;

// =============================================================================
// Form Types
// =============================================================================

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the registration page.
pub async fn register_page(Query(query): Query<NoticeQuery>) -> impl IntoResponse {
    Json(json!({
        "page": "register",
        "notice": query.notice,
    }))
}

/// Register a new account.
///
/// A duplicate email redirects to the login page; success also redirects to
/// the login page so the new user signs in with their fresh credentials.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.pool());

    match auth.register(&form.email, &form.name, &form.password).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "New account registered");
            Ok(Redirect::to("/login?notice=registered").into_response())
        }
        Err(AuthError::DuplicateEmail) => {
            Ok(Redirect::to("/login?notice=email_taken").into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

/// Display the login page.
pub async fn login_page(Query(query): Query<NoticeQuery>) -> impl IntoResponse {
    Json(json!({
        "page": "login",
        "notice": query.notice,
    }))
}

/// Log in with email and password.
///
/// Success stores the identity in the session and goes home. An email with
/// no account redirects to registration; a wrong password re-renders the
/// login page with a notice rather than redirecting.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.pool());

    match auth.verify(&form.email, &form.password).await {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                email: user.email,
                name: user.name,
            };
            set_current_user(&session, &current).await?;
            set_sentry_user(&current.id, Some(current.email.as_str()));
            tracing::info!(user_id = %current.id, "User logged in");
            Ok(Redirect::to("/").into_response())
        }
        // An unparseable email can't match any account either.
        Err(AuthError::UnknownEmail | AuthError::InvalidEmail(_)) => {
            Ok(Redirect::to("/register?notice=unknown_email").into_response())
        }
        Err(AuthError::BadPassword) => Ok(Json(json!({
            "page": "login",
            "notice": "bad_credentials",
        }))
        .into_response()),
        Err(e) => Err(AppError::Auth(e)),
    }
}

/// Log out the current user.
///
/// Clears the stored identity and destroys the session.
pub async fn logout(RequireAuth(user): RequireAuth, session: Session) -> Result<Response> {
    clear_current_user(&session).await?;
    session.flush().await?;
    clear_sentry_user();
    tracing::info!(user_id = %user.id, "User logged out");

    Ok(Redirect::to("/").into_response())
}
