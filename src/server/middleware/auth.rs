//! Role-based route guards.
//!
//! `AuthGuard` resolves the access token cookie to a stored user and checks the
//! user's role. The `require_*` functions wrap it as axum middleware for whole
//! route tables; on success the resolved `User` is placed in the request
//! extensions for handlers to extract.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthCookie,
    model::user::{Role, User},
    state::AppState,
};

pub enum Permission {
    Admin,
    Trainer,
    Trainee,
}

impl Permission {
    fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Trainer => Role::Trainer,
            Self::Trainee => Role::Trainee,
        }
    }
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    cookies: &'a Cookies,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, cookies: &'a Cookies) -> Self {
        Self { state, cookies }
    }

    /// Resolves the logged in user and checks they hold every required permission.
    ///
    /// The role is read from the database rather than the token, so role changes
    /// take effect immediately. Tokens that fail verification or name a deleted
    /// user cause the cookie to be cleared.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding the required roles
    /// - `Err(AuthError::Unauthenticated)` - No token cookie
    /// - `Err(AuthError::InvalidToken | UserNotInDatabase)` - Token unusable
    /// - `Err(AuthError::AccessDenied)` - User lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let auth_cookie = AuthCookie::new(self.cookies, self.state.cookie);

        let Some(token) = auth_cookie.token() else {
            return Err(AuthError::Unauthenticated.into());
        };

        let claims = match self.state.tokens.verify(&token) {
            Ok(claims) => claims,
            Err(err) => {
                auth_cookie.clear();
                return Err(err.into());
            }
        };

        let user_repo = UserRepository::new(&self.state.db);

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            auth_cookie.clear();
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            let required = permission.role();
            if user.role != required {
                return Err(AuthError::AccessDenied {
                    user_id: user.id,
                    required: required.to_string(),
                }
                .into());
            }
        }

        Ok(user)
    }

    /// Rejects requests that already carry a valid access token.
    pub fn ensure_logged_out(&self) -> Result<(), AppError> {
        let auth_cookie = AuthCookie::new(self.cookies, self.state.cookie);

        if let Some(token) = auth_cookie.token() {
            if self.state.tokens.verify(&token).is_ok() {
                return Err(AuthError::AlreadyLoggedIn.into());
            }
        }

        Ok(())
    }
}

async fn authorize(
    state: &AppState,
    cookies: &Cookies,
    permissions: &[Permission],
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(state, cookies).require(permissions).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Admits any logged in user.
pub async fn require_authenticated(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, &cookies, &[], request, next).await
}

pub async fn require_admin(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, &cookies, &[Permission::Admin], request, next).await
}

pub async fn require_trainer(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, &cookies, &[Permission::Trainer], request, next).await
}

pub async fn require_trainee(
    State(state): State<AppState>,
    cookies: Cookies,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, &cookies, &[Permission::Trainee], request, next).await
}
