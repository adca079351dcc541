//! Type-safe access token cookie management.
//!
//! Wraps the request's cookie jar so handlers and guards never touch the cookie
//! name or its attributes directly. Every cookie written here carries the
//! attributes from `CookieConfig`, so clearing it matches how it was set.

use time::Duration;
use tower_cookies::{Cookie, Cookies};

use crate::server::{config::CookieConfig, service::auth::token::ACCESS_TOKEN_TTL_DAYS};

/// Name of the cookie holding the signed access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Access token cookie management.
pub struct AuthCookie<'a> {
    /// The request's cookie jar.
    cookies: &'a Cookies,
    config: CookieConfig,
}

impl<'a> AuthCookie<'a> {
    /// Creates a new AuthCookie wrapper.
    ///
    /// # Arguments
    /// - `cookies` - Cookie jar extracted from the request
    /// - `config` - Attributes to apply to the cookie
    pub fn new(cookies: &'a Cookies, config: CookieConfig) -> Self {
        Self { cookies, config }
    }

    /// Stores the access token, valid for as long as the token itself.
    pub fn set_token(&self, token: String) {
        self.cookies.add(self.build(token, Duration::days(ACCESS_TOKEN_TTL_DAYS)));
    }

    /// Retrieves the access token sent with the request, if any.
    pub fn token(&self) -> Option<String> {
        self.cookies
            .get(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Instructs the client to drop the access token.
    pub fn clear(&self) {
        self.cookies.add(self.build(String::new(), Duration::ZERO));
    }

    fn build(&self, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((ACCESS_TOKEN_COOKIE, value))
            .http_only(true)
            .path("/")
            .secure(self.config.secure)
            .same_site(self.config.same_site)
            .max_age(max_age)
            .build()
    }
}
