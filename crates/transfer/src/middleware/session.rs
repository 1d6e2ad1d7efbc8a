use axum::{extract::FromRequestParts, http::request::Parts};
use shared::domain::requests::session::{CallerContext, SessionUser};
use std::convert::Infallible;
use tracing::warn;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Caller identity forwarded by the authentication gateway. Absent or
/// malformed headers give an anonymous caller; the service decides whether
/// that is acceptable.
#[derive(Debug, Clone)]
pub struct Session(pub CallerContext);

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(raw_id) = header(parts, USER_ID_HEADER) else {
            return Ok(Session(CallerContext::anonymous()));
        };

        let Ok(user_id) = raw_id.parse::<i32>() else {
            warn!("⚠️ Ignoring malformed {USER_ID_HEADER} header");
            return Ok(Session(CallerContext::anonymous()));
        };

        let (Some(name), Some(email)) = (
            header(parts, USER_NAME_HEADER),
            header(parts, USER_EMAIL_HEADER),
        ) else {
            warn!("⚠️ Incomplete identity headers for user {user_id}");
            return Ok(Session(CallerContext::anonymous()));
        };

        Ok(Session(CallerContext::authenticated(SessionUser {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
        })))
    }
}
