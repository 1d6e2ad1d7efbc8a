use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// Identity that travels with a call. The transport layer fills it in; an
/// empty context is a legitimate value and the service decides what it means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerContext {
    pub user: Option<SessionUser>,
}

impl CallerContext {
    pub fn authenticated(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}
