//! DTOs for users_sea adapter.

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl UserCreate {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Full replacement of a user's editable fields.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
