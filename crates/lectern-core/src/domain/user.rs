use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Professor,
    Admin,
}

/// User entity - an author account. The platform runs with a single
/// configured account; the password hash lives in the server config, never
/// on this struct, so it cannot leak through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub active: bool,
}

impl User {
    pub fn new(email: String, name: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            name,
            role,
            active: true,
        }
    }
}
