// src/models/user.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String, // Shown next to every review the user writes
    pub admin: bool,
}
