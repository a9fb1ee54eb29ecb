//! Wire types for the upstream bolão API.

use serde::{Deserialize, Serialize};

/// Body of every counter endpoint (`GET /pools/count`, `GET /guesses/count`,
/// `GET /users/count`).
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Request body for `POST /pools`.
#[derive(Debug, Serialize)]
pub struct CreatePoolBody<'a> {
    pub title: &'a str,
}

/// Success body of `POST /pools`.
#[derive(Debug, Deserialize)]
pub struct CreatePoolResponse {
    pub code: String,
}
