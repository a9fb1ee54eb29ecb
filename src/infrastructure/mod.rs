//! Infrastructure layer: the HTTP client for the upstream bolão API.

pub mod backend;
