//! Web layer: page handlers and askama templates.

pub mod handlers;
