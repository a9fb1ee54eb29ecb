pub mod create_pool;
pub mod health;
pub mod home;

pub use create_pool::create_pool_handler;
pub use health::health_handler;
pub use home::{HomeTemplate, home_handler};
