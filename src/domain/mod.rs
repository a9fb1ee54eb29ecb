//! Core domain types and upstream gateway traits.

pub mod counts;
pub mod gateways;
pub mod notification;
pub mod pool;

pub use counts::AggregateCounts;
pub use notification::{Notification, NotificationKind};
pub use pool::CreatedPool;
