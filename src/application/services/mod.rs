pub mod counts_service;
pub mod pool_service;

pub use counts_service::CountsService;
pub use pool_service::PoolService;
