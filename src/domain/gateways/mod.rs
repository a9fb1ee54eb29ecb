//! Gateway traits for the upstream bolão API.
//!
//! The upstream API is an external collaborator reached over HTTP. These
//! traits are the only seam through which the application layer talks to it,
//! so tests can substitute mocks for the network.

pub mod counts_gateway;
pub mod pools_gateway;

pub use counts_gateway::CountsGateway;
pub use pools_gateway::PoolsGateway;

#[cfg(test)]
pub use counts_gateway::MockCountsGateway;
#[cfg(test)]
pub use pools_gateway::MockPoolsGateway;
