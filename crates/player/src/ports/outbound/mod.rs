//! Outbound ports - Interfaces for external services
//!
//! Application services talk to the record store through these traits so they can be
//! exercised without a network.

pub mod record_store_port;

pub use record_store_port::{RecordStorePort, StoreError};

#[cfg(test)]
pub use record_store_port::MockRecordStorePort;
