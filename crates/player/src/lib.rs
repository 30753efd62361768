//! Charsheet Player crate.
//!
//! Record store adapter, session service and the console editor that sits on top of
//! `charsheet-domain`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod ui;

pub use application::SheetSessionService;
pub use config::{SaveMethod, StoreConfig};
pub use infrastructure::HttpRecordStore;
pub use ports::outbound::{RecordStorePort, StoreError};
pub use ui::{ConsoleSession, Reply};
