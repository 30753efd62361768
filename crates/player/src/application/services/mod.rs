//! Application services - use cases the console view calls into

pub mod sheet_session_service;

pub use sheet_session_service::SheetSessionService;
