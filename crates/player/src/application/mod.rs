pub mod services;

pub use services::SheetSessionService;
