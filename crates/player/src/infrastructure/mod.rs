pub mod http_record_store;

pub use http_record_store::HttpRecordStore;
