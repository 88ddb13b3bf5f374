pub mod bulk;
pub mod single;

pub use bulk::BulkUploader;
pub use single::DocPusher;
