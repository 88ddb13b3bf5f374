pub mod engine;

pub use crate::domain::model::{GeoPoint, Record, ToolReport};
pub use crate::domain::ports::Tool;
pub use crate::utils::error::Result;
