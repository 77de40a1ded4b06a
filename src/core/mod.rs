pub mod engine;
pub mod page;
pub mod transform;

pub use crate::domain::model::{LocationQuery, RawSkipRecord, ViewSkipRecord};
pub use crate::domain::ports::{ConfigProvider, SkipSource, Storage};
pub use crate::utils::error::Result;
