pub mod checksum;
pub mod date;
pub mod engine;
pub mod fields;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod presentation;

pub use crate::domain::model::{InputRecord, ValidationReport};
pub use crate::domain::ports::{Clock, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
