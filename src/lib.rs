pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::{run_check, CheckRun};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clock::{AnyClock, FixedClock, SystemClock};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    engine::ValidationEngine,
    parser::{parse_and_validate, parse_with_clock},
    pipeline::BatchPipeline,
    presentation::PersonDetails,
};
pub use domain::model::{BatchSummary, Gender, NumberForm, PersonalNumber};
pub use utils::error::{CheckError, ParseError, Result};
