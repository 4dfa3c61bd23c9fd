pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use config::{load_env_file, ClientConfig};
pub use core::{client::AirtableClient, formula::Formula};
pub use domain::model::{Record, ScoreRecordBatch, MAX_RECORDS_PER_REQUEST};
pub use domain::ports::ScoreApi;
pub use utils::error::{Result, ScoreError};
