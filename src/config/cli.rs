use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "golf-scores")]
#[command(about = "Manage the golf-scores table of an Airtable base")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, global = true, help = "Environment file to load instead of .env")]
    pub env_file: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create up to 10 records from a JSON batch file
    Add { file: PathBuf },
    /// List records (first page only)
    List,
    /// List one page of 100 records
    Page {
        #[arg(long)]
        offset: Option<String>,
    },
    /// List Hole and Score for a single hole
    Hole { hole: u32 },
    /// Update the given fields of existing records (PATCH)
    Update { file: PathBuf },
    /// Replace all fields of existing records (PUT)
    Replace { file: PathBuf },
    /// Delete records by id
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_with_offset() {
        let config = CliConfig::parse_from(["golf-scores", "page", "--offset", "abc123"]);
        match config.command {
            Command::Page { offset } => assert_eq!(offset.as_deref(), Some("abc123")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_delete_with_global_flag() {
        let config = CliConfig::parse_from(["golf-scores", "delete", "rec1", "rec2", "--verbose"]);
        assert!(config.verbose);
        match config.command {
            Command::Delete { ids } => assert_eq!(ids, vec!["rec1", "rec2"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_delete_requires_ids() {
        assert!(CliConfig::try_parse_from(["golf-scores", "delete"]).is_err());
    }
}
