pub mod toml_config;

pub use toml_config::TourConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fundamentals")]
#[command(about = "Small, self-contained language-feature lessons")]
pub struct CliConfig {
    /// Path to a TOML file overriding lesson inputs
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the available lessons
    List,

    /// Run a single lesson
    Run {
        /// Lesson name, see `list`
        lesson: String,

        /// Print the lesson report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every lesson in order
    All {
        /// Print the lesson reports as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取 `--config` 指定的檔案，未指定時使用預設值
    pub fn load_tour_config(&self) -> crate::utils::error::Result<TourConfig> {
        match &self.config {
            Some(path) => TourConfig::from_file(path),
            None => Ok(TourConfig::default()),
        }
    }

    pub fn wants_json(&self) -> bool {
        matches!(
            self.command,
            Command::Run { json: true, .. } | Command::All { json: true }
        )
    }
}
