use std::path::PathBuf;

use clap::Parser;
use lexis_config::Config;
use lexis_types::StudyMode;

#[derive(Debug, Clone, Parser)]
#[command(name = "lexis", about = "Vocabulary flashcards in the terminal", version)]
pub struct Cli {
    /// Profile name under <data-dir>/profiles
    #[arg(long, short = 'p', default_value = "main")]
    pub profile: String,

    /// Study mode to start in
    #[arg(long, short = 'm', value_parser = parse_mode)]
    pub mode: Option<StudyMode>,

    /// Where the vocabulary file and profiles live
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Dictionary API base url
    #[arg(long)]
    pub api_url: Option<String>,

    /// Keep words in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Log filter, e.g. `debug` or `lexis=trace`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Create a profile cloned from main, then exit
    #[arg(long, value_name = "NAME")]
    pub new_profile: Option<String>,
}

fn parse_mode(value: &str) -> Result<StudyMode, String> {
    value.parse()
}

impl Cli {
    /// Flags given on the command line take precedence over the profile
    pub fn apply(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.study.mode = mode;
        }
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.dictionary.api_url = api_url.clone();
        }
        if self.ephemeral {
            config.storage.ephemeral = true;
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }

    /// Data directory before any profile is read
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| lexis_config::storage::StorageConfig::new().data_dir)
    }
}
