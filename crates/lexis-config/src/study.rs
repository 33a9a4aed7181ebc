use lexis_types::StudyMode;
use serde::{Deserialize, Serialize};

fn default_history_limit() -> usize {
    50
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StudyConfig {
    #[serde(default)]
    pub mode: StudyMode,
    /// Words kept for prev/next navigation within a session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            mode: StudyMode::default(),
            history_limit: default_history_limit(),
        }
    }
}
