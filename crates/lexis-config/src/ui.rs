use serde::{Deserialize, Serialize};

fn default_show_examples() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Print example sentences in quick mode
    #[serde(default = "default_show_examples")]
    pub show_examples: bool,
    #[serde(default)]
    pub color: Option<bool>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_examples: default_show_examples(),
            color: None,
        }
    }
}
