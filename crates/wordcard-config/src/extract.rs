use serde::{Deserialize, Serialize};

fn default_max_candidates() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExtractConfig {
    /// Hard cap on words sent to the definition lookup per import
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
        }
    }
}
