use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_command() -> String {
    "espeak".to_string()
}

fn default_lang() -> String {
    "en-US".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Text-to-speech program, receives the text as its last argument
    #[serde(default = "default_command")]
    pub command: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Voices the command understands, used for voice selection
    #[serde(default)]
    pub voices: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            command: default_command(),
            lang: default_lang(),
            voices: vec![],
        }
    }
}
