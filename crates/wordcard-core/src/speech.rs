use crate::error::SpeechError;

/// Voices tried in order before falling back to any English voice
pub const PREFERRED_VOICES: &[&str] = &[
    "Google US English",
    "Microsoft David",
    "Microsoft Zira",
    "Google UK English",
    "en-US",
    "en-GB",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    /// Slightly slower than normal speech
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub voice: Option<Voice>,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: "en-US".to_string(),
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
            voice: None,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_voice(mut self, voice: Option<Voice>) -> Self {
        self.voice = voice;
        self
    }
}

/// Text-to-speech capability
pub trait SpeechClient: Send + Sync {
    fn voices(&self) -> Vec<Voice>;

    /// Speak, interrupting anything still playing
    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    fn stop(&self) -> Result<(), SpeechError>;

    /// Speak with the best available English voice
    fn speak_text(&self, text: &str, lang: &str) -> Result<(), SpeechError> {
        let voices = self.voices();
        let voice = select_voice(&voices, PREFERRED_VOICES).cloned();
        self.speak(&Utterance::new(text).with_lang(lang).with_voice(voice))
    }
}

/// First voice whose name or language matches a preferred entry,
/// then any English voice, then whatever comes first
pub fn select_voice<'v>(voices: &'v [Voice], preferred: &[&str]) -> Option<&'v Voice> {
    preferred
        .iter()
        .find_map(|wanted| {
            voices
                .iter()
                .find(|v| v.name.contains(wanted) || v.lang.contains(wanted))
        })
        .or_else(|| voices.iter().find(|v| v.lang.starts_with("en")))
        .or_else(|| voices.first())
}
