use anyhow::Context;
use wordcard_core::speech::SpeechClient;

use crate::speech::CommandSpeech;
use crate::state::AppState;

pub async fn run(state: &AppState, text: &str) -> anyhow::Result<()> {
    if !state.config.speech.enabled {
        anyhow::bail!("Speech is disabled, set speech.enabled in the config");
    }

    let speech = CommandSpeech::new(state.config.speech.clone());
    speech
        .speak_text(text, &state.config.speech.lang)
        .context("Failed to speak")?;

    // The program blocks while it talks
    tokio::task::spawn_blocking(move || speech.wait())
        .await?
        .context("Speech program failed")?;
    Ok(())
}
