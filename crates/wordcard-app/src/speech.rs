use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use wordcard_config::speech::SpeechConfig;
use wordcard_core::error::SpeechError;
use wordcard_core::speech::{SpeechClient, Utterance, Voice};

/// espeak's default speaking rate in words per minute
const BASE_WPM: f32 = 175.0;

/// Speaks by running an espeak-compatible program:
/// `{command} [-v VOICE] -s WPM -a AMPLITUDE TEXT`
pub struct CommandSpeech {
    config: SpeechConfig,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            current: Mutex::new(None),
        }
    }

    /// Block until the running utterance ends
    pub fn wait(&self) -> Result<(), SpeechError> {
        let child = self.lock()?.take();
        if let Some(mut child) = child {
            let status = child.wait()?;
            if !status.success() {
                return Err(SpeechError::Backend(format!(
                    "{} exited with {}",
                    self.config.command, status
                )));
            }
        }
        Ok(())
    }

    fn args(utterance: &Utterance) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(voice) = &utterance.voice {
            args.push("-v".to_string());
            args.push(voice.name.clone());
        }
        args.push("-s".to_string());
        args.push(((BASE_WPM * utterance.rate).round() as u32).to_string());
        args.push("-a".to_string());
        args.push(((100.0 * utterance.volume).round() as u32).to_string());
        args.push(utterance.text.clone());
        args
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<Child>>, SpeechError> {
        self.current
            .lock()
            .map_err(|e| SpeechError::Backend(e.to_string()))
    }
}

impl SpeechClient for CommandSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.config
            .voices
            .iter()
            .map(|name| Voice {
                name: name.clone(),
                lang: self.config.lang.clone(),
            })
            .collect()
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        if !self.config.enabled {
            return Err(SpeechError::Disabled);
        }
        self.stop()?;

        tracing::debug!("Speaking '{}' with {}", utterance.text, self.config.command);
        let child = Command::new(&self.config.command)
            .args(Self::args(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::Backend(format!("{}: {}", self.config.command, e)))?;

        *self.lock()? = Some(child);
        Ok(())
    }

    fn stop(&self) -> Result<(), SpeechError> {
        if let Some(mut child) = self.lock()?.take() {
            // Already exited is fine
            if child.try_wait()?.is_none() {
                child.kill()?;
                child.wait()?;
            }
        }
        Ok(())
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::debug!("Failed to stop speech: {}", e);
        }
    }
}
