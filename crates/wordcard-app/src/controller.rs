use std::io::{BufRead, Write};
use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordcard_core::session::{SessionMode, StudySession};
use wordcard_core::speech::SpeechClient;
use wordcard_core::store::WordStore;
use wordcard_types::StudyCommand;

use crate::ui;

/// Keyboard commands waiting for the study loop
const INPUT_CAPACITY: usize = 16;

/// Whether the study loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Leave,
}

/// Read command lines on a dedicated thread and forward them to the study loop.
///
/// The thread ends after forwarding `Leave`, at end of input, or once the
/// receiver is gone. It is detached: process exit never waits on a pending read.
pub fn spawn_input_reader<R>(input: R) -> anyhow::Result<AsyncReceiver<StudyCommand>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = kanal::bounded::<StudyCommand>(INPUT_CAPACITY);

    std::thread::Builder::new()
        .name("wordcard-input".to_string())
        .spawn(move || {
            for line in input.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("Failed to read input: {}", e);
                        break;
                    }
                };

                let Some(command) = StudyCommand::from_key(&line) else {
                    tracing::debug!("Ignoring unknown key '{}'", line.trim());
                    continue;
                };

                if tx.send(command).is_err() || command == StudyCommand::Leave {
                    return;
                }
            }

            // End of input behaves like leaving
            let _ = tx.send(StudyCommand::Leave);
        })?;

    Ok(rx.to_async())
}

/// Drives one study session from a stream of commands
pub struct StudyController<W: Write> {
    session: StudySession,
    speech: Option<Arc<dyn SpeechClient>>,
    lang: String,
    out: W,
}

impl<W: Write> StudyController<W> {
    pub fn new(
        session: StudySession,
        speech: Option<Arc<dyn SpeechClient>>,
        lang: impl Into<String>,
        out: W,
    ) -> Self {
        Self {
            session,
            speech,
            lang: lang.into(),
            out,
        }
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Process commands until `Leave`, the end of input, or cancellation
    pub async fn run(
        &mut self,
        store: &mut WordStore,
        commands: AsyncReceiver<StudyCommand>,
        cancel: CancellationToken,
    ) -> anyhow::Result<()> {
        writeln!(self.out, "{}", ui::STUDY_HELP)?;
        ui::render_card(&mut self.out, &self.session, store)?;

        loop {
            let command = tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Study session interrupted");
                    break;
                }
                command = commands.recv() => match command {
                    Ok(command) => command,
                    Err(_) => break,
                },
            };

            if self.handle(store, command)? == Flow::Leave {
                break;
            }
            ui::render_card(&mut self.out, &self.session, store)?;
        }

        self.session.leave();
        writeln!(self.out, "{}", ui::progress_line(store.progress()))?;
        Ok(())
    }

    /// Apply one command. Failed saves are reported and the session goes on.
    pub fn handle(&mut self, store: &mut WordStore, command: StudyCommand) -> anyhow::Result<Flow> {
        tracing::debug!("Study command {:?} in {:?}", command, self.session.mode());

        match command {
            StudyCommand::Flip => self.session.flip(),
            StudyCommand::Next => {
                self.session.navigate(store, 1);
            }
            StudyCommand::Previous => {
                self.session.navigate(store, -1);
            }
            StudyCommand::MarkKnown | StudyCommand::MarkUnknown => {
                if self.session.mode() == SessionMode::Empty {
                    return Ok(Flow::Continue);
                }
                let known = command == StudyCommand::MarkKnown;
                if let Err(e) = self.session.mark(store, known) {
                    tracing::error!("Could not save answer: {}", e);
                    writeln!(self.out, "Could not save your answer: {e}")?;
                }
            }
            StudyCommand::ToggleFilter => {
                self.session.toggle_filter(store);
            }
            StudyCommand::Speak => self.speak_current(store)?,
            StudyCommand::Leave => return Ok(Flow::Leave),
        }

        Ok(Flow::Continue)
    }

    fn speak_current(&mut self, store: &WordStore) -> anyhow::Result<()> {
        let Some(record) = self.session.current(store) else {
            return Ok(());
        };

        match &self.speech {
            Some(speech) => {
                if let Err(e) = speech.speak_text(&record.word, &self.lang) {
                    tracing::warn!("Speech failed: {}", e);
                    writeln!(self.out, "Speech failed: {e}")?;
                }
            }
            None => writeln!(self.out, "Speech is disabled in the config")?,
        }
        Ok(())
    }
}
