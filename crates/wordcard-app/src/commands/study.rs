use std::io;

use tokio_util::sync::CancellationToken;
use wordcard_core::error::SessionError;
use wordcard_core::session::StudySession;

use super::cancel_on_ctrl_c;
use crate::controller::{StudyController, spawn_input_reader};
use crate::state::AppState;

pub async fn run(state: &AppState, unknown_only: bool, start: usize) -> anyhow::Result<()> {
    let mut store = state.open_store()?;
    let mut session = StudySession::with_filter(unknown_only);

    match session.enter(&store, start) {
        Ok(_) => {}
        Err(SessionError::NothingToStudy) => {
            let what = if unknown_only { "unknown words" } else { "words" };
            println!("No {what} to study. Import some with `wordcard import <file>`.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let commands = spawn_input_reader(io::BufReader::new(io::stdin()))?;
    let cancel = CancellationToken::new();
    let ctrl_c = cancel_on_ctrl_c(cancel.clone());

    let mut controller = StudyController::new(
        session,
        state.speech.clone(),
        state.config.speech.lang.clone(),
        io::stdout(),
    );
    let result = controller.run(&mut store, commands, cancel).await;
    ctrl_c.abort();
    result
}
