use std::io::{BufRead, Write};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use wordcard_io::WordRow;
use wordcard_lang_english::derive_definition;

use crate::state::AppState;

pub mod chapters;
pub mod enrich;
pub mod import;
pub mod list;
pub mod manage;
pub mod speak;
pub mod study;

/// Cancel `token` on Ctrl+C. Abort the handle once the guarded work is done.
pub fn cancel_on_ctrl_c(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupted, stopping");
                token.cancel();
            }
            Err(e) => tracing::warn!("Cannot listen for Ctrl+C: {}", e),
        }
    })
}

/// Progress callback printing `label done/total` on one stderr line
pub fn progress_printer(label: &'static str) -> impl FnMut(usize, usize) {
    move |done, total| {
        eprint!("\r{label} {done}/{total}");
        if done == total {
            eprintln!();
        }
    }
}

/// Definition available without asking any strategy: the row's own
/// definition column, the glossary, or the meaning column
pub fn local_definition(state: &AppState, row: &WordRow<'_>, key: &str) -> Option<String> {
    row.definition()
        .map(str::to_string)
        .or_else(|| state.glossary.get(key).cloned())
        .or_else(|| derive_definition(row.meaning()))
}

/// Ask a yes/no question, anything but y/yes means no
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> anyhow::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn only_yes_confirms() {
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("\n", false), ("n\n", false), ("", false)] {
            let mut out = Vec::new();
            let confirmed = confirm(&mut Cursor::new(answer), &mut out, "Clear?").unwrap();
            assert_eq!(confirmed, expected, "answer {answer:?}");
            assert_eq!(out, b"Clear? [y/N] ");
        }
    }
}
