use std::io::{self, Write};

use wordcard_core::session::{SessionMode, StudySession};
use wordcard_core::store::{Progress, WordStore};
use wordcard_io::wordlist::Chapter;
use wordcard_types::WordRecord;

pub const STUDY_HELP: &str =
    "Enter: flip | n/p: next/previous | 1: don't know | 2: know | f: unknown only | s: speak | q: quit";

pub fn progress_line(progress: Progress) -> String {
    format!(
        "Known {}/{} ({:.0}%)",
        progress.known,
        progress.total,
        progress.percentage()
    )
}

pub fn render_list<'a, W: Write>(
    out: &mut W,
    records: impl IntoIterator<Item = &'a WordRecord>,
    progress: Progress,
) -> io::Result<()> {
    writeln!(out, "{}", progress_line(progress))?;
    for record in records {
        let mark = if record.known { 'x' } else { ' ' };
        writeln!(out, "[{mark}] {}: {}", record.word, first_line(&record.definition))?;
    }
    Ok(())
}

pub fn render_chapters<W: Write>(out: &mut W, chapters: &[Chapter<'_>]) -> io::Result<()> {
    for chapter in chapters {
        writeln!(
            out,
            "{:>4}  {} ({} words)",
            chapter.sort,
            chapter.title,
            chapter.rows.len()
        )?;
    }
    Ok(())
}

/// Current state of the study screen
pub fn render_card<W: Write>(
    out: &mut W,
    session: &StudySession,
    store: &WordStore,
) -> io::Result<()> {
    let filter = if session.filter_unknown() {
        " [unknown only]"
    } else {
        ""
    };

    match (session.mode(), session.current(store), session.position(store)) {
        (SessionMode::Reviewing(_), Some(record), Some((position, count))) => {
            let status = if record.known { "known" } else { "learning" };
            writeln!(out)?;
            writeln!(out, "[{position}/{count}]{filter} {} ({status})", record.word)?;
            if session.is_flipped() {
                for line in record.definition.lines() {
                    writeln!(out, "    {line}")?;
                }
            } else {
                writeln!(out, "    (Enter to show the definition)")?;
            }
        }
        (SessionMode::Empty, _, _) | (SessionMode::Reviewing(_), _, _) => {
            writeln!(out)?;
            writeln!(
                out,
                "No cards to show{filter}. Press f to change the filter or q to quit."
            )?;
        }
        (SessionMode::Browsing, _, _) => {}
    }
    out.flush()
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, known: bool) -> WordRecord {
        WordRecord {
            known,
            ..WordRecord::new(word, "First line\n\nExample: second")
        }
    }

    #[test]
    fn list_shows_progress_and_marks() {
        let records = [record("cliff", true), record("gale", false)];
        let mut out = Vec::new();
        render_list(&mut out, &records, Progress { known: 1, total: 2 }).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Known 1/2 (50%)\n[x] cliff: First line\n[ ] gale: First line\n"
        );
    }
}
