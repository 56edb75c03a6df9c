use std::io::{self, Write};
use std::path::Path;

use wordcard_io::WordList;
use wordcard_io::wordlist::group_by_chapter;

use crate::ui;

pub fn run(csv: &Path) -> anyhow::Result<()> {
    let list = WordList::read(csv)?;
    let chapters = group_by_chapter(&list);

    let mut out = io::stdout().lock();
    ui::render_chapters(&mut out, &chapters)?;
    writeln!(out, "{} chapters, {} words", chapters.len(), list.len())?;
    Ok(())
}
