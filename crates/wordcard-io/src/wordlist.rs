use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::SourceError;

pub const DEFAULT_CHAPTER: &str = "Other";
pub const DEFAULT_CHAPTER_SORT: u32 = 999;

const DEFINITION_COLUMN: &str = "definition";

/// CSV word list with its header and row order kept as read
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Borrowed view of one row
#[derive(Debug, Clone, Copy)]
pub struct WordRow<'a> {
    list: &'a WordList,
    index: usize,
}

#[derive(Debug)]
pub struct Chapter<'a> {
    pub title: String,
    pub sort: u32,
    pub rows: Vec<WordRow<'a>>,
}

impl WordList {
    pub fn read(path: &Path) -> Result<Self, SourceError> {
        let file = fs::File::open(path).map_err(|e| SourceError::read(path, e))?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let list = Self {
            headers,
            rows: Vec::new(),
        };
        if list.column("word").is_none() {
            return Err(SourceError::MissingColumn("word"));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        // Cells past the header get unnamed columns so they survive a rewrite
        let width = rows
            .iter()
            .map(Vec::len)
            .chain([list.headers.len()])
            .max()
            .unwrap_or_default();
        let mut headers = list.headers;
        headers.resize(width, String::new());
        for row in &mut rows {
            row.resize(width, String::new());
        }

        let list = Self { headers, rows };
        tracing::debug!("Read {} rows ({} columns)", list.len(), width);
        Ok(list)
    }

    /// Replace the file at `path`. The old content stays intact until the
    /// new one is fully written.
    pub fn write(&self, path: &Path) -> Result<(), SourceError> {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let written = fs::File::create(&tmp)
            .map_err(SourceError::from)
            .and_then(|mut file| {
                self.to_writer(&mut file)?;
                file.flush()?;
                file.sync_all()?;
                Ok(())
            });
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::debug!("Could not remove {}: {}", tmp.display(), cleanup);
            }
            return Err(e);
        }

        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), SourceError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<WordRow<'_>> {
        (index < self.rows.len()).then_some(WordRow { list: self, index })
    }

    pub fn rows(&self) -> impl Iterator<Item = WordRow<'_>> {
        (0..self.rows.len()).map(move |index| WordRow { list: self, index })
    }

    /// Overwrite the row's definition, adding the column on first use
    pub fn set_definition(&mut self, index: usize, definition: impl Into<String>) {
        let column = match self.column(DEFINITION_COLUMN) {
            Some(column) => column,
            None => {
                self.headers.push(DEFINITION_COLUMN.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
                self.headers.len() - 1
            }
        };

        if let Some(row) = self.rows.get_mut(index) {
            row[column] = definition.into();
        }
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }
}

impl<'a> WordRow<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw cell by header name, trimmed; None for a missing column or blank cell
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let list = self.list;
        let value = list.column(column).map(|c| list.rows[self.index][c].trim())?;
        (!value.is_empty()).then_some(value)
    }

    pub fn word(&self) -> &'a str {
        self.get("word").unwrap_or_default()
    }

    pub fn meaning(&self) -> &'a str {
        self.get("meaning").unwrap_or_default()
    }

    pub fn definition(&self) -> Option<&'a str> {
        self.get(DEFINITION_COLUMN)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.get("title")
    }

    pub fn sort(&self) -> Option<u32> {
        self.get("sort").and_then(|s| s.parse().ok())
    }
}

/// Group rows by title; chapters ordered by the sort key of their first row
pub fn group_by_chapter(list: &WordList) -> Vec<Chapter<'_>> {
    let mut chapters: Vec<Chapter<'_>> = Vec::new();

    for row in list.rows() {
        let title = row.title().unwrap_or(DEFAULT_CHAPTER);
        match chapters.iter_mut().find(|c| c.title == title) {
            Some(chapter) => chapter.rows.push(row),
            None => chapters.push(Chapter {
                title: title.to_string(),
                sort: row.sort().unwrap_or(DEFAULT_CHAPTER_SORT),
                rows: vec![row],
            }),
        }
    }

    chapters.sort_by_key(|c| c.sort);
    chapters
}
