use std::fs;
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use wordcard_core::error::PersistError;
use wordcard_core::persistence::PersistenceClient;
use wordcard_types::WordRecord;

/// Word list persisted as one JSON array in a single file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot `{dir}/{name}.json`
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        Self::new(dir.join(format!("{name}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceClient for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<WordRecord>>, PersistError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No saved words at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let records = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(records))
    }

    fn save(&self, records: &[WordRecord]) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        // Write next to the target and rename, so a crash never leaves half a file
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            serde_json::to_writer_pretty(&mut file, records)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Saved {} words to {}", records.len(), self.path.display());
        Ok(())
    }
}
