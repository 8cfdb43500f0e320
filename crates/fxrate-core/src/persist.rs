//! Durable storage of completed request/response pairs.
//!
//! Each record lands at `{output_dir}/{FROM}_{TO}_{DATE}.json`. Re-running the
//! same pair and date replaces the earlier artifact. The record is encoded in
//! memory, written to a temporary file in the same directory and renamed over
//! the target, so readers only ever see a complete old or a complete new file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::{PersistedRecord, PersistenceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPersister {
    output_dir: PathBuf,
}

impl RecordPersister {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn artifact_path(&self, record: &PersistedRecord) -> PathBuf {
        self.output_dir.join(record.artifact_name())
    }

    /// Write `record` and return where it was stored.
    pub fn persist(&self, record: &PersistedRecord) -> Result<PathBuf, PersistenceError> {
        let mut payload = serde_json::to_vec_pretty(record)?;
        payload.push(b'\n');

        fs::create_dir_all(&self.output_dir).map_err(|source| {
            PersistenceError::CreateDirectory {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let target = self.artifact_path(record);
        let write_error = |source| PersistenceError::Write {
            path: target.clone(),
            source,
        };

        let mut staged = NamedTempFile::new_in(&self.output_dir).map_err(write_error)?;
        staged.write_all(&payload).map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;
        staged
            .persist(&target)
            .map_err(|error| write_error(error.error))?;

        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrencyCode, ExchangeDate, ExchangeRateRequest, ExchangeRateResponse};

    fn record(rate: f64) -> PersistedRecord {
        let request = ExchangeRateRequest::new(
            CurrencyCode::new("MDL"),
            CurrencyCode::new("USD"),
            ExchangeDate::parse("2025-06-01").expect("date"),
        );
        let response = ExchangeRateResponse {
            from: request.from.clone(),
            to: request.to.clone(),
            rate,
            date: request.date,
        };
        PersistedRecord::new(request, response)
    }

    #[test]
    fn creates_missing_directories() {
        let temp = tempfile::tempdir().expect("tempdir");
        let persister = RecordPersister::new(temp.path().join("nested").join("data"));

        let stored = persister.persist(&record(0.0571)).expect("persist");

        assert_eq!(
            stored,
            temp.path().join("nested/data/MDL_USD_2025-06-01.json")
        );
        assert!(stored.is_file());
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let persister = RecordPersister::new(temp.path());

        persister.persist(&record(0.0571)).expect("first persist");
        persister.persist(&record(0.0572)).expect("second persist");
    }

    #[test]
    fn leaves_no_staging_files_behind() {
        let temp = tempfile::tempdir().expect("tempdir");
        let persister = RecordPersister::new(temp.path());

        persister.persist(&record(0.0571)).expect("persist");

        let names = fs::read_dir(temp.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec![std::ffi::OsString::from("MDL_USD_2025-06-01.json")]);
    }

    #[test]
    fn directory_that_is_a_file_fails_cleanly() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("data");
        fs::write(&blocker, "not a directory").expect("write blocker");

        let err = RecordPersister::new(&blocker)
            .persist(&record(0.0571))
            .expect_err("must fail");

        assert!(matches!(err, PersistenceError::CreateDirectory { .. }));
    }
}
