//! JSON file persistence backend.
//!
//! The collection is stored as a single JSON array. Access is confined to a
//! capability-scoped directory handle, so the backend can only touch files
//! beneath the directory it was given.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::task::{
    domain::Task,
    ports::{TaskPersistence, TaskPersistenceError, TaskPersistenceResult},
};

/// Task persistence backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskPersistence {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
    pretty: bool,
}

impl JsonFileTaskPersistence {
    /// Creates a backend storing its file inside `dir`.
    #[must_use]
    pub fn new(dir: Dir, config: &StorageConfig) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: config.file_name.clone(),
            pretty: config.pretty,
        }
    }

    /// Opens `path` with ambient authority and creates a backend inside it.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while opening the directory.
    pub fn open_ambient(path: &Utf8Path, config: &StorageConfig) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::new(dir, config))
    }

    /// Returns the file name used inside the directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }

    fn temp_file_name(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.tmp", self.file_name))
    }

    fn encode(&self, tasks: &[Task]) -> TaskPersistenceResult<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(tasks)?
        } else {
            serde_json::to_vec(tasks)?
        };
        Ok(encoded)
    }
}

fn read_tasks(dir: &Dir, file_name: &Utf8Path) -> TaskPersistenceResult<Vec<Task>> {
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

// Write-then-rename keeps the target file whole if a write is interrupted.
fn write_tasks(
    dir: &Dir,
    temp_name: &Utf8Path,
    file_name: &Utf8Path,
    contents: &[u8],
) -> io::Result<()> {
    dir.write(temp_name, contents)?;
    dir.rename(temp_name, dir, file_name)
}

#[async_trait]
impl TaskPersistence for JsonFileTaskPersistence {
    async fn load(&self) -> TaskPersistenceResult<Vec<Task>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || read_tasks(&dir, &file_name))
            .await
            .map_err(TaskPersistenceError::storage)?
    }

    async fn save(&self, tasks: &[Task]) -> TaskPersistenceResult<()> {
        let contents = self.encode(tasks)?;
        let dir = Arc::clone(&self.dir);
        let temp_name = self.temp_file_name();
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || write_tasks(&dir, &temp_name, &file_name, &contents))
            .await
            .map_err(TaskPersistenceError::storage)??;
        Ok(())
    }
}
