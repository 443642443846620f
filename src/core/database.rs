//! JSON-file record store
//!
//! The whole student collection lives in one JSON array. Every operation
//! reads the file fresh, works on the collection in memory, and writes the
//! full collection back when it changes anything. Nothing is cached between
//! calls.

use crate::core::models::Student;
use crate::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "students.data";

/// Errors surfaced by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Data file involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The collection could not be serialised
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The data file exists but does not hold a valid student array
    #[error("data file {path} is corrupt: {source}")]
    Corrupt {
        /// Data file involved
        path: PathBuf,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },
}

/// What `load_all` does when the data file cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Log a warning and treat the store as empty
    #[default]
    Empty,
    /// Return [`StoreError::Corrupt`]
    Error,
}

impl FromStr for CorruptPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "empty" | "" => Ok(Self::Empty),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "Invalid corrupt-data policy: '{other}' (expected 'empty' or 'error')"
            )),
        }
    }
}

impl fmt::Display for CorruptPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Whole-file JSON student store
///
/// A process-local lock serialises each load-mutate-save sequence, so one
/// `Database` shared between threads does not lose updates. Separate
/// processes writing the same file are not coordinated.
#[derive(Debug)]
pub struct Database {
    path: PathBuf,
    on_corrupt: CorruptPolicy,
    lock: Mutex<()>,
}

impl Database {
    /// Open the store at `path`, creating an empty data file if none exists
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the missing file cannot be created
    pub fn open(path: impl Into<PathBuf>, on_corrupt: CorruptPolicy) -> Result<Self, StoreError> {
        let db = Self {
            path: path.into(),
            on_corrupt,
            lock: Mutex::new(()),
        };
        db.ensure_initialized()?;
        Ok(db)
    }

    /// Path of the backing data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Active corrupt-data policy
    #[must_use]
    pub const fn on_corrupt(&self) -> CorruptPolicy {
        self.on_corrupt
    }

    /// Write an empty array if the data file does not exist yet
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the directory or file cannot be created
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        let _guard = self.guard();
        if self.path.exists() {
            return Ok(());
        }
        info!("Creating empty student store at {}", self.path.display());
        self.write_unlocked(&[])
    }

    /// Load every student
    ///
    /// A missing file reads as empty. An unparseable file reads as empty
    /// under [`CorruptPolicy::Empty`] and fails under [`CorruptPolicy::Error`].
    ///
    /// # Errors
    /// Returns [`StoreError::Corrupt`] (policy `error` only) or
    /// [`StoreError::Io`] for read failures other than "not found"
    pub fn load_all(&self) -> Result<Vec<Student>, StoreError> {
        let _guard = self.guard();
        self.read_unlocked()
    }

    /// Replace the stored collection with `students`
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file cannot be written
    pub fn save_all(&self, students: &[Student]) -> Result<(), StoreError> {
        let _guard = self.guard();
        self.write_unlocked(students)
    }

    /// Add a student unless one with the same email is already stored
    ///
    /// If the student's id collides with a stored id, a fresh id is drawn
    /// and written back into `student` before saving.
    ///
    /// # Returns
    /// `false` when the email is taken (nothing is written)
    ///
    /// # Errors
    /// Propagates read and write failures
    pub fn add(&self, student: &mut Student) -> Result<bool, StoreError> {
        let _guard = self.guard();
        let mut students = self.read_unlocked()?;
        if students.iter().any(|s| s.email == student.email) {
            debug!("Rejected duplicate email {}", student.email);
            return Ok(false);
        }
        while students.iter().any(|s| s.id == student.id) {
            let fresh = Student::random_id();
            debug!("Student id {} already in use, reassigning to {fresh}", student.id);
            student.id = fresh;
        }
        students.push(student.clone());
        self.write_unlocked(&students)?;
        info!("Added student {} <{}>", student.id, student.email);
        Ok(true)
    }

    /// Find the first student with the given email
    ///
    /// # Errors
    /// Propagates read failures
    pub fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|s| s.email == email))
    }

    /// Find the first student with the given id
    ///
    /// # Errors
    /// Propagates read failures
    pub fn find_by_id(&self, id: &str) -> Result<Option<Student>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|s| s.id == id))
    }

    /// Replace the stored student that has the same id
    ///
    /// # Returns
    /// `false` when no stored student has that id (nothing is inserted)
    ///
    /// # Errors
    /// Propagates read and write failures
    pub fn update(&self, student: &Student) -> Result<bool, StoreError> {
        let _guard = self.guard();
        let mut students = self.read_unlocked()?;
        let Some(slot) = students.iter_mut().find(|s| s.id == student.id) else {
            debug!("Update skipped: no student with id {}", student.id);
            return Ok(false);
        };
        slot.clone_from(student);
        self.write_unlocked(&students)?;
        info!("Updated student {}", student.id);
        Ok(true)
    }

    /// Remove every student with the given id
    ///
    /// # Returns
    /// `true` if anything was removed
    ///
    /// # Errors
    /// Propagates read and write failures
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.guard();
        let mut students = self.read_unlocked()?;
        let before = students.len();
        students.retain(|s| s.id != id);
        if students.len() == before {
            return Ok(false);
        }
        self.write_unlocked(&students)?;
        info!("Removed student {id}");
        Ok(true)
    }

    /// Remove every student
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] if the file cannot be written
    pub fn clear_all(&self) -> Result<(), StoreError> {
        self.save_all(&[])?;
        info!("Cleared student store at {}", self.path.display());
        Ok(())
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded state is the file itself, so a poisoned lock is still usable.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_unlocked(&self) -> Result<Vec<Student>, StoreError> {
        debug!("Loading students from {}", self.path.display());
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        match serde_json::from_slice::<Vec<Student>>(&bytes) {
            Ok(students) => Ok(students),
            Err(source) => match self.on_corrupt {
                CorruptPolicy::Empty => {
                    warn!(
                        "Ignoring corrupt data file {} ({source}); treating store as empty",
                        self.path.display()
                    );
                    Ok(Vec::new())
                }
                CorruptPolicy::Error => Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }),
            },
        }
    }

    fn write_unlocked(&self, students: &[Student]) -> Result<(), StoreError> {
        debug!(
            "Writing {} student(s) to {}",
            students.len(),
            self.path.display()
        );
        let payload = serde_json::to_vec_pretty(students)?;
        self.replace_file(&payload).map_err(|source| {
            error!("Failed to write {}: {source}", self.path.display());
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn replace_file(&self, payload: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(payload)?;
        file.sync_all()?;
        fs::rename(tmp, &self.path)
    }
}
