// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Atomic keymap file writing

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::ConfigError;

/// Comment placed at the top of every generated keymap file.
///
/// Sublime Text accepts `//` comments in keymap files.
pub const FILE_HEADER: &str = "// This file is generated, do not edit it by hand!\n";

/// Extension Sublime Text looks for when loading keymaps.
pub const KEYMAP_EXTENSION: &str = "sublime-keymap";

/// A keymap file on disk.
///
/// Holds the target path and writes to it atomically. The parent directory
/// must already exist; the file itself need not.
#[derive(Debug, Clone, PartialEq)]
pub struct KeymapFile {
    path: PathBuf,
}

impl KeymapFile {
    /// Creates a handle for the keymap file at `path`.
    ///
    /// If the path is a symlink, a warning is logged but the operation
    /// continues and writes follow the link.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the parent directory doesn't exist.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        let parent = match path.parent() {
            Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
            Some(dir) => dir,
            None => return Err(ConfigError::NotFound(path)),
        };

        if !parent.is_dir() {
            return Err(ConfigError::NotFound(parent.to_path_buf()));
        }

        if path.read_link().is_ok() {
            tracing::warn!("Keymap file is a symlink: {}", path.display());
        }

        Ok(Self { path })
    }

    /// Creates a handle for `<dir>/<name>.sublime-keymap`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sublime_keymap::config::KeymapFile;
    ///
    /// // e.g. "Default (Linux)" → Packages/User/Default (Linux).sublime-keymap
    /// let file = KeymapFile::named("Packages/User", "Default (Linux)")?;
    /// # Ok::<(), sublime_keymap::config::ConfigError>(())
    /// ```
    pub fn named(dir: impl AsRef<Path>, name: &str) -> Result<Self, ConfigError> {
        let filename = format!("{}.{}", name, KEYMAP_EXTENSION);
        Self::new(dir.as_ref().join(filename))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current file content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read.
    pub fn read(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Writes `contents` atomically (temp file + rename).
    ///
    /// If an error occurs, any previous file at the path is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WriteFailed` if the temporary file cannot be
    /// created, written or renamed into place.
    pub fn write(&self, contents: &str) -> Result<(), ConfigError> {
        tracing::debug!("Writing {} bytes to {}", contents.len(), self.path.display());

        // Open file for atomic writing
        let mut file = AtomicWriteFile::options().open(&self.path).map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        // Commit atomically
        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        tracing::info!("Wrote keymap to {}", self.path.display());
        Ok(())
    }
}
