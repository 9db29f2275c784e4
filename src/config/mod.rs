//! Keymap file output with atomic writes.
//!
//! This module writes rendered keymaps to disk. Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename so a keymap is never half-written
//! - **Generated header**: Every file starts with a do-not-edit comment
//! - **Sublime naming**: `KeymapFile::named` builds `<name>.sublime-keymap` paths
//! - **Symlink warnings**: Logs a warning but follows symlinked targets
//!
//! # Example
//!
//! ```no_run
//! use sublime_keymap::config::KeymapFile;
//!
//! let file = KeymapFile::named("/home/user/.config/sublime-text/Packages/User", "Default")?;
//! file.write("[]\n")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod writer;

pub use error::ConfigError;
pub use writer::{KeymapFile, FILE_HEADER, KEYMAP_EXTENSION};
