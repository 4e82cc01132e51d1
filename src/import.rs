//! Markdown Import
//!
//! File import is the only operation with asynchronous completion: the UI
//! hands over an uploaded file, its text is read off the event flow, and
//! only then does the decoded category list replace the checklist.
//!
//! [`ImportGuard`] keeps imports single-in-flight: a second upload started
//! while one is still being read is refused instead of racing it
//! last-write-wins. The guard logic is target-independent; only the file
//! reader needs a browser.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out at most one outstanding [`ImportToken`]
#[derive(Debug, Clone, Default)]
pub struct ImportGuard {
    pending: Rc<Cell<bool>>,
}

impl ImportGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a started import has not completed
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Begin an import. Returns `None` while another import is in flight;
    /// the returned token marks the import finished when dropped.
    pub fn begin(&self) -> Option<ImportToken> {
        if self.pending.get() {
            return None;
        }
        self.pending.set(true);
        Some(ImportToken {
            pending: Rc::clone(&self.pending),
        })
    }
}

/// Marks an import as in flight until dropped
#[derive(Debug)]
pub struct ImportToken {
    pending: Rc<Cell<bool>>,
}

impl Drop for ImportToken {
    fn drop(&mut self) {
        self.pending.set(false);
    }
}

#[cfg(target_arch = "wasm32")]
mod file {
    use std::fmt;

    use wasm_bindgen_futures::JsFuture;

    /// File-read errors surfaced to the UI collaborator
    #[derive(Debug, Clone)]
    pub enum ImportError {
        Read(String),
    }

    impl fmt::Display for ImportError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ImportError::Read(msg) => write!(f, "file read failed: {}", msg),
            }
        }
    }

    impl std::error::Error for ImportError {}

    /// Read an uploaded file's text contents.
    ///
    /// The read is not cancellable; callers hold an [`super::ImportToken`]
    /// across the await so overlapping uploads are refused.
    pub async fn read_file_text(file: &web_sys::File) -> Result<String, ImportError> {
        let text = JsFuture::from(file.text())
            .await
            .map_err(|err| ImportError::Read(format!("{:?}", err)))?;
        text.as_string()
            .ok_or_else(|| ImportError::Read("file contents are not text".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use file::{read_file_text, ImportError};
