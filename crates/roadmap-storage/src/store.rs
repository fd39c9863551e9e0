//! Store trait and error types.

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Permission denied.
    PermissionDenied,
    /// Stored data could not be decoded.
    Corrupt,
    /// Backend refused the write (e.g. browser quota exceeded).
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "LocalStorage").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Attach a plain message as the source.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message: String = message.into();
        self.source = Some(message.into());
        self
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::Corrupt => "Corrupt data",
            StorageErrorKind::Unavailable => "Unavailable",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// String key-value store with `localStorage` semantics.
///
/// Values are opaque strings; typed wrappers such as
/// [`HiddenSections`](crate::HiddenSections) handle encoding. The trait does
/// not require `Send + Sync` because the browser store is single-threaded;
/// the server stores its backends as `Arc<dyn KeyValueStore + Send + Sync>`.
pub trait KeyValueStore {
    /// Read the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend rejects the write.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Replace the value for `key` with `f(current)`.
    ///
    /// The default reads then writes and is only atomic for single-threaded
    /// backends such as `localStorage`. Stores shared between threads
    /// override it to run `f` under their write lock.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read or rejects the
    /// write.
    fn update(
        &self,
        key: &str,
        f: &mut dyn FnMut(Option<&str>) -> String,
    ) -> Result<(), StorageError> {
        let current = self.get(key)?;
        let value = f(current.as_deref());
        self.set(key, &value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_full() {
        let err = StorageError::new(StorageErrorKind::Corrupt)
            .with_backend("Fs")
            .with_message("expected object")
            .with_path("/state/index.json");

        assert_eq!(
            err.to_string(),
            "[Fs] Corrupt data: expected object (path: /state/index.json)"
        );
    }

    #[test]
    fn test_io_permission_denied() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = StorageError::io(io, Some(PathBuf::from("/x")));

        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert_eq!(err.path, Some(PathBuf::from("/x")));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_other() {
        let io = std::io::Error::other("disk on fire");
        let err = StorageError::io(io, None);

        assert_eq!(err.kind, StorageErrorKind::Other);
        assert_eq!(err.to_string(), "Error: disk on fire");
    }
}
