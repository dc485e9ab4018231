use phone_directory::ContactStorage;
use std::io;

/// In-memory storage whose writes can be made to fail on demand.
///
/// Tracks the number of write attempts so tests can verify that rejected
/// operations never reached storage.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FlakyStorage {
    contents: Option<String>,
    fail_writes: bool,
    write_attempts: usize,
}

#[allow(dead_code)]
impl FlakyStorage {
    /// Create an empty FlakyStorage (nothing stored yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FlakyStorage pre-filled with `contents`.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Some(contents.to_string()),
            ..Self::default()
        }
    }

    /// Make every following write fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Current stored text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of write calls so far, failed ones included.
    pub fn write_attempts(&self) -> usize {
        self.write_attempts
    }
}

impl ContactStorage for FlakyStorage {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        Ok(self.contents.clone().map(String::into_bytes))
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        self.write_attempts += 1;
        if self.fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage is read-only",
            ));
        }
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "<flaky>".to_string()
    }
}
