use std::io;

/// Backing storage for the directory text.
///
/// Implementations read and write the whole serialized directory at once;
/// there is no incremental or append access. Nothing is held open between
/// calls.
pub trait ContactStorage {
    /// Read the stored bytes. `Ok(None)` means nothing has been stored yet.
    ///
    /// The bytes are not required to be UTF-8; the loader decodes them line
    /// by line.
    fn read(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the stored text with `contents`.
    fn write(&mut self, contents: &str) -> io::Result<()>;

    /// Human-readable location, used in log lines and errors.
    fn describe(&self) -> String;
}
