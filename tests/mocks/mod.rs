mod flaky_storage;

pub use flaky_storage::FlakyStorage;
