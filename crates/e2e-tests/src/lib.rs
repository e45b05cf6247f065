//! Shared test harness for vectord end-to-end tests.

use tempfile::TempDir;

use vectord_service::Host;
use vectord_types::{Record, Settings};

/// A host over a temporary data directory.
pub struct TestHarness {
    tmp: TempDir,
    pub settings: Settings,
    pub host: Host,
}

impl TestHarness {
    /// Create a harness with default settings and an empty store.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a harness with custom invocation/compression settings;
    /// the data directory is always replaced with a tempdir.
    pub fn with_settings(mut settings: Settings) -> Self {
        let tmp = TempDir::new().expect("create tempdir");
        settings.data_dir = tmp.path().to_string_lossy().to_string();
        let host = Host::open(&settings).expect("open host");
        Self {
            tmp,
            settings,
            host,
        }
    }

    /// Store one record per vector, returning the assigned ids.
    pub fn seed(&self, vectors: &[Vec<f32>]) -> Vec<u64> {
        vectors
            .iter()
            .map(|data| {
                let resp = self.host.records().create(Record::new(data.clone()));
                assert!(resp.success, "{}", resp.message);
                resp.message.parse().expect("create returns the id")
            })
            .collect()
    }

    /// Reopen the host over the same data directory.
    pub fn reopen(&mut self) {
        self.host = Host::open(&self.settings).expect("reopen host");
    }

    /// Path of the backing data directory.
    pub fn data_dir(&self) -> &std::path::Path {
        self.tmp.path()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
