//! Scanner configuration.

use std::rc::Rc;

/// Bucket count used when the caller gives no hint.
pub const DEFAULT_BUCKET_COUNT: usize = 211;

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Name of the source being scanned, used only for reporting.
    pub file: Rc<String>,
    /// Fixed number of symbol table buckets. Never zero.
    pub bucket_count: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            file: Rc::new(String::from("<stdin>")),
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl ScannerConfig {
    pub fn new(file: Option<String>) -> Self {
        match file {
            Some(file) => ScannerConfig::default().with_file(file),
            None => ScannerConfig::default(),
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Rc::new(file.into());
        self
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count.max(1);
        self
    }
}
