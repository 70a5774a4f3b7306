use std::path::PathBuf;

/// A rendered client proxy waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    pub full_file_path: PathBuf,
    pub content: String,
}
