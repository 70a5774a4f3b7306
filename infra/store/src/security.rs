use crate::error::StoreError;
use std::path::{Component, Path, PathBuf};

/// Collapses `.` and `..` lexically, refusing anything that leaves the store root.
pub(crate) fn normalize_relative(path: &Path) -> Result<PathBuf, StoreError> {
    let mut out = PathBuf::new();

    for c in path.components() {
        match c {
            Component::CurDir => {},
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(StoreError::PathTraversalAttempt {
                        message: path.display().to_string().into(),
                        context: Some("Path attempted to escape the store root via '..'".into()),
                    });
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(StoreError::PathTraversalAttempt {
                    message: path.display().to_string().into(),
                    context: Some("Document paths must be relative to the store root".into()),
                });
            },
        }
    }

    if out.as_os_str().is_empty() {
        return Err(StoreError::PathTraversalAttempt {
            message: path.display().to_string().into(),
            context: Some("Document path is empty".into()),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_collapsed() {
        let path = normalize_relative(Path::new("./config/../bounded-context.json")).expect("ok");
        assert_eq!(path, PathBuf::from("bounded-context.json"));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        assert!(normalize_relative(Path::new("../outside.json")).is_err());
        assert!(normalize_relative(Path::new("/etc/passwd")).is_err());
        assert!(normalize_relative(Path::new(".")).is_err());
    }
}
