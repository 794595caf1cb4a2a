//! Handler path resolution.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Resolve the handler executable to invoke.
///
/// 1. A path that exists is used, made absolute so a handler working
///    directory cannot change what it points at
/// 2. A bare command name (no separator) is looked up on `PATH`
/// 3. Anything else is returned unchanged
///
/// Resolution never fails. An unresolvable handler surfaces later as one
/// invocation fault per task, so the batch still reports every identifier.
pub fn resolve_handler(requested: &Path) -> PathBuf {
    if requested.exists() {
        let path = std::path::absolute(requested).unwrap_or_else(|_| requested.to_path_buf());
        debug!("Using handler at {}", path.display());
        return path;
    }

    if is_bare_command(requested) {
        match which::which(requested) {
            Ok(found) => {
                debug!(
                    "Resolved handler {} on PATH: {}",
                    requested.display(),
                    found.display()
                );
                return found;
            }
            Err(e) => {
                warn!("Handler {} not found on PATH: {e}", requested.display());
                return requested.to_path_buf();
            }
        }
    }

    warn!(
        "Handler does not exist: {}, every task will fail to start",
        requested.display()
    );
    requested.to_path_buf()
}

fn is_bare_command(path: &Path) -> bool {
    let mut components = path.components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command_detection() {
        assert!(is_bare_command(Path::new("download_script.sh")));
        assert!(!is_bare_command(Path::new("./download_script.sh")));
        assert!(!is_bare_command(Path::new("dataset/download_script.sh")));
        assert!(!is_bare_command(Path::new("/usr/bin/env")));
        assert!(!is_bare_command(Path::new("")));
    }

    #[test]
    fn test_existing_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("download_script.sh");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();

        assert_eq!(resolve_handler(&script), script);
    }

    #[test]
    fn test_missing_path_is_returned_unchanged() {
        let missing = Path::new("/nonexistent/graphfetch/download_script.sh");
        assert_eq!(resolve_handler(missing), missing);
    }

    #[test]
    fn test_unknown_bare_command_is_returned_unchanged() {
        let name = Path::new("graphfetch-no-such-handler-7f3a");
        assert_eq!(resolve_handler(name), name);
    }

    #[cfg(unix)]
    #[test]
    fn test_bare_command_found_on_path() {
        let resolved = resolve_handler(Path::new("sh"));
        assert!(resolved.is_absolute(), "{}", resolved.display());
    }
}
