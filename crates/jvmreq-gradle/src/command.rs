use jvmreq_core::{LocalFs, Os};
use tracing::{debug, warn};

/// Platform wrapper invocation: `gradlew.bat` on Windows, `./gradlew` elsewhere
#[must_use]
pub const fn gradle_wrapper_file_name_for(os: Os) -> &'static str {
    if os.is_windows() {
        "gradlew.bat"
    } else {
        "./gradlew"
    }
}

#[must_use]
pub const fn gradle_wrapper_file_name() -> &'static str {
    gradle_wrapper_file_name_for(Os::current())
}

/// Check that `path` is a runnable wrapper script and return it unchanged
///
/// Missing paths and non-files yield `None`. On non-Windows hosts a file that others
/// cannot execute is made executable (`mode | 0o111`); a failed chmod is logged and the
/// path is still returned.
pub async fn prepare_gradle_command(fs: &dyn LocalFs, os: Os, path: &str) -> Option<String> {
    let stat = match fs.stat_local_file(path).await {
        Ok(Some(stat)) => stat,
        Ok(None) => {
            debug!(path, "gradle wrapper not found");
            return None;
        }
        Err(e) => {
            warn!(path, error = %e, "failed to stat gradle wrapper");
            return None;
        }
    };

    if !stat.is_file {
        debug!(path, "gradle wrapper is not a file");
        return None;
    }

    if !os.is_windows() && !stat.is_executable_by_others() {
        let mode = stat.mode | 0o111;
        debug!(path, mode = %format!("{mode:o}"), "making gradle wrapper executable");
        if let Err(e) = fs.chmod_local_file(path, mode).await {
            warn!(path, error = %e, "failed to make gradle wrapper executable");
        }
    }

    Some(path.to_string())
}
