//! Size measurement for cleanup targets.
//!
//! Sizes are for human display only, so measurement delegates to `du -sh`
//! and reports whatever compact magnitude it prints ("12G", "340M"). A
//! missing path is an expected state, not an error: most cache directories
//! simply haven't been created yet. Utility failures and timeouts degrade
//! to an error marker and never propagate.

use crate::paths::expand_home;
use crate::proc;
use std::time::Duration;

/// Marker for a path that does not exist.
pub const NOT_FOUND: &str = "Not found";

/// Marker for a measurement that failed or timed out.
pub const MEASURE_ERROR: &str = "Error";

/// Marker for the available-space display when `df` fails.
pub const UNKNOWN: &str = "Unknown";

/// Wall-clock bound for one `du` invocation.
const DU_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of measuring one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Human-compact size string, or one of the marker constants.
    pub display: String,
    /// Whether the resolved path exists on disk.
    pub exists: bool,
}

/// Measure the recursive size of `path` (which may carry a `~` placeholder).
pub fn measure(path: &str) -> Measurement {
    let expanded = expand_home(path);

    if !expanded.exists() {
        return Measurement {
            display: NOT_FOUND.to_string(),
            exists: false,
        };
    }

    let expanded = expanded.to_string_lossy().into_owned();
    let display = match proc::run_with_timeout(&["du", "-sh", &expanded], DU_TIMEOUT) {
        Ok(out) if out.is_success() => parse_du_size(&out.stdout)
            .unwrap_or_else(|| MEASURE_ERROR.to_string()),
        _ => MEASURE_ERROR.to_string(),
    };

    Measurement {
        display,
        exists: true,
    }
}

/// Extract the size column from `du -sh` output ("12G\t/path").
fn parse_du_size(stdout: &str) -> Option<String> {
    stdout
        .split_whitespace()
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Available space on the root filesystem, for the header and footer lines.
///
/// Best-effort: any failure yields the "Unknown" marker.
pub fn available_space() -> String {
    let out = match proc::run_with_timeout(&["df", "-h", "/"], DU_TIMEOUT) {
        Ok(out) if out.is_success() => out,
        _ => return UNKNOWN.to_string(),
    };

    // Second line, fourth column: Filesystem Size Used Avail ...
    out.stdout
        .lines()
        .nth(1)
        .and_then(|line| line.split_whitespace().nth(3))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}
