//! End-of-run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Logs a one-line summary followed by every non-zero counter.
pub fn log_final_statistics(stats: &ProcessingStats, elapsed_seconds: f64) {
    let requested = stats.get_info_count(InfoType::ResolutionRequested);
    let resolved = stats.total_resolved();
    let failed = stats.get_info_count(InfoType::ResolutionFailed);

    info!(
        "Resolved {} of {} URL{} ({} failed) in {:.1}s",
        resolved,
        requested,
        if requested == 1 { "" } else { "s" },
        failed,
        elapsed_seconds
    );

    let total_errors = stats.total_errors();
    if total_errors > 0 {
        info!("Probe transport errors ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    for info_type in InfoType::iter() {
        let count = stats.get_info_count(info_type);
        if count > 0 {
            info!("   {}: {}", info_type.as_str(), count);
        }
    }
}
