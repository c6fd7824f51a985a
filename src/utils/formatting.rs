//! Text formatting utilities for the status bar.

use accordion::ImageState;
use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory())
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Summarizes panel image states, e.g. `"Images: 4 loaded, 1 loading, 1 failed"`.
pub fn format_image_summary<'a>(states: impl IntoIterator<Item = &'a ImageState>) -> String {
    let (mut loaded, mut loading, mut failed) = (0, 0, 0);
    for state in states {
        match state {
            ImageState::Loaded(_) => loaded += 1,
            ImageState::Unresolved | ImageState::Loading => loading += 1,
            ImageState::Failed => failed += 1,
        }
    }

    let mut parts = vec![format!("{} loaded", loaded)];
    if loading > 0 {
        parts.push(format!("{} loading", loading));
    }
    if failed > 0 {
        parts.push(format!("{} failed", failed));
    }
    format!("Images: {}", parts.join(", "))
}
