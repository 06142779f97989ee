//! Tracing helpers for command execution

/// Trace elapsed time for a phase when `--verbose` is set
///
/// Usage:
/// ```ignore
/// trace_command!(cli, start, "load_network");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
