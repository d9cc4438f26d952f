//! Process exit codes
//!
//! - `0`: success
//! - `2`: tool error (bad configuration, unreadable input, failed output)

/// Everything ran and the reports were written
pub const SUCCESS: i32 = 0;

/// htmlrep itself failed; no reliable report was produced
pub const TOOL_ERROR: i32 = 2;

/// Terminate the process with a well-known exit code
pub mod exit {
    use super::TOOL_ERROR;

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR)
    }
}
