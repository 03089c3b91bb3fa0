use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// compiler-style tools.
///
/// - `Success` (0): Command completed, nothing went wrong
/// - `Failure` (1): Command completed but some input failed or was rejected
/// - `Error` (2): Command failed due to internal error (bad usage, config error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
