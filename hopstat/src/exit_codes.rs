#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Invalid CLI input (unknown flags, malformed targets, out-of-range values).
    InvalidInput = 30,

    /// Runtime failure (e.g. the CSV export could not be written).
    RuntimeError = 40,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Exit code for a failed argument parse. Help/version output is a success.
    #[must_use]
    pub fn from_clap_error(err: &clap::Error) -> Self {
        use clap::error::ErrorKind;
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Self::Success,
            _ => Self::InvalidInput,
        }
    }
}
