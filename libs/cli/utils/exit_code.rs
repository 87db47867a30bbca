use core::fmt::Debug;
use std::process::Termination;

/// Exit codes of the `taxdoc` binary, following `<sysexits.h>` where one applies.
///
/// Implements `std::process::Termination` so `main` can return it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The program executed successfully. (EX_OK)
    Success = 0,

    /// A generic or unspecified error occurred, e.g. the data file couldn't be written.
    Error = 1,

    /// The input data was incorrect in some way: invalid tax year, empty
    /// document name, unknown document. (EX_DATAERR)
    DataError = 65,

    /// The configuration file couldn't be read or names an unknown profile. (EX_CONFIG)
    ConfigError = 78,
}

impl ExitCode {
    /// Returns the integer value of the exit code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Allows `ExitCode` to be returned from `main`.
impl Termination for ExitCode {
    fn report(self) -> std::process::ExitCode {
        self.code().into()
    }
}
