// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Error codes returned by the system support routines.

/// Errors reported by the few fallible operations in this crate.
///
/// The numbering follows the Tock kernel so that a board crate can forward
/// these values unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 0,
    /// The component is powered down
    OFF = 3,
    /// An invalid parameter was passed, or hardware is in an invalid state
    INVAL = 5,
    /// Operation or command is unsupported
    NOSUPPORT = 9,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ErrorCode::FAIL => "generic failure",
            ErrorCode::OFF => "component powered down",
            ErrorCode::INVAL => "invalid parameter or state",
            ErrorCode::NOSUPPORT => "unsupported operation",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn numbering_matches_kernel() {
        assert_eq!(usize::from(ErrorCode::FAIL), 0);
        assert_eq!(usize::from(ErrorCode::OFF), 3);
        assert_eq!(usize::from(ErrorCode::INVAL), 5);
        assert_eq!(usize::from(ErrorCode::NOSUPPORT), 9);
    }
}
