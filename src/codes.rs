use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Return codes librtas itself produces, as opposed to statuses passed
/// through from firmware. All of them sit below -1000.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::FromRepr,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
)]
#[repr(i32)]
pub enum LibrtasError {
    #[strum(serialize = "RTAS_KERNEL_INT")]
    KernelInterface = -1001,
    #[strum(serialize = "RTAS_KERNEL_IMP")]
    KernelImplementation = -1002,
    #[strum(serialize = "RTAS_PERM")]
    Permission = -1003,
    #[strum(serialize = "RTAS_NO_MEM")]
    NoMemory = -1004,
    #[strum(serialize = "RTAS_NO_LOWMEM")]
    NoLowMemory = -1005,
    #[strum(serialize = "RTAS_FREE_ERR")]
    FreeError = -1006,
    #[strum(serialize = "RTAS_TIMEOUT")]
    Timeout = -1007,
    #[strum(serialize = "RTAS_IO_ASSERT")]
    IoAssert = -1098,
    #[strum(serialize = "RTAS_UNKNOWN_OP")]
    UnknownOp = -1099,
}

pub const RTAS_KERNEL_INT: i32 = LibrtasError::KernelInterface as i32;
pub const RTAS_KERNEL_IMP: i32 = LibrtasError::KernelImplementation as i32;
pub const RTAS_PERM: i32 = LibrtasError::Permission as i32;
pub const RTAS_NO_MEM: i32 = LibrtasError::NoMemory as i32;
pub const RTAS_NO_LOWMEM: i32 = LibrtasError::NoLowMemory as i32;
pub const RTAS_FREE_ERR: i32 = LibrtasError::FreeError as i32;
pub const RTAS_TIMEOUT: i32 = LibrtasError::Timeout as i32;
pub const RTAS_IO_ASSERT: i32 = LibrtasError::IoAssert as i32;
pub const RTAS_UNKNOWN_OP: i32 = LibrtasError::UnknownOp as i32;

impl LibrtasError {
    /// Exact-match lookup; anything outside the closed set is `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Fixed message for this code.
    ///
    /// The wording (including "nonexistant") is what powerpc-utils has always
    /// printed; scripts grep for it, so it must not be corrected.
    pub fn message(self) -> &'static str {
        match self {
            Self::KernelInterface => "No kernel interface to firmware",
            Self::KernelImplementation => "No kernel implementation of function",
            Self::Permission => "Non-root caller",
            Self::NoMemory => "Out of heap memory",
            Self::NoLowMemory => "Kernel out of low memory",
            Self::FreeError => "Attempt to free nonexistant RMO buffer",
            Self::Timeout => "RTAS delay exceeded specified timeout",
            Self::IoAssert => "Unexpected librtas I/O error",
            Self::UnknownOp => "No firmware implementation of function",
        }
    }

    /// C macro name from `librtas.h`, e.g. `RTAS_PERM`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a symbolic name such as `"RTAS_TIMEOUT"`.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse::<Self>().map_err(|e| Error::Parse {
            reason: format!("{name:?} is not a librtas status name: {e}"),
        })
    }
}

impl TryFrom<i32> for LibrtasError {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(Error::UnknownCode { code })
    }
}

impl From<LibrtasError> for i32 {
    fn from(err: LibrtasError) -> Self {
        err.code()
    }
}

impl fmt::Display for LibrtasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LibrtasError {}

impl Serialize for LibrtasError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn codes_match_librtas_header() {
        let expected: &[(LibrtasError, i32)] = &[
            (LibrtasError::KernelInterface, -1001),
            (LibrtasError::KernelImplementation, -1002),
            (LibrtasError::Permission, -1003),
            (LibrtasError::NoMemory, -1004),
            (LibrtasError::NoLowMemory, -1005),
            (LibrtasError::FreeError, -1006),
            (LibrtasError::Timeout, -1007),
            (LibrtasError::IoAssert, -1098),
            (LibrtasError::UnknownOp, -1099),
        ];
        for (err, code) in expected {
            assert_eq!(err.code(), *code, "wrong value for {}", err.name());
            assert_eq!(LibrtasError::from_code(*code), Some(*err));
        }
        assert_eq!(LibrtasError::iter().count(), expected.len());
    }

    #[test]
    fn codes_outside_the_set_are_rejected() {
        for code in [0, 1, -1, -3, -1000, -1008, -1097, -1100, 42, -9999, i32::MIN, i32::MAX] {
            assert_eq!(LibrtasError::from_code(code), None, "code {code}");
        }
    }

    #[test]
    fn try_from_reports_unknown_code() {
        assert_eq!(
            LibrtasError::try_from(-1003).unwrap(),
            LibrtasError::Permission
        );
        let err = LibrtasError::try_from(42).unwrap_err();
        assert!(matches!(err, Error::UnknownCode { code: 42 }));
        assert_eq!(err.to_string(), "unknown librtas status code: 42");
    }

    #[test]
    fn symbolic_names_roundtrip() {
        for err in LibrtasError::iter() {
            assert_eq!(LibrtasError::from_name(err.name()).unwrap(), err);
            assert_eq!(err.as_ref(), err.name());
        }
        assert_eq!(LibrtasError::Permission.name(), "RTAS_PERM");
        assert!(matches!(
            LibrtasError::from_name("RTAS_BOGUS"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn display_is_the_fixed_message() {
        assert_eq!(LibrtasError::Permission.to_string(), "Non-root caller");
        assert_eq!(
            LibrtasError::FreeError.to_string(),
            "Attempt to free nonexistant RMO buffer"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(LibrtasError::Timeout);
        assert_eq!(boxed.to_string(), "RTAS delay exceeded specified timeout");
    }

    #[test]
    fn serializes_as_symbolic_name() {
        let json = serde_json::to_string(&LibrtasError::UnknownOp).unwrap();
        assert_eq!(json, "\"RTAS_UNKNOWN_OP\"");
    }

    #[test]
    fn constants_follow_the_enum() {
        assert_eq!(RTAS_KERNEL_INT, -1001);
        assert_eq!(RTAS_PERM, -1003);
        assert_eq!(RTAS_IO_ASSERT, -1098);
        assert_eq!(RTAS_UNKNOWN_OP, -1099);
        assert_eq!(i32::from(LibrtasError::NoLowMemory), RTAS_NO_LOWMEM);
    }
}
