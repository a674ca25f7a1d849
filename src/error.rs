use std::env;
use std::fmt::{self, Debug, Display};
use std::io;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        io_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

impl Error {
    /// Internal failures live below 100, caller mistakes at 100 and above.
    pub fn is_internal(&self) -> bool {
        matches!(self.code, 1..=99)
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn invalid_invocation_error() -> Error {
    Error {
        code: 102,
        message: "invalid invocation".into(),
    }
}

pub fn invalid_path_error() -> Error {
    Error {
        code: 110,
        message: "path needs at least an origin and a destination".into(),
    }
}

pub fn invalid_distance_error() -> Error {
    Error {
        code: 111,
        message: "distance must not be negative".into(),
    }
}

pub fn invalid_tier_error() -> Error {
    Error {
        code: 112,
        message: "tier fare multiplier must be positive".into(),
    }
}

pub fn out_of_region_error() -> Error {
    Error {
        code: 113,
        message: "location is outside the service region".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn config_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "config error".into(),
    }
}

pub fn io_error(_: io::Error) -> Error {
    Error {
        code: 3,
        message: "io error".into(),
    }
}

pub fn serialization_error(_: serde_json::Error) -> Error {
    Error {
        code: 4,
        message: "serialization error".into(),
    }
}

#[test]
fn caller_errors_are_not_internal() {
    assert!(!invalid_path_error().is_internal());
    assert!(!out_of_region_error().is_internal());
    assert!(config_error("bad").is_internal());
}
