use serde::Serialize;
use std::process::ExitCode;

use crate::error::ToolError;

/// Outcome classes of a run, numbered after the BSD `sysexits` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    InputUnavailable,
    Internal,
    OutputUnavailable,
    InvalidConfig,
}

impl Status {
    pub fn code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::InputUnavailable => 66,
            Status::Internal => 70,
            Status::OutputUnavailable => 73,
            Status::InvalidConfig => 78,
        }
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

pub fn make_exit_code(result: Result<(), ToolError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(Status::Ok.code()),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.status.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_nonzero_codes() {
        for status in [
            Status::InputUnavailable,
            Status::Internal,
            Status::OutputUnavailable,
            Status::InvalidConfig,
        ] {
            assert_ne!(status.code(), 0, "{:?}", status);
        }
        assert_eq!(Status::Ok.code(), 0);
    }
}
