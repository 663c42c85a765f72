use crate::exit::Status;
use serde::Serialize;
use serde_json;
use std::error;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct ToolError {
    pub msg: String,
    pub status: Status,
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self).map_err(|_| fmt::Error)?;
        write!(f, "{}", json)
    }
}

impl error::Error for ToolError {}

impl ToolError {
    pub fn input_unavailable<T: std::fmt::Display>(msg: T) -> ToolError {
        ToolError {
            msg: msg.to_string(),
            status: Status::InputUnavailable,
        }
    }

    pub fn output_unavailable<T: std::fmt::Display>(msg: T) -> ToolError {
        ToolError {
            msg: msg.to_string(),
            status: Status::OutputUnavailable,
        }
    }

    pub fn invalid_config<T: std::fmt::Display>(msg: T) -> ToolError {
        ToolError {
            msg: msg.to_string(),
            status: Status::InvalidConfig,
        }
    }

    pub fn internal<T: std::fmt::Display>(msg: T) -> ToolError {
        ToolError {
            msg: msg.to_string(),
            status: Status::Internal,
        }
    }
}
