//! Response — the uniform result type for board commands.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}

impl Response {
    pub fn ok(output: impl Into<String>) -> Response {
        Response::Ok {
            output: output.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Response {
        Response::Error {
            message: message.into(),
        }
    }
}
