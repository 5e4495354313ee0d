//! Reading a check result document from a file or stdin.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::check::CheckResult;
use crate::error::{DepcheckError, Result};

/// Parse a check result document.
pub fn parse_document(content: &str) -> Result<CheckResult> {
    serde_json::from_str(content).map_err(|e| DepcheckError::InvalidInput {
        message: e.to_string(),
    })
}

/// Read a document from `path`, or from stdin when no path is given.
///
/// Stdin attached to a terminal is refused rather than waited on.
pub fn read_document(path: Option<&Path>) -> Result<CheckResult> {
    let content = match path {
        Some(path) => {
            if !path.exists() {
                return Err(DepcheckError::InputNotFound {
                    path: path.to_path_buf(),
                });
            }
            fs::read_to_string(path)?
        }
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(DepcheckError::NoInput);
            }
            let mut content = String::new();
            stdin.read_to_string(&mut content)?;
            content
        }
    };
    parse_document(&content)
}
