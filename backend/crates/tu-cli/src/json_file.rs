use crate::{CliError, Result as CliResult};

use std::path::Path;

use serde_json::{Map, Value};

/// Read a file holding a single JSON object
#[track_caller]
pub fn read_json_object(path: &Path) -> CliResult<Map<String, Value>> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| CliError::io(path.to_path_buf(), e))?;

    match serde_json::from_str(&contents).map_err(|e| CliError::json(path.to_path_buf(), e))? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::not_an_object(path.to_path_buf())),
    }
}
