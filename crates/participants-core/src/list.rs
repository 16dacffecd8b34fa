//! Loading call lists from disk

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{ParticipantsError, Result};
use crate::types::{CallList, ParticipantList};

/// Split text into numbers, one per line, trimming and skipping blank lines
pub fn parse_numbers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a JSON call list.
///
/// Accepts a full call list object or a bare array of numbers. A missing
/// id falls back to `fallback_name`, which also names a bare array.
pub fn parse_call_list_json(raw: &str, fallback_name: &str) -> Result<CallList> {
    let value: Value = serde_json::from_str(raw)?;

    let list = match value {
        Value::Object(_) => {
            let mut list = serde_json::from_value::<CallList>(value)?;
            if list.id.trim().is_empty() {
                list.id = fallback_name.to_string();
            }
            list
        }
        Value::Array(_) => {
            let numbers: Vec<String> = serde_json::from_value(value)?;
            CallList::new(fallback_name, fallback_name, ParticipantList::new(numbers))
        }
        other => {
            return Err(ParticipantsError::InvalidFormat {
                expected: "call list object or array of numbers".to_string(),
                actual: json_kind(&other).to_string(),
            })
        }
    };

    let blanks = list
        .participants()
        .iter()
        .filter(|n| n.trim().is_empty())
        .count();
    if blanks > 0 {
        warn!(list = %list.id, blanks, "call list contains blank numbers");
    }

    Ok(list)
}

/// Load a call list from a `.json` file or a plain-text file with one
/// number per line
pub fn load_call_list<P: AsRef<Path>>(path: P) -> Result<CallList> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ParticipantsError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "participants".to_string());

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let list = if is_json {
        parse_call_list_json(&content, &stem)?
    } else {
        CallList::new(&stem, &stem, ParticipantList::new(parse_numbers(&content)))
    };

    debug!(
        path = %path.display(),
        count = list.participants().len(),
        "loaded call list"
    );

    Ok(list)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
