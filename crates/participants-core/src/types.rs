//! Core type definitions for participant lists

use serde::{Deserialize, Serialize};

/// Ordered, read-only sequence of raw phone numbers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantList {
    numbers: Vec<String>,
}

impl ParticipantList {
    pub fn new(numbers: Vec<String>) -> Self {
        Self { numbers }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.numbers.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.numbers.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.numbers
    }
}

impl From<Vec<String>> for ParticipantList {
    fn from(numbers: Vec<String>) -> Self {
        Self::new(numbers)
    }
}

impl<'a> FromIterator<&'a str> for ParticipantList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

/// Lifecycle state of a call list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl ListStatus {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ListStatus::Active => "active",
            ListStatus::Completed => "completed",
            ListStatus::Paused => "paused",
        }
    }
}

/// A named list of numbers queued for dialing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallList {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub numbers: ParticipantList,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: ListStatus,
}

impl CallList {
    pub fn new(id: impl Into<String>, name: impl Into<String>, numbers: ParticipantList) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            numbers,
            created_at: None,
            status: ListStatus::Active,
        }
    }

    /// The participants backing this list
    pub fn participants(&self) -> &ParticipantList {
        &self.numbers
    }

    /// Format the creation timestamp as `DD/MM/YYYY HH:MM` in local time.
    ///
    /// Falls back to the raw string when it is not RFC 3339.
    pub fn format_created(&self) -> Option<String> {
        let created = self.created_at.as_deref()?;
        match chrono::DateTime::parse_from_rfc3339(created) {
            Ok(dt) => Some(
                dt.with_timezone(&chrono::Local)
                    .format("%d/%m/%Y %H:%M")
                    .to_string(),
            ),
            Err(_) => Some(created.to_string()),
        }
    }
}
