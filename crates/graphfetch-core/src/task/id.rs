//! Task identifier type.
//!
//! Pure data type with no I/O dependencies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between a dataset name and its size-limited variant.
pub const SIZE_SEPARATOR: char = '@';

/// Errors produced when parsing a task identifier.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TaskIdError {
    /// The identifier was empty or whitespace only.
    #[error("task identifier must not be empty")]
    Empty,
}

/// Identifier of one unit of work, e.g. `"cnr-2000"` or `"uk-2007-05@100000"`.
///
/// The runner treats the identifier as opaque and hands it to the handler
/// byte for byte. [`TaskId::name`] and [`TaskId::size`] split the `name@size`
/// convention for log fields; they never change what is passed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Create a task identifier, rejecting empty input.
    pub fn new(raw: impl Into<String>) -> Result<Self, TaskIdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TaskIdError::Empty);
        }
        Ok(Self(raw))
    }

    /// The identifier exactly as it will be passed to the handler.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dataset name without any `@<size>` suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        self.split().0
    }

    /// Size suffix after the last `@`, if present and non-empty.
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.split().1
    }

    fn split(&self) -> (&str, Option<&str>) {
        match self.0.rsplit_once(SIZE_SEPARATOR) {
            Some((name, size)) if !name.is_empty() && !size.is_empty() => (name, Some(size)),
            _ => (&self.0, None),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TaskId {
    type Err = TaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
