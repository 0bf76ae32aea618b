//! Task records, as stored by the remote task API

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// The unique identifier of a [`Task`].
///
/// IDs are generated by the client at creation time (the remote API stores whatever it is given),
/// and are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// The priority a user can assign to a task.
///
/// The wire format is a lowercase string. The remote API does not validate it, so lists fetched
/// from the server can contain anything (some revisions of the web client submitted an empty
/// string for "no priority"). Unknown values are mapped to "no priority" when deserializing,
/// which makes them sort last, after `low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// The rank of this priority as a sort key (lower ranks sort first).
    /// `None` (no priority, or an unrecognized wire value) ranks last.
    pub fn sort_rank(priority: Option<Priority>) -> u8 {
        match priority {
            Some(Priority::High) => 0,
            Some(Priority::Medium) => 1,
            Some(Priority::Low) => 2,
            None => 3,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("'{}' is not a valid priority", other)),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/// Deserialize a priority leniently: missing, null, empty or unrecognized values all
/// become `None` rather than an error, since remote records are not sanitized.
fn deserialize_lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// A to-do task.
///
/// This is the unit the remote API stores: updates re-submit the whole record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task ID, generated client-side
    id: TaskId,

    /// The display text of the task
    description: String,

    /// The day this task is due, if any.
    ///
    /// This is a calendar date with no time-of-day and no time zone. On the wire it is a
    /// `YYYY-MM-DD` string; it must never travel through a timestamp type, otherwise a
    /// client in a negative-UTC-offset zone would display the previous day.
    #[serde(rename = "date", default, skip_serializing_if = "Option::is_none")]
    due: Option<NaiveDate>,

    /// The priority the user assigned, if any
    #[serde(default, deserialize_with = "deserialize_lenient_priority")]
    priority: Option<Priority>,

    /// Whether this task has been completed
    #[serde(rename = "isCompleted", default)]
    completed: bool,
}

impl Task {
    /// Create a brand new task that is not on the server yet.
    /// This will pick a new (random) task ID.
    pub fn new(description: String, due: Option<NaiveDate>, priority: Option<Priority>) -> Self {
        Self::new_with_id(TaskId::random(), description, due, priority, false)
    }

    /// Create a task instance that may already exist on the server
    pub fn new_with_id(id: TaskId, description: String, due: Option<NaiveDate>,
                       priority: Option<Priority>, completed: bool) -> Self
    {
        Self { id, description, due, priority, completed }
    }

    pub fn id(&self) -> &TaskId                { &self.id          }
    pub fn description(&self) -> &str          { &self.description }
    pub fn due(&self) -> Option<NaiveDate>     { self.due          }
    pub fn priority(&self) -> Option<Priority> { self.priority     }
    pub fn completed(&self) -> bool            { self.completed    }

    pub fn set_description(&mut self, new_description: String) {
        self.description = new_description;
    }

    pub fn set_due(&mut self, new_due: Option<NaiveDate>) {
        self.due = new_due;
    }

    pub fn set_priority(&mut self, new_priority: Option<Priority>) {
        self.priority = new_priority;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Flip the completion flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
