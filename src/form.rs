//! The "create a task" form, with explicit per-field validation state

use chrono::NaiveDate;

use crate::date_label::parse_date_only;
use crate::task::{Priority, Task};

/// The validation state of one form field.
///
/// This replaces the usual pile of per-field booleans: a field is either untouched, known-valid,
/// or known-invalid with a reason that can be shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldState {
    /// The user has not interacted with this field yet
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }

    /// The reason this field is invalid, if it is
    pub fn error(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}

/// A task being filled in, not submitted yet.
///
/// The description and the due date are required, the priority is optional. Submission (i.e.
/// [`build`](TaskForm::build)) is only allowed once every required field is valid; until then,
/// the per-field states say what is missing or wrong.
#[derive(Debug)]
pub struct TaskForm {
    description: String,
    description_state: FieldState,
    due: Option<NaiveDate>,
    due_state: FieldState,
    priority: Option<Priority>,
}

impl TaskForm {
    /// An empty form. Both required fields start untouched.
    pub fn new() -> Self {
        Self {
            description: String::new(),
            description_state: FieldState::Untouched,
            due: None,
            due_state: FieldState::Untouched,
            priority: None,
        }
    }

    /// A form with the due date pre-filled (the web client pre-fills it with today)
    pub fn with_due(due: NaiveDate) -> Self {
        let mut form = Self::new();
        form.set_due(due);
        form
    }

    pub fn description_state(&self) -> &FieldState { &self.description_state }
    pub fn due_state(&self) -> &FieldState         { &self.due_state         }
    pub fn due(&self) -> Option<NaiveDate>         { self.due                }
    pub fn priority(&self) -> Option<Priority>     { self.priority           }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
        self.description_state = if description.is_empty() {
            FieldState::Invalid("The task description must not be empty".to_string())
        } else {
            FieldState::Valid
        };
    }

    pub fn set_due(&mut self, due: NaiveDate) {
        self.due = Some(due);
        self.due_state = FieldState::Valid;
    }

    /// Set the due date from its text representation, as typed by the user
    pub fn set_due_from_str(&mut self, raw: &str) {
        match parse_date_only(raw) {
            Ok(date) => self.set_due(date),
            Err(err) => {
                self.due = None;
                self.due_state = FieldState::Invalid(format!("'{}' is not a valid date: {}", raw, err));
            }
        }
    }

    /// Remove the due date. Since a due date is required at creation, this makes the field invalid.
    pub fn clear_due(&mut self) {
        self.due = None;
        self.due_state = FieldState::Invalid("A due date is required".to_string());
    }

    /// Select a priority, or deselect it when it is already the active one
    pub fn toggle_priority(&mut self, priority: Priority) {
        if self.priority == Some(priority) {
            self.priority = None;
        } else {
            self.priority = Some(priority);
        }
    }

    /// Whether every required field is valid
    pub fn is_ready(&self) -> bool {
        self.description_state.is_valid() && self.due_state.is_valid()
    }

    /// Compose the field states into a submittable task (with a freshly generated ID),
    /// or the list of reasons the form cannot be submitted yet.
    pub fn build(&self) -> Result<Task, Vec<String>> {
        let mut reasons = Vec::new();

        match &self.description_state {
            FieldState::Valid => {}
            FieldState::Untouched => reasons.push("The task description has not been filled in".to_string()),
            FieldState::Invalid(reason) => reasons.push(reason.clone()),
        }
        match &self.due_state {
            FieldState::Valid => {}
            FieldState::Untouched => reasons.push("The due date has not been filled in".to_string()),
            FieldState::Invalid(reason) => reasons.push(reason.clone()),
        }

        if reasons.is_empty() == false {
            return Err(reasons);
        }
        Ok(Task::new(self.description.clone(), self.due, self.priority))
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}
