//! The sorted task list a UI displays, on top of a [`TaskSource`]

use std::error::Error;

use crate::ordering::sort_tasks;
use crate::task::{Task, TaskId};
use crate::traits::TaskSource;

/// A local, sorted snapshot of the tasks held by a source.
///
/// Completion toggles are optimistic: the local copy is flipped and re-sorted before the source
/// is even contacted, so a UI re-rendering from [`tasks`](TaskList::tasks) reacts immediately.
/// If the source then refuses the update, the local flip is rolled back, so the display never
/// keeps showing a state the server has rejected.
///
/// The source is injected at construction, and owned by this list afterwards.
pub struct TaskList<S: TaskSource> {
    source: S,
    tasks: Vec<Task>,
}

impl<S: TaskSource> TaskList<S> {
    /// Create an empty list over this source. Call [`refresh`](TaskList::refresh) to populate it.
    pub fn new(source: S) -> Self {
        Self {
            source,
            tasks: Vec::new(),
        }
    }

    /// The current snapshot, in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Replace the snapshot with the authoritative server state, sorted
    pub async fn refresh(&mut self) -> Result<(), Box<dyn Error>> {
        let mut tasks = self.source.list_tasks().await?;
        sort_tasks(&mut tasks);
        self.tasks = tasks;
        Ok(())
    }

    /// Store a new task on the source, then refresh from it
    pub async fn add(&mut self, task: Task) -> Result<(), Box<dyn Error>> {
        self.source.create_task(&task).await?;
        self.refresh().await
    }

    /// Toggle the completion status of the task with this ID.
    ///
    /// The local snapshot is updated (and re-sorted) before the source is asked to persist the
    /// change. If persisting fails, the toggle is rolled back and the error returned.
    pub async fn toggle_completed(&mut self, id: &TaskId) -> Result<(), Box<dyn Error>> {
        let task = match self.tasks.iter_mut().find(|t| t.id() == id) {
            None => return Err(format!("No task with ID {}", id).into()),
            Some(task) => task,
        };

        task.toggle_completed();
        let updated = task.clone();
        sort_tasks(&mut self.tasks);

        if let Err(err) = self.source.update_task(&updated).await {
            log::warn!("Update of task {} refused by the source, rolling back: {}", id, err);
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) {
                task.toggle_completed();
            }
            sort_tasks(&mut self.tasks);
            return Err(err);
        }

        Ok(())
    }
}
