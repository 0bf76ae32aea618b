//! An in-memory task source, mostly useful to test code built on a [`TaskSource`]
//! without a remote server.

use std::collections::HashMap;
use std::error::Error;

use async_trait::async_trait;

use crate::mock_behaviour::MockBehaviour;
use crate::task::{Task, TaskId};
use crate::traits::TaskSource;

/// A task source backed by a plain map.
///
/// It behaves like the remote API (create refuses duplicate IDs, update refuses unknown ones),
/// and its [`MockBehaviour`] can be tweaked to make chosen operations fail, so that callers can
/// exercise their error paths.
#[derive(Default, Debug)]
pub struct InMemorySource {
    tasks: HashMap<TaskId, Task>,
    mock_behaviour: MockBehaviour,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mock_behaviour(mock_behaviour: MockBehaviour) -> Self {
        Self {
            tasks: HashMap::new(),
            mock_behaviour,
        }
    }

    pub fn mock_behaviour_mut(&mut self) -> &mut MockBehaviour {
        &mut self.mock_behaviour
    }

    /// How many tasks this source currently holds
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Direct read access, bypassing the mock behaviour. Handy for test assertions.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }
}

#[async_trait]
impl TaskSource for InMemorySource {
    async fn create_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        self.mock_behaviour.can_create_task()?;

        if self.tasks.contains_key(task.id()) {
            return Err(format!("A task with ID {} already exists", task.id()).into());
        }
        self.tasks.insert(task.id().clone(), task.clone());
        Ok(())
    }

    async fn list_tasks(&mut self) -> Result<Vec<Task>, Box<dyn Error>> {
        self.mock_behaviour.can_list_tasks()?;

        Ok(self.tasks.values().cloned().collect())
    }

    async fn update_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        self.mock_behaviour.can_update_task()?;

        match self.tasks.get_mut(task.id()) {
            None => Err(format!("No task with ID {}", task.id()).into()),
            Some(stored) => {
                *stored = task.clone();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_create_list_update() {
        let mut source = InMemorySource::new();
        assert!(source.is_empty());

        let mut task = Task::new("buy milk".to_string(), None, None);
        source.create_task(&task).await.unwrap();
        assert_eq!(source.len(), 1);

        // Duplicate IDs are refused
        assert!(source.create_task(&task).await.is_err());

        task.set_completed(true);
        source.update_task(&task).await.unwrap();
        let fetched = source.list_tasks().await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].completed(), true);
    }

    #[tokio::test]
    async fn test_update_unknown_task() {
        let mut source = InMemorySource::new();
        let task = Task::new("not stored".to_string(), None, None);
        assert!(source.update_task(&task).await.is_err());
    }

    #[tokio::test]
    async fn test_mocked_failures() {
        let mut source = InMemorySource::with_mock_behaviour(MockBehaviour::fail_now(1));
        let task = Task::new("flaky".to_string(), None, None);
        assert!(source.create_task(&task).await.is_err());
        assert!(source.create_task(&task).await.is_ok());
    }
}
