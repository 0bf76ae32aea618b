use std::error::Error;

use async_trait::async_trait;

use crate::task::Task;

/// A place tasks can be stored to and fetched from.
///
/// The "real" implementor is [`Client`](crate::client::Client), which talks to the remote task
/// API. [`InMemorySource`](crate::in_memory_source::InMemorySource) implements it over a plain
/// map, so that code built on top of a source can be tested without a server.
#[async_trait]
pub trait TaskSource {
    /// Store a brand new task. Its ID has already been generated by the caller.
    async fn create_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>>;

    /// Fetch every task this source contains, in no particular order
    async fn list_tasks(&mut self) -> Result<Vec<Task>, Box<dyn Error>>;

    /// Overwrite an existing task with this (full) record, matched by its ID
    async fn update_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>>;
}
