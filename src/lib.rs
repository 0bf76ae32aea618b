//! This crate provides the client-side logic of a small single-user to-do list.
//!
//! All persistence lives behind a remote task API, reachable through the [`client`] module. The
//! crate itself owns what the server does not: the display order of the list (the [`ordering`]
//! module), human-readable due-date labels (the [`date_label`] module), creation-form validation
//! (the [`form`] module), and optimistic completion toggles (the [`list`] module).
//!
//! The remote API is abstracted behind the [`TaskSource`](traits::TaskSource) trait, so anything
//! built on top of it can be tested against the [`in_memory_source`] module instead of a server.

pub mod traits;

mod task;
pub use task::{Priority, Task, TaskId};
pub mod ordering;
pub use ordering::sort_tasks;
pub mod date_label;
pub mod form;
pub mod list;
pub use list::TaskList;

pub mod client;
pub use client::Client;
pub mod in_memory_source;
pub use in_memory_source::InMemorySource;
pub mod mock_behaviour;
