//! This is an example of how pocket-todo can be used.
//! This binary fetches the task list and toggles the completion status of every task it finds.

use std::error::Error;

use pocket_todo::{Client, TaskList};

// Edit these constants to point to your own task API deployment
const URL: &str = "https://my.task.api/prod/";
const API_KEY: &str = "da2-EXAMPLEEXAMPLE";

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("This example toggles the completion status of every task on the server.");
    println!("Make sure you have edited the URL and API_KEY constants in this file.");
    println!("You can also set the RUST_LOG environment variable to display more info about the requests.");
    println!();

    toggle_all_tasks(&mut build_list().unwrap()).await.unwrap();
}

fn build_list() -> Result<TaskList<Client>, Box<dyn Error>> {
    let client = Client::new(URL, API_KEY)?;
    Ok(TaskList::new(client))
}

async fn toggle_all_tasks(list: &mut TaskList<Client>) -> Result<(), Box<dyn Error>> {
    list.refresh().await?;

    let ids: Vec<_> = list.tasks().iter().map(|task| task.id().clone()).collect();
    for id in &ids {
        list.toggle_completed(id).await?;
    }

    println!("{} tasks toggled.", ids.len());
    for task in list.tasks() {
        let check = if task.completed() { "✓" } else { " " };
        let due = task.due().map(|d| d.to_string()).unwrap_or_default();
        println!("  {} {}\t{}", check, task.description(), due);
    }

    Ok(())
}
