//! This module provides a client to connect to the remote task API

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::task::Task;
use crate::traits::TaskSource;

/// The shape of the API's list response
#[derive(Debug, Deserialize)]
struct ListTasksResponse {
    items: Vec<Task>,
}

/// A task source that stores its data on a remote task API server.
///
/// The server exposes a small JSON API keyed by an API key:
/// * `POST {base}/tasks` creates the posted record,
/// * `GET {base}/tasks` lists every record,
/// * `PUT {base}/tasks/{id}` overwrites the record with this ID.
///
/// A `Client` is a plain value, constructed by whoever owns the application lifecycle and
/// passed to the code that needs it. There deliberately is no process-wide shared instance.
pub struct Client {
    url: Url,
    api_key: String,

    http: reqwest::Client,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>, T: ToString>(url: S, api_key: T) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;

        Ok(Self {
            url,
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
        })
    }

    fn tasks_url(&self) -> Result<Url, Box<dyn Error>> {
        Ok(self.url.join("tasks")?)
    }

    fn task_url(&self, task: &Task) -> Result<Url, Box<dyn Error>> {
        Ok(self.url.join(&format!("tasks/{}", task.id()))?)
    }
}

#[async_trait]
impl TaskSource for Client {
    async fn create_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        let url = self.tasks_url()?;
        log::debug!("Creating task {} on {}", task.id(), url);

        let res = self.http
            .post(url)
            .header("x-api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(task)
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unable to create task: server replied {}", res.status()).into());
        }
        Ok(())
    }

    async fn list_tasks(&mut self) -> Result<Vec<Task>, Box<dyn Error>> {
        let url = self.tasks_url()?;
        log::debug!("Fetching tasks from {}", url);

        let res = self.http
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unable to list tasks: server replied {}", res.status()).into());
        }

        let list: ListTasksResponse = res.json().await?;
        log::debug!("Fetched {} tasks", list.items.len());
        Ok(list.items)
    }

    async fn update_task(&mut self, task: &Task) -> Result<(), Box<dyn Error>> {
        let url = self.task_url(task)?;
        log::debug!("Updating task {} on {}", task.id(), url);

        let res = self.http
            .put(url)
            .header("x-api-key", &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(task)
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unable to update task: server replied {}", res.status()).into());
        }
        Ok(())
    }
}
