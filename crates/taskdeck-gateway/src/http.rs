use async_trait::async_trait;
use tracing::debug;

use taskdeck_model::{NewTask, Task, TaskId};

use crate::config::{GatewayConfig, UpdateStyle};
use crate::error::GatewayError;
use crate::gateway::TaskGateway;

/// reqwest-backed gateway against the mock REST fixture.
pub struct HttpGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn collection_url(&self) -> String {
        format!("{}/task.json", self.config.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}/task/{}.json", self.config.base_url, id)
    }

    fn update_url(&self, id: TaskId) -> String {
        match self.config.update_style {
            UpdateStyle::Collection => self.collection_url(),
            UpdateStyle::Item => self.item_url(id),
        }
    }
}

#[async_trait]
impl TaskGateway for HttpGateway {
    async fn list(&self) -> Result<Vec<Task>, GatewayError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let tasks: Vec<Task> = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidBody(format!("{e}, body: {body}")))?;

        debug!(count = tasks.len(), "fetched task list");
        Ok(tasks)
    }

    async fn create(&self, task: &NewTask) -> Result<(), GatewayError> {
        // Response body is ignored; the fixture echoes nothing useful.
        self.client
            .post(self.collection_url())
            .json(task)
            .send()
            .await?
            .error_for_status()?;

        debug!(title = %task.title, "created task remotely");
        Ok(())
    }

    async fn update(&self, task: &Task) -> Result<(), GatewayError> {
        self.client
            .put(self.update_url(task.id))
            .json(task)
            .send()
            .await?
            .error_for_status()?;

        debug!(id = %task.id, "updated task remotely");
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), GatewayError> {
        self.client
            .delete(self.item_url(id))
            .send()
            .await?
            .error_for_status()?;

        debug!(%id, "deleted task remotely");
        Ok(())
    }
}
