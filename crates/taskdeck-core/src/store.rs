use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing::warn;

use taskdeck_gateway::{GatewayError, TaskGateway};
use taskdeck_model::{NewTask, Task, TaskId};

use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::policy::SyncPolicy;

const MSG_ADDED: &str = "Task added successfully!";
const MSG_UPDATED: &str = "Task updated successfully!";
const MSG_DELETED: &str = "Task deleted successfully!";

/// In-memory task list with optimistic remote sync.
///
/// Mutations commit locally, emit a success notice, and then push the
/// change through the gateway according to the store's [`SyncPolicy`].
/// A failed sync never rolls the local state back.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<RwLock<StoreInner>>,
    gateway: Arc<dyn TaskGateway>,
    notifier: Arc<dyn Notifier>,
    policy: SyncPolicy,
    load_delay: Duration,
}

struct StoreInner {
    /// Insertion-ordered; edits replace in place.
    tasks: Vec<Task>,
    /// Next id to hand out. Monotonic, so deleted ids are never reused.
    next_id: u64,
    loading: bool,
}

enum SyncCall {
    Create(NewTask),
    Update(Task),
    Delete(TaskId),
}

impl TaskStore {
    pub fn new(gateway: Arc<dyn TaskGateway>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
                loading: false,
            })),
            gateway,
            notifier: Arc::new(TracingNotifier),
            policy: SyncPolicy::default(),
            load_delay: Duration::ZERO,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_policy(mut self, policy: SyncPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Artificial latency before the initial fetch, so a skeleton state is
    /// observable against a local fixture.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Fetch the full list from the gateway and replace the local one.
    ///
    /// A fetch failure is logged and leaves the list as it was (empty on
    /// first load); the loading flag clears on both paths. Returns the
    /// resulting snapshot.
    pub async fn load(&self) -> Vec<Task> {
        self.inner.write().unwrap().loading = true;

        if !self.load_delay.is_zero() {
            tokio::time::sleep(self.load_delay).await;
        }

        match self.gateway.list().await {
            Ok(tasks) => {
                let mut inner = self.inner.write().unwrap();
                inner.next_id = tasks.iter().map(|t| t.id.value()).max().unwrap_or(0) + 1;
                inner.tasks = tasks;
                inner.loading = false;
                inner.tasks.clone()
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch task list");
                let mut inner = self.inner.write().unwrap();
                inner.loading = false;
                inner.tasks.clone()
            }
        }
    }

    /// Append a new task under the next monotonic id.
    ///
    /// The returned task carries the assigned id. An `Err` under the
    /// awaited policy means the remote call failed; the local append and
    /// its notice have already happened.
    pub async fn create(&self, new: NewTask) -> Result<Task, GatewayError> {
        let task = {
            let mut inner = self.inner.write().unwrap();
            let id = TaskId::new(inner.next_id);
            inner.next_id += 1;
            let task = new.clone().into_task(id);
            inner.tasks.push(task.clone());
            task
        };

        self.notifier.notify(Notice::success(MSG_ADDED));
        self.sync(SyncCall::Create(new)).await?;
        Ok(task)
    }

    /// Replace the entry with a matching id, keeping its position.
    ///
    /// An unmatched id leaves the list untouched; the notice and the sync
    /// still run, mirroring the backend's indifference to unknown ids.
    pub async fn update(&self, task: Task) -> Result<(), GatewayError> {
        {
            let mut inner = self.inner.write().unwrap();
            if let Some(existing) = inner.tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task.clone();
            }
        }

        self.notifier.notify(Notice::success(MSG_UPDATED));
        self.sync(SyncCall::Update(task)).await
    }

    /// Remove the entry with a matching id.
    ///
    /// Deleting an id that is no longer present (a double click on the
    /// same row) is a complete no-op: no notice, no sync, `Ok(false)`.
    pub async fn delete(&self, id: TaskId) -> Result<bool, GatewayError> {
        let removed = {
            let mut inner = self.inner.write().unwrap();
            let before = inner.tasks.len();
            inner.tasks.retain(|t| t.id != id);
            inner.tasks.len() != before
        };

        if !removed {
            return Ok(false);
        }

        self.notifier.notify(Notice::success(MSG_DELETED));
        self.sync(SyncCall::Delete(id)).await?;
        Ok(true)
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.inner.read().unwrap().tasks.clone()
    }

    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.inner
            .read()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().tasks.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().unwrap().loading
    }

    async fn sync(&self, call: SyncCall) -> Result<(), GatewayError> {
        match self.policy {
            SyncPolicy::FireAndForget => {
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    if let Err(e) = dispatch(&gateway, call).await {
                        warn!(error = %e, "background task sync failed");
                    }
                });
                Ok(())
            }
            SyncPolicy::Awaited => dispatch(&self.gateway, call)
                .await
                .inspect_err(|e| warn!(error = %e, "task sync failed")),
        }
    }
}

async fn dispatch(gateway: &Arc<dyn TaskGateway>, call: SyncCall) -> Result<(), GatewayError> {
    match call {
        SyncCall::Create(new) => gateway.create(&new).await,
        SyncCall::Update(task) => gateway.update(&task).await,
        SyncCall::Delete(id) => gateway.delete(id).await,
    }
}
