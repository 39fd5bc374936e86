//! Shared doubles for store and session tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use taskdeck_gateway::{GatewayError, TaskGateway};
use taskdeck_model::{NewTask, Task, TaskDraft, TaskId, TaskStatus};

use crate::notify::{Notice, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GatewayCall {
    List,
    Create(NewTask),
    Update(Task),
    Delete(TaskId),
}

/// Gateway double that records every call and can be told to fail.
#[derive(Default)]
pub(crate) struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
    tasks: Mutex<Vec<Task>>,
    fail_list: AtomicBool,
    fail_writes: AtomicBool,
}

impl RecordingGateway {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let gateway = Self::default();
        *gateway.tasks.lock().unwrap() = tasks;
        gateway
    }

    pub fn fail_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> Result<(), GatewayError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(GatewayError::InvalidBody("simulated write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TaskGateway for RecordingGateway {
    async fn list(&self) -> Result<Vec<Task>, GatewayError> {
        self.record(GatewayCall::List);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(GatewayError::InvalidBody("simulated fetch failure".to_string()));
        }
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create(&self, task: &NewTask) -> Result<(), GatewayError> {
        self.record(GatewayCall::Create(task.clone()));
        self.write_result()
    }

    async fn update(&self, task: &Task) -> Result<(), GatewayError> {
        self.record(GatewayCall::Update(task.clone()));
        self.write_result()
    }

    async fn delete(&self, id: TaskId) -> Result<(), GatewayError> {
        self.record(GatewayCall::Delete(id));
        self.write_result()
    }
}

/// Notifier double that keeps every notice.
#[derive(Default)]
pub(crate) struct CollectingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

pub(crate) fn sample_task(id: u64, title: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: format!("{title} description"),
        due_date: "2024-01-01".to_string(),
        status,
    }
}

pub(crate) fn sample_tasks(count: usize) -> Vec<Task> {
    (1..=count as u64)
        .map(|i| sample_task(i, &format!("Task {i}"), TaskStatus::Pending))
        .collect()
}

pub(crate) fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: format!("{title} description"),
        due_date: "2024-02-02".to_string(),
        status: TaskStatus::Pending,
    }
}

pub(crate) fn complete_draft(title: &str) -> TaskDraft {
    TaskDraft::new()
        .with_title(title)
        .with_description(format!("{title} description"))
        .with_due_date("2024-02-02")
        .with_status(TaskStatus::Pending)
}
