//! Headless walkthrough of the task table against an in-process mock
//! backend: load with the skeleton delay, add, search, filter, paginate,
//! delete.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use tracing::info;

use taskdeck_core::{TaskSession, TaskStore};
use taskdeck_gateway::{GatewayConfig, HttpGateway};
use taskdeck_model::{Task, TaskDraft, TaskId, TaskStatus};
use taskdeck_observe::{LoggerConfig, logger_init};

#[tokio::main]
async fn main() -> Result<()> {
    // 1) Logger
    logger_init(&LoggerConfig::default())?;

    // 2) Mock backend serving the static fixture
    let addr = serve_fixture().await?;
    info!("fixture server listening on {addr}");

    // 3) Gateway + store + session
    let gateway = Arc::new(HttpGateway::new(GatewayConfig::new(format!("http://{addr}")))?);
    let store = TaskStore::new(gateway).with_load_delay(Duration::from_secs(2));
    let mut session = TaskSession::new(store.clone());

    // 4) Initial load; the skeleton state is observable during the delay
    info!(loading = store.is_loading(), "before load");
    let handle = tokio::spawn({
        let store = store.clone();
        async move { store.load().await }
    });
    tokio::time::sleep(Duration::from_millis(300)).await;
    info!(loading = store.is_loading(), "while loading");
    let tasks = handle.await?;
    info!(count = tasks.len(), "loaded task list");
    print_page("initial", &session);

    // 5) Add a task
    let created = session
        .submit_new(
            TaskDraft::new()
                .with_title("Write gateway docs")
                .with_description("Document the task endpoints")
                .with_due_date("2024-09-30")
                .with_status(TaskStatus::Pending),
        )
        .await?;
    info!(id = %created.id, "added task");

    // 6) Search and status filter
    session.set_search("bug");
    print_page("search=bug", &session);
    session.set_search("");

    session.set_status_filter(Some(TaskStatus::Completed));
    print_page("status=Completed", &session);
    session.set_status_filter(None);

    // 7) Paginate, then delete the last task on the last page
    session.go_to_page(2);
    print_page("page 2", &session);
    session.delete_task(created.id).await?;
    info!(page = session.page().page, "after delete");
    print_page("after delete", &session);

    // let background syncs drain before the process exits
    tokio::time::sleep(Duration::from_millis(200)).await;
    Ok(())
}

fn print_page(label: &str, session: &TaskSession) {
    let view = session.visible();
    info!(
        label,
        page = session.page().page,
        total_pages = view.total_pages,
        total = view.total,
        "visible page"
    );
    for task in &view.items {
        info!("  [{}] {} ({}) due {}", task.id, task.title, task.status, task.due_date);
    }
}

fn fixture_tasks() -> Vec<Task> {
    let rows = [
        (1, "Fix login", "Fix bug in login", "2024-03-02", TaskStatus::Pending),
        (2, "Ship 1.2", "Cut and publish the release", "2024-03-09", TaskStatus::Completed),
        (3, "Refresh fixtures", "Regenerate task.json", "2024-03-12", TaskStatus::InProgress),
        (4, "Audit deps", "Quarterly dependency review", "2024-03-15", TaskStatus::Pending),
        (5, "Write runbook", "On-call runbook for the API", "2024-03-20", TaskStatus::Pending),
        (6, "Close beta", "Email beta testers", "2024-03-22", TaskStatus::Completed),
    ];

    rows.into_iter()
        .map(|(id, title, description, due, status)| Task {
            id: TaskId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            due_date: due.to_string(),
            status,
        })
        .collect()
}

async fn list_tasks(State(tasks): State<Arc<Vec<Task>>>) -> Json<Vec<Task>> {
    Json(tasks.as_ref().clone())
}

/// The mock backend accepts writes and forgets them; the fixture is static.
async fn accept_write() -> StatusCode {
    StatusCode::OK
}

async fn serve_fixture() -> Result<SocketAddr> {
    let fixture = Arc::new(fixture_tasks());

    let app = Router::new()
        .route(
            "/task.json",
            get(list_tasks).post(accept_write).put(accept_write),
        )
        .route("/task/{id}", delete(accept_write))
        .with_state(fixture);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "fixture server stopped");
        }
    });
    Ok(addr)
}
