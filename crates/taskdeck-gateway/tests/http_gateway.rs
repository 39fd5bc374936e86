use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, Uri},
    routing::{delete, get, put},
};

use taskdeck_gateway::{GatewayConfig, HttpGateway, TaskGateway, UpdateStyle};
use taskdeck_model::{NewTask, Task, TaskId, TaskStatus};

/// Requests seen by the fixture server: (method, path, body).
#[derive(Clone, Default)]
struct Recorder {
    requests: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl Recorder {
    fn push(&self, method: &Method, uri: &Uri, body: String) {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), uri.path().to_string(), body));
    }

    fn take(&self) -> Vec<(String, String, String)> {
        std::mem::take(&mut self.requests.lock().unwrap())
    }
}

fn fixture() -> Vec<Task> {
    vec![
        Task {
            id: TaskId::new(1),
            title: "Fix login".to_string(),
            description: "Fix bug in login".to_string(),
            due_date: "2024-03-02".to_string(),
            status: TaskStatus::Pending,
        },
        Task {
            id: TaskId::new(2),
            title: "Ship release".to_string(),
            description: "Cut the tag".to_string(),
            due_date: "2024-03-09".to_string(),
            status: TaskStatus::Completed,
        },
    ]
}

async fn list_tasks(State(recorder): State<Recorder>, method: Method, uri: Uri) -> Json<Vec<Task>> {
    recorder.push(&method, &uri, String::new());
    Json(fixture())
}

/// Write endpoint of the mock backend: records the call, discards the body.
async fn accept_write(
    State(recorder): State<Recorder>,
    method: Method,
    uri: Uri,
    body: String,
) -> StatusCode {
    recorder.push(&method, &uri, body);
    StatusCode::OK
}

async fn serve(recorder: Recorder) -> SocketAddr {
    let app = Router::new()
        .route("/task.json", get(list_tasks).post(accept_write).put(accept_write))
        .route("/task/{id}", put(accept_write).delete(accept_write))
        .with_state(recorder);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn gateway_at(addr: SocketAddr, style: UpdateStyle) -> HttpGateway {
    let config = GatewayConfig::new(format!("http://{addr}")).with_update_style(style);
    HttpGateway::new(config).unwrap()
}

#[tokio::test]
async fn list_fetches_the_collection() {
    let recorder = Recorder::default();
    let addr = serve(recorder.clone()).await;
    let gateway = gateway_at(addr, UpdateStyle::Collection);

    let tasks = gateway.list().await.unwrap();
    assert_eq!(tasks, fixture());

    let requests = recorder.take();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, "GET");
    assert_eq!(requests[0].1, "/task.json");
}

#[tokio::test]
async fn create_posts_fields_without_id() {
    let recorder = Recorder::default();
    let addr = serve(recorder.clone()).await;
    let gateway = gateway_at(addr, UpdateStyle::Collection);

    let new = NewTask {
        title: "Write docs".to_string(),
        description: "Gateway docs".to_string(),
        due_date: "2024-04-01".to_string(),
        status: TaskStatus::InProgress,
    };
    gateway.create(&new).await.unwrap();

    let requests = recorder.take();
    assert_eq!(requests[0].0, "POST");
    assert_eq!(requests[0].1, "/task.json");
    assert!(requests[0].2.contains(r#""dueDate":"2024-04-01""#));
    assert!(requests[0].2.contains(r#""In Progress""#));
    assert!(!requests[0].2.contains("\"id\""));
}

#[tokio::test]
async fn update_targets_collection_path_by_default() {
    let recorder = Recorder::default();
    let addr = serve(recorder.clone()).await;
    let gateway = gateway_at(addr, UpdateStyle::Collection);

    let task = fixture().remove(0);
    gateway.update(&task).await.unwrap();

    let requests = recorder.take();
    assert_eq!(requests[0].0, "PUT");
    assert_eq!(requests[0].1, "/task.json");
    assert!(requests[0].2.contains(r#""id":1"#));
}

#[tokio::test]
async fn update_targets_item_path_when_configured() {
    let recorder = Recorder::default();
    let addr = serve(recorder.clone()).await;
    let gateway = gateway_at(addr, UpdateStyle::Item);

    let task = fixture().remove(1);
    gateway.update(&task).await.unwrap();

    let requests = recorder.take();
    assert_eq!(requests[0].0, "PUT");
    assert_eq!(requests[0].1, "/task/2.json");
}

#[tokio::test]
async fn delete_targets_item_path() {
    let recorder = Recorder::default();
    let addr = serve(recorder.clone()).await;
    let gateway = gateway_at(addr, UpdateStyle::Collection);

    gateway.delete(TaskId::new(2)).await.unwrap();

    let requests = recorder.take();
    assert_eq!(requests[0].0, "DELETE");
    assert_eq!(requests[0].1, "/task/2.json");
}

#[tokio::test]
async fn non_2xx_status_is_an_error() {
    let app = Router::new().route(
        "/task.json",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let gateway = gateway_at(addr, UpdateStyle::Collection);
    assert!(gateway.list().await.is_err());
}

#[tokio::test]
async fn malformed_list_body_is_an_invalid_body_error() {
    let app = Router::new().route("/task.json", get(|| async { "not json" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let gateway = gateway_at(addr, UpdateStyle::Collection);
    let err = gateway.list().await.unwrap_err();
    assert!(matches!(err, taskdeck_gateway::GatewayError::InvalidBody(_)));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let app = Router::new().route(
        "/task.json",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(Vec::<Task>::new())
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = GatewayConfig::new(format!("http://{addr}"))
        .with_timeout(Duration::from_millis(100));
    let gateway = HttpGateway::new(config).unwrap();

    let err = gateway.list().await.unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn delete_of_delete_is_two_identical_requests() {
    let recorder = Recorder::default();
    let addr = serve(recorder.clone()).await;
    let gateway = gateway_at(addr, UpdateStyle::Collection);

    gateway.delete(TaskId::new(9)).await.unwrap();
    gateway.delete(TaskId::new(9)).await.unwrap();

    let requests = recorder.take();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}
