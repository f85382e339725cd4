//! In-process stand-in for the instance/memo REST backend.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use opsdesk::AppState;

#[derive(Default)]
pub struct BackendData {
    pub instances: Vec<Value>,
    /// Oldest first; listed newest first like the real backend
    pub memos: Vec<Value>,
    /// `METHOD /path?query` for every request received
    pub requests: Vec<String>,
    pub next_memo_id: u64,
    /// Served verbatim by the instance list endpoint when set
    pub instance_list_override: Option<Value>,
    /// Served verbatim by the memo list endpoint when set
    pub memo_list_override: Option<Value>,
}

pub type Shared = Arc<Mutex<BackendData>>;

pub struct FakeBackend {
    pub base_url: String,
    pub data: Shared,
}

impl FakeBackend {
    pub fn requests(&self) -> Vec<String> {
        self.data.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.data.lock().unwrap().requests.len()
    }

    pub fn instance_names(&self) -> Vec<String> {
        self.data
            .lock()
            .unwrap()
            .instances
            .iter()
            .filter_map(|i| i["instance_name"].as_str().map(|s| s.to_string()))
            .collect()
    }

    pub fn memo_count(&self) -> usize {
        self.data.lock().unwrap().memos.len()
    }

    pub fn app_state(&self) -> AppState {
        opsdesk::api::set_silent(true);
        let client = opsdesk::build_http_client().unwrap();
        AppState::new(client, self.base_url.clone())
    }
}

pub fn instance(name: &str, host: &str) -> Value {
    json!({
        "environment": "prod",
        "db_type": "mysql",
        "region": "ap-northeast-2",
        "cluster_name": "orders",
        "instance_name": name,
        "host": host,
        "port": 3306,
    })
}

pub fn with_memos(count: usize) -> BackendData {
    let mut data = BackendData::default();
    for i in 1..=count {
        data.memos.push(json!({
            "id": format!("m{}", i),
            "content": format!("memo {}", i),
            "created_at": "2024-05-01T09:30:00",
        }));
    }
    data.next_memo_id = count as u64 + 1;
    data
}

async fn record(State(data): State<Shared>, req: Request, next: Next) -> Response {
    let entry = match req.uri().query() {
        Some(q) => format!("{} {}?{}", req.method(), req.uri().path(), q),
        None => format!("{} {}", req.method(), req.uri().path()),
    };
    data.lock().unwrap().requests.push(entry);
    next.run(req).await
}

async fn list_instances(State(data): State<Shared>) -> Json<Value> {
    let data = data.lock().unwrap();
    if let Some(v) = &data.instance_list_override {
        return Json(v.clone());
    }
    Json(json!({ "instances": data.instances }))
}

#[derive(Deserialize)]
struct ActionQuery {
    action: Option<String>,
}

async fn add_instance(
    State(data): State<Shared>,
    Query(q): Query<ActionQuery>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut data = data.lock().unwrap();
    let name = body["instance_name"].as_str().unwrap_or("").to_string();
    let host = body["host"].as_str().unwrap_or("").to_string();
    if name.is_empty() || host.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({"detail": "field required"}))).into_response();
    }
    if let Some(obj) = body.as_object_mut() {
        obj.remove("password");
        obj.entry("cluster_name").or_insert(json!("Non-Cluster"));
        obj.entry("port").or_insert(json!(3306));
    }
    let existing = data
        .instances
        .iter()
        .position(|i| i["instance_name"] == json!(name) || i["host"] == json!(host));
    match (existing, q.action.as_deref()) {
        (Some(idx), Some("update")) => data.instances[idx] = body,
        (Some(_), Some("cancel")) => {
            return (StatusCode::CREATED, Json(json!({"message": "Instance addition cancelled"}))).into_response();
        }
        (Some(_), _) => {}
        (None, _) => data.instances.push(body),
    }
    (StatusCode::CREATED, Json(json!({"message": "Operation completed successfully"}))).into_response()
}

#[derive(Deserialize)]
struct DeleteQuery {
    instance_name: String,
}

async fn delete_instance(State(data): State<Shared>, Query(q): Query<DeleteQuery>) -> Response {
    let mut data = data.lock().unwrap();
    let before = data.instances.len();
    data.instances.retain(|i| i["instance_name"] != json!(q.instance_name));
    if data.instances.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Instance not found"}))).into_response();
    }
    Json(json!({"message": "Instance deleted successfully"})).into_response()
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
    page_size: Option<usize>,
}

async fn list_memos(State(data): State<Shared>, Query(q): Query<PageQuery>) -> Json<Value> {
    let data = data.lock().unwrap();
    if let Some(v) = &data.memo_list_override {
        return Json(v.clone());
    }
    let page = q.page.unwrap_or(1).max(1);
    let page_size = q.page_size.unwrap_or(5).max(1);
    let newest_first: Vec<Value> = data.memos.iter().rev().cloned().collect();
    let total_pages = ((newest_first.len() + page_size - 1) / page_size).max(1);
    let slice: Vec<Value> = newest_first.into_iter().skip((page - 1) * page_size).take(page_size).collect();
    Json(json!({ "data": slice, "total_pages": total_pages }))
}

async fn create_memo(State(data): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut data = data.lock().unwrap();
    let id = format!("m{}", data.next_memo_id.max(1));
    data.next_memo_id = data.next_memo_id.max(1) + 1;
    let memo = json!({
        "id": id,
        "content": body["content"],
        "created_at": "2024-05-02T10:00:00",
        "updated_at": "2024-05-02T10:00:00",
    });
    data.memos.push(memo.clone());
    Json(memo)
}

async fn get_memo(State(data): State<Shared>, Path(id): Path<String>) -> Response {
    let data = data.lock().unwrap();
    match data.memos.iter().find(|m| m["id"] == json!(id)) {
        Some(m) => Json(m.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Memo not found"}))).into_response(),
    }
}

async fn delete_memo(State(data): State<Shared>, Path(id): Path<String>) -> Response {
    let mut data = data.lock().unwrap();
    match data.memos.iter().position(|m| m["id"] == json!(id)) {
        Some(idx) => Json(data.memos.remove(idx)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Memo not found"}))).into_response(),
    }
}

pub async fn spawn(data: BackendData) -> FakeBackend {
    let shared: Shared = Arc::new(Mutex::new(data));
    let app = Router::new()
        .route("/api/instance_setup/list_instances/", get(list_instances))
        .route("/api/instance_setup/add_instance/", axum::routing::post(add_instance))
        .route("/api/instance_setup/delete_instance/", axum::routing::delete(delete_instance))
        .route("/api/memo/", get(list_memos).post(create_memo))
        .route("/api/memo/:id", get(get_memo).delete(delete_memo))
        .layer(middleware::from_fn_with_state(shared.clone(), record))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    FakeBackend { base_url: format!("http://{}", addr), data: shared }
}

/// A base URL nothing listens on
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
