//! In-process stand-in for the geocoding and completion services.
//!
//! Responses are queued per path and served in order; every request is
//! recorded so tests can assert on what the application sent.

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, http::StatusCode, web};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Value,
}
impl RecordedRequest {
    pub fn query_param(&self, key: &str) -> Option<String> {
        let url = reqwest::Url::parse(&format!("http://stub{}?{}", self.path, self.query))
            .expect("Failed to parse recorded URL");
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Content of the chat message at `index`, for completion requests.
    pub fn message_content(&self, index: usize) -> String {
        self.body["messages"][index]["content"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }
}

#[derive(Default)]
struct StubState {
    responses: Mutex<HashMap<String, VecDeque<(u16, Value)>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    pub base_url: String,
    state: web::Data<StubState>,
}

impl StubServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();

        let state = web::Data::new(StubState::default());
        let server_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(server_state.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .listen(listener)
        .expect("Failed to listen on stub port")
        .run();
        let _ = tokio::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
        }
    }

    pub fn enqueue(&self, path: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back((status, body));
    }

    pub fn enqueue_completion(&self, content: &str) {
        self.enqueue(
            "/chat/completions",
            200,
            json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }]
            }),
        );
    }

    pub fn enqueue_search_hit(&self, lat: &str, lon: &str, display_name: &str) {
        self.enqueue(
            "/search",
            200,
            json!([{ "place_id": 1, "lat": lat, "lon": lon, "display_name": display_name }]),
        );
    }

    pub fn enqueue_reverse(&self, display_name: &str) {
        self.enqueue(
            "/reverse",
            200,
            json!({ "place_id": 2, "display_name": display_name, "address": {} }),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });

    let next = state
        .responses
        .lock()
        .unwrap()
        .get_mut(req.path())
        .and_then(|queue| queue.pop_front());

    match next {
        Some((status, body)) => {
            HttpResponse::build(StatusCode::from_u16(status).unwrap()).json(body)
        }
        None => HttpResponse::InternalServerError()
            .json(json!({ "error": { "message": "no stubbed response" } })),
    }
}
