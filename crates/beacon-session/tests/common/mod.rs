//! Stateful fake directory service on `tiny_http`.
//!
//! Keeps companies in memory the way the real backend does: list returns
//! insertion order, create assigns the next integer id, delete answers 200 or
//! 404. Individual routes can be forced to fail.

use std::io::Read;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{Value, json};

#[derive(Default)]
struct State {
    companies: Vec<Value>,
    next_id: i64,
    fail_delete: Option<u16>,
    fail_list: Option<u16>,
}

pub struct FakeDirectory {
    pub base_url: String,
    state: Arc<Mutex<State>>,
}

impl FakeDirectory {
    pub fn start() -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake directory");
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("fake directory port");
        let state = Arc::new(Mutex::new(State {
            next_id: 1,
            ..State::default()
        }));
        let shared = Arc::clone(&state);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().as_str().to_string();
                let url = request.url().to_string();

                let (status, reply) = route(&mut shared.lock().unwrap(), &method, &url, &body);
                let response = tiny_http::Response::from_string(reply.to_string())
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", "application/json")
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn fail_deletes_with(&self, status: u16) {
        self.lock().fail_delete = Some(status);
    }

    pub fn fail_lists_with(&self, status: u16) {
        self.lock().fail_list = Some(status);
    }

    pub fn ids(&self) -> Vec<i64> {
        self.lock()
            .companies
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .collect()
    }
}

fn route(state: &mut State, method: &str, url: &str, body: &str) -> (u16, Value) {
    match (method, url) {
        ("GET", "/companies") => match state.fail_list {
            Some(status) => (status, json!({"detail": "list failed"})),
            None => (200, json!({ "companies": state.companies })),
        },
        ("POST", "/companies") => {
            let Ok(mut company) = serde_json::from_str::<Value>(body) else {
                return (422, json!({"detail": "invalid body"}));
            };
            company["id"] = json!(state.next_id);
            state.next_id += 1;
            state.companies.push(company);
            (200, json!({"message": "Company added successfully"}))
        }
        ("POST", "/search-company") => {
            let query: Value = serde_json::from_str(body).unwrap_or(Value::Null);
            let needle = query["query"].as_str().unwrap_or_default().to_lowercase();
            let matches: Vec<&Value> = state
                .companies
                .iter()
                .filter(|c| {
                    c["industry"]
                        .as_str()
                        .is_some_and(|industry| needle.contains(&industry.to_lowercase()))
                })
                .collect();
            (
                200,
                json!({
                    "response": format!("Found {} companies", matches.len()),
                    "company_recommendations": matches,
                    "source": "fake",
                }),
            )
        }
        ("DELETE", path) if path.starts_with("/companies/") => {
            if let Some(status) = state.fail_delete {
                return (status, json!({"detail": "delete failed"}));
            }
            let id = path["/companies/".len()..].parse::<i64>().ok();
            let before = state.companies.len();
            state.companies.retain(|c| c["id"].as_i64() != id);
            if state.companies.len() == before {
                (404, json!({"detail": "Company not found"}))
            } else {
                (200, json!({"message": "Company deleted successfully"}))
            }
        }
        _ => (404, json!({"detail": "Not Found"})),
    }
}
