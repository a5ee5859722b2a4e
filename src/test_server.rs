// src/test_server.rs
// =============================================================================
// Minimal HTTP/1.1 server for tests.
//
// Each route scripts a reply for HEAD and one for GET. Unknown paths get 404.
// The server runs on a background thread (one thread per connection) until
// the test process exits, and keeps a log of every request it saw.
// =============================================================================

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16),
    /// 301 with this Location
    Redirect(String),
    /// Accept the request and never answer in time
    Hang,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub user_agent: String,
    pub accept_language: String,
}

type Routes = HashMap<String, (Reply, Reply)>;

pub struct TestServer {
    base: String,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    /// Routes are `(path, head_reply, get_reply)`
    pub fn start(routes: Vec<(&str, Reply, Reply)>) -> Self {
        let routes: Arc<Routes> = Arc::new(
            routes
                .into_iter()
                .map(|(path, head, get)| (path.to_string(), (head, get)))
                .collect(),
        );
        let log = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();

        let server_log = Arc::clone(&log);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&server_log);
                thread::spawn(move || handle(stream, &routes, &log));
            }
        });

        Self {
            base: format!("http://127.0.0.1:{port}"),
            log,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().expect("log lock").clone()
    }

    /// Methods seen for `path`, in arrival order
    pub fn methods_for(&self, path: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .map(|r| r.method)
            .collect()
    }
}

/// A URL nobody is listening on
pub fn unused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

fn handle(mut stream: TcpStream, routes: &Routes, log: &Mutex<Vec<RecordedRequest>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(raw) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let request = parse_request(raw);

    let reply = match routes.get(&request.path) {
        Some((head, _)) if request.method == "HEAD" => head.clone(),
        Some((_, get)) => get.clone(),
        None => Reply::Status(404),
    };
    log.lock().expect("log lock").push(request);

    let response = match reply {
        Reply::Status(code) => {
            format!("HTTP/1.1 {code} Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
        }
        Reply::Redirect(location) => format!(
            "HTTP/1.1 301 Moved Permanently\r\nLocation: {location}\r\n\
             Content-Length: 0\r\nConnection: close\r\n\r\n"
        ),
        Reply::Hang => {
            thread::sleep(Duration::from_secs(5));
            return;
        }
    };
    let _ = stream.write_all(response.as_bytes());
}

fn parse_request(raw: &str) -> RecordedRequest {
    let mut lines = raw.lines();
    let mut request_line = lines.next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("").to_string();
    let path = request_line.next().unwrap_or("").to_string();

    let mut user_agent = String::new();
    let mut accept_language = String::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim().to_string();
            if name.eq_ignore_ascii_case("user-agent") {
                user_agent = value;
            } else if name.eq_ignore_ascii_case("accept-language") {
                accept_language = value;
            }
        }
    }

    RecordedRequest {
        method,
        path,
        user_agent,
        accept_language,
    }
}
