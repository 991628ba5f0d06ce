//! Minimal HTTP/1.1 server standing in for the contents API and raw file
//! host in integration tests.
//!
//! Serves a fixed route table; unknown paths get 404. Runs until the test
//! process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

pub struct MockApi {
    listener: TcpListener,
    routes: HashMap<String, (u16, Vec<u8>)>,
}

impl MockApi {
    /// Binds an ephemeral port; add routes, then call [`serve`](Self::serve).
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        MockApi {
            listener,
            routes: HashMap::new(),
        }
    }

    /// Base URL without a trailing slash (e.g. `http://127.0.0.1:12345`).
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.listener.local_addr().unwrap().port())
    }

    pub fn route(&mut self, path: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.routes.insert(path.to_string(), (status, body.into()));
    }

    /// Starts serving in a background thread and returns the base URL.
    pub fn serve(self) -> String {
        let base = self.base_url();
        let routes = Arc::new(self.routes);
        let listener = self.listener;
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                thread::spawn(move || handle(stream, &routes));
            }
        });
        base
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, (u16, Vec<u8>)>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = match request_path(request) {
        Some(p) => p,
        None => return,
    };

    let (status, body) = match routes.get(path) {
        Some((status, body)) => (*status, body.as_slice()),
        None => (404, &b"not found"[..]),
    };
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Path of the request line (`GET /a/b HTTP/1.1` → `/a/b`).
fn request_path(request: &str) -> Option<&str> {
    let line = request.lines().next()?;
    line.split_whitespace().nth(1)
}
