//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed pages by path, chains of redirects (`/hop/N` redirects to
//! `/hop/N-1`, `/hop/0` serves the hop target page) and an XML rank endpoint
//! at `/data`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct PageServerOptions {
    /// Path → HTML body.
    pub pages: HashMap<String, String>,
    /// Body served at the end of a `/hop/N` chain.
    pub hop_target: String,
    /// Rank reported by `/data`; `None` serves XML without a REACH element.
    pub rank: Option<u64>,
    /// Serve `/data` with a 404 status (same XML body).
    pub rank_not_found: bool,
    /// Incremented on every `/data` request.
    pub rank_hits: Arc<AtomicUsize>,
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). The server runs until the
/// process exits.
pub fn start(opts: PageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let opts = Arc::new(opts);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = Arc::clone(&opts);
            thread::spawn(move || handle(stream, &opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, opts: &PageServerOptions) {
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
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");

    if let Some(n) = path.strip_prefix("/hop/") {
        let n: u32 = n.parse().unwrap_or(0);
        if n == 0 {
            respond(&mut stream, "200 OK", "text/html", &opts.hop_target, None);
        } else {
            let location = format!("/hop/{}", n - 1);
            respond(&mut stream, "302 Found", "text/html", "", Some(&location));
        }
        return;
    }

    if path == "/data" {
        opts.rank_hits.fetch_add(1, Ordering::SeqCst);
        let reach = opts
            .rank
            .map(|r| format!("<REACH RANK=\"{}\"/>", r))
            .unwrap_or_default();
        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <ALEXA VER=\"0.9\"><SD>{}</SD></ALEXA>",
            reach
        );
        let status = if opts.rank_not_found {
            "404 Not Found"
        } else {
            "200 OK"
        };
        respond(&mut stream, status, "text/xml", &body, None);
        return;
    }

    match opts.pages.get(path) {
        Some(body) => respond(&mut stream, "200 OK", "text/html", body, None),
        None => respond(&mut stream, "404 Not Found", "text/html", "not found", None),
    }
}

fn respond(
    stream: &mut std::net::TcpStream,
    status: &str,
    content_type: &str,
    body: &str,
    location: Option<&str>,
) {
    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        location,
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
