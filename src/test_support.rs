use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[derive(Default)]
struct ServerCounters {
    requests: AtomicU64,
    body_bytes: AtomicU64,
}

/// Blocking HTTP/1.1 server answering every request with a fixed status.
pub(crate) struct TestServer {
    port: u16,
    counters: Arc<ServerCounters>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    pub(crate) fn spawn(status: u16) -> Result<Self, String> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind test server failed: {}", err))?;
        let port = listener
            .local_addr()
            .map_err(|err| format!("server addr failed: {}", err))?
            .port();
        listener
            .set_nonblocking(true)
            .map_err(|err| format!("set_nonblocking failed: {}", err))?;

        let counters = Arc::new(ServerCounters::default());
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let thread_counters = Arc::clone(&counters);
        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }
                match listener.accept() {
                    Ok((stream, _)) => {
                        let counters = Arc::clone(&thread_counters);
                        thread::spawn(move || handle_client(stream, status, &counters));
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            counters,
            shutdown: shutdown_tx,
            thread: Some(handle),
        })
    }

    pub(crate) const fn port(&self) -> u16 {
        self.port
    }

    pub(crate) fn requests(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    pub(crate) fn body_bytes(&self) -> u64 {
        self.counters.body_bytes.load(Ordering::Relaxed)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

fn handle_client(mut stream: TcpStream, status: u16, counters: &ServerCounters) {
    if stream.set_nonblocking(false).is_err()
        || stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .is_err()
    {
        return;
    }
    let Some(body_len) = read_request(&mut stream) else {
        return;
    };
    counters.requests.fetch_add(1, Ordering::Relaxed);
    counters.body_bytes.fetch_add(body_len, Ordering::Relaxed);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status,
        if status < 400 { "OK" } else { "Error" }
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Reads one request and returns its body length.
fn read_request(stream: &mut TcpStream) -> Option<u64> {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(chunk.get(..read)?);
        if let Some(pos) = data.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos.checked_add(4)?;
        }
    };

    let head = String::from_utf8_lossy(data.get(..header_end)?).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body_read = data.len().saturating_sub(header_end);
    while body_read < content_length {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        body_read = body_read.saturating_add(read);
    }
    u64::try_from(body_read).ok()
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: std::future::Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}
