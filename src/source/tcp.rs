//! src/source/tcp.rs
//!
//! Tiny line-based TCP feed: every client line carrying numbers becomes a batch.
//!
//! Replies, one line per received line:
//! - `OK <n>` after forwarding `n` samples
//! - `ERR no_samples` when the line had none
//! - `OK bye` for `quit`, then the connection closes

use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use super::{SampleBatch, parse_sample_line};
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct TcpSettings {
    pub addr: String,
}

impl Default for TcpSettings {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:4000".to_string(),
        }
    }
}

/// Bind and accept clients on a background thread, one handler thread per client.
pub fn spawn(settings: TcpSettings, tx: Sender<SampleBatch>) -> JoinHandle<()> {
    thread::spawn(move || match TcpListener::bind(&settings.addr) {
        Ok(listener) => {
            tracing::info!(addr = %settings.addr, "tcp feed listening");
            serve(listener, tx);
        }
        Err(e) => tracing::error!(addr = %settings.addr, error = %e, "tcp feed bind failed"),
    })
}

fn serve(listener: TcpListener, tx: Sender<SampleBatch>) {
    for stream in listener.incoming() {
        match stream {
            Ok(s) => {
                let tx = tx.clone();
                thread::spawn(move || {
                    if let Err(e) = handle_client(s, tx) {
                        tracing::warn!(error = %e, "tcp client ended with error");
                    }
                });
            }
            Err(e) => tracing::warn!(error = %e, "tcp accept error"),
        }
    }
}

/// Serve one client until it disconnects, sends `quit`, or the UI goes away.
pub fn handle_client(mut s: TcpStream, tx: Sender<SampleBatch>) -> Result<()> {
    let peer = s
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<peer?>".into());
    tracing::info!(%peer, "tcp client connected");
    let mut rdr = BufReader::new(s.try_clone()?);
    let mut line = String::new();

    loop {
        line.clear();
        if rdr.read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        if raw.eq_ignore_ascii_case("quit") {
            writeln!(s, "OK bye")?;
            let _ = s.shutdown(Shutdown::Both);
            break;
        }

        let batch = parse_sample_line(raw);
        if batch.is_empty() {
            writeln!(s, "ERR no_samples")?;
            continue;
        }
        let n = batch.len();
        if tx.send(batch).is_err() {
            writeln!(s, "ERR closed")?;
            break;
        }
        writeln!(s, "OK {}", n)?;
    }
    tracing::info!(%peer, "tcp client disconnected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn client_lines_become_batches() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            handle_client(stream, tx).unwrap();
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client
            .write_all(b"3.5 3.6\nblink\n4.0\nquit\n")
            .unwrap();
        let mut replies = Vec::new();
        for line in BufReader::new(client.try_clone().unwrap()).lines() {
            replies.push(line.unwrap());
        }
        server.join().unwrap();

        assert_eq!(replies, vec!["OK 2", "ERR no_samples", "OK 1", "OK bye"]);
        let batches: Vec<SampleBatch> = rx.try_iter().collect();
        assert_eq!(batches, vec![vec![3.5, 3.6], vec![4.0]]);
    }
}
