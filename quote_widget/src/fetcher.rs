//! Fetching the quote batch over HTTP.
//!
//! `HttpQuoteSource` is the production `QuoteSource`: a single blocking `GET` against
//! the configured endpoint. `spawn_fetch` runs one fetch on a background thread and
//! posts the outcome, tagged with its load ticket, back to the thread that owns the
//! session.
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use log::{debug, info};
use quote_common::model::quote::decode_quotes;
use quote_common::{LoadError, LoadTicket, Quote, QuoteError, QuoteSource};
use reqwest::blocking::Client;

/// Outcome of a background fetch, delivered to the session owner.
pub type FetchOutcome = (LoadTicket, Result<Vec<Quote>, LoadError>);

/// Quote source backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    endpoint: String,
}

impl HttpQuoteSource {
    /// Build a source for `endpoint`; every request gives up after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QuoteError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Vec<Quote>, LoadError> {
        info!("Fetching quotes from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Network(format!(
                "{} answered with HTTP {}",
                self.endpoint, status
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| LoadError::Network(e.to_string()))?;
        debug!("Received {} bytes", body.len());
        decode_quotes(&body)
    }
}

/// Run `source.fetch()` on a new thread and send the outcome for `ticket` to `tx`.
///
/// If the receiver is gone by the time the fetch finishes, the outcome is dropped.
pub fn spawn_fetch<S>(source: Arc<S>, ticket: LoadTicket, tx: Sender<FetchOutcome>) -> JoinHandle<()>
where
    S: QuoteSource + Send + Sync + 'static,
{
    thread::spawn(move || {
        let result = source.fetch();
        if tx.send((ticket, result)).is_err() {
            debug!("Fetch {:?} finished after the session owner went away", ticket);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use quote_common::{QuoteSession, Status};
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve exactly one HTTP response on a loopback port and return the URL to hit.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/v1/quotes/100", addr)
    }

    fn source(url: &str) -> HttpQuoteSource {
        HttpQuoteSource::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn fetches_and_maps_payload() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"[{"quote":"I am the one who knocks.","author":"Walter White"}]"#,
        );
        let quotes = source(&url).fetch().unwrap();
        assert_eq!(quotes, vec![Quote::new("I am the one who knocks.", "Walter White")]);
    }

    #[test]
    fn non_success_status_is_network_error() {
        let url = serve_once("HTTP/1.1 503 Service Unavailable", r#"{"error":"down"}"#);
        match source(&url).fetch() {
            Err(LoadError::Network(msg)) => assert!(msg.contains("503")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_body_is_decode_error() {
        let url = serve_once("HTTP/1.1 200 OK", r#"{"quote":"not a list","author":"x"}"#);
        assert!(matches!(source(&url).fetch(), Err(LoadError::Decode(_))));
    }

    #[test]
    fn empty_array_passes_through() {
        let url = serve_once("HTTP/1.1 200 OK", "[]");
        assert_eq!(source(&url).fetch().unwrap(), Vec::<Quote>::new());
    }

    #[test]
    fn refused_connection_is_network_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/quotes", port);
        assert!(matches!(source(&url).fetch(), Err(LoadError::Network(_))));
    }

    #[test]
    fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(3));
                drop(stream);
            }
        });
        let source = HttpQuoteSource::new(&format!("http://{}/", addr), Duration::from_millis(200)).unwrap();
        assert!(matches!(source.fetch(), Err(LoadError::Network(_))));
    }

    struct Canned(Vec<Quote>);

    impl QuoteSource for Canned {
        fn fetch(&self) -> Result<Vec<Quote>, LoadError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn background_fetch_reports_to_owner() {
        let batch = vec![Quote::new("Tread lightly.", "Walter White")];
        let mut session = QuoteSession::new();
        let (tx, rx) = unbounded();

        let ticket = session.begin_load().unwrap();
        spawn_fetch(Arc::new(Canned(batch.clone())), ticket, tx)
            .join()
            .unwrap();

        let (got, result) = rx.recv().unwrap();
        assert_eq!(got, ticket);
        assert_eq!(session.complete_load(got, result), Status::Ready);
        assert_eq!(session.current(), &batch[0]);
    }
}
