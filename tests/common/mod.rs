//! Transports and a local HTTP stub shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use sarvam_tl::credential::CredentialStore;
use sarvam_tl::translation::{TranslatePayload, Transport, TransportError, language_name};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_KEY: &str = "validkey123";

/// A credential store holding [`TEST_KEY`] in memory.
pub fn credentials() -> Arc<CredentialStore> {
    let store = CredentialStore::in_memory();
    store.hold(TEST_KEY).unwrap();
    Arc::new(store)
}

/// Fields of a payload as the transport saw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub credential: String,
    pub input: String,
    pub source: String,
    pub target: String,
    pub speaker_gender: String,
    pub model: String,
}

/// Returns canned replies in order, repeating the last one, and records every call.
pub struct SpyTransport {
    replies: Mutex<Vec<Result<Value, TransportError>>>,
    calls: AtomicUsize,
    sent: Mutex<Vec<SentRequest>>,
}

impl SpyTransport {
    pub fn replying(reply: Result<Value, TransportError>) -> Self {
        Self::sequence(vec![reply])
    }

    pub fn sequence(replies: Vec<Result<Value, TransportError>>) -> Self {
        assert!(!replies.is_empty(), "a spy needs at least one reply");
        Self {
            replies: Mutex::new(replies),
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(text: &str) -> Self {
        Self::replying(Ok(json!({ "translated_text": text })))
    }

    pub fn status(status: u16, message: &str) -> Self {
        Self::replying(Err(TransportError::Status {
            status,
            message: message.to_string(),
        }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_sent(&self) -> Option<SentRequest> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn send(
        &self,
        credential: &str,
        payload: &TranslatePayload<'_>,
    ) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(SentRequest {
            credential: credential.to_string(),
            input: payload.input.to_string(),
            source: payload.source_language_code.to_string(),
            target: payload.target_language_code.to_string(),
            speaker_gender: payload.speaker_gender.to_string(),
            model: payload.model.to_string(),
        });
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies[0].clone()
        }
    }
}

/// Offline stand-in for the service: a few canned phrases, a tagged echo
/// for anything else, after a simulated network delay.
pub struct CannedTransport {
    delay: Duration,
}

impl CannedTransport {
    pub const fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

fn canned(input: &str, target: &str) -> Option<&'static str> {
    let phrase = match (input, target) {
        ("Hello, how are you?", "hi-IN") => "नमस्ते, आप कैसे हैं?",
        ("Hello, how are you?", "ta-IN") => "வணக்கம், நீங்கள் எப்படி இருக்கிறீர்கள்?",
        ("Hello, how are you?", "te-IN") => "నమస్కారం, మీరు ఎలా ఉన్నారు?",
        ("Hello, how are you?", "bn-IN") => "হ্যালো, আপনি কেমন আছেন?",
        ("Good morning", "hi-IN") => "शुभ प्रभात",
        ("Good morning", "te-IN") => "శుభోదయం",
        ("Good morning", "bn-IN") => "সুপ্রভাত",
        _ => return None,
    };
    Some(phrase)
}

#[async_trait]
impl Transport for CannedTransport {
    async fn send(
        &self,
        _credential: &str,
        payload: &TranslatePayload<'_>,
    ) -> Result<Value, TransportError> {
        tokio::time::sleep(self.delay).await;

        let text = canned(payload.input, payload.target_language_code).map_or_else(
            || {
                format!(
                    "[Translated to {}] {}",
                    language_name(payload.target_language_code),
                    payload.input
                )
            },
            str::to_string,
        );
        Ok(json!({ "translated_text": text }))
    }
}

/// A request as received by [`serve_once`].
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    /// Header names lowercased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Binds a local port, answers exactly one HTTP request with the given
/// status line and body, and hands back what the client sent.
pub async fn serve_once(
    status: &str,
    content_type: &str,
    body: &str,
) -> (String, tokio::task::JoinHandle<CapturedRequest>) {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/translate", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];

        let captured = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed the connection early");
            raw.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&raw).to_string();
            let Some(split) = text.find("\r\n\r\n") else {
                continue;
            };
            let (head, rest) = text.split_at(split);
            let mut lines = head.lines();
            let request_line = lines.next().unwrap_or_default().to_string();
            let headers: Vec<(String, String)> = lines
                .filter_map(|line| line.split_once(':'))
                .map(|(n, v)| (n.trim().to_ascii_lowercase(), v.trim().to_string()))
                .collect();
            let content_length = headers
                .iter()
                .find(|(n, _)| n == "content-length")
                .and_then(|(_, v)| v.parse::<usize>().ok())
                .unwrap_or(0);

            let body_bytes = raw.len() - (split + 4);
            if body_bytes >= content_length {
                break CapturedRequest {
                    request_line,
                    headers,
                    body: rest[4..].to_string(),
                };
            }
        };

        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        captured
    });

    (url, handle)
}
