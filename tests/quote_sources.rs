//! HTTP and file quote sources against local fixtures.

use quoteguess::config::QuotesConfig;
use quoteguess::engine::Quote;
use quoteguess::quotes::{load_quotes, HttpQuoteSource, QuoteError, QuoteSource};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve a single canned HTTP response and return the URL to fetch.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    });
    format!("http://{}/api/quotes", addr)
}

#[tokio::test]
async fn http_source_validates_api_payload() {
    let url = serve_once(
        "200 OK",
        r#"[
            {"text": "Genius is patience.", "author": "Isaac Newton, type.fit"},
            {"text": "Nothing is impossible.", "author": null},
            {"text": "", "author": "Blank"},
            {"author": "Missing text"}
        ]"#,
    )
    .await;

    let source = HttpQuoteSource::new(url.clone(), Duration::from_secs(5)).unwrap();
    assert_eq!(source.origin(), url);
    let quotes = source.fetch().await.unwrap();
    assert_eq!(
        quotes,
        vec![
            Quote::new("Genius is patience.", "Isaac Newton"),
            Quote::new("Nothing is impossible.", "Unknown"),
        ]
    );
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let url = serve_once("503 Service Unavailable", "[]").await;
    let source = HttpQuoteSource::new(url, Duration::from_secs(5)).unwrap();
    assert!(matches!(
        source.fetch().await,
        Err(QuoteError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn http_non_json_body_is_parse_error() {
    let url = serve_once("200 OK", "<html>nope</html>").await;
    let source = HttpQuoteSource::new(url, Duration::from_secs(5)).unwrap();
    assert!(matches!(source.fetch().await, Err(QuoteError::Parse { .. })));
}

#[tokio::test]
async fn configured_file_wins_over_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.json");
    std::fs::write(&path, r#"[{"text": "Local only.", "author": "Me"}]"#).unwrap();

    let config = QuotesConfig {
        url: "http://127.0.0.1:9/unreachable".to_string(),
        file: Some(path),
        timeout_seconds: 1,
    };
    assert_eq!(load_quotes(&config).await, vec![Quote::new("Local only.", "Me")]);
}

#[tokio::test]
async fn unreachable_url_falls_back_to_builtin() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = QuotesConfig {
        url: format!("http://{}/api/quotes", addr),
        file: None,
        timeout_seconds: 1,
    };
    let quotes = load_quotes(&config).await;
    assert!(!quotes.is_empty());
    assert!(quotes.iter().all(|q| q.is_eligible(40)));
}
