//! Quote sources: where the candidate pool comes from.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::QuotesConfig;
use crate::engine::Quote;

use super::error::QuoteError;
use super::raw::parse_quotes;

/// Supplies the candidate pool for a game session.
pub trait QuoteSource {
    /// Human-readable origin for logs and error messages.
    fn origin(&self) -> String;

    fn fetch(&self) -> impl Future<Output = Result<Vec<Quote>, QuoteError>> + Send;
}

/// Fetches quotes from an HTTP endpoint serving a JSON array.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| QuoteError::Http {
                url: url.clone(),
                source,
            })?;
        Ok(Self { client, url })
    }
}

impl QuoteSource for HttpQuoteSource {
    fn origin(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        let http_err = |source| QuoteError::Http {
            url: self.url.clone(),
            source,
        };
        let response = self.client.get(&self.url).send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await.map_err(http_err)?;
        let quotes = parse_quotes(&body).map_err(|source| QuoteError::Parse {
            origin: self.origin(),
            source,
        })?;
        non_empty(quotes, self.origin())
    }
}

/// Reads quotes from a local JSON file with the same shape as the API.
pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteSource for FileQuoteSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| QuoteError::Io {
                path: self.path.clone(),
                source,
            })?;
        let quotes = parse_quotes(&content).map_err(|source| QuoteError::Parse {
            origin: self.origin(),
            source,
        })?;
        non_empty(quotes, self.origin())
    }
}

/// Compiled-in pool, used when nothing else is reachable.
pub struct BuiltinQuoteSource;

const BUILTIN_QUOTES: &[(&str, &str)] = &[
    ("Well begun is half done.", "Aristotle"),
    ("Fortune favors the bold.", "Virgil"),
    ("Be so good they can't ignore you.", "Steve Martin"),
    ("Knowledge is power.", "Francis Bacon"),
    ("Time is money.", "Benjamin Franklin"),
    ("Less is more.", "Robert Browning"),
    ("Stay hungry, stay foolish.", "Stewart Brand"),
    ("The only way out is through.", "Robert Frost"),
    ("Dream big and dare to fail.", "Norman Vaughan"),
    ("Whatever you are, be a good one.", "Abraham Lincoln"),
    ("Well done is better than well said.", "Benjamin Franklin"),
    ("Turn your wounds into wisdom.", "Oprah Winfrey"),
];

impl BuiltinQuoteSource {
    pub fn quotes() -> Vec<Quote> {
        BUILTIN_QUOTES
            .iter()
            .map(|(text, author)| Quote::new(*text, *author))
            .collect()
    }
}

impl QuoteSource for BuiltinQuoteSource {
    fn origin(&self) -> String {
        "builtin quotes".to_string()
    }

    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        Ok(Self::quotes())
    }
}

fn non_empty(quotes: Vec<Quote>, origin: String) -> Result<Vec<Quote>, QuoteError> {
    if quotes.is_empty() {
        Err(QuoteError::Empty { origin })
    } else {
        Ok(quotes)
    }
}

/// Load the pool described by configuration.
///
/// A configured file wins over the URL. If the configured source fails, the
/// error is logged and the builtin pool is used so the game can still start.
pub async fn load_quotes(config: &QuotesConfig) -> Vec<Quote> {
    let result = match &config.file {
        Some(path) => fetch_logged(&FileQuoteSource::new(path)).await,
        None => {
            let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
            match HttpQuoteSource::new(config.url.clone(), timeout) {
                Ok(source) => fetch_logged(&source).await,
                Err(err) => Err(err),
            }
        }
    };

    match result {
        Ok(quotes) => quotes,
        Err(err) => {
            tracing::warn!(error = %err, "Falling back to builtin quotes");
            BuiltinQuoteSource::quotes()
        }
    }
}

async fn fetch_logged<S: QuoteSource>(source: &S) -> Result<Vec<Quote>, QuoteError> {
    let origin = source.origin();
    tracing::info!(%origin, "Fetching quotes");
    let quotes = source.fetch().await?;
    tracing::info!(%origin, count = quotes.len(), "Fetched quotes");
    Ok(quotes)
}
