//! Remote page fetching and title extraction.

use async_trait::async_trait;
use itertools::Itertools;
use log::debug;
use scraper::{Html, Selector};

use crate::error::Result;

/// Status code and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Single-shot GET of a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` once.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure. Any HTTP status, including
    /// error statuses, is a successful fetch.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// [`PageFetcher`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        debug!("GET {url} responded with {status}");

        // Error bodies are never used; a broken one must not hide the status
        if status != 200 {
            return Ok(FetchedPage {
                status,
                body: String::new(),
            });
        }

        let body = response.text().await?;

        Ok(FetchedPage { status, body })
    }
}

/// Returns the document title of `html`, or an empty string if it has none.
///
/// ASCII whitespace inside the title is collapsed to single spaces, like a
/// browser's `document.title`; other spaces such as `&nbsp;` are kept.
#[must_use]
pub fn extract_title(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|title| title.text().flat_map(str::split_ascii_whitespace).join(" "))
        .unwrap_or_default()
}
