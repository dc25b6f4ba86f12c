//! The save flow: fetch a page, and store an article for it on success.

use log::{info, warn};

use crate::article::{parse_tags, Article};
use crate::error::Result;
use crate::fetch::{extract_title, PageFetcher};
use crate::store::ArticleStore;

/// Result of a completed fetch during save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The page answered 200 and the article was stored.
    Saved(Article),
    /// The page answered with another status; nothing was stored.
    Rejected { status: u16 },
}

impl SaveOutcome {
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            SaveOutcome::Saved(_) => 200,
            SaveOutcome::Rejected { status } => *status,
        }
    }
}

/// Fetches `url` and, if it answers 200, appends an article built from the
/// page title and the given description and tags.
///
/// # Errors
///
/// Returns an error on transport failure or if the store cannot be written.
/// No article is stored in either case.
pub async fn save_article<F: PageFetcher + ?Sized>(
    store: &mut ArticleStore,
    fetcher: &F,
    url: &str,
    description: &str,
    tags: Option<&str>,
) -> Result<SaveOutcome> {
    let page = fetcher.fetch(url).await?;

    if !page.is_ok() {
        warn!("Not saving `{url}`: server responded with {}", page.status);
        return Ok(SaveOutcome::Rejected {
            status: page.status,
        });
    }

    let article = Article {
        title: extract_title(&page.body),
        url: url.to_string(),
        description: description.to_string(),
        tags: parse_tags(tags),
    };

    store.save_article(article.clone())?;
    info!("Saved `{url}` as article {}", store.articles().len() - 1);

    Ok(SaveOutcome::Saved(article))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fetch::FetchedPage;
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct StaticFetcher {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            Ok(FetchedPage {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage> {
            Err(Error::Misc(format!("connection refused: {url}")))
        }
    }

    fn empty_store(temp_dir: &TempDir) -> ArticleStore {
        ArticleStore::open(temp_dir.path().join("articles.json")).unwrap()
    }

    #[tokio::test]
    async fn test_save_on_200() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = empty_store(&temp_dir);
        let fetcher = StaticFetcher {
            status: 200,
            body: "<title>Hi</title>",
        };

        let outcome = save_article(&mut store, &fetcher, "http://x", "desc", Some("t1,t2"))
            .await
            .unwrap();

        let expected = Article {
            title: "Hi".to_string(),
            url: "http://x".to_string(),
            description: "desc".to_string(),
            tags: vec!["t1".to_string(), "t2".to_string()],
        };
        assert_eq!(outcome, SaveOutcome::Saved(expected.clone()));
        assert_eq!(store.articles(), &[expected]);
    }

    #[tokio::test]
    async fn test_save_without_title_or_tags() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = empty_store(&temp_dir);
        let fetcher = StaticFetcher {
            status: 200,
            body: "<p>untitled</p>",
        };

        save_article(&mut store, &fetcher, "http://x", "desc", None)
            .await
            .unwrap();

        let article = store.get_article(0).unwrap();
        assert_eq!(article.title, "");
        assert!(article.tags.is_empty());
    }

    #[tokio::test]
    async fn test_non_200_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = empty_store(&temp_dir);

        for status in [201, 301, 404, 500] {
            let fetcher = StaticFetcher {
                status,
                body: "<title>Nope</title>",
            };
            let outcome = save_article(&mut store, &fetcher, "http://x", "desc", None)
                .await
                .unwrap();

            assert_eq!(outcome, SaveOutcome::Rejected { status });
            assert_eq!(outcome.status(), status);
        }

        assert!(store.articles().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_transport_error_stores_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = empty_store(&temp_dir);

        let result = save_article(&mut store, &FailingFetcher, "http://x", "desc", None).await;

        assert!(result.is_err());
        assert!(store.articles().is_empty());
    }
}
