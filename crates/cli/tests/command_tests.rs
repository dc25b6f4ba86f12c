//! End-to-end tests of the command handlers against a real store file,
//! with the network, the OS opener and the terminal replaced by fakes.

use async_trait::async_trait;
use rust_marks_cli::article_selection::{ArticlePicker, SelectionChoice};
use rust_marks_cli::commands::{clear_articles, list_articles, open_all_articles, save_article};
use rust_marks_cli::presenter::OutputStyle;
use rust_marks_core::article::Article;
use rust_marks_core::error::{Error, Result};
use rust_marks_core::fetch::{FetchedPage, PageFetcher};
use rust_marks_core::opener::UrlOpener;
use rust_marks_core::store::ArticleStore;
use std::cell::RefCell;
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

struct UnreachableFetcher;

#[async_trait]
impl PageFetcher for UnreachableFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        Err(Error::Misc(format!("could not connect to {url}")))
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Answers with a fixed choice and remembers the labels it was shown
struct ScriptedPicker {
    choice: SelectionChoice,
    shown: RefCell<Vec<String>>,
}

impl ScriptedPicker {
    fn new(choice: SelectionChoice) -> Self {
        Self {
            choice,
            shown: RefCell::new(vec![]),
        }
    }
}

impl ArticlePicker for ScriptedPicker {
    fn pick(&self, labels: &[String]) -> Result<SelectionChoice> {
        *self.shown.borrow_mut() = labels.to_vec();
        Ok(self.choice.clone())
    }
}

const PLAIN: OutputStyle = OutputStyle { use_color: false };

fn open_store(temp_dir: &TempDir) -> ArticleStore {
    ArticleStore::open(temp_dir.path().join("articles.json")).unwrap()
}

fn article(title: &str, url: &str) -> Article {
    Article {
        title: title.to_string(),
        url: url.to_string(),
        description: String::new(),
        tags: vec![],
    }
}

#[tokio::test]
async fn test_save_stores_and_renders_detailed() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    let fetcher = StaticFetcher {
        status: 200,
        body: "<title>Hi</title>",
    };
    let mut out = Vec::new();

    save_article(&mut store, &fetcher, "http://x", "desc", Some("t1,t2"), PLAIN, &mut out)
        .await
        .unwrap();

    let expected = Article {
        title: "Hi".to_string(),
        url: "http://x".to_string(),
        description: "desc".to_string(),
        tags: vec!["t1".to_string(), "t2".to_string()],
    };
    assert_eq!(open_store(&temp_dir).articles(), &[expected]);

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Article saved successfully."));
    assert!(output.contains("Description:"));
    assert!(output.contains("t1, t2"));
}

#[tokio::test]
async fn test_save_non_200_reports_status() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    let fetcher = StaticFetcher {
        status: 503,
        body: "",
    };
    let mut out = Vec::new();

    save_article(&mut store, &fetcher, "http://x", "desc", None, PLAIN, &mut out)
        .await
        .unwrap();

    assert!(store.articles().is_empty());
    assert!(String::from_utf8(out).unwrap().contains("status 503"));
}

#[tokio::test]
async fn test_save_transport_error_is_reported_not_raised() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    let mut out = Vec::new();

    let result = save_article(&mut store, &UnreachableFetcher, "http://x", "desc", None, PLAIN, &mut out).await;

    assert!(result.is_ok());
    assert!(store.articles().is_empty());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("could not connect to http://x"));
}

#[tokio::test]
async fn test_saved_articles_list_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    let mut sink = Vec::new();

    for (body, url) in [
        ("<title>One</title>", "http://one"),
        ("<title>Two</title>", "http://two"),
    ] {
        let fetcher = StaticFetcher { status: 200, body };
        save_article(&mut store, &fetcher, url, "", None, PLAIN, &mut sink)
            .await
            .unwrap();
    }

    let mut out = Vec::new();
    list_articles(&open_store(&temp_dir), None, PLAIN, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("One -> http://one"));
    assert!(lines[1].contains("Two -> http://two"));
}

#[test]
fn test_open_all_with_duplicate_titles_opens_selected_indexes() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    store.save_article(article("Docs", "http://first")).unwrap();
    store.save_article(article("Other", "http://other")).unwrap();
    store.save_article(article("Docs", "http://second")).unwrap();

    let picker = ScriptedPicker::new(SelectionChoice::Selected(vec![2]));
    let opener = RecordingOpener::default();
    let mut out = Vec::new();

    open_all_articles(&store, &picker, &opener, PLAIN, &mut out).unwrap();

    assert_eq!(
        *picker.shown.borrow(),
        vec![
            "Docs -> http://first",
            "Other -> http://other",
            "Docs -> http://second"
        ]
    );
    assert_eq!(*opener.opened.borrow(), vec!["http://second"]);
}

#[test]
fn test_open_all_opens_in_storage_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    store.save_article(article("A", "http://a")).unwrap();
    store.save_article(article("B", "http://b")).unwrap();
    store.save_article(article("C", "http://c")).unwrap();

    let picker = ScriptedPicker::new(SelectionChoice::Selected(vec![0, 2]));
    let opener = RecordingOpener::default();
    let mut out = Vec::new();

    open_all_articles(&store, &picker, &opener, PLAIN, &mut out).unwrap();

    assert_eq!(*opener.opened.borrow(), vec!["http://a", "http://c"]);
}

#[test]
fn test_open_all_quit_opens_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_store(&temp_dir);
    store.save_article(article("A", "http://a")).unwrap();

    let picker = ScriptedPicker::new(SelectionChoice::Quit);
    let opener = RecordingOpener::default();
    let mut out = Vec::new();

    open_all_articles(&store, &picker, &opener, PLAIN, &mut out).unwrap();

    assert!(opener.opened.borrow().is_empty());
    assert!(String::from_utf8(out).unwrap().contains("No articles opened."));
}

#[test]
fn test_open_all_empty_store_skips_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);

    let picker = ScriptedPicker::new(SelectionChoice::Selected(vec![0]));
    let opener = RecordingOpener::default();
    let mut out = Vec::new();

    open_all_articles(&store, &picker, &opener, PLAIN, &mut out).unwrap();

    assert!(picker.shown.borrow().is_empty());
    assert!(opener.opened.borrow().is_empty());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("There's no article you saved."));
}

#[test]
fn test_clear_recovers_unreadable_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("articles.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(ArticleStore::open(&path).is_err());

    let mut store = ArticleStore::unloaded(&path);
    let mut out = Vec::new();
    clear_articles(&mut store, PLAIN, &mut out).unwrap();

    assert!(String::from_utf8(out).unwrap().contains("All articles are deleted."));
    assert!(open_store(&temp_dir).articles().is_empty());
}
