//! The user-invocable operations.
//!
//! Each handler receives the store and whatever collaborators it needs, and
//! writes everything the user should see to `out`. Failures that the user
//! should simply be told about (bad status, unknown id, failed write) are
//! rendered and reported as `Ok`; only output and terminal errors propagate.

use std::io::Write;

use log::{debug, warn};
use rust_marks_core::error::{Error, Result};
use rust_marks_core::fetch::PageFetcher;
use rust_marks_core::opener::UrlOpener;
use rust_marks_core::saving::{self, SaveOutcome};
use rust_marks_core::store::ArticleStore;

use crate::article_selection::{ArticlePicker, SelectionChoice};
use crate::presenter::{self, OutputStyle, PresentationMode};

/// Prints every article, optionally only those carrying `tag`.
pub fn list_articles<W: Write>(
    store: &ArticleStore,
    tag: Option<&str>,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let mut printed = 0usize;

    for (id, article) in store.articles().iter().enumerate() {
        if tag.is_some_and(|tag| !article.has_tag(tag)) {
            continue;
        }

        presenter::print_article(out, style, id, article, PresentationMode::List)?;
        printed += 1;
    }

    if printed == 0 {
        presenter::print_no_articles(out, style)?;
    }

    Ok(())
}

pub fn open_article<O, W>(
    store: &ArticleStore,
    opener: &O,
    id: usize,
    style: OutputStyle,
    out: &mut W,
) -> Result<()>
where
    O: UrlOpener + ?Sized,
    W: Write,
{
    let Some(article) = store.get_article(id) else {
        return presenter::print_open_error(out, style, id);
    };

    presenter::print_opened(out, style, article)?;
    if let Err(e) = opener.open(&article.url) {
        presenter::print_error(out, style, &e)?;
    }

    Ok(())
}

/// Fetches `url` and stores it as an article if the page answers 200.
pub async fn save_article<F, W>(
    store: &mut ArticleStore,
    fetcher: &F,
    url: &str,
    description: &str,
    tags: Option<&str>,
    style: OutputStyle,
    out: &mut W,
) -> Result<()>
where
    F: PageFetcher + ?Sized,
    W: Write,
{
    match saving::save_article(store, fetcher, url, description, tags).await {
        Ok(SaveOutcome::Saved(article)) => {
            presenter::print_save_status(out, style, 200)?;
            let id = store.articles().len() - 1;
            presenter::print_article(out, style, id, &article, PresentationMode::Detailed)
        }
        Ok(SaveOutcome::Rejected { status }) => presenter::print_save_status(out, style, status),
        Err(e @ Error::Http(_)) => presenter::print_fetch_error(out, style, url, &e),
        Err(e) => presenter::print_error(out, style, &e),
    }
}

pub fn delete_article<W: Write>(
    store: &mut ArticleStore,
    id: usize,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let deleted = store.delete_article(id);
    presenter::print_delete_result(out, style, id, deleted)
}

pub fn clear_articles<W: Write>(
    store: &mut ArticleStore,
    style: OutputStyle,
    out: &mut W,
) -> Result<()> {
    let cleared = store.clear_articles();
    presenter::print_clear_result(out, style, cleared)
}

/// Lets the user check any number of articles and opens each of them.
pub fn open_all_articles<P, O, W>(
    store: &ArticleStore,
    picker: &P,
    opener: &O,
    style: OutputStyle,
    out: &mut W,
) -> Result<()>
where
    P: ArticlePicker + ?Sized,
    O: UrlOpener + ?Sized,
    W: Write,
{
    let articles = store.articles();
    if articles.is_empty() {
        return presenter::print_no_articles(out, style);
    }

    let labels: Vec<String> = articles.iter().map(|a| a.choice_label()).collect();

    let selected = match picker.pick(&labels)? {
        SelectionChoice::Selected(indexes) => indexes,
        SelectionChoice::Quit => {
            debug!("Open all cancelled");
            return presenter::print_nothing_opened(out);
        }
    };

    for index in selected {
        let Some(article) = articles.get(index) else {
            warn!("Picker returned unknown index {index}");
            continue;
        };

        presenter::print_opened(out, style, article)?;
        if let Err(e) = opener.open(&article.url) {
            presenter::print_error(out, style, &e)?;
        }
    }

    Ok(())
}
