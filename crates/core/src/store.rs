//! JSON-backed persistence for saved articles.
//!
//! The whole collection lives in one JSON document which is rewritten on
//! every mutation. An article's id is its position in that document.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::article::Article;
use crate::error::{Error, Result};

const STORE_DESCRIPTION: &str = "article store";

fn get_reader(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(reader) => Ok(Some(reader)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io_error(
            STORE_DESCRIPTION.to_string(),
            path.display().to_string(),
            e,
        )),
    }
}

fn read_articles(path: &Path) -> Result<Vec<Article>> {
    let Some(reader) = get_reader(path)? else {
        debug!("No article store at `{}`, starting empty", path.display());
        return Ok(vec![]);
    };

    serde_json::from_reader(reader).map_err(|e| {
        Error::json_error("reading".to_string(), path.display().to_string(), e)
    })
}

fn write_articles(path: &Path, articles: &[Article]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io_error(
                "article store directory".to_string(),
                parent.display().to_string(),
                e,
            )
        })?;
    }

    let f = File::create(path).map_err(|e| {
        Error::io_error(
            STORE_DESCRIPTION.to_string(),
            path.display().to_string(),
            e,
        )
    })?;

    serde_json::to_writer_pretty(f, articles)
        .map_err(|e| Error::json_error("writing".to_string(), path.display().to_string(), e))
}

/// The persisted, ordered collection of articles.
///
/// Constructed explicitly with [`ArticleStore::open`] and handed to the
/// command handlers that need it.
#[derive(Debug)]
pub struct ArticleStore {
    path: PathBuf,
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Loads the store at `path`.
    ///
    /// A missing file is an empty store, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// contain a JSON array of articles.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let articles = read_articles(&path)?;
        debug!(
            "Loaded {} article(s) from `{}`",
            articles.len(),
            path.display()
        );

        Ok(Self { path, articles })
    }

    /// A store at `path` whose current contents are never read.
    ///
    /// Only useful before [`ArticleStore::clear_articles`], which overwrites
    /// the file; this lets an unreadable store be reset.
    #[must_use]
    pub fn unloaded<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            articles: vec![],
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All articles in storage order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn get_article(&self, id: usize) -> Option<&Article> {
        self.articles.get(id)
    }

    /// Appends an article and rewrites the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be written. The article is
    /// not kept in memory in that case.
    pub fn save_article(&mut self, article: Article) -> Result<()> {
        self.articles.push(article);

        if let Err(e) = write_articles(&self.path, &self.articles) {
            self.articles.pop();
            return Err(e);
        }

        Ok(())
    }

    /// Removes the article at `id` and rewrites the store.
    ///
    /// Returns `false` if `id` is out of range or the write failed; the
    /// collection is unchanged in both cases.
    pub fn delete_article(&mut self, id: usize) -> bool {
        if id >= self.articles.len() {
            debug!("No article with id {id} to delete");
            return false;
        }

        let removed = self.articles.remove(id);

        match write_articles(&self.path, &self.articles) {
            Ok(()) => true,
            Err(e) => {
                error!("{e}");
                self.articles.insert(id, removed);
                false
            }
        }
    }

    /// Removes every article and rewrites the store.
    ///
    /// Returns whether the write succeeded.
    pub fn clear_articles(&mut self) -> bool {
        let previous = std::mem::take(&mut self.articles);

        match write_articles(&self.path, &self.articles) {
            Ok(()) => true,
            Err(e) => {
                error!("{e}");
                self.articles = previous;
                false
            }
        }
    }
}
