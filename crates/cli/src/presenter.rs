//! Terminal rendering of articles and command results.
//!
//! Everything here writes to a caller-supplied writer so the command layer
//! can be exercised against a buffer. Styling goes through [`OutputStyle`];
//! when color is off the text is written without any escape sequences.

use std::io::{stdout, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use itertools::Itertools;
use rust_marks_core::article::Article;
use rust_marks_core::error::{Error, Result};

/// How much of an article to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationMode {
    /// Every field, one per line.
    Detailed,
    /// One compact line.
    List,
}

/// Whether output is decorated with colors and attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputStyle {
    pub use_color: bool,
}

impl OutputStyle {
    #[must_use]
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colors only when `NO_COLOR` is unset and stdout is a terminal.
    #[must_use]
    pub fn from_env() -> Self {
        let use_color = std::env::var_os("NO_COLOR").is_none() && stdout().is_tty();
        Self::new(use_color)
    }

    fn label(self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn index(self, text: &str) -> String {
        if self.use_color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(self, text: &str) -> String {
        if self.use_color {
            text.dark_grey().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(self, text: &str) -> String {
        if self.use_color {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(self, text: &str) -> String {
        if self.use_color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(self, text: &str) -> String {
        if self.use_color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn failure(self, text: &str) -> String {
        if self.use_color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

const LABEL_WIDTH: usize = 13;

fn write_field<W: Write>(out: &mut W, style: OutputStyle, label: &str, value: &str) -> Result<()> {
    let label = format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH);
    writeln!(out, "{}{value}", style.label(&label))?;
    Ok(())
}

pub fn print_article<W: Write>(
    out: &mut W,
    style: OutputStyle,
    id: usize,
    article: &Article,
    mode: PresentationMode,
) -> Result<()> {
    match mode {
        PresentationMode::Detailed => {
            write_field(out, style, "ID", &id.to_string())?;
            write_field(out, style, "Title", &article.title)?;
            write_field(out, style, "URL", &article.url)?;
            write_field(out, style, "Description", &article.description)?;
            write_field(out, style, "Tags", &article.tags.iter().join(", "))?;
        }
        PresentationMode::List => {
            let index = format!("[{id}]");
            write!(out, "{} {}", style.index(&index), article.choice_label())?;
            if !article.tags.is_empty() {
                let tags = format!("({})", article.tags.iter().join(", "));
                write!(out, " {}", style.muted(&tags))?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

pub fn print_no_articles<W: Write>(out: &mut W, style: OutputStyle) -> Result<()> {
    writeln!(out, "{}", style.warning("There's no article you saved."))?;
    Ok(())
}

pub fn print_open_error<W: Write>(out: &mut W, style: OutputStyle, id: usize) -> Result<()> {
    let message = format!("There's no article with ID {id}, verify if it exists.");
    writeln!(out, "{}", style.warning(&message))?;
    Ok(())
}

pub fn print_save_status<W: Write>(out: &mut W, style: OutputStyle, status: u16) -> Result<()> {
    if status == 200 {
        writeln!(out, "{}", style.success("Article saved successfully."))?;
    } else {
        let message =
            format!("Could not save the article, the page responded with status {status}.");
        writeln!(out, "{}", style.failure(&message))?;
    }
    Ok(())
}

pub fn print_fetch_error<W: Write>(
    out: &mut W,
    style: OutputStyle,
    url: &str,
    error: &Error,
) -> Result<()> {
    let message = format!("Could not fetch `{url}`: {error}");
    writeln!(out, "{}", style.warning(&message))?;
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, style: OutputStyle, error: &Error) -> Result<()> {
    writeln!(out, "{}", style.warning(&error.to_string()))?;
    Ok(())
}

pub fn print_delete_result<W: Write>(
    out: &mut W,
    style: OutputStyle,
    id: usize,
    deleted: bool,
) -> Result<()> {
    if deleted {
        let message = format!("Article with ID {id} deleted successfully");
        writeln!(out, "{}", style.success(&message))?;
    } else {
        let message = "An error occurred while deleting the article, verify if it exists.";
        writeln!(out, "{}", style.failure(message))?;
    }
    Ok(())
}

pub fn print_clear_result<W: Write>(out: &mut W, style: OutputStyle, cleared: bool) -> Result<()> {
    if cleared {
        writeln!(out, "{}", style.success("All articles are deleted."))?;
    } else {
        let message = "An error occurred while removing all articles.";
        writeln!(out, "{}", style.failure(message))?;
    }
    Ok(())
}

pub fn print_opened<W: Write>(out: &mut W, style: OutputStyle, article: &Article) -> Result<()> {
    let message = format!("Opening {}", article.url);
    writeln!(out, "{}", style.dim(&message))?;
    Ok(())
}

pub fn print_nothing_opened<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "No articles opened.")?;
    Ok(())
}
