use log::info;

use crate::error::{Error, Result};

/// Hands a URL to something that can open it.
pub trait UrlOpener {
    /// Opens `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL could not be handed off.
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!("Opening `{url}` with the default handler");
        open::that_detached(url).map_err(|e| Error::open_error(url.to_string(), e))
    }
}
