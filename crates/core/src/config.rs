//! Configuration path utilities for rust-marks.
//!
//! This module resolves the location of the article store and expands
//! shell variables like `~` in paths.

/// Default path for the article store
pub const DEFAULT_STORE_PATH: &str = "~/.rust-marks/articles.json";

/// Resolves the article store path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// store path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use rust_marks_core::config::get_store_path;
///
/// // Use default path
/// let default_path = get_store_path(&None);
///
/// // Use custom path
/// let custom_path = get_store_path(&Some("/path/to/articles.json".to_string()));
/// assert_eq!(custom_path, "/path/to/articles.json");
/// ```
pub fn get_store_path(store_path_arg: &Option<String>) -> String {
    let store_path = match store_path_arg {
        Some(store_path) => store_path,
        None => DEFAULT_STORE_PATH,
    };

    shellexpand::tilde(store_path).to_string()
}
