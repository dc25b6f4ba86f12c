//! Rust Marks Core Library
//!
//! This crate provides the core functionality for rust-marks, a terminal
//! bookmarking tool that fetches a page, records its title along with a
//! description and tags, and keeps the records in a local JSON file.
//!
//! # Key Features
//!
//! - **Article Model**: The stored record and comma-separated tag parsing
//! - **Article Store**: Ordered JSON-backed collection addressed by position
//! - **Page Fetching**: Single-shot HTTP GET and `<title>` extraction
//! - **Save Flow**: Store an article only when the page answers 200
//! - **URL Opening**: Hand URLs to the platform's default handler
//!
//! # Examples
//!
//! Listing saved articles:
//!
//! ```no_run
//! use rust_marks_core::config::get_store_path;
//! use rust_marks_core::store::ArticleStore;
//!
//! let store = ArticleStore::open(get_store_path(&None))?;
//! for (id, article) in store.articles().iter().enumerate() {
//!     println!("[{id}] {article}");
//! }
//! # Ok::<(), rust_marks_core::error::Error>(())
//! ```

pub mod article;
pub mod config;
pub mod error;
pub mod fetch;
pub mod opener;
pub mod saving;
pub mod store;
