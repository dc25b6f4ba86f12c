//! Rust Marks CLI Library
//!
//! This crate provides the command-line interface for rust-marks, a terminal
//! bookmarking tool. It handles argument parsing, rendering of saved
//! articles, and the interactive picker used to open several articles at
//! once.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`commands`]: The list, open, save, delete, clear and open-all handlers
//! - [`presenter`]: Terminal rendering of articles and results
//! - [`article_selection`]: Interactive multi-select of articles
//!
//! # Examples
//!
//! ```bash
//! # Save a page with a description and tags
//! marks save https://tokio.rs "async runtime" rust,async
//!
//! # List saved articles, then open one by ID
//! marks list
//! marks open 0
//!
//! # Pick several articles and open them all
//! marks open-all
//! ```

pub mod article_selection;
pub mod cli_args;
pub mod commands;
pub mod presenter;
