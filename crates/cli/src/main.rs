use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rust_marks_core::config;
use rust_marks_core::error::Result;
use rust_marks_core::fetch::HttpFetcher;
use rust_marks_core::opener::SystemOpener;
use rust_marks_core::store::ArticleStore;

use rust_marks_cli::article_selection::TerminalPicker;
use rust_marks_cli::cli_args::{Args, MarksCommand};
use rust_marks_cli::commands;
use rust_marks_cli::presenter::OutputStyle;

async fn execute() -> Result<()> {
    let args = Args::parse();

    let store_path = config::get_store_path(&args.store_path);
    debug!("Store path: `{}`", store_path);

    let style = OutputStyle::from_env();
    let mut stdout = stdout();

    match args.command {
        MarksCommand::List { tag } => {
            let store = ArticleStore::open(&store_path)?;
            commands::list_articles(&store, tag.as_deref(), style, &mut stdout)?
        }
        MarksCommand::Open { id } => {
            let store = ArticleStore::open(&store_path)?;
            commands::open_article(&store, &SystemOpener, id, style, &mut stdout)?
        }
        MarksCommand::Save {
            url,
            description,
            tags,
        } => {
            let mut store = ArticleStore::open(&store_path)?;
            commands::save_article(
                &mut store,
                &HttpFetcher::new(),
                &url,
                &description,
                tags.as_deref(),
                style,
                &mut stdout,
            )
            .await?
        }
        MarksCommand::Delete { id } => {
            let mut store = ArticleStore::open(&store_path)?;
            commands::delete_article(&mut store, id, style, &mut stdout)?
        }
        // Clearing overwrites the file, so a corrupt store can still be reset
        MarksCommand::Clear => {
            let mut store = ArticleStore::unloaded(&store_path);
            commands::clear_articles(&mut store, style, &mut stdout)?
        }
        MarksCommand::OpenAll => {
            let store = ArticleStore::open(&store_path)?;
            commands::open_all_articles(&store, &TerminalPicker, &SystemOpener, style, &mut stdout)?
        }
    }

    stdout.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
