use anyhow::Context;
use blogview::config::Config;
use blogview::logging;
use blogview::model::ArticleStore;
use blogview::ui;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "blogview", version, about = "Terminal blog reader")]
struct Cli {
    /// Articles JSON file overriding the built-in seed data.
    #[arg(long, value_name = "FILE")]
    articles: Option<PathBuf>,

    /// Config file path (default: platform config directory).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let store = match cli.articles.as_ref().or(config.articles.as_ref()) {
        Some(path) => ArticleStore::from_file(path)
            .with_context(|| format!("loading articles from {}", path.display()))?,
        None => ArticleStore::seed(),
    };

    tracing::info!(articles = store.articles().len(), "starting blogview");
    ui::run(store, Duration::from_millis(config.tick_rate_ms))?;
    Ok(())
}
