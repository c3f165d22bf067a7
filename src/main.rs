//! Handbook FAQ Assistant - Binary Entry Point
//!
//! Loads the FAQ corpus, builds the search context once and serves it over HTTP.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use handbook_faq::api;
use handbook_faq::{BasicEngine, Config, FaqCorpus, SearchContext, SynonymTable};

#[tokio::main]
async fn main() -> handbook_faq::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        version = handbook_faq::VERSION,
        faq_file = %config.faq_file.display(),
        "starting FAQ server"
    );

    // Without an engine nothing can be matched, so this is fatal
    let engine = BasicEngine::with_stop_words_file(config.stopwords_file.as_deref())?;

    // A missing corpus is not: every question then gets the no-match reply
    let corpus = FaqCorpus::load_or_empty(&config.faq_file);

    let ctx = Arc::new(SearchContext::with_thresholds(
        engine,
        SynonymTable::handbook(),
        corpus,
        config.thresholds,
    ));

    let static_dir = config.static_dir.is_dir().then_some(config.static_dir.as_path());
    if static_dir.is_none() {
        tracing::warn!(
            dir = %config.static_dir.display(),
            "static directory not found, not serving /static"
        );
    }

    let router = api::create_router(ctx, static_dir);
    api::serve(router, &config.bind_addr()).await?;

    Ok(())
}
