//! file: main.rs
//! author: Jacob Xie
//! date: 2025/12/20 09:57:12 Saturday
//! brief:

use gpui_capitals::{app, config::QuizConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = QuizConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        pairs = config.pair_count,
        offline = config.offline,
        "starting capitals quiz"
    );
    app::run(config);
}
