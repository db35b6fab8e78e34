//! Demo that renders a small feed of sample stories and prints the HTML.
//! Reads `.env` (for SOURCE_MAP_PATH) and honours RUST_LOG.

use source_positivity_bar::config::load_source_table_default;
use source_positivity_bar::feed::{render_feed, FeedStory};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("positivity_bar=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .init();

    let table = load_source_table_default()?;

    let samples = [
        ("www.cnn.com", Some(8.2)),
        ("bbc.com", Some(6.9)),
        ("sub.reuters.com", Some(72.6)),
        ("example-news.org", None),
        ("", Some(4.5)),
    ];
    let stories: Vec<FeedStory> = samples
        .iter()
        .map(|(src, score)| FeedStory {
            source: Some(src.to_string()),
            positivity_score: *score,
            ..FeedStory::default()
        })
        .collect();

    for (story, bar) in stories.iter().zip(render_feed(&table, &stories)) {
        let src = story.source.as_deref().unwrap_or_default();
        match bar {
            Some(b) => println!("{src:>20}  {}", b.to_html()),
            None => println!("{src:>20}  (no bar)"),
        }
    }

    println!("bar-demo done");
    Ok(())
}
