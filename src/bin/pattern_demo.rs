//! Adapter cache and specification filtering, end to end.
//!
//! Run with: cargo run --bin pattern_demo [config.toml]
//! Set RUST_LOG=pattern_kit=debug to see cache hits and misses.

use std::env;
use std::path::Path;
use std::process;

use colored::*;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pattern_kit::{filter, AdapterCache, Canvas, DemoConfig};

fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match DemoConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(config: &DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=== Adapter with Cached Factory ===".bold());

    let cache = AdapterCache::new();
    for (i, rect) in config.rectangles.iter().enumerate() {
        let mut canvas = Canvas::new();
        let rect = rect.to_rectangle()?;
        // Draw twice: the second pass is served entirely from the cache.
        for _ in 0..2 {
            canvas.draw_rectangle(&rect, &cache)?;
        }
        println!("Rectangle #{}: {}", i, canvas.points_str().join(" "));
    }
    let stats = cache.stats();
    println!(
        "Cache: {} entries, {} hits, {} misses",
        cache.len(),
        stats.hits.to_string().green(),
        stats.misses.to_string().yellow()
    );

    println!("\n{}", "=== Specification Filtering ===".bold());
    for query in &config.queries {
        let spec = query.to_spec();
        let matched = filter(&config.products, &spec).collect::<Result<Vec<_>, _>>()?;
        info!(query = %query.label, matched = matched.len(), "ran query");
        println!("{}: {}", query.label.cyan(), serde_json::to_string(&matched)?);
    }

    Ok(())
}
