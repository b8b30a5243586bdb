// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and validate them
// 2. Create the output directory
// 3. Launch one headless browser for the whole crawl
// 4. Run the crawl, then close the browser (whatever happened to the pages)
// 5. Print the report and exit with a proper code
//    (0 = every page archived, 1 = some pages failed, 2 = fatal error)
// =============================================================================

mod archive;   // src/archive/ - turning pages into PDFs
mod cli;       // src/cli.rs - command-line parsing
mod config;    // src/config.rs - validated settings
mod crawl;     // src/crawl/ - the crawl loop
mod error;     // src/error.rs - error types
mod logging;   // src/logging.rs - tracing setup
mod render;    // src/render/ - the browser

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use cli::Cli;
use config::CrawlConfig;
use crawl::{CrawlEngine, CrawlReport};
use render::ChromeRenderer;

#[tokio::main]
async fn main() {
    logging::init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every visited page was archived
//   Ok(1) = at least one page failed
//   Err = the crawl could not run at all
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = CrawlConfig::try_from(&cli)?;

    prepare_output_dir(&config.output_dir).await?;

    let mut renderer = ChromeRenderer::launch(&config.browser)
        .await
        .context("Failed to launch browser")?;

    let report = CrawlEngine::from_config(&config).run(&mut renderer).await;

    if let Err(e) = renderer.close().await {
        tracing::warn!("Browser did not shut down cleanly: {}", e);
    }

    print_results(&report, cli.json)?;

    if report.is_complete() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Creates the output directory and any missing parents
async fn prepare_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}

// Prints the report either as a table or JSON
fn print_results(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_table(report);
    }
    Ok(())
}

// Prints the report as a human-readable table
fn print_table(report: &CrawlReport) {
    println!("{:<60} {:<10} {:<40}", "URL", "STATUS", "OUTPUT");
    println!("{}", "=".repeat(110));

    for artifact in &report.archived {
        println!(
            "{:<60} {:<10} {:<40}",
            truncate(&artifact.source_url, 57),
            "SAVED",
            artifact.path.display()
        );
    }
    for failure in &report.failed {
        println!(
            "{:<60} {:<10} {:<40}",
            truncate(&failure.url, 57),
            "FAILED",
            failure.error
        );
    }

    println!();
    println!("Summary for {} (max depth {}):", report.seed_url, report.max_depth);
    println!("   Attempted: {}", report.pages_attempted());
    println!("   Saved: {}", report.archived.len());
    println!("   Failed: {}", report.failed.len());
    println!("   Links unreadable: {}", report.link_errors.len());
    println!("   Already visited: {}", report.skipped);
    println!("   Out of scope: {}", report.out_of_scope);
}

// Shortens long URLs so the table stays aligned
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prepare_output_dir_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b").join("pdfs");

        prepare_output_dir(&dir).await.unwrap();
        assert!(dir.is_dir());

        // Already there is fine
        prepare_output_dir(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_prepare_output_dir_fails_under_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let err = prepare_output_dir(&file.join("pdfs")).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to create output directory"));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("https://example.com/", 57), "https://example.com/");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = format!("https://example.com/{}", "a".repeat(100));
        let short = truncate(&long, 57);
        assert_eq!(short.chars().count(), 60);
        assert!(short.ends_with("..."));
    }
}
