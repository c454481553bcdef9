mod config;
mod discovery;
mod errors;
mod fetch;
mod finder;
mod llm_client;
mod models;
mod search;
mod validate;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fetch::BrowserlessFetcher;
use crate::finder::{CareerPageFinder, DEFAULT_MAX_CANDIDATES};
use crate::llm_client::LlmClient;
use crate::models::{CareerPageResult, CompanyQuery, SiteResult};
use crate::search::SerperClient;
use crate::validate::LlmJudge;

#[derive(Parser, Debug)]
#[command(name = "finder", version, about = "Finds a company's careers page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the careers page of a company.
    Find {
        #[arg(long)]
        company: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        /// Official website, if already known. Skips discovery.
        #[arg(long)]
        website: Option<String>,
        /// How many search hits to fetch and judge.
        #[arg(long, default_value_t = DEFAULT_MAX_CANDIDATES)]
        max_candidates: usize,
        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Find only the official website of a company.
    Site {
        #[arg(long)]
        company: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse argv before touching the environment: --help, --version, and
    // argument errors must work without any API keys configured.
    let cli = Cli::parse();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let search = Arc::new(SerperClient::new(config.serper_api_key.clone())?);
    let llm = LlmClient::new(config.anthropic_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let judge = Arc::new(LlmJudge::new(llm));

    match cli.command {
        Command::Find {
            company,
            city,
            country,
            website,
            max_candidates,
            json,
        } => {
            let fetcher = Arc::new(BrowserlessFetcher::new(config.browserless_url.clone())?);
            let finder = CareerPageFinder::new(search, fetcher, judge)
                .with_max_candidates(max_candidates);

            let mut query = CompanyQuery::new(company, city, country);
            if let Some(website) = website {
                query = query.with_website(website);
            }

            let result = finder.find(&query).await?;
            print_find_result(&result, json)?;
        }
        Command::Site {
            company,
            city,
            country,
            json,
        } => {
            let query = CompanyQuery::new(company, city, country);
            let result =
                discovery::find_official_site(&query, search.as_ref(), judge.as_ref()).await?;
            print_site_result(&result, json)?;
        }
    }

    Ok(())
}

fn print_find_result(result: &CareerPageResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Company:    {}", result.company_name);
    println!("Career URL: {}", result.url);
    println!("Confidence: {:.2}", result.confidence_score);
    println!("Reasoning:  {}", result.validation_reasoning);
    if !result.found_indicators.is_empty() {
        println!("Indicators: {}", result.found_indicators.join(", "));
    }
    Ok(())
}

fn print_site_result(result: &SiteResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Website:    {}", result.url);
    println!("Confidence: {:.2}", result.confidence);
    println!("Notes:      {}", result.notes);
    Ok(())
}
