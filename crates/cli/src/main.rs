mod echo;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use newswire_core::{Article, FeedQuery, FetchConfig, Newswire, SortOrder, fetch_articles, parse_articles};
use owo_colors::OwoColorize;

use crate::echo::{print_banner, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the article list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Fetch news feed articles and print them as a list
#[derive(Parser, Debug)]
#[command(name = "newswire")]
#[command(author = "Newswire Contributors")]
#[command(version = VERSION)]
#[command(about = "Fetch and display news feed articles", long_about = None)]
struct Args {
    /// "latest" to query the API, a feed URL, a local JSON file, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "latest")]
    input: String,

    /// Topic to search for
    #[arg(short = 'q', long, value_name = "TOPIC")]
    topic: Option<String>,

    /// Sort order (newest, oldest, relevance)
    #[arg(long, default_value = "newest", value_name = "ORDER")]
    order_by: SortOrder,

    /// Number of articles to request
    #[arg(long, default_value = "20", value_name = "NUM")]
    page_size: u32,

    /// API key for the feed endpoint
    #[arg(
        long,
        env = "NEWSWIRE_API_KEY",
        default_value = newswire_core::DEFAULT_API_KEY,
        value_name = "KEY"
    )]
    api_key: String,

    /// Search endpoint to query
    #[arg(long, default_value = newswire_core::DEFAULT_ENDPOINT, value_name = "URL")]
    endpoint: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Connect timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Render the article list as plain text, one block per article
fn render_text(articles: &[Article]) -> String {
    let mut out = String::new();
    for article in articles {
        out.push_str(&article.title);
        out.push('\n');
        out.push_str(&format!("  {} | {}\n", article.section, article.date));
        out.push_str(&format!("  {}\n", article.author));
        out.push_str(&format!("  {}\n\n", article.url));
    }
    out
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "newswire=debug,newswire_core=debug".into()),
            )
            .with_writer(io::stderr)
            .init();
        print_banner();
    }

    let mut fetch_config = FetchConfig {
        connect_timeout: args.connect_timeout,
        read_timeout: args.timeout,
        ..FetchConfig::default()
    };
    if let Some(ua) = args.user_agent {
        fetch_config.user_agent = ua;
    }

    let articles: Option<Vec<Article>> = if args.input == "latest" {
        let mut builder = FeedQuery::builder()
            .endpoint(args.endpoint)
            .api_key(args.api_key)
            .order_by(args.order_by)
            .page_size(args.page_size);
        if let Some(topic) = args.topic {
            builder = builder.topic(topic);
        }

        let wire = Newswire::with_config(builder.build(), fetch_config);
        if args.verbose
            && let Ok(url) = wire.request_url()
        {
            print_step(1, 3, &format!("Fetching {}", url.as_str().bright_white().underline()));
        }
        wire.fetch_latest().await
    } else if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            print_step(
                1,
                3,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }
        fetch_articles(&args.input, &fetch_config).await
    } else if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        parse_articles(&buffer)
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        let content =
            fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?;
        parse_articles(&content)
    };

    let articles = match articles {
        Some(list) if !list.is_empty() => list,
        Some(_) => {
            print_warning("the feed returned no articles");
            return Ok(());
        }
        None => {
            print_warning("no articles available");
            return Ok(());
        }
    };

    if args.verbose {
        print_step(2, 3, "Rendering articles");
        print_info(&format!("{} article(s)", articles.len()));
    }

    let output = match args.format {
        OutputFormat::Text => render_text(&articles),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&articles).context("Failed to serialize articles")?;
            json.push('\n');
            json
        }
    };

    if args.verbose {
        print_step(3, 3, "Writing output");
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
