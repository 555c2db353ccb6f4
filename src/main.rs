mod output;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use trie_search::{SearchOptions, StringifyMode, TrieSearch};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "trie-search")]
#[command(about = "Prefix search over the records of a JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a JSON array and print the records matching a query
    Search {
        /// JSON file holding an array of records
        file: PathBuf,

        /// Search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Print matches as JSON lines
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show the tokens a piece of text is indexed under
    Tokens {
        /// Text to tokenize
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Index a JSON array and show index statistics
    Stats {
        /// JSON file holding an array of records
        file: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Args)]
struct EngineArgs {
    /// JSON options file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Match case exactly
    #[arg(short = 's', long)]
    case_sensitive: bool,

    /// Only match whole words, never prefixes
    #[arg(short, long)]
    exact: bool,

    /// Index field values only, not field names
    #[arg(long)]
    ignore_keys: bool,
}

impl EngineArgs {
    fn options(&self) -> Result<SearchOptions> {
        let mut options = match &self.config {
            Some(path) => SearchOptions::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => SearchOptions::default(),
        };
        if self.case_sensitive {
            options.case_sensitive = true;
        }
        if self.exact {
            options.exclude_partial = true;
        }
        if self.ignore_keys {
            options.stringify = StringifyMode::JsonValuesOnly;
        }
        Ok(options)
    }

    fn engine(&self) -> Result<TrieSearch<Value>> {
        TrieSearch::with_options(self.options()?).context("Invalid search options")
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            file,
            query,
            engine,
            json,
            no_color,
        } => {
            let mut search = engine.engine()?;
            load_records(&mut search, &file)?;

            let query = query.join(" ");
            let results = search.search(&query);
            let matches: Vec<&Value> = results.iter().map(|v| v.as_ref()).collect();

            if json {
                output::print_json_lines(&matches)?;
            } else {
                let tokens = search.tokens_for(&query);
                let normalize = |word: &str| search.tokens_for(word);
                output::print_matches(&matches, &tokens, &normalize, !no_color)?;
            }
        }
        Commands::Tokens { text, engine } => {
            let search = engine.engine()?;
            output::print_tokens(&search.tokens_for(&text.join(" ")))?;
        }
        Commands::Stats { file, engine } => {
            let mut search = engine.engine()?;
            load_records(&mut search, &file)?;
            println!("Source:           {}", file.display());
            println!("{}", search.stats());
        }
    }

    Ok(())
}

/// Index every element of the JSON array in `path`
fn load_records(search: &mut TrieSearch<Value>, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let Value::Array(records) = records else {
        bail!("{} does not contain a JSON array", path.display());
    };

    let count = records.len();
    search.add_many(records)?;
    tracing::info!(records = count, "indexed {}", path.display());

    Ok(())
}
