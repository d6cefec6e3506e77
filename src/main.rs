// Internal linking CLI
//
// Reads a sitemap URL list and one or more generated article HTML files, and
// writes the articles back with internal links inserted.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use kodegen_tools_interlink::{InternalLinker, LinkerConfig, UrlListFile};

#[derive(Parser)]
#[command(name = "kodegen-interlink")]
#[command(version, about = "Insert internal links into generated articles", long_about = None)]
#[command(after_help = "EXAMPLES:
    kodegen-interlink --urls sitemap.txt --input article.html > linked.html
    kodegen-interlink --urls sitemap.txt --input a.html --input b.html --output-dir out/
    kodegen-interlink --urls sitemap.txt --stats")]
struct Cli {
    /// Plain-text URL list, one URL per line
    #[arg(long, value_name = "FILE")]
    urls: PathBuf,

    /// Article HTML file(s) to link
    #[arg(short, long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Directory for linked articles (file names are kept)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// JSON configuration file; flags below override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed link budget per article
    #[arg(long)]
    max_links: Option<usize>,

    /// Lower bound of the words-per-link range
    #[arg(long, requires = "max_words")]
    min_words: Option<usize>,

    /// Upper bound of the words-per-link range
    #[arg(long, requires = "min_words")]
    max_words: Option<usize>,

    /// Use the stricter 0.3 relevance threshold
    #[arg(long)]
    strict: bool,

    /// Refill the budget when a selected candidate yields no link
    #[arg(long)]
    refill: bool,

    /// Print catalog statistics as JSON
    #[arg(long)]
    stats: bool,

    /// Print a JSON run report per article on stderr
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let source = UrlListFile::new(&cli.urls);
    let linker = InternalLinker::from_source(&source, config)
        .with_context(|| format!("Failed to initialise linker from {}", cli.urls.display()))?;

    if cli.stats {
        println!("{}", serde_json::to_string_pretty(&linker.statistics())?);
    }

    if cli.inputs.is_empty() {
        if !cli.stats {
            bail!("no --input given; nothing to link");
        }
        return Ok(());
    }
    if cli.inputs.len() > 1 && cli.output_dir.is_none() {
        bail!("--output-dir is required when linking more than one article");
    }

    let articles = cli
        .inputs
        .iter()
        .map(|path| fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display())))
        .collect::<Result<Vec<_>>>()?;

    let reports = linker.link_articles(&articles);

    for (path, report) in cli.inputs.iter().zip(&reports) {
        if cli.report {
            eprintln!("{}", serde_json::to_string_pretty(&report.stats)?);
        }
        match &cli.output_dir {
            Some(dir) => write_output(dir, path, &report.html)?,
            None => print!("{}", report.html),
        }
    }

    let injected: usize = reports.iter().map(|r| r.stats.injected()).sum();
    tracing::info!(articles = reports.len(), injected, "Done");

    Ok(())
}

fn build_config(cli: &Cli) -> Result<LinkerConfig> {
    let mut config = match &cli.config {
        Some(path) => LinkerConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LinkerConfig::default(),
    };

    if cli.strict {
        config.min_score = LinkerConfig::strict().min_score;
    }
    if let (Some(min), Some(max)) = (cli.min_words, cli.max_words) {
        config.words_per_link = kodegen_tools_interlink::WordsPerLink::new(min, max);
    }
    if cli.max_links.is_some() {
        config.max_links = cli.max_links;
    }
    if cli.refill {
        config.refill_on_anchor_miss = true;
    }

    config.validate().context("Invalid linker configuration")?;
    Ok(config)
}

fn write_output(dir: &Path, input: &Path, html: &str) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let name = input
        .file_name()
        .with_context(|| format!("Input path has no file name: {}", input.display()))?;
    let target = dir.join(name);
    fs::write(&target, html).with_context(|| format!("Failed to write {}", target.display()))?;
    tracing::debug!(path = %target.display(), "Wrote linked article");
    Ok(())
}
