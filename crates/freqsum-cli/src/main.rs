use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use freqsum_core::{Summarizer, SummarizerConfig, Summary, WordFrequencies};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_ARTICLE: &str = include_str!("demo_article.txt");

#[derive(Parser, Debug)]
#[command(name = "freqsum", version, about = "Frequency-based extractive text summarizer")]
struct Cli {
    /// File to summarize; omit or pass `-` to read stdin.
    input: Option<PathBuf>,
    /// Number of sentences to keep (overrides the config file).
    #[arg(short = 'n', long = "sentences")]
    sentences: Option<usize>,
    /// JSON summarizer config.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Extra stop words, one per line.
    #[arg(long)]
    stop_words: Option<PathBuf>,
    /// Do not use the built-in English stop words.
    #[arg(long)]
    no_default_stop_words: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Also report the N most frequent document words.
    #[arg(long, value_name = "N")]
    keywords: Option<usize>,
    /// Summarize the built-in example article.
    #[arg(long, conflicts_with = "input")]
    demo: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Keyword<'a> {
    word: &'a str,
    count: u32,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    summary: Summary<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<Keyword<'a>>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let text = read_input(&cli)?;
    let summarizer = Summarizer::with_config(config);

    let summary = summarizer.summarize(&text).context("failed to summarize input")?;
    info!(
        selected = summary.len(),
        total = summary.total_sentences,
        "summarized document"
    );

    let frequencies = cli
        .keywords
        .map(|_| WordFrequencies::count(&text, summarizer.stop_words()));
    let keywords = match (cli.keywords, &frequencies) {
        (Some(n), Some(freqs)) => Some(
            freqs
                .most_common(n)
                .into_iter()
                .map(|(word, count)| Keyword { word, count })
                .collect(),
        ),
        _ => None,
    };

    let report = Report { summary, keywords };
    println!("{}", render(&report, cli.format)?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SummarizerConfig::default(),
    };
    if let Some(n) = cli.sentences {
        config.num_sentences = n;
    }
    if cli.no_default_stop_words {
        config.stop_words.use_default = false;
    }
    if let Some(path) = &cli.stop_words {
        let words = load_stop_words(path)?;
        info!(count = words.len(), path = %path.display(), "loaded stop words");
        config.stop_words.extra.extend(words);
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<SummarizerConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn load_stop_words(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read stop words {}", path.display()))?;
    Ok(parse_stop_words(&raw))
}

fn parse_stop_words(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn read_input(cli: &Cli) -> Result<String> {
    if cli.demo {
        return Ok(DEMO_ARTICLE.to_string());
    }
    match &cli.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn render(report: &Report<'_>, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(report).context("failed to encode summary"),
        Format::Text => {
            let mut out = report.summary.text();
            if let Some(keywords) = &report.keywords {
                let listed: Vec<String> = keywords
                    .iter()
                    .map(|k| format!("{} ({})", k.word, k.count))
                    .collect();
                out.push_str("\n\nKeywords: ");
                out.push_str(&listed.join(", "));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATS: &str = "Cats are mammals. Cats chase mice. Dogs bark loudly.";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("freqsum").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_args() {
        let cli = parse(&[]);
        assert!(cli.input.is_none());
        assert_eq!(cli.format, Format::Text);
        assert_eq!(build_config(&cli).unwrap(), SummarizerConfig::default());
    }

    #[test]
    fn test_demo_conflicts_with_input() {
        let result = Cli::try_parse_from(["freqsum", "--demo", "article.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sentences_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"num_sentences": 2, "stop_words": {{"extra": ["mice"]}}}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let config = build_config(&parse(&["--config", path])).unwrap();
        assert_eq!(config.num_sentences, 2);
        assert_eq!(config.stop_words.extra, vec!["mice"]);

        let config = build_config(&parse(&["--config", path, "-n", "4"])).unwrap();
        assert_eq!(config.num_sentences, 4);
    }

    #[test]
    fn test_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let cli = parse(&["--config", file.path().to_str().unwrap()]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_stop_words_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# domain words\nCats\n\n  mice  ").unwrap();

        let cli = parse(&[
            "--stop-words",
            file.path().to_str().unwrap(),
            "--no-default-stop-words",
        ]);
        let config = build_config(&cli).unwrap();
        assert!(!config.stop_words.use_default);
        assert_eq!(config.stop_words.extra, vec!["cats", "mice"]);
    }

    #[test]
    fn test_missing_input_file() {
        let cli = parse(&["/nonexistent/freqsum/input.txt"]);
        assert!(read_input(&cli).is_err());
    }

    #[test]
    fn test_demo_input() {
        let cli = parse(&["--demo"]);
        let text = read_input(&cli).unwrap();
        let summary = Summarizer::new().summarize(&text).unwrap();
        assert_eq!(summary.len(), 5);
        assert!(summary.total_sentences > 5);
    }

    #[test]
    fn test_render_text_with_keywords() {
        let summary = Summarizer::new().with_num_sentences(2).summarize(CATS).unwrap();
        let report = Report {
            summary,
            keywords: Some(vec![Keyword { word: "cats", count: 2 }]),
        };
        assert_eq!(
            render(&report, Format::Text).unwrap(),
            "Cats are mammals. Cats chase mice.\n\nKeywords: cats (2)"
        );
    }

    #[test]
    fn test_render_json() {
        let summary = Summarizer::new().with_num_sentences(1).summarize(CATS).unwrap();
        let report = Report { summary, keywords: None };
        let value: serde_json::Value =
            serde_json::from_str(&render(&report, Format::Json).unwrap()).unwrap();
        assert_eq!(value["total_sentences"], 3);
        assert_eq!(value["sentences"][0]["text"], "Cats chase mice.");
        assert!(value.get("keywords").is_none());
    }

    #[test]
    fn test_parse_stop_words() {
        assert_eq!(parse_stop_words("A\n#x\n b \n"), vec!["a", "b"]);
    }
}
