use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tokenid::{
    EngineConfig, PhraseReport, StorePaths, TokenEngine, TokenId, WordReport, load_stores,
    save_stores,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokenid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Assign stable token ids to words and phrases")]
struct Cli {
    /// Text to tokenize; prompts on stdin when omitted
    text: Vec<String>,

    /// Directory holding the vocabulary, word and phrase files
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    data_dir: PathBuf,

    /// Vocabulary file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    vocab: Option<PathBuf>,

    /// Word token file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Phrase token file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    phrases: Option<PathBuf>,

    /// Fragments with an id above this are not reused
    #[arg(long, default_value_t = tokenid::MAX_ALLOWED_ID)]
    max_allowed_id: TokenId,

    /// First minted id is one above this when the vocabulary is empty
    #[arg(long, default_value_t = tokenid::DEFAULT_COUNTER_FLOOR)]
    counter_floor: TokenId,

    /// Print the phrase report as JSON
    #[arg(long)]
    json: bool,

    /// Process without saving any file
    #[arg(long)]
    dry_run: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = store_paths(&cli);
    let config = EngineConfig::new()
        .max_allowed_id(cli.max_allowed_id)
        .counter_floor(cli.counter_floor);

    let (stores, warnings) = load_stores(&paths).context("Failed to load token stores")?;
    for warning in &warnings {
        eprintln!("⚠️ Warning: {}", warning);
    }

    let input = if cli.text.is_empty() {
        prompt_input()?
    } else {
        cli.text.join(" ")
    };

    let mut engine = TokenEngine::from_stores(stores, config);
    let report = engine
        .process(&input)
        .context("Failed to assign token ids")?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize phrase report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    if cli.dry_run {
        return Ok(());
    }

    save_stores(&paths, &engine.into_stores()).context("Failed to save token stores")?;
    if !cli.json {
        println!(
            "\n💾 Saved {} words to {}",
            report.word_count(),
            paths.words.display()
        );
        println!(
            "💾 Updated {} and {}",
            paths.vocab.display(),
            paths.phrases.display()
        );
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn store_paths(cli: &Cli) -> StorePaths {
    let mut paths = StorePaths::in_dir(&cli.data_dir);
    if let Some(vocab) = &cli.vocab {
        paths = paths.vocab(vocab);
    }
    if let Some(words) = &cli.words {
        paths = paths.words(words);
    }
    if let Some(phrases) = &cli.phrases {
        paths = paths.phrases(phrases);
    }
    paths
}

fn prompt_input() -> Result<String> {
    print!("Enter text (words or phrases): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line)
}

fn print_report(report: &PhraseReport) {
    let words: Vec<&str> = report.words.iter().map(|w| w.word.as_str()).collect();
    println!("\n🔍 Found {} words: {:?}", words.len(), words);
    println!("\n{}", "=".repeat(60));

    for word in &report.words {
        print_word(word);
    }

    if report.words.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(60));
    println!("📝 Sentence: {}", report.text);
    println!("🔢 Tokens: {}", report.word_count());
    println!("🆔 Token sequence: {:?}", report.token_sequence);
    println!("🎯 Phrase Token ID: {}", report.token_id);
    println!(
        "🔠 Total characters (including spaces & punctuation): {}",
        report.char_count
    );
    println!("{}", "=".repeat(60));
}

fn print_word(word: &WordReport) {
    match &word.resolution {
        Some(res) => {
            println!("\n🔠 Word: '{}'", word.word);
            println!("🧩 Parts: {:?}", res.parts);
            println!("🆔 Token IDs: {:?}", res.part_ids);
            println!("➕ Sum: {}", res.sum);
            println!(
                "🎯 Final Token ID: {} ({} {})",
                res.token_id, res.sum, res.tier
            );
        }
        None => {
            println!("\n🔠 Word: '{}' (already processed)", word.word);
            println!("🎯 Final Token ID: {}", word.token_id);
        }
    }
}
