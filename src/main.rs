use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use morphdict::links::read_links_file;
use morphdict::vocabulary::{read_vocabulary, DEFAULT_VOCABULARY};
use morphdict::{
    build_dictionary, build_dictionary_par, writer, LexiconAnalyzer, LexiconFileFormats,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a text lexicon and save it as a compiled analyzer
    Compile {
        /// Path to the OpenCorpora-style lexicon
        #[arg(short, long)]
        lexicon: PathBuf,

        /// Lexicon format: plain, gzip or zstd (guessed from the extension if omitted)
        #[arg(short, long)]
        format: Option<LexiconFileFormats>,

        /// Lemma links file with `FROM TO TYPE` lines (e.g. `1 2 INFN-VERB`)
        #[arg(long)]
        links: Option<PathBuf>,

        /// Path of the compiled analyzer to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate the paradigm dictionary of a vocabulary
    Generate {
        /// Path to the lexicon or compiled analyzer
        #[arg(short, long)]
        lexicon: PathBuf,

        /// Lexicon format: plain, gzip, zstd or bincode (guessed from the extension if omitted)
        #[arg(short, long)]
        format: Option<LexiconFileFormats>,

        /// Lemma links file with `FROM TO TYPE` lines (e.g. `1 2 INFN-VERB`)
        #[arg(long)]
        links: Option<PathBuf>,

        /// Vocabulary file with one word per line; the built-in list is used if omitted
        #[arg(short, long)]
        vocabulary: Option<PathBuf>,

        /// Path of the JSON dictionary to write
        #[arg(short, long, default_value = "russian_dictionary.json")]
        output: PathBuf,

        /// Analyze words in parallel
        #[arg(long)]
        parallel: bool,

        /// Word whose entry is printed after generation
        #[arg(long, default_value = "книга")]
        sample: String,
    },
}

fn load_analyzer(
    path: &Path,
    format: Option<LexiconFileFormats>,
    links: Option<&Path>,
) -> Result<LexiconAnalyzer> {
    let format = format.unwrap_or_else(|| LexiconFileFormats::from_path(path));
    let links = match links {
        Some(links) => read_links_file(links)
            .with_context(|| format!("failed to load links {}", links.display()))?,
        None => Vec::new(),
    };
    LexiconAnalyzer::from_linked_file(path, format, &links)
        .with_context(|| format!("failed to load lexicon {}", path.display()))
}

fn compile(
    lexicon: &Path,
    format: Option<LexiconFileFormats>,
    links: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let analyzer = load_analyzer(lexicon, format, links)?;
    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    analyzer.write_to(file)?;

    println!(
        "Compiled {} lexemes ({} surface forms) into {}",
        analyzer.num_lexemes(),
        analyzer.num_surfaces(),
        output.display()
    );
    Ok(())
}

fn generate(
    lexicon: &Path,
    format: Option<LexiconFileFormats>,
    links: Option<&Path>,
    vocabulary: Option<&Path>,
    output: &Path,
    parallel: bool,
    sample: &str,
) -> Result<()> {
    let analyzer = load_analyzer(lexicon, format, links)?;

    let words: Vec<String> = match vocabulary {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            read_vocabulary(file)?
        }
        None => DEFAULT_VOCABULARY.iter().map(|w| w.to_string()).collect(),
    };

    println!("Generating Russian dictionary...");
    let batch = if parallel {
        build_dictionary_par(&analyzer, &words)
    } else {
        build_dictionary(&analyzer, &words)
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file =
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    writer::write_json(&batch.dictionary, BufWriter::new(file))?;

    println!("\n{}", batch.summary());
    println!("Saved to: {}", output.display());

    if let Some(record) = batch.dictionary.get(sample) {
        println!("\nSample entry ({}):", sample);
        println!("{}", serde_json::to_string_pretty(record)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Compile {
            lexicon,
            format,
            links,
            output,
        } => compile(&lexicon, format, links.as_deref(), &output),
        Command::Generate {
            lexicon,
            format,
            links,
            vocabulary,
            output,
            parallel,
            sample,
        } => generate(
            &lexicon,
            format,
            links.as_deref(),
            vocabulary.as_deref(),
            &output,
            parallel,
            &sample,
        ),
    }
}
