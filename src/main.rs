//! Kelime Sifre CLI
//!
//! Generates passphrases from per-length word lists and, with the
//! `server` feature, serves them over HTTP.

use clap::{Args, Parser, Subcommand};
use kelime_sifre::{
    config::FileConfig, ConfigError, GeneratedPassphrase, GenerationError, PassphraseGenerator,
    WordPoolProvider,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "kelime-sifre", version, about = "Memorable passphrases from word lists")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the per-length word lists.
    #[arg(short, long, global = true)]
    words: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate passphrases (the default).
    Generate(GenerateArgs),
    /// Serve the generator over HTTP.
    #[cfg(feature = "server")]
    Serve(ServeArgs),
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Number of words (1-10).
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Allowed word lengths (3-10), comma separated.
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    lengths: Option<Vec<i64>>,

    /// Separator placed between words.
    #[arg(short, long)]
    separator: Option<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// How many passphrases to print.
    #[arg(short, long)]
    repeat: Option<u32>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "server")]
#[derive(Debug, Args)]
struct ServeArgs {
    /// Port to listen on; overrides the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "server")]
    #[error(transparent)]
    Metrics(#[from] kelime_sifre::metrics::MetricsError),
    #[cfg(feature = "server")]
    #[error(transparent)]
    Server(#[from] kelime_sifre::server::ServerError),
    #[cfg(feature = "server")]
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the passphrases.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    if let Some(words) = cli.words {
        config.word_lists.directory = words;
    }
    config.validate()?;

    match cli.command {
        None => generate(&config, GenerateArgs::default()),
        Some(Command::Generate(args)) => generate(&config, args),
        #[cfg(feature = "server")]
        Some(Command::Serve(args)) => serve(&config, args),
    }
}

fn build_generator(config: &FileConfig) -> PassphraseGenerator<Box<dyn WordPoolProvider>> {
    let provider: Box<dyn WordPoolProvider> = if config.word_lists.cache {
        Box::new(config.word_lists.cached_provider())
    } else {
        Box::new(config.word_lists.provider())
    };
    PassphraseGenerator::new(provider)
}

fn generate(config: &FileConfig, args: GenerateArgs) -> Result<(), CliError> {
    let generator = build_generator(config);

    let mut request = config.defaults.request();
    if let Some(count) = args.count {
        request.word_count = count;
    }
    if let Some(lengths) = args.lengths {
        request.word_lengths = lengths;
    }
    if let Some(separator) = args.separator {
        request.separator = separator;
    }

    let mut seeded = args.seed.map(ChaCha20Rng::seed_from_u64);

    for _ in 0..args.repeat.unwrap_or(1) {
        let passphrase = match seeded.as_mut() {
            Some(rng) => generator.generate_with_rng(&request, rng)?,
            None => generator.generate(&request)?,
        };
        print_passphrase(&passphrase, args.json)?;
    }

    Ok(())
}

fn print_passphrase(passphrase: &GeneratedPassphrase, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(passphrase)?);
    } else {
        println!(
            "{}  [{}, {} chars]",
            passphrase.password(),
            passphrase.strength().label(),
            passphrase.total_length()
        );
    }
    Ok(())
}

#[cfg(feature = "server")]
fn serve(config: &FileConfig, args: ServeArgs) -> Result<(), CliError> {
    use kelime_sifre::metrics::MetricsRegistry;
    use kelime_sifre::server::{ApiServer, ApiServerConfig, AppState};
    use tracing::info;

    let port = args.port.unwrap_or(config.server.port);
    let state = AppState::new(
        build_generator(config),
        config.defaults.request(),
        MetricsRegistry::new()?,
    );
    let server = ApiServer::new(ApiServerConfig::with_port(port), state);

    info!(
        "Kelime Sifre v{} serving word lists from {}",
        kelime_sifre::VERSION,
        config.word_lists.directory.display()
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.run())?;
    Ok(())
}
