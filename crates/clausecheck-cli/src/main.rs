mod display;

use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use clausecheck_core::{Input, NoInputProvided};
use clausecheck_web::{ServerConfig, analyze_input};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "clausecheck",
    version,
    about = "Keyword clause and risk review for contracts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one contract and print the result.
    Analyze(AnalyzeArgs),
    /// Serve the upload form over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Contract PDF. Wins over --text when both are given.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Contract text, or `-` to read it from stdin.
    #[arg(long)]
    text: Option<String>,

    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "CLAUSECHECK_BIND", default_value = "127.0.0.1:8501")]
    bind: SocketAddr,

    #[arg(long, env = "CLAUSECHECK_MAX_UPLOAD_BYTES", default_value_t = 20 * 1024 * 1024)]
    max_upload_bytes: usize,
}

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        if err.is::<NoInputProvided>() {
            warn!("{err}");
            std::process::exit(2);
        }
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze(args) => {
            let text = match args.text.as_deref() {
                Some("-") => Some(read_stdin()?),
                other => other.map(str::to_owned),
            };
            analyze(args.file.as_deref(), text, args.json, &mut io::stdout().lock())
        }
        Commands::Serve(args) => serve(args),
    }
}

fn analyze(
    file: Option<&Path>,
    text: Option<String>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let document = file.map(read_document).transpose()?;
    let input = Input::select(document, text)?;
    let result = analyze_input(input).context("analyzing contract")?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        display::write_card(out, &result)?;
    }
    Ok(())
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind: args.bind,
        max_upload_bytes: args.max_upload_bytes,
    };
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime
        .block_on(clausecheck_web::serve(config))
        .context("serving HTTP")
}

fn read_document(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading contract text from stdin")?;
    Ok(text)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
