use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mips_disasm::{disassemble, DisasmConfig, Mips32Decoder, OutputBuffer, Strategy};

mod model;
use model::{default_output_path, load_config, load_hex_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassemble a listing of MIPS32 hex words", long_about = None)]
struct Cli {
    /// Input text file, one 8-digit hex word per line
    #[arg(value_name = "HEXFILE")]
    input: PathBuf,
    /// Label resolution strategy (overrides --config)
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output here instead of <HEXFILE stem>.s
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// JSON file holding a DisasmConfig
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Do not echo the listing to stdout
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    SinglePass,
    TwoPass,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::SinglePass => Strategy::SinglePass,
            StrategyArg::TwoPass => Strategy::TwoPass,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn render(buf: &OutputBuffer, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => buf.render(),
        OutputFormat::Json => {
            let mut json = buf.to_json()?;
            json.push('\n');
            json
        }
    })
}

fn resolve_config(cli: &Cli) -> Result<DisasmConfig> {
    let mut cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => DisasmConfig::default(),
    };
    if let Some(s) = cli.strategy {
        cfg.strategy = s.into();
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = resolve_config(cli)?;
    let prog = load_hex_file(&cli.input)?;
    info!(path = %prog.path.display(), words = prog.words.len(), "loaded program");

    // Nothing is written unless the whole pass succeeds.
    let buf = disassemble(Mips32Decoder::new(), cfg, &prog.words)?;
    let text = render(&buf, cli.format)?;

    if !cli.quiet {
        print!("{text}");
    }
    let out = cli.out.clone().unwrap_or_else(|| default_output_path(&cli.input));
    std::fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), lines = buf.len(), "listing written");

    Ok(())
}
