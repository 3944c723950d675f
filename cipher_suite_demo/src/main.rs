use anyhow::{Context, Result, bail};
use cipher_suite_core::{
    CipherId, CipherRequest, Direction, FormattingOptions, Layer, LayerChain, TextCase,
    analyze_frequency, apply_formatting, apply_layers, brute_force_caesar, list_ciphers,
    transform,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{LevelFilter, debug};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cipher-suite",
    author,
    version,
    about = "Classical cipher toolbox: encrypt, decrypt, analyze"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodArg {
    Caesar,
    Vigenere,
    Keyword,
    Rot13,
    Atbash,
    Morse,
    Base64,
    Aes,
    Reverse,
}

impl From<MethodArg> for CipherId {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Caesar => CipherId::Caesar,
            MethodArg::Vigenere => CipherId::Vigenere,
            MethodArg::Keyword => CipherId::Keyword,
            MethodArg::Rot13 => CipherId::Rot13,
            MethodArg::Atbash => CipherId::Atbash,
            MethodArg::Morse => CipherId::Morse,
            MethodArg::Base64 => CipherId::Base64,
            MethodArg::Aes => CipherId::Aes,
            MethodArg::Reverse => CipherId::Reverse,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CaseArg {
    Preserve,
    Upper,
    Lower,
}

impl From<CaseArg> for TextCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Preserve => TextCase::Preserve,
            CaseArg::Upper => TextCase::Upper,
            CaseArg::Lower => TextCase::Lower,
        }
    }
}

#[derive(Args)]
struct FormatArgs {
    /// Output case transform.
    #[arg(long, value_enum, default_value = "preserve")]
    case: CaseArg,
    /// Strip all whitespace from the output.
    #[arg(long)]
    remove_spaces: bool,
    /// Regroup output into fixed-width blocks (0 disables).
    #[arg(long, value_name = "N", default_value_t = 0)]
    group: usize,
}

impl FormatArgs {
    fn options(&self) -> Result<FormattingOptions> {
        let options = FormattingOptions {
            text_case: self.case.into(),
            remove_spaces: self.remove_spaces,
            group_size: self.group,
        };
        options.validate()?;
        Ok(options)
    }
}

#[derive(Args)]
struct InputArgs {
    /// Text to process.
    #[arg(long, value_name = "TEXT")]
    message: Option<String>,
    /// Read the text from a file instead.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available cipher methods.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Encrypt (or encode) text with one cipher method.
    Encrypt {
        #[arg(long, value_enum)]
        method: MethodArg,
        #[command(flatten)]
        text: InputArgs,
        /// Key or passphrase for key-requiring methods.
        #[arg(long, value_name = "KEY")]
        key: Option<String>,
        /// Caesar shift value.
        #[arg(long, value_name = "N")]
        shift: Option<i32>,
        #[command(flatten)]
        format: FormatArgs,
        /// Write the result to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Decrypt (or decode) text with one cipher method.
    Decrypt {
        #[arg(long, value_enum)]
        method: MethodArg,
        #[command(flatten)]
        text: InputArgs,
        #[arg(long, value_name = "KEY")]
        key: Option<String>,
        #[arg(long, value_name = "N")]
        shift: Option<i32>,
        #[command(flatten)]
        format: FormatArgs,
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Letter-frequency analysis of a text.
    Analyze {
        #[command(flatten)]
        text: InputArgs,
        /// Emit the full distribution as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Try all 25 Caesar shifts against a ciphertext.
    BruteForce {
        #[command(flatten)]
        text: InputArgs,
    },
    /// Apply a sequence of keyless cipher layers in order.
    Layers {
        #[command(flatten)]
        text: InputArgs,
        /// Layer spec, repeatable: METHOD or caesar:SHIFT.
        #[arg(long = "layer", value_name = "SPEC", required = true)]
        layers: Vec<String>,
        #[command(flatten)]
        format: FormatArgs,
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Encrypt {
            method,
            text,
            key,
            shift,
            format,
            out,
        } => cmd_transform(Direction::Encrypt, method, text, key, shift, format, out),
        Commands::Decrypt {
            method,
            text,
            key,
            shift,
            format,
            out,
        } => cmd_transform(Direction::Decrypt, method, text, key, shift, format, out),
        Commands::Analyze { text, json } => cmd_analyze(text, json),
        Commands::BruteForce { text } => cmd_brute_force(text),
        Commands::Layers {
            text,
            layers,
            format,
            out,
        } => cmd_layers(text, layers, format, out),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn cmd_list(json: bool) -> Result<()> {
    let ciphers = list_ciphers();
    if json {
        println!("{}", serde_json::to_string_pretty(ciphers)?);
        return Ok(());
    }
    for descriptor in ciphers {
        println!(
            "{:<18} {:<14} {}",
            descriptor.display_name,
            descriptor.strength.label(),
            if descriptor.requires_key {
                "requires key"
            } else {
                "no key"
            }
        );
    }
    Ok(())
}

fn cmd_transform(
    direction: Direction,
    method: MethodArg,
    text: InputArgs,
    key: Option<String>,
    shift: Option<i32>,
    format: FormatArgs,
    out: Option<PathBuf>,
) -> Result<()> {
    let cipher: CipherId = method.into();
    let options = format.options()?;
    let request = CipherRequest {
        cipher,
        direction,
        text: resolve_text(text)?,
        key,
        shift,
    };
    debug!(
        "request cipher={:?} direction={:?} len={}",
        request.cipher,
        request.direction,
        request.text.len()
    );
    let raw = transform(&request)?;
    let formatted = apply_formatting(&raw, &options);
    emit(out.as_deref(), &formatted)
}

fn cmd_analyze(text: InputArgs, json: bool) -> Result<()> {
    let text = resolve_text(text)?;
    let entries = analyze_frequency(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No letters to analyze.");
        return Ok(());
    }
    // Top ten, like the front-end panel.
    for entry in entries.iter().take(10) {
        println!("{}  {:>6}  {:>6.2}%", entry.letter, entry.count, entry.percent);
    }
    Ok(())
}

fn cmd_brute_force(text: InputArgs) -> Result<()> {
    let text = resolve_text(text)?;
    for candidate in brute_force_caesar(&text) {
        println!("Shift {:>2}: {}", candidate.shift, candidate.text);
    }
    Ok(())
}

fn cmd_layers(
    text: InputArgs,
    specs: Vec<String>,
    format: FormatArgs,
    out: Option<PathBuf>,
) -> Result<()> {
    let options = format.options()?;
    let layers = specs
        .iter()
        .map(|spec| parse_layer(spec))
        .collect::<Result<Vec<_>>>()?;
    let chain = LayerChain::new(layers)?;
    let text = resolve_text(text)?;
    let raw = apply_layers(&text, &chain)?;
    debug!("applied {} layers, output_len={}", chain.len(), raw.len());
    emit(out.as_deref(), &apply_formatting(&raw, &options))
}

fn parse_layer(spec: &str) -> Result<Layer> {
    let (name, shift) = match spec.split_once(':') {
        Some((name, shift)) => {
            let shift: i32 = shift
                .parse()
                .with_context(|| format!("invalid shift in layer spec '{spec}'"))?;
            (name, Some(shift))
        }
        None => (spec, None),
    };
    let method = MethodArg::from_str(name, true)
        .map_err(|_| anyhow::anyhow!("unknown cipher '{name}' in layer spec"))?;
    if shift.is_some() && !matches!(method, MethodArg::Caesar) {
        bail!("only caesar layers take a shift override, got '{spec}'");
    }
    Ok(match shift {
        Some(shift) => Layer::with_shift(method.into(), shift),
        None => Layer::new(method.into()),
    })
}

fn resolve_text(args: InputArgs) -> Result<String> {
    match (args.message, args.input) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading text from {}", path.display())),
        (Some(_), Some(_)) => bail!("Provide either --message or --input, not both."),
        (None, None) => bail!("Provide --message TEXT or --input FILE."),
    }
}

fn emit(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing to {}", path.display()))?;
            println!("Wrote {} characters to {}", text.chars().count(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
