#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context};
use argconv_core::{
    classify_at, needs_conversion, ArgConverter, CollectingSink, ConvertOptions, Diagnostic,
    DiagnosticSink, MountTable, PathShape, TracingSink,
};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "argconv",
    version,
    about = "Convert POSIX paths in command-line arguments to native Windows form"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Convert arguments and print the native form
    Convert(ConvertArgs),
    /// Print the detected path shape of each argument
    Classify(ClassifyArgs),
}

#[derive(clap::Args)]
struct ResolverArgs {
    /// Native directory mounted at `/`
    #[arg(long, env = "ARGCONV_ROOT", default_value = "C:\\msys64")]
    root: String,

    /// Mount table file (fstab, or YAML for .yaml/.yml); overrides --root
    #[arg(long, env = "ARGCONV_MOUNTS")]
    mounts: Option<PathBuf>,
}

#[derive(clap::Args)]
struct ConvertArgs {
    /// Output buffer size per argument, terminator included
    #[arg(long, env = "ARGCONV_CAPACITY", default_value_t = 32768)]
    capacity: usize,

    /// Argument prefixes passed through untouched (`;`-separated, `*` for all)
    #[arg(long, env = "MSYS2_ARG_CONV_EXCL", value_delimiter = ';')]
    exclude: Option<Vec<String>>,

    /// Replacement for /dev/null
    #[arg(long, env = "ARGCONV_NULL_DEVICE", default_value = "nul")]
    null_device: String,

    /// Output format: text or json
    #[arg(long, env = "ARGCONV_OUTPUT_FORMAT", default_value = "text")]
    output_format: String,

    /// Read arguments from stdin, one per line
    #[arg(long)]
    stdin: bool,

    #[command(flatten)]
    resolver: ResolverArgs,

    /// Arguments to convert
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(clap::Args)]
struct ClassifyArgs {
    /// Output format: text or json
    #[arg(long, env = "ARGCONV_OUTPUT_FORMAT", default_value = "text")]
    output_format: String,

    /// Arguments to classify
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array on stdout
    Json,
}

impl OutputFormat {
    fn parse(name: &str) -> anyhow::Result<Self> {
        match name {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}' (expected text or json)"),
        }
    }
}

/// Result for one argument, as reported in JSON
#[derive(Debug, Serialize)]
struct ConvertedArg<'a> {
    input: &'a str,
    output: String,
    shape: PathShape,
    excluded: bool,
    diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
struct ClassifiedArg<'a> {
    input: &'a str,
    shape: PathShape,
    start: usize,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Classify(args) => run_classify(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `ARGCONV_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ARGCONV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Drop empty entries (env vars may produce [""] for empty values)
fn clean_excludes(v: &Option<Vec<String>>) -> Vec<&str> {
    v.iter()
        .flatten()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_excluded(arg: &str, excludes: &[&str]) -> bool {
    excludes
        .iter()
        .any(|prefix| *prefix == "*" || arg.starts_with(prefix))
}

fn build_mount_table(args: &ResolverArgs) -> anyhow::Result<MountTable> {
    match &args.mounts {
        Some(path) => MountTable::load(path)
            .with_context(|| format!("failed to load mount table {}", path.display())),
        None => MountTable::with_root(&args.root)
            .with_context(|| format!("invalid root '{}'", args.root)),
    }
}

fn read_stdin_args() -> anyhow::Result<Vec<String>> {
    std::io::stdin()
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("failed to read arguments from stdin")
}

/// Shape of the run the converter would rewrite
fn shape_of(arg: &str) -> PathShape {
    if needs_conversion(arg.as_bytes()) {
        classify_at(arg.as_bytes(), 0, arg.len()).0
    } else {
        PathShape::None
    }
}

fn convert_one<'a>(
    mounts: &MountTable,
    options: &ConvertOptions<'_>,
    input: &'a str,
    capacity: usize,
    excluded: bool,
) -> ConvertedArg<'a> {
    if excluded {
        return ConvertedArg {
            input,
            output: input.to_string(),
            shape: PathShape::None,
            excluded,
            diagnostics: Vec::new(),
        };
    }

    let sink = CollectingSink::new();
    let converter = ArgConverter::new(mounts)
        .with_sink(&sink)
        .with_options(options.clone());
    let output = converter.convert_to_string(input, capacity);

    ConvertedArg {
        input,
        output,
        shape: shape_of(input),
        excluded,
        diagnostics: sink.drain(),
    }
}

fn run_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let format = OutputFormat::parse(&args.output_format)?;
    let mounts = build_mount_table(&args.resolver)?;
    let excludes = clean_excludes(&args.exclude);
    let options = ConvertOptions {
        null_device: Cow::Borrowed(args.null_device.as_str()),
        ..Default::default()
    };

    let inputs = if args.stdin {
        read_stdin_args()?
    } else {
        args.args.clone()
    };

    tracing::debug!(
        count = inputs.len(),
        capacity = args.capacity,
        excludes = excludes.len(),
        "converting arguments"
    );

    let results: Vec<ConvertedArg<'_>> = inputs
        .par_iter()
        .map(|input| {
            let excluded = is_excluded(input, &excludes);
            convert_one(&mounts, &options, input, args.capacity, excluded)
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for diagnostic in results.iter().flat_map(|r| r.diagnostics.iter()) {
                TracingSink.report(diagnostic.clone());
            }
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            for result in &results {
                let _ = writeln!(w, "{}", result.output);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).context("failed to encode JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn run_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let format = OutputFormat::parse(&args.output_format)?;

    let results: Vec<ClassifiedArg<'_>> = args
        .args
        .iter()
        .map(|input| {
            let (shape, start) = classify_at(input.as_bytes(), 0, input.len());
            ClassifiedArg {
                input,
                shape,
                start,
            }
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            for result in &results {
                let _ = writeln!(w, "{}\t{}\t{}", result.shape, result.start, result.input);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&results).context("failed to encode JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}
