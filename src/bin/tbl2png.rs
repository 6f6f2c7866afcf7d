//! tbl2png CLI - render table documents to PNG or SVG images

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use tabraster::{
    render_to_path, OutputFormat, RenderError, RenderOptions, RenderResult, TableInput,
    TableRenderer,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tbl2png")]
#[command(version)]
#[command(about = "tbl2png - Render table documents to PNG or SVG images", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Table document (JSON or YAML; reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "table.png")]
    output: PathBuf,

    /// Output format (defaults to the output extension, then PNG)
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Additional directory of fonts for PNG output
    #[arg(long = "font-dir", value_name = "DIR")]
    font_dirs: Vec<PathBuf>,

    #[command(flatten)]
    options: OptionArgs,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Render option sources, layered over the defaults
#[cfg(feature = "cli")]
#[derive(clap::Args)]
struct OptionArgs {
    /// Options file (TOML or JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Default content column width
    #[arg(long, global = true)]
    cell_width: Option<f32>,

    /// Row, header and title line height
    #[arg(long, global = true)]
    cell_height: Option<f32>,

    /// Padding on every side of the canvas
    #[arg(long, global = true)]
    padding: Option<f32>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print the computed layout as JSON
    Layout {
        /// Table document (reads from stdin if not provided)
        input: Option<PathBuf>,
    },

    /// Print the effective render options as TOML
    Config,

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Png,
    Svg,
}

#[cfg(feature = "cli")]
impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => OutputFormat::Png,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> RenderResult<()> {
    let options = load_options(&cli.options)?;

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd, options);
    }

    let input = read_input(cli.input_file.as_deref())?;
    let format = match cli.format {
        Some(format) => format.into(),
        None => OutputFormat::from_path(&cli.output).unwrap_or_default(),
    };

    let renderer = TableRenderer::new(options);
    let fonts: Vec<&Path> = cli.font_dirs.iter().map(PathBuf::as_path).collect();
    render_to_path(&renderer, &input, format, &cli.output, &fonts)?;

    if !cli.quiet {
        eprintln!(
            "✓ {} table(s) written to: {}",
            input.tables().len(),
            cli.output.display()
        );
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands, options: RenderOptions) -> RenderResult<()> {
    match cmd {
        Commands::Layout { input } => {
            let input = read_input(input.as_deref())?;
            let layout = TableRenderer::new(options).layout(&input);
            let json = serde_json::to_string_pretty(&layout)?;
            println!("{}", json);
        }

        Commands::Config => {
            print!("{}", options.to_toml_string()?);
        }

        Commands::Info => {
            println!("tbl2png - Render table documents to PNG or SVG images");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Titles, headers, separator rows and columns");
            println!("  ✓ Multiple tables stacked on one canvas");
            println!("  ✓ SVG output");
            if cfg!(feature = "raster") {
                println!("  ✓ PNG output (tiny-skia + resvg)");
            } else {
                println!("  ✗ PNG output (built without `raster`)");
            }
            println!();
            println!("Input documents: JSON, YAML");
            println!("Options files: TOML, JSON");
            println!();
        }
    }
    Ok(())
}

/// Defaults, then the options file, then individual flags
#[cfg(feature = "cli")]
fn load_options(args: &OptionArgs) -> RenderResult<RenderOptions> {
    let mut options = match &args.config {
        Some(path) => RenderOptions::from_path(path)?,
        None => RenderOptions::default(),
    };

    if let Some(width) = args.cell_width {
        options = options.with_cell_width(width);
    }
    if let Some(height) = args.cell_height {
        options = options.with_cell_height(height);
    }
    if let Some(padding) = args.padding {
        options = options.with_padding(padding);
    }
    Ok(options)
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&Path>) -> RenderResult<TableInput> {
    if let Some(path) = path {
        return TableInput::from_path(path);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| RenderError::io("<stdin>", e))?;

    // JSON documents start with a bracket; anything else is read as YAML
    if buffer.trim_start().starts_with(['[', '{']) {
        TableInput::from_json_str(&buffer)
    } else {
        TableInput::from_yaml_str(&buffer)
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabraster --features cli");
    eprintln!("  tbl2png [OPTIONS] [INPUT_FILE]");
}
