//! CLI entry point for symbol path resolution.
//!
//! Provides commands for resolving the symbol enclosing a line, annotating
//! diff listings, and inspecting lowered syntax trees.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::{Path, PathBuf};
use symbolpath::io::{ExitCode, OutputFormat, OutputManager, ParseOutput, stream_tree};
use symbolpath::{Settings, SymbolPathError, query};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Resolve enclosing symbol paths in JavaScript and TypeScript sources
#[derive(Parser)]
#[command(
    name = "symbolpath",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve enclosing symbol paths in JavaScript and TypeScript sources",
    long_about = "Find the class, function, method or constructor enclosing a source line \
                  and print its dotted path, or annotate every line of a diff listing.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Print the symbol path enclosing a line
    #[command(
        about = "Print the symbol path enclosing a line",
        after_help = "Examples:\n  symbolpath get-path -f src/lib.js -l 12\n  symbolpath get-path -f src/app.ts -l 40 --json"
    )]
    GetPath {
        /// Source file to inspect
        #[arg(short, long)]
        file: PathBuf,

        /// 1-based line number
        #[arg(short, long)]
        line: u32,

        /// Print {file, line, path} as pretty JSON
        #[arg(short, long)]
        json: bool,

        /// Print the JSON object on a single line
        #[arg(short, long)]
        minified: bool,

        /// Print the bare path (default)
        #[arg(short, long, conflicts_with_all = ["json", "minified"])]
        plain: bool,
    },

    /// Annotate each line of a diff listing with its enclosing symbol
    #[command(
        about = "Annotate each line of a diff listing with its enclosing symbol",
        after_help = "Diff file format, one entry per line:\n  <line>|<status>|<content>\n\nStatus is A, D or M (any case); content may contain '|'."
    )]
    MapDiffsToPaths {
        /// Source file the diff applies to
        #[arg(short, long)]
        file: PathBuf,

        /// File with one `<line>|<status>|<content>` entry per line
        #[arg(short, long)]
        diff_file: PathBuf,

        /// Pretty-print the JSON array
        #[arg(long)]
        pretty: bool,

        /// Print `line|status|symbol|content` rows instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        plain: bool,
    },

    /// Dump the lowered syntax tree as JSON Lines
    #[command(about = "Dump the lowered syntax tree of a file as JSON Lines")]
    Parse {
        /// Source file to parse
        file: PathBuf,

        /// Maximum depth to traverse
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Initialize project
    #[command(about = "Set up .symbolpath directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(error) => {
            let code = OutputManager::new(OutputFormat::Text)
                .error(&error)
                .unwrap_or(ExitCode::ConfigError);
            std::process::exit(code.into());
        }
    };

    symbolpath::logging::init_logging(cli.debug || settings.debug);

    let code = run(cli.command, &settings);
    std::process::exit(code.into());
}

/// Load settings from `--config` when given, otherwise from the workspace.
fn load_settings(config: Option<&Path>) -> Result<Settings, SymbolPathError> {
    match config {
        Some(path) => Settings::load_from(path).map_err(|e| SymbolPathError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        }),
        None => Settings::load().map_err(|e| SymbolPathError::ConfigError {
            reason: e.to_string(),
        }),
    }
}

fn run(command: Commands, settings: &Settings) -> ExitCode {
    match command {
        Commands::GetPath {
            file,
            line,
            json,
            minified,
            plain: _,
        } => {
            let mut output = OutputManager::new(OutputFormat::from_json_flags(json, minified));
            let result = query::get_path(settings, &file, line);
            emit(&mut output, result, |output, result| output.symbol_path(&result))
        }

        Commands::MapDiffsToPaths {
            file,
            diff_file,
            pretty,
            plain,
        } => {
            let pretty = pretty || settings.output.pretty_json;
            let mut output = OutputManager::new(OutputFormat::for_diff_listing(pretty, plain));
            let result = query::map_diffs_to_paths(settings, &file, &diff_file);
            emit(&mut output, result, |output, diffs| output.diff_symbols(&diffs))
        }

        Commands::Parse { file, max_depth } => {
            let mut output = OutputManager::new(OutputFormat::Text);
            match query::parse_file(settings, &file) {
                Ok(tree) => {
                    let mut dump = ParseOutput::new(std::io::stdout().lock());
                    let written = stream_tree(&tree, &mut dump, max_depth)
                        .and_then(|()| dump.finish().map(|_| ()));
                    match written {
                        Ok(()) => ExitCode::Success,
                        Err(e) => report_io_error(&e),
                    }
                }
                Err(error) => output.error(&error).unwrap_or(ExitCode::GeneralError),
            }
        }

        Commands::Init { force } => {
            let mut output = OutputManager::new(OutputFormat::Text);
            match Settings::init_config_file(force) {
                Ok(path) => {
                    let message = format!(
                        "Created configuration file at: {}\nEdit this file to customize your settings.",
                        path.display()
                    );
                    match output.info(&message) {
                        Ok(()) => ExitCode::Success,
                        Err(e) => report_io_error(&e),
                    }
                }
                Err(e) => output
                    .error(&SymbolPathError::ConfigError {
                        reason: e.to_string(),
                    })
                    .unwrap_or(ExitCode::ConfigError),
            }
        }

        Commands::Config => {
            let mut output = OutputManager::new(OutputFormat::Text);
            match settings.to_toml() {
                Ok(rendered) => match output.info(rendered.trim_end()) {
                    Ok(()) => ExitCode::Success,
                    Err(e) => report_io_error(&e),
                },
                Err(e) => output
                    .error(&SymbolPathError::ConfigError {
                        reason: e.to_string(),
                    })
                    .unwrap_or(ExitCode::ConfigError),
            }
        }
    }
}

/// Print a query result, or its error in the output's format.
fn emit<T>(
    output: &mut OutputManager,
    result: Result<T, SymbolPathError>,
    print: impl FnOnce(&mut OutputManager, T) -> std::io::Result<ExitCode>,
) -> ExitCode {
    let printed = match result {
        Ok(value) => print(output, value),
        Err(error) => output.error(&error),
    };
    printed.unwrap_or_else(|e| report_io_error(&e))
}

fn report_io_error(error: &std::io::Error) -> ExitCode {
    // Broken pipes (e.g. `| head`) are not worth a message
    if error.kind() != std::io::ErrorKind::BrokenPipe {
        eprintln!("Error: failed to write output: {error}");
    }
    ExitCode::IoError
}
