use crate::emitter::TypeScriptEmitter;
use crate::scanner::{normalize_separators, FileScanner};
use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
use crate::table::RouteTable;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Route table generator - Builds a route dispatch module from a directory of handler files
#[derive(Parser, Debug)]
#[command(name = "route-table-gen")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory scanned for handler files
    #[arg(short = 'r', long = "routes-dir", value_name = "DIR", default_value = "src/routes")]
    pub routes_dir: PathBuf,

    /// Output file path (defaults to src/routes.<ext> for the chosen format)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "typescript")]
    pub output_format: OutputFormat,

    /// Type of the handler modules in the generated table
    #[arg(long = "handler-type", value_name = "NAME", default_value = "HandlerModule")]
    pub handler_type: String,

    /// Module the handler type is imported from
    #[arg(long = "handler-import", value_name = "PATH", default_value = "./lib/request_types")]
    pub handler_import: String,

    /// Name of the exported table
    #[arg(long = "table-name", value_name = "NAME", default_value = "routes")]
    pub table_name: String,

    /// Print the generated output instead of writing it
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// TypeScript module importing every handler
    #[value(alias = "ts")]
    Typescript,
    /// JSON manifest
    Json,
    /// YAML manifest
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Typescript => "ts",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl CliArgs {
    /// The file the generated output is written to.
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| {
            PathBuf::from(format!("src/routes.{}", self.output_format.extension()))
        })
    }
}

/// Parse command line arguments
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run the main workflow
///
/// The routes root is checked before anything is written, so a missing root leaves
/// any existing output untouched.
pub fn run(args: CliArgs) -> Result<()> {
    debug!("Parsed arguments: {:?}", args);
    let output_path = args.resolved_output_path();
    let routes_root = normalize_separators(&args.routes_dir.to_string_lossy());

    // Step 1: Collect handler files
    info!("Scanning routes root: {}", routes_root);
    let scanner = FileScanner::new(args.routes_dir.clone());
    let files = scanner.scan()?;
    info!("Found {} handler files", files.len());

    // Step 2: Derive routes and module names
    let table = RouteTable::build(&routes_root, &files);
    report_collisions(&table);

    // Step 3: Render
    info!("Rendering {:?} output...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Typescript => {
            let base_dir = std::env::current_dir()
                .context("Failed to resolve the current directory")?;
            emitter_for(&args, &output_path, &base_dir).render(&table)
        }
        OutputFormat::Json => serialize_json(&table)?,
        OutputFormat::Yaml => serialize_yaml(&table)?,
    };

    // Step 4: Output to file or stdout
    if args.stdout {
        print!("{}", content);
    } else {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, &output_path)?;
    }

    info!("Generated {} routes", table.len());
    Ok(())
}

fn emitter_for(args: &CliArgs, output_path: &Path, base_dir: &Path) -> TypeScriptEmitter {
    let output_dir = output_path
        .parent()
        .map(|dir| normalize_separators(&dir.to_string_lossy()))
        .unwrap_or_default();

    TypeScriptEmitter::new(output_dir)
        .with_handler_type(args.handler_type.as_str())
        .with_handler_import(args.handler_import.as_str())
        .with_table_name(args.table_name.as_str())
        .with_base_dir(normalize_separators(&base_dir.to_string_lossy()))
}

fn report_collisions(table: &RouteTable) {
    for route in table.duplicate_routes() {
        warn!("Route '{}' is generated by more than one file", route);
    }
    for module in table.duplicate_modules() {
        warn!("Module name '{}' is generated by more than one file", module);
    }
    for entry in table.invalid_modules() {
        warn!(
            "'{}' does not yield a valid module name (got '{}')",
            entry.file, entry.module
        );
    }
}
