//! Ideagrid - Extract faculty project ideas from department spreadsheets

mod config;
mod output;

use anyhow::{Context, Result, bail};
use ideagrid_core::{LocalStore, ProjectImporter, Workbook, extract_projects_from};
use ideagrid_engine::extract::{ColumnRoles, Extraction};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: ideagrid [OPTIONS] <COMMAND>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  extract <FILE>            Extract projects from a local spreadsheet");
    eprintln!("  inspect <FILE>            Show the detected header row and column roles");
    eprintln!("  upload <FILE>             Store a spreadsheet in its department folder");
    eprintln!("  projects                  List projects from a department's newest upload");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --department <NAME>   Department label / folder");
    eprintln!("  -s, --sheet <NAME>        Read this sheet instead of the first one");
    eprintln!("  --content-type <MIME>     Content type of an uploaded file");
    eprintln!("  --store <DIR>             Bucket directory (overrides config)");
    eprintln!("  --config <FILE>           Load settings from this TOML file");
    eprintln!("  --pretty                  Pretty-print JSON output");
    eprintln!("  -v, --verbose             Debug logging on stderr");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, PartialEq)]
enum Command {
    Extract(PathBuf),
    Inspect(PathBuf),
    Upload(PathBuf),
    Projects,
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    command: Option<Command>,
    department: Option<String>,
    sheet: Option<String>,
    content_type: Option<String>,
    store: Option<PathBuf>,
    config_file: Option<PathBuf>,
    pretty: bool,
    verbose: bool,
    help: bool,
}

fn take_value(args: &[String], i: &mut usize, flag: &str, what: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("{} requires {}", flag, what))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut command: Option<String> = None;
    let mut file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => opts.help = true,
            "-d" | "--department" => {
                opts.department = Some(take_value(args, &mut i, "--department", "a name")?);
            }
            "-s" | "--sheet" => {
                opts.sheet = Some(take_value(args, &mut i, "--sheet", "a sheet name")?);
            }
            "--content-type" => {
                opts.content_type = Some(take_value(args, &mut i, "--content-type", "a value")?);
            }
            "--store" => {
                opts.store = Some(take_value(args, &mut i, "--store", "a directory")?.into());
            }
            "--config" => {
                opts.config_file = Some(take_value(args, &mut i, "--config", "a file path")?.into());
            }
            "--pretty" => opts.pretty = true,
            "-v" | "--verbose" => opts.verbose = true,
            arg if arg.starts_with('-') => return Err(format!("Unknown option: {}", arg)),
            arg => {
                if command.is_none() {
                    command = Some(arg.to_string());
                } else if file.is_none() {
                    file = Some(PathBuf::from(arg));
                } else {
                    return Err(format!("Unexpected argument: {}", arg));
                }
            }
        }
        i += 1;
    }

    if opts.help {
        return Ok(opts);
    }

    let needs_file = |name: &str, file: Option<PathBuf>| {
        file.ok_or_else(|| format!("{} requires a file path", name))
    };
    opts.command = match command.as_deref() {
        Some("extract") => Some(Command::Extract(needs_file("extract", file)?)),
        Some("inspect") => Some(Command::Inspect(needs_file("inspect", file)?)),
        Some("upload") => Some(Command::Upload(needs_file("upload", file)?)),
        Some("projects") => {
            if let Some(extra) = file {
                return Err(format!("Unexpected argument: {}", extra.display()));
            }
            Some(Command::Projects)
        }
        Some(other) => return Err(format!("Unknown command: {}", other)),
        None => return Err("No command given".to_string()),
    };
    Ok(opts)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Serialize)]
struct InspectReport<'a> {
    sheet: &'a str,
    sheets: Vec<&'a str>,
    header_row: usize,
    score: u8,
    headers: &'a [String],
    roles: &'a ColumnRoles,
    data_rows: usize,
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run(opts: &Options, config: &config::Config) -> Result<String> {
    let department = opts
        .department
        .as_deref()
        .unwrap_or(&config.default_department);
    let importer = || {
        let root = opts.store.clone().unwrap_or_else(|| config.bucket_dir());
        ProjectImporter::new(LocalStore::new(root)).with_list_limit(config.list_limit)
    };

    let json = match &opts.command {
        Some(Command::Extract(path)) => {
            let bytes = read_file(path)?;
            let projects = extract_projects_from(&bytes, department, opts.sheet.as_deref())?;
            output::success(&projects, opts.pretty)?
        }
        Some(Command::Inspect(path)) => {
            let bytes = read_file(path)?;
            let workbook = Workbook::from_bytes(&bytes)?;
            let sheet = workbook.select(opts.sheet.as_deref())?;
            let extraction = Extraction::analyze(sheet);
            let report = InspectReport {
                sheet: &sheet.name,
                sheets: workbook.sheet_names(),
                header_row: extraction.header.row,
                score: extraction.header.score,
                headers: &extraction.parsed.headers,
                roles: &extraction.roles,
                data_rows: extraction.parsed.rows.len(),
            };
            output::success(&report, opts.pretty)?
        }
        Some(Command::Upload(path)) => {
            let bytes = read_file(path)?;
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                bail!("Invalid file name: {}", path.display());
            };
            let receipt = importer().upload(
                Some(department),
                file_name,
                opts.content_type.as_deref(),
                &bytes,
            )?;
            output::success(&receipt, opts.pretty)?
        }
        Some(Command::Projects) => {
            // Projects are only listed for an explicitly named department.
            let department = opts.department.as_deref().unwrap_or("");
            let projects = importer().projects(department)?;
            output::success(&projects, opts.pretty)?
        }
        None => bail!("No command given"),
    };
    Ok(json)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            std::process::exit(1);
        }
    };
    if opts.help {
        print_usage();
        return;
    }

    init_logging(opts.verbose);

    let (config, warnings) = config::load_config(opts.config_file.as_ref());
    for warning in warnings {
        warn!("{}", warning);
    }

    match run(&opts, &config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            println!("{}", output::failure(&format!("{:#}", e), opts.pretty));
            std::process::exit(1);
        }
    }
}
