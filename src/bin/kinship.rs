//! kinship command runner
//!
//! Loads a family tree from JSON and runs a command file against it, printing
//! one result line per command.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kinship::{FamilyEngine, FamilyTree, InMemoryFamilyStore, KinError, StorageError, WriterSink};

/// Runner configuration
struct Config {
    /// Family tree document
    data: PathBuf,
    /// Command file
    commands: Option<PathBuf>,
    /// Explicit tracing filter
    log_level: Option<String>,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: PathBuf::from("./family.json"),
            commands: None,
            log_level: None,
            verbose: false,
        }
    }
}

fn print_help() {
    println!("kinship - family tree relationship runner");
    println!();
    println!("USAGE:");
    println!("    kinship [OPTIONS] <COMMANDS_FILE>");
    println!();
    println!("OPTIONS:");
    println!("    -d, --data <FILE>         Family tree JSON [default: ./family.json]");
    println!("        --log-level <FILTER>  Tracing filter, e.g. debug or kinship=info");
    println!("    -v, --verbose             Log at debug level");
    println!("    -h, --help                Print help information");
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    config.data = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("error: --data requires a value");
                    std::process::exit(2);
                }
            }
            "--log-level" => {
                if i + 1 < args.len() {
                    config.log_level = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("error: --log-level requires a value");
                    std::process::exit(2);
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("error: unknown argument: {arg}");
                std::process::exit(2);
            }
            path => {
                if config.commands.is_some() {
                    eprintln!("error: unexpected extra argument: {path}");
                    std::process::exit(2);
                }
                config.commands = Some(PathBuf::from(path));
                i += 1;
            }
        }
    }

    config
}

fn init_tracing(config: &Config) {
    let filter = match (&config.log_level, config.verbose) {
        (Some(level), _) => EnvFilter::new(level),
        (None, true) => EnvFilter::new("debug"),
        (None, false) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Results own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> Result<usize, KinError> {
    let tree = FamilyTree::load(&config.data)?;
    info!(members = tree.len(), data = %config.data.display(), "tree ready");

    let engine = FamilyEngine::new(Arc::new(InMemoryFamilyStore::with_tree(tree)));
    let stdout = io::stdout();
    let sink = WriterSink::new(stdout.lock());

    match &config.commands {
        Some(path) => {
            let file = File::open(path).map_err(StorageError::Io)?;
            engine.run(BufReader::new(file), sink)
        }
        None => engine.run(io::stdin().lock(), sink),
    }
}

fn main() -> ExitCode {
    let config = parse_args();
    init_tracing(&config);

    match run(&config) {
        Ok(executed) => {
            info!(executed, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
