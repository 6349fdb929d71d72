use clap::{Parser, Subcommand};
use colored::*;
use evaluator::{check_submission, TerminalNotifier};
use guard::SubmitOutcome;
use models::{ContactSubmission, GuardConfig};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "formguard",
    about = "Contact form submit guard",
    version,
    long_about = "Checks contact form values the way the page's submit guard does and reports whether the submission would go through.\n\nExamples:\n  formguard check --name Al --email a@b.com --message 'Hello there!'\n  formguard validate                       # Check every form document in forms/\n  formguard validate forms/contact.yml     # Check a single form document\n  formguard --config formguard.yml validate  # Use custom minimum lengths"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in verbose mode with detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in debug mode with extensive details
    #[arg(short, long, global = true)]
    debug: bool,

    /// YAML file with the minimum field lengths
    #[arg(short, long, global = true, env = "FORMGUARD_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a single set of field values
    Check {
        /// Value of the name field
        #[arg(long, default_value = "")]
        name: String,

        /// Value of the email field
        #[arg(long, default_value = "")]
        email: String,

        /// Value of the message field
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Simulate a submit on form document files
    Validate {
        /// Path to a form document or a directory of them (defaults to forms)
        path: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> GuardConfig {
    let Some(path) = path else {
        return GuardConfig::default();
    };

    match GuardConfig::from_file(path) {
        Ok(config) => {
            logging::info(&format!("Loaded config from {}", path.display()));
            config
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose || cli.debug;

    logging::set_console_level(logging::LogLevel::from_flags(cli.verbose, cli.debug));
    if cli.debug {
        logging::debug("Debug mode enabled - showing detailed logs");
    } else if cli.verbose {
        logging::info("Verbose mode enabled");
    }

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Some(Commands::Check {
            name,
            email,
            message,
        }) => {
            let mut notifier = TerminalNotifier::new(io::stderr());
            match check_submission(config, ContactSubmission::new(name, email, message), &mut notifier) {
                Ok(SubmitOutcome::Allowed) => {
                    println!("{} Form would be submitted", "✅".green());
                }
                Ok(SubmitOutcome::Blocked(_)) => std::process::exit(1),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Some(Commands::Validate { path }) => {
            let path = path.unwrap_or_else(|| PathBuf::from("forms"));
            run_validate(&path, &config, verbose);
        }

        None => run_validate(Path::new("forms"), &config, verbose),
    }
}

fn run_validate(path: &Path, config: &GuardConfig, verbose: bool) {
    match evaluator::validate_target(path, config, verbose) {
        Ok(summary) if summary.is_clean() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
