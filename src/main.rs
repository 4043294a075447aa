//! shift-roster entry point

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shift_roster::display::{print_analysis, print_roster, write_roster_to_file};
use shift_roster::form::export_roster_to_csv;
use shift_roster::{web, Config, Variant, DEFAULT_SCENARIO};

/// Build a staffing roster from free-text constraints
#[derive(Parser, Debug)]
#[command(name = "shift-roster")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Parsing variant (classic or contextual)
    #[arg(long, global = true)]
    variant: Option<Variant>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a roster and print it
    Roster {
        /// Read constraints from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Use the built-in sample scenario
        #[arg(long)]
        demo: bool,
        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
        /// Also write the rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Also write the text table to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show how each line is classified
    Classify {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(long)]
        demo: bool,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the web interface
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn read_input(input: Option<&PathBuf>, demo: bool) -> anyhow::Result<String> {
    if demo {
        return Ok(DEFAULT_SCENARIO.to_string());
    }
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = match args.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        config.scheduler.variant = variant;
    }
    let generator = config.generator()?;

    match args.command {
        Command::Roster {
            input,
            demo,
            json,
            csv,
            output,
        } => {
            let text = read_input(input.as_ref(), demo)?;
            let roster = generator.generate(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&roster.report())?);
            } else {
                print_roster(&roster);
            }

            if let Some(path) = csv {
                export_roster_to_csv(&roster, &path)?;
                eprintln!("Roster saved to {}", path.display());
            }
            if let Some(filename) = output {
                write_roster_to_file(&roster, &filename)?;
                eprintln!("Roster saved to {}", filename);
            }
        }
        Command::Classify { input, demo, json } => {
            let text = read_input(input.as_ref(), demo)?;
            let analysis = generator.analyze(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            println!(
                "Access the site at http://localhost:{}",
                config.server.port
            );
            web::start_server(&config.server, generator).await?;
        }
    }

    Ok(())
}
