// command line interface

use crate::core::{assess, clean_medicine_text, split_medications};
use crate::{Error, Gemini, Output, Server};
use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "medguard", about = "Check a medication list for risky combinations")]
struct Cli {
    /// api key for gemini
    #[arg(long, short = 'k', env = "GEMINI_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// gemini model used for ai notes
    #[arg(long, short, env = "GEMINI_MODEL", global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// evaluate a list of medications
    Check {
        /// medication names, comma separated or one per argument
        #[arg(required = true)]
        medications: Vec<String>,

        /// print json instead of a report
        #[arg(long)]
        json: bool,

        /// skip the ai notes
        #[arg(long)]
        no_ai: bool,
    },

    /// clean raw scanner text into medicine names
    Clean {
        /// text as it came out of the scanner
        text: String,
    },

    /// start as http server
    Serve {
        /// port number
        #[arg(long, short, default_value = "3000")]
        port: u16,

        /// host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

pub async fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            medications,
            json,
            no_ai,
        } => {
            let medications = split_medications(&medications.join(","));

            let ai = if no_ai {
                None
            } else {
                gemini(cli.api_key, cli.model.as_deref())
            };

            let assessment = assess(medications, ai.as_ref()).await;
            if json {
                Output::raw(&assessment);
            } else {
                Output::pretty(&assessment);
            }
            Ok(())
        }

        Commands::Clean { text } => {
            println!("{}", clean_medicine_text(&text));
            Ok(())
        }

        Commands::Serve { port, host } => {
            let ai = gemini(cli.api_key, cli.model.as_deref());
            Ok(Server::run(&host, port, ai).await?)
        }
    }
}

// a missing key only costs the ai notes, the rule check still runs
fn gemini(api_key: Option<String>, model: Option<&str>) -> Option<Gemini> {
    match Gemini::new(api_key) {
        Ok(client) => Some(match model {
            Some(m) => client.with_model(m),
            None => client,
        }),
        Err(Error::MissingApiKey) => {
            tracing::warn!("no gemini api key, skipping ai notes");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not set up gemini, skipping ai notes");
            None
        }
    }
}

// logs go to stderr so --json output stays clean
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
