use clap::{Parser, Subcommand};
use cpicheck::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates an inflation-calculation request and prints the normalized
    /// request as JSON.
    ///
    /// All five fields are checked independently: on failure, every error is
    /// printed in one JSON body, in field order, and the exit status is 1.
    Validate {
        /// The start currency code (e.g. `USD`)
        #[arg(long)]
        start_currency: Option<String>,

        /// The end currency code
        #[arg(long)]
        end_currency: Option<String>,

        /// The start date, `[-]YYYY[-MM[-DD]]`
        #[arg(long)]
        start_date: Option<String>,

        /// The end date, `[-]YYYY[-MM[-DD]]`
        #[arg(long)]
        end_date: Option<String>,

        /// The amount to revalue
        #[arg(long)]
        amount: Option<String>,
    },

    /// Parses a single compound-date token and prints the normalized date as
    /// JSON.
    Date {
        /// The date token, `[-]YYYY[-MM[-DD]]`
        token: String,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<Output, serde_json::Error> {
    match cli.command {
        Commands::Validate {
            start_currency,
            end_currency,
            start_date,
            end_date,
            amount,
        } => {
            let raw = RawRequest {
                start_currency,
                end_currency,
                start_date,
                end_date,
                amount,
            };
            match raw.validate() {
                Ok(validated) => Ok((serde_json::to_string_pretty(&validated)?, 0)),
                Err(errors) => {
                    let body = ErrorResponse::from(errors);
                    Ok((serde_json::to_string_pretty(&body)?, 1))
                }
            }
        }
        Commands::Date { token } => match token.parse::<CompoundDate>() {
            Ok(date) => Ok((serde_json::to_string_pretty(&date)?, 0)),
            Err(error) => {
                let body = ErrorResponse {
                    message: "There was an error with the request",
                    errors: vec![error.to_string()],
                };
                Ok((serde_json::to_string_pretty(&body)?, 1))
            }
        },
    }
}
