use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ticket_pricing::reporting::{reference_scenarios, render_breakdown, render_summary};
use ticket_pricing::{calculate_booking_price, load_booking, setup_environment};

/// Price event-ticket bookings
#[derive(Debug, Parser)]
#[command(name = "ticket-pricing", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price and print the reference scenarios
    Scenarios,
    /// Price a booking read from a JSON file
    Quote {
        /// Path to a booking request JSON file
        file: PathBuf,
        /// Print the running total after every pipeline step
        #[arg(long)]
        breakdown: bool,
        /// Print the price breakdown as JSON
        #[arg(long, conflicts_with = "breakdown")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment()?;
    let currency = config.currency_label.as_str();

    tracing::debug!(environment = %config.environment, "ticket-pricing starting");

    match cli.command {
        Command::Scenarios => {
            let scenarios = reference_scenarios()?;
            for (index, scenario) in scenarios.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                let breakdown = calculate_booking_price(&scenario.request);
                print!(
                    "{}",
                    render_summary(&scenario.title, &scenario.request, &breakdown, currency)
                );
            }
        }
        Command::Quote {
            file,
            breakdown,
            json,
        } => {
            let request = match load_booking(&file) {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!(file = %file.display(), "Rejected booking: {:#}", e);
                    return Err(e);
                }
            };
            let result = calculate_booking_price(&request);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            print!(
                "{}",
                render_summary("Payment Summary", &request, &result, currency)
            );
            if breakdown {
                println!();
                print!("{}", render_breakdown(&result, currency));
            }
        }
    }

    Ok(())
}
