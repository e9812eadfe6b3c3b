//! Votebox CLI
//!
//! Command-line interface for the voting board:
//! - Cast a vote
//! - Show the current tally
//! - Check server status
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "votebox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kiosk voting board with a file-persisted tally")]
#[command(long_about = "Votebox is a single-page poll: a fixed candidate set,\na durable vote ledger, and a live bar chart.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8086", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cast a vote for a candidate
    Vote {
        /// Candidate name (BNP, Jamaat, NCP; case-insensitive)
        candidate: String,
    },

    /// Show the current tally
    Tally,

    /// List the candidate set
    Candidates,

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Vote { candidate } => {
            let body = serde_json::json!({ "candidate": candidate });

            let response = client
                .post(format!("{}/api/v1/votes", cli.api_url))
                .json(&body)
                .send()
                .await?;

            if response.status().is_success() {
                let result: serde_json::Value = response.json().await?;
                let name = result["candidate"].as_str().unwrap_or(&candidate);
                let count = result["tally"]["counts"][name].as_u64().unwrap_or(0);
                println!("Voted for {} (now {} votes)", name, count);
            } else {
                let status = response.status();
                let body: serde_json::Value = response.json().await.unwrap_or_default();
                let message = body["error"]["message"].as_str().unwrap_or("unknown error");
                eprintln!("Vote rejected ({}): {}", status, message);
                std::process::exit(1);
            }
        }

        Commands::Tally => {
            let response = client
                .get(format!("{}/api/v1/tally", cli.api_url))
                .send()
                .await?;

            if !response.status().is_success() {
                eprintln!("Failed to fetch tally: {}", response.status());
                std::process::exit(1);
            }

            let data: serde_json::Value = response.json().await?;

            match cli.format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                }
                _ => {
                    print_tally_table(&data);
                }
            }
        }

        Commands::Candidates => {
            let response = client
                .get(format!("{}/api/v1/candidates", cli.api_url))
                .send()
                .await?;

            if !response.status().is_success() {
                eprintln!("Failed to fetch candidates: {}", response.status());
                std::process::exit(1);
            }

            let data: serde_json::Value = response.json().await?;
            let candidates = data["candidates"].as_array().cloned().unwrap_or_default();

            println!("{:<10} {:<20} {}", "ID", "English", "Bangla");
            println!("{}", "-".repeat(50));
            for candidate in candidates {
                println!(
                    "{:<10} {:<20} {}",
                    candidate["id"].as_str().unwrap_or("-"),
                    candidate["label_en"].as_str().unwrap_or("-"),
                    candidate["label_bn"].as_str().unwrap_or("-")
                );
            }
        }

        Commands::Status => {
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Votebox v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "Ledger: {}",
                        health["ledger"].as_str().unwrap_or("unknown")
                    );

                    if let Some(total) = health["total_votes"].as_u64() {
                        println!("Total votes: {}", total);
                    }

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    eprintln!("API returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Votebox API at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the Votebox API server is running:");
                    eprintln!("  cargo run --bin votebox-api");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = votebox::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_tally_table(data: &serde_json::Value) {
    let counts = match data["counts"].as_object() {
        Some(c) => c,
        None => {
            println!("No data");
            return;
        }
    };

    let total = data["total"].as_u64().unwrap_or(0);

    println!("{:<10} {:>7} {}", "Candidate", "Votes", "Share");
    println!("{}", "-".repeat(40));

    for (name, value) in counts {
        let votes = value.as_u64().unwrap_or(0);
        let share = if total > 0 {
            votes as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        let bar_len = (share / 5.0).round() as usize;
        println!(
            "{:<10} {:>7} {:>5.1}% {}",
            name,
            votes,
            share,
            "#".repeat(bar_len)
        );
    }

    println!();
    println!("Total: {}", total);
}
