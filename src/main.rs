use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};

mod actions;
mod assessment;
mod config;
mod error;
mod health;
mod loader;
mod models;
mod narrative;
mod renewal;
mod report;
mod sample;
mod trends;

use config::Thresholds;
use models::HealthStatus;

#[derive(Parser)]
#[command(name = "health-control-room")]
#[command(about = "Customer health scoring and renewal briefings for Customer Success teams", long_about = None)]
struct Cli {
    /// JSON file overriding renewal and narrative thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Date treated as today (YYYY-MM-DD); defaults to the current UTC date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Green,
    Amber,
    Red,
}

impl From<StatusArg> for HealthStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Green => HealthStatus::Green,
            StatusArg::Amber => HealthStatus::Amber,
            StatusArg::Red => HealthStatus::Red,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a seeded sample portfolio to CSV
    Sample {
        #[arg(long, default_value = "customers.csv")]
        out: PathBuf,
        #[arg(long, default_value_t = sample::DEFAULT_CUSTOMER_COUNT)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Score every customer in a CSV file
    Score {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, value_enum, value_delimiter = ',')]
        status: Vec<StatusArg>,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        customer: Option<String>,
        #[arg(long, value_enum, value_delimiter = ',')]
        status: Vec<StatusArg>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Print the client email draft for one customer
    Email {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        customer: String,
    },
}

fn selected_statuses(status: Vec<StatusArg>) -> Vec<HealthStatus> {
    if status.is_empty() {
        HealthStatus::ALL.to_vec()
    } else {
        status.into_iter().map(HealthStatus::from).collect()
    }
}

fn load_batch(csv: &Path) -> anyhow::Result<Vec<models::CustomerMetrics>> {
    loader::load_customers(csv).with_context(|| format!("failed to load {}", csv.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let thresholds = match &cli.config {
        Some(path) => Thresholds::load(path)
            .with_context(|| format!("failed to read thresholds from {}", path.display()))?,
        None => Thresholds::default(),
    };

    match cli.command {
        Commands::Sample { out, count, seed } => {
            let customers = sample::generate_customers(count, seed, today);
            let file = std::fs::File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            sample::write_customers(file, &customers)?;
            println!("Wrote {count} sample customers to {}.", out.display());
        }
        Commands::Score {
            csv,
            status,
            limit,
            json,
        } => {
            let records = load_batch(&csv)?;
            let scored = assessment::score_portfolio(&records);
            let summary = assessment::summarize_portfolio(&scored);
            let statuses = selected_statuses(status);
            let visible = assessment::filter_by_status(&scored, &statuses);
            let shown = limit.unwrap_or(visible.len());

            if json {
                let payload = serde_json::json!({
                    "summary": summary,
                    "customers": visible.iter().take(shown).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(());
            }

            println!(
                "Healthy {} | At Risk {} | Critical {} | Avg Health Score {:.1}",
                summary.healthy, summary.at_risk, summary.critical, summary.average_score
            );

            if visible.is_empty() {
                println!("No customers match the selected statuses.");
                return Ok(());
            }

            for customer in visible.iter().take(shown) {
                println!(
                    "- {} score {} ({})",
                    customer.metrics.customer_name, customer.health.score, customer.health.status
                );
                for reason in &customer.health.reasons {
                    println!("    {reason}");
                }
            }
        }
        Commands::Report {
            csv,
            customer,
            status,
            out,
        } => {
            let records = load_batch(&csv)?;
            let scored = assessment::score_portfolio(&records);
            let summary = assessment::summarize_portfolio(&scored);
            let statuses = selected_statuses(status);
            let visible = assessment::filter_by_status(&scored, &statuses);

            let assessments = match customer.as_deref() {
                Some(name) => {
                    let metrics = assessment::find_customer(&records, name)?;
                    vec![(
                        metrics.customer_name.clone(),
                        assessment::assess_customer(metrics, today, &thresholds),
                    )]
                }
                None => {
                    let names = visible.iter().map(|c| c.metrics.customer_name.clone());
                    let batch: Vec<models::CustomerMetrics> =
                        visible.iter().map(|c| c.metrics.clone()).collect();
                    names
                        .zip(assessment::assess_batch(&batch, today, &thresholds))
                        .collect()
                }
            };

            let report = report::build_report(today, &summary, &visible, &assessments);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            log::info!("report covers {} customers", assessments.len());
            println!("Report written to {}.", out.display());
        }
        Commands::Email { csv, customer } => {
            let records = load_batch(&csv)?;
            let metrics = assessment::find_customer(&records, &customer)?;
            let assessment = assessment::assess_customer(metrics, today, &thresholds)?;
            print!("{}", assessment.email);
        }
    }

    Ok(())
}
