//! tabreport CLI - descriptive statistics PDF reports from CSV data

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use tabreport::{ReportConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "tabreport")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Generate a descriptive statistics PDF report from a CSV file", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PDF file (overwritten if it exists)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl Cli {
    fn config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_input(&self.input)
            .with_output(&self.output)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!(
        "Input: {}, output: {}",
        cli.input.display(),
        cli.output.display()
    );

    match cli.config().run() {
        Ok(output) => println!("Report generated: {}", output.display()),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
