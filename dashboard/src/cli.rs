//! Command-line arguments for the dashboard binary.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hris_dashboard::types::DepartmentId;

#[derive(Parser, Debug)]
#[command(name = "hris-dashboard")]
#[command(version)]
#[command(about = "Attendance, payroll and performance views over the HRIS backend", long_about = None)]
pub struct Cli {
    /// Account used for `POST /token`
    #[arg(short, long, env = "HRIS_USERNAME", global = true)]
    pub username: Option<String>,

    #[arg(short, long, env = "HRIS_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Overrides HRIS_API_BASE_URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Today's attendance cards, the week, and the latest check-ins
    Attendance {
        /// Reference day (YYYY-MM-DD); defaults to today in HRIS_TIMEZONE
        #[arg(long, value_name = "DATE", conflicts_with = "latest")]
        date: Option<NaiveDate>,

        /// Use the most recent date present in the data
        #[arg(long)]
        latest: bool,
    },
    /// Payroll totals and per-department net pay
    Payroll {
        /// Save the backend's payroll report to this path
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,

        /// Ask the backend to generate the next pay period first
        #[arg(long)]
        process_next: bool,
    },
    /// Score distribution and per-department averages
    Performance,
    /// Employee directory
    Employees {
        /// Matches name or email, case-insensitive
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, value_name = "ID")]
        department: Option<DepartmentId>,
    },
}
