use anyhow::{anyhow, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hris_dashboard::{
    aggregate::{
        department_name, filter_employees, AttendanceOverview, AttendanceStatus, PayrollOverview,
        PerformanceOverview,
    },
    api::ApiClient,
    config::Config,
    state::{AuthContext, DashboardState, Panel, PanelState, ReferenceDate},
};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hris_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_base_url(url);
    }
    tracing::info!(
        api_base_url = %config.api_base_url,
        time_zone = %config.time_zone,
        late_cutoff = %config.late_cutoff,
        recent_limit = config.recent_limit,
        "Loaded configuration from environment/.env"
    );

    let username = cli
        .username
        .as_deref()
        .ok_or_else(|| anyhow!("A username is required (--username or HRIS_USERNAME)"))?;
    let password = cli
        .password
        .as_deref()
        .ok_or_else(|| anyhow!("A password is required (--password or HRIS_PASSWORD)"))?;

    let api = ApiClient::new(&config, AuthContext::new())?;
    api.login(username, password)
        .await
        .context("Sign-in failed")?;

    let dashboard = DashboardState::new(api, &config);
    let result = run(&dashboard, cli.command).await;
    dashboard.api().logout();
    result
}

async fn run(dashboard: &DashboardState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Attendance { date, latest } => {
            let reference = match (date, latest) {
                (Some(date), _) => ReferenceDate::On(date),
                (None, true) => ReferenceDate::Latest,
                (None, false) => ReferenceDate::Today,
            };
            dashboard.reload_attendance(reference).await;
            print_attendance(&*ready(dashboard.attendance())?);
        }
        Command::Payroll {
            report,
            process_next,
        } => {
            if process_next {
                let processed = dashboard.api().process_next_payroll().await?;
                println!("Processed next payroll: {}", processed);
            }
            dashboard.reload_payroll().await;
            print_payroll(&*ready(dashboard.payroll())?);

            if let Some(path) = report {
                let report = dashboard.api().payroll_report().await?;
                tokio::fs::write(&path, &report.bytes)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!(
                    "Saved report ({} bytes) to {}",
                    report.bytes.len(),
                    path.display()
                );
            }
        }
        Command::Performance => {
            dashboard.reload_performance().await;
            print_performance(&*ready(dashboard.performance())?);
        }
        Command::Employees { search, department } => {
            let (employees, departments) = tokio::try_join!(
                dashboard.api().list_employees(),
                dashboard.api().list_departments(),
            )?;
            let matches = filter_employees(&employees, &search, department);
            println!("{:<6} {:<28} {:<28} {}", "ID", "Name", "Email", "Department");
            for employee in &matches {
                println!(
                    "{:<6} {:<28} {:<28} {}",
                    employee.id.get(),
                    employee.full_name(),
                    employee.email.as_deref().unwrap_or("-"),
                    department_name(&departments, employee.department_id),
                );
            }
            println!("{} of {} employees", matches.len(), employees.len());
        }
    }
    Ok(())
}

fn ready<T>(panel: &Panel<T>) -> anyhow::Result<std::sync::Arc<T>> {
    match panel.state() {
        PanelState::Ready(value) => Ok(value),
        PanelState::Failed(message) => Err(anyhow!(message)),
        PanelState::Idle | PanelState::Loading => Err(anyhow!("Data is not loaded")),
    }
}

fn print_attendance(overview: &AttendanceOverview) {
    let today = &overview.today;
    println!("Attendance for {} ({})", overview.reference_date, today.weekday);
    println!("  Employees      {}", overview.employee_count);
    for status in [
        AttendanceStatus::OnTime,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
    ] {
        println!(
            "  {:<14} {} ({:.1}%)",
            status.label(),
            today.count(status),
            today.share(status)
        );
    }
    println!("  Avg. hours     {}", overview.average_hours);

    println!();
    println!("This week");
    if overview.week.is_empty() {
        println!("  No attendance recorded");
    }
    for day in &overview.week {
        println!(
            "  {} {}  on time {:>3}  late {:>3}  absent {:>3}",
            day.weekday, day.date, day.present, day.late, day.absent
        );
    }

    println!();
    println!("Recent check-ins");
    for row in &overview.recent {
        println!(
            "  {} {:<24} {:<16} in {:<8} out {:<8} {}",
            row.date,
            row.name,
            row.department,
            row.time_in.as_deref().unwrap_or("-"),
            row.time_out.as_deref().unwrap_or("-"),
            row.status,
        );
    }
}

fn print_payroll(overview: &PayrollOverview) {
    let totals = &overview.totals;
    println!("Payroll ({} records)", totals.records);
    println!("  Total net pay     {:.2}", totals.total_net_pay);
    println!("  Total bonus       {:.2}", totals.total_bonus);
    println!("  Total deductions  {:.2}", totals.total_deductions);
    match totals.average_salary {
        Some(average) => println!("  Average salary    {:.2}", average),
        None => println!("  Average salary    N/A"),
    }

    println!();
    println!("By department");
    for row in &overview.departments {
        println!(
            "  {:<20} {:>16.2}  ({} employees)",
            row.department, row.total_pay, row.employees
        );
    }
}

fn print_performance(overview: &PerformanceOverview) {
    let stats = &overview.stats;
    println!("Performance ({} reviews)", stats.reviews);
    match stats.average_score {
        Some(score) => println!("  Average score          {:.1}", score),
        None => println!("  Average score          N/A"),
    }
    match stats.average_working_hours {
        Some(hours) => println!("  Average working hours  {:.1}", hours),
        None => println!("  Average working hours  N/A"),
    }

    println!();
    println!("Score distribution");
    for (band, count) in &stats.distribution {
        println!("  {:<18} {:>5}  {}", band.label(), band.range(), count);
    }

    println!();
    println!("By department");
    for row in &overview.departments {
        println!(
            "  {:<20} {:>5.1}  ({} reviews, {} employees)",
            row.department, row.average_score, row.reviews, row.employees
        );
    }
}
