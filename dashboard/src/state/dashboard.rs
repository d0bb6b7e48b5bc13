use chrono::NaiveDate;
use chrono_tz::Tz;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::aggregate::{
    latest_date, AttendanceOverview, AttendanceSettings, PayrollOverview, PerformanceOverview,
};
use crate::api::{ApiClient, ApiError, AttendanceRecord};
use crate::config::Config;
use crate::utils::time::today_in;

#[derive(Debug)]
pub enum PanelState<T> {
    Idle,
    Loading,
    Ready(Arc<T>),
    Failed(String),
}

impl<T> Clone for PanelState<T> {
    fn clone(&self) -> Self {
        match self {
            PanelState::Idle => PanelState::Idle,
            PanelState::Loading => PanelState::Loading,
            PanelState::Ready(value) => PanelState::Ready(Arc::clone(value)),
            PanelState::Failed(message) => PanelState::Failed(message.clone()),
        }
    }
}

/// Generation of one load request. Only the newest ticket may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer load started after this one; its result was dropped.
    Stale,
}

/// One independently reloadable view. Each reload replaces the previous data
/// wholesale; a response that arrives after a newer reload began is discarded.
#[derive(Debug)]
pub struct Panel<T> {
    generation: AtomicU64,
    state: RwLock<PanelState<T>>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Panel<T> {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            state: RwLock::new(PanelState::Idle),
        }
    }

    pub fn begin(&self) -> Ticket {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *state = PanelState::Loading;
        Ticket(generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn complete(&self, ticket: Ticket, result: Result<T, ApiError>) -> Completion {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "Discarding stale panel result");
            return Completion::Stale;
        }
        *state = match result {
            Ok(value) => PanelState::Ready(Arc::new(value)),
            Err(error) => {
                tracing::warn!(code = error.code(), error = %error, "Panel load failed");
                PanelState::Failed(error.to_string())
            }
        };
        Completion::Applied
    }

    pub fn state(&self) -> PanelState<T> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn ready(&self) -> Option<Arc<T>> {
        match self.state() {
            PanelState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Which day the attendance headline cards describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceDate {
    /// Today in the configured time zone.
    #[default]
    Today,
    /// The most recent date present in the fetched data.
    Latest,
    On(NaiveDate),
}

impl ReferenceDate {
    pub fn resolve(self, time_zone: Tz, records: &[AttendanceRecord]) -> NaiveDate {
        match self {
            ReferenceDate::On(date) => date,
            ReferenceDate::Latest => {
                latest_date(records).unwrap_or_else(|| today_in(time_zone))
            }
            ReferenceDate::Today => today_in(time_zone),
        }
    }
}

pub struct DashboardState {
    api: ApiClient,
    time_zone: Tz,
    settings: AttendanceSettings,
    attendance: Panel<AttendanceOverview>,
    payroll: Panel<PayrollOverview>,
    performance: Panel<PerformanceOverview>,
}

impl DashboardState {
    pub fn new(api: ApiClient, config: &Config) -> Self {
        Self {
            api,
            time_zone: config.time_zone,
            settings: AttendanceSettings {
                cutoff: config.late_cutoff,
                recent_limit: config.recent_limit,
            },
            attendance: Panel::new(),
            payroll: Panel::new(),
            performance: Panel::new(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn attendance(&self) -> &Panel<AttendanceOverview> {
        &self.attendance
    }

    pub fn payroll(&self) -> &Panel<PayrollOverview> {
        &self.payroll
    }

    pub fn performance(&self) -> &Panel<PerformanceOverview> {
        &self.performance
    }

    /// Fetches employees, attendance and departments concurrently. If any of
    /// them fails the panel shows the error instead of partial data.
    pub async fn reload_attendance(&self, reference: ReferenceDate) -> Completion {
        let ticket = self.attendance.begin();
        let result = async {
            let (employees, records, departments) = tokio::try_join!(
                self.api.list_employees(),
                self.api.list_attendances(),
                self.api.list_departments(),
            )?;
            let reference_date = reference.resolve(self.time_zone, &records);
            tracing::info!(
                employees = employees.len(),
                records = records.len(),
                %reference_date,
                "Loaded attendance data"
            );
            Ok::<_, ApiError>(AttendanceOverview::build(
                reference_date,
                &employees,
                &records,
                &departments,
                self.settings,
            ))
        }
        .await;
        self.attendance.complete(ticket, result)
    }

    pub async fn reload_payroll(&self) -> Completion {
        let ticket = self.payroll.begin();
        let result = async {
            let (employees, departments, payrolls) = tokio::try_join!(
                self.api.list_employees(),
                self.api.list_departments(),
                self.api.list_payrolls(),
            )?;
            tracing::info!(records = payrolls.len(), "Loaded payroll data");
            Ok::<_, ApiError>(PayrollOverview::build(&payrolls, &employees, &departments))
        }
        .await;
        self.payroll.complete(ticket, result)
    }

    pub async fn reload_performance(&self) -> Completion {
        let ticket = self.performance.begin();
        let result = async {
            let (employees, departments, reviews) = tokio::try_join!(
                self.api.list_employees(),
                self.api.list_departments(),
                self.api.list_performance_reviews(),
            )?;
            tracing::info!(reviews = reviews.len(), "Loaded performance reviews");
            Ok::<_, ApiError>(PerformanceOverview::build(&reviews, &employees, &departments))
        }
        .await;
        self.performance.complete(ticket, result)
    }
}
