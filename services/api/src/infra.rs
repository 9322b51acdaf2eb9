use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use programme_eligibility::workflows::survey::{Clock, EducationStage, Sector};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wall clock used by the running service; tests and CLI overrides use `FixedClock`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_sector(raw: &str) -> Result<Sector, String> {
    Sector::parse(raw).ok_or_else(|| {
        format!("unknown sector '{raw}' (expected Finance, Technology or Law)")
    })
}

pub(crate) fn parse_stage(raw: &str) -> Result<EducationStage, String> {
    EducationStage::parse(raw).ok_or_else(|| {
        format!("unknown education stage '{raw}' (expected high school, university or graduate)")
    })
}
