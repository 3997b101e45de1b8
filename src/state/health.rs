use chrono::{DateTime, Local};

use crate::constants::{HEALTH_OFFLINE, HEALTH_ONLINE};

/// Backend reachability as shown in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// No check has completed yet; nothing is rendered
    #[default]
    Unknown,
    Online,
    /// A check completed and failed
    Offline,
}

impl HealthStatus {
    pub fn from_check(healthy: bool) -> Self {
        if healthy {
            HealthStatus::Online
        } else {
            HealthStatus::Offline
        }
    }

    /// Badge text, `None` while the status is unknown
    pub fn badge_text(&self) -> Option<&'static str> {
        match self {
            HealthStatus::Unknown => None,
            HealthStatus::Online => Some(HEALTH_ONLINE),
            HealthStatus::Offline => Some(HEALTH_OFFLINE),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthMonitor {
    status: HealthStatus,
    last_checked: Option<DateTime<Local>>,
}

impl HealthMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a health probe, returning whether the status changed
    pub fn record(&mut self, healthy: bool) -> bool {
        let next = HealthStatus::from_check(healthy);
        let changed = next != self.status;
        if changed {
            log::info!("Backend health: {:?} -> {:?}", self.status, next);
        }
        self.status = next;
        self.last_checked = Some(Local::now());
        changed
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn last_checked(&self) -> Option<DateTime<Local>> {
        self.last_checked
    }
}
