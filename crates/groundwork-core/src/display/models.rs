//! Display implementations for domain models.
//!
//! Jobs and quotes format as markdown bullet lists; enums format as their
//! persisted names so messages match what is stored.

use std::fmt;

use super::{datetime::LocalDateTime, money::Currency};
use crate::{
    lifecycle::JobAction,
    models::{Job, JobStatus, Quote, ServiceType},
    pricing::{Rate, RateTable},
};

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for JobAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Quote {
    fn fmt_measurements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Area: {} m² ({} ft²)", self.area_m2, self.area_ft2)?;
        if self.edge_m > 0 {
            writeln!(f, "- Edge: {} m ({} ft)", self.edge_m, self.edge_ft)?;
        }
        writeln!(f, "- Price: {}", Currency(self.price))
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_measurements(f)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.id, self.service)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Address: {}", self.address().unwrap_or("No address"))?;
        self.quote.fmt_measurements(f)?;
        writeln!(f, "- Status: {}", self.status)?;

        let actions = self.status.available_actions();
        if !actions.is_empty() {
            let names: Vec<&str> = actions.iter().map(JobAction::as_str).collect();
            writeln!(f, "- Actions: {}", names.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} base + ${:.3}/m² + ${:.2}/m",
            Currency(self.base),
            self.per_area_unit,
            self.per_edge_unit
        )
    }
}

impl fmt::Display for RateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Services")?;
        writeln!(f)?;
        for (service, rate) in &self.0 {
            writeln!(f, "- **{service}**: {rate}")?;
        }
        Ok(())
    }
}
