//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current calendar year for time-varying numbers
//! - `PlanExporter` - Writing rendered plans to durable storage

mod clock;
mod plan_exporter;

pub use clock::Clock;
pub use plan_exporter::{ExportError, ExportFormat, PlanExporter};
