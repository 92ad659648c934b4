//! Adapters - Implementations of ports for external systems.
//!
//! - `clock` - System and fixed clocks
//! - `export` - Text/JSON/YAML rendering and file export

pub mod clock;
pub mod export;

pub use clock::{FixedClock, SystemClock};
pub use export::{render_report, FilePlanExporter};
