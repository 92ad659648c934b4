//! Export adapters - Rendering and writing study plans.

mod file_plan_exporter;
mod render;

pub use file_plan_exporter::FilePlanExporter;
pub use render::render_report;
