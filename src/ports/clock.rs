//! Clock port - Source of the current calendar year.
//!
//! The personal year number changes every January, so it must be computed
//! against "now" at generation time. Routing that through a port keeps the
//! domain pure and lets tests pin the year.

/// Provides the current calendar year.
pub trait Clock: Send + Sync {
    /// The calendar year at the moment of the call.
    fn current_year(&self) -> i32;
}
