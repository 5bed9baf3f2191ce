//! Wiring between the core and the outside world
//!
//! - [`runtime::Runtime`] owns the state, the queues and the executor
//! - [`app_runner::AppRunner`] drives it from terminal events and renders

pub mod app_runner;
pub mod runtime;
