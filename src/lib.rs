//! chart-viewport: viewport and gesture core for interactive charts.
//!
//! This crate holds the logic that maps between a logical data viewport and
//! pixel space, constrains zoom and pan within data bounds, and turns
//! semantic gestures (drag, fling, pinch, double tap) into viewport changes.
//! Rendering, widget scaffolding and raw pointer decoding stay with the host;
//! the seams are the [`interaction::ChartRenderer`] capability, the
//! [`core::ViewportChangeListener`] callback and an external frame clock that
//! drives the deterministic fling/zoom stepping.

pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use core::{ChartComputator, ComputatorMode, Viewport};
pub use error::{ChartError, ChartResult};
