//! Line charts over the training program's measurement logs.
//!
//! `plot_loss` renders the per-epoch loss curve; `plot_scaling` renders
//! runtime against input size on log-log axes next to closed-form reference
//! curves.

pub mod curve;
pub mod logs;
pub mod render;

pub use curve::ReferenceCurve;
pub use logs::{LossSample, TimingSample, read_loss_log, read_timing_log};
pub use render::{render_loss_chart, render_scaling_chart};
