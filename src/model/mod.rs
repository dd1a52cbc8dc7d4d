/// Bars and the chart that holds them
pub mod chart;
/// Animated step events
pub mod event;
/// Highlight states and their colors
pub mod marker;

pub use chart::{Bar, BarChart};
pub use event::StepEvent;
pub use marker::Marker;
