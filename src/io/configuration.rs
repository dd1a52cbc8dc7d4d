//! Animation constants and runtime configuration defaults

// Timing
/// Pause after every animated step, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 400;

// Bar geometry
/// Bar height per unit of value
pub const BAR_HEIGHT_SCALE: u32 = 3;

// Input limits keep the chart readable and the counting table small
/// Maximum number of values accepted for one run
pub const MAX_VALUES: usize = 200;
/// Largest value counting sort will build a frequency table for
pub const MAX_COUNTING_VALUE: i64 = 1_000_000;

// Random input generation
/// Fixed seed for reproducible random input
pub const DEFAULT_SEED: u64 = 42;
/// Default upper bound (inclusive) for random values
pub const DEFAULT_RANDOM_MAX: i64 = 100;

// GIF output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Width of one bar in pixels
pub const GIF_BAR_WIDTH: u32 = 12;
/// Horizontal gap between bars in pixels
pub const GIF_BAR_GAP: u32 = 2;
/// Tallest bar in pixels; taller charts are scaled down
pub const GIF_MAX_CHART_HEIGHT: u32 = 300;
/// Empty border around the chart in pixels
pub const GIF_PADDING: u32 = 4;
/// Most step frames written to one GIF; longer runs keep every n-th frame
pub const GIF_MAX_FRAMES: usize = 240;
/// Final frame is held this many frame delays
pub const FINAL_FRAME_HOLD: u32 = 5;
/// Background color of exported frames
pub const GIF_BACKGROUND: [u8; 4] = [24, 24, 32, 255];

// Terminal display settings
/// Width of each terminal bar in characters
pub const TERMINAL_BAR_WIDTH: u16 = 40;

// Logging
/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";
