//! Command-line interface for animating one sorting run

use crate::algorithm::procedure::{Procedure, RunConfig};
use crate::algorithm::stepper::RunOutcome;
use crate::io::configuration::{
    DEFAULT_DELAY_MS, DEFAULT_LOG_LEVEL, DEFAULT_RANDOM_MAX, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{AnimationError, Result};
use crate::io::input::{collect, random_values, validate};
use crate::io::progress::BarDisplay;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "sortanim")]
#[command(
    author,
    version,
    about = "Animate classic sorting algorithms one step at a time"
)]
/// Command-line arguments for the sorting animation
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Sorting procedure to animate
    #[arg(short, long, value_enum)]
    pub procedure: Procedure,

    /// Comma-separated integers to sort, e.g. "5,3,4,1"
    #[arg(
        short,
        long,
        value_name = "LIST",
        allow_hyphen_values = true,
        required_unless_present = "random",
        conflicts_with = "random"
    )]
    pub values: Option<String>,

    /// Number of values expected in --values
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Generate this many random values instead of --values
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Random seed for reproducible --random input
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Largest value produced by --random
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_MAX)]
    pub max_value: i64,

    /// Pause after each animated step, in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay: u64,

    /// Export the animation as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Ring the terminal bell on every animated step
    #[arg(short, long)]
    pub bell: bool,

    /// Skip the terminal animation and its delays
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(short, long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if the run should be drawn in the terminal
    pub const fn should_animate(&self) -> bool {
        !self.quiet
    }

    /// Pause between terminal frames
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Frame delay for GIF export, falling back to the default when no delay is set
    pub fn gif_delay_ms(&self) -> u32 {
        match u32::try_from(self.delay) {
            Ok(0) => GIF_FRAME_DELAY_MS,
            Ok(delay) => delay,
            Err(_overflow) => u32::MAX,
        }
    }
}

/// Turns parsed arguments into one complete run
pub struct RunProcessor {
    cli: Cli,
}

impl RunProcessor {
    /// Create a new run processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Collect and validate the run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the values cannot be parsed, disagree with
    /// `--count`, or are unsupported by the chosen procedure
    pub fn config(&self) -> Result<RunConfig> {
        let procedure = self.cli.procedure;
        let config = match (&self.cli.values, self.cli.random) {
            (Some(text), _) => collect(self.cli.count, text, procedure)?,
            (None, Some(count)) => {
                let values = random_values(count, self.cli.max_value, self.cli.seed)?;
                validate(self.cli.count, &values, procedure)?;
                RunConfig::new(procedure, values)
            }
            (None, None) => return Err(AnimationError::EmptyInput),
        };
        Ok(config)
    }

    /// Run the chosen procedure, animating and exporting as requested
    ///
    /// # Errors
    ///
    /// Returns an error if input validation, the run, or GIF export fails
    pub fn process(&self) -> Result<RunOutcome> {
        let start_time = Instant::now();
        let config = match self.config() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "input rejected");
                return Err(err);
            }
        };

        let display = self
            .cli
            .should_animate()
            .then(|| BarDisplay::new(self.cli.step_delay(), self.cli.bell));
        let mut capture = self.cli.gif.as_ref().map(|_| VisualizationCapture::new());

        let outcome = config.run((display, capture.as_mut()))?;

        if let (Some(path), Some(capture)) = (&self.cli.gif, &capture) {
            capture.export_gif(path, self.cli.gif_delay_ms())?;
        }

        tracing::debug!(elapsed = ?start_time.elapsed(), "processing complete");
        Ok(outcome)
    }
}
