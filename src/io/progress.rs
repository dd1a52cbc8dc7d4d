//! Live terminal rendering of a run, one progress bar per value

use crate::algorithm::stepper::{Frame, Scheduler};
use crate::io::configuration::TERMINAL_BAR_WIDTH;
use crate::io::error::{AnimationError, Result};
use crate::model::chart::max_magnitude;
use crate::model::{Bar, Marker};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

fn marker_style(marker: Marker) -> ProgressStyle {
    let template = format!(
        "{{prefix:>6}} [{{bar:{TERMINAL_BAR_WIDTH}.{}/black}}] {{msg}}",
        marker.terminal_color()
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
}

static NEUTRAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| marker_style(Marker::Neutral));
static COMPARING_STYLE: LazyLock<ProgressStyle> =
    LazyLock::new(|| marker_style(Marker::Comparing));
static SWAPPING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| marker_style(Marker::Swapping));
static SETTLED_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| marker_style(Marker::Settled));

fn style_for(marker: Marker) -> ProgressStyle {
    match marker {
        Marker::Neutral => NEUTRAL_STYLE.clone(),
        Marker::Comparing => COMPARING_STYLE.clone(),
        Marker::Swapping => SWAPPING_STYLE.clone(),
        Marker::Settled => SETTLED_STYLE.clone(),
    }
}

/// Draws the chart in the terminal and paces the run with a real delay
///
/// Rows are created on the first frame and restyled only when their
/// marker changes. Each frame optionally rings the terminal bell.
pub struct BarDisplay {
    multi_progress: MultiProgress,
    rows: Vec<ProgressBar>,
    shown_markers: Vec<Marker>,
    delay: Duration,
    bell: bool,
}

impl BarDisplay {
    /// Create a display drawing to stderr
    pub fn new(delay: Duration, bell: bool) -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr(), delay, bell)
    }

    /// Create a display drawing to the given target
    pub fn with_draw_target(target: ProgressDrawTarget, delay: Duration, bell: bool) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            rows: Vec::new(),
            shown_markers: Vec::new(),
            delay,
            bell,
        }
    }

    /// Number of rows currently drawn
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Pause applied after every frame
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    fn sync(&mut self, bars: &[Bar]) {
        while self.rows.len() < bars.len() {
            let row = ProgressBar::new(0);
            row.set_style(NEUTRAL_STYLE.clone());
            self.rows.push(self.multi_progress.add(row));
            self.shown_markers.push(Marker::Neutral);
        }

        let length = u64::from(max_magnitude(bars).max(1));

        for ((row, shown), bar) in self.rows.iter().zip(&mut self.shown_markers).zip(bars) {
            if *shown != bar.marker {
                row.set_style(style_for(bar.marker));
                *shown = bar.marker;
            }
            row.set_length(length);
            row.set_position(u64::from(bar.magnitude));
            row.set_prefix(bar.value.to_string());
            row.set_message(bar.marker.to_string());
        }
    }

    fn ring_bell(&self) -> Result<()> {
        if !self.bell {
            return Ok(());
        }
        let mut stderr = std::io::stderr();
        stderr
            .write_all(b"\x07")
            .and_then(|()| stderr.flush())
            .map_err(|source| AnimationError::FileSystem {
                path: PathBuf::from("<stderr>"),
                operation: "ring bell",
                source,
            })
    }
}

impl Scheduler for BarDisplay {
    fn frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.sync(frame.bars);
        self.ring_bell()?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }

    fn finish(&mut self, bars: &[Bar]) -> Result<()> {
        self.sync(bars);
        for row in &self.rows {
            row.finish();
        }
        Ok(())
    }
}
