//! Frame capture and GIF generation for run visualization

use crate::algorithm::stepper::{Frame as StepFrame, Scheduler};
use crate::io::configuration::{
    FINAL_FRAME_HOLD, GIF_BACKGROUND, GIF_BAR_GAP, GIF_BAR_WIDTH, GIF_MAX_CHART_HEIGHT,
    GIF_MAX_FRAMES, GIF_PADDING, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{AnimationError, Result, invalid_parameter};
use crate::model::{Bar, Marker};
use image::{Frame, Rgba, RgbaImage};
use std::io::BufWriter;
use std::path::Path;

/// Bar state kept for one captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSnapshot {
    /// Displayed height before scaling to the image
    pub magnitude: u32,
    /// Highlight at capture time
    pub marker: Marker,
}

impl From<&Bar> for BarSnapshot {
    fn from(bar: &Bar) -> Self {
        Self {
            magnitude: bar.magnitude,
            marker: bar.marker,
        }
    }
}

/// Captures chart states for visualization
///
/// Acts as a scheduler that never pauses: every animated step becomes one
/// snapshot, and the state passed to `finish` becomes the held final frame.
#[derive(Debug, Clone, Default)]
pub struct VisualizationCapture {
    snapshots: Vec<Vec<BarSnapshot>>,
    final_snapshot: Option<Vec<BarSnapshot>>,
}

impl VisualizationCapture {
    /// Create an empty capture
    pub const fn new() -> Self {
        Self {
            snapshots: Vec::new(),
            final_snapshot: None,
        }
    }

    /// Record the current chart as one frame
    pub fn record(&mut self, bars: &[Bar]) {
        self.snapshots.push(bars.iter().map(BarSnapshot::from).collect());
    }

    /// Returns all captured step frames
    pub fn snapshots(&self) -> &[Vec<BarSnapshot>] {
        &self.snapshots
    }

    /// Returns the number of captured step frames
    pub const fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the run reported its final state
    pub const fn is_finished(&self) -> bool {
        self.final_snapshot.is_some()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Frame delays below what viewers support are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`, keeping every n-th frame so the
    /// animation runs at its intended speed. Runs longer than
    /// `GIF_MAX_FRAMES` are thinned the same way. Frames are rendered one
    /// at a time while encoding, and the final state is held for
    /// `FINAL_FRAME_HOLD` frame delays.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nothing was captured
    /// - The frame delay is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let Some(final_state) = self.final_snapshot.as_ref().or(self.snapshots.last()) else {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no frames captured for visualization",
            ));
        };
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_skip = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };
        let skip_factor = viewer_skip.max(self.snapshots.len().div_ceil(GIF_MAX_FRAMES));

        let geometry = Geometry::fit(self.snapshots.iter().chain(Some(final_state)));
        let hold_ms = effective_delay_ms.saturating_mul(FINAL_FRAME_HOLD);
        let frames = self
            .snapshots
            .iter()
            .step_by(skip_factor)
            .map(|snapshot| geometry.render(snapshot, effective_delay_ms))
            .chain(std::iter::once_with(|| geometry.render(final_state, hold_ms)));

        tracing::debug!(
            captured = self.snapshots.len(),
            skip_factor,
            "encoding animation"
        );

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AnimationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AnimationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(frames))
            .map_err(|e| AnimationError::GifExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(path = %output_path.display(), "animation exported");
        Ok(())
    }
}

impl Scheduler for VisualizationCapture {
    fn frame(&mut self, frame: &StepFrame<'_>) -> Result<()> {
        self.record(frame.bars);
        Ok(())
    }

    fn finish(&mut self, bars: &[Bar]) -> Result<()> {
        self.final_snapshot = Some(bars.iter().map(BarSnapshot::from).collect());
        Ok(())
    }
}

// Pixel layout shared by every frame of one export
struct Geometry {
    bar_count: u32,
    chart_height: u32,
    max_magnitude: u32,
}

impl Geometry {
    fn fit<'a>(snapshots: impl Iterator<Item = &'a Vec<BarSnapshot>>) -> Self {
        let mut bar_count = 0;
        let mut max_magnitude = 0;
        for snapshot in snapshots {
            bar_count = bar_count.max(snapshot.len() as u32);
            for bar in snapshot {
                max_magnitude = max_magnitude.max(bar.magnitude);
            }
        }
        Self {
            bar_count,
            chart_height: max_magnitude.clamp(1, GIF_MAX_CHART_HEIGHT),
            max_magnitude: max_magnitude.max(1),
        }
    }

    const fn width(&self) -> u32 {
        let bars = self.bar_count * GIF_BAR_WIDTH + self.bar_count.saturating_sub(1) * GIF_BAR_GAP;
        bars + 2 * GIF_PADDING
    }

    const fn height(&self) -> u32 {
        self.chart_height + 2 * GIF_PADDING
    }

    fn scaled(&self, magnitude: u32) -> u32 {
        let scaled = u64::from(magnitude) * u64::from(self.chart_height)
            / u64::from(self.max_magnitude);
        scaled.min(u64::from(self.chart_height)) as u32
    }

    fn render(&self, snapshot: &[BarSnapshot], delay_ms: u32) -> Frame {
        let mut img = RgbaImage::from_pixel(self.width(), self.height(), Rgba(GIF_BACKGROUND));
        let baseline = GIF_PADDING + self.chart_height;

        for (index, bar) in snapshot.iter().enumerate() {
            let left = GIF_PADDING + index as u32 * (GIF_BAR_WIDTH + GIF_BAR_GAP);
            let top = baseline - self.scaled(bar.magnitude);
            let color = Rgba(bar.marker.rgba());
            for x in left..left + GIF_BAR_WIDTH {
                for y in top..baseline {
                    if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                        *pixel = color;
                    }
                }
            }
        }

        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
