//! Highlight states a bar can display

use std::fmt;

/// Highlight shown on a bar
///
/// A bar moves `Neutral -> Comparing -> (Swapping | Neutral) -> Settled`
/// during a run. Only bubble and insertion sort ever reach `Settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Untouched or released after a comparison
    #[default]
    Neutral,
    /// Currently being compared
    Comparing,
    /// Just moved or rewritten
    Swapping,
    /// In its final position
    Settled,
}

impl Marker {
    /// All markers in display order
    pub const ALL: [Self; 4] = [
        Self::Neutral,
        Self::Comparing,
        Self::Swapping,
        Self::Settled,
    ];

    /// RGBA color used when rendering frames
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Neutral => [0, 200, 220, 255],
            Self::Comparing => [240, 220, 40, 255],
            Self::Swapping => [220, 40, 40, 255],
            Self::Settled => [40, 190, 70, 255],
        }
    }

    /// Terminal color name understood by progress bar templates
    pub const fn terminal_color(self) -> &'static str {
        match self {
            Self::Neutral => "cyan",
            Self::Comparing => "yellow",
            Self::Swapping => "red",
            Self::Settled => "green",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Neutral => "neutral",
            Self::Comparing => "comparing",
            Self::Swapping => "swapping",
            Self::Settled => "settled",
        };
        f.write_str(name)
    }
}
