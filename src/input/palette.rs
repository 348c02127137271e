//! Random color selection for new pills.

use crate::draw::Color;
use crate::draw::color::{WHITE, default_palette};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks a fill color for each new draft from a fixed palette.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    palette: Vec<Color>,
    rng: StdRng,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(default_palette(), None)
    }
}

impl ColorPicker {
    /// Creates a picker over `palette`.
    ///
    /// With a `seed` the sequence of picks is reproducible; otherwise the
    /// generator is seeded from system entropy. An empty palette falls back to
    /// the default one.
    pub fn new(palette: Vec<Color>, seed: Option<u64>) -> Self {
        let palette = if palette.is_empty() {
            log::warn!("Empty pill palette, using the default colors");
            default_palette()
        } else {
            palette
        };
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { palette, rng }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Returns a uniformly random palette entry.
    ///
    /// The palette is never empty, so `WHITE` is only a type-level fallback.
    pub fn pick(&mut self) -> Color {
        self.palette.choose(&mut self.rng).copied().unwrap_or(WHITE)
    }
}
