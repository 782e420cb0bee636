//! Generation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default diamond order to grow to
pub const DEFAULT_ORDER: u32 = 64;

// Memory grows with the square of the order; this keeps a run under a few GB
/// Largest accepted diamond order
pub const MAX_ORDER: u32 = 2048;

/// Default side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 4;

/// Largest accepted cell size in pixels
pub const MAX_CELL_SIZE: u32 = 64;

/// Largest exported image side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

// Output settings
/// Default output file name
pub const OUTPUT_FILENAME: &str = "aztec_diamond.png";
/// Suffix added to the output stem for the animation
pub const VISUALIZATION_SUFFIX: &str = "_growth";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// The last frame is held this many times longer than the others
pub const FINAL_FRAME_HOLD: u32 = 25;
// Every captured frame holds a full tiling copy until export
/// Most frames one animation captures
pub const MAX_GIF_FRAMES: u32 = 100;

// Domino colours follow facing, matching the classic shuffling pictures
/// Colour of Up-facing dominoes
pub const UP_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Colour of Down-facing dominoes
pub const DOWN_COLOR: [u8; 4] = [255, 165, 0, 255];
/// Colour of Left-facing dominoes
pub const LEFT_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Colour of Right-facing dominoes
pub const RIGHT_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Colour of domino outlines
pub const OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Colour of cells no domino covers
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters of a single generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Diamond order to grow to
    pub order: u32,
    /// Seed of the orientation source
    pub seed: u64,
    /// Side length of one cell in pixels
    pub cell_size: u32,
    /// Whether to draw domino outlines
    pub outline: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            seed: DEFAULT_SEED,
            cell_size: DEFAULT_CELL_SIZE,
            outline: false,
        }
    }
}

impl GenerationConfig {
    /// Check every parameter against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first parameter out of range.
    pub fn validate(&self) -> Result<()> {
        if self.order == 0 {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &"the smallest diamond has order 1",
            ));
        }
        if self.order > MAX_ORDER {
            return Err(invalid_parameter(
                "order",
                &self.order,
                &format!("must not exceed {MAX_ORDER}"),
            ));
        }
        if self.cell_size == 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be between 1 and {MAX_CELL_SIZE}"),
            ));
        }
        if self.image_side() > u64::from(MAX_IMAGE_DIMENSION) {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!(
                    "an order {} diamond would be {} px wide (limit {MAX_IMAGE_DIMENSION})",
                    self.order,
                    self.image_side()
                ),
            ));
        }
        Ok(())
    }

    /// Side length of the exported image in pixels
    pub const fn image_side(&self) -> u64 {
        2 * self.order as u64 * self.cell_size as u64
    }
}
