//! Frame capture and GIF generation for diamond growth

use crate::algorithm::events::{ShuffleEvent, ShuffleObserver};
use crate::io::configuration::{
    BACKGROUND_COLOR, FINAL_FRAME_HOLD, MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{RenderStyle, canvas_side, create_parent_dir, paint_dominoes};
use crate::spatial::domino::Domino;
use crate::spatial::geometry::cell_count;
use crate::spatial::store::DominoStore;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::path::Path;

/// A complete tiling captured at one order
#[derive(Debug, Clone)]
pub struct TilingSnapshot {
    /// Diamond order of the tiling
    pub order: u32,
    /// Every domino of the tiling
    pub dominoes: Vec<Domino>,
}

/// Captures the complete tiling at selected orders for animation
///
/// Implements [`ShuffleObserver`]: the moment a fill completes the diamond,
/// the tiling is copied if its order will be shown. Orders are kept at a
/// fixed stride chosen up front from the frame delay and the final order,
/// so frames the GIF would drop are never copied and the frame count stays
/// bounded. The final order is always kept.
///
/// Frames are rendered one at a time during export, all on a canvas sized
/// for the largest captured order so the diamond grows in place.
pub struct VisualizationCapture {
    snapshots: Vec<TilingSnapshot>,
    style: RenderStyle,
    delay_ms: u32,
    stride: u32,
    final_order: u32,
}

impl VisualizationCapture {
    /// Create an empty capture for a run ending at `final_order`
    ///
    /// Delays below what viewers honour are raised to the viewer minimum and
    /// the stride grows to keep the apparent speed.
    pub fn new(style: RenderStyle, frame_delay_ms: u32, final_order: u32) -> Self {
        let frame_delay_ms = frame_delay_ms.max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        Self {
            snapshots: Vec::new(),
            style,
            delay_ms: frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS),
            stride: skip_factor.max(final_order.div_ceil(MAX_GIF_FRAMES)),
            final_order,
        }
    }

    /// Orders between consecutive captured frames
    pub const fn capture_stride(&self) -> u32 {
        self.stride
    }

    /// Whether a completed tiling of this order becomes a frame
    pub const fn keeps(&self, order: u32) -> bool {
        order >= self.final_order || order.saturating_sub(1) % self.stride == 0
    }

    /// Record the current tiling as a frame
    pub fn record(&mut self, store: &DominoStore, order: u32) {
        self.snapshots.push(TilingSnapshot {
            order,
            dominoes: store.snapshot(),
        });
    }

    /// Returns all recorded snapshots
    pub fn snapshots(&self) -> &[TilingSnapshot] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Export the captured tilings as a GIF
    ///
    /// The last tiling is held longer than the others.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No tilings were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        let Some(largest) = self.snapshots.iter().map(|snapshot| snapshot.order).max() else {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "visualization",
                value: "0 frames".to_string(),
                reason: "No tilings captured for visualization".to_string(),
            });
        };

        create_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let last = self.snapshots.len().saturating_sub(1);
        let frames = self
            .snapshots
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                // The final frame is held longer
                let delay_ms = if index == last {
                    self.delay_ms * FINAL_FRAME_HOLD
                } else {
                    self.delay_ms
                };
                self.render_frame(snapshot, largest, delay_ms)
            });

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn render_frame(&self, snapshot: &TilingSnapshot, canvas_order: u32, delay_ms: u32) -> Frame {
        let side = canvas_side(canvas_order, self.style);
        let mut img = RgbaImage::from_pixel(side, side, Rgba(BACKGROUND_COLOR));
        paint_dominoes(&mut img, &snapshot.dominoes, canvas_order, self.style);

        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

impl ShuffleObserver for VisualizationCapture {
    fn on_event(&mut self, event: &ShuffleEvent, store: &DominoStore, order: u32) {
        if matches!(event, ShuffleEvent::GapFilled { .. })
            && self.keeps(order)
            && 2 * store.len() == cell_count(order)
        {
            self.record(store, order);
        }
    }
}
