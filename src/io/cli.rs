//! Command-line interface for generating random Aztec diamond tilings

use crate::algorithm::engine::ShuffleEngine;
use crate::algorithm::events::{NullObserver, ShuffleObserver};
use crate::analysis::statistics::{FairnessReport, TilingStatistics};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_ORDER, DEFAULT_SEED, GIF_FRAME_DELAY_MS, GenerationConfig,
    OUTPUT_FILENAME, VISUALIZATION_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{RenderStyle, export_tiling_as_png};
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "aztectile")]
#[command(
    author,
    version,
    about = "Generate uniformly random Aztec diamond tilings by domino shuffling"
)]
/// Command-line arguments for the tiling generator
// Each optional output and display mode is its own flag
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT", default_value = OUTPUT_FILENAME)]
    pub output: PathBuf,

    /// Diamond order to grow to
    #[arg(short = 'n', long, default_value_t = DEFAULT_ORDER)]
    pub order: u32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Side length of one cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Draw a one pixel outline around each domino
    #[arg(long)]
    pub outline: bool,

    /// Also write an animated GIF of the diamond at every order
    #[arg(short, long)]
    pub visualize: bool,

    /// Print tiling statistics when done
    #[arg(short, long)]
    pub analysis: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate even if the output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Log every shuffle phase to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters gathered from the arguments
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            order: self.order,
            seed: self.seed,
            cell_size: self.cell_size,
            outline: self.outline,
        }
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over the given default directive. Installing
/// twice is harmless; the first subscriber stays.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one generation according to the command-line arguments
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Grow the tiling and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, generation or export fails
    // Allow print for the skip notice and the requested statistics
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let config = self.cli.generation_config();
        config.validate()?;
        Self::validate_output(&self.cli.output)?;

        if self.cli.skip_existing() && self.cli.output.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", self.cli.output.display());
            }
            return Ok(());
        }

        let start_time = Instant::now();
        let style = RenderStyle {
            cell_size: config.cell_size,
            outline: config.outline,
        };
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(config.order)
        } else {
            ProgressManager::hidden(config.order)
        };

        info!(order = config.order, seed = config.seed, "generating tiling");
        let mut engine = ShuffleEngine::new(config.seed);
        let mut capture = VisualizationCapture::new(style, GIF_FRAME_DELAY_MS, config.order);
        let mut ignore = NullObserver;
        let observer: &mut dyn ShuffleObserver = if self.cli.visualize {
            &mut capture
        } else {
            &mut ignore
        };

        while engine.order() < config.order {
            engine.expand(observer)?;
            progress.update_order(engine.order(), engine.store().len());
        }
        engine.fill_gaps(observer)?;
        progress.finish(start_time.elapsed());

        export_tiling_as_png(engine.dominoes(), engine.order(), style, &self.cli.output)?;
        debug!(path = %self.cli.output.display(), "wrote tiling");

        if self.cli.visualize {
            let viz_path = Self::get_visualization_path(&self.cli.output);
            capture.export_gif(&viz_path)?;
            debug!(
                path = %viz_path.display(),
                frames = capture.frame_count(),
                stride = capture.capture_stride(),
                "wrote animation"
            );
        }

        if self.cli.analysis {
            let statistics = TilingStatistics::from_store(engine.store(), engine.order());
            let fairness = FairnessReport::from_stats(engine.stats());
            println!("{statistics}");
            println!("{fairness}");
        }

        Ok(())
    }

    fn validate_output(output: &Path) -> Result<()> {
        if output.extension().and_then(|s| s.to_str()) == Some("png") {
            Ok(())
        } else {
            Err(invalid_parameter(
                "output",
                &output.display(),
                &"Output file must be a PNG image",
            ))
        }
    }

    /// Path of the animation written next to the output image
    pub fn get_visualization_path(output: &Path) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let viz_name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = output.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}
