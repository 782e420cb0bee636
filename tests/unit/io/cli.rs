//! Tests for command-line parsing and end-to-end generation

#[cfg(test)]
mod tests {
    use aztectile::io::cli::{Cli, GenerationRunner, init_tracing};
    use aztectile::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_ORDER, DEFAULT_SEED};
    use clap::Parser;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.output, PathBuf::from("aztec_diamond.png"));
        assert_eq!(cli.order, DEFAULT_ORDER);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert!(!cli.visualize && !cli.analysis && !cli.quiet && !cli.verbose);
        assert_eq!(cli.log_level(), "warn");
    }

    // Tests CLI parsing with every argument
    // Verified by swapping the short flags for seed and cell size
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "out/tiling.png",
            "-n",
            "12",
            "-s",
            "99",
            "-c",
            "3",
            "--outline",
            "--visualize",
            "--analysis",
            "--quiet",
            "--no-skip",
            "--verbose",
        ]);

        assert_eq!(cli.output, PathBuf::from("out/tiling.png"));
        let config = cli.generation_config();
        assert_eq!((config.order, config.seed, config.cell_size), (12, 99, 3));
        assert!(config.outline);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), "debug");
    }

    // Tests where the animation lands relative to the image
    // Verified by dropping the parent directory from the path
    #[test]
    fn test_visualization_path() {
        assert_eq!(
            GenerationRunner::get_visualization_path(Path::new("out/diamond.png")),
            PathBuf::from("out/diamond_growth.gif")
        );
        assert_eq!(
            GenerationRunner::get_visualization_path(Path::new("diamond.png")),
            PathBuf::from("diamond_growth.gif")
        );
    }

    // Tests a complete run writing both image and animation
    // Verified by exporting before the final fill
    #[test]
    fn test_process_writes_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tiling.png");
        let cli = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "--order",
            "6",
            "--cell-size",
            "2",
            "--visualize",
            "--quiet",
        ]);

        GenerationRunner::new(cli).process().unwrap();

        let img = image::open(&output).unwrap();
        assert_eq!(img.width(), 24);
        assert!(temp_dir.path().join("tiling_growth.gif").exists());
    }

    // Tests that an existing output is left alone unless --no-skip is given
    // Verified by inverting the skip check
    #[test]
    fn test_process_skips_existing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("existing.png");
        std::fs::write(&output, b"placeholder").unwrap();

        let cli = Cli::parse_from(["program", output.to_str().unwrap(), "-n", "3", "-q"]);
        GenerationRunner::new(cli).process().unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), b"placeholder");

        let forced = Cli::parse_from([
            "program",
            output.to_str().unwrap(),
            "-n",
            "3",
            "-q",
            "--no-skip",
        ]);
        GenerationRunner::new(forced).process().unwrap();
        assert!(image::open(&output).is_ok());
    }

    // Tests that invalid orders and non-PNG outputs fail before writing
    // Verified by validating after generation
    #[test]
    fn test_process_rejects_bad_parameters() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tiling.png");

        let zero = Cli::parse_from(["program", output.to_str().unwrap(), "-n", "0", "-q"]);
        assert!(GenerationRunner::new(zero).process().is_err());

        let gif = temp_dir.path().join("tiling.gif");
        let wrong = Cli::parse_from(["program", gif.to_str().unwrap(), "-q"]);
        assert!(GenerationRunner::new(wrong).process().is_err());
        assert!(!output.exists() && !gif.exists());
    }

    // Tests that a second subscriber install is ignored
    // Verified by calling init() instead of try_init()
    #[test]
    fn test_init_tracing_twice() {
        init_tracing("warn");
        init_tracing("debug");
    }
}
