//! Tests for generation parameter validation

#[cfg(test)]
mod tests {
    use aztectile::AlgorithmError;
    use aztectile::io::configuration::{
        DEFAULT_CELL_SIZE, DEFAULT_ORDER, GenerationConfig, MAX_CELL_SIZE, MAX_IMAGE_DIMENSION,
        MAX_ORDER,
    };

    // Tests that the defaults form a valid configuration
    // Verified by setting the default cell size to zero
    #[test]
    fn test_default_is_valid() {
        let config = GenerationConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.order, DEFAULT_ORDER);
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert!(config.image_side() <= u64::from(MAX_IMAGE_DIMENSION));
    }

    // Tests that zero and oversize orders are rejected
    // Verified by removing the zero-order check
    #[test]
    fn test_order_bounds() {
        let zero = GenerationConfig {
            order: 0,
            ..GenerationConfig::default()
        };
        let huge = GenerationConfig {
            order: MAX_ORDER + 1,
            cell_size: 1,
            ..GenerationConfig::default()
        };

        assert!(matches!(
            zero.validate(),
            Err(AlgorithmError::InvalidParameter {
                parameter: "order",
                ..
            })
        ));
        assert!(huge.validate().is_err());
    }

    // Tests cell size bounds and the resulting image limit
    // Verified by computing the image side from the order alone
    #[test]
    fn test_cell_size_and_image_limit() {
        let zero = GenerationConfig {
            cell_size: 0,
            ..GenerationConfig::default()
        };
        let fat = GenerationConfig {
            cell_size: MAX_CELL_SIZE + 1,
            ..GenerationConfig::default()
        };
        let wide = GenerationConfig {
            order: MAX_ORDER,
            cell_size: MAX_CELL_SIZE,
            ..GenerationConfig::default()
        };

        assert!(zero.validate().is_err());
        assert!(fat.validate().is_err());
        assert_eq!(
            wide.image_side(),
            2 * u64::from(MAX_ORDER) * u64::from(MAX_CELL_SIZE)
        );
        assert!(matches!(
            wide.validate(),
            Err(AlgorithmError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));
    }
}
