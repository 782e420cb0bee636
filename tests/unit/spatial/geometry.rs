//! Tests for diamond membership, enumeration and growth rings

#[cfg(test)]
mod tests {
    use aztectile::spatial::geometry::{
        Cell, cell_count, diamond_cells, fold, grow_ring, in_diamond, row_span,
    };
    use std::collections::HashSet;

    // Tests that the two cells either side of an axis fold to the same distance
    // Verified by folding negatives to their plain absolute value
    #[test]
    fn test_fold_is_symmetric_about_axis() {
        assert_eq!(fold(0), 0);
        assert_eq!(fold(-1), 0);
        assert_eq!(fold(3), 3);
        assert_eq!(fold(-4), 3);
    }

    // Tests that the order 1 diamond is exactly the four seed cells
    // Verified by using <= instead of < in the membership test
    #[test]
    fn test_order_one_is_seed_block() {
        let cells: HashSet<Cell> = diamond_cells(1).collect();
        let expected: HashSet<Cell> = [(-1, -1), (0, -1), (-1, 0), (0, 0)]
            .into_iter()
            .map(Cell::from)
            .collect();

        assert_eq!(cells, expected);
        assert!(!in_diamond(1, Cell::new(1, 0)));
        assert!(!in_diamond(1, Cell::new(-1, -2)));
    }

    // Tests that enumeration agrees with the closed-form cell count
    // Verified by dropping the last column from each row span
    #[test]
    fn test_cell_count_matches_enumeration() {
        for order in 0..12 {
            assert_eq!(diamond_cells(order).count(), cell_count(order));
        }
        assert_eq!(cell_count(3), 24);
    }

    // Tests row-major ordering of enumerated cells
    // Verified by swapping the row and column loops
    #[test]
    fn test_diamond_cells_row_major() {
        let cells: Vec<Cell> = diamond_cells(4).collect();
        let mut sorted = cells.clone();
        sorted.sort_by_key(|cell| (cell.y, cell.x));

        assert_eq!(cells, sorted);
        assert_eq!(cells.first(), Some(&Cell::new(-1, -4)));
        assert!(cells.iter().all(|&cell| in_diamond(4, cell)));
    }

    // Tests row spans at the tips, the equator, and beyond the diamond
    // Verified by returning a reversed range for rows outside the diamond
    #[test]
    fn test_row_span_shapes() {
        assert_eq!(row_span(3, -3), -1..1);
        assert_eq!(row_span(3, -1), -3..3);
        assert_eq!(row_span(3, 0), -3..3);
        assert_eq!(row_span(3, 2), -1..1);
        assert!(row_span(3, 3).is_empty());
        assert!(row_span(3, -4).is_empty());
    }

    // Tests that the growth ring is exactly the cells added by one order
    // Verified by generating only two of the four mirror images
    #[test]
    fn test_grow_ring_is_set_difference() {
        for order in 1..10 {
            let ring: HashSet<Cell> = grow_ring(order).into_iter().collect();
            let inner: HashSet<Cell> = diamond_cells(order - 1).collect();
            let outer: HashSet<Cell> = diamond_cells(order).collect();
            let added: HashSet<Cell> = outer.difference(&inner).copied().collect();

            assert_eq!(ring.len(), 4 * order as usize);
            assert_eq!(ring, added);
        }
    }

    // Tests offsetting and display formatting of cells
    // Verified by swapping the offset deltas
    #[test]
    fn test_cell_offset_and_display() {
        let cell = Cell::new(2, -3).offset(-1, 4);

        assert_eq!(cell, Cell::new(1, 1));
        assert_eq!(Cell::new(-2, 5).to_string(), "(-2, 5)");
    }
}
