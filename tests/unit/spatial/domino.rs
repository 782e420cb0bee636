//! Tests for domino shapes, facings and fill orientations

#[cfg(test)]
mod tests {
    use aztectile::spatial::domino::{Domino, DominoId, Facing, Orientation};
    use aztectile::spatial::geometry::Cell;

    // Tests that opposite facings pair up and deltas cancel
    // Verified by mapping Left to Up in opposite()
    #[test]
    fn test_opposite_facings_cancel() {
        for facing in [Facing::Up, Facing::Down, Facing::Left, Facing::Right] {
            let (dx, dy) = facing.delta();
            let (ox, oy) = facing.opposite().delta();

            assert_eq!(facing.opposite().opposite(), facing);
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(facing.is_horizontal(), facing.opposite().is_horizontal());
        }
    }

    // Tests that Up and Down dominoes lie flat and Left and Right stand tall
    // Verified by inverting is_horizontal
    #[test]
    fn test_footprint_shape_follows_facing() {
        let anchor = Cell::new(2, 3);

        assert_eq!(
            Domino::footprint(anchor, Facing::Up),
            [Cell::new(2, 3), Cell::new(3, 3)]
        );
        assert_eq!(
            Domino::footprint(anchor, Facing::Down),
            [Cell::new(2, 3), Cell::new(3, 3)]
        );
        assert_eq!(
            Domino::footprint(anchor, Facing::Left),
            [Cell::new(2, 3), Cell::new(2, 4)]
        );
        assert_eq!(
            Domino::footprint(anchor, Facing::Right),
            [Cell::new(2, 3), Cell::new(2, 4)]
        );
    }

    // Tests that an Up domino at the origin advances to (0, -1)
    // Verified by using the opposite delta when advancing
    #[test]
    fn test_advance_moves_across_long_side() {
        let up = Domino::new(DominoId::new(0), Cell::new(0, 0), Facing::Up);
        let right = Domino::new(DominoId::new(1), Cell::new(-1, 0), Facing::Right);

        assert_eq!(up.advanced().anchor, Cell::new(0, -1));
        assert_eq!(up.advanced().id, up.id);
        assert_eq!(right.advanced().anchor, Cell::new(0, 0));
        assert_eq!(right.facing_neighbour(), Cell::new(0, 0));
    }

    // Tests that a domino's cells follow its anchor and facing
    // Verified by returning the anchor twice from cells()
    #[test]
    fn test_cells_cover_both_halves() {
        let domino = Domino::new(DominoId::new(7), Cell::new(-1, -1), Facing::Left);

        assert_eq!(domino.cells(), [Cell::new(-1, -1), Cell::new(-1, 0)]);
        assert!(!domino.cells().contains(&Cell::new(0, -1)));
    }

    // Tests that each orientation tiles a 2x2 block with a facing pair
    // Verified by giving both vertical placements the same offset
    #[test]
    fn test_orientation_placements_tile_block() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let origin = Cell::new(0, 0);
            let mut cells: Vec<Cell> = orientation
                .placements()
                .into_iter()
                .flat_map(|((dx, dy), facing)| Domino::footprint(origin.offset(dx, dy), facing))
                .collect();
            cells.sort();

            assert_eq!(
                cells,
                vec![
                    Cell::new(0, 0),
                    Cell::new(0, 1),
                    Cell::new(1, 0),
                    Cell::new(1, 1)
                ]
            );
        }

        let [(_, first), (_, second)] = Orientation::Horizontal.placements();
        assert_eq!((first, second), (Facing::Left, Facing::Right));
        let [(_, first), (_, second)] = Orientation::Vertical.placements();
        assert_eq!((first, second), (Facing::Up, Facing::Down));
    }

    // Tests the names used in log and error messages
    // Verified by capitalising the facing names
    #[test]
    fn test_display_names() {
        assert_eq!(Facing::Down.to_string(), "down");
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
        assert_eq!(DominoId::new(12).to_string(), "#12");
    }
}
