use battleship_captains::{BoardError, Cell, Grid, Orientation, BOARD_SIZE};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn orientation(i: u8) -> Orientation {
    match i % 3 {
        0 => Orientation::Horizontal,
        1 => Orientation::Vertical,
        _ => Orientation::Diagonal,
    }
}

#[test]
fn test_bounds_are_exclusive() {
    let grid = Grid::new();
    // last occupied index is start + length - 1
    assert!(grid.validate(0, 5, 5, Orientation::Horizontal));
    assert!(!grid.validate(0, 6, 5, Orientation::Horizontal));
    assert!(grid.validate(5, 9, 5, Orientation::Vertical));
    assert!(!grid.validate(6, 9, 5, Orientation::Vertical));
    assert!(grid.validate(5, 5, 5, Orientation::Diagonal));
    assert!(!grid.validate(6, 5, 5, Orientation::Diagonal));
    assert!(!grid.validate(5, 6, 5, Orientation::Diagonal));
}

#[test]
fn test_off_board_origin_rejected() {
    let grid = Grid::new();
    assert!(!grid.validate(-1, 0, 1, Orientation::Horizontal));
    assert!(!grid.validate(0, -1, 3, Orientation::Vertical));
    assert!(!grid.validate(10, 0, 1, Orientation::Horizontal));
    // a horizontal ship still needs an on-board row
    assert_eq!(
        grid.check_placement(10, 0, 2, Orientation::Horizontal),
        Err(BoardError::OutOfBounds)
    );
}

#[test]
fn test_place_writes_ship_cells_along_path() {
    let mut grid = Grid::new();
    grid.place(2, 3, 4, Orientation::Diagonal).unwrap();
    for i in 0..4 {
        assert_eq!(grid.get(2 + i, 3 + i), Some(Cell::Ship));
    }
    assert_eq!(grid.count(Cell::Ship), 4);

    grid.place(9, 0, 3, Orientation::Horizontal).unwrap();
    assert_eq!(grid.get(9, 2), Some(Cell::Ship));
    assert_eq!(grid.count(Cell::Ship), 7);
}

#[test]
fn test_same_path_cannot_be_placed_twice() {
    let mut grid = Grid::new();
    assert!(grid.validate(4, 4, 3, Orientation::Vertical));
    grid.place(4, 4, 3, Orientation::Vertical).unwrap();
    assert!(!grid.validate(4, 4, 3, Orientation::Vertical));
    assert_eq!(
        grid.place(4, 4, 3, Orientation::Vertical),
        Err(BoardError::Occupied)
    );
}

#[test]
fn test_crossing_ships_rejected() {
    let mut grid = Grid::new();
    grid.place(3, 0, 5, Orientation::Horizontal).unwrap();
    assert!(!grid.validate(0, 2, 5, Orientation::Vertical));
    assert!(!grid.validate(0, 0, 4, Orientation::Diagonal));
    assert!(grid.validate(0, 5, 5, Orientation::Vertical));
}

#[test]
fn test_islands_block_placement() {
    let mut rng = SmallRng::seed_from_u64(7);
    let map = Grid::shattered_sea(&mut rng);
    assert!(map.count(Cell::Island) > 0);
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let valid = map.validate(r as i32, c as i32, 1, Orientation::Horizontal);
            assert_eq!(valid, map.get(r, c) == Some(Cell::Water));
        }
    }
}

#[test]
fn test_zero_length_is_valid_and_writes_nothing() {
    let mut grid = Grid::new();
    assert!(grid.validate(3, 3, 0, Orientation::Diagonal));
    grid.place(3, 3, 0, Orientation::Horizontal).unwrap();
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_orientation_letters() {
    assert_eq!(Orientation::from_char('h'), Some(Orientation::Horizontal));
    assert_eq!(Orientation::from_char('V'), Some(Orientation::Vertical));
    assert_eq!(Orientation::from_char('d'), Some(Orientation::Diagonal));
    assert_eq!(Orientation::from_char('x'), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validate_matches_path_rule(
        seed in any::<u64>(),
        row in -2i32..12,
        col in -2i32..12,
        length in 0usize..7,
        o in 0u8..3,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::shattered_sea(&mut rng);
        let _ = grid.place(1, 1, 3, Orientation::Horizontal);
        let _ = grid.place(5, 7, 4, Orientation::Vertical);
        let orientation = orientation(o);
        let before = grid.clone();

        let (dr, dc) = match orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
        };
        let expected = (0..length as i32).all(|i| {
            let (r, c) = (row + i * dr, col + i * dc);
            r >= 0 && c >= 0
                && (r as usize) < BOARD_SIZE
                && (c as usize) < BOARD_SIZE
                && grid.get(r as usize, c as usize) == Some(Cell::Water)
        });

        prop_assert_eq!(grid.validate(row, col, length, orientation), expected);
        prop_assert_eq!(&grid, &before);

        if expected && length > 0 {
            grid.place(row, col, length, orientation).unwrap();
            prop_assert!(!grid.validate(row, col, length, orientation));
            prop_assert_eq!(grid.count(Cell::Ship), before.count(Cell::Ship) + length);
        }
    }
}
