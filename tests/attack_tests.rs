use battleship_captains::{
    resolve_attack, AttackOutcome, Captain, Cell, Grid, Orientation, Player, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn defender() -> Grid {
    let mut grid = Grid::new();
    grid.place(2, 2, 3, Orientation::Horizontal).unwrap();
    grid
}

#[test]
fn test_hit_marks_both_grids() {
    let mut target = defender();
    let mut observed = Grid::new();
    assert_eq!(resolve_attack(&mut target, &mut observed, 2, 3), AttackOutcome::Hit);
    assert_eq!(target.get(2, 3), Some(Cell::Hit));
    assert_eq!(observed.get(2, 3), Some(Cell::Hit));
}

#[test]
fn test_miss_marks_both_grids() {
    let mut target = defender();
    let mut observed = Grid::new();
    assert_eq!(resolve_attack(&mut target, &mut observed, 7, 7), AttackOutcome::Miss);
    assert_eq!(target.get(7, 7), Some(Cell::Miss));
    assert_eq!(observed.get(7, 7), Some(Cell::Miss));
}

#[test]
fn test_repeat_attack_changes_nothing() {
    let mut target = defender();
    let mut observed = Grid::new();
    resolve_attack(&mut target, &mut observed, 2, 2);
    resolve_attack(&mut target, &mut observed, 0, 0);
    let (t, o) = (target.clone(), observed.clone());

    for _ in 0..3 {
        assert_eq!(
            resolve_attack(&mut target, &mut observed, 2, 2),
            AttackOutcome::AlreadyAttacked
        );
        assert_eq!(
            resolve_attack(&mut target, &mut observed, 0, 0),
            AttackOutcome::AlreadyAttacked
        );
    }
    assert_eq!(target, t);
    assert_eq!(observed, o);
}

#[test]
fn test_island_reports_already_attacked() {
    let mut rng = SmallRng::seed_from_u64(3);
    let map = Grid::shattered_sea(&mut rng);
    let mut target = map.clone();
    let mut observed = Grid::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if map.get(r, c) == Some(Cell::Island) {
                let outcome = resolve_attack(&mut target, &mut observed, r as i32, c as i32);
                assert_eq!(outcome, AttackOutcome::AlreadyAttacked);
            }
        }
    }
    assert_eq!(target.count(Cell::Island), map.count(Cell::Island));
    assert_eq!(observed, Grid::new());
}

#[test]
fn test_out_of_bounds_is_untouched() {
    let mut target = defender();
    let mut observed = Grid::new();
    let before = target.clone();
    for (r, c) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i32::MAX, i32::MIN)] {
        assert_eq!(
            resolve_attack(&mut target, &mut observed, r, c),
            AttackOutcome::OutOfBounds
        );
    }
    assert_eq!(target, before);
    assert_eq!(observed, Grid::new());
}

#[test]
fn test_sinking_every_ship_cell() {
    let mut attacker = Player::new(Captain::Jenkins, &Grid::new());
    let mut victim = Player::new(Captain::Jenkins, &Grid::new());
    let fleet = victim.fleet();
    for (row, &length) in fleet.iter().enumerate() {
        victim
            .board_mut()
            .place(row as i32, 0, length, Orientation::Horizontal)
            .unwrap();
    }
    assert_eq!(victim.board().count(Cell::Ship), 15);
    assert!(!victim.all_ships_sunk());

    for row in 0..5 {
        for col in 0..=row {
            assert_eq!(attacker.attack(&mut victim, row, col), AttackOutcome::Hit);
        }
    }
    assert!(victim.all_ships_sunk());
    assert_eq!(attacker.observed().count(Cell::Hit), 15);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn attack_is_idempotent(seed in any::<u64>(), row in 0i32..10, col in 0i32..10) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut target = Grid::shattered_sea(&mut rng);
        let _ = target.place(row, 0, 4, Orientation::Horizontal);
        let mut observed = Grid::new();
        let cell = target.get(row as usize, col as usize).unwrap();

        let first = resolve_attack(&mut target, &mut observed, row, col);
        let expected = match cell {
            Cell::Ship => AttackOutcome::Hit,
            Cell::Water => AttackOutcome::Miss,
            _ => AttackOutcome::AlreadyAttacked,
        };
        prop_assert_eq!(first, expected);

        let (t, o) = (target.clone(), observed.clone());
        for _ in 0..3 {
            prop_assert_eq!(
                resolve_attack(&mut target, &mut observed, row, col),
                AttackOutcome::AlreadyAttacked
            );
        }
        prop_assert_eq!(&target, &t);
        prop_assert_eq!(&observed, &o);
    }
}
