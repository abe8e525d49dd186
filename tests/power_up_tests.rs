use battleship_captains::{
    area_search, AttackOutcome, Captain, Cell, Grid, Orientation, Player, PowerUp, PowerUpError,
    BOARD_SIZE,
};

fn pair(captain: Captain) -> (Player, Player) {
    (
        Player::new(captain, &Grid::new()),
        Player::new(Captain::Jenkins, &Grid::new()),
    )
}

#[test]
fn test_area_search_in_corner_touches_four_cells() {
    let mut target = Grid::new();
    target.place(0, 1, 1, Orientation::Horizontal).unwrap();
    let mut observed = Grid::new();

    let probes = area_search(&mut target, &mut observed, 0, 0);
    assert_eq!(probes.len(), 4);
    let hits: Vec<_> = probes
        .iter()
        .filter(|p| p.outcome == AttackOutcome::Hit)
        .map(|p| (p.row, p.col))
        .collect();
    assert_eq!(hits, vec![(0, 1)]);
    assert_eq!(target.count(Cell::Miss), 3);
    assert_eq!(observed.count(Cell::Miss), 3);
    assert_eq!(observed.count(Cell::Hit), 1);
}

#[test]
fn test_area_search_centre_covers_nine_cells() {
    let mut target = Grid::new();
    let mut observed = Grid::new();
    let probes = area_search(&mut target, &mut observed, 5, 5);
    assert_eq!(probes.len(), 9);
    for r in 4..=6 {
        for c in 4..=6 {
            assert_eq!(target.get(r, c), Some(Cell::Miss));
        }
    }
}

#[test]
fn test_area_search_skips_resolved_cells_and_islands() {
    let (mut jenkins, mut victim) = pair(Captain::Jenkins);
    victim.board_mut().place(4, 4, 3, Orientation::Vertical).unwrap();
    jenkins.attack(&mut victim, 4, 4);
    jenkins.attack(&mut victim, 3, 3);

    jenkins.power_up_mut().begin().unwrap();
    let probes = jenkins.area_search(&mut victim, 4, 4);
    assert_eq!(probes.len(), 7);
    assert_eq!(victim.board().get(5, 4), Some(Cell::Hit));
    assert_eq!(victim.board().get(6, 4), Some(Cell::Ship));
}

#[test]
fn test_area_search_off_board_centre_scans_nothing_and_consumes_use() {
    let (mut jenkins, mut victim) = pair(Captain::Jenkins);
    jenkins.power_up_mut().begin().unwrap();
    assert!(jenkins.area_search(&mut victim, -5, 20).is_empty());
    assert_eq!(jenkins.power_up().remaining(), 0);
    // no refund for area search
    jenkins.power_up_mut().refund();
    assert_eq!(
        jenkins.power_up_mut().begin(),
        Err(PowerUpError::Exhausted)
    );
}

#[test]
fn test_line_search_out_of_range_index_refunds() {
    let (mut ironsides, mut victim) = pair(Captain::Ironsides);
    let before = victim.clone();

    ironsides.power_up_mut().begin().unwrap();
    assert_eq!(
        ironsides.line_search(&mut victim, 'r', BOARD_SIZE as i32),
        Err(PowerUpError::InvalidTarget)
    );
    assert_eq!(*ironsides.power_up(), PowerUp::LineSearch { used: false });
    assert_eq!(victim, before);

    ironsides.power_up_mut().begin().unwrap();
    assert_eq!(
        ironsides.line_search(&mut victim, 'x', 3),
        Err(PowerUpError::InvalidTarget)
    );
    assert!(ironsides.power_up().is_available());
}

#[test]
fn test_line_search_scans_row_and_column() {
    let (mut ironsides, mut victim) = pair(Captain::Ironsides);
    victim.board_mut().place(2, 0, 5, Orientation::Horizontal).unwrap();
    ironsides.attack(&mut victim, 2, 9);

    ironsides.power_up_mut().begin().unwrap();
    let probes = ironsides.line_search(&mut victim, 'r', 2).unwrap();
    assert_eq!(probes.len(), 9);
    assert_eq!(
        probes.iter().filter(|p| p.outcome == AttackOutcome::Hit).count(),
        5
    );
    assert!(victim.all_ships_sunk());
    assert_eq!(
        ironsides.power_up_mut().begin(),
        Err(PowerUpError::Exhausted)
    );

    let (mut other, mut target) = pair(Captain::Ironsides);
    other.power_up_mut().begin().unwrap();
    let probes = other.line_search(&mut target, 'C', 7).unwrap();
    assert!(probes.iter().all(|p| p.col == 7));
    assert_eq!(target.board().count(Cell::Miss), BOARD_SIZE);
}

#[test]
fn test_triple_attack_gate_allows_three_uses() {
    let mut power = PowerUp::for_captain(Captain::Steven);
    for used in 0..3 {
        assert_eq!(power.remaining(), 3 - used);
        power.begin().unwrap();
        // begin alone does not count
        assert_eq!(power.remaining(), 3 - used);
        power.complete();
    }
    assert_eq!(power, PowerUp::TripleAttack { uses: 3 });
    assert_eq!(power.begin(), Err(PowerUpError::Exhausted));
    power.complete();
    assert_eq!(power.remaining(), 0);
}

#[test]
fn test_single_use_gates() {
    for captain in [Captain::Jenkins, Captain::Ironsides] {
        let mut power = PowerUp::for_captain(captain);
        assert!(power.is_available());
        power.begin().unwrap();
        assert!(!power.is_available());
        assert_eq!(power.begin(), Err(PowerUpError::Exhausted));
    }
}

#[test]
fn test_new_captain_gets_fresh_power_up() {
    let (mut jenkins, _) = pair(Captain::Jenkins);
    jenkins.power_up_mut().begin().unwrap();
    let replacement = Player::new(Captain::Jenkins, &Grid::new());
    assert!(replacement.power_up().is_available());
}
