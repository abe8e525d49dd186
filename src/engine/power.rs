//! Board scans behind the area and line search power-ups.

use crate::engine::board::{index, Grid};
use crate::engine::common::AttackOutcome;
use crate::engine::config::BOARD_SIZE;

/// A cell revealed by a scan. `outcome` is always `Hit` or `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub row: usize,
    pub col: usize,
    pub outcome: AttackOutcome,
}

/// Target of a line search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
}

impl Line {
    /// Build a target from the axis letter (`r` or `c`) and index.
    /// `None` when either part is invalid.
    pub fn parse(axis: char, index: i32) -> Option<Self> {
        let index = usize::try_from(index).ok().filter(|&i| i < BOARD_SIZE)?;
        match axis.to_ascii_lowercase() {
            'r' => Some(Line::Row(index)),
            'c' => Some(Line::Column(index)),
            _ => None,
        }
    }

    fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..BOARD_SIZE).map(move |i| match self {
            Line::Row(r) => (r, i),
            Line::Column(c) => (i, c),
        })
    }
}

fn sweep(
    defender: &mut Grid,
    observed: &mut Grid,
    cells: impl Iterator<Item = (usize, usize)>,
) -> Vec<Probe> {
    cells
        .filter_map(|(row, col)| {
            let outcome = defender.strike(observed, row, col);
            outcome.is_resolved().then_some(Probe { row, col, outcome })
        })
        .collect()
}

/// Shoot the 3x3 block centred on (`row`, `col`), clipped to the board.
/// Cells already attacked and islands are skipped.
pub fn area_search(defender: &mut Grid, observed: &mut Grid, row: i32, col: i32) -> Vec<Probe> {
    let block = (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (row.saturating_add(dr), col.saturating_add(dc))))
        .filter_map(|(r, c)| index(r, c));
    sweep(defender, observed, block)
}

/// Shoot every cell of a row or column. Cells already attacked and islands
/// are skipped.
pub fn line_search(defender: &mut Grid, observed: &mut Grid, line: Line) -> Vec<Probe> {
    sweep(defender, observed, line.cells())
}
