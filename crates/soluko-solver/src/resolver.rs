//! Per-cell possibility resolution: constraint intersection plus the
//! hidden-single rule.

use soluko_core::DigitSet;
use tinyvec::ArrayVec;

use crate::board::{Board, MAX_DIM, MissingTables};

/// Candidate sets of the cells in one group, in group order.
type CellSets = ArrayVec<[DigitSet; MAX_DIM]>;

/// Computes the refined candidate set for an unknown cell.
///
/// The cell's current candidates are intersected with the missing-value sets
/// of its row, column, and box. A singleton (or emptied) intersection is
/// returned as is. Otherwise each surviving candidate is checked for the
/// hidden-single rule: if it appears in exactly one cell's candidate set
/// within any of the three groups, that cell must be this one, and the
/// candidate is forced.
///
/// The result is always a subset of the prior candidates — resolution never
/// reintroduces a possibility.
pub(crate) fn resolve_cell(board: &Board, tables: &MissingTables, cell: usize) -> DigitSet {
    let geometry = board.geometry();
    let row = geometry.row_of(cell);
    let column = geometry.column_of(cell);
    let box_index = geometry.box_of(cell);

    let base = board.candidates_at(cell)
        & tables.rows[row as usize]
        & tables.columns[column as usize]
        & tables.boxes[box_index as usize];
    if base.len() <= 1 {
        return base;
    }

    let groups: [CellSets; 3] = [
        collect_sets(board, geometry.row_cells(row)),
        collect_sets(board, geometry.column_cells(column)),
        collect_sets(board, geometry.box_cells(box_index)),
    ];
    for digit in base {
        for group in &groups {
            let holders = group.iter().filter(|set| set.contains(digit)).count();
            if holders == 1 {
                return DigitSet::from(digit);
            }
        }
    }
    base
}

fn collect_sets(board: &Board, cells: impl Iterator<Item = usize>) -> CellSets {
    cells.map(|cell| board.candidates_at(cell)).collect()
}

#[cfg(test)]
mod tests {
    use soluko_core::Digit;

    use super::*;
    use crate::{propagate, testing};

    #[test]
    fn test_forced_by_intersection() {
        // Row 0 is missing only 4, so the hole is forced without any
        // hidden-single reasoning.
        let board = testing::board_from_str(
            "
            123.
            ....
            ....
            ....
            ",
        );
        let tables = board.missing_tables();
        let resolved = resolve_cell(&board, &tables, 3);
        assert_eq!(resolved.single(), Some(Digit::new(4)));
    }

    #[test]
    fn test_hidden_single_in_row() {
        // Digit 1 is barred from every row-0 cell except (0, 0): columns 1-2
        // already contain a 1, and so do boxes 1 and 2. Cell (0, 0) keeps a
        // wide candidate set, but it is the only row-0 cell still holding 1.
        let mut board = testing::board_from_str(
            "
            _________
            ___1_____
            ______1__
            _________
            _1_______
            __1______
            _________
            _________
            _________
            ",
        );
        propagate::pass(&mut board);

        let tables = board.missing_tables();
        assert_eq!(board.candidates_at(0).len(), 9);
        let resolved = resolve_cell(&board, &tables, 0);
        assert_eq!(resolved.single(), Some(Digit::new(1)));
    }

    #[test]
    fn test_never_expands_candidates() {
        let mut board = testing::board_from_str(testing::EASY);
        propagate::pass(&mut board);

        let tables = board.missing_tables();
        for cell in 0..board.geometry().cell_count() {
            if board.value(cell).is_some() {
                continue;
            }
            let before = board.candidates_at(cell);
            let after = resolve_cell(&board, &tables, cell);
            assert_eq!(after.difference(before), soluko_core::DigitSet::EMPTY);
        }
    }
}
