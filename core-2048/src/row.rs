use crate::{Grid, Row, BOARD_SIZE};

/// Compacts a row toward index 0, merging equal neighbours.
///
/// Each emitted tile absorbs at most one following tile, so `[2, 2, 2, 0]`
/// becomes `[4, 2, 0, 0]` rather than `[8, 0, 0, 0]`.
pub fn slide_row_left(row: Row) -> Row {
    let mut new_row = [0; BOARD_SIZE];
    let mut len = 0;
    let mut can_merge = false;

    for cell in row.into_iter().filter(|&cell| cell != 0) {
        if can_merge && new_row[len - 1] == cell {
            new_row[len - 1] *= 2;
            can_merge = false;
        } else {
            new_row[len] = cell;
            len += 1;
            can_merge = true;
        }
    }

    new_row
}

pub fn slide_left(grid: Grid) -> Grid {
    grid.map(slide_row_left)
}
