pub mod row;

pub use row::{slide_left, slide_row_left};

pub const BOARD_SIZE: usize = 4;

pub type Row = [u32; BOARD_SIZE];
pub type Grid = [Row; BOARD_SIZE];

pub const EMPTY_GRID: Grid = [[0; BOARD_SIZE]; BOARD_SIZE];

pub const fn rotate_clockwise(grid: Grid) -> Grid {
    let mut rotated = EMPTY_GRID;

    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            rotated[j][BOARD_SIZE - 1 - i] = grid[i][j];
            j += 1;
        }
        i += 1;
    }

    rotated
}

pub const fn rotate_counter_clockwise(grid: Grid) -> Grid {
    let mut rotated = EMPTY_GRID;

    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            rotated[BOARD_SIZE - 1 - j][i] = grid[i][j];
            j += 1;
        }
        i += 1;
    }

    rotated
}

pub const fn rotate_half(grid: Grid) -> Grid {
    rotate_clockwise(rotate_clockwise(grid))
}

pub fn count_empty_cells(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&cell| cell == 0).count()
}
