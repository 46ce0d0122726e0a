use log::{debug, trace};

use crate::{
    count_empty_cells, rotate_clockwise, rotate_counter_clockwise, rotate_half, slide_left,
    Difficulty, Direction, Grid, RandomSource, BOARD_SIZE, EMPTY_GRID,
};

const MOVE_FUNCTIONS: [fn(Grid) -> Grid; 4] = [move_up, move_down, move_right, move_left];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

fn move_up(grid: Grid) -> Grid {
    let grid = rotate_counter_clockwise(grid);

    let new_grid = slide_left(grid);

    rotate_clockwise(new_grid)
}

fn move_down(grid: Grid) -> Grid {
    let grid = rotate_clockwise(grid);

    let new_grid = slide_left(grid);

    rotate_counter_clockwise(new_grid)
}

fn move_right(grid: Grid) -> Grid {
    let grid = rotate_half(grid);

    let new_grid = slide_left(grid);

    rotate_half(new_grid)
}

fn move_left(grid: Grid) -> Grid {
    slide_left(grid)
}

/// Slides `grid` toward `direction`, returning the result only if a cell changed.
pub fn try_move(grid: Grid, direction: Direction) -> Option<Grid> {
    let new_grid = MOVE_FUNCTIONS[direction as usize](grid);

    (new_grid != grid).then_some(new_grid)
}

/// Indexed by `Direction as usize`.
pub fn try_all_moves(grid: Grid) -> [Option<Grid>; 4] {
    MOVE_FUNCTIONS
        .map(|move_fn| move_fn(grid))
        .map(|new_grid| (new_grid != grid).then_some(new_grid))
}

pub fn empty_cells(grid: &Grid) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..BOARD_SIZE)
        .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
        .filter(|&(row, col)| grid[row][col] == 0)
}

/// Places a 2 or 4 on a uniformly chosen empty cell. A full grid is returned unchanged.
pub fn spawn_tile(rng: &mut impl RandomSource, grid: Grid, difficulty: Difficulty) -> Grid {
    let slot_count = count_empty_cells(&grid);

    if slot_count == 0 {
        return grid;
    }

    let slot_idx = rng.next_in_range(0, slot_count as u32 - 1) as usize;
    let cell = difficulty.spawn_value(rng.next_in_range(1, 10));

    let mut new_grid = grid;

    if let Some((row, col)) = empty_cells(&grid).nth(slot_idx) {
        debug!("spawned {cell} at ({row}, {col})");
        new_grid[row][col] = cell;
    }

    new_grid
}

/// True when the grid is full and no two orthogonal neighbours are equal.
pub fn is_terminal(grid: &Grid) -> bool {
    for i in 0..BOARD_SIZE {
        for j in 0..BOARD_SIZE {
            if grid[i][j] == 0 {
                return false;
            }

            if j < BOARD_SIZE - 1 && grid[i][j] == grid[i][j + 1] {
                return false;
            }

            if i < BOARD_SIZE - 1 && grid[i][j] == grid[i + 1][j] {
                return false;
            }
        }
    }

    true
}

pub struct Board<R> {
    grid: Grid,
    difficulty: Difficulty,
    win_target: u32,
    rng: R,
}

impl<R> Board<R>
where
    R: RandomSource,
{
    /// Starts a game on an empty grid with two spawned tiles.
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        let mut board = Self::from_grid(EMPTY_GRID, difficulty, rng);

        board.spawn_tile();
        board.spawn_tile();

        board
    }

    /// Wraps an existing grid without spawning anything.
    pub fn from_grid(grid: Grid, difficulty: Difficulty, rng: R) -> Self {
        Self {
            grid,
            difficulty,
            win_target: difficulty.win_target(),
            rng,
        }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn win_target(&self) -> u32 {
        self.win_target
    }

    pub fn empty_count(&self) -> usize {
        count_empty_cells(&self.grid)
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.iter().flatten().copied().max().unwrap_or(0)
    }

    fn spawn_tile(&mut self) {
        self.grid = spawn_tile(&mut self.rng, self.grid, self.difficulty);
    }

    /// Applies one turn. Spawns a tile and returns `true` only if the slide changed the grid.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        match try_move(self.grid, direction) {
            Some(new_grid) => {
                trace!("moved {direction}");
                self.grid = new_grid;
                self.spawn_tile();

                true
            }
            None => {
                trace!("move {direction} left the grid unchanged");

                false
            }
        }
    }

    /// Like [`Board::make_move`], but takes a move code. Unknown codes are no-ops returning `false`.
    pub fn make_move_code(&mut self, code: char) -> bool {
        Direction::from_code(code).map_or(false, |direction| self.make_move(direction))
    }

    pub fn check_win(&self) -> bool {
        self.grid.iter().flatten().any(|&cell| cell == self.win_target)
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(&self.grid)
    }

    pub fn state(&self) -> GameState {
        if self.check_win() {
            GameState::Won
        } else if self.is_terminal() {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }
}
