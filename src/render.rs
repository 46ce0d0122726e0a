use std::io::{self, Write};

use lib_2048::Grid;

const BORDER_ROW: &[u8] = b"---------------------\n";
const EMPTY_CELL: &[u8] = b"    |";

pub fn draw_board(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    out.write_all(BORDER_ROW)?;

    for row in grid {
        out.write_all(b"|")?;

        for &cell in row {
            if cell == 0 {
                out.write_all(EMPTY_CELL)?;
            } else {
                write!(out, "{cell:>4}|")?;
            }
        }

        out.write_all(b"\n")?;
        out.write_all(BORDER_ROW)?;
    }

    out.flush()
}
