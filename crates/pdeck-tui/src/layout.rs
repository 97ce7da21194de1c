//! Screen layout for the panel grid
//!
//! The header and footer have fixed heights; the grid takes the rest and is
//! split into near-square rows and columns based on the panel count.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + remote listing row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Single row of key hints
pub const FOOTER_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

/// Split the terminal into header, grid and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        grid: chunks[1],
        footer: chunks[2],
    }
}

/// Columns and rows used for `count` panels
pub fn grid_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut cols = 1;
    while cols * cols < count {
        cols += 1;
    }
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// One cell per panel, in panel order (row-major)
///
/// A short last row keeps the same column widths so cards line up.
pub fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    let (cols, rows) = grid_shape(count);
    if cols == 0 {
        return Vec::new();
    }

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);

    let mut cells = Vec::with_capacity(count);
    for row in row_areas.iter() {
        let col_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols]).split(*row);
        for cell in col_areas.iter() {
            if cells.len() == count {
                break;
            }
            cells.push(*cell);
        }
    }
    cells
}
