//! Column widths, row heights and cell rectangles for simple grid tables.
//!
//! Tables here have no spans: cells fill the grid row-major and a row is as
//! tall as its tallest cell.

use tabula_types::{Edges, Point, Rect};

/// Padding renderers apply to cells that leave it unset.
pub const DEFAULT_CELL_PADDING: f32 = 2.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Splits `table_width` proportionally to `weights`.
///
/// Non-positive or non-finite weights count as zero. If nothing is left, the
/// width is split evenly.
pub fn distribute_widths(weights: &[f32], table_width: f32) -> Vec<f32> {
    if weights.is_empty() {
        return Vec::new();
    }
    let clean: Vec<f32> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
        .collect();
    let total: f32 = clean.iter().sum();
    if total <= 0.0 {
        let even = table_width / weights.len() as f32;
        return vec![even; weights.len()];
    }
    clean.iter().map(|w| table_width * w / total).collect()
}

/// Height of a text cell: one line per `\n`-separated line plus vertical padding.
pub fn text_cell_height(text: &str, font_size: f32, padding: Edges) -> f32 {
    let lines = text.lines().count().max(1) as f32;
    lines * font_size * LINE_HEIGHT_FACTOR + padding.vertical()
}

/// The solved geometry of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub column_widths: Vec<f32>,
    pub row_heights: Vec<f32>,
    /// Cell rectangles in the same row-major order as the input cells.
    pub cells: Vec<Rect>,
    pub bounds: Rect,
}

impl GridLayout {
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Rect> {
        self.cells.get(row * self.column_widths.len() + column).copied()
    }
}

/// Lays cells out downwards from `top_left`.
///
/// `cell_heights` holds the height each cell needs, row-major. A trailing
/// partial row still gets a full row of height.
pub fn solve_grid(top_left: Point, column_widths: &[f32], cell_heights: &[f32]) -> GridLayout {
    let columns = column_widths.len();
    let table_width: f32 = column_widths.iter().sum();
    if columns == 0 {
        return GridLayout {
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            cells: Vec::new(),
            bounds: Rect::new(top_left.x, top_left.y, 0.0, 0.0),
        };
    }

    let row_heights: Vec<f32> = cell_heights
        .chunks(columns)
        .map(|row| row.iter().copied().fold(0.0, f32::max))
        .collect();

    let mut column_x = Vec::with_capacity(columns);
    let mut x = top_left.x;
    for width in column_widths {
        column_x.push(x);
        x += width;
    }

    let mut cells = Vec::with_capacity(cell_heights.len());
    let mut row_top = top_left.y;
    for (row, height) in row_heights.iter().enumerate() {
        let in_row = (cell_heights.len() - row * columns).min(columns);
        for column in 0..in_row {
            cells.push(Rect::new(
                column_x[column],
                row_top - height,
                column_widths[column],
                *height,
            ));
        }
        row_top -= height;
    }

    let total_height = top_left.y - row_top;
    GridLayout {
        column_widths: column_widths.to_vec(),
        row_heights,
        cells,
        bounds: Rect::new(top_left.x, row_top, table_width, total_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_relative_widths() {
        assert_eq!(distribute_widths(&[1.0, 3.0], 400.0), vec![100.0, 300.0]);
        assert_eq!(distribute_widths(&[0.0, 0.0], 10.0), vec![5.0, 5.0]);
        assert_eq!(distribute_widths(&[2.0, -1.0], 10.0), vec![10.0, 0.0]);
        assert!(distribute_widths(&[], 10.0).is_empty());
    }

    #[test]
    fn test_text_cell_height() {
        let approx = |a: f32, b: f32| (a - b).abs() < 1e-4;
        assert!(approx(text_cell_height("a", 10.0, Edges::all(2.0)), 16.0));
        assert!(approx(text_cell_height("a\nb", 10.0, Edges::zero()), 24.0));
        assert!(approx(text_cell_height("", 10.0, Edges::zero()), 12.0));
    }

    #[test]
    fn test_rows_take_tallest_cell() {
        let grid = solve_grid(
            Point::new(36.0, 806.0),
            &[100.0, 200.0],
            &[10.0, 30.0, 20.0, 5.0],
        );

        assert_eq!(grid.row_heights, vec![30.0, 20.0]);
        assert_eq!(grid.cell(0, 0), Some(Rect::new(36.0, 776.0, 100.0, 30.0)));
        assert_eq!(grid.cell(0, 1), Some(Rect::new(136.0, 776.0, 200.0, 30.0)));
        assert_eq!(grid.cell(1, 1), Some(Rect::new(136.0, 756.0, 200.0, 20.0)));
        assert_eq!(grid.bounds, Rect::new(36.0, 756.0, 300.0, 50.0));
    }

    #[test]
    fn test_partial_last_row() {
        let grid = solve_grid(Point::new(0.0, 100.0), &[50.0, 50.0], &[10.0, 10.0, 15.0]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.cells.len(), 3);
        assert_eq!(grid.cell(1, 1), None);
        assert_eq!(grid.bounds.height, 25.0);
    }
}
