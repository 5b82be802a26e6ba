//! Bordered table rendering: fixed column widths, per-cell wrapping,
//! alternating row fills and per-row page breaks.

use crate::fonts::{self, FontVariant};

use super::{Alignment, Cursor, DrawOp, Surface, TextStyle, wrap_text};

#[derive(Clone, Debug)]
pub struct Column {
    pub title: String,
    pub width: f32,
    pub align: Alignment,
}

impl Column {
    pub fn new(title: &str, width: f32, align: Alignment) -> Self {
        Self { title: title.to_string(), width, align }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableStyle {
    pub cell: TextStyle,
    pub header: TextStyle,
    /// Rows are never shorter than this, regardless of content.
    pub min_row_height: f32,
    pub header_fill: [u8; 3],
    pub stripe_fill: [u8; 3],
    pub border_width: f32,
    pub padding_x: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            cell: TextStyle::new(FontVariant::Regular, 9.0, 4.0),
            header: TextStyle::new(FontVariant::Bold, 9.0, 4.0),
            min_row_height: 12.0,
            header_fill: [222, 226, 235],
            stripe_fill: [243, 244, 247],
            border_width: 0.2,
            padding_x: 2.0,
        }
    }
}

struct RowLayout {
    height: f32,
    cells: Vec<Vec<String>>,
}

/// Wrap every cell against its column width and derive the row height from
/// the tallest cell: `max(min_row_height, max_lines * line_height)`.
fn layout_row(cells: &[String], columns: &[Column], text: &TextStyle, style: &TableStyle) -> RowLayout {
    let wrapped: Vec<Vec<String>> = columns
        .iter()
        .zip(cells.iter().map(String::as_str).chain(std::iter::repeat("")))
        .map(|(col, cell)| wrap_text(cell, (col.width - 2.0 * style.padding_x).max(0.0), text))
        .collect();
    let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(0);
    RowLayout {
        height: (max_lines as f32 * text.line_height).max(style.min_row_height),
        cells: wrapped,
    }
}

fn draw_row(
    surface: &mut Surface,
    cursor: &mut Cursor,
    x: f32,
    columns: &[Column],
    layout: &RowLayout,
    text: &TextStyle,
    style: &TableStyle,
    fill: Option<[u8; 3]>,
) {
    let total_w: f32 = columns.iter().map(|c| c.width).sum();
    let row_top = cursor.y;
    let row_h = layout.height;

    if let Some(fill) = fill {
        surface.push(
            cursor.page,
            DrawOp::Rect { x, y: row_top, w: total_w, h: row_h, fill },
        );
    }

    // Cell text, vertically centred within the row.
    let mut cell_x = x;
    for (col, lines) in columns.iter().zip(&layout.cells) {
        let inner_w = (col.width - 2.0 * style.padding_x).max(0.0);
        let content_h = lines.len() as f32 * text.line_height;
        let offset = ((row_h - content_h) / 2.0).max(0.0);
        for (i, line) in lines.iter().enumerate() {
            let line_w = fonts::text_width_mm(line, text.font, text.size);
            let lx = match col.align {
                Alignment::Left => cell_x + style.padding_x,
                Alignment::Center => cell_x + style.padding_x + (inner_w - line_w) / 2.0,
                Alignment::Right => cell_x + style.padding_x + inner_w - line_w,
            };
            surface.push(
                cursor.page,
                DrawOp::Text {
                    x: lx,
                    y: row_top + offset + i as f32 * text.line_height + text.ascent(),
                    text: line.clone(),
                    font: text.font,
                    size: text.size,
                },
            );
        }
        cell_x += col.width;
    }

    // Grid lines: top and bottom edges plus every vertical boundary.
    let row_bottom = row_top + row_h;
    let bw = style.border_width;
    surface.push(cursor.page, DrawOp::Line { x1: x, y1: row_top, x2: x + total_w, y2: row_top, width: bw });
    surface.push(cursor.page, DrawOp::Line { x1: x, y1: row_bottom, x2: x + total_w, y2: row_bottom, width: bw });
    let mut edge_x = x;
    for col in columns {
        surface.push(cursor.page, DrawOp::Line { x1: edge_x, y1: row_top, x2: edge_x, y2: row_bottom, width: bw });
        edge_x += col.width;
    }
    surface.push(cursor.page, DrawOp::Line { x1: edge_x, y1: row_top, x2: edge_x, y2: row_bottom, width: bw });

    cursor.y = row_bottom;
}

/// Render a bordered table at `x`: a header row in the header style, then
/// one row per record with alternating background fills. The page-break
/// check runs per row, so a long table continues onto fresh pages without
/// ever crossing the bottom margin; headers are not repeated after a break.
pub fn render_table(
    surface: &mut Surface,
    cursor: &mut Cursor,
    x: f32,
    columns: &[Column],
    rows: &[Vec<String>],
    style: &TableStyle,
) {
    if columns.is_empty() {
        return;
    }

    let titles: Vec<String> = columns.iter().map(|c| c.title.clone()).collect();
    let header = layout_row(&titles, columns, &style.header, style);
    surface.ensure_space(cursor, header.height);
    draw_row(surface, cursor, x, columns, &header, &style.header, style, Some(style.header_fill));

    for (i, row) in rows.iter().enumerate() {
        let layout = layout_row(row, columns, &style.cell, style);
        surface.ensure_space(cursor, layout.height);
        let fill = if i % 2 == 1 { Some(style.stripe_fill) } else { None };
        draw_row(surface, cursor, x, columns, &layout, &style.cell, style, fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageGeometry;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("No.", 12.0, Alignment::Left),
            Column::new("Particulars", 118.0, Alignment::Left),
            Column::new("Details", 50.0, Alignment::Right),
        ]
    }

    #[test]
    fn row_height_never_drops_below_the_minimum() {
        let style = TableStyle::default();
        let layout = layout_row(
            &["1".into(), "Nature of dispute".into(), "N/A".into()],
            &columns(),
            &style.cell,
            &style,
        );
        assert_eq!(layout.height, style.min_row_height);
    }

    #[test]
    fn row_height_follows_the_tallest_wrapped_cell() {
        let style = TableStyle::default();
        let long = "A dispute concerning the supply, installation and subsequent \
                    maintenance of industrial refrigeration equipment across multiple \
                    premises of the first claimant, including claims for consequential \
                    losses arising from spoilage of perishable stock, demurrage on \
                    rejected consignments and the cost of substitute cold-storage \
                    arrangements procured at short notice";
        let layout = layout_row(
            &["1".into(), long.into(), "N/A".into()],
            &columns(),
            &style.cell,
            &style,
        );
        let lines = wrap_text(long, 118.0 - 2.0 * style.padding_x, &style.cell);
        assert!(lines.len() > 3);
        assert_eq!(layout.height, lines.len() as f32 * style.cell.line_height);
    }

    #[test]
    fn short_rows_pad_missing_trailing_cells() {
        let style = TableStyle::default();
        let layout = layout_row(&["1".into()], &columns(), &style.cell, &style);
        assert_eq!(layout.cells.len(), 3);
        assert!(layout.cells[1].is_empty());
    }

    #[test]
    fn long_tables_break_per_row_and_stay_above_the_margin() {
        let mut surface = Surface::new(PageGeometry::A4);
        let mut cursor = surface.start_cursor();
        let style = TableStyle::default();
        let rows: Vec<Vec<String>> = (0..40)
            .map(|i| vec![format!("{}", i + 1), format!("Sitting number {}", i + 1), "Rs. 5,000".into()])
            .collect();
        render_table(&mut surface, &mut cursor, 15.0, &columns(), &rows, &style);
        assert!(surface.pages.len() > 1);
        let limit = surface.geometry.limit_y();
        for page in &surface.pages {
            for op in &page.ops {
                assert!(op.max_y() <= limit + 1e-3, "op below bottom margin: {op:?}");
            }
        }
    }

    #[test]
    fn body_rows_alternate_background_fills() {
        let mut surface = Surface::new(PageGeometry::A4);
        let mut cursor = surface.start_cursor();
        let style = TableStyle::default();
        let rows: Vec<Vec<String>> = (0..4)
            .map(|i| vec![format!("{}", i + 1), "Entry".into(), "N/A".into()])
            .collect();
        render_table(&mut surface, &mut cursor, 15.0, &columns(), &rows, &style);
        let stripes = surface.pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { fill, .. } if *fill == style.stripe_fill))
            .count();
        assert_eq!(stripes, 2);
    }
}
