//! Procedural page layout: a cursor-driven paginator that places absolutely
//! positioned draw operations onto fixed-size pages.
//!
//! All coordinates are millimetres with the origin at the top-left of the
//! page and y growing downward; font sizes are points. Output encoders
//! convert to their own coordinate space and never make layout decisions.

mod table;

pub use table::{Column, TableStyle, render_table};

use crate::fonts::{self, FontVariant, MM_PER_PT};

/// Fraction of the font size above the baseline. Matches the fallback the
/// base-14 metrics imply; used to place baselines inside line boxes.
pub(crate) const ASCENDER_RATIO: f32 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Font selection plus the fixed line-box height a wrapped line advances by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontVariant,
    /// Point size.
    pub size: f32,
    /// Millimetres consumed per wrapped line.
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(font: FontVariant, size: f32, line_height: f32) -> Self {
        Self { font, size, line_height }
    }

    /// Baseline offset from the top of a line box, in millimetres.
    pub(crate) fn ascent(&self) -> f32 {
        self.size * ASCENDER_RATIO * MM_PER_PT
    }
}

/// One absolutely positioned drawing operation. Text `y` is the baseline;
/// rect `y` is the top edge.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: FontVariant,
        size: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: [u8; 3],
    },
}

impl DrawOp {
    /// Lowest page coordinate this op touches, for the bottom-margin check.
    pub fn max_y(&self) -> f32 {
        match self {
            DrawOp::Text { y, .. } => *y,
            DrawOp::Line { y1, y2, .. } => y1.max(*y2),
            DrawOp::Rect { y, h, .. } => y + h,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width: 210.0,
        height: 297.0,
        margin_top: 18.0,
        margin_bottom: 18.0,
        margin_left: 15.0,
        margin_right: 15.0,
    };

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Content may not extend below this y.
    pub fn limit_y(&self) -> f32 {
        self.height - self.margin_bottom
    }

    /// Fixed column slots `(x, width)` across the content area.
    pub fn column_slots(&self, count: usize, gutter: f32) -> Vec<(f32, f32)> {
        let count = count.max(1);
        let w = (self.content_width() - gutter * (count - 1) as f32) / count as f32;
        (0..count)
            .map(|i| (self.margin_left + i as f32 * (w + gutter), w))
            .collect()
    }
}

/// Mutable layout position: which page and how far down it. One cursor per
/// independent region; column cursors are copies merged back by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Ordered pages of draw operations, built incrementally by the composer
/// and consumed whole by the output encoders.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub geometry: PageGeometry,
    pub pages: Vec<Page>,
}

impl Surface {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry, pages: vec![Page::default()] }
    }

    /// Cursor at the top-left of the first page's content area.
    pub fn start_cursor(&self) -> Cursor {
        Cursor { page: 0, y: self.geometry.margin_top }
    }

    pub fn push(&mut self, page: usize, op: DrawOp) {
        debug_assert!(page < self.pages.len(), "op pushed past the last page");
        self.pages[page].ops.push(op);
    }

    /// Break to a fresh page and reset the cursor to the top margin.
    pub fn break_page(&mut self, cursor: &mut Cursor) {
        cursor.page += 1;
        if cursor.page >= self.pages.len() {
            self.pages.push(Page::default());
        }
        cursor.y = self.geometry.margin_top;
        log::debug!("page break -> page {} ({} total)", cursor.page + 1, self.pages.len());
    }

    /// Page-break policy: if `required` millimetres do not fit above the
    /// bottom margin, flush to a new page first. Called before every
    /// atomic block.
    pub fn ensure_space(&mut self, cursor: &mut Cursor, required: f32) {
        if cursor.y + required > self.geometry.limit_y() {
            self.break_page(cursor);
        }
    }

    /// Wrap `text` against `width` and emit one text op per line, advancing
    /// the cursor. Returns the height consumed (`lines * line_height`);
    /// empty text consumes nothing and emits nothing. Performs no page-break
    /// check of its own.
    pub fn text_block(
        &mut self,
        cursor: &mut Cursor,
        text: &str,
        x: f32,
        width: f32,
        align: Alignment,
        style: &TextStyle,
    ) -> f32 {
        let lines = wrap_text(text, width, style);
        self.emit_wrapped(cursor, &lines, x, width, align, style)
    }

    /// `text_block` preceded by a space check against the exact wrapped
    /// height, so the block never crosses the bottom margin.
    pub fn flow_text(
        &mut self,
        cursor: &mut Cursor,
        text: &str,
        x: f32,
        width: f32,
        align: Alignment,
        style: &TextStyle,
    ) -> f32 {
        let lines = wrap_text(text, width, style);
        self.ensure_space(cursor, lines.len() as f32 * style.line_height);
        self.emit_wrapped(cursor, &lines, x, width, align, style)
    }

    fn emit_wrapped(
        &mut self,
        cursor: &mut Cursor,
        lines: &[String],
        x: f32,
        width: f32,
        align: Alignment,
        style: &TextStyle,
    ) -> f32 {
        for line in lines {
            let line_w = fonts::text_width_mm(line, style.font, style.size);
            let lx = match align {
                Alignment::Left => x,
                Alignment::Center => x + (width - line_w) / 2.0,
                Alignment::Right => x + width - line_w,
            };
            self.push(
                cursor.page,
                DrawOp::Text {
                    x: lx,
                    y: cursor.y + style.ascent(),
                    text: line.clone(),
                    font: style.font,
                    size: style.size,
                },
            );
            cursor.y += style.line_height;
        }
        lines.len() as f32 * style.line_height
    }

    /// Horizontal rule at the cursor.
    pub fn rule(&mut self, cursor: &Cursor, x: f32, width: f32, line_width: f32) {
        self.push(
            cursor.page,
            DrawOp::Line {
                x1: x,
                y1: cursor.y,
                x2: x + width,
                y2: cursor.y,
                width: line_width,
            },
        );
    }

    /// Vertical whitespace, clamped to the bottom margin so a trailing gap
    /// can never push the cursor past the limit.
    pub fn gap(&mut self, cursor: &mut Cursor, height: f32) {
        cursor.y = (cursor.y + height).min(self.geometry.limit_y());
    }

    /// Run a multi-column region: each slot gets an independent copy of the
    /// cursor, and the merged continuation position is the maximum of the
    /// per-column final positions, compared by page first and then by y, so
    /// a column that broke onto a later page wins the merge.
    pub fn columns<F>(&mut self, cursor: &mut Cursor, slots: &[(f32, f32)], mut emit: F)
    where
        F: FnMut(&mut Surface, &mut Cursor, usize, f32, f32),
    {
        let start = *cursor;
        let mut end = start;
        for (i, &(x, w)) in slots.iter().enumerate() {
            let mut column = start;
            emit(self, &mut column, i, x, w);
            if column.page > end.page || (column.page == end.page && column.y > end.y) {
                end = column;
            }
        }
        *cursor = end;
    }

    /// Total number of ops across all pages.
    pub fn op_count(&self) -> usize {
        self.pages.iter().map(|p| p.ops.len()).sum()
    }
}

/// Greedy word wrap: break at word boundaries only, never mid-word. A single
/// word wider than `max_width` still gets its own line. Whitespace-only
/// input wraps to no lines at all.
pub fn wrap_text(text: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    let space_w = fonts::space_width_mm(style.font, style.size);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_w = 0.0f32;

    for word in text.split_whitespace() {
        let word_w = fonts::text_width_mm(word, style.font, style.size);
        if !current.is_empty() && current_w + space_w + word_w > max_width {
            lines.push(std::mem::take(&mut current));
            current_w = 0.0;
        }
        if current.is_empty() {
            current.push_str(word);
            current_w = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_w += space_w + word_w;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Height `text` would consume if emitted at `width`, without emitting.
pub fn measure_text(text: &str, width: f32, style: &TextStyle) -> f32 {
    wrap_text(text, width, style).len() as f32 * style.line_height
}
