//! Binary encoder: projects a finished surface into PDF bytes. Performs no
//! layout of its own; millimetre coordinates are converted to points and
//! the y axis flipped into PDF space, nothing more.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

use crate::fonts::{self, FontVariant, PT_PER_MM};
use crate::layout::{DrawOp, Page, PageGeometry, Surface};

pub(crate) fn encode(surface: &Surface) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    // Base-14 fonts only: reference by name, nothing embedded.
    let mut font_refs: Vec<(FontVariant, Ref)> = Vec::new();
    for variant in FontVariant::ALL {
        let id = alloc();
        pdf.type1_font(id)
            .base_font(Name(variant.base_name().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        font_refs.push((variant, id));
    }

    let n = surface.pages.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, page) in surface.pages.iter().enumerate() {
        let raw = page_content(page, &surface.geometry).finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let page_w = surface.geometry.width * PT_PER_MM;
    let page_h = surface.geometry.height * PT_PER_MM;
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, page_w, page_h))
            .parent(pages_id)
            .contents(content_ids[i]);
        {
            let mut resources = page.resources();
            let mut font_dict = resources.fonts();
            for (variant, id) in &font_refs {
                font_dict.pair(Name(variant.resource_name().as_bytes()), *id);
            }
        }
    }

    pdf.finish()
}

/// Build one page's content stream. Consecutive text ops share a text
/// object; the pen moves by deltas and the font is only re-selected when it
/// changes.
fn page_content(page: &Page, geometry: &PageGeometry) -> Content {
    let to_pt = |mm: f32| mm * PT_PER_MM;
    let flip = |y_mm: f32| (geometry.height - y_mm) * PT_PER_MM;

    let mut content = Content::new();
    let ops = &page.ops;
    let mut i = 0;
    while i < ops.len() {
        match &ops[i] {
            DrawOp::Text { .. } => {
                content.begin_text();
                let mut selected: Option<(FontVariant, f32)> = None;
                let mut td_x = 0.0f32;
                let mut td_y = 0.0f32;
                while let Some(DrawOp::Text { x, y, text, font, size }) = ops.get(i) {
                    if selected != Some((*font, *size)) {
                        content.set_font(Name(font.resource_name().as_bytes()), *size);
                        selected = Some((*font, *size));
                    }
                    let px = to_pt(*x);
                    let py = flip(*y);
                    content.next_line(px - td_x, py - td_y);
                    td_x = px;
                    td_y = py;
                    content.show(Str(&fonts::to_winansi_bytes(text)));
                    i += 1;
                }
                content.end_text();
            }
            DrawOp::Line { x1, y1, x2, y2, width } => {
                content.save_state();
                content.set_line_width(width * PT_PER_MM);
                content.move_to(to_pt(*x1), flip(*y1));
                content.line_to(to_pt(*x2), flip(*y2));
                content.stroke();
                content.restore_state();
                i += 1;
            }
            DrawOp::Rect { x, y, w, h, fill } => {
                content.save_state();
                content.set_fill_rgb(
                    fill[0] as f32 / 255.0,
                    fill[1] as f32 / 255.0,
                    fill[2] as f32 / 255.0,
                );
                // Rect y is the top edge in layout space; PDF wants the bottom.
                content.rect(to_pt(*x), flip(*y + *h), to_pt(*w), to_pt(*h));
                content.fill_nonzero();
                content.restore_state();
                i += 1;
            }
        }
    }
    content
}
