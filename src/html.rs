//! Preview encoder: projects a finished surface into a self-contained HTML
//! string of absolutely positioned elements, one container per page. Shares
//! the layout verbatim with the PDF encoder; nothing is re-flowed.

use std::fmt::Write;

use crate::fonts::FontVariant;
use crate::layout::{DrawOp, Surface};

fn escape(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

fn font_css(font: FontVariant) -> &'static str {
    match font {
        FontVariant::Regular => "",
        FontVariant::Bold => "font-weight:bold;",
        FontVariant::Oblique => "font-style:italic;",
    }
}

pub(crate) fn encode(surface: &Surface, title: &str) -> String {
    let g = surface.geometry;
    let mut out = String::with_capacity(surface.op_count() * 96 + 1024);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    escape(title, &mut out);
    out.push_str("</title>\n<style>\n");
    out.push_str("body { background: #e8e8ec; margin: 0; padding: 8mm 0; font-family: Helvetica, Arial, sans-serif; }\n");
    let _ = writeln!(
        out,
        ".page {{ position: relative; width: {:.1}mm; height: {:.1}mm; margin: 0 auto 8mm; \
         background: #fff; box-shadow: 0 1px 4px rgba(0,0,0,0.25); overflow: hidden; }}",
        g.width, g.height,
    );
    out.push_str(".page span { position: absolute; white-space: pre; }\n");
    out.push_str(".page div { position: absolute; }\n");
    out.push_str("</style>\n</head>\n<body>\n");

    for page in &surface.pages {
        out.push_str("<div class=\"page\">\n");
        for op in &page.ops {
            match op {
                DrawOp::Text { x, y, text, font, size } => {
                    // Layout y is the baseline; CSS positions the top of the
                    // line box, so back off by the ascent.
                    let top = y - size * crate::layout::ASCENDER_RATIO * crate::fonts::MM_PER_PT;
                    let _ = write!(
                        out,
                        "<span style=\"left:{x:.2}mm;top:{top:.2}mm;font-size:{size}pt;{}\">",
                        font_css(*font),
                    );
                    escape(text, &mut out);
                    out.push_str("</span>\n");
                }
                DrawOp::Line { x1, y1, x2, y2, width } => {
                    if (y1 - y2).abs() < f32::EPSILON {
                        let _ = writeln!(
                            out,
                            "<div style=\"left:{:.2}mm;top:{:.2}mm;width:{:.2}mm;\
                             border-top:{width:.2}mm solid #000;\"></div>",
                            x1.min(*x2),
                            y1,
                            (x2 - x1).abs(),
                        );
                    } else {
                        let _ = writeln!(
                            out,
                            "<div style=\"left:{:.2}mm;top:{:.2}mm;height:{:.2}mm;\
                             border-left:{width:.2}mm solid #000;\"></div>",
                            x1,
                            y1.min(*y2),
                            (y2 - y1).abs(),
                        );
                    }
                }
                DrawOp::Rect { x, y, w, h, fill } => {
                    let _ = writeln!(
                        out,
                        "<div style=\"left:{x:.2}mm;top:{y:.2}mm;width:{w:.2}mm;height:{h:.2}mm;\
                         background:rgb({},{},{});\"></div>",
                        fill[0], fill[1], fill[2],
                    );
                }
            }
        }
        out.push_str("</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
