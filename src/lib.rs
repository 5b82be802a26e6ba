mod agreement;
mod error;
mod fonts;
mod html;
mod layout;
mod model;
mod pdf;

pub use error::Error;
pub use fonts::FontVariant;
pub use layout::{
    Alignment, Column, Cursor, DrawOp, Page, PageGeometry, Surface, TableStyle, TextStyle,
    measure_text, render_table, wrap_text,
};
pub use model::{AgreementKind, AgreementRecord, Dispute, FinancialTerms, Party};

use std::path::Path;
use std::time::Instant;

/// Lay the agreement out once. Both output encoders consume the surface this
/// returns; neither makes layout decisions of its own.
pub fn compose(record: &AgreementRecord) -> Surface {
    agreement::compose(record)
}

/// Compose and encode the agreement as PDF bytes.
pub fn render_pdf(record: &AgreementRecord) -> Vec<u8> {
    pdf::encode(&compose(record))
}

/// Compose and encode the agreement as an HTML preview string.
pub fn render_html(record: &AgreementRecord) -> String {
    html::encode(&compose(record), kind_title(record))
}

pub fn write_pdf(record: &AgreementRecord, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let surface = compose(record);
    let t_compose = t0.elapsed();

    let bytes = pdf::encode(&surface);
    let t_encode = t0.elapsed();

    write_replacing(output, &bytes)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: compose={:.1}ms, encode={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes, {} pages)",
        t_compose.as_secs_f64() * 1000.0,
        (t_encode - t_compose).as_secs_f64() * 1000.0,
        (t_total - t_encode).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
        surface.pages.len(),
    );

    Ok(())
}

pub fn write_html(record: &AgreementRecord, output: &Path) -> Result<(), Error> {
    let t0 = Instant::now();

    let markup = html::encode(&compose(record), kind_title(record));
    let t_encode = t0.elapsed();

    write_replacing(output, markup.as_bytes())?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: compose+encode={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_encode.as_secs_f64() * 1000.0,
        (t_total - t_encode).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        markup.len(),
    );

    Ok(())
}

fn kind_title(record: &AgreementRecord) -> &'static str {
    match record.kind {
        AgreementKind::Arbitration => "Arbitration Agreement",
        AgreementKind::Mediation => "Mediation Agreement",
    }
}

/// Write via a sibling temp file and rename, so a failed write never leaves
/// a partial document behind.
fn write_replacing(output: &Path, bytes: &[u8]) -> Result<(), Error> {
    let tmp = output.with_extension("tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, output)?;
    Ok(())
}
