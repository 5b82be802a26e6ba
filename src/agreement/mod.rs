//! Agreement document assembly: sequences the fixed section order (title,
//! parties, recitals, clauses, signatures, schedule table, footer) onto a
//! surface. The two agreement kinds share this skeleton and differ only in
//! their recital/clause sets and signature roles.

mod arbitration;
mod mediation;

use crate::fonts::FontVariant;
use crate::layout::{
    Alignment, Column, Cursor, PageGeometry, Surface, TableStyle, TextStyle, measure_text,
    render_table,
};
use crate::model::{
    AgreementKind, AgreementRecord, PLACEHOLDER, Party, amount_or_na, count_or_na,
    format_long_date, or_na,
};

pub(crate) const TITLE: TextStyle = TextStyle::new(FontVariant::Bold, 14.0, 7.0);
pub(crate) const HEADING: TextStyle = TextStyle::new(FontVariant::Bold, 11.0, 6.0);
pub(crate) const BODY: TextStyle = TextStyle::new(FontVariant::Regular, 10.0, 5.0);
pub(crate) const BODY_BOLD: TextStyle = TextStyle::new(FontVariant::Bold, 10.0, 5.0);
pub(crate) const DETAIL: TextStyle = TextStyle::new(FontVariant::Regular, 9.0, 4.5);
pub(crate) const NOTE: TextStyle = TextStyle::new(FontVariant::Oblique, 8.5, 4.0);

const COLUMN_GUTTER: f32 = 8.0;
const CLAUSE_INDENT: f32 = 8.0;
const CLAUSE_GAP: f32 = 1.5;
const CARD_GAP: f32 = 2.5;
const SECTION_GAP: f32 = 5.0;
/// Space reserved for a handwritten signature above the rule.
const SIGNATURE_SPACE: f32 = 14.0;
/// A section heading is never left alone at the bottom of a page.
const HEADING_KEEP: f32 = 22.0;

/// Lay the whole agreement out. The sole layout entry point; both output
/// encoders consume the surface this returns.
pub(crate) fn compose(record: &AgreementRecord) -> Surface {
    let mut surface = Surface::new(PageGeometry::A4);
    let mut cursor = surface.start_cursor();
    match record.kind {
        AgreementKind::Arbitration => arbitration::compose_into(&mut surface, &mut cursor, record),
        AgreementKind::Mediation => mediation::compose_into(&mut surface, &mut cursor, record),
    }
    log::debug!(
        "composed {:?} agreement: {} pages, {} ops",
        record.kind,
        surface.pages.len(),
        surface.op_count(),
    );
    surface
}

pub(crate) fn title_block(surface: &mut Surface, cursor: &mut Cursor, title: &str, record: &AgreementRecord) {
    let g = surface.geometry;
    let x = g.margin_left;
    let w = g.content_width();
    surface.text_block(cursor, title, x, w, Alignment::Center, &TITLE);
    if let Some(case) = &record.case_reference
        && !case.trim().is_empty()
    {
        let line = format!("Case Reference: {}", case.trim());
        surface.text_block(cursor, &line, x, w, Alignment::Center, &DETAIL);
    }
    let date_text = record
        .agreement_date
        .as_deref()
        .map(format_long_date)
        .unwrap_or_default();
    // An unparseable date renders as nothing at all, not as a broken phrase.
    if !date_text.is_empty() {
        let line = format!("Executed on the {date_text}");
        surface.text_block(cursor, &line, x, w, Alignment::Center, &DETAIL);
    }
    surface.gap(cursor, 2.0);
    surface.rule(cursor, x, w, 0.3);
    surface.gap(cursor, SECTION_GAP);
}

fn party_rows(seq: usize, party: &Party) -> Vec<(String, TextStyle)> {
    vec![
        (format!("{seq}. {}", or_na(&party.name)), BODY_BOLD),
        (format!("Guardian: {}", or_na(&party.guardian_name)), DETAIL),
        (format!("Occupation: {}", or_na(&party.occupation)), DETAIL),
        (format!("Address: {}", or_na(&party.address)), DETAIL),
        (format!("Email: {}", or_na(&party.email)), DETAIL),
        (format!("Phone: {}", or_na(&party.phone)), DETAIL),
    ]
}

fn emit_party_column(surface: &mut Surface, col: &mut Cursor, parties: &[Party], x: f32, w: f32) {
    if parties.is_empty() {
        surface.text_block(col, PLACEHOLDER, x, w, Alignment::Left, &DETAIL);
        return;
    }
    for (i, party) in parties.iter().enumerate() {
        let rows = party_rows(i + 1, party);
        // A party card is atomic: break before it, never inside it.
        let height: f32 = rows.iter().map(|(text, style)| measure_text(text, w, style)).sum();
        surface.ensure_space(col, height);
        for (text, style) in &rows {
            surface.text_block(col, text, x, w, Alignment::Left, style);
        }
        surface.gap(col, CARD_GAP);
    }
}

/// Two-column party block: both sides run down independent cursors and the
/// document continues below whichever column finished lower.
pub(crate) fn party_block(
    surface: &mut Surface,
    cursor: &mut Cursor,
    record: &AgreementRecord,
    left_label: &str,
    right_label: &str,
) {
    let slots = surface.geometry.column_slots(2, COLUMN_GUTTER);
    surface.ensure_space(cursor, HEADING.line_height + HEADING_KEEP);
    surface.columns(cursor, &slots, |s, col, i, x, w| {
        let label = if i == 0 { left_label } else { right_label };
        s.text_block(col, label, x, w, Alignment::Left, &HEADING);
    });
    surface.gap(cursor, 1.0);
    surface.columns(cursor, &slots, |s, col, i, x, w| {
        let parties = if i == 0 { &record.claimants } else { &record.respondents };
        emit_party_column(s, col, parties, x, w);
    });
    surface.gap(cursor, SECTION_GAP);
}

pub(crate) fn section_heading(surface: &mut Surface, cursor: &mut Cursor, text: &str) {
    surface.ensure_space(cursor, HEADING.line_height + HEADING_KEEP);
    surface.text_block(
        cursor,
        text,
        surface.geometry.margin_left,
        surface.geometry.content_width(),
        Alignment::Left,
        &HEADING,
    );
    surface.gap(cursor, 1.5);
}

pub(crate) fn recital_paragraphs(surface: &mut Surface, cursor: &mut Cursor, paragraphs: &[String]) {
    let x = surface.geometry.margin_left;
    let w = surface.geometry.content_width();
    for para in paragraphs {
        surface.flow_text(cursor, para, x, w, Alignment::Left, &BODY);
        surface.gap(cursor, CLAUSE_GAP);
    }
}

/// Numbered operative clauses with a hanging number column. Each clause is
/// an atomic block checked against its exact wrapped height.
pub(crate) fn numbered_clauses(surface: &mut Surface, cursor: &mut Cursor, clauses: &[String]) {
    let x = surface.geometry.margin_left;
    let w = surface.geometry.content_width() - CLAUSE_INDENT;
    for (i, clause) in clauses.iter().enumerate() {
        let height = measure_text(clause, w, &BODY).max(BODY.line_height);
        surface.ensure_space(cursor, height);
        let mut number = *cursor;
        surface.text_block(&mut number, &format!("{}.", i + 1), x, CLAUSE_INDENT, Alignment::Left, &BODY_BOLD);
        surface.text_block(cursor, clause, x + CLAUSE_INDENT, w, Alignment::Left, &BODY);
        surface.gap(cursor, CLAUSE_GAP);
    }
    surface.gap(cursor, SECTION_GAP - CLAUSE_GAP);
}

pub(crate) struct SignatureCard {
    pub names: Vec<String>,
    pub role: &'static str,
}

fn signature_card_height(card: &SignatureCard, w: f32) -> f32 {
    let name_lines: f32 = if card.names.is_empty() {
        measure_text(PLACEHOLDER, w, &BODY_BOLD)
    } else {
        card.names.iter().map(|n| measure_text(n, w, &BODY_BOLD)).sum()
    };
    SIGNATURE_SPACE + 1.5 + name_lines + 2.0 * DETAIL.line_height
}

/// Three-column signature block. The whole region is checked at once; the
/// merged continuation is the lowest column end.
pub(crate) fn signature_block(
    surface: &mut Surface,
    cursor: &mut Cursor,
    lead: &str,
    cards: &[SignatureCard; 3],
) {
    let slots = surface.geometry.column_slots(3, COLUMN_GUTTER);
    let x = surface.geometry.margin_left;
    let w = surface.geometry.content_width();
    surface.flow_text(cursor, lead, x, w, Alignment::Left, &BODY);
    surface.gap(cursor, 2.0);

    let region_height = cards
        .iter()
        .zip(&slots)
        .map(|(card, &(_, cw))| signature_card_height(card, cw))
        .fold(0.0f32, f32::max);
    surface.ensure_space(cursor, region_height);

    surface.columns(cursor, &slots, |s, col, i, cx, cw| {
        let card = &cards[i];
        s.gap(col, SIGNATURE_SPACE);
        s.rule(col, cx, cw * 0.85, 0.25);
        s.gap(col, 1.5);
        if card.names.is_empty() {
            s.text_block(col, PLACEHOLDER, cx, cw, Alignment::Left, &BODY_BOLD);
        } else {
            for name in &card.names {
                s.text_block(col, name, cx, cw, Alignment::Left, &BODY_BOLD);
            }
        }
        s.text_block(col, card.role, cx, cw, Alignment::Left, &DETAIL);
        s.text_block(col, "Date: ____________", cx, cw, Alignment::Left, &DETAIL);
    });
    surface.gap(cursor, SECTION_GAP);
}

/// Reference table: dispute metadata and financial terms in one bordered
/// schedule.
pub(crate) fn schedule_table(surface: &mut Surface, cursor: &mut Cursor, record: &AgreementRecord) {
    section_heading(surface, cursor, "SCHEDULE OF DISPUTE AND FEE PARTICULARS");
    let columns = [
        Column::new("No.", 12.0, Alignment::Left),
        Column::new("Particulars", 118.0, Alignment::Left),
        Column::new("Details", 50.0, Alignment::Right),
    ];
    let rows = vec![
        vec!["1".into(), "Nature of dispute".into(), or_na(&record.dispute.nature).to_string()],
        vec!["2".into(), "Category of dispute".into(), or_na(&record.dispute.category).to_string()],
        vec!["3".into(), "Value of the claim".into(), amount_or_na(record.dispute.suit_value)],
        vec!["4".into(), "Number of sittings".into(), count_or_na(record.terms.sittings)],
        vec!["5".into(), "Total cost of proceedings".into(), amount_or_na(record.terms.total_cost)],
        vec!["6".into(), "Compliance period (days)".into(), count_or_na(record.terms.compliance_days)],
    ];
    let x = surface.geometry.margin_left;
    render_table(surface, cursor, x, &columns, &rows, &TableStyle::default());
    surface.gap(cursor, SECTION_GAP);
}

pub(crate) fn footer(surface: &mut Surface, cursor: &mut Cursor, record: &AgreementRecord) {
    let x = surface.geometry.margin_left;
    let w = surface.geometry.content_width();
    surface.ensure_space(cursor, 3.0 * BODY.line_height + 2.0 * NOTE.line_height + 6.0);
    surface.gap(cursor, 2.0);
    surface.rule(cursor, x, w, 0.3);
    surface.gap(cursor, 2.0);

    let date_text = record
        .agreement_date
        .as_deref()
        .map(format_long_date)
        .unwrap_or_default();
    let place_line = format!("Place: {}    Date: {}", or_na(&record.place), date_text);
    surface.text_block(cursor, &place_line, x, w, Alignment::Left, &BODY);
    let rep_line = format!(
        "For the Institute: {}",
        or_na(&record.institute_representative)
    );
    surface.text_block(cursor, &rep_line, x, w, Alignment::Left, &DETAIL);
    surface.text_block(
        cursor,
        "This document was generated from the case record and is subject to the rules of the Institute.",
        x,
        w,
        Alignment::Left,
        &NOTE,
    );
}

/// Signature card for the neutral's column, shared by both kinds.
pub(crate) fn neutral_card(record: &AgreementRecord) -> SignatureCard {
    match record.kind {
        AgreementKind::Arbitration => SignatureCard {
            names: record.arbitrators.clone(),
            role: if record.arbitrators.len() > 1 { "Arbitrators" } else { "Arbitrator" },
        },
        AgreementKind::Mediation => SignatureCard {
            names: record.mediator.clone().into_iter().collect(),
            role: "Mediator",
        },
    }
}

pub(crate) fn first_name_card(parties: &[Party], role: &'static str) -> SignatureCard {
    SignatureCard {
        names: parties
            .iter()
            .map(|p| or_na(&p.name).to_string())
            .take(3)
            .collect(),
        role,
    }
}
