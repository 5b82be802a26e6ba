mod common;

use agreement_pdf::{AgreementKind, DrawOp, Surface, compose};

fn text_positions(surface: &Surface, needle: &str) -> Vec<(usize, f32)> {
    let mut found = Vec::new();
    for (pi, page) in surface.pages.iter().enumerate() {
        for op in &page.ops {
            if let DrawOp::Text { text, y, .. } = op
                && text == needle
            {
                found.push((pi, *y));
            }
        }
    }
    found
}

#[test]
fn content_stays_inside_the_vertical_margins() {
    let mut mediation = common::sample_record();
    mediation.kind = AgreementKind::Mediation;
    mediation.mediator = Some("Dr. L. Fernandes".to_string());

    for record in [
        common::sample_record(),
        common::empty_record(),
        common::many_claimants_record(15),
        mediation,
    ] {
        let surface = compose(&record);
        let limit = surface.geometry.limit_y();
        let top = surface.geometry.margin_top;
        for (pi, page) in surface.pages.iter().enumerate() {
            for op in &page.ops {
                assert!(
                    op.max_y() <= limit + 1e-3,
                    "page {pi}: op extends below the bottom margin: {op:?}"
                );
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y >= top, "page {pi}: text above the top margin: {op:?}");
                }
            }
        }
    }
}

#[test]
fn fifteen_claimants_force_a_page_break() {
    let record = common::many_claimants_record(15);
    let surface = compose(&record);
    assert!(surface.pages.len() > 1, "expected more than one page");
}

#[test]
fn party_cards_are_never_split_across_pages() {
    let record = common::many_claimants_record(15);
    let surface = compose(&record);

    for i in 1..=15 {
        let name = format!("{i}. Claimant {i}");
        let phone = format!("Phone: 98450{i:05}");

        let names = text_positions(&surface, &name);
        assert_eq!(names.len(), 1, "{name:?} should appear exactly once");
        let phones = text_positions(&surface, &phone);
        assert_eq!(phones.len(), 1, "{phone:?} should appear exactly once");

        // First and last row of the card land on the same page, in order.
        let (name_page, name_y) = names[0];
        let (phone_page, phone_y) = phones[0];
        assert_eq!(name_page, phone_page, "card {i} straddles a page break");
        assert!(phone_y > name_y, "card {i} rows are out of order");
    }
}

#[test]
fn composition_is_deterministic() {
    let record = common::many_claimants_record(9);
    assert_eq!(compose(&record), compose(&record));

    let mut mediation = common::sample_record();
    mediation.kind = AgreementKind::Mediation;
    assert_eq!(compose(&mediation), compose(&mediation));
}

#[test]
fn both_kinds_share_the_section_skeleton() {
    let mut record = common::sample_record();
    let arb = compose(&record);
    record.kind = AgreementKind::Mediation;
    let med = compose(&record);

    for surface in [&arb, &med] {
        assert!(!text_positions(surface, "RECITALS").is_empty());
        assert!(!text_positions(surface, "SCHEDULE OF DISPUTE AND FEE PARTICULARS").is_empty());
    }
    assert!(!text_positions(&arb, "ARBITRATION AGREEMENT").is_empty());
    assert!(!text_positions(&med, "MEDIATION AGREEMENT").is_empty());
}
