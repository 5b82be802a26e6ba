mod common;

use agreement_pdf::{AgreementKind, render_html, render_pdf};

#[test]
fn empty_record_completes_with_placeholders() {
    for kind in [AgreementKind::Arbitration, AgreementKind::Mediation] {
        let mut record = common::empty_record();
        record.kind = kind;

        let pdf = render_pdf(&record);
        assert!(pdf.starts_with(b"%PDF-"), "not a PDF header");

        let html = render_html(&record);
        let placeholders = html.matches("N/A").count();
        assert!(
            placeholders >= 6,
            "expected schedule and footer placeholders, found {placeholders}"
        );
    }
}

#[test]
fn unparseable_date_renders_as_nothing() {
    let mut record = common::sample_record();
    record.agreement_date = Some("someday soon".to_string());
    let html = render_html(&record);
    assert!(!html.contains("someday"), "raw date value leaked into output");
    assert!(!html.contains("Executed on the"), "date line should be omitted");
}

#[test]
fn valid_date_renders_in_long_legal_form() {
    let record = common::sample_record();
    let html = render_html(&record);
    assert!(html.contains("Executed on the 4th day of August, 2026"));
}

#[test]
fn missing_party_fields_render_as_na_not_errors() {
    let mut record = common::sample_record();
    record.claimants = vec![Default::default()];
    let html = render_html(&record);
    assert!(html.contains("Guardian: N/A"));
    assert!(html.contains("Phone: N/A"));
}

#[test]
fn amounts_render_with_indian_grouping() {
    let record = common::sample_record();
    let html = render_html(&record);
    assert!(html.contains("Rs. 4,50,000"));
    assert!(html.contains("Rs. 60,000"));
}
