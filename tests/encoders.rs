mod common;

use agreement_pdf::{compose, render_html, render_pdf};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn pdf_has_a_header_and_one_page_object_per_surface_page() {
    let record = common::many_claimants_record(15);
    let pages = compose(&record).pages.len();
    let pdf = render_pdf(&record);

    assert!(pdf.starts_with(b"%PDF-"));
    assert!(contains(&pdf, format!("/Count {pages}").as_bytes()));
}

#[test]
fn pdf_bytes_are_deterministic() {
    let record = common::sample_record();
    assert_eq!(render_pdf(&record), render_pdf(&record));
}

#[test]
fn html_has_one_container_per_surface_page() {
    let record = common::many_claimants_record(15);
    let pages = compose(&record).pages.len();
    let html = render_html(&record);
    assert_eq!(html.matches("<div class=\"page\">").count(), pages);
}

#[test]
fn html_escapes_markup_in_record_values() {
    let mut record = common::sample_record();
    record.claimants[0].name = Some("A & B <Pvt> Ltd".to_string());
    let html = render_html(&record);
    assert!(html.contains("A &amp; B &lt;Pvt&gt; Ltd"));
    assert!(!html.contains("<Pvt>"));
}

#[test]
fn encoders_agree_on_the_layout() {
    // Same surface goes to both encoders: the HTML preview must show every
    // page the PDF has, and vice versa.
    let record = common::sample_record();
    let surface = compose(&record);
    let pdf = render_pdf(&record);
    let html = render_html(&record);

    assert!(contains(&pdf, format!("/Count {}", surface.pages.len()).as_bytes()));
    assert_eq!(
        html.matches("<div class=\"page\">").count(),
        surface.pages.len(),
    );
}
