use serde::Deserialize;

/// Which agreement the record describes. Selects the recital and clause set
/// and the role shown in the third signature column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgreementKind {
    #[default]
    Arbitration,
    Mediation,
}

/// One party to the dispute. Every field is optional; absent values render
/// as the `N/A` placeholder rather than failing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Party {
    pub name: Option<String>,
    pub guardian_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub occupation: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Dispute {
    pub nature: Option<String>,
    pub category: Option<String>,
    pub suit_value: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FinancialTerms {
    /// Number of sittings agreed for the proceedings.
    pub sittings: Option<u32>,
    /// Total cost of the proceedings, borne equally unless agreed otherwise.
    pub total_cost: Option<f64>,
    /// Days allowed for complying with the award or settlement.
    pub compliance_days: Option<u32>,
}

/// The structured case record an agreement is generated from. Built by the
/// upstream intake flow and consumed read-only here; no validation is
/// performed beyond JSON shape.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgreementRecord {
    pub kind: AgreementKind,
    pub case_reference: Option<String>,
    /// ISO `yyyy-mm-dd`. Unparseable values render as an empty string.
    pub agreement_date: Option<String>,
    pub place: Option<String>,
    pub claimants: Vec<Party>,
    pub respondents: Vec<Party>,
    pub dispute: Dispute,
    pub terms: FinancialTerms,
    /// Appointed arbitrators, in panel order. Used by arbitration records.
    pub arbitrators: Vec<String>,
    /// Appointed mediator. Used by mediation records.
    pub mediator: Option<String>,
    pub institute_representative: Option<String>,
}

pub(crate) const PLACEHOLDER: &str = "N/A";

/// Display value for an optional field: the trimmed value, or `N/A`.
pub(crate) fn or_na(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim(),
        _ => PLACEHOLDER,
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// Format an ISO `yyyy-mm-dd` date in the long legal form used in the
/// agreement body, e.g. `4th day of August, 2026`. Unparseable input
/// renders as an empty string, never an error.
pub(crate) fn format_long_date(iso: &str) -> String {
    let mut parts = iso.trim().splitn(3, '-');
    let year = parts.next().and_then(|p| p.parse::<i32>().ok());
    let month = parts.next().and_then(|p| p.parse::<u32>().ok());
    let day = parts.next().and_then(|p| p.parse::<u32>().ok());
    match (year, month, day) {
        (Some(y), Some(m), Some(d)) if (1..=12).contains(&m) && (1..=31).contains(&d) => {
            format!("{} day of {}, {}", ordinal(d), MONTHS[(m - 1) as usize], y)
        }
        _ => String::new(),
    }
}

/// Format a monetary amount with Indian digit grouping, e.g. `Rs. 1,50,000`.
/// The rupee sign itself is outside WinAnsi, so the `Rs.` prefix keeps both
/// output formats showing identical text.
pub(crate) fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::new();
    let n = digits.len();
    if n <= 3 {
        grouped.push_str(&digits);
    } else {
        // Last three digits, then groups of two.
        let head = &digits[..n - 3];
        let tail = &digits[n - 3..];
        let mut head_groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let split = rest.len() - 2;
            head_groups.push(&rest[split..]);
            rest = &rest[..split];
        }
        head_groups.push(rest);
        for part in head_groups.iter().rev() {
            grouped.push_str(part);
            grouped.push(',');
        }
        grouped.push_str(tail);
    }
    let sign = if negative { "-" } else { "" };
    format!("Rs. {sign}{grouped}")
}

/// Amount display for an optional value, with the shared placeholder.
pub(crate) fn amount_or_na(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub(crate) fn count_or_na(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_formats_valid_input() {
        assert_eq!(format_long_date("2026-08-04"), "4th day of August, 2026");
        assert_eq!(format_long_date("2025-01-21"), "21st day of January, 2025");
        assert_eq!(format_long_date("2025-03-12"), "12th day of March, 2025");
    }

    #[test]
    fn long_date_is_empty_for_garbage() {
        assert_eq!(format_long_date(""), "");
        assert_eq!(format_long_date("yesterday"), "");
        assert_eq!(format_long_date("2026-13-01"), "");
        assert_eq!(format_long_date("2026-00-10"), "");
    }

    #[test]
    fn amounts_use_indian_grouping() {
        assert_eq!(format_amount(500.0), "Rs. 500");
        assert_eq!(format_amount(1500.0), "Rs. 1,500");
        assert_eq!(format_amount(150000.0), "Rs. 1,50,000");
        assert_eq!(format_amount(12345678.0), "Rs. 1,23,45,678");
    }

    #[test]
    fn missing_fields_fall_back_to_placeholder() {
        assert_eq!(or_na(&None), "N/A");
        assert_eq!(or_na(&Some("  ".to_string())), "N/A");
        assert_eq!(or_na(&Some(" Asha Rao ".to_string())), "Asha Rao");
    }

    #[test]
    fn record_deserializes_with_all_fields_absent() {
        let record: AgreementRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.kind, AgreementKind::Arbitration);
        assert!(record.claimants.is_empty());
        assert!(record.dispute.suit_value.is_none());
    }
}
