#![allow(dead_code)] // each test binary uses a different subset

use agreement_pdf::{AgreementKind, AgreementRecord, Dispute, FinancialTerms, Party};

pub fn party(name: &str, guardian: &str, phone: &str) -> Party {
    Party {
        name: Some(name.to_string()),
        guardian_name: Some(guardian.to_string()),
        email: Some(format!("{}@example.in", name.to_lowercase().replace(' ', "."))),
        phone: Some(phone.to_string()),
        address: Some("14 MG Road, Bengaluru".to_string()),
        occupation: Some("Proprietor".to_string()),
    }
}

/// A filled-in arbitration record resembling real intake data.
pub fn sample_record() -> AgreementRecord {
    AgreementRecord {
        kind: AgreementKind::Arbitration,
        case_reference: Some("JF-ARB-2026-0142".to_string()),
        agreement_date: Some("2026-08-04".to_string()),
        place: Some("Bengaluru".to_string()),
        claimants: vec![
            party("Asha Rao", "K. Rao", "9845011111"),
            party("Vikram Shetty", "M. Shetty", "9845022222"),
        ],
        respondents: vec![party("Coastal Traders", "N/A", "9845033333")],
        dispute: Dispute {
            nature: Some("Non-payment of invoices for goods supplied".to_string()),
            category: Some("Commercial".to_string()),
            suit_value: Some(450000.0),
        },
        terms: FinancialTerms {
            sittings: Some(4),
            total_cost: Some(60000.0),
            compliance_days: Some(30),
        },
        arbitrators: vec!["Justice (Retd.) P. Menon".to_string(), "Adv. S. Iyer".to_string()],
        mediator: None,
        institute_representative: Some("R. Krishnan".to_string()),
    }
}

/// A record whose claimant list is long enough to force page breaks, with a
/// unique guardian and phone per entry so tests can follow individual cards.
pub fn many_claimants_record(count: usize) -> AgreementRecord {
    let mut record = sample_record();
    record.claimants = (0..count)
        .map(|i| {
            party(
                &format!("Claimant {}", i + 1),
                &format!("Guardian {}", i + 1),
                &format!("98450{:05}", i + 1),
            )
        })
        .collect();
    record
}

/// Every optional field absent.
pub fn empty_record() -> AgreementRecord {
    AgreementRecord::default()
}
