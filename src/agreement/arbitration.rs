//! Arbitration agreement: recitals, operative clauses and signature roles.

use crate::layout::{Cursor, Surface};
use crate::model::{AgreementRecord, amount_or_na, count_or_na, or_na};

use super::{
    first_name_card, footer, neutral_card, numbered_clauses, party_block, recital_paragraphs,
    schedule_table, section_heading, signature_block, title_block,
};

pub(super) fn compose_into(surface: &mut Surface, cursor: &mut Cursor, record: &AgreementRecord) {
    title_block(surface, cursor, "ARBITRATION AGREEMENT", record);
    party_block(surface, cursor, record, "Claimant(s)", "Respondent(s)");

    section_heading(surface, cursor, "RECITALS");
    recital_paragraphs(surface, cursor, &recitals(record));

    section_heading(surface, cursor, "TERMS OF ARBITRATION");
    numbered_clauses(surface, cursor, &clauses(record));

    let cards = [
        first_name_card(&record.claimants, "Claimant(s)"),
        first_name_card(&record.respondents, "Respondent(s)"),
        neutral_card(record),
    ];
    signature_block(
        surface,
        cursor,
        "IN WITNESS WHEREOF the parties and the arbitral tribunal have set their hands on the \
         date first written above.",
        &cards,
    );

    schedule_table(surface, cursor, record);
    footer(surface, cursor, record);
}

fn recitals(record: &AgreementRecord) -> Vec<String> {
    let nature = or_na(&record.dispute.nature);
    let category = or_na(&record.dispute.category);
    let value = amount_or_na(record.dispute.suit_value);
    vec![
        format!(
            "WHEREAS disputes and differences have arisen between the parties in relation to \
             {nature}, being a matter falling within the category of {category};"
        ),
        format!(
            "AND WHEREAS the value of the claim in dispute has been assessed by the parties at \
             {value};"
        ),
        "AND WHEREAS the parties are desirous of resolving the said disputes by arbitration and \
         of recording the terms on which the reference is made;"
            .to_string(),
        "NOW, THEREFORE, the parties agree as follows:".to_string(),
    ]
}

fn clauses(record: &AgreementRecord) -> Vec<String> {
    let place = or_na(&record.place);
    let sittings = count_or_na(record.terms.sittings);
    let cost = amount_or_na(record.terms.total_cost);
    let days = count_or_na(record.terms.compliance_days);

    let tribunal = if record.arbitrators.is_empty() {
        "The arbitral tribunal shall consist of a sole arbitrator to be nominated by the \
         Institute, and the parties waive any objection to an appointment so made."
            .to_string()
    } else {
        let n = record.arbitrators.len();
        format!(
            "The arbitral tribunal shall consist of {n} arbitrator{}, namely {}, whose \
             appointment the parties hereby confirm.",
            if n == 1 { "" } else { "s" },
            record.arbitrators.join(", "),
        )
    };

    vec![
        "The parties hereby refer all disputes and differences described in the recitals to \
         final and binding arbitration administered by the Institute, and agree that the award \
         rendered shall be conclusive between them."
            .to_string(),
        tribunal,
        format!(
            "The seat of the arbitration shall be {place} and the proceedings shall be \
             conducted in the English language; sittings may be held in person or through \
             electronic means as the tribunal directs."
        ),
        format!(
            "The reference shall be completed in {sittings} sittings unless the tribunal, for \
             reasons recorded in writing, extends the number of sittings with the consent of \
             the parties."
        ),
        format!(
            "The total cost of the proceedings is fixed at {cost} and shall be borne by the \
             parties in equal shares unless the tribunal apportions it otherwise in the award."
        ),
        format!(
            "The parties shall comply with the award within {days} days of its pronouncement, \
             failing which the award may be enforced in the same manner as a decree."
        ),
        "The parties and the tribunal shall keep the proceedings, the pleadings and the award \
         confidential, save where disclosure is required for enforcement or by law."
            .to_string(),
        "This agreement and the arbitration shall be governed by the law in force at the seat \
         of arbitration."
            .to_string(),
    ]
}
