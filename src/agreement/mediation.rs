//! Mediation agreement: recitals, clauses and signature roles.

use crate::layout::{Cursor, Surface};
use crate::model::{AgreementRecord, amount_or_na, count_or_na, or_na};

use super::{
    first_name_card, footer, neutral_card, numbered_clauses, party_block, recital_paragraphs,
    schedule_table, section_heading, signature_block, title_block,
};

pub(super) fn compose_into(surface: &mut Surface, cursor: &mut Cursor, record: &AgreementRecord) {
    title_block(surface, cursor, "MEDIATION AGREEMENT", record);
    party_block(surface, cursor, record, "First Party", "Second Party");

    section_heading(surface, cursor, "RECITALS");
    recital_paragraphs(surface, cursor, &recitals(record));

    section_heading(surface, cursor, "TERMS OF MEDIATION");
    numbered_clauses(surface, cursor, &clauses(record));

    let cards = [
        first_name_card(&record.claimants, "First Party"),
        first_name_card(&record.respondents, "Second Party"),
        neutral_card(record),
    ];
    signature_block(
        surface,
        cursor,
        "IN WITNESS WHEREOF the parties have entered into this mediation agreement on the date \
         first written above.",
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
        "AND WHEREAS the parties wish to attempt in good faith to resolve the said disputes \
         amicably through mediation before resorting to any other forum;"
            .to_string(),
        "NOW, THEREFORE, the parties agree as follows:".to_string(),
    ]
}

fn clauses(record: &AgreementRecord) -> Vec<String> {
    let place = or_na(&record.place);
    let sittings = count_or_na(record.terms.sittings);
    let cost = amount_or_na(record.terms.total_cost);
    let days = count_or_na(record.terms.compliance_days);

    let mediator = match &record.mediator {
        Some(name) if !name.trim().is_empty() => format!(
            "The parties appoint {} as the mediator. The mediator shall act as a neutral \
             facilitator and shall not impose a decision upon the parties.",
            name.trim(),
        ),
        _ => "A mediator nominated by the Institute shall conduct the proceedings as a neutral \
              facilitator and shall not impose a decision upon the parties."
            .to_string(),
    };

    vec![
        "The parties voluntarily submit the disputes described in the recitals to mediation \
         administered by the Institute, and shall participate in the sessions in good faith."
            .to_string(),
        mediator,
        format!(
            "The mediation shall be conducted at {place}; sessions may also be held through \
             electronic means with the consent of both parties."
        ),
        "The mediation is a without-prejudice proceeding. No statement, admission or document \
         produced in it shall be relied upon in any other proceeding, and the mediator shall \
         not be called as a witness in respect of it."
            .to_string(),
        format!(
            "The mediation shall be completed in {sittings} sittings unless the parties \
             jointly request the Institute to extend it."
        ),
        format!(
            "The total cost of the mediation is fixed at {cost} and shall be shared equally \
             between the parties irrespective of the outcome."
        ),
        format!(
            "Any settlement reached shall be reduced to writing and signed by both parties, \
             whereupon it shall bind them and shall be complied with within {days} days of \
             signature."
        ),
        "Either party, or the mediator, may terminate the mediation at any stage by written \
         notice; termination is without prejudice to the parties' other remedies."
            .to_string(),
    ]
}
