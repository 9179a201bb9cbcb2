//! Question metadata used by front ends to render the survey.
//!
//! The classifiers never consult these lists; they exist so that a caller can
//! show the prompt and help text next to each input.

use serde::Serialize;

/// One survey question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Answer-record field this question fills.
    pub id: &'static str,
    pub prompt: &'static str,
    pub help: &'static str,
}

pub static HISTORICAL_QUESTIONS: [Question; 6] = [
    Question {
        id: "indigenous_lineage",
        prompt: "Do you have Indigenous lineage tied to this land (citizenship/membership/kinship recognized by the nation/community)?",
        help: "Affiliation may include citizenship or community-recognized kinship with the Indigenous nation.",
    },
    Question {
        id: "enslaved_or_forced",
        prompt: "Were your ancestors enslaved, indentured under coercive terms, or forcibly transported?",
        help: "Forced migration is treated as a distinct category.",
    },
    Question {
        id: "arrived_during_colonial",
        prompt: "Did direct ancestors arrive during an active colonial period (settlement, land seizure, foreign rule)?",
        help: "Example (US mainland British settler colonization): ~1607-1776; ranges vary by region.",
    },
    Question {
        id: "direct_participation",
        prompt: "Did those ancestors materially enable or enforce colonization (land grants, militia, administration, capital)?",
        help: "Participation/enrichment counts even if arrival timing is uncertain.",
    },
    Question {
        id: "post_entrenchment",
        prompt: "If arrival was later, did it occur only after independence or after colonial structures were fully entrenched?",
        help: "E.g., immigrated to an already-formed settler state.",
    },
    Question {
        id: "origin_colonized_after_left",
        prompt: "Did the origin country start its own external colonization only after your ancestors had emigrated?",
        help: "If colonization began later, the lineage is not implicated in those ventures.",
    },
];

pub static WOKE_QUESTIONS: [Question; 7] = [
    Question {
        id: "wealth_extractive",
        prompt: "W1. Source of (family) wealth",
        help: "Any meaningful inherited wealth or current income from property speculation/rent extraction, land grants, or resource rights (oil/mining/water/forestry)?",
    },
    Question {
        id: "role_extractive",
        prompt: "W2. Direct role in extractive institutions",
        help: "You/parents/grandparents in decision-making/profit roles in lending, large-scale development, landlord portfolios, resource extraction, or insurance underwriting?",
    },
    Question {
        id: "constrained",
        prompt: "W3. Participant under constraint",
        help: "Paycheck-to-paycheck, no significant inheritance, heavy housing/medical/insurance/credit burdens?",
    },
    Question {
        id: "compelled_lineage",
        prompt: "W4. Compelled lineage",
        help: "Lineage arrived due to enslavement, indenture, famine/genocide, or comparable survival duress?",
    },
    Question {
        id: "no_benefit_from_settlers",
        prompt: "W5. Founding ancestors without benefit",
        help: "Ancestor settlers/officials but no land/wealth benefit reached your line (lost, confiscated, or never inherited)?",
    },
    Question {
        id: "infra2",
        prompt: "W6. Infrastructure 2.0 (0 = oppose .. 4 = strongly support)",
        help: "Support decoupling housing/food/energy from private land ownership (vertical farms, stacked fabrication, commons utilities) to return significant land to wildlife?",
    },
    Question {
        id: "migration_motive",
        prompt: "W7. Migration motive (if immigrant): opportunity, mixed, survival, unknown",
        help: "If you immigrated (or your parents did), was entry mainly elective for financial opportunity, mixed, or driven by survival needs (war, famine, persecution, climate)?",
    },
];

/// Looks a question up by id across both lists.
pub fn find(id: &str) -> Option<&'static Question> {
    HISTORICAL_QUESTIONS
        .iter()
        .chain(WOKE_QUESTIONS.iter())
        .find(|q| q.id == id)
}
