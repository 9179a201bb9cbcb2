use super::{WokeAnswers, WokeCode, WokeField, WokeFlags, WokeResult};
use crate::answer::Motive;

const BENEFIT_MIN: i32 = -4;
const BENEFIT_MAX: i32 = 6;

const EXPLOITER_MIN_BENEFIT: i32 = 3;
const EXPLOITER_MAX_STANCE: u8 = 1;
const BENEFICIARY_MIN_BENEFIT: i32 = 2;
const COMPELLED_MAX_BENEFIT: i32 = -2;

/// Unclamped benefit/extraction sum. Every condition contributes
/// independently.
pub fn raw_benefit_score(answers: &WokeAnswers) -> i32 {
    use WokeField as F;

    let tri_deltas = [
        (F::WealthExtractive, 2),
        (F::RoleExtractive, 2),
        (F::Constrained, -2),
        (F::CompelledLineage, -2),
        (F::NoBenefitFromSettlers, -1),
    ];
    let answered: i32 = tri_deltas
        .iter()
        .filter(|(field, _)| answers.get(*field).is_yes())
        .map(|(_, delta)| delta)
        .sum();

    let motive = match answers.motive() {
        Motive::Opportunity => 2,
        Motive::Survival => -2,
        Motive::Mixed => -1,
        Motive::Unknown => 0,
    };

    answered + motive
}

/// Benefit score `B`, clamped to `[-4, 6]`.
///
/// ```
/// use lineage_map::{benefit_score, Motive, Tri, WokeAnswers};
///
/// let a = WokeAnswers {
///     constrained: Some(Tri::Yes),
///     compelled_lineage: Some(Tri::Yes),
///     no_benefit_from_settlers: Some(Tri::Yes),
///     migration_motive: Some(Motive::Survival),
///     ..Default::default()
/// };
/// assert_eq!(benefit_score(&a), -4);
/// ```
pub fn benefit_score(answers: &WokeAnswers) -> i32 {
    raw_benefit_score(answers).clamp(BENEFIT_MIN, BENEFIT_MAX)
}

/// Elective migration for advantage combined with any extractive wealth or
/// role. Overrides the numeric score.
pub fn is_motive_colonizer(answers: &WokeAnswers) -> bool {
    answers.motive() == Motive::Opportunity && has_extractive_benefit(answers)
}

fn has_extractive_benefit(answers: &WokeAnswers) -> bool {
    answers.get(WokeField::WealthExtractive).is_yes()
        || answers.get(WokeField::RoleExtractive).is_yes()
}

/// Scores a woke answer record.
///
/// Total over every combination of answers. The first matching tier wins:
/// exploiter (motive override, or high benefit with low transformation
/// support), beneficiary, compelled, participant.
pub fn score_woke(answers: &WokeAnswers) -> WokeResult {
    let benefit = benefit_score(answers);
    let transformation = answers.stance().value();
    let motive_colonizer = is_motive_colonizer(answers);

    let (code, explanation, flags) = if motive_colonizer {
        (
            WokeCode::Exploiter,
            "Elective migration for financial advantage combined with extractive wealth or role.",
            WokeFlags {
                motive_colonizer,
                motive_only_flag: false,
            },
        )
    } else if benefit >= EXPLOITER_MIN_BENEFIT && transformation <= EXPLOITER_MAX_STANCE {
        (
            WokeCode::Exploiter,
            "High extractive benefit with low support for transforming the system.",
            WokeFlags::default(),
        )
    } else if benefit >= BENEFICIARY_MIN_BENEFIT {
        let motive_only_flag =
            answers.motive() == Motive::Opportunity && !has_extractive_benefit(answers);
        (
            WokeCode::Beneficiary,
            "Material benefits derive from property/extraction; consider supporting transformation.",
            WokeFlags {
                motive_colonizer: false,
                motive_only_flag,
            },
        )
    } else if benefit <= COMPELLED_MAX_BENEFIT {
        (
            WokeCode::Compelled,
            "Participation under historical disadvantage or survival constraints.",
            WokeFlags::default(),
        )
    } else {
        (
            WokeCode::Participant,
            "Surviving inside the system without extractive benefit is not colonization.",
            WokeFlags::default(),
        )
    };

    WokeResult {
        code,
        label: code.label(),
        explanation,
        tone: code.tone(),
        benefit,
        transformation,
        flags,
    }
}
