use super::{HistoricalAnswers, HistoricalCode, HistoricalField, HistoricalResult};
use crate::answer::Tri;

/// Classifies a historical answer record.
///
/// Total over every combination of answers, unset fields included.
///
/// # Examples
///
/// ```
/// use lineage_map::{classify_historical, HistoricalAnswers, HistoricalCode, Tri};
///
/// let answers = HistoricalAnswers {
///     arrived_during_colonial: Some(Tri::Yes),
///     ..Default::default()
/// };
/// assert_eq!(classify_historical(&answers).code, HistoricalCode::ColonizerFoundational);
/// ```
pub fn classify_historical(answers: &HistoricalAnswers) -> HistoricalResult {
    HistoricalResult::from(historical_code(answers))
}

/// Precedence chain behind [`classify_historical`]; the first matching rule wins.
///
/// Forced migration and Indigenous lineage sit outside the colonizer/immigrant
/// axis and short-circuit everything below them. When arrival during the
/// colonial period is confirmed, unknown participation is read as
/// participation. A record answering yes to both forced migration and
/// Indigenous lineage resolves to [`HistoricalCode::Forced`].
pub fn historical_code(answers: &HistoricalAnswers) -> HistoricalCode {
    use HistoricalField as F;

    if answers.get(F::EnslavedOrForced).is_yes() {
        return HistoricalCode::Forced;
    }
    if answers.get(F::IndigenousLineage).is_yes() {
        return HistoricalCode::Indigenous;
    }

    let arrived = answers.get(F::ArrivedDuringColonial).is_yes();
    let participation = answers.get(F::DirectParticipation);

    match (arrived, participation) {
        (true, Tri::Yes | Tri::Unknown) => return HistoricalCode::ColonizerFoundational,
        (true, Tri::No) => return HistoricalCode::ColonizerArrival,
        (false, Tri::Yes) => return HistoricalCode::ColonizerParticipatory,
        (false, _) => {}
    }

    if answers.get(F::PostEntrenchment).is_yes() {
        HistoricalCode::ImmigrantEntrenched
    } else if answers.get(F::OriginColonizedAfterLeft).is_yes() {
        HistoricalCode::ImmigrantOriginLater
    } else {
        HistoricalCode::Inconclusive
    }
}
