// Exhaustive checks of both classifiers over their full input domains.

use lineage_map::export::{historical_domain, woke_domain};
use lineage_map::{
    classify_historical, score_woke, HistoricalAnswers, HistoricalCode, HistoricalField, Motive,
    Stance, Tri, WokeAnswers, WokeCode,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// Every combination with each field either answered or left unset.
fn historical_with_unset() -> Vec<HistoricalAnswers> {
    let mut out = vec![HistoricalAnswers::default()];
    for field in HistoricalField::ALL {
        out = out
            .into_iter()
            .flat_map(|a| {
                let mut unset = a;
                unset.clear(field);
                Tri::ALL
                    .into_iter()
                    .map(move |t| a.with(field, t))
                    .chain(std::iter::once(unset))
            })
            .collect();
    }
    out
}

#[test]
fn historical_is_total_and_deterministic() {
    let all: Vec<_> = historical_domain().collect();
    assert_eq!(all.len(), 729);
    for a in &all {
        assert_eq!(classify_historical(a), classify_historical(a));
    }
    // 4^6 records once unset is included.
    assert_eq!(historical_with_unset().len(), 4096);
    for a in historical_with_unset() {
        classify_historical(&a);
    }
}

#[test]
fn woke_is_total_and_deterministic() {
    let all: Vec<_> = woke_domain().collect();
    assert_eq!(all.len(), 4860);
    for a in &all {
        assert_eq!(score_woke(a), score_woke(a));
    }
}

#[test]
fn forced_overrides_all() {
    for a in historical_domain() {
        let r = classify_historical(&a.with(HistoricalField::EnslavedOrForced, Tri::Yes));
        assert_eq!(r.code, HistoricalCode::Forced, "{a:?}");
    }
}

#[test]
fn indigenous_overrides_all_except_forced() {
    for a in historical_domain().filter(|a| a.get(HistoricalField::EnslavedOrForced) != Tri::Yes) {
        let r = classify_historical(&a.with(HistoricalField::IndigenousLineage, Tri::Yes));
        assert_eq!(r.code, HistoricalCode::Indigenous, "{a:?}");
    }
}

#[test]
fn every_code_is_reachable() {
    let hist: HashSet<_> = historical_domain()
        .map(|a| classify_historical(&a).code)
        .collect();
    assert_eq!(hist.len(), HistoricalCode::ALL.len());

    let woke: HashSet<_> = woke_domain().map(|a| score_woke(&a).code).collect();
    assert_eq!(woke.len(), WokeCode::ALL.len());
}

#[test]
fn unknown_participation_asymmetry() {
    let base = HistoricalAnswers {
        indigenous_lineage: Some(Tri::No),
        enslaved_or_forced: Some(Tri::No),
        arrived_during_colonial: Some(Tri::Yes),
        post_entrenchment: Some(Tri::No),
        origin_colonized_after_left: Some(Tri::No),
        ..Default::default()
    };
    let unknown = base.with(HistoricalField::DirectParticipation, Tri::Unknown);
    let no = base.with(HistoricalField::DirectParticipation, Tri::No);

    assert_eq!(classify_historical(&unknown).code, HistoricalCode::ColonizerFoundational);
    assert_eq!(classify_historical(&no).code, HistoricalCode::ColonizerArrival);
}

fn woke_record(wealth: Tri, motive: Motive) -> WokeAnswers {
    WokeAnswers {
        wealth_extractive: Some(wealth),
        role_extractive: Some(Tri::No),
        constrained: Some(Tri::No),
        compelled_lineage: Some(Tri::No),
        no_benefit_from_settlers: Some(Tri::No),
        migration_motive: Some(motive),
        infra2: Some(Stance::clamped(2)),
    }
}

#[test]
fn motive_red_flag() {
    let r = score_woke(&woke_record(Tri::Yes, Motive::Opportunity));
    assert_eq!(r.code, WokeCode::Exploiter);
    assert!(r.flags.motive_colonizer);
}

#[test]
fn motive_only_badge() {
    let r = score_woke(&woke_record(Tri::No, Motive::Opportunity));
    assert!(matches!(r.code, WokeCode::Beneficiary | WokeCode::Participant));
    if r.code == WokeCode::Beneficiary {
        assert!(r.flags.motive_only_flag);
    }
}

#[test]
fn clamp_boundaries() {
    let low = WokeAnswers {
        constrained: Some(Tri::Yes),
        compelled_lineage: Some(Tri::Yes),
        no_benefit_from_settlers: Some(Tri::Yes),
        migration_motive: Some(Motive::Survival),
        ..Default::default()
    };
    assert_eq!(score_woke(&low).benefit, -4);

    for a in woke_domain() {
        let b = score_woke(&a).benefit;
        assert!((-4..=6).contains(&b), "{a:?} gave {b}");
    }
    assert!(woke_domain().any(|a| score_woke(&a).benefit == 6));
    assert!(woke_domain().any(|a| score_woke(&a).benefit == -4));
}

#[test]
fn flags_are_consistent_with_code() {
    for a in woke_domain() {
        let r = score_woke(&a);
        if r.flags.motive_colonizer {
            assert_eq!(r.code, WokeCode::Exploiter, "{a:?}");
        }
        if r.flags.motive_only_flag {
            assert_eq!(r.code, WokeCode::Beneficiary, "{a:?}");
        }
        if r.code != WokeCode::Exploiter {
            assert!(!r.flags.motive_colonizer);
        }
    }
}

#[test]
fn unset_woke_fields_use_defaults() {
    let r = score_woke(&WokeAnswers::default());
    assert_eq!(r.transformation, 2);
    assert_eq!(r.benefit, 0);
    assert_eq!(r.code, WokeCode::Participant);
}
