use super::common::*;
use crate::workflows::screening::domain::{
    AiSignal, ConservativeDefault, EmailSignal, LineType, PhoneSignal,
};
use crate::workflows::screening::scoring::{assess, RiskLevel, SignalKind};

fn ai(probability: u8) -> AiSignal {
    AiSignal {
        probability,
        reasoning: "test".to_string(),
    }
}

fn score_for(probability: u8) -> u8 {
    assess(&clean_email(), &mobile_phone(), &ai(probability)).score
}

#[test]
fn clean_candidate_scores_zero() {
    let verdict = assess(&clean_email(), &mobile_phone(), &ai(10));
    assert_eq!(verdict.score, 0);
    assert_eq!(verdict.level, RiskLevel::Low);
    assert!(verdict.components.is_empty());
}

#[test]
fn ai_breakpoints_are_exact() {
    assert_eq!(score_for(40), 0);
    assert_eq!(score_for(41), 25);
    assert_eq!(score_for(70), 25);
    assert_eq!(score_for(71), 45);
    assert_eq!(score_for(100), 45);
}

#[test]
fn invalid_or_disposable_email_adds_thirty() {
    let invalid = EmailSignal {
        valid_format: false,
        disposable: false,
    };
    let disposable = EmailSignal {
        valid_format: true,
        disposable: true,
    };

    for email in [invalid, disposable, EmailSignal::conservative()] {
        let verdict = assess(&email, &mobile_phone(), &ai(0));
        assert_eq!(verdict.score, 30);
        assert_eq!(verdict.components.len(), 1);
        assert_eq!(verdict.components[0].signal, SignalKind::Email);
    }
}

#[test]
fn invalid_or_voip_phone_adds_twenty_five() {
    let invalid = PhoneSignal {
        valid: false,
        line_type: LineType::Other,
    };

    for phone in [invalid, voip_phone(), PhoneSignal::conservative()] {
        let verdict = assess(&clean_email(), &phone, &ai(0));
        assert_eq!(verdict.score, 25);
        assert_eq!(verdict.components[0].signal, SignalKind::Phone);
    }
}

#[test]
fn valid_phone_with_unknown_line_type_adds_nothing() {
    let phone = PhoneSignal {
        valid: true,
        line_type: LineType::Unknown,
    };
    assert_eq!(assess(&clean_email(), &phone, &ai(0)).score, 0);
}

#[test]
fn sum_is_capped_once_at_one_hundred() {
    let verdict = assess(&EmailSignal::conservative(), &voip_phone(), &ai(95));
    assert_eq!(verdict.score, 100);
    assert_eq!(verdict.level, RiskLevel::Critical);

    let total: u16 = verdict
        .components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();
    assert_eq!(total, 100);
}

#[test]
fn level_boundaries_are_exact() {
    let cases = [
        (0, RiskLevel::Low),
        (39, RiskLevel::Low),
        (40, RiskLevel::Medium),
        (59, RiskLevel::Medium),
        (60, RiskLevel::High),
        (79, RiskLevel::High),
        (80, RiskLevel::Critical),
        (100, RiskLevel::Critical),
    ];

    for (score, level) in cases {
        assert_eq!(RiskLevel::from_score(score), level, "score {score}");
    }
}

#[test]
fn reachable_combinations_map_to_expected_levels() {
    // email + phone = 55
    let verdict = assess(&EmailSignal::conservative(), &voip_phone(), &ai(0));
    assert_eq!((verdict.score, verdict.level), (55, RiskLevel::Medium));

    // email + high ai = 75
    let verdict = assess(&EmailSignal::conservative(), &mobile_phone(), &ai(71));
    assert_eq!((verdict.score, verdict.level), (75, RiskLevel::High));

    // phone + high ai = 70
    let verdict = assess(&clean_email(), &voip_phone(), &ai(90));
    assert_eq!((verdict.score, verdict.level), (70, RiskLevel::High));

    // email + phone + elevated ai = 80
    let verdict = assess(&EmailSignal::conservative(), &voip_phone(), &ai(50));
    assert_eq!((verdict.score, verdict.level), (80, RiskLevel::Critical));
}

#[test]
fn score_never_decreases_as_signals_worsen() {
    let emails = [clean_email(), EmailSignal::conservative()];
    let phones = [mobile_phone(), voip_phone()];

    for email in &emails {
        for phone in &phones {
            let mut previous = 0;
            for probability in 0..=100 {
                let verdict = assess(email, phone, &ai(probability));
                assert!(verdict.score <= 100);
                assert!(verdict.score >= previous, "probability {probability}");
                previous = verdict.score;
            }
        }
    }

    for probability in [0, 50, 90] {
        let base = assess(&clean_email(), &mobile_phone(), &ai(probability)).score;
        let worse_email =
            assess(&EmailSignal::conservative(), &mobile_phone(), &ai(probability)).score;
        let worse_phone = assess(&clean_email(), &voip_phone(), &ai(probability)).score;
        assert!(worse_email >= base);
        assert!(worse_phone >= base);
    }
}

#[test]
fn levels_serialize_with_display_names() {
    assert_eq!(
        serde_json::to_value(RiskLevel::Critical).expect("serializes"),
        serde_json::json!("Critical")
    );
    assert_eq!(RiskLevel::Medium.label(), "Medium");
}
