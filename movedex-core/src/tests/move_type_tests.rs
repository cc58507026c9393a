use super::*;

#[test]
fn all_has_18_variants() {
    assert_eq!(MoveType::all().len(), 18);
}

#[test]
fn every_label_translates_back() {
    for &t in MoveType::all() {
        assert_eq!(
            MoveType::from_label(t.label()),
            Some(t),
            "label lookup failed for {:?}",
            t
        );
    }
}

#[test]
fn labels_are_unique() {
    let mut labels: Vec<&str> = MoveType::all().iter().map(|t| t.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 18);
}

#[test]
fn sample_labels() {
    let cases = [
        ("でんき", MoveType::Electric),
        ("ほのお", MoveType::Fire),
        ("エスパー", MoveType::Psychic),
        ("フェアリー", MoveType::Fairy),
        ("あく", MoveType::Dark),
    ];
    for (label, expected) in cases {
        assert_eq!(MoveType::from_label(label), Some(expected), "label: {label}");
    }
}

#[test]
fn english_code_is_not_a_label() {
    assert_eq!(MoveType::from_label("electric"), None);
    assert_eq!(MoveType::from_label("でんき "), None);
    assert_eq!(MoveType::from_label(""), None);
}

#[test]
fn codes_parse_case_insensitively() {
    for &t in MoveType::all() {
        let parsed: MoveType = t.code().parse().unwrap();
        assert_eq!(parsed, t);
    }
    assert_eq!("STEEL".parse::<MoveType>().unwrap(), MoveType::Steel);
}

#[test]
fn unknown_code_errors() {
    let err = "shadow".parse::<MoveType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown move type: 'shadow'");
}

#[test]
fn serde_uses_code() {
    assert_eq!(serde_json::to_string(&MoveType::Ground).unwrap(), "\"ground\"");
    let t: MoveType = serde_json::from_str("\"flying\"").unwrap();
    assert_eq!(t, MoveType::Flying);
}
