use super::*;

fn roster() -> Roster {
    Roster::from_json_str(
        r#"[
            {"name":"Pika","id":"p1"},
            {"name":"ライチュウ","id":26},
            {"name":"リザードン","id":"charizard"}
        ]"#,
    )
    .unwrap()
}

fn row(name: &str, move_type: &str, category: &str, power: &str, targets: &str) -> Row {
    Row::from_pairs(&[
        ("わざ名", name),
        ("タイプ", move_type),
        ("ぶんるい", category),
        ("いりょく", power),
        ("配布対象", targets),
    ])
}

fn transform(row: &Row) -> RowOutcome {
    let roster = roster();
    let columns = ColumnLabels::default();
    Converter::new(&roster, &columns).transform(row)
}

#[test]
fn thunderbolt_round_trip() {
    let outcome = transform(&row("Thunderbolt", "でんき", "特殊", "90", "Pika"));
    let record = outcome.record().unwrap();
    assert_eq!(
        serde_json::to_string(record).unwrap(),
        r#"{"id":"Thunderbolt","name":"Thunderbolt","type":"electric","category":"special","power":90,"targets":["p1"]}"#
    );
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn unknown_target_is_dropped_with_diagnostic() {
    let outcome = transform(&row("Thunderbolt", "でんき", "特殊", "90", "Mewtwo99"));
    let record = outcome.record().unwrap();
    assert!(record.targets.is_empty());

    let diags = outcome.diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].contains("Mewtwo99"));
    assert!(diags[0].contains("Thunderbolt"));
}

#[test]
fn targets_keep_order_and_duplicates() {
    let outcome = transform(&row(
        "かみなり",
        "でんき",
        "特殊",
        "110",
        "ライチュウ、 Pika、\nだれか、\tライチュウ、、",
    ));
    let RowOutcome::Emit { record, unresolved } = outcome else {
        panic!("expected a record");
    };
    assert_eq!(
        record.targets,
        vec![EntityId::from(26), EntityId::from("p1"), EntityId::from(26)]
    );
    assert_eq!(unresolved, vec!["だれか".to_string()]);
}

#[test]
fn blank_name_is_skipped_silently() {
    let outcome = transform(&row("", "でんき", "特殊", "90", "Pika"));
    assert_eq!(outcome, RowOutcome::Skip(SkipReason::Blank));
    assert!(outcome.diagnostics().is_empty());

    let missing = Row::from_pairs(&[("タイプ", "でんき")]);
    assert_eq!(transform(&missing), RowOutcome::Skip(SkipReason::Blank));
}

#[test]
fn legacy_not_implemented_is_skipped_silently() {
    let legacy = Row::from_pairs(&[
        ("実装済み？", "未"),
        ("わざ名", "たいあたり"),
        ("タイプ", "ノーマル"),
        ("ぶんるい", "物理"),
        ("いりょく", "40"),
        ("配布対象", ""),
    ]);
    let outcome = transform(&legacy);
    assert!(matches!(outcome, RowOutcome::Skip(SkipReason::NotImplemented { .. })));
    assert!(outcome.diagnostics().is_empty());

    let implemented = Row::from_pairs(&[
        ("実装済み？", "済"),
        ("わざ名", "たいあたり"),
        ("タイプ", "ノーマル"),
        ("ぶんるい", "物理"),
        ("いりょく", "40"),
        ("配布対象", ""),
    ]);
    assert!(transform(&implemented).record().is_some());
}

#[test]
fn unknown_type_reports_move_and_label() {
    let outcome = transform(&row("シャドーボール", "ゴースト?", "特殊", "80", ""));
    assert_eq!(
        outcome,
        RowOutcome::Skip(SkipReason::UnknownType {
            name: "シャドーボール".to_string(),
            label: "ゴースト?".to_string(),
        })
    );
    let diags = outcome.diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].contains("シャドーボール"));
    assert!(diags[0].contains("ゴースト?"));
}

#[test]
fn unknown_category_reports_move_and_label() {
    let outcome = transform(&row("なみのり", "みず", "ぶつり", "90", ""));
    let diags = outcome.diagnostics();
    assert!(matches!(outcome, RowOutcome::Skip(SkipReason::UnknownCategory { .. })));
    assert_eq!(diags.len(), 1);
    assert!(diags[0].contains("なみのり"));
    assert!(diags[0].contains("ぶつり"));
}

#[test]
fn type_is_checked_before_category() {
    let outcome = transform(&row("なにか", "???", "???", "90", ""));
    assert!(matches!(outcome, RowOutcome::Skip(SkipReason::UnknownType { .. })));
    assert_eq!(outcome.diagnostics().len(), 1);
}

#[test]
fn status_moves_are_skipped_silently() {
    let outcome = transform(&row("でんじは", "でんき", "変化", "-", "Pika"));
    assert_eq!(
        outcome,
        RowOutcome::Skip(SkipReason::Status {
            name: "でんじは".to_string()
        })
    );
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn moves_without_power_are_skipped_silently() {
    for power in ["", "-", "0", "-20"] {
        let outcome = transform(&row("カウンター", "かくとう", "物理", power, ""));
        assert!(
            matches!(outcome, RowOutcome::Skip(SkipReason::NoPower { .. })),
            "power {power:?}"
        );
        assert!(outcome.diagnostics().is_empty());
    }

    let missing = Row::from_pairs(&[("わざ名", "カウンター"), ("タイプ", "かくとう"), ("ぶんるい", "物理")]);
    assert!(matches!(
        transform(&missing),
        RowOutcome::Skip(SkipReason::NoPower { .. })
    ));
}

#[test]
fn unparseable_power_is_reported_and_skipped() {
    let outcome = transform(&row("れんぞくぎり", "むし", "物理", "40~160", ""));
    assert_eq!(
        outcome,
        RowOutcome::Skip(SkipReason::InvalidPower {
            name: "れんぞくぎり".to_string(),
            raw: "40~160".to_string(),
        })
    );
    let diags = outcome.diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].contains("40~160"));
}

#[test]
fn padded_power_parses() {
    let outcome = transform(&row("たいあたり", "ノーマル", "物理", " 40 ", ""));
    assert_eq!(outcome.record().unwrap().power, 40);
}

#[test]
fn parse_power_cases() {
    assert_eq!(parse_power(None), Ok(None));
    assert_eq!(parse_power(Some("")), Ok(None));
    assert_eq!(parse_power(Some("-")), Ok(None));
    assert_eq!(parse_power(Some("120")), Ok(Some(120)));
    assert_eq!(parse_power(Some("+5")), Ok(Some(5)));
    assert!(parse_power(Some("abc")).is_err());
    assert!(parse_power(Some(" - ")).is_err());
    assert_eq!(parse_power(Some("９０")), Ok(Some(90)));
    assert_eq!(parse_power(Some("\u{3000}１２０\u{3000}")), Ok(Some(120)));
    assert!(parse_power(Some("９O")).is_err());
}

#[test]
fn full_width_power_parses() {
    let outcome = transform(&row("Thunderbolt", "でんき", "特殊", "９０", "Pika"));
    let record = outcome.record().unwrap();
    assert_eq!(record.power, 90);
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn power_beyond_u32_is_reported() {
    let raw = (u64::from(u32::MAX) + 1).to_string();
    let outcome = transform(&row("はかいこうせん", "ノーマル", "特殊", &raw, ""));
    assert_eq!(
        outcome,
        RowOutcome::Skip(SkipReason::InvalidPower {
            name: "はかいこうせん".to_string(),
            raw,
        })
    );
    assert_eq!(outcome.diagnostics().len(), 1);
}

#[test]
fn split_targets_strips_whitespace() {
    assert_eq!(
        split_targets(" ピカ チュウ、\nライチュウ\t、"),
        vec!["ピカチュウ".to_string(), "ライチュウ".to_string()]
    );
    assert!(split_targets("").is_empty());
    assert!(split_targets("、 、\n").is_empty());
}

#[test]
fn custom_columns_are_honoured() {
    let roster = roster();
    let columns = ColumnLabels {
        name: "move".to_string(),
        move_type: "type".to_string(),
        category: "class".to_string(),
        power: "bp".to_string(),
        targets: "learners".to_string(),
        implemented: "done".to_string(),
    };
    let row = Row::from_pairs(&[
        ("move", "Flamethrower"),
        ("type", "ほのお"),
        ("class", "特殊"),
        ("bp", "90"),
        ("learners", "リザードン"),
    ]);
    let outcome = Converter::new(&roster, &columns).transform(&row);
    let record = outcome.record().unwrap();
    assert_eq!(record.move_type, MoveType::Fire);
    assert_eq!(record.targets, vec![EntityId::from("charizard")]);
}
