use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movedex_core::{DamageInput, DamageResult, MoveRecord, calc_damage, ko_chance};
use movedex_import::{ConvertOptions, PathOverrides, discover_config, load_config, load_moves};

use crate::cli_types::DamageArgs;
use crate::error::CliError;

/// Look up a move in the moves JSON and print its damage range against one defender.
pub(crate) fn run_damage(
    root: &Path,
    config_path: Option<&Path>,
    args: DamageArgs,
) -> Result<(), CliError> {
    let moves_path = match args.moves.clone() {
        Some(path) => path,
        None => {
            let config = match config_path {
                Some(path) => Some(load_config(path)?),
                None => discover_config(root)?,
            };
            ConvertOptions::resolve(root, config.as_ref(), PathOverrides::default(), false)
                .output_path
        }
    };

    let moves = load_moves(&moves_path)?;
    let record = moves
        .iter()
        .find(|m| m.name == args.name)
        .ok_or_else(|| CliError::UnknownMove {
            name: args.name.clone(),
            path: moves_path.display().to_string(),
        })?;

    let input = damage_input(record, &args);
    let result = calc_damage(&input);
    log::debug!("{} rolls: {:?}", record.name, result.rolls);

    println!(
        "{} ({}, {}, power {})",
        record.name.if_supports_color(Stdout, |t| t.bold()),
        record.move_type,
        record.category,
        record.power,
    );
    for line in result_lines(&result, &args) {
        println!("  {line}");
    }

    Ok(())
}

fn damage_input(record: &MoveRecord, args: &DamageArgs) -> DamageInput {
    DamageInput {
        level: args.level,
        power: record.power,
        attack: args.attack,
        defense: args.defense,
        move_type: record.move_type,
        attacker_types: args.attacker_types.clone(),
        defender_types: args.defender_types.clone(),
        defender_hp: args.hp,
    }
}

fn result_lines(result: &DamageResult, args: &DamageArgs) -> Vec<String> {
    let mut lines = vec![format!(
        "Damage: {}-{} ({:.1}%-{:.1}%)",
        result.min, result.max, result.min_percent, result.max_percent
    )];
    lines.push(format!("1HKO: {:.1}%", result.ohko_chance));
    if args.hits > 1 {
        lines.push(format!(
            "{}HKO: {:.1}%",
            args.hits,
            ko_chance(&result.rolls, args.hp, args.hits)
        ));
    }
    lines.push(match result.guaranteed_hits {
        Some(n) => format!("Guaranteed KO in {n} hits"),
        None => "No damage".to_string(),
    });
    lines
}
