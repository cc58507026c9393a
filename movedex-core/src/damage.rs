//! Damage calculation for a single hit, with the 16 random rolls and KO odds.
//!
//! Weather, items and stat stages are not modelled; their modifier is 1.

use std::collections::BTreeMap;

use crate::MoveType;

/// Number of damage rolls (random factor 0.85 ..= 1.00 in steps of 0.01).
pub const ROLL_COUNT: u32 = 16;

/// Everything the formula needs for one attacker/defender/move matchup.
#[derive(Debug, Clone)]
pub struct DamageInput {
    pub level: u32,
    pub power: u32,
    /// Attacker's Attack or Sp. Atk, matching the move category.
    pub attack: u32,
    /// Defender's Defense or Sp. Def, matching the move category.
    pub defense: u32,
    pub move_type: MoveType,
    pub attacker_types: Vec<MoveType>,
    pub defender_types: Vec<MoveType>,
    pub defender_hp: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DamageResult {
    /// Damage per roll, ascending.
    pub rolls: Vec<u32>,
    pub min: u32,
    pub max: u32,
    pub min_percent: f64,
    pub max_percent: f64,
    /// Chance (0–100) of a one-hit KO.
    pub ohko_chance: f64,
    /// Hits needed to KO on the lowest roll; `None` if the move can't do damage.
    pub guaranteed_hits: Option<u32>,
}

impl DamageResult {
    fn zero() -> Self {
        Self {
            rolls: vec![0],
            min: 0,
            max: 0,
            min_percent: 0.0,
            max_percent: 0.0,
            ohko_chance: 0.0,
            guaranteed_hits: None,
        }
    }
}

/// Damage of one hit for every roll.
///
/// Any zero among power, attack, defense or HP gives a single roll of 0.
pub fn calc_damage(input: &DamageInput) -> DamageResult {
    if input.power == 0 || input.attack == 0 || input.defense == 0 || input.defender_hp == 0 {
        return DamageResult::zero();
    }

    let step1 = u64::from(2 * input.level / 5 + 2);
    let step2 = step1 * u64::from(input.power) * u64::from(input.attack) / u64::from(input.defense);
    let base = (step2 / 50 + 2) as f64;

    let modifier = input.move_type.stab(&input.attacker_types)
        * input.move_type.effectiveness(&input.defender_types);

    let mut rolls: Vec<u32> = (0..ROLL_COUNT)
        .map(|i| {
            let random = f64::from(85 + i) / 100.0;
            (base * modifier * random).floor() as u32
        })
        .collect();
    rolls.sort_unstable();

    let min = rolls[0];
    let max = rolls[rolls.len() - 1];
    let hp = f64::from(input.defender_hp);

    DamageResult {
        min,
        max,
        min_percent: f64::from(min) / hp * 100.0,
        max_percent: f64::from(max) / hp * 100.0,
        ohko_chance: ko_chance(&rolls, input.defender_hp, 1),
        guaranteed_hits: guaranteed_hits(&rolls, input.defender_hp),
        rolls,
    }
}

/// Chance (0–100) that `hits` hits, each on an independent roll, deal at least `hp`.
pub fn ko_chance(rolls: &[u32], hp: u32, hits: u32) -> f64 {
    if rolls.is_empty() {
        return 0.0;
    }

    // total damage -> number of roll sequences reaching it
    let mut dist: BTreeMap<u64, f64> = BTreeMap::from([(0, 1.0)]);
    for _ in 0..hits {
        let mut next = BTreeMap::new();
        for (&sum, &count) in &dist {
            for &d in rolls {
                *next.entry(sum + u64::from(d)).or_insert(0.0) += count;
            }
        }
        dist = next;
    }

    let total = (rolls.len() as f64).powi(hits as i32);
    let ko: f64 = dist.range(u64::from(hp)..).map(|(_, count)| count).sum();
    ko / total * 100.0
}

/// Hits needed to KO on the lowest roll, i.e. `ceil(hp / min)`.
///
/// Expects rolls in ascending order. `None` when the lowest roll is 0.
pub fn guaranteed_hits(rolls: &[u32], hp: u32) -> Option<u32> {
    match rolls.first() {
        Some(&min) if min > 0 => Some(hp.div_ceil(min)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/damage_tests.rs"]
mod tests;
