//! Actual stat values from base stats, IVs, EVs, level and nature.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatKey {
    pub const ALL: [StatKey; 6] = [
        StatKey::Hp,
        StatKey::Atk,
        StatKey::Def,
        StatKey::Spa,
        StatKey::Spd,
        StatKey::Spe,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            StatKey::Hp => "hp",
            StatKey::Atk => "atk",
            StatKey::Def => "def",
            StatKey::Spa => "spa",
            StatKey::Spd => "spd",
            StatKey::Spe => "spe",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One value per stat. Used for base stats, IVs, EVs and results alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl Stats {
    /// Same value for every stat, e.g. `Stats::splat(31)` for perfect IVs.
    pub fn splat(value: u32) -> Self {
        Self::from_fn(|_| value)
    }

    pub fn from_fn(mut f: impl FnMut(StatKey) -> u32) -> Self {
        Self {
            hp: f(StatKey::Hp),
            atk: f(StatKey::Atk),
            def: f(StatKey::Def),
            spa: f(StatKey::Spa),
            spd: f(StatKey::Spd),
            spe: f(StatKey::Spe),
        }
    }

    pub fn get(&self, key: StatKey) -> u32 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::Atk => self.atk,
            StatKey::Def => self.def,
            StatKey::Spa => self.spa,
            StatKey::Spd => self.spd,
            StatKey::Spe => self.spe,
        }
    }
}

/// A nature raises one stat by 10% and lowers another by 10%.
///
/// Neutral natures leave both unset. HP is never affected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nature {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increased: Option<StatKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decreased: Option<StatKey>,
}

impl Nature {
    pub fn new(name: impl Into<String>, increased: StatKey, decreased: StatKey) -> Self {
        Self {
            name: name.into(),
            increased: Some(increased),
            decreased: Some(decreased),
        }
    }

    pub fn neutral(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            increased: None,
            decreased: None,
        }
    }

    /// 1.1, 0.9 or 1.0 for `stat`.
    pub fn multiplier(&self, stat: StatKey) -> f64 {
        if stat == StatKey::Hp {
            1.0
        } else if self.increased == Some(stat) {
            1.1
        } else if self.decreased == Some(stat) {
            0.9
        } else {
            1.0
        }
    }
}

/// Nature multiplier, treating a missing nature as neutral.
pub fn nature_multiplier(stat: StatKey, nature: Option<&Nature>) -> f64 {
    nature.map_or(1.0, |n| n.multiplier(stat))
}

/// A single stat at the given level.
pub fn calc_stat(
    base: u32,
    iv: u32,
    ev: u32,
    level: u32,
    stat: StatKey,
    nature: Option<&Nature>,
) -> u32 {
    let core = (base * 2 + iv + ev / 4) * level / 100;
    if stat == StatKey::Hp {
        return core + level + 10;
    }
    let raw = core + 5;
    (f64::from(raw) * nature_multiplier(stat, nature)).floor() as u32
}

/// Every stat at the given level.
pub fn calc_all_stats(
    base: &Stats,
    evs: &Stats,
    ivs: &Stats,
    level: u32,
    nature: Option<&Nature>,
) -> Stats {
    Stats::from_fn(|key| calc_stat(base.get(key), ivs.get(key), evs.get(key), level, key, nature))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garchomp() -> Stats {
        Stats {
            hp: 108,
            atk: 130,
            def: 95,
            spa: 80,
            spd: 85,
            spe: 102,
        }
    }

    #[test]
    fn hp_ignores_nature() {
        let adamant = Nature::new("いじっぱり", StatKey::Atk, StatKey::Spa);
        assert_eq!(calc_stat(108, 31, 0, 50, StatKey::Hp, Some(&adamant)), 183);
        assert_eq!(calc_stat(108, 31, 0, 50, StatKey::Hp, None), 183);
        assert_eq!(adamant.multiplier(StatKey::Hp), 1.0);
    }

    #[test]
    fn nature_raises_and_lowers() {
        let adamant = Nature::new("いじっぱり", StatKey::Atk, StatKey::Spa);
        // floor(182 * 1.1)
        assert_eq!(calc_stat(130, 31, 252, 50, StatKey::Atk, Some(&adamant)), 200);
        assert_eq!(calc_stat(130, 31, 252, 50, StatKey::Atk, None), 182);
        // floor(100 * 0.9)
        assert_eq!(calc_stat(80, 31, 0, 50, StatKey::Spa, Some(&adamant)), 90);
    }

    #[test]
    fn neutral_nature_changes_nothing() {
        let hardy = Nature::neutral("がんばりや");
        for key in StatKey::ALL {
            assert_eq!(nature_multiplier(key, Some(&hardy)), 1.0);
        }
    }

    #[test]
    fn ev_quarters_round_down() {
        // 255 EVs count the same as 252
        assert_eq!(
            calc_stat(102, 31, 255, 50, StatKey::Spe, None),
            calc_stat(102, 31, 252, 50, StatKey::Spe, None)
        );
        assert_eq!(calc_stat(102, 31, 252, 50, StatKey::Spe, None), 154);
    }

    #[test]
    fn all_stats_at_level_50() {
        let evs = Stats {
            atk: 252,
            spe: 252,
            hp: 4,
            ..Stats::default()
        };
        let jolly = Nature::new("ようき", StatKey::Spe, StatKey::Spa);
        let stats = calc_all_stats(&garchomp(), &evs, &Stats::splat(31), 50, Some(&jolly));
        assert_eq!(
            stats,
            Stats {
                hp: 184,
                atk: 182,
                def: 115,
                spa: 90,
                spd: 105,
                spe: 169,
            }
        );
    }

    #[test]
    fn nature_reads_from_json() {
        let json = r#"{"name":"ひかえめ","increased":"spa","decreased":"atk"}"#;
        let nature: Nature = serde_json::from_str(json).unwrap();
        assert_eq!(nature, Nature::new("ひかえめ", StatKey::Spa, StatKey::Atk));
        let neutral: Nature = serde_json::from_str(r#"{"name":"まじめ"}"#).unwrap();
        assert_eq!(serde_json::to_string(&neutral).unwrap(), r#"{"name":"まじめ"}"#);
    }
}
