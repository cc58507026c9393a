//! Type matchups and same-type attack bonus.

use crate::MoveType;

/// How one attacking type fares against each defending type.
#[derive(Debug, Clone, Copy)]
pub struct TypeRelation {
    /// Super effective (×2).
    pub strong: &'static [MoveType],
    /// Not very effective (×0.5).
    pub weak: &'static [MoveType],
    /// No effect (×0).
    pub no_effect: &'static [MoveType],
}

const fn row(
    strong: &'static [MoveType],
    weak: &'static [MoveType],
    no_effect: &'static [MoveType],
) -> TypeRelation {
    TypeRelation {
        strong,
        weak,
        no_effect,
    }
}

/// Multiplier when the move's type matches one of the attacker's types.
pub const STAB: f64 = 1.5;

impl MoveType {
    /// Row of the type chart for moves of this type.
    pub fn relation(&self) -> TypeRelation {
        use MoveType::*;

        match self {
            Normal => row(&[], &[Rock, Steel], &[Ghost]),
            Fire => row(&[Grass, Ice, Bug, Steel], &[Fire, Water, Rock, Dragon], &[]),
            Water => row(&[Fire, Ground, Rock], &[Water, Grass, Dragon], &[]),
            Electric => row(&[Water, Flying], &[Electric, Grass, Dragon], &[Ground]),
            Grass => row(
                &[Water, Ground, Rock],
                &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
                &[],
            ),
            Ice => row(&[Grass, Ground, Flying, Dragon], &[Fire, Water, Ice, Steel], &[]),
            Fighting => row(
                &[Normal, Ice, Rock, Dark, Steel],
                &[Poison, Flying, Psychic, Bug, Fairy],
                &[Ghost],
            ),
            Poison => row(&[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
            Ground => row(&[Fire, Electric, Poison, Rock, Steel], &[Grass, Bug], &[Flying]),
            Flying => row(&[Grass, Fighting, Bug], &[Electric, Rock, Steel], &[]),
            Psychic => row(&[Fighting, Poison], &[Psychic, Steel], &[Dark]),
            Bug => row(
                &[Grass, Psychic, Dark],
                &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
                &[],
            ),
            Rock => row(&[Fire, Ice, Flying, Bug], &[Fighting, Ground, Steel], &[]),
            Ghost => row(&[Psychic, Ghost], &[Dark], &[Normal]),
            Dragon => row(&[Dragon], &[Steel], &[Fairy]),
            Dark => row(&[Psychic, Ghost], &[Fighting, Dark, Fairy], &[]),
            Steel => row(&[Ice, Rock, Fairy], &[Fire, Water, Electric, Steel], &[]),
            Fairy => row(&[Fighting, Dragon, Dark], &[Fire, Poison, Steel], &[]),
        }
    }

    /// Combined multiplier of this move type against a (one or two type) defender.
    ///
    /// Any immunity makes the whole result 0.
    pub fn effectiveness(&self, defender: &[MoveType]) -> f64 {
        let relation = self.relation();
        let mut mult = 1.0;
        for def in defender {
            if relation.no_effect.contains(def) {
                return 0.0;
            }
            if relation.strong.contains(def) {
                mult *= 2.0;
            } else if relation.weak.contains(def) {
                mult *= 0.5;
            }
        }
        mult
    }

    /// [`STAB`] if the attacker shares this type, otherwise 1.
    pub fn stab(&self, attacker: &[MoveType]) -> f64 {
        if attacker.contains(self) { STAB } else { 1.0 }
    }
}
