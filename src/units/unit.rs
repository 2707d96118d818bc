//! Units - a single piece's combat and movement identity.
//!
//! A `Unit` carries the immutable profile it was created with (sprite,
//! side, movement pattern, weapon typing) and one mutable turn flag,
//! `already_moved`, which the turn machine sets once the unit has acted
//! and clears at the end of its side's turn.

use serde::{Deserialize, Serialize};

use crate::core::{Alignment, MovementType, WeaponType};

/// A piece on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Opaque visual reference for the presentation layer.
    pub sprite: String,

    /// Which side this unit fights for.
    pub alignment: Alignment,

    /// Movement pattern.
    pub movement: MovementType,

    /// Weapon used when attacking. `None` means the unit cannot attack.
    pub attack: Option<WeaponType>,

    /// Weapon type this unit is immune to, and the shield it projects.
    pub defense: Option<WeaponType>,

    /// Set once the unit has acted this turn.
    #[serde(default)]
    pub already_moved: bool,
}

impl Unit {
    /// Create an unarmed, undefended unit.
    #[must_use]
    pub fn new(sprite: impl Into<String>, alignment: Alignment, movement: MovementType) -> Self {
        Self {
            sprite: sprite.into(),
            alignment,
            movement,
            attack: None,
            defense: None,
            already_moved: false,
        }
    }

    /// Shorthand for a player-aligned unit.
    #[must_use]
    pub fn player(sprite: impl Into<String>, movement: MovementType) -> Self {
        Self::new(sprite, Alignment::Player, movement)
    }

    /// Shorthand for an enemy-aligned unit.
    #[must_use]
    pub fn enemy(sprite: impl Into<String>, movement: MovementType) -> Self {
        Self::new(sprite, Alignment::Enemy, movement)
    }

    /// Give the unit a weapon.
    #[must_use]
    pub fn with_attack(mut self, attack: WeaponType) -> Self {
        self.attack = Some(attack);
        self
    }

    /// Give the unit a defense.
    #[must_use]
    pub fn with_defense(mut self, defense: WeaponType) -> Self {
        self.defense = Some(defense);
        self
    }

    /// Whether this unit can strike `defender` at all, ignoring terrain and range.
    ///
    /// Requires a weapon, an opposing side, and a defense that does not
    /// match the weapon.
    #[must_use]
    pub fn can_harm(&self, defender: &Unit) -> bool {
        match self.attack {
            None => false,
            Some(weapon) => {
                self.alignment != defender.alignment && defender.defense != Some(weapon)
            }
        }
    }

    /// Whether the unit still has its action this turn.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.already_moved
    }
}
