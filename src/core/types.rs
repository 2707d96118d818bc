//! Fixed vocabularies shared by every layer of the engine.
//!
//! These enums are closed: the rules engine matches on them exhaustively,
//! so adding a variant forces every dispatch site to handle it.

use serde::{Deserialize, Serialize};

/// Terrain kind of a single tile.
///
/// `MagicalShield` and `PhysicalShield` are derived from unit adjacency and
/// are only ever written by [`Board::recompute_shields`](crate::board::Board::recompute_shields).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Open ground.
    #[default]
    Empty,
    /// Walls, holes and anything else nothing may enter.
    Impassable,
    /// Exit tile. Player units that reach it leave the board.
    Goal,
    /// Projected by a unit with magical defense; blocks magical attackers.
    MagicalShield,
    /// Projected by a unit with physical defense; blocks physical attackers.
    PhysicalShield,
}

impl Terrain {
    /// Whether this terrain is authored by the scenario rather than derived.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Terrain::Impassable | Terrain::Goal)
    }

    /// Whether this terrain is a derived shield.
    #[must_use]
    pub const fn is_shield(self) -> bool {
        matches!(self, Terrain::MagicalShield | Terrain::PhysicalShield)
    }

    /// The shield projected by a unit with the given defense.
    #[must_use]
    pub const fn shield_for(defense: WeaponType) -> Self {
        match defense {
            WeaponType::Magical => Terrain::MagicalShield,
            WeaponType::Physical => Terrain::PhysicalShield,
        }
    }

    /// Whether a unit with this alignment and attack type may enter or
    /// strike into this terrain.
    ///
    /// A shield stops exactly the weapon type it guards against; units
    /// without a weapon pass through every shield.
    #[must_use]
    pub fn admits(self, alignment: Alignment, attack: Option<WeaponType>) -> bool {
        match self {
            Terrain::Empty => true,
            Terrain::Impassable => false,
            Terrain::Goal => alignment == Alignment::Player,
            Terrain::MagicalShield => attack != Some(WeaponType::Magical),
            Terrain::PhysicalShield => attack != Some(WeaponType::Physical),
        }
    }
}

/// Which side a unit fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Controlled through tile activations.
    Player,
    /// Controlled by the enemy policy.
    Enemy,
}

impl Alignment {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Alignment::Player => Alignment::Enemy,
            Alignment::Enemy => Alignment::Player,
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alignment::Player => write!(f, "player"),
            Alignment::Enemy => write!(f, "enemy"),
        }
    }
}

/// Geometric pattern governing where a unit may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    /// Fixed L-shaped jumps.
    Knight,
    /// Diagonal rays.
    Bishop,
    /// Orthogonal rays.
    Rook,
    /// Diagonal and orthogonal rays.
    Queen,
    /// Single step in any of the eight directions.
    King,
}

/// Weapon category used for both attack and defense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// Spells and the like.
    Magical,
    /// Blades, arrows, fists.
    Physical,
}

/// Flat tag of the turn cycle's current step.
///
/// The live state machine carries data alongside each step; this tag is
/// what the presentation layer sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    /// "Player phase" banner is showing.
    PlayerPhaseBanner,
    /// Waiting for the player to pick a unit.
    PlayerTurn,
    /// A player unit is selected; waiting for a destination.
    UnitSelected,
    /// A player unit's move or attack is animating.
    UnitAnimation,
    /// "Enemy phase" banner is showing.
    EnemyPhaseBanner,
    /// Enemy sequence is running between animations.
    EnemyTurn,
    /// An enemy unit's move or attack is animating.
    EnemyUnitAnimation,
}

impl PhaseKind {
    /// Whether the phase accepts tile activations.
    #[must_use]
    pub const fn accepts_tiles(self) -> bool {
        matches!(self, PhaseKind::PlayerTurn | PhaseKind::UnitSelected)
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_admits_empty_and_impassable() {
        for alignment in [Alignment::Player, Alignment::Enemy] {
            for attack in [None, Some(WeaponType::Magical), Some(WeaponType::Physical)] {
                assert!(Terrain::Empty.admits(alignment, attack));
                assert!(!Terrain::Impassable.admits(alignment, attack));
            }
        }
    }

    #[test]
    fn test_goal_admits_player_only() {
        assert!(Terrain::Goal.admits(Alignment::Player, None));
        assert!(!Terrain::Goal.admits(Alignment::Enemy, None));
    }

    #[test]
    fn test_shield_blocks_matching_weapon() {
        let magical = Some(WeaponType::Magical);
        let physical = Some(WeaponType::Physical);

        assert!(!Terrain::MagicalShield.admits(Alignment::Player, magical));
        assert!(Terrain::MagicalShield.admits(Alignment::Player, physical));
        assert!(Terrain::MagicalShield.admits(Alignment::Player, None));

        assert!(!Terrain::PhysicalShield.admits(Alignment::Enemy, physical));
        assert!(Terrain::PhysicalShield.admits(Alignment::Enemy, magical));
        assert!(Terrain::PhysicalShield.admits(Alignment::Enemy, None));
    }

    #[test]
    fn test_fixed_and_shield_partition() {
        assert!(Terrain::Goal.is_fixed());
        assert!(Terrain::Impassable.is_fixed());
        assert!(!Terrain::Empty.is_fixed());
        assert!(Terrain::MagicalShield.is_shield());
        assert!(!Terrain::MagicalShield.is_fixed());
        assert_eq!(Terrain::shield_for(WeaponType::Physical), Terrain::PhysicalShield);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Alignment::Player.opponent(), Alignment::Enemy);
        assert_eq!(Alignment::Enemy.opponent(), Alignment::Player);
    }

    #[test]
    fn test_phase_accepts_tiles() {
        assert!(PhaseKind::PlayerTurn.accepts_tiles());
        assert!(PhaseKind::UnitSelected.accepts_tiles());
        assert!(!PhaseKind::UnitAnimation.accepts_tiles());
        assert!(!PhaseKind::EnemyTurn.accepts_tiles());
        assert!(!PhaseKind::PlayerPhaseBanner.accepts_tiles());
    }
}
