//! Derived shield terrain.
//!
//! Every unit with a defense type projects a shield over its own tile and
//! the eight tiles around it. Shields never cover `Impassable` or `Goal`
//! tiles. Where physical and magical shields overlap, physical wins.

use super::state::Board;
use crate::core::{Terrain, Tile, WeaponType};

impl Board {
    /// Rebuild all shield terrain from current occupancy.
    ///
    /// Full-grid pass; calling it twice without an occupancy change in
    /// between leaves the terrain unchanged.
    pub fn recompute_shields(&mut self) {
        let terrain = self.terrain.map(|tile, &current| {
            if current.is_fixed() {
                current
            } else {
                self.shield_at(tile)
            }
        });
        self.terrain = terrain;
    }

    fn shield_at(&self, tile: Tile) -> Terrain {
        let mut magical = false;
        for neighbor in self.terrain.neighborhood(tile) {
            match self.occupant(neighbor).and_then(|u| u.defense) {
                Some(WeaponType::Physical) => return Terrain::PhysicalShield,
                Some(WeaponType::Magical) => magical = true,
                None => {}
            }
        }

        if magical {
            Terrain::MagicalShield
        } else {
            Terrain::Empty
        }
    }
}
