//! Headless level geometry: a flat ground plane and coin pickups.

use glam::Vec3;
use glider_config::WorldConfig;
use tracing::info;

/// A coin placed in the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub position: Vec3,
    pub collected: bool,
}

/// A ground contact reported to the flight model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub location: Vec3,
    pub normal: Vec3,
}

/// Static level contents.
#[derive(Debug, Clone)]
pub struct World {
    ground_height: f32,
    pickup_radius: f32,
    coins: Vec<Coin>,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            ground_height: config.ground_height,
            pickup_radius: config.coin_pickup_radius,
            coins: config
                .coins
                .iter()
                .map(|&position| Coin {
                    position: Vec3::from_array(position),
                    collected: false,
                })
                .collect(),
        }
    }

    /// Contact with the ground plane if `location` is at or below it.
    pub fn ground_contact(&self, location: Vec3) -> Option<GroundContact> {
        (location.z <= self.ground_height).then(|| GroundContact {
            location: Vec3::new(location.x, location.y, self.ground_height),
            normal: Vec3::Z,
        })
    }

    /// Collect every coin within pickup radius of `location`.
    ///
    /// Returns how many coins were picked up; a coin is only counted once.
    pub fn collect_coins(&mut self, location: Vec3) -> u32 {
        let radius_sq = self.pickup_radius * self.pickup_radius;
        let mut picked = 0;
        for (index, coin) in self.coins.iter_mut().enumerate() {
            if coin.collected || coin.position.distance_squared(location) > radius_sq {
                continue;
            }
            coin.collected = true;
            picked += 1;
            info!(coin = index, position = ?coin.position, "Coin collected");
        }
        picked
    }

    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Coins not yet collected.
    pub fn remaining_coins(&self) -> usize {
        self.coins.iter().filter(|coin| !coin.collected).count()
    }
}
