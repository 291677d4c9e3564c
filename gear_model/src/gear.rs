/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-train.
 *
 * gear-train is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-train is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-train. If not, see <https://www.gnu.org/licenses/>.
 */

use serde::Serialize;
use utils::units::radians_to_rotations;

/// A single gear within a [`GearChain`](crate::GearChain).
///
/// Every field is fixed when the chain is built. The rotation of a gear is never stored;
/// it is derived on demand from the elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gear {
    teeth: u32,
    radius: f64,
    x: f64,
    y: f64,
    angular_velocity: f64,
    angle0: f64,
}

impl Gear {
    pub(crate) fn new(teeth: u32, radius: f64, x: f64, y: f64, angular_velocity: f64, angle0: f64) -> Gear {
        Gear { teeth, radius, x, y, angular_velocity, angle0 }
    }

    pub fn teeth(&self) -> u32 {
        self.teeth
    }

    /// Pitch circle radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Angular velocity in radians per second. Positive values rotate in the direction of
    /// increasing angle.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    pub fn angle0(&self) -> f64 {
        self.angle0
    }

    /// Rotation angle in radians after `t` seconds.
    ///
    /// The result is not wrapped; any real `t` is accepted including negative values.
    pub fn angle_at_time(&self, t: f64) -> f64 {
        self.angle0 + self.angular_velocity * t
    }

    /// Total rotations completed after `t` seconds. Callers wanting the position within
    /// the current rotation must reduce the result themselves.
    pub fn rotations_at_time(&self, t: f64) -> f64 {
        radians_to_rotations(self.angle_at_time(t))
    }
}

/// Everything needed to draw one gear for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearState {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub teeth: u32,
    pub angle: f64,
}

impl GearState {
    pub fn of(index: usize, gear: &Gear, t: f64) -> GearState {
        GearState {
            index,
            x: gear.x,
            y: gear.y,
            radius: gear.radius,
            teeth: gear.teeth,
            angle: gear.angle_at_time(t),
        }
    }

    pub fn rotations(&self) -> f64 {
        radians_to_rotations(self.angle)
    }
}
