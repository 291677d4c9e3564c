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

//! Kinematic model of a row of meshed spur gears.
//!
//! A [`GearChain`] is built once from a [`ChainConfig`]. Radii come from tooth counts and a
//! shared module, positions place neighbouring pitch circles tangent to each other and the
//! angular velocity of the driving gear is carried down the row by the meshing law. The
//! angle of any gear at any time is then a closed form function of that time.

pub mod error;
pub mod config;
pub mod gear;
pub mod chain;

pub use chain::{Extent, GearChain, mesh_velocity, pitch_radius};
pub use config::ChainConfig;
pub use error::{ChainError, Result};
pub use gear::{Gear, GearState};
