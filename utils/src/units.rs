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

use std::f64::consts::TAU;

pub fn radians_to_rotations(radians: f64) -> f64 {
    radians / TAU
}

pub fn rad_per_sec_to_rpm(omega: f64) -> f64 {
    (omega * 60.0) / TAU
}
