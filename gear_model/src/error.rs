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

use std::result;

pub type Result<T> = result::Result<T, ChainError>;

/// Reasons a gear chain configuration can be rejected.
///
/// All of these are raised while building a [`GearChain`](crate::GearChain); once a chain
/// exists nothing evaluated on it can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    #[error("gear chain must contain at least one gear")]
    EmptyChain,
    #[error("gear {index} has an invalid tooth count `{teeth}`. Tooth counts must be positive")]
    InvalidToothCount { index: usize, teeth: i64 },
    #[error("invalid module `{0}`. The module must be a positive number")]
    InvalidModule(f64),
    #[error("`{field}` must be a finite number, got `{value}`")]
    NonFiniteValue { field: &'static str, value: f64 },
    #[error("{angles} initial angles were provided for {gears} gears")]
    InitialAngleMismatch { angles: usize, gears: usize },
}
