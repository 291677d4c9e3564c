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

use std::io;
use config::ConfigError;
use gear_model::ChainError;

use crate::animation::SchedulerError;
use crate::render::RenderError;

#[derive(thiserror::Error, Debug)]
pub enum GearTrainError {
    #[error("invalid gear chain. {0}")]
    Chain(#[from] ChainError),
    #[error("failed to load settings. {0}")]
    Settings(#[from] ConfigError),
    #[error("invalid animation settings. {0}")]
    Scheduler(#[from] SchedulerError),
    #[error("render error. {0}")]
    Render(#[from] RenderError),
    #[error("io error. {0}")]
    Io(#[from] io::Error),
}
