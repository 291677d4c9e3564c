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
use serde::{Deserialize, Serialize};

/// One revolution per second
pub const DEFAULT_DRIVING_OMEGA: f64 = TAU;

/// Static description of a gear row. Tooth counts are kept signed so that bad values read
/// from a settings file survive deserialisation and can be reported by
/// [`GearChain::new`](crate::GearChain::new) with the offending index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub teeth: Vec<i64>,
    pub module: f64,
    #[serde(default)]
    pub start_x: f64,
    #[serde(default)]
    pub start_y: f64,
    #[serde(default = "default_driving_omega")]
    pub driving_omega: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_angles: Option<Vec<f64>>,
}

fn default_driving_omega() -> f64 {
    DEFAULT_DRIVING_OMEGA
}

impl ChainConfig {
    pub fn new(teeth: Vec<i64>, module: f64) -> ChainConfig {
        ChainConfig {
            teeth,
            module,
            start_x: 0.0,
            start_y: 0.0,
            driving_omega: DEFAULT_DRIVING_OMEGA,
            initial_angles: None,
        }
    }

    pub fn with_start(mut self, x: f64, y: f64) -> ChainConfig {
        self.start_x = x;
        self.start_y = y;
        self
    }

    pub fn with_driving_omega(mut self, omega: f64) -> ChainConfig {
        self.driving_omega = omega;
        self
    }

    pub fn with_initial_angles(mut self, angles: Vec<f64>) -> ChainConfig {
        self.initial_angles = Some(angles);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;
    use crate::config::ChainConfig;

    #[test]
    fn deserialise_with_defaults() {
        let config: ChainConfig = toml::from_str(r#"
            teeth = [80, 60, 40]
            module = 2.5
        "#).unwrap();
        assert_eq!(config.teeth, vec![80, 60, 40]);
        assert_eq!(config.module, 2.5);
        assert_eq!(config.start_x, 0.0);
        assert_eq!(config.start_y, 0.0);
        assert_eq!(config.driving_omega, TAU);
        assert!(config.initial_angles.is_none());
    }

    #[test]
    fn negative_teeth_survive_deserialisation() {
        let config: ChainConfig = toml::from_str(r#"
            teeth = [20, -4]
            module = 1.0
            start_x = 10.0
            initial_angles = [0.0, 1.5]
        "#).unwrap();
        assert_eq!(config.teeth, vec![20, -4]);
        assert_eq!(config.start_x, 10.0);
        assert_eq!(config.initial_angles, Some(vec![0.0, 1.5]));
    }

    #[test]
    fn builder_methods() {
        let config = ChainConfig::new(vec![12], 3.0)
            .with_start(5.0, 6.0)
            .with_driving_omega(-1.0)
            .with_initial_angles(vec![0.5]);
        assert_eq!(config.start_x, 5.0);
        assert_eq!(config.start_y, 6.0);
        assert_eq!(config.driving_omega, -1.0);
        assert_eq!(config.initial_angles, Some(vec![0.5]));
    }
}
