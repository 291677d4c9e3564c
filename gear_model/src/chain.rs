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

use std::slice::Iter;
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ChainConfig;
use crate::error::{ChainError, Result};
use crate::gear::{Gear, GearState};

/// Radius of the pitch circle of a gear with `teeth` teeth
pub fn pitch_radius(teeth: u32, module: f64) -> f64 {
    teeth as f64 * module / 2.0
}

/// Angular velocity of a gear driven by an externally meshed neighbour.
/// Direction is reversed and speed scales inversely with tooth count.
pub fn mesh_velocity(driver_omega: f64, driver_teeth: u32, driven_teeth: u32) -> f64 {
    -driver_omega * (driver_teeth as f64 / driven_teeth as f64)
}

/// Axis aligned box covering every pitch circle in a chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A row of externally meshed gears sharing one module.
///
/// The first gear is the driving gear. Each subsequent gear sits to the right of its
/// predecessor with their pitch circles touching and turns according to the meshing law.
/// A chain is immutable once built and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearChain {
    module: f64,
    gears: Vec<Gear>,
}

impl GearChain {
    pub fn new(config: &ChainConfig) -> Result<GearChain> {
        let teeth = validate_teeth(&config.teeth)?;
        validate_module(config.module)?;
        validate_finite("start_x", config.start_x)?;
        validate_finite("start_y", config.start_y)?;
        validate_finite("driving_omega", config.driving_omega)?;
        let initial_angles = match &config.initial_angles {
            None => vec![0.0; teeth.len()],
            Some(angles) => {
                if angles.len() != teeth.len() {
                    return Err(ChainError::InitialAngleMismatch { angles: angles.len(), gears: teeth.len() });
                }
                for angle in angles {
                    validate_finite("initial_angles", *angle)?;
                }
                angles.clone()
            }
        };

        let module = config.module;
        let gears: Vec<Gear> = teeth.iter()
            .zip(initial_angles)
            .scan(None, |previous: &mut Option<(u32, f64, f64, f64)>, (&n, angle0)| {
                let radius = pitch_radius(n, module);
                let (x, omega) = match *previous {
                    None => (config.start_x, config.driving_omega),
                    Some((prev_teeth, prev_radius, prev_x, prev_omega)) => {
                        (prev_x + prev_radius + radius, mesh_velocity(prev_omega, prev_teeth, n))
                    }
                };
                *previous = Some((n, radius, x, omega));
                Some(Gear::new(n, radius, x, config.start_y, omega, angle0))
            })
            .collect();

        for (idx, gear) in gears.iter().enumerate() {
            debug!("Gear {}: {} teeth, radius {}, centre ({}, {}), omega {}",
                idx, gear.teeth(), gear.radius(), gear.x(), gear.y(), gear.angular_velocity());
        }
        info!("Built gear chain with {} gears (module {})", gears.len(), module);
        Ok(GearChain { module, gears })
    }

    pub fn module(&self) -> f64 {
        self.module
    }

    pub fn gears(&self) -> &[Gear] {
        &self.gears
    }

    pub fn len(&self) -> usize {
        self.gears.len()
    }

    /// Always false; construction rejects empty chains
    pub fn is_empty(&self) -> bool {
        self.gears.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Gear> {
        self.gears.get(idx)
    }

    pub fn driving_gear(&self) -> &Gear {
        &self.gears[0]
    }

    pub fn iter(&self) -> Iter<'_, Gear> {
        self.gears.iter()
    }

    /// Snapshot every gear at elapsed time `t`
    pub fn states_at(&self, t: f64) -> Vec<GearState> {
        self.gears.iter()
            .enumerate()
            .map(|(idx, gear)| GearState::of(idx, gear, t))
            .collect()
    }

    pub fn extent(&self) -> Extent {
        let first = self.driving_gear();
        let last = &self.gears[self.gears.len() - 1];
        let max_radius = self.gears.iter()
            .map(Gear::radius)
            .fold(0.0, f64::max);
        Extent {
            min_x: first.x() - first.radius(),
            max_x: last.x() + last.radius(),
            min_y: first.y() - max_radius,
            max_y: first.y() + max_radius,
        }
    }
}

impl<'a> IntoIterator for &'a GearChain {
    type Item = &'a Gear;
    type IntoIter = Iter<'a, Gear>;

    fn into_iter(self) -> Self::IntoIter {
        self.gears.iter()
    }
}

fn validate_teeth(teeth: &[i64]) -> Result<Vec<u32>> {
    if teeth.is_empty() {
        return Err(ChainError::EmptyChain);
    }
    if let Some((index, &bad)) = teeth.iter().find_position(|n| u32::try_from(**n).map_or(true, |n| n == 0)) {
        return Err(ChainError::InvalidToothCount { index, teeth: bad });
    }
    Ok(teeth.iter().map(|n| *n as u32).collect())
}

fn validate_module(module: f64) -> Result<()> {
    validate_finite("module", module)?;
    if module <= 0.0 {
        return Err(ChainError::InvalidModule(module));
    }
    Ok(())
}

fn validate_finite(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ChainError::NonFiniteValue { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;
    use std::thread;
    use itertools::Itertools;
    use utils::numeric::{approx_eq, DEFAULT_EPSILON};
    use crate::chain::{mesh_velocity, pitch_radius, GearChain};
    use crate::config::ChainConfig;
    use crate::error::ChainError;

    fn scenario_b() -> GearChain {
        GearChain::new(&ChainConfig::new(vec![50, 40, 60, 45, 70, 35, 55, 42, 65, 30], 4.0)
            .with_start(80.0, 160.0)
            .with_driving_omega(TAU)).unwrap()
    }

    #[test]
    fn radius_is_derived_from_teeth() {
        let chain = scenario_b();
        for gear in &chain {
            assert!(approx_eq(gear.radius(), gear.teeth() as f64 * 4.0 / 2.0, DEFAULT_EPSILON));
        }
        assert_eq!(pitch_radius(50, 4.0), 100.0);
    }

    #[test]
    fn pitch_circles_are_tangent() {
        let chain = scenario_b();
        for (a, b) in chain.iter().tuple_windows() {
            assert!(approx_eq(b.x() - a.x(), a.radius() + b.radius(), DEFAULT_EPSILON));
            assert_eq!(a.y(), b.y());
        }
    }

    #[test]
    fn meshing_law_holds_between_neighbours() {
        let chain = scenario_b();
        for (a, b) in chain.iter().tuple_windows() {
            let driver = a.angular_velocity() * a.teeth() as f64;
            let driven = b.angular_velocity() * b.teeth() as f64;
            assert!(approx_eq(driven, -driver, DEFAULT_EPSILON));
            assert!(a.angular_velocity().signum() != b.angular_velocity().signum());
        }
        assert!(approx_eq(mesh_velocity(TAU, 80, 60), -TAU * 80.0 / 60.0, DEFAULT_EPSILON));
    }

    #[test]
    fn initial_angles_are_zero_by_default() {
        let chain = scenario_b();
        assert!(chain.iter().all(|gear| gear.angle0() == 0.0));
        for state in chain.states_at(0.0) {
            assert_eq!(state.angle, 0.0);
        }
    }

    #[test]
    fn initial_angles_are_applied() {
        let chain = GearChain::new(&ChainConfig::new(vec![20, 10], 1.0)
            .with_initial_angles(vec![0.5, -0.25])).unwrap();
        assert_eq!(chain.gears()[0].angle_at_time(0.0), 0.5);
        assert_eq!(chain.gears()[1].angle_at_time(0.0), -0.25);
    }

    #[test]
    fn states_follow_gear_order() {
        let chain = scenario_b();
        let states = chain.states_at(1.5);
        assert_eq!(states.len(), chain.len());
        for (idx, (state, gear)) in states.iter().zip(chain.iter()).enumerate() {
            assert_eq!(state.index, idx);
            assert_eq!(state.teeth, gear.teeth());
            assert_eq!(state.x, gear.x());
            assert_eq!(state.angle, gear.angle_at_time(1.5));
        }
    }

    #[test]
    fn extent_covers_row() {
        let chain = scenario_b();
        let extent = chain.extent();
        assert_eq!(extent.min_x, -20.0);
        let last = chain.get(chain.len() - 1).unwrap();
        assert_eq!(extent.max_x, last.x() + last.radius());
        // largest gear has 70 teeth -> radius 140
        assert_eq!(extent.min_y, 20.0);
        assert_eq!(extent.max_y, 300.0);
        assert_eq!(extent.height(), 280.0);
        assert!(approx_eq(extent.width(), 2.0 * chain.iter().map(|g| g.radius()).sum::<f64>(), DEFAULT_EPSILON));
    }

    #[test]
    fn rejects_empty_chain() {
        assert_eq!(GearChain::new(&ChainConfig::new(vec![], 1.0)), Err(ChainError::EmptyChain));
    }

    #[test]
    fn rejects_bad_tooth_counts() {
        assert_eq!(GearChain::new(&ChainConfig::new(vec![10, 0, 12], 1.0)),
                   Err(ChainError::InvalidToothCount { index: 1, teeth: 0 }));
        assert_eq!(GearChain::new(&ChainConfig::new(vec![10, 12, -3], 1.0)),
                   Err(ChainError::InvalidToothCount { index: 2, teeth: -3 }));
        let too_many = u32::MAX as i64 + 1;
        assert_eq!(GearChain::new(&ChainConfig::new(vec![too_many], 1.0)),
                   Err(ChainError::InvalidToothCount { index: 0, teeth: too_many }));
    }

    #[test]
    fn rejects_bad_module() {
        assert_eq!(GearChain::new(&ChainConfig::new(vec![10], 0.0)), Err(ChainError::InvalidModule(0.0)));
        assert_eq!(GearChain::new(&ChainConfig::new(vec![10], -2.0)), Err(ChainError::InvalidModule(-2.0)));
        assert!(matches!(GearChain::new(&ChainConfig::new(vec![10], f64::NAN)),
                         Err(ChainError::NonFiniteValue { field: "module", .. })));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(matches!(GearChain::new(&ChainConfig::new(vec![10], 1.0).with_driving_omega(f64::INFINITY)),
                         Err(ChainError::NonFiniteValue { field: "driving_omega", .. })));
        assert!(matches!(GearChain::new(&ChainConfig::new(vec![10], 1.0).with_start(f64::NAN, 0.0)),
                         Err(ChainError::NonFiniteValue { field: "start_x", .. })));
        assert!(matches!(GearChain::new(&ChainConfig::new(vec![10], 1.0).with_initial_angles(vec![f64::NAN])),
                         Err(ChainError::NonFiniteValue { field: "initial_angles", .. })));
    }

    #[test]
    fn rejects_initial_angle_mismatch() {
        assert_eq!(GearChain::new(&ChainConfig::new(vec![10, 20], 1.0).with_initial_angles(vec![0.0])),
                   Err(ChainError::InitialAngleMismatch { angles: 1, gears: 2 }));
    }

    #[test]
    fn chain_can_be_read_from_many_threads() {
        let chain = scenario_b();
        let expected: Vec<f64> = chain.iter().map(|g| g.angle_at_time(3.25)).collect();
        let results: Vec<f64> = thread::scope(|scope| {
            let handles: Vec<_> = chain.iter()
                .map(|gear| scope.spawn(move || gear.angle_at_time(3.25)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, expected);
    }
}
