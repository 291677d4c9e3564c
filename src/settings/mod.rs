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
use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Map};
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use gear_model::ChainConfig;
use crate::animation::{FrameScheduler, Pacing, SchedulerError};
use crate::render::RenderError;
use crate::render::style::{Palette, DEFAULT_GEAR_COLOURS};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GearTrainSettings {
    teeth: Vec<i64>,
    module: f64,
    start_x: f64,
    start_y: f64,
    driving_omega: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initial_angles: Option<Vec<f64>>,
    colours: Vec<String>,
    frame_rate: f64,
    duration_secs: f64,
    realtime: bool,
    show_readout: bool,
    output_dir: String
}

impl GearTrainSettings {
    const TEETH: &'static str = "teeth";
    const MODULE: &'static str = "module";
    const START_X: &'static str = "start_x";
    const START_Y: &'static str = "start_y";
    const DRIVING_OMEGA: &'static str = "driving_omega";
    const COLOURS: &'static str = "colours";
    const FRAME_RATE: &'static str = "frame_rate";
    const DURATION_SECS: &'static str = "duration_secs";
    const REALTIME: &'static str = "realtime";
    const SHOW_READOUT: &'static str = "show_readout";
    const OUTPUT_DIR: &'static str = "output_dir";
    const CONFIG_FILENAME: &'static str = "gear-train-conf";
    const ENV_PREFIX: &'static str = "GEAR_TRAIN";

    const DEFAULT_TEETH: [i64; 10] = [50, 40, 60, 45, 70, 35, 55, 42, 65, 30];
    const DEFAULT_MODULE: f64 = 4.0;
    const DEFAULT_START: (f64, f64) = (80.0, 160.0);
    const DEFAULT_FRAME_RATE: f64 = 30.0;
    const DEFAULT_DURATION_SECS: f64 = 5.0;

    pub fn default() -> Self {
        GearTrainSettings {
            teeth: GearTrainSettings::DEFAULT_TEETH.to_vec(),
            module: GearTrainSettings::DEFAULT_MODULE,
            start_x: GearTrainSettings::DEFAULT_START.0,
            start_y: GearTrainSettings::DEFAULT_START.1,
            driving_omega: TAU,
            initial_angles: None,
            colours: DEFAULT_GEAR_COLOURS.iter().map(|c| c.to_string()).collect(),
            frame_rate: GearTrainSettings::DEFAULT_FRAME_RATE,
            duration_secs: GearTrainSettings::DEFAULT_DURATION_SECS,
            realtime: false,
            show_readout: true,
            output_dir: crate::data::get_default_frame_output_path().to_string_lossy().into_owned(),
        }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(format!("{}.toml", GearTrainSettings::CONFIG_FILENAME))
    }

    /// Load settings from the settings file in the working directory, layering
    /// `GEAR_TRAIN_*` environment variables on top
    pub fn load() -> Result<Self, ConfigError> {
        GearTrainSettings::load_from(&GearTrainSettings::default_path())
    }

    /// Load settings from `path` with `GEAR_TRAIN_*` environment variables on top. A missing
    /// file is not an error and the defaults are written out there to be edited. If the file
    /// can't be used then the defaults plus environment overrides are returned instead.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        GearTrainSettings::load_layered(path, None)
    }

    fn load_layered(path: &Path, env_vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let file_existed = path.exists();
        let ret = match GearTrainSettings::with_defaults(Config::builder())?
            .add_source(config::File::from(path).required(false))
            .add_source(GearTrainSettings::environment(env_vars.clone()))
            .build()
            .and_then(|settings| settings.try_deserialize::<GearTrainSettings>()) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Failed to load settings from {}. {}", path.display(), e.to_string());
                GearTrainSettings::with_defaults(Config::builder())?
                    .add_source(GearTrainSettings::environment(env_vars))
                    .build()?
                    .try_deserialize()?
            }
        };
        if !file_existed {
            GearTrainSettings::default().write_to(path).unwrap_or_else(|e| {
                error!("Failed to write settings. {}", e.to_string())
            });
        }
        Ok(ret)
    }

    fn environment(env_vars: Option<Map<String, String>>) -> config::Environment {
        config::Environment::with_prefix(GearTrainSettings::ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key(GearTrainSettings::TEETH)
            .with_list_parse_key(GearTrainSettings::COLOURS)
            .source(env_vars)
    }

    fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = GearTrainSettings::default();
        builder
            .set_default(GearTrainSettings::TEETH, defaults.teeth)?
            .set_default(GearTrainSettings::MODULE, defaults.module)?
            .set_default(GearTrainSettings::START_X, defaults.start_x)?
            .set_default(GearTrainSettings::START_Y, defaults.start_y)?
            .set_default(GearTrainSettings::DRIVING_OMEGA, defaults.driving_omega)?
            .set_default(GearTrainSettings::COLOURS, defaults.colours)?
            .set_default(GearTrainSettings::FRAME_RATE, defaults.frame_rate)?
            .set_default(GearTrainSettings::DURATION_SECS, defaults.duration_secs)?
            .set_default(GearTrainSettings::REALTIME, defaults.realtime)?
            .set_default(GearTrainSettings::SHOW_READOUT, defaults.show_readout)?
            .set_default(GearTrainSettings::OUTPUT_DIR, defaults.output_dir)
    }

    pub fn chain_config(&self) -> ChainConfig {
        let config = ChainConfig::new(self.teeth.clone(), self.module)
            .with_start(self.start_x, self.start_y)
            .with_driving_omega(self.driving_omega);
        match &self.initial_angles {
            None => config,
            Some(angles) => config.with_initial_angles(angles.clone())
        }
    }

    pub fn palette(&self) -> Result<Palette, RenderError> {
        Palette::from_hex_strings(&self.colours)
    }

    pub fn scheduler(&self) -> Result<FrameScheduler, SchedulerError> {
        let pacing = match self.realtime {
            true => Pacing::Realtime,
            false => Pacing::Immediate
        };
        FrameScheduler::new(self.frame_rate, self.duration_secs, pacing)
    }

    pub fn show_readout(&self) -> bool {
        self.show_readout
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}
