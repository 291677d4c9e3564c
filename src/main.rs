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

mod animation;
mod data;
mod error;
mod render;
mod settings;

use std::env;
use std::fs;
use std::ops::ControlFlow;
use tracing_subscriber;
use tracing_appender;
use tracing::{debug, info};

use gear_model::GearChain;
use utils::numeric::round_float_to;
use utils::units::rad_per_sec_to_rpm;

use crate::animation::FrameScheduler;
use crate::error::GearTrainError;
use crate::render::{readout_lines, FrameRenderer};
use crate::settings::GearTrainSettings;


fn main() -> Result<(), GearTrainError> {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "gear_train.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let settings = GearTrainSettings::load()?;
    let chain = GearChain::new(&settings.chain_config())?;
    let renderer = FrameRenderer::new(&chain, settings.palette()?, settings.show_readout());
    let scheduler = settings.scheduler()?;

    let output_dir = settings.output_dir();
    fs::create_dir_all(&output_dir)?;
    info!("Rendering {}x{} frames to {}",
        renderer.canvas_size().0, renderer.canvas_size().1, output_dir.display());

    let frames = scheduler.run(|frame, t| -> Result<ControlFlow<()>, GearTrainError> {
        let path = output_dir.join(format!("frame_{:05}.svg", frame));
        renderer.render_to_file(&chain, t, &path)?;
        debug!("{}", readout_lines(&chain, t).join(" | "));
        Ok(ControlFlow::Continue(()))
    })?;

    log_summary(&chain, &scheduler, frames);
    println!("Rendered {} frames to {}", frames, output_dir.display());
    Ok(())
}

fn log_summary(chain: &GearChain, scheduler: &FrameScheduler, frames: u64) {
    let end_time = scheduler.time_of_frame(frames.saturating_sub(1));
    info!("Rendered {} frames covering {:.2}s", frames, end_time);
    for (idx, gear) in chain.iter().enumerate() {
        info!("Gear {}: {} teeth, {} rad/s ({} rpm), {:.2} rotations",
            idx + 1,
            gear.teeth(),
            round_float_to(gear.angular_velocity(), 3),
            round_float_to(rad_per_sec_to_rpm(gear.angular_velocity()), 1),
            gear.rotations_at_time(end_time));
    }
}
