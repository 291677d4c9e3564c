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

pub mod style;

use std::path::Path;
use itertools::Itertools;
use plotters::coord::Shift;
use plotters::prelude::{BLACK, Circle, DrawingArea, DrawingBackend, IntoDrawingArea, Polygon, SVGBackend, WHITE};
use plotters::style::{Color, TextStyle};
use tracing::debug;

use gear_model::{GearChain, GearState};
use crate::render::style::{Palette, DISC_COLOUR};

/// Distance from the pitch circle in to the rim the teeth stand on
const RIM_INSET: f64 = 12.0;
const TOOTH_DEPTH: f64 = 14.0;
const TOOTH_WIDTH: f64 = 6.0;
const HUB_RADIUS: f64 = 8.0;
const RIM_STROKE_WIDTH: u32 = 2;
const PADDING: f64 = 20.0;
const READOUT_LINE_HEIGHT: f64 = 16.0;
const READOUT_FONT_SIZE: f64 = 13.0;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("invalid colour `{0}`")]
    InvalidColour(String),
    #[error("failed to draw frame. `{0}`")]
    Drawing(String),
}

/// Lines of text describing the chain at time `t`: the elapsed time followed by the
/// number of rotations each gear has completed
pub fn readout_lines(chain: &GearChain, t: f64) -> Vec<String> {
    let mut lines = vec![format!("t = {:.2} s", t)];
    lines.extend(chain.states_at(t).iter().map(|state| {
        format!("gear {} ({} teeth): {:.2} rotations", state.index + 1, state.teeth, state.rotations())
    }));
    lines
}

/// Draws frames of a single gear chain as SVG.
///
/// The canvas size and the offset from chain coordinates to pixels are fixed when the
/// renderer is created so every frame of an animation lines up.
pub struct FrameRenderer {
    palette: Palette,
    show_readout: bool,
    size: (u32, u32),
    offset: (f64, f64),
}

impl FrameRenderer {
    pub fn new(chain: &GearChain, palette: Palette, show_readout: bool) -> FrameRenderer {
        let extent = chain.extent();
        let reach = TOOTH_DEPTH - RIM_INSET;
        let readout_height = match show_readout {
            true => (chain.len() + 1) as f64 * READOUT_LINE_HEIGHT + PADDING,
            false => 0.0
        };
        let width = extent.width() + 2.0 * (reach + PADDING);
        let height = extent.height() + 2.0 * (reach + PADDING) + readout_height;
        let offset = (
            PADDING + reach - extent.min_x,
            PADDING + reach + readout_height - extent.min_y
        );
        FrameRenderer {
            palette,
            show_readout,
            size: (width.ceil() as u32, height.ceil() as u32),
            offset
        }
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.size
    }

    /// Pixel position of a point given in chain coordinates
    pub fn to_pixel(&self, x: f64, y: f64) -> (i32, i32) {
        ((x + self.offset.0).round() as i32, (y + self.offset.1).round() as i32)
    }

    pub fn render_to_string(&self, chain: &GearChain, t: f64) -> Result<String, RenderError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            self.draw_frame(&root, chain, t)?;
        }
        Ok(svg)
    }

    pub fn render_to_file(&self, chain: &GearChain, t: f64, path: &Path) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        self.draw_frame(&root, chain, t)?;
        debug!("Wrote frame for t={:.3} to {}", t, path.display());
        Ok(())
    }

    fn draw_frame<DB: DrawingBackend>(&self,
                                      root: &DrawingArea<DB, Shift>,
                                      chain: &GearChain,
                                      t: f64) -> Result<(), RenderError> {
        root.fill(&BLACK).map_err(|e| RenderError::Drawing(e.to_string()))?;
        for state in chain.states_at(t) {
            self.draw_gear(root, &state)?;
        }
        if self.show_readout {
            let text_style = TextStyle::from(("sans-serif", READOUT_FONT_SIZE)).color(&WHITE);
            for (idx, line) in readout_lines(chain, t).iter().enumerate() {
                let pos = (PADDING as i32, (PADDING + idx as f64 * READOUT_LINE_HEIGHT) as i32);
                root.draw_text(line, &text_style, pos).map_err(|e| RenderError::Drawing(e.to_string()))?;
            }
        }
        root.present().map_err(|e| RenderError::Drawing(e.to_string()))
    }

    fn draw_gear<DB: DrawingBackend>(&self,
                                     root: &DrawingArea<DB, Shift>,
                                     state: &GearState) -> Result<(), RenderError> {
        let colour = self.palette.colour_for(state.index);
        let centre = self.to_pixel(state.x, state.y);
        let inner_radius = (state.radius - RIM_INSET).max(1.0);

        root.draw(&Circle::new(centre, inner_radius.round() as u32, DISC_COLOUR.filled()))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        root.draw(&Circle::new(centre, inner_radius.round() as u32, colour.stroke_width(RIM_STROKE_WIDTH)))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;

        let step = std::f64::consts::TAU / state.teeth as f64;
        for tooth_idx in 0..state.teeth {
            let outline = self.tooth_outline(state, inner_radius, state.angle + tooth_idx as f64 * step);
            root.draw(&Polygon::new(outline, colour.filled()))
                .map_err(|e| RenderError::Drawing(e.to_string()))?;
        }

        let hub_radius = HUB_RADIUS.min(inner_radius / 2.0).max(1.0);
        root.draw(&Circle::new(centre, hub_radius.round() as u32, BLACK.filled()))
            .map_err(|e| RenderError::Drawing(e.to_string()))?;
        Ok(())
    }

    /// Corners of a rectangular tooth standing on the rim, rotated to `angle` around the
    /// gear centre. Pixel y grows downwards so positive angles turn clockwise on screen.
    fn tooth_outline(&self, state: &GearState, inner_radius: f64, angle: f64) -> Vec<(i32, i32)> {
        let (sin, cos) = angle.sin_cos();
        let half_width = TOOTH_WIDTH / 2.0;
        [
            (inner_radius, -half_width),
            (inner_radius + TOOTH_DEPTH, -half_width),
            (inner_radius + TOOTH_DEPTH, half_width),
            (inner_radius, half_width),
        ].iter()
            .map(|(px, py)| self.to_pixel(state.x + px * cos - py * sin, state.y + px * sin + py * cos))
            .collect_vec()
    }
}
