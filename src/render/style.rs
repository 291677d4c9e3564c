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

use plotters::style::RGBColor;
use crate::render::RenderError;

pub const DEFAULT_GEAR_COLOURS: [&str; 4] = ["#00e5ff", "#ff4081", "#ffe082", "#4fd"];

pub const DISC_COLOUR: RGBColor = RGBColor(0x20, 0x20, 0x20);

/// Parse `#rgb` or `#rrggbb` into a colour. The leading `#` is optional.
pub fn parse_hex_colour(hex: &str) -> Result<RGBColor, RenderError> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || RenderError::InvalidColour(hex.to_string());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    match digits.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (channel, c) in channels.iter_mut().zip(digits.chars()) {
                let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                *channel = nibble * 17;
            }
            Ok(RGBColor(channels[0], channels[1], channels[2]))
        }
        6 => {
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
            };
            Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
        _ => Err(invalid())
    }
}

/// Colours assigned to gears in chain order, repeating once exhausted
#[derive(Debug, Clone)]
pub struct Palette {
    colours: Vec<RGBColor>,
}

impl Palette {
    pub fn from_hex_strings<S: AsRef<str>>(colours: &[S]) -> Result<Palette, RenderError> {
        if colours.is_empty() {
            return Ok(Palette::default());
        }
        let colours = colours.iter()
            .map(|c| parse_hex_colour(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette { colours })
    }

    pub fn colour_for(&self, gear_idx: usize) -> RGBColor {
        self.colours[gear_idx % self.colours.len()]
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colours: vec![
                RGBColor(0x00, 0xe5, 0xff),
                RGBColor(0xff, 0x40, 0x81),
                RGBColor(0xff, 0xe0, 0x82),
                RGBColor(0x44, 0xff, 0xdd),
            ]
        }
    }
}
