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

use std::path::PathBuf;
use directories::BaseDirs;

const LOCAL_DATA_DIRNAME: &'static str = "GearTrain";
const DEFAULT_FRAME_DIRNAME: &'static str = "frames";

#[cfg(target_os = "windows")]
fn backup_data_dir() -> PathBuf {
    let username = whoami::username();
    PathBuf::from_iter(["C:", "Users", &username, "AppData", "Local"])
}

#[cfg(not(target_os = "windows"))]
fn backup_data_dir() -> PathBuf {
    let username = whoami::username();
    PathBuf::from_iter(["/home", &username, ".local", "share"])
}

pub fn get_local_app_data_path() -> PathBuf {
    let mut local_data_root : PathBuf = match BaseDirs::new() {
        None => backup_data_dir(),
        Some(basedirs) => { basedirs.data_local_dir().to_path_buf() }
    };
    local_data_root.push(LOCAL_DATA_DIRNAME);
    local_data_root
}

pub fn get_default_frame_output_path() -> PathBuf {
    let mut path = get_local_app_data_path();
    path.push(DEFAULT_FRAME_DIRNAME);
    path
}
