/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Pathquest.

Pathquest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Pathquest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Pathquest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Build-time defaults.

/// Grid width used when none is given on the command line. The carving pattern reaches the far
/// corner cleanly with odd dimensions.
pub const DEFAULT_WIDTH: usize = 15;

/// Grid height used when none is given on the command line.
pub const DEFAULT_HEIGHT: usize = 15;

/// Number of generation attempts before giving up on producing a non-degenerate maze.
pub const MAX_ATTEMPTS: usize = 1000;

/// Delay between two animated execution steps.
pub const STEP_DELAY_MS: u64 = 600;

/// Length of the seeds invented when the player does not provide one.
pub const RANDOM_SEED_LEN: usize = 6;

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);
