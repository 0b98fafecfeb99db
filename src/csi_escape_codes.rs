/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! CSI sequence builder for the cursor control operations this crate emits.
//! Similar to [`crate::SgrCode`] but for cursor movement commands.

use std::fmt::{Display, Formatter, Result};

/// CSI (Control Sequence Introducer): `ESC [`. Prefix of every sequence in
/// this crate.
pub const CSI: &str = "\x1b[";

/// One cursor-control CSI sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Position (CUP) - `ESC [ row ; col H`.
    ///
    /// Coordinates are 1-based per ANSI convention. Values are rendered as
    /// literal decimal ASCII with no clamping; terminals treat a `0`
    /// parameter as `1`.
    CursorPosition { row: u8, col: u8 },
    /// Save Cursor (SCP) - `ESC [ s`
    SaveCursor,
    /// Restore Cursor (RCP) - `ESC [ u`
    RestoreCursor,
}

impl Display for CsiSequence {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CsiSequence::CursorPosition { row, col } => write!(f, "{CSI}{row};{col}H"),
            CsiSequence::SaveCursor                  => write!(f, "{CSI}s"),
            CsiSequence::RestoreCursor               => write!(f, "{CSI}u"),
        }
    }
}
