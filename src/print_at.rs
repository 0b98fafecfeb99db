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

//! The cursor-positioned writer: render a line of text at an arbitrary
//! screen position without disturbing the terminal's current cursor
//! location for subsequent output.

use std::io::Write;

use miette::IntoDiagnostic;

use crate::{CommonResult, CsiSequence};

pub mod sizing {
    use smallstr::SmallString;

    /// Inline storage for one formatted call. The fixed overhead of save +
    /// `CSI 255;255 H` + restore is 16 bytes, so short labels never touch
    /// the heap; longer `text` makes the buffer spill to the heap instead
    /// of overflowing.
    pub const PRINT_AT_STORAGE_SIZE: usize = 64;
    pub type InlineStringPrintAt = SmallString<[u8; PRINT_AT_STORAGE_SIZE]>;
}

/// Format the complete byte sequence for one call: save cursor, position,
/// `text`, restore cursor. This is what [`write_at`] puts on the wire:
///
/// ```text
/// ESC [ s
/// ESC [ <row> ; <col> H <text>
/// ESC [ u
/// ```
#[must_use]
pub fn fmt_print_at(row: u8, col: u8, text: &str) -> sizing::InlineStringPrintAt {
    use std::fmt::Write as _;

    let mut acc = sizing::InlineStringPrintAt::new();
    // Formatting into an in-memory buffer is infallible.
    _ = write!(
        acc,
        "{save}{position}{text}{restore}",
        save = CsiSequence::SaveCursor,
        position = CsiSequence::CursorPosition { row, col },
        restore = CsiSequence::RestoreCursor,
    );
    acc
}

/// Write `text` at 1-based (`row`, `col`) to `writer`, leaving the cursor
/// where it was. The whole payload goes out in a single `write_all`, so the
/// save / position / restore triple is never split across writes by this
/// crate's own buffering.
///
/// # Errors
///
/// Returns the underlying I/O error when the write or flush fails (e.g. a
/// closed or broken pipe).
pub fn write_at(
    writer: &mut impl Write,
    row: u8,
    col: u8,
    text: &str,
) -> std::io::Result<()> {
    let acc = fmt_print_at(row, col, text);
    writer.write_all(acc.as_bytes())?;
    writer.flush()
}

/// Print `text` at 1-based (`row`, `col`) on the terminal. After the call
/// the visible cursor is back wherever it was, so subsequent output
/// continues from the caller's position.
///
/// # Errors
///
/// Returns an error when the write to stdout fails, instead of silently
/// dropping the output.
pub fn print_at(row: u8, col: u8, text: &str) -> CommonResult<()> {
    let mut stdout = std::io::stdout().lock();
    write_at(&mut stdout, row, col, text).into_diagnostic()
}
