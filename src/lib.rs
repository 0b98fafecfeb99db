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

//! # r3bl_ansi_print
//!
//! Print text at any position on the terminal using ANSI/VT100 escape
//! sequences, without moving the caller's cursor. The crate is a lookup table
//! of escape codes ([`SgrCode`], [`CsiSequence`]) plus one writer
//! ([`print_at`]) that saves the cursor, positions it, emits the text, and
//! restores the cursor, all in a single write to stdout.
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_ansi_print::{AnsiBasicColor, CommonResult, SgrCode, print_at};
//!
//! fn main() -> CommonResult<()> {
//!     // Pin a label to row 1, column 60. The cursor ends up back where it
//!     // was, so the next println! continues from the caller's position.
//!     print_at(1, 60, "[status: ok]")?;
//!
//!     // The escape codes implement Display, so they drop straight into
//!     // format strings.
//!     println!(
//!         "{bold}{red}error:{reset} something bold and red",
//!         bold = SgrCode::Bold,
//!         red = SgrCode::Foreground(AnsiBasicColor::Red),
//!         reset = SgrCode::Reset,
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! Run the demo with `cargo run --example main`.

// Attach sources.
pub mod ansi_escape_codes;
pub mod csi_escape_codes;
pub mod print_at;

pub use ansi_escape_codes::*;
pub use csi_escape_codes::*;
pub use print_at::*;

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [miette::Result] and [miette::Report], which are [std::error::Error]
///    wrappers.
pub type CommonResult<T> = miette::Result<T>;
