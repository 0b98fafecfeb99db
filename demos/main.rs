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

use r3bl_ansi_print::{AnsiBasicColor, CommonResult, SgrCode, print_at};
use strum::IntoEnumIterator;

fn main() -> CommonResult<()> {
    // Print a string w/ ANSI style codes.
    {
        println!(
            "{}{}Print a formatted (bold, underline) heading w/ ANSI codes.{}",
            SgrCode::Bold,
            SgrCode::Underline,
            SgrCode::Reset
        );
        println!(
            "{}{}Italic bright-cyan line.{}",
            SgrCode::Italic,
            SgrCode::Foreground(AnsiBasicColor::BrightCyan),
            SgrCode::Reset
        );
    }

    // Pin labels to fixed screen positions. The cursor stays put, so the
    // println! below continues from here.
    {
        print_at(1, 60, "[top-right label]")?;
        print_at(3, 60, "[another label]")?;
        println!("cursor is still on this line after both labels");
    }

    // Sweep the basic palette, foreground then background.
    {
        print_palette();
    }

    Ok(())
}

fn print_palette() {
    for color in AnsiBasicColor::iter() {
        print!(
            "{}{:?}{} ",
            SgrCode::Foreground(color),
            color,
            SgrCode::Reset
        );
    }
    println!();

    for color in AnsiBasicColor::iter() {
        print!("{}  {}", SgrCode::Background(color), SgrCode::Reset);
    }
    println!();
}
