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

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// The 16 basic terminal colors: 8 standard + 8 bright. These map onto the
/// fixed SGR parameter ranges `30-37` / `90-97` (foreground) and `40-47` /
/// `100-107` (background), which every ANSI/VT100 terminal understands
/// without any capability negotiation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum AnsiBasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// One SGR (set graphics rendition) command: a text attribute, or a
/// foreground / background color from the basic palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Italic,
    Underline,
    Foreground(AnsiBasicColor),
    Background(AnsiBasicColor),
}

pub mod sgr_code_impl {
    use super::*;

    impl SgrCode {
        /// The exact escape byte sequence for this code. The values are
        /// static literals, so callers can splice them into their own
        /// output without any allocation or formatting.
        #[rustfmt::skip]
        #[must_use]
        pub fn as_str(&self) -> &'static str {
            match self {
                SgrCode::Reset     => "\x1b[0m",
                SgrCode::Bold      => "\x1b[1m",
                SgrCode::Italic    => "\x1b[3m",
                SgrCode::Underline => "\x1b[4m",
                SgrCode::Foreground(color) => match color {
                    AnsiBasicColor::Black         => "\x1b[30m",
                    AnsiBasicColor::Red           => "\x1b[31m",
                    AnsiBasicColor::Green         => "\x1b[32m",
                    AnsiBasicColor::Yellow        => "\x1b[33m",
                    AnsiBasicColor::Blue          => "\x1b[34m",
                    AnsiBasicColor::Magenta       => "\x1b[35m",
                    AnsiBasicColor::Cyan          => "\x1b[36m",
                    AnsiBasicColor::White         => "\x1b[37m",
                    AnsiBasicColor::BrightBlack   => "\x1b[90m",
                    AnsiBasicColor::BrightRed     => "\x1b[91m",
                    AnsiBasicColor::BrightGreen   => "\x1b[92m",
                    AnsiBasicColor::BrightYellow  => "\x1b[93m",
                    AnsiBasicColor::BrightBlue    => "\x1b[94m",
                    AnsiBasicColor::BrightMagenta => "\x1b[95m",
                    AnsiBasicColor::BrightCyan    => "\x1b[96m",
                    AnsiBasicColor::BrightWhite   => "\x1b[97m",
                },
                SgrCode::Background(color) => match color {
                    AnsiBasicColor::Black         => "\x1b[40m",
                    AnsiBasicColor::Red           => "\x1b[41m",
                    AnsiBasicColor::Green         => "\x1b[42m",
                    AnsiBasicColor::Yellow        => "\x1b[43m",
                    AnsiBasicColor::Blue          => "\x1b[44m",
                    AnsiBasicColor::Magenta       => "\x1b[45m",
                    AnsiBasicColor::Cyan          => "\x1b[46m",
                    AnsiBasicColor::White         => "\x1b[47m",
                    AnsiBasicColor::BrightBlack   => "\x1b[100m",
                    AnsiBasicColor::BrightRed     => "\x1b[101m",
                    AnsiBasicColor::BrightGreen   => "\x1b[102m",
                    AnsiBasicColor::BrightYellow  => "\x1b[103m",
                    AnsiBasicColor::BrightBlue    => "\x1b[104m",
                    AnsiBasicColor::BrightMagenta => "\x1b[105m",
                    AnsiBasicColor::BrightCyan    => "\x1b[106m",
                    AnsiBasicColor::BrightWhite   => "\x1b[107m",
                },
            }
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(self.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    use super::{AnsiBasicColor, SgrCode};

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Reset;
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn bold() {
        let sgr_code = SgrCode::Bold;
        assert_eq!(sgr_code.to_string(), "\x1b[1m");
    }

    #[test]
    fn italic() {
        let sgr_code = SgrCode::Italic;
        assert_eq!(sgr_code.to_string(), "\x1b[3m");
    }

    #[test]
    fn underline() {
        let sgr_code = SgrCode::Underline;
        assert_eq!(sgr_code.to_string(), "\x1b[4m");
    }

    #[test]
    fn basic_palette_has_16_colors() {
        assert_eq!(AnsiBasicColor::COUNT, 16);
    }

    #[test_case(AnsiBasicColor::Black,         "\x1b[30m")]
    #[test_case(AnsiBasicColor::Red,           "\x1b[31m")]
    #[test_case(AnsiBasicColor::Green,         "\x1b[32m")]
    #[test_case(AnsiBasicColor::Yellow,        "\x1b[33m")]
    #[test_case(AnsiBasicColor::Blue,          "\x1b[34m")]
    #[test_case(AnsiBasicColor::Magenta,       "\x1b[35m")]
    #[test_case(AnsiBasicColor::Cyan,          "\x1b[36m")]
    #[test_case(AnsiBasicColor::White,         "\x1b[37m")]
    #[test_case(AnsiBasicColor::BrightBlack,   "\x1b[90m")]
    #[test_case(AnsiBasicColor::BrightRed,     "\x1b[91m")]
    #[test_case(AnsiBasicColor::BrightGreen,   "\x1b[92m")]
    #[test_case(AnsiBasicColor::BrightYellow,  "\x1b[93m")]
    #[test_case(AnsiBasicColor::BrightBlue,    "\x1b[94m")]
    #[test_case(AnsiBasicColor::BrightMagenta, "\x1b[95m")]
    #[test_case(AnsiBasicColor::BrightCyan,    "\x1b[96m")]
    #[test_case(AnsiBasicColor::BrightWhite,   "\x1b[97m")]
    fn fg_color(color: AnsiBasicColor, expected: &str) {
        assert_eq!(SgrCode::Foreground(color).as_str(), expected);
        assert_eq!(SgrCode::Foreground(color).to_string(), expected);
    }

    #[test_case(AnsiBasicColor::Black,         "\x1b[40m")]
    #[test_case(AnsiBasicColor::Red,           "\x1b[41m")]
    #[test_case(AnsiBasicColor::Green,         "\x1b[42m")]
    #[test_case(AnsiBasicColor::Yellow,        "\x1b[43m")]
    #[test_case(AnsiBasicColor::Blue,          "\x1b[44m")]
    #[test_case(AnsiBasicColor::Magenta,       "\x1b[45m")]
    #[test_case(AnsiBasicColor::Cyan,          "\x1b[46m")]
    #[test_case(AnsiBasicColor::White,         "\x1b[47m")]
    #[test_case(AnsiBasicColor::BrightBlack,   "\x1b[100m")]
    #[test_case(AnsiBasicColor::BrightRed,     "\x1b[101m")]
    #[test_case(AnsiBasicColor::BrightGreen,   "\x1b[102m")]
    #[test_case(AnsiBasicColor::BrightYellow,  "\x1b[103m")]
    #[test_case(AnsiBasicColor::BrightBlue,    "\x1b[104m")]
    #[test_case(AnsiBasicColor::BrightMagenta, "\x1b[105m")]
    #[test_case(AnsiBasicColor::BrightCyan,    "\x1b[106m")]
    #[test_case(AnsiBasicColor::BrightWhite,   "\x1b[107m")]
    fn bg_color(color: AnsiBasicColor, expected: &str) {
        assert_eq!(SgrCode::Background(color).as_str(), expected);
        assert_eq!(SgrCode::Background(color).to_string(), expected);
    }
}
