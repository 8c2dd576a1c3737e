// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the flx CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Matched chars are
//! highlighted in the candidate, heat values are colored by sign and size.
//! Respects `NO_COLOR` and non-TTY detection for pipelines.
//!
//! # Theme detection order
//!
//! 1. `FLX_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FLX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; 7 and up (except 8) are light backgrounds
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Should output be colored? (NO_COLOR, then TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, if colors are on
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Candidate with matched char positions emphasized.
///
/// Without colors, matched chars are wrapped in brackets: `[b]uffer-[f]ile`.
pub fn highlight(candidate: &str, indices: &[usize]) -> String {
    highlight_with(candidate, indices, use_colors())
}

fn highlight_with(candidate: &str, indices: &[usize], colors: bool) -> String {
    let mut out = String::with_capacity(candidate.len() * 2);
    let mut wanted = indices.iter().peekable();

    for (position, ch) in candidate.chars().enumerate() {
        if wanted.peek() == Some(&&position) {
            wanted.next();
            if colors {
                out.push_str(BOLD);
                out.push_str(UNDERLINE);
                out.push_str(&GREEN());
                out.push(ch);
                out.push_str(RESET);
            } else {
                out.push('[');
                out.push(ch);
                out.push(']');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Heat value colored by how attractive the position is.
pub fn heat_value(heat: i32) -> String {
    if !use_colors() {
        return format!("{:>5}", heat);
    }
    let color = if heat >= 50 {
        BRIGHT_GREEN()
    } else if heat >= 0 {
        YELLOW()
    } else if heat >= -40 {
        GRAY()
    } else {
        RED()
    };
    format!("{}{:>5}{}", color, heat, RESET)
}

/// Score colored by magnitude; full-match scores stand out.
pub fn score_value(score: i32) -> String {
    if !use_colors() {
        return format!("{:>6}", score);
    }
    let color = if score >= flx::FULL_MATCH_BONUS {
        CYAN()
    } else if score >= 100 {
        BRIGHT_GREEN()
    } else if score >= 0 {
        GREEN()
    } else {
        GRAY()
    };
    format!("{}{:>6}{}", color, score, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
