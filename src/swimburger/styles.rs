//! The swimburger palette.
//!
//! Templates refer to styles by the semantic names in [`names`]; this module decides what
//! each of them looks like. Everything accented uses the brand colour.

use crate::theme::{rgb_to_ansi256, Theme};
use console::Style;
use once_cell::sync::Lazy;

/// Brand colour, `#a02c56`.
pub const BRAND_RGB: (u8, u8, u8) = (0xa0, 0x2c, 0x56);

/// Grey used for link values.
pub const VALUE_ANSI256: u8 = 240;

pub mod names {
    pub const NAME: &str = "name";
    pub const SUBTITLE: &str = "subtitle";
    pub const BIO: &str = "bio";
    pub const SECTION: &str = "section";
    pub const LABEL: &str = "label";
    pub const VALUE: &str = "value";
    pub const BORDER: &str = "border";
    pub const HEADING: &str = "heading";
    pub const OPTION: &str = "option";
}

fn brand() -> Style {
    Style::new().color256(rgb_to_ansi256(BRAND_RGB))
}

pub static SWIMBURGER_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::NAME, brand().bold())
        .add(names::SUBTITLE, Style::new().dim())
        .add(names::BIO, Style::new().italic())
        .add(names::SECTION, brand().bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::VALUE, Style::new().color256(VALUE_ANSI256))
        .add(names::BORDER, brand())
        .add(names::HEADING, Style::new().bold())
        .add(names::OPTION, Style::new().cyan())
});
