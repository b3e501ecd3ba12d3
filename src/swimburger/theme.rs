//! # Themed Template Rendering
//!
//! Styled terminal text is produced from minijinja templates plus a [`Theme`]: a set of
//! named `console::Style`s applied through a `style` filter.
//!
//! ```jinja
//! {{ header | style("name") }}
//! {% for line in bio -%}
//! {{ line | style("bio") }}
//! {% endfor %}
//! ```
//!
//! Templates only ever name styles; what a style looks like lives in [`crate::styles`].
//!
//! ## Colour
//!
//! Whether ANSI codes are emitted is decided by the caller and passed as `use_color`.
//! [`colors_enabled`] gives the usual answer for stdout (a colour-capable terminal, honouring
//! `NO_COLOR` and friends through `console`). With colour off the `style` filter passes text
//! through untouched, so the same template yields plain output for pipes and tests.
//!
//! A second filter, `link`, wraps text in an OSC 8 terminal hyperlink when colour is on:
//!
//! ```jinja
//! {{ value | style("value") | link(href) }}
//! ```
//!
//! An empty target, or colour off, leaves the text as it is. [`display_width`] measures
//! such lines with the hyperlink wrappers counted as zero columns.
//!
//! An unknown style name is never silent: the text is prefixed with
//! [`MISSING_STYLE_INDICATOR`] in both modes, which makes template typos show up in tests.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

/// Prefix shown when a template names a style the theme does not define.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. If a style with the same name exists, it is replaced.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style to text.
    ///
    /// With `use_color` the styled string carries ANSI codes regardless of what `console`
    /// detected for the current process; without it the text comes back unchanged.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => {
                style.clone().force_styling(true).apply_to(text).to_string()
            }
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

const OSC8_OPEN: &str = "\x1b]8;;";
const OSC8_END: &str = "\x1b\\";

/// Wraps `text` in an OSC 8 hyperlink pointing at `url`.
pub fn hyperlink(text: &str, url: &str, use_color: bool) -> String {
    if !use_color || url.is_empty() {
        return text.to_string();
    }
    format!("{OSC8_OPEN}{url}{OSC8_END}{text}{OSC8_OPEN}{OSC8_END}")
}

/// Terminal display width of `line`. ANSI styling and OSC 8 hyperlink wrappers count as zero
/// columns, wide characters as two.
pub fn display_width(line: &str) -> usize {
    let mut visible = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find(OSC8_OPEN) {
        visible.push_str(&rest[..start]);
        let after = &rest[start + OSC8_OPEN.len()..];
        rest = match after.find(OSC8_END) {
            Some(end) => &after[end + OSC8_END.len()..],
            None => "",
        };
    }
    visible.push_str(rest);
    console::measure_text_width(&visible)
}

/// Whether stdout should receive ANSI styling.
pub fn colors_enabled() -> bool {
    Term::stdout().features().colors_supported()
}

/// Renders a template with explicit color control.
///
/// The template's trailing newline is kept, so what the file ends with is what the output
/// ends with.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    register_style_filter(&mut env, theme.clone(), use_color);

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.add_filter("link", move |value: Value, url: String| -> String {
        hyperlink(&value.to_string(), &url, use_color)
    });
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
