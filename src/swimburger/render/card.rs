//! # The Styled Card
//!
//! The card is built in two passes:
//!
//! 1. `card.tmp` produces the content lines (header, bio, Connect and Support sections),
//!    styled through [`SWIMBURGER_THEME`].
//! 2. [`frame`] wraps those lines in a rounded box with padding and margins.
//!
//! Layout math stays in Rust: the bio is word-wrapped to the content width before it reaches
//! the template, and each framed line is padded by its display width (ANSI codes and
//! hyperlink wrappers count as zero columns, wide emoji as two) so the right border lines up
//! with or without colour.
//!
//! With colour on, link values that start with a URL are clickable (OSC 8). Values that are
//! not URLs, like the Mastodon handle, stay plain text.

use crate::error::Result;
use crate::profile::{Link, Profile};
use crate::styles::{names, SWIMBURGER_THEME};
use crate::theme::{display_width, render_with_color, Theme};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const CARD_TEMPLATE: &str = include_str!("templates/card.tmp");

/// Labels are padded to this many columns so link values line up.
pub const LABEL_WIDTH: usize = 16;

/// Box geometry. `width` counts the columns between the two border glyphs, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub width: usize,
    /// (vertical, horizontal)
    pub padding: (usize, usize),
    /// (top, bottom)
    pub margin: (usize, usize),
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            width: 145,
            padding: (1, 2),
            margin: (1, 1),
        }
    }
}

impl CardLayout {
    /// Columns available for content inside the horizontal padding.
    pub fn content_width(&self) -> usize {
        self.width.saturating_sub(self.padding.1 * 2)
    }
}

#[derive(Serialize)]
struct CardData<'a> {
    header: String,
    subheading: String,
    bio: Vec<String>,
    connect: Vec<LinkLine<'a>>,
    support: Vec<LinkLine<'a>>,
}

#[derive(Serialize)]
struct LinkLine<'a> {
    glyph: &'a str,
    label: String,
    value: &'a str,
    href: &'a str,
}

impl<'a> From<&Link<'a>> for LinkLine<'a> {
    fn from(link: &Link<'a>) -> Self {
        Self {
            glyph: link.glyph,
            label: format!("{:<width$}", link.label, width = LABEL_WIDTH),
            value: link.value,
            href: link_target(link.value),
        }
    }
}

/// The URL a link value points at: its first word when that is an http(s) URL, else empty.
fn link_target(value: &str) -> &str {
    match value.split_whitespace().next() {
        Some(word) if word.starts_with("https://") || word.starts_with("http://") => word,
        _ => "",
    }
}

/// Renders the boxed terminal card.
pub fn to_card(profile: &Profile, layout: &CardLayout, use_color: bool) -> Result<String> {
    let connect = profile.connect_links();
    let support = profile.support_links();
    let data = CardData {
        header: format!("🍔 {} ({})", profile.name, profile.nickname),
        subheading: format!("🌎 {} | {}", profile.location, profile.timezone),
        bio: wrap_text(&profile.bio, layout.content_width()),
        connect: connect.iter().map(LinkLine::from).collect(),
        support: support.iter().map(LinkLine::from).collect(),
    };

    let content = render_with_color(CARD_TEMPLATE, &data, &SWIMBURGER_THEME, use_color)?;
    let lines: Vec<&str> = content.lines().collect();
    Ok(frame(&lines, layout, &SWIMBURGER_THEME, use_color))
}

/// Draws a rounded border around `lines`, padding each one to the layout's content width.
pub fn frame(lines: &[&str], layout: &CardLayout, theme: &Theme, use_color: bool) -> String {
    let border = |s: &str| theme.apply(names::BORDER, s, use_color);
    let side = border("│");
    let horizontal = "─".repeat(layout.width);
    let inset = " ".repeat(layout.padding.1);
    let blank_row = format!("{}{}{}\n", side, " ".repeat(layout.width), side);

    let mut out = String::new();
    out.push_str(&"\n".repeat(layout.margin.0));
    out.push_str(&border(&format!("╭{}╮", horizontal)));
    out.push('\n');
    out.push_str(&blank_row.repeat(layout.padding.0));

    for line in lines {
        let fill = layout
            .content_width()
            .saturating_sub(display_width(line));
        out.push_str(&format!(
            "{side}{inset}{line}{fill}{inset}{side}\n",
            fill = " ".repeat(fill)
        ));
    }

    out.push_str(&blank_row.repeat(layout.padding.0));
    out.push_str(&border(&format!("╰{}╯", horizontal)));
    out.push('\n');
    out.push_str(&"\n".repeat(layout.margin.1));
    out
}

/// Greedy word wrap by display width. Existing line breaks are kept, and words wider than
/// `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_card() -> String {
        to_card(&Profile::swimburger(), &CardLayout::default(), false).unwrap()
    }

    #[test]
    fn test_card_header_has_name_and_nickname() {
        let out = plain_card();
        let header = out.lines().find(|l| l.contains("🍔")).unwrap();
        assert!(header.contains("Niels Swimberghe (Swimburger)"));
    }

    #[test]
    fn test_card_subheading() {
        assert!(plain_card().contains("🌎 NYC | Eastern Time"));
    }

    #[test]
    fn test_card_labels_in_declared_order() {
        let out = plain_card();
        let labels = [
            "Website:",
            "GitHub:",
            "Twitter:",
            "LinkedIn:",
            "YouTube:",
            "Facebook:",
            "Stack Overflow:",
            "MVP:",
            "Bluesky:",
            "Mastodon:",
            "PayPal:",
            "GitHub Sponsor:",
        ];
        let positions: Vec<usize> = labels
            .iter()
            .map(|l| out.find(&format!(" {}", l)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_card_sections_in_order() {
        let out = plain_card();
        let bio = out.find("Get in touch with Niels").unwrap();
        let connect = out.find("━━━ Connect ━━━").unwrap();
        let support = out.find("━━━ Support ━━━").unwrap();
        assert!(out.find("🍔").unwrap() < bio);
        assert!(bio < connect && connect < support);
    }

    #[test]
    fn test_card_link_values_aligned() {
        let out = plain_card();
        let website = out.lines().find(|l| l.contains("Website:")).unwrap();
        assert!(website.contains("🌐 Website:        https://swimburger.net"));
        let so = out.lines().find(|l| l.contains("Stack Overflow:")).unwrap();
        assert!(
            so.contains("💬 Stack Overflow: https://stackoverflow.com/users/2919731/swimburger")
        );
    }

    #[test]
    fn test_card_margins_and_border() {
        let out = plain_card();
        assert!(out.starts_with("\n╭"));
        assert!(out.ends_with("╯\n\n"));
        let top = out.lines().nth(1).unwrap();
        assert_eq!(top.chars().count(), 147);
    }

    #[test]
    fn test_card_rows_have_equal_width() {
        let out = plain_card();
        let rows: Vec<&str> = out.lines().filter(|l| l.starts_with('│')).collect();
        assert!(!rows.is_empty());
        for row in rows {
            assert_eq!(display_width(row), 147, "{:?}", row);
            assert!(row.ends_with('│'));
        }
    }

    #[test]
    fn test_card_has_blank_padding_rows() {
        let out = plain_card();
        let lines: Vec<&str> = out.lines().collect();
        let blank = format!("│{}│", " ".repeat(145));
        assert_eq!(lines[2], blank);
        assert_eq!(lines[lines.len() - 3], blank);
    }

    #[test]
    fn test_card_colored_keeps_alignment() {
        let out = to_card(&Profile::swimburger(), &CardLayout::default(), true).unwrap();
        assert!(out.contains("\x1b["));
        for row in out.lines().filter(|l| l.contains('│')) {
            assert_eq!(display_width(row), 147, "{:?}", row);
        }
    }

    #[test]
    fn test_card_colored_links_are_clickable() {
        let out = to_card(&Profile::swimburger(), &CardLayout::default(), true).unwrap();
        let website = out.lines().find(|l| l.contains("Website:")).unwrap();
        assert!(website.contains("\x1b]8;;https://swimburger.net\x1b\\"));
        let mvp = out.lines().find(|l| l.contains("MVP:")).unwrap();
        assert!(mvp.contains("\x1b]8;;https://mvp.microsoft.com\x1b\\"));
        let sponsor = out.lines().find(|l| l.contains("GitHub Sponsor:")).unwrap();
        assert!(sponsor.contains("\x1b]8;;https://github.com/sponsors/"));

        let mastodon = out.lines().find(|l| l.contains("Mastodon:")).unwrap();
        assert!(!mastodon.contains("\x1b]8"));
        assert_eq!(display_width(website), 147);
        assert_eq!(display_width(mastodon), 147);
    }

    #[test]
    fn test_card_plain_has_no_hyperlinks() {
        assert!(!plain_card().contains("\x1b]8"));
    }

    #[test]
    fn test_link_target() {
        assert_eq!(
            link_target("https://swimburger.net"),
            "https://swimburger.net"
        );
        assert_eq!(
            link_target("https://mvp.microsoft.com (Microsoft MVP)"),
            "https://mvp.microsoft.com"
        );
        assert_eq!(link_target("@swimburger@dotnet.social"), "");
        assert_eq!(link_target(""), "");
    }

    #[test]
    fn test_card_narrow_layout_wraps_bio() {
        let layout = CardLayout {
            width: 64,
            ..CardLayout::default()
        };
        let out = to_card(&Profile::swimburger(), &layout, false).unwrap();
        assert!(out.contains("Belgian"));
        for row in out.lines().filter(|l| l.starts_with('│')) {
            if !row.contains("https://") && !row.contains('@') {
                assert_eq!(display_width(row), 66, "{:?}", row);
            }
        }
    }

    #[test]
    fn test_wrap_text_keeps_short_lines() {
        assert_eq!(wrap_text("one two\nthree", 20), vec!["one two", "three"]);
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("alpha beta gamma delta", 11),
            vec!["alpha beta", "gamma delta"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_keeps_empty_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_counts_wide_chars() {
        assert_eq!(wrap_text("🍔🍔🍔", 4), vec!["🍔🍔", "🍔"]);
    }
}
