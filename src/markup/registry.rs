//! # Tag Registry
//!
//! Maps tag names to their enter/exit behavior.
//!
//! Tags come in two flavors:
//!
//! - **Symmetric toggles** (`bold`, `inverse`, `underline`, ...): exit undoes
//!   exactly what enter did.
//! - **Non-stacking resets** (alignment and size): exit always returns to
//!   the canonical default (left, small), whatever encloses the tag. So
//!   `<large><medium>x</medium>y</large>` prints `y` small.
//!
//! Feed-style tags (`br`, `feed`, `feedrows`, `lineheight`, `left`, `small`)
//! act on enter only.

use crate::error::Result;
use crate::ir::{Op, Size, Underline};
use crate::markup::attrs;
use crate::markup::node::Element;
use crate::printer::config::TEAR_OFF_LINES;
use crate::protocol::text::Alignment;

/// Every recognized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Printout,
    Left,
    Center,
    Right,
    Br,
    Feed,
    FeedRows,
    Inverse,
    Bold,
    UpsideDown,
    Strikethrough,
    Underline,
    DoubleHeight,
    DoubleWidth,
    LineHeight,
    Large,
    Medium,
    Small,
}

impl Tag {
    /// All tags, in the order the usage page lists them.
    pub const ALL: [Tag; 18] = [
        Tag::Printout,
        Tag::Left,
        Tag::Center,
        Tag::Right,
        Tag::Br,
        Tag::Feed,
        Tag::FeedRows,
        Tag::Inverse,
        Tag::Bold,
        Tag::UpsideDown,
        Tag::Strikethrough,
        Tag::Underline,
        Tag::DoubleHeight,
        Tag::DoubleWidth,
        Tag::LineHeight,
        Tag::Large,
        Tag::Medium,
        Tag::Small,
    ];

    /// Find the tag for an element name, ignoring case.
    ///
    /// Unknown names are `None`; the walker treats those elements as
    /// transparent wrappers.
    ///
    /// ```
    /// use printml::markup::Tag;
    ///
    /// assert_eq!(Tag::lookup("Bold"), Some(Tag::Bold));
    /// assert_eq!(Tag::lookup("blink"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Tag> {
        let tag = match name.to_ascii_lowercase().as_str() {
            "printout" => Tag::Printout,
            "left" => Tag::Left,
            "center" => Tag::Center,
            "right" => Tag::Right,
            "br" => Tag::Br,
            "feed" => Tag::Feed,
            "feedrows" => Tag::FeedRows,
            "inverse" => Tag::Inverse,
            "bold" => Tag::Bold,
            "upsidedown" => Tag::UpsideDown,
            "strikethrough" => Tag::Strikethrough,
            "underline" => Tag::Underline,
            "doubleheight" => Tag::DoubleHeight,
            "doublewidth" => Tag::DoubleWidth,
            "lineheight" => Tag::LineHeight,
            "large" => Tag::Large,
            "medium" => Tag::Medium,
            "small" => Tag::Small,
            _ => return None,
        };
        Some(tag)
    }

    /// Canonical (lowercase) tag name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Printout => "printout",
            Tag::Left => "left",
            Tag::Center => "center",
            Tag::Right => "right",
            Tag::Br => "br",
            Tag::Feed => "feed",
            Tag::FeedRows => "feedrows",
            Tag::Inverse => "inverse",
            Tag::Bold => "bold",
            Tag::UpsideDown => "upsidedown",
            Tag::Strikethrough => "strikethrough",
            Tag::Underline => "underline",
            Tag::DoubleHeight => "doubleheight",
            Tag::DoubleWidth => "doublewidth",
            Tag::LineHeight => "lineheight",
            Tag::Large => "large",
            Tag::Medium => "medium",
            Tag::Small => "small",
        }
    }

    /// Numeric attribute the tag reads, if any.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Tag::Br | Tag::Feed => Some("lines"),
            Tag::FeedRows => Some("rows"),
            Tag::Underline => Some("thickness"),
            Tag::LineHeight => Some("height"),
            _ => None,
        }
    }

    /// One-line description for usage listings.
    pub fn summary(self) -> &'static str {
        match self {
            Tag::Printout => "Root element: printer online, tear-off feed and offline at the end",
            Tag::Left => "Left-justify",
            Tag::Center => "Center; back to left afterwards",
            Tag::Right => "Right-justify; back to left afterwards",
            Tag::Br | Tag::Feed => "Feed lines (default 1)",
            Tag::FeedRows => "Feed dot rows (default 1)",
            Tag::Inverse => "White on black",
            Tag::Bold => "Bold",
            Tag::UpsideDown => "Rotate 180 degrees",
            Tag::Strikethrough => "Strike-through",
            Tag::Underline => "Underline, optionally thicker",
            Tag::DoubleHeight => "Double height",
            Tag::DoubleWidth => "Double width",
            Tag::LineHeight => "Set line spacing (device default if absent)",
            Tag::Large => "Large text; back to small afterwards",
            Tag::Medium => "Medium text; back to small afterwards",
            Tag::Small => "Small text",
        }
    }

    /// Ops for the element's opening tag.
    ///
    /// Fails only when a numeric attribute is malformed.
    pub fn enter(self, element: &Element) -> Result<Vec<Op>> {
        let ops = match self {
            Tag::Printout => vec![Op::Online],
            Tag::Left => vec![Op::Justify(Alignment::Left)],
            Tag::Center => vec![Op::Justify(Alignment::Center)],
            Tag::Right => vec![Op::Justify(Alignment::Right)],
            Tag::Br | Tag::Feed => vec![Op::Feed(attrs::byte_or(element, "lines", 1)?)],
            Tag::FeedRows => vec![Op::FeedRows(attrs::byte_or(element, "rows", 1)?)],
            Tag::Inverse => vec![Op::SetInverse(true)],
            Tag::Bold => vec![Op::SetBold(true)],
            Tag::UpsideDown => vec![Op::SetUpsideDown(true)],
            Tag::Strikethrough => vec![Op::SetStrike(true)],
            Tag::Underline => vec![Op::SetUnderline(Underline::On {
                thickness: attrs::byte(element, "thickness")?,
            })],
            Tag::DoubleHeight => vec![Op::SetDoubleHeight(true)],
            Tag::DoubleWidth => vec![Op::SetDoubleWidth(true)],
            Tag::LineHeight => vec![Op::SetLineHeight(attrs::byte(element, "height")?)],
            Tag::Large => vec![Op::SetSize(Size::Large)],
            Tag::Medium => vec![Op::SetSize(Size::Medium)],
            Tag::Small => vec![Op::SetSize(Size::Small)],
        };
        Ok(ops)
    }

    /// Ops for the element's closing tag.
    pub fn exit(self) -> Vec<Op> {
        match self {
            Tag::Printout => vec![Op::Feed(TEAR_OFF_LINES), Op::Offline],
            Tag::Center | Tag::Right => vec![Op::Justify(Alignment::Left)],
            Tag::Inverse => vec![Op::SetInverse(false)],
            Tag::Bold => vec![Op::SetBold(false)],
            Tag::UpsideDown => vec![Op::SetUpsideDown(false)],
            Tag::Strikethrough => vec![Op::SetStrike(false)],
            Tag::Underline => vec![Op::SetUnderline(Underline::Off)],
            Tag::DoubleHeight => vec![Op::SetDoubleHeight(false)],
            Tag::DoubleWidth => vec![Op::SetDoubleWidth(false)],
            Tag::Large | Tag::Medium => vec![Op::SetSize(Size::Small)],
            Tag::Left
            | Tag::Br
            | Tag::Feed
            | Tag::FeedRows
            | Tag::LineHeight
            | Tag::Small => Vec::new(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_lookup_round_trips_every_name() {
        for tag in Tag::ALL {
            assert_eq!(Tag::lookup(tag.name()), Some(tag));
            assert_eq!(Tag::lookup(&tag.name().to_uppercase()), Some(tag));
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(Tag::lookup("normal"), None);
        assert_eq!(Tag::lookup(""), None);
        assert_eq!(Tag::lookup("bold "), None);
    }

    #[test]
    fn test_symmetric_toggles_exit_undoes_enter() {
        let pairs = [
            (Tag::Bold, Op::SetBold(true), Op::SetBold(false)),
            (Tag::Inverse, Op::SetInverse(true), Op::SetInverse(false)),
            (Tag::UpsideDown, Op::SetUpsideDown(true), Op::SetUpsideDown(false)),
            (Tag::Strikethrough, Op::SetStrike(true), Op::SetStrike(false)),
            (Tag::DoubleHeight, Op::SetDoubleHeight(true), Op::SetDoubleHeight(false)),
            (Tag::DoubleWidth, Op::SetDoubleWidth(true), Op::SetDoubleWidth(false)),
        ];
        for (tag, on, off) in pairs {
            let element = Element::new(tag.name());
            assert_eq!(tag.enter(&element).unwrap(), vec![on]);
            assert_eq!(tag.exit(), vec![off]);
        }
    }

    #[test]
    fn test_resets_return_to_defaults() {
        assert_eq!(Tag::Center.exit(), vec![Op::Justify(Alignment::Left)]);
        assert_eq!(Tag::Right.exit(), vec![Op::Justify(Alignment::Left)]);
        assert_eq!(Tag::Large.exit(), vec![Op::SetSize(Size::Small)]);
        assert_eq!(Tag::Medium.exit(), vec![Op::SetSize(Size::Small)]);
        assert!(Tag::Left.exit().is_empty());
        assert!(Tag::Small.exit().is_empty());
    }

    #[test]
    fn test_printout_session() {
        let printout = Element::new("printout");
        assert_eq!(Tag::Printout.enter(&printout).unwrap(), vec![Op::Online]);
        assert_eq!(Tag::Printout.exit(), vec![Op::Feed(4), Op::Offline]);
    }

    #[test]
    fn test_feed_attributes() {
        let br = Element::new("br");
        assert_eq!(Tag::Br.enter(&br).unwrap(), vec![Op::Feed(1)]);

        let feed = Element::new("feed").attr("lines", "3");
        assert_eq!(Tag::Feed.enter(&feed).unwrap(), vec![Op::Feed(3)]);

        let rows = Element::new("feedrows").attr("rows", "20");
        assert_eq!(Tag::FeedRows.enter(&rows).unwrap(), vec![Op::FeedRows(20)]);
        assert!(Tag::FeedRows.exit().is_empty());
    }

    #[test]
    fn test_underline_thickness() {
        let plain = Element::new("underline");
        assert_eq!(
            Tag::Underline.enter(&plain).unwrap(),
            vec![Op::SetUnderline(Underline::On { thickness: None })]
        );

        let thick = Element::new("underline").attr("thickness", "2");
        assert_eq!(
            Tag::Underline.enter(&thick).unwrap(),
            vec![Op::SetUnderline(Underline::On { thickness: Some(2) })]
        );
        assert_eq!(Tag::Underline.exit(), vec![Op::SetUnderline(Underline::Off)]);
    }

    #[test]
    fn test_line_height() {
        let default = Element::new("lineheight");
        assert_eq!(
            Tag::LineHeight.enter(&default).unwrap(),
            vec![Op::SetLineHeight(None)]
        );

        let tall = Element::new("lineheight").attr("height", "48");
        assert_eq!(
            Tag::LineHeight.enter(&tall).unwrap(),
            vec![Op::SetLineHeight(Some(48))]
        );
    }

    #[test]
    fn test_malformed_attribute_fails() {
        let feed = Element::new("FEED").attr("lines", "lots");
        let err = Tag::Feed.enter(&feed).unwrap_err();
        assert!(matches!(err, Error::InvalidAttribute { ref tag, .. } if tag == "FEED"));
    }

    #[test]
    fn test_attribute_names_match_handlers() {
        for tag in Tag::ALL {
            if let Some(attribute) = tag.attribute() {
                let element = Element::new(tag.name()).attr(attribute, "nope");
                assert!(tag.enter(&element).is_err(), "{} ignored {}", tag, attribute);
            }
        }
    }
}
