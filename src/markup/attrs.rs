//! Attribute resolution for tag handlers.

use crate::error::{Error, Result};
use crate::markup::node::Element;

/// Read a numeric attribute as a byte-sized count.
///
/// Absent attributes resolve to `None`. Surrounding whitespace is ignored;
/// anything else that isn't an integer in `0..=255` is an
/// [`Error::InvalidAttribute`] naming the element.
pub fn byte(element: &Element, attribute: &'static str) -> Result<Option<u8>> {
    let Some(raw) = element.attribute(attribute) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u8>()
        .map(Some)
        .map_err(|_| Error::InvalidAttribute {
            tag: element.name.clone(),
            attribute,
            value: raw.to_string(),
        })
}

/// Like [`byte`], falling back to `default` when the attribute is absent.
pub fn byte_or(element: &Element, attribute: &'static str, default: u8) -> Result<u8> {
    Ok(byte(element, attribute)?.unwrap_or(default))
}
