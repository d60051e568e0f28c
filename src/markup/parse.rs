//! XML parsing into the markup tree.
//!
//! `roxmltree` does the parsing; this module only copies what the walker
//! needs into [`Node`]s. Comments and processing instructions are dropped,
//! and the text on either side of a dropped node is joined, so
//! `a<!-- note -->b` reads as the single text `ab`.
//!
//! `roxmltree` recurses once per open element, so nesting is measured on the
//! raw text first and documents deeper than [`MAX_DEPTH`] are rejected before
//! the parser sees them.

use crate::error::{Error, Result};
use crate::markup::node::{Element, Node};

/// Deepest element nesting a document may have.
pub const MAX_DEPTH: usize = 256;

/// Parse a markup document and return its root element.
///
/// The whole document is parsed before anything is returned, so malformed
/// input never reaches a device.
///
/// ```
/// use printml::markup::{self, Node};
///
/// let root = markup::parse("<printout><bold>hi</bold></printout>")?;
/// let Node::Element(printout) = root else { unreachable!() };
/// assert_eq!(printout.name, "printout");
/// # Ok::<(), printml::Error>(())
/// ```
pub fn parse(source: &str) -> Result<Node> {
    check_depth(source)?;
    let document = roxmltree::Document::parse(source)?;
    Ok(Node::Element(convert(document.root_element())))
}

/// Parse a markup document from raw bytes, which must be UTF-8.
pub fn parse_bytes(source: &[u8]) -> Result<Node> {
    let source = std::str::from_utf8(source).map_err(Error::Encoding)?;
    parse(source)
}

/// Reject documents nesting deeper than [`MAX_DEPTH`].
///
/// Only counts tags: comments, CDATA, processing instructions and
/// declarations are skipped, and quoted attribute values may hold `>`.
/// Anything malformed is left for the parser to report.
fn check_depth(source: &str) -> Result<()> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('<') {
        let start = pos + offset;
        let rest = &source[start..];
        pos = if rest.starts_with("<!--") {
            skip_past(source, start, "-->")
        } else if rest.starts_with("<![CDATA[") {
            skip_past(source, start, "]]>")
        } else if rest.starts_with("<?") {
            skip_past(source, start, "?>")
        } else if rest.starts_with("<!") {
            skip_past(source, start, ">")
        } else if rest.starts_with("</") {
            depth = depth.saturating_sub(1);
            skip_past(source, start, ">")
        } else {
            let Some(close) = tag_close(bytes, start) else {
                break;
            };
            if bytes[close - 1] != b'/' {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(Error::TooDeep { limit: MAX_DEPTH });
                }
            }
            close + 1
        };
    }

    Ok(())
}

fn skip_past(source: &str, from: usize, terminator: &str) -> usize {
    source[from..]
        .find(terminator)
        .map_or(source.len(), |i| from + i + terminator.len())
}

/// Index of the `>` ending the tag that opens at `start`.
fn tag_close(bytes: &[u8], start: usize) -> Option<usize> {
    let mut quote = None;
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i),
            None => {}
        }
    }
    None
}

/// Element without children, as the start of a conversion frame.
fn shell(node: roxmltree::Node<'_, '_>) -> Element {
    Element {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        children: Vec::new(),
    }
}

fn push_text(children: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(previous)) = children.last_mut() {
        previous.push_str(text);
    } else {
        children.push(Node::Text(text.to_string()));
    }
}

/// Copy a roxmltree subtree. Iterative, so document depth never grows the
/// call stack.
fn convert(root: roxmltree::Node<'_, '_>) -> Element {
    let mut stack = vec![(shell(root), root.children())];
    let mut finished = None;

    while let Some((_, children)) = stack.last_mut() {
        match children.next() {
            Some(child) if child.is_element() => {
                stack.push((shell(child), child.children()));
            }
            Some(child) if child.is_text() => {
                if let (Some((element, _)), Some(text)) = (stack.last_mut(), child.text()) {
                    push_text(&mut element.children, text);
                }
            }
            Some(_) => {}
            None => {
                if let Some((element, _)) = stack.pop() {
                    match stack.last_mut() {
                        Some((parent, _)) => parent.children.push(Node::Element(element)),
                        None => finished = Some(element),
                    }
                }
            }
        }
    }

    finished.unwrap_or_else(|| shell(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn root(source: &str) -> Element {
        match parse(source).unwrap() {
            Node::Element(element) => element,
            Node::Text(text) => panic!("root parsed as text: {:?}", text),
        }
    }

    #[test]
    fn test_parse_tree_shape() {
        let printout = root(r#"<printout><feed lines="3"/><bold>HI</bold></printout>"#);
        assert_eq!(
            printout,
            Element::new("printout")
                .child(Element::new("feed").attr("lines", "3"))
                .child(Element::new("bold").child("HI"))
        );
    }

    #[test]
    fn test_whitespace_text_is_kept() {
        let printout = root("<printout>\n  <br/>\n</printout>");
        assert_eq!(
            printout.children,
            vec![
                Node::text("\n  "),
                Node::Element(Element::new("br")),
                Node::text("\n"),
            ]
        );
    }

    #[test]
    fn test_tag_case_is_preserved() {
        let root = root("<PrintOut><Bold>x</Bold></PrintOut>");
        assert_eq!(root.name, "PrintOut");
    }

    #[test]
    fn test_comments_dropped_and_text_joined() {
        let bold = root("<bold>a<!-- note -->b<?pi x?>c</bold>");
        assert_eq!(bold.children, vec![Node::text("abc")]);
    }

    #[test]
    fn test_cdata_and_entities() {
        let bold = root("<bold>&lt;<![CDATA[&raw]]>&amp;</bold>");
        assert_eq!(bold.children, vec![Node::text("<&raw&")]);
    }

    fn nested(depth: usize) -> String {
        format!("{}x{}", "<a>".repeat(depth), "</a>".repeat(depth))
    }

    #[test]
    fn test_deep_nesting_converts() {
        let depth = MAX_DEPTH;
        let mut element = root(&nested(depth));
        for _ in 1..depth {
            element = match element.children.into_iter().next() {
                Some(Node::Element(child)) => child,
                other => panic!("unexpected node {:?}", other),
            };
        }
        assert_eq!(element.children, vec![Node::text("x")]);
    }

    #[test]
    fn test_too_deep_is_rejected_before_parsing() {
        assert!(check_depth(&nested(MAX_DEPTH)).is_ok());
        assert!(matches!(
            check_depth(&nested(MAX_DEPTH + 1)),
            Err(Error::TooDeep { limit: MAX_DEPTH })
        ));
        assert!(matches!(parse(&nested(5000)), Err(Error::TooDeep { .. })));
    }

    #[test]
    fn test_depth_ignores_non_element_markup() {
        let filler = r#"<br/><br lines="2" /><!-- <a> --><![CDATA[<a>]]><?pi <a>?><b x="<a>" y='>'/>"#;
        let source = format!(
            "<!DOCTYPE printout>{}{}{}",
            "<a>".repeat(MAX_DEPTH),
            filler.repeat(50),
            "</a>".repeat(MAX_DEPTH)
        );
        assert!(check_depth(&source).is_ok());
    }

    #[test]
    fn test_closing_tags_release_depth() {
        let siblings = "<a><a></a></a>".repeat(MAX_DEPTH * 4);
        assert!(check_depth(&format!("<printout>{}</printout>", siblings)).is_ok());
    }

    #[test]
    fn test_malformed_markup() {
        assert!(matches!(parse("<printout><bold></printout>"), Err(Error::Parse(_))));
        assert!(matches!(parse(""), Err(Error::Parse(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            parse_bytes(b"<bold>\xFF</bold>"),
            Err(Error::Encoding(_))
        ));
    }
}
