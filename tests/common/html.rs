//! Minimal HTML inspection for rendered pages
//!
//! Finds elements by id and reads their classes, text and children. Good
//! enough for the markup the application renders; not a general parser.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening tags with their attribute list
static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<([a-zA-Z][a-zA-Z0-9]*)((?:\s+[^\s=>/]+(?:\s*=\s*"[^"]*")?)*)\s*(/?)>"#).unwrap());

/// Any opening or closing tag
static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*?(/?)>"#).unwrap());

static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([^\s=/>]+)(?:\s*=\s*"([^"]*)")?"#).unwrap());

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

const VOID_ELEMENTS: [&str; 8] = ["area", "br", "hr", "img", "input", "link", "meta", "source"];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Decode the entities the renderer emits
pub fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// A rendered HTML document
#[derive(Debug, Clone)]
pub struct Html {
    source: String,
}

/// An element located in a document
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    /// Raw markup between the opening and closing tag
    pub inner_html: String,
}

impl Html {
    pub fn parse(source: &str) -> Self {
        Self {
            source: COMMENT.replace_all(source, "").into_owned(),
        }
    }

    /// First element whose `id` attribute equals `id`
    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        for open in OPEN_TAG.captures_iter(&self.source) {
            let attributes = parse_attributes(open.get(2).map_or("", |m| m.as_str()));
            if attributes.get("id").map(String::as_str) != Some(id) {
                continue;
            }

            let tag = open[1].to_string();
            let whole = open.get(0)?;
            let self_closing = !open[3].is_empty();
            let inner_html = if self_closing || is_void(&tag) {
                String::new()
            } else {
                let rest = &self.source[whole.end()..];
                let end = matching_close(rest, &tag)?;
                rest[..end].to_string()
            };

            return Some(Element {
                tag,
                attributes,
                inner_html,
            });
        }
        None
    }

    /// Element by id, panicking with the page source when it is missing
    pub fn expect_element(&self, id: &str) -> Element {
        self.element_by_id(id)
            .unwrap_or_else(|| panic!("No element with id {:?} in:\n{}", id, self.source))
    }
}

fn parse_attributes(raw: &str) -> HashMap<String, String> {
    ATTRIBUTE
        .captures_iter(raw)
        .map(|c| {
            (
                c[1].to_ascii_lowercase(),
                c.get(2).map(|v| unescape(v.as_str())).unwrap_or_default(),
            )
        })
        .collect()
}

/// Offset of the closing tag that balances an already opened `tag`
fn matching_close(rest: &str, tag: &str) -> Option<usize> {
    let mut depth = 1usize;
    for found in ANY_TAG.captures_iter(rest) {
        if !found[2].eq_ignore_ascii_case(tag) {
            continue;
        }
        let closing = !found[1].is_empty();
        let self_closing = !found[3].is_empty();
        if closing {
            depth -= 1;
            if depth == 0 {
                return found.get(0).map(|m| m.start());
            }
        } else if !self_closing {
            depth += 1;
        }
    }
    None
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.attr("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(&class)
    }

    /// Text content with tags removed and entities decoded
    pub fn text(&self) -> String {
        let stripped = ANY_TAG.replace_all(&self.inner_html, "");
        unescape(&stripped)
    }

    /// Number of direct child elements
    pub fn child_count(&self) -> usize {
        let mut depth = 0usize;
        let mut children = 0;
        for found in ANY_TAG.captures_iter(&self.inner_html) {
            let closing = !found[1].is_empty();
            let self_closing = !found[3].is_empty() || is_void(&found[2]);
            if closing {
                depth = depth.saturating_sub(1);
            } else {
                if depth == 0 {
                    children += 1;
                }
                if !self_closing {
                    depth += 1;
                }
            }
        }
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<ul id="nav"><li id="a" class="nav-item active"><a href="/">A &amp; B</a></li><li id="b" class="nav-item"><input type="text" name="x"></li></ul>
<div id="outer"><div class="inner"><div></div></div><br><script type="application/json">{}</script></div>"#;

    #[test]
    fn finds_nested_elements() {
        let html = Html::parse(PAGE);
        let nav = html.expect_element("nav");
        assert_eq!(nav.tag, "ul");
        assert_eq!(nav.child_count(), 2);

        let outer = html.expect_element("outer");
        assert_eq!(outer.child_count(), 3);
    }

    #[test]
    fn reads_classes_and_text() {
        let html = Html::parse(PAGE);
        let a = html.expect_element("a");
        assert!(a.has_class("active"));
        assert_eq!(a.text(), "A & B");
        assert!(!html.expect_element("b").has_class("active"));
        assert!(html.element_by_id("missing").is_none());
    }
}
