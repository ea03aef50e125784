//! Minimal XML element tree and pretty printer.
//!
//! The platform document is built as a tree of [`Element`] values and
//! serialized in one pass, so attribute escaping is handled in exactly one
//! place instead of at every call site that formats markup.

use std::fmt;
use std::fmt::Write as _;

/// Number of spaces per nesting level in the serialized document.
const INDENT: &str = "    ";

/// XML declaration emitted at the top of every document.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// An XML element with ordered attributes and child elements.
///
/// Attributes are kept in insertion order so the serialized document is a
/// deterministic function of how the tree was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute, builder-style. Values are escaped at
    /// serialization time, so any string is safe here.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element, builder-style.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element in place.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize the tree rooted at this element into a complete document:
    /// XML declaration, then the indented tree.
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push('\n');
        self.write_indented(&mut out, 0);
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            // String formatting into a String cannot fail.
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push_str(">\n");
            for child in &self.children {
                child.write_indented(out, depth + 1);
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
            let _ = writeln!(out, "</{}>", self.name);
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_indented(&mut out, 0);
        f.write_str(&out)
    }
}

/// Escape a string for use inside a double-quoted attribute value.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let element = Element::new("host").attr("id", "Node-1").attr("speed", "2445Mf");
        assert_eq!(element.to_string(), "<host id=\"Node-1\" speed=\"2445Mf\"/>\n");
    }

    #[test]
    fn test_nested_elements_indent() {
        let route = Element::new("route")
            .attr("src", "Node-1")
            .attr("dst", "Node-2")
            .child(Element::new("link_ctn").attr("id", "1"));
        assert_eq!(
            route.to_string(),
            "<route src=\"Node-1\" dst=\"Node-2\">\n    <link_ctn id=\"1\"/>\n</route>\n"
        );
    }

    #[test]
    fn test_document_has_declaration() {
        let doc = Element::new("platform").attr("version", "4.1").to_document();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(doc.ends_with("<platform version=\"4.1\"/>\n"));
    }

    #[test]
    fn test_attribute_values_escaped() {
        let element = Element::new("host").attr("id", "a<b>&\"c\"");
        let rendered = element.to_string();
        assert_eq!(rendered, "<host id=\"a&lt;b&gt;&amp;&quot;c&quot;\"/>\n");
    }

    #[test]
    fn test_attribute_order_preserved() {
        let element = Element::new("link")
            .attr("id", "loopback")
            .attr("bandwidth", "200GBps")
            .attr("latency", "1us")
            .attr("sharing_policy", "FATPIPE");
        let rendered = element.to_string();
        let id_pos = rendered.find("id=").unwrap();
        let bandwidth_pos = rendered.find("bandwidth=").unwrap();
        let latency_pos = rendered.find("latency=").unwrap();
        let sharing_pos = rendered.find("sharing_policy=").unwrap();
        assert!(id_pos < bandwidth_pos);
        assert!(bandwidth_pos < latency_pos);
        assert!(latency_pos < sharing_pos);
    }

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new("link").attr("id", "3").attr("latency", "5us");
        assert_eq!(element.attribute("id"), Some("3"));
        assert_eq!(element.attribute("latency"), Some("5us"));
        assert_eq!(element.attribute("bandwidth"), None);
    }

    #[test]
    fn test_deep_nesting_indents_per_level() {
        let tree = Element::new("platform")
            .attr("version", "4.1")
            .child(
                Element::new("zone")
                    .attr("id", "zone0")
                    .child(Element::new("host").attr("id", "Node-1")),
            );
        let expected = [
            "<platform version=\"4.1\">",
            "    <zone id=\"zone0\">",
            "        <host id=\"Node-1\"/>",
            "    </zone>",
            "</platform>",
            "",
        ]
        .join("\n");
        assert_eq!(tree.to_string(), expected);
    }
}
