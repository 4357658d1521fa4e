use quick_xml::escape::escape;

const INDENT: &str = "  ";

/// Line-oriented XML builder emitting one element per line with two-space indentation.
pub(crate) struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    pub(crate) fn new(declaration: &str) -> Self {
        let mut out = String::with_capacity(4096);
        out.push_str(declaration);
        out.push('\n');

        Self { out, depth: 0 }
    }

    pub(crate) fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.push_attributes(attributes);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    pub(crate) fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    /// Writes `<tag>value</tag>`; an empty value still produces both tags.
    pub(crate) fn leaf(&mut self, tag: &str, value: &str) {
        self.leaf_with_attributes(tag, &[], value);
    }

    pub(crate) fn leaf_with_attributes(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        value: &str,
    ) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.push_attributes(attributes);
        self.out.push('>');
        self.out.push_str(&escape(value));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    pub(crate) fn bool_leaf(&mut self, tag: &str, value: bool) {
        self.leaf(tag, if value { "true" } else { "false" });
    }

    pub(crate) fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }

        self.out
    }

    fn push_attributes(&mut self, attributes: &[(&str, &str)]) {
        for (name, value) in attributes {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape(*value));
            self.out.push('"');
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect nested elements to be indented and text to be escaped
    #[test]
    fn writes_indented_escaped_elements() {
        let mut writer = XmlWriter::new("<?xml?>");
        writer.open("a", &[("k", "x\"y")]);
        writer.leaf("b", "1 < 2 & 3");
        writer.leaf("c", "");
        writer.close("a");

        assert_eq!(
            writer.finish(),
            "<?xml?>\n<a k=\"x&quot;y\">\n  <b>1 &lt; 2 &amp; 3</b>\n  <c></c>\n</a>"
        );
    }
}
