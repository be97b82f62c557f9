//! Small helpers for writing HTML text into a `String` buffer.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Buffer with indentation tracking, so the emitted page stays readable.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    buf: String,
    depth: usize,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    /// Writes a raw line (already escaped) at the current depth.
    pub fn line(&mut self, raw: &str) {
        self.indent();
        self.buf.push_str(raw);
        self.buf.push('\n');
    }

    /// `<tag attrs>` on its own line, then increases depth.
    pub fn open(&mut self, tag: &str, attrs: &str) {
        if attrs.is_empty() {
            self.line(&format!("<{}>", tag));
        } else {
            self.line(&format!("<{} {}>", tag, attrs));
        }
        self.depth += 1;
    }

    pub fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("</{}>", tag));
    }

    /// `<tag attrs>escaped text</tag>` on one line.
    pub fn text(&mut self, tag: &str, attrs: &str, text: &str) {
        self.raw_inline(tag, attrs, &escape(text));
    }

    /// `<tag attrs>inner</tag>` on one line; `inner` is written as-is.
    pub fn raw_inline(&mut self, tag: &str, attrs: &str, inner: &str) {
        if attrs.is_empty() {
            self.line(&format!("<{tag}>{inner}</{tag}>"));
        } else {
            self.line(&format!("<{tag} {attrs}>{inner}</{tag}>"));
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Formats `name="value"` with the value escaped.
pub fn attr(name: &str, value: &str) -> String {
    format!(r#"{}="{}""#, name, escape(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("IA & Data"), "IA &amp; Data");
        assert_eq!(escape(r#"<a href="x">'y'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;y&#39;&lt;/a&gt;");
        assert_eq!(escape("“L'intelligence”"), "“L&#39;intelligence”");
    }

    #[test]
    fn test_writer_nesting() {
        let mut w = HtmlWriter::new();
        w.open("ul", r#"class="space-y-2""#);
        w.text("li", "", "a < b");
        w.close("ul");
        assert_eq!(
            w.finish(),
            "<ul class=\"space-y-2\">\n  <li>a &lt; b</li>\n</ul>\n"
        );
    }
}
