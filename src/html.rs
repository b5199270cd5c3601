use crate::{
    document::{Block, Document, TextAlign},
    markup::Segment,
    palette::Palette,
};

const ROOT_TICK: &str = concat!(
    r#"<svg class="math-root-tick" viewBox="0 0 12 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
    r#"<path d="M1 13.5L4.5 21L11 2" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>"#,
    "</svg>",
);

pub struct HtmlBuilder<'a> {
    palette: &'a Palette,
    content: String,
}

impl<'a> HtmlBuilder<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            content: String::new(),
        }
    }

    pub fn document(self, document: &Document) -> Self {
        document
            .blocks
            .iter()
            .fold(self, |builder, block| builder.block(block))
    }

    pub fn block(mut self, block: &Block) -> Self {
        let class = match block.align {
            TextAlign::Start => "math-line",
            TextAlign::Center => "math-line math-formula",
        };
        self.content.push_str(&format!(r#"<div class="{class}">"#));
        self.write_segments(&block.segments);
        self.content.push_str("</div>\n");
        self
    }

    /// Appends segments inline, without a surrounding line.
    pub fn segments(mut self, segments: &[Segment]) -> Self {
        self.write_segments(segments);
        self
    }

    pub fn build(self) -> String {
        self.content
    }

    fn write_segments(&mut self, segments: &[Segment]) {
        for segment in segments {
            self.write_segment(segment);
        }
    }

    fn write_segment(&mut self, segment: &Segment) {
        match segment {
            Segment::PlainText { content } => {
                self.content.push_str("<span>");
                self.content.push_str(&escape(content));
                self.content.push_str("</span>");
            }
            Segment::Fraction {
                numerator,
                denominator,
            } => {
                self.content.push_str(r#"<span class="math-fraction"><span class="num">"#);
                self.write_segments(numerator);
                self.content
                    .push_str(r#"</span><span class="frac-line"></span><span class="den">"#);
                self.write_segments(denominator);
                self.content.push_str("</span></span>");
            }
            Segment::Root { radicand } => {
                self.content.push_str(r#"<span class="math-root" dir="ltr">"#);
                self.content.push_str(ROOT_TICK);
                self.content.push_str(r#"<span class="math-radicand">"#);
                self.write_segments(radicand);
                self.content.push_str("</span></span>");
            }
            Segment::ColoredSpan { color_key, content } => {
                let color = escape(self.palette.color(color_key));
                self.content.push_str(&format!(
                    r#"<span class="math-color" style="color: {color}">"#
                ));
                self.write_segments(content);
                self.content.push_str("</span>");
            }
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::markup::parser::parse_line;

    fn inline(source: &str) -> String {
        let palette = Palette::default();
        HtmlBuilder::new(&palette)
            .segments(&parse_line(source))
            .build()
    }

    #[test]
    fn test_fraction() {
        assert_eq!(
            inline("1/2"),
            concat!(
                r#"<span class="math-fraction"><span class="num"><span>1</span></span>"#,
                r#"<span class="frac-line"></span><span class="den"><span>2</span></span></span>"#,
            )
        );
    }

    #[test]
    fn test_colored_root() {
        assert_eq!(
            inline("{#blue:√x}"),
            format!(
                r#"<span class="math-color" style="color: #2563eb"><span class="math-root" dir="ltr">{ROOT_TICK}<span class="math-radicand"><span>x</span></span></span></span>"#
            )
        );
    }

    #[test]
    fn test_unknown_color_falls_back_to_name() {
        assert_eq!(
            inline("{#teal:x}"),
            r#"<span class="math-color" style="color: teal"><span>x</span></span>"#
        );
    }

    #[test]
    fn test_escapes_text() {
        assert_eq!(inline("a < b & c"), "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn test_document_lines() {
        let palette = Palette::default();
        let document = Document::from_text("a=b\n\nنعم");
        let html = HtmlBuilder::new(&palette).document(&document).build();
        assert_eq!(
            html,
            concat!(
                "<div class=\"math-line math-formula\"><span>a = b</span></div>\n",
                "<div class=\"math-line\"></div>\n",
                "<div class=\"math-line\"><span>نعم</span></div>\n",
            )
        );
    }
}
