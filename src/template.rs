/// Page shell for the embedded PDF. `{title}` and `{pdf_href}` are the
/// only substitution points.
const PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,height=device-height,initial-scale=1" />
  <title>{title}</title>
  <style>
    html, body {
      width: 100%;
      height: 100%;
      margin: 0;
      padding: 0;
      overflow: hidden;
      background: #0000;
    }
    /* Full-bleed PDF */
    object {
      width: 100vw;
      height: 100vh;
      border: 0;
      display: block;
    }
  </style>
</head>
<body>
  <object data="{pdf_href}" type="application/pdf">
    <!-- Fallback if embedding is disabled -->
    <a href="{pdf_href}">{pdf_href}</a>
  </object>
</body>
</html>
"#;

/// Escape characters reserved in HTML text and attribute values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render the page with the given title and PDF href, escaping both.
pub fn render(title: &str, pdf_href: &str) -> String {
    PAGE.replace("{title}", &escape(title))
        .replace("{pdf_href}", &escape(pdf_href))
}

#[cfg(test)]
mod tests {
    use super::{escape, render};

    #[test]
    fn escapes_reserved_chars() {
        assert_eq!(escape("a&b<c>.pdf"), "a&amp;b&lt;c&gt;.pdf");
        assert_eq!(escape(r#"a"b'c"#), "a&quot;b&#x27;c");
        assert_eq!(escape("plain.pdf"), "plain.pdf");
    }

    #[test]
    fn ampersand_escaped_first() {
        // No double-escaping of the entities themselves
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn substitutes_title_and_href() {
        let html = render("My Paper", "paper.pdf");
        assert!(html.contains("<title>My Paper</title>"));
        assert!(html.contains(r#"<object data="paper.pdf" type="application/pdf">"#));
        assert!(html.contains(r#"<a href="paper.pdf">paper.pdf</a>"#));
    }

    #[test]
    fn single_object_element() {
        let html = render("Document", "doc.pdf");
        assert_eq!(html.matches("<object ").count(), 1);
    }

    #[test]
    fn reserved_chars_never_appear_raw() {
        let html = render("R&D <notes>", "a&b<c>.pdf");
        assert!(html.contains("<title>R&amp;D &lt;notes&gt;</title>"));
        assert!(html.contains(r#"data="a&amp;b&lt;c&gt;.pdf""#));
        assert!(!html.contains("a&b<c>.pdf"));
    }

    #[test]
    fn unicode_title_passes_through() {
        let html = render("Überblick", "doc.pdf");
        assert!(html.contains("<title>Überblick</title>"));
    }
}
