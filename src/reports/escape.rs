//! Escaping utilities for safe report generation.
//!
//! Metadata strings, file names and gate-report excerpts come from the
//! project being analyzed. They may contain HTML that would inject markup
//! into the generated Pages site, Markdown syntax that would corrupt the
//! comprehensive report, or commas and quotes that would shift CSV columns.
//!
//! All project-controlled data must be escaped before embedding in reports.

/// Escape a string for safe inclusion in HTML content.
///
/// Escapes the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use ip_kpis::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<b>FIFO</b> & 'UART'"),
///     "&lt;b&gt;FIFO&lt;/b&gt; &amp; &#x27;UART&#x27;");
///
/// assert_eq!(escape_html("plain text"), "plain text");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use ip_kpis::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("fft_core"), "fft\\_core");
/// assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in Markdown list items.
///
/// Lighter than inline escaping: underscores are kept so file paths such
/// as `reports/gate_analysis_report.md` stay readable.
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Quote a CSV field per RFC 4180 when it contains a separator, quote or
/// line break. Line breaks are flattened to spaces.
///
/// # Examples
///
/// ```
/// use ip_kpis::reports::escape::escape_csv;
///
/// assert_eq!(escape_csv("uart"), "uart");
/// assert_eq!(escape_csv("a,b"), "\"a,b\"");
/// assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn escape_csv(s: &str) -> String {
    if !s.contains([',', '"', '\n', '\r']) {
        return s.to_string();
    }
    let flattened = s.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_injection_in_metadata() {
        // IP description carrying a script tag
        assert_eq!(
            escape_html("FFT <script>alert('x')</script>"),
            "FFT &lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );

        // Already-escaped entities are escaped again
        assert_eq!(escape_html("&lt;tag&gt;"), "&amp;lt;tag&amp;gt;");
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("hello"), "hello");
        assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
        assert_eq!(escape_markdown_inline("tb_fifo"), "tb\\_fifo");
        assert_eq!(escape_markdown_inline("# heading"), "\\# heading");
    }

    #[test]
    fn test_escape_markdown_list() {
        assert_eq!(escape_markdown_list("item"), "item");
        assert_eq!(escape_markdown_list("multi\nline"), "multi; line");
        assert_eq!(
            escape_markdown_list("reports/gate_analysis_report.md"),
            "reports/gate_analysis_report.md"
        );
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("needs_improvement"), "needs_improvement");
        assert_eq!(escape_csv("line1\nline2"), "\"line1 line2\"");
        assert_eq!(escape_csv("a,\"b\""), "\"a,\"\"b\"\"\"");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_markdown_inline(""), "");
        assert_eq!(escape_csv(""), "");
    }

    #[test]
    fn test_unicode_preservation() {
        assert_eq!(escape_html("die area ~0.42 mm²"), "die area ~0.42 mm²");
        assert_eq!(escape_markdown_list("✓ passing"), "✓ passing");
    }
}
