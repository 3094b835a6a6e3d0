extern crate regex;

use regex::{Captures, Regex};
use std::borrow::Cow;

pub(crate) struct RegexSet {
    source: Regex,
    tag: Regex,
    entity: Regex,
    statement: Regex,
    div: Regex,
    body: Regex,
}
impl RegexSet {
    pub(crate) fn new() -> Self {
        Self {
            source: Regex::new(
                r#"(?is)<pre\b[^>]*\bid\s*=\s*["']program-source-text["'][^>]*>(.*?)</pre\s*>"#,
            )
            .unwrap(),
            tag: Regex::new(r"(?s)<[^>]*>").unwrap(),
            entity: Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap(),
            statement: Regex::new(
                r#"(?i)<div\b[^>]*\bclass\s*=\s*["']problem-statement["'][^>]*>"#,
            )
            .unwrap(),
            div: Regex::new(r"(?i)<(/?)div\b[^>]*>").unwrap(),
            body: Regex::new(r"(?is)(<body\b[^>]*>).*</body\s*>").unwrap(),
        }
    }
}

fn decode_entity(caps: &Captures) -> Option<char> {
    let name = &caps[1];
    if let Some(num) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(num, 16).ok().and_then(char::from_u32);
    }
    if let Some(num) = name.strip_prefix('#') {
        return num.parse().ok().and_then(char::from_u32);
    }
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}

impl RegexSet {
    /// Replaces character references, leaving unknown ones as they are.
    pub(crate) fn decode<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.entity.replace_all(text, |caps: &Captures| {
            decode_entity(caps).map_or_else(|| caps[0].to_string(), String::from)
        })
    }

    /// Decoded text of the program source element, if the page has one.
    pub(crate) fn source_text(&self, page: &str) -> Option<String> {
        let inner = self.source.captures(page)?.get(1)?.as_str();
        let text = self.tag.replace_all(inner, "");
        Some(self.decode(&text).into_owned())
    }

    /// Byte range of the `problem-statement` div including its closing tag.
    fn statement_range(&self, page: &str) -> Option<(usize, usize)> {
        let begin = self.statement.find(page)?;
        let mut depth = 0usize;
        for tag in self.div.captures_iter(&page[begin.start()..]) {
            let m = tag.get(0)?;
            if tag[1].is_empty() {
                depth += 1;
            } else {
                depth -= 1;
                if depth == 0 {
                    return Some((begin.start(), begin.start() + m.end()));
                }
            }
        }
        None
    }

    /// Replaces the body of `page` with the problem statement alone.
    pub(crate) fn trim_statement(&self, page: &str) -> Option<String> {
        let (begin, end) = self.statement_range(page)?;
        let statement = &page[begin..end];
        if !self.body.is_match(page) {
            return None;
        }
        Some(
            self.body
                .replace(page, |caps: &Captures| {
                    format!("{}{}</body>", &caps[1], statement)
                })
                .into_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RegexSet;

    #[test]
    fn decodes_entities() {
        let set = RegexSet::new();
        assert_eq!(
            set.decode("a &lt; b &amp;&amp; c &gt; d &quot;x&quot; &#39;y&#x27;"),
            "a < b && c > d \"x\" 'y'"
        );
        assert_eq!(set.decode("&unknown; &#1114112;"), "&unknown; &#1114112;");
        assert_eq!(set.decode("&amp;lt;"), "&lt;");
    }

    #[test]
    fn extracts_source_text() {
        let set = RegexSet::new();
        let page = r#"<html><body><div class="roundbox">
<pre id="program-source-text" class="prettyprint lang-cpp linenums program-source" style="padding: 0.5em;">#include &lt;cstdio&gt;
int main() { if (1 &amp;&amp; 2) puts(&quot;hi&quot;); }
</pre></div></body></html>"#;
        assert_eq!(
            set.source_text(page).unwrap(),
            "#include <cstdio>\nint main() { if (1 && 2) puts(\"hi\"); }\n"
        );
    }

    #[test]
    fn strips_markup_inside_source() {
        let set = RegexSet::new();
        let page = r#"<pre id='program-source-text'><span>x</span> = 1</pre>"#;
        assert_eq!(set.source_text(page).unwrap(), "x = 1");
    }

    #[test]
    fn missing_source_element() {
        let set = RegexSet::new();
        assert!(set
            .source_text("<html><pre id=\"other\">x</pre></html>")
            .is_none());
    }

    #[test]
    fn trims_page_to_statement() {
        let set = RegexSet::new();
        let page = concat!(
            "<html><head><title>A</title></head><body class=\"x\">",
            "<div id=\"header\">menu</div>",
            "<div class=\"problem-statement\"><div class=\"header\">A. A+B</div>",
            "<div><p>Sum</p></div></div>",
            "<div id=\"footer\">footer</div></body></html>"
        );
        assert_eq!(
            set.trim_statement(page).unwrap(),
            concat!(
                "<html><head><title>A</title></head><body class=\"x\">",
                "<div class=\"problem-statement\"><div class=\"header\">A. A+B</div>",
                "<div><p>Sum</p></div></div></body></html>"
            )
        );
        assert!(set.trim_statement("<html><body>none</body></html>").is_none());
    }
}
