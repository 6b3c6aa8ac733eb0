pub mod markup;

/// Clean text pasted from rich-text sources into something espeak reads well:
/// drop markup, decode common entities, squeeze whitespace.
pub fn normalize(input: &str) -> String {
    let stripped = markup::strip_tags(input);
    let decoded = markup::decode_entities(&stripped);
    markup::collapse_whitespace(&decoded).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize("안녕하세요. 공지사항입니다."), "안녕하세요. 공지사항입니다.");
    }

    #[test]
    fn test_announcement_html() {
        assert_eq!(
            normalize("<p>오늘&nbsp;회의는</p>\n<p>  3시 &amp; 4시</p>"),
            "오늘 회의는 3시 & 4시"
        );
    }

    #[test]
    fn test_tags_are_stripped_before_decoding() {
        // An escaped tag survives as literal text
        assert_eq!(normalize("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn test_comparison_text_unchanged() {
        assert_eq!(normalize("x < 3 and y > 2"), "x < 3 and y > 2");
        assert_eq!(normalize("<p>x < 3 and y > 2</p>"), "x < 3 and y > 2");
    }

    #[test]
    fn test_markup_only_becomes_empty() {
        assert_eq!(normalize("<br>&nbsp;<div></div>"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
