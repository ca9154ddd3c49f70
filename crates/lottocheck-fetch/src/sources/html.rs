//! Regex-based extraction of ball numbers and draw dates from HTML.
//!
//! External pages are uncontrolled, so extraction is positional: qualifying
//! elements are collected in document order and the caller applies the
//! game's count rules (first N are main numbers, the next one is the bonus).

use std::sync::LazyLock;

use regex::Regex;

static BALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<(?:span|div|li|td)[^>]*class\s*=\s*["'][^"']*\b(?:winning-number|powerball|mega-ball|ball|number)\b[^"']*["'][^>]*>\s*(\d{1,3})\s*<"#,
    )
    .expect("valid regex")
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<[^>]*class\s*=\s*["'][^"']*\b(?:item-date|draw-date|date)\b[^"']*["'][^>]*>\s*([^<]+?)\s*<"#,
    )
    .expect("valid regex")
});

/// Collect every numeric ball element, in document order.
///
/// Recognizes `span`/`div`/`li`/`td` elements whose class list mentions a
/// ball or winning-number marker and whose direct text content is a bare
/// integer.
pub(crate) fn extract_ball_numbers(html: &str) -> Vec<i64> {
    BALL_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1)?.as_str().parse::<i64>().ok())
        .collect()
}

/// Extract the first date-like element's text, if any.
pub(crate) fn extract_draw_date(html: &str) -> Option<String> {
    let text = DATE_RE.captures(html)?.get(1)?.as_str().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_balls_in_document_order() {
        let html = r#"
            <div class="numbers">
                <div class="ball">13</div>
                <div class="ball">14</div>
                <div class="ball">32</div>
                <div class="ball">52</div>
                <div class="ball">64</div>
                <div class="ball powerball">12</div>
            </div>
        "#;
        assert_eq!(extract_ball_numbers(html), vec![13, 14, 32, 52, 64, 12]);
    }

    #[test]
    fn accepts_winning_number_class_and_span_elements() {
        let html = r#"
            <span class="winning-number">7</span>
            <span class="winning-number">11</span>
        "#;
        assert_eq!(extract_ball_numbers(html), vec![7, 11]);
    }

    #[test]
    fn ignores_non_numeric_content() {
        let html = r#"<div class="ball">TBD</div><div class="ball">42</div>"#;
        assert_eq!(extract_ball_numbers(html), vec![42]);
    }

    #[test]
    fn ignores_elements_without_ball_classes() {
        let html = r#"<div class="jackpot-amount">50</div><p>12</p>"#;
        assert!(extract_ball_numbers(html).is_empty());
    }

    #[test]
    fn extracts_first_date_element() {
        let html = r#"
            <div class="item-date"> Mon, Oct 13, 2025 </div>
            <div class="item-date">Sat, Oct 11, 2025</div>
        "#;
        assert_eq!(
            extract_draw_date(html).as_deref(),
            Some("Mon, Oct 13, 2025")
        );
    }

    #[test]
    fn date_absent_returns_none() {
        let html = "<html><body><p>no dates here</p></body></html>";
        assert_eq!(extract_draw_date(html), None);
    }
}
