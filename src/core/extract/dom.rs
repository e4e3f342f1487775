use regex::Regex;
use scraper::ElementRef;

/// Every descendant text node concatenated as-is.
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Each text node trimmed, empty ones dropped, the rest concatenated.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn class_matches(element: ElementRef<'_>, pattern: &Regex) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|class| pattern.is_match(class))
}

pub fn has_tag(element: ElementRef<'_>, tags: &[String]) -> bool {
    let name = element.value().name();
    tags.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}
