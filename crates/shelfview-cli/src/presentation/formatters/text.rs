use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use url::Url;

pub const DESCRIPTION_PLACEHOLDER: &str = "No description.";
pub const MISSING_CATEGORY: &str = "N/A";
const NO_IMAGE: &str = "—";

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // one column is reserved for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Left-align `text` in `width` terminal columns
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Greedy word wrap; words longer than `width` are split
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        if line_len > 0 || paragraph.trim().is_empty() {
            lines.push(line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub fn description_or_placeholder(description: &str) -> &str {
    if description.trim().is_empty() {
        DESCRIPTION_PLACEHOLDER
    } else {
        description
    }
}

pub fn category_label(category: Option<&str>) -> &str {
    category.unwrap_or(MISSING_CATEGORY)
}

/// Host (and explicit port) of an image URL, or a dash when there is no
/// usable URL
pub fn image_label(url: Option<&str>) -> String {
    url.map(str::trim)
        .and_then(|url| Url::parse(url).ok())
        .and_then(|url| {
            let host = url.host_str()?.to_string();
            Some(match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host,
            })
        })
        .unwrap_or_else(|| NO_IMAGE.to_string())
}
