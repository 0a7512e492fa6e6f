//! Formatting helpers for presenting content.

use api::Language;
use time::macros::format_description;
use time::Date;

/// Render an ISO `YYYY-MM-DD` date the way each audience reads it:
/// `12/15/2025` in English, `15/12/2025` in Hindi. Unparseable input is
/// returned untouched.
pub fn format_event_date(raw: &str, language: Language) -> String {
    let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) else {
        return raw.to_string();
    };
    let formatted = match language {
        Language::En => {
            date.format(format_description!("[month padding:none]/[day padding:none]/[year]"))
        }
        Language::Hi => {
            date.format(format_description!("[day padding:none]/[month padding:none]/[year]"))
        }
    };
    formatted.unwrap_or_else(|_| raw.to_string())
}

/// First `max_chars` characters of `text`, cut at a word boundary and
/// suffixed with an ellipsis when anything was dropped.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let ends_on_word = text
        .chars()
        .nth(max_chars)
        .is_some_and(char::is_whitespace);
    let trimmed = match cut.rfind(char::is_whitespace) {
        _ if ends_on_word => cut.as_str(),
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches([',', '.', ';', ':', '।']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_follow_locale_order() {
        assert_eq!(format_event_date("2025-12-15", Language::En), "12/15/2025");
        assert_eq!(format_event_date("2025-12-15", Language::Hi), "15/12/2025");
        assert_eq!(format_event_date("2025-01-05", Language::En), "1/5/2025");
    }

    #[test]
    fn malformed_dates_pass_through() {
        assert_eq!(format_event_date("soon", Language::En), "soon");
        assert_eq!(format_event_date("2025-13-40", Language::Hi), "2025-13-40");
    }

    #[test]
    fn short_text_is_not_cut() {
        assert_eq!(excerpt("Love is worship.", 40), "Love is worship.");
    }

    #[test]
    fn long_text_is_cut_on_a_word() {
        let cut = excerpt("True enlightenment comes from within, always.", 24);
        assert_eq!(cut, "True enlightenment comes…");
    }

    #[test]
    fn devanagari_is_cut_on_char_boundaries() {
        let text = "सच्चा आत्मज्ञान भीतर से आता है।";
        let cut = excerpt(text, 10);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 11);
    }
}
