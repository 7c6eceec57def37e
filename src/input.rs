use std::io::BufRead;

use anyhow::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Feed,
    Play,
    Status,
    Quit,
}

pub(crate) fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::Feed),
        "2" => Some(MenuChoice::Play),
        "3" => Some(MenuChoice::Status),
        "4" => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// `Ok(None)` means the stream is closed, not that the read failed.
pub(crate) fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Returns the trimmed name, or the fallback when the player typed nothing;
/// the flag reports whether the fallback was used.
pub(crate) fn name_or_default<'a>(raw: &'a str, fallback: &'a str) -> (&'a str, bool) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        (fallback, true)
    } else {
        (trimmed, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn the_four_menu_digits_parse() {
        assert_eq!(parse_choice("1"), Some(MenuChoice::Feed));
        assert_eq!(parse_choice("2"), Some(MenuChoice::Play));
        assert_eq!(parse_choice("3"), Some(MenuChoice::Status));
        assert_eq!(parse_choice("4"), Some(MenuChoice::Quit));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_choice("  2  "), Some(MenuChoice::Play));
        assert_eq!(parse_choice("\t4"), Some(MenuChoice::Quit));
    }

    #[test]
    fn everything_else_is_rejected() {
        for bad in ["", "0", "5", "12", "feed", "one", "1.0", "-1"] {
            assert_eq!(parse_choice(bad), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn read_line_strips_the_terminator_and_signals_eof() {
        let mut input = Cursor::new("Rex\r\n2\n");
        assert_eq!(read_line(&mut input).unwrap(), Some("Rex".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), Some("2".to_string()));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn blank_names_fall_back() {
        assert_eq!(name_or_default("Rex", "Pixel"), ("Rex", false));
        assert_eq!(name_or_default("  Rex  ", "Pixel"), ("Rex", false));
        assert_eq!(name_or_default("", "Pixel"), ("Pixel", true));
        assert_eq!(name_or_default("   ", "Pixel"), ("Pixel", true));
    }
}
