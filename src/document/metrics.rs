//! Helvetica advance widths and greedy line wrapping.
//!
//! Widths are the standard Helvetica AFM values in 1/1000 em for every character the
//! PDF canvas can encode (WinAnsi: printable ASCII, Latin-1 and the 0x80..0x9F
//! punctuation). Anything else is printed as `?` and measured as one. Oblique shares
//! the regular metrics; bold text is never wrapped, so it is not tabulated.

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Width of `?`, the substitute for characters WinAnsi cannot encode.
const REPLACEMENT_WIDTH: u16 = 556;

#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    // ' ' .. '/'
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // '0' .. '?'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // '@' .. 'O'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 'P' .. '_'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // '`' .. 'o'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 'p' .. '~'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const LATIN1_WIDTHS: [u16; 96] = [
    // U+00A0 .. U+00AF
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // U+00B0 .. U+00BF
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // U+00C0 .. U+00CF
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // U+00D0 .. U+00DF
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // U+00E0 .. U+00EF
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    // U+00F0 .. U+00FF
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// WinAnsi 0x80..0x9F: character, byte, width.
#[rustfmt::skip]
const WINANSI_EXTRAS: [(char, u8, u16); 27] = [
    ('€', 0x80, 556), ('‚', 0x82, 222), ('ƒ', 0x83, 556), ('„', 0x84, 333),
    ('…', 0x85, 1000), ('†', 0x86, 556), ('‡', 0x87, 556), ('ˆ', 0x88, 333),
    ('‰', 0x89, 1000), ('Š', 0x8A, 667), ('‹', 0x8B, 333), ('Œ', 0x8C, 1000),
    ('Ž', 0x8E, 611), ('\u{2018}', 0x91, 222), ('\u{2019}', 0x92, 222),
    ('\u{201C}', 0x93, 333), ('\u{201D}', 0x94, 333), ('•', 0x95, 350),
    ('\u{2013}', 0x96, 556), ('\u{2014}', 0x97, 1000), ('˜', 0x98, 333),
    ('™', 0x99, 1000), ('š', 0x9A, 500), ('›', 0x9B, 333), ('œ', 0x9C, 944),
    ('ž', 0x9E, 500), ('Ÿ', 0x9F, 667),
];

/// The WinAnsi byte for `c`, if the encoding has one.
pub fn winansi_byte(c: char) -> Option<u8> {
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' => Some(c as u8),
        _ => WINANSI_EXTRAS
            .iter()
            .find(|(extra, _, _)| *extra == c)
            .map(|(_, byte, _)| *byte),
    }
}

/// Advance width of `c` in 1/1000 em.
pub fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => ASCII_WIDTHS[c as usize - 0x20],
        '\u{a0}'..='\u{ff}' => LATIN1_WIDTHS[c as usize - 0xA0],
        _ => WINANSI_EXTRAS
            .iter()
            .find(|(extra, _, _)| *extra == c)
            .map_or(REPLACEMENT_WIDTH, |(_, _, width)| *width),
    }
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 / 1000.0 * size / PT_PER_MM
}

/// Splits `text` into lines no wider than `max_width` mm.
///
/// Explicit newlines always break. Within a paragraph words are packed greedily; a word
/// wider than a whole line is broken between characters. Empty text yields one empty
/// line.
pub fn wrap_text(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut lines = Vec::new();

    for paragraph in normalized.split('\n') {
        let mut line = String::new();
        for (index, word) in paragraph.split(' ').enumerate() {
            let candidate = if index == 0 {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if text_width(&candidate, size) <= max_width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if text_width(word, size) <= max_width {
                line = word.to_string();
            } else {
                for c in word.chars() {
                    line.push(c);
                    if text_width(&line, size) > max_width && line.chars().count() > 1 {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(c);
                    }
                }
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookups() {
        assert_eq!(char_width(' '), 278);
        assert_eq!(char_width('@'), 1015);
        assert_eq!(char_width('W'), 944);
        assert_eq!(char_width('i'), 222);
        assert_eq!(char_width('~'), 584);
        assert_eq!(char_width('→'), REPLACEMENT_WIDTH);
    }

    #[test]
    fn test_accented_capitals_use_their_own_widths() {
        assert_eq!(char_width('Ó'), 778);
        assert_eq!(char_width('Ç'), 722);
        assert_eq!(char_width('Ã'), 667);
        assert_eq!(char_width('É'), 667);
        assert_eq!(char_width('ç'), 500);
        assert_eq!(char_width('º'), 365);
        assert_eq!(char_width('\u{2014}'), 1000);
    }

    #[test]
    fn test_wrapped_accented_text_fits_width() {
        let text = "ÇÃÓ".repeat(60);
        let lines = wrap_text(&text, 170.0, 12.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), text);
        for line in &lines {
            let units: u32 = line.chars().map(|c| u32::from(char_width(c))).sum();
            let rendered_mm = units as f32 / 1000.0 * 12.0 / PT_PER_MM;
            assert!(rendered_mm <= 170.0, "too wide: {rendered_mm}mm");
        }
        // 18 x "ÇÃÓ" plus "Ç" is 168.2mm; one more "Ã" would be 171.0mm
        assert_eq!(lines[0].chars().count(), 55);
    }

    #[test]
    fn test_winansi_bytes() {
        assert_eq!(winansi_byte('A'), Some(b'A'));
        assert_eq!(winansi_byte('º'), Some(0xBA));
        assert_eq!(winansi_byte('€'), Some(0x80));
        assert_eq!(winansi_byte('\u{201C}'), Some(0x93));
        assert_eq!(winansi_byte('→'), None);
    }

    #[test]
    fn test_width_in_millimetres() {
        // ten digits at 12pt: 5560/1000 * 12pt = 66.72pt
        let width = text_width("0123456789", 12.0);
        assert!((width - 66.72 / PT_PER_MM).abs() < 1e-3);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Fita de cetim", 170.0, 12.0), ["Fita de cetim"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 170.0, 12.0), [""]);
    }

    #[test]
    fn test_newlines_always_break() {
        assert_eq!(wrap_text("a\nb\r\nc", 170.0, 12.0), ["a", "b", "c"]);
    }

    #[test]
    fn test_words_are_packed_greedily() {
        // "aaa" is 3 * 556 = 1668 units, about 7.06mm at 12pt; two words plus a space
        // need about 15.3mm
        let lines = wrap_text("aaa aaa aaa", 15.0, 12.0);
        assert_eq!(lines, ["aaa", "aaa", "aaa"]);
        let lines = wrap_text("aaa aaa aaa", 16.0, 12.0);
        assert_eq!(lines, ["aaa aaa", "aaa"]);
    }

    #[test]
    fn test_overlong_word_breaks_between_characters() {
        let word = "x".repeat(100);
        let lines = wrap_text(&word, 20.0, 12.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        assert!(lines.iter().all(|l| text_width(l, 12.0) <= 20.0));
    }

    #[test]
    fn test_lines_fit_width() {
        let text = "Fornecimento de fita de cetim dupla face, 25 mm, cor azul marinho, \
                    em rolos de 100 metros, com etiquetagem individual por rolo"
            .repeat(4);
        for line in wrap_text(&text, 170.0, 12.0) {
            assert!(text_width(&line, 12.0) <= 170.0, "too wide: {line}");
        }
    }
}
