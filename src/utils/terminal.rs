//! Terminal output sanitization
//!
//! Story fields are shown verbatim in the TUI and by `list`. Once stories come
//! from a real source they are untrusted, so escape sequences are stripped
//! before display: CSI (`ESC [ ... letter`) and OSC (`ESC ] ... BEL` or
//! `ESC ] ... ESC \`) sequences, plus stray control characters.

/// Strips ANSI escape sequences and control characters (except tab/newline/CR)
///
/// ```
/// use story_search::utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mReact\x1b[0m"), "React");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameters run until the final byte (a letter)
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next_ch) = chars.next() {
                        if next_ch == '\x07' {
                            break;
                        }
                        if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and flatten to one line (newlines and tabs become spaces)
pub fn sanitize_line(text: &str) -> String {
    strip_ansi_codes(text)
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect()
}
