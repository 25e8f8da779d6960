//! Soft wrapping for long display names

/// Break opportunity inserted into long names (U+200B ZERO WIDTH SPACE).
pub const SOFT_BREAK: char = '\u{200B}';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '.' || c == SOFT_BREAK
}

/// Insert a break opportunity after every run of `max_len` characters that
/// contains no whitespace, comma or period.
///
/// The run counter resets on a separator and right after an inserted break.
/// No break is added at the very end of the name or directly before a
/// separator. Names of at most `max_len` characters are returned untouched.
pub fn soft_wrap(name: &str, max_len: usize) -> String {
    if max_len == 0 || name.chars().count() <= max_len {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + name.len() / max_len * SOFT_BREAK.len_utf8());
    let mut run = 0usize;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if is_separator(c) {
            run = 0;
            continue;
        }

        run += 1;
        if run >= max_len {
            if let Some(&next) = chars.peek() {
                if !is_separator(next) {
                    out.push(SOFT_BREAK);
                }
            }
            run = 0;
        }
    }

    out
}
