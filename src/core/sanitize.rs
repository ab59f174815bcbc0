// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to one ASCII space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '\u{a0}' {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Parse text like `"22°"`, `"-3 °"` or `"70%"`: a number followed by `unit`, nothing else.
/// `signed` allows one leading minus sign.
pub fn number_with_unit(text: &str, unit: char, signed: bool) -> Option<i32> {
    let t = normalize_ws(text);
    let body = t.strip_suffix(unit)?.trim_end();

    let digits = match body.strip_prefix('-') {
        Some(rest) if signed => rest,
        Some(_) => return None,
        None => body,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    body.parse::<i32>().ok()
}
