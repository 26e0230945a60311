// File: crates/molecule-timeline/src/markup.rs
// Summary: Render TeX-style `$_n$` subscripts in molecule names as Unicode.

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// `CaOCH$_3$` -> `CaOCH₃`. `$_{12}$` is accepted too. Anything that is not a
/// closed run of digits is copied through untouched.
pub fn render_subscripts(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(start) = rest.find("$_") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('$').and_then(|end| subscript(&after[..end]).map(|s| (end, s))) {
            Some((end, sub)) => {
                out.push_str(&sub);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str("$_");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn subscript(body: &str) -> Option<String> {
    let digits = body.strip_prefix('{').and_then(|b| b.strip_suffix('}')).unwrap_or(body);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.bytes().map(|b| SUBSCRIPT_DIGITS[(b - b'0') as usize]).collect())
}
