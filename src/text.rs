//! Small string helpers shared by the transcript and episode stages.

/// Title-case a string the way the episode titles were keyed when the alias
/// table was compiled: a cased letter is uppercased when the character before
/// it is not a cased letter and lowercased otherwise.
///
/// This means apostrophes and hyphens start a new word, so
/// `"ROSS'S WEDDING"` becomes `"Ross'S Wedding"`. The alias table depends on
/// that exact output.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// Maps an empty string to `None`.
pub fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
