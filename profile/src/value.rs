/// Returns true if the value is present, not blank after trimming,
/// and not one of the placeholder tokens "null" or "none" (case-insensitive).
pub fn is_valid_value(val : Option<&'_ str>) -> bool {
    let raw = match val {
        Some(s) => s,
        None => return false
    };

    let stripped = raw.trim();
    if stripped.is_empty() {
        return false;
    }

    if stripped.eq_ignore_ascii_case("null") || stripped.eq_ignore_ascii_case("none") {
        return false;
    }

    true
}

pub fn all_valid<'a, I>(vals : I) -> bool where I : IntoIterator<Item = Option<&'a str>> {
    vals.into_iter().all(is_valid_value)
}
