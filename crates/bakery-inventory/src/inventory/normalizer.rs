/// Canonical lookup form of an ingredient name: trimmed and lower-cased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Word-wise title casing used for display names.
///
/// A cased letter that follows anything uncased (start of input, space, hyphen,
/// apostrophe, digit, or a letter from a script without case) is upper-cased;
/// every other cased letter is lower-cased.
pub fn title_case(name: &str) -> String {
    let mut titled = String::with_capacity(name.len());
    let mut previous_is_cased = false;

    for ch in name.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased && previous_is_cased {
            titled.extend(ch.to_lowercase());
        } else if cased {
            titled.extend(ch.to_uppercase());
        } else {
            titled.push(ch);
        }
        previous_is_cased = cased;
    }

    titled
}
