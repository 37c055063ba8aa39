//! Minimal English inflection for user-facing messages.

/// Plural form of `word` when `count != 1`, otherwise `word` unchanged.
pub fn plural(word: &str, count: usize) -> String {
    if count == 1 || word.is_empty() {
        return word.to_string();
    }

    let lower = word.to_ascii_lowercase();

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|end| lower.ends_with(end)) {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('y').or_else(|| word.strip_suffix('Y')) {
        let before_y = stem.chars().last().map(|c| c.to_ascii_lowercase());
        if before_y.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
];

fn match_case(original: &str, plural: &str) -> String {
    let mut chars = original.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let mut out = plural[..1].to_uppercase();
            out.push_str(&plural[1..]);
            out
        }
        _ => plural.to_string(),
    }
}
