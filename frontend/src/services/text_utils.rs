/// Turn a `_`-delimited token into space-separated title-case words.
///
/// Only the first character of each word is upper-cased; the rest is left
/// as is. Consecutive delimiters yield empty words, so `"hello__world"`
/// becomes `"Hello  World"` with both spaces kept. `None` and `""` give `""`.
pub fn snake_to_title_case<'a>(value: impl Into<Option<&'a str>>) -> String {
    let value = match value.into() {
        Some(value) if !value.is_empty() => value,
        _ => return String::new(),
    };

    value
        .split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
