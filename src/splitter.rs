/// Splits `input` on commas into trimmed, non-empty tokens in their original order.
pub fn split(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
