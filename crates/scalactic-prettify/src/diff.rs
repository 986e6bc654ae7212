//! String diffs for failure messages

/// Bracket the part of each string between their common prefix and suffix.
///
/// Equal strings come back unchanged.
///
/// ```rust
/// use scalactic_prettify::diff_strings;
///
/// let (left, right) = diff_strings("abcd", "abxd");
/// assert_eq!(left, "ab[c]d");
/// assert_eq!(right, "ab[x]d");
/// ```
pub fn diff_strings(left: &str, right: &str) -> (String, String) {
    if left == right {
        return (left.to_string(), right.to_string());
    }
    let l: Vec<char> = left.chars().collect();
    let r: Vec<char> = right.chars().collect();

    let prefix = l.iter().zip(&r).take_while(|(a, b)| a == b).count();
    let max_suffix = l.len().min(r.len()) - prefix;
    let suffix = l
        .iter()
        .rev()
        .zip(r.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    (bracket(&l, prefix, suffix), bracket(&r, prefix, suffix))
}

fn bracket(chars: &[char], prefix: usize, suffix: usize) -> String {
    let end = chars.len() - suffix;
    let mut out = String::with_capacity(chars.len() + 2);
    out.extend(&chars[..prefix]);
    out.push('[');
    out.extend(&chars[prefix..end]);
    out.push(']');
    out.extend(&chars[end..]);
    out
}
