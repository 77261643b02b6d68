//! Splitting and re-serializing the comma-separated `opts=` value
//!
//! The format's quoting is historically loose: one layer of double quotes
//! may wrap an option token, but an unpaired quote is an ordinary
//! character and backslashes carry no escape semantics.

/// Split an `opts=` value into option tokens.
///
/// Commas inside a double-quoted span do not split. A `"` only opens a
/// span when a closing `"` exists later in the value; otherwise it is
/// kept literally and splitting continues. Empty tokens (between adjacent
/// commas, or trailing after a final comma) are preserved — version-3
/// documents depend on that. An empty value yields no tokens.
pub fn split_options(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = value.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for (i, &c) in chars.iter().enumerate() {
        if c == '"' {
            if in_quotes {
                in_quotes = false;
            } else if chars[i + 1..].contains(&'"') {
                in_quotes = true;
            }
            current.push(c);
        } else if c == ',' && !in_quotes {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    tokens.push(current);

    tokens.into_iter().map(strip_enclosing_quotes).collect()
}

/// Join option tokens back into an `opts=` value.
///
/// The joined list is wrapped in one layer of double quotes when it
/// contains whitespace, since an unquoted value ends at the first space.
pub fn serialize_options(opts: &[String]) -> String {
    let joined = opts.join(",");
    if joined.contains(' ') || joined.contains('\t') {
        format!("\"{joined}\"")
    } else {
        joined
    }
}

fn strip_enclosing_quotes(token: String) -> String {
    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        token[1..token.len() - 1].to_string()
    } else {
        token
    }
}
