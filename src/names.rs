use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\.a-z1-5]{0,13}$").unwrap());
static SYMBOL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{1,7}$").unwrap());
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9],[A-Z]{1,7}$").unwrap());

/// Checks the restricted-alphabet name format.
///
/// An empty string is valid: it is the string form of a zero-valued
/// numeric name.
pub fn is_valid_name(input: &str) -> bool {
    input.is_empty() || NAME_RE.is_match(input)
}

/// Checks the name format extended with symbol (`4,EOS`) and symbol code
/// (`EOS`) shapes.
pub fn is_valid_extended_name(input: &str) -> bool {
    input.is_empty()
        || NAME_RE.is_match(input)
        || SYMBOL_CODE_RE.is_match(input)
        || SYMBOL_RE.is_match(input)
}

/// Splits `input` on `sep`, dropping elements that trim to empty.
///
/// Emptiness is decided on the trimmed value but the retained elements keep
/// their original untrimmed form. Callers depend on that asymmetry; do not
/// fold trimming into the returned substrings.
pub fn explode_names<'a>(input: &'a str, sep: &str) -> Vec<&'a str> {
    input
        .split(sep)
        .filter(|raw| !raw.trim().is_empty())
        .collect()
}
