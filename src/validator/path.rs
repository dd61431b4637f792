use serde_json::Value;

/// Resolves a dot/bracket field path (`tx.actions[0].account`) against a
/// JSON tree. Returns `None` when any segment is missing or malformed.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        let (key, indexes) = parse_segment(segment)?;
        if !key.is_empty() {
            current = current.get(key)?;
        }
        for index in indexes {
            current = current.get(index)?;
        }
    }
    Some(current)
}

/// Splits `actions[0][1]` into `("actions", [0, 1])`.
fn parse_segment(segment: &str) -> Option<(&str, Vec<usize>)> {
    let Some(start) = segment.find('[') else {
        return Some((segment, Vec::new()));
    };

    let key = &segment[..start];
    let mut indexes = Vec::new();
    let mut rest = &segment[start..];
    while let Some(stripped) = rest.strip_prefix('[') {
        let end = stripped.find(']')?;
        indexes.push(stripped[..end].parse().ok()?);
        rest = &stripped[end + 1..];
    }

    if rest.is_empty() {
        Some((key, indexes))
    } else {
        None
    }
}
