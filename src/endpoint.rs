// URL and response helpers for the text service; no browser types.

/// `base` and `path` joined with exactly one slash.
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{}", path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// First `max_chars` characters of an error body, for logs.
pub fn preview(body: &str, max_chars: usize) -> String {
    let mut out: String = body.chars().take(max_chars).collect();
    if body.chars().nth(max_chars).is_some() {
        out.push('…');
    }
    out
}
