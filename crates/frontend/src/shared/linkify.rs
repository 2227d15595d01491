/// One run of answer text: either plain text or an `http(s)://` URL that
/// should render as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(String),
}

/// Split free text into plain runs and URL runs. A URL starts at `http://`
/// or `https://` and extends to the next whitespace.
pub fn linkify(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(start) = find_url_start(rest) {
        if start > 0 {
            segments.push(Segment::Text(rest[..start].to_string()));
        }
        let tail = &rest[start..];
        let end = tail
            .find(char::is_whitespace)
            .unwrap_or(tail.len());
        segments.push(Segment::Link(tail[..end].to_string()));
        rest = &tail[end..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest.to_string()));
    }
    segments
}

fn find_url_start(text: &str) -> Option<usize> {
    let http = text.find("http://");
    let https = text.find("https://");
    match (http, https) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
