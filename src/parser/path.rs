//! Path, query and fragment stage.

use regex_lite::Regex;
use std::sync::LazyLock;

static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<path>/[^?#]*)?(?:\?(?P<query>[^#]*))?(?:#(?P<fragment>.*))?$")
        .expect("path grammar is a valid regex")
});

/// Fields extracted from the tail of a DSN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PathPart<'a> {
    pub database: Option<String>,
    pub table: Option<String>,
    /// Raw query string, without the `?`.
    pub query: Option<&'a str>,
    pub fragment: Option<String>,
}

/// Split `[/database[/table]][?query][#fragment]` off the end of `input`.
///
/// The returned remainder is everything before the matched suffix.
pub(crate) fn extract(input: &str) -> (PathPart<'_>, &str) {
    let Some(caps) = SUFFIX_RE.captures(input) else {
        return (PathPart::default(), input);
    };
    let start = caps.get(0).map_or(input.len(), |m| m.start());

    let mut part = PathPart {
        query: caps.name("query").map(|m| m.as_str()).filter(|q| !q.is_empty()),
        fragment: caps
            .name("fragment")
            .map(|m| m.as_str())
            .filter(|f| !f.is_empty())
            .map(String::from),
        ..PathPart::default()
    };

    if let Some(path) = caps.name("path") {
        let mut segments = path.as_str().trim_start_matches('/').split('/');
        part.database = segments.next().and_then(non_empty);
        part.table = segments.next().and_then(non_empty);
    }

    (part, &input[..start])
}

fn non_empty(segment: &str) -> Option<String> {
    (!segment.is_empty()).then(|| segment.to_string())
}
