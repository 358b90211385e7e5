//! Resource descriptors and path identifier extraction.

/// One CRUD-exposed entity kind.
///
/// `plural` is the collection response key and does not always match the
/// table name: timeline events respond under `events`.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// Backend table name.
    pub table: &'static str,
    /// Response key for single-row payloads, and the body key a POST
    /// nests the new row under.
    pub singular: &'static str,
    /// Response key for collection payloads.
    pub plural: &'static str,
    /// Capitalized name used in the delete confirmation message.
    pub display: &'static str,
}

pub const CHARACTERS: Resource = Resource {
    table: "characters",
    singular: "character",
    plural: "characters",
    display: "Character",
};

/// Collection key stays `events` (not `timeline_events`) for wire
/// compatibility with existing consumers.
pub const TIMELINE_EVENTS: Resource = Resource {
    table: "timeline_events",
    singular: "event",
    plural: "events",
    display: "Event",
};

/// Last `/`-delimited segment of a raw request path, verbatim: no
/// percent-decoding and no format check. A path ending in `/` carries no
/// identifier and yields `None`.
pub fn last_path_segment(path: &str) -> Option<&str> {
    match path.rsplit('/').next() {
        None | Some("") => None,
        Some(segment) => Some(segment),
    }
}

#[cfg(test)]
mod tests {
    use super::last_path_segment;

    #[test]
    fn takes_last_segment_verbatim() {
        assert_eq!(last_path_segment("/characters/42"), Some("42"));
        // No percent-decoding.
        assert_eq!(last_path_segment("/characters/a%20b"), Some("a%20b"));
    }

    #[test]
    fn trailing_slash_means_missing() {
        assert_eq!(last_path_segment("/characters/"), None);
        assert_eq!(last_path_segment("/"), None);
        assert_eq!(last_path_segment(""), None);
    }

    #[test]
    fn bare_resource_path_returns_its_own_name() {
        assert_eq!(last_path_segment("/characters"), Some("characters"));
    }
}
