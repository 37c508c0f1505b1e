//! NCName boundary detection for splitting an identifier into a namespace
//! prefix and a trailing name fragment (XML 1.1 `NCName` productions).

#[rustfmt::skip]
pub(super) const fn is_ncname_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}' | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

#[rustfmt::skip]
pub(super) const fn is_ncname_char(c: char) -> bool {
    is_ncname_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// Byte index at which the longest well-formed NCName suffix of `s` begins,
/// or `None` if `s` ends in a character that cannot occur in an NCName.
///
/// Scans backwards: every character from the boundary to the end must be an
/// NCName character, and the boundary character itself an NCName *start*
/// character.
pub(super) fn boundary_index(s: &str) -> Option<usize> {
    let mut index = None;
    for (i, c) in s.char_indices().rev() {
        if !is_ncname_char(c) {
            break;
        }
        if is_ncname_start_char(c) {
            index = Some(i);
        }
    }
    index
}

/// [`boundary_index`], except that blank node labels (`_:` lead) are never
/// split. This is the splitter identifiers are constructed with;
/// [`boundary_index`] is the raw scan used to validate a caller-supplied
/// split, where the guard must not apply.
pub(super) fn suffix_index(s: &str) -> Option<usize> {
    if s.len() > 1 && s.as_bytes()[0] == b'_' && s.as_bytes()[1] == b':' {
        return None;
    }
    boundary_index(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_boundary() {
        assert_eq!(suffix_index("http://www.w3.org/2002/07/owl#Thing"), Some(30));
        assert_eq!(suffix_index("http://example.com/path"), Some(19));
    }

    #[test]
    fn no_boundary() {
        // ends in a non-NCName character
        assert_eq!(suffix_index("http://example.com/ns#"), None);
        assert_eq!(suffix_index(""), None);
    }

    #[test]
    fn whole_string_is_a_name() {
        assert_eq!(suffix_index("Thing"), Some(0));
        // a digit may continue but not start an NCName
        assert_eq!(suffix_index("1abc"), Some(1));
    }

    #[test]
    fn blank_node_labels_never_split() {
        assert_eq!(suffix_index("_:genid42"), None);
        // the raw scan has no blank-node guard
        assert_eq!(boundary_index("_:genid42"), Some(2));
    }

    #[test]
    fn character_classes() {
        assert!(is_ncname_start_char('A'));
        assert!(is_ncname_start_char('_'));
        assert!(!is_ncname_start_char('3'));
        assert!(is_ncname_char('3'));
        assert!(is_ncname_char('-'));
        assert!(!is_ncname_char(':'));
        assert!(!is_ncname_char('/'));
        assert!(!is_ncname_char('#'));
    }
}
