//! Const-evaluable scanning over a comma-separated member-name literal.
//!
//! Everything in this module runs during constant evaluation, so a name list
//! embedded with [`embed_names!`](crate::embed_names) costs nothing at
//! runtime and malformed lists are rejected while the crate compiles.

/// A byte range into one `'static` name-list literal.
///
/// Spans are never independently allocated; they index into the literal they
/// were scanned from and stay valid for the lifetime of the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Classify a byte as blank for trimming purposes.
pub const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\0')
}

/// Trim leading and trailing blanks from `bytes[start..end]`.
///
/// An all-blank range collapses to a zero-length span anchored at the
/// original end.
pub const fn strip(bytes: &[u8], mut start: usize, mut end: usize) -> Span {
    while start < end && is_blank(bytes[start]) {
        start += 1;
    }
    while end > start && is_blank(bytes[end - 1]) {
        end -= 1;
    }
    Span {
        start,
        len: end - start,
    }
}

/// Number of comma-separated items in `list`: 0 for an empty literal, else
/// top-level commas + 1. The grammar is a flat comma list; commas are never
/// protected by any kind of bracket.
pub const fn count_items(list: &str) -> usize {
    let bytes = list.as_bytes();
    if bytes.is_empty() {
        return 0;
    }
    let mut commas = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            commas += 1;
        }
        i += 1;
    }
    commas + 1
}

/// Length in bytes of the longest raw item, measured between commas without
/// trimming. Diagnostic only.
pub const fn longest_item_len(list: &str) -> usize {
    let bytes = list.as_bytes();
    let mut longest = 0;
    let mut current = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            if current > longest {
                longest = current;
            }
            current = 0;
        } else {
            current += 1;
        }
        i += 1;
    }
    if current > longest {
        current
    } else {
        longest
    }
}

/// Split `list` on commas into exactly `N` trimmed spans.
///
/// Panics (a compile error when evaluated in const context) if the item count
/// disagrees with `N`. A trailing comma produces one additional zero-length
/// item rather than being dropped.
pub const fn tokenize<const N: usize>(list: &str) -> [Span; N] {
    let bytes = list.as_bytes();
    let mut spans = [Span { start: 0, len: 0 }; N];
    if bytes.is_empty() {
        assert!(N == 0, "member list is empty but tokens were requested");
        return spans;
    }
    let mut produced = 0;
    let mut item_start = 0;
    let mut i = 0;
    loop {
        let at_end = i == bytes.len();
        if at_end || bytes[i] == b',' {
            assert!(
                produced < N,
                "member list holds more items than the requested token count"
            );
            spans[produced] = strip(bytes, item_start, i);
            produced += 1;
            item_start = i + 1;
        }
        if at_end {
            break;
        }
        i += 1;
    }
    assert!(
        produced == N,
        "member list holds fewer items than the requested token count"
    );
    spans
}
