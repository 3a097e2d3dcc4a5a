//! Pure normalization applied to every snapshot before it is compared or
//! stored.

use chrono::NaiveDateTime;

use codetrack_core::types::ClientTimestamp;

/// Collapse every run of whitespace into a single space and trim both ends.
pub fn compress_content(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Reduce a client timestamp to a naive UTC instant. Offset-carrying
/// values are shifted to UTC; naive values are taken as already UTC.
pub fn normalize_timestamp(ts: ClientTimestamp) -> NaiveDateTime {
    match ts {
        ClientTimestamp::Naive(naive) => naive,
        ClientTimestamp::Offset(dt) => dt.naive_utc(),
    }
}
