//! Reply classification
//!
//! Maps raw status lines onto the outcomes callers see.

/// Semantic outcome of a status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `STORED` - a set was accepted
    Stored,

    /// `END` - key absent or expired (distinct from failure)
    Miss,

    /// `ERROR` - server rejected the command
    Error,

    /// Any other status line, passed through unchanged
    /// (`VALUE ...` headers, `DELETED`, numeric replies, ...)
    Other(String),
}

/// Classify one raw status line
///
/// Pure function; the line is expected to already be stripped of CR/LF.
pub fn classify(line: &str) -> Reply {
    match line {
        "ERROR" => Reply::Error,
        "END" => Reply::Miss,
        "STORED" => Reply::Stored,
        other => Reply::Other(other.to_string()),
    }
}

/// Outcome of a store operation
///
/// `Other` carries unmodeled status lines (`NOT_STORED`, `SERVER_ERROR ...`)
/// through to the caller verbatim instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// The server acknowledged the store with `STORED`
    Stored,

    /// The server answered with some other status line
    Other(String),
}

impl StoreStatus {
    pub fn is_stored(&self) -> bool {
        matches!(self, StoreStatus::Stored)
    }
}

/// Parsed `VALUE <key> <flags> <bytes>` header from a get hit
///
/// Parsing is lenient: a header that does not match yields `None` and the
/// caller proceeds to read the data line regardless. The client supports the
/// single-value reply subset only, so this is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueHeader {
    pub key: String,
    pub flags: u32,
    pub bytes: usize,
}

impl ValueHeader {
    /// Try to parse a status line as a VALUE header
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();

        if parts.next()? != "VALUE" {
            return None;
        }

        let key = parts.next()?.to_string();
        let flags = parts.next()?.parse().ok()?;
        let bytes = parts.next()?.parse().ok()?;

        Some(Self { key, flags, bytes })
    }
}
