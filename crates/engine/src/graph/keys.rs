//! Id construction, parsing and validation for nodes and paths.
//!
//! Generated ids have the form `{prefix}{n}` (`N1`, `N2`, `P1`, ...). The
//! counter only moves forward, and an id still present in the store is
//! never handed out again.

use tracegraph_core::{TraceError, TraceResult};

// =============================================================================
// Validation
// =============================================================================

/// Validate an entity id taken from outside (imports, commands).
pub fn validate_id(kind: &str, id: &str) -> TraceResult<()> {
    if id.is_empty() {
        return Err(TraceError::validation(format!("{} id must not be empty", kind)));
    }
    if id.trim() != id {
        return Err(TraceError::validation(format!(
            "{} id '{}' must not have surrounding whitespace",
            kind, id
        )));
    }
    Ok(())
}

// =============================================================================
// Parsing
// =============================================================================

/// Numeric suffix of `id` if it is exactly `{prefix}{digits}`.
pub fn numeric_suffix(prefix: &str, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// =============================================================================
// Allocation
// =============================================================================

/// Monotonic id counter for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    prefix: String,
    /// `None` once `{prefix}{u64::MAX}` has been passed.
    next: Option<u64>,
}

impl IdAllocator {
    /// Start counting at `{prefix}1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Some(1),
        }
    }

    /// The id prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The counter value the next allocation starts probing from, or
    /// `None` when the counter is exhausted.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Hand out the next id for which `taken` is false.
    ///
    /// Fails with `InvalidState` once the counter has run past `u64::MAX`.
    pub fn allocate(&mut self, taken: impl Fn(&str) -> bool) -> TraceResult<String> {
        loop {
            let n = self.next.ok_or_else(|| {
                TraceError::invalid_state(format!(
                    "No '{}' ids left after {}{}",
                    self.prefix,
                    self.prefix,
                    u64::MAX
                ))
            })?;
            self.next = n.checked_add(1);
            let id = format!("{}{}", self.prefix, n);
            if !taken(&id) {
                return Ok(id);
            }
        }
    }

    /// Continue above the largest numeric suffix among `ids`.
    ///
    /// Ids that don't match `{prefix}{digits}` are ignored.
    pub fn resume_after<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let max = ids
            .into_iter()
            .filter_map(|id| numeric_suffix(&self.prefix, id))
            .max()
            .unwrap_or(0);
        self.next = max.checked_add(1);
    }

    /// Back to `{prefix}1`.
    pub fn reset(&mut self) {
        self.next = Some(1);
    }
}
