//! Tagged execution results.
//!
//! Mutating operations distinguish three cases the caller must treat
//! differently: the row changed, the row never existed, or the store itself
//! failed. The first two live here; the third is `Err(StoreError)`.

/// Result of an UPDATE or DELETE addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// At least one row was affected.
    Updated(u64),
    /// Zero rows were affected: no row with that id exists.
    NotFound,
}

impl ExecOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Updated(rows)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_is_not_found() {
        assert_eq!(ExecOutcome::from_rows_affected(0), ExecOutcome::NotFound);
        assert!(ExecOutcome::from_rows_affected(0).is_not_found());
    }

    #[test]
    fn nonzero_rows_carries_the_count() {
        assert_eq!(ExecOutcome::from_rows_affected(1), ExecOutcome::Updated(1));
        assert_eq!(ExecOutcome::from_rows_affected(3), ExecOutcome::Updated(3));
    }
}
