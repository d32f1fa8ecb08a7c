//! Applied result: the value of a mutating operation plus whether the
//! snapshot write that followed it succeeded.
//!
//! The in-memory mutation has already happened when an `Applied` is returned.
//! A failed write is a warning for the caller, not an error.

/// Durability of the snapshot after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Durability {
    /// The full snapshot was written.
    Persisted,

    /// The snapshot write failed; the change lives only in memory.
    NotPersisted { reason: String },

    /// Nothing changed, so nothing was written.
    Unchanged,
}

impl Durability {
    pub fn is_at_risk(&self) -> bool {
        matches!(self, Durability::NotPersisted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied<T> {
    pub value: T,
    pub durability: Durability,
}

impl<T> Applied<T> {
    pub fn new(value: T, durability: Durability) -> Self {
        Self { value, durability }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Applied<U> {
        Applied {
            value: f(self.value),
            durability: self.durability,
        }
    }

    /// Persistence warning message, if the write failed.
    pub fn warning(&self) -> Option<&str> {
        match &self.durability {
            Durability::NotPersisted { reason } => Some(reason),
            _ => None,
        }
    }
}
