//! Query engine
//!
//! A query is a pair of component sets: every entity carrying all of
//! `required` and none of `excluded` matches. Matching is a bitmask test
//! against the entity's presence set.

use super::{ComponentSet, EcsError};

/// Required/excluded component filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    required: ComponentSet,
    excluded: ComponentSet,
}

impl Query {
    /// Create a query, rejecting overlapping sets
    pub fn new(required: ComponentSet, excluded: ComponentSet) -> Result<Self, EcsError> {
        let overlap = required & excluded;
        if !overlap.is_empty() {
            return Err(EcsError::InvalidQuery { overlap });
        }
        Ok(Self { required, excluded })
    }

    /// Query with no exclusions
    pub const fn with(required: ComponentSet) -> Self {
        Self {
            required,
            excluded: ComponentSet::empty(),
        }
    }

    /// The same query, additionally rejecting `excluded`
    ///
    /// Kinds that are also required are dropped from the exclusion.
    pub const fn excluding(self, excluded: ComponentSet) -> Self {
        Self {
            required: self.required,
            excluded: self.excluded.union(excluded).difference(self.required),
        }
    }

    /// Components every match must carry
    pub const fn required(&self) -> ComponentSet {
        self.required
    }

    /// Components no match may carry
    pub const fn excluded(&self) -> ComponentSet {
        self.excluded
    }

    /// Test a presence set against this query
    pub fn matches(&self, components: ComponentSet) -> bool {
        components.contains(self.required) && !components.intersects(self.excluded)
    }
}
