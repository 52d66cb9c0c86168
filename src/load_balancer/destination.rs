//! Destination set.
//!
//! # Responsibilities
//! - Hold the candidate targets for destination selection
//! - Guarantee at least one candidate exists
//!
//! # Design Decisions
//! - Immutable after construction; cloning shares the same storage
//! - Emptiness is rejected here so no strategy ever indexes an empty set

use std::sync::Arc;
use url::Url;

use crate::decorator::BuildError;

/// Ordered, non-empty, immutable list of candidate targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationSet {
    destinations: Arc<[Url]>,
}

impl DestinationSet {
    /// Build a set from already-parsed URLs.
    pub fn new(destinations: impl IntoIterator<Item = Url>) -> Result<Self, BuildError> {
        let destinations: Arc<[Url]> = destinations.into_iter().collect();
        if destinations.is_empty() {
            return Err(BuildError::EmptyDestinationSet);
        }
        Ok(Self { destinations })
    }

    /// Parse every entry as an absolute URL.
    pub fn parse<I, S>(urls: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = urls
            .into_iter()
            .map(|raw| {
                let raw = raw.as_ref();
                Url::parse(raw).map_err(|source| BuildError::InvalidDestination {
                    url: raw.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// Number of destinations; never zero.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Url> {
        self.destinations.get(index)
    }

    pub fn first(&self) -> &Url {
        &self.destinations[0]
    }

    pub fn last(&self) -> &Url {
        &self.destinations[self.destinations.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Url> {
        self.destinations.iter()
    }

    pub fn as_slice(&self) -> &[Url] {
        &self.destinations
    }
}

impl<'a> IntoIterator for &'a DestinationSet {
    type Item = &'a Url;
    type IntoIter = std::slice::Iter<'a, Url>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
