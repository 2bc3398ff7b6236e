//! Crawl frontier: visited/unvisited bookkeeping and random selection
//!
//! The frontier holds two disjoint sets of URL strings. `visited` only
//! grows; a URL that has been claimed once is never offered again.
//! Selection is uniformly random over the unvisited set, driven by an
//! injected RNG so that a fixed seed reproduces a traversal exactly.

use rand::rngs::StdRng;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

/// The working set of URLs for one crawl.
///
/// Exact string equality governs membership; near-duplicate URLs differing
/// only by fragment, trailing slash, or query ordering are separate
/// entries. The unvisited set iterates in sorted order, which makes each
/// random draw a pure function of the RNG state and the set contents.
#[derive(Debug)]
pub struct Frontier {
    visited: HashSet<String>,
    unvisited: BTreeSet<String>,
    rng: StdRng,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL.
    pub fn new(seed: String, rng: StdRng) -> Self {
        let mut unvisited = BTreeSet::new();
        unvisited.insert(seed);

        Self {
            visited: HashSet::new(),
            unvisited,
            rng,
        }
    }

    /// Claims one URL uniformly at random: removes it from the unvisited
    /// set and marks it visited. Returns `None` when the frontier is
    /// exhausted.
    pub fn claim(&mut self) -> Option<String> {
        if self.unvisited.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..self.unvisited.len());
        let url = self.unvisited.iter().nth(index)?.clone();

        self.unvisited.remove(&url);
        self.visited.insert(url.clone());
        Some(url)
    }

    /// Merges newly discovered links into the unvisited set, skipping any
    /// URL that has already been visited.
    pub fn extend(&mut self, links: impl IntoIterator<Item = String>) {
        for link in links {
            if !self.visited.contains(&link) {
                self.unvisited.insert(link);
            }
        }
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn unvisited_len(&self) -> usize {
        self.unvisited.len()
    }

    #[cfg(test)]
    fn is_disjoint(&self) -> bool {
        !self.unvisited.iter().any(|url| self.visited.contains(url))
    }
}
