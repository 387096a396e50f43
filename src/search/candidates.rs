// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! First-match-wins candidate accumulation.
//!
//! A record can match several tiers at once: an agent in SW1A covering
//! "Westminster" matches both the exact outcode and the area name. It must
//! appear once, at the tier that reached it first. Not its best tier, not
//! the number of tiers it hit. The first.
//!
//! `CandidateSet` makes that the only thing you can express. `offer` inserts
//! only when the id is absent, so resolving is a fold over the tiers in fixed
//! order and the result is independent of how many tiers overlap.
//!
//! **Invariant**: each id appears at most once, with the match type of the
//! first tier that offered it.

use std::collections::HashMap;

use crate::types::MatchType;

/// One resolved candidate: which record, and how it was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub id: usize,
    pub match_type: MatchType,
}

impl Candidate {
    pub fn priority(&self) -> u8 {
        self.match_type.priority()
    }
}

/// Insertion-ordered map from record id to its first-assigned match type.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    order: Vec<Candidate>,
    slots: HashMap<usize, usize>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` under `match_type` unless it is already present.
    ///
    /// Returns `true` if the id was new.
    pub fn offer(&mut self, id: usize, match_type: MatchType) -> bool {
        if self.slots.contains_key(&id) {
            return false;
        }
        self.slots.insert(id, self.order.len());
        self.order.push(Candidate { id, match_type });
        true
    }

    /// Offer every id in `ids`. Returns how many were new.
    pub fn offer_all(&mut self, ids: &[usize], match_type: MatchType) -> usize {
        ids.iter()
            .filter(|&&id| self.offer(id, match_type))
            .count()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.slots.contains_key(&id)
    }

    /// The match type `id` was first assigned, if any.
    pub fn match_type_of(&self, id: usize) -> Option<MatchType> {
        self.slots.get(&id).map(|&slot| self.order[slot].match_type)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.order.iter()
    }

    /// Count of candidates per tier, indexed by `priority - 1`.
    pub fn tier_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for candidate in &self.order {
            counts[usize::from(candidate.priority() - 1)] += 1;
        }
        counts
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.order
    }
}
