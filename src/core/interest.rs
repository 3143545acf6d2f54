use chrono::{DateTime, Utc};

use crate::core::pairing::PairSlot;
use crate::models::InterestRelation;

/// The pair of interest bits contributed by one express-interest call.
/// Exactly one bit is set for a valid call; merging is a bitwise OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestFlags {
    pub employer_interested: bool,
    pub worker_interested: bool,
}

impl InterestFlags {
    /// Flags set by the acting side of a canonical pair
    pub fn for_slot(slot: PairSlot) -> Self {
        match slot {
            PairSlot::Employer => Self {
                employer_interested: true,
                worker_interested: false,
            },
            PairSlot::Worker => Self {
                employer_interested: false,
                worker_interested: true,
            },
        }
    }

    pub fn is_matched(self) -> bool {
        self.employer_interested && self.worker_interested
    }
}

/// Fold one side's interest into an existing relation.
///
/// Each interest bit and `is_matched` only ever move false -> true;
/// re-expressing interest from the same side is a no-op on state.
/// `matched_at` is stamped exactly once, on the merge that promotes the
/// relation to matched, and that merge returns true.
///
/// The store's `ON CONFLICT` upsert implements these same semantics in a
/// single atomic statement; this in-memory form is the reference they are
/// tested against.
pub fn merge_interest(relation: &mut InterestRelation, flags: InterestFlags, at: DateTime<Utc>) -> bool {
    relation.employer_interested |= flags.employer_interested;
    relation.worker_interested |= flags.worker_interested;

    let was_matched = relation.is_matched;
    relation.is_matched = relation.employer_interested && relation.worker_interested;

    if relation.is_matched && !was_matched {
        relation.matched_at = Some(at);
        return true;
    }
    false
}
