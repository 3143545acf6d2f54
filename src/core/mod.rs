// Core algorithm exports
pub mod candidates;
pub mod interest;
pub mod pairing;

pub use candidates::{already_seen_ids, filter_candidates};
pub use interest::{merge_interest, InterestFlags};
pub use pairing::{canonical_pair, CanonicalPair, PairSlot, PairingError};
