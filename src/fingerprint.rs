//! Canonical state keys for explored-set membership.
//!
//! Engines deduplicate states through a derived key rather than string
//! formatting: the key is structural, so two states collide exactly when
//! they describe the same configuration.

use std::fmt::Debug;
use std::hash::Hash;

/// A canonical, hashable key derived deterministically from a state.
///
/// The key must be a pure function of the state's value: equal states
/// yield equal keys, distinct states yield distinct keys. Engines store
/// keys (never states) in their explored sets.
pub trait Fingerprint {
    type Key: Clone + Debug + Eq + Hash;

    fn fingerprint(&self) -> Self::Key;
}
