use serde::{Deserialize, Serialize};

pub use crate::types::{ItemId, RatingValue, Timestamp, UserId};

/// One `(user, item, rating, timestamp)` tuple from a ratings file.
///
/// Field order is fixed and preserved through decode, partition, and encode;
/// duplicates in the input are kept as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Identifier of the rating user.
    pub user_id: UserId,
    /// Identifier of the rated item.
    pub item_id: ItemId,
    /// Rating value; unconstrained by the codec.
    pub rating: RatingValue,
    /// Epoch-seconds timestamp carried through unchanged.
    pub timestamp: Timestamp,
}

impl RatingRecord {
    /// Ordering key that makes multiset comparisons possible despite the
    /// non-`Ord` rating field.
    pub fn sort_key(&self) -> (UserId, ItemId, Timestamp, u64) {
        (self.user_id, self.item_id, self.timestamp, self.rating.to_bits())
    }
}
