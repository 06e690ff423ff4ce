use indexmap::IndexMap;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::SplitRatios;
use crate::data::RatingRecord;
use crate::types::{Fraction, UserId};

/// Partition policy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Shuffle the whole dataset, slice once at the train boundary, and sort
    /// each side by user.
    #[default]
    Global,
    /// Apply the train fraction independently within each user's ratings,
    /// preserving the order users were first encountered.
    PerUser,
}

/// Disjoint train/test partition of a ratings dataset.
///
/// The multiset union of both sides equals the partitioned input exactly; no
/// record is created, dropped, or mutated, only relocated.
#[derive(Clone, Debug, Default)]
pub struct SplitOutcome {
    /// Records assigned to the training subset.
    pub train: Vec<RatingRecord>,
    /// Records assigned to the test subset.
    pub test: Vec<RatingRecord>,
}

/// Partition `records` according to `policy`, consuming the dataset.
///
/// The RNG is passed explicitly so callers control reproducibility; the CLI
/// seeds from the OS while tests inject a seeded `StdRng`.
pub fn split_records<R: Rng>(
    records: Vec<RatingRecord>,
    ratios: SplitRatios,
    policy: SplitPolicy,
    rng: &mut R,
) -> SplitOutcome {
    let outcome = match policy {
        SplitPolicy::Global => split_global(records, ratios, rng),
        SplitPolicy::PerUser => split_per_user(records, ratios, rng),
    };
    debug!(
        train = outcome.train.len(),
        test = outcome.test.len(),
        ?policy,
        "partitioned ratings"
    );
    outcome
}

/// Global split: uniform shuffle, slice at `floor(n * train)`, then sort both
/// sides by `user_id` ascending.
///
/// The sort is stable, so relative order among rows sharing a `user_id` is
/// whatever the shuffle left them in. Gives no per-user balance guarantee.
pub fn split_global<R: Rng>(
    mut records: Vec<RatingRecord>,
    ratios: SplitRatios,
    rng: &mut R,
) -> SplitOutcome {
    records.shuffle(rng);
    let boundary = train_count(records.len(), ratios.train);
    let mut test = records.split_off(boundary);
    let mut train = records;
    train.sort_by_key(|record| record.user_id);
    test.sort_by_key(|record| record.user_id);
    SplitOutcome { train, test }
}

/// Per-user split: group by `user_id` in first-seen order, shuffle each group,
/// and take `floor(m * train)` of each user's ratings for train.
///
/// Contributions are concatenated in user first-seen order; unlike the global
/// policy, no final sort is applied. A user with a single rating and a train
/// fraction below `1.0` contributes that rating to test.
pub fn split_per_user<R: Rng>(
    records: Vec<RatingRecord>,
    ratios: SplitRatios,
    rng: &mut R,
) -> SplitOutcome {
    let mut by_user: IndexMap<UserId, Vec<RatingRecord>> = IndexMap::new();
    for record in records {
        by_user.entry(record.user_id).or_default().push(record);
    }

    let mut outcome = SplitOutcome::default();
    for (_, mut ratings) in by_user {
        ratings.shuffle(rng);
        let boundary = train_count(ratings.len(), ratios.train);
        let user_test = ratings.split_off(boundary);
        outcome.train.extend(ratings);
        outcome.test.extend(user_test);
    }
    outcome
}

/// Number of records assigned to train out of `total`.
///
/// Truncates rather than rounds, so the realized train share is never above
/// the requested fraction; small groups can fall well below it.
fn train_count(total: usize, train_fraction: Fraction) -> usize {
    (((total as f64) * train_fraction).floor() as usize).min(total)
}
