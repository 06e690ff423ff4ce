/// Integer identifier of the user who produced a rating.
/// Repeats across records; many records share a `UserId`.
/// Example: `15`
pub type UserId = u32;
/// Integer identifier of the rated item.
/// Example: `1721`
pub type ItemId = u32;
/// Rating value as stored in the ratings file; the codec does not
/// constrain its range.
/// Example: `4.5`
pub type RatingValue = f64;
/// Epoch-seconds timestamp attached to a rating; not validated for
/// monotonicity or range.
/// Example: `964982703`
pub type Timestamp = i64;
/// Caller-facing fraction of rows reserved for a subset.
/// Example: `0.2`
pub type Fraction = f64;
