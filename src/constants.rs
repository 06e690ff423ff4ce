/// Constants used by the ratings codec.
pub mod codec {
    /// Header line written to every output file and skipped on decode.
    pub const RATINGS_HEADER: &str = "userId,movieId,rating,timestamp";
    /// Field delimiter used by ratings lines.
    pub const FIELD_DELIMITER: char = ',';
    /// Number of fields expected on each data line.
    pub const FIELD_COUNT: usize = 4;
    /// Column names in file order, used for decode diagnostics.
    pub const COLUMN_NAMES: [&str; FIELD_COUNT] = ["userId", "movieId", "rating", "timestamp"];
}

/// Constants used by the CLI app when deriving sibling output paths.
pub mod app {
    /// Suffix inserted before the extension for the train output file.
    pub const TRAIN_SUFFIX: &str = "_train";
    /// Suffix inserted before the extension for the test output file.
    pub const TEST_SUFFIX: &str = "_test";
}
