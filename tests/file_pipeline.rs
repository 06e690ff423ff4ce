use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use ratings_split::codec::read_ratings;
use ratings_split::{RatingRecord, SplitConfig, SplitError, SplitRatios, split_ratings_file};

const HEADER: &str = "userId,movieId,rating,timestamp";

fn seeded_config(test_ratio: f64) -> SplitConfig {
    SplitConfig {
        ratios: SplitRatios::from_test_ratio(test_ratio).unwrap(),
        seed: Some(42),
        ..SplitConfig::default()
    }
}

fn sorted_keys(records: &[RatingRecord]) -> Vec<(u32, u32, i64, u64)> {
    let mut keys: Vec<_> = records.iter().map(RatingRecord::sort_key).collect();
    keys.sort();
    keys
}

#[test]
fn pipeline_writes_sibling_train_and_test_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ratings.csv");
    let mut contents = String::from(HEADER);
    for idx in 0..20u32 {
        contents.push_str(&format!("\n{},{},{}.5,{}", idx / 2 + 1, 100 + idx, idx % 4, 1000 + idx));
    }
    contents.push('\n');
    fs::write(&input, contents).unwrap();

    let config = seeded_config(0.25);
    let mut rng = StdRng::seed_from_u64(42);
    let summary = split_ratings_file(&input, &config, &mut rng).unwrap();

    assert_eq!(summary.train_path, dir.path().join("ratings_train.csv"));
    assert_eq!(summary.test_path, dir.path().join("ratings_test.csv"));
    assert_eq!(summary.train_rows, 15);
    assert_eq!(summary.test_rows, 5);

    let train = read_ratings(&summary.train_path).unwrap();
    let test = read_ratings(&summary.test_path).unwrap();
    assert_eq!(train.len(), 15);
    assert_eq!(test.len(), 5);

    // Union of the two outputs equals the decoded input as a multiset.
    let original = read_ratings(&input).unwrap();
    let mut combined = train.clone();
    combined.extend(test);
    assert_eq!(sorted_keys(&combined), sorted_keys(&original));

    // Global policy sorts each output by user id.
    assert!(train.windows(2).all(|p| p[0].user_id <= p[1].user_id));
}

#[test]
fn header_only_input_produces_header_only_outputs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ratings.csv");
    fs::write(&input, format!("{HEADER}\n")).unwrap();

    let config = seeded_config(0.5);
    let mut rng = StdRng::seed_from_u64(1);
    let summary = split_ratings_file(&input, &config, &mut rng).unwrap();

    assert_eq!(summary.train_rows, 0);
    assert_eq!(summary.test_rows, 0);
    assert_eq!(
        fs::read_to_string(&summary.train_path).unwrap(),
        format!("{HEADER}\n")
    );
    assert_eq!(
        fs::read_to_string(&summary.test_path).unwrap(),
        format!("{HEADER}\n")
    );
}

#[test]
fn malformed_rating_fails_before_any_output_is_written() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ratings.csv");
    fs::write(&input, format!("{HEADER}\n1,10,great,100\n")).unwrap();

    let config = seeded_config(0.5);
    let mut rng = StdRng::seed_from_u64(1);
    let err = split_ratings_file(&input, &config, &mut rng).unwrap_err();

    assert!(matches!(err, SplitError::MalformedLine { line: 2, .. }));
    assert!(!dir.path().join("ratings_train.csv").exists());
    assert!(!dir.path().join("ratings_test.csv").exists());
}

#[test]
fn missing_input_file_surfaces_an_io_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.csv");

    let config = seeded_config(0.5);
    let mut rng = StdRng::seed_from_u64(1);
    let err = split_ratings_file(&input, &config, &mut rng).unwrap_err();
    assert!(matches!(err, SplitError::Io(_)));
}

#[test]
fn zero_test_ratio_routes_everything_to_train() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ratings.csv");
    fs::write(
        &input,
        format!("{HEADER}\n1,10,4.0,100\n1,20,3.5,101\n2,30,5.0,102\n"),
    )
    .unwrap();

    let config = seeded_config(0.0);
    let mut rng = StdRng::seed_from_u64(3);
    let summary = split_ratings_file(&input, &config, &mut rng).unwrap();

    assert_eq!(summary.train_rows, 3);
    assert_eq!(summary.test_rows, 0);
}

#[test]
fn full_test_ratio_routes_everything_to_test() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ratings.csv");
    fs::write(
        &input,
        format!("{HEADER}\n1,10,4.0,100\n1,20,3.5,101\n2,30,5.0,102\n"),
    )
    .unwrap();

    let config = seeded_config(1.0);
    let mut rng = StdRng::seed_from_u64(3);
    let summary = split_ratings_file(&input, &config, &mut rng).unwrap();

    assert_eq!(summary.train_rows, 0);
    assert_eq!(summary.test_rows, 3);
}

#[test]
fn repeated_runs_overwrite_previous_outputs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ratings.csv");
    fs::write(
        &input,
        format!("{HEADER}\n1,10,4.0,100\n2,20,3.0,101\n3,30,2.0,102\n4,40,1.0,103\n"),
    )
    .unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    split_ratings_file(&input, &seeded_config(0.5), &mut rng).unwrap();

    let mut rng = StdRng::seed_from_u64(5);
    let summary = split_ratings_file(&input, &seeded_config(0.0), &mut rng).unwrap();

    // Second run's header-plus-4-rows train file replaces the first run's.
    let train = read_ratings(&summary.train_path).unwrap();
    assert_eq!(train.len(), 4);
    let test = read_ratings(&summary.test_path).unwrap();
    assert!(test.is_empty());
}
