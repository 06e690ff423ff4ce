use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    ratings_split::app::run_split_ratings(std::env::args().skip(1))
}
