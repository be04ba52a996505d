use std::path::Path;

use super::LengthRequest;

pub fn run(
    list: &Path,
    count: usize,
    lengths: LengthRequest,
    seed: Option<u64>,
) -> Result<(), String> {
    let generator = super::load_generator(list, &lengths, seed)?;
    let mut rng = generator.config().rng();

    tracing::info!(
        count,
        lengths = %generator.config().lengths,
        "generating names"
    );
    let names = generator
        .generate_many(count, &mut rng)
        .map_err(|e| e.to_string())?;

    for name in names {
        println!("{name}");
    }
    Ok(())
}
