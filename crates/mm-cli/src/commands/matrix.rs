use std::path::Path;

use mm_names::TransitionMatrix;

pub fn run(list: &Path) -> Result<(), String> {
    let words = super::load_words(list)?;
    let matrix = TransitionMatrix::from_words(&words).map_err(|e| e.to_string())?;
    let json = matrix.to_json_pretty().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
