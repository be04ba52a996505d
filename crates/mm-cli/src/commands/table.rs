use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use mm_names::TransitionMatrix;

pub fn run(list: &Path) -> Result<(), String> {
    let words = super::load_words(list)?;
    let matrix = TransitionMatrix::from_words(&words).map_err(|e| e.to_string())?;
    let columns = matrix.characters();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![String::new()];
    header.extend(columns.iter().map(char::to_string));
    table.set_header(header);

    for (from, _) in matrix.iter() {
        let mut row = vec![from.to_string()];
        row.extend(columns.iter().map(|&to| {
            let p = matrix.probability(from, to);
            if p > 0.0 {
                format!("{p:.2}")
            } else {
                String::new()
            }
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} characters, {} words", matrix.len(), words.len());

    Ok(())
}
