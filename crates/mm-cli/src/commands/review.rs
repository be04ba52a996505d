use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use mm_names::wordlist::append_word;
use mm_names::{Decision, ReviewOutcome, ReviewSession};

use super::LengthRequest;

pub fn run(list: &Path, lengths: LengthRequest, seed: Option<u64>) -> Result<(), String> {
    let generator = super::load_generator(list, &lengths, seed)?;
    let mut rng = generator.config().rng();
    let mut session = ReviewSession::new(&generator);

    println!("  {} names for {}", "Reviewing".bold(), list.display());
    println!("  y = add to list, n = skip, r = stop\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        let name = session
            .propose(&mut rng)
            .map_err(|e| e.to_string())?
            .to_string();

        let Some(decision) = read_decision(&mut reader, &name)? else {
            break; // EOF
        };

        match session.decide(decision).map_err(|e| e.to_string())? {
            ReviewOutcome::Keep(word) => {
                append_word(list, &word).map_err(|e| e.to_string())?;
                println!("  {} {word}\n", "Added".green());
            }
            ReviewOutcome::Discard(_) => {}
            ReviewOutcome::Stop => break,
        }
    }

    println!(
        "\n  {} kept, {} skipped",
        session.kept().len(),
        session.discarded()
    );
    Ok(())
}

/// Prompt until the reviewer gives a valid answer. `None` on EOF.
fn read_decision(reader: &mut impl BufRead, name: &str) -> Result<Option<Decision>, String> {
    let mut line = String::new();
    loop {
        print!("{} > ", name.bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(None),
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match line.parse::<Decision>() {
            Ok(decision) => return Ok(Some(decision)),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}
