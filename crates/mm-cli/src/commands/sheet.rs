use std::fs;
use std::path::{Component, Path, PathBuf};

use colored::Colorize;

use mm_sheet::{CharacterRecord, RenderedSheet, SheetBuilder, SheetConfig};

/// Record files must carry this extension.
const RECORD_EXTENSION: &str = "char";

pub struct SheetArgs {
    pub record: PathBuf,
    pub template: PathBuf,
    pub characters_dir: PathBuf,
    pub player: bool,
    pub seed: Option<u64>,
    pub stdout: bool,
}

pub fn run(args: &SheetArgs) -> Result<(), String> {
    if args.record.extension().is_none_or(|ext| ext != RECORD_EXTENSION) {
        return Err(format!(
            "{}: not a .{RECORD_EXTENSION} record",
            args.record.display()
        ));
    }

    let mut config = SheetConfig::default()
        .with_template(&args.template)
        .with_characters_dir(&args.characters_dir)
        .with_npc(!args.player);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let builder = SheetBuilder::new(config).map_err(|e| e.to_string())?;
    let record = CharacterRecord::read(&args.record).map_err(|e| e.to_string())?;
    let template = builder.read_template().map_err(|e| e.to_string())?;
    let mut rng = builder.config().rng();

    let sheet = builder
        .build(record, &template, &mut rng)
        .map_err(|e| e.to_string())?;

    if args.stdout {
        print!("{}", sheet.html);
        return Ok(());
    }

    let config = builder.config();
    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .map_err(|e| format!("failed to create {}: {e}", output_dir.display()))?;
    let output = config.output_path(&sheet.file_name);
    fs::write(&output, &sheet.html)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))?;

    copy_image(&sheet, &args.record, &config.image_dir())?;
    print_summary(&sheet, &output);
    Ok(())
}

/// Copy the record's portrait next to the sheet. A missing or unusable image
/// only warns.
fn copy_image(sheet: &RenderedSheet, record_path: &Path, image_dir: &Path) -> Result<(), String> {
    let Some(image) = sheet.record.get("image") else {
        return Ok(());
    };
    let Some(relative) = portrait_path(image) else {
        tracing::warn!(image, "image path must be relative to the record, sheet written without it");
        return Ok(());
    };

    let source = record_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(relative);
    if !source.is_file() {
        tracing::warn!(image = %source.display(), "image not found, sheet written without it");
        return Ok(());
    }

    let dest = image_dir.join(relative);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }
    if same_file(&source, &dest) {
        tracing::info!(image = %dest.display(), "image already in place");
        return Ok(());
    }
    fs::copy(&source, &dest)
        .map_err(|e| format!("failed to copy {}: {e}", source.display()))?;
    tracing::info!(image = %dest.display(), "copied image");
    Ok(())
}

/// The image path if it stays below the directory it is joined to.
fn portrait_path(image: &str) -> Option<&Path> {
    let path = Path::new(image);
    let contained = !image.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    contained.then_some(path)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn print_summary(sheet: &RenderedSheet, output: &Path) {
    println!("  {} {} -> {}", "Wrote".green(), sheet.name.bold(), output.display());
    println!("  Proficiency bonus: +{}", sheet.proficiency_bonus);
    if !sheet.generated.is_empty() {
        println!("  Generated:");
        for field in &sheet.generated {
            println!("    {field}");
        }
    }
}
