//! Turning a character record into a finished sheet.

use std::fs;

use rand::rngs::StdRng;

use crate::ability::{Ability, proficiency_bonus};
use crate::config::SheetConfig;
use crate::error::{SheetError, SheetResult};
use crate::record::CharacterRecord;
use crate::stats::{calculate_hp, generate_stats};
use crate::template::{Proficiencies, TemplateEngine};

/// A value filled in because the record left it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedField {
    /// Record key.
    pub field: String,
    /// Value that was stored.
    pub value: String,
}

impl std::fmt::Display for GeneratedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

/// A rendered character sheet, ready to write.
#[derive(Debug, Clone)]
pub struct RenderedSheet {
    /// Character name as written in the record.
    pub name: String,
    /// File name derived from the character name.
    pub file_name: String,
    /// The filled-in template.
    pub html: String,
    /// Proficiency bonus used for the sheet.
    pub proficiency_bonus: i32,
    /// Values generated for fields the record left out.
    pub generated: Vec<GeneratedField>,
    /// The record after generated values were added.
    pub record: CharacterRecord,
}

/// Builds character sheets from records and a template.
#[derive(Debug, Clone)]
pub struct SheetBuilder {
    config: SheetConfig,
    engine: TemplateEngine,
}

impl SheetBuilder {
    /// Create a builder.
    pub fn new(config: SheetConfig) -> SheetResult<Self> {
        Ok(Self {
            config,
            engine: TemplateEngine::new()?,
        })
    }

    /// The builder's configuration.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Read the configured template file.
    pub fn read_template(&self) -> SheetResult<String> {
        let path = &self.config.template_path;
        fs::read_to_string(path).map_err(|source| SheetError::Io {
            path: path.clone(),
            source,
        })
    }

    /// Fill in level, ability scores, and hit points the record leaves out.
    ///
    /// Level defaults to 1. Missing ability scores are rolled for the class;
    /// hit points are rolled from the class hit die.
    pub fn complete(
        &self,
        record: &mut CharacterRecord,
        rng: &mut StdRng,
    ) -> SheetResult<Vec<GeneratedField>> {
        let class = record.class()?.to_string();
        let mut generated = Vec::new();
        let mut store = |record: &mut CharacterRecord, field: &str, value: String| {
            tracing::info!(field, value = %value, "generated value");
            record.set(field, value.clone());
            generated.push(GeneratedField {
                field: field.to_string(),
                value,
            });
        };

        if !record.contains("level") {
            store(record, "level", "1".to_string());
        }
        let level = record.number("level")?;

        let missing: Vec<Ability> = Ability::ALL
            .into_iter()
            .filter(|a| !record.contains(a.name()))
            .collect();
        if !missing.is_empty() {
            let stats = generate_stats(&class, level, rng)?;
            for ability in missing {
                if let Some(score) = stats.get(ability) {
                    store(record, ability.name(), score.to_string());
                }
            }
        }

        if !record.contains("hp") {
            let constitution = record.score(Ability::Constitution)?;
            let hp = calculate_hp(&class, level, constitution, rng)?;
            store(record, "hp", hp.to_string());
        }

        Ok(generated)
    }

    /// Complete the record and render it into `template`.
    pub fn build(
        &self,
        mut record: CharacterRecord,
        template: &str,
        rng: &mut StdRng,
    ) -> SheetResult<RenderedSheet> {
        let name = record.require("name")?.to_string();
        let generated = self.complete(&mut record, rng)?;

        let level = record.number("level")?;
        let bonus = proficiency_bonus(level);
        tracing::info!(level, bonus, "proficiency bonus");

        let proficiencies = Proficiencies::new(record.proficiencies(), bonus);
        let html = self.engine.render(&record, template, &proficiencies)?;

        Ok(RenderedSheet {
            file_name: output_file_name(&name),
            name,
            html,
            proficiency_bonus: bonus,
            generated,
            record,
        })
    }
}

/// File name for a character: lower-cased, spaces to underscores, `.html`.
pub fn output_file_name(name: &str) -> String {
    format!("{}.html", name.to_lowercase().replace(' ', "_"))
}
