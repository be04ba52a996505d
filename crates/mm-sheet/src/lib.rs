//! Character sheet resolver for Mmorpdnd campaign tools.
//!
//! Parses flat `key = value` character records, rolls any ability scores and
//! hit points the record leaves out, and substitutes everything into an HTML
//! sheet template.

pub mod ability;
pub mod builder;
pub mod config;
pub mod dice;
pub mod error;
pub mod record;
pub mod skill;
pub mod stats;
pub mod template;

pub use ability::{Ability, format_modifier, modifier, proficiency_bonus};
pub use builder::{GeneratedField, RenderedSheet, SheetBuilder, output_file_name};
pub use config::SheetConfig;
pub use dice::{DicePool, Die, RollResult};
pub use error::{SheetError, SheetResult};
pub use record::CharacterRecord;
pub use stats::{AbilityScores, calculate_hp, generate_stats};
pub use template::{Proficiencies, TemplateEngine};
