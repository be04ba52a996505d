//! Placeholder substitution into character sheet templates.
//!
//! A template is plain text with bracketed placeholders:
//!
//! - `[field]` is replaced by the record value for `field`.
//! - `[field modifier]` is replaced by the signed ability modifier of a
//!   numeric field, or of the ability that governs a skill.
//! - `[skill proficiency]` becomes a check mark or a dash.
//!
//! Substitution is purely textual and runs in fixed passes, each over the
//! output of the one before. Placeholders nothing can resolve are left alone.

use regex::Regex;

use crate::ability::{Ability, format_modifier, modifier};
use crate::error::SheetResult;
use crate::record::{CharacterRecord, parse_number, split_list};
use crate::skill::governing_ability;

/// Marker for a skill or save the character is proficient in.
pub const PROFICIENT_MARKER: &str = r#"<i class="fas fa-check"></i>"#;

/// Marker for a skill or save the character is not proficient in.
pub const NOT_PROFICIENT_MARKER: &str = "-";

/// The names a character is proficient in, plus the bonus that applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Proficiencies {
    names: Vec<String>,
    bonus: i32,
}

impl Proficiencies {
    /// Build from proficiency names and the character's proficiency bonus.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, bonus: i32) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            bonus,
        }
    }

    /// Returns true if `name` is listed exactly.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The bonus added to proficient modifiers.
    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    /// Listed names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `base` plus the bonus if `name` is listed.
    fn apply(&self, name: &str, base: i32) -> i32 {
        if self.contains(name) {
            base + self.bonus
        } else {
            base
        }
    }
}

/// Renders character records into templates.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    modifier_pattern: Regex,
    proficiency_pattern: Regex,
}

impl TemplateEngine {
    /// Compile the placeholder patterns.
    pub fn new() -> SheetResult<Self> {
        Ok(Self {
            modifier_pattern: Regex::new(r"\[([^\[\]]+?) modifier\]")?,
            proficiency_pattern: Regex::new(r"\[([^\[\]]+?) proficiency\]")?,
        })
    }

    /// Substitute every resolvable placeholder in `template`.
    pub fn render(
        &self,
        record: &CharacterRecord,
        template: &str,
        proficiencies: &Proficiencies,
    ) -> SheetResult<String> {
        let mut text = self.substitute_fields(record, template, proficiencies)?;
        text = mark_proficiencies(&text, proficiencies);
        text = self.substitute_skill_modifiers(record, &text, proficiencies)?;
        text = self.mark_remaining_proficiencies(&text);
        Ok(substitute_blocks(record, &text))
    }

    /// Pass 1: record fields, plus modifiers of numeric fields.
    fn substitute_fields(
        &self,
        record: &CharacterRecord,
        template: &str,
        proficiencies: &Proficiencies,
    ) -> SheetResult<String> {
        let mut text = template.to_string();
        for (key, value) in record.entries() {
            let value = if key.contains("senses") {
                senses_with_passive_perception(record, value)?
            } else {
                value.to_string()
            };
            text = text.replace(&format!("[{key}]"), &value);

            if let Some(score) = parse_number(&value) {
                let total = proficiencies.apply(key, modifier(score));
                if key != "level" {
                    tracing::info!(field = key, modifier = total, "field modifier");
                }
                text = text.replace(&format!("[{key} modifier]"), &format_modifier(total));
            }
        }
        tracing::debug!(fields = record.len(), "substituted record fields");
        Ok(text)
    }

    /// Pass 3: remaining `[... modifier]` placeholders, resolved as skills.
    fn substitute_skill_modifiers(
        &self,
        record: &CharacterRecord,
        text: &str,
        proficiencies: &Proficiencies,
    ) -> SheetResult<String> {
        let mut skills: Vec<String> = self
            .modifier_pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect();
        skills.dedup();

        let mut text = text.to_string();
        for skill in skills {
            let base = match governing_ability(&skill) {
                Some(ability) => modifier(record.score(ability)?),
                None => 0,
            };
            let total = proficiencies.apply(&skill, base);
            if total != base {
                tracing::info!(
                    skill = %skill,
                    bonus = proficiencies.bonus(),
                    "adding proficiency bonus to skill"
                );
            }
            text = text.replace(&format!("[{skill} modifier]"), &format_modifier(total));
        }
        Ok(text)
    }

    /// Pass 4: every proficiency placeholder still present is not proficient.
    fn mark_remaining_proficiencies(&self, text: &str) -> String {
        self.proficiency_pattern
            .replace_all(text, NOT_PROFICIENT_MARKER)
            .into_owned()
    }
}

/// Pass 2: listed proficiencies get the check mark.
fn mark_proficiencies(text: &str, proficiencies: &Proficiencies) -> String {
    proficiencies
        .names()
        .iter()
        .fold(text.to_string(), |text, name| {
            text.replace(&format!("[{name} proficiency]"), PROFICIENT_MARKER)
        })
}

/// Pass 5: free-text blocks, the portrait, and ability/equipment lists.
fn substitute_blocks(record: &CharacterRecord, text: &str) -> String {
    let mut text = text.to_string();

    if let Some(info) = record.get("information") {
        text = text.replace("[background information]", info);
    }
    if let Some(notes) = record.get("notes") {
        text = text.replace("[notes]", notes);
    }
    if let Some(image) = record.get("image") {
        let stem = image.split('/').next().unwrap_or(image);
        let stem = stem.split('.').next().unwrap_or(stem);
        text = text.replace("[image-description]", &format!("{stem}-image"));
        text = text.replace("[image-url]", &format!("img/{image}"));
    }
    for (field, placeholder) in [("abilities", "[abilities list]"), ("equipment", "[equipment list]")] {
        if let Some(items) = record.get(field) {
            text = text.replace(placeholder, &list_items(items));
        }
    }

    text
}

/// `senses` with passive perception folded in.
///
/// Passive perception is `10 + wisdom modifier`.
pub fn senses_with_passive_perception(record: &CharacterRecord, senses: &str) -> SheetResult<String> {
    let passive = 10 + modifier(record.score(Ability::Wisdom)?);
    let senses = senses.trim();
    if senses.is_empty() || senses.to_lowercase().contains("none") {
        Ok(format!("Passive Perception = {passive}"))
    } else {
        Ok(format!("{senses}, Passive Perception: {passive}"))
    }
}

/// Render a comma-separated field as list items awaiting descriptions.
pub fn list_items(items: &str) -> String {
    split_list(items)
        .iter()
        .map(|item| format!("<li><strong>{item}:</strong>[{item} description]</li>"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::proficiency_bonus;
    use crate::error::SheetError;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    fn record(text: &str) -> CharacterRecord {
        CharacterRecord::parse(text).unwrap()
    }

    fn no_proficiencies() -> Proficiencies {
        Proficiencies::new(Vec::<String>::new(), 2)
    }

    #[test]
    fn proficient_skill_adds_bonus() {
        let r = record("class = fighter\nstrength = 14");
        let profs = Proficiencies::new(["athletics"], proficiency_bonus(1));
        let out = engine().render(&r, "[athletics modifier]", &profs).unwrap();
        assert_eq!(out, "+4");
    }

    #[test]
    fn plain_fields_and_field_modifiers() {
        let r = record("name = Kael\nclass = fighter\nstrength = 14\ndexterity = 8");
        let out = engine()
            .render(
                &r,
                "[name] the [class]: STR [strength] ([strength modifier]) DEX [dexterity modifier]",
                &no_proficiencies(),
            )
            .unwrap();
        insta::assert_snapshot!(out, @"Kael the fighter: STR 14 (+2) DEX -1");
    }

    #[test]
    fn saving_throw_proficiency_uses_field_name() {
        let r = record("class = fighter\nstrength = 14\nconstitution = 15\nlevel = 5");
        let profs = Proficiencies::new(["strength"], proficiency_bonus(5));
        let out = engine()
            .render(&r, "[strength modifier]/[constitution modifier]", &profs)
            .unwrap();
        assert_eq!(out, "+5/+2");
    }

    #[test]
    fn proficiency_markers() {
        let r = record("class = rogue\ndexterity = 16\nintelligence = 12");
        let profs = Proficiencies::new(["stealth"], 2);
        let out = engine()
            .render(
                &r,
                "[stealth proficiency] [stealth modifier] | [arcana proficiency] [arcana modifier]",
                &profs,
            )
            .unwrap();
        assert_eq!(out, format!("{PROFICIENT_MARKER} +5 | - +1"));
    }

    #[test]
    fn unmapped_skill_modifier_is_zero_based() {
        let r = record("class = bard");
        let out = engine()
            .render(&r, "[basket weaving modifier]", &no_proficiencies())
            .unwrap();
        assert_eq!(out, "+0");
    }

    #[test]
    fn skill_needs_its_ability() {
        let r = record("class = cleric");
        let err = engine()
            .render(&r, "[insight modifier]", &no_proficiencies())
            .unwrap_err();
        assert!(matches!(err, SheetError::MissingField(f) if f == "wisdom"));
    }

    #[test]
    fn skill_needs_numeric_ability() {
        let r = record("class = cleric\nwisdom = wise");
        let err = engine()
            .render(&r, "[insight modifier]", &no_proficiencies())
            .unwrap_err();
        assert!(matches!(err, SheetError::NotNumeric { .. }));
    }

    #[test]
    fn non_numeric_field_gets_no_field_modifier() {
        let r = record("class = monk\nspeed = 30 ft");
        let out = engine()
            .render(&r, "[speed] [speed modifier]", &no_proficiencies())
            .unwrap();
        // Falls through to the skill pass, which has no governing ability.
        assert_eq!(out, "30 ft +0");
    }

    #[test]
    fn unresolved_placeholders_are_kept() {
        let r = record("class = wizard");
        let template = "<h1>[title]</h1><p>[class]</p>";
        let once = engine().render(&r, template, &no_proficiencies()).unwrap();
        assert_eq!(once, "<h1>[title]</h1><p>wizard</p>");
        let twice = engine().render(&r, &once, &no_proficiencies()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn modifier_scan_does_not_cross_brackets() {
        let r = record("class = fighter\nstrength = 12");
        let out = engine()
            .render(&r, "[unknown] [athletics modifier]", &no_proficiencies())
            .unwrap();
        assert_eq!(out, "[unknown] +1");
    }

    #[test]
    fn senses_get_passive_perception() {
        let r = record("class = ranger\nwisdom = 14\nsenses = darkvision 60 ft");
        let out = engine().render(&r, "[senses]", &no_proficiencies()).unwrap();
        assert_eq!(out, "darkvision 60 ft, Passive Perception: 12");

        let r = record("class = ranger\nwisdom = 7\nsenses = None");
        let out = engine().render(&r, "[senses]", &no_proficiencies()).unwrap();
        assert_eq!(out, "Passive Perception = 8");
    }

    #[test]
    fn senses_without_wisdom() {
        let r = record("class = ranger\nsenses = blindsight");
        assert!(matches!(
            engine().render(&r, "[senses]", &no_proficiencies()),
            Err(SheetError::MissingField(f)) if f == "wisdom"
        ));
    }

    #[test]
    fn blocks() {
        let r = record(
            "class = paladin\ninformation = Sworn to the Dawn.\nimage = kael.png\nequipment = Longsword, Shield",
        );
        let out = engine()
            .render(
                &r,
                r#"<p>[background information]</p><img src="[image-url]" alt="[image-description]"><ul>[equipment list]</ul>"#,
                &no_proficiencies(),
            )
            .unwrap();
        insta::assert_snapshot!(out, @r#"<p>Sworn to the Dawn.</p><img src="img/kael.png" alt="kael-image"><ul><li><strong>longsword:</strong>[longsword description]</li><li><strong>shield:</strong>[shield description]</li></ul>"#);
    }

    #[test]
    fn list_items_skip_empty_entries() {
        assert_eq!(
            list_items("second wind, ,action surge,"),
            "<li><strong>second wind:</strong>[second wind description]</li>\
             <li><strong>action surge:</strong>[action surge description]</li>"
        );
    }
}
