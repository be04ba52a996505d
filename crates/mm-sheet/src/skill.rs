//! Which ability governs a skill.

use crate::ability::Ability;

/// Skill keywords in lookup order. A skill name is matched by containment,
/// so `"stealth (urban)"` still resolves to dexterity.
const SKILL_KEYWORDS: &[(&str, Ability)] = &[
    ("arcana", Ability::Intelligence),
    ("history", Ability::Intelligence),
    ("investigation", Ability::Intelligence),
    ("nature", Ability::Intelligence),
    ("religion", Ability::Intelligence),
    ("animal handling", Ability::Wisdom),
    ("insight", Ability::Wisdom),
    ("medicine", Ability::Wisdom),
    ("perception", Ability::Wisdom),
    ("survival", Ability::Wisdom),
    ("deception", Ability::Charisma),
    ("intimidation", Ability::Charisma),
    ("performance", Ability::Charisma),
    ("persuasion", Ability::Charisma),
    ("athletics", Ability::Strength),
    ("acrobatics", Ability::Dexterity),
    ("sleight of hand", Ability::Dexterity),
    ("stealth", Ability::Dexterity),
];

/// The ability that governs `skill`, if any keyword matches.
pub fn governing_ability(skill: &str) -> Option<Ability> {
    let skill = skill.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .find(|(keyword, _)| skill.contains(keyword))
        .map(|(_, ability)| *ability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_skills() {
        assert_eq!(governing_ability("athletics"), Some(Ability::Strength));
        assert_eq!(governing_ability("stealth"), Some(Ability::Dexterity));
        assert_eq!(governing_ability("arcana"), Some(Ability::Intelligence));
        assert_eq!(governing_ability("insight"), Some(Ability::Wisdom));
        assert_eq!(governing_ability("persuasion"), Some(Ability::Charisma));
        assert_eq!(governing_ability("Animal Handling"), Some(Ability::Wisdom));
        assert_eq!(governing_ability("sleight of hand"), Some(Ability::Dexterity));
    }

    #[test]
    fn containment_match() {
        assert_eq!(
            governing_ability("stealth (urban)"),
            Some(Ability::Dexterity)
        );
    }

    #[test]
    fn unknown_skill() {
        assert_eq!(governing_ability("basket weaving"), None);
    }
}
