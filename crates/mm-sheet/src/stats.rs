//! Rolled ability scores and hit points for characters that leave them blank.

use rand::rngs::StdRng;

use crate::ability::Ability::{Charisma as Cha, Constitution as Con, Dexterity as Dex};
use crate::ability::Ability::{Intelligence as Int, Strength as Str, Wisdom as Wis};
use crate::ability::{Ability, modifier};
use crate::dice::{DicePool, Die};
use crate::error::{SheetError, SheetResult};

/// No ability is raised above this by level bonuses.
pub const MAX_SCORE: i32 = 22;

/// Highest level hit points are rolled for.
pub const MAX_LEVEL: i32 = 100;

/// Highest constitution score hit points accept.
pub const MAX_CONSTITUTION: i32 = 99;

/// Ability scores in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityScores {
    scores: Vec<(Ability, i32)>,
}

impl AbilityScores {
    /// Score for an ability, if assigned.
    pub fn get(&self, ability: Ability) -> Option<i32> {
        self.scores
            .iter()
            .find(|(a, _)| *a == ability)
            .map(|(_, s)| *s)
    }

    /// Scores in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        self.scores.iter().copied()
    }

    /// Sum of all scores.
    pub fn total(&self) -> i32 {
        self.scores.iter().map(|(_, s)| s).sum()
    }
}

impl FromIterator<(Ability, i32)> for AbilityScores {
    fn from_iter<I: IntoIterator<Item = (Ability, i32)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Roll 4d6 and keep the highest three.
pub fn roll_4d6_drop_lowest(rng: &mut StdRng) -> i32 {
    let pool = DicePool::of(Die::D6, 4);
    let roll = pool.roll(rng);
    let kept = roll.total_dropping_lowest(1) as i32;
    tracing::debug!(%pool, %roll, kept, "rolled ability score, dropping lowest");
    kept
}

/// Abilities ordered from most to least important for a class.
///
/// Unknown classes get an empty list.
pub fn stat_priority(class: &str) -> &'static [Ability] {
    match class.trim().to_lowercase().as_str() {
        "barbarian" => &[Str, Con, Dex, Wis, Int, Cha],
        "bard" => &[Cha, Dex, Con, Int, Wis, Str],
        "cleric" => &[Wis, Con, Str, Int, Dex, Cha],
        "druid" => &[Wis, Con, Dex, Int, Cha, Str],
        "fighter" => &[Str, Con, Dex, Wis, Int, Cha],
        "monk" => &[Dex, Wis, Con, Str, Int, Cha],
        "paladin" => &[Str, Con, Cha, Wis, Int, Dex],
        "ranger" => &[Dex, Wis, Con, Int, Str, Cha],
        "rogue" => &[Dex, Int, Con, Wis, Str, Cha],
        "sorcerer" => &[Cha, Con, Dex, Wis, Int, Str],
        "warlock" => &[Cha, Con, Dex, Wis, Int, Str],
        "wizard" => &[Int, Con, Dex, Wis, Cha, Str],
        _ => &[],
    }
}

/// Extra ability points a character of `level` has to spend.
pub fn level_bonus_points(level: i32) -> i32 {
    if level < 4 {
        0
    } else if level < 8 {
        2
    } else if level < 12 {
        4
    } else if level < 16 {
        6
    } else if level < 19 {
        8
    } else {
        10
    }
}

/// Spend level bonus points on the highest scores first, capped at [`MAX_SCORE`].
pub fn adjust_for_level(scores: AbilityScores, level: i32) -> AbilityScores {
    let mut points = level_bonus_points(level);
    if points == 0 {
        return scores;
    }

    let mut sorted = scores.scores;
    // Stable sort keeps priority order between equal scores.
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    for (_, score) in &mut sorted {
        if points == 0 {
            break;
        }
        let add = points.min((MAX_SCORE - *score).max(0));
        *score += add;
        points -= add;
    }

    tracing::debug!(level, scores = ?sorted, "applied level bonus points");
    AbilityScores { scores: sorted }
}

/// Roll six scores and assign them by the class's priorities, highest first.
pub fn generate_stats(class: &str, level: i32, rng: &mut StdRng) -> SheetResult<AbilityScores> {
    let priority = stat_priority(class);
    if priority.is_empty() {
        return Err(SheetError::UnknownClass(class.to_string()));
    }

    let mut rolls: Vec<i32> = (0..priority.len())
        .map(|_| roll_4d6_drop_lowest(rng))
        .collect();
    rolls.sort_unstable_by(|a, b| b.cmp(a));

    let scores = priority.iter().copied().zip(rolls).collect();
    let scores = adjust_for_level(scores, level);
    tracing::info!(class, level, total = scores.total(), "generated ability scores");
    Ok(scores)
}

/// The hit die for a class.
pub fn hit_die(class: &str) -> Option<Die> {
    match class.trim().to_lowercase().as_str() {
        "barbarian" => Some(Die::D12),
        "fighter" | "paladin" | "ranger" => Some(Die::D10),
        "bard" | "cleric" | "druid" | "monk" | "rogue" | "warlock" => Some(Die::D8),
        "sorcerer" | "wizard" => Some(Die::D6),
        _ => None,
    }
}

/// Hit points: a full hit die at first level, then one rolled die per level
/// after that, each adjusted by the constitution modifier.
pub fn calculate_hp(class: &str, level: i32, constitution: i32, rng: &mut StdRng) -> SheetResult<i32> {
    let die = hit_die(class).ok_or_else(|| SheetError::UnknownClass(class.to_string()))?;
    check_range("level", level, MAX_LEVEL)?;
    check_range("constitution", constitution, MAX_CONSTITUTION)?;
    let con = modifier(constitution);

    let pool = DicePool::of(die, 1);
    let mut hp = die.sides() as i32 + con;
    for _ in 2..=level {
        let roll = pool.roll(rng);
        tracing::debug!(%pool, %roll, con, "rolled hit points");
        hp += roll.total() as i32 + con;
    }
    Ok(hp)
}

fn check_range(field: &str, value: i32, max: i32) -> SheetResult<()> {
    if value > max {
        return Err(SheetError::OutOfRange {
            field: field.to_string(),
            value,
            max,
        });
    }
    Ok(())
}
