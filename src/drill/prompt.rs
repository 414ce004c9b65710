//! Prompt generators
//!
//! Each generator is a pure function of the picker and the fixed catalogs.
//! Everything but the number drill also rolls a fresh arrow direction.

use serde::Serialize;

use super::catalog::{FOULS, VIOLATIONS};
use super::colors::{Team, TeamColor, TeamColorAssignment};
use super::direction::{ArrowGroup, Direction};
use super::picker::RandomPicker;
use crate::consts::{DOUBLE_ZERO_CHANCE, MAX_PLAYER_NUMBER, NUMBER_RANGE};

/// Training mode; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[default]
    Numbers,
    Violations,
    Fouls,
    OutOfBounds,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Numbers,
        Category::Violations,
        Category::Fouls,
        Category::OutOfBounds,
    ];

    /// Id prefix used by the page (`numbersBtn`, `foulsTraining`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Numbers => "numbers",
            Category::Violations => "violations",
            Category::Fouls => "fouls",
            Category::OutOfBounds => "outOfBounds",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "numbers" | "number" => Some(Category::Numbers),
            "violations" | "violation" => Some(Category::Violations),
            "fouls" | "foul" => Some(Category::Fouls),
            "outofbounds" | "oob" => Some(Category::OutOfBounds),
            _ => None,
        }
    }

    /// Arrow pair shown with this category, if any
    pub fn arrow_group(&self) -> Option<ArrowGroup> {
        match self {
            Category::Numbers => None,
            Category::Violations => Some(ArrowGroup::Violation),
            Category::Fouls => Some(ArrowGroup::Foul),
            Category::OutOfBounds => Some(ArrowGroup::OutOfBounds),
        }
    }
}

/// Who touched the ball last before it went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LastTouch {
    Offense,
    Defense,
}

impl LastTouch {
    pub fn as_str(&self) -> &'static str {
        match self {
            LastTouch::Offense => "offense",
            LastTouch::Defense => "defense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberPrompt {
    /// "00" or an unpadded integer in 0..=99
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationPrompt {
    pub violation: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoulPrompt {
    /// Colors rolled for this prompt
    pub team_colors: TeamColorAssignment,
    pub team: Team,
    pub team_color: TeamColor,
    /// "00" or an integer in 1..=99
    pub player_number: String,
    pub foul_name: &'static str,
    /// One tag from the foul's own pool; `None` when the pool is empty
    pub consequence: Option<&'static str>,
    pub direction: Direction,
}

impl FoulPrompt {
    /// e.g. "RED 23"
    pub fn player_label(&self) -> String {
        format!("{} {}", self.team_color.label(), self.player_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutOfBoundsPrompt {
    pub last_touch: LastTouch,
    pub direction: Direction,
}

impl OutOfBoundsPrompt {
    pub fn label(&self) -> String {
        format!("Last Touch: {}", self.last_touch.as_str().to_uppercase())
    }
}

/// Result of one generation, tagged with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "camelCase")]
pub enum Prompt {
    Numbers(NumberPrompt),
    Violations(ViolationPrompt),
    Fouls(FoulPrompt),
    OutOfBounds(OutOfBoundsPrompt),
}

impl Prompt {
    pub fn category(&self) -> Category {
        match self {
            Prompt::Numbers(_) => Category::Numbers,
            Prompt::Violations(_) => Category::Violations,
            Prompt::Fouls(_) => Category::Fouls,
            Prompt::OutOfBounds(_) => Category::OutOfBounds,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Prompt::Numbers(_) => None,
            Prompt::Violations(p) => Some(p.direction),
            Prompt::Fouls(p) => Some(p.direction),
            Prompt::OutOfBounds(p) => Some(p.direction),
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prompt::Numbers(p) => write!(f, "{}", p.number),
            Prompt::Violations(p) => write!(f, "{} [{}]", p.violation, p.direction.as_str()),
            Prompt::Fouls(p) => {
                write!(f, "{} {}", p.player_label(), p.foul_name)?;
                if let Some(tag) = p.consequence {
                    write!(f, " ({tag})")?;
                }
                write!(f, " [{}]", p.direction.as_str())
            }
            Prompt::OutOfBounds(p) => write!(f, "{} [{}]", p.label(), p.direction.as_str()),
        }
    }
}

/// "00" with a small fixed chance, otherwise `low + uniform(span)`
fn roll_jersey(picker: &mut RandomPicker, low: u32, span: u32) -> String {
    if picker.bernoulli(DOUBLE_ZERO_CHANCE) {
        "00".to_string()
    } else {
        (low + picker.uniform(span as usize) as u32).to_string()
    }
}

pub fn generate_number(picker: &mut RandomPicker) -> NumberPrompt {
    NumberPrompt {
        number: roll_jersey(picker, 0, NUMBER_RANGE),
    }
}

pub fn generate_violation(picker: &mut RandomPicker) -> ViolationPrompt {
    let violation = VIOLATIONS[picker.uniform(VIOLATIONS.len())];
    ViolationPrompt {
        violation,
        direction: Direction::roll(picker),
    }
}

pub fn generate_foul(picker: &mut RandomPicker) -> FoulPrompt {
    let team_colors = TeamColorAssignment::assign(picker);
    let player_number = roll_jersey(picker, 1, MAX_PLAYER_NUMBER);

    let team = if picker.bernoulli(0.5) { Team::A } else { Team::B };
    let team_color = team_colors.color_of(team);

    let foul = FOULS[picker.uniform(FOULS.len())];
    let consequence = match foul.pool_len() {
        0 => None,
        n => foul.pool_tag(picker.uniform(n)),
    };

    FoulPrompt {
        team_colors,
        team,
        team_color,
        player_number,
        foul_name: foul.name,
        consequence,
        direction: Direction::roll(picker),
    }
}

pub fn generate_out_of_bounds(picker: &mut RandomPicker) -> OutOfBoundsPrompt {
    let last_touch = if picker.uniform(2) == 0 {
        LastTouch::Offense
    } else {
        LastTouch::Defense
    };
    OutOfBoundsPrompt {
        last_touch,
        direction: Direction::roll(picker),
    }
}

/// Run the generator for `category`
pub fn generate(category: Category, picker: &mut RandomPicker) -> Prompt {
    match category {
        Category::Numbers => Prompt::Numbers(generate_number(picker)),
        Category::Violations => Prompt::Violations(generate_violation(picker)),
        Category::Fouls => Prompt::Fouls(generate_foul(picker)),
        Category::OutOfBounds => Prompt::OutOfBounds(generate_out_of_bounds(picker)),
    }
}
