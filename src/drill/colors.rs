//! Team colors for foul prompts

use serde::Serialize;

use super::picker::RandomPicker;

/// Jersey colors teams are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Black,
}

/// Full palette, in display order
pub const PALETTE: [TeamColor; 6] = [
    TeamColor::Red,
    TeamColor::Blue,
    TeamColor::Green,
    TeamColor::Yellow,
    TeamColor::White,
    TeamColor::Black,
];

/// Backgrounds that need a white label
const DARK_COLORS: [&str; 4] = ["red", "blue", "green", "purple"];

impl TeamColor {
    /// CSS color name
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamColor::Red => "red",
            TeamColor::Blue => "blue",
            TeamColor::Green => "green",
            TeamColor::Yellow => "yellow",
            TeamColor::White => "white",
            TeamColor::Black => "black",
        }
    }

    /// Upper-cased name shown in front of the player number
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Text color to draw on top of this color
    pub fn contrast_label(&self) -> &'static str {
        if DARK_COLORS.contains(&self.as_str()) {
            "white"
        } else {
            "black"
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side committed the foul
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Team {
    A,
    B,
}

/// Colors worn by the two teams; always distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamColorAssignment {
    pub team_a: TeamColor,
    pub team_b: TeamColor,
}

impl TeamColorAssignment {
    /// Shuffle the palette and hand out the first two colors
    pub fn assign(picker: &mut RandomPicker) -> Self {
        let mut palette = PALETTE;
        picker.shuffle(&mut palette);
        Self {
            team_a: palette[0],
            team_b: palette[1],
        }
    }

    pub fn color_of(&self, team: Team) -> TeamColor {
        match team {
            Team::A => self.team_a,
            Team::B => self.team_b,
        }
    }
}
