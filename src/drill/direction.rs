//! Left/right arrows shown next to a call

use serde::Serialize;

use super::picker::RandomPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Coin flip between left and right
    pub fn roll(picker: &mut RandomPicker) -> Self {
        if picker.bernoulli(0.5) {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Each prompt type that shows arrows owns its own pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrowGroup {
    Foul,
    Violation,
    OutOfBounds,
}

impl ArrowGroup {
    pub const ALL: [ArrowGroup; 3] = [ArrowGroup::Foul, ArrowGroup::Violation, ArrowGroup::OutOfBounds];

    fn index(self) -> usize {
        match self {
            ArrowGroup::Foul => 0,
            ArrowGroup::Violation => 1,
            ArrowGroup::OutOfBounds => 2,
        }
    }
}

/// Active arrow per group
#[derive(Debug, Clone, Default)]
pub struct DirectionIndicator {
    active: [Option<Direction>; 3],
    last: Option<Direction>,
}

impl DirectionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Light one arrow of `group`; other groups are untouched
    pub fn set(&mut self, group: ArrowGroup, direction: Direction) {
        self.active[group.index()] = Some(direction);
        self.last = Some(direction);
    }

    pub fn current(&self, group: ArrowGroup) -> Option<Direction> {
        self.active[group.index()]
    }

    /// Most recently set direction across all groups
    pub fn last(&self) -> Option<Direction> {
        self.last
    }

    pub fn clear_all(&mut self) {
        self.active = [None; 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_only_touches_own_group() {
        let mut arrows = DirectionIndicator::new();
        arrows.set(ArrowGroup::Foul, Direction::Left);
        arrows.set(ArrowGroup::Violation, Direction::Right);
        assert_eq!(arrows.current(ArrowGroup::Foul), Some(Direction::Left));

        // Overwrite replaces, never leaves both arrows lit
        arrows.set(ArrowGroup::Foul, Direction::Right);
        assert_eq!(arrows.current(ArrowGroup::Foul), Some(Direction::Right));
        assert_eq!(arrows.current(ArrowGroup::Violation), Some(Direction::Right));
        assert_eq!(arrows.current(ArrowGroup::OutOfBounds), None);
        assert_eq!(arrows.last(), Some(Direction::Right));
    }

    #[test]
    fn test_clear_all() {
        let mut arrows = DirectionIndicator::new();
        for group in ArrowGroup::ALL {
            arrows.set(group, Direction::Left);
        }
        arrows.clear_all();
        for group in ArrowGroup::ALL {
            assert_eq!(arrows.current(group), None);
        }
    }

    #[test]
    fn test_roll_produces_both() {
        let mut picker = RandomPicker::new(5);
        let rolls: Vec<Direction> = (0..100).map(|_| Direction::roll(&mut picker)).collect();
        assert!(rolls.contains(&Direction::Left));
        assert!(rolls.contains(&Direction::Right));
    }
}
