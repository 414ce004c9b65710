//! Training session state
//!
//! One owned `TrainingSession` per page (or CLI run). Front ends forward
//! user input and timer ticks here and render from `board()`/`directions()`.

use super::colors::TeamColorAssignment;
use super::direction::{ArrowGroup, Direction, DirectionIndicator};
use super::picker::RandomPicker;
use super::prompt::{
    Category, FoulPrompt, NumberPrompt, OutOfBoundsPrompt, Prompt, ViolationPrompt, generate,
};
use super::timer::{ReplayTimer, TickHandle};
use crate::error::Result;

/// Last prompt shown in each display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBoard {
    pub number: Option<NumberPrompt>,
    pub violation: Option<ViolationPrompt>,
    pub foul: Option<FoulPrompt>,
    pub out_of_bounds: Option<OutOfBoundsPrompt>,
}

impl DisplayBoard {
    pub fn show(&mut self, prompt: &Prompt) {
        match prompt {
            Prompt::Numbers(p) => self.number = Some(p.clone()),
            Prompt::Violations(p) => self.violation = Some(p.clone()),
            Prompt::Fouls(p) => self.foul = Some(p.clone()),
            Prompt::OutOfBounds(p) => self.out_of_bounds = Some(p.clone()),
        }
    }

    /// What the display for `category` currently shows
    pub fn current(&self, category: Category) -> Option<Prompt> {
        match category {
            Category::Numbers => self.number.clone().map(Prompt::Numbers),
            Category::Violations => self.violation.clone().map(Prompt::Violations),
            Category::Fouls => self.foul.clone().map(Prompt::Fouls),
            Category::OutOfBounds => self.out_of_bounds.clone().map(Prompt::OutOfBounds),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct TrainingSession {
    picker: RandomPicker,
    category: Category,
    team_colors: TeamColorAssignment,
    directions: DirectionIndicator,
    board: DisplayBoard,
    timer: ReplayTimer,
    /// Prompts generated so far (manual and timed)
    generations: u64,
}

impl TrainingSession {
    pub fn new(seed: u64) -> Self {
        let mut picker = RandomPicker::new(seed);
        let team_colors = TeamColorAssignment::assign(&mut picker);
        Self {
            picker,
            category: Category::default(),
            team_colors,
            directions: DirectionIndicator::new(),
            board: DisplayBoard::default(),
            timer: ReplayTimer::new(),
            generations: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.picker.seed()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn team_colors(&self) -> TeamColorAssignment {
        self.team_colors
    }

    pub fn directions(&self) -> &DirectionIndicator {
        &self.directions
    }

    pub fn board(&self) -> &DisplayBoard {
        &self.board
    }

    pub fn timer(&self) -> &ReplayTimer {
        &self.timer
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Switch mode and blank every display and arrow.
    ///
    /// A running timer keeps going and targets the new category from its next tick.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.board.clear();
        self.directions.clear_all();
        log::info!("Category: {}", category.as_str());
    }

    /// One-shot generation for `category` (need not be the active one)
    pub fn generate(&mut self, category: Category) -> Prompt {
        let prompt = generate(category, &mut self.picker);

        if let Prompt::Fouls(foul) = &prompt {
            self.team_colors = foul.team_colors;
        }
        if let (Some(group), Some(direction)) = (category.arrow_group(), prompt.direction()) {
            self.directions.set(group, direction);
        }
        self.board.show(&prompt);
        self.generations += 1;

        log::debug!("Generated #{}: {}", self.generations, prompt);
        prompt
    }

    /// Generate for whatever category is active right now
    pub fn trigger_generation(&mut self) -> Prompt {
        self.generate(self.category)
    }

    /// Manual arrow override
    pub fn set_direction(&mut self, direction: Direction, group: ArrowGroup) {
        self.directions.set(group, direction);
    }

    /// Start auto-advance; generates once immediately when the timer actually starts.
    ///
    /// Returns the new tick handle, or `None` if the timer was already running.
    pub fn start_timer(&mut self, interval_ms: i64, now_ms: u64) -> Result<Option<TickHandle>> {
        let started = self.timer.start(interval_ms, now_ms).inspect_err(|e| {
            log::warn!("Timer rejected ({interval_ms} ms): {e}");
        })?;

        if let Some(handle) = started {
            log::info!("Timer ON every {interval_ms} ms");
            self.trigger_generation();
            return Ok(Some(handle));
        }
        Ok(None)
    }

    pub fn stop_timer(&mut self) -> bool {
        let stopped = self.timer.stop();
        if stopped {
            log::info!("Timer OFF");
        }
        stopped
    }

    /// Run one generation per interval tick due at `now_ms`
    pub fn advance(&mut self, now_ms: u64) -> Vec<Prompt> {
        let due = self.timer.poll(now_ms);
        (0..due).map(|_| self.trigger_generation()).collect()
    }

    /// Externally scheduled tick; ignored unless `handle` is the current run's
    pub fn fire_tick(&mut self, handle: TickHandle) -> Option<Prompt> {
        if !self.timer.accepts(handle) {
            log::debug!("Dropped stale tick {handle:?}");
            return None;
        }
        Some(self.trigger_generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrillError;

    #[test]
    fn test_new_session_defaults() {
        let session = TrainingSession::new(12345);
        assert_eq!(session.category(), Category::Numbers);
        assert_ne!(session.team_colors().team_a, session.team_colors().team_b);
        assert!(session.board().is_blank());
        assert!(!session.timer().is_running());
        assert_eq!(session.generations(), 0);
    }

    #[test]
    fn test_select_category_clears_every_group() {
        let mut session = TrainingSession::new(1);
        session.generate(Category::Fouls);
        session.generate(Category::Violations);
        session.set_direction(Direction::Left, ArrowGroup::OutOfBounds);

        session.select_category(Category::Violations);
        for group in ArrowGroup::ALL {
            assert_eq!(session.directions().current(group), None);
        }
        assert!(session.board().is_blank());
        assert_eq!(session.category(), Category::Violations);
    }

    #[test]
    fn test_generation_updates_board_and_arrow() {
        let mut session = TrainingSession::new(2);
        let prompt = session.generate(Category::OutOfBounds);
        let Prompt::OutOfBounds(oob) = prompt else {
            panic!("wrong category");
        };
        assert_eq!(session.board().out_of_bounds.as_ref(), Some(&oob));
        assert_eq!(
            session.board().current(Category::OutOfBounds),
            Some(Prompt::OutOfBounds(oob.clone()))
        );
        assert_eq!(session.board().current(Category::Numbers), None);
        assert_eq!(
            session.directions().current(ArrowGroup::OutOfBounds),
            Some(oob.direction)
        );
        assert_eq!(session.directions().current(ArrowGroup::Foul), None);
    }

    #[test]
    fn test_foul_replaces_team_colors() {
        let mut session = TrainingSession::new(3);
        for _ in 0..20 {
            let Prompt::Fouls(foul) = session.generate(Category::Fouls) else {
                panic!("wrong category");
            };
            assert_eq!(session.team_colors(), foul.team_colors);
        }
    }

    #[test]
    fn test_thousand_fouls_in_foul_mode() {
        use crate::drill::catalog::foul_by_name;

        let mut session = TrainingSession::new(99);
        session.select_category(Category::Fouls);
        for _ in 0..1000 {
            let Prompt::Fouls(foul) = session.trigger_generation() else {
                panic!("wrong category");
            };
            let def = foul_by_name(foul.foul_name).expect("catalog name");
            if let Some(tag) = foul.consequence {
                assert!(def.allows(tag));
            }
        }
        assert_eq!(session.generations(), 1000);
    }

    #[test]
    fn test_timer_immediate_plus_interval_ticks() {
        let mut session = TrainingSession::new(4);
        session.start_timer(1_000, 0).unwrap();
        assert_eq!(session.generations(), 1);

        session.advance(3_100);
        assert_eq!(session.generations(), 4);

        assert!(session.stop_timer());
        assert!(session.advance(10_000).is_empty());
        assert_eq!(session.generations(), 4);
    }

    #[test]
    fn test_rejected_interval_changes_nothing() {
        let mut session = TrainingSession::new(5);
        assert_eq!(
            session.start_timer(500, 0),
            Err(DrillError::IntervalOutOfRange { interval_ms: 500 })
        );
        assert!(session.start_timer(70_000, 0).is_err());
        assert!(!session.timer().is_running());
        assert_eq!(session.generations(), 0);
    }

    #[test]
    fn test_double_start_single_schedule() {
        let mut session = TrainingSession::new(6);
        let handle = session.start_timer(1_000, 0).unwrap();
        assert!(handle.is_some());
        assert_eq!(session.start_timer(1_000, 0).unwrap(), None);
        assert_eq!(session.generations(), 1);

        session.advance(1_000);
        assert_eq!(session.generations(), 2);
    }

    #[test]
    fn test_no_late_fire_after_stop() {
        let mut session = TrainingSession::new(7);
        let handle = session.start_timer(1_000, 0).unwrap().unwrap();
        assert!(session.fire_tick(handle).is_some());

        // A tick already queued by the browser arrives after stop
        session.stop_timer();
        assert!(session.fire_tick(handle).is_none());

        // ...or after a restart with a new handle
        session.start_timer(1_000, 0).unwrap();
        let count = session.generations();
        assert!(session.fire_tick(handle).is_none());
        assert_eq!(session.generations(), count);
    }

    #[test]
    fn test_category_switch_applies_on_next_tick() {
        let mut session = TrainingSession::new(8);
        session.start_timer(1_000, 0).unwrap();
        assert!(session.board().number.is_some());

        session.select_category(Category::Violations);
        assert!(session.timer().is_running());
        assert!(session.board().is_blank());

        let prompts = session.advance(1_000);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].category(), Category::Violations);
        assert!(session.board().number.is_none());
        assert!(session.board().violation.is_some());
    }

    #[test]
    fn test_same_seed_same_drill() {
        let mut a = TrainingSession::new(2024);
        let mut b = TrainingSession::new(2024);
        for category in Category::ALL {
            assert_eq!(a.generate(category), b.generate(category));
        }
    }
}
