//! Fixed violation and foul tables

/// Violation calls, in display order
pub const VIOLATIONS: [&str; 9] = [
    "Travelling",
    "Double Dribbling",
    "Carrying the Ball",
    "3 Seconds",
    "5 Seconds",
    "8 Seconds",
    "24 Seconds",
    "Backcourt Violation",
    "Kick Ball",
];

/// A foul and the restarts/free throws it can lead to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoulDefinition {
    pub name: &'static str,
    /// Throw-in spots (subset of "sideline", "endline")
    pub sideline_endline: &'static [&'static str],
    /// Shot outcomes (subset of "2-shots", "3-shots", "and-one")
    pub shots: &'static [&'static str],
}

impl FoulDefinition {
    const fn new(
        name: &'static str,
        sideline_endline: &'static [&'static str],
        shots: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            sideline_endline,
            shots,
        }
    }

    /// Number of consequence tags a prompt can pick from
    pub fn pool_len(&self) -> usize {
        self.sideline_endline.len() + self.shots.len()
    }

    /// Consequence tag at `idx` of the combined pool (throw-ins first, then shots)
    pub fn pool_tag(&self, idx: usize) -> Option<&'static str> {
        self.sideline_endline
            .iter()
            .chain(self.shots.iter())
            .nth(idx)
            .copied()
    }

    /// Whether `tag` is one of this foul's own consequences
    pub fn allows(&self, tag: &str) -> bool {
        self.sideline_endline.contains(&tag) || self.shots.contains(&tag)
    }
}

const THROW_IN: &[&str] = &["sideline", "endline"];

pub const FOULS: [FoulDefinition; 10] = [
    FoulDefinition::new("Holding", THROW_IN, &["2-shots"]),
    FoulDefinition::new("Blocking", THROW_IN, &["2-shots", "and-one"]),
    FoulDefinition::new("Illegal Screen Offense", THROW_IN, &[]),
    FoulDefinition::new("Pushing", THROW_IN, &["2-shots", "and-one"]),
    FoulDefinition::new("Handchecking", THROW_IN, &["2-shots"]),
    FoulDefinition::new("Illegal Use of Hands", THROW_IN, &["2-shots"]),
    FoulDefinition::new("Charging With Ball Offence", THROW_IN, &[]),
    FoulDefinition::new("Illegal Contact to Hand", &[], &["2-shots", "3-shots", "and-one"]),
    FoulDefinition::new("Excessive Swinging of Elbow", THROW_IN, &["2-shots"]),
    FoulDefinition::new("Hit to the Head", &[], &["2-shots", "and-one"]),
];

/// Look up a foul by name
pub fn foul_by_name(name: &str) -> Option<&'static FoulDefinition> {
    FOULS.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_order_throw_ins_first() {
        let blocking = foul_by_name("Blocking").unwrap();
        assert_eq!(blocking.pool_len(), 4);
        assert_eq!(blocking.pool_tag(0), Some("sideline"));
        assert_eq!(blocking.pool_tag(1), Some("endline"));
        assert_eq!(blocking.pool_tag(2), Some("2-shots"));
        assert_eq!(blocking.pool_tag(3), Some("and-one"));
        assert_eq!(blocking.pool_tag(4), None);
    }

    #[test]
    fn test_empty_pools() {
        // Offensive fouls have throw-ins only
        let screen = foul_by_name("Illegal Screen Offense").unwrap();
        assert!(screen.shots.is_empty());
        assert_eq!(screen.pool_len(), 2);

        let hand = foul_by_name("Illegal Contact to Hand").unwrap();
        assert!(hand.sideline_endline.is_empty());
        assert_eq!(hand.pool_tag(0), Some("2-shots"));
    }

    #[test]
    fn test_allows_only_own_tags() {
        let head = foul_by_name("Hit to the Head").unwrap();
        assert!(head.allows("and-one"));
        assert!(!head.allows("sideline"));
        assert!(!head.allows("3-shots"));
    }

    #[test]
    fn test_catalog_names_unique() {
        for (i, a) in FOULS.iter().enumerate() {
            for b in &FOULS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
        assert!(foul_by_name("Flopping").is_none());
    }
}
