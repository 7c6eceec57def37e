use rand::{rngs::StdRng, Rng, SeedableRng};

pub(crate) const STAT_MIN: i32 = 0;
pub(crate) const STAT_MAX: i32 = 100;

const START_HAPPINESS: i32 = 50;
const START_HUNGER: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mood {
    Happy,
    Neutral,
    Sad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Appetite {
    Full,
    Ok,
    Starving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Condition {
    Starving,
    Neglected,
    Full,
    Content,
}

impl Condition {
    pub(crate) fn message(self) -> &'static str {
        match self {
            Condition::Starving => "I'm starving and sad! Feed me now!",
            Condition::Neglected => "I feel neglected... please play with me.",
            Condition::Full => "I am perfectly full and happy!",
            Condition::Content => "I'm content and waiting for our next activity.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Pet {
    pub(crate) name: String,
    pub(crate) happiness: i32,
    pub(crate) hunger: i32,
    pub(crate) age: u32,
    pub(crate) alive: bool,
    pub(crate) condition: Condition,
}

impl Pet {
    pub(crate) fn adopt(name: &str) -> Self {
        Self {
            name: name.to_string(),
            happiness: START_HAPPINESS,
            hunger: START_HUNGER,
            age: 0,
            alive: true,
            condition: Condition::Content,
        }
    }

    pub(crate) fn mood(&self) -> Mood {
        if self.happiness > 70 {
            Mood::Happy
        } else if self.happiness > 30 {
            Mood::Neutral
        } else {
            Mood::Sad
        }
    }

    pub(crate) fn appetite(&self) -> Appetite {
        if self.hunger < 30 {
            Appetite::Full
        } else if self.hunger < 70 {
            Appetite::Ok
        } else {
            Appetite::Starving
        }
    }

    // Stats may leave [0,100] mid-step; this is the only place they re-enter it.
    pub(crate) fn clamp_stats(&mut self) {
        self.happiness = self.happiness.clamp(STAT_MIN, STAT_MAX);
        self.hunger = self.hunger.clamp(STAT_MIN, STAT_MAX);
    }
}

/// Uniform integer rolls behind a seam the session owns, so the sim stays
/// deterministic under test.
pub(crate) trait Dice {
    /// Uniform integer in `[lo, hi]`, both ends inclusive.
    fn roll(&mut self, lo: i32, hi: i32) -> i32;
}

pub(crate) struct StdDice(StdRng);

impl StdDice {
    pub(crate) fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub(crate) fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Dice for StdDice {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.gen_range(lo..=hi)
    }
}

/// Replays a fixed list of rolls, asserting each one fits the requested range.
#[cfg(test)]
pub(crate) struct ScriptedDice {
    rolls: std::collections::VecDeque<i32>,
}

#[cfg(test)]
impl ScriptedDice {
    pub(crate) fn new(rolls: &[i32]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn roll(&mut self, lo: i32, hi: i32) -> i32 {
        let v = self.rolls.pop_front().expect("scripted dice ran dry");
        assert!(
            (lo..=hi).contains(&v),
            "scripted roll {v} outside [{lo}, {hi}]"
        );
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adopted_pet_starts_at_the_midpoint() {
        let pet = Pet::adopt("Rex");
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.happiness, 50);
        assert_eq!(pet.hunger, 50);
        assert_eq!(pet.age, 0);
        assert!(pet.alive);
        assert_eq!(pet.condition, Condition::Content);
    }

    #[test]
    fn mood_tiers_break_at_70_and_30() {
        let mut pet = Pet::adopt("Rex");
        pet.happiness = 71;
        assert_eq!(pet.mood(), Mood::Happy);
        pet.happiness = 70;
        assert_eq!(pet.mood(), Mood::Neutral);
        pet.happiness = 31;
        assert_eq!(pet.mood(), Mood::Neutral);
        pet.happiness = 30;
        assert_eq!(pet.mood(), Mood::Sad);
    }

    #[test]
    fn appetite_tiers_break_at_30_and_70() {
        let mut pet = Pet::adopt("Rex");
        pet.hunger = 29;
        assert_eq!(pet.appetite(), Appetite::Full);
        pet.hunger = 30;
        assert_eq!(pet.appetite(), Appetite::Ok);
        pet.hunger = 69;
        assert_eq!(pet.appetite(), Appetite::Ok);
        pet.hunger = 70;
        assert_eq!(pet.appetite(), Appetite::Starving);
    }

    #[test]
    fn clamp_pulls_both_stats_back_into_range() {
        let mut pet = Pet::adopt("Rex");
        pet.happiness = 131;
        pet.hunger = -12;
        pet.clamp_stats();
        assert_eq!(pet.happiness, 100);
        assert_eq!(pet.hunger, 0);
    }

    #[test]
    fn scripted_dice_replays_in_order() {
        let mut dice = ScriptedDice::new(&[20, 3, 7]);
        assert_eq!(dice.roll(18, 28), 20);
        assert_eq!(dice.roll(3, 7), 3);
        assert_eq!(dice.roll(3, 7), 7);
    }

    #[test]
    fn std_dice_stays_inside_the_requested_range() {
        let mut dice = StdDice::seeded(0xC0FFEE);
        for _ in 0..200 {
            let v = dice.roll(18, 28);
            assert!((18..=28).contains(&v));
        }
    }
}
