use crate::config::Rules;
use crate::model::{Condition, Dice, Pet, STAT_MAX, STAT_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActionKind {
    Feed,
    Play,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeathCause {
    Unhappiness { happiness: i32 },
    Hunger { hunger: i32 },
}

/// Everything one player action did to the pet, for the loop to narrate.
/// The sim never prints.
#[derive(Clone, Debug)]
pub(crate) struct TurnOutcome {
    pub(crate) action: ActionKind,
    /// The rolled primary delta: meal portion for a feed, joy for a play.
    pub(crate) rolled: i32,
    pub(crate) age: u32,
    pub(crate) hunger_gain: i32,
    pub(crate) happiness_loss: i32,
    pub(crate) penalty: Option<i32>,
    /// Zero, one, or both causes, in check order (happiness first).
    pub(crate) deaths: Vec<DeathCause>,
}

impl Pet {
    pub(crate) fn feed(&mut self, rules: &Rules, dice: &mut dyn Dice) -> Option<TurnOutcome> {
        if !self.alive {
            return None;
        }
        let (lo, hi) = rules.meal_portion;
        let portion = dice.roll(lo, hi);
        self.hunger -= portion;
        self.happiness -= rules.feed_joy_cost;
        Some(self.time_step(ActionKind::Feed, portion, rules, dice))
    }

    pub(crate) fn play(&mut self, rules: &Rules, dice: &mut dyn Dice) -> Option<TurnOutcome> {
        if !self.alive {
            return None;
        }
        let (lo, hi) = rules.play_joy;
        let joy = dice.roll(lo, hi);
        self.happiness += joy;
        self.hunger += rules.play_appetite_cost;
        Some(self.time_step(ActionKind::Play, joy, rules, dice))
    }

    /// Passive drift that rides along with every action: age up, roll hunger
    /// and happiness drift, then re-derive the condition and check for death.
    fn time_step(
        &mut self,
        action: ActionKind,
        rolled: i32,
        rules: &Rules,
        dice: &mut dyn Dice,
    ) -> TurnOutcome {
        self.age += 1;
        let (lo, hi) = rules.decay;
        let hunger_gain = dice.roll(lo, hi);
        let happiness_loss = dice.roll(lo, hi);
        self.hunger += hunger_gain;
        self.happiness -= happiness_loss;

        let penalty = self.apply_condition(rules);
        let deaths = self.check_game_over();

        TurnOutcome {
            action,
            rolled,
            age: self.age,
            hunger_gain,
            happiness_loss,
            penalty,
            deaths,
        }
    }

    // Exactly one branch fires, first match wins, and every comparison (plus
    // the starving penalty) reads pre-clamp values. Clamping runs last.
    fn apply_condition(&mut self, rules: &Rules) -> Option<i32> {
        let mut penalty = None;
        if self.hunger > rules.starving_above {
            self.happiness -= rules.starving_penalty;
            penalty = Some(rules.starving_penalty);
            self.condition = Condition::Starving;
        } else if self.happiness < rules.neglected_below {
            self.condition = Condition::Neglected;
        } else if self.hunger < rules.full_below {
            self.condition = Condition::Full;
        } else {
            self.condition = Condition::Content;
        }
        self.clamp_stats();
        penalty
    }

    // Runs on clamped values. The causes are independent and may both fire in
    // the same step; `alive` only ever goes false.
    fn check_game_over(&mut self) -> Vec<DeathCause> {
        let mut deaths = Vec::new();
        if self.happiness <= STAT_MIN {
            self.alive = false;
            deaths.push(DeathCause::Unhappiness {
                happiness: self.happiness,
            });
        }
        if self.hunger >= STAT_MAX {
            self.alive = false;
            deaths.push(DeathCause::Hunger {
                hunger: self.hunger,
            });
        }
        deaths
    }
}
