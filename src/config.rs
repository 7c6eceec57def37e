use std::time::Duration;

/// Gameplay tunables. One instance per session; every threshold and delta the
/// sim uses lives here rather than inline at the call sites.
#[derive(Clone, Debug)]
pub(crate) struct Rules {
    /// Hunger relief rolled per feed, inclusive bounds.
    pub(crate) meal_portion: (i32, i32),
    /// Fixed happiness cost of being made to sit down and eat.
    pub(crate) feed_joy_cost: i32,
    /// Happiness rolled per play, inclusive bounds.
    pub(crate) play_joy: (i32, i32),
    /// Fixed hunger worked up by a play session.
    pub(crate) play_appetite_cost: i32,
    /// Passive per-step drift, inclusive bounds: hunger gains one roll from
    /// this range, happiness loses another.
    pub(crate) decay: (i32, i32),
    /// Hunger strictly above this marks the pet starving.
    pub(crate) starving_above: i32,
    /// Happiness lost on a starving step.
    pub(crate) starving_penalty: i32,
    /// Happiness strictly below this marks the pet neglected.
    pub(crate) neglected_below: i32,
    /// Hunger strictly below this marks the pet perfectly full.
    pub(crate) full_below: i32,
    /// Name used when the player offers none.
    pub(crate) default_name: &'static str,
    /// Cosmetic pause before the menu is shown again.
    pub(crate) menu_pause: Duration,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            meal_portion: (18, 28),
            feed_joy_cost: 5,
            play_joy: (18, 28),
            play_appetite_cost: 5,
            decay: (3, 7),
            starving_above: 80,
            starving_penalty: 8,
            neglected_below: 20,
            full_below: 20,
            default_name: "Pixel",
            menu_pause: Duration::from_millis(500),
        }
    }
}
