use crossterm::style::Stylize;

use crate::model::{Appetite, Mood, Pet};
use crate::sim::{ActionKind, DeathCause, TurnOutcome};

const BANNER_RULE: &str = "====================================";
const MENU_RULE: &str = "===================================";
const REPORT_RULE: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";
const GAME_OVER_RULE: &str = "=============================================";

const METER_WIDTH: usize = 14;

pub(crate) fn welcome_banner() -> String {
    format!(
        "{BANNER_RULE}\n{}\n{BANNER_RULE}\n",
        "     PETLING - VIRTUAL PET CARE".bold()
    )
}

pub(crate) fn name_prompt() -> &'static str {
    "Give your new pet a name: "
}

pub(crate) fn defaulted_name_note(name: &str) -> String {
    format!("No name given, so {name} it is.")
}

pub(crate) fn greeting(name: &str) -> String {
    format!("\nHello! I am your pet, {name}.")
}

pub(crate) fn menu(name: &str) -> String {
    format!(
        "\n{MENU_RULE}\n\
         What will you do for {name}?\n\
         1. Feed    (less hunger, a little less joy)\n\
         2. Play    (more joy, a little more hunger)\n\
         3. Status  (full report)\n\
         4. Quit\n\
         {MENU_RULE}\n"
    )
}

pub(crate) fn choice_prompt() -> &'static str {
    "Enter your choice (1-4): "
}

pub(crate) fn invalid_choice() -> &'static str {
    "Invalid choice. Please enter a number between 1 and 4."
}

pub(crate) fn status_report(pet: &Pet) -> String {
    let mut s = String::new();
    s.push_str(REPORT_RULE);
    s.push('\n');
    s.push_str(&format!("STATUS REPORT for {}\n", pet.name.to_uppercase()));
    s.push_str(&format!(
        "Happiness: {} {:>3}% {}\n",
        meter(pet.happiness),
        pet.happiness,
        mood_glyph(pet.mood())
    ));
    s.push_str(&format!(
        "Hunger:    {} {:>3}% {}\n",
        meter(pet.hunger),
        pet.hunger,
        appetite_glyph(pet.appetite())
    ));
    s.push_str(&format!("Mood:      {}\n", pet.condition.message()));
    s.push_str(&format!("Age:       {} days\n", pet.age));
    s.push_str(REPORT_RULE);
    s.push('\n');
    s
}

pub(crate) fn turn_narration(name: &str, outcome: &TurnOutcome) -> String {
    let mut s = String::new();
    match outcome.action {
        ActionKind::Feed => s.push_str(&format!(
            "\n[FEED] You set out a meal for {name} (hunger -{}).\n",
            outcome.rolled
        )),
        ActionKind::Play => s.push_str(&format!(
            "\n[PLAY] You played a lively game with {name} (happiness +{}).\n",
            outcome.rolled
        )),
    }
    s.push_str(&format!(
        "\n--- A brief moment passes in {name}'s life... (age {}) ---\n",
        outcome.age
    ));
    s.push_str(&format!(
        "Time takes its toll: hunger +{}, happiness -{}.\n",
        outcome.hunger_gain, outcome.happiness_loss
    ));
    if let Some(penalty) = outcome.penalty {
        s.push_str(&format!(
            "{name} is critically hungry! Happiness -{penalty}.\n"
        ));
    }
    for death in &outcome.deaths {
        s.push_str(&game_over_banner(name, *death));
    }
    s
}

pub(crate) fn game_over_banner(name: &str, cause: DeathCause) -> String {
    let line = match cause {
        DeathCause::Unhappiness { happiness } => {
            format!("GAME OVER! {name} became too unhappy (happiness {happiness}).")
        }
        DeathCause::Hunger { hunger } => {
            format!("GAME OVER! {name} became too hungry (hunger {hunger}).")
        }
    };
    format!(
        "\n{}\n{}\nThe simulation ends here.\n{}\n",
        GAME_OVER_RULE.red(),
        line.red().bold(),
        GAME_OVER_RULE.red()
    )
}

pub(crate) fn farewell(name: &str) -> String {
    format!("\nThank you for playing! Take care, {name}.")
}

fn meter(value: i32) -> String {
    let v = (value.clamp(0, 100) as f32) / 100.0;
    let fill = (v * METER_WIDTH as f32 + 0.5) as usize;
    let mut s = String::new();
    s.push('[');
    for i in 0..METER_WIDTH {
        s.push(if i < fill { '█' } else { ' ' });
    }
    s.push(']');
    s
}

fn mood_glyph(mood: Mood) -> String {
    match mood {
        Mood::Happy => "(^o^)".green().to_string(),
        Mood::Neutral => "(o_o)".yellow().to_string(),
        Mood::Sad => "(;_;)".red().to_string(),
    }
}

fn appetite_glyph(appetite: Appetite) -> String {
    match appetite {
        Appetite::Full => "(full)".green().to_string(),
        Appetite::Ok => "(okay)".yellow().to_string(),
        Appetite::Starving => "(starving)".red().to_string(),
    }
}
