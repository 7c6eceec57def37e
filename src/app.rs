use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::Result;

use crate::config::Rules;
use crate::input::{self, MenuChoice};
use crate::model::{Dice, Pet, StdDice};
use crate::render;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    AwaitingName,
    Playing,
    Ended,
}

pub(crate) struct App<R, W, D> {
    input: R,
    out: W,
    dice: D,
    rules: Rules,
    pet: Option<Pet>,
    phase: Phase,
}

pub(crate) fn run() -> Result<()> {
    let stdin = io::stdin();
    App::new(
        stdin.lock(),
        io::stdout(),
        StdDice::from_entropy(),
        Rules::default(),
    )
    .run()
}

impl<R: BufRead, W: Write, D: Dice> App<R, W, D> {
    pub(crate) fn new(input: R, out: W, dice: D, rules: Rules) -> Self {
        Self {
            input,
            out,
            dice,
            rules,
            pet: None,
            phase: Phase::AwaitingName,
        }
    }

    pub(crate) fn run(mut self) -> Result<()> {
        loop {
            match self.phase {
                Phase::AwaitingName => self.adopt()?,
                Phase::Playing => self.turn()?,
                Phase::Ended => break,
            }
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn adopt(&mut self) -> Result<()> {
        write!(self.out, "{}", render::welcome_banner())?;
        write!(self.out, "{}", render::name_prompt())?;
        self.out.flush()?;

        let raw = input::read_line(&mut self.input)?.unwrap_or_default();
        let (name, defaulted) = input::name_or_default(&raw, self.rules.default_name);
        if defaulted {
            writeln!(self.out, "{}", render::defaulted_name_note(name))?;
        }

        let pet = Pet::adopt(name);
        writeln!(self.out, "{}", render::greeting(&pet.name))?;
        write!(self.out, "{}", render::status_report(&pet))?;
        self.pet = Some(pet);
        self.phase = Phase::Playing;
        Ok(())
    }

    fn turn(&mut self) -> Result<()> {
        let Some(pet) = self.pet.as_mut() else {
            self.phase = Phase::Ended;
            return Ok(());
        };

        write!(self.out, "{}", render::menu(&pet.name))?;
        write!(self.out, "{}", render::choice_prompt())?;
        self.out.flush()?;

        // A closed stdin is a quit, not an error.
        let Some(line) = input::read_line(&mut self.input)? else {
            writeln!(self.out, "{}", render::farewell(&pet.name))?;
            self.phase = Phase::Ended;
            return Ok(());
        };

        match input::parse_choice(&line) {
            Some(MenuChoice::Feed) => {
                if let Some(outcome) = pet.feed(&self.rules, &mut self.dice) {
                    write!(self.out, "{}", render::turn_narration(&pet.name, &outcome))?;
                }
            }
            Some(MenuChoice::Play) => {
                if let Some(outcome) = pet.play(&self.rules, &mut self.dice) {
                    write!(self.out, "{}", render::turn_narration(&pet.name, &outcome))?;
                }
            }
            Some(MenuChoice::Status) => {
                write!(self.out, "{}", render::status_report(pet))?;
            }
            Some(MenuChoice::Quit) => {
                writeln!(self.out, "{}", render::farewell(&pet.name))?;
                self.phase = Phase::Ended;
                return Ok(());
            }
            None => {
                writeln!(self.out, "{}", render::invalid_choice())?;
            }
        }

        // The pet's own narration has already covered the game-over banner.
        if !pet.alive {
            self.phase = Phase::Ended;
            return Ok(());
        }

        if !self.rules.menu_pause.is_zero() {
            thread::sleep(self.rules.menu_pause);
        }
        Ok(())
    }
}
