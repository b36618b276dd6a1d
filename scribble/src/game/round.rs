use lexicon::{Lexicon, Roster};
use protocol::{Mode, Phase, RoundView};
use rand::Rng;

use crate::config::Config;
use crate::consts::SOLO_PLAYER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub draw_secs: u32,
    pub guess_secs: u32,
    pub points: u32,
}

impl Rules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            draw_secs: config.draw_secs,
            guess_secs: config.guess_secs,
            points: config.points,
        }
    }
}

/// Fixed inputs of a game: what can be drawn, who can draw, and the clock.
#[derive(Debug, Clone)]
pub struct Setup {
    pub lexicon: Lexicon,
    pub roster: Roster,
    pub rules: Rules,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectMode(Mode),
    Tick,
    Guess(String),
    NextRound,
    Reset,
}

/// Side effects requested by a transition, applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ClearCanvas,
    /// Drawing input is over; drop any stroke in progress.
    EndStroke,
    Notice {
        title: String,
        msg: String,
        destructive: bool,
    },
}

fn notice(title: &str, msg: impl Into<String>) -> Effect {
    Effect::Notice { title: title.to_string(), msg: msg.into(), destructive: false }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub word: String,
    pub mode: Option<Mode>,
    pub current_player: String,
    /// Roster seat of the current player; `None` outside team mode.
    pub seat: Option<usize>,
    pub phase: Phase,
    pub time_remaining: u32,
    pub score: u32,
    pub round_number: u32,
}

impl Round {
    pub fn new(rules: &Rules) -> Self {
        Self {
            word: String::new(),
            mode: None,
            current_player: String::new(),
            seat: None,
            phase: Phase::Waiting,
            time_remaining: rules.draw_secs,
            score: 0,
            round_number: 1,
        }
    }

    /// Applies one action. Actions that do not fit the current phase leave
    /// the round untouched and return no effects.
    pub fn update<R: Rng + ?Sized>(&mut self, action: Action, setup: &Setup, rng: &mut R) -> Vec<Effect> {
        match (self.phase, action) {
            (Phase::Waiting, Action::SelectMode(mode)) => self.select_mode(mode, setup, rng),
            (Phase::Drawing | Phase::Guessing, Action::Tick) => self.tick(setup),
            (Phase::Guessing, Action::Guess(guess)) => self.guess(&guess, setup),
            (Phase::Ended, Action::NextRound) => self.next_round(setup, rng),
            (_, Action::Reset) => self.reset(setup),
            (phase, action) => {
                log::debug!("ignoring {:?} during {}", action, phase);
                vec![]
            }
        }
    }

    fn select_mode<R: Rng + ?Sized>(&mut self, mode: Mode, setup: &Setup, rng: &mut R) -> Vec<Effect> {
        self.mode = Some(mode);
        match mode {
            Mode::Solo => {
                self.seat = None;
                self.current_player = SOLO_PLAYER.to_string();
            }
            Mode::Team => self.take_seat(setup.roster.random_seat(rng), setup),
        }
        self.start_round(setup, rng)
    }

    fn start_round<R: Rng + ?Sized>(&mut self, setup: &Setup, rng: &mut R) -> Vec<Effect> {
        self.word = setup.lexicon.pick(rng).to_string();
        self.phase = Phase::Drawing;
        self.time_remaining = setup.rules.draw_secs;
        let mode = self.mode.unwrap_or(Mode::Solo);
        vec![
            Effect::ClearCanvas,
            notice("Game Started!", format!("{} mode - Draw: {}", mode, self.word)),
        ]
    }

    fn tick(&mut self, setup: &Setup) -> Vec<Effect> {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return vec![];
        }
        match self.phase {
            Phase::Drawing => {
                self.phase = Phase::Guessing;
                self.time_remaining = setup.rules.guess_secs;
                vec![Effect::EndStroke]
            }
            _ => self.end_round(),
        }
    }

    fn guess(&mut self, guess: &str, setup: &Setup) -> Vec<Effect> {
        if guess.trim().is_empty() {
            return vec![notice("Make Your Guess", "What is being drawn?")];
        }
        if guess.to_lowercase() != self.word.to_lowercase() {
            return vec![Effect::Notice {
                title: "Try Again".to_string(),
                msg: "That's not quite right!".to_string(),
                destructive: true,
            }];
        }
        self.score = self.score.saturating_add(setup.rules.points);
        let mut effects = vec![notice("Correct!", format!("You guessed \"{}\" correctly!", self.word))];
        effects.extend(self.end_round());
        effects
    }

    fn end_round(&mut self) -> Vec<Effect> {
        self.phase = Phase::Ended;
        self.time_remaining = 0;
        vec![notice("Round Complete!", format!("The word was: {}", self.word))]
    }

    fn next_round<R: Rng + ?Sized>(&mut self, setup: &Setup, rng: &mut R) -> Vec<Effect> {
        self.round_number += 1;
        if let Some(seat) = self.seat {
            self.take_seat(setup.roster.next_seat(seat), setup);
        }
        self.start_round(setup, rng)
    }

    fn take_seat(&mut self, seat: usize, setup: &Setup) {
        self.seat = Some(seat);
        self.current_player = setup.roster.member(seat).to_string();
    }

    fn reset(&mut self, setup: &Setup) -> Vec<Effect> {
        *self = Round::new(&setup.rules);
        vec![Effect::EndStroke, Effect::ClearCanvas]
    }

    pub fn view(&self) -> RoundView {
        let word = match self.phase {
            Phase::Drawing | Phase::Ended => Some(self.word.clone()),
            Phase::Waiting | Phase::Guessing => None,
        };
        RoundView {
            phase: self.phase,
            mode: self.mode,
            player: self.current_player.clone(),
            word,
            time_remaining: self.time_remaining,
            score: self.score,
            round: self.round_number,
        }
    }
}
