use std::time::Duration;

use crate::constants::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Phase {
    Typing,
    Deleting,
}

/// Hero typing effect: types a phrase, holds it, deletes it, moves on.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    phase: Phase,
    next_step: Duration,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.as_ref().chars().collect()).collect(),
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            next_step: TYPING_START_DELAY,
        }
    }

    pub fn text(&self) -> String {
        match self.phrases.get(self.phrase) {
            Some(chars) => chars[..self.shown].iter().collect(),
            None => String::new(),
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Runs every step due at or before `now`.
    pub fn tick(&mut self, now: Duration) {
        if self.phrases.is_empty() {
            return;
        }
        while self.next_step <= now {
            let delay = self.step();
            self.next_step += delay;
        }
    }

    fn step(&mut self) -> Duration {
        let len = self.phrases[self.phrase].len();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Deleting;
                    TYPING_HOLD
                } else {
                    TYPING_CHAR_DELAY
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    TYPING_NEXT_PHRASE
                } else {
                    DELETING_CHAR_DELAY
                }
            }
        }
    }
}
