//! Scripted players implementing the `Interaction` trait.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use aardvark::domain::answer::parse_yes_no;
use aardvark::infrastructure::traits::Interaction;

fn closed() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
}

/// Replays typed lines in order and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
    pub told: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Interaction for ScriptedInteraction {
    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompts.push(prompt.to_string());
        loop {
            let line = self.lines.pop_front().ok_or_else(closed)?;
            if let Some(answer) = parse_yes_no(&line) {
                return Ok(answer);
            }
        }
    }

    fn ask_text(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or_else(closed)
    }

    fn tell(&mut self, message: &str) -> io::Result<()> {
        self.told.push(message.to_string());
        Ok(())
    }
}

/// Answers with a deterministic pseudo-random bit stream and invents
/// fresh animals and questions when asked.
#[derive(Debug)]
pub struct RandomPlayer {
    state: u64,
    invented: usize,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed,
            invented: 0,
        }
    }

    fn next_bit(&mut self) -> bool {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) & 1 == 1
    }
}

impl Interaction for RandomPlayer {
    fn ask_yes_no(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(self.next_bit())
    }

    fn ask_text(&mut self, prompt: &str) -> io::Result<String> {
        self.invented += 1;
        if prompt.contains("question") {
            Ok(format!("question {}?", self.invented))
        } else {
            Ok(format!("animal {}", self.invented))
        }
    }

    fn tell(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }
}
