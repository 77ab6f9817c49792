use crossterm::event::{KeyEvent, KeyEventKind};
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::food::Food;
use crate::input::{restart_requested, Command};
use crate::scores::HighScores;
use crate::snake::{Direction, Size, Snek};

pub const FOOD_BONUS: u32 = 1000;

#[derive(Debug, PartialEq)]
pub enum StepResult {
    Ongoing,
    Nommed,
    Collision,
}

#[derive(Clone, Debug)]
pub struct Session {
    size: Size,
    snek: Snek,
    food: Food,
    score: u32,
}

impl Session {
    pub fn new(size: Size, speed: u16, rng: &mut impl Rng) -> Self {
        Session {
            size,
            snek: Snek::new(size, speed),
            food: Food::new(size, rng),
            score: 0,
        }
    }

    // Collision and eating are judged before the head moves this tick
    pub fn step(&mut self, intent: Option<Direction>, rng: &mut impl Rng) -> StepResult {
        if self.score > 0 {
            self.score += 1;
        }

        if let Some(direction) = intent {
            if !self.snek.turn(direction) {
                debug!("Ignored reversal to {:?}", direction);
            }
        }
        if self.score == 0 && self.snek.direction().is_some() {
            self.score = 1;
        }

        if self.snek.collision() {
            return StepResult::Collision;
        }

        let nommed = self.check_nomming(rng);
        self.snek.slither();

        if nommed {
            StepResult::Nommed
        } else {
            StepResult::Ongoing
        }
    }

    fn check_nomming(&mut self, rng: &mut impl Rng) -> bool {
        if !self.snek.consumed(self.food.position()) {
            return false;
        }
        self.score += FOOD_BONUS;
        self.food.reposition(rng);
        self.snek.grow();
        debug!(
            "Nommed, length {} score {} next food at {:?}",
            self.snek.length(),
            self.score,
            self.food.position()
        );
        true
    }

    pub fn restart(&mut self, rng: &mut impl Rng) {
        self.score = 0;
        self.snek.reset();
        self.food.reposition(rng);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn snek(&self) -> &Snek {
        &self.snek
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Playing,
    GameOver {
        final_score: u32,
        rank: Option<usize>,
    },
    Exit,
}

pub struct Game<R = ThreadRng> {
    pub state: GameState,
    session: Session,
    high_scores: HighScores,
    pending: Option<Direction>,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(size: Size, speed: u16) -> Self {
        Game::new_with_rng(size, speed, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(size: Size, speed: u16, mut rng: R) -> Self {
        let session = Session::new(size, speed, &mut rng);
        info!(
            "New game on a {}x{} board, food at {:?}",
            size.width,
            size.height,
            session.food().position()
        );
        Game {
            state: GameState::Playing,
            session,
            high_scores: HighScores::new(),
            pending: None,
            rng,
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match self.state {
            GameState::Playing => match Command::from_key_event(key) {
                Some(Command::Turn(direction)) => self.pending = Some(direction),
                Some(Command::Quit) => self.state = GameState::Exit,
                None => {}
            },
            // Restart or leave; nothing else is on offer
            GameState::GameOver { .. } => {
                if restart_requested(key) {
                    self.restart();
                } else {
                    self.state = GameState::Exit;
                }
            }
            GameState::Exit => {}
        }
    }

    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        let intent = self.pending.take();
        if let StepResult::Collision = self.session.step(intent, &mut self.rng) {
            let final_score = self.session.score();
            let rank = self.high_scores.record(final_score);
            info!(
                "Game over at {:?} with score {} (rank {:?})",
                self.session.snek().head(),
                final_score,
                rank
            );
            self.state = GameState::GameOver { final_score, rank };
        }
    }

    fn restart(&mut self) {
        self.session.restart(&mut self.rng);
        self.pending = None;
        self.state = GameState::Playing;
        info!("Restarted, food at {:?}", self.session.food().position());
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }
}

#[cfg(test)]
impl Session {
    pub(crate) fn place_food(&mut self, pos: crate::snake::Pos) {
        self.food.place(pos);
    }
}

#[cfg(test)]
impl<R> Game<R> {
    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
