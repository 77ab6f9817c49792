use rand::Rng;

use crate::snake::{Pos, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Food {
    board: Size,
    pos: Pos,
}

impl Food {
    pub fn new(board: Size, rng: &mut impl Rng) -> Self {
        let mut food = Food {
            board,
            pos: board.center(),
        };
        food.reposition(rng);
        food
    }

    pub fn reposition(&mut self, rng: &mut impl Rng) {
        let max_x = i32::from(self.board.width) - 3;
        let max_y = i32::from(self.board.height) - 3;
        self.pos = Pos {
            x: rng.gen_range(1..=max_x),
            y: rng.gen_range(1..=max_y),
        };
    }

    pub fn position(&self) -> Pos {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, pos: Pos) {
        self.pos = pos;
    }
}
