use std::collections::VecDeque;

pub const MIN_BOARD_DIM: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width >= MIN_BOARD_DIM && height >= MIN_BOARD_DIM,
            "Board must be at least {MIN_BOARD_DIM}x{MIN_BOARD_DIM}, got {width}x{height}"
        );
        Size { width, height }
    }

    pub fn center(&self) -> Pos {
        Pos {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

// Signed so a head that runs through a wall is still representable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PosDelta {
    x: i32,
    y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }

    fn stepped(&self, dir: Direction, cells: u16) -> Pos {
        let delta = PosDelta::from(dir);
        let cells = i32::from(cells);
        Pos {
            x: self.x + delta.x * cells,
            y: self.y + delta.y * cells,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snek {
    board: Size,
    head: Pos,
    body: VecDeque<Pos>,
    length: usize,
    speed: u16,
    direction: Option<Direction>,
    blocked: Option<Direction>,
    heading: Option<Direction>,
}

impl Snek {
    pub fn new(board: Size, speed: u16) -> Self {
        assert!(speed > 0, "Snake speed must be at least one cell per tick");
        Snek {
            board,
            head: board.center(),
            body: VecDeque::new(),
            length: 1,
            speed,
            direction: None,
            blocked: None,
            heading: None,
        }
    }

    /// Refuses reversals, including two quick turns before the snake has moved.
    pub fn turn(&mut self, direction: Direction) -> bool {
        let reverses_heading = self.heading.map(|h| h.opposite()) == Some(direction);
        if self.blocked == Some(direction) || reverses_heading {
            return false;
        }
        self.direction = Some(direction);
        self.blocked = Some(direction.opposite());
        true
    }

    /// Advances the head by `speed` cells and shifts every segment into the
    /// cell its leader held before this call. The old tail cell is dropped.
    pub fn slither(&mut self) {
        let old_head = self.head;
        if let Some(direction) = self.direction {
            self.head = old_head.stepped(direction, self.speed);
        }
        self.heading = self.direction;

        if !self.body.is_empty() {
            self.body.push_front(old_head);
            self.body.pop_back();
        }
    }

    // Call before `slither` in the same tick
    pub fn grow(&mut self) {
        self.body.push_front(self.head);
        self.length += 1;
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.head = self.board.center();
        self.length = 1;
        self.direction = None;
        self.blocked = None;
        self.heading = None;
    }

    pub fn collision(&self) -> bool {
        let max_x = i32::from(self.board.width) - 2;
        let max_y = i32::from(self.board.height) - 1;
        let Pos { x, y } = self.head;

        x < 1 || x > max_x || y < 1 || y > max_y || self.would_collide_with_body(self.head)
    }

    pub fn consumed(&self, food: Pos) -> bool {
        self.head == food
    }

    pub fn would_collide_with_body(&self, pos: Pos) -> bool {
        self.body.contains(&pos)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn head(&self) -> Pos {
        self.head
    }

    pub fn body(&self) -> &VecDeque<Pos> {
        &self.body
    }

    pub fn length(&self) -> usize {
        self.length
    }
}
