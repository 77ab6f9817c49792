use rand::Rng;
use ratatui::{
    prelude::*,
    style::{Style, Stylize},
    widgets::*,
};

use crate::game::{Game, GameState, Session};
use crate::scores::HIGH_SCORE_SLOTS;
use crate::snake::Pos;

const WALL_SYMBOL: &str = "#";
const HEAD_SYMBOL: &str = "O";
const FOOD_SYMBOL: &str = "X";
const BODY_SYMBOL: &str = "o";

impl<R: Rng> Game<R> {
    pub fn render(&self, frame: &mut Frame) {
        let score_text = match self.high_scores().best() {
            Some(best) => format!(
                "SNEK    Score: {}    Best: {}",
                self.session().score(),
                best
            ),
            None => format!("SNEK    Score: {}", self.session().score()),
        };

        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + score
                Constraint::Min(0),    // Board
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(score_text)
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        match self.state {
            GameState::Playing => frame.render_widget(self.session(), layout[1]),
            GameState::GameOver { final_score, rank } => {
                frame.render_widget(
                    Paragraph::new(self.summary(final_score, rank))
                        .alignment(Alignment::Center)
                        .block(Block::default().title("Game Over").borders(Borders::ALL)),
                    layout[1],
                );
            }
            GameState::Exit => {}
        }
    }

    fn summary(&self, final_score: u32, rank: Option<usize>) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from("GAME OVER").bold(),
            Line::from(format!("Score: {}", final_score)),
            Line::from(""),
            Line::from(format!("Top {}:", HIGH_SCORE_SLOTS)),
        ];

        for (i, score) in self.high_scores().entries().iter().enumerate() {
            let line = Line::from(format!("{}. {}", i + 1, score));
            if rank == Some(i) {
                lines.push(line.yellow().bold());
            } else {
                lines.push(line);
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from("Press S to play again, any other key to quit"));
        lines
    }
}

// Walls sit on the cells the snake dies on: columns 0 and width - 1, rows 0 and height
impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.size();
        let snek = self.snek();
        let food = self.food().position();

        for row in 0..=size.height {
            for col in 0..size.width {
                if col >= area.width || row >= area.height {
                    continue;
                }

                let pos = Pos::new(i32::from(col), i32::from(row));
                let wall = row == 0 || row == size.height || col == 0 || col == size.width - 1;
                let (symbol, style) = if wall {
                    (WALL_SYMBOL, Style::default().fg(Color::Gray))
                } else if pos == snek.head() {
                    (HEAD_SYMBOL, Style::default().fg(Color::Yellow).bold())
                } else if pos == food {
                    (FOOD_SYMBOL, Style::default().fg(Color::LightRed))
                } else if snek.would_collide_with_body(pos) {
                    (BODY_SYMBOL, Style::default().fg(Color::Green))
                } else {
                    (" ", Style::default())
                };

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Size;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn game(size: Size) -> Game<StdRng> {
        Game::new_with_rng(size, 1, StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_board_layout() {
        let game = game(Size::new(10, 8));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 9));
        game.session().render(buf.area, &mut buf);

        let rows = rows(&buf);
        assert_eq!(rows[0], "##########");
        assert_eq!(rows[8], "##########");
        for row in &rows[1..8] {
            assert!(row.starts_with('#') && row.ends_with('#'), "{row:?}");
        }

        // Head at the centre, food somewhere inside
        assert_eq!(buf[(5, 4)].symbol(), HEAD_SYMBOL);
        let food = game.session().food().position();
        if food != game.session().snek().head() {
            assert_eq!(buf[(food.x as u16, food.y as u16)].symbol(), FOOD_SYMBOL);
        }
        let heads = rows.iter().map(|r| r.matches(HEAD_SYMBOL).count()).sum::<usize>();
        assert_eq!(heads, 1);
    }

    #[test]
    fn test_board_draws_body() {
        let mut game = game(Size::new(20, 12));
        let start = game.session().snek().head();
        game.session_mut().place_food(Pos::new(start.x + 1, start.y));
        game.handle_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        game.update();
        game.update();
        // Keep the respawned food off the path
        game.session_mut().place_food(Pos::new(1, 1));
        game.update();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 13));
        game.session().render(buf.area, &mut buf);

        let snek = game.session().snek();
        assert_eq!(snek.length(), 2);
        assert_eq!(snek.head(), Pos::new(start.x + 3, start.y));
        assert_eq!(buf[(start.x as u16 + 3, start.y as u16)].symbol(), HEAD_SYMBOL);
        assert_eq!(buf[(start.x as u16 + 2, start.y as u16)].symbol(), BODY_SYMBOL);
        assert_eq!(buf[(1, 1)].symbol(), FOOD_SYMBOL);
    }

    #[test]
    fn test_board_clips_to_small_area() {
        let game = game(Size::new(50, 25));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        game.session().render(buf.area, &mut buf);

        assert_eq!(rows(&buf)[0], "##########");
    }

    #[test]
    fn test_frame_shows_score_header() {
        let game = game(Size::new(20, 10));
        let mut terminal = Terminal::new(TestBackend::new(40, 15)).unwrap();
        terminal.draw(|f| game.render(f)).unwrap();

        let screen = rows(terminal.backend().buffer()).join("\n");
        assert!(screen.contains("Score: 0"), "{screen}");
        assert!(!screen.contains("Best"));
    }

    #[test]
    fn test_frame_shows_game_over_summary() {
        let mut game = game(Size::new(10, 10));
        game.handle_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        while game.state == GameState::Playing {
            game.update();
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| game.render(f)).unwrap();

        let screen = rows(terminal.backend().buffer()).join("\n");
        assert!(screen.contains("GAME OVER"), "{screen}");
        assert!(screen.contains("Top 5:"));
        assert!(screen.contains("1. "));
        assert!(screen.contains("Press S to play again"));
        assert!(screen.contains("Best:"));
    }
}
