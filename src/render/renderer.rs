use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::screen::Screen;
use crate::game::{Fill, GameConfig, Region, TextField};

/// Draws a [`Screen`] onto the terminal
///
/// Each grid cell becomes two terminal columns, sampled from the surface at
/// the cell's centre. The number of cells follows from the surface size.
pub struct Renderer {
    tile_size: i32,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tile_size: config.tile_size,
        }
    }

    /// Cells along one side of the surface
    fn cells_per_side(&self, screen: &Screen) -> i32 {
        screen.size() / self.tile_size
    }

    pub fn render(&self, frame: &mut Frame, screen: &Screen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(screen), chunks[0]);

        let prompt_height = if screen.is_visible(Region::StartButton) { 3 } else { 0 };
        let game_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(prompt_height)])
            .split(chunks[1]);

        if screen.is_visible(Region::GameOver) {
            frame.render_widget(self.render_game_over(screen), game_area[0]);
        } else if screen.is_visible(Region::Board) {
            frame.render_widget(self.render_grid(screen), game_area[0]);
        }

        if screen.is_visible(Region::StartButton) {
            frame.render_widget(self.render_start_prompt(), game_area[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, screen: &Screen) -> Paragraph<'_> {
        let cells = self.cells_per_side(screen);
        let mut lines = Vec::new();

        for row in 0..cells {
            let spans: Vec<Span> = (0..cells)
                .map(|col| cell_span(screen.cell_fill(col, row, self.tile_size)))
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, screen: &Screen) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                screen.text(TextField::Score).to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                screen.text(TextField::HighScore).to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_prompt(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start", Style::default().fg(Color::Gray)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, screen: &Screen) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    screen.text(TextField::FinalScore).to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn cell_span(fill: Fill) -> Span<'static> {
    let (r, g, b) = fill.rgb();
    let color = Color::Rgb(r, g, b);
    match fill {
        Fill::Snake => Span::styled("■ ", Style::default().fg(color)),
        Fill::Food => Span::styled(
            "● ",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Fill::Background => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Display;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(screen: &Screen) -> String {
        let config = GameConfig::default();
        let renderer = Renderer::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, screen))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_start_screen() {
        let mut screen = Screen::new(400);
        screen.set_text(TextField::HighScore, "4".to_string());

        let text = draw(&screen);
        assert!(text.contains("High Score: 4"));
        assert!(text.contains("to start"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_board_shows_squares() {
        let mut screen = Screen::new(400);
        screen.set_visible(Region::StartButton, false);
        screen.fill_square(200, 200, 18, Fill::Snake);
        screen.fill_square(40, 40, 18, Fill::Food);

        let text = draw(&screen);
        assert!(text.contains('■'));
        assert!(text.contains('●'));
        assert!(!text.contains("to start"));
    }

    #[test]
    fn test_grid_extent_follows_surface() {
        let renderer = Renderer::new(&GameConfig::default());
        assert_eq!(renderer.cells_per_side(&Screen::new(400)), 20);
        assert_eq!(renderer.cells_per_side(&Screen::new(200)), 10);

        // A 10x10 surface leaves the cell at (12, 0) off the drawn grid
        let mut screen = Screen::new(200);
        screen.set_visible(Region::StartButton, false);
        screen.fill_square(240, 0, 18, Fill::Food);
        assert!(!draw(&screen).contains('●'));
    }

    #[test]
    fn test_game_over_screen() {
        let mut screen = Screen::new(400);
        screen.set_visible(Region::StartButton, false);
        screen.set_visible(Region::Board, false);
        screen.set_visible(Region::GameOver, true);
        screen.set_text(TextField::FinalScore, "12".to_string());

        let text = draw(&screen);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 12"));
    }
}
