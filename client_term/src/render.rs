//! Terminal rendering of a match snapshot
//!
//! Everything is drawn on a ratatui canvas in arena pixels. The arena's y axis
//! points down and the canvas's points up, so every y goes through [`flip_y`].

use game_core::{PlayerId, Rect, Snapshot};
use ratatui::layout::Rect as Area;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Line as Segment, Rectangle};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Dash and gap length of the center divider
const DIVIDER_DASH: i32 = 10;
/// Baseline of the score digits
const SCORE_Y: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A piece of text anchored in arena coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub align: Align,
    pub style: Style,
}

impl Label {
    fn new(text: impl Into<String>, x: i32, y: i32, align: Align, style: Style) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            align,
            style,
        }
    }
}

/// Scores, plus the game-over banner or the instructions
pub fn labels(snap: &Snapshot) -> Vec<Label> {
    let w = snap.arena.width;
    let h = snap.arena.height;
    let score_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut labels = vec![
        Label::new(
            snap.player1_score.to_string(),
            w / 4,
            SCORE_Y,
            Align::Center,
            score_style,
        ),
        Label::new(
            snap.player2_score.to_string(),
            3 * w / 4,
            SCORE_Y,
            Align::Center,
            score_style,
        ),
    ];

    if snap.running {
        let hint = Style::default().fg(Color::Gray);
        labels.push(Label::new("Player 1: W/S keys", 10, h - 40, Align::Left, hint));
        labels.push(Label::new("Player 2: UP/DOWN arrows", 10, h - 20, Align::Left, hint));
        labels.push(Label::new(
            format!("First to {} points wins!", snap.arena.win_score),
            w - 150,
            h - 20,
            Align::Left,
            hint,
        ));
    } else {
        let banner = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        let winner = snap.winner().unwrap_or(PlayerId::One);
        labels.push(Label::new("Game Over!", w / 2, h / 2 - 60, Align::Center, banner));
        labels.push(Label::new(
            format!("Player {} Wins!", winner.number()),
            w / 2,
            h / 2,
            Align::Center,
            banner,
        ));
        labels.push(Label::new(
            "Press SPACE to restart",
            w / 2,
            h / 2 + 40,
            Align::Center,
            Style::default().fg(Color::White),
        ));
    }

    labels
}

/// Dash segments of the center divider as (top, bottom) pairs
pub fn divider_dashes(height: i32) -> Vec<(i32, i32)> {
    (0..height)
        .step_by((DIVIDER_DASH * 2) as usize)
        .map(|top| (top, (top + DIVIDER_DASH).min(height)))
        .collect()
}

fn flip_y(height: i32, y: i32) -> f64 {
    f64::from(height - y)
}

/// Canvas rectangle for an arena rect (canvas rects are anchored bottom-left)
fn canvas_rect(height: i32, rect: &Rect, color: Color) -> Rectangle {
    Rectangle {
        x: f64::from(rect.x()),
        y: flip_y(height, rect.bottom()),
        width: f64::from(rect.width()),
        height: f64::from(rect.height()),
        color,
    }
}

/// Arena pixels covered by one terminal cell horizontally
fn cell_width(arena_width: i32, area: Area) -> f64 {
    let inner = area.width.saturating_sub(2).max(1);
    f64::from(arena_width) / f64::from(inner)
}

pub fn draw(frame: &mut Frame, snap: &Snapshot) {
    let area = frame.area();
    let w = snap.arena.width;
    let h = snap.arena.height;
    let char_w = cell_width(w, area);
    let labels = labels(snap);

    let canvas = Canvas::default()
        .block(Block::bordered().title(" pong "))
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(w)])
        .y_bounds([0.0, f64::from(h)])
        .paint(|ctx| {
            for (top, bottom) in divider_dashes(h) {
                ctx.draw(&Segment {
                    x1: f64::from(w / 2),
                    y1: flip_y(h, top),
                    x2: f64::from(w / 2),
                    y2: flip_y(h, bottom),
                    color: Color::White,
                });
            }

            ctx.draw(&canvas_rect(h, &snap.paddle1, Color::White));
            ctx.draw(&canvas_rect(h, &snap.paddle2, Color::White));

            let center = snap.ball.center();
            ctx.draw(&Circle {
                x: f64::from(center.x),
                y: flip_y(h, center.y),
                radius: f64::from(snap.ball.width()) / 2.0,
                color: Color::White,
            });

            ctx.layer();
            for label in &labels {
                let width = label.text.chars().count() as f64 * char_w;
                let x = match label.align {
                    Align::Left => f64::from(label.x),
                    Align::Center => f64::from(label.x) - width / 2.0,
                };
                ctx.print(
                    x.max(0.0),
                    flip_y(h, label.y),
                    Line::styled(label.text.clone(), label.style),
                );
            }
        });

    frame.render_widget(canvas, area);
}
