use ratatui::{
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::canvas::{Canvas, Circle, Context, Line, Rectangle},
    Frame,
};

use crate::config::{GameConfig, Rgb};
use crate::game::{Point, RedirectKind};

use super::input::{Bounds, Buttons, WORLD_SIZE};
use super::scene::Scene;

pub const PIECE_RADIUS: f64 = 20.0;
/// Spacing of the scan lines used to fill shapes
const FILL_STEP: f64 = 2.0;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Draw one frame of the board into the whole terminal area.
pub fn render(frame: &mut Frame, scene: &Scene, config: &GameConfig) {
    let colors = &config.colors;
    let buttons = Buttons::from_config(config);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors.background.into())
        .x_bounds([0.0, WORLD_SIZE])
        .y_bounds([0.0, WORLD_SIZE])
        .paint(|ctx| {
            draw_cells(ctx, scene, colors.grid.into());
            fill_rect(ctx, buttons.roll, colors.move_button.into());
            fill_rect(ctx, buttons.reset, colors.reset_button.into());
            draw_score_boxes(ctx, scene, config);

            ctx.layer();
            for arrow in &scene.arrows {
                let color = match arrow.kind {
                    RedirectKind::Snake => colors.snakes,
                    RedirectKind::Ladder => colors.ladders,
                }
                .into();
                draw_line(ctx, arrow.tail, arrow.head, color);
                let [left, right] = arrow.barbs;
                draw_line(ctx, arrow.head, left, color);
                draw_line(ctx, left, right, color);
                draw_line(ctx, right, arrow.head, color);
            }

            ctx.layer();
            for piece in &scene.pieces {
                fill_circle(ctx, piece.center, PIECE_RADIUS, piece.color.into());
            }

            ctx.layer();
            draw_labels(ctx, scene, config, &buttons);
        });

    frame.render_widget(canvas, frame.area());
}

fn draw_cells(ctx: &mut Context, scene: &Scene, color: Color) {
    for cell in &scene.cells {
        let bounds = Bounds::new([cell.origin.x, cell.origin.y], [cell.size, cell.size]);
        ctx.draw(&to_rectangle(bounds, color));
    }
}

/// One box per player in a 2x2 block; a finished player's box is filled
fn draw_score_boxes(ctx: &mut Context, scene: &Scene, config: &GameConfig) {
    let color = config.colors.score_boxes.into();
    for (i, piece) in scene.pieces.iter().enumerate() {
        let bounds = score_box(config, i);
        if piece.has_won {
            fill_rect(ctx, bounds, color);
        } else {
            ctx.draw(&to_rectangle(bounds, color));
        }
    }
}

fn draw_labels(ctx: &mut Context, scene: &Scene, config: &GameConfig, buttons: &Buttons) {
    let text_style = Style::default().fg(config.colors.text.into());

    for cell in &scene.cells {
        let third = cell.size / 3.0;
        print(ctx, cell.origin.offset(third, third), cell.number.to_string(), text_style);
    }

    let roll = buttons.roll;
    print(ctx, Point::new(roll.x + 15.0, roll.y + 25.0), "Click here".into(), text_style);
    print(ctx, Point::new(roll.x + 20.0, roll.y + 50.0), "to Move".into(), text_style);
    let reset = buttons.reset;
    print(ctx, Point::new(reset.x + 9.0, reset.y + 7.0), "Reset".into(), text_style);

    for (i, piece) in scene.pieces.iter().enumerate() {
        let bounds = score_box(config, i);
        let at = Point::new(bounds.x + bounds.width / 5.0, bounds.y + bounds.height / 5.0);
        print(ctx, at, piece.label.clone(), text_style);
    }

    if let Some(status) = &scene.status {
        let [x, y] = config.status_text;
        print(
            ctx,
            Point::new(x, y),
            status.clone(),
            text_style.add_modifier(Modifier::BOLD),
        );
    }
}

pub fn score_box(config: &GameConfig, index: usize) -> Bounds {
    let [x, y] = config.score_boxes.position;
    let [width, height] = config.score_boxes.size;
    let column = (index % 2) as f64;
    let row = if index > 1 { 1.0 } else { 0.0 };
    Bounds::new([x + width * column, y + height * row], [width, height])
}

/// Board space has y growing downward, the canvas upward
fn flip(point: Point) -> (f64, f64) {
    (point.x, WORLD_SIZE - point.y)
}

fn to_rectangle(bounds: Bounds, color: Color) -> Rectangle {
    Rectangle {
        x: bounds.x,
        y: WORLD_SIZE - bounds.y - bounds.height,
        width: bounds.width,
        height: bounds.height,
        color,
    }
}

fn draw_line(ctx: &mut Context, from: Point, to: Point, color: Color) {
    let (x1, y1) = flip(from);
    let (x2, y2) = flip(to);
    ctx.draw(&Line {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}

fn fill_rect(ctx: &mut Context, bounds: Bounds, color: Color) {
    let mut y = bounds.y;
    while y <= bounds.y + bounds.height {
        draw_line(
            ctx,
            Point::new(bounds.x, y),
            Point::new(bounds.x + bounds.width, y),
            color,
        );
        y += FILL_STEP;
    }
}

fn fill_circle(ctx: &mut Context, center: Point, radius: f64, color: Color) {
    let (x, y) = flip(center);
    let mut r = radius;
    while r > 0.0 {
        ctx.draw(&Circle {
            x,
            y,
            radius: r,
            color,
        });
        r -= FILL_STEP;
    }
}

fn print(ctx: &mut Context, at: Point, text: String, style: Style) {
    let (x, y) = flip(at);
    ctx.print(x, y, Span::styled(text, style));
}
