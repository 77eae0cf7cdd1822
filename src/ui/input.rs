use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::GameConfig;
use crate::game::Point;

/// Width and height of the logical drawing space
pub const WORLD_SIZE: f64 = 800.0;
pub const ROLL_BUTTON_SIZE: [f64; 2] = [100.0, 100.0];
pub const RESET_BUTTON_SIZE: [f64; 2] = [60.0, 40.0];

/// Axis-aligned rectangle in board space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(origin: [f64; 2], size: [f64; 2]) -> Self {
        Bounds {
            x: origin[0],
            y: origin[1],
            width: size[0],
            height: size[1],
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Clickable buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Buttons {
    pub roll: Bounds,
    pub reset: Bounds,
}

impl Buttons {
    pub fn from_config(config: &GameConfig) -> Self {
        Buttons {
            roll: Bounds::new(config.move_button, ROLL_BUTTON_SIZE),
            reset: Bounds::new(config.reset_button, RESET_BUTTON_SIZE),
        }
    }
}

/// Maps terminal cells onto board space for the area the canvas was drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Viewport { area }
    }

    /// Board-space point under the center of a terminal cell, if the cell
    /// lies inside the canvas
    pub fn to_world(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        if row < area.y || row >= area.y + area.height {
            return None;
        }

        let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
        Some(Point::new(fx * WORLD_SIZE, fy * WORLD_SIZE))
    }
}

/// Requests collected over one frame. Repeats within a frame collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub roll: bool,
    pub reset: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn record(&mut self, event: &Event, viewport: &Viewport, buttons: &Buttons) {
        match event {
            Event::Key(key) => self.record_key(key),
            Event::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return;
                }
                let Some(point) = viewport.to_world(mouse.column, mouse.row) else {
                    return;
                };
                if buttons.roll.contains(point) {
                    self.roll = true;
                } else if buttons.reset.contains(point) {
                    self.reset = true;
                }
            }
            _ => {}
        }
    }

    fn record_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset = true,
            _ => self.roll = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseEvent;

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn setup() -> (Viewport, Buttons) {
        // One terminal cell per 10x10 board units
        let viewport = Viewport::new(Rect::new(0, 0, 80, 80));
        (viewport, Buttons::from_config(&GameConfig::default()))
    }

    #[test]
    fn test_viewport_maps_cells_to_world() {
        let viewport = Viewport::new(Rect::new(2, 1, 64, 32));
        assert_eq!(viewport.to_world(2, 1), Some(Point::new(6.25, 12.5)));
        assert_eq!(viewport.to_world(65, 32), Some(Point::new(793.75, 787.5)));
        assert_eq!(viewport.to_world(1, 1), None);
        assert_eq!(viewport.to_world(66, 1), None);
        assert_eq!(viewport.to_world(2, 33), None);
        assert_eq!(Viewport::default().to_world(0, 0), None);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new([10.0, 20.0], [100.0, 50.0]);
        assert!(bounds.contains(Point::new(10.0, 20.0)));
        assert!(bounds.contains(Point::new(110.0, 70.0)));
        assert!(!bounds.contains(Point::new(9.9, 30.0)));
        assert!(!bounds.contains(Point::new(50.0, 71.0)));
    }

    #[test]
    fn test_click_roll_button() {
        let (viewport, buttons) = setup();
        let mut input = FrameInput::default();
        // Default roll button spans x 660..760, y 260..360
        input.record(&click(70, 30), &viewport, &buttons);
        assert_eq!(
            input,
            FrameInput {
                roll: true,
                ..FrameInput::default()
            }
        );
    }

    #[test]
    fn test_click_reset_button() {
        let (viewport, buttons) = setup();
        let mut input = FrameInput::default();
        // Default reset button spans x 680..740, y 30..70
        input.record(&click(70, 5), &viewport, &buttons);
        assert!(input.reset);
        assert!(!input.roll);
    }

    #[test]
    fn test_click_elsewhere_is_ignored() {
        let (viewport, buttons) = setup();
        let mut input = FrameInput::default();
        input.record(&click(5, 5), &viewport, &buttons);
        assert_eq!(input, FrameInput::default());
    }

    #[test]
    fn test_keys() {
        let (viewport, buttons) = setup();
        let mut input = FrameInput::default();
        input.record(&key(KeyCode::Char(' ')), &viewport, &buttons);
        input.record(&key(KeyCode::Enter), &viewport, &buttons);
        assert!(input.roll);
        assert!(!input.quit);

        input.record(&key(KeyCode::Char('r')), &viewport, &buttons);
        assert!(input.reset);

        input.record(&key(KeyCode::Esc), &viewport, &buttons);
        assert!(input.quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let (viewport, buttons) = setup();
        let mut input = FrameInput::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        input.record(&event, &viewport, &buttons);
        assert!(input.quit);
        assert!(!input.roll);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (viewport, buttons) = setup();
        let mut input = FrameInput::default();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        input.record(&Event::Key(release), &viewport, &buttons);
        assert_eq!(input, FrameInput::default());
    }
}
