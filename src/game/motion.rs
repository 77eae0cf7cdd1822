use std::cmp::Ordering;
use std::collections::VecDeque;

use super::board::{Grid, Point};

/// Cells per frame for an ordinary step.
pub const STEP_SPEED: f64 = 0.25;
pub const STEP_PAUSE_FRAMES: u32 = 2;
pub const JUMP_PAUSE_FRAMES: u32 = 6;
/// A jump covers `distance / JUMP_SPEED_DIVISOR + JUMP_BASE_SPEED` cells per
/// frame, so long snakes and ladders finish in roughly the same time as short ones.
pub const JUMP_SPEED_DIVISOR: f64 = 20.0;
pub const JUMP_BASE_SPEED: f64 = 0.5;
/// Slack added to the per-frame speed when deciding that a segment is done.
pub const SNAP_EPSILON: f64 = 0.01;

/// One queued piece movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInstruction {
    /// Walk cell by cell to the given cell
    StepTo(u8),
    /// Slide straight to the given cell (snake or ladder)
    JumpTo(u8),
}

/// Cosmetic animation state of one piece.
///
/// `position` is a real-valued cell number that travels between the two
/// cells in `bounds`. Ordinary steps advance `bounds` one cell at a time
/// (`[20, 21]`, then `[21, 22]`, ...); a jump spans the whole redirect
/// (`[20, 43]`). When a segment completes the bounds collapse to
/// `[cell, cell]`. None of this feeds back into game state.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    queue: VecDeque<MoveInstruction>,
    bounds: [u8; 2],
    position: f64,
    target: u8,
    speed: f64,
    pause_frames: u32,
    coordinate: Point,
}

impl Motion {
    /// A motion resting on `cell`
    pub fn new(cell: u8, grid: &Grid) -> Self {
        Motion {
            queue: VecDeque::new(),
            bounds: [cell, cell],
            position: f64::from(cell),
            target: cell,
            speed: STEP_SPEED,
            pause_frames: 0,
            coordinate: grid.coordinate(cell),
        }
    }

    pub fn enqueue(&mut self, instruction: MoveInstruction) {
        self.queue.push_back(instruction);
    }

    /// Instructions not yet started
    pub fn queue(&self) -> &VecDeque<MoveInstruction> {
        &self.queue
    }

    pub fn bounds(&self) -> [u8; 2] {
        self.bounds
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn pause_frames(&self) -> u32 {
        self.pause_frames
    }

    /// Interpolated top-left coordinate of the piece
    pub fn coordinate(&self) -> Point {
        self.coordinate
    }

    /// Current segment finished on its target
    fn segment_done(&self) -> bool {
        self.bounds[0] == self.bounds[1] && self.bounds[1] == self.target
    }

    /// Nothing left to animate
    pub fn is_settled(&self) -> bool {
        self.segment_done() && self.queue.is_empty()
    }

    /// Pop the next instruction and set up its animation. Returns `false`
    /// when the queue is empty.
    pub fn process_next_instruction(&mut self) -> bool {
        let Some(instruction) = self.queue.pop_front() else {
            return false;
        };

        match instruction {
            MoveInstruction::StepTo(cell) => {
                self.target = cell;
                self.speed = STEP_SPEED;
                self.pause_frames = STEP_PAUSE_FRAMES;
            }
            MoveInstruction::JumpTo(cell) => {
                let distance = (f64::from(cell) - self.position).abs();
                self.speed = distance / JUMP_SPEED_DIVISOR + JUMP_BASE_SPEED;
                self.target = cell;
                self.bounds[1] = cell;
                self.pause_frames = JUMP_PAUSE_FRAMES;
            }
        }
        true
    }

    /// Advance the animation by one frame
    pub fn advance_one_frame(&mut self, grid: &Grid) {
        if self.segment_done() && !self.process_next_instruction() {
            return;
        }

        if self.pause_frames > 0 {
            self.pause_frames -= 1;
            return;
        }

        // Start the next single-cell segment of an ordinary step
        if self.bounds[0] == self.bounds[1] && self.bounds[1] != self.target {
            self.bounds[1] = step_toward(self.bounds[1], self.target);
        }

        let [from, to] = self.bounds;
        let direction = direction(from, to);
        self.position += direction * self.speed;

        let end = f64::from(to);
        let within = (self.position - end).abs() <= self.speed + SNAP_EPSILON;
        if within && (direction <= 0.0 || self.position >= end) {
            self.bounds[0] = to;
            self.position = end;
        }

        self.coordinate = grid.coordinate(self.bounds[0]).lerp(
            grid.coordinate(self.bounds[1]),
            interpolation_fraction(self.position, self.bounds),
        );
    }
}

/// Fraction of the way from `bounds[0]` to `bounds[1]`; zero for a
/// zero-length segment.
pub fn interpolation_fraction(position: f64, bounds: [u8; 2]) -> f64 {
    let [from, to] = bounds;
    if from == to {
        return 0.0;
    }
    (position - f64::from(from)) / (f64::from(to) - f64::from(from))
}

fn step_toward(from: u8, to: u8) -> u8 {
    match to.cmp(&from) {
        Ordering::Greater => from + 1,
        Ordering::Less => from - 1,
        Ordering::Equal => from,
    }
}

fn direction(from: u8, to: u8) -> f64 {
    match to.cmp(&from) {
        Ordering::Greater => 1.0,
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
    }
}
