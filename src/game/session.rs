use tracing::{debug, info};

use crate::config::GameConfig;

use super::board::{Grid, CELL_SIZE};
use super::player::Player;
use super::redirect::RedirectTable;
use super::turn::TurnState;

/// What a roll request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// The player moved from `from` to `landed`, then possibly followed a
    /// snake or ladder to `settled`
    Moved {
        player: usize,
        from: u8,
        landed: u8,
        settled: u8,
        won: bool,
    },
    /// The roll would pass the final cell; the turn is used up
    Overshoot { player: usize },
    /// Every player has finished
    GameOver,
    /// Still inside the roll rate limit; nothing happened
    CoolingDown,
}

/// All state of one game, rebuilt wholesale on reset.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    redirects: RedirectTable,
    players: Vec<Player>,
    turn: TurnState,
    rate_limit: u32,
    cooldown: u32,
    last_roll: Option<u8>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let grid = Grid::new(CELL_SIZE);
        let redirects = RedirectTable::new(&config.snakes, &config.ladders);
        let players = config
            .players
            .iter()
            .map(|p| Player::new(p.name.clone(), p.color, &grid))
            .collect::<Vec<_>>();

        info!(
            players = players.len(),
            redirects = redirects.edges().len(),
            "Starting new game"
        );

        GameSession {
            grid,
            redirects,
            players,
            turn: TurnState::new(),
            rate_limit: config.ratelimit,
            cooldown: 0,
            last_roll: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn redirects(&self) -> &RedirectTable {
        &self.redirects
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Player who took the most recent turn
    pub fn current_player(&self) -> Option<&Player> {
        self.turn.current().and_then(|i| self.players.get(i))
    }

    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// Frames left before another roll is accepted
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Every piece has finished animating
    pub fn is_settled(&self) -> bool {
        self.players.iter().all(|p| p.motion().is_settled())
    }

    /// Rate-limited roll from the input layer
    pub fn request_roll(&mut self, amount: u8) -> RollOutcome {
        if self.cooldown > 0 {
            debug!(cooldown = self.cooldown, "Roll ignored while cooling down");
            return RollOutcome::CoolingDown;
        }
        self.cooldown = self.rate_limit;
        self.last_roll = Some(amount);
        self.resolve_roll(amount)
    }

    /// Give the roll to the next unfinished player and apply it, including
    /// at most one snake or ladder.
    pub fn resolve_roll(&mut self, amount: u8) -> RollOutcome {
        let Some(index) = self.turn.advance(&self.players) else {
            info!("All players have finished");
            return RollOutcome::GameOver;
        };

        let player = &mut self.players[index];
        let from = player.settled_position();
        if !player.advance(amount) {
            debug!(player = player.name(), from, amount, "Roll overshoots the final cell");
            return RollOutcome::Overshoot { player: index };
        }

        let landed = player.settled_position();
        if let Some(destination) = self.redirects.apply_if_present(player) {
            debug!(player = player.name(), landed, destination, "Redirected");
        }
        let settled = player.settled_position();
        let won = player.has_won();
        debug!(player = player.name(), from, amount, settled, "Moved");

        if won {
            info!(player = player.name(), "Player reached the final cell");
            if self.players.iter().all(Player::has_won) {
                info!("Game over");
                self.turn.finish();
            }
        }

        RollOutcome::Moved {
            player: index,
            from,
            landed,
            settled,
            won,
        }
    }

    /// One frame: count down the roll limit and advance every animation
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
        for player in &mut self.players {
            player.advance_one_frame(&self.grid);
        }
    }
}
