use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::FINAL_CELL;

/// Score boxes are drawn as a 2x2 block, one per player.
pub const MAX_PLAYERS: usize = 4;

/// An RGB color, written as `[r, g, b]` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    pub snakes: Rgb,
    pub ladders: Rgb,
    pub move_button: Rgb,
    pub reset_button: Rgb,
    #[serde(rename = "players_display_boxes_color")]
    pub score_boxes: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgb(245, 236, 214),
            grid: Rgb(70, 70, 70),
            text: Rgb(20, 20, 20),
            snakes: Rgb(200, 40, 40),
            ladders: Rgb(40, 140, 60),
            move_button: Rgb(120, 180, 240),
            reset_button: Rgb(240, 150, 120),
            score_boxes: Rgb(100, 100, 100),
        }
    }
}

/// Placement of the per-player score boxes, in board units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBoxLayout {
    #[serde(rename = "players_display_boxes_pos")]
    pub position: [f64; 2],
    #[serde(rename = "players_display_boxes_size")]
    pub size: [f64; 2],
}

impl Default for ScoreBoxLayout {
    fn default() -> Self {
        ScoreBoxLayout {
            position: [10.0, 630.0],
            size: [160.0, 60.0],
        }
    }
}

/// Game configuration, loadable from JSON (with `//` comments) or TOML.
///
/// `players`, `snakes`, `ladders` and `ratelimit` must be present; colors,
/// layout and `frame_rate` fall back to defaults. Positions are in an
/// 800x800 board space with y growing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub players: Vec<PlayerConfig>,
    /// `[origin, destination]` pairs
    pub snakes: Vec<[u8; 2]>,
    pub ladders: Vec<[u8; 2]>,
    #[serde(default)]
    pub colors: Palette,
    /// Top-left corner of the roll button
    #[serde(rename = "box_move", default = "default_move_button")]
    pub move_button: [f64; 2],
    #[serde(rename = "box_reset", default = "default_reset_button")]
    pub reset_button: [f64; 2],
    #[serde(rename = "move_text_pos", default = "default_status_text")]
    pub status_text: [f64; 2],
    #[serde(rename = "others", default)]
    pub score_boxes: ScoreBoxLayout,
    /// Frames to wait after a roll before accepting another
    pub ratelimit: u32,
    /// Frames per second, read when the game loop starts and on each reset
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

fn default_move_button() -> [f64; 2] {
    [660.0, 260.0]
}

fn default_reset_button() -> [f64; 2] {
    [680.0, 30.0]
}

fn default_status_text() -> [f64; 2] {
    [360.0, 650.0]
}

fn default_frame_rate() -> u32 {
    30
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            players: vec![
                player("Red", Rgb(220, 50, 50)),
                player("Blue", Rgb(50, 90, 220)),
                player("Green", Rgb(40, 160, 70)),
                player("Yellow", Rgb(230, 190, 30)),
            ],
            snakes: vec![
                [17, 7],
                [54, 34],
                [62, 19],
                [64, 60],
                [87, 24],
                [93, 73],
                [95, 75],
                [99, 78],
            ],
            ladders: vec![
                [4, 14],
                [9, 31],
                [20, 38],
                [28, 84],
                [40, 59],
                [51, 67],
                [63, 81],
                [71, 91],
            ],
            colors: Palette::default(),
            move_button: default_move_button(),
            reset_button: default_reset_button(),
            status_text: default_status_text(),
            score_boxes: ScoreBoxLayout::default(),
            ratelimit: 10,
            frame_rate: default_frame_rate(),
        }
    }
}

fn player(name: &str, color: Rgb) -> PlayerConfig {
    PlayerConfig {
        name: name.to_string(),
        color,
    }
}

impl GameConfig {
    /// Load configuration from a file. `.toml` files are parsed as TOML,
    /// anything else as JSON with `//` line comments allowed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse commented JSON without validating
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(&strip_line_comments(content))?)
    }

    /// Parse TOML without validating
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::Validation(
                "at least one player is required".into(),
            ));
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(ConfigError::Validation(format!(
                "at most {} players are supported, got {}",
                MAX_PLAYERS,
                self.players.len()
            )));
        }
        if self.players.iter().any(|p| p.name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Validation("frame_rate must be > 0".into()));
        }
        if self.score_boxes.size.iter().any(|&s| s <= 0.0) {
            return Err(ConfigError::Validation(
                "players_display_boxes_size must be positive".into(),
            ));
        }

        let snakes = self.snakes.iter().map(|edge| ("snake", edge));
        let ladders = self.ladders.iter().map(|edge| ("ladder", edge));
        let mut origins = HashSet::new();
        for (kind, &[origin, destination]) in snakes.chain(ladders) {
            for cell in [origin, destination] {
                if !(1..=FINAL_CELL).contains(&cell) {
                    return Err(ConfigError::Validation(format!(
                        "{} {} -> {}: cell {} is off the board",
                        kind, origin, destination, cell
                    )));
                }
            }
            if origin == destination {
                return Err(ConfigError::Validation(format!(
                    "{} {} -> {} goes nowhere",
                    kind, origin, destination
                )));
            }
            if origin == FINAL_CELL {
                return Err(ConfigError::Validation(format!(
                    "{} cannot start on the final cell",
                    kind
                )));
            }
            if !origins.insert(origin) {
                return Err(ConfigError::Validation(format!(
                    "cell {} starts more than one snake or ladder",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Render the defaults as JSON (useful for creating a config file).
    pub fn default_json() -> String {
        serde_json::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

/// Drop everything from `//` to the end of each line, except inside strings
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| comment_start(line).map_or(line, |i| &line[..i]))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset of the first `//` outside a JSON string
fn comment_start(line: &str) -> Option<usize> {
    let mut in_string = false;
    let mut escaped = false;
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if c == '/' && chars.peek().is_some_and(|&(_, next)| next == '/') {
            return Some(i);
        }
    }
    None
}
