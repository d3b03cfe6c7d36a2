//! Controller: owns the session, the preset index, and the save slot.
//!
//! Every state-mutating user action funnels through here and ends with
//! the persistence hook, so the saved snapshot can never lag behind what
//! is on screen.

use std::time::{SystemTime, UNIX_EPOCH};

use gridmine_core::{Coord2, Game, GameConfig};

use crate::storage::{SaveSlot, SavedSession};

pub struct App {
    game: Game,
    config_index: usize,
    slot: SaveSlot,
}

impl App {
    /// Restores the persisted session, or starts a fresh game on the
    /// first preset when there is none.
    pub fn load_or_new(slot: SaveSlot) -> Self {
        match slot.load() {
            Some(SavedSession { game, config_index }) => {
                log::info!("restored saved session (preset {config_index})");
                Self {
                    game,
                    config_index: config_index % GameConfig::PRESETS.len(),
                    slot,
                }
            }
            None => Self {
                game: new_session(0),
                config_index: 0,
                slot,
            },
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config_index(&self) -> usize {
        self.config_index
    }

    pub fn reveal(&mut self, coords: Coord2) {
        match self.game.reveal(coords) {
            Ok(outcome) if outcome.has_update() => self.persist(),
            Ok(_) => {}
            Err(err) => log::error!("reveal {coords:?} rejected: {err}"),
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) {
        match self.game.toggle_flag(coords) {
            Ok(outcome) if outcome.has_update() => self.persist(),
            Ok(_) => {}
            Err(err) => log::error!("flag {coords:?} rejected: {err}"),
        }
    }

    /// New game on the same preset; drops the persisted session.
    pub fn restart(&mut self) {
        self.slot.clear();
        self.game = new_session(self.config_index);
    }

    /// Advance to the next preset circularly and start over there.
    pub fn cycle_size(&mut self) {
        self.config_index = (self.config_index + 1) % GameConfig::PRESETS.len();
        self.slot.clear();
        self.game = new_session(self.config_index);
    }

    fn persist(&self) {
        self.slot.save(&SavedSession {
            game: self.game.clone(),
            config_index: self.config_index,
        });
    }
}

fn new_session(config_index: usize) -> Game {
    Game::new(GameConfig::PRESETS[config_index], fresh_seed())
        .expect("presets always satisfy the mine budget")
}

fn fresh_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
