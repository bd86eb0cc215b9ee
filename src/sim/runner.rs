//! The batch game runner.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::engine::{Engine, TurnReport};

/// Configuration for a simulation batch.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of games to run.
    pub games: usize,

    /// Seed offset; game `i` runs with seed `seed_offset + i`.
    pub seed_offset: u64,

    /// Hard cap on `run_turn` calls per game, over and above the engine's
    /// own turn cap (jail and skip turns do not count toward that cap).
    pub max_steps: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
            max_steps: 20_000,
        }
    }
}

impl SimulationConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Set the per-game step cap.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

/// Everything observable from one completed game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed the game ran under.
    pub seed: u64,

    /// Every turn report, in order.
    pub turns: Vec<TurnReport>,

    /// Player with the highest net worth at the end.
    pub winner: PlayerId,

    /// Final precise net worth per seat.
    pub final_net_worths: Vec<i64>,
}

impl GameRecord {
    /// Serialize to compact bytes.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Deserialize from bytes produced by [`GameRecord::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

/// Runs seeded game batches.
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run one engine to completion and record the game.
    pub fn play_game(&self, engine: &mut Engine, seed: u64) -> GameRecord {
        let mut turns = Vec::new();

        for _ in 0..self.config.max_steps {
            if engine.is_game_over() {
                break;
            }
            turns.push(engine.run_turn());
        }

        let winner = engine.winner();
        let final_net_worths = engine
            .players()
            .iter()
            .map(|p| p.net_worth(engine.board()))
            .collect();

        tracing::debug!(
            seed,
            turns = turns.len(),
            winner = winner.index(),
            "game finished"
        );

        GameRecord {
            seed,
            turns,
            winner,
            final_net_worths,
        }
    }

    /// Tally wins per seat across a batch.
    #[must_use]
    pub fn win_counts(records: &[GameRecord], num_players: usize) -> PlayerMap<u32> {
        let mut counts = PlayerMap::with_value(num_players, 0);
        for record in records {
            counts[record.winner] += 1;
        }
        counts
    }

    /// Run the configured batch, building one engine per game from its
    /// seed.
    pub fn run_games(&self, build: impl Fn(u64) -> Engine) -> Vec<GameRecord> {
        let records: Vec<GameRecord> = (0..self.config.games)
            .map(|i| {
                let seed = self.config.seed_offset.wrapping_add(i as u64);
                let mut engine = build(seed);
                self.play_game(&mut engine, seed)
            })
            .collect();

        tracing::info!(games = records.len(), "simulation batch complete");
        records
    }
}
