//! Feature encoders.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BOARD_SIZE};
use crate::player::Player;

/// Encoded game state as a flat tensor for model input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Encodes game state from one player's perspective.
///
/// Implementations own their feature layout; the engine only promises the
/// read-only inputs (players and board).
pub trait StateEncoder: Send + Sync {
    /// Encode the game from `perspective`'s point of view.
    fn encode(&self, perspective: &Player, players: &[Player], board: &Board) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Number of actions the policy chooses between.
    fn action_space_size(&self) -> usize;
}

/// Number of features per board space in [`BoardEncoder`].
const SPACE_FEATURES: usize = 5;

/// The standard flat encoding: 205 features.
///
/// Layout:
/// - 2 player floats: cash (normalized, capped at 1.0) and position / 40;
/// - 5 floats per space: is-mine, is-opponent, is-unowned, houses / 5,
///   mortgaged (all zeros for non-ownable spaces);
/// - 3 context floats: in-jail, player count / 6, any-bankrupt.
///
/// The action space is pass / buy / trade-intent.
#[derive(Clone, Debug)]
pub struct BoardEncoder {
    max_cash: f32,
    action_space: usize,
}

impl Default for BoardEncoder {
    fn default() -> Self {
        Self {
            max_cash: 3000.0,
            action_space: 3,
        }
    }
}

impl BoardEncoder {
    /// Create the standard encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cash normalization ceiling.
    #[must_use]
    pub fn with_max_cash(mut self, max_cash: f32) -> Self {
        self.max_cash = max_cash;
        self
    }

    /// Total feature count.
    #[must_use]
    pub fn feature_len(&self) -> usize {
        2 + BOARD_SIZE * SPACE_FEATURES + 3
    }
}

impl StateEncoder for BoardEncoder {
    fn encode(&self, perspective: &Player, players: &[Player], board: &Board) -> EncodedState {
        let mut tensor = Vec::with_capacity(self.feature_len());

        tensor.push((perspective.cash as f32 / self.max_cash).min(1.0));
        tensor.push(perspective.position as f32 / BOARD_SIZE as f32);

        for space in board.spaces() {
            if space.is_ownable() {
                let owner = space.owner();
                let is_mine = owner == Some(perspective.id);
                let is_opponent = owner.is_some() && !is_mine;

                tensor.push(if is_mine { 1.0 } else { 0.0 });
                tensor.push(if is_opponent { 1.0 } else { 0.0 });
                tensor.push(if owner.is_none() { 1.0 } else { 0.0 });
                tensor.push(f32::from(space.houses()) / 5.0);
                tensor.push(if space.is_mortgaged() { 1.0 } else { 0.0 });
            } else {
                tensor.extend_from_slice(&[0.0; SPACE_FEATURES]);
            }
        }

        tensor.push(if perspective.in_jail { 1.0 } else { 0.0 });
        tensor.push(players.len() as f32 / 6.0);
        tensor.push(if players.iter().any(|p| p.is_bankrupt) {
            1.0
        } else {
            0.0
        });

        let len = tensor.len();
        EncodedState::new(tensor, vec![len])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.feature_len()]
    }

    fn action_space_size(&self) -> usize {
        self.action_space
    }
}

/// Encoder that produces a fixed-size zero tensor (for testing).
#[derive(Clone, Debug)]
pub struct ZeroEncoder {
    shape: Vec<usize>,
    action_space: usize,
}

impl ZeroEncoder {
    /// Create a new zero encoder.
    pub fn new(shape: Vec<usize>, action_space: usize) -> Self {
        Self {
            shape,
            action_space,
        }
    }
}

impl StateEncoder for ZeroEncoder {
    fn encode(&self, _perspective: &Player, _players: &[Player], _board: &Board) -> EncodedState {
        EncodedState::zeros(self.shape.clone())
    }

    fn output_shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn action_space_size(&self) -> usize {
        self.action_space
    }
}
