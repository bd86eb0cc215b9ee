//! State encoding for policy models.
//!
//! The engine never inspects how a decision was made; training and serving
//! collaborators turn game state into feature vectors through the
//! [`StateEncoder`] contract here. The feature layout is owned by the
//! policy, not the engine: [`BoardEncoder`] is the standard 205-float
//! layout, [`ZeroEncoder`] a stand-in for tests.

pub mod encoder;

pub use encoder::{BoardEncoder, EncodedState, StateEncoder, ZeroEncoder};
