//! Game rules for peg solitaire
//!
//! This module implements:
//! - Jump geometry and legality
//! - The two-click selection state machine that turns clicks into moves

pub mod jump;
pub mod selection;

// Re-exports for convenient access
pub use jump::{cell_between, execute_jump, is_reachable, reachable_targets};
pub use selection::{ClickOutcome, Phase, SelectionController};
