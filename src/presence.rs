//! Presence roster: simulated remote collaborators.
//!
//! Remote positions are pure decoration. The host nudges them with [`Roster::jitter`]
//! on pointer motion; the roster never touches the action log, and the RNG is
//! injected so the drawing core itself stays deterministic under test.

use crate::draw::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum per-axis displacement applied by one jitter step.
const JITTER_RANGE: f64 = 5.0;

/// A user shown on the board: the local user or a simulated remote one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier (e.g. `"user-2"`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar/cursor color as a hex string
    pub color: String,
    /// Current cursor position on the board
    pub position: Point,
}

impl Participant {
    /// Creates a participant at a starting position.
    pub fn new(id: &str, name: &str, color: &str, position: Point) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            position,
        }
    }
}

/// The local user plus the simulated remote collaborators.
#[derive(Debug, Clone)]
pub struct Roster {
    /// The user at this keyboard
    pub local: Participant,
    /// Simulated remote users, jittered on pointer motion
    pub remotes: Vec<Participant>,
}

impl Roster {
    /// The stock roster: "You" plus the two mock collaborators.
    pub fn mock() -> Self {
        Self {
            local: Participant::new("user-1", "You", "#6366F1", Point::new(0.0, 0.0)),
            remotes: vec![
                Participant::new("user-2", "Alice", "#34D399", Point::new(200.0, 200.0)),
                Participant::new("user-3", "Bob", "#F87171", Point::new(400.0, 400.0)),
            ],
        }
    }

    /// Nudges every remote position by up to ±2.5 pixels per axis.
    ///
    /// Called by the host on pointer motion; the local user never moves here.
    pub fn jitter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for user in &mut self.remotes {
            user.position.x += (rng.random::<f64>() - 0.5) * JITTER_RANGE;
            user.position.y += (rng.random::<f64>() - 0.5) * JITTER_RANGE;
        }
    }

    /// All participants, local user first. For avatar display.
    pub fn all(&self) -> impl Iterator<Item = &Participant> {
        std::iter::once(&self.local).chain(self.remotes.iter())
    }
}
