//! Signal phases and the controller's action vocabulary.

use std::fmt;

use crate::Direction;

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Which opposing pair of directions currently has right of way.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// North and South approaches are green.
    NS,
    /// East and West approaches are green.
    EW,
}

impl Phase {
    /// The two directions served while this phase is green, in canonical
    /// order.  This order doubles as the equal-length tie-break when the
    /// intersection picks which lane to serve next.
    #[inline]
    pub const fn active(self) -> [Direction; 2] {
        match self {
            Phase::NS => [Direction::North, Direction::South],
            Phase::EW => [Direction::East, Direction::West],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::NS => "NS",
            Phase::EW => "EW",
        })
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// One controller action: hold `phase` green for `green_secs`.
///
/// The action set is an ordered, caller-supplied list fixed for a run;
/// controllers refer to actions by index into that list.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub phase: Phase,
    /// Green duration in seconds.  Positive.
    pub green_secs: f64,
}

impl Action {
    pub const fn new(phase: Phase, green_secs: f64) -> Self {
        Action { phase, green_secs }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}s", self.phase, self.green_secs)
    }
}
