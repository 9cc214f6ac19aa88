//! Congestion sensing: queue snapshots discretized into a small, enumerable
//! observation.

use std::fmt;

use gw_core::Direction;
use gw_traffic::Intersection;

/// Queue-pressure difference (N+S vs E+W) beyond which the observation
/// reports an imbalance.
const IMBALANCE_THRESHOLD: i64 = 3;

// ── TrafficState ──────────────────────────────────────────────────────────────

/// The discretized observation fed to a controller: bin indices for the
/// combined N+S and E+W queue lengths, plus an imbalance flag.
///
/// Small, `Copy`, and `Hash` — it is the row key of the Q-table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TrafficState {
    pub ns_bin: u8,
    pub ew_bin: u8,
    /// `+1` when N+S is backed up past the threshold, `-1` when E+W is,
    /// `0` otherwise.
    pub imbalance: i8,
}

impl fmt::Display for TrafficState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ns={} ew={} bias={:+})", self.ns_bin, self.ew_bin, self.imbalance)
    }
}

// ── Sensor ────────────────────────────────────────────────────────────────────

/// Reads an [`Intersection`]'s queue snapshot and discretizes it into a
/// [`TrafficState`].
///
/// Pure: no state beyond the fixed bin edges, no side effects.
#[derive(Clone, Debug)]
pub struct Sensor {
    /// Ascending bin edges for the combined queue lengths.
    bins: Vec<u32>,
}

impl Default for Sensor {
    /// Edges `(0, 3, 6, 10, 20)` — sized for the queue lengths a single
    /// intersection plausibly builds up.
    fn default() -> Self {
        Sensor { bins: vec![0, 3, 6, 10, 20] }
    }
}

impl Sensor {
    /// Custom bin edges.  Must be ascending.
    pub fn new(bins: Vec<u32>) -> Self {
        Sensor { bins }
    }

    /// Index of the first edge ≥ `value`; `bins.len()` (one past the last
    /// bin) when `value` exceeds every edge — the explicit overflow bucket.
    pub fn discretize(&self, value: usize) -> usize {
        self.bins
            .iter()
            .position(|&edge| value <= edge as usize)
            .unwrap_or(self.bins.len())
    }

    /// Discretize the intersection's current queues.
    pub fn read(&self, intersection: &Intersection) -> TrafficState {
        let q = intersection.queue_lengths();
        let ns = q[Direction::North] + q[Direction::South];
        let ew = q[Direction::East] + q[Direction::West];

        let imbalance = if ns as i64 - ew as i64 > IMBALANCE_THRESHOLD {
            1
        } else if ew as i64 - ns as i64 > IMBALANCE_THRESHOLD {
            -1
        } else {
            0
        };

        TrafficState {
            ns_bin: self.discretize(ns) as u8,
            ew_bin: self.discretize(ew) as u8,
            imbalance,
        }
    }
}
