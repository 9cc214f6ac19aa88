//! A single FIFO approach lane.

use std::collections::VecDeque;

use crate::Vehicle;

/// FIFO queue of vehicles for one approach direction.
///
/// Vehicles leave in exactly the order they arrived; nothing reorders or
/// skips within a lane.
#[derive(Clone, Debug, Default)]
pub struct Lane {
    queue: VecDeque<Vehicle>,
}

impl Lane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle at the tail.  Unconditional.
    pub fn push(&mut self, vehicle: Vehicle) {
        self.queue.push_back(vehicle);
    }

    /// Serve the head vehicle: stamp its departure at `now_secs` and hand it
    /// to the caller.  `None` means the lane is empty — a normal signal for
    /// the service loop, not an error.
    pub fn serve_one(&mut self, now_secs: f64) -> Option<Vehicle> {
        let mut vehicle = self.queue.pop_front()?;
        vehicle.depart_secs = Some(now_secs);
        Some(vehicle)
    }

    /// Number of queued vehicles.  O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
