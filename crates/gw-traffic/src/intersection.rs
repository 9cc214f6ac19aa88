//! The four-way intersection and its green-phase service model.

use gw_core::{Direction, PerDirection, Phase};

use crate::{Lane, Vehicle};

/// A four-way intersection: one [`Lane`] per compass direction plus the
/// service rate (vehicles cleared per green second).
#[derive(Clone, Debug)]
pub struct Intersection {
    lanes: PerDirection<Lane>,
    /// Vehicles served per second while a phase is green.
    pub service_rate: f64,
}

impl Intersection {
    /// Create an intersection with four empty lanes.
    pub fn new(service_rate: f64) -> Self {
        Intersection {
            lanes: PerDirection::default(),
            service_rate,
        }
    }

    /// Append `vehicle` to the lane approaching from `direction`.
    pub fn add_vehicle(&mut self, direction: Direction, vehicle: Vehicle) {
        self.lanes[direction].push(vehicle);
    }

    /// Snapshot of all four queue lengths.  Pure read, no side effects.
    pub fn queue_lengths(&self) -> PerDirection<usize> {
        PerDirection::from_fn(|d| self.lanes[d].len())
    }

    /// Run one green phase and return the vehicles that cleared, in service
    /// order.
    ///
    /// Capacity is `floor(service_rate * green_secs)` — one budget for the
    /// entire phase, not per micro-step.  Each round serves one vehicle from
    /// whichever active lane is currently longest, so service adapts to the
    /// queue shape within the phase; on equal lengths the first direction in
    /// canonical order wins.  Departure times are stamped with `end_secs`,
    /// the time the whole phase concludes.
    ///
    /// Stops early once the chosen lane is empty (the longest lane empty
    /// means both active lanes are drained); leftover capacity is forfeited.
    pub fn serve(&mut self, phase: Phase, green_secs: f64, end_secs: f64) -> Vec<Vehicle> {
        let active = phase.active();
        let capacity = (self.service_rate * green_secs).floor() as usize;

        let mut served = Vec::new();
        for _ in 0..capacity {
            // Strict `>` keeps the earlier direction on ties.
            let mut best = active[0];
            for &dir in &active[1..] {
                if self.lanes[dir].len() > self.lanes[best].len() {
                    best = dir;
                }
            }
            match self.lanes[best].serve_one(end_secs) {
                Some(vehicle) => served.push(vehicle),
                None => break,
            }
        }
        served
    }
}
