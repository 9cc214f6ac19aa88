//! The vehicle arrival record.

/// One vehicle: created when it joins a lane, stamped once when served.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Vehicle {
    /// Simulation time at which the vehicle joined its queue.
    pub arrival_secs: f64,
    /// Simulation time at which the vehicle cleared the intersection.
    /// `None` while still queued; set exactly once, by [`Lane::serve_one`][crate::Lane::serve_one].
    pub depart_secs: Option<f64>,
}

impl Vehicle {
    pub fn new(arrival_secs: f64) -> Self {
        Vehicle { arrival_secs, depart_secs: None }
    }

    /// Time spent queued, once departed.
    #[inline]
    pub fn wait_secs(&self) -> Option<f64> {
        self.depart_secs.map(|d| d - self.arrival_secs)
    }
}
