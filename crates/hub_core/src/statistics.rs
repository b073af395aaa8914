use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::HubMap;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub hubs_settled: usize,
    /// Number of relaxations that improved a hub's distance
    pub relaxations: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.hubs_settled = 0;
        self.relaxations = 0;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} hubs settled, {} relaxations in {:?}",
            self.hubs_settled, self.relaxations, self.duration
        )
    }
}

pub fn average_degree(g: &HubMap) -> f64 {
    if g.num_hubs() == 0 {
        return 0.0;
    }
    let sum: usize = g.hub_indices().map(|hub| g.neighbors(hub).count()).sum();
    sum as f64 / g.num_hubs() as f64
}

/// Hubs without any link
pub fn isolated_hubs(g: &HubMap) -> usize {
    g.hub_indices()
        .filter(|hub| g.neighbors(*hub).next().is_none())
        .count()
}
