// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Run summary and its renderings.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;
use squish_core::{Scene, StepReport};

/// Final state of one body.
#[derive(Debug, Clone, Serialize)]
pub struct BodySummary {
    /// Index in the scene.
    pub index: usize,
    /// Final center.
    pub center: [f32; 3],
    /// Final velocity.
    pub velocity: [f32; 3],
    /// Whether the lattice has fully relaxed.
    pub at_rest: bool,
}

/// Whole-run totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Steps executed.
    pub ticks: u64,
    /// Timestep used.
    pub dt: f32,
    /// Pair checks across the run.
    pub pairs_checked: usize,
    /// Body/body impulses applied.
    pub body_collisions: usize,
    /// Boundary bounces.
    pub boundary_collisions: usize,
    /// Clustered contacts across all body impulses.
    pub contacts: usize,
    /// First tick with a body/body impulse.
    pub first_impact_tick: Option<u64>,
    /// Per-body final state.
    pub bodies: Vec<BodySummary>,
}

impl RunSummary {
    /// Starts an empty summary for a run with timestep `dt`.
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    /// Folds one step into the totals.
    pub fn record(&mut self, step: &StepReport) {
        self.ticks += 1;
        self.pairs_checked += step.pairs_checked;
        self.body_collisions += step.body_collisions;
        self.boundary_collisions += step.boundary_collisions;
        self.contacts += step.contacts;
        if step.body_collisions > 0 && self.first_impact_tick.is_none() {
            self.first_impact_tick = Some(step.tick);
        }
    }

    /// Captures the final body states.
    pub fn finish(&mut self, scene: &Scene) {
        self.bodies = scene
            .bodies()
            .iter()
            .enumerate()
            .map(|(index, body)| BodySummary {
                index,
                center: body.center().to_array(),
                velocity: body.velocity().to_array(),
                at_rest: body.is_at_rest(),
            })
            .collect();
    }

    /// Totals table followed by the per-body table.
    pub fn render_tables(&self) -> String {
        let mut totals = Table::new();
        totals
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ticks", "dt", "pairs", "body hits", "wall hits", "contacts", "first impact"]);
        totals.add_row(vec![
            Cell::new(self.ticks),
            Cell::new(format!("{:.5}", self.dt)),
            Cell::new(self.pairs_checked),
            Cell::new(self.body_collisions),
            Cell::new(self.boundary_collisions),
            Cell::new(self.contacts),
            Cell::new(self.first_impact_tick.map_or_else(|| "-".to_owned(), |t| t.to_string())),
        ]);

        let mut bodies = Table::new();
        bodies
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["body", "center", "velocity", "at rest"]);
        for b in &self.bodies {
            bodies.add_row(vec![
                Cell::new(b.index),
                Cell::new(fmt_vec(b.center)),
                Cell::new(fmt_vec(b.velocity)),
                Cell::new(if b.at_rest { "yes" } else { "no" }),
            ]);
        }
        format!("{totals}\n{bodies}")
    }
}

fn fmt_vec(v: [f32; 3]) -> String {
    format!("({:.3}, {:.3}, {:.3})", v[0], v[1], v[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_impact_is_sticky() {
        let mut summary = RunSummary::new(0.01);
        summary.record(&StepReport {
            tick: 0,
            pairs_checked: 1,
            ..StepReport::default()
        });
        summary.record(&StepReport {
            tick: 1,
            pairs_checked: 1,
            body_collisions: 1,
            contacts: 3,
            ..StepReport::default()
        });
        summary.record(&StepReport {
            tick: 2,
            pairs_checked: 1,
            body_collisions: 1,
            contacts: 2,
            ..StepReport::default()
        });
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.first_impact_tick, Some(1));
        assert_eq!(summary.contacts, 5);
        assert!(summary.render_tables().contains("first impact"));
    }
}
