use serde::Serialize;

use crate::domain::machine::{MachineRiskRecord, RiskLevel};
use crate::domain::weights::WeightVector;

/// Machine counts per risk bucket.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetKpis {
    pub total: usize,
    pub healthy: usize,
    pub warning: usize,
    pub high_risk: usize,
}

impl FleetKpis {
    pub fn from_records(records: &[MachineRiskRecord]) -> Self {
        let mut kpis = FleetKpis {
            total: records.len(),
            ..FleetKpis::default()
        };
        for record in records {
            match record.risk_level {
                RiskLevel::Healthy => kpis.healthy += 1,
                RiskLevel::Warning => kpis.warning += 1,
                RiskLevel::HighRisk => kpis.high_risk += 1,
            }
        }
        kpis
    }
}

const BASE_THROUGHPUT: f64 = 0.4;
const BASE_RISK: f64 = 0.3;
const BASE_COST: f64 = 0.3;

/// Heuristic redistribution of the fleet across buckets for a new weight vector.
///
/// This is a linear what-if model for immediate feedback on slider changes; it
/// does not recompute any health score. The result always sums to `total`
/// with every bucket inside `[0, total]`.
pub fn project_fleet(baseline: &FleetKpis, weights: &WeightVector) -> FleetKpis {
    if baseline.total == 0 {
        return *baseline;
    }

    let total = baseline.total as f64;
    let throughput_impact = (weights.throughput - BASE_THROUGHPUT) * (total * 0.35);
    let risk_impact = (weights.risk - BASE_RISK) * (total * 0.45);
    let cost_impact = (weights.cost - BASE_COST) * (total * 0.30);

    let healthy = baseline.healthy as f64 + risk_impact - throughput_impact - cost_impact;
    let high_risk =
        baseline.high_risk as f64 - risk_impact + throughput_impact + cost_impact * 0.3;

    let healthy = healthy.clamp(0.0, total);
    let high_risk = high_risk.clamp(0.0, total - healthy);

    let healthy = (healthy.round() as usize).min(baseline.total);
    let high_risk = (high_risk.round() as usize).min(baseline.total - healthy);
    // Warning is settled last and absorbs the rounding residual of the other two.
    let warning = baseline.total - healthy - high_risk;

    FleetKpis {
        total: baseline.total,
        healthy,
        warning,
        high_risk,
    }
}
