use serde::Serialize;

use crate::generators::WalkPath;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WalkMetrics {
    pub endpoint: f64,
    /// Magnitude of the deepest fall from a running peak; never negative.
    pub max_drawdown: f64,
    /// Population standard deviation of the step-to-step differences.
    pub step_volatility: f64,
}

pub fn compute_metrics(path: &WalkPath) -> WalkMetrics {
    WalkMetrics {
        endpoint: path.last().unwrap_or(0.0),
        max_drawdown: max_drawdown(path),
        step_volatility: step_volatility(path),
    }
}

pub fn running_max(path: &WalkPath) -> Vec<f64> {
    path.positions()
        .iter()
        .scan(f64::NEG_INFINITY, |peak, &position| {
            *peak = peak.max(position);
            Some(*peak)
        })
        .collect()
}

fn max_drawdown(path: &WalkPath) -> f64 {
    running_max(path)
        .into_iter()
        .zip(path.positions())
        .map(|(peak, &position)| peak - position)
        .fold(0.0, f64::max)
}

fn step_volatility(path: &WalkPath) -> f64 {
    let positions = path.positions();
    if positions.len() < 2 {
        return 0.0;
    }

    let diffs: Vec<f64> = positions
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect();
    let count = diffs.len() as f64;
    let mean = diffs.iter().sum::<f64>() / count;
    let variance = diffs
        .iter()
        .map(|diff| (diff - mean).powi(2))
        .sum::<f64>()
        / count;

    variance.sqrt()
}
