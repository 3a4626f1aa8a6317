use std::fmt;

use log::debug;

use crate::catalog::{Catalog, HardwareProfile};
use crate::error::{Error, Result};

/// Benchmark hash for attacker throughput. MD5 works as the floor: FPGA
/// rigs close most of the gap that slow hashes open up on GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
}

impl Algorithm {
    /// Key under which catalog profiles store this benchmark.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cheapest grid electricity worldwide, USD per kWh.
pub const DEFAULT_KWH_COST_USD: f64 = 0.05;

const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Best guesses per dollar of rented compute across the catalog. Hourly
/// rates are normalized to per-second cost before dividing.
pub fn hashes_per_dollar(catalog: &Catalog, algorithm: Algorithm) -> Result<f64> {
    best(catalog, algorithm, |profile, hashes_per_second| {
        hashes_per_second / (profile.hourly_cost_usd / SECONDS_PER_HOUR)
    })
}

/// Best guesses per dollar of electricity alone: the attacker owns or
/// rents bare hardware and pays only for power.
pub fn hashes_per_watt_dollar(
    catalog: &Catalog,
    algorithm: Algorithm,
    kwh_cost_usd: f64,
) -> Result<f64> {
    let watt_second_cost = kwh_cost_usd / (WATTS_PER_KILOWATT * SECONDS_PER_HOUR);
    best(catalog, algorithm, |profile, hashes_per_second| {
        (hashes_per_second / profile.watts) / watt_second_cost
    })
}

/// A rational attacker picks the most cost-efficient rig available, so the
/// defender sizes against the catalog maximum, never an average.
fn best<F>(catalog: &Catalog, algorithm: Algorithm, score: F) -> Result<f64>
where
    F: Fn(&HardwareProfile, f64) -> f64,
{
    let mut winner: Option<(&str, f64)> = None;

    for profile in catalog.profiles() {
        let Some(hashes_per_second) = profile.hashes_per_second.get(algorithm.as_str()) else {
            continue;
        };
        let value = score(profile, *hashes_per_second);
        if winner.map_or(true, |(_, current)| value > current) {
            winner = Some((profile.name.as_str(), value));
        }
    }

    match winner {
        Some((name, value)) => {
            debug!("best {algorithm} option: {name} at {value:.3e}");
            Ok(value)
        }
        None => Err(Error::UnknownAlgorithm(algorithm)),
    }
}
