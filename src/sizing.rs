use log::debug;

use crate::catalog::Catalog;
use crate::cost::{self, Algorithm};
use crate::error::{Error, Result};
use crate::generator::CharsetPolicy;

pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0;

/// GPU energy efficiency doubles roughly every 3.5 years, so the search
/// space must grow by this factor to hold for the full lifetime.
pub fn efficiency_growth(lifetime_years: u32) -> f64 {
    2f64.powf(lifetime_years as f64 / 3.5)
}

/// Hardware and electricity prices fall about 19% a year, which hands a
/// future attacker more guesses for the same budget.
pub fn cost_decline(lifetime_years: u32) -> f64 {
    0.81f64.powi(lifetime_years as i32)
}

/// Which resource bounds an offline attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Rented compute; the bill covers hardware amortization and power both.
    Cost,
    /// Electricity alone; the attacker already holds the hardware.
    Power,
}

/// Targets that gate guesses behind an HSM or TPM lockout schedule instead
/// of letting the hash leak offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Fido,
    Ios,
    IosWithErase,
    Hello,
    Facebook,
}

impl Service {
    /// Sustained attempts per second left to an attacker who games the
    /// lockout schedule as hard as the platform allows.
    pub fn rate(self, lifetime_years: u32) -> f64 {
        match self {
            // Six PIN retries, then the token waits for the owner's next unlock.
            Service::Fido => 6.0 / (60.0 * 60.0 * 24.0),
            // Nine attempts across the escalating 1/5/15/60 minute delays.
            Service::Ios => 9.0 / (81.0 * 60.0),
            // Ten attempts in total before the device erases itself.
            Service::IosWithErase => 10.0 / (lifetime_years as f64 * SECONDS_PER_YEAR),
            // 32 TPM tries per reboot on a ~4.9 s boot.
            Service::Hello => 32.0 / (32.0 + 4.9),
            // Server-side lockout; about one sustained guess a second.
            Service::Facebook => 1.0,
        }
    }

    /// Output policy the target dictates, where it does.
    pub fn charset_override(self) -> Option<CharsetPolicy> {
        match self {
            Service::IosWithErase => Some(CharsetPolicy::Digits),
            _ => None,
        }
    }
}

/// Everything assumed about the attacker, fixed once per invocation.
#[derive(Debug, Clone)]
pub struct AttackScenario {
    pub budget_usd: f64,
    pub acceptance: f64,
    pub lifetime_years: u32,
    pub resource: Resource,
    pub algorithm: Algorithm,
    /// Attempts per second for online targets; `None` means offline cracking.
    pub rate_limit: Option<f64>,
    pub kwh_cost_usd: f64,
}

impl AttackScenario {
    /// Rejects impossible configurations before any sizing arithmetic runs.
    pub fn validate(&self) -> Result<()> {
        if !(self.acceptance > 0.0 && self.acceptance <= 1.0) {
            return Err(Error::InvalidProbability(self.acceptance));
        }
        if self.rate_limit.is_some() && self.lifetime_years == 0 {
            return Err(Error::MissingLifetime);
        }
        Ok(())
    }
}

/// Search-space size that keeps the attacker's success odds at or below the
/// accepted probability.
///
/// Rate-limited targets get the total attempts the lockout schedule allows
/// over the secret's lifetime; offline targets get the guesses the budget
/// buys, projected forward for hardware efficiency and price decline.
pub fn required_combinations(scenario: &AttackScenario, catalog: &Catalog) -> Result<f64> {
    scenario.validate()?;

    let combinations = match scenario.rate_limit {
        Some(rate) => {
            let attempts = rate * scenario.lifetime_years as f64 * SECONDS_PER_YEAR;
            attempts / scenario.acceptance
        }
        None => {
            let per_dollar = match scenario.resource {
                Resource::Cost => cost::hashes_per_dollar(catalog, scenario.algorithm)?,
                Resource::Power => cost::hashes_per_watt_dollar(
                    catalog,
                    scenario.algorithm,
                    scenario.kwh_cost_usd,
                )?,
            };
            (scenario.budget_usd / scenario.acceptance)
                * per_dollar
                * efficiency_growth(scenario.lifetime_years)
                / cost_decline(scenario.lifetime_years)
        }
    };

    let combinations = combinations.max(1.0);
    debug!("required combinations: {combinations:.3e}");
    Ok(combinations)
}

/// Entropy in whole bits for the larger of the computed requirement and the
/// space a minimum length already implies.
pub fn required_bits(combinations: f64, minimum_length_combinations: f64) -> u32 {
    combinations.max(minimum_length_combinations).log2().ceil() as u32
}

/// Derived once per invocation, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct SizingResult {
    pub combinations: f64,
    pub bits: u32,
}

impl SizingResult {
    pub fn compute(
        scenario: &AttackScenario,
        catalog: &Catalog,
        policy: CharsetPolicy,
        minimum_length: usize,
    ) -> Result<Self> {
        let combinations = required_combinations(scenario, catalog)?;
        let floor = policy.minimum_length_combinations(minimum_length);
        Ok(Self {
            combinations,
            bits: required_bits(combinations, floor),
        })
    }
}
