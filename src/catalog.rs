use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{Error, Result};

const CATALOG_DATA: &str = include_str!("../assets/hardware.json");

#[cfg(test)]
const EXPECTED_SHA256: &str = "931ce5bd0bfc8f3ed19a4b84a73f8880c7b077772a567a0e64b6984e8366bde5";

/// One benchmarked rig: what it draws, what it rents for, and how fast it
/// guesses under each benchmarked hash.
#[derive(Debug, Clone, Deserialize)]
pub struct HardwareProfile {
    pub name: String,
    pub watts: f64,
    pub hourly_cost_usd: f64,
    pub hashes_per_second: HashMap<String, f64>,
}

/// Append-only reference data. Validated once at construction and never
/// mutated, so the cost model can divide by wattage and cost freely.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<HardwareProfile>,
}

impl Catalog {
    pub fn new(profiles: Vec<HardwareProfile>) -> Result<Self> {
        if profiles.is_empty() {
            return Err(Error::InvalidCatalog("no hardware profiles".into()));
        }

        let mut names = HashSet::new();
        for profile in &profiles {
            if !names.insert(profile.name.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate profile \"{}\"",
                    profile.name
                )));
            }
            if !positive(profile.watts) {
                return Err(Error::InvalidCatalog(format!(
                    "profile \"{}\" has non-positive wattage",
                    profile.name
                )));
            }
            if !positive(profile.hourly_cost_usd) {
                return Err(Error::InvalidCatalog(format!(
                    "profile \"{}\" has non-positive hourly cost",
                    profile.name
                )));
            }
            for (algorithm, hashes_per_second) in &profile.hashes_per_second {
                if !positive(*hashes_per_second) {
                    return Err(Error::InvalidCatalog(format!(
                        "profile \"{}\" has non-positive {} throughput",
                        profile.name, algorithm
                    )));
                }
            }
        }

        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[HardwareProfile] {
        &self.profiles
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Cloud GPU price and hashcat benchmark figures embedded at build time.
pub fn builtin_catalog() -> &'static Catalog {
    BUILTIN.get_or_init(|| {
        let profiles: Vec<HardwareProfile> =
            serde_json::from_str(CATALOG_DATA).expect("embedded catalog must be valid JSON");
        Catalog::new(profiles).expect("embedded catalog must pass validation")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn profile(name: &str, watts: f64, hourly_cost_usd: f64, md5: f64) -> HardwareProfile {
        HardwareProfile {
            name: name.to_string(),
            watts,
            hourly_cost_usd,
            hashes_per_second: HashMap::from([("MD5".to_string(), md5)]),
        }
    }

    #[test]
    fn test_builtin_catalog_loaded() {
        assert_eq!(builtin_catalog().profiles().len(), 11);
    }

    #[test]
    fn test_builtin_catalog_unique_names() {
        let names: HashSet<_> = builtin_catalog()
            .profiles()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names.len(), builtin_catalog().profiles().len());
    }

    #[test]
    fn test_builtin_catalog_all_benchmark_md5() {
        for profile in builtin_catalog().profiles() {
            assert!(
                profile.hashes_per_second.contains_key("MD5"),
                "profile \"{}\" lacks an MD5 benchmark",
                profile.name
            );
        }
    }

    #[test]
    fn test_builtin_catalog_positive_figures() {
        for profile in builtin_catalog().profiles() {
            assert!(profile.watts > 0.0);
            assert!(profile.hourly_cost_usd > 0.0);
            assert!(profile.hashes_per_second.values().all(|hps| *hps > 0.0));
        }
    }

    #[test]
    fn test_catalog_sha256() {
        let mut hasher = Sha256::new();
        hasher.update(CATALOG_DATA.as_bytes());
        let result = format!("{:x}", hasher.finalize());

        assert_eq!(
            result, EXPECTED_SHA256,
            "Catalog SHA-256 mismatch; file may be corrupted"
        );
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(vec![]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::new(vec![
            profile("rig", 75.0, 0.11, 1e9),
            profile("rig", 250.0, 0.74, 2e9),
        ]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_non_positive_figures_rejected() {
        for bad in [
            profile("rig", 0.0, 0.11, 1e9),
            profile("rig", 75.0, -0.11, 1e9),
            profile("rig", 75.0, 0.11, 0.0),
            profile("rig", f64::NAN, 0.11, 1e9),
        ] {
            assert!(
                matches!(Catalog::new(vec![bad.clone()]), Err(Error::InvalidCatalog(_))),
                "profile {:?} should have been rejected",
                bad
            );
        }
    }

    #[test]
    fn test_valid_catalog_accepted() {
        let catalog = Catalog::new(vec![profile("rig", 75.0, 0.11, 1e9)]).unwrap();
        assert_eq!(catalog.profiles().len(), 1);
    }
}
