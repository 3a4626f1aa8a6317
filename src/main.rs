use anyhow::Result;
use clap::{Parser, ValueEnum};

use outspend::catalog::builtin_catalog;
use outspend::cost::{Algorithm, DEFAULT_KWH_COST_USD};
use outspend::generator::{self, CharsetPolicy};
use outspend::sizing::{AttackScenario, Resource, Service, SizingResult};
use outspend::ui;

#[derive(Parser)]
#[command(
    name = "outspend",
    version,
    about = "Sizes a password against a budgeted brute-force attacker, then generates it"
)]
struct Cli {
    /// Attack budget in dollars (combined, if several attackers collaborate)
    #[arg(long, default_value_t = 10_000.0, value_name = "DOLLARS")]
    budget: f64,

    /// Acceptable probability of the attack succeeding within budget
    #[arg(long, default_value_t = 0.01, value_name = "PROBABILITY")]
    acceptance: f64,

    /// Resource constraining an offline attack
    #[arg(long, value_enum, default_value = "cost")]
    factor: FactorArg,

    /// Benchmark hash algorithm
    #[arg(long, value_enum, default_value = "md5")]
    algorithm: AlgorithmArg,

    /// Lifespan of the secret in years
    #[arg(long, default_value_t = 10, value_name = "YEARS")]
    lifetime: u32,

    /// Target whose HSM or TPM lockout caps the attempt rate
    #[arg(long, value_enum)]
    service: Option<ServiceArg>,

    /// Keep drawing characters until at least this many
    #[arg(long, default_value_t = 0, value_name = "CHARACTERS")]
    minimum_length: usize,

    /// Character classes for the generated password
    #[arg(long, value_enum)]
    output: Option<OutputArg>,

    /// Electricity price in dollars per kWh for power-bounded attacks
    #[arg(long, default_value_t = DEFAULT_KWH_COST_USD, value_name = "DOLLARS")]
    kwh_cost: f64,

    /// Print the required entropy in bits instead of generating a password
    #[arg(long)]
    show_entropy: bool,

    /// Explain the sizing on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum FactorArg {
    Cost,
    Power,
}

impl From<FactorArg> for Resource {
    fn from(factor: FactorArg) -> Self {
        match factor {
            FactorArg::Cost => Resource::Cost,
            FactorArg::Power => Resource::Power,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum AlgorithmArg {
    Md5,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(algorithm: AlgorithmArg) -> Self {
        match algorithm {
            AlgorithmArg::Md5 => Algorithm::Md5,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ServiceArg {
    Fido,
    Ios,
    IosWithErase,
    Hello,
    Facebook,
}

impl From<ServiceArg> for Service {
    fn from(service: ServiceArg) -> Self {
        match service {
            ServiceArg::Fido => Service::Fido,
            ServiceArg::Ios => Service::Ios,
            ServiceArg::IosWithErase => Service::IosWithErase,
            ServiceArg::Hello => Service::Hello,
            ServiceArg::Facebook => Service::Facebook,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum OutputArg {
    Lowercase,
    Complex,
    Digits,
}

impl From<OutputArg> for CharsetPolicy {
    fn from(output: OutputArg) -> Self {
        match output {
            OutputArg::Lowercase => CharsetPolicy::Lowercase,
            OutputArg::Complex => CharsetPolicy::Mixed,
            OutputArg::Digits => CharsetPolicy::Digits,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let service = cli.service.map(Service::from);

    let policy = match cli.output {
        Some(output) => CharsetPolicy::from(output),
        None => service
            .and_then(Service::charset_override)
            .unwrap_or(CharsetPolicy::Mixed),
    };

    let scenario = AttackScenario {
        budget_usd: cli.budget,
        acceptance: cli.acceptance,
        lifetime_years: cli.lifetime,
        resource: cli.factor.into(),
        algorithm: cli.algorithm.into(),
        rate_limit: service.map(|service| service.rate(cli.lifetime)),
        kwh_cost_usd: cli.kwh_cost,
    };

    let catalog = builtin_catalog();
    let result = SizingResult::compute(&scenario, catalog, policy, cli.minimum_length)?;

    if cli.show_entropy {
        if cli.verbose {
            let options = ui::DisplayOptions::detect();
            ui::display_report(&scenario, &result, policy, cli.minimum_length, None, &options);
        }
        println!("{}", result.bits);
        return Ok(());
    }

    let secret = generator::generate(policy, result.combinations, cli.minimum_length);

    if cli.verbose {
        let options = ui::DisplayOptions::detect();
        ui::display_report(
            &scenario,
            &result,
            policy,
            cli.minimum_length,
            Some(secret.len()),
            &options,
        );
    }

    println!("{}", &*secret);

    Ok(())
}
