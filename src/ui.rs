use console::Style;

use crate::generator::CharsetPolicy;
use crate::sizing::{AttackScenario, Resource, SizingResult};

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

impl DisplayOptions {
    pub fn detect() -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stderr)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_tree_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

pub fn format_percent(probability: f64) -> String {
    format!("{}%", probability * 100.0)
}

fn policy_name(policy: CharsetPolicy) -> &'static str {
    match policy {
        CharsetPolicy::Lowercase => "lowercase",
        CharsetPolicy::Mixed => "mixed complexity",
        CharsetPolicy::Digits => "digits",
    }
}

/// Explains the sizing on stderr; stdout stays a single line for piping.
pub fn display_report(
    scenario: &AttackScenario,
    result: &SizingResult,
    policy: CharsetPolicy,
    minimum_length: usize,
    secret_length: Option<usize>,
    options: &DisplayOptions,
) {
    let (mid, last) = get_tree_symbols(options.unicode_support);

    let value_style = if options.color_support {
        Style::new().cyan()
    } else {
        Style::new()
    };
    let bits_style = if options.color_support {
        Style::new().green().bold()
    } else {
        Style::new()
    };

    eprintln!("Scenario:");
    match scenario.rate_limit {
        Some(rate) => {
            eprintln!(
                "  {} Rate limit   {} attempts/s",
                mid,
                value_style.apply_to(format!("{:.3e}", rate))
            );
        }
        None => {
            eprintln!(
                "  {} Budget       ${}",
                mid,
                value_style.apply_to(scenario.budget_usd)
            );
            let resource = match scenario.resource {
                Resource::Cost => "rented compute",
                Resource::Power => "electricity only",
            };
            eprintln!("  {} Resource     {}", mid, value_style.apply_to(resource));
            eprintln!(
                "  {} Algorithm    {}",
                mid,
                value_style.apply_to(scenario.algorithm)
            );
        }
    }
    eprintln!(
        "  {} Acceptance   {}",
        mid,
        value_style.apply_to(format_percent(scenario.acceptance))
    );
    eprintln!(
        "  {} Lifetime     {} {}",
        last,
        value_style.apply_to(scenario.lifetime_years),
        if scenario.lifetime_years == 1 {
            "year"
        } else {
            "years"
        }
    );

    eprintln!("Sizing:");
    eprintln!(
        "  {} Combinations {}",
        mid,
        value_style.apply_to(format!("{:.3e}", result.combinations))
    );
    eprintln!(
        "  {} Entropy      {} bits",
        mid,
        bits_style.apply_to(result.bits)
    );
    eprintln!(
        "  {} Charset      {}",
        if secret_length.is_some() || minimum_length > 0 {
            mid
        } else {
            last
        },
        value_style.apply_to(policy_name(policy))
    );
    if minimum_length > 0 {
        eprintln!(
            "  {} Min length   {} chars",
            if secret_length.is_some() { mid } else { last },
            value_style.apply_to(minimum_length)
        );
    }
    if let Some(length) = secret_length {
        eprintln!(
            "  {} Length       {} chars",
            last,
            value_style.apply_to(length)
        );
    }
}
