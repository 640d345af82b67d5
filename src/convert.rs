//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use aviv_calendar::{CalculatorConfig, ObservanceRule};
use aviv_ephemeris::Site;

use crate::config::*;

/// Builds a [`Site`] from the TOML site configuration.
pub fn build_site(site: &SiteToml) -> Result<Site> {
    Site::new(site.latitude, site.longitude).context("invalid [site]")
}

/// Parses the observance rule name into an [`ObservanceRule`].
///
/// `"fixed"` uses `cutoff_hour`; `"sunset"` uses the configured site.
pub fn parse_rule(observance: &ObservanceToml, site: &SiteToml) -> Result<ObservanceRule> {
    match observance.rule.to_lowercase().as_str() {
        "fixed" => Ok(ObservanceRule::FixedCutoff {
            hour: observance.cutoff_hour,
        }),
        "sunset" => Ok(ObservanceRule::Sunset {
            site: build_site(site)?,
        }),
        other => bail!("unknown observance rule: {other:?} (expected \"fixed\" or \"sunset\")"),
    }
}

/// Builds a validated [`CalculatorConfig`] from the TOML configuration.
pub fn build_calculator_config(config: &AvivConfig) -> Result<CalculatorConfig> {
    let rule = parse_rule(&config.observance, &config.site)?;
    let search = &config.search;
    let cfg = CalculatorConfig::new()
        .with_rule(rule)
        .with_aviv_window_end(search.aviv_window_end[0], search.aviv_window_end[1])
        .with_month7_window_days(search.month7_window_days[0], search.month7_window_days[1])
        .with_month_padding_days(search.month_padding_days[0], search.month_padding_days[1]);
    cfg.validate().context("invalid calculator configuration")?;
    Ok(cfg)
}
