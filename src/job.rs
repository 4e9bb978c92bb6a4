//! One panel run: config in, classified layout out.

use anyhow::Context;
use frontpanel_features::{classify, Classification, PanelLayout};
use frontpanel_settings::JobConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a run
#[derive(Debug, Clone)]
pub struct JobOutput {
    pub layout: PanelLayout,
    pub classification: Classification,
}

/// Seeded when a seed is configured, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Validate the config, generate the layout and bucket it by layer.
pub fn run_job(config: &JobConfig) -> anyhow::Result<JobOutput> {
    config.validate().context("Invalid job configuration")?;
    let format = config.panel_format()?;

    let mut rng = make_rng(config.fill.seed);
    let layout = PanelLayout::generate(format, &config.layout_request(), &mut rng)
        .context("Failed to generate panel layout")?;
    let classification = classify(layout.features.iter().cloned());

    if !classification.diagnostics.is_empty() {
        tracing::warn!(
            count = classification.diagnostics.len(),
            "layout produced diagnostics"
        );
    }

    Ok(JobOutput {
        layout,
        classification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontpanel_formats::FormatKind;

    #[test]
    fn test_run_default_job() {
        let output = run_job(&JobConfig::new()).unwrap();
        assert_eq!(output.classification.outline.len(), 4);
        assert_eq!(output.classification.drill.len(), 2);
        assert_eq!(output.classification.decoration.len(), 100);
    }

    #[test]
    fn test_seeded_jobs_match() {
        let mut config = JobConfig::new();
        config.panel.format = FormatKind::Pulplogic;
        config.fill.seed = Some(5);
        let a = run_job(&config).unwrap();
        let b = run_job(&config).unwrap();
        assert_eq!(a.layout, b.layout);
    }

    #[test]
    fn test_invalid_job() {
        let mut config = JobConfig::new();
        config.panel.width = 0;
        let err = run_job(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Width must be greater than 0"));
    }
}
