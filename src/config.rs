use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::error::SiteError;
use crate::reveal::{ClassReveal, WatchRegion};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const HEADER_SCROLLED_AFTER: f64 = 50.0;
pub const SCROLL_INDICATOR_HIDDEN_AFTER: f64 = 100.0;
pub const BACK_TO_TOP_VISIBLE_AFTER: f64 = 500.0;

pub const PARALLAX_SELECTOR: &str = ".glow-orb, .orbit-ring";
pub const PARALLAX_RATE: f64 = -0.5;
pub const PARALLAX_THROTTLE_MS: f64 = 16.0; // ~60fps

pub const TOAST_LIFETIME_MS: u32 = 5_000;
pub const TOAST_EXIT_MS: u32 = 300;

pub const SUBMISSION_DELAY_MS: u32 = 2_000;
pub const SUBMISSION_FAILURE_RATE: f64 = 0.1;

/// Id of an optional `<script type="application/json">` that overrides the
/// reveal defaults.
pub const REVEAL_CONFIG_ELEMENT_ID: &str = "reveal-config";

pub fn default_watch_regions() -> Vec<WatchRegion> {
    vec![
        WatchRegion::new("services", ".service-card", 0.2, 100, "translateY(30px)"),
        WatchRegion::new("portfolio", ".portfolio-item", 0.1, 150, "translateY(50px) scale(0.9)")
            .revealed_transform("translateY(0) scale(1)")
            .transition("all 0.8s cubic-bezier(0.4, 0, 0.2, 1)"),
    ]
}

pub fn default_fade_in() -> ClassReveal {
    ClassReveal {
        selector: ".fade-in-element".to_string(),
        class: "animate-fade-in-up".to_string(),
        threshold: 0.1,
        root_margin: Some("0px 0px -100px 0px".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_watch_regions")]
    pub regions: Vec<WatchRegion>,
    #[serde(default = "default_fade_in")]
    pub fade_in: ClassReveal,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            regions: default_watch_regions(),
            fade_in: default_fade_in(),
        }
    }
}

impl RevealConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the page's override block, falling back to the defaults.
    pub fn load(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(REVEAL_CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                warn!("Ignoring #{}: {}", REVEAL_CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions() {
        let regions = default_watch_regions();
        assert_eq!(regions.len(), 2);

        let services = &regions[0];
        assert_eq!(services.container, "services");
        assert_eq!(services.threshold, 0.2);
        assert_eq!(services.stagger_ms, 100);
        assert_eq!(
            services.hidden_state().declarations(),
            &[
                ("opacity", "0".to_string()),
                ("transform", "translateY(30px)".to_string()),
                ("transition", "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)".to_string()),
            ]
        );

        let portfolio = &regions[1];
        assert_eq!(portfolio.stagger_ms, 150);
        assert_eq!(
            portfolio.revealed_state().declarations(),
            &[
                ("opacity", "1".to_string()),
                ("transform", "translateY(0) scale(1)".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = RevealConfig::from_json("{}").unwrap();
        assert_eq!(config, RevealConfig::default());
    }

    #[test]
    fn test_json_override() {
        let json = r#"{
            "regions": [
                {
                    "container": "team",
                    "children": ".team-member",
                    "threshold": 0.3,
                    "stagger_ms": 80,
                    "hidden_transform": "translateX(-20px)"
                }
            ]
        }"#;
        let config = RevealConfig::from_json(json).unwrap();

        assert_eq!(config.regions.len(), 1);
        let team = &config.regions[0];
        assert_eq!(team.container, "team");
        assert_eq!(team.stagger_ms, 80);
        assert_eq!(team.revealed_transform, "translateY(0)");
        assert_eq!(team.transition, "all 0.6s cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(config.fade_in, default_fade_in());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = RevealConfig::from_json(r#"{"regions": [{"container": "x"}]}"#);
        assert!(matches!(result, Err(SiteError::Config(_))));
    }
}
