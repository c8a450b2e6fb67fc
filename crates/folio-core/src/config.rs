use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::timing::MAX_TIMER_MS;

/// Page-wide settings, loaded from the `site.toml` embedded in the web crate.
///
/// Every field has a default, so a partial file (or an empty one) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address copied by the copy-email button when it has no `data-email`
    pub contact_email: String,
    /// Contact form `action`; empty means submissions are simulated
    pub form_endpoint: String,
    /// Console log level (error, warn, info, debug, trace)
    pub log_level: String,
    pub timing: TimingConfig,
    pub scroll: ScrollConfig,
    pub motion: MotionConfig,
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: "hello@example.com".to_string(),
            form_endpoint: String::new(),
            log_level: "info".to_string(),
            timing: TimingConfig::default(),
            scroll: ScrollConfig::default(),
            motion: MotionConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub preloader_ms: u64,
    pub button_reset_ms: u64,
    pub copy_feedback_ms: u64,
    pub skill_base_delay_ms: u64,
    pub skill_step_ms: u64,
    pub hero_stagger_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            preloader_ms: 1800,
            button_reset_ms: 3000,
            copy_feedback_ms: 2000,
            skill_base_delay_ms: 100,
            skill_step_ms: 100,
            hero_stagger_secs: 0.15,
        }
    }
}

impl TimingConfig {
    pub fn preloader(&self) -> Duration {
        Duration::from_millis(self.preloader_ms)
    }

    pub fn button_reset(&self) -> Duration {
        Duration::from_millis(self.button_reset_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scrolling down past this offset hides the navbar
    pub nav_hide_after: f64,
    /// Past this offset the navbar gets its solid background
    pub nav_solid_after: f64,
    /// How far ahead of a section's top it already counts as active
    pub section_lookahead: f64,
    pub reveal_threshold: f64,
    pub skills_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_hide_after: 100.0,
            nav_solid_after: 50.0,
            section_lookahead: 200.0,
            reveal_threshold: 0.1,
            skills_threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub cursor_easing: f64,
    pub parallax_speed: f64,
    pub parallax_media_query: String,
    pub tilt_divisor: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            cursor_easing: 0.12,
            parallax_speed: 15.0,
            parallax_media_query: "(min-width: 769px)".to_string(),
            tilt_divisor: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub success: String,
    pub error: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            success: "#27ae60".to_string(),
            error: "#e74c3c".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document into a config
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse site config")?;
        config.validate()?;
        Ok(config)
    }

    /// True when the contact form should be simulated instead of posted
    pub fn simulates_submission(&self) -> bool {
        self.form_endpoint.trim().is_empty()
    }

    fn validate(&self) -> Result<()> {
        let easing = self.motion.cursor_easing;
        if !(easing > 0.0 && easing <= 1.0) {
            anyhow::bail!("motion.cursor_easing must be in (0, 1], got {}", easing);
        }
        if !self.motion.tilt_divisor.is_finite() || self.motion.tilt_divisor == 0.0 {
            anyhow::bail!(
                "motion.tilt_divisor must be a non-zero number, got {}",
                self.motion.tilt_divisor
            );
        }
        for (name, value) in [
            ("motion.parallax_speed", self.motion.parallax_speed),
            ("scroll.nav_hide_after", self.scroll.nav_hide_after),
            ("scroll.nav_solid_after", self.scroll.nav_solid_after),
            ("scroll.section_lookahead", self.scroll.section_lookahead),
            ("timing.hero_stagger_secs", self.timing.hero_stagger_secs),
        ] {
            if !value.is_finite() {
                anyhow::bail!("{} must be a finite number, got {}", name, value);
            }
        }
        for (name, value) in [
            ("scroll.reveal_threshold", self.scroll.reveal_threshold),
            ("scroll.skills_threshold", self.scroll.skills_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("{} must be between 0 and 1, got {}", name, value);
            }
        }
        for (name, value) in [
            ("timing.preloader_ms", self.timing.preloader_ms),
            ("timing.button_reset_ms", self.timing.button_reset_ms),
            ("timing.copy_feedback_ms", self.timing.copy_feedback_ms),
            ("timing.skill_base_delay_ms", self.timing.skill_base_delay_ms),
            ("timing.skill_step_ms", self.timing.skill_step_ms),
        ] {
            if value > MAX_TIMER_MS {
                anyhow::bail!("{} must be at most {}, got {}", name, MAX_TIMER_MS, value);
            }
        }
        Ok(())
    }
}
