//! Application settings with per-device defaults.
//!
//! Every knob is a plain key with a documented default. The page may supply a
//! JSON object of overrides; missing keys keep the profile default.

use crate::constants::{
    MAX_BOLTS_PER_BURST, MAX_HANDS_LIMIT, MAX_SPHERE_BURST_PARTICLES, MAX_TRAIL_CAPACITY,
};
use crate::effects::EffectSettings;
use crate::error::{Error, Result};
use crate::feed::GapPolicy;
use crate::palette::palette_index;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceProfile {
    Standard,
    /// Phones and low-core machines: smaller capture, lighter model, fewer
    /// particles, no glow.
    LowPower,
}

impl DeviceProfile {
    /// Pick a profile from what the browser reports about the device.
    pub fn detect(logical_cores: u32, user_agent: &str) -> Self {
        let mobile = ["Mobi", "Android", "iPhone", "iPad"]
            .iter()
            .any(|m| user_agent.contains(m));
        if mobile || (logical_cores > 0 && logical_cores <= 4) {
            DeviceProfile::LowPower
        } else {
            DeviceProfile::Standard
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: DeviceProfile,
    // capture
    pub capture_width: u32,
    pub capture_height: u32,
    pub capture_fps: u32,
    pub mirror: bool,
    // landmark model
    pub max_hands: usize,
    pub model_complexity: u8,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub gap_policy: GapPolicy,
    // snapshots
    pub upload_period_ms: u32,
    pub jpeg_quality: f32,
    pub api_base: String,
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    // visuals
    pub palette: usize,
    pub glow: bool,
    pub effects: EffectsConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub bolts_per_burst: usize,
    pub sphere_burst_particles: usize,
    pub trail_capacity: usize,
}

impl From<EffectsConfig> for EffectSettings {
    fn from(c: EffectsConfig) -> Self {
        EffectSettings {
            bolts_per_burst: c.bolts_per_burst,
            sphere_burst_particles: c.sphere_burst_particles,
            trail_capacity: c.trail_capacity,
        }
    }
}

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";
pub const MIN_UPLOAD_PERIOD_MS: u32 = 250;
pub const MAX_UPLOAD_PERIOD_MS: u32 = 3_600_000; // one hour

impl AppConfig {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        match profile {
            DeviceProfile::Standard => Self {
                profile,
                capture_width: 1280,
                capture_height: 720,
                capture_fps: 30,
                mirror: true,
                max_hands: 2,
                model_complexity: 1,
                min_detection_confidence: 0.7,
                min_tracking_confidence: 0.7,
                gap_policy: GapPolicy::default(),
                upload_period_ms: 1000,
                jpeg_quality: 0.85,
                api_base: DEFAULT_API_BASE.to_string(),
                bot_token: None,
                chat_id: None,
                palette: 0,
                glow: true,
                effects: EffectsConfig {
                    bolts_per_burst: 5,
                    sphere_burst_particles: 100,
                    trail_capacity: 35,
                },
            },
            DeviceProfile::LowPower => Self {
                profile,
                capture_width: 640,
                capture_height: 480,
                capture_fps: 24,
                model_complexity: 0,
                upload_period_ms: 2000,
                jpeg_quality: 0.7,
                glow: false,
                effects: EffectsConfig {
                    bolts_per_burst: 3,
                    sphere_burst_particles: 40,
                    trail_capacity: 20,
                },
                ..Self::for_profile(DeviceProfile::Standard)
            },
        }
    }

    /// Profile defaults with `json` overrides applied and validated.
    pub fn resolve(profile: DeviceProfile, json: Option<&str>) -> Result<Self> {
        let mut config = Self::for_profile(profile);
        if let Some(text) = json.map(str::trim).filter(|t| !t.is_empty()) {
            let overrides: ConfigOverrides = serde_json::from_str(text)?;
            overrides.apply_to(&mut config)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject values that cannot work and clamp those that merely exceed
    /// their range.
    pub fn validate(&mut self) -> Result<()> {
        if self.capture_width == 0 || self.capture_height == 0 {
            return Err(Error::Config("capture size must be non-zero".into()));
        }
        if self.max_hands == 0 {
            return Err(Error::Config("max_hands must be at least 1".into()));
        }
        self.max_hands = self.max_hands.min(MAX_HANDS_LIMIT);
        self.model_complexity = self.model_complexity.min(1);
        self.min_detection_confidence = self.min_detection_confidence.clamp(0.0, 1.0);
        self.min_tracking_confidence = self.min_tracking_confidence.clamp(0.0, 1.0);
        self.jpeg_quality = self.jpeg_quality.clamp(0.1, 1.0);
        self.upload_period_ms = self
            .upload_period_ms
            .clamp(MIN_UPLOAD_PERIOD_MS, MAX_UPLOAD_PERIOD_MS);
        self.capture_fps = self.capture_fps.clamp(1, 120);
        let fx = &mut self.effects;
        fx.bolts_per_burst = fx.bolts_per_burst.min(MAX_BOLTS_PER_BURST);
        fx.sphere_burst_particles = fx.sphere_burst_particles.min(MAX_SPHERE_BURST_PARTICLES);
        fx.trail_capacity = fx.trail_capacity.min(MAX_TRAIL_CAPACITY);
        Ok(())
    }

    /// Snapshot uploads need both a bot token and a chat id.
    pub fn upload_enabled(&self) -> bool {
        matches!(
            (&self.bot_token, &self.chat_id),
            (Some(t), Some(c)) if !t.is_empty() && !c.is_empty()
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_profile(DeviceProfile::Standard)
    }
}

/// Page-supplied overrides. Unknown keys are an error so typos surface.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub capture_width: Option<u32>,
    pub capture_height: Option<u32>,
    pub capture_fps: Option<u32>,
    pub mirror: Option<bool>,
    pub max_hands: Option<usize>,
    pub model_complexity: Option<u8>,
    pub min_detection_confidence: Option<f32>,
    pub min_tracking_confidence: Option<f32>,
    pub gap_policy: Option<String>,
    pub hold_max_ticks: Option<u32>,
    pub upload_period_ms: Option<u32>,
    pub jpeg_quality: Option<f32>,
    pub api_base: Option<String>,
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub palette: Option<String>,
    pub glow: Option<bool>,
    pub bolts_per_burst: Option<usize>,
    pub sphere_burst_particles: Option<usize>,
    pub trail_capacity: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply_to(self, c: &mut AppConfig) -> Result<()> {
        let ConfigOverrides {
            capture_width,
            capture_height,
            capture_fps,
            mirror,
            max_hands,
            model_complexity,
            min_detection_confidence,
            min_tracking_confidence,
            gap_policy,
            hold_max_ticks,
            upload_period_ms,
            jpeg_quality,
            api_base,
            bot_token,
            chat_id,
            palette,
            glow,
            bolts_per_burst,
            sphere_burst_particles,
            trail_capacity,
        } = self;

        macro_rules! set {
            ($($field:ident => $target:expr),* $(,)?) => {
                $(if let Some(v) = $field { $target = v; })*
            };
        }
        set! {
            capture_width => c.capture_width,
            capture_height => c.capture_height,
            capture_fps => c.capture_fps,
            mirror => c.mirror,
            max_hands => c.max_hands,
            model_complexity => c.model_complexity,
            min_detection_confidence => c.min_detection_confidence,
            min_tracking_confidence => c.min_tracking_confidence,
            upload_period_ms => c.upload_period_ms,
            jpeg_quality => c.jpeg_quality,
            api_base => c.api_base,
            glow => c.glow,
            bolts_per_burst => c.effects.bolts_per_burst,
            sphere_burst_particles => c.effects.sphere_burst_particles,
            trail_capacity => c.effects.trail_capacity,
        }
        if bot_token.is_some() {
            c.bot_token = bot_token;
        }
        if chat_id.is_some() {
            c.chat_id = chat_id;
        }
        if let Some(name) = palette {
            c.palette = palette_index(&name)
                .ok_or_else(|| Error::Config(format!("unknown palette '{}'", name)))?;
        }

        let hold_ticks = hold_max_ticks.or(match c.gap_policy {
            GapPolicy::HoldLast { max_ticks } => Some(max_ticks),
            GapPolicy::Blank => None,
        });
        match gap_policy.as_deref() {
            Some("blank") => c.gap_policy = GapPolicy::Blank,
            Some("hold") | Some("hold_last") => {
                c.gap_policy = GapPolicy::HoldLast {
                    max_ticks: hold_ticks.unwrap_or(6),
                }
            }
            Some(other) => {
                return Err(Error::Config(format!("unknown gap_policy '{}'", other)));
            }
            None => {
                if let (GapPolicy::HoldLast { .. }, Some(max_ticks)) = (c.gap_policy, hold_ticks) {
                    c.gap_policy = GapPolicy::HoldLast { max_ticks };
                }
            }
        }
        Ok(())
    }
}
