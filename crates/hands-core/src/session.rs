//! Per-page render session: every piece of mutable state the tick touches.
//!
//! The web frame loop owns one [`RenderSession`] and calls [`RenderSession::tick`]
//! once per animation frame with whatever the landmark model produced.
//! Tests drive it directly with synthetic hands.

use crate::config::AppConfig;
use crate::effects::{AdvanceReport, EffectState};
use crate::feed::{GapPolicy, HandInput, LandmarkFeed, Resolved};
use crate::gesture::{classify, Gesture};
use crate::landmarks::{HandId, HandSet, INDEX_TIP};
use crate::palette::{palette, Palette, PALETTES};
use crate::trigger::{on_frame, GestureTracker, HandAnchors, SpawnCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Session knobs taken from [`AppConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSettings {
    pub max_hands: usize,
    pub gap_policy: GapPolicy,
    pub palette: usize,
    pub glow: bool,
    pub effects: crate::effects::EffectSettings,
}

impl From<&AppConfig> for SessionSettings {
    fn from(c: &AppConfig) -> Self {
        Self {
            max_hands: c.max_hands,
            gap_policy: c.gap_policy,
            palette: c.palette,
            glow: c.glow,
            effects: c.effects.into(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        (&AppConfig::default()).into()
    }
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub resolved: Option<Resolved>,
    /// Gesture per visible hand slot, in slot order.
    pub gestures: SmallVec<[Option<Gesture>; 4]>,
    /// Commands that fired on a rising edge this tick.
    pub spawned: SmallVec<[SpawnCommand; 4]>,
    pub advance: AdvanceReport,
}

pub struct RenderSession {
    settings: SessionSettings,
    feed: LandmarkFeed,
    tracker: GestureTracker,
    effects: EffectState,
    gestures: SmallVec<[Option<Gesture>; 4]>,
    overlay_visible: bool,
    palette_index: usize,
    rng: StdRng,
    ticks: u64,
}

impl RenderSession {
    pub fn new(settings: SessionSettings, seed: u64) -> Self {
        Self {
            feed: LandmarkFeed::new(settings.gap_policy),
            tracker: GestureTracker::new(),
            effects: EffectState::new(settings.effects),
            gestures: SmallVec::new(),
            overlay_visible: false,
            palette_index: settings.palette % PALETTES.len(),
            rng: StdRng::seed_from_u64(seed),
            ticks: 0,
            settings,
        }
    }

    /// Advance one frame: resolve hands, advance effects, then classify and
    /// trigger per hand slot.
    pub fn tick(&mut self, input: HandInput) -> TickReport {
        self.ticks += 1;
        let input = match input {
            HandInput::Fresh(mut hands) => {
                hands.truncate(self.settings.max_hands);
                HandInput::Fresh(hands)
            }
            other => other,
        };
        let resolved = self.feed.resolve(input);
        let classify_hands = matches!(resolved, Resolved::Fresh | Resolved::Held);
        self.overlay_visible = classify_hands;

        let samples: SmallVec<[glam::Vec2; 4]> = if resolved == Resolved::Fresh {
            self.feed.hands().iter().map(|h| h.point(INDEX_TIP)).collect()
        } else {
            SmallVec::new()
        };
        let burst_palette = *palette(self.palette_index);
        let advance = self
            .effects
            .advance(samples, &burst_palette, &mut self.rng);

        let mut report = TickReport {
            resolved: Some(resolved),
            advance,
            ..TickReport::default()
        };

        if !classify_hands {
            // A gap is not a gesture change: per-hand history waits for the
            // next detection.
            self.gestures.clear();
            return report;
        }

        let hands: HandSet = self.feed.hands().clone();
        self.gestures.clear();
        for (slot, hand) in hands.iter().enumerate() {
            let id = HandId(slot);
            let current = classify(hand);
            let anchors = HandAnchors::of(hand);
            self.effects.follow_anchor(id, anchors.palm);

            let previous = self.tracker.observe(id, current);
            for command in on_frame(id, current, previous, &anchors) {
                if self.apply(&command) {
                    log::debug!("[session] hand {} {:?} -> {:?}", slot, current, command);
                    report.spawned.push(command);
                }
            }
            self.gestures.push(current);
        }
        self.tracker.retain_present(hands.len());
        report.gestures = self.gestures.clone();
        report
    }

    fn apply(&mut self, command: &SpawnCommand) -> bool {
        match command {
            SpawnCommand::CyclePalette => {
                self.cycle_palette();
                true
            }
            other => self.effects.apply(other, &mut self.rng),
        }
    }

    pub fn cycle_palette(&mut self) {
        self.palette_index = (self.palette_index + 1) % PALETTES.len();
        log::info!("[session] palette -> {}", palette(self.palette_index).name);
    }

    /// Forget hands, gesture history and every live effect.
    pub fn reset(&mut self) {
        self.feed = LandmarkFeed::new(self.settings.gap_policy);
        self.tracker.clear();
        self.effects.clear();
        self.gestures.clear();
        self.overlay_visible = false;
    }

    pub fn hands(&self) -> &HandSet {
        self.feed.hands()
    }

    /// Whether the hand skeleton should be drawn this frame.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible && !self.feed.hands().is_empty()
    }

    pub fn gestures(&self) -> &[Option<Gesture>] {
        &self.gestures
    }

    pub fn effects(&self) -> &EffectState {
        &self.effects
    }

    pub fn palette(&self) -> &'static Palette {
        palette(self.palette_index)
    }

    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    pub fn glow(&self) -> bool {
        self.settings.glow
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
