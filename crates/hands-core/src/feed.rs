//! Handoff between the asynchronous landmark model and the render tick.

use crate::landmarks::HandSet;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// What the render tick received from the landmark model this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum HandInput {
    /// A new detection result arrived (possibly with zero hands).
    Fresh(HandSet),
    /// Detection is still running; nothing new this tick.
    Pending,
    /// The model reported an error for the last frame.
    Failed,
}

/// What to show while the model has not produced a new result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum GapPolicy {
    /// Keep the last detected hands for up to `max_ticks` ticks, then blank.
    HoldLast { max_ticks: u32 },
    /// Show no hands until the next result.
    Blank,
}

impl Default for GapPolicy {
    fn default() -> Self {
        GapPolicy::HoldLast { max_ticks: 6 }
    }
}

/// Hands resolved for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// New detection; trails sample from it.
    Fresh,
    /// Last detection reused under [`GapPolicy::HoldLast`].
    Held,
    /// No hands to show or classify.
    Blank,
    /// Overlay skipped after a processing error; gesture state untouched.
    Skipped,
}

/// Applies the gap policy to the stream of [`HandInput`]s.
#[derive(Clone, Debug)]
pub struct LandmarkFeed {
    policy: GapPolicy,
    last: HandSet,
    held_ticks: u32,
}

impl LandmarkFeed {
    pub fn new(policy: GapPolicy) -> Self {
        Self {
            policy,
            last: HandSet::new(),
            held_ticks: 0,
        }
    }

    pub fn policy(&self) -> GapPolicy {
        self.policy
    }

    /// Hands for this tick. They stay readable via [`LandmarkFeed::hands`]
    /// until the next call.
    pub fn resolve(&mut self, input: HandInput) -> Resolved {
        match input {
            HandInput::Fresh(hands) => {
                self.last = hands;
                self.held_ticks = 0;
                Resolved::Fresh
            }
            HandInput::Failed => Resolved::Skipped,
            HandInput::Pending => match self.policy {
                GapPolicy::Blank => {
                    self.last.clear();
                    Resolved::Blank
                }
                GapPolicy::HoldLast { max_ticks } => {
                    if self.last.is_empty() {
                        return Resolved::Blank;
                    }
                    self.held_ticks += 1;
                    if self.held_ticks > max_ticks {
                        log::debug!("[feed] held hands expired after {} ticks", max_ticks);
                        self.last.clear();
                        Resolved::Blank
                    } else {
                        Resolved::Held
                    }
                }
            },
        }
    }

    pub fn hands(&self) -> &HandSet {
        &self.last
    }
}

/// One-slot mailbox: the producer overwrites, the consumer takes the latest.
#[derive(Debug)]
pub struct LatestSlot<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, returning an unread older value it replaced.
    pub fn put(&self, value: T) -> Option<T> {
        self.slot.borrow_mut().replace(value)
    }

    pub fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{Hand, Landmark, LANDMARK_COUNT};

    fn one_hand() -> HandSet {
        let mut set = HandSet::new();
        set.push(Hand::new([Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]));
        set
    }

    #[test]
    fn hold_last_expires_after_max_ticks() {
        let mut feed = LandmarkFeed::new(GapPolicy::HoldLast { max_ticks: 2 });
        assert_eq!(feed.resolve(HandInput::Fresh(one_hand())), Resolved::Fresh);
        assert_eq!(feed.resolve(HandInput::Pending), Resolved::Held);
        assert_eq!(feed.resolve(HandInput::Pending), Resolved::Held);
        assert_eq!(feed.resolve(HandInput::Pending), Resolved::Blank);
        assert!(feed.hands().is_empty());
    }

    #[test]
    fn failure_keeps_last_hands() {
        let mut feed = LandmarkFeed::new(GapPolicy::Blank);
        feed.resolve(HandInput::Fresh(one_hand()));
        assert_eq!(feed.resolve(HandInput::Failed), Resolved::Skipped);
        assert_eq!(feed.hands().len(), 1);
        assert_eq!(feed.resolve(HandInput::Pending), Resolved::Blank);
        assert!(feed.hands().is_empty());
    }

    #[test]
    fn latest_slot_keeps_newest() {
        let slot = LatestSlot::new();
        let producer = slot.clone();
        assert_eq!(producer.put(1), None);
        assert_eq!(producer.put(2), Some(1));
        assert_eq!(slot.take(), Some(2));
        assert!(slot.is_empty());
    }

    #[test]
    fn gap_policy_serde_shape() {
        let json = serde_json::to_string(&GapPolicy::default()).unwrap();
        assert_eq!(json, r#"{"mode":"hold_last","max_ticks":6}"#);
        let blank: GapPolicy = serde_json::from_str(r#"{"mode":"blank"}"#).unwrap();
        assert_eq!(blank, GapPolicy::Blank);
    }
}
