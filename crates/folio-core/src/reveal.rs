//! One-shot scroll animations: fade-in reveals and skill-bar fills.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Remembers which elements have already been revealed.
#[derive(Debug)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection entry. Returns true exactly once per element:
    /// the first time it is seen intersecting.
    pub fn intersected(&mut self, key: K, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}

/// When and how wide one bar should become.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFill {
    pub index: usize,
    pub delay: Duration,
    pub percent: f64,
}

impl BarFill {
    /// CSS value for the bar's `width`
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Parse a `data-progress` attribute into a percentage in 0..=100.
pub fn parse_progress(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    value.is_finite().then_some(value.clamp(0.0, 100.0))
}

/// One `.skills-category`: its bars and whether they already animated.
#[derive(Debug, Clone)]
pub struct SkillGroup {
    progress: Vec<Option<f64>>,
    base_delay: Duration,
    step: Duration,
    animated: bool,
}

impl SkillGroup {
    /// `progress` holds each bar's raw `data-progress`, in document order.
    pub fn new<'a>(
        progress: impl IntoIterator<Item = Option<&'a str>>,
        base_delay: Duration,
        step: Duration,
    ) -> Self {
        let progress = progress
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let parsed = raw.and_then(parse_progress);
                if parsed.is_none() {
                    log::warn!("skill bar {} has no usable data-progress ({:?})", index, raw);
                }
                parsed
            })
            .collect();
        Self {
            progress,
            base_delay,
            step,
            animated: false,
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Feed one intersection entry for this group.
    ///
    /// The first intersecting entry returns the fills to schedule; the caller
    /// should stop observing the group. Anything after that returns `None`.
    pub fn intersected(&mut self, is_intersecting: bool) -> Option<Vec<BarFill>> {
        if !is_intersecting || self.animated {
            return None;
        }
        self.animated = true;

        let fills = self
            .progress
            .iter()
            .enumerate()
            .filter_map(|(index, percent)| {
                percent.map(|percent| BarFill {
                    index,
                    delay: self.base_delay + self.step * index as u32,
                    percent,
                })
            })
            .collect();
        Some(fills)
    }
}
