pub use crate::domain::model::MotionState;
use crate::domain::ports::Animator;
use std::collections::HashSet;

/// When an entrance animation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    OnMount,
    InViewOnce,
}

impl RevealTrigger {
    pub fn attr_value(self) -> &'static str {
        match self {
            RevealTrigger::OnMount => "mount",
            RevealTrigger::InViewOnce => "once",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub from: MotionState,
    pub to: MotionState,
    pub trigger: RevealTrigger,
    pub duration_secs: f32,
}

impl Reveal {
    /// Hero block, animated as soon as the page mounts.
    pub const HERO: Reveal = Reveal {
        from: MotionState { opacity: 0.0, x: 0.0, y: 30.0 },
        to: MotionState::VISIBLE,
        trigger: RevealTrigger::OnMount,
        duration_secs: 0.8,
    };

    /// Section headings slide in from the left.
    pub const HEADING: Reveal = Reveal {
        from: MotionState { opacity: 0.0, x: -20.0, y: 0.0 },
        to: MotionState::VISIBLE,
        trigger: RevealTrigger::InViewOnce,
        duration_secs: 0.6,
    };

    pub const CARD: Reveal = Reveal {
        from: MotionState { opacity: 0.0, x: 0.0, y: 20.0 },
        to: MotionState::VISIBLE,
        trigger: RevealTrigger::InViewOnce,
        duration_secs: 0.6,
    };

    /// Attributes for an element that starts hidden and is revealed by the
    /// page script.
    pub fn attrs(&self) -> String {
        format!(
            r#"data-reveal="{}" data-duration="{}" style="{}""#,
            self.trigger.attr_value(),
            self.duration_secs,
            self.from.to_style()
        )
    }
}

/// Reveal-once bookkeeping; each element animates at most once.
#[derive(Debug, Default)]
pub struct RevealOnce {
    revealed: HashSet<String>,
    log: Vec<String>,
}

impl RevealOnce {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }

    /// Elements in the order their animation started.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl Animator for RevealOnce {
    fn reveal_once(&mut self, element: &str, from: MotionState, to: MotionState) -> bool {
        if !self.revealed.insert(element.to_string()) {
            return false;
        }
        tracing::trace!(element, from = %from.to_style(), to = %to.to_style(), "reveal");
        self.log.push(element.to_string());
        true
    }
}
