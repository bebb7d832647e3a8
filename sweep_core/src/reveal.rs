// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal animation schedules.
//!
//! A segment is drawn as a filled slice seen through its mask sub-wedges. Each target starts
//! hidden and transitions to revealed after a delay proportional to its angular start, which
//! makes the slice appear to sweep into existence.
//!
//! Hosts usually coalesce state writes within one update, so "hidden" followed directly by
//! "revealed" would not be seen as a transition. [`RevealSchedule::play`] therefore drives a
//! [`RevealHost`] in two phases separated by a single commit barrier; how the barrier makes the
//! hidden state observable is up to the host.

use smallvec::SmallVec;

use crate::config::AnimationConfig;
use crate::segment::Segment;

/// How a target moves from hidden to revealed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Apply the revealed state immediately.
    Instant,
    /// Animate the reveal.
    Animated {
        /// Seconds before the transition starts.
        delay: f64,
        /// Seconds the transition takes.
        duration: f64,
    },
}

impl Transition {
    /// Builds a transition from a delay and a duration expressed in turns.
    pub fn from_turns(delay: f64, duration: f64, animation: &AnimationConfig) -> Self {
        if animation.is_instant() {
            Self::Instant
        } else {
            Self::Animated {
                delay: animation.seconds(delay),
                duration: animation.seconds(duration),
            }
        }
    }

    /// Seconds until the transition has completed.
    pub fn end(&self) -> f64 {
        match self {
            Self::Instant => 0.0,
            Self::Animated { delay, duration } => delay + duration,
        }
    }
}

/// Which drawable of a segment a [`RevealStep`] applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    /// The primary slice.
    Slice,
    /// The mask sub-wedge at this index.
    Mask(usize),
}

/// Animation parameters for one drawable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStep {
    /// Drawable this step applies to.
    pub target: RevealTarget,
    /// Rotation in turns the drawable is placed at.
    pub rotation: f64,
    /// Hidden → revealed transition.
    pub transition: Transition,
}

/// Receives a reveal schedule as an explicit two-phase commit.
pub trait RevealHost {
    /// Places a target at its rotation in the hidden state.
    fn apply_hidden(&mut self, step: &RevealStep);

    /// Called once between the hidden and the revealed phase.
    ///
    /// Implementations must ensure the hidden state is committed (observed by the renderer)
    /// before returning.
    fn commit_barrier(&mut self);

    /// Requests the revealed state using the step's transition.
    fn apply_revealed(&mut self, step: &RevealStep);
}

/// Animation parameters for a whole segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSchedule {
    /// Step for the primary slice.
    pub slice: RevealStep,
    /// Steps for the mask sub-wedges, in reveal order.
    pub masks: SmallVec<[RevealStep; 1]>,
}

impl RevealSchedule {
    /// Builds the schedule for a laid-out segment.
    ///
    /// The slice is revealed over `fraction` turns starting at `rotation`; each mask sub-wedge is
    /// revealed over its own span starting at its own delay.
    pub fn new(segment: &Segment, animation: &AnimationConfig) -> Self {
        let rotation = segment.rotation();
        let slice = RevealStep {
            target: RevealTarget::Slice,
            rotation,
            transition: Transition::from_turns(rotation, segment.fraction(), animation),
        };
        let masks = segment
            .masks()
            .iter()
            .enumerate()
            .map(|(k, mask)| RevealStep {
                target: RevealTarget::Mask(k),
                rotation: rotation + mask.start,
                transition: Transition::from_turns(mask.delay, mask.path.span(), animation),
            })
            .collect();
        Self { slice, masks }
    }

    /// Iterates over all steps, slice first.
    pub fn steps(&self) -> impl Iterator<Item = &RevealStep> {
        core::iter::once(&self.slice).chain(self.masks.iter())
    }

    /// Seconds until every step has completed.
    pub fn end(&self) -> f64 {
        self.steps()
            .map(|s| s.transition.end())
            .fold(0.0, f64::max)
    }

    /// Drives `host` through hidden → barrier → revealed.
    pub fn play(&self, host: &mut impl RevealHost) {
        for step in self.steps() {
            host.apply_hidden(step);
        }
        host.commit_barrier();
        for step in self.steps() {
            host.apply_revealed(step);
        }
    }
}
