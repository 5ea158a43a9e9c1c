//! Scroll-jacking: wheel input and an externally controlled active index are
//! mapped onto page sections of one viewport height each, with an eased
//! snap animation between them.
//!
//! The controller never schedules anything itself. The host calls [`ScrollJack::tick`]
//! once per display frame while [`ScrollJack::is_animating`] is true.

use crate::config::ScrollJackConfig;
use crate::easing::{ease_in_out_quad, interpolate};

/// Page scroll surface the controller drives.
pub trait ScrollHost {
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_to(&self, y: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Animating,
}

#[derive(Clone, Copy, Debug)]
struct Snap {
    origin: f64,
    target: f64,
}

pub struct ScrollJack<H: ScrollHost> {
    host: H,
    config: ScrollJackConfig,
    num_items: usize,
    current_index: usize,
    is_animating: bool,
    frame: u32,
    first_time: bool,
    snap: Option<Snap>,
    on_scroll_progress: Box<dyn FnMut()>,
    on_index_change: Box<dyn FnMut(usize)>,
}

impl<H: ScrollHost> ScrollJack<H> {
    pub fn new(
        num_items: usize,
        active_index: usize,
        on_scroll_progress: impl FnMut() + 'static,
        on_index_change: impl FnMut(usize) + 'static,
        host: H,
    ) -> Self {
        Self::with_config(
            ScrollJackConfig::default(),
            num_items,
            active_index,
            on_scroll_progress,
            on_index_change,
            host,
        )
    }

    /// Build the controller and perform the initial sync to `active_index`.
    /// A non-zero initial index is applied as a direct jump; either way the
    /// mount sync counts as the first transition, so later changes animate.
    pub fn with_config(
        config: ScrollJackConfig,
        num_items: usize,
        active_index: usize,
        on_scroll_progress: impl FnMut() + 'static,
        on_index_change: impl FnMut(usize) + 'static,
        host: H,
    ) -> Self {
        let mut jack = Self {
            host,
            config,
            num_items,
            current_index: 0,
            is_animating: false,
            frame: 0,
            first_time: true,
            snap: None,
            on_scroll_progress: Box::new(on_scroll_progress),
            on_index_change: Box::new(on_index_change),
        };
        jack.set_active_index(active_index);
        jack.first_time = false;
        jack
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.is_animating {
            ScrollPhase::Animating
        } else {
            ScrollPhase::Idle
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_first_time(&self) -> bool {
        self.first_time
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    fn clamp_index(&self, index: i64) -> usize {
        let max = self.num_items.saturating_sub(1) as i64;
        index.clamp(0, max) as usize
    }

    #[inline]
    fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.host.viewport_height()
    }

    /// Wheel input. Steps one section in the direction of `delta_y` and
    /// starts the snap; returns whether an animation was started.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if delta_y.abs() < self.config.wheel_threshold {
            return false;
        }
        if self.is_animating {
            return false;
        }
        let direction: i64 = if delta_y > 0.0 { 1 } else { -1 };
        let next = self.clamp_index(self.current_index as i64 + direction);
        self.frame = 0;
        self.current_index = next;
        self.first_time = false;
        (self.on_index_change)(next);
        self.begin_snap(next);
        true
    }

    /// Index changed by navigation rather than by scrolling.
    ///
    /// Only the initial sync in `with_config` jumps directly; later changes animate.
    /// Ignored when equal to the current index or while a snap is running.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        let index = self.clamp_index(index.min(i64::MAX as usize) as i64);
        if index == self.current_index {
            return false;
        }
        if self.is_animating {
            log::debug!("[scroll] index {} rejected; snap in flight", index);
            return false;
        }
        let animate = !self.first_time;
        self.first_time = false;
        self.frame = 0;
        self.current_index = index;
        if animate {
            self.begin_snap(index);
        } else {
            self.host.scroll_to(self.offset_of(index));
        }
        true
    }

    /// Re-align to the current section after the viewport height changed.
    pub fn on_resize(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.frame = 0;
        self.snap = None;
        self.first_time = false;
        self.host.scroll_to(self.offset_of(self.current_index));
        true
    }

    /// Advance the running snap by one frame. Returns true while another
    /// tick should be scheduled.
    pub fn tick(&mut self) -> bool {
        let Some(snap) = self.snap else {
            return false;
        };
        if self.frame > self.config.snap_duration {
            self.finish();
            return false;
        }
        let progress = ease_in_out_quad(self.frame as f64, 0.0, 1.0, self.config.snap_duration as f64);
        self.host.scroll_to(interpolate(snap.origin, snap.target, progress));
        (self.on_scroll_progress)();
        self.frame += 1;
        true
    }

    /// Drop any running snap without moving the page.
    pub fn cancel(&mut self) {
        self.finish();
    }

    fn begin_snap(&mut self, index: usize) {
        self.is_animating = true;
        self.snap = Some(Snap {
            origin: self.host.scroll_y(),
            target: self.offset_of(index),
        });
        self.tick();
    }

    fn finish(&mut self) {
        self.snap = None;
        self.is_animating = false;
    }
}
