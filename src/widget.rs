use std::time::Duration;

use tracing::debug;

use crate::autoplay::{self, AutoplayTimer};
use crate::config::FadeZoomConfig;
use crate::layout::Sizer;
use crate::navigation::{self, Direction};
use crate::render::RenderTarget;
use crate::state::{Lifecycle, TransitionState};
use crate::transition::{Completed, TransitionEngine};
use crate::view::FadeZoomView;

/// Called with `(old, new)` once a transition has been committed.
pub type ChangeCallback = Box<dyn FnMut(usize, usize)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Over,
    Leave,
}

/// The fade-zoom carousel.
///
/// Owns its render target, the single autoplay timer and the single
/// in-flight transition. Time only moves when the host calls [`tick`],
/// once per rendered frame.
///
/// [`tick`]: FadeZoom::tick
pub struct FadeZoom<T: RenderTarget> {
    config: FadeZoomConfig,
    target: T,
    index: usize,
    lifecycle: Lifecycle,
    sizer: Sizer,
    timer: AutoplayTimer,
    engine: TransitionEngine,
    on_change: Option<ChangeCallback>,
}

impl<T: RenderTarget> FadeZoom<T> {
    pub fn new(config: FadeZoomConfig, target: T) -> Self {
        let index = navigation::starting_index(target.panel_count(), config.default_index);
        Self {
            config,
            target,
            index,
            lifecycle: Lifecycle::Created,
            sizer: Sizer::default(),
            timer: AutoplayTimer::default(),
            engine: TransitionEngine::default(),
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, callback: impl FnMut(usize, usize) + 'static) -> Self {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(usize, usize) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.target.panel_count()
    }

    pub fn config(&self) -> &FadeZoomConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn state(&self) -> TransitionState {
        self.engine.state()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Delay left before autoplay moves on, if a timer is pending.
    pub fn autoplay_remaining(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    pub fn view(&self) -> FadeZoomView {
        FadeZoomView::build(&self.config, self.index, self.count())
    }

    /// Mount: lay the panels out at `width`, start observing resizes, show
    /// the starting slide and arm autoplay.
    pub fn start(&mut self, width: f32) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        debug!(index = self.index, panels = self.count(), "carousel mounted");

        self.sizer.observe();
        self.sizer.apply(width, &mut self.target);
        self.sync_panels();
        self.rearm_autoplay();
    }

    /// Unmount: cancel the timer, drop any running transition and stop
    /// observing resizes. The widget is inert afterwards.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.engine.cancel();
        self.sizer.unobserve();
        self.lifecycle = Lifecycle::TornDown;
        debug!(index = self.index, "carousel torn down");
    }

    /// Container size-change notification.
    pub fn resize(&mut self, width: f32) {
        self.sizer.on_resize(width, &mut self.target);
    }

    /// Advance one frame.
    pub fn tick(&mut self, dt: Duration) {
        if self.lifecycle != Lifecycle::Mounted {
            return;
        }
        match self.engine.step(dt, &mut self.target) {
            Some(done) => self.complete(done),
            None => {
                if self.timer.advance(dt) {
                    self.next();
                }
            }
        }
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        if self.lifecycle != Lifecycle::Mounted {
            return;
        }
        match event {
            PointerEvent::Enter | PointerEvent::Over => {
                if self.config.pause_on_hover {
                    self.timer.cancel();
                }
            }
            PointerEvent::Leave => {
                if self.config.pause_on_hover && self.config.autoplay {
                    self.timer.arm(self.config.duration);
                }
            }
        }
    }

    /// Returns whether a transition was started.
    pub fn next(&mut self) -> bool {
        match navigation::next_index(self.index, self.count(), self.config.infinite) {
            Some(to) => self.transition_to(to),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match navigation::previous_index(self.index, self.count(), self.config.infinite) {
            Some(to) => self.transition_to(to),
            None => false,
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.transition_to(index)
    }

    /// Arrow click, resolved through the arrow's `data-type`.
    pub fn click_arrow(&mut self, data_type: Option<&str>) -> bool {
        match Direction::from_data_type(data_type) {
            Direction::Previous => self.previous(),
            Direction::Next => self.next(),
        }
    }

    /// Indicator click, resolved through the dot's `data-key`.
    pub fn click_indicator(&mut self, data_key: Option<&str>) -> bool {
        match navigation::indicator_target(data_key) {
            Some(key) if key != self.index => self.go_to(key),
            _ => false,
        }
    }

    fn transition_to(&mut self, to: usize) -> bool {
        if self.lifecycle != Lifecycle::Mounted {
            return false;
        }
        let params = self.config.transition_params();
        match self.engine.request(self.index, to, params, &self.target) {
            Some(_) => {
                self.timer.cancel();
                true
            }
            None => false,
        }
    }

    fn complete(&mut self, done: Completed) {
        self.index = done.to;
        self.sync_panels();
        self.rearm_autoplay();
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(done.from, done.to);
        }
    }

    fn sync_panels(&mut self) {
        for slide in 0..self.target.panel_count() {
            let current = slide == self.index;
            self.target.set_opacity(slide, if current { 1.0 } else { 0.0 });
            self.target.set_active(slide, current);
        }
    }

    fn rearm_autoplay(&mut self) {
        let advance = autoplay::should_advance(
            self.config.autoplay,
            self.config.infinite,
            self.index,
            self.count(),
        );
        if advance {
            self.timer.arm(self.config.duration);
        } else {
            self.timer.cancel();
        }
    }
}
