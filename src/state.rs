#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Idle,      // Nothing in flight, requests are accepted
    Animating, // A cross-fade is running, further requests are dropped
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Lifecycle {
    Created,  // Built but not mounted yet
    Mounted,  // Layout attached, timers may run
    TornDown, // Timers cancelled, resize observation detached
}
