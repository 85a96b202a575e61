// Copyright 2025 the Glance Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::state::TransformState;

/// Notifications emitted by [`crate::ViewportTransform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// The transform changed; re-render with the carried state.
    TransformChanged(TransformState),
    /// A pan gesture started on a zoomed image.
    DragStart,
    /// The pointer was released.
    DragEnd,
}

/// Receives [`ViewportEvent`]s.
pub trait ViewportSink {
    /// Handles one event. Called synchronously from the engine method that
    /// produced it.
    fn emit(&mut self, event: ViewportEvent);
}

impl ViewportSink for Vec<ViewportEvent> {
    fn emit(&mut self, event: ViewportEvent) {
        self.push(event);
    }
}

/// Discards every event.
impl ViewportSink for () {
    fn emit(&mut self, _event: ViewportEvent) {}
}

impl<S: ViewportSink + ?Sized> ViewportSink for &mut S {
    fn emit(&mut self, event: ViewportEvent) {
        (**self).emit(event);
    }
}

/// Adapts a closure into a [`ViewportSink`].
#[derive(Clone, Copy, Debug)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(ViewportEvent)> ViewportSink for FnSink<F> {
    fn emit(&mut self, event: ViewportEvent) {
        (self.0)(event);
    }
}
