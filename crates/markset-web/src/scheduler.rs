//! One-way tip notifications.
//!
//! The translator attaches a tip to an element and then tells a
//! [`TipScheduler`] about it. Presentation (delays, placement, dismissal) is
//! entirely the scheduler's business; the translator never waits on it and
//! never inspects a result.

use std::sync::mpsc::Sender;

use crate::element::Element;

/// Receives elements that just had a tip attached.
pub trait TipScheduler<E: ?Sized> {
    /// Notify the scheduler. Must not fail loudly.
    fn schedule(&self, element: &E);
}

impl<E: ?Sized, F> TipScheduler<E> for F
where
    F: Fn(&E),
{
    fn schedule(&self, element: &E) {
        self(element);
    }
}

/// Scheduler that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScheduler;

impl<E: ?Sized> TipScheduler<E> for NoopScheduler {
    fn schedule(&self, _element: &E) {}
}

/// Message sent over a channel for each scheduled tip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTip {
    /// The element's `id` attribute, if it has one.
    pub id: Option<String>,
    /// The tip as attached, range suffix included.
    pub tip: String,
}

/// Channel-backed scheduling: the presenter drains the receiving end.
impl<E: Element + ?Sized> TipScheduler<E> for Sender<ScheduledTip> {
    fn schedule(&self, element: &E) {
        let message = ScheduledTip {
            id: element.attribute("id"),
            tip: element.tip().unwrap_or_default(),
        };
        if self.send(message).is_err() {
            tracing::trace!("tip presenter disconnected; dropping tip");
        }
    }
}
