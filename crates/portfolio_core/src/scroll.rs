//! Viewport observation and derivation of the active section.
//!
//! The viewport is reached only through [`ScrollObserver`]. A subscription is
//! a `watch` receiver: the tracker always sees the latest sample, and dropping
//! the receiver is the unsubscribe.

use std::collections::BTreeMap;

use shared::domain::SectionId;
use tokio::sync::watch;

/// Offset past which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f32 = 300.0;
/// A section counts as reached this far before its top edge.
pub const SECTION_ACTIVATION_OFFSET_PX: f32 = 200.0;

/// Top edge of each rendered section, in content coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    tops: BTreeMap<SectionId, f32>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top(mut self, section: SectionId, top: f32) -> Self {
        self.set_top(section, top);
        self
    }

    pub fn set_top(&mut self, section: SectionId, top: f32) {
        self.tops.insert(section, top);
    }

    pub fn top(&self, section: SectionId) -> Option<f32> {
        self.tops.get(&section).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportSample {
    pub offset: f32,
    pub layout: SectionLayout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub active_section: SectionId,
    pub past_threshold: bool,
}

/// Pure scroll derivation. Later sections win when several qualify; sections
/// missing from `layout` are skipped.
pub fn track_scroll(offset: f32, layout: &SectionLayout) -> ScrollState {
    let mut current = SectionId::default();
    for section in SectionId::ALL {
        if let Some(top) = layout.top(section) {
            if offset >= top - SECTION_ACTIVATION_OFFSET_PX {
                current = section;
            }
        }
    }
    ScrollState {
        active_section: current,
        past_threshold: offset > SCROLL_TOP_THRESHOLD_PX,
    }
}

/// Source of viewport scroll notifications.
pub trait ScrollObserver {
    fn subscribe(&self) -> watch::Receiver<ViewportSample>;
}

/// Publishing side of a viewport, owned by whatever paints the page.
#[derive(Debug)]
pub struct ViewportBroadcaster {
    tx: watch::Sender<ViewportSample>,
}

impl Default for ViewportBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportBroadcaster {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewportSample::default());
        Self { tx }
    }

    /// Notifies subscribers only when the sample differs from the last one.
    pub fn publish(&self, sample: ViewportSample) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == sample {
                false
            } else {
                *current = sample;
                true
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl ScrollObserver for ViewportBroadcaster {
    fn subscribe(&self) -> watch::Receiver<ViewportSample> {
        self.tx.subscribe()
    }
}

#[derive(Debug)]
pub struct ScrollTracker {
    subscription: Option<watch::Receiver<ViewportSample>>,
}

impl ScrollTracker {
    pub fn attach(observer: &dyn ScrollObserver) -> Self {
        let mut subscription = observer.subscribe();
        // The viewport may already be scrolled when the component mounts.
        subscription.mark_changed();
        Self {
            subscription: Some(subscription),
        }
    }

    /// Derives scroll state from the newest unseen sample, if any.
    pub fn poll(&mut self) -> Option<ScrollState> {
        let subscription = self.subscription.as_mut()?;
        match subscription.has_changed() {
            Ok(true) => {
                let sample = subscription.borrow_and_update();
                Some(track_scroll(sample.offset, &sample.layout))
            }
            Ok(false) => None,
            Err(_) => {
                tracing::debug!("viewport closed; dropping scroll subscription");
                self.subscription = None;
                None
            }
        }
    }

    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
