use super::*;

fn page_layout() -> SectionLayout {
    SectionLayout::new()
        .with_top(SectionId::Home, 0.0)
        .with_top(SectionId::About, 600.0)
        .with_top(SectionId::Projects, 1400.0)
        .with_top(SectionId::Skills, 2200.0)
        .with_top(SectionId::Contact, 2900.0)
}

#[test]
fn top_of_page_is_home_without_scroll_control() {
    let state = track_scroll(0.0, &page_layout());
    assert_eq!(state.active_section, SectionId::Home);
    assert!(!state.past_threshold);
}

#[test]
fn reaching_about_activates_it_and_shows_scroll_control() {
    let state = track_scroll(1000.0, &page_layout());
    assert_eq!(state.active_section, SectionId::About);
    assert!(state.past_threshold);
}

#[test]
fn threshold_is_strictly_greater_than_300() {
    let layout = page_layout();
    for (offset, expected) in [(299.0, false), (300.0, false), (300.5, true), (5000.0, true)] {
        assert_eq!(
            track_scroll(offset, &layout).past_threshold,
            expected,
            "offset {offset}"
        );
    }
}

#[test]
fn section_activates_exactly_200px_before_its_top() {
    let layout = page_layout();
    assert_eq!(track_scroll(399.0, &layout).active_section, SectionId::Home);
    assert_eq!(track_scroll(400.0, &layout).active_section, SectionId::About);
    assert_eq!(
        track_scroll(2700.0, &layout).active_section,
        SectionId::Contact
    );
}

#[test]
fn active_section_is_last_qualifying_in_document_order() {
    let layout = page_layout();
    for offset in (0..4000).step_by(50).map(|y| y as f32) {
        let expected = SectionId::ALL
            .into_iter()
            .filter(|id| {
                layout
                    .top(*id)
                    .is_some_and(|top| top - SECTION_ACTIVATION_OFFSET_PX <= offset)
            })
            .last()
            .unwrap_or(SectionId::Home);
        assert_eq!(track_scroll(offset, &layout).active_section, expected);
    }
}

#[test]
fn later_section_wins_when_tops_overlap() {
    let layout = SectionLayout::new()
        .with_top(SectionId::About, 500.0)
        .with_top(SectionId::Projects, 500.0);
    assert_eq!(
        track_scroll(300.0, &layout).active_section,
        SectionId::Projects
    );
}

#[test]
fn offset_before_every_section_falls_back_to_home() {
    let layout = SectionLayout::new().with_top(SectionId::About, 900.0);
    assert_eq!(track_scroll(100.0, &layout).active_section, SectionId::Home);
}

#[test]
fn missing_sections_are_skipped() {
    let layout = SectionLayout::new()
        .with_top(SectionId::Home, 0.0)
        .with_top(SectionId::Skills, 800.0);
    assert_eq!(track_scroll(700.0, &layout).active_section, SectionId::Skills);
    assert_eq!(
        track_scroll(10_000.0, &SectionLayout::new()).active_section,
        SectionId::Home
    );
}

#[test]
fn tracker_sees_current_sample_on_attach() {
    let viewport = ViewportBroadcaster::new();
    viewport.publish(ViewportSample {
        offset: 1000.0,
        layout: page_layout(),
    });

    let mut tracker = ScrollTracker::attach(&viewport);
    let state = tracker.poll().expect("initial sample");
    assert_eq!(state.active_section, SectionId::About);
    assert_eq!(tracker.poll(), None);
}

#[test]
fn tracker_reports_only_new_samples() {
    let viewport = ViewportBroadcaster::new();
    let mut tracker = ScrollTracker::attach(&viewport);
    let _ = tracker.poll();

    let sample = ViewportSample {
        offset: 2300.0,
        layout: page_layout(),
    };
    assert!(viewport.publish(sample.clone()));
    assert!(!viewport.publish(sample));
    assert_eq!(
        tracker.poll().map(|state| state.active_section),
        Some(SectionId::Skills)
    );
    assert_eq!(tracker.poll(), None);
}

#[test]
fn detach_unsubscribes_from_viewport() {
    let viewport = ViewportBroadcaster::new();
    let mut tracker = ScrollTracker::attach(&viewport);
    assert_eq!(viewport.subscriber_count(), 1);

    tracker.detach();
    assert_eq!(viewport.subscriber_count(), 0);
    viewport.publish(ViewportSample {
        offset: 900.0,
        layout: page_layout(),
    });
    assert_eq!(tracker.poll(), None);
    assert!(!tracker.is_attached());
}

#[test]
fn closed_viewport_drops_subscription() {
    let viewport = ViewportBroadcaster::new();
    let mut tracker = ScrollTracker::attach(&viewport);
    let _ = tracker.poll();
    drop(viewport);
    assert_eq!(tracker.poll(), None);
    assert!(!tracker.is_attached());
}

struct FixedViewport(watch::Sender<ViewportSample>);

impl ScrollObserver for FixedViewport {
    fn subscribe(&self) -> watch::Receiver<ViewportSample> {
        self.0.subscribe()
    }
}

#[test]
fn any_observer_can_drive_the_tracker() {
    let (tx, _rx) = watch::channel(ViewportSample {
        offset: 2950.0,
        layout: page_layout(),
    });
    let viewport = FixedViewport(tx);
    let mut tracker = ScrollTracker::attach(&viewport);
    assert_eq!(
        tracker.poll(),
        Some(ScrollState {
            active_section: SectionId::Contact,
            past_threshold: true,
        })
    );
}
