// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery behaviour through the [`Lightbox`] facade.

use lightbox_core::application::port::{LightboxDelegate, RenderSurface, VideoBackend};
use lightbox_core::config::{self, Config, GalleryConfig};
use lightbox_core::domain::gallery::PreloadRadius;
use lightbox_core::domain::media::{MediaItem, MediaUrl};
use lightbox_core::domain::video::SessionId;
use lightbox_core::gallery::GallerySettings;
use lightbox_core::{Collaborators, Lightbox, LightboxSettings};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Page(usize),
    NearRight,
    NearLeft,
    Updated,
    Dismiss,
    Materialize(usize),
    Evict(usize),
    Relayout(usize, usize),
    ScrollTo(usize),
    Open(String),
    Close(SessionId),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Call>>>);

impl Recorder {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl LightboxDelegate for Recorder {
    fn on_page_changed(&mut self, index: usize) {
        self.push(Call::Page(index));
    }

    fn on_will_dismiss(&mut self) {
        self.push(Call::Dismiss);
    }

    fn on_near_right_end(&mut self) {
        self.push(Call::NearRight);
    }

    fn on_near_left_end(&mut self) {
        self.push(Call::NearLeft);
    }

    fn on_sequence_updated(&mut self) {
        self.push(Call::Updated);
    }
}

impl RenderSurface for Recorder {
    fn materialize(&mut self, index: usize, _item: &MediaItem) {
        self.push(Call::Materialize(index));
    }

    fn evict(&mut self, index: usize) {
        self.push(Call::Evict(index));
    }

    fn relayout(&mut self, page_count: usize, current_page: usize) {
        self.push(Call::Relayout(page_count, current_page));
    }

    fn scroll_to(&mut self, index: usize) {
        self.push(Call::ScrollTo(index));
    }
}

impl VideoBackend for Recorder {
    fn open(&mut self, _session: SessionId, url: &MediaUrl, _muted: bool) {
        self.push(Call::Open(url.to_string()));
    }

    fn play(&mut self, _session: SessionId) {}

    fn pause(&mut self, _session: SessionId) {}

    fn seek(&mut self, _session: SessionId, _position_secs: f64) {}

    fn set_muted(&mut self, _session: SessionId, _muted: bool) {}

    fn close(&mut self, session: SessionId) {
        self.push(Call::Close(session));
    }
}

struct Harness {
    lightbox: Lightbox,
    delegate: Recorder,
    surface: Recorder,
    video: Recorder,
}

fn harness(items: Vec<MediaItem>, radius: usize, start_index: usize) -> Harness {
    let delegate = Recorder::default();
    let surface = Recorder::default();
    let video = Recorder::default();
    let settings = LightboxSettings {
        gallery: GallerySettings {
            preload_radius: PreloadRadius::new(radius),
            start_index,
            ..GallerySettings::default()
        },
        ..LightboxSettings::default()
    };
    let lightbox = Lightbox::new(
        items,
        settings,
        Collaborators {
            delegate: Box::new(delegate.clone()),
            surface: Box::new(surface.clone()),
            video: Box::new(video.clone()),
            ..Collaborators::default()
        },
    );
    Harness {
        lightbox,
        delegate,
        surface,
        video,
    }
}

fn images(names: &[&str]) -> Vec<MediaItem> {
    names
        .iter()
        .map(|name| MediaItem::remote_image(format!("https://cdn/{name}.jpg")))
        .collect()
}

fn caption_of(lightbox: &Lightbox) -> Option<String> {
    lightbox
        .current_item()
        .and_then(|item| item.title.clone())
}

#[test]
fn opening_materializes_window_around_start() {
    let h = harness(images(&["a", "b", "c", "d", "e"]), 1, 0);
    assert_eq!(h.lightbox.current_page(), 0);
    assert_eq!(h.lightbox.materialized_indices(), vec![0, 1]);
    assert!(!h.lightbox.seen_last());
    assert_eq!(
        h.surface.take(),
        vec![Call::ScrollTo(0), Call::Materialize(0), Call::Materialize(1)]
    );
    assert_eq!(h.delegate.take(), vec![Call::Page(0)]);
}

#[test]
fn jumping_to_last_page_moves_window_and_latches_seen_last() {
    let mut h = harness(images(&["a", "b", "c", "d", "e"]), 1, 0);
    h.surface.take();
    h.delegate.take();

    h.lightbox.go_to(4);
    assert_eq!(h.lightbox.materialized_indices(), vec![3, 4]);
    assert!(h.lightbox.seen_last());
    assert_eq!(
        h.surface.take(),
        vec![
            Call::ScrollTo(4),
            Call::Evict(0),
            Call::Evict(1),
            Call::Materialize(3),
            Call::Materialize(4)
        ]
    );
    assert_eq!(h.delegate.take(), vec![Call::Page(4), Call::NearRight]);

    // Placeholders outside the window
    assert!(h.lightbox.page(0).is_some_and(MediaItem::is_placeholder));
    assert!(h.lightbox.page(4).is_some_and(|item| !item.is_placeholder()));
}

#[test]
fn seen_last_never_resets() {
    let mut h = harness(images(&["a", "b", "c"]), 1, 0);
    h.lightbox.go_to(2);
    assert!(h.lightbox.seen_last());

    h.lightbox.previous();
    h.lightbox.previous();
    assert_eq!(h.lightbox.current_page(), 0);
    assert!(h.lightbox.seen_last());

    h.lightbox.append(images(&["d", "e"]));
    assert!(h.lightbox.seen_last());
    assert!(h.lightbox.page_info().seen_last);
}

#[test]
fn out_of_range_jump_is_ignored() {
    let mut h = harness(images(&["a", "b"]), 1, 0);
    h.delegate.take();
    h.lightbox.go_to(7);
    assert_eq!(h.lightbox.current_page(), 0);
    assert!(h.delegate.take().is_empty());
}

#[test]
fn drag_past_left_end_notifies_left_edge() {
    let mut h = harness(images(&["a", "b", "c", "d", "e", "f", "g", "h"]), 1, 5);
    h.delegate.take();
    h.surface.take();

    h.lightbox.drag_settled(-2);
    assert_eq!(h.lightbox.current_page(), 0);
    assert_eq!(h.delegate.take(), vec![Call::Page(0), Call::NearLeft]);
    // Drags never ask the surface to scroll
    assert!(!h.surface.take().iter().any(|c| matches!(c, Call::ScrollTo(_))));
}

#[test]
fn head_insert_waits_for_drag_to_end() {
    let items = vec![
        MediaItem::remote_image("https://cdn/a.jpg").with_title("a"),
        MediaItem::remote_image("https://cdn/b.jpg").with_title("b"),
        MediaItem::remote_image("https://cdn/c.jpg").with_title("c"),
    ];
    let mut h = harness(items, 1, 1);
    h.delegate.take();
    h.surface.take();

    h.lightbox.drag_began();
    h.lightbox.insert_at_head(images(&["x", "y"]));
    assert_eq!(h.lightbox.page_count(), 3);
    assert_eq!(h.lightbox.current_page(), 1);
    assert!(h.delegate.take().is_empty());

    h.lightbox.drag_ended();
    assert_eq!(h.lightbox.page_count(), 5);
    assert_eq!(h.lightbox.current_page(), 3);
    assert_eq!(caption_of(&h.lightbox).as_deref(), Some("b"));
    assert_eq!(h.lightbox.materialized_indices(), vec![2, 3, 4]);

    // Reindexing reports the new page but never edge proximity
    assert_eq!(h.delegate.take(), vec![Call::Page(3), Call::Updated]);
    assert_eq!(h.surface.take().first(), Some(&Call::Relayout(5, 3)));
}

#[test]
fn head_insert_without_drag_keeps_item_in_view() {
    let items = vec![
        MediaItem::remote_image("https://cdn/a.jpg").with_title("a"),
        MediaItem::remote_image("https://cdn/b.jpg").with_title("b"),
    ];
    let mut h = harness(items, 1, 1);
    h.lightbox.insert_at_head(images(&["x"]));
    assert_eq!(h.lightbox.current_page(), 2);
    assert_eq!(caption_of(&h.lightbox).as_deref(), Some("b"));
}

#[test]
fn deleting_the_only_item_dismisses() {
    let mut h = harness(images(&["only"]), 1, 0);
    h.delegate.take();

    h.lightbox.delete_current();
    assert_eq!(h.lightbox.page_count(), 0);
    assert!(!h.lightbox.is_presented());
    assert_eq!(h.delegate.take(), vec![Call::Updated, Call::Dismiss]);

    // Nothing left to settle
    h.lightbox.advance(Duration::from_secs(5));
    assert!(h.delegate.take().is_empty());
}

#[test]
fn deleting_current_page_moves_forward_then_settles() {
    let items = vec![
        MediaItem::remote_image("https://cdn/a.jpg").with_title("a"),
        MediaItem::remote_image("https://cdn/b.jpg").with_title("b"),
        MediaItem::remote_image("https://cdn/c.jpg").with_title("c"),
    ];
    let mut h = harness(items, 1, 1);
    h.delegate.take();

    h.lightbox.delete_current();
    assert_eq!(h.lightbox.current_page(), 2);
    assert!(h.lightbox.has_pending_delete());
    assert_eq!(h.lightbox.page_count(), 3);

    // A second delete while settling is ignored
    h.lightbox.delete(0);
    h.lightbox.advance(Duration::from_millis(499));
    assert_eq!(h.lightbox.page_count(), 3);

    h.lightbox.advance(Duration::from_millis(1));
    assert!(!h.lightbox.has_pending_delete());
    assert_eq!(h.lightbox.page_count(), 2);
    assert_eq!(h.lightbox.current_page(), 1);
    assert_eq!(caption_of(&h.lightbox).as_deref(), Some("c"));
    assert_eq!(h.delegate.take().last(), Some(&Call::Updated));
}

#[test]
fn deleting_last_page_moves_back() {
    let mut h = harness(images(&["a", "b", "c"]), 1, 2);
    h.lightbox.delete_current();
    assert_eq!(h.lightbox.current_page(), 1);
    h.lightbox.advance(Duration::from_secs(1));
    assert_eq!(h.lightbox.page_count(), 2);
    assert_eq!(h.lightbox.current_page(), 1);
}

#[test]
fn append_to_empty_gallery_opens_first_page() {
    let mut h = harness(Vec::new(), 1, 0);
    assert_eq!(h.lightbox.page_info().label, "");
    h.delegate.take();

    h.lightbox.append(images(&["a", "b"]));
    assert_eq!(h.lightbox.current_page(), 0);
    assert_eq!(h.lightbox.materialized_indices(), vec![0, 1]);
    let calls = h.delegate.take();
    assert_eq!(calls.first(), Some(&Call::Page(0)));
    assert_eq!(calls.last(), Some(&Call::Updated));
    assert_eq!(h.lightbox.page_info().label, "1 / 2");
}

#[test]
fn video_hand_off_closes_old_session_before_opening_new() {
    let items = vec![
        MediaItem::remote_video("https://cdn/a.mp4"),
        MediaItem::remote_video("https://cdn/b.mp4"),
    ];
    let mut h = harness(items, 1, 0);
    let first = h.lightbox.player().session_id();
    assert_eq!(h.video.take(), vec![Call::Open("https://cdn/a.mp4".into())]);

    h.lightbox.next();
    let Some(first) = first else {
        panic!("first video should have a session");
    };
    assert_eq!(
        h.video.take(),
        vec![Call::Close(first), Call::Open("https://cdn/b.mp4".into())]
    );
    assert_ne!(h.lightbox.player().session_id(), Some(first));
}

#[test]
fn same_video_url_does_not_restart() {
    let items = vec![
        MediaItem::remote_video("https://cdn/a.mp4").with_title("first"),
        MediaItem::remote_image("https://cdn/b.jpg"),
    ];
    let mut h = harness(items, 1, 0);
    let session = h.lightbox.player().session_id();
    h.video.take();

    h.lightbox
        .replace(0, MediaItem::remote_video("https://cdn/a.mp4").with_title("renamed"));
    assert!(h.video.take().is_empty());
    assert_eq!(h.lightbox.player().session_id(), session);
    assert_eq!(caption_of(&h.lightbox).as_deref(), Some("renamed"));
}

#[test]
fn leaving_a_video_page_tears_the_session_down() {
    let items = vec![
        MediaItem::remote_video("https://cdn/a.mp4"),
        MediaItem::remote_image("https://cdn/b.jpg"),
    ];
    let mut h = harness(items, 1, 0);
    h.lightbox.next();
    assert!(h.lightbox.player().session().is_none());
    assert!(matches!(h.video.take().last(), Some(Call::Close(_))));
}

#[test]
fn radius_zero_materializes_everything() {
    let mut h = harness(images(&["a", "b", "c", "d"]), 0, 0);
    assert_eq!(h.lightbox.materialized_indices(), vec![0, 1, 2, 3]);
    h.lightbox.set_preload_radius(PreloadRadius::new(1));
    assert_eq!(h.lightbox.materialized_indices(), vec![0, 1]);
}

#[test]
fn close_notifies_once() {
    let mut h = harness(images(&["a"]), 1, 0);
    h.delegate.take();
    h.lightbox.close();
    h.lightbox.close();
    assert_eq!(h.delegate.take(), vec![Call::Dismiss]);
}

#[test]
fn settings_come_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        gallery: GalleryConfig {
            preload_radius: Some(2),
            start_index: Some(3),
            ..GalleryConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    let h = {
        let settings = LightboxSettings::from_config(&loaded);
        Lightbox::new(
            images(&["a", "b", "c", "d", "e", "f", "g"]),
            settings,
            Collaborators::default(),
        )
    };
    assert_eq!(h.current_page(), 3);
    assert_eq!(h.materialized_indices(), vec![1, 2, 3, 4, 5]);
}
