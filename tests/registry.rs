mod common;

use common::{coordinator_with, descr, keys, recording_coordinator, take, Event};
use lightbox::model::{ImageDescriptor, ImageKey, ImageSource};
use lightbox::Coordinator;

#[test]
fn test_next_id_strictly_increasing() {
    let mut coordinator: Coordinator<ImageSource> = Coordinator::new();
    let ids: Vec<u64> = (0..50).map(|_| coordinator.next_id().0).collect();

    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "{:?} not increasing", pair);
    }
}

#[test]
fn test_next_id_is_per_instance() {
    let mut a: Coordinator<ImageSource> = Coordinator::new();
    let mut b: Coordinator<ImageSource> = Coordinator::new();
    a.next_id();
    a.next_id();
    assert_eq!(b.next_id(), ImageKey(1));
}

#[test]
fn test_register_mints_keys_in_order() {
    let mut coordinator = Coordinator::new();
    let a = coordinator.register(ImageSource::new("a.jpg"));
    let b = coordinator.register(ImageSource::new("b.jpg"));

    assert!(b > a);
    assert_eq!(coordinator.images()[0].payload.src, "a.jpg");
    assert_eq!(coordinator.images()[1].payload.src, "b.jpg");
}

#[test]
fn test_minted_keys_skip_caller_keys() {
    let mut coordinator = Coordinator::new();
    coordinator.update(descr(40));
    let minted = coordinator.register(ImageSource::new("x.jpg"));
    assert!(minted > ImageKey(40));
}

#[test]
fn test_max_caller_key_keeps_next_id_increasing() {
    let mut coordinator: Coordinator<ImageSource> = Coordinator::new();
    let first = coordinator.next_id();
    coordinator.update(descr(u64::MAX));

    let second = coordinator.next_id();
    let third = coordinator.next_id();
    assert!(second > first);
    assert!(third > second);
    assert_ne!(second, ImageKey(u64::MAX));
}

#[test]
fn test_register_after_max_caller_key_appends() {
    let mut coordinator = Coordinator::new();
    coordinator.update(descr(u64::MAX));
    let minted = coordinator.register(ImageSource::new("next.jpg"));

    assert_ne!(minted, ImageKey(u64::MAX));
    assert_eq!(keys(&coordinator), vec![u64::MAX, minted.0]);
}

#[test]
fn test_update_appends_new_keys() {
    let (coordinator, _) = coordinator_with(&[1, 2, 3]);
    assert_eq!(keys(&coordinator), vec![1, 2, 3]);
}

#[test]
fn test_update_replaces_in_place() {
    let (mut coordinator, _) = coordinator_with(&[1, 2, 3]);

    coordinator.update(ImageDescriptor::new(
        ImageKey(2),
        ImageSource::new("replaced.jpg"),
    ));

    assert_eq!(keys(&coordinator), vec![1, 2, 3]);
    assert_eq!(coordinator.images()[1].payload.src, "replaced.jpg");
}

#[test]
fn test_update_last_write_wins() {
    let (mut coordinator, _) = coordinator_with(&[1]);
    coordinator.update(ImageDescriptor::new(ImageKey(1), ImageSource::new("a")));
    coordinator.update(ImageDescriptor::new(ImageKey(1), ImageSource::new("b")));

    assert_eq!(coordinator.images().len(), 1);
    assert_eq!(coordinator.images()[0].payload.src, "b");
}

#[test]
fn test_remove_preserves_order() {
    let (mut coordinator, _) = coordinator_with(&[1, 2, 3, 4]);
    coordinator.remove(ImageKey(2));
    assert_eq!(keys(&coordinator), vec![1, 3, 4]);
}

#[test]
fn test_remove_absent_key_is_noop() {
    let (mut coordinator, _) = coordinator_with(&[1, 2]);
    coordinator.change_index(1);
    coordinator.remove(ImageKey(99));

    assert_eq!(keys(&coordinator), vec![1, 2]);
    assert_eq!(coordinator.index(), 1);
}

#[test]
fn test_remove_clamps_index_past_end() {
    let (mut coordinator, _) = coordinator_with(&[1, 2, 3]);
    coordinator.change_index(2);
    coordinator.remove(ImageKey(3));
    assert_eq!(coordinator.index(), 1);
}

#[test]
fn test_remove_keeps_index_when_still_valid() {
    let (mut coordinator, _) = coordinator_with(&[1, 2, 3]);
    coordinator.change_index(1);
    coordinator.remove(ImageKey(1));
    // min(len - 1, index) = min(1, 1)
    assert_eq!(coordinator.index(), 1);
}

#[test]
fn test_remove_last_image_resets_index() {
    let (mut coordinator, _) = coordinator_with(&[1]);
    coordinator.remove(ImageKey(1));
    assert!(coordinator.images().is_empty());
    assert_eq!(coordinator.index(), 0);
}

#[test]
fn test_registry_changes_notify_once_each() {
    let (mut coordinator, log) = recording_coordinator();
    coordinator.update(descr(1));
    coordinator.update(descr(2));
    coordinator.update(descr(1));
    coordinator.remove(ImageKey(5));
    coordinator.remove(ImageKey(1));

    let events = take(&log);
    assert_eq!(events.len(), 5);
    assert!(events
        .iter()
        .all(|e| matches!(e, Event::StateChange { .. })));
    assert_eq!(
        events.last(),
        Some(&Event::StateChange {
            keys: vec![ImageKey(2)],
            visible: false,
            index: 0,
        })
    );
}

#[test]
fn test_registry_changes_do_not_touch_visibility() {
    let (mut coordinator, _) = coordinator_with(&[1, 2]);
    coordinator.show(ImageKey(2));
    coordinator.update(descr(3));
    coordinator.remove(ImageKey(1));
    assert!(coordinator.is_visible());

    coordinator.close();
    coordinator.update(descr(4));
    assert!(!coordinator.is_visible());
}

/// Deterministic churn: random-ish update/remove sequence checked against a
/// simple model
#[test]
fn test_churn_matches_reference() {
    let (mut coordinator, _) = recording_coordinator();
    let mut expected: Vec<u64> = Vec::new();
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;

    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let key = seed % 16;

        if seed % 3 == 0 {
            coordinator.remove(ImageKey(key));
            expected.retain(|&k| k != key);
            if !expected.is_empty() {
                assert!(coordinator.index() < expected.len());
            }
        } else {
            coordinator.update(descr(key));
            if !expected.contains(&key) {
                expected.push(key);
            }
        }

        if seed % 5 == 0 && !expected.is_empty() {
            coordinator.change_index((seed as usize / 7) % expected.len());
        }
    }

    assert_eq!(keys(&coordinator), expected);
}
