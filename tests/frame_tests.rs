use gpui_sortviz::data_types::{EventKind, RunOutcome, RunStatistics, StepEvent};
use gpui_sortviz::{BarFrame, BarState, FrameSink, StepConsumer};

#[test]
fn test_event_kind_to_bar_state() {
    assert_eq!(BarState::from(EventKind::Compare), BarState::Comparing);
    assert_eq!(BarState::from(EventKind::Swap), BarState::Swapping);
    assert_eq!(BarState::from(EventKind::MarkSorted), BarState::Sorted);
    assert_eq!(BarState::from(EventKind::MarkPivot), BarState::Pivot);
    for kind in [EventKind::Merge, EventKind::Insert, EventKind::Shift] {
        assert_eq!(BarState::from(kind), BarState::Current);
    }
}

#[test]
fn test_every_event_kind_highlights_its_bars() {
    for kind in EventKind::ALL {
        let frame = BarFrame::from_event(&StepEvent::new(kind, vec![2], vec![7, 8, 9]));
        assert_eq!(frame.kind, Some(kind));
        assert_eq!(frame.states[2], BarState::from(kind));
        assert_eq!(frame.count(BarState::Default), 2);
    }
}

#[test]
fn test_frame_highlights_event_indices() {
    let event = StepEvent::new(EventKind::Compare, vec![1, 3], vec![4, 3, 2, 1]);
    let frame = BarFrame::from_event(&event);

    assert_eq!(frame.values, vec![4, 3, 2, 1]);
    assert_eq!(
        frame.states,
        vec![
            BarState::Default,
            BarState::Comparing,
            BarState::Default,
            BarState::Comparing
        ]
    );
    assert_eq!(frame.kind, Some(EventKind::Compare));
}

#[test]
fn test_out_of_range_indices_are_ignored() {
    let event = StepEvent::new(EventKind::Swap, vec![0, 9], vec![1, 2, 3]);
    let frame = BarFrame::from_event(&event);
    assert_eq!(frame.len(), 3);
    assert_eq!(frame.count(BarState::Swapping), 1);
    assert_eq!(frame.count(BarState::Default), 2);
}

#[test]
fn test_idle_and_mark_all_sorted() {
    let mut frame = BarFrame::idle(&[5, 6, 7]);
    assert_eq!(frame.count(BarState::Default), 3);
    assert!(frame.kind.is_none());

    frame.mark_all_sorted();
    assert_eq!(frame.count(BarState::Sorted), 3);
    assert!(BarFrame::<i64>::idle(&[]).is_empty());
}

#[test]
fn test_sink_keeps_only_the_latest_frame() {
    let sink = FrameSink::new();
    let mut producer = sink.clone();
    assert!(sink.take().is_none());

    producer.on_step(StepEvent::new(EventKind::Compare, vec![0, 1], vec![2, 1]));
    producer.on_step(StepEvent::new(EventKind::Swap, vec![0, 1], vec![1, 2]));
    assert_eq!(sink.published(), 2);

    let frame = sink.take().unwrap();
    assert_eq!(frame.kind, Some(EventKind::Swap));
    assert_eq!(frame.values, vec![1, 2]);
    assert!(sink.take().is_none());
    assert_eq!(sink.latest().map(|f| f.values), Some(vec![1, 2]));
}

#[test]
fn test_sink_marks_everything_sorted_on_completion_only() {
    let sink = FrameSink::new();
    let mut producer = sink.clone();
    producer.on_step(StepEvent::new(EventKind::Compare, vec![0, 1], vec![1, 2, 3]));
    sink.take();

    producer.on_finished(&RunOutcome::Cancelled(RunStatistics::new(3)));
    assert!(sink.take().is_none());

    let sink = FrameSink::new();
    let mut producer = sink.clone();
    producer.on_step(StepEvent::new(EventKind::Compare, vec![0, 1], vec![1, 2, 3]));
    producer.on_finished(&RunOutcome::Completed(RunStatistics::new(3)));

    let frame = sink.take().unwrap();
    assert_eq!(frame.count(BarState::Sorted), 3);
    assert_eq!(frame.kind, Some(EventKind::MarkSorted));
    assert!(sink.outcome().is_some());
}
