use super::*;

#[test]
fn burst_of_schedules_yields_one_latest_value() {
    let mut frames = FrameCoalescer::new();
    assert!(!frames.schedule(1));
    assert!(frames.schedule(2));
    assert!(frames.schedule(3));
    assert_eq!(frames.take(), Some(3));
    assert_eq!(frames.take(), None);
}

#[test]
fn cancel_drops_an_in_flight_value() {
    let mut frames = FrameCoalescer::new();
    frames.schedule(42);
    assert!(frames.is_pending());
    frames.cancel();
    assert!(!frames.is_pending());
    assert_eq!(frames.take(), None);
}

#[test]
fn empty_coalescer_is_inert() {
    let mut frames: FrameCoalescer<f32> = FrameCoalescer::default();
    assert!(!frames.is_pending());
    assert_eq!(frames.take(), None);
    frames.cancel();
    assert_eq!(frames.take(), None);
}
