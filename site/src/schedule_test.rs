use super::*;

#[test]
fn schedule_then_take_fires_once() {
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule(TimerKey::ResizeDebounce);
    assert!(scheduler.is_pending(&TimerKey::ResizeDebounce));
    assert!(scheduler.take(&handle));
    assert!(!scheduler.take(&handle));
    assert_eq!(scheduler.pending_count(), 0);
}

#[test]
fn rescheduling_supersedes_older_handle() {
    let mut scheduler = Scheduler::new();
    let first = scheduler.schedule(TimerKey::ResizeDebounce);
    let second = scheduler.schedule(TimerKey::ResizeDebounce);
    assert!(!scheduler.take(&first));
    assert!(scheduler.is_pending(&TimerKey::ResizeDebounce));
    assert!(scheduler.take(&second));
}

#[test]
fn cancel_drops_pending_handle() {
    let mut scheduler = Scheduler::new();
    let handle = scheduler.schedule(TimerKey::SubmitLatency(FormKind::Booking));
    assert!(scheduler.cancel(&TimerKey::SubmitLatency(FormKind::Booking)));
    assert!(!scheduler.cancel(&TimerKey::SubmitLatency(FormKind::Booking)));
    assert!(!scheduler.take(&handle));
}

#[test]
fn keys_are_independent() {
    let mut scheduler = Scheduler::new();
    let about = scheduler.schedule(TimerKey::EntranceStart(SectionId::new("about")));
    let blog = scheduler.schedule(TimerKey::EntranceStart(SectionId::new("blog")));
    assert_eq!(scheduler.pending_count(), 2);
    assert!(scheduler.take(&blog));
    assert!(scheduler.take(&about));
}
