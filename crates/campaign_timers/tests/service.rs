use std::time::Duration;

use campaign_timers::TimerService;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Key {
    Step(usize),
    Activation,
}

const WAIT: Duration = Duration::from_secs(2);
const QUIET: Duration = Duration::from_millis(150);

#[test]
fn scheduled_timer_is_delivered() {
    let service = TimerService::new().expect("timer service");
    service.schedule(Key::Step(0), Duration::from_millis(10));

    assert_eq!(service.recv_timeout(WAIT), Some(Key::Step(0)));
    assert_eq!(service.try_recv(), None);
}

#[test]
fn timers_arrive_in_deadline_order() {
    let service = TimerService::new().expect("timer service");
    service.schedule(Key::Activation, Duration::from_millis(80));
    service.schedule(Key::Step(1), Duration::from_millis(10));

    assert_eq!(service.recv_timeout(WAIT), Some(Key::Step(1)));
    assert_eq!(service.recv_timeout(WAIT), Some(Key::Activation));
}

#[test]
fn cancelled_timer_is_not_delivered() {
    let service = TimerService::new().expect("timer service");
    service.schedule(Key::Activation, Duration::from_millis(50));
    service.cancel(Key::Activation);

    assert_eq!(service.recv_timeout(QUIET), None);
}

#[test]
fn cancel_all_clears_pending_timers() {
    let service = TimerService::new().expect("timer service");
    service.schedule(Key::Step(0), Duration::from_millis(50));
    service.schedule(Key::Activation, Duration::from_millis(50));
    service.cancel_all();

    assert_eq!(service.recv_timeout(QUIET), None);

    service.schedule(Key::Step(2), Duration::from_millis(10));
    assert_eq!(service.recv_timeout(WAIT), Some(Key::Step(2)));
}
