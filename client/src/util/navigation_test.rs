use super::*;

#[test]
fn first_redirect_navigates() {
    let mut tracker = RedirectTracker::default();
    assert_eq!(
        tracker.observe(0, Verdict::RedirectTo(Destination::Login)),
        Some(Destination::Login)
    );
}

#[test]
fn repeated_redirect_does_not_navigate_again() {
    let mut tracker = RedirectTracker::default();
    let verdict = Verdict::RedirectTo(Destination::ClientOnboarding);
    assert!(tracker.observe(0, verdict).is_some());
    assert_eq!(tracker.observe(0, verdict), None);
    assert_eq!(tracker.observe(0, verdict), None);
}

#[test]
fn pending_and_allow_never_navigate() {
    let mut tracker = RedirectTracker::default();
    assert_eq!(tracker.observe(0, Verdict::Pending), None);
    assert_eq!(tracker.observe(0, Verdict::Allow), None);
}

#[test]
fn pending_then_redirect_navigates_once() {
    let mut tracker = RedirectTracker::default();
    assert_eq!(tracker.observe(0, Verdict::Pending), None);
    assert_eq!(
        tracker.observe(0, Verdict::RedirectTo(Destination::AdminHome)),
        Some(Destination::AdminHome)
    );
    assert_eq!(tracker.observe(0, Verdict::RedirectTo(Destination::AdminHome)), None);
}

#[test]
fn changed_destination_navigates() {
    let mut tracker = RedirectTracker::default();
    tracker.observe(0, Verdict::RedirectTo(Destination::ClientOnboarding));
    assert_eq!(
        tracker.observe(0, Verdict::RedirectTo(Destination::ClientBlocked)),
        Some(Destination::ClientBlocked)
    );
}

#[test]
fn new_epoch_repeats_redirect() {
    let mut tracker = RedirectTracker::default();
    let verdict = Verdict::RedirectTo(Destination::Login);
    assert!(tracker.observe(0, verdict).is_some());
    assert_eq!(tracker.observe(1, verdict), Some(Destination::Login));
    assert_eq!(tracker.observe(1, verdict), None);
}

#[test]
fn reset_forgets_last_verdict() {
    let mut tracker = RedirectTracker::default();
    let verdict = Verdict::RedirectTo(Destination::Login);
    tracker.observe(0, verdict);
    tracker.reset();
    assert_eq!(tracker.observe(0, verdict), Some(Destination::Login));
}

#[test]
fn redirects_replace_history() {
    assert!(redirect_options().replace);
}
