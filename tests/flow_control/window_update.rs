//! Tests for received-data accounting and the WINDOW_UPDATE threshold

use h2_guard::{should_send_window_update, H2Error, WindowState};

#[test]
fn test_threshold_is_half_the_window() {
    assert!(should_send_window_update(100, 50));
    assert!(!should_send_window_update(100, 49));
    assert!(should_send_window_update(65_535, 32_767));
    assert!(!should_send_window_update(65_535, 32_766));
}

#[test]
fn test_update_emitted_after_half_consumed() {
    let mut s = WindowState::default();

    s.record_received(16_384).unwrap();
    assert!(!s.should_send_window_update());
    assert_eq!(s.take_window_update(), None);

    s.record_received(16_384).unwrap();
    assert!(s.should_send_window_update());
    assert_eq!(s.take_window_update(), Some(32_768));
    assert_eq!(s.recv_window_size(), 0);
    assert_eq!(s.local_window_size(), 65_535);
}

#[test]
fn test_peer_overrunning_window_is_rejected() {
    let mut s = WindowState::new(100).unwrap();
    s.record_received(100).unwrap();
    assert_eq!(s.record_received(1), Err(H2Error::FlowControl));
    assert_eq!(s.recv_window_size(), 100);
}

#[test]
fn test_shrunk_window_rejects_previously_legal_data() {
    let mut s = WindowState::new(100).unwrap();
    s.adjust_local_window_size(-60).unwrap();

    // Local window is 40 and recv_window_size is -60: the peer may still
    // send up to 100 bytes under the old window
    s.record_received(100).unwrap();
    assert_eq!(s.recv_window_size(), 40);
    assert_eq!(s.record_received(1), Err(H2Error::FlowControl));
}

#[test]
fn test_no_update_while_overdrawn() {
    let mut s = WindowState::new(100).unwrap();
    s.adjust_local_window_size(-60).unwrap();
    s.record_received(50).unwrap();
    assert_eq!(s.recv_window_size(), -10);
    assert_eq!(s.take_window_update(), None);
}
