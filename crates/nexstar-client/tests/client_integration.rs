//! End-to-end tests for the telescope client over a scripted transport.
//!
//! These drive the full public surface — facade, exchange, transport trait —
//! with a `MockTransport` standing in for the hand controller, asserting the
//! exact wire traffic the device would see.

use nexstar_client::infrastructure::transport::MockTransport;
use nexstar_client::{ClientError, TelescopeClient, TransportError};
use nexstar_core::TelescopeModel;

fn scripted_client() -> (TelescopeClient, MockTransport) {
    let mock = MockTransport::new();
    let client = TelescopeClient::with_transport(Box::new(mock.clone()));
    (client, mock)
}

// ── Session lifecycle ─────────────────────────────────────────────────────────

#[test]
fn test_full_observing_session() {
    // Arrange — a typical session: identify, check alignment, slew, cancel.
    let (mut client, mock) = scripted_client();
    assert!(client.is_connected());

    // Act / Assert — identify the mount (code 9 is a CPC).
    mock.push_reply(9);
    assert_eq!(client.model().unwrap(), TelescopeModel::Cpc);

    // Alignment done (raw numeric 1).
    mock.push_reply(1);
    assert!(client.is_aligned().unwrap());

    // Idle before the slew (ASCII '0').
    mock.push_reply(b'0');
    assert!(!client.is_moving().unwrap());

    // Slew to due south at 45° up.
    client.goto_azm_elev(180.0, 45.0).unwrap();

    // Now moving (ASCII '1').
    mock.push_reply(b'1');
    assert!(client.is_moving().unwrap());

    // Abort and disconnect.
    client.cancel_goto().unwrap();
    client.disconnect();
    assert!(!client.is_connected());

    // The device saw exactly this traffic, in order.
    assert_eq!(
        mock.written_lines(),
        vec!["m", "J", "L", "b80000000,20000000", "L", "M"]
    );
}

#[test]
fn test_disconnect_then_reuse_fails_cleanly() {
    // Arrange
    let (mut client, mock) = scripted_client();

    // Act
    client.disconnect();
    let result = client.is_moving();

    // Assert — no I/O after disconnect.
    assert!(matches!(result, Err(ClientError::NotConnected)));
    assert!(mock.written_lines().is_empty());
}

// ── Wire discipline ───────────────────────────────────────────────────────────

#[test]
fn test_every_operation_flushes_the_input_buffer() {
    // Arrange
    let (mut client, mock) = scripted_client();

    // Act — one no-reply command and one query.
    client.cancel_goto().unwrap();
    mock.push_reply(b'0');
    client.is_moving().unwrap();

    // Assert — both paths discarded, including the reply-less cancel.
    assert_eq!(mock.discard_calls(), 2);
    assert_eq!(mock.pending_replies(), 0);
}

#[test]
fn test_stale_bytes_do_not_leak_between_queries() {
    // Arrange — the device answers the model query with its byte plus a
    // stray terminator left in the buffer.
    let (mut client, mock) = scripted_client();
    mock.push_reply(5);
    mock.push_reply(b'#');

    // Act
    let model = client.model().unwrap();

    // The follow-up query gets a fresh script, not the stray '#'.
    mock.push_reply(1);
    let aligned = client.is_aligned().unwrap();

    // Assert
    assert_eq!(model, TelescopeModel::Cge);
    assert!(aligned);
}

// ── Model identification ──────────────────────────────────────────────────────

#[test]
fn test_unknown_model_code_is_a_normal_outcome() {
    // Arrange — firmware newer than the known table.
    let (mut client, mock) = scripted_client();
    mock.push_reply(42);

    // Act
    let model = client.model().unwrap();

    // Assert — not an error, and the raw code is preserved.
    assert_eq!(model, TelescopeModel::Unknown(42));
    assert_eq!(model.code(), 42);
}

// ── Failure propagation ───────────────────────────────────────────────────────

#[test]
fn test_silent_device_times_out_without_retry() {
    // Arrange — open link, no scripted replies.
    let (mut client, mock) = scripted_client();

    // Act
    let result = client.is_aligned();

    // Assert — one attempt, one timeout, no retry writes.
    assert!(matches!(
        result,
        Err(ClientError::Transport(TransportError::Timeout(_)))
    ));
    assert_eq!(mock.written_lines(), vec!["J"]);
}

#[test]
fn test_dropped_link_fails_before_writing() {
    // Arrange
    let (mut client, mock) = scripted_client();
    mock.set_open(false);

    // Act
    let result = client.goto_azm_elev(90.0, 10.0);

    // Assert
    assert!(matches!(result, Err(ClientError::NotConnected)));
    assert!(mock.written_lines().is_empty());
}
