//! Action dispatch for the interactive event loop
//!
//! `update()` only describes side effects; this module performs them.
//! Delivery runs as a tokio task and reports back through the message
//! channel, with the form held in loading state until it does.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::handler::{update, UpdateAction};
use crate::message::Message;
use crate::sink::AppointmentSink;
use crate::state::AppState;

/// Apply a message and every follow-up it produces, dispatching actions.
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    sink: &Arc<Mutex<S>>,
) where
    S: AppointmentSink + 'static,
{
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(state, action, msg_tx, sink);
        }
        next = result.message;
    }
}

/// Perform one side effect requested by `update()`
pub fn handle_action<S>(
    state: &mut AppState,
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    sink: &Arc<Mutex<S>>,
) where
    S: AppointmentSink + 'static,
{
    match action {
        UpdateAction::DeliverAppointment { request } => {
            update(state, Message::SetLoading(true));

            let tx = msg_tx.clone();
            let sink = Arc::clone(sink);
            tokio::spawn(async move {
                let outcome = sink.lock().await.deliver(&request).await;
                let msg = match outcome {
                    Ok(()) => Message::DeliveryCompleted(request),
                    Err(e) => Message::DeliveryFailed(e.to_string()),
                };
                if tx.send(msg).await.is_err() {
                    warn!("Event loop gone before delivery result arrived");
                } else {
                    debug!("Delivery result sent");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::form::AppointmentForm;
    use crate::sink::MemorySink;
    use chrono::{NaiveDate, NaiveDateTime};
    use medsched_core::{Doctor, DoctorRoster, FixedClock};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn ready_state() -> AppState {
        let roster = DoctorRoster::new(vec![Doctor::new("d1", "Ana", "Cardio")]).unwrap();
        let mut form = AppointmentForm::new(roster, None, now());
        form.set_doctor_id("d1");
        form.set_date(
            NaiveDate::from_ymd_opt(2026, 10, 20)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        );
        AppState::with_clock(form, Settings::default(), Arc::new(FixedClock(now())))
    }

    #[tokio::test]
    async fn test_submit_delivers_and_reports_back() {
        let mut state = ready_state();
        let sink = Arc::new(Mutex::new(MemorySink::new()));
        let (tx, mut rx) = mpsc::channel(4);

        process_message(&mut state, Message::Submit, &tx, &sink);
        assert!(state.form.is_loading());

        let reply = rx.recv().await.unwrap();
        assert!(matches!(reply, Message::DeliveryCompleted(_)));
        process_message(&mut state, reply, &tx, &sink);

        assert!(!state.form.is_loading());
        assert_eq!(state.submitted.len(), 1);
        assert_eq!(sink.lock().await.delivered().len(), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_delivering_is_ignored() {
        let mut state = ready_state();
        let sink = Arc::new(Mutex::new(MemorySink::new()));
        let (tx, mut rx) = mpsc::channel(4);

        process_message(&mut state, Message::Submit, &tx, &sink);
        process_message(&mut state, Message::Submit, &tx, &sink);

        let reply = rx.recv().await.unwrap();
        process_message(&mut state, reply, &tx, &sink);

        assert!(rx.try_recv().is_err());
        assert_eq!(sink.lock().await.delivered().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delivery_reports_failure() {
        let mut state = ready_state();
        let sink = Arc::new(Mutex::new(MemorySink::failing("offline")));
        let (tx, mut rx) = mpsc::channel(4);

        process_message(&mut state, Message::Submit, &tx, &sink);
        let reply = rx.recv().await.unwrap();

        assert!(matches!(reply, Message::DeliveryFailed(ref reason) if reason.contains("offline")));
        process_message(&mut state, reply, &tx, &sink);
        assert!(!state.form.is_loading());
        assert_eq!(state.form.doctor_id(), "d1");
    }
}
