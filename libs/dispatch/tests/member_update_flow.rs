//! End-to-end flow: wire JSON → cache diff → typed events → listeners.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use palaver_dispatch::{EventListener, UpdatePipeline};
use palaver_events::{field_idents, MemberEvent};
use palaver_id::{EventSeq, GuildId, SessionId, UserId};
use palaver_model::Member;

const GUILD: &str = "175928847299117063";
const USER: &str = "80351110224678912";

fn wire_member(timeout: Option<&str>, nick: Option<&str>) -> Member {
    let timeout = match timeout {
        Some(ts) => format!("\"{ts}\""),
        None => "null".to_string(),
    };
    let nick = match nick {
        Some(n) => format!("\"{n}\""),
        None => "null".to_string(),
    };
    let json = format!(
        r#"{{
            "guild_id": "{GUILD}",
            "user_id": "{USER}",
            "nick": {nick},
            "joined_at": "2021-03-01T10:00:00Z",
            "communication_disabled_until": {timeout}
        }}"#
    );
    serde_json::from_str(&json).unwrap()
}

type TimeoutChange = (EventSeq, Option<DateTime<Utc>>, Option<DateTime<Utc>>);

#[derive(Default)]
struct TimeoutRecorder {
    seen: Arc<Mutex<Vec<TimeoutChange>>>,
}

impl EventListener for TimeoutRecorder {
    fn fields(&self) -> &'static [&'static str] {
        &[field_idents::COMMUNICATION_DISABLED_UNTIL]
    }

    fn on_event(&self, event: &MemberEvent) {
        let MemberEvent::TimeoutChanged(update) = event else {
            panic!("timeout listener received {:?}", event.field_id());
        };
        self.seen.lock().unwrap().push((
            update.seq(),
            update.old_value().copied(),
            update.new_value().copied(),
        ));
    }
}

fn pipeline_with_recorder() -> (UpdatePipeline, Arc<Mutex<Vec<TimeoutChange>>>) {
    let recorder = TimeoutRecorder::default();
    let seen = recorder.seen.clone();
    let mut pipeline = UpdatePipeline::new(SessionId::new());
    pipeline.register(Box::new(recorder));
    (pipeline, seen)
}

fn t1() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 2, 12, 0, 0).unwrap()
}

fn t2() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, 9, 18, 30, 0).unwrap()
}

#[test]
fn timeout_applied_then_extended_then_lifted() {
    let (pipeline, seen) = pipeline_with_recorder();

    // First sight: cache fill only, no events.
    let delivered = pipeline
        .ingest(EventSeq::new(1), wire_member(None, None))
        .unwrap();
    assert_eq!(delivered, 0);

    // Timeout applied.
    pipeline
        .ingest(
            EventSeq::new(2),
            wire_member(Some("2021-03-02T12:00:00Z"), None),
        )
        .unwrap();

    // Timeout extended.
    pipeline
        .ingest(
            EventSeq::new(3),
            wire_member(Some("2021-03-09T18:30:00Z"), None),
        )
        .unwrap();

    // Timeout lifted.
    pipeline
        .ingest(EventSeq::new(4), wire_member(None, None))
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            (EventSeq::new(2), None, Some(t1())),
            (EventSeq::new(3), Some(t1()), Some(t2())),
            (EventSeq::new(4), Some(t2()), None),
        ]
    );
}

#[test]
fn replayed_update_produces_no_events() {
    let (pipeline, seen) = pipeline_with_recorder();

    let payload = wire_member(Some("2021-03-02T12:00:00Z"), None);
    pipeline.ingest(EventSeq::new(1), payload.clone()).unwrap();
    pipeline.ingest(EventSeq::new(2), payload.clone()).unwrap();

    // First sight is silent and the replay carries no change.
    assert!(seen.lock().unwrap().is_empty());

    pipeline.ingest(EventSeq::new(3), payload).unwrap();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unrelated_field_change_does_not_reach_timeout_listener() {
    let (pipeline, seen) = pipeline_with_recorder();

    pipeline
        .ingest(EventSeq::new(1), wire_member(None, None))
        .unwrap();
    let delivered = pipeline
        .ingest(EventSeq::new(2), wire_member(None, Some("shallan")))
        .unwrap();

    // The nick change produced an event, but no registered listener
    // wanted it.
    assert_eq!(delivered, 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn cache_reflects_the_latest_update() {
    let (pipeline, _) = pipeline_with_recorder();

    pipeline
        .ingest(EventSeq::new(1), wire_member(None, None))
        .unwrap();
    pipeline
        .ingest(
            EventSeq::new(2),
            wire_member(Some("2021-03-02T12:00:00Z"), Some("shallan")),
        )
        .unwrap();

    let cached = pipeline
        .cache()
        .get(GuildId::parse(GUILD).unwrap(), UserId::parse(USER).unwrap())
        .unwrap();
    assert_eq!(cached.nick.as_deref(), Some("shallan"));
    assert_eq!(cached.communication_disabled_until, Some(t1()));
}

#[test]
fn events_can_be_read_from_another_thread() {
    // Events are immutable snapshots; a clone handed to another thread
    // observes the same values the dispatch thread saw.
    struct CloneOut {
        slot: Arc<Mutex<Option<MemberEvent>>>,
    }

    impl EventListener for CloneOut {
        fn fields(&self) -> &'static [&'static str] {
            &[field_idents::COMMUNICATION_DISABLED_UNTIL]
        }

        fn on_event(&self, event: &MemberEvent) {
            *self.slot.lock().unwrap() = Some(event.clone());
        }
    }

    let slot = Arc::new(Mutex::new(None));
    let mut pipeline = UpdatePipeline::new(SessionId::new());
    pipeline.register(Box::new(CloneOut { slot: slot.clone() }));

    pipeline
        .ingest(EventSeq::new(1), wire_member(None, None))
        .unwrap();
    pipeline
        .ingest(
            EventSeq::new(2),
            wire_member(Some("2021-03-02T12:00:00Z"), None),
        )
        .unwrap();

    let handle = std::thread::spawn(move || {
        let guard = slot.lock().unwrap();
        let Some(MemberEvent::TimeoutChanged(update)) = guard.as_ref() else {
            panic!("no timeout event captured");
        };
        (update.old_value().copied(), update.new_value().copied())
    });

    let (old, new) = handle.join().unwrap();
    assert_eq!(old, None);
    assert_eq!(new, Some(t1()));
}
