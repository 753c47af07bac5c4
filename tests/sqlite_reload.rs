use chrono::{DateTime, Utc};
use tempfile::TempDir;

use calclog::{
    config::CalcConfig,
    entry::HistoryEntry,
    input::Input,
    persist::{self, HISTORY_KEY, Storage, THEME_KEY, sqlite::SqliteStorage},
    session::CalculatorSession,
    types::{Action, EntryId, OperatorKind, ScientificFn, Theme},
};

fn add(session: &mut CalculatorSession, a: char, b: char) {
    session
        .dispatch_all([
            Input::Digit(a),
            Input::Operator(OperatorKind::Add),
            Input::Digit(b),
            Input::Action(Action::Equals),
        ])
        .expect("add");
}

#[test]
fn history_and_theme_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("calc.db");

    let before = {
        let storage = SqliteStorage::open(&db_path).expect("open sqlite");
        let mut session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
        add(&mut session, '7', '5');
        add(&mut session, '1', '2');
        assert_eq!(session.toggle_theme(), Theme::Dark);
        session.ledger().entries().to_vec()
    };

    let storage = SqliteStorage::open(&db_path).expect("reopen");
    assert_eq!(storage.key_count().expect("count"), 2);
    let session = CalculatorSession::open(Box::new(storage), CalcConfig::default());

    assert_eq!(session.ledger().entries(), before.as_slice());
    assert_eq!(session.ledger().latest().map(|e| e.expression.as_str()), Some("1 + 2"));
    assert_eq!(session.theme(), Theme::Dark);
    assert_eq!(session.statistics().count, 2);
}

#[test]
fn clear_then_reload_is_empty() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("clear.db");

    {
        let storage = SqliteStorage::open(&db_path).expect("open sqlite");
        let mut session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
        add(&mut session, '3', '4');
        session.clear_history();
    }

    let storage = SqliteStorage::open(&db_path).expect("reopen");
    let session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
    assert!(session.ledger().is_empty());
    assert_eq!(session.statistics().summary, None);
}

#[test]
fn corrupt_payload_loads_as_empty_ledger() {
    let mut storage = SqliteStorage::open_in_memory().expect("open sqlite");
    storage.save(HISTORY_KEY, "[{\"id\": 1, \"expr").expect("save");
    storage.save(THEME_KEY, "sepia").expect("save");

    let mut session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
    assert!(session.ledger().is_empty());
    assert_eq!(session.theme(), Theme::Light);

    add(&mut session, '2', '2');
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn entry_round_trip_preserves_exact_values() {
    let mut storage = SqliteStorage::open_in_memory().expect("open sqlite");
    let timestamp = DateTime::parse_from_rfc3339("2024-05-06T07:08:09.123Z")
        .expect("parse")
        .with_timezone(&Utc);
    let entries = vec![
        HistoryEntry {
            id: EntryId(1_714_979_289_123),
            expression: "√(2)".to_string(),
            result: 2f64.sqrt(),
            timestamp,
        },
        HistoryEntry {
            id: EntryId(1_714_979_289_000),
            expression: "0.1 + 0.2".to_string(),
            result: 0.1 + 0.2,
            timestamp,
        },
    ];

    persist::write_history(&mut storage, HISTORY_KEY, &entries).expect("write");
    let loaded = persist::read_history(&storage, HISTORY_KEY).expect("read");
    assert_eq!(loaded, entries);
    assert_eq!(loaded[0].result.to_bits(), 2f64.sqrt().to_bits());
}

#[test]
fn reads_browser_style_payload() {
    let payload = r#"[{"id":1714979289123,"expression":"7 + 5","result":12,"timestamp":"2024-05-06T07:08:09.123Z"}]"#;
    let mut storage = SqliteStorage::open_in_memory().expect("open sqlite");
    storage.save(HISTORY_KEY, payload).expect("save");

    let loaded = persist::read_history(&storage, HISTORY_KEY).expect("read");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, EntryId(1_714_979_289_123));
    assert_eq!(loaded[0].result, 12.0);
    assert_eq!(loaded[0].timestamp.timestamp_millis(), 1_714_979_289_123);
}

#[test]
fn overflowed_results_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("overflow.db");

    let before = {
        let storage = SqliteStorage::open(&db_path).expect("open sqlite");
        let mut session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
        add(&mut session, '3', '4');
        session
            .dispatch_all("99999".chars().map(Input::Digit))
            .expect("digits");
        for _ in 0..12 {
            session
                .dispatch(Input::Function(ScientificFn::Square))
                .expect("square");
        }
        assert_eq!(session.state().current_value(), f64::INFINITY);
        session.ledger().entries().to_vec()
    };
    assert_eq!(before.len(), 13);

    let storage = SqliteStorage::open(&db_path).expect("reopen");
    let payload = storage.load(HISTORY_KEY).expect("load").expect("payload");
    assert!(!payload.contains("null"));
    let session = CalculatorSession::open(Box::new(storage), CalcConfig::default());

    assert_eq!(session.ledger().entries(), before.as_slice());
    assert_eq!(session.ledger().latest().map(|e| e.result), Some(f64::INFINITY));
    assert_eq!(
        session.ledger().entries().last().map(|e| e.expression.as_str()),
        Some("3 + 4")
    );
}

#[test]
fn browser_null_result_keeps_rest_of_history() {
    let payload = r#"[{"id":2,"expression":"1e308 × 10","result":null,"timestamp":"2024-05-06T07:08:10Z"},{"id":1,"expression":"7 + 5","result":12,"timestamp":"2024-05-06T07:08:09Z"}]"#;
    let mut storage = SqliteStorage::open_in_memory().expect("open sqlite");
    storage.save(HISTORY_KEY, payload).expect("save");

    let session = CalculatorSession::open(Box::new(storage), CalcConfig::default());
    assert_eq!(session.ledger().len(), 2);
    assert!(session.ledger().entries()[0].result.is_nan());
    assert_eq!(session.ledger().entries()[1].result, 12.0);
}
