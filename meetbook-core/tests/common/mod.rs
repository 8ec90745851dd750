#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use meetbook_core::storage::JsonStorage;
use meetbook_core::LogicManager;
use mockable::Clock;
use tempfile::TempDir;

/// A clock stopped at a local wall-clock time.
pub struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn local(&self) -> chrono::DateTime<Local> {
        Local
            .from_local_datetime(&self.0)
            .earliest()
            .expect("fixture time exists locally")
    }

    fn utc(&self) -> chrono::DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

pub const NOW: &str = "2026-10-20 08:00:00";

pub fn clock() -> Arc<dyn Clock> {
    let now = NaiveDateTime::parse_from_str(NOW, "%Y-%m-%d %H:%M:%S").expect("valid fixture time");
    Arc::new(FixedClock(now))
}

/// A manager over an empty data file in a fresh temporary directory.
pub fn logic() -> (LogicManager, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let storage = JsonStorage::new(dir.path().join("addressbook.json"));
    let logic = LogicManager::open(storage, clock()).expect("open empty book");
    (logic, dir)
}

/// Run every line, panicking on the first failure.
pub fn run_all(logic: &mut LogicManager, lines: &[&str]) {
    for line in lines {
        if let Err(e) = logic.execute(line) {
            panic!("{line:?} failed: {e}");
        }
    }
}

pub const ALICE: &str =
    "add name:Alice Pauline phone:94351253 email:alice@example.com address:123, Jurong West Ave 6 tag:friends";
pub const BENSON: &str =
    "add name:Benson Meier phone:98765432 email:johnd@example.com address:311, Clementi Ave 2 tag:owesMoney tag:friends";
pub const CARL: &str =
    "add name:Carl Kurz phone:95352563 email:heinz@example.com address:wall street";

pub fn person_names(logic: &LogicManager) -> Vec<String> {
    logic
        .model()
        .filtered_persons()
        .iter()
        .map(|p| p.name.to_string())
        .collect()
}
