//! # Payrow Service
//!
//! Pay grades (teacher, head teacher, driver, ...) served under `/api/payrow`.
//!
//! Position names are stored lowercased. On creation a `code` is derived from
//! the name (whitespace runs become `-`), so `Head Teacher` becomes
//! `head-teacher`. Codes are unique and are the key used by `GET`, `PUT` and
//! `DELETE`. Names and codes are both unique: creating a position whose code
//! already exists, or renaming one to a name another position holds, is
//! answered with `409 Conflict`. Renaming keeps the code.

use crate::access::campus_filter::CampusFilter;
use crate::services::crud::Resource;
use crate::store::validation::{Draft, RecordFields};
use crate::store::{self, StoreError};
use common::model::payrow::PayrowPosition;
use common::model::populated::Populated;
use common::requests::PayrowInput;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const TABLE: &str = "payrow_positions";
const COLUMNS: &[&str] = &[
    "id",
    "name",
    "code",
    "amount",
    "description",
    "campus_id",
    "created_at",
];

pub struct Payrow;

/// Lowercases `name` and joins its words with `-`.
pub fn derive_code(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<PayrowPosition> {
    Ok(PayrowPosition {
        id: row.get(0)?,
        name: row.get(1)?,
        code: row.get(2)?,
        amount: row.get(3)?,
        description: row.get(4)?,
        campus_id: row.get(5)?,
        created_at: store::timestamp_from_micros(6, row.get(6)?)?,
    })
}

fn draft(input: PayrowInput) -> Draft {
    Draft {
        name: input.name,
        amount: input.amount,
        description: input.description,
        campus_id: input.campus_id,
    }
}

fn fields(p: &PayrowPosition) -> RecordFields {
    RecordFields {
        name: p.name.clone(),
        amount: p.amount,
        description: p.description.clone(),
        campus_id: p.campus_id.clone(),
    }
}

fn conflict(code: &str) -> String {
    format!("Payrow position with code '{code}' already exists")
}

fn name_conflict(name: &str) -> String {
    format!("Payrow position named '{name}' already exists")
}

/// True when a position other than `id` is already called `name`.
fn name_taken_by_other(conn: &Connection, name: &str, id: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT 1 FROM payrow_positions WHERE name = ?1 AND id <> ?2",
        params![name, id],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

fn code_taken(conn: &Connection, code: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT 1 FROM payrow_positions WHERE code = ?1",
        params![code],
        |_| Ok(()),
    )
    .optional()
    .map(|found| found.is_some())
}

impl Resource for Payrow {
    type Record = PayrowPosition;
    type Input = PayrowInput;

    const API_PATH: &'static str = "/api/payrow";
    const LABEL: &'static str = "Payrow position";
    const KEY: &'static str = "code";

    fn list(
        conn: &Connection,
        filter: &CampusFilter,
    ) -> Result<Vec<Populated<PayrowPosition>>, StoreError> {
        store::list_populated(conn, TABLE, COLUMNS, filter, from_row)
    }

    fn find(conn: &Connection, key: &str) -> Result<Option<PayrowPosition>, StoreError> {
        store::find_one(conn, TABLE, COLUMNS, "code", key, from_row)
    }

    fn create(conn: &Connection, input: PayrowInput) -> Result<PayrowPosition, StoreError> {
        let fields = draft(input).validate(Self::LABEL)?;
        let name = fields.name.to_lowercase();
        let code = derive_code(&name);
        if code_taken(conn, &code)? {
            return Err(StoreError::Conflict(conflict(&code)));
        }

        let (created_at, micros) = store::now_micros();
        let doc = PayrowPosition {
            id: Uuid::new_v4().to_string(),
            name,
            code,
            amount: fields.amount,
            description: fields.description,
            campus_id: fields.campus_id,
            created_at,
        };
        conn.execute(
            "INSERT INTO payrow_positions
                (id, name, code, amount, description, campus_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                doc.id,
                doc.name,
                doc.code,
                doc.amount,
                doc.description,
                doc.campus_id,
                micros
            ],
        )
        .map_err(|e| store::conflict_on_unique(e, || conflict(&doc.code)))?;
        Ok(doc)
    }

    fn update(
        conn: &Connection,
        key: &str,
        input: PayrowInput,
    ) -> Result<Option<PayrowPosition>, StoreError> {
        let Some(stored) = Self::find(conn, key)? else {
            return Ok(None);
        };
        let merged = draft(input).over(fields(&stored)).validate(Self::LABEL)?;
        let name = merged.name.to_lowercase();
        if name_taken_by_other(conn, &name, &stored.id)? {
            return Err(StoreError::Conflict(name_conflict(&name)));
        }
        conn.execute(
            "UPDATE payrow_positions SET name = ?1, amount = ?2, description = ?3, campus_id = ?4
             WHERE id = ?5",
            params![name, merged.amount, merged.description, merged.campus_id, stored.id],
        )
        .map_err(|e| store::conflict_on_unique(e, || name_conflict(&name)))?;
        Ok(Some(PayrowPosition {
            name,
            amount: merged.amount,
            description: merged.description,
            campus_id: merged.campus_id,
            ..stored
        }))
    }

    fn delete(conn: &Connection, key: &str) -> Result<Option<PayrowPosition>, StoreError> {
        let found = Self::find(conn, key)?;
        if let Some(doc) = &found {
            store::delete_by_id(conn, TABLE, &doc.id)?;
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        store::migrate(&conn).unwrap();
        conn
    }

    fn input(name: &str) -> PayrowInput {
        PayrowInput {
            name: Some(name.into()),
            amount: Some(1200.0),
            description: None,
            campus_id: Some("C1".into()),
        }
    }

    #[rstest]
    #[case("Teacher", "teacher")]
    #[case("  Head   Teacher ", "head-teacher")]
    #[case("BUS\tDriver", "bus-driver")]
    fn code_is_lowercased_and_hyphenated(#[case] name: &str, #[case] code: &str) {
        assert_eq!(derive_code(name), code);
    }

    #[test]
    fn name_is_stored_lowercase() {
        let conn = conn();
        let doc = Payrow::create(&conn, input("Head Teacher")).unwrap();
        assert_eq!(doc.name, "head teacher");
        assert_eq!(doc.code, "head-teacher");
        assert_eq!(Payrow::find(&conn, "head-teacher").unwrap(), Some(doc));
    }

    #[test]
    fn same_code_in_any_case_conflicts() {
        let conn = conn();
        Payrow::create(&conn, input("Teacher")).unwrap();

        match Payrow::create(&conn, input("teacher")) {
            Err(StoreError::Conflict(message)) => {
                assert_eq!(message, "Payrow position with code 'teacher' already exists")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(Payrow::list(&conn, &CampusFilter::all()).unwrap().len(), 1);
    }

    #[test]
    fn rename_keeps_the_code() {
        let conn = conn();
        Payrow::create(&conn, input("Teacher")).unwrap();

        let renamed = Payrow::update(
            &conn,
            "teacher",
            PayrowInput {
                name: Some("Senior Teacher".into()),
                ..PayrowInput::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(renamed.name, "senior teacher");
        assert_eq!(renamed.code, "teacher");
        assert_eq!(Payrow::find(&conn, "teacher").unwrap(), Some(renamed));
    }

    #[test]
    fn rename_onto_a_taken_name_conflicts() {
        let conn = conn();
        let teacher = Payrow::create(&conn, input("Teacher")).unwrap();
        let driver = Payrow::create(&conn, input("Driver")).unwrap();

        match Payrow::update(
            &conn,
            "driver",
            PayrowInput {
                name: Some("TEACHER".into()),
                ..PayrowInput::default()
            },
        ) {
            Err(StoreError::Conflict(message)) => {
                assert_eq!(message, "Payrow position named 'teacher' already exists")
            }
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(Payrow::find(&conn, "driver").unwrap(), Some(driver));
        assert_eq!(Payrow::find(&conn, "teacher").unwrap(), Some(teacher));
    }

    #[test]
    fn rename_to_own_name_in_other_case_is_allowed() {
        let conn = conn();
        Payrow::create(&conn, input("Teacher")).unwrap();

        let same = Payrow::update(
            &conn,
            "teacher",
            PayrowInput {
                name: Some("TEACHER".into()),
                amount: Some(1300.0),
                ..PayrowInput::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(same.name, "teacher");
        assert_eq!(same.amount, 1300.0);
    }

    #[test]
    fn unknown_code_is_absent() {
        let conn = conn();
        assert_eq!(Payrow::find(&conn, "unknown-code").unwrap(), None);
        assert_eq!(Payrow::update(&conn, "unknown-code", input("x")).unwrap(), None);
        assert_eq!(Payrow::delete(&conn, "unknown-code").unwrap(), None);
    }
}
