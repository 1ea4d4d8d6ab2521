//! # Scholarship Service
//!
//! Scholarships awarded by a campus, served under `/api/scholarships` and
//! addressed by `name`. Names are not unique; a name key resolves to the
//! earliest scholarship created with that exact name.

use crate::access::campus_filter::CampusFilter;
use crate::services::crud::Resource;
use crate::store::validation::{Draft, RecordFields};
use crate::store::{self, StoreError};
use common::model::populated::Populated;
use common::model::scholarship::Scholarship;
use common::requests::ScholarshipInput;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TABLE: &str = "scholarships";
const COLUMNS: &[&str] = &["id", "name", "amount", "description", "campus_id", "created_at"];

pub struct Scholarships;

fn from_row(row: &Row<'_>) -> rusqlite::Result<Scholarship> {
    Ok(Scholarship {
        id: row.get(0)?,
        name: row.get(1)?,
        amount: row.get(2)?,
        description: row.get(3)?,
        campus_id: row.get(4)?,
        created_at: store::timestamp_from_micros(5, row.get(5)?)?,
    })
}

fn draft(input: ScholarshipInput) -> Draft {
    Draft {
        name: input.name,
        amount: input.amount,
        description: input.description,
        campus_id: input.campus_id,
    }
}

fn fields(s: &Scholarship) -> RecordFields {
    RecordFields {
        name: s.name.clone(),
        amount: s.amount,
        description: s.description.clone(),
        campus_id: s.campus_id.clone(),
    }
}

impl Resource for Scholarships {
    type Record = Scholarship;
    type Input = ScholarshipInput;

    const API_PATH: &'static str = "/api/scholarships";
    const LABEL: &'static str = "Scholarship";
    const KEY: &'static str = "name";

    fn list(
        conn: &Connection,
        filter: &CampusFilter,
    ) -> Result<Vec<Populated<Scholarship>>, StoreError> {
        store::list_populated(conn, TABLE, COLUMNS, filter, from_row)
    }

    fn find(conn: &Connection, key: &str) -> Result<Option<Scholarship>, StoreError> {
        store::find_one(conn, TABLE, COLUMNS, "name", key, from_row)
    }

    fn create(conn: &Connection, input: ScholarshipInput) -> Result<Scholarship, StoreError> {
        let fields = draft(input).validate(Self::LABEL)?;
        let (created_at, micros) = store::now_micros();
        let doc = Scholarship {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            amount: fields.amount,
            description: fields.description,
            campus_id: fields.campus_id,
            created_at,
        };
        conn.execute(
            "INSERT INTO scholarships (id, name, amount, description, campus_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![doc.id, doc.name, doc.amount, doc.description, doc.campus_id, micros],
        )?;
        Ok(doc)
    }

    fn update(
        conn: &Connection,
        key: &str,
        input: ScholarshipInput,
    ) -> Result<Option<Scholarship>, StoreError> {
        let Some(stored) = Self::find(conn, key)? else {
            return Ok(None);
        };
        let merged = draft(input).over(fields(&stored)).validate(Self::LABEL)?;
        conn.execute(
            "UPDATE scholarships SET name = ?1, amount = ?2, description = ?3, campus_id = ?4
             WHERE id = ?5",
            params![merged.name, merged.amount, merged.description, merged.campus_id, stored.id],
        )?;
        Ok(Some(Scholarship {
            name: merged.name,
            amount: merged.amount,
            description: merged.description,
            campus_id: merged.campus_id,
            ..stored
        }))
    }

    fn delete(conn: &Connection, key: &str) -> Result<Option<Scholarship>, StoreError> {
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

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        store::migrate(&conn).unwrap();
        conn
    }

    fn input(name: &str, campus: &str) -> ScholarshipInput {
        ScholarshipInput {
            name: Some(name.into()),
            amount: Some(500.0),
            description: Some("Merit award".into()),
            campus_id: Some(campus.into()),
        }
    }

    #[test]
    fn duplicate_names_resolve_to_the_earliest() {
        let conn = conn();
        let first = Scholarships::create(&conn, input("Merit", "C1")).unwrap();
        let second = Scholarships::create(&conn, input("Merit", "C2")).unwrap();

        assert_eq!(Scholarships::find(&conn, "Merit").unwrap(), Some(first.clone()));
        assert_eq!(Scholarships::delete(&conn, "Merit").unwrap(), Some(first));
        assert_eq!(Scholarships::find(&conn, "Merit").unwrap(), Some(second));
    }

    #[test]
    fn update_can_move_a_scholarship_to_another_campus() {
        let conn = conn();
        Scholarships::create(&conn, input("Sports", "C1")).unwrap();

        let moved = Scholarships::update(
            &conn,
            "Sports",
            ScholarshipInput {
                campus_id: Some("C2".into()),
                ..ScholarshipInput::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_eq!(moved.campus_id, "C2");
        assert_eq!(moved.description.as_deref(), Some("Merit award"));
        assert!(Scholarships::list(&conn, &CampusFilter::campus("C1"))
            .unwrap()
            .is_empty());
    }
}
