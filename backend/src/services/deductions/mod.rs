//! # Deduction Service
//!
//! Salary deductions owned by a campus (library fines, uniform fees, ...),
//! served under `/api/deductions` and addressed by their generated `id`.

use crate::access::campus_filter::CampusFilter;
use crate::services::crud::Resource;
use crate::store::validation::{Draft, RecordFields};
use crate::store::{self, StoreError};
use common::model::deduction::Deduction;
use common::model::populated::Populated;
use common::requests::DeductionInput;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TABLE: &str = "deductions";
const COLUMNS: &[&str] = &["id", "name", "amount", "description", "campus_id", "created_at"];

pub struct Deductions;

fn from_row(row: &Row<'_>) -> rusqlite::Result<Deduction> {
    Ok(Deduction {
        id: row.get(0)?,
        name: row.get(1)?,
        amount: row.get(2)?,
        description: row.get(3)?,
        campus_id: row.get(4)?,
        created_at: store::timestamp_from_micros(5, row.get(5)?)?,
    })
}

fn draft(input: DeductionInput) -> Draft {
    Draft {
        name: input.name,
        amount: input.amount,
        description: input.description,
        campus_id: input.campus_id,
    }
}

fn fields(d: &Deduction) -> RecordFields {
    RecordFields {
        name: d.name.clone(),
        amount: d.amount,
        description: d.description.clone(),
        campus_id: d.campus_id.clone(),
    }
}

impl Resource for Deductions {
    type Record = Deduction;
    type Input = DeductionInput;

    const API_PATH: &'static str = "/api/deductions";
    const LABEL: &'static str = "Deduction";
    const KEY: &'static str = "id";

    fn list(
        conn: &Connection,
        filter: &CampusFilter,
    ) -> Result<Vec<Populated<Deduction>>, StoreError> {
        store::list_populated(conn, TABLE, COLUMNS, filter, from_row)
    }

    fn find(conn: &Connection, key: &str) -> Result<Option<Deduction>, StoreError> {
        store::find_one(conn, TABLE, COLUMNS, "id", key, from_row)
    }

    fn create(conn: &Connection, input: DeductionInput) -> Result<Deduction, StoreError> {
        let fields = draft(input).validate(Self::LABEL)?;
        let (created_at, micros) = store::now_micros();
        let doc = Deduction {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            amount: fields.amount,
            description: fields.description,
            campus_id: fields.campus_id,
            created_at,
        };
        conn.execute(
            "INSERT INTO deductions (id, name, amount, description, campus_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![doc.id, doc.name, doc.amount, doc.description, doc.campus_id, micros],
        )?;
        Ok(doc)
    }

    fn update(
        conn: &Connection,
        key: &str,
        input: DeductionInput,
    ) -> Result<Option<Deduction>, StoreError> {
        let Some(stored) = Self::find(conn, key)? else {
            return Ok(None);
        };
        let merged = draft(input).over(fields(&stored)).validate(Self::LABEL)?;
        conn.execute(
            "UPDATE deductions SET name = ?1, amount = ?2, description = ?3, campus_id = ?4
             WHERE id = ?5",
            params![merged.name, merged.amount, merged.description, merged.campus_id, stored.id],
        )?;
        Ok(Some(Deduction {
            name: merged.name,
            amount: merged.amount,
            description: merged.description,
            campus_id: merged.campus_id,
            ..stored
        }))
    }

    fn delete(conn: &Connection, key: &str) -> Result<Option<Deduction>, StoreError> {
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

    fn input(name: &str, amount: f64, campus: &str) -> DeductionInput {
        DeductionInput {
            name: Some(name.into()),
            amount: Some(amount),
            description: None,
            campus_id: Some(campus.into()),
        }
    }

    #[test]
    fn list_is_scoped_and_newest_first() {
        let conn = conn();
        let fine = Deductions::create(&conn, input("Library Fine", 50.0, "C1")).unwrap();
        Deductions::create(&conn, input("Bus Fee", 20.0, "C2")).unwrap();
        let uniform = Deductions::create(&conn, input("Uniform", 30.0, "C1")).unwrap();

        let listed = Deductions::list(&conn, &CampusFilter::campus("C1")).unwrap();
        let ids: Vec<_> = listed.iter().map(|p| p.record.id.as_str()).collect();
        assert_eq!(ids, vec![uniform.id.as_str(), fine.id.as_str()]);

        assert_eq!(Deductions::list(&conn, &CampusFilter::all()).unwrap().len(), 3);
    }

    #[test]
    fn list_expands_known_campus_names() {
        let conn = conn();
        conn.execute(
            "INSERT INTO campuses (id, name, created_at) VALUES ('C1', 'North Campus', 0)",
            [],
        )
        .unwrap();
        Deductions::create(&conn, input("Library Fine", 50.0, "C1")).unwrap();
        Deductions::create(&conn, input("Bus Fee", 20.0, "C9")).unwrap();

        let listed = Deductions::list(&conn, &CampusFilter::all()).unwrap();
        let names: Vec<_> = listed.iter().map(|p| p.campus_name.as_deref()).collect();
        assert_eq!(names, vec![None, Some("North Campus")]);
    }

    #[test]
    fn invalid_update_leaves_record_untouched() {
        let conn = conn();
        let doc = Deductions::create(&conn, input("Library Fine", 50.0, "C1")).unwrap();

        let err = Deductions::update(
            &conn,
            &doc.id,
            DeductionInput {
                amount: Some(-5.0),
                ..DeductionInput::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(Deductions::find(&conn, &doc.id).unwrap(), Some(doc));
    }

    #[test]
    fn delete_returns_removed_record_once() {
        let conn = conn();
        let doc = Deductions::create(&conn, input("Library Fine", 50.0, "C1")).unwrap();

        assert_eq!(Deductions::delete(&conn, &doc.id).unwrap(), Some(doc.clone()));
        assert_eq!(Deductions::delete(&conn, &doc.id).unwrap(), None);
    }
}
