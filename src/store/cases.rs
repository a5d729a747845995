use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{Case, Document, File, NewCaseDocument};
use crate::schema::{case_documents, cases, documents, files};

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection) -> StoreResult<Case> {
    let case = diesel::insert_into(cases::table)
        .default_values()
        .get_result(conn)?;
    Ok(case)
}

/// Deletes the case only. Files referencing it are kept and their
/// `case_id` becomes null; association rows to documents are removed.
pub fn delete(conn: &mut PgConnection, case_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(cases::table.find(case_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, case_id: i32) -> StoreResult<Case> {
    cases::table
        .find(case_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn files(conn: &mut PgConnection, case_id: i32) -> StoreResult<Vec<File>> {
    let rows = files::table
        .filter(files::case_id.eq(case_id))
        .order(files::id.asc())
        .load(conn)?;
    Ok(rows)
}

/// Idempotent: attaching an already-attached document is a no-op.
pub fn attach_document(conn: &mut PgConnection, case_id: i32, document_id: i32) -> StoreResult<()> {
    diesel::insert_into(case_documents::table)
        .values(&NewCaseDocument {
            case_id,
            document_id,
        })
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

pub fn detach_document(conn: &mut PgConnection, case_id: i32, document_id: i32) -> StoreResult<()> {
    diesel::delete(
        case_documents::table
            .filter(case_documents::case_id.eq(case_id))
            .filter(case_documents::document_id.eq(document_id)),
    )
    .execute(conn)?;
    Ok(())
}

pub fn documents(conn: &mut PgConnection, case_id: i32) -> StoreResult<Vec<Document>> {
    let rows = documents::table
        .inner_join(case_documents::table)
        .filter(case_documents::case_id.eq(case_id))
        .select(documents::all_columns)
        .order(documents::id.asc())
        .load(conn)?;
    Ok(rows)
}
