use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{Document, File, FileEvent, FileStatus, NewFile, NewFileDocument, Party};
use crate::schema::{documents, file_documents, file_events, files, parties};

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_file: NewFile) -> StoreResult<File> {
    let file = diesel::insert_into(files::table)
        .values(&new_file)
        .get_result(conn)?;
    Ok(file)
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = files)]
pub struct FileChanges {
    pub file_number: Option<String>,
    pub appeal_file_number: Option<Option<String>>,
    pub status: Option<Option<FileStatus>>,
    pub case_id: Option<Option<i32>>,
}

impl FileChanges {
    fn is_empty(&self) -> bool {
        self.file_number.is_none()
            && self.appeal_file_number.is_none()
            && self.status.is_none()
            && self.case_id.is_none()
    }
}

pub fn update(conn: &mut PgConnection, file_id: i32, changes: FileChanges) -> StoreResult<File> {
    if changes.is_empty() {
        return find(conn, file_id);
    }

    diesel::update(files::table.find(file_id))
        .set((&changes, files::updated_at.eq(Utc::now().naive_utc())))
        .get_result(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

/// Deletes the file only; parties and events referencing it are kept with a
/// null file reference, and document associations are removed.
pub fn delete(conn: &mut PgConnection, file_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(files::table.find(file_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, file_id: i32) -> StoreResult<File> {
    files::table
        .find(file_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn list_by_status(conn: &mut PgConnection, status: FileStatus) -> StoreResult<Vec<File>> {
    let rows = files::table
        .filter(files::status.eq(status))
        .order(files::file_number.asc())
        .load(conn)?;
    Ok(rows)
}

/// Parties of the file, in insertion order.
pub fn parties(conn: &mut PgConnection, file_id: i32) -> StoreResult<Vec<Party>> {
    let rows = parties::table
        .filter(parties::file_id.eq(file_id))
        .order(parties::id.asc())
        .load(conn)?;
    Ok(rows)
}

/// Events of the file, by occurrence date.
pub fn events(conn: &mut PgConnection, file_id: i32) -> StoreResult<Vec<FileEvent>> {
    let rows = file_events::table
        .filter(file_events::file_id.eq(file_id))
        .order(file_events::event_date.asc())
        .load(conn)?;
    Ok(rows)
}

/// Idempotent: attaching an already-attached document is a no-op.
pub fn attach_document(conn: &mut PgConnection, file_id: i32, document_id: i32) -> StoreResult<()> {
    diesel::insert_into(file_documents::table)
        .values(&NewFileDocument {
            file_id,
            document_id,
        })
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

pub fn detach_document(conn: &mut PgConnection, file_id: i32, document_id: i32) -> StoreResult<()> {
    diesel::delete(
        file_documents::table
            .filter(file_documents::file_id.eq(file_id))
            .filter(file_documents::document_id.eq(document_id)),
    )
    .execute(conn)?;
    Ok(())
}

pub fn documents(conn: &mut PgConnection, file_id: i32) -> StoreResult<Vec<Document>> {
    let rows = documents::table
        .inner_join(file_documents::table)
        .filter(file_documents::file_id.eq(file_id))
        .select(documents::all_columns)
        .order(documents::id.asc())
        .load(conn)?;
    Ok(rows)
}
