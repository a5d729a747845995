use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{Document, NewDocument};
use crate::schema::documents;

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_document: NewDocument) -> StoreResult<Document> {
    let document = diesel::insert_into(documents::table)
        .values(&new_document)
        .get_result(conn)?;
    Ok(document)
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = documents)]
pub struct DocumentChanges {
    pub file_name: Option<String>,
    pub data: Option<Vec<u8>>,
}

impl DocumentChanges {
    fn is_empty(&self) -> bool {
        self.file_name.is_none() && self.data.is_none()
    }
}

pub fn update(
    conn: &mut PgConnection,
    document_id: i32,
    changes: DocumentChanges,
) -> StoreResult<Document> {
    if changes.is_empty() {
        return find(conn, document_id);
    }

    diesel::update(documents::table.find(document_id))
        .set((&changes, documents::updated_at.eq(Utc::now().naive_utc())))
        .get_result(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn delete(conn: &mut PgConnection, document_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(documents::table.find(document_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, document_id: i32) -> StoreResult<Document> {
    documents::table
        .find(document_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}
