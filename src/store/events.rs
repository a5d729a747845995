use chrono::{NaiveDateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{FileEvent, FileEventKind, NewFileEvent};
use crate::schema::file_events;

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_event: NewFileEvent) -> StoreResult<FileEvent> {
    let event = diesel::insert_into(file_events::table)
        .values(&new_event)
        .get_result(conn)?;
    Ok(event)
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = file_events)]
pub struct FileEventChanges {
    pub title: Option<String>,
    pub event_date: Option<NaiveDateTime>,
    pub comment: Option<Option<String>>,
    pub kind: Option<Option<FileEventKind>>,
    pub file_id: Option<Option<i32>>,
}

impl FileEventChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.event_date.is_none()
            && self.comment.is_none()
            && self.kind.is_none()
            && self.file_id.is_none()
    }
}

pub fn update(
    conn: &mut PgConnection,
    event_id: i32,
    changes: FileEventChanges,
) -> StoreResult<FileEvent> {
    if changes.is_empty() {
        return find(conn, event_id);
    }

    diesel::update(file_events::table.find(event_id))
        .set((&changes, file_events::updated_at.eq(Utc::now().naive_utc())))
        .get_result(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn delete(conn: &mut PgConnection, event_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(file_events::table.find(event_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, event_id: i32) -> StoreResult<FileEvent> {
    file_events::table
        .find(event_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}
