use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{NewParty, Party};
use crate::schema::parties;

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_party: NewParty) -> StoreResult<Party> {
    let party = diesel::insert_into(parties::table)
        .values(&new_party)
        .get_result(conn)?;
    Ok(party)
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = parties)]
pub struct PartyChanges {
    pub name: Option<String>,
    pub file_id: Option<Option<i32>>,
    pub profile_id: Option<Option<i32>>,
}

impl PartyChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.file_id.is_none() && self.profile_id.is_none()
    }
}

pub fn update(conn: &mut PgConnection, party_id: i32, changes: PartyChanges) -> StoreResult<Party> {
    if changes.is_empty() {
        return find(conn, party_id);
    }

    diesel::update(parties::table.find(party_id))
        .set((&changes, parties::updated_at.eq(Utc::now().naive_utc())))
        .get_result(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn delete(conn: &mut PgConnection, party_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(parties::table.find(party_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, party_id: i32) -> StoreResult<Party> {
    parties::table
        .find(party_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn list_for_profile(conn: &mut PgConnection, profile_id: i32) -> StoreResult<Vec<Party>> {
    let rows = parties::table
        .filter(parties::profile_id.eq(profile_id))
        .order(parties::id.asc())
        .load(conn)?;
    Ok(rows)
}
