use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{Group, NewGroup};
use crate::schema::groups;

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_group: NewGroup) -> StoreResult<Group> {
    let group = diesel::insert_into(groups::table)
        .values(&new_group)
        .get_result(conn)?;
    Ok(group)
}

pub fn rename(conn: &mut PgConnection, group_id: i32, name: &str) -> StoreResult<Group> {
    diesel::update(groups::table.find(group_id))
        .set(groups::name.eq(name))
        .get_result(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn delete(conn: &mut PgConnection, group_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(groups::table.find(group_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, group_id: i32) -> StoreResult<Group> {
    groups::table
        .find(group_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn list(conn: &mut PgConnection) -> StoreResult<Vec<Group>> {
    let all = groups::table.order(groups::id.asc()).load(conn)?;
    Ok(all)
}
