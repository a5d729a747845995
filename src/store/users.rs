use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{Group, NewUser, NewUserGroup, User};
use crate::schema::{groups, user_groups, users};

use super::{on_unique_violation, StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_user: NewUser) -> StoreResult<User> {
    diesel::insert_into(users::table)
        .values(&new_user)
        .get_result(conn)
        .map_err(|err| on_unique_violation(err, "user"))
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub profile_id: Option<Option<i32>>,
}

impl UserChanges {
    fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.profile_id.is_none()
    }
}

pub fn update(conn: &mut PgConnection, user_id: i32, changes: UserChanges) -> StoreResult<User> {
    if changes.is_empty() {
        return find(conn, user_id);
    }

    diesel::update(users::table.find(user_id))
        .set((&changes, users::updated_at.eq(Utc::now().naive_utc())))
        .get_result(conn)
        .optional()
        .map_err(|err| on_unique_violation(err, "user"))?
        .ok_or(StoreError::NotFound)
}

pub fn delete(conn: &mut PgConnection, user_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(users::table.find(user_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, user_id: i32) -> StoreResult<User> {
    users::table
        .find(user_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn find_by_username(conn: &mut PgConnection, username: &str) -> StoreResult<User> {
    users::table
        .filter(users::username.eq(username))
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

/// Links the user to a profile. Passing `None` detaches it.
pub fn attach_profile(
    conn: &mut PgConnection,
    user_id: i32,
    profile_id: Option<i32>,
) -> StoreResult<User> {
    update(
        conn,
        user_id,
        UserChanges {
            profile_id: Some(profile_id),
            ..UserChanges::default()
        },
    )
}

pub fn add_to_group(conn: &mut PgConnection, user_id: i32, group_id: i32) -> StoreResult<()> {
    diesel::insert_into(user_groups::table)
        .values(&NewUserGroup { user_id, group_id })
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

pub fn remove_from_group(conn: &mut PgConnection, user_id: i32, group_id: i32) -> StoreResult<()> {
    diesel::delete(
        user_groups::table
            .filter(user_groups::user_id.eq(user_id))
            .filter(user_groups::group_id.eq(group_id)),
    )
    .execute(conn)?;
    Ok(())
}

/// The exact membership set of a group, in id order.
pub fn list_in_group(conn: &mut PgConnection, group_id: i32) -> StoreResult<Vec<User>> {
    let members = users::table
        .inner_join(user_groups::table)
        .filter(user_groups::group_id.eq(group_id))
        .select(users::all_columns)
        .order(users::id.asc())
        .load(conn)?;
    Ok(members)
}

pub fn groups_of(conn: &mut PgConnection, user_id: i32) -> StoreResult<Vec<Group>> {
    let memberships = groups::table
        .inner_join(user_groups::table)
        .filter(user_groups::user_id.eq(user_id))
        .select(groups::all_columns)
        .order(groups::id.asc())
        .load(conn)?;
    Ok(memberships)
}
