use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::models::{
    NewProfile, NewProfileAddress, NewProfileEmail, Profile, ProfileAddress, ProfileEmail,
};
use crate::schema::{profile_addresses, profile_emails, profiles};

use super::{StoreError, StoreResult};

pub fn create(conn: &mut PgConnection, new_profile: NewProfile) -> StoreResult<Profile> {
    let profile = diesel::insert_into(profiles::table)
        .values(&new_profile)
        .get_result(conn)?;
    Ok(profile)
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = profiles)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfileChanges {
    fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

pub fn update(
    conn: &mut PgConnection,
    profile_id: i32,
    changes: ProfileChanges,
) -> StoreResult<Profile> {
    if changes.is_empty() {
        return find(conn, profile_id);
    }

    diesel::update(profiles::table.find(profile_id))
        .set((&changes, profiles::updated_at.eq(Utc::now().naive_utc())))
        .get_result(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn delete(conn: &mut PgConnection, profile_id: i32) -> StoreResult<()> {
    let deleted = diesel::delete(profiles::table.find(profile_id)).execute(conn)?;
    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn find(conn: &mut PgConnection, profile_id: i32) -> StoreResult<Profile> {
    profiles::table
        .find(profile_id)
        .first(conn)
        .optional()?
        .ok_or(StoreError::NotFound)
}

pub fn add_email(conn: &mut PgConnection, new_email: NewProfileEmail) -> StoreResult<ProfileEmail> {
    let email = diesel::insert_into(profile_emails::table)
        .values(&new_email)
        .get_result(conn)?;
    Ok(email)
}

pub fn add_address(
    conn: &mut PgConnection,
    new_address: NewProfileAddress,
) -> StoreResult<ProfileAddress> {
    let address = diesel::insert_into(profile_addresses::table)
        .values(&new_address)
        .get_result(conn)?;
    Ok(address)
}

/// Email rows referencing the profile, in insertion order.
pub fn emails(conn: &mut PgConnection, profile_id: i32) -> StoreResult<Vec<ProfileEmail>> {
    let rows = profile_emails::table
        .filter(profile_emails::profile_id.eq(profile_id))
        .order(profile_emails::id.asc())
        .load(conn)?;
    Ok(rows)
}

/// Address rows referencing the profile, in insertion order.
pub fn addresses(conn: &mut PgConnection, profile_id: i32) -> StoreResult<Vec<ProfileAddress>> {
    let rows = profile_addresses::table
        .filter(profile_addresses::profile_id.eq(profile_id))
        .order(profile_addresses::id.asc())
        .load(conn)?;
    Ok(rows)
}
