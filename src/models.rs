use std::io::Write;

use chrono::NaiveDateTime;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;

use crate::schema::*;

/// Classification of a postal address. Stored inline as a short text column
/// rather than a row-per-variant lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromSqlRow, AsExpression)]
#[diesel(sql_type = Text)]
pub enum AddressKind {
    Other,
    Home,
    Office,
}

impl AddressKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressKind::Other => "other",
            AddressKind::Home => "home",
            AddressKind::Office => "office",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "other" => Some(AddressKind::Other),
            "home" => Some(AddressKind::Home),
            "office" => Some(AddressKind::Office),
            _ => None,
        }
    }
}

impl ToSql<Text, Pg> for AddressKind {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for AddressKind {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = std::str::from_utf8(value.as_bytes())?;
        AddressKind::parse(raw).ok_or_else(|| format!("unrecognized address kind: {raw}").into())
    }
}

/// Lifecycle state of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromSqlRow, AsExpression)]
#[diesel(sql_type = Text)]
pub enum FileStatus {
    Open,
    Active,
    Standby,
    Closed,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Open => "open",
            FileStatus::Active => "active",
            FileStatus::Standby => "standby",
            FileStatus::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(FileStatus::Open),
            "active" => Some(FileStatus::Active),
            "standby" => Some(FileStatus::Standby),
            "closed" => Some(FileStatus::Closed),
            _ => None,
        }
    }
}

impl ToSql<Text, Pg> for FileStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for FileStatus {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = std::str::from_utf8(value.as_bytes())?;
        FileStatus::parse(raw).ok_or_else(|| format!("unrecognized file status: {raw}").into())
    }
}

/// Classification of a dated occurrence on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromSqlRow, AsExpression)]
#[diesel(sql_type = Text)]
pub enum FileEventKind {
    RendezVous,
}

impl FileEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileEventKind::RendezVous => "rendez_vous",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rendez_vous" => Some(FileEventKind::RendezVous),
            _ => None,
        }
    }
}

impl ToSql<Text, Pg> for FileEventKind {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for FileEventKind {
    fn from_sql(value: PgValue<'_>) -> deserialize::Result<Self> {
        let raw = std::str::from_utf8(value.as_bytes())?;
        FileEventKind::parse(raw).ok_or_else(|| format!("unrecognized event kind: {raw}").into())
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Associations)]
#[diesel(table_name = users)]
#[diesel(belongs_to(Profile))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub profile_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = groups)]
pub struct Group {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = groups)]
pub struct NewGroup {
    pub name: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Queryable, Associations)]
#[diesel(table_name = user_groups)]
#[diesel(belongs_to(User))]
#[diesel(belongs_to(Group))]
#[diesel(primary_key(user_id, group_id))]
pub struct UserGroup {
    pub user_id: i32,
    pub group_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = user_groups)]
pub struct NewUserGroup {
    pub user_id: i32,
    pub group_id: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = profiles)]
pub struct Profile {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Associations)]
#[diesel(table_name = profile_emails)]
#[diesel(belongs_to(Profile))]
pub struct ProfileEmail {
    pub id: i32,
    pub email: String,
    pub profile_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = profile_emails)]
pub struct NewProfileEmail {
    pub email: String,
    pub profile_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Associations)]
#[diesel(table_name = profile_addresses)]
#[diesel(belongs_to(Profile))]
pub struct ProfileAddress {
    pub id: i32,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub kind: Option<AddressKind>,
    pub profile_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Default, Insertable)]
#[diesel(table_name = profile_addresses)]
pub struct NewProfileAddress {
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub kind: Option<AddressKind>,
    pub profile_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = cases)]
pub struct Case {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Associations)]
#[diesel(table_name = files)]
#[diesel(belongs_to(Case))]
pub struct File {
    pub id: i32,
    pub file_number: String,
    pub appeal_file_number: Option<String>,
    pub status: Option<FileStatus>,
    pub case_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = files)]
pub struct NewFile {
    pub file_number: String,
    pub appeal_file_number: Option<String>,
    pub status: Option<FileStatus>,
    pub case_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Associations)]
#[diesel(table_name = parties)]
#[diesel(belongs_to(File))]
#[diesel(belongs_to(Profile))]
pub struct Party {
    pub id: i32,
    pub name: String,
    pub file_id: Option<i32>,
    pub profile_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = parties)]
pub struct NewParty {
    pub name: String,
    pub file_id: Option<i32>,
    pub profile_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = documents)]
pub struct Document {
    pub id: i32,
    pub file_name: String,
    pub data: Vec<u8>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocument {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Queryable, Associations)]
#[diesel(table_name = case_documents)]
#[diesel(belongs_to(Case))]
#[diesel(belongs_to(Document))]
#[diesel(primary_key(case_id, document_id))]
pub struct CaseDocument {
    pub case_id: i32,
    pub document_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = case_documents)]
pub struct NewCaseDocument {
    pub case_id: i32,
    pub document_id: i32,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Queryable, Associations)]
#[diesel(table_name = file_documents)]
#[diesel(belongs_to(File))]
#[diesel(belongs_to(Document))]
#[diesel(primary_key(file_id, document_id))]
pub struct FileDocument {
    pub file_id: i32,
    pub document_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = file_documents)]
pub struct NewFileDocument {
    pub file_id: i32,
    pub document_id: i32,
}

#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Associations)]
#[diesel(table_name = file_events)]
#[diesel(belongs_to(File))]
pub struct FileEvent {
    pub id: i32,
    pub title: String,
    pub event_date: NaiveDateTime,
    pub comment: Option<String>,
    pub kind: Option<FileEventKind>,
    pub file_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = file_events)]
pub struct NewFileEvent {
    pub title: String,
    pub event_date: NaiveDateTime,
    pub comment: Option<String>,
    pub kind: Option<FileEventKind>,
    pub file_id: Option<i32>,
}
