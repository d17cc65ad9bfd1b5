use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use sqlx::{PgExecutor, Postgres, Transaction};

#[derive(Serialize, sqlx::FromRow, Clone, Debug, PartialEq)]
pub struct Advert {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub owner: String,
    #[serde(serialize_with = "serialize_iso8601")]
    pub creation_time: NaiveDateTime,
}

/// ISO-8601 without an offset; the fraction is printed as microseconds and
/// only when it is non-zero.
pub fn to_iso8601(time: &NaiveDateTime) -> String {
    match time.nanosecond() {
        0 => time.format("%Y-%m-%dT%H:%M:%S").to_string(),
        _ => time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    }
}

fn serialize_iso8601<S: Serializer>(time: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_iso8601(time))
}

pub struct CreateAdvertPayload {
    pub title: String,
    pub description: String,
    pub owner: String,
}

pub struct UpdateAdvertPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UniqueViolation,
    UnexpectedError,
}

fn into_error(action: &str, err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::warn!("Unique constraint violated while trying to {}: {}", action, err);
            return Error::UniqueViolation;
        }
    }

    tracing::error!("Error occurred while trying to {}: {}", action, err);
    Error::UnexpectedError
}

pub async fn begin(pool: &sqlx::PgPool) -> Result<Transaction<'static, Postgres>, Error> {
    pool.begin()
        .await
        .map_err(|err| into_error("start a database transaction", err))
}

pub async fn commit(tx: Transaction<'static, Postgres>) -> Result<(), Error> {
    tx.commit()
        .await
        .map_err(|err| into_error("commit a database transaction", err))
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateAdvertPayload,
) -> Result<Advert, Error> {
    sqlx::query_as::<_, Advert>(
        "
        INSERT INTO app_advert
        (title, description, owner)
        VALUES ($1, $2, $3)
        RETURNING id, title, description, owner, creation_time
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.owner)
    .fetch_one(e)
    .await
    .map_err(|err| into_error("create an advert", err))
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<Advert>, Error> {
    sqlx::query_as::<_, Advert>(
        "SELECT id, title, description, owner, creation_time FROM app_advert WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| into_error(&format!("fetch advert with id {id}"), err))
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateAdvertPayload,
) -> Result<Option<Advert>, Error> {
    sqlx::query_as::<_, Advert>(
        "
            UPDATE app_advert SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                owner = COALESCE($3, owner)
            WHERE
                id = $4
            RETURNING id, title, description, owner, creation_time
        ",
    )
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.owner)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| into_error(&format!("update advert by id {id}"), err))
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Option<Advert>, Error> {
    sqlx::query_as::<_, Advert>(
        "
        DELETE FROM app_advert
        WHERE id = $1
        RETURNING id, title, description, owner, creation_time
        ",
    )
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| into_error(&format!("delete advert by id {id}"), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn advert(creation_time: NaiveDateTime) -> Advert {
        Advert {
            id: 7,
            title: "T1".to_string(),
            description: "D1".to_string(),
            owner: "O1".to_string(),
            creation_time,
        }
    }

    #[test]
    fn formats_whole_seconds_without_fraction() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(8, 5, 1))
            .unwrap();

        assert_eq!(to_iso8601(&time), "2024-03-09T08:05:01");
    }

    #[test]
    fn formats_fraction_as_microseconds() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_micro_opt(8, 5, 1, 120))
            .unwrap();

        assert_eq!(to_iso8601(&time), "2024-03-09T08:05:01.000120");
    }

    #[test]
    fn serializes_every_column() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(8, 5, 1))
            .unwrap();

        assert_eq!(
            json!(advert(time)),
            json!({
                "id": 7,
                "title": "T1",
                "description": "D1",
                "owner": "O1",
                "creation_time": "2024-03-09T08:05:01",
            })
        );
    }
}
