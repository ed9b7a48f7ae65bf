use crate::models::DbSlot;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_slot(
    pool: &Pool<Postgres>,
    doctor_id: i64,
    day: NaiveDate,
    from_hour: Option<&str>,
    duration: i64,
) -> Result<DbSlot> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        INSERT INTO slot (day, from_hour, duration, doctor_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, day, from_hour, duration, doctor_id
        "#,
    )
    .bind(day)
    .bind(from_hour)
    .bind(duration)
    .bind(doctor_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Slot created: id={}, doctor_id={}", slot.id, doctor_id);
    Ok(slot)
}

pub async fn get_slots_by_doctor_id(pool: &Pool<Postgres>, doctor_id: i64) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, day, from_hour, duration, doctor_id
        FROM slot
        WHERE doctor_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(doctor_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}
