use crate::models::DbDoctor;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_doctor(
    pool: &Pool<Postgres>,
    first_name: Option<&str>,
    last_name: Option<&str>,
    specialization: Option<&str>,
) -> Result<DbDoctor> {
    let doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        INSERT INTO doctor (first_name, last_name, specialization)
        VALUES ($1, $2, $3)
        RETURNING id, first_name, last_name, specialization
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(specialization)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Doctor created: id={}", doctor.id);
    Ok(doctor)
}

pub async fn get_doctor_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbDoctor>> {
    tracing::debug!("Getting doctor by id: {}", id);

    let doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        SELECT id, first_name, last_name, specialization
        FROM doctor
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if doctor.is_none() {
        tracing::debug!("Doctor not found: id={}", id);
    }

    Ok(doctor)
}
