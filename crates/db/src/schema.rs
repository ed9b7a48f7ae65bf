use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create doctor table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctor (
            id BIGSERIAL PRIMARY KEY,
            first_name VARCHAR(255) NULL,
            last_name VARCHAR(255) NULL,
            specialization VARCHAR(255) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create slot table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slot (
            id BIGSERIAL PRIMARY KEY,
            day DATE NOT NULL,
            from_hour VARCHAR(255) NULL,
            duration BIGINT NOT NULL,
            doctor_id BIGINT NOT NULL REFERENCES doctor(id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_slot_doctor_id ON slot(doctor_id);")
        .execute(pool)
        .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
