//! Schema setup for the `imoveis` and `comodos` tables

use sqlx::PgPool;

use super::DbError;

/// Create both tables if they don't exist yet.
///
/// `comodos.imovel_id` references `imoveis(id)` without `ON DELETE CASCADE`.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS imoveis (
            id SERIAL PRIMARY KEY,
            descricao TEXT NOT NULL,
            data_compra TIMESTAMPTZ NOT NULL,
            endereco TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS comodos (
            id SERIAL PRIMARY KEY,
            nome TEXT NOT NULL,
            imovel_id INTEGER NOT NULL REFERENCES imoveis(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_comodos_imovel_id ON comodos(imovel_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
