use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::{entities::lang, ports::LangRepository};

pub async fn connect_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    for pragma in ["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA foreign_keys=ON"]
    {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Seeds the language table on first boot so the per-language media listing
/// has codes to resolve against.
pub async fn seed_langs(langs: &dyn LangRepository) -> anyhow::Result<()> {
    if !langs.find_all().await?.is_empty() {
        return Ok(());
    }

    tracing::info!("seeding default languages");
    for (code, description) in [("en", "English"), ("pt", "Portuguese"), ("es", "Spanish")] {
        langs
            .create(lang::Model {
                lang_code: code.to_string(),
                description: description.to_string(),
            })
            .await?;
    }

    Ok(())
}
