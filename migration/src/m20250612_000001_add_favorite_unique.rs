use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One favorite per (user, media) pair. The service pre-checks the
        // pair, but the check and the insert are separate statements, so the
        // index is what actually closes the race between concurrent creates.
        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_media_unique")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::MediaId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_favorites_user_media_unique")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    UserId,
    MediaId,
}
