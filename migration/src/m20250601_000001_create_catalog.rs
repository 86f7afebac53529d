use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Langs::Table)
                    .if_not_exists()
                    .col(string(Langs::LangCode).primary_key())
                    .col(string(Langs::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::FullName))
                    .col(string(Users::Email))
                    .col(string(Users::Password))
                    .col(string(Users::Cpf))
                    .col(string_null(Users::LangCode))
                    .col(big_integer(Users::CreatedAt))
                    .col(big_integer(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_cpf_unique")
                    .table(Users::Table)
                    .col(Users::Cpf)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Medias::Table)
                    .if_not_exists()
                    .col(pk_auto(Medias::Id))
                    .col(string(Medias::Title))
                    .col(text_null(Medias::Description))
                    .col(string(Medias::MediaType))
                    .col(integer(Medias::ReleaseYear))
                    .col(string(Medias::Genre))
                    .col(integer_null(Medias::GenreId))
                    .col(string_null(Medias::LangCode))
                    .col(text_null(Medias::ImageUrl))
                    .col(text_null(Medias::TrailerUrl))
                    .col(string_null(Medias::ReleaseDate))
                    .col(big_integer(Medias::CreatedAt))
                    .col(big_integer(Medias::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_medias_lang_code")
                    .table(Medias::Table)
                    .col(Medias::LangCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer(Favorites::MediaId))
                    .col(big_integer(Favorites::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_media_id")
                            .from(Favorites::Table, Favorites::MediaId)
                            .to(Medias::Table, Medias::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_id")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Favorites::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Medias::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Langs::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Langs {
    Table,
    LangCode,
    Description,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FullName,
    Email,
    Password,
    Cpf,
    LangCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Medias {
    Table,
    Id,
    Title,
    Description,
    MediaType,
    ReleaseYear,
    Genre,
    GenreId,
    LangCode,
    ImageUrl,
    TrailerUrl,
    ReleaseDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    MediaId,
    CreatedAt,
}
