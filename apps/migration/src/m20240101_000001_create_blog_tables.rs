use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Publicacoes {
    Table,
    Id,
    Titulo,
    Descricao,
    Conteudo,
    DataCriacao,
    DataAtualizacao,
}

#[derive(DeriveIden)]
enum Comentarios {
    Table,
    Id,
    Texto,
    PublicacaoId,
    DataCriacao,
    DataAtualizacao,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publicacoes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publicacoes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Publicacoes::Titulo).string_len(255).not_null())
                    .col(ColumnDef::new(Publicacoes::Descricao).string_len(255).null())
                    .col(ColumnDef::new(Publicacoes::Conteudo).text().not_null())
                    .col(
                        ColumnDef::new(Publicacoes::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Publicacoes::DataAtualizacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comentarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comentarios::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comentarios::Texto).text().not_null())
                    .col(
                        ColumnDef::new(Comentarios::PublicacaoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comentarios::DataCriacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comentarios::DataAtualizacao)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comentarios_publicacao")
                            .from(Comentarios::Table, Comentarios::PublicacaoId)
                            .to(Publicacoes::Table, Publicacoes::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comentarios_publicacao_id")
                    .table(Comentarios::Table)
                    .col(Comentarios::PublicacaoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comentarios::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publicacoes::Table).to_owned())
            .await
    }
}
