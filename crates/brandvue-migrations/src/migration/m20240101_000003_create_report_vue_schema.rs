use crate::ddl;
use brandvue_core::REPORT_VUE_SCHEMA;
use sea_orm_migration::{prelude::*, schema::*};

/// Versioned report projects: a project is released as numbered snapshots of pages
#[derive(DeriveMigrationName)]
pub struct Migration;

fn report_vue(table: &str) -> (Alias, Alias) {
    (Alias::new(REPORT_VUE_SCHEMA), Alias::new(table))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ddl::create_schema(manager, REPORT_VUE_SCHEMA).await?;

        manager
            .create_table(
                Table::create()
                    .table(report_vue("Projects"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(string_len(Alias::new("CreatedByUserId"), 450))
                    .col(timestamp(Alias::new("CreatedDate")).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(report_vue("Releases"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("ProjectId")))
                    .col(integer(Alias::new("VersionNumber")))
                    .col(timestamp(Alias::new("ReleaseDate")).default(Expr::current_timestamp()))
                    .col(string_len(Alias::new("ReleasedByUserId"), 450))
                    .col(boolean(Alias::new("IsActive")).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_Releases_Projects_ProjectId")
                            .from(report_vue("Releases"), Alias::new("ProjectId"))
                            .to(report_vue("Projects"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Releases_ProjectId_VersionNumber")
                    .table(report_vue("Releases"))
                    .col(Alias::new("ProjectId"))
                    .col(Alias::new("VersionNumber"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(report_vue("Pages"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("ReleaseId")))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(integer(Alias::new("PageOrder")).default(0))
                    .col(text(Alias::new("Definition")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_Pages_Releases_ReleaseId")
                            .from(report_vue("Pages"), Alias::new("ReleaseId"))
                            .to(report_vue("Releases"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Pages_ReleaseId")
                    .table(report_vue("Pages"))
                    .col(Alias::new("ReleaseId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(report_vue("Tags"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("PageId")))
                    .col(string_len(Alias::new("Name"), 100))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_Tags_Pages_PageId")
                            .from(report_vue("Tags"), Alias::new("PageId"))
                            .to(report_vue("Pages"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Tags_PageId_Name")
                    .table(report_vue("Tags"))
                    .col(Alias::new("PageId"))
                    .col(Alias::new("Name"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["Tags", "Pages", "Releases", "Projects"] {
            manager
                .drop_table(Table::drop().table(report_vue(table)).if_exists().to_owned())
                .await?;
        }
        ddl::drop_schema(manager, REPORT_VUE_SCHEMA).await
    }
}
