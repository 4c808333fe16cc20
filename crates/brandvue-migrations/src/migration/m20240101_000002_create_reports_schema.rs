use crate::ddl;
use brandvue_core::{REPORTS_SCHEMA, SAVED_BREAKS_SCHEMA};
use sea_orm_migration::{prelude::*, schema::*};

/// User-authored reports, report templates and saved break combinations
#[derive(DeriveMigrationName)]
pub struct Migration;

fn reports(table: &str) -> (Alias, Alias) {
    (Alias::new(REPORTS_SCHEMA), Alias::new(table))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ddl::create_schema(manager, REPORTS_SCHEMA).await?;
        ddl::create_schema(manager, SAVED_BREAKS_SCHEMA).await?;

        manager
            .create_table(
                Table::create()
                    .table(reports("SavedReports"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(integer(Alias::new("ReportPageId")))
                    .col(string_len(Alias::new("CreatedByUserId"), 450))
                    .col(string_len_null(Alias::new("LastModifiedByUser"), 450))
                    .col(timestamp_null(Alias::new("ModifiedDate")))
                    .col(uuid_null(Alias::new("ModifiedGuid")))
                    .col(boolean(Alias::new("IsShared")).default(false))
                    .col(integer(Alias::new("ReportType")).default(0))
                    .col(text_null(Alias::new("Order")))
                    .col(integer(Alias::new("DecimalPlaces")).default(0))
                    .col(text_null(Alias::new("Waves")))
                    .col(text_null(Alias::new("Breaks")))
                    .col(text_null(Alias::new("DefaultFilters")))
                    .col(integer_null(Alias::new("BaseTypeOverride")))
                    .col(integer_null(Alias::new("BaseVariableId")))
                    .col(boolean(Alias::new("IsDataWeighted")).default(false))
                    .col(boolean(Alias::new("HideEmptyRows")).default(false))
                    .col(boolean(Alias::new("HideEmptyColumns")).default(false))
                    .col(boolean(Alias::new("HideTotalColumn")).default(false))
                    .col(boolean(Alias::new("HideDataLabels")).default(false))
                    .col(boolean(Alias::new("HighlightLowSample")).default(false))
                    .col(boolean(Alias::new("HighlightSignificance")).default(false))
                    .col(integer(Alias::new("SignificanceType")).default(0))
                    .col(integer(Alias::new("SigConfidenceLevel")).default(0))
                    .col(integer(Alias::new("DisplaySignificanceDifferences")).default(0))
                    .col(boolean(Alias::new("IncludeCounts")).default(false))
                    .col(boolean(Alias::new("CalculateIndexScores")).default(false))
                    .col(boolean(Alias::new("SinglePageExport")).default(false))
                    .col(boolean(Alias::new("ShowMultipleTablesAsSingle")).default(false))
                    .col(string_len_null(Alias::new("SubsetId"), 256))
                    .col(string_len_null(Alias::new("AverageId"), 256))
                    .col(text_null(Alias::new("OverTimeConfig")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_SavedReports_Pages_ReportPageId")
                            .from(reports("SavedReports"), Alias::new("ReportPageId"))
                            .to(Alias::new("Pages"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_SavedReports_ReportPageId")
                    .table(reports("SavedReports"))
                    .col(Alias::new("ReportPageId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(reports("DefaultSavedReports"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(integer(Alias::new("ReportId")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_DefaultSavedReports_SavedReports_ReportId")
                            .from(reports("DefaultSavedReports"), Alias::new("ReportId"))
                            .to(reports("SavedReports"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One default report per product/sub-product
        manager
            .create_index(
                Index::create()
                    .name("IX_DefaultSavedReports_ProductShortCode_SubProductId")
                    .table(reports("DefaultSavedReports"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_DefaultSavedReports_ReportId")
                    .table(reports("DefaultSavedReports"))
                    .col(Alias::new("ReportId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(reports("ReportTemplates"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("TemplateDisplayName"), 256))
                    .col(text_null(Alias::new("TemplateDescription")))
                    .col(string_len(Alias::new("UserId"), 450))
                    .col(timestamp(Alias::new("CreatedAt")).default(Expr::current_timestamp()))
                    .col(text(Alias::new("SavedReportTemplate")))
                    .col(text(Alias::new("ReportTemplateParts")))
                    .col(text_null(Alias::new("BaseVariable")))
                    .col(text_null(Alias::new("UserDefinedVariableDefinitions")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table((
                        Alias::new(SAVED_BREAKS_SCHEMA),
                        Alias::new("SavedBreakCombinations"),
                    ))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(boolean(Alias::new("IsShared")).default(false))
                    .col(string_len(Alias::new("CreatedByUserId"), 450))
                    .col(text(Alias::new("Breaks")))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table((
                        Alias::new(SAVED_BREAKS_SCHEMA),
                        Alias::new("SavedBreakCombinations"),
                    ))
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        for table in ["ReportTemplates", "DefaultSavedReports", "SavedReports"] {
            manager
                .drop_table(Table::drop().table(reports(table)).if_exists().to_owned())
                .await?;
        }

        ddl::drop_schema(manager, SAVED_BREAKS_SCHEMA).await?;
        ddl::drop_schema(manager, REPORTS_SCHEMA).await
    }
}
