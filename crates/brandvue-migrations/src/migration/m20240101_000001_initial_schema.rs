use sea_orm_migration::{prelude::*, schema::*};

/// Baseline of the configuration store: subsets, the page/pane/part hierarchy,
/// variables and metrics, entity configuration, averages and first-generation weightings
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Subsets
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("SubsetConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("Identifier"), 256))
                    .col(string_len(Alias::new("DisplayName"), 256))
                    .col(string_len_null(Alias::new("ParentGroupName"), 256))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(char_len_null(Alias::new("Iso2LetterCountryCode"), 2))
                    .col(text_null(Alias::new("SurveyIdToAllowedSegmentNames")))
                    .col(integer(Alias::new("Order")).default(0))
                    .col(boolean(Alias::new("Disabled")).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_SubsetConfigurations_Product_SubProductId_Identifier")
                    .table(Alias::new("SubsetConfigurations"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("Identifier"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        // Pages
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("Pages"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer_null(Alias::new("ParentId")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(string_len(Alias::new("DisplayName"), 256))
                    .col(text_null(Alias::new("MenuIcon")))
                    .col(string_len_null(Alias::new("PageType"), 256))
                    .col(text_null(Alias::new("HelpText")))
                    .col(integer_null(Alias::new("MinUserLevel")))
                    .col(boolean(Alias::new("StartPage")).default(false))
                    .col(text_null(Alias::new("Layout")))
                    .col(text_null(Alias::new("PageTitle")))
                    .col(text_null(Alias::new("AverageGroup")))
                    .col(text_null(Alias::new("Roles")))
                    .col(integer(Alias::new("PageDisplayIndex")).default(0))
                    .col(text_null(Alias::new("DefaultBase")))
                    .col(integer_null(Alias::new("DefaultPaneViewType")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Pages_ProductShortCode_SubProductId_Name")
                    .table(Alias::new("Pages"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("Name"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("PageSubsetConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("PageId")))
                    .col(integer(Alias::new("SubsetId")))
                    .col(text_null(Alias::new("HelpText")))
                    .col(boolean(Alias::new("Enabled")).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_PageSubsetConfigurations_Pages_PageId")
                            .from(Alias::new("PageSubsetConfigurations"), Alias::new("PageId"))
                            .to(Alias::new("Pages"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_PageSubsetConfigurations_SubsetConfigurations_SubsetId")
                            .from(Alias::new("PageSubsetConfigurations"), Alias::new("SubsetId"))
                            .to(Alias::new("SubsetConfigurations"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_PageSubsetConfigurations_PageId_SubsetId")
                    .table(Alias::new("PageSubsetConfigurations"))
                    .col(Alias::new("PageId"))
                    .col(Alias::new("SubsetId"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Panes
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("Panes"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("PaneId"), 256))
                    .col(string_len(Alias::new("PageName"), 256))
                    .col(integer_null(Alias::new("Height")))
                    .col(string_len_null(Alias::new("PaneType"), 256))
                    .col(text_null(Alias::new("Spec")))
                    .col(text_null(Alias::new("Spec2")))
                    .col(integer_null(Alias::new("View")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Panes_ProductShortCode_SubProductId_PaneId")
                    .table(Alias::new("Panes"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("PaneId"))
                    .to_owned(),
            )
            .await?;

        // Parts. The JSON-like columns are interpreted by the application only.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("Parts"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("PaneId"), 256))
                    .col(string_len(Alias::new("PartType"), 256))
                    .col(text_null(Alias::new("Spec1")))
                    .col(text_null(Alias::new("Spec2")))
                    .col(text_null(Alias::new("Spec3")))
                    .col(text_null(Alias::new("DefaultSplitBy")))
                    .col(text_null(Alias::new("HelpText")))
                    .col(string_len_null(Alias::new("DefaultAverageId"), 256))
                    .col(text_null(Alias::new("AutoMetrics")))
                    .col(text_null(Alias::new("AutoPanes")))
                    .col(text_null(Alias::new("Ordering")))
                    .col(integer_null(Alias::new("OrderingDirection")))
                    .col(text_null(Alias::new("Colours")))
                    .col(text_null(Alias::new("Filters")))
                    .col(text_null(Alias::new("XRange")))
                    .col(text_null(Alias::new("YRange")))
                    .col(text_null(Alias::new("Sections")))
                    .col(text_null(Alias::new("Breaks")))
                    .col(boolean(Alias::new("OverrideReportBreaks")).default(false))
                    .col(integer_null(Alias::new("ShowTop")))
                    .col(text_null(Alias::new("MultipleEntitySplitByAndMain")))
                    .col(integer_null(Alias::new("ReportOrder")))
                    .col(text_null(Alias::new("BaseExpressionOverride")))
                    .col(text_null(Alias::new("Waves")))
                    .col(text_null(Alias::new("SelectedEntityInstances")))
                    .col(text_null(Alias::new("AverageType")))
                    .col(integer_null(Alias::new("MultiBreakSelectedEntityInstance")))
                    .col(boolean(Alias::new("DisplayMeanValues")).default(false))
                    .col(boolean(Alias::new("DisplayStandardDeviation")).default(false))
                    .col(text_null(Alias::new("CustomConfigurationOptions")))
                    .col(boolean(Alias::new("ShowOvertimeData")).default(false))
                    .col(boolean(Alias::new("HideDataLabels")).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Parts_ProductShortCode_SubProductId_PaneId")
                    .table(Alias::new("Parts"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("PaneId"))
                    .to_owned(),
            )
            .await?;

        // Variables and the dependency graph between them
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("VariableConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Identifier"), 256))
                    .col(string_len(Alias::new("DisplayName"), 256))
                    .col(text_null(Alias::new("Definition")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_VariableConfigurations_Product_SubProductId_Identifier")
                    .table(Alias::new("VariableConfigurations"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("Identifier"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("VariableDependencies"))
                    .if_not_exists()
                    .col(integer(Alias::new("VariableId")))
                    .col(integer(Alias::new("DependentUponVariableId")))
                    .primary_key(
                        Index::create()
                            .name("PK_VariableDependencies")
                            .col(Alias::new("VariableId"))
                            .col(Alias::new("DependentUponVariableId")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_VariableDependencies_VariableConfigurations_VariableId")
                            .from(Alias::new("VariableDependencies"), Alias::new("VariableId"))
                            .to(Alias::new("VariableConfigurations"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_VariableDependencies_VariableConfigs_DependentUponVariableId")
                            .from(
                                Alias::new("VariableDependencies"),
                                Alias::new("DependentUponVariableId"),
                            )
                            .to(Alias::new("VariableConfigurations"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_VariableDependencies_DependentUponVariableId")
                    .table(Alias::new("VariableDependencies"))
                    .col(Alias::new("DependentUponVariableId"))
                    .to_owned(),
            )
            .await?;

        // Metrics
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("MetricConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(string_len_null(Alias::new("VarCode"), 256))
                    .col(string_len_null(Alias::new("CalcType"), 50))
                    .col(text_null(Alias::new("Field")))
                    .col(text_null(Alias::new("Field2")))
                    .col(text_null(Alias::new("FieldExpression")))
                    .col(text_null(Alias::new("TrueVals")))
                    .col(text_null(Alias::new("BaseField")))
                    .col(text_null(Alias::new("BaseVals")))
                    .col(text_null(Alias::new("BaseExpression")))
                    .col(string_len_null(Alias::new("NumFormat"), 50))
                    .col(text_null(Alias::new("HelpText")))
                    .col(string_len_null(Alias::new("DefaultSplitByEntityType"), 256))
                    .col(text_null(Alias::new("FilterValueMapping")))
                    .col(text_null(Alias::new("Subset")))
                    .col(boolean(Alias::new("DisableMeasure")).default(false))
                    .col(boolean(Alias::new("DisableFilter")).default(false))
                    .col(boolean(Alias::new("EligibleForCrosstabOrAllVue")).default(true))
                    .col(double_null(Alias::new("ScaleFactor")))
                    .col(text_null(Alias::new("EntityInstanceIdMeanCalculationValueMapping")))
                    .col(string_len_null(Alias::new("OriginalMetricName"), 256))
                    .col(integer(Alias::new("IsAutoGenerated")).default(0))
                    .col(integer_null(Alias::new("VariableConfigurationId")))
                    .col(integer_null(Alias::new("BaseVariableConfigurationId")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_MetricConfigurations_VariableConfigs_VariableConfigId")
                            .from(
                                Alias::new("MetricConfigurations"),
                                Alias::new("VariableConfigurationId"),
                            )
                            .to(Alias::new("VariableConfigurations"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_MetricConfigurations_VariableConfigs_BaseVariableConfigId")
                            .from(
                                Alias::new("MetricConfigurations"),
                                Alias::new("BaseVariableConfigurationId"),
                            )
                            .to(Alias::new("VariableConfigurations"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_MetricConfigurations_ProductShortCode_SubProductId_Name")
                    .table(Alias::new("MetricConfigurations"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("Name"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_MetricConfigurations_VariableConfigurationId")
                    .table(Alias::new("MetricConfigurations"))
                    .col(Alias::new("VariableConfigurationId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_MetricConfigurations_BaseVariableConfigurationId")
                    .table(Alias::new("MetricConfigurations"))
                    .col(Alias::new("BaseVariableConfigurationId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("LinkedMetric"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("MetricName"), 256))
                    .col(text_null(Alias::new("LinkedMetricNames")))
                    .to_owned(),
            )
            .await?;

        // Entities ("brands"), their instances and named instance sets
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("EntityTypeConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Identifier"), 256))
                    .col(string_len(Alias::new("DisplayNameSingular"), 256))
                    .col(string_len(Alias::new("DisplayNamePlural"), 256))
                    .col(text_null(Alias::new("SurveyChoiceSetNames")))
                    .col(integer(Alias::new("CreatedFrom")).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_EntityTypeConfigurations_Product_SubProductId_Identifier")
                    .table(Alias::new("EntityTypeConfigurations"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("Identifier"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("EntityInstanceConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("EntityTypeIdentifier"), 256))
                    .col(integer(Alias::new("SurveyChoiceId")))
                    .col(text_null(Alias::new("DisplayNameOverrideBySubset")))
                    .col(text_null(Alias::new("EnabledBySubset")))
                    .col(text_null(Alias::new("StartDateBySubset")))
                    .col(text_null(Alias::new("ImageUrl")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_EntityInstanceConfigurations_Scope_Type_SurveyChoiceId")
                    .table(Alias::new("EntityInstanceConfigurations"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("EntityTypeIdentifier"))
                    .col(Alias::new("SurveyChoiceId"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("EntitySetConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(string_len(Alias::new("EntityType"), 256))
                    .col(string_len_null(Alias::new("Subset"), 256))
                    .col(string_len_null(Alias::new("Organisation"), 256))
                    .col(text(Alias::new("Instances")))
                    .col(integer_null(Alias::new("MainInstance")))
                    .col(boolean(Alias::new("IsFallback")).default(false))
                    .col(boolean(Alias::new("IsSectorSet")).default(false))
                    .col(boolean(Alias::new("IsDisabled")).default(false))
                    .col(boolean(Alias::new("IsDefault")).default(false))
                    .col(string_len_null(Alias::new("LastUpdatedUserId"), 450))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("EntitySetAverageMappingConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("ParentEntitySetId")))
                    .col(integer(Alias::new("ChildEntitySetId")))
                    .col(boolean(Alias::new("ExcludeMainInstance")).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_EntitySetAvgMapping_EntitySetConfigs_ParentEntitySetId")
                            .from(
                                Alias::new("EntitySetAverageMappingConfigurations"),
                                Alias::new("ParentEntitySetId"),
                            )
                            .to(Alias::new("EntitySetConfigurations"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_EntitySetAverageMappingConfigurations_ParentEntitySetId")
                    .table(Alias::new("EntitySetAverageMappingConfigurations"))
                    .col(Alias::new("ParentEntitySetId"))
                    .to_owned(),
            )
            .await?;

        // Averages
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("Averages"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("AverageId"), 256))
                    .col(string_len(Alias::new("DisplayName"), 256))
                    .col(integer(Alias::new("Order")).default(0))
                    .col(text_null(Alias::new("Group")))
                    .col(text(Alias::new("SubsetIds")))
                    .col(integer(Alias::new("TotalisationPeriodUnit")).default(0))
                    .col(integer(Alias::new("NumberOfPeriodsInAverage")).default(1))
                    .col(integer(Alias::new("WeightingMethod")).default(0))
                    .col(boolean(Alias::new("Disabled")).default(false))
                    .to_owned(),
            )
            .await?;

        // First-generation weighting configuration
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("WeightingStrategies"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("SubsetId"), 256))
                    .col(string_len(Alias::new("Name"), 256))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("WeightingSchemes"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("WeightingStrategyId")))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(text_null(Alias::new("WeightingSchemeDetails")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_WeightingSchemes_WeightingStrategies_WeightingStrategyId")
                            .from(Alias::new("WeightingSchemes"), Alias::new("WeightingStrategyId"))
                            .to(Alias::new("WeightingStrategies"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Per product/sub-product UI and feature configuration bag
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("AllVueConfigurations"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len(Alias::new("SubProductId"), 256))
                    .col(boolean(Alias::new("IsReportsTabAvailable")).default(true))
                    .col(boolean(Alias::new("IsDataTabAvailable")).default(true))
                    .col(boolean(Alias::new("IsDocumentsTabAvailable")).default(true))
                    .col(boolean(Alias::new("IsQuotaTabAvailable")).default(true))
                    .col(boolean(Alias::new("IsHelpIconAvailable")).default(true))
                    .col(boolean(Alias::new("AllowLoadFromMapFile")).default(false))
                    .col(text_null(Alias::new("AdditionalUiWidgets")))
                    .col(text_null(Alias::new("ReportVueConfiguration")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_AllVueConfigurations_ProductShortCode_SubProductId")
                    .table(Alias::new("AllVueConfigurations"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Small lookup tables
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("Bookmarks"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("AppBase"), 256))
                    .col(string_len(Alias::new("Url"), 2048))
                    .col(timestamp(Alias::new("CreatedDate")).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Bookmarks_AppBase_Url")
                    .table(Alias::new("Bookmarks"))
                    .col(Alias::new("AppBase"))
                    .col(Alias::new("Url"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("SupportableUsers"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("UserId"), 450))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_SupportableUsers_UserId")
                    .table(Alias::new("SupportableUsers"))
                    .col(Alias::new("UserId"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("ColourConfigurations"))
                    .if_not_exists()
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len(Alias::new("Organisation"), 256))
                    .col(string_len(Alias::new("EntityType"), 256))
                    .col(integer(Alias::new("EntityInstanceId")))
                    .col(string_len(Alias::new("Colour"), 20))
                    .primary_key(
                        Index::create()
                            .name("PK_ColourConfigurations")
                            .col(Alias::new("ProductShortCode"))
                            .col(Alias::new("Organisation"))
                            .col(Alias::new("EntityType"))
                            .col(Alias::new("EntityInstanceId")),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children before parents
        for table in [
            "ColourConfigurations",
            "SupportableUsers",
            "Bookmarks",
            "AllVueConfigurations",
            "WeightingSchemes",
            "WeightingStrategies",
            "Averages",
            "EntitySetAverageMappingConfigurations",
            "EntitySetConfigurations",
            "EntityInstanceConfigurations",
            "EntityTypeConfigurations",
            "LinkedMetric",
            "MetricConfigurations",
            "VariableDependencies",
            "VariableConfigurations",
            "Parts",
            "Panes",
            "PageSubsetConfigurations",
            "Pages",
            "SubsetConfigurations",
        ] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}
