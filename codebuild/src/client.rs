/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// An ergonomic service client for AWS CodeBuild.
///
/// Each operation returns a fluent builder. Calling `send()` on the builder validates the
/// input, dispatches the request and parses the response.
#[derive(std::fmt::Debug, std::clone::Clone)]
pub struct Client {
    handle: std::sync::Arc<Handle>,
}
impl Client {
    /// Creates a client from configuration read from the environment
    pub fn from_env() -> Self {
        Self::from_conf(crate::Config::builder().build())
    }

    pub fn from_conf(conf: crate::Config) -> Self {
        Self::from_conf_conn(conf, aws_hyper::conn::Standard::https())
    }

    pub fn from_conf_conn(conf: crate::Config, conn: aws_hyper::conn::Standard) -> Self {
        let client = aws_hyper::Client::new(conn);
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }

    pub fn client(&self) -> &aws_hyper::Client<aws_hyper::conn::Standard> {
        &self.handle.client
    }

    pub fn batch_delete_builds(&self) -> fluent_builders::BatchDeleteBuilds {
        fluent_builders::BatchDeleteBuilds::new(self.handle.clone())
    }

    pub fn batch_get_builds(&self) -> fluent_builders::BatchGetBuilds {
        fluent_builders::BatchGetBuilds::new(self.handle.clone())
    }

    pub fn batch_get_projects(&self) -> fluent_builders::BatchGetProjects {
        fluent_builders::BatchGetProjects::new(self.handle.clone())
    }

    pub fn batch_get_report_groups(&self) -> fluent_builders::BatchGetReportGroups {
        fluent_builders::BatchGetReportGroups::new(self.handle.clone())
    }

    pub fn batch_get_reports(&self) -> fluent_builders::BatchGetReports {
        fluent_builders::BatchGetReports::new(self.handle.clone())
    }

    pub fn create_project(&self) -> fluent_builders::CreateProject {
        fluent_builders::CreateProject::new(self.handle.clone())
    }

    pub fn create_report_group(&self) -> fluent_builders::CreateReportGroup {
        fluent_builders::CreateReportGroup::new(self.handle.clone())
    }

    pub fn create_webhook(&self) -> fluent_builders::CreateWebhook {
        fluent_builders::CreateWebhook::new(self.handle.clone())
    }

    pub fn delete_project(&self) -> fluent_builders::DeleteProject {
        fluent_builders::DeleteProject::new(self.handle.clone())
    }

    pub fn delete_report(&self) -> fluent_builders::DeleteReport {
        fluent_builders::DeleteReport::new(self.handle.clone())
    }

    pub fn delete_report_group(&self) -> fluent_builders::DeleteReportGroup {
        fluent_builders::DeleteReportGroup::new(self.handle.clone())
    }

    pub fn delete_resource_policy(&self) -> fluent_builders::DeleteResourcePolicy {
        fluent_builders::DeleteResourcePolicy::new(self.handle.clone())
    }

    pub fn delete_source_credentials(&self) -> fluent_builders::DeleteSourceCredentials {
        fluent_builders::DeleteSourceCredentials::new(self.handle.clone())
    }

    pub fn delete_webhook(&self) -> fluent_builders::DeleteWebhook {
        fluent_builders::DeleteWebhook::new(self.handle.clone())
    }

    pub fn describe_test_cases(&self) -> fluent_builders::DescribeTestCases {
        fluent_builders::DescribeTestCases::new(self.handle.clone())
    }

    pub fn get_resource_policy(&self) -> fluent_builders::GetResourcePolicy {
        fluent_builders::GetResourcePolicy::new(self.handle.clone())
    }

    pub fn import_source_credentials(&self) -> fluent_builders::ImportSourceCredentials {
        fluent_builders::ImportSourceCredentials::new(self.handle.clone())
    }

    pub fn invalidate_project_cache(&self) -> fluent_builders::InvalidateProjectCache {
        fluent_builders::InvalidateProjectCache::new(self.handle.clone())
    }

    pub fn list_builds(&self) -> fluent_builders::ListBuilds {
        fluent_builders::ListBuilds::new(self.handle.clone())
    }

    pub fn list_builds_for_project(&self) -> fluent_builders::ListBuildsForProject {
        fluent_builders::ListBuildsForProject::new(self.handle.clone())
    }

    pub fn list_curated_environment_images(&self) -> fluent_builders::ListCuratedEnvironmentImages {
        fluent_builders::ListCuratedEnvironmentImages::new(self.handle.clone())
    }

    pub fn list_projects(&self) -> fluent_builders::ListProjects {
        fluent_builders::ListProjects::new(self.handle.clone())
    }

    pub fn list_report_groups(&self) -> fluent_builders::ListReportGroups {
        fluent_builders::ListReportGroups::new(self.handle.clone())
    }

    pub fn list_reports(&self) -> fluent_builders::ListReports {
        fluent_builders::ListReports::new(self.handle.clone())
    }

    pub fn list_reports_for_report_group(&self) -> fluent_builders::ListReportsForReportGroup {
        fluent_builders::ListReportsForReportGroup::new(self.handle.clone())
    }

    pub fn list_shared_projects(&self) -> fluent_builders::ListSharedProjects {
        fluent_builders::ListSharedProjects::new(self.handle.clone())
    }

    pub fn list_shared_report_groups(&self) -> fluent_builders::ListSharedReportGroups {
        fluent_builders::ListSharedReportGroups::new(self.handle.clone())
    }

    pub fn list_source_credentials(&self) -> fluent_builders::ListSourceCredentials {
        fluent_builders::ListSourceCredentials::new(self.handle.clone())
    }

    pub fn put_resource_policy(&self) -> fluent_builders::PutResourcePolicy {
        fluent_builders::PutResourcePolicy::new(self.handle.clone())
    }

    pub fn start_build(&self) -> fluent_builders::StartBuild {
        fluent_builders::StartBuild::new(self.handle.clone())
    }

    pub fn stop_build(&self) -> fluent_builders::StopBuild {
        fluent_builders::StopBuild::new(self.handle.clone())
    }

    pub fn update_project(&self) -> fluent_builders::UpdateProject {
        fluent_builders::UpdateProject::new(self.handle.clone())
    }

    pub fn update_report_group(&self) -> fluent_builders::UpdateReportGroup {
        fluent_builders::UpdateReportGroup::new(self.handle.clone())
    }

    pub fn update_webhook(&self) -> fluent_builders::UpdateWebhook {
        fluent_builders::UpdateWebhook::new(self.handle.clone())
    }
}
pub mod fluent_builders {
    /// Deletes one or more builds.
    #[derive(std::fmt::Debug)]
    pub struct BatchDeleteBuilds {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_delete_builds_input::Builder,
    }
    impl BatchDeleteBuilds {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::batch_delete_builds_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchDeleteBuildsOutput,
            aws_hyper::SdkError<crate::error::BatchDeleteBuildsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// Appends an item to `ids`.
        pub fn ids(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.ids(input);
            self
        }
        pub fn set_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_ids(input);
            self
        }
    }
    /// Gets information about one or more builds.
    #[derive(std::fmt::Debug)]
    pub struct BatchGetBuilds {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_get_builds_input::Builder,
    }
    impl BatchGetBuilds {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::batch_get_builds_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchGetBuildsOutput,
            aws_hyper::SdkError<crate::error::BatchGetBuildsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// Appends an item to `ids`.
        pub fn ids(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.ids(input);
            self
        }
        pub fn set_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_ids(input);
            self
        }
    }
    /// Gets information about one or more build projects.
    #[derive(std::fmt::Debug)]
    pub struct BatchGetProjects {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_get_projects_input::Builder,
    }
    impl BatchGetProjects {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::batch_get_projects_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchGetProjectsOutput,
            aws_hyper::SdkError<crate::error::BatchGetProjectsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// Appends an item to `names`.
        pub fn names(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.names(input);
            self
        }
        pub fn set_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_names(input);
            self
        }
    }
    /// Returns an array of report groups.
    #[derive(std::fmt::Debug)]
    pub struct BatchGetReportGroups {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_get_report_groups_input::Builder,
    }
    impl BatchGetReportGroups {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::batch_get_report_groups_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchGetReportGroupsOutput,
            aws_hyper::SdkError<crate::error::BatchGetReportGroupsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// Appends an item to `report_group_arns`.
        pub fn report_group_arns(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.report_group_arns(input);
            self
        }
        pub fn set_report_group_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_report_group_arns(input);
            self
        }
    }
    /// Returns an array of reports.
    #[derive(std::fmt::Debug)]
    pub struct BatchGetReports {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_get_reports_input::Builder,
    }
    impl BatchGetReports {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::batch_get_reports_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchGetReportsOutput,
            aws_hyper::SdkError<crate::error::BatchGetReportsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// Appends an item to `report_arns`.
        pub fn report_arns(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.report_arns(input);
            self
        }
        pub fn set_report_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.inner = self.inner.set_report_arns(input);
            self
        }
    }
    /// Creates a build project.
    #[derive(std::fmt::Debug)]
    pub struct CreateProject {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_project_input::Builder,
    }
    impl CreateProject {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_project_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateProjectOutput,
            aws_hyper::SdkError<crate::error::CreateProjectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn source(mut self, input: crate::model::ProjectSource) -> Self {
            self.inner = self.inner.source(input);
            self
        }
        pub fn set_source(mut self, input: std::option::Option<crate::model::ProjectSource>) -> Self {
            self.inner = self.inner.set_source(input);
            self
        }
        /// Appends an item to `secondary_sources`.
        pub fn secondary_sources(mut self, input: impl Into<crate::model::ProjectSource>) -> Self {
            self.inner = self.inner.secondary_sources(input);
            self
        }
        pub fn set_secondary_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>) -> Self {
            self.inner = self.inner.set_secondary_sources(input);
            self
        }
        pub fn source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.source_version(input);
            self
        }
        pub fn set_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_source_version(input);
            self
        }
        /// Appends an item to `secondary_source_versions`.
        pub fn secondary_source_versions(mut self, input: impl Into<crate::model::ProjectSourceVersion>) -> Self {
            self.inner = self.inner.secondary_source_versions(input);
            self
        }
        pub fn set_secondary_source_versions(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>) -> Self {
            self.inner = self.inner.set_secondary_source_versions(input);
            self
        }
        pub fn artifacts(mut self, input: crate::model::ProjectArtifacts) -> Self {
            self.inner = self.inner.artifacts(input);
            self
        }
        pub fn set_artifacts(mut self, input: std::option::Option<crate::model::ProjectArtifacts>) -> Self {
            self.inner = self.inner.set_artifacts(input);
            self
        }
        /// Appends an item to `secondary_artifacts`.
        pub fn secondary_artifacts(mut self, input: impl Into<crate::model::ProjectArtifacts>) -> Self {
            self.inner = self.inner.secondary_artifacts(input);
            self
        }
        pub fn set_secondary_artifacts(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>) -> Self {
            self.inner = self.inner.set_secondary_artifacts(input);
            self
        }
        pub fn cache(mut self, input: crate::model::ProjectCache) -> Self {
            self.inner = self.inner.cache(input);
            self
        }
        pub fn set_cache(mut self, input: std::option::Option<crate::model::ProjectCache>) -> Self {
            self.inner = self.inner.set_cache(input);
            self
        }
        pub fn environment(mut self, input: crate::model::ProjectEnvironment) -> Self {
            self.inner = self.inner.environment(input);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<crate::model::ProjectEnvironment>) -> Self {
            self.inner = self.inner.set_environment(input);
            self
        }
        pub fn service_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.service_role(input);
            self
        }
        pub fn set_service_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_service_role(input);
            self
        }
        pub fn timeout_in_minutes(mut self, input: i32) -> Self {
            self.inner = self.inner.timeout_in_minutes(input);
            self
        }
        pub fn set_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_timeout_in_minutes(input);
            self
        }
        pub fn queued_timeout_in_minutes(mut self, input: i32) -> Self {
            self.inner = self.inner.queued_timeout_in_minutes(input);
            self
        }
        pub fn set_queued_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_queued_timeout_in_minutes(input);
            self
        }
        pub fn encryption_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.encryption_key(input);
            self
        }
        pub fn set_encryption_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_encryption_key(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.inner = self.inner.vpc_config(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.inner = self.inner.set_vpc_config(input);
            self
        }
        pub fn badge_enabled(mut self, input: bool) -> Self {
            self.inner = self.inner.badge_enabled(input);
            self
        }
        pub fn set_badge_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_badge_enabled(input);
            self
        }
        pub fn logs_config(mut self, input: crate::model::LogsConfig) -> Self {
            self.inner = self.inner.logs_config(input);
            self
        }
        pub fn set_logs_config(mut self, input: std::option::Option<crate::model::LogsConfig>) -> Self {
            self.inner = self.inner.set_logs_config(input);
            self
        }
        /// Appends an item to `file_system_locations`.
        pub fn file_system_locations(mut self, input: impl Into<crate::model::ProjectFileSystemLocation>) -> Self {
            self.inner = self.inner.file_system_locations(input);
            self
        }
        pub fn set_file_system_locations(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>) -> Self {
            self.inner = self.inner.set_file_system_locations(input);
            self
        }
    }
    /// Creates a report group. A report group contains a collection of reports.
    #[derive(std::fmt::Debug)]
    pub struct CreateReportGroup {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_report_group_input::Builder,
    }
    impl CreateReportGroup {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_report_group_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateReportGroupOutput,
            aws_hyper::SdkError<crate::error::CreateReportGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn r#type(mut self, input: crate::model::ReportType) -> Self {
            self.inner = self.inner.r#type(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ReportType>) -> Self {
            self.inner = self.inner.set_type(input);
            self
        }
        pub fn export_config(mut self, input: crate::model::ReportExportConfig) -> Self {
            self.inner = self.inner.export_config(input);
            self
        }
        pub fn set_export_config(mut self, input: std::option::Option<crate::model::ReportExportConfig>) -> Self {
            self.inner = self.inner.set_export_config(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// For an existing build project whose source code is stored in GitHub or Bitbucket, enables
    /// CodeBuild to start rebuilding the source code every time a code change is pushed to the repository.
    #[derive(std::fmt::Debug)]
    pub struct CreateWebhook {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_webhook_input::Builder,
    }
    impl CreateWebhook {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::create_webhook_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateWebhookOutput,
            aws_hyper::SdkError<crate::error::CreateWebhookError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.project_name(input);
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_project_name(input);
            self
        }
        pub fn branch_filter(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.branch_filter(input);
            self
        }
        pub fn set_branch_filter(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_branch_filter(input);
            self
        }
        /// Appends an item to `filter_groups`.
        pub fn filter_groups(mut self, input: impl Into<std::vec::Vec<crate::model::WebhookFilter>>) -> Self {
            self.inner = self.inner.filter_groups(input);
            self
        }
        pub fn set_filter_groups(mut self, input: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>) -> Self {
            self.inner = self.inner.set_filter_groups(input);
            self
        }
    }
    /// Deletes a build project. Builds of the project are not deleted.
    #[derive(std::fmt::Debug)]
    pub struct DeleteProject {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_project_input::Builder,
    }
    impl DeleteProject {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_project_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteProjectOutput,
            aws_hyper::SdkError<crate::error::DeleteProjectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
    }
    /// Deletes a report.
    #[derive(std::fmt::Debug)]
    pub struct DeleteReport {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_report_input::Builder,
    }
    impl DeleteReport {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_report_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteReportOutput,
            aws_hyper::SdkError<crate::error::DeleteReportError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.arn(input);
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_arn(input);
            self
        }
    }
    /// Deletes a report group. It must not contain any reports.
    #[derive(std::fmt::Debug)]
    pub struct DeleteReportGroup {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_report_group_input::Builder,
    }
    impl DeleteReportGroup {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_report_group_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteReportGroupOutput,
            aws_hyper::SdkError<crate::error::DeleteReportGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.arn(input);
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_arn(input);
            self
        }
    }
    /// Deletes a resource policy identified by its resource ARN.
    #[derive(std::fmt::Debug)]
    pub struct DeleteResourcePolicy {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_resource_policy_input::Builder,
    }
    impl DeleteResourcePolicy {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_resource_policy_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteResourcePolicyOutput,
            aws_hyper::SdkError<crate::error::DeleteResourcePolicyError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
    }
    /// Deletes a set of GitHub, GitHub Enterprise, or Bitbucket source credentials.
    #[derive(std::fmt::Debug)]
    pub struct DeleteSourceCredentials {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_source_credentials_input::Builder,
    }
    impl DeleteSourceCredentials {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_source_credentials_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteSourceCredentialsOutput,
            aws_hyper::SdkError<crate::error::DeleteSourceCredentialsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.arn(input);
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_arn(input);
            self
        }
    }
    /// For an existing build project, stops CodeBuild from rebuilding the source code on every push.
    #[derive(std::fmt::Debug)]
    pub struct DeleteWebhook {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_webhook_input::Builder,
    }
    impl DeleteWebhook {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::delete_webhook_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteWebhookOutput,
            aws_hyper::SdkError<crate::error::DeleteWebhookError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.project_name(input);
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_project_name(input);
            self
        }
    }
    /// Returns a list of details about test cases for a report.
    #[derive(std::fmt::Debug)]
    pub struct DescribeTestCases {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_test_cases_input::Builder,
    }
    impl DescribeTestCases {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::describe_test_cases_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTestCasesOutput,
            aws_hyper::SdkError<crate::error::DescribeTestCasesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn report_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.report_arn(input);
            self
        }
        pub fn set_report_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_report_arn(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn filter(mut self, input: crate::model::TestCaseFilter) -> Self {
            self.inner = self.inner.filter(input);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<crate::model::TestCaseFilter>) -> Self {
            self.inner = self.inner.set_filter(input);
            self
        }
    }
    /// Gets a resource policy that is identified by its resource ARN.
    #[derive(std::fmt::Debug)]
    pub struct GetResourcePolicy {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_resource_policy_input::Builder,
    }
    impl GetResourcePolicy {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::get_resource_policy_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetResourcePolicyOutput,
            aws_hyper::SdkError<crate::error::GetResourcePolicyError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
    }
    /// Imports the source repository credentials for a CodeBuild project that has its source code
    /// stored in a GitHub, GitHub Enterprise, or Bitbucket repository.
    #[derive(std::fmt::Debug)]
    pub struct ImportSourceCredentials {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::import_source_credentials_input::Builder,
    }
    impl ImportSourceCredentials {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::import_source_credentials_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ImportSourceCredentialsOutput,
            aws_hyper::SdkError<crate::error::ImportSourceCredentialsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn username(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.username(input);
            self
        }
        pub fn set_username(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_username(input);
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.token(input);
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_token(input);
            self
        }
        pub fn server_type(mut self, input: crate::model::ServerType) -> Self {
            self.inner = self.inner.server_type(input);
            self
        }
        pub fn set_server_type(mut self, input: std::option::Option<crate::model::ServerType>) -> Self {
            self.inner = self.inner.set_server_type(input);
            self
        }
        pub fn auth_type(mut self, input: crate::model::AuthType) -> Self {
            self.inner = self.inner.auth_type(input);
            self
        }
        pub fn set_auth_type(mut self, input: std::option::Option<crate::model::AuthType>) -> Self {
            self.inner = self.inner.set_auth_type(input);
            self
        }
        pub fn should_overwrite(mut self, input: bool) -> Self {
            self.inner = self.inner.should_overwrite(input);
            self
        }
        pub fn set_should_overwrite(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_should_overwrite(input);
            self
        }
    }
    /// Resets the cache for a project.
    #[derive(std::fmt::Debug)]
    pub struct InvalidateProjectCache {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::invalidate_project_cache_input::Builder,
    }
    impl InvalidateProjectCache {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::invalidate_project_cache_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::InvalidateProjectCacheOutput,
            aws_hyper::SdkError<crate::error::InvalidateProjectCacheError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.project_name(input);
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_project_name(input);
            self
        }
    }
    /// Gets a list of build IDs, with each build ID representing a single build.
    #[derive(std::fmt::Debug)]
    pub struct ListBuilds {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_builds_input::Builder,
    }
    impl ListBuilds {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_builds_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListBuildsOutput,
            aws_hyper::SdkError<crate::error::ListBuildsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Gets a list of build IDs for the specified build project.
    #[derive(std::fmt::Debug)]
    pub struct ListBuildsForProject {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_builds_for_project_input::Builder,
    }
    impl ListBuildsForProject {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_builds_for_project_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListBuildsForProjectOutput,
            aws_hyper::SdkError<crate::error::ListBuildsForProjectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.project_name(input);
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_project_name(input);
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Gets information about Docker images that are managed by CodeBuild.
    #[derive(std::fmt::Debug)]
    pub struct ListCuratedEnvironmentImages {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_curated_environment_images_input::Builder,
    }
    impl ListCuratedEnvironmentImages {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_curated_environment_images_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListCuratedEnvironmentImagesOutput,
            aws_hyper::SdkError<crate::error::ListCuratedEnvironmentImagesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
    }
    /// Gets a list of build project names, with each build project name representing a single build project.
    #[derive(std::fmt::Debug)]
    pub struct ListProjects {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_projects_input::Builder,
    }
    impl ListProjects {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_projects_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListProjectsOutput,
            aws_hyper::SdkError<crate::error::ListProjectsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn sort_by(mut self, input: crate::model::ProjectSortByType) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::ProjectSortByType>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Gets a list of ARNs for the report groups in the current AWS account.
    #[derive(std::fmt::Debug)]
    pub struct ListReportGroups {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_report_groups_input::Builder,
    }
    impl ListReportGroups {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_report_groups_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListReportGroupsOutput,
            aws_hyper::SdkError<crate::error::ListReportGroupsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn sort_by(mut self, input: crate::model::ReportGroupSortByType) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::ReportGroupSortByType>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
    }
    /// Returns a list of ARNs for the reports in the current AWS account.
    #[derive(std::fmt::Debug)]
    pub struct ListReports {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_reports_input::Builder,
    }
    impl ListReports {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_reports_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListReportsOutput,
            aws_hyper::SdkError<crate::error::ListReportsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn filter(mut self, input: crate::model::ReportFilter) -> Self {
            self.inner = self.inner.filter(input);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<crate::model::ReportFilter>) -> Self {
            self.inner = self.inner.set_filter(input);
            self
        }
    }
    /// Returns a list of ARNs for the reports that belong to a report group.
    #[derive(std::fmt::Debug)]
    pub struct ListReportsForReportGroup {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_reports_for_report_group_input::Builder,
    }
    impl ListReportsForReportGroup {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_reports_for_report_group_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListReportsForReportGroupOutput,
            aws_hyper::SdkError<crate::error::ListReportsForReportGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn report_group_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.report_group_arn(input);
            self
        }
        pub fn set_report_group_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_report_group_arn(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn filter(mut self, input: crate::model::ReportFilter) -> Self {
            self.inner = self.inner.filter(input);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<crate::model::ReportFilter>) -> Self {
            self.inner = self.inner.set_filter(input);
            self
        }
    }
    /// Gets a list of projects that are shared with other AWS accounts or users.
    #[derive(std::fmt::Debug)]
    pub struct ListSharedProjects {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_shared_projects_input::Builder,
    }
    impl ListSharedProjects {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_shared_projects_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListSharedProjectsOutput,
            aws_hyper::SdkError<crate::error::ListSharedProjectsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn sort_by(mut self, input: crate::model::SharedResourceSortByType) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SharedResourceSortByType>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
    }
    /// Gets a list of report groups that are shared with other AWS accounts or users.
    #[derive(std::fmt::Debug)]
    pub struct ListSharedReportGroups {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_shared_report_groups_input::Builder,
    }
    impl ListSharedReportGroups {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_shared_report_groups_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListSharedReportGroupsOutput,
            aws_hyper::SdkError<crate::error::ListSharedReportGroupsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.inner = self.inner.sort_order(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.inner = self.inner.set_sort_order(input);
            self
        }
        pub fn sort_by(mut self, input: crate::model::SharedResourceSortByType) -> Self {
            self.inner = self.inner.sort_by(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SharedResourceSortByType>) -> Self {
            self.inner = self.inner.set_sort_by(input);
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(input);
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(input);
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.inner = self.inner.max_results(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(input);
            self
        }
    }
    /// Returns a list of source credentials.
    #[derive(std::fmt::Debug)]
    pub struct ListSourceCredentials {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_source_credentials_input::Builder,
    }
    impl ListSourceCredentials {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::list_source_credentials_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListSourceCredentialsOutput,
            aws_hyper::SdkError<crate::error::ListSourceCredentialsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
    }
    /// Stores a resource policy for the ARN of a project or report group object.
    #[derive(std::fmt::Debug)]
    pub struct PutResourcePolicy {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::put_resource_policy_input::Builder,
    }
    impl PutResourcePolicy {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::put_resource_policy_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::PutResourcePolicyOutput,
            aws_hyper::SdkError<crate::error::PutResourcePolicyError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.policy(input);
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_policy(input);
            self
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(input);
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(input);
            self
        }
    }
    /// Starts running a build.
    #[derive(std::fmt::Debug)]
    pub struct StartBuild {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::start_build_input::Builder,
    }
    impl StartBuild {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::start_build_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StartBuildOutput,
            aws_hyper::SdkError<crate::error::StartBuildError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// The name of the CodeBuild build project to start running a build.
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.project_name(input);
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_project_name(input);
            self
        }
        /// Appends an item to `secondary_sources_override`.
        pub fn secondary_sources_override(mut self, input: impl Into<crate::model::ProjectSource>) -> Self {
            self.inner = self.inner.secondary_sources_override(input);
            self
        }
        pub fn set_secondary_sources_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>) -> Self {
            self.inner = self.inner.set_secondary_sources_override(input);
            self
        }
        /// Appends an item to `secondary_sources_version_override`.
        pub fn secondary_sources_version_override(mut self, input: impl Into<crate::model::ProjectSourceVersion>) -> Self {
            self.inner = self.inner.secondary_sources_version_override(input);
            self
        }
        pub fn set_secondary_sources_version_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>) -> Self {
            self.inner = self.inner.set_secondary_sources_version_override(input);
            self
        }
        /// The version of the build input to be built, for this build only.
        pub fn source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.source_version(input);
            self
        }
        pub fn set_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_source_version(input);
            self
        }
        pub fn artifacts_override(mut self, input: crate::model::ProjectArtifacts) -> Self {
            self.inner = self.inner.artifacts_override(input);
            self
        }
        pub fn set_artifacts_override(mut self, input: std::option::Option<crate::model::ProjectArtifacts>) -> Self {
            self.inner = self.inner.set_artifacts_override(input);
            self
        }
        /// Appends an item to `secondary_artifacts_override`.
        pub fn secondary_artifacts_override(mut self, input: impl Into<crate::model::ProjectArtifacts>) -> Self {
            self.inner = self.inner.secondary_artifacts_override(input);
            self
        }
        pub fn set_secondary_artifacts_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>) -> Self {
            self.inner = self.inner.set_secondary_artifacts_override(input);
            self
        }
        /// Appends an item to `environment_variables_override`.
        pub fn environment_variables_override(mut self, input: impl Into<crate::model::EnvironmentVariable>) -> Self {
            self.inner = self.inner.environment_variables_override(input);
            self
        }
        pub fn set_environment_variables_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>) -> Self {
            self.inner = self.inner.set_environment_variables_override(input);
            self
        }
        pub fn source_type_override(mut self, input: crate::model::SourceType) -> Self {
            self.inner = self.inner.source_type_override(input);
            self
        }
        pub fn set_source_type_override(mut self, input: std::option::Option<crate::model::SourceType>) -> Self {
            self.inner = self.inner.set_source_type_override(input);
            self
        }
        pub fn source_location_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.source_location_override(input);
            self
        }
        pub fn set_source_location_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_source_location_override(input);
            self
        }
        pub fn source_auth_override(mut self, input: crate::model::SourceAuth) -> Self {
            self.inner = self.inner.source_auth_override(input);
            self
        }
        pub fn set_source_auth_override(mut self, input: std::option::Option<crate::model::SourceAuth>) -> Self {
            self.inner = self.inner.set_source_auth_override(input);
            self
        }
        pub fn git_clone_depth_override(mut self, input: i32) -> Self {
            self.inner = self.inner.git_clone_depth_override(input);
            self
        }
        pub fn set_git_clone_depth_override(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_git_clone_depth_override(input);
            self
        }
        pub fn git_submodules_config_override(mut self, input: crate::model::GitSubmodulesConfig) -> Self {
            self.inner = self.inner.git_submodules_config_override(input);
            self
        }
        pub fn set_git_submodules_config_override(mut self, input: std::option::Option<crate::model::GitSubmodulesConfig>) -> Self {
            self.inner = self.inner.set_git_submodules_config_override(input);
            self
        }
        pub fn buildspec_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.buildspec_override(input);
            self
        }
        pub fn set_buildspec_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_buildspec_override(input);
            self
        }
        pub fn insecure_ssl_override(mut self, input: bool) -> Self {
            self.inner = self.inner.insecure_ssl_override(input);
            self
        }
        pub fn set_insecure_ssl_override(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_insecure_ssl_override(input);
            self
        }
        pub fn report_build_status_override(mut self, input: bool) -> Self {
            self.inner = self.inner.report_build_status_override(input);
            self
        }
        pub fn set_report_build_status_override(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_report_build_status_override(input);
            self
        }
        pub fn environment_type_override(mut self, input: crate::model::EnvironmentType) -> Self {
            self.inner = self.inner.environment_type_override(input);
            self
        }
        pub fn set_environment_type_override(mut self, input: std::option::Option<crate::model::EnvironmentType>) -> Self {
            self.inner = self.inner.set_environment_type_override(input);
            self
        }
        pub fn image_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.image_override(input);
            self
        }
        pub fn set_image_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_image_override(input);
            self
        }
        pub fn compute_type_override(mut self, input: crate::model::ComputeType) -> Self {
            self.inner = self.inner.compute_type_override(input);
            self
        }
        pub fn set_compute_type_override(mut self, input: std::option::Option<crate::model::ComputeType>) -> Self {
            self.inner = self.inner.set_compute_type_override(input);
            self
        }
        pub fn certificate_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.certificate_override(input);
            self
        }
        pub fn set_certificate_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_certificate_override(input);
            self
        }
        pub fn cache_override(mut self, input: crate::model::ProjectCache) -> Self {
            self.inner = self.inner.cache_override(input);
            self
        }
        pub fn set_cache_override(mut self, input: std::option::Option<crate::model::ProjectCache>) -> Self {
            self.inner = self.inner.set_cache_override(input);
            self
        }
        pub fn service_role_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.service_role_override(input);
            self
        }
        pub fn set_service_role_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_service_role_override(input);
            self
        }
        pub fn privileged_mode_override(mut self, input: bool) -> Self {
            self.inner = self.inner.privileged_mode_override(input);
            self
        }
        pub fn set_privileged_mode_override(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_privileged_mode_override(input);
            self
        }
        pub fn timeout_in_minutes_override(mut self, input: i32) -> Self {
            self.inner = self.inner.timeout_in_minutes_override(input);
            self
        }
        pub fn set_timeout_in_minutes_override(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_timeout_in_minutes_override(input);
            self
        }
        pub fn queued_timeout_in_minutes_override(mut self, input: i32) -> Self {
            self.inner = self.inner.queued_timeout_in_minutes_override(input);
            self
        }
        pub fn set_queued_timeout_in_minutes_override(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_queued_timeout_in_minutes_override(input);
            self
        }
        pub fn encryption_key_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.encryption_key_override(input);
            self
        }
        pub fn set_encryption_key_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_encryption_key_override(input);
            self
        }
        /// A unique, case sensitive identifier that makes the StartBuild request idempotent.
        pub fn idempotency_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.idempotency_token(input);
            self
        }
        pub fn set_idempotency_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_idempotency_token(input);
            self
        }
        pub fn logs_config_override(mut self, input: crate::model::LogsConfig) -> Self {
            self.inner = self.inner.logs_config_override(input);
            self
        }
        pub fn set_logs_config_override(mut self, input: std::option::Option<crate::model::LogsConfig>) -> Self {
            self.inner = self.inner.set_logs_config_override(input);
            self
        }
        pub fn registry_credential_override(mut self, input: crate::model::RegistryCredential) -> Self {
            self.inner = self.inner.registry_credential_override(input);
            self
        }
        pub fn set_registry_credential_override(mut self, input: std::option::Option<crate::model::RegistryCredential>) -> Self {
            self.inner = self.inner.set_registry_credential_override(input);
            self
        }
        pub fn image_pull_credentials_type_override(mut self, input: crate::model::ImagePullCredentialsType) -> Self {
            self.inner = self.inner.image_pull_credentials_type_override(input);
            self
        }
        pub fn set_image_pull_credentials_type_override(mut self, input: std::option::Option<crate::model::ImagePullCredentialsType>) -> Self {
            self.inner = self.inner.set_image_pull_credentials_type_override(input);
            self
        }
    }
    /// Attempts to stop running a build.
    #[derive(std::fmt::Debug)]
    pub struct StopBuild {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::stop_build_input::Builder,
    }
    impl StopBuild {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::stop_build_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StopBuildOutput,
            aws_hyper::SdkError<crate::error::StopBuildError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.id(input);
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_id(input);
            self
        }
    }
    /// Changes the settings of a build project.
    #[derive(std::fmt::Debug)]
    pub struct UpdateProject {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_project_input::Builder,
    }
    impl UpdateProject {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::update_project_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateProjectOutput,
            aws_hyper::SdkError<crate::error::UpdateProjectError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.name(input);
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_name(input);
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.description(input);
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_description(input);
            self
        }
        pub fn source(mut self, input: crate::model::ProjectSource) -> Self {
            self.inner = self.inner.source(input);
            self
        }
        pub fn set_source(mut self, input: std::option::Option<crate::model::ProjectSource>) -> Self {
            self.inner = self.inner.set_source(input);
            self
        }
        /// Appends an item to `secondary_sources`.
        pub fn secondary_sources(mut self, input: impl Into<crate::model::ProjectSource>) -> Self {
            self.inner = self.inner.secondary_sources(input);
            self
        }
        pub fn set_secondary_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>) -> Self {
            self.inner = self.inner.set_secondary_sources(input);
            self
        }
        pub fn source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.source_version(input);
            self
        }
        pub fn set_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_source_version(input);
            self
        }
        /// Appends an item to `secondary_source_versions`.
        pub fn secondary_source_versions(mut self, input: impl Into<crate::model::ProjectSourceVersion>) -> Self {
            self.inner = self.inner.secondary_source_versions(input);
            self
        }
        pub fn set_secondary_source_versions(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>) -> Self {
            self.inner = self.inner.set_secondary_source_versions(input);
            self
        }
        pub fn artifacts(mut self, input: crate::model::ProjectArtifacts) -> Self {
            self.inner = self.inner.artifacts(input);
            self
        }
        pub fn set_artifacts(mut self, input: std::option::Option<crate::model::ProjectArtifacts>) -> Self {
            self.inner = self.inner.set_artifacts(input);
            self
        }
        /// Appends an item to `secondary_artifacts`.
        pub fn secondary_artifacts(mut self, input: impl Into<crate::model::ProjectArtifacts>) -> Self {
            self.inner = self.inner.secondary_artifacts(input);
            self
        }
        pub fn set_secondary_artifacts(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>) -> Self {
            self.inner = self.inner.set_secondary_artifacts(input);
            self
        }
        pub fn cache(mut self, input: crate::model::ProjectCache) -> Self {
            self.inner = self.inner.cache(input);
            self
        }
        pub fn set_cache(mut self, input: std::option::Option<crate::model::ProjectCache>) -> Self {
            self.inner = self.inner.set_cache(input);
            self
        }
        pub fn environment(mut self, input: crate::model::ProjectEnvironment) -> Self {
            self.inner = self.inner.environment(input);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<crate::model::ProjectEnvironment>) -> Self {
            self.inner = self.inner.set_environment(input);
            self
        }
        pub fn service_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.service_role(input);
            self
        }
        pub fn set_service_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_service_role(input);
            self
        }
        pub fn timeout_in_minutes(mut self, input: i32) -> Self {
            self.inner = self.inner.timeout_in_minutes(input);
            self
        }
        pub fn set_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_timeout_in_minutes(input);
            self
        }
        pub fn queued_timeout_in_minutes(mut self, input: i32) -> Self {
            self.inner = self.inner.queued_timeout_in_minutes(input);
            self
        }
        pub fn set_queued_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_queued_timeout_in_minutes(input);
            self
        }
        pub fn encryption_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.encryption_key(input);
            self
        }
        pub fn set_encryption_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_encryption_key(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.inner = self.inner.vpc_config(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.inner = self.inner.set_vpc_config(input);
            self
        }
        pub fn badge_enabled(mut self, input: bool) -> Self {
            self.inner = self.inner.badge_enabled(input);
            self
        }
        pub fn set_badge_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_badge_enabled(input);
            self
        }
        pub fn logs_config(mut self, input: crate::model::LogsConfig) -> Self {
            self.inner = self.inner.logs_config(input);
            self
        }
        pub fn set_logs_config(mut self, input: std::option::Option<crate::model::LogsConfig>) -> Self {
            self.inner = self.inner.set_logs_config(input);
            self
        }
        /// Appends an item to `file_system_locations`.
        pub fn file_system_locations(mut self, input: impl Into<crate::model::ProjectFileSystemLocation>) -> Self {
            self.inner = self.inner.file_system_locations(input);
            self
        }
        pub fn set_file_system_locations(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>) -> Self {
            self.inner = self.inner.set_file_system_locations(input);
            self
        }
    }
    /// Updates a report group.
    #[derive(std::fmt::Debug)]
    pub struct UpdateReportGroup {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_report_group_input::Builder,
    }
    impl UpdateReportGroup {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::update_report_group_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateReportGroupOutput,
            aws_hyper::SdkError<crate::error::UpdateReportGroupError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.arn(input);
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_arn(input);
            self
        }
        pub fn export_config(mut self, input: crate::model::ReportExportConfig) -> Self {
            self.inner = self.inner.export_config(input);
            self
        }
        pub fn set_export_config(mut self, input: std::option::Option<crate::model::ReportExportConfig>) -> Self {
            self.inner = self.inner.set_export_config(input);
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(input);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.inner = self.inner.set_tags(input);
            self
        }
    }
    /// Updates the webhook associated with a CodeBuild build project.
    #[derive(std::fmt::Debug)]
    pub struct UpdateWebhook {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_webhook_input::Builder,
    }
    impl UpdateWebhook {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> crate::input::update_webhook_input::Builder {
            self.inner
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateWebhookOutput,
            aws_hyper::SdkError<crate::error::UpdateWebhookError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| smithy_http::result::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.project_name(input);
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_project_name(input);
            self
        }
        pub fn branch_filter(mut self, input: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.branch_filter(input);
            self
        }
        pub fn set_branch_filter(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_branch_filter(input);
            self
        }
        pub fn rotate_secret(mut self, input: bool) -> Self {
            self.inner = self.inner.rotate_secret(input);
            self
        }
        pub fn set_rotate_secret(mut self, input: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_rotate_secret(input);
            self
        }
        /// Appends an item to `filter_groups`.
        pub fn filter_groups(mut self, input: impl Into<std::vec::Vec<crate::model::WebhookFilter>>) -> Self {
            self.inner = self.inner.filter_groups(input);
            self
        }
        pub fn set_filter_groups(mut self, input: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>) -> Self {
            self.inner = self.inner.set_filter_groups(input);
            self
        }
    }
}
