/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_http::body::SdkBody;
use smithy_http::operation::{BuildError, Metadata, Operation, Request};

/// Wraps a serialized JSON 1.1 body into an operation carrying everything the middleware
/// stack needs: target header, signing configuration, endpoint resolver and credentials.
fn assemble_operation<O>(
    config: &crate::config::Config,
    operation_name: &'static str,
    handler: O,
    body: SdkBody,
) -> std::result::Result<Operation<O, aws_http::AwsErrorRetryPolicy>, BuildError> {
    let content_length = body.content_length().unwrap_or(0);
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(http::header::CONTENT_TYPE, crate::CONTENT_TYPE)
        .header(
            "x-amz-target",
            format!("{}.{}", crate::TARGET_PREFIX, operation_name),
        )
        .header(http::header::CONTENT_LENGTH, content_length)
        .body(body)?;
    let mut request = Request::new(request);
    {
        let mut props = request.config_mut();
        props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
            crate::API_METADATA.clone(),
        ));
        props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
        props.insert(aws_types::SigningService::from_static(
            crate::ENDPOINT_PREFIX,
        ));
        aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
        if let Some(region) = &config.region {
            props.insert(region.clone());
        }
        aws_auth::set_provider(&mut props, config.credentials_provider.clone());
    }
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, crate::ENDPOINT_PREFIX))
        .with_retry_policy(aws_http::AwsErrorRetryPolicy::new()))
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BatchDeleteBuildsInput {
    pub ids: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for BatchDeleteBuildsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BatchDeleteBuildsInput");
        formatter.field("ids", &self.ids);
        formatter.finish()
    }
}
/// See [`BatchDeleteBuildsInput`](crate::input::BatchDeleteBuildsInput)
pub mod batch_delete_builds_input {
    /// A builder for [`BatchDeleteBuildsInput`](crate::input::BatchDeleteBuildsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ids: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `ids`.
        pub fn ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.ids.unwrap_or_default();
            v.push(input.into());
            self.ids = Some(v);
            self
        }
        pub fn set_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.ids = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchDeleteBuildsInput`](crate::input::BatchDeleteBuildsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchDeleteBuildsInput, smithy_http::operation::BuildError> {
            if self.ids.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "ids",
                    details: "ids was not specified but it is required when building BatchDeleteBuildsInput",
                });
            }
            Ok(crate::input::BatchDeleteBuildsInput {
                ids: self.ids,
            })
        }
    }
}
impl BatchDeleteBuildsInput {
    /// Creates a new builder-style object to manufacture [`BatchDeleteBuildsInput`](crate::input::BatchDeleteBuildsInput)
    pub fn builder() -> crate::input::batch_delete_builds_input::Builder {
        crate::input::batch_delete_builds_input::Builder::default()
    }
}
impl BatchDeleteBuildsInput {
    /// Consumes the builder and constructs an Operation<[`BatchDeleteBuilds`](crate::operation::BatchDeleteBuilds)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::BatchDeleteBuilds, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_batch_delete_builds(self);
        assemble_operation(config, "BatchDeleteBuilds", crate::operation::BatchDeleteBuilds::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BatchGetBuildsInput {
    pub ids: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for BatchGetBuildsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BatchGetBuildsInput");
        formatter.field("ids", &self.ids);
        formatter.finish()
    }
}
/// See [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
pub mod batch_get_builds_input {
    /// A builder for [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) ids: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `ids`.
        pub fn ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.ids.unwrap_or_default();
            v.push(input.into());
            self.ids = Some(v);
            self
        }
        pub fn set_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.ids = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchGetBuildsInput, smithy_http::operation::BuildError> {
            if self.ids.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "ids",
                    details: "ids was not specified but it is required when building BatchGetBuildsInput",
                });
            }
            Ok(crate::input::BatchGetBuildsInput {
                ids: self.ids,
            })
        }
    }
}
impl BatchGetBuildsInput {
    /// Creates a new builder-style object to manufacture [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
    pub fn builder() -> crate::input::batch_get_builds_input::Builder {
        crate::input::batch_get_builds_input::Builder::default()
    }
}
impl BatchGetBuildsInput {
    /// Consumes the builder and constructs an Operation<[`BatchGetBuilds`](crate::operation::BatchGetBuilds)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::BatchGetBuilds, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_batch_get_builds(self);
        assemble_operation(config, "BatchGetBuilds", crate::operation::BatchGetBuilds::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BatchGetProjectsInput {
    pub names: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for BatchGetProjectsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BatchGetProjectsInput");
        formatter.field("names", &self.names);
        formatter.finish()
    }
}
/// See [`BatchGetProjectsInput`](crate::input::BatchGetProjectsInput)
pub mod batch_get_projects_input {
    /// A builder for [`BatchGetProjectsInput`](crate::input::BatchGetProjectsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) names: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `names`.
        pub fn names(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.names.unwrap_or_default();
            v.push(input.into());
            self.names = Some(v);
            self
        }
        pub fn set_names(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.names = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetProjectsInput`](crate::input::BatchGetProjectsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchGetProjectsInput, smithy_http::operation::BuildError> {
            if self.names.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "names",
                    details: "names was not specified but it is required when building BatchGetProjectsInput",
                });
            }
            Ok(crate::input::BatchGetProjectsInput {
                names: self.names,
            })
        }
    }
}
impl BatchGetProjectsInput {
    /// Creates a new builder-style object to manufacture [`BatchGetProjectsInput`](crate::input::BatchGetProjectsInput)
    pub fn builder() -> crate::input::batch_get_projects_input::Builder {
        crate::input::batch_get_projects_input::Builder::default()
    }
}
impl BatchGetProjectsInput {
    /// Consumes the builder and constructs an Operation<[`BatchGetProjects`](crate::operation::BatchGetProjects)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::BatchGetProjects, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_batch_get_projects(self);
        assemble_operation(config, "BatchGetProjects", crate::operation::BatchGetProjects::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BatchGetReportGroupsInput {
    pub report_group_arns: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for BatchGetReportGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BatchGetReportGroupsInput");
        formatter.field("report_group_arns", &self.report_group_arns);
        formatter.finish()
    }
}
/// See [`BatchGetReportGroupsInput`](crate::input::BatchGetReportGroupsInput)
pub mod batch_get_report_groups_input {
    /// A builder for [`BatchGetReportGroupsInput`](crate::input::BatchGetReportGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) report_group_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `report_group_arns`.
        pub fn report_group_arns(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.report_group_arns.unwrap_or_default();
            v.push(input.into());
            self.report_group_arns = Some(v);
            self
        }
        pub fn set_report_group_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.report_group_arns = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetReportGroupsInput`](crate::input::BatchGetReportGroupsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchGetReportGroupsInput, smithy_http::operation::BuildError> {
            if self.report_group_arns.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "report_group_arns",
                    details: "report_group_arns was not specified but it is required when building BatchGetReportGroupsInput",
                });
            }
            Ok(crate::input::BatchGetReportGroupsInput {
                report_group_arns: self.report_group_arns,
            })
        }
    }
}
impl BatchGetReportGroupsInput {
    /// Creates a new builder-style object to manufacture [`BatchGetReportGroupsInput`](crate::input::BatchGetReportGroupsInput)
    pub fn builder() -> crate::input::batch_get_report_groups_input::Builder {
        crate::input::batch_get_report_groups_input::Builder::default()
    }
}
impl BatchGetReportGroupsInput {
    /// Consumes the builder and constructs an Operation<[`BatchGetReportGroups`](crate::operation::BatchGetReportGroups)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::BatchGetReportGroups, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_batch_get_report_groups(self);
        assemble_operation(config, "BatchGetReportGroups", crate::operation::BatchGetReportGroups::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BatchGetReportsInput {
    pub report_arns: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for BatchGetReportsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BatchGetReportsInput");
        formatter.field("report_arns", &self.report_arns);
        formatter.finish()
    }
}
/// See [`BatchGetReportsInput`](crate::input::BatchGetReportsInput)
pub mod batch_get_reports_input {
    /// A builder for [`BatchGetReportsInput`](crate::input::BatchGetReportsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) report_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// Appends an item to `report_arns`.
        pub fn report_arns(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.report_arns.unwrap_or_default();
            v.push(input.into());
            self.report_arns = Some(v);
            self
        }
        pub fn set_report_arns(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.report_arns = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetReportsInput`](crate::input::BatchGetReportsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchGetReportsInput, smithy_http::operation::BuildError> {
            if self.report_arns.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "report_arns",
                    details: "report_arns was not specified but it is required when building BatchGetReportsInput",
                });
            }
            Ok(crate::input::BatchGetReportsInput {
                report_arns: self.report_arns,
            })
        }
    }
}
impl BatchGetReportsInput {
    /// Creates a new builder-style object to manufacture [`BatchGetReportsInput`](crate::input::BatchGetReportsInput)
    pub fn builder() -> crate::input::batch_get_reports_input::Builder {
        crate::input::batch_get_reports_input::Builder::default()
    }
}
impl BatchGetReportsInput {
    /// Consumes the builder and constructs an Operation<[`BatchGetReports`](crate::operation::BatchGetReports)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::BatchGetReports, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_batch_get_reports(self);
        assemble_operation(config, "BatchGetReports", crate::operation::BatchGetReports::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateProjectInput {
    pub name: std::option::Option<std::string::String>,
    pub description: std::option::Option<std::string::String>,
    pub source: std::option::Option<crate::model::ProjectSource>,
    pub secondary_sources: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
    pub source_version: std::option::Option<std::string::String>,
    pub secondary_source_versions: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
    pub artifacts: std::option::Option<crate::model::ProjectArtifacts>,
    pub secondary_artifacts: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>,
    pub cache: std::option::Option<crate::model::ProjectCache>,
    pub environment: std::option::Option<crate::model::ProjectEnvironment>,
    pub service_role: std::option::Option<std::string::String>,
    pub timeout_in_minutes: std::option::Option<i32>,
    pub queued_timeout_in_minutes: std::option::Option<i32>,
    pub encryption_key: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    pub badge_enabled: std::option::Option<bool>,
    pub logs_config: std::option::Option<crate::model::LogsConfig>,
    pub file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
}
impl std::fmt::Debug for CreateProjectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateProjectInput");
        formatter.field("name", &self.name);
        formatter.field("description", &self.description);
        formatter.field("source", &self.source);
        formatter.field("secondary_sources", &self.secondary_sources);
        formatter.field("source_version", &self.source_version);
        formatter.field("secondary_source_versions", &self.secondary_source_versions);
        formatter.field("artifacts", &self.artifacts);
        formatter.field("secondary_artifacts", &self.secondary_artifacts);
        formatter.field("cache", &self.cache);
        formatter.field("environment", &self.environment);
        formatter.field("service_role", &self.service_role);
        formatter.field("timeout_in_minutes", &self.timeout_in_minutes);
        formatter.field("queued_timeout_in_minutes", &self.queued_timeout_in_minutes);
        formatter.field("encryption_key", &self.encryption_key);
        formatter.field("tags", &self.tags);
        formatter.field("vpc_config", &self.vpc_config);
        formatter.field("badge_enabled", &self.badge_enabled);
        formatter.field("logs_config", &self.logs_config);
        formatter.field("file_system_locations", &self.file_system_locations);
        formatter.finish()
    }
}
/// See [`CreateProjectInput`](crate::input::CreateProjectInput)
pub mod create_project_input {
    /// A builder for [`CreateProjectInput`](crate::input::CreateProjectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) source: std::option::Option<crate::model::ProjectSource>,
        pub(crate) secondary_sources: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
        pub(crate) source_version: std::option::Option<std::string::String>,
        pub(crate) secondary_source_versions: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
        pub(crate) artifacts: std::option::Option<crate::model::ProjectArtifacts>,
        pub(crate) secondary_artifacts: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>,
        pub(crate) cache: std::option::Option<crate::model::ProjectCache>,
        pub(crate) environment: std::option::Option<crate::model::ProjectEnvironment>,
        pub(crate) service_role: std::option::Option<std::string::String>,
        pub(crate) timeout_in_minutes: std::option::Option<i32>,
        pub(crate) queued_timeout_in_minutes: std::option::Option<i32>,
        pub(crate) encryption_key: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) vpc_config: std::option::Option<crate::model::VpcConfig>,
        pub(crate) badge_enabled: std::option::Option<bool>,
        pub(crate) logs_config: std::option::Option<crate::model::LogsConfig>,
        pub(crate) file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn source(mut self, input: crate::model::ProjectSource) -> Self {
            self.source = Some(input);
            self
        }
        pub fn set_source(mut self, input: std::option::Option<crate::model::ProjectSource>) -> Self {
            self.source = input;
            self
        }
        /// Appends an item to `secondary_sources`.
        pub fn secondary_sources(mut self, input: impl Into<crate::model::ProjectSource>) -> Self {
            let mut v = self.secondary_sources.unwrap_or_default();
            v.push(input.into());
            self.secondary_sources = Some(v);
            self
        }
        pub fn set_secondary_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>) -> Self {
            self.secondary_sources = input;
            self
        }
        pub fn source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_version = Some(input.into());
            self
        }
        pub fn set_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_version = input;
            self
        }
        /// Appends an item to `secondary_source_versions`.
        pub fn secondary_source_versions(mut self, input: impl Into<crate::model::ProjectSourceVersion>) -> Self {
            let mut v = self.secondary_source_versions.unwrap_or_default();
            v.push(input.into());
            self.secondary_source_versions = Some(v);
            self
        }
        pub fn set_secondary_source_versions(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>) -> Self {
            self.secondary_source_versions = input;
            self
        }
        pub fn artifacts(mut self, input: crate::model::ProjectArtifacts) -> Self {
            self.artifacts = Some(input);
            self
        }
        pub fn set_artifacts(mut self, input: std::option::Option<crate::model::ProjectArtifacts>) -> Self {
            self.artifacts = input;
            self
        }
        /// Appends an item to `secondary_artifacts`.
        pub fn secondary_artifacts(mut self, input: impl Into<crate::model::ProjectArtifacts>) -> Self {
            let mut v = self.secondary_artifacts.unwrap_or_default();
            v.push(input.into());
            self.secondary_artifacts = Some(v);
            self
        }
        pub fn set_secondary_artifacts(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>) -> Self {
            self.secondary_artifacts = input;
            self
        }
        pub fn cache(mut self, input: crate::model::ProjectCache) -> Self {
            self.cache = Some(input);
            self
        }
        pub fn set_cache(mut self, input: std::option::Option<crate::model::ProjectCache>) -> Self {
            self.cache = input;
            self
        }
        pub fn environment(mut self, input: crate::model::ProjectEnvironment) -> Self {
            self.environment = Some(input);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<crate::model::ProjectEnvironment>) -> Self {
            self.environment = input;
            self
        }
        pub fn service_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_role = Some(input.into());
            self
        }
        pub fn set_service_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_role = input;
            self
        }
        pub fn timeout_in_minutes(mut self, input: i32) -> Self {
            self.timeout_in_minutes = Some(input);
            self
        }
        pub fn set_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_in_minutes = input;
            self
        }
        pub fn queued_timeout_in_minutes(mut self, input: i32) -> Self {
            self.queued_timeout_in_minutes = Some(input);
            self
        }
        pub fn set_queued_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.queued_timeout_in_minutes = input;
            self
        }
        pub fn encryption_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.encryption_key = Some(input.into());
            self
        }
        pub fn set_encryption_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.encryption_key = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.vpc_config = Some(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.vpc_config = input;
            self
        }
        pub fn badge_enabled(mut self, input: bool) -> Self {
            self.badge_enabled = Some(input);
            self
        }
        pub fn set_badge_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.badge_enabled = input;
            self
        }
        pub fn logs_config(mut self, input: crate::model::LogsConfig) -> Self {
            self.logs_config = Some(input);
            self
        }
        pub fn set_logs_config(mut self, input: std::option::Option<crate::model::LogsConfig>) -> Self {
            self.logs_config = input;
            self
        }
        /// Appends an item to `file_system_locations`.
        pub fn file_system_locations(mut self, input: impl Into<crate::model::ProjectFileSystemLocation>) -> Self {
            let mut v = self.file_system_locations.unwrap_or_default();
            v.push(input.into());
            self.file_system_locations = Some(v);
            self
        }
        pub fn set_file_system_locations(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>) -> Self {
            self.file_system_locations = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateProjectInput`](crate::input::CreateProjectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateProjectInput, smithy_http::operation::BuildError> {
            if self.name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "name",
                    details: "name was not specified but it is required when building CreateProjectInput",
                });
            }
            if self.source.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "source",
                    details: "source was not specified but it is required when building CreateProjectInput",
                });
            }
            if self.artifacts.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "artifacts",
                    details: "artifacts was not specified but it is required when building CreateProjectInput",
                });
            }
            if self.environment.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "environment",
                    details: "environment was not specified but it is required when building CreateProjectInput",
                });
            }
            if self.service_role.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "service_role",
                    details: "service_role was not specified but it is required when building CreateProjectInput",
                });
            }
            Ok(crate::input::CreateProjectInput {
                name: self.name,
                description: self.description,
                source: self.source,
                secondary_sources: self.secondary_sources,
                source_version: self.source_version,
                secondary_source_versions: self.secondary_source_versions,
                artifacts: self.artifacts,
                secondary_artifacts: self.secondary_artifacts,
                cache: self.cache,
                environment: self.environment,
                service_role: self.service_role,
                timeout_in_minutes: self.timeout_in_minutes,
                queued_timeout_in_minutes: self.queued_timeout_in_minutes,
                encryption_key: self.encryption_key,
                tags: self.tags,
                vpc_config: self.vpc_config,
                badge_enabled: self.badge_enabled,
                logs_config: self.logs_config,
                file_system_locations: self.file_system_locations,
            })
        }
    }
}
impl CreateProjectInput {
    /// Creates a new builder-style object to manufacture [`CreateProjectInput`](crate::input::CreateProjectInput)
    pub fn builder() -> crate::input::create_project_input::Builder {
        crate::input::create_project_input::Builder::default()
    }
}
impl CreateProjectInput {
    /// Consumes the builder and constructs an Operation<[`CreateProject`](crate::operation::CreateProject)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateProject, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_project(self);
        assemble_operation(config, "CreateProject", crate::operation::CreateProject::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateReportGroupInput {
    pub name: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::ReportType>,
    pub export_config: std::option::Option<crate::model::ReportExportConfig>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for CreateReportGroupInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateReportGroupInput");
        formatter.field("name", &self.name);
        formatter.field("type", &self.r#type);
        formatter.field("export_config", &self.export_config);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`CreateReportGroupInput`](crate::input::CreateReportGroupInput)
pub mod create_report_group_input {
    /// A builder for [`CreateReportGroupInput`](crate::input::CreateReportGroupInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::ReportType>,
        pub(crate) export_config: std::option::Option<crate::model::ReportExportConfig>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn r#type(mut self, input: crate::model::ReportType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ReportType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn export_config(mut self, input: crate::model::ReportExportConfig) -> Self {
            self.export_config = Some(input);
            self
        }
        pub fn set_export_config(mut self, input: std::option::Option<crate::model::ReportExportConfig>) -> Self {
            self.export_config = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateReportGroupInput`](crate::input::CreateReportGroupInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateReportGroupInput, smithy_http::operation::BuildError> {
            if self.name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "name",
                    details: "name was not specified but it is required when building CreateReportGroupInput",
                });
            }
            if self.r#type.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "type",
                    details: "type was not specified but it is required when building CreateReportGroupInput",
                });
            }
            if self.export_config.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "export_config",
                    details: "export_config was not specified but it is required when building CreateReportGroupInput",
                });
            }
            Ok(crate::input::CreateReportGroupInput {
                name: self.name,
                r#type: self.r#type,
                export_config: self.export_config,
                tags: self.tags,
            })
        }
    }
}
impl CreateReportGroupInput {
    /// Creates a new builder-style object to manufacture [`CreateReportGroupInput`](crate::input::CreateReportGroupInput)
    pub fn builder() -> crate::input::create_report_group_input::Builder {
        crate::input::create_report_group_input::Builder::default()
    }
}
impl CreateReportGroupInput {
    /// Consumes the builder and constructs an Operation<[`CreateReportGroup`](crate::operation::CreateReportGroup)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateReportGroup, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_report_group(self);
        assemble_operation(config, "CreateReportGroup", crate::operation::CreateReportGroup::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CreateWebhookInput {
    pub project_name: std::option::Option<std::string::String>,
    pub branch_filter: std::option::Option<std::string::String>,
    pub filter_groups: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>,
}
impl std::fmt::Debug for CreateWebhookInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CreateWebhookInput");
        formatter.field("project_name", &self.project_name);
        formatter.field("branch_filter", &self.branch_filter);
        formatter.field("filter_groups", &self.filter_groups);
        formatter.finish()
    }
}
/// See [`CreateWebhookInput`](crate::input::CreateWebhookInput)
pub mod create_webhook_input {
    /// A builder for [`CreateWebhookInput`](crate::input::CreateWebhookInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) project_name: std::option::Option<std::string::String>,
        pub(crate) branch_filter: std::option::Option<std::string::String>,
        pub(crate) filter_groups: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>,
    }
    impl Builder {
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        pub fn branch_filter(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_filter = Some(input.into());
            self
        }
        pub fn set_branch_filter(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_filter = input;
            self
        }
        /// Appends an item to `filter_groups`.
        pub fn filter_groups(mut self, input: impl Into<std::vec::Vec<crate::model::WebhookFilter>>) -> Self {
            let mut v = self.filter_groups.unwrap_or_default();
            v.push(input.into());
            self.filter_groups = Some(v);
            self
        }
        pub fn set_filter_groups(mut self, input: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>) -> Self {
            self.filter_groups = input;
            self
        }
        /// Consumes the builder and constructs a [`CreateWebhookInput`](crate::input::CreateWebhookInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateWebhookInput, smithy_http::operation::BuildError> {
            if self.project_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "project_name",
                    details: "project_name was not specified but it is required when building CreateWebhookInput",
                });
            }
            Ok(crate::input::CreateWebhookInput {
                project_name: self.project_name,
                branch_filter: self.branch_filter,
                filter_groups: self.filter_groups,
            })
        }
    }
}
impl CreateWebhookInput {
    /// Creates a new builder-style object to manufacture [`CreateWebhookInput`](crate::input::CreateWebhookInput)
    pub fn builder() -> crate::input::create_webhook_input::Builder {
        crate::input::create_webhook_input::Builder::default()
    }
}
impl CreateWebhookInput {
    /// Consumes the builder and constructs an Operation<[`CreateWebhook`](crate::operation::CreateWebhook)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::CreateWebhook, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_create_webhook(self);
        assemble_operation(config, "CreateWebhook", crate::operation::CreateWebhook::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteProjectInput {
    pub name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteProjectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteProjectInput");
        formatter.field("name", &self.name);
        formatter.finish()
    }
}
/// See [`DeleteProjectInput`](crate::input::DeleteProjectInput)
pub mod delete_project_input {
    /// A builder for [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteProjectInput`](crate::input::DeleteProjectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteProjectInput, smithy_http::operation::BuildError> {
            if self.name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "name",
                    details: "name was not specified but it is required when building DeleteProjectInput",
                });
            }
            Ok(crate::input::DeleteProjectInput {
                name: self.name,
            })
        }
    }
}
impl DeleteProjectInput {
    /// Creates a new builder-style object to manufacture [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    pub fn builder() -> crate::input::delete_project_input::Builder {
        crate::input::delete_project_input::Builder::default()
    }
}
impl DeleteProjectInput {
    /// Consumes the builder and constructs an Operation<[`DeleteProject`](crate::operation::DeleteProject)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteProject, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_project(self);
        assemble_operation(config, "DeleteProject", crate::operation::DeleteProject::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteReportInput {
    pub arn: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteReportInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteReportInput");
        formatter.field("arn", &self.arn);
        formatter.finish()
    }
}
/// See [`DeleteReportInput`](crate::input::DeleteReportInput)
pub mod delete_report_input {
    /// A builder for [`DeleteReportInput`](crate::input::DeleteReportInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteReportInput`](crate::input::DeleteReportInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteReportInput, smithy_http::operation::BuildError> {
            if self.arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "arn",
                    details: "arn was not specified but it is required when building DeleteReportInput",
                });
            }
            Ok(crate::input::DeleteReportInput {
                arn: self.arn,
            })
        }
    }
}
impl DeleteReportInput {
    /// Creates a new builder-style object to manufacture [`DeleteReportInput`](crate::input::DeleteReportInput)
    pub fn builder() -> crate::input::delete_report_input::Builder {
        crate::input::delete_report_input::Builder::default()
    }
}
impl DeleteReportInput {
    /// Consumes the builder and constructs an Operation<[`DeleteReport`](crate::operation::DeleteReport)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteReport, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_report(self);
        assemble_operation(config, "DeleteReport", crate::operation::DeleteReport::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteReportGroupInput {
    pub arn: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteReportGroupInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteReportGroupInput");
        formatter.field("arn", &self.arn);
        formatter.finish()
    }
}
/// See [`DeleteReportGroupInput`](crate::input::DeleteReportGroupInput)
pub mod delete_report_group_input {
    /// A builder for [`DeleteReportGroupInput`](crate::input::DeleteReportGroupInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteReportGroupInput`](crate::input::DeleteReportGroupInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteReportGroupInput, smithy_http::operation::BuildError> {
            if self.arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "arn",
                    details: "arn was not specified but it is required when building DeleteReportGroupInput",
                });
            }
            Ok(crate::input::DeleteReportGroupInput {
                arn: self.arn,
            })
        }
    }
}
impl DeleteReportGroupInput {
    /// Creates a new builder-style object to manufacture [`DeleteReportGroupInput`](crate::input::DeleteReportGroupInput)
    pub fn builder() -> crate::input::delete_report_group_input::Builder {
        crate::input::delete_report_group_input::Builder::default()
    }
}
impl DeleteReportGroupInput {
    /// Consumes the builder and constructs an Operation<[`DeleteReportGroup`](crate::operation::DeleteReportGroup)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteReportGroup, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_report_group(self);
        assemble_operation(config, "DeleteReportGroup", crate::operation::DeleteReportGroup::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteResourcePolicyInput {
    pub resource_arn: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteResourcePolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteResourcePolicyInput");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.finish()
    }
}
/// See [`DeleteResourcePolicyInput`](crate::input::DeleteResourcePolicyInput)
pub mod delete_resource_policy_input {
    /// A builder for [`DeleteResourcePolicyInput`](crate::input::DeleteResourcePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteResourcePolicyInput`](crate::input::DeleteResourcePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteResourcePolicyInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building DeleteResourcePolicyInput",
                });
            }
            Ok(crate::input::DeleteResourcePolicyInput {
                resource_arn: self.resource_arn,
            })
        }
    }
}
impl DeleteResourcePolicyInput {
    /// Creates a new builder-style object to manufacture [`DeleteResourcePolicyInput`](crate::input::DeleteResourcePolicyInput)
    pub fn builder() -> crate::input::delete_resource_policy_input::Builder {
        crate::input::delete_resource_policy_input::Builder::default()
    }
}
impl DeleteResourcePolicyInput {
    /// Consumes the builder and constructs an Operation<[`DeleteResourcePolicy`](crate::operation::DeleteResourcePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteResourcePolicy, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_resource_policy(self);
        assemble_operation(config, "DeleteResourcePolicy", crate::operation::DeleteResourcePolicy::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteSourceCredentialsInput {
    pub arn: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteSourceCredentialsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteSourceCredentialsInput");
        formatter.field("arn", &self.arn);
        formatter.finish()
    }
}
/// See [`DeleteSourceCredentialsInput`](crate::input::DeleteSourceCredentialsInput)
pub mod delete_source_credentials_input {
    /// A builder for [`DeleteSourceCredentialsInput`](crate::input::DeleteSourceCredentialsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteSourceCredentialsInput`](crate::input::DeleteSourceCredentialsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteSourceCredentialsInput, smithy_http::operation::BuildError> {
            if self.arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "arn",
                    details: "arn was not specified but it is required when building DeleteSourceCredentialsInput",
                });
            }
            Ok(crate::input::DeleteSourceCredentialsInput {
                arn: self.arn,
            })
        }
    }
}
impl DeleteSourceCredentialsInput {
    /// Creates a new builder-style object to manufacture [`DeleteSourceCredentialsInput`](crate::input::DeleteSourceCredentialsInput)
    pub fn builder() -> crate::input::delete_source_credentials_input::Builder {
        crate::input::delete_source_credentials_input::Builder::default()
    }
}
impl DeleteSourceCredentialsInput {
    /// Consumes the builder and constructs an Operation<[`DeleteSourceCredentials`](crate::operation::DeleteSourceCredentials)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteSourceCredentials, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_source_credentials(self);
        assemble_operation(config, "DeleteSourceCredentials", crate::operation::DeleteSourceCredentials::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DeleteWebhookInput {
    pub project_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for DeleteWebhookInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DeleteWebhookInput");
        formatter.field("project_name", &self.project_name);
        formatter.finish()
    }
}
/// See [`DeleteWebhookInput`](crate::input::DeleteWebhookInput)
pub mod delete_webhook_input {
    /// A builder for [`DeleteWebhookInput`](crate::input::DeleteWebhookInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) project_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        /// Consumes the builder and constructs a [`DeleteWebhookInput`](crate::input::DeleteWebhookInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteWebhookInput, smithy_http::operation::BuildError> {
            if self.project_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "project_name",
                    details: "project_name was not specified but it is required when building DeleteWebhookInput",
                });
            }
            Ok(crate::input::DeleteWebhookInput {
                project_name: self.project_name,
            })
        }
    }
}
impl DeleteWebhookInput {
    /// Creates a new builder-style object to manufacture [`DeleteWebhookInput`](crate::input::DeleteWebhookInput)
    pub fn builder() -> crate::input::delete_webhook_input::Builder {
        crate::input::delete_webhook_input::Builder::default()
    }
}
impl DeleteWebhookInput {
    /// Consumes the builder and constructs an Operation<[`DeleteWebhook`](crate::operation::DeleteWebhook)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DeleteWebhook, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_delete_webhook(self);
        assemble_operation(config, "DeleteWebhook", crate::operation::DeleteWebhook::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct DescribeTestCasesInput {
    pub report_arn: std::option::Option<std::string::String>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub filter: std::option::Option<crate::model::TestCaseFilter>,
}
impl std::fmt::Debug for DescribeTestCasesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("DescribeTestCasesInput");
        formatter.field("report_arn", &self.report_arn);
        formatter.field("next_token", &self.next_token);
        formatter.field("max_results", &self.max_results);
        formatter.field("filter", &self.filter);
        formatter.finish()
    }
}
/// See [`DescribeTestCasesInput`](crate::input::DescribeTestCasesInput)
pub mod describe_test_cases_input {
    /// A builder for [`DescribeTestCasesInput`](crate::input::DescribeTestCasesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) report_arn: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filter: std::option::Option<crate::model::TestCaseFilter>,
    }
    impl Builder {
        pub fn report_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.report_arn = Some(input.into());
            self
        }
        pub fn set_report_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.report_arn = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn filter(mut self, input: crate::model::TestCaseFilter) -> Self {
            self.filter = Some(input);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<crate::model::TestCaseFilter>) -> Self {
            self.filter = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTestCasesInput`](crate::input::DescribeTestCasesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeTestCasesInput, smithy_http::operation::BuildError> {
            if self.report_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "report_arn",
                    details: "report_arn was not specified but it is required when building DescribeTestCasesInput",
                });
            }
            Ok(crate::input::DescribeTestCasesInput {
                report_arn: self.report_arn,
                next_token: self.next_token,
                max_results: self.max_results,
                filter: self.filter,
            })
        }
    }
}
impl DescribeTestCasesInput {
    /// Creates a new builder-style object to manufacture [`DescribeTestCasesInput`](crate::input::DescribeTestCasesInput)
    pub fn builder() -> crate::input::describe_test_cases_input::Builder {
        crate::input::describe_test_cases_input::Builder::default()
    }
}
impl DescribeTestCasesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeTestCases`](crate::operation::DescribeTestCases)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::DescribeTestCases, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_describe_test_cases(self);
        assemble_operation(config, "DescribeTestCases", crate::operation::DescribeTestCases::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GetResourcePolicyInput {
    pub resource_arn: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for GetResourcePolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GetResourcePolicyInput");
        formatter.field("resource_arn", &self.resource_arn);
        formatter.finish()
    }
}
/// See [`GetResourcePolicyInput`](crate::input::GetResourcePolicyInput)
pub mod get_resource_policy_input {
    /// A builder for [`GetResourcePolicyInput`](crate::input::GetResourcePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`GetResourcePolicyInput`](crate::input::GetResourcePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetResourcePolicyInput, smithy_http::operation::BuildError> {
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building GetResourcePolicyInput",
                });
            }
            Ok(crate::input::GetResourcePolicyInput {
                resource_arn: self.resource_arn,
            })
        }
    }
}
impl GetResourcePolicyInput {
    /// Creates a new builder-style object to manufacture [`GetResourcePolicyInput`](crate::input::GetResourcePolicyInput)
    pub fn builder() -> crate::input::get_resource_policy_input::Builder {
        crate::input::get_resource_policy_input::Builder::default()
    }
}
impl GetResourcePolicyInput {
    /// Consumes the builder and constructs an Operation<[`GetResourcePolicy`](crate::operation::GetResourcePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::GetResourcePolicy, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_get_resource_policy(self);
        assemble_operation(config, "GetResourcePolicy", crate::operation::GetResourcePolicy::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ImportSourceCredentialsInput {
    pub username: std::option::Option<std::string::String>,
    pub token: std::option::Option<std::string::String>,
    pub server_type: std::option::Option<crate::model::ServerType>,
    pub auth_type: std::option::Option<crate::model::AuthType>,
    pub should_overwrite: std::option::Option<bool>,
}
impl std::fmt::Debug for ImportSourceCredentialsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ImportSourceCredentialsInput");
        formatter.field("username", &self.username);
        formatter.field("token", &"*** Sensitive Data Redacted ***");
        formatter.field("server_type", &self.server_type);
        formatter.field("auth_type", &self.auth_type);
        formatter.field("should_overwrite", &self.should_overwrite);
        formatter.finish()
    }
}
/// See [`ImportSourceCredentialsInput`](crate::input::ImportSourceCredentialsInput)
pub mod import_source_credentials_input {
    /// A builder for [`ImportSourceCredentialsInput`](crate::input::ImportSourceCredentialsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) username: std::option::Option<std::string::String>,
        pub(crate) token: std::option::Option<std::string::String>,
        pub(crate) server_type: std::option::Option<crate::model::ServerType>,
        pub(crate) auth_type: std::option::Option<crate::model::AuthType>,
        pub(crate) should_overwrite: std::option::Option<bool>,
    }
    impl Builder {
        pub fn username(mut self, input: impl Into<std::string::String>) -> Self {
            self.username = Some(input.into());
            self
        }
        pub fn set_username(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.username = input;
            self
        }
        pub fn token(mut self, input: impl Into<std::string::String>) -> Self {
            self.token = Some(input.into());
            self
        }
        pub fn set_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.token = input;
            self
        }
        pub fn server_type(mut self, input: crate::model::ServerType) -> Self {
            self.server_type = Some(input);
            self
        }
        pub fn set_server_type(mut self, input: std::option::Option<crate::model::ServerType>) -> Self {
            self.server_type = input;
            self
        }
        pub fn auth_type(mut self, input: crate::model::AuthType) -> Self {
            self.auth_type = Some(input);
            self
        }
        pub fn set_auth_type(mut self, input: std::option::Option<crate::model::AuthType>) -> Self {
            self.auth_type = input;
            self
        }
        pub fn should_overwrite(mut self, input: bool) -> Self {
            self.should_overwrite = Some(input);
            self
        }
        pub fn set_should_overwrite(mut self, input: std::option::Option<bool>) -> Self {
            self.should_overwrite = input;
            self
        }
        /// Consumes the builder and constructs a [`ImportSourceCredentialsInput`](crate::input::ImportSourceCredentialsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ImportSourceCredentialsInput, smithy_http::operation::BuildError> {
            if self.token.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "token",
                    details: "token was not specified but it is required when building ImportSourceCredentialsInput",
                });
            }
            if self.server_type.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "server_type",
                    details: "server_type was not specified but it is required when building ImportSourceCredentialsInput",
                });
            }
            if self.auth_type.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "auth_type",
                    details: "auth_type was not specified but it is required when building ImportSourceCredentialsInput",
                });
            }
            Ok(crate::input::ImportSourceCredentialsInput {
                username: self.username,
                token: self.token,
                server_type: self.server_type,
                auth_type: self.auth_type,
                should_overwrite: self.should_overwrite,
            })
        }
    }
}
impl ImportSourceCredentialsInput {
    /// Creates a new builder-style object to manufacture [`ImportSourceCredentialsInput`](crate::input::ImportSourceCredentialsInput)
    pub fn builder() -> crate::input::import_source_credentials_input::Builder {
        crate::input::import_source_credentials_input::Builder::default()
    }
}
impl ImportSourceCredentialsInput {
    /// Consumes the builder and constructs an Operation<[`ImportSourceCredentials`](crate::operation::ImportSourceCredentials)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ImportSourceCredentials, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_import_source_credentials(self);
        assemble_operation(config, "ImportSourceCredentials", crate::operation::ImportSourceCredentials::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct InvalidateProjectCacheInput {
    pub project_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for InvalidateProjectCacheInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("InvalidateProjectCacheInput");
        formatter.field("project_name", &self.project_name);
        formatter.finish()
    }
}
/// See [`InvalidateProjectCacheInput`](crate::input::InvalidateProjectCacheInput)
pub mod invalidate_project_cache_input {
    /// A builder for [`InvalidateProjectCacheInput`](crate::input::InvalidateProjectCacheInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) project_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        /// Consumes the builder and constructs a [`InvalidateProjectCacheInput`](crate::input::InvalidateProjectCacheInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::InvalidateProjectCacheInput, smithy_http::operation::BuildError> {
            if self.project_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "project_name",
                    details: "project_name was not specified but it is required when building InvalidateProjectCacheInput",
                });
            }
            Ok(crate::input::InvalidateProjectCacheInput {
                project_name: self.project_name,
            })
        }
    }
}
impl InvalidateProjectCacheInput {
    /// Creates a new builder-style object to manufacture [`InvalidateProjectCacheInput`](crate::input::InvalidateProjectCacheInput)
    pub fn builder() -> crate::input::invalidate_project_cache_input::Builder {
        crate::input::invalidate_project_cache_input::Builder::default()
    }
}
impl InvalidateProjectCacheInput {
    /// Consumes the builder and constructs an Operation<[`InvalidateProjectCache`](crate::operation::InvalidateProjectCache)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::InvalidateProjectCache, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_invalidate_project_cache(self);
        assemble_operation(config, "InvalidateProjectCache", crate::operation::InvalidateProjectCache::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListBuildsInput {
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ListBuildsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListBuildsInput");
        formatter.field("sort_order", &self.sort_order);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ListBuildsInput`](crate::input::ListBuildsInput)
pub mod list_builds_input {
    /// A builder for [`ListBuildsInput`](crate::input::ListBuildsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListBuildsInput`](crate::input::ListBuildsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListBuildsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListBuildsInput {
                sort_order: self.sort_order,
                next_token: self.next_token,
            })
        }
    }
}
impl ListBuildsInput {
    /// Creates a new builder-style object to manufacture [`ListBuildsInput`](crate::input::ListBuildsInput)
    pub fn builder() -> crate::input::list_builds_input::Builder {
        crate::input::list_builds_input::Builder::default()
    }
}
impl ListBuildsInput {
    /// Consumes the builder and constructs an Operation<[`ListBuilds`](crate::operation::ListBuilds)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListBuilds, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_builds(self);
        assemble_operation(config, "ListBuilds", crate::operation::ListBuilds::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListBuildsForProjectInput {
    pub project_name: std::option::Option<std::string::String>,
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ListBuildsForProjectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListBuildsForProjectInput");
        formatter.field("project_name", &self.project_name);
        formatter.field("sort_order", &self.sort_order);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ListBuildsForProjectInput`](crate::input::ListBuildsForProjectInput)
pub mod list_builds_for_project_input {
    /// A builder for [`ListBuildsForProjectInput`](crate::input::ListBuildsForProjectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) project_name: std::option::Option<std::string::String>,
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListBuildsForProjectInput`](crate::input::ListBuildsForProjectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListBuildsForProjectInput, smithy_http::operation::BuildError> {
            if self.project_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "project_name",
                    details: "project_name was not specified but it is required when building ListBuildsForProjectInput",
                });
            }
            Ok(crate::input::ListBuildsForProjectInput {
                project_name: self.project_name,
                sort_order: self.sort_order,
                next_token: self.next_token,
            })
        }
    }
}
impl ListBuildsForProjectInput {
    /// Creates a new builder-style object to manufacture [`ListBuildsForProjectInput`](crate::input::ListBuildsForProjectInput)
    pub fn builder() -> crate::input::list_builds_for_project_input::Builder {
        crate::input::list_builds_for_project_input::Builder::default()
    }
}
impl ListBuildsForProjectInput {
    /// Consumes the builder and constructs an Operation<[`ListBuildsForProject`](crate::operation::ListBuildsForProject)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListBuildsForProject, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_builds_for_project(self);
        assemble_operation(config, "ListBuildsForProject", crate::operation::ListBuildsForProject::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListCuratedEnvironmentImagesInput {}
impl std::fmt::Debug for ListCuratedEnvironmentImagesInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListCuratedEnvironmentImagesInput").finish()
    }
}
/// See [`ListCuratedEnvironmentImagesInput`](crate::input::ListCuratedEnvironmentImagesInput)
pub mod list_curated_environment_images_input {
    /// A builder for [`ListCuratedEnvironmentImagesInput`](crate::input::ListCuratedEnvironmentImagesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`ListCuratedEnvironmentImagesInput`](crate::input::ListCuratedEnvironmentImagesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListCuratedEnvironmentImagesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListCuratedEnvironmentImagesInput {
            })
        }
    }
}
impl ListCuratedEnvironmentImagesInput {
    /// Creates a new builder-style object to manufacture [`ListCuratedEnvironmentImagesInput`](crate::input::ListCuratedEnvironmentImagesInput)
    pub fn builder() -> crate::input::list_curated_environment_images_input::Builder {
        crate::input::list_curated_environment_images_input::Builder::default()
    }
}
impl ListCuratedEnvironmentImagesInput {
    /// Consumes the builder and constructs an Operation<[`ListCuratedEnvironmentImages`](crate::operation::ListCuratedEnvironmentImages)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListCuratedEnvironmentImages, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_curated_environment_images(self);
        assemble_operation(config, "ListCuratedEnvironmentImages", crate::operation::ListCuratedEnvironmentImages::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListProjectsInput {
    pub sort_by: std::option::Option<crate::model::ProjectSortByType>,
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ListProjectsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListProjectsInput");
        formatter.field("sort_by", &self.sort_by);
        formatter.field("sort_order", &self.sort_order);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ListProjectsInput`](crate::input::ListProjectsInput)
pub mod list_projects_input {
    /// A builder for [`ListProjectsInput`](crate::input::ListProjectsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sort_by: std::option::Option<crate::model::ProjectSortByType>,
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn sort_by(mut self, input: crate::model::ProjectSortByType) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::ProjectSortByType>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListProjectsInput`](crate::input::ListProjectsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListProjectsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListProjectsInput {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                next_token: self.next_token,
            })
        }
    }
}
impl ListProjectsInput {
    /// Creates a new builder-style object to manufacture [`ListProjectsInput`](crate::input::ListProjectsInput)
    pub fn builder() -> crate::input::list_projects_input::Builder {
        crate::input::list_projects_input::Builder::default()
    }
}
impl ListProjectsInput {
    /// Consumes the builder and constructs an Operation<[`ListProjects`](crate::operation::ListProjects)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListProjects, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_projects(self);
        assemble_operation(config, "ListProjects", crate::operation::ListProjects::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListReportGroupsInput {
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub sort_by: std::option::Option<crate::model::ReportGroupSortByType>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
}
impl std::fmt::Debug for ListReportGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListReportGroupsInput");
        formatter.field("sort_order", &self.sort_order);
        formatter.field("sort_by", &self.sort_by);
        formatter.field("next_token", &self.next_token);
        formatter.field("max_results", &self.max_results);
        formatter.finish()
    }
}
/// See [`ListReportGroupsInput`](crate::input::ListReportGroupsInput)
pub mod list_report_groups_input {
    /// A builder for [`ListReportGroupsInput`](crate::input::ListReportGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) sort_by: std::option::Option<crate::model::ReportGroupSortByType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::ReportGroupSortByType) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::ReportGroupSortByType>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListReportGroupsInput`](crate::input::ListReportGroupsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListReportGroupsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListReportGroupsInput {
                sort_order: self.sort_order,
                sort_by: self.sort_by,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListReportGroupsInput {
    /// Creates a new builder-style object to manufacture [`ListReportGroupsInput`](crate::input::ListReportGroupsInput)
    pub fn builder() -> crate::input::list_report_groups_input::Builder {
        crate::input::list_report_groups_input::Builder::default()
    }
}
impl ListReportGroupsInput {
    /// Consumes the builder and constructs an Operation<[`ListReportGroups`](crate::operation::ListReportGroups)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListReportGroups, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_report_groups(self);
        assemble_operation(config, "ListReportGroups", crate::operation::ListReportGroups::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListReportsInput {
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
    pub filter: std::option::Option<crate::model::ReportFilter>,
}
impl std::fmt::Debug for ListReportsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListReportsInput");
        formatter.field("sort_order", &self.sort_order);
        formatter.field("next_token", &self.next_token);
        formatter.field("max_results", &self.max_results);
        formatter.field("filter", &self.filter);
        formatter.finish()
    }
}
/// See [`ListReportsInput`](crate::input::ListReportsInput)
pub mod list_reports_input {
    /// A builder for [`ListReportsInput`](crate::input::ListReportsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filter: std::option::Option<crate::model::ReportFilter>,
    }
    impl Builder {
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn filter(mut self, input: crate::model::ReportFilter) -> Self {
            self.filter = Some(input);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<crate::model::ReportFilter>) -> Self {
            self.filter = input;
            self
        }
        /// Consumes the builder and constructs a [`ListReportsInput`](crate::input::ListReportsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListReportsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListReportsInput {
                sort_order: self.sort_order,
                next_token: self.next_token,
                max_results: self.max_results,
                filter: self.filter,
            })
        }
    }
}
impl ListReportsInput {
    /// Creates a new builder-style object to manufacture [`ListReportsInput`](crate::input::ListReportsInput)
    pub fn builder() -> crate::input::list_reports_input::Builder {
        crate::input::list_reports_input::Builder::default()
    }
}
impl ListReportsInput {
    /// Consumes the builder and constructs an Operation<[`ListReports`](crate::operation::ListReports)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListReports, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_reports(self);
        assemble_operation(config, "ListReports", crate::operation::ListReports::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListReportsForReportGroupInput {
    pub report_group_arn: std::option::Option<std::string::String>,
    pub next_token: std::option::Option<std::string::String>,
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub max_results: std::option::Option<i32>,
    pub filter: std::option::Option<crate::model::ReportFilter>,
}
impl std::fmt::Debug for ListReportsForReportGroupInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListReportsForReportGroupInput");
        formatter.field("report_group_arn", &self.report_group_arn);
        formatter.field("next_token", &self.next_token);
        formatter.field("sort_order", &self.sort_order);
        formatter.field("max_results", &self.max_results);
        formatter.field("filter", &self.filter);
        formatter.finish()
    }
}
/// See [`ListReportsForReportGroupInput`](crate::input::ListReportsForReportGroupInput)
pub mod list_reports_for_report_group_input {
    /// A builder for [`ListReportsForReportGroupInput`](crate::input::ListReportsForReportGroupInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) report_group_arn: std::option::Option<std::string::String>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) filter: std::option::Option<crate::model::ReportFilter>,
    }
    impl Builder {
        pub fn report_group_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.report_group_arn = Some(input.into());
            self
        }
        pub fn set_report_group_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.report_group_arn = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn filter(mut self, input: crate::model::ReportFilter) -> Self {
            self.filter = Some(input);
            self
        }
        pub fn set_filter(mut self, input: std::option::Option<crate::model::ReportFilter>) -> Self {
            self.filter = input;
            self
        }
        /// Consumes the builder and constructs a [`ListReportsForReportGroupInput`](crate::input::ListReportsForReportGroupInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListReportsForReportGroupInput, smithy_http::operation::BuildError> {
            if self.report_group_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "report_group_arn",
                    details: "report_group_arn was not specified but it is required when building ListReportsForReportGroupInput",
                });
            }
            Ok(crate::input::ListReportsForReportGroupInput {
                report_group_arn: self.report_group_arn,
                next_token: self.next_token,
                sort_order: self.sort_order,
                max_results: self.max_results,
                filter: self.filter,
            })
        }
    }
}
impl ListReportsForReportGroupInput {
    /// Creates a new builder-style object to manufacture [`ListReportsForReportGroupInput`](crate::input::ListReportsForReportGroupInput)
    pub fn builder() -> crate::input::list_reports_for_report_group_input::Builder {
        crate::input::list_reports_for_report_group_input::Builder::default()
    }
}
impl ListReportsForReportGroupInput {
    /// Consumes the builder and constructs an Operation<[`ListReportsForReportGroup`](crate::operation::ListReportsForReportGroup)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListReportsForReportGroup, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_reports_for_report_group(self);
        assemble_operation(config, "ListReportsForReportGroup", crate::operation::ListReportsForReportGroup::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListSharedProjectsInput {
    pub sort_by: std::option::Option<crate::model::SharedResourceSortByType>,
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub max_results: std::option::Option<i32>,
    pub next_token: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ListSharedProjectsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListSharedProjectsInput");
        formatter.field("sort_by", &self.sort_by);
        formatter.field("sort_order", &self.sort_order);
        formatter.field("max_results", &self.max_results);
        formatter.field("next_token", &self.next_token);
        formatter.finish()
    }
}
/// See [`ListSharedProjectsInput`](crate::input::ListSharedProjectsInput)
pub mod list_shared_projects_input {
    /// A builder for [`ListSharedProjectsInput`](crate::input::ListSharedProjectsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sort_by: std::option::Option<crate::model::SharedResourceSortByType>,
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) max_results: std::option::Option<i32>,
        pub(crate) next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn sort_by(mut self, input: crate::model::SharedResourceSortByType) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SharedResourceSortByType>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        /// Consumes the builder and constructs a [`ListSharedProjectsInput`](crate::input::ListSharedProjectsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListSharedProjectsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListSharedProjectsInput {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}
impl ListSharedProjectsInput {
    /// Creates a new builder-style object to manufacture [`ListSharedProjectsInput`](crate::input::ListSharedProjectsInput)
    pub fn builder() -> crate::input::list_shared_projects_input::Builder {
        crate::input::list_shared_projects_input::Builder::default()
    }
}
impl ListSharedProjectsInput {
    /// Consumes the builder and constructs an Operation<[`ListSharedProjects`](crate::operation::ListSharedProjects)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListSharedProjects, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_shared_projects(self);
        assemble_operation(config, "ListSharedProjects", crate::operation::ListSharedProjects::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListSharedReportGroupsInput {
    pub sort_order: std::option::Option<crate::model::SortOrderType>,
    pub sort_by: std::option::Option<crate::model::SharedResourceSortByType>,
    pub next_token: std::option::Option<std::string::String>,
    pub max_results: std::option::Option<i32>,
}
impl std::fmt::Debug for ListSharedReportGroupsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ListSharedReportGroupsInput");
        formatter.field("sort_order", &self.sort_order);
        formatter.field("sort_by", &self.sort_by);
        formatter.field("next_token", &self.next_token);
        formatter.field("max_results", &self.max_results);
        formatter.finish()
    }
}
/// See [`ListSharedReportGroupsInput`](crate::input::ListSharedReportGroupsInput)
pub mod list_shared_report_groups_input {
    /// A builder for [`ListSharedReportGroupsInput`](crate::input::ListSharedReportGroupsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) sort_order: std::option::Option<crate::model::SortOrderType>,
        pub(crate) sort_by: std::option::Option<crate::model::SharedResourceSortByType>,
        pub(crate) next_token: std::option::Option<std::string::String>,
        pub(crate) max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn sort_order(mut self, input: crate::model::SortOrderType) -> Self {
            self.sort_order = Some(input);
            self
        }
        pub fn set_sort_order(mut self, input: std::option::Option<crate::model::SortOrderType>) -> Self {
            self.sort_order = input;
            self
        }
        pub fn sort_by(mut self, input: crate::model::SharedResourceSortByType) -> Self {
            self.sort_by = Some(input);
            self
        }
        pub fn set_sort_by(mut self, input: std::option::Option<crate::model::SharedResourceSortByType>) -> Self {
            self.sort_by = input;
            self
        }
        pub fn next_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        pub fn set_next_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.next_token = input;
            self
        }
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        pub fn set_max_results(mut self, input: std::option::Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        /// Consumes the builder and constructs a [`ListSharedReportGroupsInput`](crate::input::ListSharedReportGroupsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListSharedReportGroupsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListSharedReportGroupsInput {
                sort_order: self.sort_order,
                sort_by: self.sort_by,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}
impl ListSharedReportGroupsInput {
    /// Creates a new builder-style object to manufacture [`ListSharedReportGroupsInput`](crate::input::ListSharedReportGroupsInput)
    pub fn builder() -> crate::input::list_shared_report_groups_input::Builder {
        crate::input::list_shared_report_groups_input::Builder::default()
    }
}
impl ListSharedReportGroupsInput {
    /// Consumes the builder and constructs an Operation<[`ListSharedReportGroups`](crate::operation::ListSharedReportGroups)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListSharedReportGroups, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_shared_report_groups(self);
        assemble_operation(config, "ListSharedReportGroups", crate::operation::ListSharedReportGroups::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ListSourceCredentialsInput {}
impl std::fmt::Debug for ListSourceCredentialsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListSourceCredentialsInput").finish()
    }
}
/// See [`ListSourceCredentialsInput`](crate::input::ListSourceCredentialsInput)
pub mod list_source_credentials_input {
    /// A builder for [`ListSourceCredentialsInput`](crate::input::ListSourceCredentialsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`ListSourceCredentialsInput`](crate::input::ListSourceCredentialsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListSourceCredentialsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListSourceCredentialsInput {
            })
        }
    }
}
impl ListSourceCredentialsInput {
    /// Creates a new builder-style object to manufacture [`ListSourceCredentialsInput`](crate::input::ListSourceCredentialsInput)
    pub fn builder() -> crate::input::list_source_credentials_input::Builder {
        crate::input::list_source_credentials_input::Builder::default()
    }
}
impl ListSourceCredentialsInput {
    /// Consumes the builder and constructs an Operation<[`ListSourceCredentials`](crate::operation::ListSourceCredentials)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::ListSourceCredentials, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_list_source_credentials(self);
        assemble_operation(config, "ListSourceCredentials", crate::operation::ListSourceCredentials::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct PutResourcePolicyInput {
    pub policy: std::option::Option<std::string::String>,
    pub resource_arn: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for PutResourcePolicyInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PutResourcePolicyInput");
        formatter.field("policy", &self.policy);
        formatter.field("resource_arn", &self.resource_arn);
        formatter.finish()
    }
}
/// See [`PutResourcePolicyInput`](crate::input::PutResourcePolicyInput)
pub mod put_resource_policy_input {
    /// A builder for [`PutResourcePolicyInput`](crate::input::PutResourcePolicyInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) policy: std::option::Option<std::string::String>,
        pub(crate) resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn policy(mut self, input: impl Into<std::string::String>) -> Self {
            self.policy = Some(input.into());
            self
        }
        pub fn set_policy(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.policy = input;
            self
        }
        pub fn resource_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(input.into());
            self
        }
        pub fn set_resource_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = input;
            self
        }
        /// Consumes the builder and constructs a [`PutResourcePolicyInput`](crate::input::PutResourcePolicyInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutResourcePolicyInput, smithy_http::operation::BuildError> {
            if self.policy.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "policy",
                    details: "policy was not specified but it is required when building PutResourcePolicyInput",
                });
            }
            if self.resource_arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "resource_arn was not specified but it is required when building PutResourcePolicyInput",
                });
            }
            Ok(crate::input::PutResourcePolicyInput {
                policy: self.policy,
                resource_arn: self.resource_arn,
            })
        }
    }
}
impl PutResourcePolicyInput {
    /// Creates a new builder-style object to manufacture [`PutResourcePolicyInput`](crate::input::PutResourcePolicyInput)
    pub fn builder() -> crate::input::put_resource_policy_input::Builder {
        crate::input::put_resource_policy_input::Builder::default()
    }
}
impl PutResourcePolicyInput {
    /// Consumes the builder and constructs an Operation<[`PutResourcePolicy`](crate::operation::PutResourcePolicy)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::PutResourcePolicy, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_put_resource_policy(self);
        assemble_operation(config, "PutResourcePolicy", crate::operation::PutResourcePolicy::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct StartBuildInput {
    /// The name of the CodeBuild build project to start running a build.
    pub project_name: std::option::Option<std::string::String>,
    pub secondary_sources_override: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
    pub secondary_sources_version_override: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
    /// The version of the build input to be built, for this build only.
    pub source_version: std::option::Option<std::string::String>,
    pub artifacts_override: std::option::Option<crate::model::ProjectArtifacts>,
    pub secondary_artifacts_override: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>,
    pub environment_variables_override: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>,
    pub source_type_override: std::option::Option<crate::model::SourceType>,
    pub source_location_override: std::option::Option<std::string::String>,
    pub source_auth_override: std::option::Option<crate::model::SourceAuth>,
    pub git_clone_depth_override: std::option::Option<i32>,
    pub git_submodules_config_override: std::option::Option<crate::model::GitSubmodulesConfig>,
    pub buildspec_override: std::option::Option<std::string::String>,
    pub insecure_ssl_override: std::option::Option<bool>,
    pub report_build_status_override: std::option::Option<bool>,
    pub environment_type_override: std::option::Option<crate::model::EnvironmentType>,
    pub image_override: std::option::Option<std::string::String>,
    pub compute_type_override: std::option::Option<crate::model::ComputeType>,
    pub certificate_override: std::option::Option<std::string::String>,
    pub cache_override: std::option::Option<crate::model::ProjectCache>,
    pub service_role_override: std::option::Option<std::string::String>,
    pub privileged_mode_override: std::option::Option<bool>,
    pub timeout_in_minutes_override: std::option::Option<i32>,
    pub queued_timeout_in_minutes_override: std::option::Option<i32>,
    pub encryption_key_override: std::option::Option<std::string::String>,
    /// A unique, case sensitive identifier that makes the StartBuild request idempotent.
    pub idempotency_token: std::option::Option<std::string::String>,
    pub logs_config_override: std::option::Option<crate::model::LogsConfig>,
    pub registry_credential_override: std::option::Option<crate::model::RegistryCredential>,
    pub image_pull_credentials_type_override: std::option::Option<crate::model::ImagePullCredentialsType>,
}
impl std::fmt::Debug for StartBuildInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StartBuildInput");
        formatter.field("project_name", &self.project_name);
        formatter.field("secondary_sources_override", &self.secondary_sources_override);
        formatter.field("secondary_sources_version_override", &self.secondary_sources_version_override);
        formatter.field("source_version", &self.source_version);
        formatter.field("artifacts_override", &self.artifacts_override);
        formatter.field("secondary_artifacts_override", &self.secondary_artifacts_override);
        formatter.field("environment_variables_override", &self.environment_variables_override);
        formatter.field("source_type_override", &self.source_type_override);
        formatter.field("source_location_override", &self.source_location_override);
        formatter.field("source_auth_override", &self.source_auth_override);
        formatter.field("git_clone_depth_override", &self.git_clone_depth_override);
        formatter.field("git_submodules_config_override", &self.git_submodules_config_override);
        formatter.field("buildspec_override", &self.buildspec_override);
        formatter.field("insecure_ssl_override", &self.insecure_ssl_override);
        formatter.field("report_build_status_override", &self.report_build_status_override);
        formatter.field("environment_type_override", &self.environment_type_override);
        formatter.field("image_override", &self.image_override);
        formatter.field("compute_type_override", &self.compute_type_override);
        formatter.field("certificate_override", &self.certificate_override);
        formatter.field("cache_override", &self.cache_override);
        formatter.field("service_role_override", &self.service_role_override);
        formatter.field("privileged_mode_override", &self.privileged_mode_override);
        formatter.field("timeout_in_minutes_override", &self.timeout_in_minutes_override);
        formatter.field("queued_timeout_in_minutes_override", &self.queued_timeout_in_minutes_override);
        formatter.field("encryption_key_override", &self.encryption_key_override);
        formatter.field("idempotency_token", &self.idempotency_token);
        formatter.field("logs_config_override", &self.logs_config_override);
        formatter.field("registry_credential_override", &self.registry_credential_override);
        formatter.field("image_pull_credentials_type_override", &self.image_pull_credentials_type_override);
        formatter.finish()
    }
}
/// See [`StartBuildInput`](crate::input::StartBuildInput)
pub mod start_build_input {
    /// A builder for [`StartBuildInput`](crate::input::StartBuildInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) project_name: std::option::Option<std::string::String>,
        pub(crate) secondary_sources_override: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
        pub(crate) secondary_sources_version_override: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
        pub(crate) source_version: std::option::Option<std::string::String>,
        pub(crate) artifacts_override: std::option::Option<crate::model::ProjectArtifacts>,
        pub(crate) secondary_artifacts_override: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>,
        pub(crate) environment_variables_override: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>,
        pub(crate) source_type_override: std::option::Option<crate::model::SourceType>,
        pub(crate) source_location_override: std::option::Option<std::string::String>,
        pub(crate) source_auth_override: std::option::Option<crate::model::SourceAuth>,
        pub(crate) git_clone_depth_override: std::option::Option<i32>,
        pub(crate) git_submodules_config_override: std::option::Option<crate::model::GitSubmodulesConfig>,
        pub(crate) buildspec_override: std::option::Option<std::string::String>,
        pub(crate) insecure_ssl_override: std::option::Option<bool>,
        pub(crate) report_build_status_override: std::option::Option<bool>,
        pub(crate) environment_type_override: std::option::Option<crate::model::EnvironmentType>,
        pub(crate) image_override: std::option::Option<std::string::String>,
        pub(crate) compute_type_override: std::option::Option<crate::model::ComputeType>,
        pub(crate) certificate_override: std::option::Option<std::string::String>,
        pub(crate) cache_override: std::option::Option<crate::model::ProjectCache>,
        pub(crate) service_role_override: std::option::Option<std::string::String>,
        pub(crate) privileged_mode_override: std::option::Option<bool>,
        pub(crate) timeout_in_minutes_override: std::option::Option<i32>,
        pub(crate) queued_timeout_in_minutes_override: std::option::Option<i32>,
        pub(crate) encryption_key_override: std::option::Option<std::string::String>,
        pub(crate) idempotency_token: std::option::Option<std::string::String>,
        pub(crate) logs_config_override: std::option::Option<crate::model::LogsConfig>,
        pub(crate) registry_credential_override: std::option::Option<crate::model::RegistryCredential>,
        pub(crate) image_pull_credentials_type_override: std::option::Option<crate::model::ImagePullCredentialsType>,
    }
    impl Builder {
        /// The name of the CodeBuild build project to start running a build.
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        /// Appends an item to `secondary_sources_override`.
        pub fn secondary_sources_override(mut self, input: impl Into<crate::model::ProjectSource>) -> Self {
            let mut v = self.secondary_sources_override.unwrap_or_default();
            v.push(input.into());
            self.secondary_sources_override = Some(v);
            self
        }
        pub fn set_secondary_sources_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>) -> Self {
            self.secondary_sources_override = input;
            self
        }
        /// Appends an item to `secondary_sources_version_override`.
        pub fn secondary_sources_version_override(mut self, input: impl Into<crate::model::ProjectSourceVersion>) -> Self {
            let mut v = self.secondary_sources_version_override.unwrap_or_default();
            v.push(input.into());
            self.secondary_sources_version_override = Some(v);
            self
        }
        pub fn set_secondary_sources_version_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>) -> Self {
            self.secondary_sources_version_override = input;
            self
        }
        /// The version of the build input to be built, for this build only.
        pub fn source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_version = Some(input.into());
            self
        }
        pub fn set_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_version = input;
            self
        }
        pub fn artifacts_override(mut self, input: crate::model::ProjectArtifacts) -> Self {
            self.artifacts_override = Some(input);
            self
        }
        pub fn set_artifacts_override(mut self, input: std::option::Option<crate::model::ProjectArtifacts>) -> Self {
            self.artifacts_override = input;
            self
        }
        /// Appends an item to `secondary_artifacts_override`.
        pub fn secondary_artifacts_override(mut self, input: impl Into<crate::model::ProjectArtifacts>) -> Self {
            let mut v = self.secondary_artifacts_override.unwrap_or_default();
            v.push(input.into());
            self.secondary_artifacts_override = Some(v);
            self
        }
        pub fn set_secondary_artifacts_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>) -> Self {
            self.secondary_artifacts_override = input;
            self
        }
        /// Appends an item to `environment_variables_override`.
        pub fn environment_variables_override(mut self, input: impl Into<crate::model::EnvironmentVariable>) -> Self {
            let mut v = self.environment_variables_override.unwrap_or_default();
            v.push(input.into());
            self.environment_variables_override = Some(v);
            self
        }
        pub fn set_environment_variables_override(mut self, input: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>) -> Self {
            self.environment_variables_override = input;
            self
        }
        pub fn source_type_override(mut self, input: crate::model::SourceType) -> Self {
            self.source_type_override = Some(input);
            self
        }
        pub fn set_source_type_override(mut self, input: std::option::Option<crate::model::SourceType>) -> Self {
            self.source_type_override = input;
            self
        }
        pub fn source_location_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_location_override = Some(input.into());
            self
        }
        pub fn set_source_location_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_location_override = input;
            self
        }
        pub fn source_auth_override(mut self, input: crate::model::SourceAuth) -> Self {
            self.source_auth_override = Some(input);
            self
        }
        pub fn set_source_auth_override(mut self, input: std::option::Option<crate::model::SourceAuth>) -> Self {
            self.source_auth_override = input;
            self
        }
        pub fn git_clone_depth_override(mut self, input: i32) -> Self {
            self.git_clone_depth_override = Some(input);
            self
        }
        pub fn set_git_clone_depth_override(mut self, input: std::option::Option<i32>) -> Self {
            self.git_clone_depth_override = input;
            self
        }
        pub fn git_submodules_config_override(mut self, input: crate::model::GitSubmodulesConfig) -> Self {
            self.git_submodules_config_override = Some(input);
            self
        }
        pub fn set_git_submodules_config_override(mut self, input: std::option::Option<crate::model::GitSubmodulesConfig>) -> Self {
            self.git_submodules_config_override = input;
            self
        }
        pub fn buildspec_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.buildspec_override = Some(input.into());
            self
        }
        pub fn set_buildspec_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.buildspec_override = input;
            self
        }
        pub fn insecure_ssl_override(mut self, input: bool) -> Self {
            self.insecure_ssl_override = Some(input);
            self
        }
        pub fn set_insecure_ssl_override(mut self, input: std::option::Option<bool>) -> Self {
            self.insecure_ssl_override = input;
            self
        }
        pub fn report_build_status_override(mut self, input: bool) -> Self {
            self.report_build_status_override = Some(input);
            self
        }
        pub fn set_report_build_status_override(mut self, input: std::option::Option<bool>) -> Self {
            self.report_build_status_override = input;
            self
        }
        pub fn environment_type_override(mut self, input: crate::model::EnvironmentType) -> Self {
            self.environment_type_override = Some(input);
            self
        }
        pub fn set_environment_type_override(mut self, input: std::option::Option<crate::model::EnvironmentType>) -> Self {
            self.environment_type_override = input;
            self
        }
        pub fn image_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.image_override = Some(input.into());
            self
        }
        pub fn set_image_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image_override = input;
            self
        }
        pub fn compute_type_override(mut self, input: crate::model::ComputeType) -> Self {
            self.compute_type_override = Some(input);
            self
        }
        pub fn set_compute_type_override(mut self, input: std::option::Option<crate::model::ComputeType>) -> Self {
            self.compute_type_override = input;
            self
        }
        pub fn certificate_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.certificate_override = Some(input.into());
            self
        }
        pub fn set_certificate_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.certificate_override = input;
            self
        }
        pub fn cache_override(mut self, input: crate::model::ProjectCache) -> Self {
            self.cache_override = Some(input);
            self
        }
        pub fn set_cache_override(mut self, input: std::option::Option<crate::model::ProjectCache>) -> Self {
            self.cache_override = input;
            self
        }
        pub fn service_role_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_role_override = Some(input.into());
            self
        }
        pub fn set_service_role_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_role_override = input;
            self
        }
        pub fn privileged_mode_override(mut self, input: bool) -> Self {
            self.privileged_mode_override = Some(input);
            self
        }
        pub fn set_privileged_mode_override(mut self, input: std::option::Option<bool>) -> Self {
            self.privileged_mode_override = input;
            self
        }
        pub fn timeout_in_minutes_override(mut self, input: i32) -> Self {
            self.timeout_in_minutes_override = Some(input);
            self
        }
        pub fn set_timeout_in_minutes_override(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_in_minutes_override = input;
            self
        }
        pub fn queued_timeout_in_minutes_override(mut self, input: i32) -> Self {
            self.queued_timeout_in_minutes_override = Some(input);
            self
        }
        pub fn set_queued_timeout_in_minutes_override(mut self, input: std::option::Option<i32>) -> Self {
            self.queued_timeout_in_minutes_override = input;
            self
        }
        pub fn encryption_key_override(mut self, input: impl Into<std::string::String>) -> Self {
            self.encryption_key_override = Some(input.into());
            self
        }
        pub fn set_encryption_key_override(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.encryption_key_override = input;
            self
        }
        /// A unique, case sensitive identifier that makes the StartBuild request idempotent.
        pub fn idempotency_token(mut self, input: impl Into<std::string::String>) -> Self {
            self.idempotency_token = Some(input.into());
            self
        }
        pub fn set_idempotency_token(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.idempotency_token = input;
            self
        }
        pub fn logs_config_override(mut self, input: crate::model::LogsConfig) -> Self {
            self.logs_config_override = Some(input);
            self
        }
        pub fn set_logs_config_override(mut self, input: std::option::Option<crate::model::LogsConfig>) -> Self {
            self.logs_config_override = input;
            self
        }
        pub fn registry_credential_override(mut self, input: crate::model::RegistryCredential) -> Self {
            self.registry_credential_override = Some(input);
            self
        }
        pub fn set_registry_credential_override(mut self, input: std::option::Option<crate::model::RegistryCredential>) -> Self {
            self.registry_credential_override = input;
            self
        }
        pub fn image_pull_credentials_type_override(mut self, input: crate::model::ImagePullCredentialsType) -> Self {
            self.image_pull_credentials_type_override = Some(input);
            self
        }
        pub fn set_image_pull_credentials_type_override(mut self, input: std::option::Option<crate::model::ImagePullCredentialsType>) -> Self {
            self.image_pull_credentials_type_override = input;
            self
        }
        /// Consumes the builder and constructs a [`StartBuildInput`](crate::input::StartBuildInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StartBuildInput, smithy_http::operation::BuildError> {
            if self.project_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "project_name",
                    details: "project_name was not specified but it is required when building StartBuildInput",
                });
            }
            Ok(crate::input::StartBuildInput {
                project_name: self.project_name,
                secondary_sources_override: self.secondary_sources_override,
                secondary_sources_version_override: self.secondary_sources_version_override,
                source_version: self.source_version,
                artifacts_override: self.artifacts_override,
                secondary_artifacts_override: self.secondary_artifacts_override,
                environment_variables_override: self.environment_variables_override,
                source_type_override: self.source_type_override,
                source_location_override: self.source_location_override,
                source_auth_override: self.source_auth_override,
                git_clone_depth_override: self.git_clone_depth_override,
                git_submodules_config_override: self.git_submodules_config_override,
                buildspec_override: self.buildspec_override,
                insecure_ssl_override: self.insecure_ssl_override,
                report_build_status_override: self.report_build_status_override,
                environment_type_override: self.environment_type_override,
                image_override: self.image_override,
                compute_type_override: self.compute_type_override,
                certificate_override: self.certificate_override,
                cache_override: self.cache_override,
                service_role_override: self.service_role_override,
                privileged_mode_override: self.privileged_mode_override,
                timeout_in_minutes_override: self.timeout_in_minutes_override,
                queued_timeout_in_minutes_override: self.queued_timeout_in_minutes_override,
                encryption_key_override: self.encryption_key_override,
                idempotency_token: self.idempotency_token,
                logs_config_override: self.logs_config_override,
                registry_credential_override: self.registry_credential_override,
                image_pull_credentials_type_override: self.image_pull_credentials_type_override,
            })
        }
    }
}
impl StartBuildInput {
    /// Creates a new builder-style object to manufacture [`StartBuildInput`](crate::input::StartBuildInput)
    pub fn builder() -> crate::input::start_build_input::Builder {
        crate::input::start_build_input::Builder::default()
    }
}
impl StartBuildInput {
    /// Consumes the builder and constructs an Operation<[`StartBuild`](crate::operation::StartBuild)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::StartBuild, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_start_build(self);
        assemble_operation(config, "StartBuild", crate::operation::StartBuild::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct StopBuildInput {
    pub id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for StopBuildInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("StopBuildInput");
        formatter.field("id", &self.id);
        formatter.finish()
    }
}
/// See [`StopBuildInput`](crate::input::StopBuildInput)
pub mod stop_build_input {
    /// A builder for [`StopBuildInput`](crate::input::StopBuildInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        /// Consumes the builder and constructs a [`StopBuildInput`](crate::input::StopBuildInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StopBuildInput, smithy_http::operation::BuildError> {
            if self.id.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "id",
                    details: "id was not specified but it is required when building StopBuildInput",
                });
            }
            Ok(crate::input::StopBuildInput {
                id: self.id,
            })
        }
    }
}
impl StopBuildInput {
    /// Creates a new builder-style object to manufacture [`StopBuildInput`](crate::input::StopBuildInput)
    pub fn builder() -> crate::input::stop_build_input::Builder {
        crate::input::stop_build_input::Builder::default()
    }
}
impl StopBuildInput {
    /// Consumes the builder and constructs an Operation<[`StopBuild`](crate::operation::StopBuild)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::StopBuild, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_stop_build(self);
        assemble_operation(config, "StopBuild", crate::operation::StopBuild::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateProjectInput {
    pub name: std::option::Option<std::string::String>,
    pub description: std::option::Option<std::string::String>,
    pub source: std::option::Option<crate::model::ProjectSource>,
    pub secondary_sources: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
    pub source_version: std::option::Option<std::string::String>,
    pub secondary_source_versions: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
    pub artifacts: std::option::Option<crate::model::ProjectArtifacts>,
    pub secondary_artifacts: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>,
    pub cache: std::option::Option<crate::model::ProjectCache>,
    pub environment: std::option::Option<crate::model::ProjectEnvironment>,
    pub service_role: std::option::Option<std::string::String>,
    pub timeout_in_minutes: std::option::Option<i32>,
    pub queued_timeout_in_minutes: std::option::Option<i32>,
    pub encryption_key: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    pub badge_enabled: std::option::Option<bool>,
    pub logs_config: std::option::Option<crate::model::LogsConfig>,
    pub file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
}
impl std::fmt::Debug for UpdateProjectInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateProjectInput");
        formatter.field("name", &self.name);
        formatter.field("description", &self.description);
        formatter.field("source", &self.source);
        formatter.field("secondary_sources", &self.secondary_sources);
        formatter.field("source_version", &self.source_version);
        formatter.field("secondary_source_versions", &self.secondary_source_versions);
        formatter.field("artifacts", &self.artifacts);
        formatter.field("secondary_artifacts", &self.secondary_artifacts);
        formatter.field("cache", &self.cache);
        formatter.field("environment", &self.environment);
        formatter.field("service_role", &self.service_role);
        formatter.field("timeout_in_minutes", &self.timeout_in_minutes);
        formatter.field("queued_timeout_in_minutes", &self.queued_timeout_in_minutes);
        formatter.field("encryption_key", &self.encryption_key);
        formatter.field("tags", &self.tags);
        formatter.field("vpc_config", &self.vpc_config);
        formatter.field("badge_enabled", &self.badge_enabled);
        formatter.field("logs_config", &self.logs_config);
        formatter.field("file_system_locations", &self.file_system_locations);
        formatter.finish()
    }
}
/// See [`UpdateProjectInput`](crate::input::UpdateProjectInput)
pub mod update_project_input {
    /// A builder for [`UpdateProjectInput`](crate::input::UpdateProjectInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) source: std::option::Option<crate::model::ProjectSource>,
        pub(crate) secondary_sources: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
        pub(crate) source_version: std::option::Option<std::string::String>,
        pub(crate) secondary_source_versions: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
        pub(crate) artifacts: std::option::Option<crate::model::ProjectArtifacts>,
        pub(crate) secondary_artifacts: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>,
        pub(crate) cache: std::option::Option<crate::model::ProjectCache>,
        pub(crate) environment: std::option::Option<crate::model::ProjectEnvironment>,
        pub(crate) service_role: std::option::Option<std::string::String>,
        pub(crate) timeout_in_minutes: std::option::Option<i32>,
        pub(crate) queued_timeout_in_minutes: std::option::Option<i32>,
        pub(crate) encryption_key: std::option::Option<std::string::String>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        pub(crate) vpc_config: std::option::Option<crate::model::VpcConfig>,
        pub(crate) badge_enabled: std::option::Option<bool>,
        pub(crate) logs_config: std::option::Option<crate::model::LogsConfig>,
        pub(crate) file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
    }
    impl Builder {
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn description(mut self, input: impl Into<std::string::String>) -> Self {
            self.description = Some(input.into());
            self
        }
        pub fn set_description(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.description = input;
            self
        }
        pub fn source(mut self, input: crate::model::ProjectSource) -> Self {
            self.source = Some(input);
            self
        }
        pub fn set_source(mut self, input: std::option::Option<crate::model::ProjectSource>) -> Self {
            self.source = input;
            self
        }
        /// Appends an item to `secondary_sources`.
        pub fn secondary_sources(mut self, input: impl Into<crate::model::ProjectSource>) -> Self {
            let mut v = self.secondary_sources.unwrap_or_default();
            v.push(input.into());
            self.secondary_sources = Some(v);
            self
        }
        pub fn set_secondary_sources(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>) -> Self {
            self.secondary_sources = input;
            self
        }
        pub fn source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_version = Some(input.into());
            self
        }
        pub fn set_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_version = input;
            self
        }
        /// Appends an item to `secondary_source_versions`.
        pub fn secondary_source_versions(mut self, input: impl Into<crate::model::ProjectSourceVersion>) -> Self {
            let mut v = self.secondary_source_versions.unwrap_or_default();
            v.push(input.into());
            self.secondary_source_versions = Some(v);
            self
        }
        pub fn set_secondary_source_versions(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>) -> Self {
            self.secondary_source_versions = input;
            self
        }
        pub fn artifacts(mut self, input: crate::model::ProjectArtifacts) -> Self {
            self.artifacts = Some(input);
            self
        }
        pub fn set_artifacts(mut self, input: std::option::Option<crate::model::ProjectArtifacts>) -> Self {
            self.artifacts = input;
            self
        }
        /// Appends an item to `secondary_artifacts`.
        pub fn secondary_artifacts(mut self, input: impl Into<crate::model::ProjectArtifacts>) -> Self {
            let mut v = self.secondary_artifacts.unwrap_or_default();
            v.push(input.into());
            self.secondary_artifacts = Some(v);
            self
        }
        pub fn set_secondary_artifacts(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectArtifacts>>) -> Self {
            self.secondary_artifacts = input;
            self
        }
        pub fn cache(mut self, input: crate::model::ProjectCache) -> Self {
            self.cache = Some(input);
            self
        }
        pub fn set_cache(mut self, input: std::option::Option<crate::model::ProjectCache>) -> Self {
            self.cache = input;
            self
        }
        pub fn environment(mut self, input: crate::model::ProjectEnvironment) -> Self {
            self.environment = Some(input);
            self
        }
        pub fn set_environment(mut self, input: std::option::Option<crate::model::ProjectEnvironment>) -> Self {
            self.environment = input;
            self
        }
        pub fn service_role(mut self, input: impl Into<std::string::String>) -> Self {
            self.service_role = Some(input.into());
            self
        }
        pub fn set_service_role(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.service_role = input;
            self
        }
        pub fn timeout_in_minutes(mut self, input: i32) -> Self {
            self.timeout_in_minutes = Some(input);
            self
        }
        pub fn set_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.timeout_in_minutes = input;
            self
        }
        pub fn queued_timeout_in_minutes(mut self, input: i32) -> Self {
            self.queued_timeout_in_minutes = Some(input);
            self
        }
        pub fn set_queued_timeout_in_minutes(mut self, input: std::option::Option<i32>) -> Self {
            self.queued_timeout_in_minutes = input;
            self
        }
        pub fn encryption_key(mut self, input: impl Into<std::string::String>) -> Self {
            self.encryption_key = Some(input.into());
            self
        }
        pub fn set_encryption_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.encryption_key = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        pub fn vpc_config(mut self, input: crate::model::VpcConfig) -> Self {
            self.vpc_config = Some(input);
            self
        }
        pub fn set_vpc_config(mut self, input: std::option::Option<crate::model::VpcConfig>) -> Self {
            self.vpc_config = input;
            self
        }
        pub fn badge_enabled(mut self, input: bool) -> Self {
            self.badge_enabled = Some(input);
            self
        }
        pub fn set_badge_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.badge_enabled = input;
            self
        }
        pub fn logs_config(mut self, input: crate::model::LogsConfig) -> Self {
            self.logs_config = Some(input);
            self
        }
        pub fn set_logs_config(mut self, input: std::option::Option<crate::model::LogsConfig>) -> Self {
            self.logs_config = input;
            self
        }
        /// Appends an item to `file_system_locations`.
        pub fn file_system_locations(mut self, input: impl Into<crate::model::ProjectFileSystemLocation>) -> Self {
            let mut v = self.file_system_locations.unwrap_or_default();
            v.push(input.into());
            self.file_system_locations = Some(v);
            self
        }
        pub fn set_file_system_locations(mut self, input: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>) -> Self {
            self.file_system_locations = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateProjectInput`](crate::input::UpdateProjectInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateProjectInput, smithy_http::operation::BuildError> {
            if self.name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "name",
                    details: "name was not specified but it is required when building UpdateProjectInput",
                });
            }
            Ok(crate::input::UpdateProjectInput {
                name: self.name,
                description: self.description,
                source: self.source,
                secondary_sources: self.secondary_sources,
                source_version: self.source_version,
                secondary_source_versions: self.secondary_source_versions,
                artifacts: self.artifacts,
                secondary_artifacts: self.secondary_artifacts,
                cache: self.cache,
                environment: self.environment,
                service_role: self.service_role,
                timeout_in_minutes: self.timeout_in_minutes,
                queued_timeout_in_minutes: self.queued_timeout_in_minutes,
                encryption_key: self.encryption_key,
                tags: self.tags,
                vpc_config: self.vpc_config,
                badge_enabled: self.badge_enabled,
                logs_config: self.logs_config,
                file_system_locations: self.file_system_locations,
            })
        }
    }
}
impl UpdateProjectInput {
    /// Creates a new builder-style object to manufacture [`UpdateProjectInput`](crate::input::UpdateProjectInput)
    pub fn builder() -> crate::input::update_project_input::Builder {
        crate::input::update_project_input::Builder::default()
    }
}
impl UpdateProjectInput {
    /// Consumes the builder and constructs an Operation<[`UpdateProject`](crate::operation::UpdateProject)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UpdateProject, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_update_project(self);
        assemble_operation(config, "UpdateProject", crate::operation::UpdateProject::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateReportGroupInput {
    pub arn: std::option::Option<std::string::String>,
    pub export_config: std::option::Option<crate::model::ReportExportConfig>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for UpdateReportGroupInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateReportGroupInput");
        formatter.field("arn", &self.arn);
        formatter.field("export_config", &self.export_config);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`UpdateReportGroupInput`](crate::input::UpdateReportGroupInput)
pub mod update_report_group_input {
    /// A builder for [`UpdateReportGroupInput`](crate::input::UpdateReportGroupInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) export_config: std::option::Option<crate::model::ReportExportConfig>,
        pub(crate) tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        pub fn export_config(mut self, input: crate::model::ReportExportConfig) -> Self {
            self.export_config = Some(input);
            self
        }
        pub fn set_export_config(mut self, input: std::option::Option<crate::model::ReportExportConfig>) -> Self {
            self.export_config = input;
            self
        }
        /// Appends an item to `tags`.
        pub fn tags(mut self, input: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(input.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(mut self, input: std::option::Option<std::vec::Vec<crate::model::Tag>>) -> Self {
            self.tags = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateReportGroupInput`](crate::input::UpdateReportGroupInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateReportGroupInput, smithy_http::operation::BuildError> {
            if self.arn.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "arn",
                    details: "arn was not specified but it is required when building UpdateReportGroupInput",
                });
            }
            Ok(crate::input::UpdateReportGroupInput {
                arn: self.arn,
                export_config: self.export_config,
                tags: self.tags,
            })
        }
    }
}
impl UpdateReportGroupInput {
    /// Creates a new builder-style object to manufacture [`UpdateReportGroupInput`](crate::input::UpdateReportGroupInput)
    pub fn builder() -> crate::input::update_report_group_input::Builder {
        crate::input::update_report_group_input::Builder::default()
    }
}
impl UpdateReportGroupInput {
    /// Consumes the builder and constructs an Operation<[`UpdateReportGroup`](crate::operation::UpdateReportGroup)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UpdateReportGroup, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_update_report_group(self);
        assemble_operation(config, "UpdateReportGroup", crate::operation::UpdateReportGroup::new(), body)
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct UpdateWebhookInput {
    pub project_name: std::option::Option<std::string::String>,
    pub branch_filter: std::option::Option<std::string::String>,
    pub rotate_secret: std::option::Option<bool>,
    pub filter_groups: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>,
}
impl std::fmt::Debug for UpdateWebhookInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("UpdateWebhookInput");
        formatter.field("project_name", &self.project_name);
        formatter.field("branch_filter", &self.branch_filter);
        formatter.field("rotate_secret", &self.rotate_secret);
        formatter.field("filter_groups", &self.filter_groups);
        formatter.finish()
    }
}
/// See [`UpdateWebhookInput`](crate::input::UpdateWebhookInput)
pub mod update_webhook_input {
    /// A builder for [`UpdateWebhookInput`](crate::input::UpdateWebhookInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) project_name: std::option::Option<std::string::String>,
        pub(crate) branch_filter: std::option::Option<std::string::String>,
        pub(crate) rotate_secret: std::option::Option<bool>,
        pub(crate) filter_groups: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>,
    }
    impl Builder {
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        pub fn branch_filter(mut self, input: impl Into<std::string::String>) -> Self {
            self.branch_filter = Some(input.into());
            self
        }
        pub fn set_branch_filter(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.branch_filter = input;
            self
        }
        pub fn rotate_secret(mut self, input: bool) -> Self {
            self.rotate_secret = Some(input);
            self
        }
        pub fn set_rotate_secret(mut self, input: std::option::Option<bool>) -> Self {
            self.rotate_secret = input;
            self
        }
        /// Appends an item to `filter_groups`.
        pub fn filter_groups(mut self, input: impl Into<std::vec::Vec<crate::model::WebhookFilter>>) -> Self {
            let mut v = self.filter_groups.unwrap_or_default();
            v.push(input.into());
            self.filter_groups = Some(v);
            self
        }
        pub fn set_filter_groups(mut self, input: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>) -> Self {
            self.filter_groups = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateWebhookInput`](crate::input::UpdateWebhookInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateWebhookInput, smithy_http::operation::BuildError> {
            if self.project_name.is_none() {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "project_name",
                    details: "project_name was not specified but it is required when building UpdateWebhookInput",
                });
            }
            Ok(crate::input::UpdateWebhookInput {
                project_name: self.project_name,
                branch_filter: self.branch_filter,
                rotate_secret: self.rotate_secret,
                filter_groups: self.filter_groups,
            })
        }
    }
}
impl UpdateWebhookInput {
    /// Creates a new builder-style object to manufacture [`UpdateWebhookInput`](crate::input::UpdateWebhookInput)
    pub fn builder() -> crate::input::update_webhook_input::Builder {
        crate::input::update_webhook_input::Builder::default()
    }
}
impl UpdateWebhookInput {
    /// Consumes the builder and constructs an Operation<[`UpdateWebhook`](crate::operation::UpdateWebhook)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        Operation<crate::operation::UpdateWebhook, aws_http::AwsErrorRetryPolicy>,
        BuildError,
    > {
        let body = crate::operation_ser::serialize_operation_update_webhook(self);
        assemble_operation(config, "UpdateWebhook", crate::operation::UpdateWebhook::new(), body)
    }
}
