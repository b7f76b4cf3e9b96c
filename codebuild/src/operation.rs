/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Deletes one or more builds.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchDeleteBuilds {
    _private: (),
}
impl BatchDeleteBuilds {
    /// Creates a new builder-style object to manufacture [`BatchDeleteBuildsInput`](crate::input::BatchDeleteBuildsInput)
    pub fn builder() -> crate::input::batch_delete_builds_input::Builder {
        crate::input::batch_delete_builds_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchDeleteBuilds {
    type Output = std::result::Result<
        crate::output::BatchDeleteBuildsOutput,
        crate::error::BatchDeleteBuildsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_delete_builds_error(response)
        } else {
            crate::operation_deser::parse_batch_delete_builds_response(response)
        }
    }
}

/// Gets information about one or more builds.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchGetBuilds {
    _private: (),
}
impl BatchGetBuilds {
    /// Creates a new builder-style object to manufacture [`BatchGetBuildsInput`](crate::input::BatchGetBuildsInput)
    pub fn builder() -> crate::input::batch_get_builds_input::Builder {
        crate::input::batch_get_builds_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchGetBuilds {
    type Output = std::result::Result<
        crate::output::BatchGetBuildsOutput,
        crate::error::BatchGetBuildsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_get_builds_error(response)
        } else {
            crate::operation_deser::parse_batch_get_builds_response(response)
        }
    }
}

/// Gets information about one or more build projects.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchGetProjects {
    _private: (),
}
impl BatchGetProjects {
    /// Creates a new builder-style object to manufacture [`BatchGetProjectsInput`](crate::input::BatchGetProjectsInput)
    pub fn builder() -> crate::input::batch_get_projects_input::Builder {
        crate::input::batch_get_projects_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchGetProjects {
    type Output = std::result::Result<
        crate::output::BatchGetProjectsOutput,
        crate::error::BatchGetProjectsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_get_projects_error(response)
        } else {
            crate::operation_deser::parse_batch_get_projects_response(response)
        }
    }
}

/// Returns an array of report groups.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchGetReportGroups {
    _private: (),
}
impl BatchGetReportGroups {
    /// Creates a new builder-style object to manufacture [`BatchGetReportGroupsInput`](crate::input::BatchGetReportGroupsInput)
    pub fn builder() -> crate::input::batch_get_report_groups_input::Builder {
        crate::input::batch_get_report_groups_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchGetReportGroups {
    type Output = std::result::Result<
        crate::output::BatchGetReportGroupsOutput,
        crate::error::BatchGetReportGroupsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_get_report_groups_error(response)
        } else {
            crate::operation_deser::parse_batch_get_report_groups_response(response)
        }
    }
}

/// Returns an array of reports.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchGetReports {
    _private: (),
}
impl BatchGetReports {
    /// Creates a new builder-style object to manufacture [`BatchGetReportsInput`](crate::input::BatchGetReportsInput)
    pub fn builder() -> crate::input::batch_get_reports_input::Builder {
        crate::input::batch_get_reports_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchGetReports {
    type Output = std::result::Result<
        crate::output::BatchGetReportsOutput,
        crate::error::BatchGetReportsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_get_reports_error(response)
        } else {
            crate::operation_deser::parse_batch_get_reports_response(response)
        }
    }
}

/// Creates a build project.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateProject {
    _private: (),
}
impl CreateProject {
    /// Creates a new builder-style object to manufacture [`CreateProjectInput`](crate::input::CreateProjectInput)
    pub fn builder() -> crate::input::create_project_input::Builder {
        crate::input::create_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateProject {
    type Output = std::result::Result<
        crate::output::CreateProjectOutput,
        crate::error::CreateProjectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_project_error(response)
        } else {
            crate::operation_deser::parse_create_project_response(response)
        }
    }
}

/// Creates a report group. A report group contains a collection of reports.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateReportGroup {
    _private: (),
}
impl CreateReportGroup {
    /// Creates a new builder-style object to manufacture [`CreateReportGroupInput`](crate::input::CreateReportGroupInput)
    pub fn builder() -> crate::input::create_report_group_input::Builder {
        crate::input::create_report_group_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateReportGroup {
    type Output = std::result::Result<
        crate::output::CreateReportGroupOutput,
        crate::error::CreateReportGroupError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_report_group_error(response)
        } else {
            crate::operation_deser::parse_create_report_group_response(response)
        }
    }
}

/// For an existing build project whose source code is stored in GitHub or Bitbucket, enables
/// CodeBuild to start rebuilding the source code every time a code change is pushed to the repository.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateWebhook {
    _private: (),
}
impl CreateWebhook {
    /// Creates a new builder-style object to manufacture [`CreateWebhookInput`](crate::input::CreateWebhookInput)
    pub fn builder() -> crate::input::create_webhook_input::Builder {
        crate::input::create_webhook_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateWebhook {
    type Output = std::result::Result<
        crate::output::CreateWebhookOutput,
        crate::error::CreateWebhookError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_webhook_error(response)
        } else {
            crate::operation_deser::parse_create_webhook_response(response)
        }
    }
}

/// Deletes a build project. Builds of the project are not deleted.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteProject {
    _private: (),
}
impl DeleteProject {
    /// Creates a new builder-style object to manufacture [`DeleteProjectInput`](crate::input::DeleteProjectInput)
    pub fn builder() -> crate::input::delete_project_input::Builder {
        crate::input::delete_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteProject {
    type Output = std::result::Result<
        crate::output::DeleteProjectOutput,
        crate::error::DeleteProjectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_project_error(response)
        } else {
            crate::operation_deser::parse_delete_project_response(response)
        }
    }
}

/// Deletes a report.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteReport {
    _private: (),
}
impl DeleteReport {
    /// Creates a new builder-style object to manufacture [`DeleteReportInput`](crate::input::DeleteReportInput)
    pub fn builder() -> crate::input::delete_report_input::Builder {
        crate::input::delete_report_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteReport {
    type Output = std::result::Result<
        crate::output::DeleteReportOutput,
        crate::error::DeleteReportError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_report_error(response)
        } else {
            crate::operation_deser::parse_delete_report_response(response)
        }
    }
}

/// Deletes a report group. It must not contain any reports.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteReportGroup {
    _private: (),
}
impl DeleteReportGroup {
    /// Creates a new builder-style object to manufacture [`DeleteReportGroupInput`](crate::input::DeleteReportGroupInput)
    pub fn builder() -> crate::input::delete_report_group_input::Builder {
        crate::input::delete_report_group_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteReportGroup {
    type Output = std::result::Result<
        crate::output::DeleteReportGroupOutput,
        crate::error::DeleteReportGroupError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_report_group_error(response)
        } else {
            crate::operation_deser::parse_delete_report_group_response(response)
        }
    }
}

/// Deletes a resource policy identified by its resource ARN.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteResourcePolicy {
    _private: (),
}
impl DeleteResourcePolicy {
    /// Creates a new builder-style object to manufacture [`DeleteResourcePolicyInput`](crate::input::DeleteResourcePolicyInput)
    pub fn builder() -> crate::input::delete_resource_policy_input::Builder {
        crate::input::delete_resource_policy_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteResourcePolicy {
    type Output = std::result::Result<
        crate::output::DeleteResourcePolicyOutput,
        crate::error::DeleteResourcePolicyError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_resource_policy_error(response)
        } else {
            crate::operation_deser::parse_delete_resource_policy_response(response)
        }
    }
}

/// Deletes a set of GitHub, GitHub Enterprise, or Bitbucket source credentials.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteSourceCredentials {
    _private: (),
}
impl DeleteSourceCredentials {
    /// Creates a new builder-style object to manufacture [`DeleteSourceCredentialsInput`](crate::input::DeleteSourceCredentialsInput)
    pub fn builder() -> crate::input::delete_source_credentials_input::Builder {
        crate::input::delete_source_credentials_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteSourceCredentials {
    type Output = std::result::Result<
        crate::output::DeleteSourceCredentialsOutput,
        crate::error::DeleteSourceCredentialsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_source_credentials_error(response)
        } else {
            crate::operation_deser::parse_delete_source_credentials_response(response)
        }
    }
}

/// For an existing build project, stops CodeBuild from rebuilding the source code on every push.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteWebhook {
    _private: (),
}
impl DeleteWebhook {
    /// Creates a new builder-style object to manufacture [`DeleteWebhookInput`](crate::input::DeleteWebhookInput)
    pub fn builder() -> crate::input::delete_webhook_input::Builder {
        crate::input::delete_webhook_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteWebhook {
    type Output = std::result::Result<
        crate::output::DeleteWebhookOutput,
        crate::error::DeleteWebhookError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_webhook_error(response)
        } else {
            crate::operation_deser::parse_delete_webhook_response(response)
        }
    }
}

/// Returns a list of details about test cases for a report.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeTestCases {
    _private: (),
}
impl DescribeTestCases {
    /// Creates a new builder-style object to manufacture [`DescribeTestCasesInput`](crate::input::DescribeTestCasesInput)
    pub fn builder() -> crate::input::describe_test_cases_input::Builder {
        crate::input::describe_test_cases_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeTestCases {
    type Output = std::result::Result<
        crate::output::DescribeTestCasesOutput,
        crate::error::DescribeTestCasesError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_test_cases_error(response)
        } else {
            crate::operation_deser::parse_describe_test_cases_response(response)
        }
    }
}

/// Gets a resource policy that is identified by its resource ARN.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetResourcePolicy {
    _private: (),
}
impl GetResourcePolicy {
    /// Creates a new builder-style object to manufacture [`GetResourcePolicyInput`](crate::input::GetResourcePolicyInput)
    pub fn builder() -> crate::input::get_resource_policy_input::Builder {
        crate::input::get_resource_policy_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetResourcePolicy {
    type Output = std::result::Result<
        crate::output::GetResourcePolicyOutput,
        crate::error::GetResourcePolicyError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_resource_policy_error(response)
        } else {
            crate::operation_deser::parse_get_resource_policy_response(response)
        }
    }
}

/// Imports the source repository credentials for a CodeBuild project that has its source code
/// stored in a GitHub, GitHub Enterprise, or Bitbucket repository.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ImportSourceCredentials {
    _private: (),
}
impl ImportSourceCredentials {
    /// Creates a new builder-style object to manufacture [`ImportSourceCredentialsInput`](crate::input::ImportSourceCredentialsInput)
    pub fn builder() -> crate::input::import_source_credentials_input::Builder {
        crate::input::import_source_credentials_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ImportSourceCredentials {
    type Output = std::result::Result<
        crate::output::ImportSourceCredentialsOutput,
        crate::error::ImportSourceCredentialsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_import_source_credentials_error(response)
        } else {
            crate::operation_deser::parse_import_source_credentials_response(response)
        }
    }
}

/// Resets the cache for a project.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct InvalidateProjectCache {
    _private: (),
}
impl InvalidateProjectCache {
    /// Creates a new builder-style object to manufacture [`InvalidateProjectCacheInput`](crate::input::InvalidateProjectCacheInput)
    pub fn builder() -> crate::input::invalidate_project_cache_input::Builder {
        crate::input::invalidate_project_cache_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for InvalidateProjectCache {
    type Output = std::result::Result<
        crate::output::InvalidateProjectCacheOutput,
        crate::error::InvalidateProjectCacheError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_invalidate_project_cache_error(response)
        } else {
            crate::operation_deser::parse_invalidate_project_cache_response(response)
        }
    }
}

/// Gets a list of build IDs, with each build ID representing a single build.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListBuilds {
    _private: (),
}
impl ListBuilds {
    /// Creates a new builder-style object to manufacture [`ListBuildsInput`](crate::input::ListBuildsInput)
    pub fn builder() -> crate::input::list_builds_input::Builder {
        crate::input::list_builds_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListBuilds {
    type Output = std::result::Result<
        crate::output::ListBuildsOutput,
        crate::error::ListBuildsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_builds_error(response)
        } else {
            crate::operation_deser::parse_list_builds_response(response)
        }
    }
}

/// Gets a list of build IDs for the specified build project.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListBuildsForProject {
    _private: (),
}
impl ListBuildsForProject {
    /// Creates a new builder-style object to manufacture [`ListBuildsForProjectInput`](crate::input::ListBuildsForProjectInput)
    pub fn builder() -> crate::input::list_builds_for_project_input::Builder {
        crate::input::list_builds_for_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListBuildsForProject {
    type Output = std::result::Result<
        crate::output::ListBuildsForProjectOutput,
        crate::error::ListBuildsForProjectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_builds_for_project_error(response)
        } else {
            crate::operation_deser::parse_list_builds_for_project_response(response)
        }
    }
}

/// Gets information about Docker images that are managed by CodeBuild.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListCuratedEnvironmentImages {
    _private: (),
}
impl ListCuratedEnvironmentImages {
    /// Creates a new builder-style object to manufacture [`ListCuratedEnvironmentImagesInput`](crate::input::ListCuratedEnvironmentImagesInput)
    pub fn builder() -> crate::input::list_curated_environment_images_input::Builder {
        crate::input::list_curated_environment_images_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListCuratedEnvironmentImages {
    type Output = std::result::Result<
        crate::output::ListCuratedEnvironmentImagesOutput,
        crate::error::ListCuratedEnvironmentImagesError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_curated_environment_images_error(response)
        } else {
            crate::operation_deser::parse_list_curated_environment_images_response(response)
        }
    }
}

/// Gets a list of build project names, with each build project name representing a single build project.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListProjects {
    _private: (),
}
impl ListProjects {
    /// Creates a new builder-style object to manufacture [`ListProjectsInput`](crate::input::ListProjectsInput)
    pub fn builder() -> crate::input::list_projects_input::Builder {
        crate::input::list_projects_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListProjects {
    type Output = std::result::Result<
        crate::output::ListProjectsOutput,
        crate::error::ListProjectsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_projects_error(response)
        } else {
            crate::operation_deser::parse_list_projects_response(response)
        }
    }
}

/// Gets a list of ARNs for the report groups in the current AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListReportGroups {
    _private: (),
}
impl ListReportGroups {
    /// Creates a new builder-style object to manufacture [`ListReportGroupsInput`](crate::input::ListReportGroupsInput)
    pub fn builder() -> crate::input::list_report_groups_input::Builder {
        crate::input::list_report_groups_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListReportGroups {
    type Output = std::result::Result<
        crate::output::ListReportGroupsOutput,
        crate::error::ListReportGroupsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_report_groups_error(response)
        } else {
            crate::operation_deser::parse_list_report_groups_response(response)
        }
    }
}

/// Returns a list of ARNs for the reports in the current AWS account.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListReports {
    _private: (),
}
impl ListReports {
    /// Creates a new builder-style object to manufacture [`ListReportsInput`](crate::input::ListReportsInput)
    pub fn builder() -> crate::input::list_reports_input::Builder {
        crate::input::list_reports_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListReports {
    type Output = std::result::Result<
        crate::output::ListReportsOutput,
        crate::error::ListReportsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_reports_error(response)
        } else {
            crate::operation_deser::parse_list_reports_response(response)
        }
    }
}

/// Returns a list of ARNs for the reports that belong to a report group.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListReportsForReportGroup {
    _private: (),
}
impl ListReportsForReportGroup {
    /// Creates a new builder-style object to manufacture [`ListReportsForReportGroupInput`](crate::input::ListReportsForReportGroupInput)
    pub fn builder() -> crate::input::list_reports_for_report_group_input::Builder {
        crate::input::list_reports_for_report_group_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListReportsForReportGroup {
    type Output = std::result::Result<
        crate::output::ListReportsForReportGroupOutput,
        crate::error::ListReportsForReportGroupError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_reports_for_report_group_error(response)
        } else {
            crate::operation_deser::parse_list_reports_for_report_group_response(response)
        }
    }
}

/// Gets a list of projects that are shared with other AWS accounts or users.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListSharedProjects {
    _private: (),
}
impl ListSharedProjects {
    /// Creates a new builder-style object to manufacture [`ListSharedProjectsInput`](crate::input::ListSharedProjectsInput)
    pub fn builder() -> crate::input::list_shared_projects_input::Builder {
        crate::input::list_shared_projects_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListSharedProjects {
    type Output = std::result::Result<
        crate::output::ListSharedProjectsOutput,
        crate::error::ListSharedProjectsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_shared_projects_error(response)
        } else {
            crate::operation_deser::parse_list_shared_projects_response(response)
        }
    }
}

/// Gets a list of report groups that are shared with other AWS accounts or users.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListSharedReportGroups {
    _private: (),
}
impl ListSharedReportGroups {
    /// Creates a new builder-style object to manufacture [`ListSharedReportGroupsInput`](crate::input::ListSharedReportGroupsInput)
    pub fn builder() -> crate::input::list_shared_report_groups_input::Builder {
        crate::input::list_shared_report_groups_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListSharedReportGroups {
    type Output = std::result::Result<
        crate::output::ListSharedReportGroupsOutput,
        crate::error::ListSharedReportGroupsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_shared_report_groups_error(response)
        } else {
            crate::operation_deser::parse_list_shared_report_groups_response(response)
        }
    }
}

/// Returns a list of source credentials.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListSourceCredentials {
    _private: (),
}
impl ListSourceCredentials {
    /// Creates a new builder-style object to manufacture [`ListSourceCredentialsInput`](crate::input::ListSourceCredentialsInput)
    pub fn builder() -> crate::input::list_source_credentials_input::Builder {
        crate::input::list_source_credentials_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListSourceCredentials {
    type Output = std::result::Result<
        crate::output::ListSourceCredentialsOutput,
        crate::error::ListSourceCredentialsError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_source_credentials_error(response)
        } else {
            crate::operation_deser::parse_list_source_credentials_response(response)
        }
    }
}

/// Stores a resource policy for the ARN of a project or report group object.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct PutResourcePolicy {
    _private: (),
}
impl PutResourcePolicy {
    /// Creates a new builder-style object to manufacture [`PutResourcePolicyInput`](crate::input::PutResourcePolicyInput)
    pub fn builder() -> crate::input::put_resource_policy_input::Builder {
        crate::input::put_resource_policy_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for PutResourcePolicy {
    type Output = std::result::Result<
        crate::output::PutResourcePolicyOutput,
        crate::error::PutResourcePolicyError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_put_resource_policy_error(response)
        } else {
            crate::operation_deser::parse_put_resource_policy_response(response)
        }
    }
}

/// Starts running a build.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StartBuild {
    _private: (),
}
impl StartBuild {
    /// Creates a new builder-style object to manufacture [`StartBuildInput`](crate::input::StartBuildInput)
    pub fn builder() -> crate::input::start_build_input::Builder {
        crate::input::start_build_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StartBuild {
    type Output = std::result::Result<
        crate::output::StartBuildOutput,
        crate::error::StartBuildError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_start_build_error(response)
        } else {
            crate::operation_deser::parse_start_build_response(response)
        }
    }
}

/// Attempts to stop running a build.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct StopBuild {
    _private: (),
}
impl StopBuild {
    /// Creates a new builder-style object to manufacture [`StopBuildInput`](crate::input::StopBuildInput)
    pub fn builder() -> crate::input::stop_build_input::Builder {
        crate::input::stop_build_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for StopBuild {
    type Output = std::result::Result<
        crate::output::StopBuildOutput,
        crate::error::StopBuildError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_stop_build_error(response)
        } else {
            crate::operation_deser::parse_stop_build_response(response)
        }
    }
}

/// Changes the settings of a build project.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateProject {
    _private: (),
}
impl UpdateProject {
    /// Creates a new builder-style object to manufacture [`UpdateProjectInput`](crate::input::UpdateProjectInput)
    pub fn builder() -> crate::input::update_project_input::Builder {
        crate::input::update_project_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateProject {
    type Output = std::result::Result<
        crate::output::UpdateProjectOutput,
        crate::error::UpdateProjectError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_project_error(response)
        } else {
            crate::operation_deser::parse_update_project_response(response)
        }
    }
}

/// Updates a report group.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateReportGroup {
    _private: (),
}
impl UpdateReportGroup {
    /// Creates a new builder-style object to manufacture [`UpdateReportGroupInput`](crate::input::UpdateReportGroupInput)
    pub fn builder() -> crate::input::update_report_group_input::Builder {
        crate::input::update_report_group_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateReportGroup {
    type Output = std::result::Result<
        crate::output::UpdateReportGroupOutput,
        crate::error::UpdateReportGroupError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_report_group_error(response)
        } else {
            crate::operation_deser::parse_update_report_group_response(response)
        }
    }
}

/// Updates the webhook associated with a CodeBuild build project.
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateWebhook {
    _private: (),
}
impl UpdateWebhook {
    /// Creates a new builder-style object to manufacture [`UpdateWebhookInput`](crate::input::UpdateWebhookInput)
    pub fn builder() -> crate::input::update_webhook_input::Builder {
        crate::input::update_webhook_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateWebhook {
    type Output = std::result::Result<
        crate::output::UpdateWebhookOutput,
        crate::error::UpdateWebhookError,
    >;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_webhook_error(response)
        } else {
            crate::operation_deser::parse_update_webhook_response(response)
        }
    }
}
