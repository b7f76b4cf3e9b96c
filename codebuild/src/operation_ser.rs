/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_operation_batch_delete_builds(
    input: &crate::input::BatchDeleteBuildsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_batch_delete_builds_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_batch_get_builds(
    input: &crate::input::BatchGetBuildsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_batch_get_builds_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_batch_get_projects(
    input: &crate::input::BatchGetProjectsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_batch_get_projects_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_batch_get_report_groups(
    input: &crate::input::BatchGetReportGroupsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_batch_get_report_groups_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_batch_get_reports(
    input: &crate::input::BatchGetReportsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_batch_get_reports_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_project(
    input: &crate::input::CreateProjectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_project_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_report_group(
    input: &crate::input::CreateReportGroupInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_report_group_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_create_webhook(
    input: &crate::input::CreateWebhookInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_create_webhook_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_project(
    input: &crate::input::DeleteProjectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_project_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_report(
    input: &crate::input::DeleteReportInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_report_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_report_group(
    input: &crate::input::DeleteReportGroupInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_report_group_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_resource_policy(
    input: &crate::input::DeleteResourcePolicyInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_resource_policy_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_source_credentials(
    input: &crate::input::DeleteSourceCredentialsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_source_credentials_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_delete_webhook(
    input: &crate::input::DeleteWebhookInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_delete_webhook_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_describe_test_cases(
    input: &crate::input::DescribeTestCasesInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_describe_test_cases_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_get_resource_policy(
    input: &crate::input::GetResourcePolicyInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_get_resource_policy_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_import_source_credentials(
    input: &crate::input::ImportSourceCredentialsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_import_source_credentials_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_invalidate_project_cache(
    input: &crate::input::InvalidateProjectCacheInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_invalidate_project_cache_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_builds(
    input: &crate::input::ListBuildsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_builds_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_builds_for_project(
    input: &crate::input::ListBuildsForProjectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_builds_for_project_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_curated_environment_images(
    _input: &crate::input::ListCuratedEnvironmentImagesInput,
) -> smithy_http::body::SdkBody {
    smithy_http::body::SdkBody::from("{}")
}

pub fn serialize_operation_list_projects(
    input: &crate::input::ListProjectsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_projects_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_report_groups(
    input: &crate::input::ListReportGroupsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_report_groups_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_reports(
    input: &crate::input::ListReportsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_reports_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_reports_for_report_group(
    input: &crate::input::ListReportsForReportGroupInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_reports_for_report_group_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_shared_projects(
    input: &crate::input::ListSharedProjectsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_shared_projects_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_shared_report_groups(
    input: &crate::input::ListSharedReportGroupsInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_list_shared_report_groups_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_list_source_credentials(
    _input: &crate::input::ListSourceCredentialsInput,
) -> smithy_http::body::SdkBody {
    smithy_http::body::SdkBody::from("{}")
}

pub fn serialize_operation_put_resource_policy(
    input: &crate::input::PutResourcePolicyInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_put_resource_policy_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_start_build(
    input: &crate::input::StartBuildInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_start_build_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_stop_build(
    input: &crate::input::StopBuildInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_stop_build_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_update_project(
    input: &crate::input::UpdateProjectInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_project_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_update_report_group(
    input: &crate::input::UpdateReportGroupInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_report_group_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}

pub fn serialize_operation_update_webhook(
    input: &crate::input::UpdateWebhookInput,
) -> smithy_http::body::SdkBody {
    let mut out = String::new();
    let mut object = smithy_json::serialize::JsonObjectWriter::new(&mut out);
    crate::json_ser::serialize_structure_update_webhook_input(&mut object, input);
    object.finish();
    smithy_http::body::SdkBody::from(out)
}
