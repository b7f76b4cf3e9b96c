/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn serialize_structure_batch_delete_builds_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::BatchDeleteBuildsInput,
) {
    if let Some(var_1) = &input.ids {
        {
            let mut array_2 = object.key("ids").start_array();
            for item_3 in var_1 {
                array_2.value().string(item_3);
            }
            array_2.finish();
        }
    }
}

pub fn serialize_structure_batch_get_builds_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::BatchGetBuildsInput,
) {
    if let Some(var_1) = &input.ids {
        {
            let mut array_2 = object.key("ids").start_array();
            for item_3 in var_1 {
                array_2.value().string(item_3);
            }
            array_2.finish();
        }
    }
}

pub fn serialize_structure_batch_get_projects_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::BatchGetProjectsInput,
) {
    if let Some(var_1) = &input.names {
        {
            let mut array_2 = object.key("names").start_array();
            for item_3 in var_1 {
                array_2.value().string(item_3);
            }
            array_2.finish();
        }
    }
}

pub fn serialize_structure_batch_get_report_groups_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::BatchGetReportGroupsInput,
) {
    if let Some(var_1) = &input.report_group_arns {
        {
            let mut array_2 = object.key("reportGroupArns").start_array();
            for item_3 in var_1 {
                array_2.value().string(item_3);
            }
            array_2.finish();
        }
    }
}

pub fn serialize_structure_batch_get_reports_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::BatchGetReportsInput,
) {
    if let Some(var_1) = &input.report_arns {
        {
            let mut array_2 = object.key("reportArns").start_array();
            for item_3 in var_1 {
                array_2.value().string(item_3);
            }
            array_2.finish();
        }
    }
}

pub fn serialize_structure_create_project_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateProjectInput,
) {
    if let Some(var_1) = &input.name {
        object.key("name").string(var_1);
    }
    if let Some(var_2) = &input.description {
        object.key("description").string(var_2);
    }
    if let Some(var_3) = &input.source {
        {
            let mut object_4 = object.key("source").start_object();
            crate::json_ser::serialize_structure_project_source(&mut object_4, var_3);
            object_4.finish();
        }
    }
    if let Some(var_5) = &input.secondary_sources {
        {
            let mut array_6 = object.key("secondarySources").start_array();
            for item_7 in var_5 {
                {
                    let mut object_8 = array_6.value().start_object();
                    crate::json_ser::serialize_structure_project_source(&mut object_8, item_7);
                    object_8.finish();
                }
            }
            array_6.finish();
        }
    }
    if let Some(var_9) = &input.source_version {
        object.key("sourceVersion").string(var_9);
    }
    if let Some(var_10) = &input.secondary_source_versions {
        {
            let mut array_11 = object.key("secondarySourceVersions").start_array();
            for item_12 in var_10 {
                {
                    let mut object_13 = array_11.value().start_object();
                    crate::json_ser::serialize_structure_project_source_version(&mut object_13, item_12);
                    object_13.finish();
                }
            }
            array_11.finish();
        }
    }
    if let Some(var_14) = &input.artifacts {
        {
            let mut object_15 = object.key("artifacts").start_object();
            crate::json_ser::serialize_structure_project_artifacts(&mut object_15, var_14);
            object_15.finish();
        }
    }
    if let Some(var_16) = &input.secondary_artifacts {
        {
            let mut array_17 = object.key("secondaryArtifacts").start_array();
            for item_18 in var_16 {
                {
                    let mut object_19 = array_17.value().start_object();
                    crate::json_ser::serialize_structure_project_artifacts(&mut object_19, item_18);
                    object_19.finish();
                }
            }
            array_17.finish();
        }
    }
    if let Some(var_20) = &input.cache {
        {
            let mut object_21 = object.key("cache").start_object();
            crate::json_ser::serialize_structure_project_cache(&mut object_21, var_20);
            object_21.finish();
        }
    }
    if let Some(var_22) = &input.environment {
        {
            let mut object_23 = object.key("environment").start_object();
            crate::json_ser::serialize_structure_project_environment(&mut object_23, var_22);
            object_23.finish();
        }
    }
    if let Some(var_24) = &input.service_role {
        object.key("serviceRole").string(var_24);
    }
    if let Some(var_25) = &input.timeout_in_minutes {
        object.key("timeoutInMinutes").number(smithy_types::Number::from(*var_25));
    }
    if let Some(var_26) = &input.queued_timeout_in_minutes {
        object.key("queuedTimeoutInMinutes").number(smithy_types::Number::from(*var_26));
    }
    if let Some(var_27) = &input.encryption_key {
        object.key("encryptionKey").string(var_27);
    }
    if let Some(var_28) = &input.tags {
        {
            let mut array_29 = object.key("tags").start_array();
            for item_30 in var_28 {
                {
                    let mut object_31 = array_29.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_31, item_30);
                    object_31.finish();
                }
            }
            array_29.finish();
        }
    }
    if let Some(var_32) = &input.vpc_config {
        {
            let mut object_33 = object.key("vpcConfig").start_object();
            crate::json_ser::serialize_structure_vpc_config(&mut object_33, var_32);
            object_33.finish();
        }
    }
    if let Some(var_34) = &input.badge_enabled {
        object.key("badgeEnabled").boolean(*var_34);
    }
    if let Some(var_35) = &input.logs_config {
        {
            let mut object_36 = object.key("logsConfig").start_object();
            crate::json_ser::serialize_structure_logs_config(&mut object_36, var_35);
            object_36.finish();
        }
    }
    if let Some(var_37) = &input.file_system_locations {
        {
            let mut array_38 = object.key("fileSystemLocations").start_array();
            for item_39 in var_37 {
                {
                    let mut object_40 = array_38.value().start_object();
                    crate::json_ser::serialize_structure_project_file_system_location(&mut object_40, item_39);
                    object_40.finish();
                }
            }
            array_38.finish();
        }
    }
}

pub fn serialize_structure_create_report_group_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateReportGroupInput,
) {
    if let Some(var_1) = &input.name {
        object.key("name").string(var_1);
    }
    if let Some(var_2) = &input.r#type {
        object.key("type").string(var_2.as_str());
    }
    if let Some(var_3) = &input.export_config {
        {
            let mut object_4 = object.key("exportConfig").start_object();
            crate::json_ser::serialize_structure_report_export_config(&mut object_4, var_3);
            object_4.finish();
        }
    }
    if let Some(var_5) = &input.tags {
        {
            let mut array_6 = object.key("tags").start_array();
            for item_7 in var_5 {
                {
                    let mut object_8 = array_6.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_8, item_7);
                    object_8.finish();
                }
            }
            array_6.finish();
        }
    }
}

pub fn serialize_structure_create_webhook_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::CreateWebhookInput,
) {
    if let Some(var_1) = &input.project_name {
        object.key("projectName").string(var_1);
    }
    if let Some(var_2) = &input.branch_filter {
        object.key("branchFilter").string(var_2);
    }
    if let Some(var_3) = &input.filter_groups {
        {
            let mut array_4 = object.key("filterGroups").start_array();
            for item_5 in var_3 {
                {
                    let mut array_6 = array_4.value().start_array();
                    for item_7 in item_5 {
                        {
                            let mut object_8 = array_6.value().start_object();
                            crate::json_ser::serialize_structure_webhook_filter(&mut object_8, item_7);
                            object_8.finish();
                        }
                    }
                    array_6.finish();
                }
            }
            array_4.finish();
        }
    }
}

pub fn serialize_structure_delete_project_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteProjectInput,
) {
    if let Some(var_1) = &input.name {
        object.key("name").string(var_1);
    }
}

pub fn serialize_structure_delete_report_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteReportInput,
) {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
}

pub fn serialize_structure_delete_report_group_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteReportGroupInput,
) {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
}

pub fn serialize_structure_delete_resource_policy_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteResourcePolicyInput,
) {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
}

pub fn serialize_structure_delete_source_credentials_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteSourceCredentialsInput,
) {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
}

pub fn serialize_structure_delete_webhook_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DeleteWebhookInput,
) {
    if let Some(var_1) = &input.project_name {
        object.key("projectName").string(var_1);
    }
}

pub fn serialize_structure_describe_test_cases_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::DescribeTestCasesInput,
) {
    if let Some(var_1) = &input.report_arn {
        object.key("reportArn").string(var_1);
    }
    if let Some(var_2) = &input.next_token {
        object.key("nextToken").string(var_2);
    }
    if let Some(var_3) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.filter {
        {
            let mut object_5 = object.key("filter").start_object();
            crate::json_ser::serialize_structure_test_case_filter(&mut object_5, var_4);
            object_5.finish();
        }
    }
}

pub fn serialize_structure_get_resource_policy_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::GetResourcePolicyInput,
) {
    if let Some(var_1) = &input.resource_arn {
        object.key("resourceArn").string(var_1);
    }
}

pub fn serialize_structure_import_source_credentials_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ImportSourceCredentialsInput,
) {
    if let Some(var_1) = &input.username {
        object.key("username").string(var_1);
    }
    if let Some(var_2) = &input.token {
        object.key("token").string(var_2);
    }
    if let Some(var_3) = &input.server_type {
        object.key("serverType").string(var_3.as_str());
    }
    if let Some(var_4) = &input.auth_type {
        object.key("authType").string(var_4.as_str());
    }
    if let Some(var_5) = &input.should_overwrite {
        object.key("shouldOverwrite").boolean(*var_5);
    }
}

pub fn serialize_structure_invalidate_project_cache_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::InvalidateProjectCacheInput,
) {
    if let Some(var_1) = &input.project_name {
        object.key("projectName").string(var_1);
    }
}

pub fn serialize_structure_list_builds_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListBuildsInput,
) {
    if let Some(var_1) = &input.sort_order {
        object.key("sortOrder").string(var_1.as_str());
    }
    if let Some(var_2) = &input.next_token {
        object.key("nextToken").string(var_2);
    }
}

pub fn serialize_structure_list_builds_for_project_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListBuildsForProjectInput,
) {
    if let Some(var_1) = &input.project_name {
        object.key("projectName").string(var_1);
    }
    if let Some(var_2) = &input.sort_order {
        object.key("sortOrder").string(var_2.as_str());
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
}

pub fn serialize_structure_list_projects_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListProjectsInput,
) {
    if let Some(var_1) = &input.sort_by {
        object.key("sortBy").string(var_1.as_str());
    }
    if let Some(var_2) = &input.sort_order {
        object.key("sortOrder").string(var_2.as_str());
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
}

pub fn serialize_structure_list_report_groups_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListReportGroupsInput,
) {
    if let Some(var_1) = &input.sort_order {
        object.key("sortOrder").string(var_1.as_str());
    }
    if let Some(var_2) = &input.sort_by {
        object.key("sortBy").string(var_2.as_str());
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_4));
    }
}

pub fn serialize_structure_list_reports_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListReportsInput,
) {
    if let Some(var_1) = &input.sort_order {
        object.key("sortOrder").string(var_1.as_str());
    }
    if let Some(var_2) = &input.next_token {
        object.key("nextToken").string(var_2);
    }
    if let Some(var_3) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.filter {
        {
            let mut object_5 = object.key("filter").start_object();
            crate::json_ser::serialize_structure_report_filter(&mut object_5, var_4);
            object_5.finish();
        }
    }
}

pub fn serialize_structure_list_reports_for_report_group_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListReportsForReportGroupInput,
) {
    if let Some(var_1) = &input.report_group_arn {
        object.key("reportGroupArn").string(var_1);
    }
    if let Some(var_2) = &input.next_token {
        object.key("nextToken").string(var_2);
    }
    if let Some(var_3) = &input.sort_order {
        object.key("sortOrder").string(var_3.as_str());
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_4));
    }
    if let Some(var_5) = &input.filter {
        {
            let mut object_6 = object.key("filter").start_object();
            crate::json_ser::serialize_structure_report_filter(&mut object_6, var_5);
            object_6.finish();
        }
    }
}

pub fn serialize_structure_list_shared_projects_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListSharedProjectsInput,
) {
    if let Some(var_1) = &input.sort_by {
        object.key("sortBy").string(var_1.as_str());
    }
    if let Some(var_2) = &input.sort_order {
        object.key("sortOrder").string(var_2.as_str());
    }
    if let Some(var_3) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.next_token {
        object.key("nextToken").string(var_4);
    }
}

pub fn serialize_structure_list_shared_report_groups_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::ListSharedReportGroupsInput,
) {
    if let Some(var_1) = &input.sort_order {
        object.key("sortOrder").string(var_1.as_str());
    }
    if let Some(var_2) = &input.sort_by {
        object.key("sortBy").string(var_2.as_str());
    }
    if let Some(var_3) = &input.next_token {
        object.key("nextToken").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        object.key("maxResults").number(smithy_types::Number::from(*var_4));
    }
}

pub fn serialize_structure_put_resource_policy_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::PutResourcePolicyInput,
) {
    if let Some(var_1) = &input.policy {
        object.key("policy").string(var_1);
    }
    if let Some(var_2) = &input.resource_arn {
        object.key("resourceArn").string(var_2);
    }
}

pub fn serialize_structure_start_build_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::StartBuildInput,
) {
    if let Some(var_1) = &input.project_name {
        object.key("projectName").string(var_1);
    }
    if let Some(var_2) = &input.secondary_sources_override {
        {
            let mut array_3 = object.key("secondarySourcesOverride").start_array();
            for item_4 in var_2 {
                {
                    let mut object_5 = array_3.value().start_object();
                    crate::json_ser::serialize_structure_project_source(&mut object_5, item_4);
                    object_5.finish();
                }
            }
            array_3.finish();
        }
    }
    if let Some(var_6) = &input.secondary_sources_version_override {
        {
            let mut array_7 = object.key("secondarySourcesVersionOverride").start_array();
            for item_8 in var_6 {
                {
                    let mut object_9 = array_7.value().start_object();
                    crate::json_ser::serialize_structure_project_source_version(&mut object_9, item_8);
                    object_9.finish();
                }
            }
            array_7.finish();
        }
    }
    if let Some(var_10) = &input.source_version {
        object.key("sourceVersion").string(var_10);
    }
    if let Some(var_11) = &input.artifacts_override {
        {
            let mut object_12 = object.key("artifactsOverride").start_object();
            crate::json_ser::serialize_structure_project_artifacts(&mut object_12, var_11);
            object_12.finish();
        }
    }
    if let Some(var_13) = &input.secondary_artifacts_override {
        {
            let mut array_14 = object.key("secondaryArtifactsOverride").start_array();
            for item_15 in var_13 {
                {
                    let mut object_16 = array_14.value().start_object();
                    crate::json_ser::serialize_structure_project_artifacts(&mut object_16, item_15);
                    object_16.finish();
                }
            }
            array_14.finish();
        }
    }
    if let Some(var_17) = &input.environment_variables_override {
        {
            let mut array_18 = object.key("environmentVariablesOverride").start_array();
            for item_19 in var_17 {
                {
                    let mut object_20 = array_18.value().start_object();
                    crate::json_ser::serialize_structure_environment_variable(&mut object_20, item_19);
                    object_20.finish();
                }
            }
            array_18.finish();
        }
    }
    if let Some(var_21) = &input.source_type_override {
        object.key("sourceTypeOverride").string(var_21.as_str());
    }
    if let Some(var_22) = &input.source_location_override {
        object.key("sourceLocationOverride").string(var_22);
    }
    if let Some(var_23) = &input.source_auth_override {
        {
            let mut object_24 = object.key("sourceAuthOverride").start_object();
            crate::json_ser::serialize_structure_source_auth(&mut object_24, var_23);
            object_24.finish();
        }
    }
    if let Some(var_25) = &input.git_clone_depth_override {
        object.key("gitCloneDepthOverride").number(smithy_types::Number::from(*var_25));
    }
    if let Some(var_26) = &input.git_submodules_config_override {
        {
            let mut object_27 = object.key("gitSubmodulesConfigOverride").start_object();
            crate::json_ser::serialize_structure_git_submodules_config(&mut object_27, var_26);
            object_27.finish();
        }
    }
    if let Some(var_28) = &input.buildspec_override {
        object.key("buildspecOverride").string(var_28);
    }
    if let Some(var_29) = &input.insecure_ssl_override {
        object.key("insecureSslOverride").boolean(*var_29);
    }
    if let Some(var_30) = &input.report_build_status_override {
        object.key("reportBuildStatusOverride").boolean(*var_30);
    }
    if let Some(var_31) = &input.environment_type_override {
        object.key("environmentTypeOverride").string(var_31.as_str());
    }
    if let Some(var_32) = &input.image_override {
        object.key("imageOverride").string(var_32);
    }
    if let Some(var_33) = &input.compute_type_override {
        object.key("computeTypeOverride").string(var_33.as_str());
    }
    if let Some(var_34) = &input.certificate_override {
        object.key("certificateOverride").string(var_34);
    }
    if let Some(var_35) = &input.cache_override {
        {
            let mut object_36 = object.key("cacheOverride").start_object();
            crate::json_ser::serialize_structure_project_cache(&mut object_36, var_35);
            object_36.finish();
        }
    }
    if let Some(var_37) = &input.service_role_override {
        object.key("serviceRoleOverride").string(var_37);
    }
    if let Some(var_38) = &input.privileged_mode_override {
        object.key("privilegedModeOverride").boolean(*var_38);
    }
    if let Some(var_39) = &input.timeout_in_minutes_override {
        object.key("timeoutInMinutesOverride").number(smithy_types::Number::from(*var_39));
    }
    if let Some(var_40) = &input.queued_timeout_in_minutes_override {
        object.key("queuedTimeoutInMinutesOverride").number(smithy_types::Number::from(*var_40));
    }
    if let Some(var_41) = &input.encryption_key_override {
        object.key("encryptionKeyOverride").string(var_41);
    }
    if let Some(var_42) = &input.idempotency_token {
        object.key("idempotencyToken").string(var_42);
    }
    if let Some(var_43) = &input.logs_config_override {
        {
            let mut object_44 = object.key("logsConfigOverride").start_object();
            crate::json_ser::serialize_structure_logs_config(&mut object_44, var_43);
            object_44.finish();
        }
    }
    if let Some(var_45) = &input.registry_credential_override {
        {
            let mut object_46 = object.key("registryCredentialOverride").start_object();
            crate::json_ser::serialize_structure_registry_credential(&mut object_46, var_45);
            object_46.finish();
        }
    }
    if let Some(var_47) = &input.image_pull_credentials_type_override {
        object.key("imagePullCredentialsTypeOverride").string(var_47.as_str());
    }
}

pub fn serialize_structure_stop_build_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::StopBuildInput,
) {
    if let Some(var_1) = &input.id {
        object.key("id").string(var_1);
    }
}

pub fn serialize_structure_update_project_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateProjectInput,
) {
    if let Some(var_1) = &input.name {
        object.key("name").string(var_1);
    }
    if let Some(var_2) = &input.description {
        object.key("description").string(var_2);
    }
    if let Some(var_3) = &input.source {
        {
            let mut object_4 = object.key("source").start_object();
            crate::json_ser::serialize_structure_project_source(&mut object_4, var_3);
            object_4.finish();
        }
    }
    if let Some(var_5) = &input.secondary_sources {
        {
            let mut array_6 = object.key("secondarySources").start_array();
            for item_7 in var_5 {
                {
                    let mut object_8 = array_6.value().start_object();
                    crate::json_ser::serialize_structure_project_source(&mut object_8, item_7);
                    object_8.finish();
                }
            }
            array_6.finish();
        }
    }
    if let Some(var_9) = &input.source_version {
        object.key("sourceVersion").string(var_9);
    }
    if let Some(var_10) = &input.secondary_source_versions {
        {
            let mut array_11 = object.key("secondarySourceVersions").start_array();
            for item_12 in var_10 {
                {
                    let mut object_13 = array_11.value().start_object();
                    crate::json_ser::serialize_structure_project_source_version(&mut object_13, item_12);
                    object_13.finish();
                }
            }
            array_11.finish();
        }
    }
    if let Some(var_14) = &input.artifacts {
        {
            let mut object_15 = object.key("artifacts").start_object();
            crate::json_ser::serialize_structure_project_artifacts(&mut object_15, var_14);
            object_15.finish();
        }
    }
    if let Some(var_16) = &input.secondary_artifacts {
        {
            let mut array_17 = object.key("secondaryArtifacts").start_array();
            for item_18 in var_16 {
                {
                    let mut object_19 = array_17.value().start_object();
                    crate::json_ser::serialize_structure_project_artifacts(&mut object_19, item_18);
                    object_19.finish();
                }
            }
            array_17.finish();
        }
    }
    if let Some(var_20) = &input.cache {
        {
            let mut object_21 = object.key("cache").start_object();
            crate::json_ser::serialize_structure_project_cache(&mut object_21, var_20);
            object_21.finish();
        }
    }
    if let Some(var_22) = &input.environment {
        {
            let mut object_23 = object.key("environment").start_object();
            crate::json_ser::serialize_structure_project_environment(&mut object_23, var_22);
            object_23.finish();
        }
    }
    if let Some(var_24) = &input.service_role {
        object.key("serviceRole").string(var_24);
    }
    if let Some(var_25) = &input.timeout_in_minutes {
        object.key("timeoutInMinutes").number(smithy_types::Number::from(*var_25));
    }
    if let Some(var_26) = &input.queued_timeout_in_minutes {
        object.key("queuedTimeoutInMinutes").number(smithy_types::Number::from(*var_26));
    }
    if let Some(var_27) = &input.encryption_key {
        object.key("encryptionKey").string(var_27);
    }
    if let Some(var_28) = &input.tags {
        {
            let mut array_29 = object.key("tags").start_array();
            for item_30 in var_28 {
                {
                    let mut object_31 = array_29.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_31, item_30);
                    object_31.finish();
                }
            }
            array_29.finish();
        }
    }
    if let Some(var_32) = &input.vpc_config {
        {
            let mut object_33 = object.key("vpcConfig").start_object();
            crate::json_ser::serialize_structure_vpc_config(&mut object_33, var_32);
            object_33.finish();
        }
    }
    if let Some(var_34) = &input.badge_enabled {
        object.key("badgeEnabled").boolean(*var_34);
    }
    if let Some(var_35) = &input.logs_config {
        {
            let mut object_36 = object.key("logsConfig").start_object();
            crate::json_ser::serialize_structure_logs_config(&mut object_36, var_35);
            object_36.finish();
        }
    }
    if let Some(var_37) = &input.file_system_locations {
        {
            let mut array_38 = object.key("fileSystemLocations").start_array();
            for item_39 in var_37 {
                {
                    let mut object_40 = array_38.value().start_object();
                    crate::json_ser::serialize_structure_project_file_system_location(&mut object_40, item_39);
                    object_40.finish();
                }
            }
            array_38.finish();
        }
    }
}

pub fn serialize_structure_update_report_group_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateReportGroupInput,
) {
    if let Some(var_1) = &input.arn {
        object.key("arn").string(var_1);
    }
    if let Some(var_2) = &input.export_config {
        {
            let mut object_3 = object.key("exportConfig").start_object();
            crate::json_ser::serialize_structure_report_export_config(&mut object_3, var_2);
            object_3.finish();
        }
    }
    if let Some(var_4) = &input.tags {
        {
            let mut array_5 = object.key("tags").start_array();
            for item_6 in var_4 {
                {
                    let mut object_7 = array_5.value().start_object();
                    crate::json_ser::serialize_structure_tag(&mut object_7, item_6);
                    object_7.finish();
                }
            }
            array_5.finish();
        }
    }
}

pub fn serialize_structure_update_webhook_input(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::input::UpdateWebhookInput,
) {
    if let Some(var_1) = &input.project_name {
        object.key("projectName").string(var_1);
    }
    if let Some(var_2) = &input.branch_filter {
        object.key("branchFilter").string(var_2);
    }
    if let Some(var_3) = &input.rotate_secret {
        object.key("rotateSecret").boolean(*var_3);
    }
    if let Some(var_4) = &input.filter_groups {
        {
            let mut array_5 = object.key("filterGroups").start_array();
            for item_6 in var_4 {
                {
                    let mut array_7 = array_5.value().start_array();
                    for item_8 in item_6 {
                        {
                            let mut object_9 = array_7.value().start_object();
                            crate::json_ser::serialize_structure_webhook_filter(&mut object_9, item_8);
                            object_9.finish();
                        }
                    }
                    array_7.finish();
                }
            }
            array_5.finish();
        }
    }
}

pub fn serialize_structure_git_submodules_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::GitSubmodulesConfig,
) {
    if let Some(var_1) = &input.fetch_submodules {
        object.key("fetchSubmodules").boolean(*var_1);
    }
}

pub fn serialize_structure_source_auth(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::SourceAuth,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.resource {
        object.key("resource").string(var_2);
    }
}

pub fn serialize_structure_project_source(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ProjectSource,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.location {
        object.key("location").string(var_2);
    }
    if let Some(var_3) = &input.git_clone_depth {
        object.key("gitCloneDepth").number(smithy_types::Number::from(*var_3));
    }
    if let Some(var_4) = &input.git_submodules_config {
        {
            let mut object_5 = object.key("gitSubmodulesConfig").start_object();
            crate::json_ser::serialize_structure_git_submodules_config(&mut object_5, var_4);
            object_5.finish();
        }
    }
    if let Some(var_6) = &input.buildspec {
        object.key("buildspec").string(var_6);
    }
    if let Some(var_7) = &input.auth {
        {
            let mut object_8 = object.key("auth").start_object();
            crate::json_ser::serialize_structure_source_auth(&mut object_8, var_7);
            object_8.finish();
        }
    }
    if let Some(var_9) = &input.report_build_status {
        object.key("reportBuildStatus").boolean(*var_9);
    }
    if let Some(var_10) = &input.insecure_ssl {
        object.key("insecureSsl").boolean(*var_10);
    }
    if let Some(var_11) = &input.source_identifier {
        object.key("sourceIdentifier").string(var_11);
    }
}

pub fn serialize_structure_project_source_version(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ProjectSourceVersion,
) {
    if let Some(var_1) = &input.source_identifier {
        object.key("sourceIdentifier").string(var_1);
    }
    if let Some(var_2) = &input.source_version {
        object.key("sourceVersion").string(var_2);
    }
}

pub fn serialize_structure_project_artifacts(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ProjectArtifacts,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.location {
        object.key("location").string(var_2);
    }
    if let Some(var_3) = &input.path {
        object.key("path").string(var_3);
    }
    if let Some(var_4) = &input.namespace_type {
        object.key("namespaceType").string(var_4.as_str());
    }
    if let Some(var_5) = &input.name {
        object.key("name").string(var_5);
    }
    if let Some(var_6) = &input.packaging {
        object.key("packaging").string(var_6.as_str());
    }
    if let Some(var_7) = &input.override_artifact_name {
        object.key("overrideArtifactName").boolean(*var_7);
    }
    if let Some(var_8) = &input.encryption_disabled {
        object.key("encryptionDisabled").boolean(*var_8);
    }
    if let Some(var_9) = &input.artifact_identifier {
        object.key("artifactIdentifier").string(var_9);
    }
}

pub fn serialize_structure_project_cache(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ProjectCache,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.location {
        object.key("location").string(var_2);
    }
    if let Some(var_3) = &input.modes {
        {
            let mut array_4 = object.key("modes").start_array();
            for item_5 in var_3 {
                array_4.value().string(item_5.as_str());
            }
            array_4.finish();
        }
    }
}

pub fn serialize_structure_environment_variable(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::EnvironmentVariable,
) {
    if let Some(var_1) = &input.name {
        object.key("name").string(var_1);
    }
    if let Some(var_2) = &input.value {
        object.key("value").string(var_2);
    }
    if let Some(var_3) = &input.r#type {
        object.key("type").string(var_3.as_str());
    }
}

pub fn serialize_structure_registry_credential(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::RegistryCredential,
) {
    if let Some(var_1) = &input.credential {
        object.key("credential").string(var_1);
    }
    if let Some(var_2) = &input.credential_provider {
        object.key("credentialProvider").string(var_2.as_str());
    }
}

pub fn serialize_structure_project_environment(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ProjectEnvironment,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.image {
        object.key("image").string(var_2);
    }
    if let Some(var_3) = &input.compute_type {
        object.key("computeType").string(var_3.as_str());
    }
    if let Some(var_4) = &input.environment_variables {
        {
            let mut array_5 = object.key("environmentVariables").start_array();
            for item_6 in var_4 {
                {
                    let mut object_7 = array_5.value().start_object();
                    crate::json_ser::serialize_structure_environment_variable(&mut object_7, item_6);
                    object_7.finish();
                }
            }
            array_5.finish();
        }
    }
    if let Some(var_8) = &input.privileged_mode {
        object.key("privilegedMode").boolean(*var_8);
    }
    if let Some(var_9) = &input.certificate {
        object.key("certificate").string(var_9);
    }
    if let Some(var_10) = &input.registry_credential {
        {
            let mut object_11 = object.key("registryCredential").start_object();
            crate::json_ser::serialize_structure_registry_credential(&mut object_11, var_10);
            object_11.finish();
        }
    }
    if let Some(var_12) = &input.image_pull_credentials_type {
        object.key("imagePullCredentialsType").string(var_12.as_str());
    }
}

pub fn serialize_structure_tag(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::Tag,
) {
    if let Some(var_1) = &input.key {
        object.key("key").string(var_1);
    }
    if let Some(var_2) = &input.value {
        object.key("value").string(var_2);
    }
}

pub fn serialize_structure_vpc_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::VpcConfig,
) {
    if let Some(var_1) = &input.vpc_id {
        object.key("vpcId").string(var_1);
    }
    if let Some(var_2) = &input.subnets {
        {
            let mut array_3 = object.key("subnets").start_array();
            for item_4 in var_2 {
                array_3.value().string(item_4);
            }
            array_3.finish();
        }
    }
    if let Some(var_5) = &input.security_group_ids {
        {
            let mut array_6 = object.key("securityGroupIds").start_array();
            for item_7 in var_5 {
                array_6.value().string(item_7);
            }
            array_6.finish();
        }
    }
}

pub fn serialize_structure_cloud_watch_logs_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::CloudWatchLogsConfig,
) {
    if let Some(var_1) = &input.status {
        object.key("status").string(var_1.as_str());
    }
    if let Some(var_2) = &input.group_name {
        object.key("groupName").string(var_2);
    }
    if let Some(var_3) = &input.stream_name {
        object.key("streamName").string(var_3);
    }
}

pub fn serialize_structure_s3_logs_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::S3LogsConfig,
) {
    if let Some(var_1) = &input.status {
        object.key("status").string(var_1.as_str());
    }
    if let Some(var_2) = &input.location {
        object.key("location").string(var_2);
    }
    if let Some(var_3) = &input.encryption_disabled {
        object.key("encryptionDisabled").boolean(*var_3);
    }
}

pub fn serialize_structure_logs_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::LogsConfig,
) {
    if let Some(var_1) = &input.cloud_watch_logs {
        {
            let mut object_2 = object.key("cloudWatchLogs").start_object();
            crate::json_ser::serialize_structure_cloud_watch_logs_config(&mut object_2, var_1);
            object_2.finish();
        }
    }
    if let Some(var_3) = &input.s3_logs {
        {
            let mut object_4 = object.key("s3Logs").start_object();
            crate::json_ser::serialize_structure_s3_logs_config(&mut object_4, var_3);
            object_4.finish();
        }
    }
}

pub fn serialize_structure_project_file_system_location(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ProjectFileSystemLocation,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.location {
        object.key("location").string(var_2);
    }
    if let Some(var_3) = &input.mount_point {
        object.key("mountPoint").string(var_3);
    }
    if let Some(var_4) = &input.identifier {
        object.key("identifier").string(var_4);
    }
    if let Some(var_5) = &input.mount_options {
        object.key("mountOptions").string(var_5);
    }
}

pub fn serialize_structure_webhook_filter(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::WebhookFilter,
) {
    if let Some(var_1) = &input.r#type {
        object.key("type").string(var_1.as_str());
    }
    if let Some(var_2) = &input.pattern {
        object.key("pattern").string(var_2);
    }
    if let Some(var_3) = &input.exclude_matched_pattern {
        object.key("excludeMatchedPattern").boolean(*var_3);
    }
}

pub fn serialize_structure_s3_report_export_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::S3ReportExportConfig,
) {
    if let Some(var_1) = &input.bucket {
        object.key("bucket").string(var_1);
    }
    if let Some(var_2) = &input.path {
        object.key("path").string(var_2);
    }
    if let Some(var_3) = &input.packaging {
        object.key("packaging").string(var_3.as_str());
    }
    if let Some(var_4) = &input.encryption_key {
        object.key("encryptionKey").string(var_4);
    }
    if let Some(var_5) = &input.encryption_disabled {
        object.key("encryptionDisabled").boolean(*var_5);
    }
}

pub fn serialize_structure_report_export_config(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ReportExportConfig,
) {
    if let Some(var_1) = &input.export_config_type {
        object.key("exportConfigType").string(var_1.as_str());
    }
    if let Some(var_2) = &input.s3_destination {
        {
            let mut object_3 = object.key("s3Destination").start_object();
            crate::json_ser::serialize_structure_s3_report_export_config(&mut object_3, var_2);
            object_3.finish();
        }
    }
}

pub fn serialize_structure_test_case_filter(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::TestCaseFilter,
) {
    if let Some(var_1) = &input.status {
        object.key("status").string(var_1);
    }
}

pub fn serialize_structure_report_filter(
    object: &mut smithy_json::serialize::JsonObjectWriter,
    input: &crate::model::ReportFilter,
) {
    if let Some(var_1) = &input.status {
        object.key("status").string(var_1.as_str());
    }
}
