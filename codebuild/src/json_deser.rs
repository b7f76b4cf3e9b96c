/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn deser_operation_batch_delete_builds(
    input: &[u8],
    mut builder: crate::output::batch_delete_builds_output::Builder,
) -> Result<crate::output::batch_delete_builds_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "buildsDeleted" => {
                        builder = builder.set_builds_deleted(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    "buildsNotDeleted" => {
                        builder = builder.set_builds_not_deleted(
                            crate::json_deser::deser_list_build_not_deleted(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_batch_get_builds(
    input: &[u8],
    mut builder: crate::output::batch_get_builds_output::Builder,
) -> Result<crate::output::batch_get_builds_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "builds" => {
                        builder = builder.set_builds(
                            crate::json_deser::deser_list_build(tokens)?
                        );
                    }
                    "buildsNotFound" => {
                        builder = builder.set_builds_not_found(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_batch_get_projects(
    input: &[u8],
    mut builder: crate::output::batch_get_projects_output::Builder,
) -> Result<crate::output::batch_get_projects_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "projects" => {
                        builder = builder.set_projects(
                            crate::json_deser::deser_list_project(tokens)?
                        );
                    }
                    "projectsNotFound" => {
                        builder = builder.set_projects_not_found(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_batch_get_report_groups(
    input: &[u8],
    mut builder: crate::output::batch_get_report_groups_output::Builder,
) -> Result<crate::output::batch_get_report_groups_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "reportGroups" => {
                        builder = builder.set_report_groups(
                            crate::json_deser::deser_list_report_group(tokens)?
                        );
                    }
                    "reportGroupsNotFound" => {
                        builder = builder.set_report_groups_not_found(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_batch_get_reports(
    input: &[u8],
    mut builder: crate::output::batch_get_reports_output::Builder,
) -> Result<crate::output::batch_get_reports_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "reports" => {
                        builder = builder.set_reports(
                            crate::json_deser::deser_list_report(tokens)?
                        );
                    }
                    "reportsNotFound" => {
                        builder = builder.set_reports_not_found(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_project(
    input: &[u8],
    mut builder: crate::output::create_project_output::Builder,
) -> Result<crate::output::create_project_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "project" => {
                        builder = builder.set_project(
                            crate::json_deser::deser_structure_project(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_report_group(
    input: &[u8],
    mut builder: crate::output::create_report_group_output::Builder,
) -> Result<crate::output::create_report_group_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "reportGroup" => {
                        builder = builder.set_report_group(
                            crate::json_deser::deser_structure_report_group(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_create_webhook(
    input: &[u8],
    mut builder: crate::output::create_webhook_output::Builder,
) -> Result<crate::output::create_webhook_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "webhook" => {
                        builder = builder.set_webhook(
                            crate::json_deser::deser_structure_webhook(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_delete_source_credentials(
    input: &[u8],
    mut builder: crate::output::delete_source_credentials_output::Builder,
) -> Result<crate::output::delete_source_credentials_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_describe_test_cases(
    input: &[u8],
    mut builder: crate::output::describe_test_cases_output::Builder,
) -> Result<crate::output::describe_test_cases_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "testCases" => {
                        builder = builder.set_test_cases(
                            crate::json_deser::deser_list_test_case(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_get_resource_policy(
    input: &[u8],
    mut builder: crate::output::get_resource_policy_output::Builder,
) -> Result<crate::output::get_resource_policy_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "policy" => {
                        builder = builder.set_policy(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_import_source_credentials(
    input: &[u8],
    mut builder: crate::output::import_source_credentials_output::Builder,
) -> Result<crate::output::import_source_credentials_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "arn" => {
                        builder = builder.set_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_builds(
    input: &[u8],
    mut builder: crate::output::list_builds_output::Builder,
) -> Result<crate::output::list_builds_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ids" => {
                        builder = builder.set_ids(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_builds_for_project(
    input: &[u8],
    mut builder: crate::output::list_builds_for_project_output::Builder,
) -> Result<crate::output::list_builds_for_project_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "ids" => {
                        builder = builder.set_ids(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_curated_environment_images(
    input: &[u8],
    mut builder: crate::output::list_curated_environment_images_output::Builder,
) -> Result<crate::output::list_curated_environment_images_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "platforms" => {
                        builder = builder.set_platforms(
                            crate::json_deser::deser_list_environment_platform(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_projects(
    input: &[u8],
    mut builder: crate::output::list_projects_output::Builder,
) -> Result<crate::output::list_projects_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "projects" => {
                        builder = builder.set_projects(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_report_groups(
    input: &[u8],
    mut builder: crate::output::list_report_groups_output::Builder,
) -> Result<crate::output::list_report_groups_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "reportGroups" => {
                        builder = builder.set_report_groups(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_reports(
    input: &[u8],
    mut builder: crate::output::list_reports_output::Builder,
) -> Result<crate::output::list_reports_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "reports" => {
                        builder = builder.set_reports(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_reports_for_report_group(
    input: &[u8],
    mut builder: crate::output::list_reports_for_report_group_output::Builder,
) -> Result<crate::output::list_reports_for_report_group_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "reports" => {
                        builder = builder.set_reports(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_shared_projects(
    input: &[u8],
    mut builder: crate::output::list_shared_projects_output::Builder,
) -> Result<crate::output::list_shared_projects_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "projects" => {
                        builder = builder.set_projects(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_shared_report_groups(
    input: &[u8],
    mut builder: crate::output::list_shared_report_groups_output::Builder,
) -> Result<crate::output::list_shared_report_groups_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "nextToken" => {
                        builder = builder.set_next_token(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    "reportGroups" => {
                        builder = builder.set_report_groups(
                            crate::json_deser::deser_list_string(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_list_source_credentials(
    input: &[u8],
    mut builder: crate::output::list_source_credentials_output::Builder,
) -> Result<crate::output::list_source_credentials_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "sourceCredentialsInfos" => {
                        builder = builder.set_source_credentials_infos(
                            crate::json_deser::deser_list_source_credentials_info(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_put_resource_policy(
    input: &[u8],
    mut builder: crate::output::put_resource_policy_output::Builder,
) -> Result<crate::output::put_resource_policy_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "resourceArn" => {
                        builder = builder.set_resource_arn(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_start_build(
    input: &[u8],
    mut builder: crate::output::start_build_output::Builder,
) -> Result<crate::output::start_build_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "build" => {
                        builder = builder.set_build(
                            crate::json_deser::deser_structure_build(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_stop_build(
    input: &[u8],
    mut builder: crate::output::stop_build_output::Builder,
) -> Result<crate::output::stop_build_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "build" => {
                        builder = builder.set_build(
                            crate::json_deser::deser_structure_build(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_project(
    input: &[u8],
    mut builder: crate::output::update_project_output::Builder,
) -> Result<crate::output::update_project_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "project" => {
                        builder = builder.set_project(
                            crate::json_deser::deser_structure_project(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_report_group(
    input: &[u8],
    mut builder: crate::output::update_report_group_output::Builder,
) -> Result<crate::output::update_report_group_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "reportGroup" => {
                        builder = builder.set_report_group(
                            crate::json_deser::deser_structure_report_group(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_operation_update_webhook(
    input: &[u8],
    mut builder: crate::output::update_webhook_output::Builder,
) -> Result<crate::output::update_webhook_output::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "webhook" => {
                        builder = builder.set_webhook(
                            crate::json_deser::deser_structure_webhook(tokens)?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_account_limit_exceeded_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::account_limit_exceeded_exception::Builder,
) -> Result<crate::error::account_limit_exceeded_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_invalid_input_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::invalid_input_exception::Builder,
) -> Result<crate::error::invalid_input_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_o_auth_provider_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::o_auth_provider_exception::Builder,
) -> Result<crate::error::o_auth_provider_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_resource_already_exists_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::resource_already_exists_exception::Builder,
) -> Result<crate::error::resource_already_exists_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn deser_structure_resource_not_found_exceptionjson_err(
    input: &[u8],
    mut builder: crate::error::resource_not_found_exception::Builder,
) -> Result<crate::error::resource_not_found_exception::Builder, smithy_json::deserialize::Error> {
    let mut tokens_owned =
        smithy_json::deserialize::json_token_iter(crate::json_deser::or_empty_doc(input))
            .peekable();
    let tokens = &mut tokens_owned;
    smithy_json::deserialize::token::expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
            Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                match key.to_unescaped()?.as_ref() {
                    "message" | "Message" => {
                        builder = builder.set_message(
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                        );
                    }
                    _ => smithy_json::deserialize::token::skip_value(tokens)?,
                }
            }
            _ => {
                return Err(smithy_json::deserialize::Error::custom(
                    "expected object key or end object",
                ))
            }
        }
    }
    if tokens.next().is_some() {
        return Err(smithy_json::deserialize::Error::custom(
            "found more JSON tokens after completing parsing",
        ));
    }
    Ok(builder)
}

pub fn or_empty_doc(data: &[u8]) -> &[u8] {
    if data.is_empty() {
        b"{}"
    } else {
        data
    }
}

pub fn deser_structure_git_submodules_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::GitSubmodulesConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::GitSubmodulesConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "fetchSubmodules" => {
                                builder = builder.set_fetch_submodules(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_source_auth<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::SourceAuth>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::SourceAuth::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::SourceAuthType::from(s.as_str()))
                                );
                            }
                            "resource" => {
                                builder = builder.set_resource(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_source<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectSource>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectSource::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::SourceType::from(s.as_str()))
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "gitCloneDepth" => {
                                builder = builder.set_git_clone_depth(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "gitSubmodulesConfig" => {
                                builder = builder.set_git_submodules_config(
                                    crate::json_deser::deser_structure_git_submodules_config(tokens)?
                                );
                            }
                            "buildspec" => {
                                builder = builder.set_buildspec(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "auth" => {
                                builder = builder.set_auth(
                                    crate::json_deser::deser_structure_source_auth(tokens)?
                                );
                            }
                            "reportBuildStatus" => {
                                builder = builder.set_report_build_status(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "insecureSsl" => {
                                builder = builder.set_insecure_ssl(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "sourceIdentifier" => {
                                builder = builder.set_source_identifier(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_source_version<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectSourceVersion>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectSourceVersion::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "sourceIdentifier" => {
                                builder = builder.set_source_identifier(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "sourceVersion" => {
                                builder = builder.set_source_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_artifacts<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectArtifacts>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectArtifacts::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ArtifactsType::from(s.as_str()))
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "path" => {
                                builder = builder.set_path(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "namespaceType" => {
                                builder = builder.set_namespace_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ArtifactNamespace::from(s.as_str()))
                                );
                            }
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "packaging" => {
                                builder = builder.set_packaging(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ArtifactPackaging::from(s.as_str()))
                                );
                            }
                            "overrideArtifactName" => {
                                builder = builder.set_override_artifact_name(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "encryptionDisabled" => {
                                builder = builder.set_encryption_disabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "artifactIdentifier" => {
                                builder = builder.set_artifact_identifier(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_cache<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectCache>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectCache::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::CacheType::from(s.as_str()))
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "modes" => {
                                builder = builder.set_modes(
                                    crate::json_deser::deser_list_cache_mode(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_environment_variable<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::EnvironmentVariable>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::EnvironmentVariable::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "value" => {
                                builder = builder.set_value(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::EnvironmentVariableType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_registry_credential<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::RegistryCredential>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::RegistryCredential::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "credential" => {
                                builder = builder.set_credential(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "credentialProvider" => {
                                builder = builder.set_credential_provider(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::CredentialProviderType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_environment<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectEnvironment>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectEnvironment::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::EnvironmentType::from(s.as_str()))
                                );
                            }
                            "image" => {
                                builder = builder.set_image(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "computeType" => {
                                builder = builder.set_compute_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ComputeType::from(s.as_str()))
                                );
                            }
                            "environmentVariables" => {
                                builder = builder.set_environment_variables(
                                    crate::json_deser::deser_list_environment_variable(tokens)?
                                );
                            }
                            "privilegedMode" => {
                                builder = builder.set_privileged_mode(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "certificate" => {
                                builder = builder.set_certificate(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "registryCredential" => {
                                builder = builder.set_registry_credential(
                                    crate::json_deser::deser_structure_registry_credential(tokens)?
                                );
                            }
                            "imagePullCredentialsType" => {
                                builder = builder.set_image_pull_credentials_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ImagePullCredentialsType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_tag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Tag>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Tag::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "key" => {
                                builder = builder.set_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "value" => {
                                builder = builder.set_value(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_vpc_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::VpcConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::VpcConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "vpcId" => {
                                builder = builder.set_vpc_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "subnets" => {
                                builder = builder.set_subnets(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            "securityGroupIds" => {
                                builder = builder.set_security_group_ids(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_cloud_watch_logs_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::CloudWatchLogsConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::CloudWatchLogsConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "status" => {
                                builder = builder.set_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::LogsConfigStatusType::from(s.as_str()))
                                );
                            }
                            "groupName" => {
                                builder = builder.set_group_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "streamName" => {
                                builder = builder.set_stream_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_s3_logs_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::S3LogsConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::S3LogsConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "status" => {
                                builder = builder.set_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::LogsConfigStatusType::from(s.as_str()))
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "encryptionDisabled" => {
                                builder = builder.set_encryption_disabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_logs_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::LogsConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::LogsConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "cloudWatchLogs" => {
                                builder = builder.set_cloud_watch_logs(
                                    crate::json_deser::deser_structure_cloud_watch_logs_config(tokens)?
                                );
                            }
                            "s3Logs" => {
                                builder = builder.set_s3_logs(
                                    crate::json_deser::deser_structure_s3_logs_config(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_file_system_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectFileSystemLocation>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectFileSystemLocation::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::FileSystemType::from(s.as_str()))
                                );
                            }
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "mountPoint" => {
                                builder = builder.set_mount_point(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "identifier" => {
                                builder = builder.set_identifier(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "mountOptions" => {
                                builder = builder.set_mount_options(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_webhook_filter<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::WebhookFilter>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::WebhookFilter::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::WebhookFilterType::from(s.as_str()))
                                );
                            }
                            "pattern" => {
                                builder = builder.set_pattern(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "excludeMatchedPattern" => {
                                builder = builder.set_exclude_matched_pattern(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_webhook<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Webhook>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Webhook::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "url" => {
                                builder = builder.set_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "payloadUrl" => {
                                builder = builder.set_payload_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "secret" => {
                                builder = builder.set_secret(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "branchFilter" => {
                                builder = builder.set_branch_filter(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "filterGroups" => {
                                builder = builder.set_filter_groups(
                                    crate::json_deser::deser_list_list_webhook_filter(tokens)?
                                );
                            }
                            "lastModifiedSecret" => {
                                builder = builder.set_last_modified_secret(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project_badge<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ProjectBadge>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ProjectBadge::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "badgeEnabled" => {
                                builder = builder.set_badge_enabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "badgeRequestUrl" => {
                                builder = builder.set_badge_request_url(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_project<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Project>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Project::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "description" => {
                                builder = builder.set_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "source" => {
                                builder = builder.set_source(
                                    crate::json_deser::deser_structure_project_source(tokens)?
                                );
                            }
                            "secondarySources" => {
                                builder = builder.set_secondary_sources(
                                    crate::json_deser::deser_list_project_source(tokens)?
                                );
                            }
                            "sourceVersion" => {
                                builder = builder.set_source_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "secondarySourceVersions" => {
                                builder = builder.set_secondary_source_versions(
                                    crate::json_deser::deser_list_project_source_version(tokens)?
                                );
                            }
                            "artifacts" => {
                                builder = builder.set_artifacts(
                                    crate::json_deser::deser_structure_project_artifacts(tokens)?
                                );
                            }
                            "secondaryArtifacts" => {
                                builder = builder.set_secondary_artifacts(
                                    crate::json_deser::deser_list_project_artifacts(tokens)?
                                );
                            }
                            "cache" => {
                                builder = builder.set_cache(
                                    crate::json_deser::deser_structure_project_cache(tokens)?
                                );
                            }
                            "environment" => {
                                builder = builder.set_environment(
                                    crate::json_deser::deser_structure_project_environment(tokens)?
                                );
                            }
                            "serviceRole" => {
                                builder = builder.set_service_role(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "timeoutInMinutes" => {
                                builder = builder.set_timeout_in_minutes(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "queuedTimeoutInMinutes" => {
                                builder = builder.set_queued_timeout_in_minutes(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "encryptionKey" => {
                                builder = builder.set_encryption_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            "created" => {
                                builder = builder.set_created(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "lastModified" => {
                                builder = builder.set_last_modified(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "webhook" => {
                                builder = builder.set_webhook(
                                    crate::json_deser::deser_structure_webhook(tokens)?
                                );
                            }
                            "vpcConfig" => {
                                builder = builder.set_vpc_config(
                                    crate::json_deser::deser_structure_vpc_config(tokens)?
                                );
                            }
                            "badge" => {
                                builder = builder.set_badge(
                                    crate::json_deser::deser_structure_project_badge(tokens)?
                                );
                            }
                            "logsConfig" => {
                                builder = builder.set_logs_config(
                                    crate::json_deser::deser_structure_logs_config(tokens)?
                                );
                            }
                            "fileSystemLocations" => {
                                builder = builder.set_file_system_locations(
                                    crate::json_deser::deser_list_project_file_system_location(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_phase_context<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::PhaseContext>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::PhaseContext::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "statusCode" => {
                                builder = builder.set_status_code(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "message" => {
                                builder = builder.set_message(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_build_phase<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::BuildPhase>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::BuildPhase::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "phaseType" => {
                                builder = builder.set_phase_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::BuildPhaseType::from(s.as_str()))
                                );
                            }
                            "phaseStatus" => {
                                builder = builder.set_phase_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::StatusType::from(s.as_str()))
                                );
                            }
                            "startTime" => {
                                builder = builder.set_start_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "endTime" => {
                                builder = builder.set_end_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "durationInSeconds" => {
                                builder = builder.set_duration_in_seconds(
                                    smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                                );
                            }
                            "contexts" => {
                                builder = builder.set_contexts(
                                    crate::json_deser::deser_list_phase_context(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_build_artifacts<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::BuildArtifacts>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::BuildArtifacts::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "location" => {
                                builder = builder.set_location(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "sha256sum" => {
                                builder = builder.set_sha256sum(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "md5sum" => {
                                builder = builder.set_md5sum(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "overrideArtifactName" => {
                                builder = builder.set_override_artifact_name(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "encryptionDisabled" => {
                                builder = builder.set_encryption_disabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "artifactIdentifier" => {
                                builder = builder.set_artifact_identifier(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_logs_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::LogsLocation>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::LogsLocation::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "groupName" => {
                                builder = builder.set_group_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "streamName" => {
                                builder = builder.set_stream_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "deepLink" => {
                                builder = builder.set_deep_link(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "s3DeepLink" => {
                                builder = builder.set_s3_deep_link(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "cloudWatchLogsArn" => {
                                builder = builder.set_cloud_watch_logs_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "s3LogsArn" => {
                                builder = builder.set_s3_logs_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "cloudWatchLogs" => {
                                builder = builder.set_cloud_watch_logs(
                                    crate::json_deser::deser_structure_cloud_watch_logs_config(tokens)?
                                );
                            }
                            "s3Logs" => {
                                builder = builder.set_s3_logs(
                                    crate::json_deser::deser_structure_s3_logs_config(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_network_interface<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::NetworkInterface>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::NetworkInterface::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "subnetId" => {
                                builder = builder.set_subnet_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "networkInterfaceId" => {
                                builder = builder.set_network_interface_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_exported_environment_variable<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ExportedEnvironmentVariable>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ExportedEnvironmentVariable::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "value" => {
                                builder = builder.set_value(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_build<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Build>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Build::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "buildNumber" => {
                                builder = builder.set_build_number(
                                    smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                                );
                            }
                            "startTime" => {
                                builder = builder.set_start_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "endTime" => {
                                builder = builder.set_end_time(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "currentPhase" => {
                                builder = builder.set_current_phase(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "buildStatus" => {
                                builder = builder.set_build_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::StatusType::from(s.as_str()))
                                );
                            }
                            "sourceVersion" => {
                                builder = builder.set_source_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "resolvedSourceVersion" => {
                                builder = builder.set_resolved_source_version(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "projectName" => {
                                builder = builder.set_project_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "phases" => {
                                builder = builder.set_phases(
                                    crate::json_deser::deser_list_build_phase(tokens)?
                                );
                            }
                            "source" => {
                                builder = builder.set_source(
                                    crate::json_deser::deser_structure_project_source(tokens)?
                                );
                            }
                            "secondarySources" => {
                                builder = builder.set_secondary_sources(
                                    crate::json_deser::deser_list_project_source(tokens)?
                                );
                            }
                            "secondarySourceVersions" => {
                                builder = builder.set_secondary_source_versions(
                                    crate::json_deser::deser_list_project_source_version(tokens)?
                                );
                            }
                            "artifacts" => {
                                builder = builder.set_artifacts(
                                    crate::json_deser::deser_structure_build_artifacts(tokens)?
                                );
                            }
                            "secondaryArtifacts" => {
                                builder = builder.set_secondary_artifacts(
                                    crate::json_deser::deser_list_build_artifacts(tokens)?
                                );
                            }
                            "cache" => {
                                builder = builder.set_cache(
                                    crate::json_deser::deser_structure_project_cache(tokens)?
                                );
                            }
                            "environment" => {
                                builder = builder.set_environment(
                                    crate::json_deser::deser_structure_project_environment(tokens)?
                                );
                            }
                            "serviceRole" => {
                                builder = builder.set_service_role(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "logs" => {
                                builder = builder.set_logs(
                                    crate::json_deser::deser_structure_logs_location(tokens)?
                                );
                            }
                            "timeoutInMinutes" => {
                                builder = builder.set_timeout_in_minutes(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "queuedTimeoutInMinutes" => {
                                builder = builder.set_queued_timeout_in_minutes(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "buildComplete" => {
                                builder = builder.set_build_complete(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "initiator" => {
                                builder = builder.set_initiator(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "vpcConfig" => {
                                builder = builder.set_vpc_config(
                                    crate::json_deser::deser_structure_vpc_config(tokens)?
                                );
                            }
                            "networkInterface" => {
                                builder = builder.set_network_interface(
                                    crate::json_deser::deser_structure_network_interface(tokens)?
                                );
                            }
                            "encryptionKey" => {
                                builder = builder.set_encryption_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "exportedEnvironmentVariables" => {
                                builder = builder.set_exported_environment_variables(
                                    crate::json_deser::deser_list_exported_environment_variable(tokens)?
                                );
                            }
                            "reportArns" => {
                                builder = builder.set_report_arns(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            "fileSystemLocations" => {
                                builder = builder.set_file_system_locations(
                                    crate::json_deser::deser_list_project_file_system_location(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_build_not_deleted<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::BuildNotDeleted>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::BuildNotDeleted::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "id" => {
                                builder = builder.set_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "statusCode" => {
                                builder = builder.set_status_code(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_s3_report_export_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::S3ReportExportConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::S3ReportExportConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "bucket" => {
                                builder = builder.set_bucket(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "path" => {
                                builder = builder.set_path(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "packaging" => {
                                builder = builder.set_packaging(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ReportPackagingType::from(s.as_str()))
                                );
                            }
                            "encryptionKey" => {
                                builder = builder.set_encryption_key(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "encryptionDisabled" => {
                                builder = builder.set_encryption_disabled(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_report_export_config<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ReportExportConfig>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ReportExportConfig::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "exportConfigType" => {
                                builder = builder.set_export_config_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ReportExportConfigType::from(s.as_str()))
                                );
                            }
                            "s3Destination" => {
                                builder = builder.set_s3_destination(
                                    crate::json_deser::deser_structure_s3_report_export_config(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_report_group<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::ReportGroup>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::ReportGroup::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ReportType::from(s.as_str()))
                                );
                            }
                            "exportConfig" => {
                                builder = builder.set_export_config(
                                    crate::json_deser::deser_structure_report_export_config(tokens)?
                                );
                            }
                            "created" => {
                                builder = builder.set_created(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "lastModified" => {
                                builder = builder.set_last_modified(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "tags" => {
                                builder = builder.set_tags(
                                    crate::json_deser::deser_list_tag(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_test_report_summary<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::TestReportSummary>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::TestReportSummary::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "total" => {
                                builder = builder.set_total(
                                    smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?
                                );
                            }
                            "statusCounts" => {
                                builder = builder.set_status_counts(
                                    crate::json_deser::deser_map_integer(tokens)?
                                );
                            }
                            "durationInNanoSeconds" => {
                                builder = builder.set_duration_in_nano_seconds(
                                    smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_report<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::Report>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::Report::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "type" => {
                                builder = builder.set_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ReportType::from(s.as_str()))
                                );
                            }
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "reportGroupArn" => {
                                builder = builder.set_report_group_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "executionId" => {
                                builder = builder.set_execution_id(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "status" => {
                                builder = builder.set_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ReportStatusType::from(s.as_str()))
                                );
                            }
                            "created" => {
                                builder = builder.set_created(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "expired" => {
                                builder = builder.set_expired(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            "exportConfig" => {
                                builder = builder.set_export_config(
                                    crate::json_deser::deser_structure_report_export_config(tokens)?
                                );
                            }
                            "truncated" => {
                                builder = builder.set_truncated(
                                    smithy_json::deserialize::token::expect_bool_or_null(tokens.next())?
                                );
                            }
                            "testSummary" => {
                                builder = builder.set_test_summary(
                                    crate::json_deser::deser_structure_test_report_summary(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_test_case<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::TestCase>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::TestCase::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "reportArn" => {
                                builder = builder.set_report_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "testRawDataPath" => {
                                builder = builder.set_test_raw_data_path(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "prefix" => {
                                builder = builder.set_prefix(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "status" => {
                                builder = builder.set_status(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "durationInNanoSeconds" => {
                                builder = builder.set_duration_in_nano_seconds(
                                    smithy_json::deserialize::token::expect_i64_or_null(tokens.next())?
                                );
                            }
                            "message" => {
                                builder = builder.set_message(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "expired" => {
                                builder = builder.set_expired(
                                    smithy_json::deserialize::token::expect_timestamp_or_null(tokens.next())?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_environment_image<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::EnvironmentImage>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::EnvironmentImage::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "name" => {
                                builder = builder.set_name(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "description" => {
                                builder = builder.set_description(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "versions" => {
                                builder = builder.set_versions(
                                    crate::json_deser::deser_list_string(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_environment_language<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::EnvironmentLanguage>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::EnvironmentLanguage::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "language" => {
                                builder = builder.set_language(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::LanguageType::from(s.as_str()))
                                );
                            }
                            "images" => {
                                builder = builder.set_images(
                                    crate::json_deser::deser_list_environment_image(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_environment_platform<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::EnvironmentPlatform>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::EnvironmentPlatform::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "platform" => {
                                builder = builder.set_platform(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::PlatformType::from(s.as_str()))
                                );
                            }
                            "languages" => {
                                builder = builder.set_languages(
                                    crate::json_deser::deser_list_environment_language(tokens)?
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

pub fn deser_structure_source_credentials_info<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<crate::model::SourceCredentialsInfo>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            #[allow(unused_mut)]
            let mut builder = crate::model::SourceCredentialsInfo::builder();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        match key.to_unescaped()?.as_ref() {
                            "arn" => {
                                builder = builder.set_arn(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                );
                            }
                            "serverType" => {
                                builder = builder.set_server_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::ServerType::from(s.as_str()))
                                );
                            }
                            "authType" => {
                                builder = builder.set_auth_type(
                                    smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                        .map(|s| crate::model::AuthType::from(s.as_str()))
                                );
                            }
                            _ => smithy_json::deserialize::token::skip_value(tokens)?,
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(builder.build()))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_build<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Build>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_build(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_build_artifacts<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::BuildArtifacts>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_build_artifacts(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_build_not_deleted<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::BuildNotDeleted>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_build_not_deleted(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_build_phase<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::BuildPhase>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_build_phase(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_cache_mode<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::CacheMode>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?
                                .map(|s| crate::model::CacheMode::from(s.as_str()));
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_environment_image<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::EnvironmentImage>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_environment_image(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_environment_language<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::EnvironmentLanguage>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_environment_language(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_environment_platform<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::EnvironmentPlatform>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_environment_platform(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_environment_variable<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::EnvironmentVariable>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_environment_variable(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_exported_environment_variable<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ExportedEnvironmentVariable>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_exported_environment_variable(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_list_webhook_filter<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_list_webhook_filter(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_phase_context<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::PhaseContext>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_phase_context(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_project<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Project>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_project(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_project_artifacts<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ProjectArtifacts>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_project_artifacts(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_project_file_system_location<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_project_file_system_location(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_project_source<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ProjectSource>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_project_source(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_project_source_version<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ProjectSourceVersion>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_project_source_version(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_report<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Report>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_report(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_report_group<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::ReportGroup>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_report_group(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_source_credentials_info<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::SourceCredentialsInfo>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_source_credentials_info(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_string<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<std::string::String>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            smithy_json::deserialize::token::expect_string_or_null(tokens.next())?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_tag<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::Tag>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_tag(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_test_case<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::TestCase>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_test_case(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_list_webhook_filter<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::vec::Vec<crate::model::WebhookFilter>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartArray { .. }) => {
            let mut items = Vec::new();
            loop {
                match tokens.peek() {
                    Some(Ok(smithy_json::deserialize::Token::EndArray { .. })) => {
                        tokens.next().transpose()?;
                        break;
                    }
                    _ => {
                        let value =
                            crate::json_deser::deser_structure_webhook_filter(tokens)?;
                        if let Some(value) = value {
                            items.push(value);
                        }
                    }
                }
            }
            Ok(Some(items))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start array or null",
        )),
    }
}

#[allow(clippy::type_complexity, non_snake_case)]
pub fn deser_map_integer<'a, I>(
    tokens: &mut std::iter::Peekable<I>,
) -> Result<Option<std::collections::HashMap<std::string::String, i32>>, smithy_json::deserialize::Error>
where
    I: Iterator<Item = Result<smithy_json::deserialize::Token<'a>, smithy_json::deserialize::Error>>,
{
    match tokens.next().transpose()? {
        Some(smithy_json::deserialize::Token::ValueNull { .. }) => Ok(None),
        Some(smithy_json::deserialize::Token::StartObject { .. }) => {
            let mut map = std::collections::HashMap::new();
            loop {
                match tokens.next().transpose()? {
                    Some(smithy_json::deserialize::Token::EndObject { .. }) => break,
                    Some(smithy_json::deserialize::Token::ObjectKey { key, .. }) => {
                        let key = key.to_unescaped()?.into_owned();
                        let value =
                            smithy_json::deserialize::token::expect_i32_or_null(tokens.next())?;
                        if let Some(value) = value {
                            map.insert(key, value);
                        }
                    }
                    _ => {
                        return Err(smithy_json::deserialize::Error::custom(
                            "expected object key or end object",
                        ))
                    }
                }
            }
            Ok(Some(map))
        }
        _ => Err(smithy_json::deserialize::Error::custom(
            "expected start object or null",
        )),
    }
}
