/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Information about a build.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Build {
    /// The unique ID for the build.
    pub id: std::option::Option<std::string::String>,
    pub arn: std::option::Option<std::string::String>,
    /// The number of the build. Each project's first build is number 1.
    pub build_number: std::option::Option<i64>,
    pub start_time: std::option::Option<smithy_types::Instant>,
    pub end_time: std::option::Option<smithy_types::Instant>,
    /// The current build phase.
    pub current_phase: std::option::Option<std::string::String>,
    pub build_status: std::option::Option<crate::model::StatusType>,
    pub source_version: std::option::Option<std::string::String>,
    pub resolved_source_version: std::option::Option<std::string::String>,
    pub project_name: std::option::Option<std::string::String>,
    pub phases: std::option::Option<std::vec::Vec<crate::model::BuildPhase>>,
    pub source: std::option::Option<crate::model::ProjectSource>,
    pub secondary_sources: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
    pub secondary_source_versions: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
    pub artifacts: std::option::Option<crate::model::BuildArtifacts>,
    pub secondary_artifacts: std::option::Option<std::vec::Vec<crate::model::BuildArtifacts>>,
    pub cache: std::option::Option<crate::model::ProjectCache>,
    pub environment: std::option::Option<crate::model::ProjectEnvironment>,
    pub service_role: std::option::Option<std::string::String>,
    pub logs: std::option::Option<crate::model::LogsLocation>,
    pub timeout_in_minutes: std::option::Option<i32>,
    pub queued_timeout_in_minutes: std::option::Option<i32>,
    /// Whether the build has finished. True if completed; otherwise, false.
    pub build_complete: std::option::Option<bool>,
    pub initiator: std::option::Option<std::string::String>,
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    pub network_interface: std::option::Option<crate::model::NetworkInterface>,
    pub encryption_key: std::option::Option<std::string::String>,
    pub exported_environment_variables: std::option::Option<std::vec::Vec<crate::model::ExportedEnvironmentVariable>>,
    pub report_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    pub file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
}
impl std::fmt::Debug for Build {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Build");
        formatter.field("id", &self.id);
        formatter.field("arn", &self.arn);
        formatter.field("build_number", &self.build_number);
        formatter.field("start_time", &self.start_time);
        formatter.field("end_time", &self.end_time);
        formatter.field("current_phase", &self.current_phase);
        formatter.field("build_status", &self.build_status);
        formatter.field("source_version", &self.source_version);
        formatter.field("resolved_source_version", &self.resolved_source_version);
        formatter.field("project_name", &self.project_name);
        formatter.field("phases", &self.phases);
        formatter.field("source", &self.source);
        formatter.field("secondary_sources", &self.secondary_sources);
        formatter.field("secondary_source_versions", &self.secondary_source_versions);
        formatter.field("artifacts", &self.artifacts);
        formatter.field("secondary_artifacts", &self.secondary_artifacts);
        formatter.field("cache", &self.cache);
        formatter.field("environment", &self.environment);
        formatter.field("service_role", &self.service_role);
        formatter.field("logs", &self.logs);
        formatter.field("timeout_in_minutes", &self.timeout_in_minutes);
        formatter.field("queued_timeout_in_minutes", &self.queued_timeout_in_minutes);
        formatter.field("build_complete", &self.build_complete);
        formatter.field("initiator", &self.initiator);
        formatter.field("vpc_config", &self.vpc_config);
        formatter.field("network_interface", &self.network_interface);
        formatter.field("encryption_key", &self.encryption_key);
        formatter.field("exported_environment_variables", &self.exported_environment_variables);
        formatter.field("report_arns", &self.report_arns);
        formatter.field("file_system_locations", &self.file_system_locations);
        formatter.finish()
    }
}
/// See [`Build`](crate::model::Build)
pub mod build {
    /// A builder for [`Build`](crate::model::Build)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) build_number: std::option::Option<i64>,
        pub(crate) start_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_time: std::option::Option<smithy_types::Instant>,
        pub(crate) current_phase: std::option::Option<std::string::String>,
        pub(crate) build_status: std::option::Option<crate::model::StatusType>,
        pub(crate) source_version: std::option::Option<std::string::String>,
        pub(crate) resolved_source_version: std::option::Option<std::string::String>,
        pub(crate) project_name: std::option::Option<std::string::String>,
        pub(crate) phases: std::option::Option<std::vec::Vec<crate::model::BuildPhase>>,
        pub(crate) source: std::option::Option<crate::model::ProjectSource>,
        pub(crate) secondary_sources: std::option::Option<std::vec::Vec<crate::model::ProjectSource>>,
        pub(crate) secondary_source_versions: std::option::Option<std::vec::Vec<crate::model::ProjectSourceVersion>>,
        pub(crate) artifacts: std::option::Option<crate::model::BuildArtifacts>,
        pub(crate) secondary_artifacts: std::option::Option<std::vec::Vec<crate::model::BuildArtifacts>>,
        pub(crate) cache: std::option::Option<crate::model::ProjectCache>,
        pub(crate) environment: std::option::Option<crate::model::ProjectEnvironment>,
        pub(crate) service_role: std::option::Option<std::string::String>,
        pub(crate) logs: std::option::Option<crate::model::LogsLocation>,
        pub(crate) timeout_in_minutes: std::option::Option<i32>,
        pub(crate) queued_timeout_in_minutes: std::option::Option<i32>,
        pub(crate) build_complete: std::option::Option<bool>,
        pub(crate) initiator: std::option::Option<std::string::String>,
        pub(crate) vpc_config: std::option::Option<crate::model::VpcConfig>,
        pub(crate) network_interface: std::option::Option<crate::model::NetworkInterface>,
        pub(crate) encryption_key: std::option::Option<std::string::String>,
        pub(crate) exported_environment_variables: std::option::Option<std::vec::Vec<crate::model::ExportedEnvironmentVariable>>,
        pub(crate) report_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
    }
    impl Builder {
        /// The unique ID for the build.
        pub fn id(mut self, input: impl Into<std::string::String>) -> Self {
            self.id = Some(input.into());
            self
        }
        pub fn set_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.id = input;
            self
        }
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
            self
        }
        /// The number of the build. Each project's first build is number 1.
        pub fn build_number(mut self, input: i64) -> Self {
            self.build_number = Some(input);
            self
        }
        pub fn set_build_number(mut self, input: std::option::Option<i64>) -> Self {
            self.build_number = input;
            self
        }
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
            self
        }
        /// The current build phase.
        pub fn current_phase(mut self, input: impl Into<std::string::String>) -> Self {
            self.current_phase = Some(input.into());
            self
        }
        pub fn set_current_phase(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.current_phase = input;
            self
        }
        pub fn build_status(mut self, input: crate::model::StatusType) -> Self {
            self.build_status = Some(input);
            self
        }
        pub fn set_build_status(mut self, input: std::option::Option<crate::model::StatusType>) -> Self {
            self.build_status = input;
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
        pub fn resolved_source_version(mut self, input: impl Into<std::string::String>) -> Self {
            self.resolved_source_version = Some(input.into());
            self
        }
        pub fn set_resolved_source_version(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resolved_source_version = input;
            self
        }
        pub fn project_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.project_name = Some(input.into());
            self
        }
        pub fn set_project_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.project_name = input;
            self
        }
        /// Appends an item to `phases`.
        pub fn phases(mut self, input: impl Into<crate::model::BuildPhase>) -> Self {
            let mut v = self.phases.unwrap_or_default();
            v.push(input.into());
            self.phases = Some(v);
            self
        }
        pub fn set_phases(mut self, input: std::option::Option<std::vec::Vec<crate::model::BuildPhase>>) -> Self {
            self.phases = input;
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
        pub fn artifacts(mut self, input: crate::model::BuildArtifacts) -> Self {
            self.artifacts = Some(input);
            self
        }
        pub fn set_artifacts(mut self, input: std::option::Option<crate::model::BuildArtifacts>) -> Self {
            self.artifacts = input;
            self
        }
        /// Appends an item to `secondary_artifacts`.
        pub fn secondary_artifacts(mut self, input: impl Into<crate::model::BuildArtifacts>) -> Self {
            let mut v = self.secondary_artifacts.unwrap_or_default();
            v.push(input.into());
            self.secondary_artifacts = Some(v);
            self
        }
        pub fn set_secondary_artifacts(mut self, input: std::option::Option<std::vec::Vec<crate::model::BuildArtifacts>>) -> Self {
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
        pub fn logs(mut self, input: crate::model::LogsLocation) -> Self {
            self.logs = Some(input);
            self
        }
        pub fn set_logs(mut self, input: std::option::Option<crate::model::LogsLocation>) -> Self {
            self.logs = input;
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
        /// Whether the build has finished. True if completed; otherwise, false.
        pub fn build_complete(mut self, input: bool) -> Self {
            self.build_complete = Some(input);
            self
        }
        pub fn set_build_complete(mut self, input: std::option::Option<bool>) -> Self {
            self.build_complete = input;
            self
        }
        pub fn initiator(mut self, input: impl Into<std::string::String>) -> Self {
            self.initiator = Some(input.into());
            self
        }
        pub fn set_initiator(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.initiator = input;
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
        pub fn network_interface(mut self, input: crate::model::NetworkInterface) -> Self {
            self.network_interface = Some(input);
            self
        }
        pub fn set_network_interface(mut self, input: std::option::Option<crate::model::NetworkInterface>) -> Self {
            self.network_interface = input;
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
        /// Appends an item to `exported_environment_variables`.
        pub fn exported_environment_variables(mut self, input: impl Into<crate::model::ExportedEnvironmentVariable>) -> Self {
            let mut v = self.exported_environment_variables.unwrap_or_default();
            v.push(input.into());
            self.exported_environment_variables = Some(v);
            self
        }
        pub fn set_exported_environment_variables(mut self, input: std::option::Option<std::vec::Vec<crate::model::ExportedEnvironmentVariable>>) -> Self {
            self.exported_environment_variables = input;
            self
        }
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
        /// Consumes the builder and constructs a [`Build`](crate::model::Build)
        pub fn build(self) -> crate::model::Build {
            crate::model::Build {
                id: self.id,
                arn: self.arn,
                build_number: self.build_number,
                start_time: self.start_time,
                end_time: self.end_time,
                current_phase: self.current_phase,
                build_status: self.build_status,
                source_version: self.source_version,
                resolved_source_version: self.resolved_source_version,
                project_name: self.project_name,
                phases: self.phases,
                source: self.source,
                secondary_sources: self.secondary_sources,
                secondary_source_versions: self.secondary_source_versions,
                artifacts: self.artifacts,
                secondary_artifacts: self.secondary_artifacts,
                cache: self.cache,
                environment: self.environment,
                service_role: self.service_role,
                logs: self.logs,
                timeout_in_minutes: self.timeout_in_minutes,
                queued_timeout_in_minutes: self.queued_timeout_in_minutes,
                build_complete: self.build_complete,
                initiator: self.initiator,
                vpc_config: self.vpc_config,
                network_interface: self.network_interface,
                encryption_key: self.encryption_key,
                exported_environment_variables: self.exported_environment_variables,
                report_arns: self.report_arns,
                file_system_locations: self.file_system_locations,
            }
        }
    }
}
impl Build {
    /// Creates a new builder-style object to manufacture [`Build`](crate::model::Build)
    pub fn builder() -> crate::model::build::Builder {
        crate::model::build::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BuildArtifacts {
    pub location: std::option::Option<std::string::String>,
    pub sha256sum: std::option::Option<std::string::String>,
    pub md5sum: std::option::Option<std::string::String>,
    pub override_artifact_name: std::option::Option<bool>,
    pub encryption_disabled: std::option::Option<bool>,
    pub artifact_identifier: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for BuildArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BuildArtifacts");
        formatter.field("location", &self.location);
        formatter.field("sha256sum", &self.sha256sum);
        formatter.field("md5sum", &self.md5sum);
        formatter.field("override_artifact_name", &self.override_artifact_name);
        formatter.field("encryption_disabled", &self.encryption_disabled);
        formatter.field("artifact_identifier", &self.artifact_identifier);
        formatter.finish()
    }
}
/// See [`BuildArtifacts`](crate::model::BuildArtifacts)
pub mod build_artifacts {
    /// A builder for [`BuildArtifacts`](crate::model::BuildArtifacts)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) sha256sum: std::option::Option<std::string::String>,
        pub(crate) md5sum: std::option::Option<std::string::String>,
        pub(crate) override_artifact_name: std::option::Option<bool>,
        pub(crate) encryption_disabled: std::option::Option<bool>,
        pub(crate) artifact_identifier: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        pub fn sha256sum(mut self, input: impl Into<std::string::String>) -> Self {
            self.sha256sum = Some(input.into());
            self
        }
        pub fn set_sha256sum(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.sha256sum = input;
            self
        }
        pub fn md5sum(mut self, input: impl Into<std::string::String>) -> Self {
            self.md5sum = Some(input.into());
            self
        }
        pub fn set_md5sum(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.md5sum = input;
            self
        }
        pub fn override_artifact_name(mut self, input: bool) -> Self {
            self.override_artifact_name = Some(input);
            self
        }
        pub fn set_override_artifact_name(mut self, input: std::option::Option<bool>) -> Self {
            self.override_artifact_name = input;
            self
        }
        pub fn encryption_disabled(mut self, input: bool) -> Self {
            self.encryption_disabled = Some(input);
            self
        }
        pub fn set_encryption_disabled(mut self, input: std::option::Option<bool>) -> Self {
            self.encryption_disabled = input;
            self
        }
        pub fn artifact_identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.artifact_identifier = Some(input.into());
            self
        }
        pub fn set_artifact_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.artifact_identifier = input;
            self
        }
        /// Consumes the builder and constructs a [`BuildArtifacts`](crate::model::BuildArtifacts)
        pub fn build(self) -> crate::model::BuildArtifacts {
            crate::model::BuildArtifacts {
                location: self.location,
                sha256sum: self.sha256sum,
                md5sum: self.md5sum,
                override_artifact_name: self.override_artifact_name,
                encryption_disabled: self.encryption_disabled,
                artifact_identifier: self.artifact_identifier,
            }
        }
    }
}
impl BuildArtifacts {
    /// Creates a new builder-style object to manufacture [`BuildArtifacts`](crate::model::BuildArtifacts)
    pub fn builder() -> crate::model::build_artifacts::Builder {
        crate::model::build_artifacts::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BuildNotDeleted {
    pub id: std::option::Option<std::string::String>,
    pub status_code: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for BuildNotDeleted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BuildNotDeleted");
        formatter.field("id", &self.id);
        formatter.field("status_code", &self.status_code);
        formatter.finish()
    }
}
/// See [`BuildNotDeleted`](crate::model::BuildNotDeleted)
pub mod build_not_deleted {
    /// A builder for [`BuildNotDeleted`](crate::model::BuildNotDeleted)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) id: std::option::Option<std::string::String>,
        pub(crate) status_code: std::option::Option<std::string::String>,
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
        pub fn status_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_code = Some(input.into());
            self
        }
        pub fn set_status_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_code = input;
            self
        }
        /// Consumes the builder and constructs a [`BuildNotDeleted`](crate::model::BuildNotDeleted)
        pub fn build(self) -> crate::model::BuildNotDeleted {
            crate::model::BuildNotDeleted {
                id: self.id,
                status_code: self.status_code,
            }
        }
    }
}
impl BuildNotDeleted {
    /// Creates a new builder-style object to manufacture [`BuildNotDeleted`](crate::model::BuildNotDeleted)
    pub fn builder() -> crate::model::build_not_deleted::Builder {
        crate::model::build_not_deleted::Builder::default()
    }
}

/// Information about a stage of a build.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct BuildPhase {
    pub phase_type: std::option::Option<crate::model::BuildPhaseType>,
    pub phase_status: std::option::Option<crate::model::StatusType>,
    pub start_time: std::option::Option<smithy_types::Instant>,
    pub end_time: std::option::Option<smithy_types::Instant>,
    pub duration_in_seconds: std::option::Option<i64>,
    pub contexts: std::option::Option<std::vec::Vec<crate::model::PhaseContext>>,
}
impl std::fmt::Debug for BuildPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("BuildPhase");
        formatter.field("phase_type", &self.phase_type);
        formatter.field("phase_status", &self.phase_status);
        formatter.field("start_time", &self.start_time);
        formatter.field("end_time", &self.end_time);
        formatter.field("duration_in_seconds", &self.duration_in_seconds);
        formatter.field("contexts", &self.contexts);
        formatter.finish()
    }
}
/// See [`BuildPhase`](crate::model::BuildPhase)
pub mod build_phase {
    /// A builder for [`BuildPhase`](crate::model::BuildPhase)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) phase_type: std::option::Option<crate::model::BuildPhaseType>,
        pub(crate) phase_status: std::option::Option<crate::model::StatusType>,
        pub(crate) start_time: std::option::Option<smithy_types::Instant>,
        pub(crate) end_time: std::option::Option<smithy_types::Instant>,
        pub(crate) duration_in_seconds: std::option::Option<i64>,
        pub(crate) contexts: std::option::Option<std::vec::Vec<crate::model::PhaseContext>>,
    }
    impl Builder {
        pub fn phase_type(mut self, input: crate::model::BuildPhaseType) -> Self {
            self.phase_type = Some(input);
            self
        }
        pub fn set_phase_type(mut self, input: std::option::Option<crate::model::BuildPhaseType>) -> Self {
            self.phase_type = input;
            self
        }
        pub fn phase_status(mut self, input: crate::model::StatusType) -> Self {
            self.phase_status = Some(input);
            self
        }
        pub fn set_phase_status(mut self, input: std::option::Option<crate::model::StatusType>) -> Self {
            self.phase_status = input;
            self
        }
        pub fn start_time(mut self, input: smithy_types::Instant) -> Self {
            self.start_time = Some(input);
            self
        }
        pub fn set_start_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = input;
            self
        }
        pub fn end_time(mut self, input: smithy_types::Instant) -> Self {
            self.end_time = Some(input);
            self
        }
        pub fn set_end_time(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = input;
            self
        }
        pub fn duration_in_seconds(mut self, input: i64) -> Self {
            self.duration_in_seconds = Some(input);
            self
        }
        pub fn set_duration_in_seconds(mut self, input: std::option::Option<i64>) -> Self {
            self.duration_in_seconds = input;
            self
        }
        /// Appends an item to `contexts`.
        pub fn contexts(mut self, input: impl Into<crate::model::PhaseContext>) -> Self {
            let mut v = self.contexts.unwrap_or_default();
            v.push(input.into());
            self.contexts = Some(v);
            self
        }
        pub fn set_contexts(mut self, input: std::option::Option<std::vec::Vec<crate::model::PhaseContext>>) -> Self {
            self.contexts = input;
            self
        }
        /// Consumes the builder and constructs a [`BuildPhase`](crate::model::BuildPhase)
        pub fn build(self) -> crate::model::BuildPhase {
            crate::model::BuildPhase {
                phase_type: self.phase_type,
                phase_status: self.phase_status,
                start_time: self.start_time,
                end_time: self.end_time,
                duration_in_seconds: self.duration_in_seconds,
                contexts: self.contexts,
            }
        }
    }
}
impl BuildPhase {
    /// Creates a new builder-style object to manufacture [`BuildPhase`](crate::model::BuildPhase)
    pub fn builder() -> crate::model::build_phase::Builder {
        crate::model::build_phase::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct CloudWatchLogsConfig {
    pub status: std::option::Option<crate::model::LogsConfigStatusType>,
    pub group_name: std::option::Option<std::string::String>,
    pub stream_name: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for CloudWatchLogsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("CloudWatchLogsConfig");
        formatter.field("status", &self.status);
        formatter.field("group_name", &self.group_name);
        formatter.field("stream_name", &self.stream_name);
        formatter.finish()
    }
}
/// See [`CloudWatchLogsConfig`](crate::model::CloudWatchLogsConfig)
pub mod cloud_watch_logs_config {
    /// A builder for [`CloudWatchLogsConfig`](crate::model::CloudWatchLogsConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<crate::model::LogsConfigStatusType>,
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) stream_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status(mut self, input: crate::model::LogsConfigStatusType) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::LogsConfigStatusType>) -> Self {
            self.status = input;
            self
        }
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }
        pub fn stream_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.stream_name = Some(input.into());
            self
        }
        pub fn set_stream_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.stream_name = input;
            self
        }
        /// Consumes the builder and constructs a [`CloudWatchLogsConfig`](crate::model::CloudWatchLogsConfig)
        pub fn build(self) -> crate::model::CloudWatchLogsConfig {
            crate::model::CloudWatchLogsConfig {
                status: self.status,
                group_name: self.group_name,
                stream_name: self.stream_name,
            }
        }
    }
}
impl CloudWatchLogsConfig {
    /// Creates a new builder-style object to manufacture [`CloudWatchLogsConfig`](crate::model::CloudWatchLogsConfig)
    pub fn builder() -> crate::model::cloud_watch_logs_config::Builder {
        crate::model::cloud_watch_logs_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EnvironmentImage {
    pub name: std::option::Option<std::string::String>,
    pub description: std::option::Option<std::string::String>,
    pub versions: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for EnvironmentImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EnvironmentImage");
        formatter.field("name", &self.name);
        formatter.field("description", &self.description);
        formatter.field("versions", &self.versions);
        formatter.finish()
    }
}
/// See [`EnvironmentImage`](crate::model::EnvironmentImage)
pub mod environment_image {
    /// A builder for [`EnvironmentImage`](crate::model::EnvironmentImage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) description: std::option::Option<std::string::String>,
        pub(crate) versions: std::option::Option<std::vec::Vec<std::string::String>>,
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
        /// Appends an item to `versions`.
        pub fn versions(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.versions.unwrap_or_default();
            v.push(input.into());
            self.versions = Some(v);
            self
        }
        pub fn set_versions(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.versions = input;
            self
        }
        /// Consumes the builder and constructs a [`EnvironmentImage`](crate::model::EnvironmentImage)
        pub fn build(self) -> crate::model::EnvironmentImage {
            crate::model::EnvironmentImage {
                name: self.name,
                description: self.description,
                versions: self.versions,
            }
        }
    }
}
impl EnvironmentImage {
    /// Creates a new builder-style object to manufacture [`EnvironmentImage`](crate::model::EnvironmentImage)
    pub fn builder() -> crate::model::environment_image::Builder {
        crate::model::environment_image::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EnvironmentLanguage {
    pub language: std::option::Option<crate::model::LanguageType>,
    pub images: std::option::Option<std::vec::Vec<crate::model::EnvironmentImage>>,
}
impl std::fmt::Debug for EnvironmentLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EnvironmentLanguage");
        formatter.field("language", &self.language);
        formatter.field("images", &self.images);
        formatter.finish()
    }
}
/// See [`EnvironmentLanguage`](crate::model::EnvironmentLanguage)
pub mod environment_language {
    /// A builder for [`EnvironmentLanguage`](crate::model::EnvironmentLanguage)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) language: std::option::Option<crate::model::LanguageType>,
        pub(crate) images: std::option::Option<std::vec::Vec<crate::model::EnvironmentImage>>,
    }
    impl Builder {
        pub fn language(mut self, input: crate::model::LanguageType) -> Self {
            self.language = Some(input);
            self
        }
        pub fn set_language(mut self, input: std::option::Option<crate::model::LanguageType>) -> Self {
            self.language = input;
            self
        }
        /// Appends an item to `images`.
        pub fn images(mut self, input: impl Into<crate::model::EnvironmentImage>) -> Self {
            let mut v = self.images.unwrap_or_default();
            v.push(input.into());
            self.images = Some(v);
            self
        }
        pub fn set_images(mut self, input: std::option::Option<std::vec::Vec<crate::model::EnvironmentImage>>) -> Self {
            self.images = input;
            self
        }
        /// Consumes the builder and constructs a [`EnvironmentLanguage`](crate::model::EnvironmentLanguage)
        pub fn build(self) -> crate::model::EnvironmentLanguage {
            crate::model::EnvironmentLanguage {
                language: self.language,
                images: self.images,
            }
        }
    }
}
impl EnvironmentLanguage {
    /// Creates a new builder-style object to manufacture [`EnvironmentLanguage`](crate::model::EnvironmentLanguage)
    pub fn builder() -> crate::model::environment_language::Builder {
        crate::model::environment_language::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EnvironmentPlatform {
    pub platform: std::option::Option<crate::model::PlatformType>,
    pub languages: std::option::Option<std::vec::Vec<crate::model::EnvironmentLanguage>>,
}
impl std::fmt::Debug for EnvironmentPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EnvironmentPlatform");
        formatter.field("platform", &self.platform);
        formatter.field("languages", &self.languages);
        formatter.finish()
    }
}
/// See [`EnvironmentPlatform`](crate::model::EnvironmentPlatform)
pub mod environment_platform {
    /// A builder for [`EnvironmentPlatform`](crate::model::EnvironmentPlatform)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) platform: std::option::Option<crate::model::PlatformType>,
        pub(crate) languages: std::option::Option<std::vec::Vec<crate::model::EnvironmentLanguage>>,
    }
    impl Builder {
        pub fn platform(mut self, input: crate::model::PlatformType) -> Self {
            self.platform = Some(input);
            self
        }
        pub fn set_platform(mut self, input: std::option::Option<crate::model::PlatformType>) -> Self {
            self.platform = input;
            self
        }
        /// Appends an item to `languages`.
        pub fn languages(mut self, input: impl Into<crate::model::EnvironmentLanguage>) -> Self {
            let mut v = self.languages.unwrap_or_default();
            v.push(input.into());
            self.languages = Some(v);
            self
        }
        pub fn set_languages(mut self, input: std::option::Option<std::vec::Vec<crate::model::EnvironmentLanguage>>) -> Self {
            self.languages = input;
            self
        }
        /// Consumes the builder and constructs a [`EnvironmentPlatform`](crate::model::EnvironmentPlatform)
        pub fn build(self) -> crate::model::EnvironmentPlatform {
            crate::model::EnvironmentPlatform {
                platform: self.platform,
                languages: self.languages,
            }
        }
    }
}
impl EnvironmentPlatform {
    /// Creates a new builder-style object to manufacture [`EnvironmentPlatform`](crate::model::EnvironmentPlatform)
    pub fn builder() -> crate::model::environment_platform::Builder {
        crate::model::environment_platform::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct EnvironmentVariable {
    pub name: std::option::Option<std::string::String>,
    pub value: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::EnvironmentVariableType>,
}
impl std::fmt::Debug for EnvironmentVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("EnvironmentVariable");
        formatter.field("name", &self.name);
        formatter.field("value", &self.value);
        formatter.field("type", &self.r#type);
        formatter.finish()
    }
}
/// See [`EnvironmentVariable`](crate::model::EnvironmentVariable)
pub mod environment_variable {
    /// A builder for [`EnvironmentVariable`](crate::model::EnvironmentVariable)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::EnvironmentVariableType>,
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
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        pub fn r#type(mut self, input: crate::model::EnvironmentVariableType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::EnvironmentVariableType>) -> Self {
            self.r#type = input;
            self
        }
        /// Consumes the builder and constructs a [`EnvironmentVariable`](crate::model::EnvironmentVariable)
        pub fn build(self) -> crate::model::EnvironmentVariable {
            crate::model::EnvironmentVariable {
                name: self.name,
                value: self.value,
                r#type: self.r#type,
            }
        }
    }
}
impl EnvironmentVariable {
    /// Creates a new builder-style object to manufacture [`EnvironmentVariable`](crate::model::EnvironmentVariable)
    pub fn builder() -> crate::model::environment_variable::Builder {
        crate::model::environment_variable::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ExportedEnvironmentVariable {
    pub name: std::option::Option<std::string::String>,
    pub value: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ExportedEnvironmentVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ExportedEnvironmentVariable");
        formatter.field("name", &self.name);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
/// See [`ExportedEnvironmentVariable`](crate::model::ExportedEnvironmentVariable)
pub mod exported_environment_variable {
    /// A builder for [`ExportedEnvironmentVariable`](crate::model::ExportedEnvironmentVariable)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
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
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`ExportedEnvironmentVariable`](crate::model::ExportedEnvironmentVariable)
        pub fn build(self) -> crate::model::ExportedEnvironmentVariable {
            crate::model::ExportedEnvironmentVariable {
                name: self.name,
                value: self.value,
            }
        }
    }
}
impl ExportedEnvironmentVariable {
    /// Creates a new builder-style object to manufacture [`ExportedEnvironmentVariable`](crate::model::ExportedEnvironmentVariable)
    pub fn builder() -> crate::model::exported_environment_variable::Builder {
        crate::model::exported_environment_variable::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct GitSubmodulesConfig {
    pub fetch_submodules: std::option::Option<bool>,
}
impl std::fmt::Debug for GitSubmodulesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("GitSubmodulesConfig");
        formatter.field("fetch_submodules", &self.fetch_submodules);
        formatter.finish()
    }
}
/// See [`GitSubmodulesConfig`](crate::model::GitSubmodulesConfig)
pub mod git_submodules_config {
    /// A builder for [`GitSubmodulesConfig`](crate::model::GitSubmodulesConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) fetch_submodules: std::option::Option<bool>,
    }
    impl Builder {
        pub fn fetch_submodules(mut self, input: bool) -> Self {
            self.fetch_submodules = Some(input);
            self
        }
        pub fn set_fetch_submodules(mut self, input: std::option::Option<bool>) -> Self {
            self.fetch_submodules = input;
            self
        }
        /// Consumes the builder and constructs a [`GitSubmodulesConfig`](crate::model::GitSubmodulesConfig)
        pub fn build(self) -> crate::model::GitSubmodulesConfig {
            crate::model::GitSubmodulesConfig {
                fetch_submodules: self.fetch_submodules,
            }
        }
    }
}
impl GitSubmodulesConfig {
    /// Creates a new builder-style object to manufacture [`GitSubmodulesConfig`](crate::model::GitSubmodulesConfig)
    pub fn builder() -> crate::model::git_submodules_config::Builder {
        crate::model::git_submodules_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct LogsConfig {
    pub cloud_watch_logs: std::option::Option<crate::model::CloudWatchLogsConfig>,
    pub s3_logs: std::option::Option<crate::model::S3LogsConfig>,
}
impl std::fmt::Debug for LogsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("LogsConfig");
        formatter.field("cloud_watch_logs", &self.cloud_watch_logs);
        formatter.field("s3_logs", &self.s3_logs);
        formatter.finish()
    }
}
/// See [`LogsConfig`](crate::model::LogsConfig)
pub mod logs_config {
    /// A builder for [`LogsConfig`](crate::model::LogsConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) cloud_watch_logs: std::option::Option<crate::model::CloudWatchLogsConfig>,
        pub(crate) s3_logs: std::option::Option<crate::model::S3LogsConfig>,
    }
    impl Builder {
        pub fn cloud_watch_logs(mut self, input: crate::model::CloudWatchLogsConfig) -> Self {
            self.cloud_watch_logs = Some(input);
            self
        }
        pub fn set_cloud_watch_logs(mut self, input: std::option::Option<crate::model::CloudWatchLogsConfig>) -> Self {
            self.cloud_watch_logs = input;
            self
        }
        pub fn s3_logs(mut self, input: crate::model::S3LogsConfig) -> Self {
            self.s3_logs = Some(input);
            self
        }
        pub fn set_s3_logs(mut self, input: std::option::Option<crate::model::S3LogsConfig>) -> Self {
            self.s3_logs = input;
            self
        }
        /// Consumes the builder and constructs a [`LogsConfig`](crate::model::LogsConfig)
        pub fn build(self) -> crate::model::LogsConfig {
            crate::model::LogsConfig {
                cloud_watch_logs: self.cloud_watch_logs,
                s3_logs: self.s3_logs,
            }
        }
    }
}
impl LogsConfig {
    /// Creates a new builder-style object to manufacture [`LogsConfig`](crate::model::LogsConfig)
    pub fn builder() -> crate::model::logs_config::Builder {
        crate::model::logs_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct LogsLocation {
    pub group_name: std::option::Option<std::string::String>,
    pub stream_name: std::option::Option<std::string::String>,
    pub deep_link: std::option::Option<std::string::String>,
    pub s3_deep_link: std::option::Option<std::string::String>,
    pub cloud_watch_logs_arn: std::option::Option<std::string::String>,
    pub s3_logs_arn: std::option::Option<std::string::String>,
    pub cloud_watch_logs: std::option::Option<crate::model::CloudWatchLogsConfig>,
    pub s3_logs: std::option::Option<crate::model::S3LogsConfig>,
}
impl std::fmt::Debug for LogsLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("LogsLocation");
        formatter.field("group_name", &self.group_name);
        formatter.field("stream_name", &self.stream_name);
        formatter.field("deep_link", &self.deep_link);
        formatter.field("s3_deep_link", &self.s3_deep_link);
        formatter.field("cloud_watch_logs_arn", &self.cloud_watch_logs_arn);
        formatter.field("s3_logs_arn", &self.s3_logs_arn);
        formatter.field("cloud_watch_logs", &self.cloud_watch_logs);
        formatter.field("s3_logs", &self.s3_logs);
        formatter.finish()
    }
}
/// See [`LogsLocation`](crate::model::LogsLocation)
pub mod logs_location {
    /// A builder for [`LogsLocation`](crate::model::LogsLocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) group_name: std::option::Option<std::string::String>,
        pub(crate) stream_name: std::option::Option<std::string::String>,
        pub(crate) deep_link: std::option::Option<std::string::String>,
        pub(crate) s3_deep_link: std::option::Option<std::string::String>,
        pub(crate) cloud_watch_logs_arn: std::option::Option<std::string::String>,
        pub(crate) s3_logs_arn: std::option::Option<std::string::String>,
        pub(crate) cloud_watch_logs: std::option::Option<crate::model::CloudWatchLogsConfig>,
        pub(crate) s3_logs: std::option::Option<crate::model::S3LogsConfig>,
    }
    impl Builder {
        pub fn group_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.group_name = Some(input.into());
            self
        }
        pub fn set_group_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.group_name = input;
            self
        }
        pub fn stream_name(mut self, input: impl Into<std::string::String>) -> Self {
            self.stream_name = Some(input.into());
            self
        }
        pub fn set_stream_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.stream_name = input;
            self
        }
        pub fn deep_link(mut self, input: impl Into<std::string::String>) -> Self {
            self.deep_link = Some(input.into());
            self
        }
        pub fn set_deep_link(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.deep_link = input;
            self
        }
        pub fn s3_deep_link(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_deep_link = Some(input.into());
            self
        }
        pub fn set_s3_deep_link(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_deep_link = input;
            self
        }
        pub fn cloud_watch_logs_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.cloud_watch_logs_arn = Some(input.into());
            self
        }
        pub fn set_cloud_watch_logs_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.cloud_watch_logs_arn = input;
            self
        }
        pub fn s3_logs_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.s3_logs_arn = Some(input.into());
            self
        }
        pub fn set_s3_logs_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.s3_logs_arn = input;
            self
        }
        pub fn cloud_watch_logs(mut self, input: crate::model::CloudWatchLogsConfig) -> Self {
            self.cloud_watch_logs = Some(input);
            self
        }
        pub fn set_cloud_watch_logs(mut self, input: std::option::Option<crate::model::CloudWatchLogsConfig>) -> Self {
            self.cloud_watch_logs = input;
            self
        }
        pub fn s3_logs(mut self, input: crate::model::S3LogsConfig) -> Self {
            self.s3_logs = Some(input);
            self
        }
        pub fn set_s3_logs(mut self, input: std::option::Option<crate::model::S3LogsConfig>) -> Self {
            self.s3_logs = input;
            self
        }
        /// Consumes the builder and constructs a [`LogsLocation`](crate::model::LogsLocation)
        pub fn build(self) -> crate::model::LogsLocation {
            crate::model::LogsLocation {
                group_name: self.group_name,
                stream_name: self.stream_name,
                deep_link: self.deep_link,
                s3_deep_link: self.s3_deep_link,
                cloud_watch_logs_arn: self.cloud_watch_logs_arn,
                s3_logs_arn: self.s3_logs_arn,
                cloud_watch_logs: self.cloud_watch_logs,
                s3_logs: self.s3_logs,
            }
        }
    }
}
impl LogsLocation {
    /// Creates a new builder-style object to manufacture [`LogsLocation`](crate::model::LogsLocation)
    pub fn builder() -> crate::model::logs_location::Builder {
        crate::model::logs_location::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct NetworkInterface {
    pub subnet_id: std::option::Option<std::string::String>,
    pub network_interface_id: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for NetworkInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("NetworkInterface");
        formatter.field("subnet_id", &self.subnet_id);
        formatter.field("network_interface_id", &self.network_interface_id);
        formatter.finish()
    }
}
/// See [`NetworkInterface`](crate::model::NetworkInterface)
pub mod network_interface {
    /// A builder for [`NetworkInterface`](crate::model::NetworkInterface)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) subnet_id: std::option::Option<std::string::String>,
        pub(crate) network_interface_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn subnet_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.subnet_id = Some(input.into());
            self
        }
        pub fn set_subnet_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.subnet_id = input;
            self
        }
        pub fn network_interface_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.network_interface_id = Some(input.into());
            self
        }
        pub fn set_network_interface_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.network_interface_id = input;
            self
        }
        /// Consumes the builder and constructs a [`NetworkInterface`](crate::model::NetworkInterface)
        pub fn build(self) -> crate::model::NetworkInterface {
            crate::model::NetworkInterface {
                subnet_id: self.subnet_id,
                network_interface_id: self.network_interface_id,
            }
        }
    }
}
impl NetworkInterface {
    /// Creates a new builder-style object to manufacture [`NetworkInterface`](crate::model::NetworkInterface)
    pub fn builder() -> crate::model::network_interface::Builder {
        crate::model::network_interface::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct PhaseContext {
    pub status_code: std::option::Option<std::string::String>,
    pub message: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for PhaseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("PhaseContext");
        formatter.field("status_code", &self.status_code);
        formatter.field("message", &self.message);
        formatter.finish()
    }
}
/// See [`PhaseContext`](crate::model::PhaseContext)
pub mod phase_context {
    /// A builder for [`PhaseContext`](crate::model::PhaseContext)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status_code: std::option::Option<std::string::String>,
        pub(crate) message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status_code(mut self, input: impl Into<std::string::String>) -> Self {
            self.status_code = Some(input.into());
            self
        }
        pub fn set_status_code(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status_code = input;
            self
        }
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        /// Consumes the builder and constructs a [`PhaseContext`](crate::model::PhaseContext)
        pub fn build(self) -> crate::model::PhaseContext {
            crate::model::PhaseContext {
                status_code: self.status_code,
                message: self.message,
            }
        }
    }
}
impl PhaseContext {
    /// Creates a new builder-style object to manufacture [`PhaseContext`](crate::model::PhaseContext)
    pub fn builder() -> crate::model::phase_context::Builder {
        crate::model::phase_context::Builder::default()
    }
}

/// Information about a build project.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Project {
    /// The name of the build project.
    pub name: std::option::Option<std::string::String>,
    /// The Amazon Resource Name (ARN) of the build project.
    pub arn: std::option::Option<std::string::String>,
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
    /// Minutes, from 5 to 480, before CodeBuild times out a build that has not completed.
    pub timeout_in_minutes: std::option::Option<i32>,
    pub queued_timeout_in_minutes: std::option::Option<i32>,
    pub encryption_key: std::option::Option<std::string::String>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    /// When the build project was created.
    pub created: std::option::Option<smithy_types::Instant>,
    pub last_modified: std::option::Option<smithy_types::Instant>,
    pub webhook: std::option::Option<crate::model::Webhook>,
    pub vpc_config: std::option::Option<crate::model::VpcConfig>,
    pub badge: std::option::Option<crate::model::ProjectBadge>,
    pub logs_config: std::option::Option<crate::model::LogsConfig>,
    pub file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
}
impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Project");
        formatter.field("name", &self.name);
        formatter.field("arn", &self.arn);
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
        formatter.field("created", &self.created);
        formatter.field("last_modified", &self.last_modified);
        formatter.field("webhook", &self.webhook);
        formatter.field("vpc_config", &self.vpc_config);
        formatter.field("badge", &self.badge);
        formatter.field("logs_config", &self.logs_config);
        formatter.field("file_system_locations", &self.file_system_locations);
        formatter.finish()
    }
}
/// See [`Project`](crate::model::Project)
pub mod project {
    /// A builder for [`Project`](crate::model::Project)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) arn: std::option::Option<std::string::String>,
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
        pub(crate) created: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified: std::option::Option<smithy_types::Instant>,
        pub(crate) webhook: std::option::Option<crate::model::Webhook>,
        pub(crate) vpc_config: std::option::Option<crate::model::VpcConfig>,
        pub(crate) badge: std::option::Option<crate::model::ProjectBadge>,
        pub(crate) logs_config: std::option::Option<crate::model::LogsConfig>,
        pub(crate) file_system_locations: std::option::Option<std::vec::Vec<crate::model::ProjectFileSystemLocation>>,
    }
    impl Builder {
        /// The name of the build project.
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        /// The Amazon Resource Name (ARN) of the build project.
        pub fn arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        pub fn set_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.arn = input;
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
        /// Minutes, from 5 to 480, before CodeBuild times out a build that has not completed.
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
        /// When the build project was created.
        pub fn created(mut self, input: smithy_types::Instant) -> Self {
            self.created = Some(input);
            self
        }
        pub fn set_created(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created = input;
            self
        }
        pub fn last_modified(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified = Some(input);
            self
        }
        pub fn set_last_modified(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified = input;
            self
        }
        pub fn webhook(mut self, input: crate::model::Webhook) -> Self {
            self.webhook = Some(input);
            self
        }
        pub fn set_webhook(mut self, input: std::option::Option<crate::model::Webhook>) -> Self {
            self.webhook = input;
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
        pub fn badge(mut self, input: crate::model::ProjectBadge) -> Self {
            self.badge = Some(input);
            self
        }
        pub fn set_badge(mut self, input: std::option::Option<crate::model::ProjectBadge>) -> Self {
            self.badge = input;
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
        /// Consumes the builder and constructs a [`Project`](crate::model::Project)
        pub fn build(self) -> crate::model::Project {
            crate::model::Project {
                name: self.name,
                arn: self.arn,
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
                created: self.created,
                last_modified: self.last_modified,
                webhook: self.webhook,
                vpc_config: self.vpc_config,
                badge: self.badge,
                logs_config: self.logs_config,
                file_system_locations: self.file_system_locations,
            }
        }
    }
}
impl Project {
    /// Creates a new builder-style object to manufacture [`Project`](crate::model::Project)
    pub fn builder() -> crate::model::project::Builder {
        crate::model::project::Builder::default()
    }
}

/// Build output artifacts for a build project.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectArtifacts {
    pub r#type: std::option::Option<crate::model::ArtifactsType>,
    pub location: std::option::Option<std::string::String>,
    pub path: std::option::Option<std::string::String>,
    pub namespace_type: std::option::Option<crate::model::ArtifactNamespace>,
    pub name: std::option::Option<std::string::String>,
    pub packaging: std::option::Option<crate::model::ArtifactPackaging>,
    pub override_artifact_name: std::option::Option<bool>,
    pub encryption_disabled: std::option::Option<bool>,
    pub artifact_identifier: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ProjectArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectArtifacts");
        formatter.field("type", &self.r#type);
        formatter.field("location", &self.location);
        formatter.field("path", &self.path);
        formatter.field("namespace_type", &self.namespace_type);
        formatter.field("name", &self.name);
        formatter.field("packaging", &self.packaging);
        formatter.field("override_artifact_name", &self.override_artifact_name);
        formatter.field("encryption_disabled", &self.encryption_disabled);
        formatter.field("artifact_identifier", &self.artifact_identifier);
        formatter.finish()
    }
}
/// See [`ProjectArtifacts`](crate::model::ProjectArtifacts)
pub mod project_artifacts {
    /// A builder for [`ProjectArtifacts`](crate::model::ProjectArtifacts)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::ArtifactsType>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) path: std::option::Option<std::string::String>,
        pub(crate) namespace_type: std::option::Option<crate::model::ArtifactNamespace>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) packaging: std::option::Option<crate::model::ArtifactPackaging>,
        pub(crate) override_artifact_name: std::option::Option<bool>,
        pub(crate) encryption_disabled: std::option::Option<bool>,
        pub(crate) artifact_identifier: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::ArtifactsType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ArtifactsType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        pub fn path(mut self, input: impl Into<std::string::String>) -> Self {
            self.path = Some(input.into());
            self
        }
        pub fn set_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.path = input;
            self
        }
        pub fn namespace_type(mut self, input: crate::model::ArtifactNamespace) -> Self {
            self.namespace_type = Some(input);
            self
        }
        pub fn set_namespace_type(mut self, input: std::option::Option<crate::model::ArtifactNamespace>) -> Self {
            self.namespace_type = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn packaging(mut self, input: crate::model::ArtifactPackaging) -> Self {
            self.packaging = Some(input);
            self
        }
        pub fn set_packaging(mut self, input: std::option::Option<crate::model::ArtifactPackaging>) -> Self {
            self.packaging = input;
            self
        }
        pub fn override_artifact_name(mut self, input: bool) -> Self {
            self.override_artifact_name = Some(input);
            self
        }
        pub fn set_override_artifact_name(mut self, input: std::option::Option<bool>) -> Self {
            self.override_artifact_name = input;
            self
        }
        pub fn encryption_disabled(mut self, input: bool) -> Self {
            self.encryption_disabled = Some(input);
            self
        }
        pub fn set_encryption_disabled(mut self, input: std::option::Option<bool>) -> Self {
            self.encryption_disabled = input;
            self
        }
        pub fn artifact_identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.artifact_identifier = Some(input.into());
            self
        }
        pub fn set_artifact_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.artifact_identifier = input;
            self
        }
        /// Consumes the builder and constructs a [`ProjectArtifacts`](crate::model::ProjectArtifacts)
        pub fn build(self) -> crate::model::ProjectArtifacts {
            crate::model::ProjectArtifacts {
                r#type: self.r#type,
                location: self.location,
                path: self.path,
                namespace_type: self.namespace_type,
                name: self.name,
                packaging: self.packaging,
                override_artifact_name: self.override_artifact_name,
                encryption_disabled: self.encryption_disabled,
                artifact_identifier: self.artifact_identifier,
            }
        }
    }
}
impl ProjectArtifacts {
    /// Creates a new builder-style object to manufacture [`ProjectArtifacts`](crate::model::ProjectArtifacts)
    pub fn builder() -> crate::model::project_artifacts::Builder {
        crate::model::project_artifacts::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectBadge {
    pub badge_enabled: std::option::Option<bool>,
    pub badge_request_url: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ProjectBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectBadge");
        formatter.field("badge_enabled", &self.badge_enabled);
        formatter.field("badge_request_url", &self.badge_request_url);
        formatter.finish()
    }
}
/// See [`ProjectBadge`](crate::model::ProjectBadge)
pub mod project_badge {
    /// A builder for [`ProjectBadge`](crate::model::ProjectBadge)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) badge_enabled: std::option::Option<bool>,
        pub(crate) badge_request_url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn badge_enabled(mut self, input: bool) -> Self {
            self.badge_enabled = Some(input);
            self
        }
        pub fn set_badge_enabled(mut self, input: std::option::Option<bool>) -> Self {
            self.badge_enabled = input;
            self
        }
        pub fn badge_request_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.badge_request_url = Some(input.into());
            self
        }
        pub fn set_badge_request_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.badge_request_url = input;
            self
        }
        /// Consumes the builder and constructs a [`ProjectBadge`](crate::model::ProjectBadge)
        pub fn build(self) -> crate::model::ProjectBadge {
            crate::model::ProjectBadge {
                badge_enabled: self.badge_enabled,
                badge_request_url: self.badge_request_url,
            }
        }
    }
}
impl ProjectBadge {
    /// Creates a new builder-style object to manufacture [`ProjectBadge`](crate::model::ProjectBadge)
    pub fn builder() -> crate::model::project_badge::Builder {
        crate::model::project_badge::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectCache {
    pub r#type: std::option::Option<crate::model::CacheType>,
    pub location: std::option::Option<std::string::String>,
    pub modes: std::option::Option<std::vec::Vec<crate::model::CacheMode>>,
}
impl std::fmt::Debug for ProjectCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectCache");
        formatter.field("type", &self.r#type);
        formatter.field("location", &self.location);
        formatter.field("modes", &self.modes);
        formatter.finish()
    }
}
/// See [`ProjectCache`](crate::model::ProjectCache)
pub mod project_cache {
    /// A builder for [`ProjectCache`](crate::model::ProjectCache)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::CacheType>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) modes: std::option::Option<std::vec::Vec<crate::model::CacheMode>>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::CacheType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::CacheType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        /// Appends an item to `modes`.
        pub fn modes(mut self, input: impl Into<crate::model::CacheMode>) -> Self {
            let mut v = self.modes.unwrap_or_default();
            v.push(input.into());
            self.modes = Some(v);
            self
        }
        pub fn set_modes(mut self, input: std::option::Option<std::vec::Vec<crate::model::CacheMode>>) -> Self {
            self.modes = input;
            self
        }
        /// Consumes the builder and constructs a [`ProjectCache`](crate::model::ProjectCache)
        pub fn build(self) -> crate::model::ProjectCache {
            crate::model::ProjectCache {
                r#type: self.r#type,
                location: self.location,
                modes: self.modes,
            }
        }
    }
}
impl ProjectCache {
    /// Creates a new builder-style object to manufacture [`ProjectCache`](crate::model::ProjectCache)
    pub fn builder() -> crate::model::project_cache::Builder {
        crate::model::project_cache::Builder::default()
    }
}

/// The build environment of a build project.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectEnvironment {
    pub r#type: std::option::Option<crate::model::EnvironmentType>,
    /// The image tag or image digest that identifies the Docker image to use.
    pub image: std::option::Option<std::string::String>,
    pub compute_type: std::option::Option<crate::model::ComputeType>,
    pub environment_variables: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>,
    /// Enables running the Docker daemon inside a Docker container.
    pub privileged_mode: std::option::Option<bool>,
    pub certificate: std::option::Option<std::string::String>,
    pub registry_credential: std::option::Option<crate::model::RegistryCredential>,
    pub image_pull_credentials_type: std::option::Option<crate::model::ImagePullCredentialsType>,
}
impl std::fmt::Debug for ProjectEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectEnvironment");
        formatter.field("type", &self.r#type);
        formatter.field("image", &self.image);
        formatter.field("compute_type", &self.compute_type);
        formatter.field("environment_variables", &self.environment_variables);
        formatter.field("privileged_mode", &self.privileged_mode);
        formatter.field("certificate", &self.certificate);
        formatter.field("registry_credential", &self.registry_credential);
        formatter.field("image_pull_credentials_type", &self.image_pull_credentials_type);
        formatter.finish()
    }
}
/// See [`ProjectEnvironment`](crate::model::ProjectEnvironment)
pub mod project_environment {
    /// A builder for [`ProjectEnvironment`](crate::model::ProjectEnvironment)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::EnvironmentType>,
        pub(crate) image: std::option::Option<std::string::String>,
        pub(crate) compute_type: std::option::Option<crate::model::ComputeType>,
        pub(crate) environment_variables: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>,
        pub(crate) privileged_mode: std::option::Option<bool>,
        pub(crate) certificate: std::option::Option<std::string::String>,
        pub(crate) registry_credential: std::option::Option<crate::model::RegistryCredential>,
        pub(crate) image_pull_credentials_type: std::option::Option<crate::model::ImagePullCredentialsType>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::EnvironmentType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::EnvironmentType>) -> Self {
            self.r#type = input;
            self
        }
        /// The image tag or image digest that identifies the Docker image to use.
        pub fn image(mut self, input: impl Into<std::string::String>) -> Self {
            self.image = Some(input.into());
            self
        }
        pub fn set_image(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.image = input;
            self
        }
        pub fn compute_type(mut self, input: crate::model::ComputeType) -> Self {
            self.compute_type = Some(input);
            self
        }
        pub fn set_compute_type(mut self, input: std::option::Option<crate::model::ComputeType>) -> Self {
            self.compute_type = input;
            self
        }
        /// Appends an item to `environment_variables`.
        pub fn environment_variables(mut self, input: impl Into<crate::model::EnvironmentVariable>) -> Self {
            let mut v = self.environment_variables.unwrap_or_default();
            v.push(input.into());
            self.environment_variables = Some(v);
            self
        }
        pub fn set_environment_variables(mut self, input: std::option::Option<std::vec::Vec<crate::model::EnvironmentVariable>>) -> Self {
            self.environment_variables = input;
            self
        }
        /// Enables running the Docker daemon inside a Docker container.
        pub fn privileged_mode(mut self, input: bool) -> Self {
            self.privileged_mode = Some(input);
            self
        }
        pub fn set_privileged_mode(mut self, input: std::option::Option<bool>) -> Self {
            self.privileged_mode = input;
            self
        }
        pub fn certificate(mut self, input: impl Into<std::string::String>) -> Self {
            self.certificate = Some(input.into());
            self
        }
        pub fn set_certificate(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.certificate = input;
            self
        }
        pub fn registry_credential(mut self, input: crate::model::RegistryCredential) -> Self {
            self.registry_credential = Some(input);
            self
        }
        pub fn set_registry_credential(mut self, input: std::option::Option<crate::model::RegistryCredential>) -> Self {
            self.registry_credential = input;
            self
        }
        pub fn image_pull_credentials_type(mut self, input: crate::model::ImagePullCredentialsType) -> Self {
            self.image_pull_credentials_type = Some(input);
            self
        }
        pub fn set_image_pull_credentials_type(mut self, input: std::option::Option<crate::model::ImagePullCredentialsType>) -> Self {
            self.image_pull_credentials_type = input;
            self
        }
        /// Consumes the builder and constructs a [`ProjectEnvironment`](crate::model::ProjectEnvironment)
        pub fn build(self) -> crate::model::ProjectEnvironment {
            crate::model::ProjectEnvironment {
                r#type: self.r#type,
                image: self.image,
                compute_type: self.compute_type,
                environment_variables: self.environment_variables,
                privileged_mode: self.privileged_mode,
                certificate: self.certificate,
                registry_credential: self.registry_credential,
                image_pull_credentials_type: self.image_pull_credentials_type,
            }
        }
    }
}
impl ProjectEnvironment {
    /// Creates a new builder-style object to manufacture [`ProjectEnvironment`](crate::model::ProjectEnvironment)
    pub fn builder() -> crate::model::project_environment::Builder {
        crate::model::project_environment::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectFileSystemLocation {
    pub r#type: std::option::Option<crate::model::FileSystemType>,
    pub location: std::option::Option<std::string::String>,
    pub mount_point: std::option::Option<std::string::String>,
    pub identifier: std::option::Option<std::string::String>,
    pub mount_options: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ProjectFileSystemLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectFileSystemLocation");
        formatter.field("type", &self.r#type);
        formatter.field("location", &self.location);
        formatter.field("mount_point", &self.mount_point);
        formatter.field("identifier", &self.identifier);
        formatter.field("mount_options", &self.mount_options);
        formatter.finish()
    }
}
/// See [`ProjectFileSystemLocation`](crate::model::ProjectFileSystemLocation)
pub mod project_file_system_location {
    /// A builder for [`ProjectFileSystemLocation`](crate::model::ProjectFileSystemLocation)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::FileSystemType>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) mount_point: std::option::Option<std::string::String>,
        pub(crate) identifier: std::option::Option<std::string::String>,
        pub(crate) mount_options: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::FileSystemType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::FileSystemType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        pub fn mount_point(mut self, input: impl Into<std::string::String>) -> Self {
            self.mount_point = Some(input.into());
            self
        }
        pub fn set_mount_point(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mount_point = input;
            self
        }
        pub fn identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.identifier = Some(input.into());
            self
        }
        pub fn set_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.identifier = input;
            self
        }
        pub fn mount_options(mut self, input: impl Into<std::string::String>) -> Self {
            self.mount_options = Some(input.into());
            self
        }
        pub fn set_mount_options(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.mount_options = input;
            self
        }
        /// Consumes the builder and constructs a [`ProjectFileSystemLocation`](crate::model::ProjectFileSystemLocation)
        pub fn build(self) -> crate::model::ProjectFileSystemLocation {
            crate::model::ProjectFileSystemLocation {
                r#type: self.r#type,
                location: self.location,
                mount_point: self.mount_point,
                identifier: self.identifier,
                mount_options: self.mount_options,
            }
        }
    }
}
impl ProjectFileSystemLocation {
    /// Creates a new builder-style object to manufacture [`ProjectFileSystemLocation`](crate::model::ProjectFileSystemLocation)
    pub fn builder() -> crate::model::project_file_system_location::Builder {
        crate::model::project_file_system_location::Builder::default()
    }
}

/// Information about the build input source code for a build project.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectSource {
    /// The type of repository that contains the source code to be built.
    pub r#type: std::option::Option<crate::model::SourceType>,
    /// Information about the location of the source code to be built.
    pub location: std::option::Option<std::string::String>,
    /// Depth of history to download. Minimum value is 0.
    pub git_clone_depth: std::option::Option<i32>,
    pub git_submodules_config: std::option::Option<crate::model::GitSubmodulesConfig>,
    /// The buildspec file declaration to use for builds of this project.
    pub buildspec: std::option::Option<std::string::String>,
    pub auth: std::option::Option<crate::model::SourceAuth>,
    pub report_build_status: std::option::Option<bool>,
    /// Ignore SSL warnings while connecting to the project source code.
    pub insecure_ssl: std::option::Option<bool>,
    pub source_identifier: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ProjectSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectSource");
        formatter.field("type", &self.r#type);
        formatter.field("location", &self.location);
        formatter.field("git_clone_depth", &self.git_clone_depth);
        formatter.field("git_submodules_config", &self.git_submodules_config);
        formatter.field("buildspec", &self.buildspec);
        formatter.field("auth", &self.auth);
        formatter.field("report_build_status", &self.report_build_status);
        formatter.field("insecure_ssl", &self.insecure_ssl);
        formatter.field("source_identifier", &self.source_identifier);
        formatter.finish()
    }
}
/// See [`ProjectSource`](crate::model::ProjectSource)
pub mod project_source {
    /// A builder for [`ProjectSource`](crate::model::ProjectSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::SourceType>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) git_clone_depth: std::option::Option<i32>,
        pub(crate) git_submodules_config: std::option::Option<crate::model::GitSubmodulesConfig>,
        pub(crate) buildspec: std::option::Option<std::string::String>,
        pub(crate) auth: std::option::Option<crate::model::SourceAuth>,
        pub(crate) report_build_status: std::option::Option<bool>,
        pub(crate) insecure_ssl: std::option::Option<bool>,
        pub(crate) source_identifier: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// The type of repository that contains the source code to be built.
        pub fn r#type(mut self, input: crate::model::SourceType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::SourceType>) -> Self {
            self.r#type = input;
            self
        }
        /// Information about the location of the source code to be built.
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        /// Depth of history to download. Minimum value is 0.
        pub fn git_clone_depth(mut self, input: i32) -> Self {
            self.git_clone_depth = Some(input);
            self
        }
        pub fn set_git_clone_depth(mut self, input: std::option::Option<i32>) -> Self {
            self.git_clone_depth = input;
            self
        }
        pub fn git_submodules_config(mut self, input: crate::model::GitSubmodulesConfig) -> Self {
            self.git_submodules_config = Some(input);
            self
        }
        pub fn set_git_submodules_config(mut self, input: std::option::Option<crate::model::GitSubmodulesConfig>) -> Self {
            self.git_submodules_config = input;
            self
        }
        /// The buildspec file declaration to use for builds of this project.
        pub fn buildspec(mut self, input: impl Into<std::string::String>) -> Self {
            self.buildspec = Some(input.into());
            self
        }
        pub fn set_buildspec(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.buildspec = input;
            self
        }
        pub fn auth(mut self, input: crate::model::SourceAuth) -> Self {
            self.auth = Some(input);
            self
        }
        pub fn set_auth(mut self, input: std::option::Option<crate::model::SourceAuth>) -> Self {
            self.auth = input;
            self
        }
        pub fn report_build_status(mut self, input: bool) -> Self {
            self.report_build_status = Some(input);
            self
        }
        pub fn set_report_build_status(mut self, input: std::option::Option<bool>) -> Self {
            self.report_build_status = input;
            self
        }
        /// Ignore SSL warnings while connecting to the project source code.
        pub fn insecure_ssl(mut self, input: bool) -> Self {
            self.insecure_ssl = Some(input);
            self
        }
        pub fn set_insecure_ssl(mut self, input: std::option::Option<bool>) -> Self {
            self.insecure_ssl = input;
            self
        }
        pub fn source_identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_identifier = Some(input.into());
            self
        }
        pub fn set_source_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_identifier = input;
            self
        }
        /// Consumes the builder and constructs a [`ProjectSource`](crate::model::ProjectSource)
        pub fn build(self) -> crate::model::ProjectSource {
            crate::model::ProjectSource {
                r#type: self.r#type,
                location: self.location,
                git_clone_depth: self.git_clone_depth,
                git_submodules_config: self.git_submodules_config,
                buildspec: self.buildspec,
                auth: self.auth,
                report_build_status: self.report_build_status,
                insecure_ssl: self.insecure_ssl,
                source_identifier: self.source_identifier,
            }
        }
    }
}
impl ProjectSource {
    /// Creates a new builder-style object to manufacture [`ProjectSource`](crate::model::ProjectSource)
    pub fn builder() -> crate::model::project_source::Builder {
        crate::model::project_source::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ProjectSourceVersion {
    pub source_identifier: std::option::Option<std::string::String>,
    pub source_version: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for ProjectSourceVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ProjectSourceVersion");
        formatter.field("source_identifier", &self.source_identifier);
        formatter.field("source_version", &self.source_version);
        formatter.finish()
    }
}
/// See [`ProjectSourceVersion`](crate::model::ProjectSourceVersion)
pub mod project_source_version {
    /// A builder for [`ProjectSourceVersion`](crate::model::ProjectSourceVersion)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) source_identifier: std::option::Option<std::string::String>,
        pub(crate) source_version: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn source_identifier(mut self, input: impl Into<std::string::String>) -> Self {
            self.source_identifier = Some(input.into());
            self
        }
        pub fn set_source_identifier(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.source_identifier = input;
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
        /// Consumes the builder and constructs a [`ProjectSourceVersion`](crate::model::ProjectSourceVersion)
        pub fn build(self) -> crate::model::ProjectSourceVersion {
            crate::model::ProjectSourceVersion {
                source_identifier: self.source_identifier,
                source_version: self.source_version,
            }
        }
    }
}
impl ProjectSourceVersion {
    /// Creates a new builder-style object to manufacture [`ProjectSourceVersion`](crate::model::ProjectSourceVersion)
    pub fn builder() -> crate::model::project_source_version::Builder {
        crate::model::project_source_version::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct RegistryCredential {
    pub credential: std::option::Option<std::string::String>,
    pub credential_provider: std::option::Option<crate::model::CredentialProviderType>,
}
impl std::fmt::Debug for RegistryCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("RegistryCredential");
        formatter.field("credential", &self.credential);
        formatter.field("credential_provider", &self.credential_provider);
        formatter.finish()
    }
}
/// See [`RegistryCredential`](crate::model::RegistryCredential)
pub mod registry_credential {
    /// A builder for [`RegistryCredential`](crate::model::RegistryCredential)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) credential: std::option::Option<std::string::String>,
        pub(crate) credential_provider: std::option::Option<crate::model::CredentialProviderType>,
    }
    impl Builder {
        pub fn credential(mut self, input: impl Into<std::string::String>) -> Self {
            self.credential = Some(input.into());
            self
        }
        pub fn set_credential(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.credential = input;
            self
        }
        pub fn credential_provider(mut self, input: crate::model::CredentialProviderType) -> Self {
            self.credential_provider = Some(input);
            self
        }
        pub fn set_credential_provider(mut self, input: std::option::Option<crate::model::CredentialProviderType>) -> Self {
            self.credential_provider = input;
            self
        }
        /// Consumes the builder and constructs a [`RegistryCredential`](crate::model::RegistryCredential)
        pub fn build(self) -> crate::model::RegistryCredential {
            crate::model::RegistryCredential {
                credential: self.credential,
                credential_provider: self.credential_provider,
            }
        }
    }
}
impl RegistryCredential {
    /// Creates a new builder-style object to manufacture [`RegistryCredential`](crate::model::RegistryCredential)
    pub fn builder() -> crate::model::registry_credential::Builder {
        crate::model::registry_credential::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Report {
    pub arn: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::ReportType>,
    pub name: std::option::Option<std::string::String>,
    pub report_group_arn: std::option::Option<std::string::String>,
    pub execution_id: std::option::Option<std::string::String>,
    pub status: std::option::Option<crate::model::ReportStatusType>,
    pub created: std::option::Option<smithy_types::Instant>,
    pub expired: std::option::Option<smithy_types::Instant>,
    pub export_config: std::option::Option<crate::model::ReportExportConfig>,
    pub truncated: std::option::Option<bool>,
    pub test_summary: std::option::Option<crate::model::TestReportSummary>,
}
impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Report");
        formatter.field("arn", &self.arn);
        formatter.field("type", &self.r#type);
        formatter.field("name", &self.name);
        formatter.field("report_group_arn", &self.report_group_arn);
        formatter.field("execution_id", &self.execution_id);
        formatter.field("status", &self.status);
        formatter.field("created", &self.created);
        formatter.field("expired", &self.expired);
        formatter.field("export_config", &self.export_config);
        formatter.field("truncated", &self.truncated);
        formatter.field("test_summary", &self.test_summary);
        formatter.finish()
    }
}
/// See [`Report`](crate::model::Report)
pub mod report {
    /// A builder for [`Report`](crate::model::Report)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::ReportType>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) report_group_arn: std::option::Option<std::string::String>,
        pub(crate) execution_id: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<crate::model::ReportStatusType>,
        pub(crate) created: std::option::Option<smithy_types::Instant>,
        pub(crate) expired: std::option::Option<smithy_types::Instant>,
        pub(crate) export_config: std::option::Option<crate::model::ReportExportConfig>,
        pub(crate) truncated: std::option::Option<bool>,
        pub(crate) test_summary: std::option::Option<crate::model::TestReportSummary>,
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
        pub fn r#type(mut self, input: crate::model::ReportType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::ReportType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn report_group_arn(mut self, input: impl Into<std::string::String>) -> Self {
            self.report_group_arn = Some(input.into());
            self
        }
        pub fn set_report_group_arn(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.report_group_arn = input;
            self
        }
        pub fn execution_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.execution_id = Some(input.into());
            self
        }
        pub fn set_execution_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.execution_id = input;
            self
        }
        pub fn status(mut self, input: crate::model::ReportStatusType) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::ReportStatusType>) -> Self {
            self.status = input;
            self
        }
        pub fn created(mut self, input: smithy_types::Instant) -> Self {
            self.created = Some(input);
            self
        }
        pub fn set_created(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created = input;
            self
        }
        pub fn expired(mut self, input: smithy_types::Instant) -> Self {
            self.expired = Some(input);
            self
        }
        pub fn set_expired(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.expired = input;
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
        pub fn truncated(mut self, input: bool) -> Self {
            self.truncated = Some(input);
            self
        }
        pub fn set_truncated(mut self, input: std::option::Option<bool>) -> Self {
            self.truncated = input;
            self
        }
        pub fn test_summary(mut self, input: crate::model::TestReportSummary) -> Self {
            self.test_summary = Some(input);
            self
        }
        pub fn set_test_summary(mut self, input: std::option::Option<crate::model::TestReportSummary>) -> Self {
            self.test_summary = input;
            self
        }
        /// Consumes the builder and constructs a [`Report`](crate::model::Report)
        pub fn build(self) -> crate::model::Report {
            crate::model::Report {
                arn: self.arn,
                r#type: self.r#type,
                name: self.name,
                report_group_arn: self.report_group_arn,
                execution_id: self.execution_id,
                status: self.status,
                created: self.created,
                expired: self.expired,
                export_config: self.export_config,
                truncated: self.truncated,
                test_summary: self.test_summary,
            }
        }
    }
}
impl Report {
    /// Creates a new builder-style object to manufacture [`Report`](crate::model::Report)
    pub fn builder() -> crate::model::report::Builder {
        crate::model::report::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ReportExportConfig {
    pub export_config_type: std::option::Option<crate::model::ReportExportConfigType>,
    pub s3_destination: std::option::Option<crate::model::S3ReportExportConfig>,
}
impl std::fmt::Debug for ReportExportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ReportExportConfig");
        formatter.field("export_config_type", &self.export_config_type);
        formatter.field("s3_destination", &self.s3_destination);
        formatter.finish()
    }
}
/// See [`ReportExportConfig`](crate::model::ReportExportConfig)
pub mod report_export_config {
    /// A builder for [`ReportExportConfig`](crate::model::ReportExportConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) export_config_type: std::option::Option<crate::model::ReportExportConfigType>,
        pub(crate) s3_destination: std::option::Option<crate::model::S3ReportExportConfig>,
    }
    impl Builder {
        pub fn export_config_type(mut self, input: crate::model::ReportExportConfigType) -> Self {
            self.export_config_type = Some(input);
            self
        }
        pub fn set_export_config_type(mut self, input: std::option::Option<crate::model::ReportExportConfigType>) -> Self {
            self.export_config_type = input;
            self
        }
        pub fn s3_destination(mut self, input: crate::model::S3ReportExportConfig) -> Self {
            self.s3_destination = Some(input);
            self
        }
        pub fn set_s3_destination(mut self, input: std::option::Option<crate::model::S3ReportExportConfig>) -> Self {
            self.s3_destination = input;
            self
        }
        /// Consumes the builder and constructs a [`ReportExportConfig`](crate::model::ReportExportConfig)
        pub fn build(self) -> crate::model::ReportExportConfig {
            crate::model::ReportExportConfig {
                export_config_type: self.export_config_type,
                s3_destination: self.s3_destination,
            }
        }
    }
}
impl ReportExportConfig {
    /// Creates a new builder-style object to manufacture [`ReportExportConfig`](crate::model::ReportExportConfig)
    pub fn builder() -> crate::model::report_export_config::Builder {
        crate::model::report_export_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ReportFilter {
    pub status: std::option::Option<crate::model::ReportStatusType>,
}
impl std::fmt::Debug for ReportFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ReportFilter");
        formatter.field("status", &self.status);
        formatter.finish()
    }
}
/// See [`ReportFilter`](crate::model::ReportFilter)
pub mod report_filter {
    /// A builder for [`ReportFilter`](crate::model::ReportFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<crate::model::ReportStatusType>,
    }
    impl Builder {
        pub fn status(mut self, input: crate::model::ReportStatusType) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::ReportStatusType>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`ReportFilter`](crate::model::ReportFilter)
        pub fn build(self) -> crate::model::ReportFilter {
            crate::model::ReportFilter {
                status: self.status,
            }
        }
    }
}
impl ReportFilter {
    /// Creates a new builder-style object to manufacture [`ReportFilter`](crate::model::ReportFilter)
    pub fn builder() -> crate::model::report_filter::Builder {
        crate::model::report_filter::Builder::default()
    }
}

/// A group of reports, usually produced by one build project.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct ReportGroup {
    pub arn: std::option::Option<std::string::String>,
    pub name: std::option::Option<std::string::String>,
    pub r#type: std::option::Option<crate::model::ReportType>,
    pub export_config: std::option::Option<crate::model::ReportExportConfig>,
    pub created: std::option::Option<smithy_types::Instant>,
    pub last_modified: std::option::Option<smithy_types::Instant>,
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}
impl std::fmt::Debug for ReportGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("ReportGroup");
        formatter.field("arn", &self.arn);
        formatter.field("name", &self.name);
        formatter.field("type", &self.r#type);
        formatter.field("export_config", &self.export_config);
        formatter.field("created", &self.created);
        formatter.field("last_modified", &self.last_modified);
        formatter.field("tags", &self.tags);
        formatter.finish()
    }
}
/// See [`ReportGroup`](crate::model::ReportGroup)
pub mod report_group {
    /// A builder for [`ReportGroup`](crate::model::ReportGroup)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) r#type: std::option::Option<crate::model::ReportType>,
        pub(crate) export_config: std::option::Option<crate::model::ReportExportConfig>,
        pub(crate) created: std::option::Option<smithy_types::Instant>,
        pub(crate) last_modified: std::option::Option<smithy_types::Instant>,
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
        pub fn created(mut self, input: smithy_types::Instant) -> Self {
            self.created = Some(input);
            self
        }
        pub fn set_created(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.created = input;
            self
        }
        pub fn last_modified(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified = Some(input);
            self
        }
        pub fn set_last_modified(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified = input;
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
        /// Consumes the builder and constructs a [`ReportGroup`](crate::model::ReportGroup)
        pub fn build(self) -> crate::model::ReportGroup {
            crate::model::ReportGroup {
                arn: self.arn,
                name: self.name,
                r#type: self.r#type,
                export_config: self.export_config,
                created: self.created,
                last_modified: self.last_modified,
                tags: self.tags,
            }
        }
    }
}
impl ReportGroup {
    /// Creates a new builder-style object to manufacture [`ReportGroup`](crate::model::ReportGroup)
    pub fn builder() -> crate::model::report_group::Builder {
        crate::model::report_group::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct S3LogsConfig {
    pub status: std::option::Option<crate::model::LogsConfigStatusType>,
    pub location: std::option::Option<std::string::String>,
    pub encryption_disabled: std::option::Option<bool>,
}
impl std::fmt::Debug for S3LogsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("S3LogsConfig");
        formatter.field("status", &self.status);
        formatter.field("location", &self.location);
        formatter.field("encryption_disabled", &self.encryption_disabled);
        formatter.finish()
    }
}
/// See [`S3LogsConfig`](crate::model::S3LogsConfig)
pub mod s3_logs_config {
    /// A builder for [`S3LogsConfig`](crate::model::S3LogsConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<crate::model::LogsConfigStatusType>,
        pub(crate) location: std::option::Option<std::string::String>,
        pub(crate) encryption_disabled: std::option::Option<bool>,
    }
    impl Builder {
        pub fn status(mut self, input: crate::model::LogsConfigStatusType) -> Self {
            self.status = Some(input);
            self
        }
        pub fn set_status(mut self, input: std::option::Option<crate::model::LogsConfigStatusType>) -> Self {
            self.status = input;
            self
        }
        pub fn location(mut self, input: impl Into<std::string::String>) -> Self {
            self.location = Some(input.into());
            self
        }
        pub fn set_location(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.location = input;
            self
        }
        pub fn encryption_disabled(mut self, input: bool) -> Self {
            self.encryption_disabled = Some(input);
            self
        }
        pub fn set_encryption_disabled(mut self, input: std::option::Option<bool>) -> Self {
            self.encryption_disabled = input;
            self
        }
        /// Consumes the builder and constructs a [`S3LogsConfig`](crate::model::S3LogsConfig)
        pub fn build(self) -> crate::model::S3LogsConfig {
            crate::model::S3LogsConfig {
                status: self.status,
                location: self.location,
                encryption_disabled: self.encryption_disabled,
            }
        }
    }
}
impl S3LogsConfig {
    /// Creates a new builder-style object to manufacture [`S3LogsConfig`](crate::model::S3LogsConfig)
    pub fn builder() -> crate::model::s3_logs_config::Builder {
        crate::model::s3_logs_config::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct S3ReportExportConfig {
    pub bucket: std::option::Option<std::string::String>,
    pub path: std::option::Option<std::string::String>,
    pub packaging: std::option::Option<crate::model::ReportPackagingType>,
    pub encryption_key: std::option::Option<std::string::String>,
    pub encryption_disabled: std::option::Option<bool>,
}
impl std::fmt::Debug for S3ReportExportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("S3ReportExportConfig");
        formatter.field("bucket", &self.bucket);
        formatter.field("path", &self.path);
        formatter.field("packaging", &self.packaging);
        formatter.field("encryption_key", &self.encryption_key);
        formatter.field("encryption_disabled", &self.encryption_disabled);
        formatter.finish()
    }
}
/// See [`S3ReportExportConfig`](crate::model::S3ReportExportConfig)
pub mod s3_report_export_config {
    /// A builder for [`S3ReportExportConfig`](crate::model::S3ReportExportConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) bucket: std::option::Option<std::string::String>,
        pub(crate) path: std::option::Option<std::string::String>,
        pub(crate) packaging: std::option::Option<crate::model::ReportPackagingType>,
        pub(crate) encryption_key: std::option::Option<std::string::String>,
        pub(crate) encryption_disabled: std::option::Option<bool>,
    }
    impl Builder {
        pub fn bucket(mut self, input: impl Into<std::string::String>) -> Self {
            self.bucket = Some(input.into());
            self
        }
        pub fn set_bucket(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.bucket = input;
            self
        }
        pub fn path(mut self, input: impl Into<std::string::String>) -> Self {
            self.path = Some(input.into());
            self
        }
        pub fn set_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.path = input;
            self
        }
        pub fn packaging(mut self, input: crate::model::ReportPackagingType) -> Self {
            self.packaging = Some(input);
            self
        }
        pub fn set_packaging(mut self, input: std::option::Option<crate::model::ReportPackagingType>) -> Self {
            self.packaging = input;
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
        pub fn encryption_disabled(mut self, input: bool) -> Self {
            self.encryption_disabled = Some(input);
            self
        }
        pub fn set_encryption_disabled(mut self, input: std::option::Option<bool>) -> Self {
            self.encryption_disabled = input;
            self
        }
        /// Consumes the builder and constructs a [`S3ReportExportConfig`](crate::model::S3ReportExportConfig)
        pub fn build(self) -> crate::model::S3ReportExportConfig {
            crate::model::S3ReportExportConfig {
                bucket: self.bucket,
                path: self.path,
                packaging: self.packaging,
                encryption_key: self.encryption_key,
                encryption_disabled: self.encryption_disabled,
            }
        }
    }
}
impl S3ReportExportConfig {
    /// Creates a new builder-style object to manufacture [`S3ReportExportConfig`](crate::model::S3ReportExportConfig)
    pub fn builder() -> crate::model::s3_report_export_config::Builder {
        crate::model::s3_report_export_config::Builder::default()
    }
}

/// Authorization used to reach the source provider. Only OAuth is supported.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SourceAuth {
    pub r#type: std::option::Option<crate::model::SourceAuthType>,
    pub resource: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for SourceAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SourceAuth");
        formatter.field("type", &self.r#type);
        formatter.field("resource", &self.resource);
        formatter.finish()
    }
}
/// See [`SourceAuth`](crate::model::SourceAuth)
pub mod source_auth {
    /// A builder for [`SourceAuth`](crate::model::SourceAuth)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::SourceAuthType>,
        pub(crate) resource: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::SourceAuthType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::SourceAuthType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn resource(mut self, input: impl Into<std::string::String>) -> Self {
            self.resource = Some(input.into());
            self
        }
        pub fn set_resource(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.resource = input;
            self
        }
        /// Consumes the builder and constructs a [`SourceAuth`](crate::model::SourceAuth)
        pub fn build(self) -> crate::model::SourceAuth {
            crate::model::SourceAuth {
                r#type: self.r#type,
                resource: self.resource,
            }
        }
    }
}
impl SourceAuth {
    /// Creates a new builder-style object to manufacture [`SourceAuth`](crate::model::SourceAuth)
    pub fn builder() -> crate::model::source_auth::Builder {
        crate::model::source_auth::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct SourceCredentialsInfo {
    pub arn: std::option::Option<std::string::String>,
    pub server_type: std::option::Option<crate::model::ServerType>,
    pub auth_type: std::option::Option<crate::model::AuthType>,
}
impl std::fmt::Debug for SourceCredentialsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("SourceCredentialsInfo");
        formatter.field("arn", &self.arn);
        formatter.field("server_type", &self.server_type);
        formatter.field("auth_type", &self.auth_type);
        formatter.finish()
    }
}
/// See [`SourceCredentialsInfo`](crate::model::SourceCredentialsInfo)
pub mod source_credentials_info {
    /// A builder for [`SourceCredentialsInfo`](crate::model::SourceCredentialsInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) arn: std::option::Option<std::string::String>,
        pub(crate) server_type: std::option::Option<crate::model::ServerType>,
        pub(crate) auth_type: std::option::Option<crate::model::AuthType>,
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
        /// Consumes the builder and constructs a [`SourceCredentialsInfo`](crate::model::SourceCredentialsInfo)
        pub fn build(self) -> crate::model::SourceCredentialsInfo {
            crate::model::SourceCredentialsInfo {
                arn: self.arn,
                server_type: self.server_type,
                auth_type: self.auth_type,
            }
        }
    }
}
impl SourceCredentialsInfo {
    /// Creates a new builder-style object to manufacture [`SourceCredentialsInfo`](crate::model::SourceCredentialsInfo)
    pub fn builder() -> crate::model::source_credentials_info::Builder {
        crate::model::source_credentials_info::Builder::default()
    }
}

/// A tag, consisting of a key and a value.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Tag {
    pub key: std::option::Option<std::string::String>,
    pub value: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Tag");
        formatter.field("key", &self.key);
        formatter.field("value", &self.value);
        formatter.finish()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) key: std::option::Option<std::string::String>,
        pub(crate) value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn key(mut self, input: impl Into<std::string::String>) -> Self {
            self.key = Some(input.into());
            self
        }
        pub fn set_key(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.key = input;
            self
        }
        pub fn value(mut self, input: impl Into<std::string::String>) -> Self {
            self.value = Some(input.into());
            self
        }
        pub fn set_value(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.value = input;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
            }
        }
    }
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TestCase {
    pub report_arn: std::option::Option<std::string::String>,
    pub test_raw_data_path: std::option::Option<std::string::String>,
    pub prefix: std::option::Option<std::string::String>,
    pub name: std::option::Option<std::string::String>,
    pub status: std::option::Option<std::string::String>,
    pub duration_in_nano_seconds: std::option::Option<i64>,
    pub message: std::option::Option<std::string::String>,
    pub expired: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TestCase");
        formatter.field("report_arn", &self.report_arn);
        formatter.field("test_raw_data_path", &self.test_raw_data_path);
        formatter.field("prefix", &self.prefix);
        formatter.field("name", &self.name);
        formatter.field("status", &self.status);
        formatter.field("duration_in_nano_seconds", &self.duration_in_nano_seconds);
        formatter.field("message", &self.message);
        formatter.field("expired", &self.expired);
        formatter.finish()
    }
}
/// See [`TestCase`](crate::model::TestCase)
pub mod test_case {
    /// A builder for [`TestCase`](crate::model::TestCase)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) report_arn: std::option::Option<std::string::String>,
        pub(crate) test_raw_data_path: std::option::Option<std::string::String>,
        pub(crate) prefix: std::option::Option<std::string::String>,
        pub(crate) name: std::option::Option<std::string::String>,
        pub(crate) status: std::option::Option<std::string::String>,
        pub(crate) duration_in_nano_seconds: std::option::Option<i64>,
        pub(crate) message: std::option::Option<std::string::String>,
        pub(crate) expired: std::option::Option<smithy_types::Instant>,
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
        pub fn test_raw_data_path(mut self, input: impl Into<std::string::String>) -> Self {
            self.test_raw_data_path = Some(input.into());
            self
        }
        pub fn set_test_raw_data_path(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.test_raw_data_path = input;
            self
        }
        pub fn prefix(mut self, input: impl Into<std::string::String>) -> Self {
            self.prefix = Some(input.into());
            self
        }
        pub fn set_prefix(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.prefix = input;
            self
        }
        pub fn name(mut self, input: impl Into<std::string::String>) -> Self {
            self.name = Some(input.into());
            self
        }
        pub fn set_name(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.name = input;
            self
        }
        pub fn status(mut self, input: impl Into<std::string::String>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status = input;
            self
        }
        pub fn duration_in_nano_seconds(mut self, input: i64) -> Self {
            self.duration_in_nano_seconds = Some(input);
            self
        }
        pub fn set_duration_in_nano_seconds(mut self, input: std::option::Option<i64>) -> Self {
            self.duration_in_nano_seconds = input;
            self
        }
        pub fn message(mut self, input: impl Into<std::string::String>) -> Self {
            self.message = Some(input.into());
            self
        }
        pub fn set_message(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.message = input;
            self
        }
        pub fn expired(mut self, input: smithy_types::Instant) -> Self {
            self.expired = Some(input);
            self
        }
        pub fn set_expired(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.expired = input;
            self
        }
        /// Consumes the builder and constructs a [`TestCase`](crate::model::TestCase)
        pub fn build(self) -> crate::model::TestCase {
            crate::model::TestCase {
                report_arn: self.report_arn,
                test_raw_data_path: self.test_raw_data_path,
                prefix: self.prefix,
                name: self.name,
                status: self.status,
                duration_in_nano_seconds: self.duration_in_nano_seconds,
                message: self.message,
                expired: self.expired,
            }
        }
    }
}
impl TestCase {
    /// Creates a new builder-style object to manufacture [`TestCase`](crate::model::TestCase)
    pub fn builder() -> crate::model::test_case::Builder {
        crate::model::test_case::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TestCaseFilter {
    pub status: std::option::Option<std::string::String>,
}
impl std::fmt::Debug for TestCaseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TestCaseFilter");
        formatter.field("status", &self.status);
        formatter.finish()
    }
}
/// See [`TestCaseFilter`](crate::model::TestCaseFilter)
pub mod test_case_filter {
    /// A builder for [`TestCaseFilter`](crate::model::TestCaseFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) status: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status(mut self, input: impl Into<std::string::String>) -> Self {
            self.status = Some(input.into());
            self
        }
        pub fn set_status(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.status = input;
            self
        }
        /// Consumes the builder and constructs a [`TestCaseFilter`](crate::model::TestCaseFilter)
        pub fn build(self) -> crate::model::TestCaseFilter {
            crate::model::TestCaseFilter {
                status: self.status,
            }
        }
    }
}
impl TestCaseFilter {
    /// Creates a new builder-style object to manufacture [`TestCaseFilter`](crate::model::TestCaseFilter)
    pub fn builder() -> crate::model::test_case_filter::Builder {
        crate::model::test_case_filter::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct TestReportSummary {
    pub total: std::option::Option<i32>,
    pub status_counts: std::option::Option<std::collections::HashMap<std::string::String, i32>>,
    pub duration_in_nano_seconds: std::option::Option<i64>,
}
impl std::fmt::Debug for TestReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("TestReportSummary");
        formatter.field("total", &self.total);
        formatter.field("status_counts", &self.status_counts);
        formatter.field("duration_in_nano_seconds", &self.duration_in_nano_seconds);
        formatter.finish()
    }
}
/// See [`TestReportSummary`](crate::model::TestReportSummary)
pub mod test_report_summary {
    /// A builder for [`TestReportSummary`](crate::model::TestReportSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) total: std::option::Option<i32>,
        pub(crate) status_counts: std::option::Option<std::collections::HashMap<std::string::String, i32>>,
        pub(crate) duration_in_nano_seconds: std::option::Option<i64>,
    }
    impl Builder {
        pub fn total(mut self, input: i32) -> Self {
            self.total = Some(input);
            self
        }
        pub fn set_total(mut self, input: std::option::Option<i32>) -> Self {
            self.total = input;
            self
        }
        /// Adds a key-value pair to `status_counts`.
        pub fn status_counts(mut self, k: impl Into<std::string::String>, v: impl Into<i32>) -> Self {
            let mut hash_map = self.status_counts.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.status_counts = Some(hash_map);
            self
        }
        pub fn set_status_counts(mut self, input: std::option::Option<std::collections::HashMap<std::string::String, i32>>) -> Self {
            self.status_counts = input;
            self
        }
        pub fn duration_in_nano_seconds(mut self, input: i64) -> Self {
            self.duration_in_nano_seconds = Some(input);
            self
        }
        pub fn set_duration_in_nano_seconds(mut self, input: std::option::Option<i64>) -> Self {
            self.duration_in_nano_seconds = input;
            self
        }
        /// Consumes the builder and constructs a [`TestReportSummary`](crate::model::TestReportSummary)
        pub fn build(self) -> crate::model::TestReportSummary {
            crate::model::TestReportSummary {
                total: self.total,
                status_counts: self.status_counts,
                duration_in_nano_seconds: self.duration_in_nano_seconds,
            }
        }
    }
}
impl TestReportSummary {
    /// Creates a new builder-style object to manufacture [`TestReportSummary`](crate::model::TestReportSummary)
    pub fn builder() -> crate::model::test_report_summary::Builder {
        crate::model::test_report_summary::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct VpcConfig {
    pub vpc_id: std::option::Option<std::string::String>,
    pub subnets: std::option::Option<std::vec::Vec<std::string::String>>,
    pub security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl std::fmt::Debug for VpcConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("VpcConfig");
        formatter.field("vpc_id", &self.vpc_id);
        formatter.field("subnets", &self.subnets);
        formatter.field("security_group_ids", &self.security_group_ids);
        formatter.finish()
    }
}
/// See [`VpcConfig`](crate::model::VpcConfig)
pub mod vpc_config {
    /// A builder for [`VpcConfig`](crate::model::VpcConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) vpc_id: std::option::Option<std::string::String>,
        pub(crate) subnets: std::option::Option<std::vec::Vec<std::string::String>>,
        pub(crate) security_group_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn vpc_id(mut self, input: impl Into<std::string::String>) -> Self {
            self.vpc_id = Some(input.into());
            self
        }
        pub fn set_vpc_id(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.vpc_id = input;
            self
        }
        /// Appends an item to `subnets`.
        pub fn subnets(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.subnets.unwrap_or_default();
            v.push(input.into());
            self.subnets = Some(v);
            self
        }
        pub fn set_subnets(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.subnets = input;
            self
        }
        /// Appends an item to `security_group_ids`.
        pub fn security_group_ids(mut self, input: impl Into<std::string::String>) -> Self {
            let mut v = self.security_group_ids.unwrap_or_default();
            v.push(input.into());
            self.security_group_ids = Some(v);
            self
        }
        pub fn set_security_group_ids(mut self, input: std::option::Option<std::vec::Vec<std::string::String>>) -> Self {
            self.security_group_ids = input;
            self
        }
        /// Consumes the builder and constructs a [`VpcConfig`](crate::model::VpcConfig)
        pub fn build(self) -> crate::model::VpcConfig {
            crate::model::VpcConfig {
                vpc_id: self.vpc_id,
                subnets: self.subnets,
                security_group_ids: self.security_group_ids,
            }
        }
    }
}
impl VpcConfig {
    /// Creates a new builder-style object to manufacture [`VpcConfig`](crate::model::VpcConfig)
    pub fn builder() -> crate::model::vpc_config::Builder {
        crate::model::vpc_config::Builder::default()
    }
}

/// Information about a webhook that connects repository events to a build project.
#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct Webhook {
    pub url: std::option::Option<std::string::String>,
    pub payload_url: std::option::Option<std::string::String>,
    pub secret: std::option::Option<std::string::String>,
    pub branch_filter: std::option::Option<std::string::String>,
    /// Filter groups. A build is triggered when every filter in any one group matches.
    pub filter_groups: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>,
    pub last_modified_secret: std::option::Option<smithy_types::Instant>,
}
impl std::fmt::Debug for Webhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("Webhook");
        formatter.field("url", &self.url);
        formatter.field("payload_url", &self.payload_url);
        formatter.field("secret", &self.secret);
        formatter.field("branch_filter", &self.branch_filter);
        formatter.field("filter_groups", &self.filter_groups);
        formatter.field("last_modified_secret", &self.last_modified_secret);
        formatter.finish()
    }
}
/// See [`Webhook`](crate::model::Webhook)
pub mod webhook {
    /// A builder for [`Webhook`](crate::model::Webhook)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) url: std::option::Option<std::string::String>,
        pub(crate) payload_url: std::option::Option<std::string::String>,
        pub(crate) secret: std::option::Option<std::string::String>,
        pub(crate) branch_filter: std::option::Option<std::string::String>,
        pub(crate) filter_groups: std::option::Option<std::vec::Vec<std::vec::Vec<crate::model::WebhookFilter>>>,
        pub(crate) last_modified_secret: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn url(mut self, input: impl Into<std::string::String>) -> Self {
            self.url = Some(input.into());
            self
        }
        pub fn set_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.url = input;
            self
        }
        pub fn payload_url(mut self, input: impl Into<std::string::String>) -> Self {
            self.payload_url = Some(input.into());
            self
        }
        pub fn set_payload_url(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.payload_url = input;
            self
        }
        pub fn secret(mut self, input: impl Into<std::string::String>) -> Self {
            self.secret = Some(input.into());
            self
        }
        pub fn set_secret(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.secret = input;
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
        /// Filter groups. A build is triggered when every filter in any one group matches.
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
        pub fn last_modified_secret(mut self, input: smithy_types::Instant) -> Self {
            self.last_modified_secret = Some(input);
            self
        }
        pub fn set_last_modified_secret(mut self, input: std::option::Option<smithy_types::Instant>) -> Self {
            self.last_modified_secret = input;
            self
        }
        /// Consumes the builder and constructs a [`Webhook`](crate::model::Webhook)
        pub fn build(self) -> crate::model::Webhook {
            crate::model::Webhook {
                url: self.url,
                payload_url: self.payload_url,
                secret: self.secret,
                branch_filter: self.branch_filter,
                filter_groups: self.filter_groups,
                last_modified_secret: self.last_modified_secret,
            }
        }
    }
}
impl Webhook {
    /// Creates a new builder-style object to manufacture [`Webhook`](crate::model::Webhook)
    pub fn builder() -> crate::model::webhook::Builder {
        crate::model::webhook::Builder::default()
    }
}

#[non_exhaustive]
#[derive(std::clone::Clone, std::cmp::PartialEq)]
pub struct WebhookFilter {
    pub r#type: std::option::Option<crate::model::WebhookFilterType>,
    pub pattern: std::option::Option<std::string::String>,
    pub exclude_matched_pattern: std::option::Option<bool>,
}
impl std::fmt::Debug for WebhookFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut formatter = f.debug_struct("WebhookFilter");
        formatter.field("type", &self.r#type);
        formatter.field("pattern", &self.pattern);
        formatter.field("exclude_matched_pattern", &self.exclude_matched_pattern);
        formatter.finish()
    }
}
/// See [`WebhookFilter`](crate::model::WebhookFilter)
pub mod webhook_filter {
    /// A builder for [`WebhookFilter`](crate::model::WebhookFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        pub(crate) r#type: std::option::Option<crate::model::WebhookFilterType>,
        pub(crate) pattern: std::option::Option<std::string::String>,
        pub(crate) exclude_matched_pattern: std::option::Option<bool>,
    }
    impl Builder {
        pub fn r#type(mut self, input: crate::model::WebhookFilterType) -> Self {
            self.r#type = Some(input);
            self
        }
        pub fn set_type(mut self, input: std::option::Option<crate::model::WebhookFilterType>) -> Self {
            self.r#type = input;
            self
        }
        pub fn pattern(mut self, input: impl Into<std::string::String>) -> Self {
            self.pattern = Some(input.into());
            self
        }
        pub fn set_pattern(mut self, input: std::option::Option<std::string::String>) -> Self {
            self.pattern = input;
            self
        }
        pub fn exclude_matched_pattern(mut self, input: bool) -> Self {
            self.exclude_matched_pattern = Some(input);
            self
        }
        pub fn set_exclude_matched_pattern(mut self, input: std::option::Option<bool>) -> Self {
            self.exclude_matched_pattern = input;
            self
        }
        /// Consumes the builder and constructs a [`WebhookFilter`](crate::model::WebhookFilter)
        pub fn build(self) -> crate::model::WebhookFilter {
            crate::model::WebhookFilter {
                r#type: self.r#type,
                pattern: self.pattern,
                exclude_matched_pattern: self.exclude_matched_pattern,
            }
        }
    }
}
impl WebhookFilter {
    /// Creates a new builder-style object to manufacture [`WebhookFilter`](crate::model::WebhookFilter)
    pub fn builder() -> crate::model::webhook_filter::Builder {
        crate::model::webhook_filter::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ArtifactNamespace {
    BuildId,
    None,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ArtifactNamespace {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => ArtifactNamespace::None,
            "BUILD_ID" => ArtifactNamespace::BuildId,
            other => ArtifactNamespace::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ArtifactNamespace {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ArtifactNamespace::from(s))
    }
}
impl ArtifactNamespace {
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactNamespace::None => "NONE",
            ArtifactNamespace::BuildId => "BUILD_ID",
            ArtifactNamespace::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NONE", "BUILD_ID"]
    }
}
impl AsRef<str> for ArtifactNamespace {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ArtifactPackaging {
    None,
    Zip,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ArtifactPackaging {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => ArtifactPackaging::None,
            "ZIP" => ArtifactPackaging::Zip,
            other => ArtifactPackaging::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ArtifactPackaging {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ArtifactPackaging::from(s))
    }
}
impl ArtifactPackaging {
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactPackaging::None => "NONE",
            ArtifactPackaging::Zip => "ZIP",
            ArtifactPackaging::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NONE", "ZIP"]
    }
}
impl AsRef<str> for ArtifactPackaging {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ArtifactsType {
    Codepipeline,
    NoArtifacts,
    S3,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ArtifactsType {
    fn from(s: &str) -> Self {
        match s {
            "CODEPIPELINE" => ArtifactsType::Codepipeline,
            "S3" => ArtifactsType::S3,
            "NO_ARTIFACTS" => ArtifactsType::NoArtifacts,
            other => ArtifactsType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ArtifactsType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ArtifactsType::from(s))
    }
}
impl ArtifactsType {
    pub fn as_str(&self) -> &str {
        match self {
            ArtifactsType::Codepipeline => "CODEPIPELINE",
            ArtifactsType::S3 => "S3",
            ArtifactsType::NoArtifacts => "NO_ARTIFACTS",
            ArtifactsType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["CODEPIPELINE", "S3", "NO_ARTIFACTS"]
    }
}
impl AsRef<str> for ArtifactsType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum AuthType {
    BasicAuth,
    Oauth,
    PersonalAccessToken,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for AuthType {
    fn from(s: &str) -> Self {
        match s {
            "OAUTH" => AuthType::Oauth,
            "BASIC_AUTH" => AuthType::BasicAuth,
            "PERSONAL_ACCESS_TOKEN" => AuthType::PersonalAccessToken,
            other => AuthType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AuthType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AuthType::from(s))
    }
}
impl AuthType {
    pub fn as_str(&self) -> &str {
        match self {
            AuthType::Oauth => "OAUTH",
            AuthType::BasicAuth => "BASIC_AUTH",
            AuthType::PersonalAccessToken => "PERSONAL_ACCESS_TOKEN",
            AuthType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["OAUTH", "BASIC_AUTH", "PERSONAL_ACCESS_TOKEN"]
    }
}
impl AsRef<str> for AuthType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum BuildPhaseType {
    Build,
    Completed,
    DownloadSource,
    Finalizing,
    Install,
    PostBuild,
    PreBuild,
    Provisioning,
    Queued,
    Submitted,
    UploadArtifacts,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for BuildPhaseType {
    fn from(s: &str) -> Self {
        match s {
            "SUBMITTED" => BuildPhaseType::Submitted,
            "QUEUED" => BuildPhaseType::Queued,
            "PROVISIONING" => BuildPhaseType::Provisioning,
            "DOWNLOAD_SOURCE" => BuildPhaseType::DownloadSource,
            "INSTALL" => BuildPhaseType::Install,
            "PRE_BUILD" => BuildPhaseType::PreBuild,
            "BUILD" => BuildPhaseType::Build,
            "POST_BUILD" => BuildPhaseType::PostBuild,
            "UPLOAD_ARTIFACTS" => BuildPhaseType::UploadArtifacts,
            "FINALIZING" => BuildPhaseType::Finalizing,
            "COMPLETED" => BuildPhaseType::Completed,
            other => BuildPhaseType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for BuildPhaseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BuildPhaseType::from(s))
    }
}
impl BuildPhaseType {
    pub fn as_str(&self) -> &str {
        match self {
            BuildPhaseType::Submitted => "SUBMITTED",
            BuildPhaseType::Queued => "QUEUED",
            BuildPhaseType::Provisioning => "PROVISIONING",
            BuildPhaseType::DownloadSource => "DOWNLOAD_SOURCE",
            BuildPhaseType::Install => "INSTALL",
            BuildPhaseType::PreBuild => "PRE_BUILD",
            BuildPhaseType::Build => "BUILD",
            BuildPhaseType::PostBuild => "POST_BUILD",
            BuildPhaseType::UploadArtifacts => "UPLOAD_ARTIFACTS",
            BuildPhaseType::Finalizing => "FINALIZING",
            BuildPhaseType::Completed => "COMPLETED",
            BuildPhaseType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SUBMITTED", "QUEUED", "PROVISIONING", "DOWNLOAD_SOURCE", "INSTALL", "PRE_BUILD", "BUILD", "POST_BUILD", "UPLOAD_ARTIFACTS", "FINALIZING", "COMPLETED"]
    }
}
impl AsRef<str> for BuildPhaseType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CacheMode {
    LocalCustomCache,
    LocalDockerLayerCache,
    LocalSourceCache,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CacheMode {
    fn from(s: &str) -> Self {
        match s {
            "LOCAL_DOCKER_LAYER_CACHE" => CacheMode::LocalDockerLayerCache,
            "LOCAL_SOURCE_CACHE" => CacheMode::LocalSourceCache,
            "LOCAL_CUSTOM_CACHE" => CacheMode::LocalCustomCache,
            other => CacheMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CacheMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CacheMode::from(s))
    }
}
impl CacheMode {
    pub fn as_str(&self) -> &str {
        match self {
            CacheMode::LocalDockerLayerCache => "LOCAL_DOCKER_LAYER_CACHE",
            CacheMode::LocalSourceCache => "LOCAL_SOURCE_CACHE",
            CacheMode::LocalCustomCache => "LOCAL_CUSTOM_CACHE",
            CacheMode::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["LOCAL_DOCKER_LAYER_CACHE", "LOCAL_SOURCE_CACHE", "LOCAL_CUSTOM_CACHE"]
    }
}
impl AsRef<str> for CacheMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CacheType {
    Local,
    NoCache,
    S3,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CacheType {
    fn from(s: &str) -> Self {
        match s {
            "NO_CACHE" => CacheType::NoCache,
            "S3" => CacheType::S3,
            "LOCAL" => CacheType::Local,
            other => CacheType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CacheType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CacheType::from(s))
    }
}
impl CacheType {
    pub fn as_str(&self) -> &str {
        match self {
            CacheType::NoCache => "NO_CACHE",
            CacheType::S3 => "S3",
            CacheType::Local => "LOCAL",
            CacheType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NO_CACHE", "S3", "LOCAL"]
    }
}
impl AsRef<str> for CacheType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ComputeType {
    BuildGeneral12Xlarge,
    BuildGeneral1Large,
    BuildGeneral1Medium,
    BuildGeneral1Small,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ComputeType {
    fn from(s: &str) -> Self {
        match s {
            "BUILD_GENERAL1_SMALL" => ComputeType::BuildGeneral1Small,
            "BUILD_GENERAL1_MEDIUM" => ComputeType::BuildGeneral1Medium,
            "BUILD_GENERAL1_LARGE" => ComputeType::BuildGeneral1Large,
            "BUILD_GENERAL1_2XLARGE" => ComputeType::BuildGeneral12Xlarge,
            other => ComputeType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ComputeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComputeType::from(s))
    }
}
impl ComputeType {
    pub fn as_str(&self) -> &str {
        match self {
            ComputeType::BuildGeneral1Small => "BUILD_GENERAL1_SMALL",
            ComputeType::BuildGeneral1Medium => "BUILD_GENERAL1_MEDIUM",
            ComputeType::BuildGeneral1Large => "BUILD_GENERAL1_LARGE",
            ComputeType::BuildGeneral12Xlarge => "BUILD_GENERAL1_2XLARGE",
            ComputeType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["BUILD_GENERAL1_SMALL", "BUILD_GENERAL1_MEDIUM", "BUILD_GENERAL1_LARGE", "BUILD_GENERAL1_2XLARGE"]
    }
}
impl AsRef<str> for ComputeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum CredentialProviderType {
    SecretsManager,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for CredentialProviderType {
    fn from(s: &str) -> Self {
        match s {
            "SECRETS_MANAGER" => CredentialProviderType::SecretsManager,
            other => CredentialProviderType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for CredentialProviderType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CredentialProviderType::from(s))
    }
}
impl CredentialProviderType {
    pub fn as_str(&self) -> &str {
        match self {
            CredentialProviderType::SecretsManager => "SECRETS_MANAGER",
            CredentialProviderType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SECRETS_MANAGER"]
    }
}
impl AsRef<str> for CredentialProviderType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EnvironmentType {
    ArmContainer,
    LinuxContainer,
    LinuxGpuContainer,
    WindowsContainer,
    WindowsServer2019Container,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EnvironmentType {
    fn from(s: &str) -> Self {
        match s {
            "WINDOWS_CONTAINER" => EnvironmentType::WindowsContainer,
            "LINUX_CONTAINER" => EnvironmentType::LinuxContainer,
            "LINUX_GPU_CONTAINER" => EnvironmentType::LinuxGpuContainer,
            "ARM_CONTAINER" => EnvironmentType::ArmContainer,
            "WINDOWS_SERVER_2019_CONTAINER" => EnvironmentType::WindowsServer2019Container,
            other => EnvironmentType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EnvironmentType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EnvironmentType::from(s))
    }
}
impl EnvironmentType {
    pub fn as_str(&self) -> &str {
        match self {
            EnvironmentType::WindowsContainer => "WINDOWS_CONTAINER",
            EnvironmentType::LinuxContainer => "LINUX_CONTAINER",
            EnvironmentType::LinuxGpuContainer => "LINUX_GPU_CONTAINER",
            EnvironmentType::ArmContainer => "ARM_CONTAINER",
            EnvironmentType::WindowsServer2019Container => "WINDOWS_SERVER_2019_CONTAINER",
            EnvironmentType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["WINDOWS_CONTAINER", "LINUX_CONTAINER", "LINUX_GPU_CONTAINER", "ARM_CONTAINER", "WINDOWS_SERVER_2019_CONTAINER"]
    }
}
impl AsRef<str> for EnvironmentType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum EnvironmentVariableType {
    ParameterStore,
    Plaintext,
    SecretsManager,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for EnvironmentVariableType {
    fn from(s: &str) -> Self {
        match s {
            "PLAINTEXT" => EnvironmentVariableType::Plaintext,
            "PARAMETER_STORE" => EnvironmentVariableType::ParameterStore,
            "SECRETS_MANAGER" => EnvironmentVariableType::SecretsManager,
            other => EnvironmentVariableType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EnvironmentVariableType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EnvironmentVariableType::from(s))
    }
}
impl EnvironmentVariableType {
    pub fn as_str(&self) -> &str {
        match self {
            EnvironmentVariableType::Plaintext => "PLAINTEXT",
            EnvironmentVariableType::ParameterStore => "PARAMETER_STORE",
            EnvironmentVariableType::SecretsManager => "SECRETS_MANAGER",
            EnvironmentVariableType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["PLAINTEXT", "PARAMETER_STORE", "SECRETS_MANAGER"]
    }
}
impl AsRef<str> for EnvironmentVariableType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum FileSystemType {
    Efs,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for FileSystemType {
    fn from(s: &str) -> Self {
        match s {
            "EFS" => FileSystemType::Efs,
            other => FileSystemType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FileSystemType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FileSystemType::from(s))
    }
}
impl FileSystemType {
    pub fn as_str(&self) -> &str {
        match self {
            FileSystemType::Efs => "EFS",
            FileSystemType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["EFS"]
    }
}
impl AsRef<str> for FileSystemType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ImagePullCredentialsType {
    Codebuild,
    ServiceRole,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ImagePullCredentialsType {
    fn from(s: &str) -> Self {
        match s {
            "CODEBUILD" => ImagePullCredentialsType::Codebuild,
            "SERVICE_ROLE" => ImagePullCredentialsType::ServiceRole,
            other => ImagePullCredentialsType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ImagePullCredentialsType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ImagePullCredentialsType::from(s))
    }
}
impl ImagePullCredentialsType {
    pub fn as_str(&self) -> &str {
        match self {
            ImagePullCredentialsType::Codebuild => "CODEBUILD",
            ImagePullCredentialsType::ServiceRole => "SERVICE_ROLE",
            ImagePullCredentialsType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["CODEBUILD", "SERVICE_ROLE"]
    }
}
impl AsRef<str> for ImagePullCredentialsType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LanguageType {
    Android,
    Base,
    Docker,
    Dotnet,
    Golang,
    Java,
    NodeJs,
    Php,
    Python,
    Ruby,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LanguageType {
    fn from(s: &str) -> Self {
        match s {
            "JAVA" => LanguageType::Java,
            "PYTHON" => LanguageType::Python,
            "NODE_JS" => LanguageType::NodeJs,
            "RUBY" => LanguageType::Ruby,
            "GOLANG" => LanguageType::Golang,
            "DOCKER" => LanguageType::Docker,
            "ANDROID" => LanguageType::Android,
            "DOTNET" => LanguageType::Dotnet,
            "BASE" => LanguageType::Base,
            "PHP" => LanguageType::Php,
            other => LanguageType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LanguageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LanguageType::from(s))
    }
}
impl LanguageType {
    pub fn as_str(&self) -> &str {
        match self {
            LanguageType::Java => "JAVA",
            LanguageType::Python => "PYTHON",
            LanguageType::NodeJs => "NODE_JS",
            LanguageType::Ruby => "RUBY",
            LanguageType::Golang => "GOLANG",
            LanguageType::Docker => "DOCKER",
            LanguageType::Android => "ANDROID",
            LanguageType::Dotnet => "DOTNET",
            LanguageType::Base => "BASE",
            LanguageType::Php => "PHP",
            LanguageType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["JAVA", "PYTHON", "NODE_JS", "RUBY", "GOLANG", "DOCKER", "ANDROID", "DOTNET", "BASE", "PHP"]
    }
}
impl AsRef<str> for LanguageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LogsConfigStatusType {
    Disabled,
    Enabled,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for LogsConfigStatusType {
    fn from(s: &str) -> Self {
        match s {
            "ENABLED" => LogsConfigStatusType::Enabled,
            "DISABLED" => LogsConfigStatusType::Disabled,
            other => LogsConfigStatusType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LogsConfigStatusType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LogsConfigStatusType::from(s))
    }
}
impl LogsConfigStatusType {
    pub fn as_str(&self) -> &str {
        match self {
            LogsConfigStatusType::Enabled => "ENABLED",
            LogsConfigStatusType::Disabled => "DISABLED",
            LogsConfigStatusType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ENABLED", "DISABLED"]
    }
}
impl AsRef<str> for LogsConfigStatusType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum PlatformType {
    AmazonLinux,
    Debian,
    Ubuntu,
    WindowsServer,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for PlatformType {
    fn from(s: &str) -> Self {
        match s {
            "DEBIAN" => PlatformType::Debian,
            "AMAZON_LINUX" => PlatformType::AmazonLinux,
            "UBUNTU" => PlatformType::Ubuntu,
            "WINDOWS_SERVER" => PlatformType::WindowsServer,
            other => PlatformType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for PlatformType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PlatformType::from(s))
    }
}
impl PlatformType {
    pub fn as_str(&self) -> &str {
        match self {
            PlatformType::Debian => "DEBIAN",
            PlatformType::AmazonLinux => "AMAZON_LINUX",
            PlatformType::Ubuntu => "UBUNTU",
            PlatformType::WindowsServer => "WINDOWS_SERVER",
            PlatformType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["DEBIAN", "AMAZON_LINUX", "UBUNTU", "WINDOWS_SERVER"]
    }
}
impl AsRef<str> for PlatformType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ProjectSortByType {
    CreatedTime,
    LastModifiedTime,
    Name,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ProjectSortByType {
    fn from(s: &str) -> Self {
        match s {
            "NAME" => ProjectSortByType::Name,
            "CREATED_TIME" => ProjectSortByType::CreatedTime,
            "LAST_MODIFIED_TIME" => ProjectSortByType::LastModifiedTime,
            other => ProjectSortByType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ProjectSortByType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ProjectSortByType::from(s))
    }
}
impl ProjectSortByType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectSortByType::Name => "NAME",
            ProjectSortByType::CreatedTime => "CREATED_TIME",
            ProjectSortByType::LastModifiedTime => "LAST_MODIFIED_TIME",
            ProjectSortByType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NAME", "CREATED_TIME", "LAST_MODIFIED_TIME"]
    }
}
impl AsRef<str> for ProjectSortByType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReportExportConfigType {
    NoExport,
    S3,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ReportExportConfigType {
    fn from(s: &str) -> Self {
        match s {
            "S3" => ReportExportConfigType::S3,
            "NO_EXPORT" => ReportExportConfigType::NoExport,
            other => ReportExportConfigType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReportExportConfigType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReportExportConfigType::from(s))
    }
}
impl ReportExportConfigType {
    pub fn as_str(&self) -> &str {
        match self {
            ReportExportConfigType::S3 => "S3",
            ReportExportConfigType::NoExport => "NO_EXPORT",
            ReportExportConfigType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["S3", "NO_EXPORT"]
    }
}
impl AsRef<str> for ReportExportConfigType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReportGroupSortByType {
    CreatedTime,
    LastModifiedTime,
    Name,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ReportGroupSortByType {
    fn from(s: &str) -> Self {
        match s {
            "NAME" => ReportGroupSortByType::Name,
            "CREATED_TIME" => ReportGroupSortByType::CreatedTime,
            "LAST_MODIFIED_TIME" => ReportGroupSortByType::LastModifiedTime,
            other => ReportGroupSortByType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReportGroupSortByType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReportGroupSortByType::from(s))
    }
}
impl ReportGroupSortByType {
    pub fn as_str(&self) -> &str {
        match self {
            ReportGroupSortByType::Name => "NAME",
            ReportGroupSortByType::CreatedTime => "CREATED_TIME",
            ReportGroupSortByType::LastModifiedTime => "LAST_MODIFIED_TIME",
            ReportGroupSortByType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["NAME", "CREATED_TIME", "LAST_MODIFIED_TIME"]
    }
}
impl AsRef<str> for ReportGroupSortByType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReportPackagingType {
    None,
    Zip,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ReportPackagingType {
    fn from(s: &str) -> Self {
        match s {
            "ZIP" => ReportPackagingType::Zip,
            "NONE" => ReportPackagingType::None,
            other => ReportPackagingType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReportPackagingType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReportPackagingType::from(s))
    }
}
impl ReportPackagingType {
    pub fn as_str(&self) -> &str {
        match self {
            ReportPackagingType::Zip => "ZIP",
            ReportPackagingType::None => "NONE",
            ReportPackagingType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ZIP", "NONE"]
    }
}
impl AsRef<str> for ReportPackagingType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReportStatusType {
    Deleting,
    Failed,
    Generating,
    Incomplete,
    Succeeded,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ReportStatusType {
    fn from(s: &str) -> Self {
        match s {
            "GENERATING" => ReportStatusType::Generating,
            "SUCCEEDED" => ReportStatusType::Succeeded,
            "FAILED" => ReportStatusType::Failed,
            "INCOMPLETE" => ReportStatusType::Incomplete,
            "DELETING" => ReportStatusType::Deleting,
            other => ReportStatusType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReportStatusType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReportStatusType::from(s))
    }
}
impl ReportStatusType {
    pub fn as_str(&self) -> &str {
        match self {
            ReportStatusType::Generating => "GENERATING",
            ReportStatusType::Succeeded => "SUCCEEDED",
            ReportStatusType::Failed => "FAILED",
            ReportStatusType::Incomplete => "INCOMPLETE",
            ReportStatusType::Deleting => "DELETING",
            ReportStatusType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["GENERATING", "SUCCEEDED", "FAILED", "INCOMPLETE", "DELETING"]
    }
}
impl AsRef<str> for ReportStatusType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ReportType {
    Test,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ReportType {
    fn from(s: &str) -> Self {
        match s {
            "TEST" => ReportType::Test,
            other => ReportType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReportType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReportType::from(s))
    }
}
impl ReportType {
    pub fn as_str(&self) -> &str {
        match self {
            ReportType::Test => "TEST",
            ReportType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["TEST"]
    }
}
impl AsRef<str> for ReportType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ServerType {
    Bitbucket,
    Github,
    GithubEnterprise,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for ServerType {
    fn from(s: &str) -> Self {
        match s {
            "GITHUB" => ServerType::Github,
            "BITBUCKET" => ServerType::Bitbucket,
            "GITHUB_ENTERPRISE" => ServerType::GithubEnterprise,
            other => ServerType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ServerType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ServerType::from(s))
    }
}
impl ServerType {
    pub fn as_str(&self) -> &str {
        match self {
            ServerType::Github => "GITHUB",
            ServerType::Bitbucket => "BITBUCKET",
            ServerType::GithubEnterprise => "GITHUB_ENTERPRISE",
            ServerType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["GITHUB", "BITBUCKET", "GITHUB_ENTERPRISE"]
    }
}
impl AsRef<str> for ServerType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SharedResourceSortByType {
    Arn,
    ModifiedTime,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SharedResourceSortByType {
    fn from(s: &str) -> Self {
        match s {
            "ARN" => SharedResourceSortByType::Arn,
            "MODIFIED_TIME" => SharedResourceSortByType::ModifiedTime,
            other => SharedResourceSortByType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SharedResourceSortByType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SharedResourceSortByType::from(s))
    }
}
impl SharedResourceSortByType {
    pub fn as_str(&self) -> &str {
        match self {
            SharedResourceSortByType::Arn => "ARN",
            SharedResourceSortByType::ModifiedTime => "MODIFIED_TIME",
            SharedResourceSortByType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ARN", "MODIFIED_TIME"]
    }
}
impl AsRef<str> for SharedResourceSortByType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SortOrderType {
    Ascending,
    Descending,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SortOrderType {
    fn from(s: &str) -> Self {
        match s {
            "ASCENDING" => SortOrderType::Ascending,
            "DESCENDING" => SortOrderType::Descending,
            other => SortOrderType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SortOrderType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SortOrderType::from(s))
    }
}
impl SortOrderType {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrderType::Ascending => "ASCENDING",
            SortOrderType::Descending => "DESCENDING",
            SortOrderType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["ASCENDING", "DESCENDING"]
    }
}
impl AsRef<str> for SortOrderType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SourceAuthType {
    Oauth,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SourceAuthType {
    fn from(s: &str) -> Self {
        match s {
            "OAUTH" => SourceAuthType::Oauth,
            other => SourceAuthType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SourceAuthType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SourceAuthType::from(s))
    }
}
impl SourceAuthType {
    pub fn as_str(&self) -> &str {
        match self {
            SourceAuthType::Oauth => "OAUTH",
            SourceAuthType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["OAUTH"]
    }
}
impl AsRef<str> for SourceAuthType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Where a build's source code is stored.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum SourceType {
    Bitbucket,
    Codecommit,
    Codepipeline,
    Github,
    GithubEnterprise,
    NoSource,
    S3,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for SourceType {
    fn from(s: &str) -> Self {
        match s {
            "CODECOMMIT" => SourceType::Codecommit,
            "CODEPIPELINE" => SourceType::Codepipeline,
            "GITHUB" => SourceType::Github,
            "S3" => SourceType::S3,
            "BITBUCKET" => SourceType::Bitbucket,
            "GITHUB_ENTERPRISE" => SourceType::GithubEnterprise,
            "NO_SOURCE" => SourceType::NoSource,
            other => SourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SourceType::from(s))
    }
}
impl SourceType {
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Codecommit => "CODECOMMIT",
            SourceType::Codepipeline => "CODEPIPELINE",
            SourceType::Github => "GITHUB",
            SourceType::S3 => "S3",
            SourceType::Bitbucket => "BITBUCKET",
            SourceType::GithubEnterprise => "GITHUB_ENTERPRISE",
            SourceType::NoSource => "NO_SOURCE",
            SourceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["CODECOMMIT", "CODEPIPELINE", "GITHUB", "S3", "BITBUCKET", "GITHUB_ENTERPRISE", "NO_SOURCE"]
    }
}
impl AsRef<str> for SourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Status of a build or of one of its phases.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum StatusType {
    Failed,
    Fault,
    InProgress,
    Stopped,
    Succeeded,
    TimedOut,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for StatusType {
    fn from(s: &str) -> Self {
        match s {
            "SUCCEEDED" => StatusType::Succeeded,
            "FAILED" => StatusType::Failed,
            "FAULT" => StatusType::Fault,
            "TIMED_OUT" => StatusType::TimedOut,
            "IN_PROGRESS" => StatusType::InProgress,
            "STOPPED" => StatusType::Stopped,
            other => StatusType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for StatusType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StatusType::from(s))
    }
}
impl StatusType {
    pub fn as_str(&self) -> &str {
        match self {
            StatusType::Succeeded => "SUCCEEDED",
            StatusType::Failed => "FAILED",
            StatusType::Fault => "FAULT",
            StatusType::TimedOut => "TIMED_OUT",
            StatusType::InProgress => "IN_PROGRESS",
            StatusType::Stopped => "STOPPED",
            StatusType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["SUCCEEDED", "FAILED", "FAULT", "TIMED_OUT", "IN_PROGRESS", "STOPPED"]
    }
}
impl AsRef<str> for StatusType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum WebhookFilterType {
    ActorAccountId,
    BaseRef,
    CommitMessage,
    Event,
    FilePath,
    HeadRef,
    /// Unknown contains new variants that have been added since this code was generated.
    Unknown(String),
}
impl std::convert::From<&str> for WebhookFilterType {
    fn from(s: &str) -> Self {
        match s {
            "EVENT" => WebhookFilterType::Event,
            "BASE_REF" => WebhookFilterType::BaseRef,
            "HEAD_REF" => WebhookFilterType::HeadRef,
            "ACTOR_ACCOUNT_ID" => WebhookFilterType::ActorAccountId,
            "FILE_PATH" => WebhookFilterType::FilePath,
            "COMMIT_MESSAGE" => WebhookFilterType::CommitMessage,
            other => WebhookFilterType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for WebhookFilterType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(WebhookFilterType::from(s))
    }
}
impl WebhookFilterType {
    pub fn as_str(&self) -> &str {
        match self {
            WebhookFilterType::Event => "EVENT",
            WebhookFilterType::BaseRef => "BASE_REF",
            WebhookFilterType::HeadRef => "HEAD_REF",
            WebhookFilterType::ActorAccountId => "ACTOR_ACCOUNT_ID",
            WebhookFilterType::FilePath => "FILE_PATH",
            WebhookFilterType::CommitMessage => "COMMIT_MESSAGE",
            WebhookFilterType::Unknown(s) => s.as_ref(),
        }
    }
    /// Returns all the `&str` values of the enum members.
    pub fn values() -> &'static [&'static str] {
        &["EVENT", "BASE_REF", "HEAD_REF", "ACTOR_ACCOUNT_ID", "FILE_PATH", "COMMIT_MESSAGE"]
    }
}
impl AsRef<str> for WebhookFilterType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
