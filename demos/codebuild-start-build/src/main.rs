/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use codebuild::model::EnvironmentVariable;
use codebuild::Region;

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region. Overrides environment variable AWS_DEFAULT_REGION.
    #[structopt(default_value = "us-east-1", short, long)]
    region: String,

    /// The name of the build project
    #[structopt(short, long)]
    project: String,

    /// Branch, tag or commit to build instead of the project default
    #[structopt(short, long)]
    source_version: Option<String>,

    /// Environment variables for this build only, as NAME=VALUE
    #[structopt(short, long)]
    env: Vec<String>,

    /// Whether to display additional runtime information
    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), codebuild::Error> {
    let Opt {
        region,
        project,
        source_version,
        env,
        verbose,
    } = Opt::from_args();

    if verbose {
        println!("CodeBuild client version: {}\n", codebuild::PKG_VERSION);
        println!("Region:  {}", region);
        println!("Project: {}", project);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = codebuild::Config::builder()
        .region(Region::new(region))
        .build();
    let client = codebuild::Client::from_conf(config);

    let mut request = client
        .start_build()
        .project_name(project)
        .set_source_version(source_version);
    for pair in env {
        let (name, value) = match pair.find('=') {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair.as_str(), ""),
        };
        request = request.environment_variables_override(
            EnvironmentVariable::builder().name(name).value(value).build(),
        );
    }

    let resp = request.send().await?;
    if let Some(build) = resp.build {
        println!("Started build {}", build.id.unwrap_or_default());
        if let Some(status) = build.build_status {
            println!("Status: {}", status.as_str());
        }
    }
    Ok(())
}
