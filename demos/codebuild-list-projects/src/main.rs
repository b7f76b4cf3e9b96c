/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;

use codebuild::model::{ProjectSortByType, SortOrderType};
use codebuild::Region;

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region. Overrides environment variable AWS_DEFAULT_REGION.
    #[structopt(default_value = "us-east-1", short, long)]
    region: String,

    /// Whether to display additional runtime information
    #[structopt(short, long)]
    verbose: bool,
}

/// Lists the CodeBuild projects in a region, following `nextToken` until every page is read.
#[tokio::main]
async fn main() {
    let Opt { region, verbose } = Opt::from_args();

    if verbose {
        println!("CodeBuild client version: {}\n", codebuild::PKG_VERSION);
        println!("Region: {}", region);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = codebuild::Config::builder()
        .region(Region::new(region.clone()))
        .build();
    let client = codebuild::Client::from_conf_conn(config, aws_hyper::conn::Standard::https());

    let mut next_token: Option<String> = None;
    let mut count = 0;
    loop {
        let resp = client
            .list_projects()
            .sort_by(ProjectSortByType::Name)
            .sort_order(SortOrderType::Ascending)
            .set_next_token(next_token.take())
            .send()
            .await;
        match resp {
            Ok(resp) => {
                for name in resp.projects.unwrap_or_default() {
                    count += 1;
                    println!("    {}", name);
                }
                match resp.next_token {
                    Some(token) => next_token = Some(token),
                    None => break,
                }
            }
            Err(e) => {
                println!("Got an error listing projects:");
                println!("{}", e);
                process::exit(1);
            }
        }
    }

    println!("\nFound {} projects in {}.", count, region);
}
