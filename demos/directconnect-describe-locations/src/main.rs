/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use directconnect::Region;

use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region. Overrides environment variable AWS_DEFAULT_REGION.
    #[structopt(default_value = "us-east-1", short, long)]
    region: String,

    /// Also list the connections owned by this account
    #[structopt(short, long)]
    connections: bool,

    /// Whether to display additional runtime information
    #[structopt(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), directconnect::Error> {
    let Opt {
        region,
        connections,
        verbose,
    } = Opt::from_args();

    if verbose {
        println!("Direct Connect client version: {}\n", directconnect::PKG_VERSION);
        println!("Region: {}", region);

        SubscriberBuilder::default()
            .with_env_filter("info")
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let config = directconnect::Config::builder()
        .region(Region::new(region))
        .build();
    let client = directconnect::Client::from_conf(config);

    let resp = client.describe_locations().send().await?;
    for location in resp.locations.unwrap_or_default() {
        println!(
            "{:<10} {}",
            location.location_code.unwrap_or_default(),
            location.location_name.unwrap_or_default()
        );
        if let Some(speeds) = location.available_port_speeds {
            println!("           port speeds: {}", speeds.join(", "));
        }
    }

    if connections {
        let resp = client.describe_connections().send().await?;
        for connection in resp.connections.unwrap_or_default() {
            println!(
                "{} {} {:?}",
                connection.connection_id.unwrap_or_default(),
                connection.bandwidth.unwrap_or_default(),
                connection.connection_state
            );
        }
    }
    Ok(())
}
