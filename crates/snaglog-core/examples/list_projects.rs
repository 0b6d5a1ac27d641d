// SPDX-License-Identifier: Apache-2.0

//! List every project visible to the configured Bugsnag token.
//!
//! Run with: `BUGSNAG_API_TOKEN=... cargo run --example list_projects -p snaglog-core`

use snaglog_core::{BugsnagApi, BugsnagClient, load_config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let client = BugsnagClient::from_config(config.token()?, &config.bugsnag)?;

    for org in client.list_organizations().await? {
        println!("{}", org.label());
        for project in client.list_projects(&org.id).await? {
            println!(
                "  - {} ({}) {} open errors",
                project.name, project.slug, project.open_error_count
            );
        }
    }

    Ok(())
}
