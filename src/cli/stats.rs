use clap::Subcommand;
use linguaboard_client::services::AdminStatisticsService;

use crate::cli::Output;
use crate::dashboard;
use crate::output::{self, Table};
use crate::state::AppState;

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Platform totals with their monthly trend
    Dashboard,
    /// Parent account breakdown
    Parents,
    /// Children breakdown by age and activity
    Children,
}

pub async fn run(state: &AppState, command: StatsCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        StatsCommand::Dashboard => {
            let stats = state
                .track(AdminStatisticsService::dashboard(client))
                .await?
                .into_data()
                .unwrap_or_default();
            if out.json {
                return output::json(&stats);
            }
            println!("\n📊 Dashboard statistics");
            dashboard::print_statistics(&stats);
        }
        StatsCommand::Parents => {
            let stats = state
                .track(AdminStatisticsService::parents(client))
                .await?
                .into_data()
                .unwrap_or_default();
            if out.json {
                return output::json(&stats);
            }
            println!("\n👪 Parent statistics");
            let mut table = Table::new(["METRIC", "COUNT"]);
            for (label, value) in [
                ("Total", stats.total_parents),
                ("Active", stats.active_parents),
                ("Inactive", stats.inactive_parents),
                ("With children", stats.parents_with_children),
                ("Without children", stats.parents_without_children),
            ] {
                table.row([label.to_string(), value.unwrap_or(0).to_string()]);
            }
            table.print();
        }
        StatsCommand::Children => {
            let stats = state
                .track(AdminStatisticsService::children(client))
                .await?
                .into_data()
                .unwrap_or_default();
            if out.json {
                return output::json(&stats);
            }
            println!("\n🧒 Children statistics");
            let mut table = Table::new(["METRIC", "COUNT"]);
            for (label, value) in [
                ("Total", stats.total_children),
                ("Completed profile", stats.completed_info),
                ("Incomplete profile", stats.incomplete_info),
                ("First-time logins", stats.first_time_logins),
                ("Returning users", stats.returning_users),
            ] {
                table.row([label.to_string(), value.unwrap_or(0).to_string()]);
            }
            table.print();

            if !stats.children_by_age.is_empty() {
                println!("\nBy age");
                let mut ages = Table::new(["AGE", "CHILDREN"]);
                for group in &stats.children_by_age {
                    ages.row([
                        output::cell(group.range.as_deref()),
                        group.count.unwrap_or(0).to_string(),
                    ]);
                }
                ages.print();
            }
        }
    }
    Ok(())
}

pub async fn overview(state: &AppState, out: Output) -> anyhow::Result<()> {
    let overview = dashboard::load_overview(state).await;

    if out.json {
        let slot = |result: Result<serde_json::Value, String>| match result {
            Ok(value) => value,
            Err(error) => serde_json::json!({ "error": error }),
        };
        return output::json(&serde_json::json!({
            "statistics": slot(to_json(&overview.statistics)),
            "parents": slot(to_json(&overview.parents)),
            "languages": slot(to_json(&overview.languages)),
            "domains": slot(to_json(&overview.domains)),
        }));
    }

    dashboard::print_overview(&overview);
    if overview.failures() == 4 {
        anyhow::bail!("Failed to load the overview");
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(
    result: &Result<T, linguaboard_core::ApiError>,
) -> Result<serde_json::Value, String> {
    match result {
        Ok(value) => serde_json::to_value(value).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}
