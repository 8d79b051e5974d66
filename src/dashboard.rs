//! Dashboard overview: headline statistics plus the first rows of the main
//! collections, loaded concurrently.

use linguaboard_client::services::{
    AdminDomainService, AdminParentService, AdminStatisticsService, LanguageService,
};
use linguaboard_core::ApiError;
use linguaboard_models::{
    DashboardStatistics, Domain, DomainFilter, Language, ListEnvelope, ParentWithChildren,
};
use tracing::{info, instrument, warn};

use crate::output::{self, Table};
use crate::state::AppState;

/// Rows shown per collection.
const PREVIEW_ROWS: usize = 5;

/// Each slot holds its own outcome; one failed load never hides the others.
#[derive(Debug)]
pub struct Overview {
    pub statistics: Result<DashboardStatistics, ApiError>,
    pub parents: Result<ListEnvelope<ParentWithChildren>, ApiError>,
    pub languages: Result<Vec<Language>, ApiError>,
    pub domains: Result<ListEnvelope<Domain>, ApiError>,
}

impl Overview {
    #[must_use]
    pub fn failures(&self) -> usize {
        [
            self.statistics.is_err(),
            self.parents.is_err(),
            self.languages.is_err(),
            self.domains.is_err(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count()
    }
}

#[instrument(skip(state))]
pub async fn load_overview(state: &AppState) -> Overview {
    let client = &state.client;
    let (statistics, parents, languages, domains) = tokio::join!(
        state.track(AdminStatisticsService::dashboard(client)),
        state.track(AdminParentService::list(client)),
        state.track(LanguageService::list(client)),
        state.track(AdminDomainService::list_all(client, &DomainFilter::default())),
    );

    let overview = Overview {
        statistics: statistics.map(|envelope| envelope.into_data().unwrap_or_default()),
        parents,
        languages,
        domains,
    };

    match overview.failures() {
        0 => info!("Overview loaded"),
        failed => warn!(failed, "Overview partially loaded"),
    }
    overview
}

pub fn print_overview(overview: &Overview) {
    println!("\n📊 Overview");

    match &overview.statistics {
        Ok(stats) => print_statistics(stats),
        Err(e) => section_error("statistics", e),
    }

    match &overview.parents {
        Ok(parents) => {
            println!("\nParents ({})", parents.total());
            let mut table = Table::new(["NAME", "EMAIL", "CHILDREN", "ACTIVE"]);
            for p in parents.data.iter().take(PREVIEW_ROWS) {
                table.row([
                    p.parent.name.clone(),
                    p.parent.email.clone(),
                    p.child_count().to_string(),
                    output::yes_no(p.parent.active()).to_string(),
                ]);
            }
            table.print();
        }
        Err(e) => section_error("parents", e),
    }

    match &overview.languages {
        Ok(languages) => {
            println!("\nLanguages ({})", languages.len());
            let mut table = Table::new(["CODE", "NAME"]);
            for l in languages.iter().take(PREVIEW_ROWS) {
                table.row([l.code.as_str(), l.name.as_str()]);
            }
            table.print();
        }
        Err(e) => section_error("languages", e),
    }

    match &overview.domains {
        Ok(domains) => {
            println!("\nDomains ({})", domains.total());
            let mut table = Table::new(["NAME", "LANGUAGE", "LESSONS"]);
            for d in domains.data.iter().take(PREVIEW_ROWS) {
                table.row([
                    d.name.clone(),
                    output::cell(d.language_label()),
                    output::cell(d.lesson_count),
                ]);
            }
            table.print();
        }
        Err(e) => section_error("domains", e),
    }
}

pub fn print_statistics(stats: &DashboardStatistics) {
    let mut table = Table::new(["METRIC", "TOTAL", "TREND", "NEW THIS MONTH"]);
    for (label, count) in [
        ("Parents", &stats.total_parents),
        ("Children", &stats.total_children),
        ("Languages", &stats.total_languages),
        ("Domains", &stats.total_domains),
        ("Lessons", &stats.total_lessons),
        ("Words", &stats.total_words),
    ] {
        table.row([
            label.to_string(),
            count.total().to_string(),
            output::cell(count.trend()),
            output::cell(count.new_this_month),
        ]);
    }
    table.print();
}

fn section_error(section: &str, error: &ApiError) {
    eprintln!("\n❌ Error loading {}: {}", section, error);
}
