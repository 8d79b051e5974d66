use anyhow::anyhow;
use clap::Subcommand;
use linguaboard_client::services::AdminLessonService;
use linguaboard_core::SortOrder;
use linguaboard_core::pagination::DEFAULT_LIMIT;
use linguaboard_models::ids::DomainId;
use linguaboard_models::lessons::DEFAULT_SORT_BY;
use linguaboard_models::value_types::{Difficulty, LessonType, LessonTypeFilter};
use linguaboard_models::{CreateLessonDto, LessonFilter};
use tracing::info;

use crate::cli::{Output, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Subcommand)]
pub enum LessonsCommand {
    /// List lessons
    List {
        #[arg(short, long)]
        domain: Option<DomainId>,

        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        active: Option<bool>,

        #[arg(short, long)]
        search: Option<String>,

        /// word, sentence, paragraph or all
        #[arg(short = 't', long = "type", default_value = "all")]
        lesson_type: LessonTypeFilter,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        #[arg(long, default_value = DEFAULT_SORT_BY)]
        sort_by: String,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        sort_order: SortOrder,
    },
    /// Create a lesson
    Create {
        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        domain: Option<String>,

        #[arg(long, default_value = "easy")]
        difficulty: Difficulty,

        /// word, sentence or paragraph
        #[arg(short = 't', long = "type")]
        lesson_type: Option<LessonType>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        order: Option<i32>,

        #[arg(long)]
        active: Option<bool>,
    },
}

pub async fn run(state: &AppState, command: LessonsCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        LessonsCommand::List {
            domain,
            difficulty,
            active,
            search,
            lesson_type,
            page,
            limit,
            sort_by,
            sort_order,
        } => {
            let filter = LessonFilter {
                domain_id: domain,
                difficulty,
                is_active: active,
                search,
                page,
                limit,
                sort_by,
                sort_order,
                lesson_type,
            };
            let lessons = state.track(AdminLessonService::list(client, &filter)).await?;

            if out.json {
                return output::json(&lessons);
            }
            let mut table = Table::new(["ID", "TITLE", "TYPE", "DIFFICULTY", "DOMAIN", "ACTIVE"]);
            for l in &lessons.data {
                table.row([
                    l.id.to_string(),
                    output::truncate(&l.title, 40),
                    output::cell(l.lesson_type),
                    output::cell(l.difficulty),
                    output::cell(l.domain_id()),
                    output::cell(l.is_active.map(output::yes_no)),
                ]);
            }
            if table.is_empty() {
                println!("\nNo results.");
                return Ok(());
            }
            println!();
            table.print();
            match lessons.total_pages() {
                Some(pages) => println!(
                    "\n{} lesson(s), page {}/{}",
                    lessons.total(),
                    lessons.page.unwrap_or(filter.page),
                    pages
                ),
                None => println!("\n{} lesson(s)", lessons.total()),
            }
        }
        LessonsCommand::Create {
            title,
            domain,
            difficulty,
            lesson_type,
            description,
            order,
            active,
        } => {
            let dto = validated(CreateLessonDto {
                title: text_or_prompt(title, "Title")?,
                description,
                domain_id: text_or_prompt(domain, "Domain ID")?,
                difficulty,
                lesson_type,
                order,
                is_active: active,
            })?;
            let lesson = state
                .track(AdminLessonService::create(client, &dto))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Lesson creation failed: empty response from server"))?;
            info!(lesson.id = %lesson.id, "Lesson created");

            if out.json {
                return output::json(&lesson);
            }
            output::success("Lesson created successfully!");
            output::field("ID", &lesson.id);
            output::field("Title", &lesson.title);
            output::field("Difficulty", output::cell(lesson.difficulty));
            output::field("Type", output::cell(lesson.lesson_type));
        }
    }
    Ok(())
}
