use anyhow::{anyhow, bail};
use clap::Subcommand;
use linguaboard_client::services::AdminParagraphService;
use linguaboard_core::paginate;
use linguaboard_core::pagination::MAX_LIMIT;
use linguaboard_models::ids::{DomainId, LessonId, ParagraphId};
use linguaboard_models::{
    CreateParagraphDto, Paragraph, ParagraphFilter, Searchable, UpdateParagraphDto,
};
use tracing::info;

use crate::cli::{Output, confirm, page_index, print_page_footer, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Subcommand)]
pub enum ParagraphsCommand {
    /// List paragraphs
    List {
        #[arg(short, long)]
        domain: Option<DomainId>,

        #[arg(short, long)]
        lesson: Option<LessonId>,

        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Create a paragraph
    Create {
        #[arg(short, long)]
        lesson: Option<String>,

        /// Text with the blanks left in
        #[arg(short, long)]
        text: Option<String>,

        /// Expected answer of each blank, in order; repeat for several
        #[arg(short, long = "answer")]
        answers: Vec<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Update a paragraph
    Update {
        id: ParagraphId,

        #[arg(short, long)]
        lesson: Option<String>,

        #[arg(short, long)]
        text: Option<String>,

        /// Replaces all answers; repeat for several
        #[arg(short, long = "answer")]
        answers: Vec<String>,

        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a paragraph
    Delete {
        id: ParagraphId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Keeps the paragraphs matching every given criterion.
pub fn filter_paragraphs<'a>(
    paragraphs: &'a [Paragraph],
    domain: Option<&DomainId>,
    lesson: Option<&LessonId>,
    search: Option<&str>,
) -> Vec<&'a Paragraph> {
    paragraphs
        .iter()
        .filter(|p| domain.is_none_or(|d| p.domain_id() == Some(d)))
        .filter(|p| lesson.is_none_or(|l| p.lesson_id() == Some(l)))
        .filter(|p| search.is_none_or(|term| p.matches(term)))
        .collect()
}

pub async fn run(state: &AppState, command: ParagraphsCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        ParagraphsCommand::List {
            domain,
            lesson,
            search,
            page,
            page_size,
        } => {
            let filter = ParagraphFilter {
                limit: MAX_LIMIT,
                ..ParagraphFilter::default()
            };
            let paragraphs = state
                .track(AdminParagraphService::list(client, &filter))
                .await?
                .data;
            let matching = filter_paragraphs(
                &paragraphs,
                domain.as_ref(),
                lesson.as_ref(),
                search.as_deref(),
            );
            let page = paginate(&matching, page_index(page), page_size);

            if out.json {
                return output::json(page.items);
            }
            let mut table = Table::new(["ID", "TEXT", "BLANKS", "LESSON"]);
            for p in page.items {
                table.row([
                    p.id.to_string(),
                    output::truncate(&p.text_incomplete, 50),
                    p.answers_ordered.len().to_string(),
                    output::cell(p.lesson_title()),
                ]);
            }
            if !table.is_empty() {
                println!();
                table.print();
            }
            print_page_footer(&page);
        }
        ParagraphsCommand::Create {
            lesson,
            text,
            answers,
            image,
        } => {
            let dto = validated(CreateParagraphDto {
                lesson_id: text_or_prompt(lesson, "Lesson ID")?,
                text_incomplete: text_or_prompt(text, "Text")?,
                answers_ordered: answers,
                blank_positions: Vec::new(),
                image,
            })?;
            let paragraph = state
                .track(AdminParagraphService::create(client, &dto))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Paragraph creation failed: empty response from server"))?;
            info!(paragraph.id = %paragraph.id, "Paragraph created");

            if out.json {
                return output::json(&paragraph);
            }
            output::success("Paragraph created successfully!");
            print_fields(&paragraph);
        }
        ParagraphsCommand::Update {
            id,
            lesson,
            text,
            answers,
            image,
        } => {
            let dto = UpdateParagraphDto {
                text_incomplete: text,
                answers_ordered: (!answers.is_empty()).then_some(answers),
                blank_positions: None,
                image,
                lesson_id: lesson,
            };
            if dto.text_incomplete.is_none()
                && dto.answers_ordered.is_none()
                && dto.image.is_none()
                && dto.lesson_id.is_none()
            {
                bail!("Nothing to update: pass at least one field");
            }
            let dto = validated(dto)?;
            let paragraph = state
                .track(AdminParagraphService::update(client, &id, &dto))
                .await?
                .into_data();

            if out.json {
                return output::json(&paragraph);
            }
            output::success("Paragraph updated successfully!");
            match paragraph {
                Some(paragraph) => print_fields(&paragraph),
                None => output::field("ID", &id),
            }
        }
        ParagraphsCommand::Delete { id, yes } => {
            if !confirm(yes, &format!("Delete paragraph {}?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            let deleted = state
                .track(AdminParagraphService::delete(client, &id))
                .await?
                .into_data();

            if out.json {
                return output::json(&deleted);
            }
            output::success("Paragraph deleted successfully!");
            output::field("ID", deleted.map_or(id, |d| d.id));
        }
    }
    Ok(())
}

fn print_fields(paragraph: &Paragraph) {
    output::field("ID", &paragraph.id);
    output::field("Text", &paragraph.text_incomplete);
    output::field("Answers", paragraph.answers_ordered.join(", "));
    output::field("Lesson", output::cell(paragraph.lesson_title()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_paragraphs() {
        let all: Vec<Paragraph> = serde_json::from_value(json!([
            {"_id": "p1", "textIncomplete": "Le ___ dort", "lesson": {"_id": "l1", "title": "Pets", "domain": "d1"}},
            {"_id": "p2", "textIncomplete": "Il ___ beau", "lesson": {"_id": "l2", "title": "Weather", "domain": "d2"}}
        ]))
        .unwrap();

        let by_domain = filter_paragraphs(&all, Some(&DomainId::new("d2")), None, None);
        assert_eq!(by_domain.len(), 1);
        assert_eq!(by_domain[0].id.as_str(), "p2");

        let by_lesson_and_text =
            filter_paragraphs(&all, None, Some(&LessonId::new("l1")), Some("dort"));
        assert_eq!(by_lesson_and_text.len(), 1);

        assert!(filter_paragraphs(&all, None, Some(&LessonId::new("l1")), Some("beau")).is_empty());
    }
}
