use anyhow::{anyhow, bail};
use clap::Subcommand;
use linguaboard_client::services::AdminSentenceService;
use linguaboard_core::paginate;
use linguaboard_core::pagination::MAX_LIMIT;
use linguaboard_models::ids::{DomainId, LessonId, SentenceId};
use linguaboard_models::{
    CreateSentenceDto, Searchable, Sentence, SentenceFilter, UpdateSentenceDto,
};
use tracing::info;

use crate::cli::{Output, confirm, page_index, print_page_footer, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Subcommand)]
pub enum SentencesCommand {
    /// List sentences
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
    /// Create a sentence
    Create {
        #[arg(short, long)]
        lesson: Option<String>,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long)]
        phonetic: Option<String>,

        /// Audio URL
        #[arg(long)]
        audio: Option<String>,

        /// Word the sentence illustrates
        #[arg(long)]
        base_word: Option<String>,
    },
    /// Update a sentence
    Update {
        id: SentenceId,

        #[arg(short, long)]
        lesson: Option<String>,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long)]
        phonetic: Option<String>,

        #[arg(long)]
        audio: Option<String>,

        #[arg(long)]
        base_word: Option<String>,
    },
    /// Delete a sentence
    Delete {
        id: SentenceId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Keeps the sentences matching every given criterion.
pub fn filter_sentences<'a>(
    sentences: &'a [Sentence],
    domain: Option<&DomainId>,
    lesson: Option<&LessonId>,
    search: Option<&str>,
) -> Vec<&'a Sentence> {
    sentences
        .iter()
        .filter(|s| domain.is_none_or(|d| s.domain_id() == Some(d)))
        .filter(|s| lesson.is_none_or(|l| s.lesson_id() == Some(l)))
        .filter(|s| search.is_none_or(|term| s.matches(term)))
        .collect()
}

pub async fn run(state: &AppState, command: SentencesCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        SentencesCommand::List {
            domain,
            lesson,
            search,
            page,
            page_size,
        } => {
            let filter = SentenceFilter {
                limit: MAX_LIMIT,
                ..SentenceFilter::default()
            };
            let sentences = state
                .track(AdminSentenceService::list(client, &filter))
                .await?
                .data;
            let matching = filter_sentences(
                &sentences,
                domain.as_ref(),
                lesson.as_ref(),
                search.as_deref(),
            );
            let page = paginate(&matching, page_index(page), page_size);

            if out.json {
                return output::json(page.items);
            }
            let mut table = Table::new(["ID", "TEXT", "PHONETIC", "LESSON"]);
            for s in page.items {
                table.row([
                    s.id.to_string(),
                    output::truncate(&s.text, 50),
                    output::cell(s.phonetic.as_deref()),
                    output::cell(s.lesson_title()),
                ]);
            }
            if !table.is_empty() {
                println!();
                table.print();
            }
            print_page_footer(&page);
        }
        SentencesCommand::Create {
            lesson,
            text,
            phonetic,
            audio,
            base_word,
        } => {
            let dto = validated(CreateSentenceDto {
                lesson_id: text_or_prompt(lesson, "Lesson ID")?,
                text: text_or_prompt(text, "Text")?,
                phonetic,
                audio,
                base_word_id: base_word,
            })?;
            let sentence = state
                .track(AdminSentenceService::create(client, &dto))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Sentence creation failed: empty response from server"))?;
            info!(sentence.id = %sentence.id, "Sentence created");

            if out.json {
                return output::json(&sentence);
            }
            output::success("Sentence created successfully!");
            print_fields(&sentence);
        }
        SentencesCommand::Update {
            id,
            lesson,
            text,
            phonetic,
            audio,
            base_word,
        } => {
            let dto = UpdateSentenceDto {
                text,
                phonetic,
                audio,
                base_word_id: base_word,
                lesson_id: lesson,
            };
            if dto.text.is_none()
                && dto.phonetic.is_none()
                && dto.audio.is_none()
                && dto.base_word_id.is_none()
                && dto.lesson_id.is_none()
            {
                bail!("Nothing to update: pass at least one field");
            }
            let dto = validated(dto)?;
            let sentence = state
                .track(AdminSentenceService::update(client, &id, &dto))
                .await?
                .into_data();

            if out.json {
                return output::json(&sentence);
            }
            output::success("Sentence updated successfully!");
            match sentence {
                Some(sentence) => print_fields(&sentence),
                None => output::field("ID", &id),
            }
        }
        SentencesCommand::Delete { id, yes } => {
            if !confirm(yes, &format!("Delete sentence {}?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            let deleted = state
                .track(AdminSentenceService::delete(client, &id))
                .await?
                .into_data();

            if out.json {
                return output::json(&deleted);
            }
            output::success("Sentence deleted successfully!");
            output::field("ID", deleted.map_or(id, |d| d.id));
        }
    }
    Ok(())
}

fn print_fields(sentence: &Sentence) {
    output::field("ID", &sentence.id);
    output::field("Text", &sentence.text);
    output::field("Phonetic", output::cell(sentence.phonetic.as_deref()));
    output::field("Lesson", output::cell(sentence.lesson_title()));
}
