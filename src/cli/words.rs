use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::{Args, Subcommand};
use linguaboard_client::services::AdminWordService;
use linguaboard_core::SortOrder;
use linguaboard_core::pagination::DEFAULT_LIMIT;
use linguaboard_models::ids::{DomainId, LessonId, WordId};
use linguaboard_models::value_types::{Difficulty, SentenceDifficulty};
use linguaboard_models::{CreateWordForm, UpdateWordForm, Word, WordFilter};
use tracing::info;

use crate::cli::{Output, confirm, read_images, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Args)]
pub struct NewWordArgs {
    #[arg(short, long)]
    lesson: Option<String>,

    #[arg(short, long)]
    word: Option<String>,

    /// Example sentence using the word
    #[arg(short, long)]
    sentence: Option<String>,

    #[arg(short, long)]
    phonetic: Option<String>,

    /// Image file; repeat for several
    #[arg(short, long = "image")]
    images: Vec<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum WordsCommand {
    /// List words
    List {
        #[arg(short, long)]
        lesson: Option<LessonId>,

        #[arg(short, long)]
        domain: Option<DomainId>,

        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        sort_order: SortOrder,
    },
    /// Show one word
    Show { id: WordId },
    /// Create a word
    Create(NewWordArgs),
    /// Create the word in every domain that has the lesson
    Bulk(NewWordArgs),
    /// Update a word
    Update {
        id: WordId,

        #[arg(short, long)]
        lesson: Option<String>,

        #[arg(short, long)]
        word: Option<String>,

        #[arg(short, long)]
        sentence: Option<String>,

        #[arg(short, long)]
        phonetic: Option<String>,

        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        sentence_phonetic: Option<String>,

        #[arg(long)]
        sentence_difficulty: Option<SentenceDifficulty>,

        /// Image file; repeat for several
        #[arg(short, long = "image")]
        images: Vec<PathBuf>,

        /// Replace the stored images instead of adding to them
        #[arg(long)]
        replace_images: bool,
    },
    /// Delete a word
    Delete {
        id: WordId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: WordsCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        WordsCommand::List {
            lesson,
            domain,
            difficulty,
            search,
            page,
            limit,
            sort_order,
        } => {
            let filter = WordFilter {
                difficulty,
                lesson_id: lesson,
                search,
                page,
                limit,
                sort_order,
                domain_id: domain,
                ..WordFilter::default()
            };
            let words = state.track(AdminWordService::list(client, &filter)).await?;

            if out.json {
                return output::json(&words);
            }
            let mut table = Table::new(["ID", "WORD", "PHONETIC", "DIFFICULTY", "LESSON", "IMAGES"]);
            for w in &words.data {
                table.row([
                    w.id.to_string(),
                    w.word.clone(),
                    output::cell(w.phonetic.as_deref()),
                    output::cell(w.difficulty),
                    output::cell(w.lesson_title()),
                    w.images.len().to_string(),
                ]);
            }
            if table.is_empty() {
                println!("\nNo results.");
                return Ok(());
            }
            println!();
            table.print();
            match words.total_pages() {
                Some(pages) => println!(
                    "\n{} word(s), page {}/{}",
                    words.total(),
                    words.page.unwrap_or(filter.page),
                    pages
                ),
                None => println!("\n{} word(s)", words.total()),
            }
        }
        WordsCommand::Show { id } => {
            let word = state
                .track(AdminWordService::get(client, &id))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Word {} not found", id))?;
            if out.json {
                return output::json(&word);
            }
            println!("\n🔤 {}", word.word);
            print_fields(&word);
        }
        WordsCommand::Create(args) => {
            let form = new_word_form(args).await?;
            let word = state
                .track(AdminWordService::create(client, &form))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Word creation failed: empty response from server"))?;
            info!(word.id = %word.id, "Word created");

            if out.json {
                return output::json(&word);
            }
            output::success("Word created successfully!");
            print_fields(&word);
        }
        WordsCommand::Bulk(args) => {
            let form = new_word_form(args).await?;
            let result = state
                .track(AdminWordService::bulk_create(client, &form))
                .await?;
            let created = result.created_count.unwrap_or(result.data.len() as u64);
            info!(created, skipped = result.skipped.len(), "Words created in bulk");

            if out.json {
                return output::json(&result);
            }
            output::success("Words created successfully!");
            output::field("Created", created);
            output::field("Skipped", result.skipped.len());
            for skipped in &result.skipped {
                println!(
                    "     - domain {}: {}",
                    output::cell(skipped.domain_id.as_ref()),
                    output::cell(skipped.reason.as_deref())
                );
            }
        }
        WordsCommand::Update {
            id,
            lesson,
            word,
            sentence,
            phonetic,
            difficulty,
            sentence_phonetic,
            sentence_difficulty,
            images,
            replace_images,
        } => {
            let form = UpdateWordForm {
                lesson_id: lesson,
                word,
                sentence,
                phonetic,
                difficulty,
                sentence_phonetic,
                sentence_difficulty,
                replace_images: replace_images.then_some(true),
                images: read_images(&images).await?,
                ..UpdateWordForm::default()
            };
            if form.to_form().is_empty() {
                bail!("Nothing to update: pass at least one field");
            }
            let form = validated(form)?;
            let word = state
                .track(AdminWordService::update(client, &id, &form))
                .await?
                .into_data();

            if out.json {
                return output::json(&word);
            }
            output::success("Word updated successfully!");
            match word {
                Some(word) => print_fields(&word),
                None => output::field("ID", &id),
            }
        }
        WordsCommand::Delete { id, yes } => {
            if !confirm(yes, &format!("Delete word {}?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            let deleted = state
                .track(AdminWordService::delete(client, &id))
                .await?
                .into_data();

            if out.json {
                return output::json(&deleted);
            }
            output::success("Word deleted successfully!");
            output::field("ID", deleted.map_or(id, |d| d.id));
        }
    }
    Ok(())
}

async fn new_word_form(args: NewWordArgs) -> anyhow::Result<CreateWordForm> {
    let images = read_images(&args.images).await?;
    validated(CreateWordForm {
        lesson_id: text_or_prompt(args.lesson, "Lesson ID")?,
        word: text_or_prompt(args.word, "Word")?,
        sentence: args.sentence,
        phonetic: args.phonetic,
        images,
    })
}

fn print_fields(word: &Word) {
    output::field("ID", &word.id);
    output::field("Word", &word.word);
    output::field("Phonetic", output::cell(word.phonetic.as_deref()));
    output::field("Difficulty", output::cell(word.difficulty));
    output::field("Sentence", output::cell(word.sentence.as_deref()));
    output::field("Lesson", output::cell(word.lesson_title()));
    output::field("Images", word.images.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_repeated_images() {
        let cli = Cli::try_parse_from([
            "linguaboard",
            "words",
            "create",
            "--lesson",
            "l1",
            "--word",
            "chat",
            "--image",
            "a.jpg",
            "-i",
            "b.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Words(WordsCommand::Create(args)) => {
                assert_eq!(args.lesson.as_deref(), Some("l1"));
                assert_eq!(
                    args.images,
                    vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_list_rejects_unknown_difficulty() {
        let result = Cli::try_parse_from(["linguaboard", "words", "list", "--difficulty", "extreme"]);
        assert!(result.is_err());
    }
}
