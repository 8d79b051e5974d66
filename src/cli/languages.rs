use anyhow::{anyhow, bail};
use clap::Subcommand;
use linguaboard_client::services::{AdminLanguageService, LanguageService};
use linguaboard_core::paginate;
use linguaboard_models::ids::LanguageId;
use linguaboard_models::{CreateLanguageDto, Language, UpdateLanguageDto, filter_search};
use tracing::info;

use crate::cli::{Output, confirm, page_index, print_page_footer, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Subcommand)]
pub enum LanguagesCommand {
    /// List languages
    List {
        /// Match against code and name
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Show one language
    Show { id: LanguageId },
    /// Create a language
    Create {
        /// Short code, e.g. EN
        #[arg(short, long)]
        code: Option<String>,

        #[arg(short, long)]
        name: Option<String>,
    },
    /// Update a language
    Update {
        id: LanguageId,

        #[arg(short, long)]
        code: Option<String>,

        #[arg(short, long)]
        name: Option<String>,
    },
    /// Delete a language
    Delete {
        id: LanguageId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: LanguagesCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        LanguagesCommand::List {
            search,
            page,
            page_size,
        } => {
            let languages = state.track(LanguageService::list(client)).await?;
            let matching: Vec<&Language> = filter_search(&languages, search.as_deref());
            let page = paginate(&matching, page_index(page), page_size);

            if out.json {
                return output::json(page.items);
            }
            let mut table = Table::new(["ID", "CODE", "NAME"]);
            for l in page.items {
                table.row([l.id.to_string(), l.code.clone(), l.name.clone()]);
            }
            if !table.is_empty() {
                println!();
                table.print();
            }
            print_page_footer(&page);
        }
        LanguagesCommand::Show { id } => {
            let language = state
                .track(AdminLanguageService::get(client, &id))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Language {} not found", id))?;
            if out.json {
                return output::json(&language);
            }
            print_language("🌐", &language);
        }
        LanguagesCommand::Create { code, name } => {
            let dto = validated(CreateLanguageDto {
                code: text_or_prompt(code, "Code")?,
                name: text_or_prompt(name, "Name")?,
            })?;
            let language = state
                .track(AdminLanguageService::create(client, &dto))
                .await?
                .into_data()
                .ok_or_else(|| anyhow!("Language creation failed: empty response from server"))?;
            info!(language.id = %language.id, "Language created");

            if out.json {
                return output::json(&language);
            }
            output::success("Language created successfully!");
            print_fields(&language);
        }
        LanguagesCommand::Update { id, code, name } => {
            let dto = UpdateLanguageDto { code, name };
            if dto.is_empty() {
                bail!("Nothing to update: pass --code or --name");
            }
            let dto = validated(dto)?;
            let language = state
                .track(AdminLanguageService::update(client, &id, &dto))
                .await?
                .into_data();

            if out.json {
                return output::json(&language);
            }
            output::success("Language updated successfully!");
            match language {
                Some(language) => print_fields(&language),
                None => output::field("ID", &id),
            }
        }
        LanguagesCommand::Delete { id, yes } => {
            if !confirm(yes, &format!("Delete language {}?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            let deleted = state
                .track(AdminLanguageService::delete(client, &id))
                .await?
                .into_data();

            if out.json {
                return output::json(&deleted);
            }
            output::success("Language deleted successfully!");
            match deleted.and_then(|d| d.deleted_language) {
                Some(language) => print_fields(&language),
                None => output::field("ID", &id),
            }
        }
    }
    Ok(())
}

fn print_language(icon: &str, language: &Language) {
    println!("\n{} {}", icon, language.name);
    print_fields(language);
}

fn print_fields(language: &Language) {
    output::field("ID", &language.id);
    output::field("Code", &language.code);
    output::field("Name", &language.name);
}
