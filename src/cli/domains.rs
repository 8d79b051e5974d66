use std::path::PathBuf;

use anyhow::bail;
use clap::Subcommand;
use linguaboard_client::services::AdminDomainService;
use linguaboard_models::ids::DomainId;
use linguaboard_models::{CreateDomainForm, Domain, DomainFilter, UpdateDomainForm};
use tracing::info;

use crate::cli::{Output, confirm, read_image, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Subcommand)]
pub enum DomainsCommand {
    /// List domains
    List {
        /// Substring of the domain name
        #[arg(short, long)]
        name: Option<String>,

        /// Language code to restrict to
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Show one domain
    Show { id: DomainId },
    /// Create a domain
    Create {
        #[arg(short, long)]
        name: Option<String>,

        /// Code of the language the domain belongs to
        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Cover image (jpeg, png, gif or webp, at most 5 MB)
        #[arg(short, long)]
        image: Option<PathBuf>,

        #[arg(long)]
        lesson_count: Option<u32>,
    },
    /// Update a domain
    Update {
        id: DomainId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        image: Option<PathBuf>,

        #[arg(long)]
        lesson_count: Option<u32>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a domain
    Delete {
        id: DomainId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: DomainsCommand, out: Output) -> anyhow::Result<()> {
    let client = &state.client;
    match command {
        DomainsCommand::List { name, language } => {
            let filter = DomainFilter {
                name,
                filter_language: language,
            };
            let domains = state
                .track(AdminDomainService::list_all(client, &filter))
                .await?;

            if out.json {
                return output::json(&domains);
            }
            let mut table = Table::new(["ID", "NAME", "LANGUAGE", "LESSONS", "ACTIVE"]);
            for d in &domains.data {
                table.row([
                    d.id.to_string(),
                    d.name.clone(),
                    output::cell(d.language_label()),
                    output::cell(d.lesson_count),
                    output::cell(d.is_active.map(output::yes_no)),
                ]);
            }
            if table.is_empty() {
                println!("\nNo results.");
            } else {
                println!();
                table.print();
                println!("\n{} domain(s)", domains.total());
            }
        }
        DomainsCommand::Show { id } => {
            let domain = state.track(AdminDomainService::get(client, &id)).await?;
            if out.json {
                return output::json(&domain);
            }
            println!("\n📚 {}", domain.name);
            print_fields(&domain);
        }
        DomainsCommand::Create {
            name,
            language,
            description,
            image,
            lesson_count,
        } => {
            let image = match image {
                Some(path) => Some(read_image(&path).await?),
                None => None,
            };
            let form = validated(CreateDomainForm {
                name: text_or_prompt(name, "Name")?,
                language_code: text_or_prompt(language, "Language code")?,
                description,
                image,
                lesson_count,
            })?;
            let domain = state.track(AdminDomainService::create(client, &form)).await?;
            info!(domain.id = %domain.id, "Domain created");

            if out.json {
                return output::json(&domain);
            }
            output::success("Domain created successfully!");
            print_fields(&domain);
        }
        DomainsCommand::Update {
            id,
            name,
            language,
            description,
            image,
            lesson_count,
            active,
        } => {
            let image = match image {
                Some(path) => Some(read_image(&path).await?),
                None => None,
            };
            let form = UpdateDomainForm {
                name,
                language_code: language,
                description,
                image,
                lesson_count,
                is_active: active,
            };
            if form.to_form().is_empty() {
                bail!("Nothing to update: pass at least one field");
            }
            let form = validated(form)?;
            let domain = state
                .track(AdminDomainService::update(client, &id, &form))
                .await?;

            if out.json {
                return output::json(&domain);
            }
            output::success("Domain updated successfully!");
            print_fields(&domain);
        }
        DomainsCommand::Delete { id, yes } => {
            if !confirm(yes, &format!("Delete domain {}?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            let response = state.track(AdminDomainService::delete(client, &id)).await?;

            if out.json {
                return output::json(&response);
            }
            output::success("Domain deleted successfully!");
            output::field("ID", &id);
            if let Some(message) = response.message {
                output::field("Server", message);
            }
        }
    }
    Ok(())
}

fn print_fields(domain: &Domain) {
    output::field("ID", &domain.id);
    output::field("Name", &domain.name);
    output::field("Language", output::cell(domain.language_label()));
    output::field("Description", output::cell(domain.description.as_deref()));
    output::field("Lessons", output::cell(domain.lesson_count));
    output::field("Image", output::cell(domain.image.as_deref()));
}
