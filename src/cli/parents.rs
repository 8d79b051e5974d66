use anyhow::{Context, anyhow, bail};
use clap::Subcommand;
use dialoguer::Password;
use linguaboard_client::services::AdminParentService;
use linguaboard_core::paginate;
use linguaboard_models::ids::UserId;
use linguaboard_models::value_types::{ParentStatus, PreferredLanguage};
use linguaboard_models::{
    CreateParentDto, ParentStatusFilter, ParentWithChildren, UpdateParentDto, filter_search,
};
use tracing::info;

use crate::cli::{Output, confirm, page_index, print_page_footer, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Subcommand)]
pub enum ParentsCommand {
    /// List parent accounts
    List {
        /// Match against name, email and phone
        #[arg(short, long)]
        search: Option<String>,

        /// active, inactive or all
        #[arg(long, default_value = "all")]
        status: ParentStatus,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },
    /// Show one parent with their children
    Show { id: UserId },
    /// Create a parent account
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short, long)]
        password: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// 4 to 6 digit parental PIN (will be prompted securely if not provided)
        #[arg(long)]
        pin: Option<String>,

        #[arg(long)]
        preferred_language: Option<PreferredLanguage>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        timezone: Option<String>,
    },
    /// Update a parent account
    Update {
        id: UserId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },
    /// Delete a parent and all of their children
    Delete {
        id: UserId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Activate a parent account
    Activate { id: UserId },
    /// Deactivate a parent account
    Deactivate { id: UserId },
    /// Flip the activation state of a parent account
    Toggle { id: UserId },
}

pub async fn run(state: &AppState, command: ParentsCommand, out: Output) -> anyhow::Result<()> {
    match command {
        ParentsCommand::List {
            search,
            status,
            page,
            page_size,
        } => list(state, search, status, page, page_size, out).await,
        ParentsCommand::Show { id } => show(state, &id, out).await,
        ParentsCommand::Create {
            name,
            email,
            password,
            phone,
            pin,
            preferred_language,
            country,
            timezone,
        } => {
            let name = text_or_prompt(name, "Name")?;
            let email = text_or_prompt(email, "Email address")?;
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .context("Failed to read password")?,
            };
            let parent_pin = match pin {
                Some(pin) => pin,
                None => Password::new()
                    .with_prompt("Parental PIN")
                    .interact()
                    .context("Failed to read PIN")?,
            };

            let dto = validated(CreateParentDto {
                name,
                email,
                password,
                phone,
                parent_pin,
                preferred_language,
                country,
                timezone,
                subscription_status: None,
            })?;
            create(state, &dto, out).await
        }
        ParentsCommand::Update {
            id,
            name,
            email,
            phone,
            password,
        } => {
            let dto = UpdateParentDto {
                name,
                email,
                phone,
                password,
                is_active: None,
            };
            if dto.is_empty() {
                bail!("Nothing to update: pass at least one field");
            }
            let dto = validated(dto)?;
            update(state, &id, &dto, out).await
        }
        ParentsCommand::Delete { id, yes } => {
            if !confirm(yes, &format!("Delete parent {} and all their children?", id))? {
                println!("Aborted.");
                return Ok(());
            }
            delete(state, &id, out).await
        }
        ParentsCommand::Activate { id } => set_active(state, &id, true, out).await,
        ParentsCommand::Deactivate { id } => set_active(state, &id, false, out).await,
        ParentsCommand::Toggle { id } => toggle(state, &id, out).await,
    }
}

async fn list(
    state: &AppState,
    search: Option<String>,
    status: ParentStatus,
    page: usize,
    page_size: usize,
    out: Output,
) -> anyhow::Result<()> {
    let parents = match status {
        ParentStatus::All => {
            state
                .track(AdminParentService::list(&state.client))
                .await?
                .data
        }
        status => {
            state
                .track(AdminParentService::list_by_status(
                    &state.client,
                    &ParentStatusFilter { status },
                ))
                .await?
                .data
        }
    };

    let matching: Vec<&ParentWithChildren> = filter_search(&parents, search.as_deref());
    let page = paginate(&matching, page_index(page), page_size);

    if out.json {
        return output::json(page.items);
    }

    let mut table = Table::new(["ID", "NAME", "EMAIL", "PHONE", "CHILDREN", "SCORE", "ACTIVE"]);
    for p in page.items {
        table.row([
            p.parent.id.to_string(),
            p.parent.name.clone(),
            p.parent.email.clone(),
            output::cell(p.parent.phone.as_deref()),
            p.child_count().to_string(),
            output::cell(p.total_children_score),
            output::yes_no(p.parent.active()).to_string(),
        ]);
    }
    if !table.is_empty() {
        println!();
        table.print();
    }
    print_page_footer(&page);
    Ok(())
}

async fn show(state: &AppState, id: &UserId, out: Output) -> anyhow::Result<()> {
    let parent = state
        .track(AdminParentService::get(&state.client, id))
        .await?
        .into_data()
        .ok_or_else(|| anyhow!("Parent {} not found", id))?;

    if out.json {
        return output::json(&parent);
    }

    println!("\n👤 {}", parent.parent.name);
    output::field("ID", &parent.parent.id);
    output::field("Email", &parent.parent.email);
    output::field("Phone", output::cell(parent.parent.phone.as_deref()));
    output::field("Active", output::yes_no(parent.parent.active()));
    output::field("Country", output::cell(parent.parent.country.as_deref()));
    output::field("Children", parent.child_count());

    if !parent.children.is_empty() {
        println!();
        let mut table = Table::new(["ID", "NAME", "AGE", "LANGUAGE", "SCORE"]);
        for child in &parent.children {
            table.row([
                child.id.to_string(),
                child.name.clone(),
                output::cell(child.age),
                output::cell(child.selected_language.as_deref()),
                output::cell(child.score),
            ]);
        }
        table.print();
    }
    Ok(())
}

async fn create(state: &AppState, dto: &CreateParentDto, out: Output) -> anyhow::Result<()> {
    let created = state
        .track(AdminParentService::create(&state.client, dto))
        .await?
        .into_data()
        .ok_or_else(|| anyhow!("Parent creation failed: empty response from server"))?;
    info!(parent.id = %created.id, "Parent created");

    if out.json {
        return output::json(&created);
    }
    output::success("Parent created successfully!");
    output::field("ID", &created.id);
    output::field("Name", &created.name);
    output::field("Email", &created.email);
    Ok(())
}

async fn update(
    state: &AppState,
    id: &UserId,
    dto: &UpdateParentDto,
    out: Output,
) -> anyhow::Result<()> {
    let updated = state
        .track(AdminParentService::update(&state.client, id, dto))
        .await?
        .into_data();

    if out.json {
        return output::json(&updated);
    }
    output::success("Parent updated successfully!");
    output::field("ID", id);
    if let Some(parent) = updated {
        output::field("Name", &parent.name);
        output::field("Email", &parent.email);
    }
    Ok(())
}

async fn delete(state: &AppState, id: &UserId, out: Output) -> anyhow::Result<()> {
    let deleted = state
        .track(AdminParentService::delete(&state.client, id))
        .await?
        .into_data();

    if out.json {
        return output::json(&deleted);
    }
    output::success("Parent deleted successfully!");
    output::field("ID", id);
    if let Some(deleted) = deleted {
        if let Some(email) = deleted.deleted_parent.and_then(|p| p.email) {
            output::field("Email", email);
        }
        output::field("Children removed", deleted.deleted_children_count.unwrap_or(0));
    }
    Ok(())
}

async fn set_active(state: &AppState, id: &UserId, active: bool, out: Output) -> anyhow::Result<()> {
    let confirmed = apply_status(state, id, active).await?;

    if out.json {
        return output::json(&serde_json::json!({ "id": id, "isActive": confirmed }));
    }
    let verb = if confirmed { "activated" } else { "deactivated" };
    output::success(&format!("Parent {} successfully!", verb));
    output::field("ID", id);
    Ok(())
}

async fn toggle(state: &AppState, id: &UserId, out: Output) -> anyhow::Result<()> {
    let current = state
        .track(AdminParentService::get(&state.client, id))
        .await?
        .into_data()
        .ok_or_else(|| anyhow!("Parent {} not found", id))?;

    set_active(state, id, !current.parent.active(), out).await
}

/// Sends the (de)activation and returns the state the server confirmed,
/// falling back to the requested one when the response omits it.
async fn apply_status(state: &AppState, id: &UserId, activate: bool) -> anyhow::Result<bool> {
    let call = if activate {
        AdminParentService::activate(&state.client, id)
    } else {
        AdminParentService::deactivate(&state.client, id)
    };
    let response = state.track(call).await?;
    let confirmed = response
        .into_data()
        .and_then(|parent| parent.is_active)
        .unwrap_or(activate);

    info!(parent.id = %id, active = confirmed, "Parent status changed");
    Ok(confirmed)
}
