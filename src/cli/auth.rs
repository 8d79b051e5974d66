use anyhow::{Context, anyhow};
use dialoguer::Password;
use linguaboard_client::services::AuthService;
use linguaboard_models::SigninRequest;
use tracing::info;

use crate::cli::{Output, text_or_prompt};
use crate::output::{self, Table};
use crate::state::AppState;
use crate::validation::validated;

pub async fn signin(
    state: &AppState,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let email = text_or_prompt(email, "Email address")?;
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    let request = validated(SigninRequest { email, password })?;
    let response = state
        .track(AuthService::signin_admin(&state.client, &request))
        .await?;

    let token = response
        .token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| anyhow!("Sign-in failed: no token in response"))?;
    state.session.store_login(&token, &response.user).await?;
    info!(email = %request.email, "Signed in");

    output::success("Signed in successfully!");
    output::field("Email", &request.email);
    if let Some(user) = &response.user {
        output::field("Name", output::cell(user.name.as_deref()));
        output::field("Role", output::cell(user.role.as_deref()));
    }
    Ok(())
}

pub async fn signout(state: &AppState) -> anyhow::Result<()> {
    state.session.clear_auth().await?;
    output::success("Signed out successfully!");
    Ok(())
}

pub async fn whoami(state: &AppState, out: Output) -> anyhow::Result<()> {
    let profile = state
        .track(AuthService::admin_profile(&state.client))
        .await?;

    if out.json {
        return output::json(&profile);
    }

    match &profile.admin {
        Some(admin) => {
            println!("\n👤 {}", output::cell(admin.name.as_deref()));
            output::field("Email", output::cell(admin.email.as_deref()));
            output::field("Role", output::cell(admin.role.as_deref()));
            output::field("ID", &admin.id);
        }
        None => println!("\n👤 Profile unavailable"),
    }

    if let Some(stats) = &profile.statistics {
        println!();
        let mut table = Table::new(["USERS", "ACTIVE", "INACTIVE", "CHILDREN"]);
        table.row([
            output::cell(stats.total_users),
            output::cell(stats.active_users),
            output::cell(stats.inactive_users),
            output::cell(stats.total_children),
        ]);
        table.print();
    }
    Ok(())
}
