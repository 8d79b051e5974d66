use serde_json::json;

use crate::cli::Output;
use crate::output;
use crate::state::AppState;

/// Prints the effective configuration. Fails if the base URL is unusable.
pub fn show(state: &AppState, out: Output) -> anyhow::Result<()> {
    let api = &state.api_config;
    api.validate()?;

    if out.json {
        return output::json(&json!({
            "baseUrl": api.base_url,
            "docsUrl": api.docs_url(),
            "timeoutSecs": api.timeout.as_secs(),
            "withCredentials": api.with_credentials,
            "userAgent": api.user_agent,
            "sessionFile": state.storage_config.session_file,
        }));
    }

    println!("\n⚙️  Settings");
    output::field("API base URL", &api.base_url);
    output::field("API docs", api.docs_url());
    output::field("Timeout", format!("{}s", api.timeout.as_secs()));
    output::field("Cookies", output::yes_no(api.with_credentials));
    output::field("User agent", &api.user_agent);
    output::field("Session file", state.storage_config.session_file.display());
    Ok(())
}
