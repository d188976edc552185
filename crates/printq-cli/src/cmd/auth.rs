use crate::output::print_json;
use anyhow::Context;
use printq_core::auth::{AuthConfig, Authenticator, Identity};
use printq_core::session::{FileSessionStore, SessionStore};
use std::path::Path;

pub fn login(root: &Path, email: &str, password: &str, json: bool) -> anyhow::Result<()> {
    let config = AuthConfig::load(root).context("failed to load identity registry")?;
    let auth = Authenticator::new(config);
    let identity = auth.authenticate(email, password)?;
    let is_admin = auth.is_administrator(&identity);

    FileSessionStore::new(root).save(&identity);

    if json {
        print_json(&serde_json::json!({
            "uid": identity.uid,
            "email": identity.email,
            "administrator": is_admin,
        }))?;
    } else if is_admin {
        println!("Logged in as {} (administrator)", identity.email);
    } else {
        println!("Logged in as {}", identity.email);
    }
    Ok(())
}

pub fn logout(root: &Path, json: bool) -> anyhow::Result<()> {
    FileSessionStore::new(root).clear();
    if json {
        print_json(&serde_json::json!({ "logged_out": true }))?;
    } else {
        println!("Logged out");
    }
    Ok(())
}

pub fn whoami(root: &Path, json: bool) -> anyhow::Result<()> {
    match FileSessionStore::new(root).load() {
        Some(identity) => {
            let config = AuthConfig::load(root).context("failed to load identity registry")?;
            let is_admin = Authenticator::new(config).is_administrator(&identity);
            if json {
                print_json(&serde_json::json!({
                    "uid": identity.uid,
                    "email": identity.email,
                    "administrator": is_admin,
                }))?;
            } else if is_admin {
                println!("{} (administrator)", identity.email);
            } else {
                println!("{}", identity.email);
            }
        }
        None => {
            if json {
                print_json(&serde_json::json!({ "session": null }))?;
            } else {
                println!("Not logged in");
            }
        }
    }
    Ok(())
}

/// Session identity required by order commands, or a re-prompt error.
pub fn require_session(root: &Path) -> anyhow::Result<Identity> {
    FileSessionStore::new(root)
        .load()
        .context("not logged in: run 'printq login <email> <password>'")
}
