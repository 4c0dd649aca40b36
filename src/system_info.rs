use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

fn profile() -> &'static str {
    if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    }
}

fn release_label() -> String {
    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {}", tag),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("development branch {} commits ahead of {}", ahead, latest)
        }
        _ if !latest.is_empty() => format!("development branch ahead of {}", latest),
        _ => "development".to_string(),
    }
}

/// One-line version for the health endpoint.
pub fn version_string() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), COMMIT)
}

/// Multi-line build description shown to the owner by `/status`.
pub fn get_system_info() -> String {
    format!(
        "{} {} - {}\nCommit: {}\n{} build",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        release_label(),
        COMMIT,
        profile()
    )
}
