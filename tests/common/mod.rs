//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const LIVE_URL: &str = "https://alice-portfolio.vercel.app";
pub const TOKEN: &str = "secret-token";

/// Write an executable shell script standing in for the deployment CLI.
#[cfg(unix)]
pub fn fake_cli(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// CLI that checks its flags and staged files, appends its cwd to `log`, and prints the URL.
#[cfg(unix)]
pub fn succeeding_cli(dir: &Path, log: &Path) -> PathBuf {
    fake_cli(
        dir,
        "vercel-ok",
        &format!(
            r#"[ "$1" = "--token" ] && [ "$2" = "{token}" ] && [ "$3" = "-y" ] && [ "$4" = "--prod" ] || {{ echo "bad args: $*" >&2; exit 2; }}
[ -f index.html ] && [ -f vercel.json ] || {{ echo "not staged" >&2; exit 3; }}
pwd >> "{log}"
echo "{url}""#,
            token = TOKEN,
            log = log.display(),
            url = LIVE_URL,
        ),
    )
}

/// CLI that rejects the token.
#[cfg(unix)]
pub fn failing_cli(dir: &Path) -> PathBuf {
    fake_cli(dir, "vercel-bad", "echo \"Error: invalid token\" >&2\nexit 1")
}

pub fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

pub const PROFILE_BODY: &str = r#"{"login":"alice","name":"Alice Liddell","bio":"Down the rabbit hole","avatar_url":"https://avatars.example/alice.png","public_repos":12}"#;

pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
