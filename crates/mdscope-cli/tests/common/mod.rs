#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create an `mdscope` command isolated from the user's config and environment.
///
/// No base path is set; callers pass `--base` or `MDSCOPE_BASE_PATH`.
#[allow(dead_code)]
pub fn mdscope_bare(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdscope"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("MDSCOPE_CONFIG", config_dir.join(".mdscope-absent.toml"));
    cmd.env_remove("MDSCOPE_BASE_PATH");
    cmd.env_remove("MDSCOPE_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// `mdscope --base <docs>`
#[allow(dead_code)]
pub fn mdscope_cmd(docs: &Path) -> Command {
    let mut cmd = mdscope_bare(docs);
    cmd.arg("--base").arg(docs);
    cmd
}

#[allow(dead_code)]
pub fn write(base: &Path, relative: &str, content: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small developer-center tree covering every command.
#[allow(dead_code)]
pub fn docs_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create docs dir");
    let base = dir.path();

    write(
        base,
        "api/payments.md",
        "# Payments API\n\nConfirm and cancel payments.\n\n## Endpoints\n\n| API | Method | Endpoint |\n|---|---|---|\n| Confirm payment | POST | /v1/payments/confirm |\n| Cancel payment | POST | /v1/payments/cancel |\n\n## Request\n\n```bash\ncurl -X POST https://api.example.com/v1/payments/confirm\n```\n\n```json\n{ \"amount\": 1000 }\n```\n\nSee the [guide](../guide/start.md \"Getting started\") and the [reference][ref].\n\n[ref]: https://docs.example.com/reference\n",
    );
    write(
        base,
        "guide/start.md",
        "# Getting Started\n\nInstall the SDK and make your first payments call.\n",
    );
    write(
        base,
        "sdk/js.md",
        "# JavaScript SDK\n\n## requestPayment()\n\nOpens the payment window.\n\n```javascript\nsdk.requestPayment({ amount: 1000 });\n```\n\n## cancel()\n\nCloses it.\n",
    );
    write(base, "guide/image/hidden.md", "# Hidden payments page");
    write(base, "README.md", "# Developer Center\n\nStart here.\n");

    dir
}
