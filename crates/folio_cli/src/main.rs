//! CLI preview probe.
//!
//! # Responsibility
//! - Render the project card sections to stdout without a browser, for
//!   quick local checks and static previews.
//! - Accept an optional path argument to preview a different data file.

use folio_core::{render_project_card, ProjectStore, RenderOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("FOLIO_LOG_DIR") {
        if let Err(err) = folio_core::init_logging(folio_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let store = match load_store() {
        Ok(store) => store,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "event=preview_start module=folio_cli status=ok projects={}",
        store.len()
    );

    let options = RenderOptions::default();
    println!(
        "<!-- folio_core {} | {} projects -->",
        folio_core::core_version(),
        store.len()
    );
    for project in store.featured() {
        println!("{}", render_project_card(project, false, &options));
    }
    for project in store.additional() {
        println!("{}", render_project_card(project, true, &options));
    }

    ExitCode::SUCCESS
}

fn load_store() -> Result<ProjectStore, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let payload = std::fs::read_to_string(&path)
                .map_err(|err| format!("cannot read `{path}`: {err}"))?;
            ProjectStore::from_json(&payload).map_err(|err| format!("cannot load `{path}`: {err}"))
        }
        None => ProjectStore::embedded()
            .map_err(|err| format!("embedded project data is invalid: {err}")),
    }
}
