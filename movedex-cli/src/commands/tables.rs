use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movedex_core::{MoveCategory, MoveType};

pub(crate) fn run_tables() {
    log::info!("{}", "Types:".if_supports_color(Stdout, |t| t.bold()));
    for t in MoveType::all() {
        log::info!(
            "  {} → {}",
            t.label(),
            t.code().if_supports_color(Stdout, |s| s.cyan()),
        );
    }

    log::info!("");
    log::info!("{}", "Categories:".if_supports_color(Stdout, |t| t.bold()));
    for c in MoveCategory::all() {
        log::info!(
            "  {} → {}{}",
            c.label(),
            c.code().if_supports_color(Stdout, |s| s.cyan()),
            if c.is_damaging() {
                String::new()
            } else {
                format!(" {}", "(excluded)".if_supports_color(Stdout, |s| s.dimmed()))
            },
        );
    }
}
