//! Terminal rendering of the views.

use std::future::Future;
use std::io::{IsTerminal, Write};

use taskdeck_core::views::ProjectCard;
use taskdeck_core::views::projects;

/// Await `future` while showing `label` on stderr.
///
/// The label is only drawn when stderr is a terminal and `show` is set, and
/// is erased once the future completes.
pub async fn with_loading<F: Future>(label: &str, show: bool, future: F) -> F::Output {
    let draw = show && std::io::stderr().is_terminal();
    if draw {
        eprint!("{}", label);
        let _ = std::io::stderr().flush();
    }

    let output = future.await;

    if draw {
        eprint!("\r\x1b[2K");
        let _ = std::io::stderr().flush();
    }
    output
}

/// Render project cards as plain text, one block per project.
pub fn format_project_cards(cards: &[ProjectCard]) -> String {
    let mut out = String::new();
    out.push_str(projects::TITLE);
    out.push('\n');

    if cards.is_empty() {
        out.push_str("No projects found.\n");
        return out;
    }

    for card in cards {
        out.push('\n');
        out.push_str(&format!("{} [{}]\n", card.name, card.badge_class));
        out.push_str(&format!("  {}\n", card.description));
        out.push_str(&format!(
            "  Created by: {}   Tasks: {}\n",
            card.creator, card.task_count
        ));
        out.push_str(&format!("  {}\n", card.link));
    }
    out
}
