use marquee_core::{AppViewModel, ListBody};

/// Renders the view model to stdout.
pub fn print_view(view: &AppViewModel) {
    print!("{}", format_view(view));
}

fn format_view(view: &AppViewModel) -> String {
    let mut out = String::new();

    out.push_str("----------------------------------------\n");
    if view.fetch_enabled {
        out.push_str(&format!("[f] {}\n", view.fetch_label));
    } else {
        out.push_str(&format!("    {} (unavailable)\n", view.fetch_label));
    }
    if view.cancel_retry_visible {
        out.push_str("[c] Cancel Retry\n");
    }
    if let Some(message) = &view.error_message {
        out.push_str(&format!("! {}\n", message));
    }

    match &view.body {
        ListBody::Loading => out.push_str("Loading...\n"),
        ListBody::Empty => out.push_str("Found no movies.\n"),
        ListBody::Movies(rows) => {
            for row in rows {
                out.push_str(&format!(
                    "#{} {} ({})\n    {}\n",
                    row.id, row.title, row.release_date, row.opening_text
                ));
            }
        }
    }

    out
}
