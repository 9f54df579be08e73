use folio_core::{compose_url, AppViewModel, CardView, MailRoute};

/// Renders the whole view as a text block: a status line plus one row per
/// card.
pub(crate) fn render(view: &AppViewModel) -> String {
    let settled = if view.settled { "yes" } else { "no" };
    let revealed = view.cards.iter().filter(|card| card.revealed).count();
    let mut out = format!(
        "Cards: {} | revealed: {} | settled: {}",
        view.cards.len(),
        revealed,
        settled
    );
    for card in &view.cards {
        out.push('\n');
        out.push_str(&format_card_row(card));
    }
    out
}

fn format_card_row(card: &CardView) -> String {
    let reveal = if card.revealed { "*" } else { " " };
    match (&card.image_src, &card.placeholder) {
        (Some(src), _) => {
            let attempt = card.attempt.unwrap_or(0) + 1;
            format!(
                "[#{id}]{reveal} {name} ({domain}) — attempt {attempt}/{total}: {src}",
                id = card.card_id,
                name = card.name,
                domain = card.domain,
                total = card.attempts_total,
            )
        }
        (None, Some(placeholder)) => format!(
            "[#{id}]{reveal} {name} ({domain}) — preview unavailable [{initial}] {domain}",
            id = card.card_id,
            name = card.name,
            domain = card.domain,
            initial = placeholder.initial,
        ),
        (None, None) => format!(
            "[#{id}]{reveal} {name} ({domain})",
            id = card.card_id,
            name = card.name,
            domain = card.domain,
        ),
    }
}

/// Apple platforms open the native mail client; everything else gets a
/// webmail compose tab.
pub(crate) fn route_for_os(os: &str) -> MailRoute {
    match os {
        "macos" | "ios" => MailRoute::MailClient,
        _ => MailRoute::Webmail,
    }
}

pub(crate) fn contact_line(email: &str, route: MailRoute) -> String {
    format!("Contact: {}", compose_url(route, email, "Folio inquiry", ""))
}
