use url::form_urlencoded;

/// Which compose surface the contact shortcut should open.
///
/// Apple platforms get the native mail client via `mailto:`; everywhere
/// else a webmail compose tab is the safer bet. The platform sniff itself
/// belongs to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailRoute {
    MailClient,
    Webmail,
}

pub fn compose_url(route: MailRoute, to: &str, subject: &str, body: &str) -> String {
    match route {
        MailRoute::MailClient => mailto_url(to, subject, body),
        MailRoute::Webmail => webmail_compose_url(to, subject, body),
    }
}

/// `mailto:` link with `subject`/`body` query parameters, each included
/// only when non-empty.
pub fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if !subject.is_empty() {
        params.append_pair("subject", subject);
    }
    if !body.is_empty() {
        params.append_pair("body", body);
    }
    let query = params.finish();
    if query.is_empty() {
        format!("mailto:{to}")
    } else {
        format!("mailto:{to}?{query}")
    }
}

/// Gmail compose URL opening a new message to `to`.
pub fn webmail_compose_url(to: &str, subject: &str, body: &str) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("view", "cm");
    params.append_pair("fs", "1");
    params.append_pair("to", to);
    if !subject.is_empty() {
        params.append_pair("su", subject);
    }
    if !body.is_empty() {
        params.append_pair("body", body);
    }
    format!("https://mail.google.com/mail/?{}", params.finish())
}

#[cfg(test)]
mod tests {
    use super::{compose_url, mailto_url, webmail_compose_url, MailRoute};

    #[test]
    fn mailto_without_subject_or_body_has_no_query() {
        assert_eq!(mailto_url("me@example.com", "", ""), "mailto:me@example.com");
    }

    #[test]
    fn mailto_encodes_parameters() {
        let url = mailto_url("me@example.com", "Folio inquiry", "Name: Ada\n\nHello");
        assert!(url.starts_with("mailto:me@example.com?"));
        assert!(url.contains("subject=Folio+inquiry"));
        assert!(url.contains("body=Name%3A+Ada%0A%0AHello"));
    }

    #[test]
    fn webmail_compose_carries_fixed_view_params() {
        let url = webmail_compose_url("me@example.com", "Hi", "");
        assert!(url.starts_with("https://mail.google.com/mail/?"));
        assert!(url.contains("view=cm"));
        assert!(url.contains("fs=1"));
        assert!(url.contains("to=me%40example.com"));
        assert!(url.contains("su=Hi"));
        assert!(!url.contains("body="));
    }

    #[test]
    fn compose_url_dispatches_on_route() {
        let mailto = compose_url(MailRoute::MailClient, "me@example.com", "", "");
        let webmail = compose_url(MailRoute::Webmail, "me@example.com", "", "");
        assert!(mailto.starts_with("mailto:"));
        assert!(webmail.starts_with("https://mail.google.com/"));
    }
}
