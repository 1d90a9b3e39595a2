//! Server-rendered HTML for the landing and login pages.

use std::fmt::Write;

use crate::{
    constants::APP_TITLE,
    entities::{
        service_provider::{ProviderCard, ProviderProfile},
        view::{BackgroundImage, PresentationVariant, NO_RESULTS_MESSAGE},
    },
    errors::FieldError,
    utils::html::{escape, query_string},
};

pub struct LandingPage<'a> {
    pub variant: PresentationVariant,
    pub background: BackgroundImage,
    pub search_term: &'a str,
    pub selected_profession: Option<&'a str>,
    pub professions: &'a [String],
    pub suggestions: &'a [String],
    pub providers: &'a [ProviderCard],
    pub error: Option<&'a str>,
    pub profile: Option<&'a ProviderProfile>,
}

impl LandingPage<'_> {
    fn filtering(&self) -> bool {
        !self.search_term.is_empty() || self.selected_profession.is_some()
    }

    fn link(&self, term: &str, profession: Option<&str>, profile: Option<&str>) -> String {
        format!(
            "/{}",
            query_string(&[("q", Some(term)), ("profession", profession), ("profile", profile)])
        )
    }
}

pub fn render_landing(page: &LandingPage<'_>) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<section class="hero" style="background-image:url('{url}')">
<h2>{title}</h2>
<p>{description}</p>
</section>
<form class="search" method="get" action="/">
<input type="text" name="q" value="{term}" placeholder="Search by service or specialization..." autocomplete="off">
"#,
        url = escape(page.background.url),
        title = APP_TITLE,
        description = escape(page.background.description),
        term = escape(page.search_term),
    );
    if let Some(profession) = page.selected_profession {
        let _ = writeln!(body, r#"<input type="hidden" name="profession" value="{}">"#, escape(profession));
    }
    body.push_str("</form>\n");

    if !page.search_term.is_empty() && !page.suggestions.is_empty() {
        body.push_str("<ul class=\"suggestions\">\n");
        for suggestion in page.suggestions {
            let _ = writeln!(
                body,
                r#"<li><a href="{}">{}</a></li>"#,
                escape(&page.link(suggestion, page.selected_profession, None)),
                escape(suggestion)
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<nav class=\"categories\">\n");
    for profession in page.professions {
        let selected = page.selected_profession == Some(profession.as_str());
        // Clicking the active chip clears it
        let target = if selected { None } else { Some(profession.as_str()) };
        let _ = writeln!(
            body,
            r#"<a class="chip{}" href="{}">{}</a>"#,
            if selected { " selected" } else { "" },
            escape(&page.link(page.search_term, target, None)),
            escape(profession)
        );
    }
    body.push_str("</nav>\n");

    if let Some(error) = page.error {
        let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape(error));
    } else if !page.providers.is_empty() {
        let _ = writeln!(body, r#"<div class="grid {}">"#, variant_class(page.variant));
        for card in page.providers {
            render_card(&mut body, page, card);
        }
        body.push_str("</div>\n");
    } else if page.filtering() {
        let _ = writeln!(body, r#"<p class="empty">{}</p>"#, NO_RESULTS_MESSAGE);
    }

    if let Some(profile) = page.profile.filter(|_| page.variant.has_profile_overlay()) {
        let close = page.link(page.search_term, page.selected_profession, None);
        render_profile(&mut body, profile, &close);
    }

    body.push_str("<footer><a href=\"/login\">Login</a></footer>\n");

    layout(APP_TITLE, &body)
}

fn variant_class(variant: PresentationVariant) -> &'static str {
    match variant {
        PresentationVariant::Detailed => "detailed",
        PresentationVariant::Compact => "compact",
    }
}

fn render_card(body: &mut String, page: &LandingPage<'_>, card: &ProviderCard) {
    let _ = write!(
        body,
        r#"<article class="card">
<img src="{photo}" alt="{name}">
<div class="profession"><span class="icon">{icon}</span>{profession}</div>
<h3>{name}</h3>
<p class="experience">{years} years experience</p>
<p><strong>Age:</strong> {age} years</p>
<p><strong>Location:</strong> {location}</p>
"#,
        photo = escape(&card.photo_url),
        name = escape(&card.full_name),
        icon = card.icon.glyph(),
        profession = escape(&card.profession),
        years = card.experience_years,
        age = card.age,
        location = escape(&card.location),
    );
    if let Some(specialization) = &card.specialization {
        let _ = writeln!(body, "<p><strong>Specialization:</strong> {}</p>", escape(specialization));
    }
    if let Some(availability) = &card.availability {
        let _ = writeln!(body, "<p><strong>Availability:</strong> {}</p>", escape(availability));
    }

    body.push_str("<div class=\"actions\">\n");
    if page.variant.has_profile_overlay() {
        let id = card.id.to_string();
        let _ = writeln!(
            body,
            r#"<a class="view" href="{}">View Profile</a>"#,
            escape(&page.link(page.search_term, page.selected_profession, Some(&id)))
        );
    }
    // A sibling link, not nested in the profile link, so calling never opens the overlay
    let _ = writeln!(body, r#"<a class="contact" href="{}">Contact Now</a>"#, escape(&card.contact_uri));
    body.push_str("</div>\n</article>\n");
}

fn render_profile(body: &mut String, profile: &ProviderProfile, close_href: &str) {
    let _ = write!(
        body,
        r#"<div class="overlay">
<div class="profile">
<a class="close" href="{close}">&times;</a>
<img src="{photo}" alt="{name}">
<h2>{name}</h2>
<span class="badge">{profession}</span>
<p>{experience}</p>
<p>{phone}</p>
<p>{location}</p>
"#,
        close = escape(close_href),
        photo = escape(&profile.photo_url),
        name = escape(&profile.full_name),
        profession = escape(&profile.profession),
        experience = escape(&profile.experience),
        phone = escape(&profile.phone),
        location = escape(&profile.location),
    );
    if let Some(specialization) = &profile.specialization {
        let _ = writeln!(body, "<p>{}</p>", escape(specialization));
    }
    if let Some(availability) = &profile.availability {
        let _ = writeln!(body, "<p>{}</p>", escape(availability));
    }
    let _ = write!(
        body,
        r#"<a class="contact" href="{}">Contact Now</a>
<button type="button" disabled>Schedule Appointment</button>
</div>
</div>
"#,
        escape(&profile.contact_uri)
    );
}

pub fn render_login(email: &str, notice: Option<&str>, errors: &[FieldError]) -> String {
    let mut body = String::from("<section class=\"login\">\n<h2>Login to Your Account</h2>\n");

    if let Some(notice) = notice {
        let _ = writeln!(body, r#"<p class="notice">{}</p>"#, escape(notice));
    }
    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            let _ = writeln!(body, "<li>{}</li>", escape(&error.message));
        }
        body.push_str("</ul>\n");
    }

    let _ = write!(
        body,
        r#"<form method="post" action="/login">
<label for="email">Email</label>
<input type="email" id="email" name="email" value="{email}" required>
<label for="password">Password</label>
<input type="password" id="password" name="password" required>
<button type="submit">Login</button>
<p>Don't have an account? <a href="/register">Register here</a></p>
</form>
<a href="/">Back to search</a>
</section>
"#,
        email = escape(email),
    );

    layout("Login", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body>
{}</body>
</html>
"#,
        escape(title),
        body
    )
}
