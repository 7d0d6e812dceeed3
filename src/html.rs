use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::builtin;
use crate::models::{Repository, UserProfile};

pub const SUN_GLYPH: &str = "\u{1F31E}";
pub const MOON_GLYPH: &str = "\u{1F319}";

/// Display name falls back to the login when the profile has no name set.
fn display_name(profile: &UserProfile) -> &str {
    profile
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&profile.login)
}

pub fn profile_section(profile: &UserProfile) -> Markup {
    let bio = profile.bio.as_deref().unwrap_or("");
    let location = profile.location.as_deref().unwrap_or("");

    html! {
        section id="profile-section" class="gpr-profile" {
            img class="gpr-avatar" width="120" height="120" src=(profile.avatar_url) alt=(profile.login);
            div class="gpr-profile-body" {
                h2 { (display_name(profile)) }
                p class="gpr-bio" { (bio) }
                p class="gpr-location" { (location) }
                p class="gpr-followers" { "Followers: " (profile.followers) }
                button type="button" class="gpr-btn gpr-favorite" data-login=(profile.login) {
                    "Add to Favorites"
                }
            }
        }
    }
}

/// One entry per repository, in received order. An empty slice still renders
/// the (empty) list.
pub fn repos_section(repos: &[Repository]) -> Markup {
    html! {
        section id="repos-section" class="gpr-repos" {
            h3 { "Recent Repositories" }
            ul id="repos-list" {
                @for repo in repos {
                    li {
                        a href=(repo.html_url) target="_blank" rel="noreferrer noopener" { (repo.name) }
                        span class="gpr-stars" { " \u{2B50} " (repo.stargazers_count) }
                    }
                }
            }
        }
    }
}

/// Rendered on every card, favorites or not. Entries link to the user's
/// GitHub page for re-lookup.
pub fn favorites_section(favorites: &[String]) -> Markup {
    html! {
        section id="favorites-section" class="gpr-favorites" {
            h3 { "Favorites" }
            ul id="favorites-list" {
                @for username in favorites {
                    li {
                        a href=(format!("https://github.com/{username}")) { (username) }
                    }
                }
            }
        }
    }
}

pub fn build_page(
    profile: &UserProfile,
    repos: &[Repository],
    favorites: &[String],
    dark: bool,
) -> String {
    let title = format!("{} \u{b7} GitHub profile", display_name(profile));
    let body_class = if dark { "gpr dark" } else { "gpr" };
    let glyph = if dark { MOON_GLYPH } else { SUN_GLYPH };

    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                title { (title) }
                style { (PreEscaped(builtin::BUILTIN_CSS)) }
            }
            body class=(body_class) {
                header class="gpr-topbar" {
                    div class="gpr-container gpr-topbar-inner" {
                        h1 { "GitHub Profile" }
                        button type="button" id="dark-mode-toggle" class="gpr-btn" { (glyph) }
                    }
                }
                main class="gpr-container gpr-main" {
                    (profile_section(profile))
                    (repos_section(repos))
                    (favorites_section(favorites))
                }
                script { (PreEscaped(builtin::THEME_TOGGLE_JS)) }
            }
        }
    };
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            login: "octocat".to_string(),
            name: None,
            bio: None,
            location: None,
            avatar_url: "https://avatars.example/octocat.png".to_string(),
            followers: 10,
            repos_url: "https://api.github.com/users/octocat/repos".to_string(),
        }
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let html = profile_section(&profile()).into_string();
        assert!(html.contains("<h2>octocat</h2>"));
        assert!(html.contains("Followers: 10"));
        assert!(html.contains("Add to Favorites"));
    }

    #[test]
    fn name_wins_over_login_when_present() {
        let mut p = profile();
        p.name = Some("The Octocat".to_string());
        let html = profile_section(&p).into_string();
        assert!(html.contains("<h2>The Octocat</h2>"));
    }

    #[test]
    fn missing_bio_and_location_render_empty() {
        let html = profile_section(&profile()).into_string();
        assert!(html.contains(r#"<p class="gpr-bio"></p>"#));
        assert!(html.contains(r#"<p class="gpr-location"></p>"#));
    }

    #[test]
    fn empty_repo_list_still_renders_the_section() {
        let html = repos_section(&[]).into_string();
        assert!(html.contains(r#"id="repos-section""#));
        assert!(html.contains(r#"<ul id="repos-list"></ul>"#));
    }

    #[test]
    fn repos_render_in_received_order() {
        let repos = vec![
            Repository {
                name: "second-newest".to_string(),
                html_url: "https://github.com/octocat/second-newest".to_string(),
                stargazers_count: 3,
            },
            Repository {
                name: "oldie".to_string(),
                html_url: "https://github.com/octocat/oldie".to_string(),
                stargazers_count: 42,
            },
        ];
        let html = repos_section(&repos).into_string();
        let first = html.find("second-newest").unwrap();
        let second = html.find("oldie").unwrap();
        assert!(first < second);
        assert!(html.contains("42"));
    }

    #[test]
    fn dark_flag_sets_body_class_and_glyph() {
        let page = build_page(&profile(), &[], &[], true);
        assert!(page.contains(r#"<body class="gpr dark">"#));
        assert!(page.contains(MOON_GLYPH));

        let page = build_page(&profile(), &[], &[], false);
        assert!(page.contains(r#"<body class="gpr">"#));
        assert!(page.contains(SUN_GLYPH));
    }

    #[test]
    fn favorites_always_present_in_page() {
        let page = build_page(&profile(), &[], &[], false);
        assert!(page.contains(r#"id="favorites-list""#));

        let page = build_page(
            &profile(),
            &[],
            &["a".to_string(), "b".to_string()],
            false,
        );
        let a = page.find(r#"href="https://github.com/a""#).unwrap();
        let b = page.find(r#"href="https://github.com/b""#).unwrap();
        assert!(a < b);
    }
}
