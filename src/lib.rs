mod builtin;
mod cli;
pub mod client;
pub mod html;
pub mod models;
mod progress;
pub mod store;

use std::path::PathBuf;

use anyhow::Context as _;
use client::GitHubClient;
use store::{DirStore, Favorites, Theme};

pub use cli::{Args as CliArgs, Command, FavoritesAction, ProgressMode, ThemeAction};

pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    let mut store = match &args.store_dir {
        Some(dir) => DirStore::open(dir.clone())?,
        None => DirStore::open_default()?,
    };

    match &args.command {
        Command::Lookup {
            username,
            out,
            save,
        } => {
            let username = username.trim();
            if username.is_empty() {
                anyhow::bail!("username must not be empty");
            }
            lookup(&args, &mut store, username, out.clone(), *save).await
        }
        Command::Favorites { action } => run_favorites(&mut store, action),
        Command::Theme { action } => run_theme(&mut store, action),
    }
}

async fn lookup(
    args: &CliArgs,
    store: &mut DirStore,
    username: &str,
    out: Option<PathBuf>,
    save: bool,
) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let loader = progress::Loader::new(progress_enabled);

    let client = GitHubClient::new(args.api_base.clone(), &args.user_agent)?;
    let res = fetch_and_render(&client, store, username, out, save, &loader).await;
    loader.finish();
    res
}

async fn fetch_and_render(
    client: &GitHubClient,
    store: &mut DirStore,
    username: &str,
    out: Option<PathBuf>,
    save: bool,
    loader: &progress::Loader,
) -> anyhow::Result<()> {
    loader.set_stage(format!("looking up {username}"));
    let profile = client.fetch_profile(username).await?;

    loader.set_stage("fetching repositories");
    let repos = client.fetch_repositories(&profile.repos_url).await?;

    if save {
        if Favorites::new(&mut *store).add(&profile.login)? {
            tracing::info!(login = %profile.login, "added to favorites");
        }
    }

    loader.set_stage("rendering profile card");
    let favorites = Favorites::new(&mut *store).list();
    let dark = Theme::new(&mut *store).is_dark();
    let page = html::build_page(&profile, &repos, &favorites, dark);

    let out_path =
        out.unwrap_or_else(|| PathBuf::from(format!("profile-{}.html", profile.login)));
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    std::fs::write(&out_path, page).with_context(|| format!("write {}", out_path.display()))?;
    tracing::info!(path = %out_path.display(), "profile card written");
    Ok(())
}

fn run_favorites(store: &mut DirStore, action: &FavoritesAction) -> anyhow::Result<()> {
    let mut favorites = Favorites::new(store);
    match action {
        FavoritesAction::Add { username } => {
            let username = username.trim();
            if username.is_empty() {
                anyhow::bail!("username must not be empty");
            }
            if favorites.add(username)? {
                println!("added {username}");
            } else {
                println!("{username} is already a favorite");
            }
        }
        FavoritesAction::List => {
            for username in favorites.list() {
                println!("{username}");
            }
        }
        FavoritesAction::Clear => {
            favorites.clear()?;
            println!("favorites cleared");
        }
    }
    Ok(())
}

fn run_theme(store: &mut DirStore, action: &ThemeAction) -> anyhow::Result<()> {
    let mut theme = Theme::new(store);
    let dark = match action {
        ThemeAction::Toggle => theme.toggle()?,
        ThemeAction::Show => theme.is_dark(),
    };
    if dark {
        println!("dark {}", html::MOON_GLYPH);
    } else {
        println!("light {}", html::SUN_GLYPH);
    }
    Ok(())
}
