//! Command handlers wiring the client services to terminal output.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::info;

use marquee_client::services::{
    AccountApiAdapter, AccountService, CatalogApiAdapter, CatalogService, PeopleApiAdapter,
    PeopleService,
};
use marquee_client::{
    AppStateStore, AuthFlow, Authorizer, CatalogClient, ClientConfig, ListAggregator,
    SessionStorage,
};
use marquee_model::{DiscoverRequest, Movie, Page, PosterSize, ProfileSize, SearchRequest};

use crate::cli::{Cli, Command};

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Everything a command needs, wired once at startup.
struct App {
    client: Arc<CatalogClient>,
    catalog: CatalogApiAdapter,
    people: PeopleApiAdapter,
    account: AccountApiAdapter,
    flow: AuthFlow,
    state_store: AppStateStore,
}

impl App {
    fn new(cli: &Cli) -> Result<Self> {
        let config = match cli.config.as_deref() {
            Some(path) => ClientConfig::load_from(Some(path))?,
            None => ClientConfig::load()?,
        };
        let client = Arc::new(CatalogClient::new(&config)?);
        let flow = AuthFlow::new(
            client.clone(),
            Arc::new(StdinAuthorizer),
            SessionStorage::new()?,
        );
        Ok(Self {
            catalog: CatalogApiAdapter::new(client.clone()),
            people: PeopleApiAdapter::new(client.clone()),
            account: AccountApiAdapter::new(client.clone()),
            client,
            flow,
            state_store: AppStateStore::new()?,
        })
    }

    /// Restore the persisted session and return the account id, failing
    /// with a login hint when unauthenticated.
    async fn require_account(&self) -> Result<u64> {
        match self.flow.restore().await {
            Some(account) => Ok(account.id),
            None => bail!("not logged in; run `marqueectl login` first"),
        }
    }
}

/// Approval step for a terminal user: print the URL, wait for Enter.
struct StdinAuthorizer;

#[async_trait]
impl Authorizer for StdinAuthorizer {
    async fn approve(&self, url: &str) -> Result<()> {
        println!("Open the following URL in your browser and approve the request:");
        println!("\n    {url}\n");
        print!("Press Enter once approved (Ctrl-D to cancel): ");
        std::io::stdout().flush()?;

        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).map(|read| (read, line))
        })
        .await??;

        match line {
            (0, _) => bail!("approval cancelled"),
            _ => Ok(()),
        }
    }
}

/// Aggregate up to `pages` pages through the single-flight accumulator.
async fn aggregate<F, Fut>(pages: u32, mut fetch: F) -> Page<Movie>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Option<Page<Movie>>>,
{
    let aggregator = ListAggregator::<Movie>::default();
    for _ in 0..pages {
        if !aggregator.has_more() {
            break;
        }
        aggregator.fetch_next(&mut fetch).await;
    }
    aggregator.snapshot()
}

fn print_movies(page: &Page<Movie>) {
    if page.is_empty() {
        println!("(no results)");
        return;
    }
    for (index, movie) in page.results.iter().enumerate() {
        let year = movie.release_date.get(..4).unwrap_or("----");
        println!(
            "{:>4}. {:<50} {}  *{:.1}  #{}",
            index + 1,
            movie.title,
            year,
            movie.vote_average,
            movie.id
        );
    }
    println!(
        "\n{} of {} results (page {}/{})",
        page.len(),
        page.total_results,
        page.page,
        page.total_pages
    );
}

pub async fn run(cli: Cli) -> Result<()> {
    let app = App::new(&cli)?;

    match cli.command {
        Command::Browse { section, pages } => {
            println!("== {} ==", section.title());
            let list = aggregate(pages, |page| app.catalog.movie_list(section, page)).await;
            print_movies(&list);
        }
        Command::Search { query, pages } => {
            let list = aggregate(pages, |page| {
                app.catalog.search_movies(SearchRequest::new(query.clone(), page))
            })
            .await;
            print_movies(&list);
        }
        Command::Discover {
            genres,
            sort_by,
            pages,
        } => {
            let list = aggregate(pages, |page| {
                let mut request = DiscoverRequest::page(page);
                request.with_genres = genres.clone();
                request.sort_by = sort_by.clone();
                app.catalog.discover_movies(request)
            })
            .await;
            print_movies(&list);
        }
        Command::Genres => {
            for genre in app.catalog.genres().await {
                println!("{:>6}  {}", genre.id, genre.name);
            }
        }
        Command::Movie { id } => show_movie(&app, id).await?,
        Command::Person { id } => show_person(&app, id).await?,
        Command::Login => match app.flow.login().await {
            Some(account) => {
                let mut state = app.state_store.load();
                state.account = Some(account.clone());
                app.state_store.save(&state)?;
                println!("Logged in as {}", account.display_name());
            }
            None => bail!("login failed"),
        },
        Command::Logout => {
            app.flow.logout().await;
            let mut state = app.state_store.load();
            state.account = None;
            app.state_store.save(&state)?;
            println!("Logged out");
        }
        Command::Whoami => match app.flow.restore().await {
            Some(account) => {
                println!("{} (account #{})", account.display_name(), account.id);
                if let Some(path) = &account.avatar.tmdb.avatar_path {
                    println!(
                        "avatar: {}",
                        app.client.images().profile(path, ProfileSize::W185)
                    );
                }
            }
            None => println!("not logged in"),
        },
        Command::Favourites { pages } => {
            let account_id = app.require_account().await?;
            let list = aggregate(pages, |page| {
                app.account.favourite_movies(account_id, page)
            })
            .await;
            print_movies(&list);
        }
        Command::Watchlist { pages } => {
            let account_id = app.require_account().await?;
            let list = aggregate(pages, |page| {
                app.account.watchlist_movies(account_id, page)
            })
            .await;
            print_movies(&list);
        }
        Command::Favourite { id, remove } => {
            let account_id = app.require_account().await?;
            if !app.account.set_favourite(account_id, id, !remove).await {
                bail!("favourite mutation failed");
            }
            println!(
                "{} movie #{id}",
                if remove { "Unfavourited" } else { "Favourited" }
            );
        }
        Command::WatchlistAdd { id, remove } => {
            let account_id = app.require_account().await?;
            if !app.account.set_watchlist(account_id, id, !remove).await {
                bail!("watchlist mutation failed");
            }
            println!(
                "{} watchlist: movie #{id}",
                if remove { "Removed from" } else { "Added to" }
            );
        }
        Command::Theme { theme } => {
            let mut state = app.state_store.load();
            state.theme = theme;
            app.state_store.save(&state)?;
            info!("theme preference saved");
            println!("Theme set to {theme:?}");
        }
    }

    Ok(())
}

async fn show_movie(app: &App, id: u64) -> Result<()> {
    let details = app
        .catalog
        .movie_details(id)
        .await
        .context("movie not found")?;

    println!("{} ({})", details.title, details.release_date);
    if details.runtime > 0 {
        println!("{} min | {}", details.runtime, details.status);
    }
    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    if !genres.is_empty() {
        println!("{}", genres.join(", "));
    }
    if let Some(path) = &details.poster_path {
        println!("poster: {}", app.client.images().poster(path, PosterSize::W500));
    }
    if !details.overview.is_empty() {
        println!("\n{}\n", details.overview);
    }

    if let Some(credits) = app.catalog.movie_credits(id).await {
        println!("Cast:");
        for member in credits.cast.iter().take(10) {
            println!("  {:<28} as {}", member.name, member.character);
        }
    }

    if let Some(videos) = app.catalog.movie_videos(id).await
        && let Some(trailer) = videos.trailer()
    {
        println!("\nTrailer: {YOUTUBE_WATCH_URL}{}", trailer.key);
    }

    if let Some(similar) = app.catalog.similar_movies(id, 1).await
        && !similar.is_empty()
    {
        println!("\nSimilar:");
        for movie in similar.results.iter().take(5) {
            println!("  {} (#{})", movie.title, movie.id);
        }
    }

    Ok(())
}

async fn show_person(app: &App, id: u64) -> Result<()> {
    let person = app
        .people
        .person_details(id)
        .await
        .context("person not found")?;

    println!("{}", person.name);
    if let Some(birthday) = &person.birthday {
        println!("born {birthday}");
    }
    if let Some(place) = &person.place_of_birth {
        println!("{place}");
    }
    if !person.biography.is_empty() {
        println!("\n{}\n", person.biography);
    }

    let movies = app.people.person_movies(id).await;
    if !movies.is_empty() {
        println!("Appeared in:");
        for movie in movies.iter().take(15) {
            println!("  {} (#{})", movie.title, movie.id);
        }
    }

    Ok(())
}
