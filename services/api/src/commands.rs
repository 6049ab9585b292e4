use crate::infra::{parse_answer, parse_genre};
use clap::Args;
use reelscore::browse::{load_browse_page, BrowsePage};
use reelscore::catalog::{Genre, GenreCatalog};
use reelscore::config::AppConfig;
use reelscore::error::AppError;
use reelscore::provider::RelayClient;
use reelscore::questions::QuestionBank;
use reelscore::scoring::{score_card, AnswerMap, ScoreCard};
use reelscore::search::{SearchDebouncer, SearchResults};
use reelscore::telemetry;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CriteriaArgs {
    /// Genre name, e.g. "Comedy" or "Science Fiction"
    #[arg(long, value_parser = parse_genre)]
    pub(crate) genre: Genre,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Genre name used to pick the criteria set
    #[arg(long, value_parser = parse_genre)]
    pub(crate) genre: Genre,
    /// Answer in criterion_id=value form; repeat for each answered criterion
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<(String, f64)>,
    /// Print the score card as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BrowseArgs {
    /// Number of popular movies to load (defaults to POPULAR_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Title text sent to the relay once the debounce period settles
    pub(crate) query: String,
}

pub(crate) fn run_criteria(args: CriteriaArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let criteria = bank.build_criteria_set(args.genre);
    let universal = bank.universal().len();
    let info = args.genre.info();

    println!("{} criteria ({} questions)", args.genre.label(), criteria.len());
    println!("{}", info.description);
    for (index, criterion) in criteria.iter().enumerate() {
        let scope = if index < universal { "universal" } else { "genre" };
        println!(
            "{:>2}. [{}] {} (weight {:.1})\n    {}",
            index + 1,
            scope,
            criterion.id,
            criterion.weight,
            criterion.text
        );
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    let criteria = bank.build_criteria_set(args.genre);

    let mut answers = AnswerMap::new();
    for (id, value) in args.answers {
        if !criteria.iter().any(|criterion| criterion.id == id) {
            return Err(AppError::invalid_input(format!(
                "'{id}' is not a {} criterion",
                args.genre.label()
            )));
        }
        answers.insert(id, value);
    }

    let card = score_card(&answers, &criteria);
    if args.json {
        let rendered = serde_json::to_string_pretty(&card).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_score_card(args.genre, &card);
    }

    Ok(())
}

pub(crate) async fn run_browse(args: BrowseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let client = RelayClient::from_config(&config.provider)?;
    let catalog = GenreCatalog::standard();
    let limit = args.limit.unwrap_or(config.search.popular_limit);

    let page = load_browse_page(&client, &catalog, limit).await;
    render_browse_page(&page, &catalog);
    Ok(())
}

pub(crate) async fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let client = Arc::new(RelayClient::from_config(&config.provider)?);
    let catalog = GenreCatalog::standard();

    let mut debouncer = SearchDebouncer::from_config(client, &config.search);
    let mut published = debouncer.subscribe();
    debouncer.input(args.query);
    published
        .changed()
        .await
        .map_err(|_| AppError::invalid_input("search ended before publishing results"))?;

    let results = published.borrow_and_update().clone();
    render_search_results(&results, &catalog);
    Ok(())
}

fn render_score_card(genre: Genre, card: &ScoreCard) {
    println!("{} score: {:.1} / 5", genre.label(), card.score);
    println!(
        "Raw weighted average {:.3} over total weight {:.1} ({} of {} answered)",
        card.raw,
        card.total_weight,
        card.answered(),
        card.components.len()
    );
    for component in &card.components {
        let marker = if component.defaulted { " (default)" } else { "" };
        println!(
            "  {:<24} {:.1} x {:.1}{}",
            component.criterion_id, component.answer, component.weight, marker
        );
    }
}

fn render_browse_page(page: &BrowsePage, catalog: &GenreCatalog) {
    match &page.featured {
        Some(movie) => println!(
            "Featured: {} [{}]",
            movie.title,
            catalog.display_label(&movie.genre_ids)
        ),
        None => {
            println!("No popular movies available.");
            return;
        }
    }

    for shelf in &page.shelves {
        println!("\n{} ({})", shelf.title, shelf.movies.len());
        for movie in &shelf.movies {
            let year = movie
                .release_year()
                .map(|year| year.to_string())
                .unwrap_or_else(|| "----".to_string());
            println!("  {year}  {:<40} {:.1}", movie.title, movie.vote_average);
        }
    }
}

fn render_search_results(results: &SearchResults, catalog: &GenreCatalog) {
    if results.movies.is_empty() {
        println!("No movies match '{}'.", results.query.trim());
        return;
    }

    for movie in &results.movies {
        println!(
            "{:>8}  {:<40} {}",
            movie.id,
            movie.title,
            catalog.display_label(&movie.genre_ids)
        );
    }
}
