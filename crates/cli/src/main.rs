use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use recommender::filters::{GenreFilter, MinimumRatingFilter, SentimentFilter, YearRangeFilter};
use recommender::{
    FilterPipeline, MetadataService, Recommendation, Recommender, RecommenderConfig,
    TermWeighting,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Movie Explorer - content-based movie recommendations
#[derive(Parser)]
#[command(name = "movie-explorer")]
#[command(about = "Recommend movies by overview, genre and studio similarity", long_about = None)]
struct Cli {
    /// Path to the JSON Lines movie corpus
    #[arg(short, long, default_value = "data/movies.jsonl")]
    data_file: PathBuf,

    /// Maximum vocabulary size
    #[arg(long, default_value = "5000")]
    max_features: usize,

    /// Term weighting scheme
    #[arg(long, value_enum, default_value_t = Weighting::TfIdf)]
    weighting: Weighting,

    /// Precompute the full pairwise similarity matrix at start-up
    #[arg(long)]
    precompute: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Weighting {
    TfIdf,
    Tf,
}

impl From<Weighting> for TermWeighting {
    fn from(w: Weighting) -> Self {
        match w {
            Weighting::TfIdf => TermWeighting::TfIdf,
            Weighting::Tf => TermWeighting::TermFrequency,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get movies similar to a title
    Recommend {
        /// Exact movie title
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Drop movies with a lower vote average
        #[arg(long)]
        min_rating: Option<f32>,

        /// Drop movies whose overview sentiment is lower (-1 to 1)
        #[arg(long, allow_hyphen_values = true)]
        min_sentiment: Option<f32>,

        /// Keep only movies with one of these genres (repeatable)
        #[arg(long)]
        genre: Vec<String>,

        /// Earliest release year
        #[arg(long)]
        min_year: Option<u16>,

        /// Latest release year
        #[arg(long)]
        max_year: Option<u16>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Show the active filters and similarity scores
        #[arg(long)]
        explain: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show details, overview keywords and metadata for a movie
    Info {
        /// Exact movie title
        #[arg(long)]
        title: String,

        /// Number of overview keywords to show
        #[arg(long, default_value = "10")]
        keywords: usize,
    },

    /// Run benchmark to test query performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RecommenderConfig::default()
        .with_max_features(cli.max_features)
        .with_weighting(cli.weighting.into())
        .with_precomputed_similarities(cli.precompute);

    println!("Loading movie corpus from {}...", cli.data_file.display());
    let start = Instant::now();
    let recommender = Arc::new(
        Recommender::load(&cli.data_file, config).context("Failed to build recommender")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        recommender.corpus().len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            limit,
            min_rating,
            min_sentiment,
            genre,
            min_year,
            max_year,
            json,
            explain,
        } => {
            let mut pipeline = FilterPipeline::new();
            if let Some(min) = min_rating {
                pipeline = pipeline.add_filter(MinimumRatingFilter::new(min));
            }
            if let Some(min) = min_sentiment {
                pipeline = pipeline.add_filter(SentimentFilter::new(min));
            }
            if !genre.is_empty() {
                pipeline = pipeline.add_filter(GenreFilter::new(&genre));
            }
            if min_year.is_some() || max_year.is_some() {
                pipeline = pipeline.add_filter(YearRangeFilter::new(min_year, max_year));
            }
            handle_recommend(&recommender, &title, limit, &pipeline, json, explain)?
        }
        Commands::Search { title } => handle_search(&recommender, &title),
        Commands::Info { title, keywords } => handle_info(&recommender, &title, keywords)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(recommender, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: &Recommender,
    title: &str,
    limit: usize,
    pipeline: &FilterPipeline,
    json: bool,
    explain: bool,
) -> Result<()> {
    if recommender.details(title).is_none() {
        let suggestions: Vec<String> = recommender
            .search(title)
            .iter()
            .take(5)
            .map(|m| m.title.clone())
            .collect();
        if suggestions.is_empty() {
            return Err(anyhow!("Movie {:?} not found", title));
        }
        return Err(anyhow!(
            "Movie {:?} not found. Did you mean: {}?",
            title,
            suggestions.join(", ")
        ));
    }

    let filters = (!pipeline.is_empty()).then_some(pipeline);
    let recommendations = recommender.recommend(title, limit, filters);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    if explain && !pipeline.is_empty() {
        println!("Filters: {}", pipeline.names().join(" -> "));
    }
    print_recommendations(title, &recommendations, explain);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(recommender: &Recommender, title: &str) {
    let matches = recommender.search(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
        return;
    }
    // Display top 20 results with year, genres and vote average
    for movie in matches.iter().take(20) {
        println!(
            "  {} ({}) [{}] avg {:.1}",
            movie.title,
            movie.year.map(|y| y.to_string()).unwrap_or_else(|| "????".to_string()),
            movie.genres.join(", "),
            movie.vote_average
        );
    }
    if matches.len() > 20 {
        println!("  ... and {} more", matches.len() - 20);
    }
}

/// Handle the 'info' command
fn handle_info(recommender: &Recommender, title: &str, keyword_count: usize) -> Result<()> {
    let movie = recommender
        .details(title)
        .ok_or_else(|| anyhow!("Movie {:?} not found", title))?;

    println!("{}", movie.title.bold().blue());
    println!("{}Popularity: {:.2}", "• ".green(), movie.popularity);
    println!("{}Revenue: ${:.0}", "• ".green(), movie.revenue);
    println!("{}Runtime: {} min", "• ".green(), movie.runtime);
    println!("{}Vote Average: {}/10", "• ".cyan(), movie.vote_average);
    println!("{}Genres: {}", "• ".cyan(), movie.genres.join(", "));
    println!("{}Companies: {}", "• ".cyan(), movie.production_companies.join(", "));
    if let Some(poster) = movie.poster_url() {
        println!("{}Poster: {}", "• ".cyan(), poster);
    }

    let keywords = recommender.keywords(title, keyword_count).unwrap_or_default();
    let words: Vec<&str> = keywords.iter().map(|(w, _)| w.as_str()).collect();
    println!("Overview keywords: {}", words.join(", "));

    let metadata = MetadataService::unconfigured().enrich(title);
    if !metadata.actors.is_empty() {
        println!("Cast: {}", metadata.actors.join(", "));
    }
    if let Some(director) = &metadata.director {
        println!("Director: {}", director);
    }
    println!("Trailer: {}", metadata.trailer_url);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    recommender: Arc<Recommender>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    let titles: Vec<String> = recommender.titles().into_iter().map(String::from).collect();
    let semaphore = Arc::new(Semaphore::new(concurrent.max(1)));

    // Pick random titles and query them concurrently on the blocking pool
    let wall_clock = Instant::now();
    let mut handles = vec![];
    for _ in 0..requests {
        let title = titles[rand::random::<u32>() as usize % titles.len()].clone();
        let recommender = recommender.clone();
        let permit = semaphore.clone().acquire_owned().await?;
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            recommender.recommend(&title, 10, None);
            start.elapsed()
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = vec![];
    for handle in handles {
        timings.push(handle.await?);
    }
    let total_time = wall_clock.elapsed();

    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(title: &str, recommendations: &[Recommendation], explain: bool) {
    print!("{}", format!("Top {} similar to {}:\n", recommendations.len(), title).bold().blue());
    if recommendations.is_empty() {
        println!("  (no recommendations)");
        return;
    }
    for (i, rec) in recommendations.iter().enumerate() {
        let rank = i + 1;
        println!(
            "{}. {} ({}) - Vote: {:.1} - Popularity: {:.1}",
            rank.to_string().green(),
            rec.title,
            rec.year.map(|y| y.to_string()).unwrap_or_else(|| "????".to_string()),
            rec.vote_average,
            rec.popularity
        );
        if explain {
            println!("   Similarity: {:.4}", rec.score);
        }
    }
}
