use data_loader::Corpus;
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let path = Path::new("data/movies.jsonl");

    println!("Loading movie corpus...\n");

    let start = Instant::now();
    let corpus = Corpus::load_from_file(path)?;
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", corpus.len());
    println!("Distinct titles: {}", corpus.sorted_titles().len());
    println!("\nPerformance: {:.0} movies/second",
             corpus.len() as f64 / elapsed.as_secs_f64());
    Ok(())
}
