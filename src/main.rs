use std::path::PathBuf;

use clap::Parser;
use prep_quiz::Quiz;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with the question bank (subject -> questions)
    #[arg(short, long)]
    questions: PathBuf,

    /// Directory where results and stats are saved
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() {
    // Off by default; RUST_LOG enables it. Output goes to stderr so it
    // stays out of the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let quiz = match Quiz::from_paths(&args.questions, &args.data_dir) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Failed to load questions: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
