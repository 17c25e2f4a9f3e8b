fn main() {
    if let Err(e) = tweet_analyser::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
