use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("newswire")
        .version("0.1.0")
        .author("Newswire Contributors")
        .about("Fetch and display news feed articles")
        .arg(clap::arg!([INPUT] "'latest' to query the API, a feed URL, a local JSON file, or '-' for stdin").default_value("latest"))
        .arg(clap::arg!(-q --topic <TOPIC> "Topic to search for").value_name("TOPIC"))
        .arg(
            clap::arg!(--order_by <ORDER> "Sort order")
                .value_name("ORDER")
                .default_value("newest")
                .value_parser(["newest", "oldest", "relevance"]),
        )
        .arg(clap::arg!(--page_size <NUM> "Number of articles to request").default_value("20"))
        .arg(clap::arg!(--api_key <KEY> "API key for the feed endpoint").value_name("KEY"))
        .arg(clap::arg!(--endpoint <URL> "Search endpoint to query").value_name("URL"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--connect_timeout <SECS> "Connect timeout in seconds").default_value("15"))
        .arg(clap::arg!(--timeout <SECS> "Read timeout in seconds").default_value("10"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "newswire", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "newswire", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "newswire", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "newswire", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
