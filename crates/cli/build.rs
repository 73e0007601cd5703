use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("newscan")
        .version(env!("CARGO_PKG_VERSION"))
        .author("newscan Contributors")
        .about("List the articles found on a news page")
        .arg(clap::arg!(<URL> "URL of the listing page"))
        .arg(clap::arg!(--html <FILE> "Read the page from a saved HTML file (\"-\" for stdin) instead of fetching URL"))
        .arg(
            clap::arg!(-k --filter <KEYWORD> "Keep only articles whose headline or author contains KEYWORD")
                .action(clap::ArgAction::Append),
        )
        .arg(
            clap::arg!(-s --sort <MODE> "Sort order")
                .default_value("newest")
                .value_parser(["newest", "oldest", "relevance"]),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(clap::arg!(--summary "Print a summary header above the text listing"))
        .arg(clap::arg!(--width <COLS> "Wrap headlines at this width (0 = no wrapping)").default_value("0"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "newscan", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "newscan", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "newscan", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "newscan", &completions_dir).unwrap();
}
