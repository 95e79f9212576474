use std::io::{self, BufRead};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use esca::{DecisionPolicy, OnnxScorer, PolicyConfig};

fn usage() {
    eprintln!("Usage: esca [--config <path>] <url>...");
    eprintln!("   or: cat urls.txt | esca --config <path>");
    eprintln!();
    eprintln!("Classifies each URL and prints one JSON verdict per line.");
    eprintln!("The config file must set model_path to a trained ONNX model.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut urls: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--config requires a path");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                usage();
                return Ok(());
            }
            _ => urls.push(arg),
        }
    }

    let config = match &config_path {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::default(),
    };

    let model_path = config
        .model_path
        .clone()
        .ok_or("no model_path configured; set it in the config file")?;
    let scorer = OnnxScorer::from_file(&model_path)?;
    let policy = DecisionPolicy::new(&config, Box::new(scorer));

    // No URL arguments: classify one URL per stdin line.
    if urls.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let url = line.trim();
            if !url.is_empty() {
                urls.push(url.to_string());
            }
        }
    }

    if urls.is_empty() {
        usage();
        std::process::exit(1);
    }

    let mut failures = 0usize;
    for url in &urls {
        match policy.decide(url) {
            Ok(result) => println!("{}", serde_json::to_string(&result)?),
            Err(e) => {
                eprintln!("{}: {}", url, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }

    Ok(())
}
