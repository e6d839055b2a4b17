use std::{env, fs, process};

use log::error;
use resume_scorer::{score_batch, JdRequirements, Weights};

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("Usage: resume-scorer-cli <job-description.txt> <resume.txt>...");
        process::exit(1);
    }

    let jd_text = match fs::read_to_string(&args[0]) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read job description {}: {}", args[0], e);
            process::exit(1);
        }
    };

    let mut cv_texts = Vec::new();
    for path in &args[1..] {
        match fs::read_to_string(path) {
            Ok(text) => cv_texts.push(text),
            Err(e) => {
                error!("Failed to read resume {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    let reports = score_batch(
        &cv_texts,
        &jd_text,
        &JdRequirements::default(),
        Weights::default(),
    );

    match serde_json::to_string_pretty(&reports) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize reports: {}", e);
            process::exit(1);
        }
    }
}
