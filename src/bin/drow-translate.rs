use clap::{Arg, Command};
use drow_translatascan::{Direction, Language, Translator, load_lexicon_from_file};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("drow-translate")
        .version("0.1.0")
        .about("Translate text between Common and Drow")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("lang")
                .help("Target language: Drow or Common")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .env("DROW_DICTIONARY_PATH")
                .help("Path to the JSON lexicon")
                .default_value("data/drow_dictionary.json"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show how each segment was translated")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let text = matches
        .get_one::<String>("text")
        .ok_or("missing text argument")?;
    let lang = matches
        .get_one::<String>("lang")
        .ok_or("missing lang argument")?;
    let dictionary = matches
        .get_one::<String>("dictionary")
        .ok_or("missing dictionary path")?;

    let target: Language = match lang.parse() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   Use one of: Drow, Common");
            return Err(e.into());
        }
    };
    let direction = Direction::towards(target);

    let lexicon = match load_lexicon_from_file(Path::new(dictionary)) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Err(e.into());
        }
    };
    let translator = Translator::new(lexicon);

    if verbose {
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {}", direction);
        println!();
    }

    let segments = translator.translate_segments(text, direction);

    if verbose {
        println!("🔎 Segments:");
        for segment in segments.iter().filter(|s| s.is_translated()) {
            let rule = segment
                .rule
                .map(|r| format!("{:?}", r))
                .unwrap_or_default();
            match &segment.notes {
                Some(notes) => println!(
                    "   \"{}\" → \"{}\" [{}] ({})",
                    segment.source, segment.output, rule, notes
                ),
                None => println!("   \"{}\" → \"{}\" [{}]", segment.source, segment.output, rule),
            }
        }
        let untranslated = segments
            .iter()
            .filter(|s| !s.is_translated() && s.source.chars().any(char::is_alphanumeric))
            .count();
        if untranslated > 0 {
            println!("   ... {} word(s) passed through", untranslated);
        }
        println!();
    }

    let result: String = segments.into_iter().map(|s| s.output).collect();
    println!("{}", result);

    Ok(())
}
