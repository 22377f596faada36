use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use name_core::query::limit_from;
use name_core::{
    Config, DatasetVariant, Gender, KanjiMatch, LastNameMatch, MatchMode, NameEngine, NameSample,
    ReadingCandidate, ReadingMatch, Result, SearchBy,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Look up, sample and validate Japanese personal names.
#[derive(Parser)]
#[command(name = "name_engine", version)]
struct Cli {
    /// Directory holding the dataset CSV files
    #[arg(long, global = true)]
    dataset_dir: Option<PathBuf>,

    /// First-name corpus: org (full) or opti (popular names only)
    #[arg(long, global = true, default_value = "org")]
    variant: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Entry counts of the loaded indices
    Stats,
    /// A random first name
    Random(SampleArgs),
    /// A random "surname given" full name
    FullName(SampleArgs),
    /// Search first names by reading
    SearchReading {
        reading: String,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        #[arg(long)]
        partial: bool,
    },
    /// Search first names by kanji
    SearchKanji {
        kanji: String,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
        #[arg(long)]
        partial: bool,
    },
    /// Search surnames, ranked by population
    LastName {
        query: String,
        #[arg(long, value_enum, default_value_t = ByArg::Kanji)]
        by: ByArg,
        #[arg(long)]
        partial: bool,
        /// 0 means no limit
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
    /// Most common surnames
    TopLastNames {
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        min_count: Option<u64>,
    },
    /// Leading names of the curated corpus
    Popular {
        #[arg(long, value_enum, default_value_t = GenderArg::Male)]
        gender: GenderArg,
        #[arg(long, default_value_t = 50)]
        top: usize,
    },
    /// Check whether a kanji/reading pair exists
    Validate {
        kanji: String,
        reading: String,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },
    /// Readings recorded for a kanji spelling
    Readings {
        kanji: String,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },
}

#[derive(clap::Args)]
struct SampleArgs {
    #[arg(long, value_enum, default_value_t = GenderArg::Male)]
    gender: GenderArg,
    #[arg(long)]
    with_reading: bool,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ByArg {
    Kanji,
    Reading,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Validate before the dataset directory is looked at.
    let variant: DatasetVariant = cli.variant.parse()?;
    let config = Config::resolve(cli.dataset_dir.as_deref());
    let engine = NameEngine::from_config(&config);
    let json = cli.json;

    match cli.command {
        Command::Stats => {
            let stats = engine.load_dataset(variant, true)?.stats();
            if json {
                return print_json(&stats);
            }
            println!("{} {:?} ({})", "Dataset".bold(), config.dataset_dir, variant);
            println!("  male readings:   {}", stats.male_readings);
            println!("  female readings: {}", stats.female_readings);
            if let Some(n) = stats.last_names {
                println!("  last names:      {}", n);
            }
        }
        Command::Random(args) => {
            let mut rng = rng_for(args.seed);
            let sample = engine.random_first_name(args.gender.into(), variant, &mut rng)?;
            print_sample(&sample, args.with_reading, json)?;
        }
        Command::FullName(args) => {
            let mut rng = rng_for(args.seed);
            let sample = engine.random_full_name(args.gender.into(), variant, &mut rng)?;
            print_sample(&sample, args.with_reading, json)?;
        }
        Command::SearchReading { reading, gender, partial } => {
            let results = engine.search_by_reading(
                &reading,
                gender.map(Gender::from),
                variant,
                MatchMode::from_partial(partial),
            )?;
            if json {
                return print_json(&results);
            }
            print_reading_matches(&results);
        }
        Command::SearchKanji { kanji, gender, partial } => {
            let results = engine.search_by_kanji(
                &kanji,
                gender.map(Gender::from),
                variant,
                MatchMode::from_partial(partial),
            )?;
            if json {
                return print_json(&results);
            }
            print_kanji_matches(&results);
        }
        Command::LastName { query, by, partial, limit } => {
            let by = match by {
                ByArg::Kanji => SearchBy::Kanji,
                ByArg::Reading => SearchBy::Reading,
            };
            let mode = MatchMode::from_partial(partial);
            let results = engine.search_last_name(&query, by, mode, limit_from(limit))?;
            if json {
                return print_json(&results);
            }
            print_last_names(&results);
        }
        Command::TopLastNames { limit, min_count } => {
            let results = engine.get_last_names(limit_from(limit), min_count)?;
            if json {
                return print_json(&results);
            }
            print_last_names(&results);
        }
        Command::Popular { gender, top } => {
            let results = engine.get_popular_names(gender.into(), top)?;
            if json {
                return print_json(&results);
            }
            print_reading_matches(&results);
        }
        Command::Validate { kanji, reading, gender } => {
            let valid = engine.is_valid_name(&kanji, &reading, gender.map(Gender::from), variant)?;
            if json {
                return print_json(&valid);
            }
            if valid {
                println!("{} {} ({})", "valid".green().bold(), kanji, reading);
            } else {
                println!("{} {} ({})", "unknown".red().bold(), kanji, reading);
            }
        }
        Command::Readings { kanji, gender } => {
            let results = engine.get_readings_for_kanji(&kanji, gender.map(Gender::from), variant)?;
            if json {
                return print_json(&results);
            }
            print_candidates(&results);
        }
    }
    Ok(())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", text);
    Ok(())
}

fn print_sample(sample: &NameSample, with_reading: bool, json: bool) -> Result<()> {
    match (json, with_reading) {
        (true, true) => print_json(sample),
        (true, false) => print_json(&sample.kanji),
        (false, true) => {
            println!("{} ({})", sample.kanji.as_str().bold(), sample.reading);
            Ok(())
        }
        (false, false) => {
            println!("{}", sample.kanji);
            Ok(())
        }
    }
}

fn print_reading_matches(results: &[ReadingMatch]) {
    if results.is_empty() {
        println!("No names found.");
        return;
    }
    for r in results {
        println!(
            "{} [{}] {}: {}",
            r.reading.as_str().bold(),
            r.romanization,
            r.gender.to_string().dark_grey(),
            r.kanji_variants.join(" ")
        );
    }
}

fn print_kanji_matches(results: &[KanjiMatch]) {
    if results.is_empty() {
        println!("No names found.");
        return;
    }
    for r in results {
        println!(
            "{} {} [{}] {}",
            r.kanji.as_str().bold(),
            r.reading,
            r.romanization,
            r.gender.to_string().dark_grey()
        );
    }
}

fn print_last_names(results: &[LastNameMatch]) {
    if results.is_empty() {
        println!("No last names found.");
        return;
    }
    for (i, r) in results.iter().enumerate() {
        println!(
            "{:>4}. {} {} [{}] {}",
            i + 1,
            r.kanji.as_str().bold(),
            r.reading,
            r.romanization,
            format!("~{}", r.population_estimate).cyan()
        );
    }
}

fn print_candidates(results: &[ReadingCandidate]) {
    if results.is_empty() {
        println!("No readings found.");
        return;
    }
    for r in results {
        println!("{} [{}]", r.reading.as_str().bold(), r.romanization);
    }
}
