use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::{error, info};

use rangebook::benchmarks::BenchmarkMetric;
use rangebook::metrics::stats;
use rangebook::practice::DailyCounters;
use rangebook::profile::{Goal, ShaftFlex, SpeedUnit, SwingSpeed, default_data_dir, suggest_shaft_flex};
use rangebook::recommendations::RecommendationItem;
use rangebook::{
    Club, CoachMode, EventLog, JsonLinesEventLog, MetricKey, PracticeEvent, Profile, ProfileStore,
    RangebookError, SessionType, SwingClubCategory, SwingMeasurement, analyze_swing_data,
    compute_metrics, glossary, recommend_for_club, recommend_next_session, resolve_benchmarks,
    resolve_coach_mode,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// Directory holding profile.json and events.jsonl
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append one practice event
    Log {
        #[arg(short, long, default_value_t = SessionType::Range)]
        session: SessionType,
        #[arg(long)]
        category: String,
        #[arg(short, long)]
        detail: String,
        #[arg(long)]
        club: Option<Club>,
        #[arg(short, long, default_value_t = 1.)]
        value: f64,
        #[arg(short, long, default_value = "")]
        note: String,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Print every metric
    Metrics {
        #[arg(long)]
        club: Option<Club>,
    },
    /// Print tier targets next to current metrics
    Benchmark,
    /// Suggest what to practice next, or everything for one club
    Recommend {
        #[arg(long)]
        club: Option<Club>,
    },
    /// Tips for one launch monitor reading
    Analyze {
        /// Rule set to judge with; derived from --club when omitted
        #[arg(long, required_unless_present = "club")]
        category: Option<SwingClubCategory>,
        #[arg(long, conflicts_with = "category")]
        club: Option<Club>,
        #[arg(long, default_value_t = 0.)]
        ball_speed: f64,
        #[arg(long, default_value_t = 0.)]
        launch: f64,
        #[arg(long, default_value_t = 0.)]
        spin: f64,
        #[arg(long, default_value_t = 0.)]
        apex: f64,
        #[arg(long, default_value_t = 0., allow_hyphen_values = true)]
        attack_angle: f64,
        #[arg(long, default_value_t = 0., allow_hyphen_values = true)]
        club_path: f64,
        #[arg(long, default_value_t = 0., allow_hyphen_values = true)]
        face_to_path: f64,
    },
    /// Show or change the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Driver shaft flex suggestion
    Equipment,
    /// History statistics
    Stats,
    /// Explain the terms used in tips
    Glossary {
        /// Show only this term
        term: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    Show,
    Set {
        #[arg(long)]
        handicap: Option<f64>,
        #[arg(long)]
        coach_mode: Option<CoachMode>,
        #[arg(long)]
        goal: Option<Goal>,
        #[arg(long)]
        swing_speed: Option<f64>,
        #[arg(long)]
        speed_unit: Option<SpeedUnit>,
        #[arg(long)]
        shaft_flex: Option<ShaftFlex>,
    },
}

fn parse_date(date: Option<&str>) -> Result<NaiveDate, RangebookError> {
    match date {
        None => Ok(Local::now().date_naive()),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| RangebookError::InvalidUserInput {
            field: "date".to_string(),
            reason: format!("{date:?} is not YYYY-MM-DD ({e})"),
        }),
    }
}

fn swing_category(
    category: Option<SwingClubCategory>,
    club: Option<Club>,
) -> Result<SwingClubCategory, RangebookError> {
    match (category, club) {
        (Some(category), _) => Ok(category),
        (None, Some(club)) => Ok(SwingClubCategory::for_group(club.group())),
        (None, None) => Err(RangebookError::InvalidUserInput {
            field: "category".to_string(),
            reason: "pass --category or --club".to_string(),
        }),
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn print_items(items: &[RecommendationItem]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}. {}", i + 1, item.title);
        println!("   {}", item.rationale);
        for step in &item.steps {
            println!("   - {step}");
        }
    }
}

/// The computed metric a benchmark row is compared with.
fn benchmark_metric_key(metric: BenchmarkMetric) -> MetricKey {
    match metric {
        BenchmarkMetric::CleanRate => MetricKey::CleanRate,
        BenchmarkMetric::DriverSliceRate => MetricKey::DriverSliceRate,
        BenchmarkMetric::DriverHookRate => MetricKey::DriverHookRate,
        BenchmarkMetric::CarryStdIron => MetricKey::CarryStd(Club::Iron7),
        BenchmarkMetric::CarryStdDriver => MetricKey::CarryStd(Club::Driver),
        BenchmarkMetric::ChipWithin2Rate => MetricKey::ChipWithin2Rate,
        BenchmarkMetric::ShortPuttMake => MetricKey::ShortPuttMake,
    }
}

#[allow(clippy::too_many_arguments)]
fn log_event(
    log: &mut JsonLinesEventLog,
    session: SessionType,
    category: &str,
    detail: &str,
    club: Option<Club>,
    value: f64,
    note: &str,
    date: Option<&str>,
) -> Result<(), RangebookError> {
    let date = parse_date(date)?;
    let mut event = PracticeEvent::new(date, session, category, detail)
        .with_value(value)
        .with_note(note);
    if let Some(club) = club {
        event = event.with_club(club);
    }
    log.append(&event)?;

    let mut today = DailyCounters::new(date);
    for event in log.read_all()?.iter().filter(|e| e.date == date) {
        today.record(event);
    }
    println!(
        "Logged {category}/{detail} ({} today, {} in {category})",
        today.count(category, detail),
        today.category_total(category)
    );
    Ok(())
}

fn show_metrics(events: &[PracticeEvent], club: Option<Club>) {
    let metrics = compute_metrics(events, club);
    for (key, value) in metrics.entries() {
        println!("{:<22} {}", key.to_string(), key.format_value(value));
    }
}

fn show_benchmark(events: &[PracticeEvent], profile: &Profile) {
    let metrics = compute_metrics(events, None);
    let (tier, targets) = resolve_benchmarks(profile);
    println!("Tier: {tier} (handicap {})", profile.handicap);
    println!("{:<22} {:>8} {:>8}", "metric", "target", "current");
    for (metric, target) in targets.entries() {
        let key = benchmark_metric_key(metric);
        let current = metrics.get(key);
        let flag = if targets.misses(key, current) { " !" } else { "" };
        println!(
            "{:<22} {:>8.2} {:>8}{flag}",
            metric.to_string(),
            target,
            format_value(current)
        );
    }
}

fn show_stats(events: &[PracticeEvent]) {
    println!("Strike pattern per day:");
    for (date, counts) in stats::daily_strike_counts(events) {
        let line: Vec<String> = counts.iter().map(|(detail, n)| format!("{detail} {n}")).collect();
        println!("  {date}: {}", line.join(", "));
    }

    println!("Carry trend:");
    for club in Club::ALL {
        let trend = stats::carry_trend(events, *club);
        if trend.is_empty() {
            continue;
        }
        println!("  {club}:");
        for point in trend {
            println!(
                "    {}: {:.1} m over {} shots (3-day avg {:.1} m)",
                point.date, point.mean_carry, point.samples, point.rolling_mean
            );
        }
    }

    println!("Short putts made per day:");
    for (date, made) in stats::short_putts_per_day(events) {
        println!("  {date}: {made}");
    }

    println!("Rounds:");
    for (date, round) in stats::round_counts(events) {
        println!(
            "  {date}: {} fairways, {} GIR, {} putts",
            round.fairways_hit, round.greens_in_regulation, round.putts
        );
    }
}

fn show_profile(profile: &Profile) {
    println!("Handicap:    {}", profile.handicap);
    println!("Coach mode:  {} (resolved {})", profile.coach_mode, resolve_coach_mode(profile));
    println!("Goal:        {}", profile.goal);
    println!("Swing speed: {}", profile.swing_speed);
    println!("Shaft flex:  {}", profile.shaft_flex);
}

fn run(args: Args) -> Result<(), RangebookError> {
    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    info!("Using data directory {:?}", data_dir);

    let profile_store = ProfileStore::new(&data_dir);
    let mut log = JsonLinesEventLog::new(&data_dir)?;

    match args.command {
        Commands::Log {
            session,
            category,
            detail,
            club,
            value,
            note,
            date,
        } => log_event(
            &mut log,
            session,
            &category,
            &detail,
            club,
            value,
            &note,
            date.as_deref(),
        )?,
        Commands::Metrics { club } => show_metrics(&log.read_all()?, club),
        Commands::Benchmark => show_benchmark(&log.read_all()?, &profile_store.load()?),
        Commands::Recommend { club } => {
            let events = log.read_all()?;
            let profile = profile_store.load()?;
            let items = match club {
                Some(club) => recommend_for_club(&events, &profile, club, resolve_coach_mode(&profile)),
                None => recommend_next_session(&events, &profile),
            };
            print_items(&items);
        }
        Commands::Analyze {
            category,
            club,
            ball_speed,
            launch,
            spin,
            apex,
            attack_angle,
            club_path,
            face_to_path,
        } => {
            let measurement = SwingMeasurement {
                ball_speed,
                launch,
                spin,
                apex,
                attack_angle,
                club_path,
                face_to_path,
            };
            let category = swing_category(category, club)?;
            let mode = resolve_coach_mode(&profile_store.load()?);
            for tip in analyze_swing_data(&measurement, category, mode) {
                println!("- {tip}");
            }
        }
        Commands::Profile { action } => match action {
            ProfileAction::Show => show_profile(&profile_store.load()?),
            ProfileAction::Set {
                handicap,
                coach_mode,
                goal,
                swing_speed,
                speed_unit,
                shaft_flex,
            } => {
                let mut profile = profile_store.load()?;
                if let Some(handicap) = handicap {
                    profile.handicap = Profile::validate_handicap(handicap)?;
                }
                if let Some(coach_mode) = coach_mode {
                    profile.coach_mode = coach_mode;
                }
                if let Some(goal) = goal {
                    profile.goal = goal;
                }
                if swing_speed.is_some() || speed_unit.is_some() {
                    profile.swing_speed = SwingSpeed::new(
                        swing_speed.unwrap_or(profile.swing_speed.value),
                        speed_unit.unwrap_or(profile.swing_speed.unit),
                    );
                }
                if let Some(shaft_flex) = shaft_flex {
                    profile.shaft_flex = shaft_flex;
                }
                profile_store.save(&profile)?;
                show_profile(&profile);
            }
        },
        Commands::Equipment => println!("{}", suggest_shaft_flex(&profile_store.load()?).summary()),
        Commands::Stats => show_stats(&log.read_all()?),
        Commands::Glossary { term: None } => {
            for (term, definition) in glossary::GLOSSARY {
                println!("{term}: {definition}");
            }
        }
        Commands::Glossary { term: Some(term) } => match glossary::lookup(&term) {
            Some(definition) => println!("{term}: {definition}"),
            None => {
                return Err(RangebookError::InvalidUserInput {
                    field: "term".to_string(),
                    reason: format!("{term:?} is not in the glossary"),
                });
            }
        },
    }
    Ok(())
}

fn main() {
    colog::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_category_from_club() {
        let args = Args::try_parse_from(["rangebook", "analyze", "--club", "3-Wood", "--launch", "12"]).unwrap();
        let Commands::Analyze { category, club, .. } = args.command else {
            panic!("expected analyze");
        };
        assert_eq!(swing_category(category, club).unwrap(), SwingClubCategory::Iron);
        assert_eq!(
            swing_category(None, Some(Club::Driver)).unwrap(),
            SwingClubCategory::Driver
        );
        assert!(swing_category(None, None).is_err());
    }

    #[test]
    fn test_analyze_requires_category_or_club() {
        assert!(Args::try_parse_from(["rangebook", "analyze", "--launch", "12"]).is_err());
        assert!(
            Args::try_parse_from(["rangebook", "analyze", "--category", "driver", "--club", "7i"]).is_err()
        );
    }

    #[test]
    fn test_glossary_takes_optional_term() {
        let args = Args::try_parse_from(["rangebook", "glossary", "club path"]).unwrap();
        assert!(matches!(args.command, Commands::Glossary { term: Some(ref t) } if t == "club path"));
        let args = Args::try_parse_from(["rangebook", "glossary"]).unwrap();
        assert!(matches!(args.command, Commands::Glossary { term: None }));
    }
}
