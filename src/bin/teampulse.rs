use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use teampulse::date_util::format_time_ago;
use teampulse::{Dashboard, FilterOptions, RoleFilter, TimeRange};

#[derive(Parser)]
#[command(name = "teampulse", about = "Team productivity dashboard CLI")]
struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Limit the seeded roster to the first N members
    #[arg(long)]
    team_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every view: which range to project and how to
/// filter the roster.
#[derive(Args)]
struct ViewArgs {
    /// Time range: Day, Week, or Month
    #[arg(long, default_value = "Week")]
    range: String,

    /// Free-text search over member name and role
    #[arg(long, default_value = "")]
    query: String,

    /// Role filter: All or a role name (e.g. "QA Engineer")
    #[arg(long, default_value = "All")]
    role: String,
}

impl ViewArgs {
    fn parse(&self) -> anyhow::Result<(TimeRange, FilterOptions)> {
        let range = TimeRange::parse(&self.range)?;
        let role = RoleFilter::parse(&self.role)?;
        Ok((range, FilterOptions::new(self.query.clone(), role)))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the filtered member table
    Members {
        #[command(flatten)]
        view: ViewArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Output as CSV
        #[arg(long)]
        csv: bool,
    },
    /// Show roll-up summary metrics
    Summary {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        json: bool,
    },
    /// Show the time-bucketed activity series
    Activity {
        #[command(flatten)]
        view: ViewArgs,
        /// Seed for the Month series randomization
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Show the role distribution
    Distribution {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        json: bool,
    },
    /// Show the synthesized task list for one member
    Tasks {
        /// Member id (e.g. user-3)
        member_id: String,
        /// Time range: Day, Week, or Month
        #[arg(long, default_value = "Week")]
        range: String,
        #[arg(long)]
        json: bool,
    },
    /// Export the member table to a file or stdout
    Export {
        #[command(flatten)]
        view: ViewArgs,
        /// Export format: csv or markdown
        #[arg(long, default_value = "csv")]
        format: String,
        /// Output path (stdout if omitted)
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let dash = match cli.team_size {
        Some(n) => {
            let now = chrono::Utc::now();
            Dashboard::new(teampulse::roster::seed_roster_n(now, n), now)
        }
        None => Dashboard::seeded(),
    };

    match cli.command {
        Commands::Members { view, json, csv } => {
            let (range, opts) = view.parse()?;
            let members = dash.members(range, &opts);
            if json {
                println!("{}", serde_json::to_string_pretty(&members)?);
            } else if csv {
                print!("{}", dash.export_csv(range, &opts));
            } else if members.is_empty() {
                println!("No members match.");
            } else {
                let now = chrono::Utc::now();
                for m in &members {
                    println!(
                        "{} ({}) - {}% | {}/{} tasks | {}h | active {}",
                        m.name,
                        m.role,
                        m.productivity_score,
                        m.tasks_completed,
                        m.total_tasks,
                        m.hours_logged,
                        format_time_ago(m.last_active, now)
                    );
                }
                println!("\n{} members", members.len());
            }
        }
        Commands::Summary { view, json } => {
            let (range, opts) = view.parse()?;
            let summary = dash.summary(range, &opts);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Active members:  {} ({}%)", summary.active_members, summary.active_percentage);
                println!("Tasks completed: {} ({}% completion)", summary.tasks_completed, summary.completion_rate);
                println!("Hours logged:    {} ({} avg/member)", summary.hours_logged, summary.avg_hours_per_member);
                println!("Productivity:    {}% ({:+}%)", summary.avg_productivity, summary.productivity_trend);
            }
        }
        Commands::Activity { view, seed, json } => {
            let (range, opts) = view.parse()?;
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let series = dash.activity(range, &opts, &mut rng);
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                for bucket in &series {
                    println!("{:>6}  {:>6} tasks  {:>6} hours", bucket.date, bucket.tasks, bucket.hours);
                }
            }
        }
        Commands::Distribution { view, json } => {
            let (range, opts) = view.parse()?;
            let dist = dash.distribution(range, &opts);
            if json {
                println!("{}", serde_json::to_string_pretty(&dist)?);
            } else if dist.is_empty() {
                println!("No members match.");
            } else {
                for slice in &dist {
                    println!("{}: {}", slice.role, slice.value);
                }
            }
        }
        Commands::Tasks {
            member_id,
            range,
            json,
        } => {
            let range = TimeRange::parse(&range)?;
            let tasks = dash.tasks(&member_id, range)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks for this period.");
            } else {
                for t in &tasks {
                    println!(
                        "[{}] {} ({}) - {}h est / {}h spent",
                        t.status.as_str(),
                        t.title,
                        t.priority.as_str(),
                        t.time_estimate,
                        t.time_spent
                    );
                }
                println!("\n{} tasks", tasks.len());
            }
        }
        Commands::Export {
            view,
            format,
            output,
        } => {
            let (range, opts) = view.parse()?;
            let content = match format.to_lowercase().as_str() {
                "csv" => dash.export_csv(range, &opts),
                "markdown" | "md" => dash.export_markdown(range, &opts),
                other => anyhow::bail!("unsupported export format: {other}"),
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    log::info!("wrote export to {path}");
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}
