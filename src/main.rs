//! PawConnect CLI
//!
//! Command-line access to the dataset the frontend renders:
//! - List cities
//! - Run directory and info hub searches
//! - Validate a dataset file
//! - Generate a config file

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pawconnect::city::City;
use pawconnect::dataset::Dataset;
use pawconnect::directory::{DirectoryQuery, SortOrder};
use pawconnect::infohub::{format_date, reading_time_minutes, ArticleFilter};

#[derive(Parser)]
#[command(name = "pawconnect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the PawConnect demo dataset")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset JSON file (default: the bundled dataset)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List supported cities
    Cities,

    /// Search the service directory
    Directory {
        /// Text matched against name and description
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category ids (repeat or comma-separate)
        #[arg(short, long, value_delimiter = ',')]
        category: Vec<u32>,
        /// Only this city
        #[arg(long)]
        city: Option<City>,
        /// Sort order (listing, rating, name, recent)
        #[arg(short, long, default_value = "listing")]
        sort: SortOrder,
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Print every match instead of one page
        #[arg(long)]
        all: bool,
    },

    /// Search info hub articles
    Articles {
        #[arg(short, long, default_value = "")]
        query: String,
        /// Exact category name, e.g. Health
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        city: Option<City>,
    },

    /// Check the dataset for broken references
    Validate,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ProviderRow<'a> {
    id: u32,
    name: &'a str,
    category: &'a str,
    city: &'a str,
    rating: f32,
    listed_on: String,
    phone: &'a str,
}

#[derive(Serialize)]
struct ArticleRow<'a> {
    id: u32,
    title: &'a str,
    category: &'a str,
    city: &'a str,
    date: String,
    minutes: usize,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so table/json/csv output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pawconnect=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = pawconnect::config::generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let dataset = Dataset::load_or_bundled(cli.dataset.as_deref())?;

    match cli.command {
        Commands::Cities => {
            let cities = &dataset.cities;
            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(cities)?),
                "csv" => {
                    let mut writer = csv::Writer::from_writer(std::io::stdout());
                    writer.write_record(["id", "title", "subtitle"])?;
                    for city in cities {
                        writer.write_record([
                            city.id.as_str(),
                            city.title.as_str(),
                            city.subtitle.as_str(),
                        ])?;
                    }
                    writer.flush()?;
                }
                _ => {
                    println!("{:<12} {:<12} {}", "ID", "Name", "Country");
                    println!("{}", "-".repeat(40));
                    for city in cities {
                        println!("{:<12} {:<12} {}", city.id, city.title, city.subtitle);
                    }
                }
            }
        }

        Commands::Directory {
            query,
            category,
            city,
            sort,
            page,
            all,
        } => {
            let query = DirectoryQuery::new()
                .query(query)
                .categories(category)
                .city(city)
                .sort(sort)
                .page(page);

            let (providers, footer) = if all {
                let matched = query.matching(&dataset.providers);
                let footer = format!("{} result(s)", matched.len());
                (matched.into_iter().cloned().collect::<Vec<_>>(), footer)
            } else {
                let result = query.run(&dataset.providers);
                let footer = format!(
                    "Page {} of {} ({} result(s))",
                    result.page, result.total_pages, result.total_items
                );
                (result.items, footer)
            };

            let rows: Vec<ProviderRow> = providers
                .iter()
                .map(|p| ProviderRow {
                    id: p.id,
                    name: &p.name,
                    category: dataset.category_name(p.category),
                    city: p.city.display_name(),
                    rating: p.rating,
                    listed_on: p.listed_on.to_string(),
                    phone: &p.phone,
                })
                .collect();

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&providers)?),
                "csv" => print_csv(&rows)?,
                _ => {
                    if rows.is_empty() {
                        println!("No services found matching your criteria.");
                        return Ok(());
                    }
                    println!(
                        "{:<4} {:<28} {:<20} {:<10} {:<6} {}",
                        "ID", "Name", "Category", "City", "Rating", "Listed"
                    );
                    println!("{}", "-".repeat(84));
                    for row in &rows {
                        println!(
                            "{:<4} {:<28} {:<20} {:<10} {:<6.1} {}",
                            row.id, row.name, row.category, row.city, row.rating, row.listed_on
                        );
                    }
                    println!();
                    println!("{}", footer);
                }
            }
        }

        Commands::Articles {
            query,
            category,
            city,
        } => {
            let filter = ArticleFilter {
                query,
                category,
                city,
            };
            let articles = filter.apply(&dataset.articles);

            let rows: Vec<ArticleRow> = articles
                .iter()
                .map(|a| ArticleRow {
                    id: a.id,
                    title: &a.title,
                    category: &a.category,
                    city: a.city.display_name(),
                    date: format_date(a.date),
                    minutes: reading_time_minutes(&a.content),
                })
                .collect();

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&articles)?),
                "csv" => print_csv(&rows)?,
                _ => {
                    if rows.is_empty() {
                        println!("No articles found.");
                        return Ok(());
                    }
                    println!(
                        "{:<4} {:<52} {:<16} {:<10} {:<13} {}",
                        "ID", "Title", "Category", "City", "Date", "Read"
                    );
                    println!("{}", "-".repeat(104));
                    for row in &rows {
                        println!(
                            "{:<4} {:<52} {:<16} {:<10} {:<13} {} min",
                            row.id, row.title, row.category, row.city, row.date, row.minutes
                        );
                    }
                }
            }
        }

        Commands::Validate => {
            let summary = dataset.summary();
            let issues = dataset.validate();

            if cli.format == "json" {
                let report = serde_json::json!({
                    "summary": summary,
                    "issues": issues.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("PawConnect dataset v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("  Cities:       {}", summary.cities);
                println!("  Users:        {}", summary.users);
                println!("  Pets:         {}", summary.pets);
                println!("  Categories:   {}", summary.categories);
                println!("  Providers:    {}", summary.providers);
                println!("  Articles:     {}", summary.articles);
                println!("  Features:     {}", summary.features);
                println!("  Testimonials: {}", summary.testimonials);
                println!();

                if issues.is_empty() {
                    println!("No problems found.");
                } else {
                    println!("Problems ({}):", issues.len());
                    for issue in &issues {
                        println!("  {}", issue);
                    }
                }
            }

            if !issues.is_empty() {
                std::process::exit(1);
            }
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

fn print_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
