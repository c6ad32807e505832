//! Command-line client for shelter statistics.
//!
//! Computes any statistic directly against the record stores, without going
//! through the HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Adoption overview
//! cargo run --bin shelter-stats-cli -- summary
//!
//! # Monthly trend over the last 6 months, as JSON
//! cargo run --bin shelter-stats-cli -- monthly --months 6 --json
//!
//! # Check that the record store answers
//! cargo run --bin shelter-stats-cli -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `shelter_stats::config`), notably `STORE_API_URL`.

use shelter_stats::api::dto::{
    AdoptionSummaryResponse, CampaignTypeParticipationDto, CategoryCountDto,
    DonationSummaryResponse, MonthlyActivityDto, MonthlyAdoptionsDto,
};
use shelter_stats::config::{self, MAX_LOOKBACK_MONTHS};
use shelter_stats::domain::aggregation::{CategoryCount, DEFAULT_LOOKBACK_MONTHS};
use shelter_stats::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;

/// CLI tool for shelter statistics.
#[derive(Parser)]
#[command(name = "shelter-stats-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the raw JSON document instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Adoption overview
    Summary,

    /// Species ranked by adoptions
    Species,

    /// Shelters ranked by adoptions
    Shelters,

    /// Adoptions per month
    Monthly {
        /// Lookback window in months (default: DEFAULT_LOOKBACK_MONTHS env var)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_LOOKBACK_MONTHS as i64))]
        months: Option<u32>,
    },

    /// Volunteer participation per campaign type
    Volunteers,

    /// Donation overview
    Donations,

    /// Adoptions, publications and donations per month
    Activity {
        /// Lookback window in months (default: DEFAULT_LOOKBACK_MONTHS env var)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_LOOKBACK_MONTHS as i64))]
        months: Option<u32>,
    },

    /// Check record store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let state = AppState::from_config(&config)?;
    let json = cli.json;

    match cli.command {
        Commands::Summary => {
            let summary: AdoptionSummaryResponse = state.adoption_stats.summary().await?.into();
            output(json, &summary, || print_summary(&summary))?;
        }
        Commands::Species => {
            let ranking = state.adoption_stats.species_ranking().await?;
            print_ranking(json, "🐾 Most adopted species", ranking)?;
        }
        Commands::Shelters => {
            let ranking = state.adoption_stats.shelter_ranking().await?;
            print_ranking(json, "🏠 Shelters by adoptions", ranking)?;
        }
        Commands::Monthly { months } => {
            let months = months.unwrap_or(state.default_lookback_months);
            let trend: Vec<MonthlyAdoptionsDto> = state
                .adoption_stats
                .monthly_trend(months)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output(json, &trend, || print_trend(months, &trend))?;
        }
        Commands::Volunteers => {
            let rows: Vec<CampaignTypeParticipationDto> = state
                .volunteer_stats
                .participation()
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output(json, &rows, || print_participation(&rows))?;
        }
        Commands::Donations => {
            let summary: DonationSummaryResponse = state.donation_stats.summary().await?.into();
            output(json, &summary, || print_donations(&summary))?;
        }
        Commands::Activity { months } => {
            let months = months.unwrap_or(state.default_lookback_months);
            let rows: Vec<MonthlyActivityDto> = state
                .activity
                .monthly_activity(months)
                .await
                .into_iter()
                .map(Into::into)
                .collect();
            output(json, &rows, || print_activity(months, &rows))?;
        }
        Commands::Check => {
            println!("{}", "🔍 Checking record store...".bright_blue());
            state
                .store_client
                .ping()
                .await
                .context("Record store unreachable")?;
            println!(
                "{} {}",
                "✅ Record store reachable at".green().bold(),
                state.store_client.redacted_url().bright_white()
            );
        }
    }

    Ok(())
}

/// Prints `value` as pretty JSON, or runs the table printer.
fn output<T: Serialize>(json: bool, value: &T, table: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        table();
    }
    Ok(())
}

fn print_ranking(json: bool, title: &str, ranking: Vec<CategoryCount>) -> Result<()> {
    let rows: Vec<CategoryCountDto> = ranking.into_iter().map(Into::into).collect();
    output(json, &rows, || {
        println!("{}", title.bright_blue().bold());
        println!();
        print_breakdown(&rows, "  ");
        println!();
    })
}

fn print_breakdown(rows: &[CategoryCountDto], indent: &str) {
    if rows.is_empty() {
        println!("{indent}{}", "(none)".dimmed());
        return;
    }
    for row in rows {
        println!(
            "{indent}{:<24} {:>6}  {:>6.2}%",
            row.categoria.cyan(),
            row.cantidad.to_string().bright_green().bold(),
            row.porcentaje
        );
    }
}

fn print_summary(summary: &AdoptionSummaryResponse) {
    println!("{}", "📊 Adoption overview".bright_blue().bold());
    println!();
    println!(
        "  Total adoptions: {}",
        summary.total_adopciones.to_string().bright_green().bold()
    );
    println!(
        "  This month:      {}",
        summary.adopciones_mes_actual.to_string().bright_green()
    );
    println!(
        "  This year:       {}",
        summary.adopciones_anio_actual.to_string().bright_green()
    );
    println!();
    println!("{}", "  Species".bright_white().bold());
    print_breakdown(&summary.especies_mas_adoptadas, "    ");
    println!("{}", "  Shelters".bright_white().bold());
    print_breakdown(&summary.refugios_mas_adopciones, "    ");
    println!();
    print_trend(DEFAULT_LOOKBACK_MONTHS, &summary.tendencia_mensual);
}

fn print_trend(months: u32, trend: &[MonthlyAdoptionsDto]) {
    println!(
        "{}",
        format!("📅 Adoptions per month (last {months} months)")
            .bright_blue()
            .bold()
    );
    if trend.is_empty() {
        println!("  {}", "(no adoptions in window)".dimmed());
    }
    for bucket in trend {
        println!(
            "  {}  {}",
            bucket.periodo.bright_white(),
            bucket.total_adopciones.to_string().bright_green().bold()
        );
        print_breakdown(&bucket.especies_adoptadas, "      ");
    }
    println!();
}

fn print_participation(rows: &[CampaignTypeParticipationDto]) {
    println!(
        "{}",
        "🙋 Volunteers per campaign type".bright_blue().bold()
    );
    println!();
    if rows.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for row in rows {
        println!(
            "  {:<24} {:>5} ({:>6.2}%)  active {}  inactive {}",
            row.tipo_campania.cyan(),
            row.total_voluntarios.to_string().bright_green().bold(),
            row.porcentaje_participacion,
            row.voluntarios_activos.to_string().green(),
            row.voluntarios_inactivos.to_string().yellow()
        );
    }
    println!();
}

fn print_donations(summary: &DonationSummaryResponse) {
    let amount = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));

    println!("{}", "💰 Donations".bright_blue().bold());
    println!();
    println!(
        "  Donations:   {}",
        summary.total_donaciones.to_string().bright_green().bold()
    );
    println!(
        "  Total:       {}",
        format!("{:.2}", summary.monto_total_donado).bright_green().bold()
    );
    println!("  Average:     {:.2}", summary.donacion_promedio);
    println!(
        "  Min / Max:   {} / {}",
        amount(summary.donacion_minima),
        amount(summary.donacion_maxima)
    );
    println!("  This month:  {:.2}", summary.total_mes_actual);
    println!("  This year:   {:.2}", summary.total_anio_actual);
    println!();
    println!("{}", "  By method".bright_white().bold());
    print_breakdown(&summary.donaciones_por_metodo, "    ");
    println!("{}", "  By status".bright_white().bold());
    print_breakdown(&summary.donaciones_por_estado, "    ");
    println!();
}

fn print_activity(months: u32, rows: &[MonthlyActivityDto]) {
    println!(
        "{}",
        format!("📈 Activity per month (last {months} months)")
            .bright_blue()
            .bold()
    );
    println!();
    println!(
        "  {:<8} {:>9} {:>12} {:>9} {:>12}",
        "period", "adoptions", "publications", "donations", "amount"
    );
    for row in rows {
        println!(
            "  {:<8} {:>9} {:>12} {:>9} {:>12.2}",
            row.periodo,
            row.total_adopciones,
            row.total_publicaciones,
            row.total_donaciones,
            row.monto_total_donado
        );
    }
    println!();
}
