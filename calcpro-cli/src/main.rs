//! CalcPro command line
//!
//! One subcommand per engine. Raw argument text goes through the same
//! not-ready rule as the other front ends: an empty or unparseable field
//! means the engine is not invoked and nothing is printed. Engine errors
//! are printed and reflected in the exit code; nothing here panics on user
//! input.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;

use calcpro::datetime::{self, DecomposeMode};
use calcpro::favorites::{FavoritesStore, JsonFileStore};
use calcpro::units::UnitCategory;
use calcpro::{expr, finance, health, input, percent, round2, units};

#[derive(Parser)]
#[command(name = "calcpro", version, about = "Calculator engines: units, percentages, money, dates")]
struct Cli {
    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding persisted data (the favorites list)
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a value between units of one category
    Convert {
        /// length, weight, or area
        category: String,
        from: String,
        to: String,
        value: String,
    },
    /// What is X% of Y
    PercentOf { percent: String, number: String },
    /// X is what percent of Y
    WhatPercent { part: String, whole: String },
    /// Percent change from A to B
    PercentChange { from: String, to: String },
    /// Future value under annual compounding
    Compound {
        principal: String,
        rate: String,
        years: String,
    },
    /// Monthly mortgage payment with optional tax and insurance
    Mortgage {
        principal: String,
        rate: String,
        term_years: String,
        /// Annual property tax
        #[arg(long)]
        tax: Option<String>,
        /// Annual insurance premium
        #[arg(long)]
        insurance: Option<String>,
    },
    /// Apply discounts sequentially to a price (blank steps are skipped)
    Discount {
        price: String,
        #[arg(num_args = 1..)]
        percents: Vec<String>,
    },
    /// Tip on a bill, split across a party
    Tip {
        bill: String,
        percent: String,
        people: String,
    },
    /// Body mass index from weight (kg) and height (cm)
    Bmi { weight: String, height: String },
    /// Hamwi ideal weight in kg
    IdealWeight {
        gender: GenderArg,
        height_cm: String,
    },
    /// Age on a date (default: today)
    Age {
        birth: String,
        #[arg(long)]
        on: Option<String>,
        /// Use real month lengths instead of the 365/30 model
        #[arg(long)]
        calendar: bool,
    },
    /// Years/months/days between two dates
    DateDiff {
        start: String,
        end: String,
        #[arg(long)]
        calendar: bool,
    },
    /// Hours and minutes between two times of day
    TimeDiff { start: String, end: String },
    /// Whole days between two dates
    DaysBetween { start: String, end: String },
    /// Evaluate a scientific expression
    Eval {
        #[arg(num_args = 1.., trailing_var_arg = true)]
        expression: Vec<String>,
    },
    /// Manage the favorites list
    Fav {
        #[command(subcommand)]
        action: FavCommand,
    },
}

#[derive(Subcommand)]
enum FavCommand {
    /// Print all favorite ids in order
    List,
    /// Add the id if absent, remove it if present
    Toggle { id: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for health::Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => health::Gender::Male,
            GenderArg::Female => health::Gender::Female,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> ExitCode {
    let out = Output { json: cli.json };

    match cli.command {
        Command::Convert {
            category,
            from,
            to,
            value,
        } => {
            let Some(category) = UnitCategory::from_name(&category) else {
                return fail(format!("unknown category '{category}'"));
            };
            let Some(value) = input::field::<f64>(&value) else {
                return not_ready();
            };
            match units::convert(category, &from, &to, value) {
                Ok(conversion) => {
                    out.emit(&conversion, &format!("{} {}", conversion.display, to))
                }
                Err(e) => fail(e.to_string()),
            }
        }

        Command::PercentOf { percent: p, number } => {
            let (Some(p), Some(number)) = (input::field::<f64>(&p), input::field::<f64>(&number))
            else {
                return not_ready();
            };
            let result = round2(percent::percent_of(number, p));
            out.emit(&json!({ "result": result }), &result.to_string())
        }

        Command::WhatPercent { part, whole } => {
            let (Some(part), Some(whole)) =
                (input::field::<f64>(&part), input::field::<f64>(&whole))
            else {
                return not_ready();
            };
            match percent::what_percent(part, whole) {
                Ok(result) => {
                    let result = round2(result);
                    out.emit(&json!({ "result": result }), &format!("{result}%"))
                }
                Err(e) => fail(e.to_string()),
            }
        }

        Command::PercentChange { from, to } => {
            let (Some(from), Some(to)) = (input::field::<f64>(&from), input::field::<f64>(&to))
            else {
                return not_ready();
            };
            match percent::percent_change(from, to) {
                Ok(result) => {
                    let result = round2(result);
                    out.emit(&json!({ "result": result }), &format!("{result}%"))
                }
                Err(e) => fail(e.to_string()),
            }
        }

        Command::Compound {
            principal,
            rate,
            years,
        } => {
            let (Some(principal), Some(rate), Some(years)) = (
                input::field::<f64>(&principal),
                input::field::<f64>(&rate),
                input::field::<f64>(&years),
            ) else {
                return not_ready();
            };
            let future_value = round2(finance::compound_interest(principal, rate, years));
            let interest = round2(finance::interest_earned(principal, future_value));
            out.emit(
                &json!({ "future_value": future_value, "interest_earned": interest }),
                &format!("future value {future_value} (interest {interest})"),
            )
        }

        Command::Mortgage {
            principal,
            rate,
            term_years,
            tax,
            insurance,
        } => {
            let (Some(principal), Some(rate), Some(term)) = (
                input::field::<f64>(&principal),
                input::field::<f64>(&rate),
                input::field::<f64>(&term_years),
            ) else {
                return not_ready();
            };
            // an unparseable optional value is not-ready, not a silent 0
            let (Some(tax), Some(insurance)) = (
                input::optional_field::<f64>(tax.as_deref()),
                input::optional_field::<f64>(insurance.as_deref()),
            ) else {
                return not_ready();
            };
            match finance::mortgage(principal, rate, term, tax, insurance) {
                Ok(payment) => out.emit(
                    &payment,
                    &format!(
                        "monthly {} (total {}, interest {})",
                        payment.monthly, payment.total, payment.breakdown.interest
                    ),
                ),
                Err(e) => fail(e.to_string()),
            }
        }

        Command::Discount { price, percents } => {
            let Some(price) = input::field::<f64>(&price) else {
                return not_ready();
            };
            let raws: Vec<&str> = percents.iter().map(String::as_str).collect();
            let steps = input::discount_fields(&raws);
            let chain = finance::chain_discounts(price, &steps);
            out.emit(
                &chain,
                &format!(
                    "final {} (saved {}, steps {:?})",
                    chain.final_price, chain.total_saved, chain.step_savings
                ),
            )
        }

        Command::Tip {
            bill,
            percent: p,
            people,
        } => {
            let (Some(bill), Some(p), Some(people)) = (
                input::field::<f64>(&bill),
                input::field::<f64>(&p),
                input::field::<u32>(&people),
            ) else {
                return not_ready();
            };
            match finance::tip_split(bill, p, people) {
                Ok(tip) => out.emit(
                    &tip,
                    &format!(
                        "tip {} -> total {} ({} per person)",
                        tip.tip_amount, tip.total, tip.per_person
                    ),
                ),
                Err(e) => fail(e.to_string()),
            }
        }

        Command::Bmi { weight, height } => {
            let (Some(weight), Some(height)) = (
                input::field::<f64>(&weight),
                input::field::<f64>(&height),
            ) else {
                return not_ready();
            };
            match health::bmi(weight, height) {
                Ok(bmi) => {
                    let category = health::BmiCategory::for_bmi(bmi);
                    out.emit(
                        &json!({ "bmi": bmi, "category": category }),
                        &format!("BMI {bmi} ({})", category.label()),
                    )
                }
                Err(e) => fail(e.to_string()),
            }
        }

        Command::IdealWeight { gender, height_cm } => {
            let Some(height) = input::field::<f64>(&height_cm) else {
                return not_ready();
            };
            let kg = health::ideal_weight_kg(gender.into(), height);
            out.emit(&json!({ "ideal_weight_kg": kg }), &format!("{kg} kg"))
        }

        Command::Age { birth, on, calendar } => {
            let Some(birth) = input::date_field(&birth) else {
                return not_ready();
            };
            let on = match on {
                Some(raw) => match input::date_field(&raw) {
                    Some(date) => date,
                    None => return not_ready(),
                },
                None => chrono::Local::now().date_naive(),
            };
            let breakdown = datetime::age(birth, on, mode(calendar));
            out.emit(&breakdown, &render_breakdown(&breakdown))
        }

        Command::DateDiff {
            start,
            end,
            calendar,
        } => {
            let (Some(start), Some(end)) = (input::date_field(&start), input::date_field(&end))
            else {
                return not_ready();
            };
            let breakdown = datetime::date_diff(start, end, mode(calendar));
            out.emit(&breakdown, &render_breakdown(&breakdown))
        }

        Command::TimeDiff { start, end } => {
            let (Some(start), Some(end)) = (input::time_field(&start), input::time_field(&end))
            else {
                return not_ready();
            };
            let diff = datetime::time_diff(start, end);
            out.emit(
                &diff,
                &format!("{} hours {} minutes", diff.hours, diff.minutes),
            )
        }

        Command::DaysBetween { start, end } => {
            let (Some(start), Some(end)) = (input::date_field(&start), input::date_field(&end))
            else {
                return not_ready();
            };
            let days = datetime::days_between(start, end);
            out.emit(&json!({ "days": days }), &format!("{days} days"))
        }

        Command::Eval { expression } => {
            let text = expression.join(" ");
            match expr::evaluate(&text) {
                Ok(value) => out.emit(&json!({ "result": value }), &value.to_string()),
                // the calculator shows a literal "Error" for malformed input
                Err(e) => {
                    tracing::debug!(error = %e, "expression rejected");
                    println!("Error");
                    ExitCode::FAILURE
                }
            }
        }

        Command::Fav { action } => {
            let store = JsonFileStore::new(&cli.data_dir);
            match action {
                FavCommand::List => match store.load() {
                    Ok(ids) => out.emit(&json!({ "favorites": ids }), &ids.join("\n")),
                    Err(e) => fail(e.to_string()),
                },
                FavCommand::Toggle { id } => match store.toggle(&id) {
                    Ok(true) => out.emit(&json!({ "id": id, "favorite": true }), "added"),
                    Ok(false) => out.emit(&json!({ "id": id, "favorite": false }), "removed"),
                    Err(e) => fail(e.to_string()),
                },
            }
        }
    }
}

fn mode(calendar: bool) -> DecomposeMode {
    if calendar {
        DecomposeMode::Calendar
    } else {
        DecomposeMode::Approximate
    }
}

fn render_breakdown(b: &datetime::AgeBreakdown) -> String {
    format!(
        "{} years, {} months, {} days ({} total days)",
        b.years, b.months, b.days, b.total_days
    )
}

/// Missing or unparseable input: the engine is never invoked and nothing
/// is rendered.
fn not_ready() -> ExitCode {
    tracing::debug!("input not ready, no calculation performed");
    ExitCode::SUCCESS
}

fn fail(message: String) -> ExitCode {
    eprintln!("Error: {message}");
    ExitCode::FAILURE
}

struct Output {
    json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, plain: &str) -> ExitCode {
        if self.json {
            match serde_json::to_string_pretty(value) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => return fail(e.to_string()),
            }
        } else {
            println!("{plain}");
        }
        ExitCode::SUCCESS
    }
}
