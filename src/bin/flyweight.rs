// Flyweight walkthrough: shared name table, memory comparison, text ranges

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use itertools::Itertools;

use pattern_workshop::cli::DemoArgs;
use pattern_workshop::config::FlyweightConfig;
use pattern_workshop::flyweight::{
    compare_memory, random_names, total_index_count, FormattedText, RangeFormattedText,
    StringTable, User,
};
use pattern_workshop::Result;

const RANDOM_NAME_LEN: usize = 10;

fn section(title: &str) {
    println!("\n{}", format!("== {title} ==").cyan().bold());
}

fn shared_names(config: &FlyweightConfig) -> Result<()> {
    section("Shared name parts");
    let mut table = StringTable::new();
    let users: Vec<User> = config
        .names
        .iter()
        .map(|name| User::new(name, &mut table))
        .collect();

    for user in &users {
        println!("{}", user.debug_line(&table)?);
    }

    println!("\nShared Name Parts:");
    for part in table.entries() {
        println!("- {part}");
    }

    println!("\nTotal Length of All Names: {}", total_index_count(&users));
    for user in &users {
        println!("{}", user.indices().iter().join(", "));
    }
    Ok(())
}

fn memory(config: &FlyweightConfig) {
    section("Memory");
    let first = random_names(config.random_users, RANDOM_NAME_LEN);
    let last = random_names(config.random_users, RANDOM_NAME_LEN);
    let comparison = compare_memory(&first, &last);

    println!("users:           {}", comparison.users);
    println!("naive bytes:     {}", comparison.naive_bytes);
    println!(
        "flyweight bytes: {} ({} table entries)",
        comparison.flyweight_bytes, comparison.table_entries
    );
}

fn text_formatting(config: &FlyweightConfig) -> Result<()> {
    section("Text formatting");
    let mut naive = FormattedText::new(&config.text);
    if let Some([start, end]) = config.capitalize.first() {
        naive.capitalize(*start, *end)?;
    }
    println!("{naive}");

    let mut ranged = RangeFormattedText::new(&config.text);
    for [start, end] in &config.capitalize {
        ranged.add_range(*start, *end)?.capitalize = true;
    }
    println!("{ranged}");

    if let Some([start, end]) = config.capitalize.last() {
        ranged.add_range(*start, *end)?.bold = true;
    }
    println!("{}", ranged.render_styled());
    Ok(())
}

fn run(args: &DemoArgs) -> Result<()> {
    let config = args.setup()?;
    shared_names(&config.flyweight)?;
    memory(&config.flyweight);
    text_formatting(&config.flyweight)
}

fn main() -> ExitCode {
    let args = DemoArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
