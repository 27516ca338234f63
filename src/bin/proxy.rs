// Proxy walkthrough

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use pattern_workshop::cli::DemoArgs;
use pattern_workshop::config::ProxyConfig;
use pattern_workshop::proxy::{
    solve_range, Account, BankAccount, CarProxy, Creature, Creatures, DataLoader, Drive, Driver,
    Logged, MasonrySettings, Percentage, Person, PersonViewModel,
};
use pattern_workshop::{Result, WorkshopError};

fn section(title: &str) {
    println!("\n{}", format!("== {title} ==").cyan().bold());
}

fn protection(config: &ProxyConfig) -> Result<()> {
    section("Protection proxy");
    let car = CarProxy::with_minimum_age(Driver::new(config.driver_age), config.minimum_driving_age);
    match car.drive() {
        Ok(message) => println!("{message}"),
        Err(err @ WorkshopError::AccessDenied { .. }) => println!("{}", err.to_string().yellow()),
        Err(err) => return Err(err),
    }
    Ok(())
}

fn properties() {
    section("Property proxy");
    let mut creature = Creature::default();
    for agility in [10, 10, 11] {
        let changed = creature.set_agility(agility);
        println!("agility = {agility} (changed: {changed})");
    }

    section("Lazy property");
    let loader = DataLoader::default();
    println!("Before accessing Data");
    let rows = loader.data.value().len();
    println!("After accessing Data ({rows} rows)");
}

fn values() {
    section("Value proxy");
    println!("{}", Percentage::from_percentage(5.0).of(10.0));
    println!(
        "{}",
        Percentage::from_percentage(2.0) + Percentage::from_percentage(3.0)
    );
}

fn structure_of_arrays(config: &ProxyConfig) -> Result<()> {
    section("Structure of arrays");
    let mut creatures = Creatures::new(config.creature_count);
    for creature in creatures.iter_mut() {
        *creature.x += 1;
    }
    if !creatures.is_empty() {
        let first = creatures.at(0)?;
        *first.age = 3;
        println!("first creature: {:?}", creatures.get(0)?.to_record());
    }
    let moved = creatures.xs().iter().filter(|&&x| x == 1).count();
    println!("{moved} of {} creatures moved", creatures.len());
    Ok(())
}

fn masonry() {
    section("Array-backed properties");
    let mut settings = MasonrySettings::default();
    settings.set_walls(true);
    println!("all = {:?}", settings.all());
    settings.set_all(Some(true));
    println!("all = {:?}", settings.all());
}

fn logging_proxy(config: &ProxyConfig) {
    section("Logging proxy");
    let mut account = Logged::new(BankAccount::new(config.overdraft_limit));
    account.deposit(100);
    account.withdraw(50);
    for line in account.invocations() {
        println!("{line}");
    }
    println!("{account}");
}

fn view_model() {
    section("View model");
    let mut vm = PersonViewModel::new(Person::new("John", "Doe"));
    vm.subscribe(|property| println!("Property '{property}' has changed!"));

    println!("Initial Full Name: {}", vm.full_name());
    vm.set_first_name("Jane");
    vm.set_last_name("Smith");
    println!("Updated Full Name: {}", vm.full_name());
    vm.set_full_name("Michael Johnson");
    println!("Updated via FullName: {}", vm.full_name());
}

fn bit_fragging(config: &ProxyConfig) -> Result<()> {
    section("Bit fragging");
    let targets = config.target_min..=config.target_max;
    for (target, problem) in solve_range(&config.puzzle_numbers, targets)? {
        println!("{problem} = {target}");
    }
    Ok(())
}

fn run(args: &DemoArgs) -> Result<()> {
    let config = args.setup()?;
    let proxy = &config.proxy;
    protection(proxy)?;
    properties();
    values();
    structure_of_arrays(proxy)?;
    masonry();
    logging_proxy(proxy);
    view_model();
    bit_fragging(proxy)
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
