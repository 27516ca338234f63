// Logging proxy: wraps any `Account` and counts calls per method

use std::collections::BTreeMap;
use std::fmt;

use log::info;

/// Capabilities shared by the real account and its proxy.
pub trait Account: fmt::Display {
    fn deposit(&mut self, amount: i64);
    fn withdraw(&mut self, amount: i64) -> bool;
    fn balance(&self) -> i64;
}

pub const DEFAULT_OVERDRAFT_LIMIT: i64 = -500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    balance: i64,
    overdraft_limit: i64,
}

impl BankAccount {
    pub fn new(overdraft_limit: i64) -> Self {
        Self {
            balance: 0,
            overdraft_limit,
        }
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new(DEFAULT_OVERDRAFT_LIMIT)
    }
}

impl Account for BankAccount {
    fn deposit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
        info!("Deposited ${amount}, balance is now {}", self.balance);
    }

    fn withdraw(&mut self, amount: i64) -> bool {
        let allowed = self
            .balance
            .checked_sub(amount)
            .is_some_and(|balance| balance >= self.overdraft_limit);
        if allowed {
            self.balance -= amount;
            info!("Withdrew ${amount}, balance is now {}", self.balance);
            true
        } else {
            false
        }
    }

    fn balance(&self) -> i64 {
        self.balance
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Balance: {}", self.balance)
    }
}

/// Proxy that records every `Account` call before forwarding it.
#[derive(Debug, Clone)]
pub struct Logged<T> {
    subject: T,
    calls: BTreeMap<&'static str, usize>,
    invocations: Vec<String>,
}

impl<T: Account> Logged<T> {
    pub fn new(subject: T) -> Self {
        Self {
            subject,
            calls: BTreeMap::new(),
            invocations: Vec::new(),
        }
    }

    fn record(&mut self, method: &'static str, args: &[&dyn fmt::Display]) {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        let line = format!(
            "Invoking {}.{method} with arguments [{}]",
            subject_name::<T>(),
            args.join(",")
        );
        info!("{line}");
        self.invocations.push(line);
        *self.calls.entry(method).or_insert(0) += 1;
    }

    /// `Invoking BankAccount.deposit with arguments [100]` lines, oldest first.
    pub fn invocations(&self) -> &[String] {
        &self.invocations
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls.get(method).copied().unwrap_or(0)
    }

    /// One `"{method} called {n} time(s)"` line per invoked method.
    pub fn info(&self) -> String {
        self.calls
            .iter()
            .map(|(method, count)| format!("{method} called {count} time(s)\n"))
            .collect()
    }

    pub fn subject(&self) -> &T {
        &self.subject
    }

    pub fn into_inner(self) -> T {
        self.subject
    }
}

impl<T: Default + Account> Default for Logged<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Account> Account for Logged<T> {
    fn deposit(&mut self, amount: i64) {
        self.record("deposit", &[&amount]);
        self.subject.deposit(amount);
    }

    fn withdraw(&mut self, amount: i64) -> bool {
        self.record("withdraw", &[&amount]);
        self.subject.withdraw(amount)
    }

    fn balance(&self) -> i64 {
        self.subject.balance()
    }
}

impl<T: Account> fmt::Display for Logged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.info(), self.subject)
    }
}

fn subject_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
