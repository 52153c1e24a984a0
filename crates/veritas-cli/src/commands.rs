use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Display;
use veritas::{NumberError, Validator, Value};

use crate::Commands;

/// Constraint applied by `veritas number`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberCheck {
    Any,
    Positive,
    Negative,
    Even,
    Prime,
    BiggerThan(f64),
    SmallerThan(f64),
    Between(f64, f64),
}

impl NumberCheck {
    fn run(self, validator: &Validator, value: &Value) -> Result<(), NumberError> {
        match self {
            NumberCheck::Any => validator.is_number(value),
            NumberCheck::Positive => validator.is_positive(value),
            NumberCheck::Negative => validator.is_negative(value),
            NumberCheck::Even => validator.is_even(value),
            NumberCheck::Prime => validator.is_prime(value),
            NumberCheck::BiggerThan(than) => validator.bigger_than(value, than),
            NumberCheck::SmallerThan(than) => validator.smaller_than(value, than),
            NumberCheck::Between(min, max) => validator.between(value, min, max),
        }
    }
}

/// Runs one subcommand and prints the verdict
///
/// Returns whether the value passed.
pub fn execute(validator: &Validator, command: Commands, json: bool) -> Result<bool> {
    let valid = match command {
        Commands::Cpf { value } => report("CPF", validator.cpf(&read_value(&value, json)?)),
        Commands::Cnpj { value } => report("CNPJ", validator.cnpj(&read_value(&value, json)?)),
        Commands::Email { value } => report("email", validator.email(&read_value(&value, json)?)),
        Commands::Phone { value } => report("phone", validator.phone(&read_value(&value, json)?)),
        Commands::Url { value } => report("URL", validator.url(&read_value(&value, json)?)),
        Commands::String { value, min, max } => {
            let max = max.unwrap_or(usize::MAX);
            report("string", validator.string(&read_value(&value, json)?, min, max))
        }
        Commands::Number {
            value,
            positive,
            negative,
            even,
            prime,
            gt,
            lt,
            between,
        } => {
            let check = match (positive, negative, even, prime, gt, lt, between) {
                (true, ..) => NumberCheck::Positive,
                (_, true, ..) => NumberCheck::Negative,
                (_, _, true, ..) => NumberCheck::Even,
                (_, _, _, true, ..) => NumberCheck::Prime,
                (_, _, _, _, Some(than), ..) => NumberCheck::BiggerThan(than),
                (_, _, _, _, _, Some(than), _) => NumberCheck::SmallerThan(than),
                (.., Some(bounds)) => match bounds.as_slice() {
                    [min, max] => NumberCheck::Between(*min, *max),
                    _ => anyhow::bail!("--between takes exactly two values"),
                },
                _ => NumberCheck::Any,
            };
            report("number", check.run(validator, &read_value(&value, json)?))
        }
    };

    Ok(valid)
}

/// Plain text as-is, or a JSON document when `--json` is set
fn read_value(raw: &str, json: bool) -> Result<Value> {
    if !json {
        return Ok(Value::from(raw));
    }

    let parsed: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("Invalid JSON input: {}", raw))?;
    Ok(Value::from(parsed))
}

fn report<E: Display>(label: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => {
            println!("{} {}", "✓".green().bold(), format!("valid {}", label).green());
            true
        }
        Err(err) => {
            println!("{} {}", "✗".red().bold(), err.to_string().red());
            false
        }
    }
}
