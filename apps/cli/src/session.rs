//! # Shop Session
//!
//! Input handling for the two ways the CLI is driven.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  piped stdin ──► read all ──► Shop::checkout ──► stdout / stderr       │
//! │                                                                         │
//! │  terminal    ──► prompt loop                                           │
//! │                    "done"          → checkout, reset cart               │
//! │                    "clear"         → reset cart                         │
//! │                    "list"          → show titles                        │
//! │                    "quit" | "exit" → stop                               │
//! │                    anything else   → add title                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Read, Write};

use dvd_core::{Calculator, CartParser, ValidationError};
use tracing::{debug, info};

use crate::config::{AppConfig, OutputFormat};
use crate::error::AppResult;
use crate::render::PriceFormatter;

// =============================================================================
// Shop
// =============================================================================

/// Outcome of checking out one batch of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// Input rejected; nothing was priced.
    Invalid(Vec<ValidationError>),
    /// Input was valid but held no titles.
    Empty,
    /// Rendered result in the configured format.
    Priced(String),
}

/// Parser, calculator and formatter wired from one configuration.
#[derive(Debug)]
pub struct Shop {
    parser: CartParser,
    calculator: Calculator,
    formatter: PriceFormatter,
    format: OutputFormat,
}

impl Shop {
    pub fn new(config: &AppConfig) -> Self {
        Shop {
            parser: CartParser::new((&config.pricing).into()),
            calculator: Calculator::new((&config.pricing).into()),
            formatter: PriceFormatter::from(&config.display),
            format: config.display.format,
        }
    }

    pub fn checkout(&self, input: &str) -> AppResult<Checkout> {
        let errors = self.parser.validate(input);
        if !errors.is_empty() {
            debug!(errors = errors.len(), "Input rejected");
            return Ok(Checkout::Invalid(errors));
        }

        let cart = self.parser.parse(input);
        if cart.is_empty() {
            return Ok(Checkout::Empty);
        }

        let result = self.calculator.calculate(&cart);
        info!(
            items = result.items_count,
            total = %result.total_price,
            discount = result.discount_applied.as_deref().unwrap_or("none"),
            "Cart checked out"
        );

        Ok(Checkout::Priced(self.formatter.render(&result, self.format)?))
    }

    /// Writes a checkout outcome. Validation errors go to `err`.
    fn report<W: Write, E: Write>(&self, input: &str, out: &mut W, err: &mut E) -> AppResult<()> {
        match self.checkout(input)? {
            Checkout::Invalid(errors) => {
                writeln!(err, "\nValidation errors:")?;
                for error in errors {
                    writeln!(err, "  - {error}")?;
                }
            }
            Checkout::Empty => writeln!(out, "\nNo items in cart.")?,
            Checkout::Priced(text) => {
                writeln!(out)?;
                writeln!(out, "{text}")?;
            }
        }
        Ok(())
    }

    /// Prices everything read from `input` in one go. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn run_piped<R: BufRead, W: Write, E: Write>(
        &self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> AppResult<()> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        debug!(bytes = bytes.len(), "Read piped input");
        self.report(&String::from_utf8_lossy(&bytes), out, err)
    }

    /// Prompt loop until `quit`, `exit` or end of input.
    pub fn run_interactive<R: BufRead, W: Write, E: Write>(
        &self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> AppResult<()> {
        writeln!(out, "{}", "═".repeat(39))?;
        writeln!(out, "    DVD Shop Calculator")?;
        writeln!(out, "{}", "═".repeat(39))?;
        writeln!(out)?;
        writeln!(out, "Enter movie titles (one per line).")?;
        writeln!(out, "Type \"done\" when finished, or \"quit\" to exit.")?;
        writeln!(out)?;

        let mut titles: Vec<String> = Vec::new();
        let mut lines = input.lines();

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };

            match Command::parse(&line?) {
                Command::Quit => {
                    writeln!(out, "\nGoodbye!")?;
                    break;
                }
                Command::Done if titles.is_empty() => {
                    writeln!(out, "\nNo items in cart. Add some movies first!\n")?;
                }
                Command::Done => {
                    self.report(&titles.join("\n"), out, err)?;
                    titles.clear();
                    writeln!(out, "\nEnter more movies or type \"quit\" to exit.\n")?;
                }
                Command::Clear => {
                    titles.clear();
                    writeln!(out, "\nCart cleared.\n")?;
                }
                Command::List if titles.is_empty() => writeln!(out, "\nCart is empty.\n")?,
                Command::List => {
                    writeln!(out, "\nCurrent cart:")?;
                    for (i, title) in titles.iter().enumerate() {
                        writeln!(out, "  {}. {title}", i + 1)?;
                    }
                    writeln!(out)?;
                }
                Command::Add(title) => {
                    writeln!(out, "  ✓ Added: {title}")?;
                    titles.push(title);
                }
                Command::Blank => {}
            }
        }

        Ok(())
    }
}

// =============================================================================
// Commands
// =============================================================================

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Done,
    Clear,
    List,
    Quit,
    Add(String),
    Blank,
}

impl Command {
    /// Keywords are matched case-insensitively on the trimmed line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Command::Blank,
            "done" => Command::Done,
            "clear" => Command::Clear,
            "list" => Command::List,
            "quit" | "exit" => Command::Quit,
            _ => Command::Add(trimmed.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dvd_core::Money;

    fn shop(format: OutputFormat) -> Shop {
        let mut config = AppConfig::default();
        config.display.format = format;
        Shop::new(&config)
    }

    fn run_interactive(input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        shop(OutputFormat::Simple)
            .run_interactive(input.as_bytes(), &mut out, &mut err)
            .unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("done"), Command::Done);
        assert_eq!(Command::parse("  DONE "), Command::Done);
        assert_eq!(Command::parse("Clear"), Command::Clear);
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("EXIT"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Blank);
        assert_eq!(
            Command::parse("  Back to the Future 1 "),
            Command::Add("Back to the Future 1".to_string())
        );
    }

    #[test]
    fn test_checkout_priced() {
        let checkout = shop(OutputFormat::Simple)
            .checkout("Back to the Future 1\nBack to the Future 2\nBack to the Future 3\nLa chèvre")
            .unwrap();
        assert_eq!(checkout, Checkout::Priced("Prix total: 56 €".to_string()));
    }

    #[test]
    fn test_checkout_rejects_empty_and_long_titles() {
        let shop = shop(OutputFormat::Simple);
        assert_eq!(
            shop.checkout("  \n ").unwrap(),
            Checkout::Invalid(vec![ValidationError::EmptyInput])
        );

        let input = format!("Heat\n{}", "x".repeat(201));
        match shop.checkout(&input).unwrap() {
            Checkout::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors[0].to_string(),
                    "Line 2: Title too long (max 200 characters)"
                );
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_checkout_uses_configured_prices() {
        let mut config = AppConfig::default();
        config.pricing.standard_price = Money::from_cents(1999);
        config.display.format = OutputFormat::Simple;

        let checkout = Shop::new(&config).checkout("Heat").unwrap();
        assert_eq!(checkout, Checkout::Priced("Prix total: 19,99 €".to_string()));
    }

    #[test]
    fn test_piped_run() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        shop(OutputFormat::Receipt)
            .run_piped(
                "Back to the Future 1\nBack to the Future 2\n".as_bytes(),
                &mut out,
                &mut err,
            )
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("TOTAL: 27 €"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_piped_invalid_utf8_is_decoded_lossily() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input: &[u8] = b"Back to the Future 1\nBack to the Future 2\nAm\xE9lie\n";
        shop(OutputFormat::Simple)
            .run_piped(input, &mut out, &mut err)
            .unwrap();

        // (2 × 15 × 0.9) + 20
        assert!(String::from_utf8(out).unwrap().contains("Prix total: 47 €"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_piped_empty_input_reports_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        shop(OutputFormat::Receipt)
            .run_piped("".as_bytes(), &mut out, &mut err)
            .unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Validation errors:"));
        assert!(err.contains("  - Input is empty"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_interactive_done_prices_and_resets() {
        let (out, err) = run_interactive("BTTF 1\nBTTF 2\ndone\nHeat\ndone\nquit\n");

        assert!(out.contains("  ✓ Added: BTTF 1"));
        assert!(out.contains("Prix total: 27 €"));
        // Cart was reset after the first checkout.
        assert!(out.contains("Prix total: 20 €"));
        assert!(out.contains("Goodbye!"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_interactive_done_on_empty_cart() {
        let (out, _) = run_interactive("done\nquit\n");
        assert!(out.contains("No items in cart. Add some movies first!"));
        assert!(!out.contains("Prix total"));
    }

    #[test]
    fn test_interactive_list_and_clear() {
        let (out, _) = run_interactive("list\nHeat\nAmélie\nlist\nclear\nlist\n");

        assert!(out.contains("Cart is empty."));
        assert!(out.contains("Current cart:\n  1. Heat\n  2. Amélie"));
        assert!(out.contains("Cart cleared."));
        assert_eq!(out.matches("Cart is empty.").count(), 2);
    }

    #[test]
    fn test_interactive_ends_on_eof() {
        let (out, _) = run_interactive("Heat\n");
        assert!(!out.contains("Goodbye!"));
        assert!(!out.contains("Prix total"));
    }
}
