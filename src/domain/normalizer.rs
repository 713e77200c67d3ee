//! Quote normalization: bookmaker-indexed quote sets to outcome-indexed quotes.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::error::DomainError;
use super::quote::{BookmakerQuoteSet, Quote};

/// Quotes for one outcome, in bookmaker encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeQuotes {
    name: String,
    quotes: Vec<Quote>,
}

impl OutcomeQuotes {
    /// Get the outcome name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the quotes, one per bookmaker.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Insert a quote; a quote from the same bookmaker is replaced in place.
    fn upsert(&mut self, quote: Quote) {
        match self
            .quotes
            .iter_mut()
            .find(|existing| existing.bookmaker() == quote.bookmaker())
        {
            Some(existing) => *existing = quote,
            None => self.quotes.push(quote),
        }
    }
}

/// Outcome name to per-bookmaker quotes, in outcome encounter order.
///
/// Every outcome present holds at least one quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedQuotes {
    outcomes: Vec<OutcomeQuotes>,
    index: HashMap<String, usize>,
}

impl NormalizedQuotes {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, outcome: &str, quote: Quote, bookmakers: usize) {
        match self.index.get(outcome) {
            Some(&slot) => self.outcomes[slot].upsert(quote),
            None => {
                let mut quotes = Vec::with_capacity(bookmakers);
                quotes.push(quote);
                self.index.insert(outcome.to_string(), self.outcomes.len());
                self.outcomes.push(OutcomeQuotes {
                    name: outcome.to_string(),
                    quotes,
                });
            }
        }
    }

    /// Look up the quotes for an outcome.
    #[must_use]
    pub fn get(&self, outcome: &str) -> Option<&OutcomeQuotes> {
        self.index.get(outcome).map(|&slot| &self.outcomes[slot])
    }

    /// Iterate outcomes in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &OutcomeQuotes> {
        self.outcomes.iter()
    }

    /// Get the number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if no bookmaker priced the market.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl IntoIterator for NormalizedQuotes {
    type Item = OutcomeQuotes;
    type IntoIter = std::vec::IntoIter<OutcomeQuotes>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

/// Collect every bookmaker's prices for `market_key`, keyed by outcome name.
///
/// Bookmakers that do not offer the market are skipped. Within one
/// bookmaker, a repeated outcome name replaces the earlier price.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPrice`] on the first price that is not
/// finite or does not exceed 1.0.
pub fn normalize(
    sets: &[BookmakerQuoteSet],
    market_key: &str,
) -> Result<NormalizedQuotes, DomainError> {
    let outcomes = sets
        .iter()
        .find_map(|set| set.market(market_key))
        .map_or(0, |market| market.outcomes.len());
    let mut normalized = NormalizedQuotes::with_capacity(outcomes);

    for set in sets {
        let Some(market) = set.market(market_key) else {
            debug!(
                bookmaker = %set.bookmaker,
                market = market_key,
                "Bookmaker does not offer market, skipping"
            );
            continue;
        };

        for outcome in &market.outcomes {
            let quote = Quote::try_from_outcome(set, market, outcome).map_err(|err| {
                warn!(
                    bookmaker = %set.bookmaker,
                    market = market_key,
                    outcome = %outcome.name,
                    error = %err,
                    "Rejecting quote"
                );
                err
            })?;
            normalized.insert(&outcome.name, quote, sets.len());
        }
    }

    debug!(
        market = market_key,
        bookmakers = sets.len(),
        outcomes = normalized.len(),
        "Normalized quotes"
    );

    Ok(normalized)
}
