//! Pure mappings from raw block fields to display strings.

use api::Block;
use chrono::DateTime;
use chrono::Local;
use num_format::Locale;
use num_format::ToFormattedString;

/// Shown in place of a value that is absent or zero.
pub const NO_VALUE: &str = "-";

/// Layout used for block timestamps, in the viewer's local time zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How many transactions the preview lists before summarizing the rest.
pub const PREVIEW_LEN: usize = 5;

/// Renders unix seconds as a local date-time.
pub fn format_timestamp(timestamp: Option<u64>) -> String {
    let Some(secs) = timestamp.filter(|t| *t != 0) else {
        return NO_VALUE.to_string();
    };
    match i64::try_from(secs).ok().and_then(|s| DateTime::from_timestamp(s, 0)) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        None => NO_VALUE.to_string(),
    }
}

/// Digit grouping used for every count on the dashboard.
pub(crate) fn formatted_number(i: impl ToFormattedString) -> String {
    i.to_formatted_string(&Locale::en)
}

pub fn format_gas_value(gas: Option<u64>) -> String {
    match gas {
        None | Some(0) => NO_VALUE.to_string(),
        Some(v) => formatted_number(v),
    }
}

pub fn format_block_number(height: u64) -> String {
    format!("#{}", formatted_number(height))
}

/// Share of the gas limit consumed, with two decimals.
///
/// A missing block or a zero gas limit yields the bare `"0%"`.
pub fn gas_usage_percentage(block: Option<&Block>) -> String {
    match block {
        Some(b) if b.gas_limit != 0 => {
            format!("{:.2}%", b.gas_used as f64 / b.gas_limit as f64 * 100.0)
        }
        _ => "0%".to_string(),
    }
}

/// What the transaction card lists.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransactionPreview<'a> {
    Empty,
    Listed {
        shown: &'a [String],
        total: usize,
        remaining: usize,
    },
}

pub fn transaction_preview(transactions: &[String]) -> TransactionPreview<'_> {
    if transactions.is_empty() {
        return TransactionPreview::Empty;
    }
    let shown = &transactions[..transactions.len().min(PREVIEW_LEN)];
    TransactionPreview::Listed {
        shown,
        total: transactions.len(),
        remaining: transactions.len() - shown.len(),
    }
}
