use std::io::Write;
use std::num::ParseIntError;

use incr::Increment;

use crate::{CliError, Config, Result};

/// Parse `token` as an `i32` and increment it `config.times` times under
/// `config.overflow`.
pub fn increment_token(token: &str, config: &Config) -> Result<i32> {
    let value: i32 = token.parse().map_err(|e: ParseIntError| CliError::InvalidValue {
        token: token.to_string(),
        reason: e.to_string(),
    })?;

    let result = value
        .incr_n(config.times, config.overflow)
        .map_err(|source| CliError::Increment {
            token: token.to_string(),
            source,
        })?;

    tracing::debug!(value, result, overflow = %config.overflow, times = config.times, "incremented");
    Ok(result)
}

/// Increment every token and write the results to `out`, one per line.
///
/// Tokens are raw bytes; one that is not UTF-8 is an invalid value like any
/// other unparsable token. Stops at the first token that fails; results for
/// the tokens before it have already been written. Returns the number of
/// values written.
pub fn increment_tokens<I, W>(tokens: I, config: &Config, out: &mut W) -> Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
    W: Write,
{
    let mut written = 0;
    for token in tokens {
        let token = token.as_ref();
        let text = std::str::from_utf8(token).map_err(|e| CliError::InvalidValue {
            token: String::from_utf8_lossy(token).into_owned(),
            reason: e.to_string(),
        })?;
        let result = increment_token(text, config)?;
        writeln!(out, "{result}")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Split `input` on ASCII whitespace, skipping empty tokens.
pub fn split_ascii_whitespace(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    input
        .split(|byte| byte.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}
