pub mod config;
pub mod error;
pub mod filter;
pub mod output;

use config::Config;

/// The sequence filtered when neither the CLI nor a config file supplies one.
pub const DEFAULT_INPUT: [i64; 8] = [3, -1, 4, -2, 5, -3, 6, -4];

/// The input of a run together with its negative values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRun {
    pub input: Vec<i64>,
    /// Order-preserving subsequence of `input` holding every value below zero.
    pub negatives: Vec<i64>,
}

/// Filter the configured sequence.
pub fn run(config: &Config) -> FilterRun {
    tracing::debug!(values = ?config.values, "resolved input");
    let negatives = filter::negatives(&config.values);
    tracing::info!(
        "selected {} of {} values",
        negatives.len(),
        config.values.len()
    );
    FilterRun {
        input: config.values.clone(),
        negatives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run() {
        let result = run(&Config::default());
        assert_eq!(result.input, DEFAULT_INPUT.to_vec());
        assert_eq!(result.negatives, vec![-1, -2, -3, -4]);
    }

    #[test]
    fn run_with_custom_values() {
        let config = Config {
            values: vec![0, -9, 9],
            ..Default::default()
        };
        assert_eq!(run(&config).negatives, vec![-9]);
    }

    #[test]
    fn run_with_empty_input() {
        let config = Config {
            values: Vec::new(),
            ..Default::default()
        };
        let result = run(&config);
        assert!(result.input.is_empty());
        assert!(result.negatives.is_empty());
    }
}
