//! Preset catalog
//!
//! The fixed list of projects offered as quick picks, plus the "(None)"
//! sentinel shown first in the dropdown.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::AppError;

/// Dropdown entry meaning "nothing selected"
pub(crate) const NONE_SELECTED: &str = "(None)";

pub(crate) const PRESETS: &[&str] = &[
    "Bitcoin (BTC)",
    "Ethereum (ETH)",
    "Solana (SOL)",
    "Avalanche (AVAX)",
    "Chainlink (LINK)",
    "Polygon (MATIC)",
    "Arbitrum (ARB)",
    "Optimism (OP)",
    "Wormhole (W)",
    "Pyth (PYTH)",
    "Render (RNDR)",
    "Starknet (STRK)",
    "Celestia (TIA)",
];

/// Dropdown options: the sentinel followed by every preset, in order
pub(crate) fn options() -> impl Iterator<Item = &'static str> {
    std::iter::once(NONE_SELECTED).chain(PRESETS.iter().copied())
}

/// Uniformly random preset; never the sentinel
pub(crate) fn random_pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PRESETS.choose(rng).copied().unwrap_or(PRESETS[0])
}

/// Ticker inside the trailing parentheses, e.g. "SOL" for "Solana (SOL)"
fn ticker(label: &str) -> Option<&str> {
    let open = label.rfind('(')?;
    label[open + 1..].strip_suffix(')')
}

/// Resolve a dropdown choice given as an index into `options()` or a label.
///
/// `0` and the sentinel itself resolve to `NONE_SELECTED`. Labels match
/// case-insensitively on the full label, the name before the ticker, or the
/// bare ticker.
pub(crate) fn lookup(input: &str) -> Result<&'static str, AppError> {
    let trimmed = input.trim();
    let unknown = || AppError::UnknownPreset {
        input: trimmed.to_string(),
    };

    if trimmed.is_empty() {
        return Ok(NONE_SELECTED);
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        return options().nth(index).ok_or_else(unknown);
    }

    let wanted = trimmed.to_lowercase();
    options()
        .find(|label| {
            let lower = label.to_lowercase();
            let name = lower.split(" (").next().unwrap_or(lower.as_str());
            lower == wanted
                || name == wanted
                || ticker(&lower).is_some_and(|t| t == wanted)
        })
        .ok_or_else(unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn options_start_with_sentinel() {
        let opts: Vec<&str> = options().collect();
        assert_eq!(opts[0], NONE_SELECTED);
        assert_eq!(opts.len(), PRESETS.len() + 1);
        assert_eq!(&opts[1..], PRESETS);
    }

    #[test]
    fn random_pick_stays_in_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pick = random_pick(&mut rng);
            assert!(PRESETS.contains(&pick));
            assert_ne!(pick, NONE_SELECTED);
        }
    }

    #[test]
    fn random_pick_reaches_every_preset() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(random_pick(&mut rng));
        }
        assert_eq!(seen.len(), PRESETS.len());
    }

    #[test]
    fn lookup_by_index() {
        assert_eq!(lookup("0").unwrap(), NONE_SELECTED);
        assert_eq!(lookup("1").unwrap(), "Bitcoin (BTC)");
        assert_eq!(lookup("13").unwrap(), "Celestia (TIA)");
    }

    #[test]
    fn lookup_index_out_of_range() {
        let err = lookup("14").unwrap_err();
        assert!(matches!(err, AppError::UnknownPreset { ref input } if input == "14"));
    }

    #[test]
    fn lookup_by_label_name_and_ticker() {
        assert_eq!(lookup("Solana (SOL)").unwrap(), "Solana (SOL)");
        assert_eq!(lookup("solana").unwrap(), "Solana (SOL)");
        assert_eq!(lookup("sol").unwrap(), "Solana (SOL)");
        assert_eq!(lookup("  W ").unwrap(), "Wormhole (W)");
    }

    #[test]
    fn lookup_blank_and_sentinel() {
        assert_eq!(lookup("").unwrap(), NONE_SELECTED);
        assert_eq!(lookup("(none)").unwrap(), NONE_SELECTED);
    }

    #[test]
    fn lookup_unknown_label() {
        assert!(lookup("Dogecoin").is_err());
    }

    #[test]
    fn ticker_extraction() {
        assert_eq!(ticker("Render (RNDR)"), Some("RNDR"));
        assert_eq!(ticker("Render"), None);
    }
}
