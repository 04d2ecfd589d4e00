//! Unit tests for the keypad module

#[cfg(test)]
mod tests {
    use crate::keypad::{frequencies, is_dial_symbol, FrequencyPair};

    #[test]
    fn test_frequency_table_complete() {
        // The full keypad grid, row by row
        let expected = [
            ('1', 1209, 697),
            ('2', 1336, 697),
            ('3', 1477, 697),
            ('4', 1209, 770),
            ('5', 1336, 770),
            ('6', 1477, 770),
            ('7', 1209, 852),
            ('8', 1336, 852),
            ('9', 1477, 852),
            ('*', 1209, 941),
            ('0', 1336, 941),
            ('#', 1477, 941),
            ('-', 0, 0),
        ];

        for (symbol, high, low) in expected {
            assert_eq!(
                frequencies(symbol),
                FrequencyPair { high, low },
                "wrong frequency pair for {symbol:?}"
            );
        }
    }

    #[test]
    fn test_dash_is_silent() {
        assert_eq!(frequencies('-'), FrequencyPair { high: 0, low: 0 });
    }

    #[test]
    fn test_unknown_symbols_map_to_silence() {
        // The mapper never errors; validation is the encoder's job
        for symbol in ['a', 'A', '+', ' ', '(', '\u{1F600}'] {
            assert_eq!(frequencies(symbol), FrequencyPair { high: 0, low: 0 });
        }
    }

    #[test]
    fn test_is_dial_symbol_accepts_alphabet() {
        for symbol in "0123456789#*-".chars() {
            assert!(is_dial_symbol(symbol), "{symbol:?} should be dialable");
        }
    }

    #[test]
    fn test_is_dial_symbol_rejects_everything_else() {
        for symbol in ['a', 'A', '+', ' ', '.', '/', '(', ')'] {
            assert!(!is_dial_symbol(symbol), "{symbol:?} should not be dialable");
        }
    }
}
