// patterns.rs - Named seed patterns, stamped onto an empty grid by the engine

/// A named list of `(row, col)` cells to set alive.
pub struct Pattern {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        label: "Glider",
        description: "Travels one cell diagonally every four generations",
        cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        label: "Blinker",
        description: "Period 2 oscillator",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "notGate",
        label: "NOT Gate",
        description: "Inverts an input signal (glider)",
        cells: &[
            // Eater
            (1, 0), (1, 1), (2, 0), (2, 2), (3, 0), (4, 0), (4, 1),
            // Glider
            (3, 10), (4, 10), (5, 10), (5, 9), (4, 8),
        ],
    },
    Pattern {
        name: "andGate",
        label: "AND Gate",
        description: "Output is on only when both inputs are on",
        cells: &[
            // Input A
            (2, 5), (3, 5), (4, 5),
            // Input B
            (10, 5), (11, 5), (12, 5),
            // Logic structure
            (6, 7), (6, 8), (7, 6), (7, 9), (8, 7), (8, 8),
            (5, 12), (6, 11), (6, 13), (7, 11), (7, 13), (8, 12),
        ],
    },
    Pattern {
        name: "orGate",
        label: "OR Gate",
        description: "Output is on when either input is on",
        cells: &[
            // Input A
            (2, 3), (2, 4), (2, 5),
            // Input B
            (6, 3), (6, 4), (6, 5),
            // Logic structure
            (4, 7), (4, 8), (5, 7), (5, 8),
            (3, 10), (4, 10), (5, 10), (6, 10), (7, 10),
            (3, 15), (4, 14), (4, 16), (5, 13), (5, 17), (6, 14), (6, 16), (7, 15),
        ],
    },
    Pattern {
        name: "xorGate",
        label: "XOR Gate",
        description: "Output is on when the inputs differ",
        cells: &[
            (10, 10), (10, 11), (10, 12),
            (15, 10), (15, 11), (15, 12),
            (12, 14), (13, 14), (14, 14),
            (12, 8), (13, 8), (14, 8),
            (16, 15), (17, 15), (18, 15),
            (16, 7), (17, 7), (18, 7),
            (20, 10), (20, 11), (20, 12),
        ],
    },
    Pattern {
        name: "gliderGun",
        label: "Glider Gun",
        description: "Gosper's gun, continuously produces gliders",
        cells: &[
            // First block
            (5, 1), (5, 2), (6, 1), (6, 2),
            // Left structure
            (3, 13), (3, 14), (4, 12), (4, 16), (5, 11), (5, 17), (6, 11), (6, 15),
            (6, 17), (6, 18), (7, 11), (7, 17), (8, 12), (8, 16), (9, 13), (9, 14),
            // Right structure
            (1, 25), (2, 23), (2, 25), (3, 21), (3, 22), (4, 21), (4, 22), (5, 21),
            (5, 22), (6, 23), (6, 25), (7, 25),
            // Second block
            (3, 35), (3, 36), (4, 35), (4, 36),
        ],
    },
];

/// Looks a pattern up by its catalog name, e.g. `"gliderGun"`.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_every_reference_pattern() {
        let names: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["glider", "blinker", "notGate", "andGate", "orGate", "xorGate", "gliderGun"]
        );
    }

    #[test]
    fn find_is_exact_match() {
        assert_eq!(find("blinker").map(|p| p.cells.len()), Some(3));
        assert_eq!(find("gliderGun").map(|p| p.cells.len()), Some(36));
        assert!(find("Blinker").is_none());
        assert!(find("").is_none());
    }
}
