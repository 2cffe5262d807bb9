//! End-to-end tests of the solve pipeline through the public API.

use kmap_solver::{
    solve, solve_with_capacity, ParseError, RenderError, Solution, SolveError, TruthTable,
};

#[test]
fn test_pure_patterns_of_every_length() {
    for num_vars in 2..=6u32 {
        let cells = 1usize << num_vars;
        assert_eq!(solve(&"0".repeat(cells)).unwrap(), "0");
        assert_eq!(solve(&"1".repeat(cells)).unwrap(), "1");
        assert_eq!(solve(&"X".repeat(cells)).unwrap(), "0");
    }
}

#[test]
fn test_two_variable_examples() {
    assert_eq!(solve("1010").unwrap(), "A");
    assert_eq!(solve("1100").unwrap(), "B");
    assert_eq!(solve("0,3").unwrap(), "~A&~B + A&B");
}

#[test]
fn test_dont_cares_collapse_to_one_variable() {
    assert_eq!(solve("1X1X").unwrap(), "A");
}

#[test]
fn test_classic_dont_care_scenario_end_to_end() {
    // minterms {1, 2, 5}, don't-cares {0, 4, 6}, three variables.
    let table = TruthTable::from_parts(0b0010_0110, 0b0101_0001, 3, 3);
    table.validate().unwrap();

    let solution = Solution::minimize(&table);
    assert_eq!(solution.covered_cells(), table.minterms());

    let expression = solution.to_sop(table.num_vars(), 1024).unwrap();
    assert!(!expression.is_empty());
    assert!(expression
        .chars()
        .all(|c| matches!(c, 'A'..='C' | '~' | '&' | ' ' | '+')));
    assert_eq!(expression, "A&~B + ~A&B");
}

#[test]
fn test_solutions_cover_minterms_exactly() {
    for input in [
        "1,2,5",
        "0,1,3,5,7",
        "10110100",
        "1X1X0X1X1X001X1X",
        "0,1,2,3,8,9,10,11,32,33,34,35,60,61,62,63",
    ] {
        let table = TruthTable::parse(input).unwrap();
        table.validate().unwrap();
        let solution = Solution::minimize(&table);
        assert_eq!(solution.covered_cells(), table.minterms(), "input {:?}", input);
        for implicant in solution.implicants() {
            assert_eq!(
                implicant.covered_minterms() & !table.minterms(),
                0,
                "don't-cares must never count as covered for {:?}",
                input
            );
        }
    }
}

#[test]
fn test_rendered_terms_match_solution_counts() {
    let table = TruthTable::parse("10110100").unwrap();
    let solution = Solution::minimize(&table);
    let expression = solution.to_sop(table.num_vars(), 1024).unwrap();

    let terms = expression.split(" + ").count();
    assert_eq!(terms, solution.term_count());

    let literals = expression
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .count();
    assert_eq!(literals as u32, solution.literal_count());
}

#[test]
fn test_malformed_inputs_fail_with_parse_errors() {
    let cases: &[(&str, fn(&ParseError) -> bool)] = &[
        ("", |e| matches!(e, ParseError::EmptyInput)),
        ("12,,3", |e| matches!(e, ParseError::InvalidMinterm { .. })),
        ("10102", |e| matches!(e, ParseError::UnrecognizedFormat)),
        ("10101", |e| {
            matches!(e, ParseError::InvalidPatternLength { length: 5 })
        }),
        ("1,99", |e| {
            matches!(e, ParseError::MintermOutOfRange { value: 99, .. })
        }),
    ];
    for (input, matches_expected) in cases {
        match solve(input) {
            Err(SolveError::Parse(e)) => {
                assert!(matches_expected(&e), "input {:?} gave {:?}", input, e)
            }
            other => panic!("input {:?} gave {:?}", input, other),
        }
    }
}

#[test]
fn test_undersized_capacity_is_retryable() {
    let input = "0,3";
    let err = solve_with_capacity(input, 1).unwrap_err();
    let needed = match err {
        SolveError::Render(RenderError::CapacityExceeded { needed, .. }) => needed,
        other => panic!("expected capacity failure, got {:?}", other),
    };
    assert!(needed > 1);

    // A retry with enough room succeeds and agrees with the default call.
    let retried = solve_with_capacity(input, 64).unwrap();
    assert_eq!(retried, solve(input).unwrap());
}

#[test]
fn test_six_variable_map_round_trip() {
    // A 64-cell pattern exercises the full-width cell mask.
    let mut pattern: String = "01".repeat(32);
    pattern.replace_range(0..4, "XX10");
    let table = TruthTable::parse(&pattern).unwrap();
    assert_eq!(table.num_vars(), 6);
    table.validate().unwrap();

    let solution = Solution::minimize(&table);
    assert_eq!(solution.covered_cells(), table.minterms());
    let expression = solution.to_sop(6, 1024).unwrap();
    assert!(!expression.is_empty());
}

#[test]
fn test_solve_is_deterministic() {
    for input in ["10110100", "0,1,3,5,7", "1X1X0X1X1X001X1X"] {
        let first = solve(input).unwrap();
        let second = solve(input).unwrap();
        assert_eq!(first, second);
    }
}
