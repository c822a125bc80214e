//! Cross-mechanism verification for the pure-actions benchmark.

use super::{code, generate_workload, run, OpKind, Operands};
use crate::mechanism::Mechanism;

/// Apply one kind through every mechanism and check the results against the
/// sum-type reference. Integer results must match exactly.
pub fn verify_all() -> Result<(), String> {
    let (operands, script) = generate_workload(512);

    for (pair, kind) in operands.iter().zip(script.iter().copied()) {
        let expected = code::sum_type::apply(*pair, &code::sum_type::encode(kind));

        let candidates = [
            ("enums", code::enums::apply(*pair, &code::enums::encode(kind))),
            (
                "function pointers",
                code::function_pointers::apply(*pair, &code::function_pointers::encode(kind)),
            ),
            (
                "trait objects",
                code::polymorphic::apply(*pair, &code::polymorphic::encode(kind)),
            ),
            (
                "boxed closures",
                code::closures::apply(*pair, &code::closures::encode(kind)),
            ),
        ];

        for (name, actual) in candidates {
            if actual != expected {
                return Err(format!(
                    "mechanism '{name}' diverged for {kind:?} on {pair:?}: \
                     expected {expected}, got {actual}"
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_mechanisms_equivalent() {
        verify_all().expect("all mechanisms should produce identical results");
    }

    #[test]
    fn test_arithmetic_contracts() {
        let multiply = code::sum_type::encode(OpKind::Multiply);
        let divide = code::sum_type::encode(OpKind::Divide);

        assert_eq!(code::sum_type::apply(Operands { lhs: 5, rhs: 3 }, &multiply), 15);
        assert_eq!(code::sum_type::apply(Operands { lhs: 6, rhs: 3 }, &divide), 2);
    }

    #[test]
    fn test_workload_deterministic_and_in_range() {
        let (operands_a, script_a) = generate_workload(256);
        let (operands_b, script_b) = generate_workload(256);
        assert_eq!(operands_a, operands_b);
        assert_eq!(script_a, script_b);

        for pair in &operands_a {
            assert!((1..=10_000).contains(&pair.lhs));
            assert!((1..=10_000).contains(&pair.rhs));
        }
    }

    #[test]
    fn test_run_lengths() {
        for count in [0usize, 1, 100, 100_000] {
            let timed = run(Mechanism::FunctionPointers, count);
            assert_eq!(timed.results.len(), count, "count = {count}");
        }
    }

    #[test]
    fn test_mechanisms_agree_end_to_end() {
        let reference = run(Mechanism::SumTypes, 2_000).results;
        for mechanism in Mechanism::ALL {
            let results = run(mechanism, 2_000).results;
            assert_eq!(
                results,
                reference,
                "mechanism '{}' diverged from the sum-type reference",
                mechanism.name()
            );
        }
    }

    #[test]
    fn test_empty_run() {
        let timed = run(Mechanism::Closures, 0);
        assert!(timed.results.is_empty());
        let _ = timed.elapsed_nanos();
    }
}
