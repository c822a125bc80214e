//! Cross-mechanism verification for the actions-with-data benchmark.

use super::{code, generate_workload, run, ActionKind, ActionSpec, Character};
use crate::mechanism::Mechanism;

/// Apply one spec through every mechanism and check the results against the
/// sum-type reference. Bitwise float equality is intentional: no mechanism
/// may reorder the arithmetic.
pub fn verify_all() -> Result<(), String> {
    let (characters, script) = generate_workload(512);

    for (subject, spec) in characters.iter().zip(&script) {
        let expected = code::sum_type::apply(*subject, &code::sum_type::encode(spec));

        let candidates = [
            ("enums", code::enums::apply(*subject, &code::enums::encode(spec))),
            (
                "function pointers",
                code::function_pointers::apply(*subject, &code::function_pointers::encode(spec)),
            ),
            (
                "trait objects",
                code::polymorphic::apply(*subject, &code::polymorphic::encode(spec)),
            ),
            (
                "boxed closures",
                code::closures::apply(*subject, &code::closures::encode(spec)),
            ),
        ];

        for (name, actual) in candidates {
            if actual.health.to_bits() != expected.health.to_bits()
                || actual.attack.to_bits() != expected.attack.to_bits()
            {
                return Err(format!(
                    "mechanism '{name}' diverged for {spec:?} on {subject:?}: \
                     expected {expected:?}, got {actual:?}"
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
        let subject = Character {
            health: 100.0,
            attack: 50.0,
        };

        let damage = ActionSpec {
            kind: ActionKind::Damage,
            amount: 25.0,
        };
        let heal = ActionSpec {
            kind: ActionKind::Heal,
            amount: 25.0,
        };
        let buff = ActionSpec {
            kind: ActionKind::Buff,
            amount: 25.0,
        };

        let apply = |spec| code::sum_type::apply(subject, &code::sum_type::encode(spec));

        assert_eq!(
            apply(&damage),
            Character {
                health: 75.0,
                attack: 50.0
            }
        );
        assert_eq!(
            apply(&heal),
            Character {
                health: 125.0,
                attack: 50.0
            }
        );
        assert_eq!(
            apply(&buff),
            Character {
                health: 100.0,
                attack: 75.0
            }
        );
    }

    #[test]
    fn test_workload_deterministic() {
        let (characters_a, script_a) = generate_workload(256);
        let (characters_b, script_b) = generate_workload(256);
        assert_eq!(characters_a, characters_b);
        assert_eq!(script_a, script_b);
    }

    #[test]
    fn test_workload_values_in_range() {
        let (characters, script) = generate_workload(256);
        for character in &characters {
            assert!((1.0..=10_000.0).contains(&character.health));
            assert!((1.0..=10_000.0).contains(&character.attack));
        }
        for spec in &script {
            assert!((1.0..=10_000.0).contains(&spec.amount));
        }
    }

    #[test]
    fn test_run_lengths() {
        for count in [0usize, 1, 100, 100_000] {
            let timed = run(Mechanism::SumTypes, count);
            assert_eq!(timed.results.len(), count, "count = {count}");
        }
    }

    #[test]
    fn test_runs_are_repeatable() {
        for mechanism in Mechanism::ALL {
            let first = run(mechanism, 1_000);
            let second = run(mechanism, 1_000);
            assert_eq!(
                first.results,
                second.results,
                "mechanism '{}' is not deterministic",
                mechanism.name()
            );
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
        let timed = run(Mechanism::Enums, 0);
        assert!(timed.results.is_empty());
        let _ = timed.elapsed_nanos();
    }
}
