//! Property-based tests for prover/verifier agreement

use crate::{prove_script, verify_script, FieldExpressionEvaluator, NamedInputs};
use pedersen_core::{PedersenContext, Ristretto255};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statement_script::Script;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_honest_sum_claims_verify(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        wa in -50i64..50,
        wb in -50i64..50,
        seed in any::<u64>(),
    ) {
        let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
        let total = wa * a + wb * b;
        let text = format!("input,a; input,b; sum,c,{wa},a,{wb},b; equal,c,{total};");
        let script = Script::parse(&text).unwrap();
        let inputs: NamedInputs = [("a", a), ("b", b)].into_iter().collect();

        let transcript = prove_script(&ctx, &script, &inputs, &FieldExpressionEvaluator, StdRng::seed_from_u64(seed)).unwrap();
        let report = verify_script(&ctx, &script, &transcript).unwrap();
        prop_assert!(report.all_passed());
    }

    #[test]
    fn test_off_by_one_claims_fail(a in any::<i32>(), seed in any::<u64>()) {
        let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
        let claimed = i64::from(a) + 1;
        let text = format!("input,a; equal,a,{claimed};");
        let script = Script::parse(&text).unwrap();
        let inputs: NamedInputs = [("a", i64::from(a))].into_iter().collect();

        let transcript = prove_script(&ctx, &script, &inputs, &FieldExpressionEvaluator, StdRng::seed_from_u64(seed)).unwrap();
        let report = verify_script(&ctx, &script, &transcript).unwrap();
        prop_assert_eq!(report.failed_names(), vec!["a"]);
    }

    #[test]
    fn test_squares_verify(a in any::<u32>(), seed in any::<u64>()) {
        let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
        let squared = u64::from(a) * u64::from(a);
        let text = format!("input,a; square,s,a; equal,s,{squared};");
        let script = Script::parse(&text).unwrap();
        let inputs: NamedInputs = [("a", i64::from(a))].into_iter().collect();

        let transcript = prove_script(&ctx, &script, &inputs, &FieldExpressionEvaluator, StdRng::seed_from_u64(seed)).unwrap();
        let report = verify_script(&ctx, &script, &transcript).unwrap();
        prop_assert!(report.all_passed());
    }
}
