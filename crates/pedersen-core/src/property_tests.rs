//! Property-based tests for commitment homomorphism and encodings

use crate::modp::tests::small_group;
use crate::{Group, PedersenContext, PedersenError, Ristretto255};
use num_bigint::BigUint;
use proptest::prelude::*;

fn scalar_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 48)
}

proptest! {
    #[test]
    fn test_homomorphism_ristretto(
        s1 in scalar_bytes(),
        r1 in scalar_bytes(),
        s2 in scalar_bytes(),
        r2 in scalar_bytes(),
    ) {
        let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
        let field = ctx.field();
        let (s1, r1) = (field.from_wide_bytes(&s1), field.from_wide_bytes(&r1));
        let (s2, r2) = (field.from_wide_bytes(&s2), field.from_wide_bytes(&r2));

        let lhs = ctx.combine(&ctx.commit(&s1, &r1), &ctx.commit(&s2, &r2));
        let rhs = ctx.commit(&field.add(&s1, &s2), &field.add(&r1, &r2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_homomorphism_modp(s1 in any::<u64>(), r1 in any::<u64>(), s2 in any::<u64>(), r2 in any::<u64>()) {
        let ctx = PedersenContext::new(small_group()).unwrap();
        let field = ctx.field();
        let (s1, r1) = (field.from_u64(s1), field.from_u64(r1));
        let (s2, r2) = (field.from_u64(s2), field.from_u64(r2));

        let lhs = ctx.combine(&ctx.commit(&s1, &r1), &ctx.commit(&s2, &r2));
        let rhs = ctx.commit(&field.add(&s1, &s2), &field.add(&r1, &r2));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_scaling(k in any::<u64>(), s in any::<u64>(), r in any::<u64>()) {
        let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
        let field = ctx.field();
        let (k, s, r) = (field.from_u64(k), field.from_u64(s), field.from_u64(r));

        let scaled = ctx.scale(&ctx.commit(&s, &r), &k);
        prop_assert_eq!(scaled, ctx.commit(&field.mul(&k, &s), &field.mul(&k, &r)));
    }

    #[test]
    fn test_element_encoding_roundtrip(k in scalar_bytes()) {
        let group = Ristretto255::new();
        let ctx = PedersenContext::new(group.clone()).unwrap();
        let element = group.scalar_mul(ctx.h(), &ctx.field().from_wide_bytes(&k));

        prop_assert_eq!(group.decode(&group.encode(&element)).unwrap(), element);
    }

    #[test]
    fn test_corrupted_modp_encoding_rejected(k in 1u64.., flip in 0usize..32) {
        let group = small_group();
        let ctx = PedersenContext::new(group.clone()).unwrap();
        let element = group.scalar_mul(&group.generator(), &ctx.field().from_u64(k));

        // Multiplying a residue by a non-residue leaves the subgroup
        let mut bytes = group.encode(&element);
        let outside = (BigUint::from_bytes_be(&bytes) * (group.modulus() - 1u8)) % group.modulus();
        let outside_bytes = outside.to_bytes_be();
        bytes = vec![0u8; 32 - outside_bytes.len()];
        bytes.extend_from_slice(&outside_bytes);
        prop_assert!(matches!(group.decode(&bytes), Err(PedersenError::InvalidEncoding(_))));

        // Truncation is always rejected
        let truncated = &group.encode(&element)[..flip];
        prop_assert!(matches!(group.decode(truncated), Err(PedersenError::InvalidEncoding(_))));
    }

    #[test]
    fn test_scalar_encoding_roundtrip(bytes in scalar_bytes()) {
        let ctx = PedersenContext::new(Ristretto255::new()).unwrap();
        let field = ctx.field();
        let scalar = field.from_wide_bytes(&bytes);

        prop_assert_eq!(field.from_hex(&field.to_hex(&scalar)).unwrap(), scalar);
    }
}
