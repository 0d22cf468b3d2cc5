//! Special-value operator tables

use sbfp::{add, multiply, Class, Sbfp};

/// Operands covering every class, both zeros and both signs
pub const REPRESENTATIVES: [Sbfp; 7] = [
    Sbfp::POS_INFINITY,
    Sbfp::NEG_INFINITY,
    Sbfp::NAN,
    Sbfp::ZERO,
    Sbfp::from_bits(0x8000),
    Sbfp::ONE,
    Sbfp::from_bits(0xC100), // -2.5
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Multiply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableMismatch {
    pub op: Op,
    pub lhs: Sbfp,
    pub rhs: Sbfp,
    pub expected: Sbfp,
    pub got: Sbfp,
}

/// Expected sum when at least one operand is special, `None` otherwise
pub fn expected_add(lhs: Sbfp, rhs: Sbfp) -> Option<Sbfp> {
    let classes = (lhs.class(), rhs.class());
    if classes == (Class::Finite, Class::Finite) {
        return None;
    }
    if lhs.is_nan() || rhs.is_nan() {
        return Some(Sbfp::NAN);
    }
    if lhs.is_infinite() && rhs.is_infinite() && lhs != rhs {
        return Some(Sbfp::NAN);
    }
    Some(if lhs.is_infinite() { lhs } else { rhs })
}

/// Expected product when at least one operand is special, `None` otherwise
pub fn expected_multiply(lhs: Sbfp, rhs: Sbfp) -> Option<Sbfp> {
    if lhs.is_finite() && rhs.is_finite() {
        return None;
    }
    if lhs.is_nan() || rhs.is_nan() || lhs.is_zero() || rhs.is_zero() {
        return Some(Sbfp::NAN);
    }
    Some(Sbfp::infinity(lhs.is_sign_negative() != rhs.is_sign_negative()))
}

/// Check every special entry of both operator tables over [`REPRESENTATIVES`]
pub fn check_special_tables() -> Vec<TableMismatch> {
    let mut mismatches = Vec::new();

    for &lhs in &REPRESENTATIVES {
        for &rhs in &REPRESENTATIVES {
            let entries = [
                (Op::Add, expected_add(lhs, rhs), add(lhs, rhs)),
                (Op::Multiply, expected_multiply(lhs, rhs), multiply(lhs, rhs)),
            ];

            for (op, expected, got) in entries {
                if let Some(expected) = expected {
                    if expected != got {
                        mismatches.push(TableMismatch { op, lhs, rhs, expected, got });
                    }
                }
            }
        }
    }

    tracing::debug!(mismatches = mismatches.len(), "operator tables checked");
    mismatches
}
