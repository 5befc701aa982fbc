#![no_main]

use libfuzzer_sys::fuzz_target;

use smartcalc_core::{evaluate, EvalError, Operation};

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    // First byte picks the operation, next 16 bytes are the operands
    let op = Operation::ALL[usize::from(data[0]) % Operation::ALL.len()];
    let a = f64::from_le_bytes(data[1..9].try_into().unwrap());
    let b = f64::from_le_bytes(data[9..17].try_into().unwrap());

    match evaluate(op, a, b) {
        Ok((_, symbol)) => assert_eq!(symbol, op.symbol()),
        Err(EvalError::DivisionByZero) => {
            assert!(matches!(op, Operation::Divide | Operation::Modulo));
            assert_eq!(b, 0.0);
        }
        Err(EvalError::NonPositiveValue) => {
            assert_eq!(op, Operation::Logarithm);
            assert!(a <= 0.0);
        }
        Err(EvalError::InvalidBase) => {
            assert_eq!(op, Operation::Logarithm);
            assert!(b <= 0.0 || b == 1.0);
        }
    }
});
