// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Hyperbolic Functions
//!
//! Unary hyperbolic functions lifted over every operand kind with
//! [`map_unary`].
//!
//! `sinh` and `tanh` map zero to zero and keep sparse operands sparse.
//! `cosh` and `sech` map zero to one, and `csch` and `coth` to infinity,
//! so sparse operands come back dense.

use crate::enums::error::Result;
use crate::enums::operand::Operand;
use crate::kernels::routing::map_unary;
use crate::traits::element::Float;
use crate::traits::operator::UnaryOperator;

macro_rules! hyperbolic {
    ($(#[$doc:meta])* $name:ident, $label:literal, $free:ident, |$x:ident| $body:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl<T: Float> UnaryOperator<T> for $name {
            type Output = T;

            #[inline]
            fn name(&self) -> &'static str {
                $label
            }

            #[inline]
            fn apply(&self, value: &T) -> Result<T> {
                let $x = *value;
                Ok($body)
            }
        }

        $(#[$doc])*
        pub fn $free<T: Float>(operand: &Operand<T>) -> Result<Operand<T>> {
            map_unary(&$name, operand)
        }
    };
}

hyperbolic!(
    /// Hyperbolic sine.
    Sinh, "sinh", sinh,
    |x| x.sinh()
);
hyperbolic!(
    /// Hyperbolic cosine.
    Cosh, "cosh", cosh,
    |x| x.cosh()
);
hyperbolic!(
    /// Hyperbolic tangent.
    Tanh, "tanh", tanh,
    |x| x.tanh()
);
hyperbolic!(
    /// Hyperbolic secant, `2 / (e^x + e^-x)`.
    Sech, "sech", sech,
    |x| (T::one() + T::one()) / (x.exp() + (-x).exp())
);
hyperbolic!(
    /// Hyperbolic cosecant, `1 / sinh(x)`.
    Csch, "csch", csch,
    |x| x.sinh().recip()
);
hyperbolic!(
    /// Hyperbolic cotangent, `1 / tanh(x)`.
    Coth, "coth", coth,
    |x| x.tanh().recip()
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::sparse::SparseMatrix;
    use crate::traits::zero_test::ExactZero;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_scalar_values() {
        assert!(close(Sech.apply(&0.5f64).unwrap(), 1.0 / 0.5f64.cosh()));
        assert!(close(Csch.apply(&0.5f64).unwrap(), 1.0 / 0.5f64.sinh()));
        assert!(close(Coth.apply(&0.5f64).unwrap(), 1.0 / 0.5f64.tanh()));
        assert_eq!(Sech.apply(&0.0f32).unwrap(), 1.0);
        assert_eq!(Coth.apply(&0.0f64).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_sinh_keeps_sparse() {
        let s = SparseMatrix::from_triplets(2, 2, vec![(1, 1, 1.0)], &ExactZero).unwrap();
        let r = sinh(&Operand::from(s)).unwrap();
        let r = r.into_sparse().expect("sparse result");
        assert_eq!(r.nnz(), 1);
        assert!(close(r.get(1, 1).unwrap(), 1.0f64.sinh()));
    }

    #[test]
    fn test_sech_densifies_sparse() {
        let s = SparseMatrix::from_triplets(1, 2, vec![(0, 1, 2.0)], &ExactZero).unwrap();
        let r = sech(&Operand::from(s)).unwrap();
        let d = r.into_dense().expect("dense result");
        assert_eq!(d.as_slice()[0], 1.0);
        assert!(close(d.as_slice()[1], 1.0 / 2.0f64.cosh()));
    }

    #[test]
    fn test_sequences_and_scalars() {
        let r = tanh(&Operand::vector(vec![0.0, 1.0])).unwrap();
        assert_eq!(r, Operand::vector(vec![0.0, 1.0f64.tanh()]));
        assert_eq!(cosh(&Operand::scalar(0.0)).unwrap(), Operand::scalar(1.0));
        let r = csch(&Operand::scalar(0.0f64)).unwrap();
        assert_eq!(r.into_scalar(), Some(f64::INFINITY));
    }
}
