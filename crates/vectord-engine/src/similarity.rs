//! Similarity primitives over record views.
//!
//! Each primitive accepts an optional half-open component range; the
//! default is the whole vector. Accumulation is in f64 regardless of
//! the f32 component storage.
//!
//! Policies (see DESIGN.md):
//! - cosine over a zero-norm operand returns 0.0
//! - jaccard treats components as set-indicator weights:
//!   `Σ aᵢ·bᵢ / (Σ aᵢ·bᵢ + |{i : aᵢ + bᵢ == 1}|)`, 0.0 when the
//!   denominator is zero

use crate::view::RecordView;
use vectord_types::InvokeError;

/// Half-open component range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

fn sliced<'a>(v: &RecordView<'a>, span: Option<Span>) -> Result<&'a [f32], InvokeError> {
    let components = v.components();
    match span {
        None => Ok(components),
        Some(Span { start, end }) => {
            if start > end || end > components.len() {
                return Err(InvokeError::RangeOutOfBounds {
                    start,
                    end,
                    len: components.len(),
                });
            }
            Ok(&components[start..end])
        }
    }
}

fn operands<'a>(
    a: &RecordView<'a>,
    b: &RecordView<'a>,
    span: Option<Span>,
) -> Result<(&'a [f32], &'a [f32]), InvokeError> {
    let xa = sliced(a, span)?;
    let xb = sliced(b, span)?;
    if xa.len() != xb.len() {
        return Err(InvokeError::DimensionMismatch {
            left: xa.len(),
            right: xb.len(),
        });
    }
    Ok((xa, xb))
}

/// Dot product of two vectors over the given range.
pub fn dot(a: &RecordView<'_>, b: &RecordView<'_>, span: Option<Span>) -> Result<f64, InvokeError> {
    let (xa, xb) = operands(a, b, span)?;
    Ok(xa
        .iter()
        .zip(xb)
        .map(|(&va, &vb)| va as f64 * vb as f64)
        .sum())
}

/// Euclidean norm of a vector over the given range.
pub fn magnitude(v: &RecordView<'_>, span: Option<Span>) -> Result<f64, InvokeError> {
    Ok(dot(v, v, span)?.sqrt())
}

/// Cosine similarity of two vectors over the given range, in [-1, 1].
/// Returns 0.0 when either operand has zero norm.
pub fn cosine(
    a: &RecordView<'_>,
    b: &RecordView<'_>,
    span: Option<Span>,
) -> Result<f64, InvokeError> {
    let den = magnitude(a, span)? * magnitude(b, span)?;
    if den == 0.0 {
        return Ok(0.0);
    }
    Ok(dot(a, b, span)? / den)
}

/// Jaccard similarity of two vectors over the given range, in [0, 1]
/// for indicator vectors. The mismatch test `aᵢ + bᵢ == 1` is an exact
/// indicator comparison, not a tolerance test.
pub fn jaccard(
    a: &RecordView<'_>,
    b: &RecordView<'_>,
    span: Option<Span>,
) -> Result<f64, InvokeError> {
    let (xa, xb) = operands(a, b, span)?;

    let mut m11 = 0.0_f64;
    let mut m10 = 0.0_f64;
    for (&va, &vb) in xa.iter().zip(xb) {
        m11 += va as f64 * vb as f64;
        if va + vb == 1.0 {
            m10 += 1.0;
        }
    }

    if m11 + m10 == 0.0 {
        return Ok(0.0);
    }
    Ok(m11 / (m11 + m10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectord_types::Record;

    const EPS: f64 = 1e-9;

    fn record(id: u64, data: Vec<f32>) -> Record {
        Record { id, data, ..Record::new(vec![]) }
    }

    #[test]
    fn test_dot_self_equals_squared_norm() {
        let r = record(1, vec![1.0, 2.0, 3.0]);
        let v = RecordView::new(&r);
        let d = dot(&v, &v, None).unwrap();
        let m = magnitude(&v, None).unwrap();
        assert!((d - m * m).abs() < EPS);
        assert!((d - 14.0).abs() < EPS);
    }

    #[test]
    fn test_dot_orthogonal_is_zero() {
        let a = record(1, vec![1.0, 0.0]);
        let b = record(2, vec![0.0, 1.0]);
        let d = dot(&RecordView::new(&a), &RecordView::new(&b), None).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_dot_dimension_mismatch() {
        let a = record(1, vec![1.0, 0.0]);
        let b = record(2, vec![1.0]);
        let err = dot(&RecordView::new(&a), &RecordView::new(&b), None).unwrap_err();
        assert!(matches!(
            err,
            InvokeError::DimensionMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn test_dot_over_span() {
        let a = record(1, vec![1.0, 2.0, 3.0, 4.0]);
        let b = record(2, vec![1.0, 1.0, 1.0, 1.0]);
        let va = RecordView::new(&a);
        let vb = RecordView::new(&b);
        let d = dot(&va, &vb, Some(Span::new(1, 3))).unwrap();
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn test_span_out_of_bounds() {
        let a = record(1, vec![1.0, 2.0]);
        let v = RecordView::new(&a);
        let err = dot(&v, &v, Some(Span::new(0, 3))).unwrap_err();
        assert!(matches!(
            err,
            InvokeError::RangeOutOfBounds {
                start: 0,
                end: 3,
                len: 2
            }
        ));
        assert!(dot(&v, &v, Some(Span::new(2, 1))).is_err());
    }

    #[test]
    fn test_cosine_orthogonal_and_parallel() {
        let a = record(1, vec![1.0, 0.0]);
        let b = record(2, vec![0.0, 1.0]);
        let c = record(3, vec![1.0, 1.0]);
        let d = record(4, vec![1.0, 1.0]);
        let (va, vb) = (RecordView::new(&a), RecordView::new(&b));
        let (vc, vd) = (RecordView::new(&c), RecordView::new(&d));

        assert_eq!(cosine(&va, &vb, None).unwrap(), 0.0);
        assert!((cosine(&vc, &vd, None).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_is_symmetric_and_bounded() {
        let a = record(1, vec![0.3, -0.7, 2.0]);
        let b = record(2, vec![-1.5, 0.2, 0.9]);
        let va = RecordView::new(&a);
        let vb = RecordView::new(&b);

        let ab = cosine(&va, &vb, None).unwrap();
        let ba = cosine(&vb, &va, None).unwrap();
        assert!((ab - ba).abs() < EPS);
        assert!((-1.0..=1.0).contains(&ab));
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        let a = record(1, vec![0.0, 0.0]);
        let b = record(2, vec![1.0, 1.0]);
        let got = cosine(&RecordView::new(&a), &RecordView::new(&b), None).unwrap();
        assert_eq!(got, 0.0);
    }

    #[test]
    fn test_jaccard_indicator_vectors() {
        let a = record(1, vec![1.0, 1.0, 0.0, 1.0]);
        let b = record(2, vec![1.0, 0.0, 0.0, 1.0]);
        let got = jaccard(&RecordView::new(&a), &RecordView::new(&b), None).unwrap();
        // two shared members, one mismatch
        assert!((got - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_jaccard_disjoint_or_empty_is_zero() {
        let a = record(1, vec![0.0, 0.0]);
        let b = record(2, vec![0.0, 0.0]);
        let got = jaccard(&RecordView::new(&a), &RecordView::new(&b), None).unwrap();
        assert_eq!(got, 0.0);
    }

    #[test]
    fn test_jaccard_identical_is_one() {
        let a = record(1, vec![1.0, 0.0, 1.0]);
        let b = record(2, vec![1.0, 0.0, 1.0]);
        let got = jaccard(&RecordView::new(&a), &RecordView::new(&b), None).unwrap();
        assert!((got - 1.0).abs() < EPS);
    }
}
