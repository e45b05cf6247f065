//! Builtin oracles.

use serde_json::{Map, Value};

use crate::context::InvocationContext;
use crate::oracle::Oracle;
use vectord_types::InvokeError;

/// Sum of dot products of the reference record against every other
/// record in the collection.
pub struct DotAll;

impl Oracle for DotAll {
    fn name(&self) -> &str {
        "dot_all"
    }

    fn description(&self) -> &str {
        "sum of dot products of the reference vector with every other vector"
    }

    fn invoke(
        &self,
        ctx: &InvocationContext,
        id: u64,
        _args: &[Value],
    ) -> Result<Value, InvokeError> {
        let reference = ctx.find(id).ok_or(InvokeError::RecordNotFound(id))?;

        let mut total = 0.0;
        for other in ctx.records_excluding(&reference) {
            total += ctx.dot(&reference, &other, None)?;
        }
        Ok(Value::from(total))
    }
}

/// Records whose cosine similarity to the reference is at least the
/// caller-supplied threshold, as a map of `id -> similarity`.
pub struct FindSimilar;

impl Oracle for FindSimilar {
    fn name(&self) -> &str {
        "find_similar"
    }

    fn description(&self) -> &str {
        "other vectors with cosine similarity to the reference >= threshold"
    }

    fn invoke(
        &self,
        ctx: &InvocationContext,
        id: u64,
        args: &[Value],
    ) -> Result<Value, InvokeError> {
        let threshold = args
            .first()
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                InvokeError::InvalidArguments(
                    "find_similar expects a numeric threshold argument".to_string(),
                )
            })?;

        let reference = ctx.find(id).ok_or(InvokeError::RecordNotFound(id))?;

        let mut results = Map::new();
        for other in ctx.records_excluding(&reference) {
            let similarity = ctx.cosine(&reference, &other, None)?;
            if similarity >= threshold {
                results.insert(other.id().to_string(), Value::from(similarity));
            }
        }
        Ok(Value::Object(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectord_types::Record;

    fn ctx() -> InvocationContext {
        InvocationContext::new(vec![
            Record {
                id: 1,
                ..Record::new(vec![1.0, 0.0])
            },
            Record {
                id: 2,
                ..Record::new(vec![0.0, 1.0])
            },
            Record {
                id: 3,
                ..Record::new(vec![1.0, 1.0])
            },
        ])
    }

    #[test]
    fn test_dot_all_sums_other_records() {
        let ctx = ctx();
        // dot(1,2) = 0, dot(1,3) = 1
        let got = DotAll.invoke(&ctx, 1, &[]).unwrap();
        assert_eq!(got.as_f64().unwrap(), 1.0);
    }

    #[test]
    fn test_dot_all_missing_reference_names_the_id() {
        let ctx = ctx();
        let err = DotAll.invoke(&ctx, 42, &[]).unwrap_err();
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_find_similar_applies_threshold() {
        let ctx = ctx();
        let got = FindSimilar
            .invoke(&ctx, 1, &[serde_json::json!(0.5)])
            .unwrap();
        let map = got.as_object().unwrap();

        // cosine(1,2) = 0, cosine(1,3) ~= 0.707
        assert_eq!(map.len(), 1);
        assert!(map.get("3").unwrap().as_f64().unwrap() > 0.7);
    }

    #[test]
    fn test_find_similar_requires_threshold() {
        let ctx = ctx();
        let err = FindSimilar.invoke(&ctx, 1, &[]).unwrap_err();
        assert!(matches!(err, InvokeError::InvalidArguments(_)));

        let err = FindSimilar
            .invoke(&ctx, 1, &[serde_json::json!("high")])
            .unwrap_err();
        assert!(matches!(err, InvokeError::InvalidArguments(_)));
    }

    #[test]
    fn test_find_similar_excludes_reference_even_at_full_similarity() {
        let ctx = InvocationContext::new(vec![
            Record {
                id: 1,
                ..Record::new(vec![1.0, 1.0])
            },
            Record {
                id: 2,
                ..Record::new(vec![1.0, 1.0])
            },
        ]);
        let got = FindSimilar
            .invoke(&ctx, 1, &[serde_json::json!(0.99)])
            .unwrap();
        let map = got.as_object().unwrap();
        assert!(!map.contains_key("1"));
        assert!((map.get("2").unwrap().as_f64().unwrap() - 1.0).abs() < 1e-9);
    }
}
