//! Contract properties of the similarity primitives and the
//! invocation context, checked over generated vectors.

use rand::Rng;
use serde_json::Value;
use std::sync::Arc;

use e2e_tests::TestHarness;
use vectord_engine::{
    cosine, dot, magnitude, InvocationContext, Invoker, Oracle, OracleRegistry, Span,
};
use vectord_store::RecordStore;
use vectord_types::{
    CallRequest, CompressionSettings, InvocationSettings, InvokeError, Record,
};

const EPS: f64 = 1e-6;

fn random_records(n: usize, dim: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    (0..n)
        .map(|i| Record {
            id: i as u64 + 1,
            ..Record::new((0..dim).map(|_| rng.random_range(-1.0..1.0)).collect())
        })
        .collect()
}

#[test]
fn test_dot_self_is_squared_norm_for_all_records() {
    let ctx = InvocationContext::new(random_records(8, 16));

    for view in ctx.records() {
        let d = dot(&view, &view, None).unwrap();
        let m = magnitude(&view, None).unwrap();
        assert!((d - m * m).abs() < EPS, "record {}", view.id());
    }
}

#[test]
fn test_cosine_symmetric_and_bounded_for_all_pairs() {
    let ctx = InvocationContext::new(random_records(6, 8));
    let views = ctx.records();

    for a in &views {
        for b in &views {
            if a.is(b) {
                continue;
            }
            let ab = cosine(a, b, None).unwrap();
            let ba = cosine(b, a, None).unwrap();
            assert!((ab - ba).abs() < EPS);
            assert!((-1.0 - EPS..=1.0 + EPS).contains(&ab));
        }
    }
}

#[test]
fn test_excluding_removes_exactly_the_reference() {
    let ctx = InvocationContext::new(random_records(5, 4));
    let reference = ctx.find(3).unwrap();

    let others = ctx.records_excluding(&reference);
    assert_eq!(others.len(), ctx.len() - 1);
    assert!(others.iter().all(|r| r.id() != 3));
}

#[test]
fn test_find_absent_is_a_sentinel() {
    let ctx = InvocationContext::new(random_records(3, 4));
    assert!(ctx.find(1000).is_none());
}

#[test]
fn test_span_primitives_agree_with_manual_slices() {
    let a = Record {
        id: 1,
        ..Record::new(vec![0.2, 0.4, 0.6, 0.8])
    };
    let b = Record {
        id: 2,
        ..Record::new(vec![1.0, 1.0, 1.0, 1.0])
    };
    let ctx = InvocationContext::new(vec![a, b]);
    let va = ctx.find(1).unwrap();
    let vb = ctx.find(2).unwrap();

    let ranged = dot(&va, &vb, Some(Span::new(1, 3))).unwrap();
    let expected = 0.4f32 as f64 + 0.6f32 as f64;
    assert!((ranged - expected).abs() < EPS);
}

#[tokio::test]
async fn test_oracle_signalled_failure_surfaces_in_the_envelope() {
    struct Picky;

    impl Oracle for Picky {
        fn name(&self) -> &str {
            "picky"
        }

        fn invoke(
            &self,
            ctx: &InvocationContext,
            _id: u64,
            _args: &[Value],
        ) -> Result<Value, InvokeError> {
            Err(ctx.fail("reference set is not to my taste"))
        }
    }

    let registry = OracleRegistry::new();
    registry.register(Arc::new(Picky)).unwrap();
    let invoker = Invoker::new(
        Arc::new(RecordStore::in_memory()),
        Arc::new(registry),
        InvocationSettings::default(),
        CompressionSettings::default(),
    );

    let resp = invoker.run(&CallRequest::new("picky", 1)).await;
    assert!(!resp.success);
    assert!(resp.message.contains("not to my taste"));
    assert!(resp.data.is_none());
}

#[tokio::test]
async fn test_timeout_is_reported_not_hung() {
    // a tiny budget makes even the builtin finish too late only if it
    // stalls; assert the envelope path by using a budget of 1ms on a
    // large store
    let mut settings = vectord_types::Settings::default();
    settings.invocation.budget_ms = 1;
    let harness = TestHarness::with_settings(settings);

    let vectors: Vec<Vec<f32>> = (0..500).map(|i| vec![i as f32; 64]).collect();
    let ids = harness.seed(&vectors);

    let resp = harness
        .host
        .runner()
        .run(&CallRequest::new("dot_all", ids[0]))
        .await;

    // either it finished inside the budget (small machines are fast)
    // or it reported the budget; it must never hang or panic
    if !resp.success {
        assert!(resp.message.contains("budget"));
    }
}
