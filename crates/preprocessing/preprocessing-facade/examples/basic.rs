//! Basic example demonstrating function transformers and capability tags
//!
//! Run with: cargo run --example basic -p preprocessing-facade

use ndarray::array;
use preprocessing_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "preprocessing_core=debug".into()),
        )
        .init();

    println!("=== preprocessing Basic Examples ===\n");

    let x = Frame::with_columns(array![[0.0, 1.0], [2.0, 3.0]], ["count", "total"])?;

    // 1. Log transform with a matching inverse
    println!("1. log1p / expm1");
    let mut log1p = FunctionTransformer::builder()
        .func(|x, _| Ok(x.mapv(f64::ln_1p)))
        .inverse_func(|x, _| Ok(x.mapv(f64::exp_m1)))
        .validate(true)
        .feature_names_out(FeatureNamesOutMode::OneToOne)
        .build()?;
    let out = log1p.fit_transform(&x)?;
    println!("   transformed: {:?}", out.values());
    println!("   output names: {:?}", log1p.get_feature_names_out(None)?);
    println!("   warnings: {}", log1p.warnings().len());
    println!();

    // 2. Mismatched pair: fit warns and continues
    println!("2. Mismatched inverse");
    let mut broken = FunctionTransformer::builder()
        .func(|x, kw| {
            let by = kw.get("by").and_then(|v| v.as_f64()).unwrap_or(0.0);
            Ok(x.mapv(|v| v + by))
        })
        .inverse_func(|x, _| Ok(x.to_owned()))
        .kw_arg("by", 1.0)
        .build()?;
    broken.fit(&x)?;
    for warning in broken.warnings() {
        println!("   warning: {}", warning);
    }
    println!();

    // 3. Tags
    println!("3. Capability tags");
    let tags = safe_tags(&log1p);
    for key in [keys::STATELESS, keys::NO_VALIDATION, keys::ALLOW_NAN] {
        println!("   {} = {}", key, safe_tag(&log1p, key)?);
    }
    println!("   total tags: {}", tags.len());

    Ok(())
}
