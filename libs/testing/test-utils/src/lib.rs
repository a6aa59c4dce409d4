//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for domain crates:
//! - `TestDatabase`: PostgreSQL container with migrations applied (feature: "postgres")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("product", "main");
//!     let price = builder.price();
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("product", "main"), "test-product-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A positive price with two decimals, between 1.00 and 1000.99
    pub fn price(&self) -> f64 {
        let cents = self.seed % 100_000;
        1.0 + cents as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert two prices are equal to the cent
    pub fn assert_price_eq(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < 0.005,
            "{}: expected price {}, got {}",
            context,
            expected,
            actual
        );
    }
}
