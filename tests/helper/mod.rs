pub mod source;

pub use source::{FakeReleaseSource, SharedOutput, create_test_lookup};
