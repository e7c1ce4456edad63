//! Shared fixtures for the integration tests.

pub mod venue {
    use serde::{Deserialize, Serialize};
    use serde_json::Value;
    use tumbler_core::{Combination, Layout, Odometer, OdometerError, StepError};

    /// A seating plan loaded from configuration, used for integration tests.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Venue {
        pub name: String,
        pub dials: Layout<Value>,
        #[serde(default)]
        pub start: Option<Combination<Value>>,
    }

    /// Errors that can occur when preparing a venue's odometer.
    #[derive(Debug, thiserror::Error)]
    pub enum VenueError {
        #[error(transparent)]
        Odometer(#[from] OdometerError),
        #[error(transparent)]
        Start(#[from] StepError<Value>),
    }

    impl Venue {
        /// Builds an odometer over the venue's dials, positioned on `start`
        /// when one is configured.
        pub fn odometer(&self) -> Result<Odometer<Value>, VenueError> {
            let mut odometer = Odometer::new(self.dials.clone())?;
            if let Some(start) = &self.start {
                odometer.seek(start)?;
            }
            Ok(odometer)
        }
    }

    pub const ARENA_JSON: &str = r#"{
        "name": "arena",
        "dials": {
            "section": [100, 101, 102],
            "row": ["A", "B", "C"],
            "seat": [1, 2, 3]
        }
    }"#;

    pub const ARENA_YAML: &str = "
name: arena
dials:
  section: [100, 101, 102]
  row: [A, B, C]
  seat: [1, 2, 3]
start:
  section: 102
  row: C
";

    /// Returns the three-dial seating layout.
    pub fn seating() -> Layout<Value> {
        serde_json::from_str::<Venue>(ARENA_JSON)
            .expect("arena fixture is valid")
            .dials
    }

    /// Builds a combination from `(name, value)` pairs.
    pub fn seat<const N: usize>(entries: [(&str, Value); N]) -> Combination<Value> {
        entries.into_iter().collect()
    }
}
