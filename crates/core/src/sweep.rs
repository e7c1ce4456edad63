mod config;
mod summary;

pub use config::{Config, ConfigError};
pub use summary::{Status, Summary};

use tracing::debug;

use crate::{Combination, Observer, Odometer};

/// Control actions supported by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep after the current combination.
    Stop,
}

/// Event emitted for each combination visited by a sweep.
#[derive(Debug)]
pub struct Event<'a, V> {
    /// Zero-based count of combinations visited before this one.
    pub index: usize,
    /// The combination being visited.
    pub combination: &'a Combination<V>,
}

/// Runs `odometer` forward from its current combination, reporting each
/// combination to `observer`.
///
/// The sweep ends when the odometer is exhausted, when the observer returns
/// [`Action::Stop`], or when the configured limit is reached.
/// The odometer is left positioned after the last visited combination, so a
/// later sweep resumes where this one stopped.
pub fn sweep<V, Obs>(odometer: &mut Odometer<V>, config: &Config, mut observer: Obs) -> Summary
where
    V: Clone,
    Obs: for<'a> Observer<Event<'a, V>, Action>,
{
    let mut visited = 0;

    let status = loop {
        if config.limit().is_some_and(|limit| visited >= limit) {
            break Status::LimitReached;
        }

        let Some(combination) = odometer.try_next() else {
            break Status::Exhausted;
        };

        let event = Event {
            index: visited,
            combination: &combination,
        };
        visited += 1;

        if let Some(Action::Stop) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    debug!(visited, ?status, "sweep finished");
    Summary { status, visited }
}

/// Runs a sweep without observation.
pub fn sweep_unobserved<V: Clone>(odometer: &mut Odometer<V>, config: &Config) -> Summary {
    sweep(odometer, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Layout;

    fn grid() -> Odometer<u8> {
        let layout: Layout<u8> = [("x", vec![0, 1, 2]), ("y", vec![0, 1])].into_iter().collect();
        Odometer::new(layout).unwrap()
    }

    #[test]
    fn unobserved_sweep_visits_everything() {
        let mut odometer = grid();

        let summary = sweep_unobserved(&mut odometer, &Config::default());

        assert_eq!(
            summary,
            Summary {
                status: Status::Exhausted,
                visited: 6
            }
        );
        assert!(odometer.is_exhausted());
    }

    #[test]
    fn observer_sees_each_combination_in_order() {
        let mut odometer = grid();
        let mut seen = Vec::new();

        let summary = sweep(&mut odometer, &Config::default(), |event: &Event<'_, u8>| {
            seen.push((event.index, event.combination.clone()));
            None
        });

        assert_eq!(summary.visited, 6);
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[5].0, 5);
        assert_eq!(seen[2].1.get("x"), Some(&1));
        assert_eq!(seen[2].1.get("y"), Some(&0));
    }

    #[test]
    fn observer_can_stop_early_and_sweep_resumes() {
        let mut odometer = grid();

        let summary = sweep(&mut odometer, &Config::default(), |event: &Event<'_, u8>| {
            (event.combination.get("x") == Some(&1)).then_some(Action::Stop)
        });

        assert_eq!(
            summary,
            Summary {
                status: Status::StoppedByObserver,
                visited: 3
            }
        );

        let rest = sweep_unobserved(&mut odometer, &Config::default());
        assert_eq!(rest.visited, 3);
    }

    #[test]
    fn limit_caps_visited_combinations() {
        let mut odometer = grid();
        let config = Config::new(Some(4)).unwrap();

        let summary = sweep_unobserved(&mut odometer, &config);

        assert_eq!(
            summary,
            Summary {
                status: Status::LimitReached,
                visited: 4
            }
        );
        assert_eq!(odometer.remaining(), Some(2));
    }

    #[test]
    fn sweep_of_exhausted_odometer_visits_nothing() {
        let mut odometer = grid();
        odometer.by_ref().for_each(drop);

        let summary = sweep_unobserved(&mut odometer, &Config::default());

        assert_eq!(summary.status, Status::Exhausted);
        assert_eq!(summary.visited, 0);
    }
}
