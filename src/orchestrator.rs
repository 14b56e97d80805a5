//! The cleanup run loop.
//!
//! Processes selected targets strictly sequentially, in selection order,
//! dispatching to the deletion strategy matching each target's kind. One
//! outcome per target, same order as the input; a per-target failure never
//! stops the run. Cancellation is checked at per-target granularity only —
//! there is no meaningful way to cancel a deletion halfway through.

use crate::executor::{self, CleanupOutcome};
use crate::registry::{CleanupTarget, TargetKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Advisory progress notifications for an external collaborator.
///
/// Observers must not affect outcome correctness; the default no-op
/// implementation is always valid.
pub trait ProgressObserver {
    /// Called before a target's cleanup begins.
    fn target_started(&mut self, _name: &str, _index: usize, _total: usize) {}

    /// Called after a target's outcome is produced.
    fn target_finished(&mut self, _outcome: &CleanupOutcome) {}
}

/// Observer that ignores all notifications.
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Shared flag for cancelling a run between targets.
///
/// Clones share the same flag; whichever collaborator owns a clone can
/// request cancellation and the run stops before the next target begins.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Aggregated result of one cleanup run.
#[derive(Debug)]
pub struct RunOutcome {
    /// One outcome per processed target, in input order. Shorter than the
    /// input only when the run was cancelled.
    pub outcomes: Vec<CleanupOutcome>,
    /// Whether the run stopped early on the cancellation token.
    pub cancelled: bool,
}

impl RunOutcome {
    /// Count of targets that reported success.
    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    /// Count of targets that reported failure.
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }
}

/// Run cleanup over `selected`, in order, collecting one outcome per target.
pub fn run(
    selected: &[&CleanupTarget],
    strict_commands: bool,
    observer: &mut dyn ProgressObserver,
    cancel: &CancelToken,
) -> RunOutcome {
    let total = selected.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, target) in selected.iter().enumerate() {
        if cancel.is_cancelled() {
            return RunOutcome {
                outcomes,
                cancelled: true,
            };
        }

        observer.target_started(&target.name, index, total);

        let outcome = match &target.kind {
            TargetKind::Directory { path } => executor::clear_directory(&target.name, path),
            TargetKind::Command { command_line } => {
                executor::run_command(&target.name, command_line, strict_commands)
            }
        };

        observer.target_finished(&outcome);
        outcomes.push(outcome);
    }

    RunOutcome {
        outcomes,
        cancelled: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SafetyTier;

    fn dir_target(name: &str, path: &str) -> CleanupTarget {
        CleanupTarget {
            name: name.to_string(),
            kind: TargetKind::Directory {
                path: path.to_string(),
            },
            description: String::new(),
            typical_size: String::new(),
            safety: SafetyTier::Safe,
            default_selected: true,
        }
    }

    fn cmd_target(name: &str, command_line: &str) -> CleanupTarget {
        CleanupTarget {
            name: name.to_string(),
            kind: TargetKind::Command {
                command_line: command_line.to_string(),
            },
            description: String::new(),
            typical_size: String::new(),
            safety: SafetyTier::Safe,
            default_selected: true,
        }
    }

    /// Records notifications; optionally cancels after a given outcome.
    #[derive(Default)]
    struct Recorder {
        started: Vec<(String, usize, usize)>,
        finished: Vec<String>,
        cancel_after: Option<(usize, CancelToken)>,
    }

    impl ProgressObserver for Recorder {
        fn target_started(&mut self, name: &str, index: usize, total: usize) {
            self.started.push((name.to_string(), index, total));
        }

        fn target_finished(&mut self, outcome: &CleanupOutcome) {
            self.finished.push(outcome.target_name.clone());
            if let Some((after, token)) = &self.cancel_after {
                if self.finished.len() == *after + 1 {
                    token.cancel();
                }
            }
        }
    }

    #[test]
    fn empty_selection_yields_empty_run() {
        let result = run(&[], false, &mut NoProgress, &CancelToken::new());
        assert!(result.outcomes.is_empty());
        assert!(!result.cancelled);
    }

    #[test]
    fn outcomes_match_input_length_and_order() {
        let temp = tempfile::tempdir().unwrap();
        let a = dir_target("A", temp.path().join("a").to_str().unwrap());
        let b = cmd_target("B", "true");
        let c = dir_target("C", temp.path().join("c").to_str().unwrap());
        let selected = vec![&c, &a, &b];

        let result = run(&selected, false, &mut NoProgress, &CancelToken::new());

        assert_eq!(result.outcomes.len(), 3);
        let names: Vec<_> = result.outcomes.iter().map(|o| o.target_name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert!(!result.cancelled);
    }

    #[test]
    fn one_failure_does_not_affect_other_targets() {
        let temp = tempfile::tempdir().unwrap();
        let good_a = temp.path().join("good-a");
        let good_b = temp.path().join("good-b");
        std::fs::create_dir(&good_a).unwrap();
        std::fs::create_dir(&good_b).unwrap();
        std::fs::write(good_a.join("junk"), "junk").unwrap();
        std::fs::write(good_b.join("junk"), "junk").unwrap();

        // A file in directory position fails its own cleanup.
        let broken = temp.path().join("broken");
        std::fs::write(&broken, "not a dir").unwrap();

        let a = dir_target("A", good_a.to_str().unwrap());
        let bad = dir_target("Bad", broken.to_str().unwrap());
        let b = dir_target("B", good_b.to_str().unwrap());
        let selected = vec![&a, &bad, &b];

        let result = run(&selected, false, &mut NoProgress, &CancelToken::new());

        assert_eq!(result.outcomes.len(), 3);
        assert!(result.outcomes[0].succeeded);
        assert!(!result.outcomes[1].succeeded);
        assert!(result.outcomes[2].succeeded);
        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.succeeded_count(), 2);
    }

    #[test]
    fn observer_sees_every_target_in_order() {
        let a = cmd_target("First", "true");
        let b = cmd_target("Second", "true");
        let selected = vec![&a, &b];

        let mut recorder = Recorder::default();
        run(&selected, false, &mut recorder, &CancelToken::new());

        assert_eq!(
            recorder.started,
            vec![
                ("First".to_string(), 0, 2),
                ("Second".to_string(), 1, 2),
            ]
        );
        assert_eq!(recorder.finished, vec!["First", "Second"]);
    }

    #[test]
    fn cancellation_stops_before_the_next_target() {
        let a = cmd_target("A", "true");
        let b = cmd_target("B", "true");
        let c = cmd_target("C", "true");
        let selected = vec![&a, &b, &c];

        let token = CancelToken::new();
        let mut recorder = Recorder {
            cancel_after: Some((0, token.clone())),
            ..Default::default()
        };

        let result = run(&selected, false, &mut recorder, &token);

        assert!(result.cancelled);
        assert_eq!(result.outcomes.len(), 1);
        assert_eq!(result.outcomes[0].target_name, "A");
    }

    #[test]
    fn pre_cancelled_token_yields_no_outcomes() {
        let a = cmd_target("A", "true");
        let selected = vec![&a];

        let token = CancelToken::new();
        token.cancel();

        let result = run(&selected, false, &mut NoProgress, &token);
        assert!(result.cancelled);
        assert!(result.outcomes.is_empty());
    }

    #[test]
    fn strict_flag_reaches_command_targets() {
        let a = cmd_target("A", "false");
        let selected = vec![&a];

        let lenient = run(&selected, false, &mut NoProgress, &CancelToken::new());
        assert!(lenient.outcomes[0].succeeded);

        let strict = run(&selected, true, &mut NoProgress, &CancelToken::new());
        assert!(!strict.outcomes[0].succeeded);
    }
}
