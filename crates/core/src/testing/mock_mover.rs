//! Mock mover for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::mover::{Mover, MoverError, RelocateRequest};

#[derive(Default)]
struct State {
    moves: Vec<RelocateRequest>,
    next_error: Option<MoverError>,
}

/// Mock implementation of the `Mover` trait.
///
/// Records relocation requests instead of touching the filesystem and can
/// inject a one-shot failure.
#[derive(Clone, Default)]
pub struct MockMover {
    state: Arc<Mutex<State>>,
}

impl MockMover {
    /// Create a new mock mover.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the next relocation to fail with the given error.
    pub fn fail_next(&self, error: MoverError) {
        self.state.lock().unwrap().next_error = Some(error);
    }

    /// Relocation requests seen so far, in order.
    pub fn recorded_moves(&self) -> Vec<RelocateRequest> {
        self.state.lock().unwrap().moves.clone()
    }
}

#[async_trait]
impl Mover for MockMover {
    fn name(&self) -> &str {
        "mock"
    }

    async fn relocate(&self, request: &RelocateRequest) -> Result<(), MoverError> {
        let mut state = self.state.lock().unwrap();

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        state.moves.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request(name: &str) -> RelocateRequest {
        RelocateRequest {
            source: PathBuf::from("/src").join(name),
            destination: PathBuf::from("/dest/cat").join(name),
            overwrite: false,
        }
    }

    #[tokio::test]
    async fn test_records_moves() {
        let mover = MockMover::new();
        mover.relocate(&request("a.torrent")).await.unwrap();
        mover.relocate(&request("b.torrent")).await.unwrap();

        let moves = mover.recorded_moves();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].source, PathBuf::from("/src/a.torrent"));
    }

    #[tokio::test]
    async fn test_injected_failure_is_one_shot() {
        let mover = MockMover::new();
        mover.fail_next(MoverError::SourceNotFound {
            path: PathBuf::from("/src/a.torrent"),
        });

        assert!(mover.relocate(&request("a.torrent")).await.is_err());
        assert!(mover.relocate(&request("a.torrent")).await.is_ok());
        assert_eq!(mover.recorded_moves().len(), 1);
    }
}
