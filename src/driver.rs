use crate::{next_generation, Grid, Observation, Result, SpeedMode, TerminationDetector};
use tracing::{debug, info};

/// Draws a board. Reads interior cells only.
pub trait Renderer {
    /// `generation` is 0 for the initial board.
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()>;
}

/// Answer of a [`Pacer`] once the pause is over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    /// An external interrupt arrived while waiting.
    Interrupted,
}

/// Suspends the run between generations.
pub trait Pacer {
    /// Sleeps the frame time of `mode`, or blocks for an acknowledgement in
    /// [`SpeedMode::Step`].
    fn pause(&mut self, mode: SpeedMode) -> Result<Flow>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TerminationReason {
    Extinct,
    Repeating,
    Interrupted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Extinct => "extinct",
            Self::Repeating => "repeating",
            Self::Interrupted => "interrupted",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    Initializing,
    Running,
    Terminated(TerminationReason),
}

/// Result of a finished run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub reason: TerminationReason,
    /// Number of generations computed after the initial board.
    pub generations: u64,
}

/// Owns the run state: current board, history and generation counter.
pub struct Simulation {
    current: Grid,
    detector: TerminationDetector,
    speed: SpeedMode,
    generation: u64,
    state: State,
}

impl Simulation {
    /// Takes the initial board and enters the running state.
    pub fn new(initial: Grid, speed: SpeedMode) -> Self {
        let mut sim = Self {
            current: initial,
            detector: TerminationDetector::new(),
            speed,
            generation: 0,
            state: State::Initializing,
        };
        info!(
            rows = sim.current.rows(),
            cols = sim.current.cols(),
            population = sim.current.population(),
            %speed,
            "simulation started"
        );
        sim.state = State::Running;
        sim
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn detector(&self) -> &TerminationDetector {
        &self.detector
    }

    /// Renders the current board, checks it and evolves it.
    ///
    /// Returns the termination reason once extinction or repetition is seen.
    /// Does nothing after termination.
    pub fn step(&mut self, renderer: &mut impl Renderer) -> Result<Option<TerminationReason>> {
        if let State::Terminated(reason) = self.state {
            return Ok(Some(reason));
        }
        renderer.render(&self.current, self.generation)?;

        let reason = match self.detector.observe(&self.current) {
            Observation::Continue => None,
            Observation::Extinct => Some(TerminationReason::Extinct),
            Observation::Repeating => Some(TerminationReason::Repeating),
        };
        if let Some(reason) = reason {
            self.terminate(reason);
            return Ok(Some(reason));
        }

        self.current = next_generation(&self.current);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.current.population(),
            "generation computed"
        );
        Ok(None)
    }

    /// Moves to the terminal state. The first reason wins.
    pub fn interrupt(&mut self) {
        if !matches!(self.state, State::Terminated(_)) {
            self.terminate(TerminationReason::Interrupted);
        }
    }

    fn terminate(&mut self, reason: TerminationReason) {
        self.state = State::Terminated(reason);
        info!(
            %reason,
            generations = self.generation,
            distinct_states = self.detector.history().len(),
            "simulation terminated"
        );
    }

    fn outcome(&self, reason: TerminationReason) -> Outcome {
        Outcome {
            reason,
            generations: self.generation,
        }
    }

    /// Runs until extinction, repetition or interruption.
    pub fn run(
        &mut self,
        renderer: &mut impl Renderer,
        pacer: &mut impl Pacer,
    ) -> Result<Outcome> {
        loop {
            if let Some(reason) = self.step(renderer)? {
                return Ok(self.outcome(reason));
            }
            if pacer.pause(self.speed)? == Flow::Interrupted {
                self.interrupt();
                return Ok(self.outcome(TerminationReason::Interrupted));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, Grid)>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
            self.frames.push((generation, grid.clone()));
            Ok(())
        }
    }

    struct NoPause;

    impl Pacer for NoPause {
        fn pause(&mut self, _mode: SpeedMode) -> Result<Flow> {
            Ok(Flow::Continue)
        }
    }

    #[test]
    fn test_state_machine() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 2, true).unwrap();
        let mut sim = Simulation::new(grid, SpeedMode::Fast);
        assert_eq!(sim.state(), State::Running);

        let mut recorder = Recorder::default();
        assert_eq!(sim.step(&mut recorder).unwrap(), None);
        assert_eq!(sim.generation(), 1);
        assert_eq!(
            sim.step(&mut recorder).unwrap(),
            Some(TerminationReason::Extinct)
        );
        assert_eq!(sim.state(), State::Terminated(TerminationReason::Extinct));

        // terminal: no more frames, interrupt does not override
        sim.interrupt();
        assert_eq!(
            sim.step(&mut recorder).unwrap(),
            Some(TerminationReason::Extinct)
        );
        assert_eq!(recorder.frames.len(), 2);
    }

    #[test]
    fn test_run_renders_every_generation() {
        let mut grid = Grid::new(5, 5).unwrap();
        for x in 2..=4 {
            grid.set(x, 3, true).unwrap();
        }
        let mut sim = Simulation::new(grid.clone(), SpeedMode::Normal);
        let mut recorder = Recorder::default();
        let outcome = sim.run(&mut recorder, &mut NoPause).unwrap();

        assert_eq!(
            outcome,
            Outcome {
                reason: TerminationReason::Repeating,
                generations: 2
            }
        );
        let generations: Vec<u64> = recorder.frames.iter().map(|(g, _)| *g).collect();
        assert_eq!(generations, vec![0, 1, 2]);
        assert_eq!(recorder.frames[2].1, grid);
    }
}
