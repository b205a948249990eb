//! Depth-first exploration with physical backtracking.
//!
//! The agent cannot teleport, so every DFS backtrack is a real walk: each
//! [`Branch`] counts the cells it advanced and, once abandoned, the explorer
//! walks exactly that many cells back in the opposite direction.

use vyuha_map::{CellState, Direction, Position, VirtualMap};

use crate::error::ExplorationError;
use crate::oracle::{MazeOracle, MoveResult};

use super::branch::Branch;
use super::frontier::Frontier;

/// Configuration for the explorer.
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    /// Virtual map reach from the start cell
    pub half_extent: usize,
    /// Seed push order; the last direction is tried first
    pub seed_order: [Direction; 4],
    /// Keep a per-step event trace
    pub record_trace: bool,
    /// Iterations between progress log lines
    pub progress_interval: u64,
}

impl ExplorerConfig {
    /// Down, Left, Right, Up: Up is tried first.
    pub const DEFAULT_SEED_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Up,
    ];
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            half_extent: VirtualMap::DEFAULT_HALF_EXTENT,
            seed_order: Self::DEFAULT_SEED_ORDER,
            record_trace: false,
            progress_interval: 10_000,
        }
    }
}

/// State of the exploration process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationState {
    /// Branches remain on the frontier
    Exploring,
    /// The oracle reported an exit
    ExitFound,
    /// The frontier emptied: no exit is reachable
    NoSolution,
}

impl ExplorationState {
    /// True once the loop has nothing left to do.
    pub fn is_terminal(self) -> bool {
        self != ExplorationState::Exploring
    }
}

/// Final result of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplorationOutcome {
    /// An exit was reached.
    ExitFound {
        /// Exit cell in virtual map coordinates
        exit: Position,
        /// Moves from the start cell to the exit
        route: Vec<Direction>,
    },
    /// Exhaustive search found no reachable exit.
    NoSolution,
}

/// Counters collected while exploring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorationStats {
    /// Loop iterations
    pub iterations: u64,
    /// Requests sent to the oracle
    pub oracle_calls: u64,
    /// Requests answered with `Moved`
    pub moves: u64,
    /// Requests answered with `Blocked`
    pub blocked: u64,
    /// Blocks decided from the map without asking the oracle
    pub prechecked: u64,
    /// Branches abandoned with a retrace walk
    pub retraces: u64,
    /// Moves spent retracing
    pub retrace_moves: u64,
    /// Perpendicular pairs pushed
    pub forks: u64,
    /// Branches pushed (seeds included)
    pub branches_pushed: u64,
    /// Branches popped
    pub branches_popped: u64,
    /// Largest frontier depth
    pub peak_frontier: usize,
}

/// One entry of the optional exploration trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplorationEvent {
    /// A request sent to the oracle.
    OracleCall {
        /// Requested direction
        direction: Direction,
        /// Believed position before the request
        from: Position,
        /// Believed state of the target cell before the request
        target_before: CellState,
        /// Oracle answer
        result: MoveResult,
        /// Part of a backtrack walk
        retrace: bool,
    },
    /// The map already ruled the move out.
    Prechecked {
        /// Blocked direction
        direction: Direction,
        /// Believed position
        at: Position,
    },
    /// Two perpendicular branches pushed.
    Forked {
        /// Origin of both new branches
        at: Position,
        /// Push order
        directions: [Direction; 2],
    },
    /// A backtrack walk finished.
    Retraced {
        /// Origin of the abandoned branch
        origin: Position,
        /// Direction walked (inverse of the branch direction)
        direction: Direction,
        /// Branch step count
        steps: u32,
        /// Moves actually issued
        moves: u32,
        /// Believed position after the walk
        end: Position,
    },
    /// A branch left the frontier.
    Popped {
        /// Branch origin
        origin: Position,
        /// Branch direction
        direction: Direction,
    },
}

/// Restores the believed position when dropped.
///
/// Used for the wall-marking maneuver: the believed position steps into the
/// refused cell, the cell is recorded, and the step is undone on every exit
/// path.
struct ProvisionalStep<'a> {
    position: &'a mut Position,
    restore: Position,
}

impl<'a> ProvisionalStep<'a> {
    fn enter(position: &'a mut Position, direction: Direction) -> Self {
        let restore = *position;
        *position = restore.step(direction);
        Self { position, restore }
    }

    fn current(&self) -> Position {
        *self.position
    }
}

impl Drop for ProvisionalStep<'_> {
    fn drop(&mut self) {
        *self.position = self.restore;
    }
}

/// Blind maze explorer.
///
/// Owns the believed map, the believed position, and the frontier. Nothing
/// else mutates them.
pub struct Explorer {
    config: ExplorerConfig,
    /// Believed world
    map: VirtualMap,
    /// Believed agent position
    position: Position,
    /// Starting cell (map center)
    start: Position,
    /// DFS work list
    frontier: Frontier,
    state: ExplorationState,
    /// Exit cell once found
    exit: Option<Position>,
    /// Direction of the move that reached the exit
    final_move: Option<Direction>,
    /// Set when the oracle contradicted known trail
    failure: Option<ExplorationError>,
    stats: ExplorationStats,
    trace: Vec<ExplorationEvent>,
}

impl Explorer {
    /// Create an explorer standing at the center of an empty map, with the
    /// four seed branches on the frontier.
    pub fn new(config: ExplorerConfig) -> Self {
        let mut map = VirtualMap::new(config.half_extent);
        let start = map.center();
        map.set_cell_state(start, CellState::Path);

        let mut explorer = Self {
            config,
            map,
            position: start,
            start,
            frontier: Frontier::new(),
            state: ExplorationState::Exploring,
            exit: None,
            final_move: None,
            failure: None,
            stats: ExplorationStats::default(),
            trace: Vec::new(),
        };

        for direction in explorer.config.seed_order {
            explorer.push_branch(Branch::new(start, direction));
        }

        explorer
    }

    /// Run until an exit is found or the frontier empties.
    pub fn run<O: MazeOracle>(
        &mut self,
        oracle: &mut O,
    ) -> Result<ExplorationOutcome, ExplorationError> {
        tracing::info!(
            "Exploration starting at {} on a {}x{} virtual map",
            self.start,
            self.map.height(),
            self.map.width()
        );

        while !self.step(oracle)?.is_terminal() {}

        Ok(self.outcome().unwrap_or(ExplorationOutcome::NoSolution))
    }

    /// Run one iteration of the exploration loop.
    pub fn step<O: MazeOracle>(
        &mut self,
        oracle: &mut O,
    ) -> Result<ExplorationState, ExplorationError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let Some(direction) = self.frontier.peek().map(|b| b.direction) else {
            self.state = ExplorationState::NoSolution;
            tracing::warn!(
                "Frontier exhausted after {} oracle calls: no reachable exit",
                self.stats.oracle_calls
            );
            return Ok(self.state);
        };

        self.stats.iterations += 1;

        // Known trail and known walls are never tried for real
        let outcome = if self.map.check(direction, self.position, false).is_passable() {
            self.move_agent(oracle, direction, false)
        } else {
            self.stats.prechecked += 1;
            self.record(ExplorationEvent::Prechecked {
                direction,
                at: self.position,
            });
            MoveResult::Blocked
        };

        match outcome {
            MoveResult::ExitFound => {
                self.exit = Some(self.position);
                self.final_move = Some(direction);
                self.state = ExplorationState::ExitFound;
                tracing::info!(
                    "Exit found at {} after {} oracle calls",
                    self.position,
                    self.stats.oracle_calls
                );
            }
            MoveResult::Moved => {
                if let Some(branch) = self.frontier.peek_mut() {
                    branch.step_count += 1;
                }
                self.fork(direction);
            }
            MoveResult::Blocked => {
                if let Err(e) = self.dispose_blocked(oracle) {
                    tracing::warn!("Exploration aborted: {}", e);
                    self.failure = Some(e.clone());
                    return Err(e);
                }
            }
        }

        if self.stats.iterations % self.config.progress_interval.max(1) == 0 {
            self.log_progress();
        }

        Ok(self.state)
    }

    /// Handle a blocked top branch: retrace and pop, pop, or fork.
    fn dispose_blocked<O: MazeOracle>(&mut self, oracle: &mut O) -> Result<(), ExplorationError> {
        let Some(branch) = self.frontier.peek().cloned() else {
            return Ok(());
        };

        if branch.explored {
            debug_assert_eq!(self.position, branch.tip());
            self.retrace(oracle, &branch)?;
            self.pop_branch();
        } else if self.position == branch.origin {
            self.pop_branch();
        } else {
            if let Some(top) = self.frontier.peek_mut() {
                top.explored = true;
            }
            tracing::debug!(
                "Branch {} from {} ended at {} after {} steps",
                branch.direction,
                branch.origin,
                self.position,
                branch.step_count
            );
            self.fork(branch.direction);
        }

        Ok(())
    }

    /// Walk back to the branch origin, one real move per recorded step.
    fn retrace<O: MazeOracle>(
        &mut self,
        oracle: &mut O,
        branch: &Branch,
    ) -> Result<(), ExplorationError> {
        let back = branch.direction.inverse();
        let mut moves = 0u32;

        for _ in 0..branch.step_count {
            let from = self.position;
            let result = self.move_agent(oracle, back, true);
            if result != MoveResult::Moved {
                return Err(ExplorationError::Diverged {
                    position: from,
                    direction: back,
                    result,
                });
            }
            moves += 1;
        }

        self.stats.retraces += 1;
        self.stats.retrace_moves += u64::from(moves);
        tracing::debug!(
            "Retraced {} steps {} to {}",
            moves,
            back,
            self.position
        );
        self.record(ExplorationEvent::Retraced {
            origin: branch.origin,
            direction: back,
            steps: branch.step_count,
            moves,
            end: self.position,
        });

        Ok(())
    }

    /// Ask the oracle to move and mirror the answer into the map.
    fn move_agent<O: MazeOracle>(
        &mut self,
        oracle: &mut O,
        direction: Direction,
        retrace: bool,
    ) -> MoveResult {
        let from = self.position;
        let target_before = self.map.cell_state(from.step(direction));

        let result = oracle.attempt_move(direction);
        self.stats.oracle_calls += 1;

        match result {
            MoveResult::Blocked => {
                self.stats.blocked += 1;
                self.mark_wall(direction);
            }
            MoveResult::Moved | MoveResult::ExitFound => {
                if result == MoveResult::Moved {
                    self.stats.moves += 1;
                }
                self.position = from.step(direction);
                self.map.set_cell_state(self.position, CellState::Path);
            }
        }

        tracing::trace!("{} from {} -> {:?}", direction, from, result);
        self.record(ExplorationEvent::OracleCall {
            direction,
            from,
            target_before,
            result,
            retrace,
        });

        result
    }

    /// Record the refused neighbor as a wall without moving the agent.
    fn mark_wall(&mut self, direction: Direction) {
        if !self.map.check(direction, self.position, true).is_passable() {
            return;
        }
        let step = ProvisionalStep::enter(&mut self.position, direction);
        self.map.set_cell_state(step.current(), CellState::Wall);
    }

    /// Push the two perpendicular branches at the current position.
    fn fork(&mut self, direction: Direction) {
        let directions = direction.perpendicular();
        for d in directions {
            self.push_branch(Branch::new(self.position, d));
        }
        self.stats.forks += 1;
        self.record(ExplorationEvent::Forked {
            at: self.position,
            directions,
        });
    }

    fn push_branch(&mut self, branch: Branch) {
        self.frontier.push(branch);
        self.stats.branches_pushed += 1;
        self.stats.peak_frontier = self.frontier.peak_depth();
    }

    fn pop_branch(&mut self) {
        if let Some(branch) = self.frontier.pop() {
            self.stats.branches_popped += 1;
            self.record(ExplorationEvent::Popped {
                origin: branch.origin,
                direction: branch.direction,
            });
        }
    }

    fn record(&mut self, event: ExplorationEvent) {
        if self.config.record_trace {
            self.trace.push(event);
        }
    }

    fn log_progress(&self) {
        let counts = self.map.count_by_state();
        tracing::info!(
            "Exploring: iterations={}, oracle_calls={}, frontier={}, position={}, path={}, walls={}",
            self.stats.iterations,
            self.stats.oracle_calls,
            self.frontier.len(),
            self.position,
            counts.path,
            counts.wall
        );
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Moves from the start cell to the current position.
    ///
    /// Every branch on the frontier, bottom to top, contributes `step_count`
    /// moves in its direction. Once the exit is found the final move into it
    /// is appended.
    pub fn route(&self) -> Vec<Direction> {
        let mut route: Vec<Direction> = self
            .frontier
            .iter()
            .flat_map(|b| std::iter::repeat_n(b.direction, b.step_count as usize))
            .collect();
        if let Some(d) = self.final_move {
            route.push(d);
        }
        route
    }

    /// Final result, once the loop has terminated.
    pub fn outcome(&self) -> Option<ExplorationOutcome> {
        match self.state {
            ExplorationState::Exploring => None,
            ExplorationState::NoSolution => Some(ExplorationOutcome::NoSolution),
            ExplorationState::ExitFound => Some(ExplorationOutcome::ExitFound {
                exit: self.exit.unwrap_or(self.position),
                route: self.route(),
            }),
        }
    }

    /// Current exploration state.
    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// Check if exploration has finished.
    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    /// Believed map.
    pub fn map(&self) -> &VirtualMap {
        &self.map
    }

    /// Believed agent position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Starting cell in map coordinates.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Exit cell, once found.
    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    /// Pending branches.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Counters.
    pub fn stats(&self) -> &ExplorationStats {
        &self.stats
    }

    /// Recorded events (empty unless `record_trace` is set).
    pub fn trace(&self) -> &[ExplorationEvent] {
        &self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Oracle that answers from a closure over the requested direction.
    struct ScriptedOracle<F: FnMut(Direction) -> MoveResult> {
        answer: F,
        calls: Vec<Direction>,
    }

    impl<F: FnMut(Direction) -> MoveResult> MazeOracle for ScriptedOracle<F> {
        fn attempt_move(&mut self, direction: Direction) -> MoveResult {
            self.calls.push(direction);
            (self.answer)(direction)
        }
    }

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            half_extent: 8,
            record_trace: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_explorer_creation() {
        let explorer = Explorer::new(small_config());
        assert!(!explorer.is_complete());
        assert_eq!(explorer.position(), explorer.start());
        assert_eq!(explorer.map().cell_state(explorer.start()), CellState::Path);

        let seeds: Vec<Direction> = explorer.frontier().iter().map(|b| b.direction).collect();
        assert_eq!(seeds, ExplorerConfig::DEFAULT_SEED_ORDER.to_vec());
        assert_eq!(explorer.stats().branches_pushed, 4);
        assert!(explorer.route().is_empty());
    }

    #[test]
    fn test_walled_in_agent_has_no_solution() {
        let mut oracle = ScriptedOracle {
            answer: |_| MoveResult::Blocked,
            calls: Vec::new(),
        };
        let mut explorer = Explorer::new(small_config());

        let outcome = explorer.run(&mut oracle).unwrap();
        assert_eq!(outcome, ExplorationOutcome::NoSolution);

        // One real probe per seed, tried last-pushed first
        assert_eq!(
            oracle.calls,
            vec![
                Direction::Up,
                Direction::Right,
                Direction::Left,
                Direction::Down
            ]
        );
        assert_eq!(explorer.map().count_by_state().wall, 4);
        assert_eq!(explorer.stats().branches_popped, 4);
        assert!(explorer.frontier().is_empty());
    }

    #[test]
    fn test_immediate_exit() {
        let mut oracle = ScriptedOracle {
            answer: |d| {
                if d == Direction::Up {
                    MoveResult::ExitFound
                } else {
                    MoveResult::Blocked
                }
            },
            calls: Vec::new(),
        };
        let mut explorer = Explorer::new(small_config());

        let outcome = explorer.run(&mut oracle).unwrap();
        let exit = explorer.start().step(Direction::Up);
        assert_eq!(
            outcome,
            ExplorationOutcome::ExitFound {
                exit,
                route: vec![Direction::Up]
            }
        );
        assert_eq!(explorer.position(), exit);
        assert_eq!(explorer.map().cell_state(exit), CellState::Path);
        assert_eq!(oracle.calls.len(), 1);
    }

    #[test]
    fn test_moved_forks_perpendicular_and_counts_step() {
        let mut answered = false;
        let mut oracle = ScriptedOracle {
            answer: move |_| {
                if answered {
                    MoveResult::Blocked
                } else {
                    answered = true;
                    MoveResult::Moved
                }
            },
            calls: Vec::new(),
        };
        let mut explorer = Explorer::new(small_config());

        let state = explorer.step(&mut oracle).unwrap();
        assert_eq!(state, ExplorationState::Exploring);

        let up = explorer.start().step(Direction::Up);
        assert_eq!(explorer.position(), up);

        let top: Vec<(Direction, Position, u32)> = explorer
            .frontier()
            .iter()
            .rev()
            .take(3)
            .map(|b| (b.direction, b.origin, b.step_count))
            .collect();
        assert_eq!(
            top,
            vec![
                (Direction::Left, up, 0),
                (Direction::Right, up, 0),
                (Direction::Up, explorer.start(), 1),
            ]
        );
        assert_eq!(explorer.route(), vec![Direction::Up]);
    }

    #[test]
    fn test_wall_marking_restores_position() {
        let mut oracle = ScriptedOracle {
            answer: |_| MoveResult::Blocked,
            calls: Vec::new(),
        };
        let mut explorer = Explorer::new(small_config());

        explorer.step(&mut oracle).unwrap();
        assert_eq!(explorer.position(), explorer.start());
        assert_eq!(
            explorer.map().cell_state(explorer.start().step(Direction::Up)),
            CellState::Wall
        );
    }

    #[test]
    fn test_provisional_step_reverts() {
        let mut position = Position::new(4, 4);
        {
            let step = ProvisionalStep::enter(&mut position, Direction::Left);
            assert_eq!(step.current(), Position::new(4, 3));
        }
        assert_eq!(position, Position::new(4, 4));
    }

    #[test]
    fn test_step_after_completion_is_stable() {
        let mut oracle = ScriptedOracle {
            answer: |_| MoveResult::Blocked,
            calls: Vec::new(),
        };
        let mut explorer = Explorer::new(small_config());
        explorer.run(&mut oracle).unwrap();

        let calls = oracle.calls.len();
        assert_eq!(
            explorer.step(&mut oracle).unwrap(),
            ExplorationState::NoSolution
        );
        assert_eq!(oracle.calls.len(), calls);
    }

    #[test]
    fn test_map_edge_is_never_probed() {
        // Everything is open: the agent must stop at the virtual map edge
        let mut oracle = ScriptedOracle {
            answer: |_| MoveResult::Moved,
            calls: Vec::new(),
        };
        let mut explorer = Explorer::new(ExplorerConfig {
            half_extent: 2,
            ..Default::default()
        });

        let outcome = explorer.run(&mut oracle).unwrap();
        assert_eq!(outcome, ExplorationOutcome::NoSolution);
        assert_eq!(explorer.map().count_by_state().path, 25);
        assert_eq!(explorer.position(), explorer.start());
    }
}
