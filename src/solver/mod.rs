mod backtracking;
mod frontier;
#[cfg(feature = "graph")]
pub mod graph;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashMap;
use log::{debug, info};

use crate::config::Method;
use crate::state::{BoatSide, State};
use crate::Solve;

use self::backtracking::backtrack_prevs;
use self::frontier::{Frontier, PriorityQueue, Queue, SearchNode, Stack};

pub use self::stats::Stats;

/// People carried by the boat in one trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub missionaries: i8,
    pub cannibals: i8,
}

impl Crossing {
    const fn new(missionaries: i8, cannibals: i8) -> Self {
        Crossing {
            missionaries,
            cannibals,
        }
    }

    /// Moves the boat with its passengers to the other bank.
    /// The result is not checked for validity.
    pub fn apply(self, state: &State) -> State {
        match state.boat {
            BoatSide::Left => State::new(
                state.left_missionaries - self.missionaries,
                state.left_cannibals - self.cannibals,
                BoatSide::Right,
            ),
            BoatSide::Right => State::new(
                state.left_missionaries + self.missionaries,
                state.left_cannibals + self.cannibals,
                BoatSide::Left,
            ),
        }
    }

    /// The crossing that leads from `from` to `to` if there is one
    pub fn between(from: &State, to: &State) -> Option<Crossing> {
        CROSSINGS
            .iter()
            .cloned()
            .find(|crossing| crossing.apply(from) == *to)
    }
}

impl Display for Crossing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}M {}C", self.missionaries, self.cannibals)
    }
}

/// Every boat load with 1 to `BOAT_CAPACITY` people, missionaries major.
/// The order decides ties so it must not change.
pub const CROSSINGS: [Crossing; 5] = [
    Crossing::new(0, 1),
    Crossing::new(0, 2),
    Crossing::new(1, 0),
    Crossing::new(1, 1),
    Crossing::new(2, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    InvalidInitialState(State),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvalidInitialState(state) => write!(
                f,
                "Invalid initial state - counts out of range or missionaries outnumbered: {}",
                state
            ),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// `None` if the search exhausted all reachable states
    pub path_states: Option<Vec<State>>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(path_states: Option<Vec<State>>, stats: Stats, method: Method) -> Self {
        Self {
            path_states,
            stats,
            method,
        }
    }

    pub fn crossing_cnt(&self) -> Option<usize> {
        self.path_states.as_ref().map(|states| states.len() - 1)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_states {
            None => writeln!(f, "No solution")?,
            Some(ref states) => writeln!(f, "{}: {}", self.method, states.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for State {
    fn solve(&self, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, method, print_status)
    }
}

pub fn solve(initial: &State, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
    if !initial.is_valid() {
        return Err(SolverErr::InvalidInitialState(*initial));
    }

    debug!("Solving {:?} using {}", initial, method);
    let solver_ok = match method {
        Method::DepthFirst => search(*initial, method, print_status, Stack::default(), |_| 0),
        Method::BreadthFirst => search(*initial, method, print_status, Queue::default(), |_| 0),
        Method::BestFirst => search(
            *initial,
            method,
            print_status,
            PriorityQueue::default(),
            heuristic,
        ),
    };
    info!(
        "{} search finished after visiting {} states",
        method,
        solver_ok.stats.total_unique_visited()
    );
    Ok(solver_ok)
}

fn search<F, Heuristic>(
    initial: State,
    method: Method,
    print_status: bool,
    mut to_visit: F,
    heuristic: Heuristic,
) -> SolverOk
where
    F: Frontier,
    Heuristic: Fn(&State) -> u16,
{
    debug!("Search called");

    let mut stats = Stats::new();
    // doubles as the closed set
    let mut prevs = FnvHashMap::default();

    let start = SearchNode::new(initial, None, 0, heuristic(&initial));
    stats.add_created(&start);
    to_visit.push(start);

    while let Some(cur_node) = to_visit.pop() {
        if prevs.contains_key(&cur_node.state) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        // insert here and not as soon as we discover it
        // otherwise later pushes would overwrite the path of the first expansion
        // initial state has no prev - it points to itself
        prevs.insert(cur_node.state, cur_node.prev.unwrap_or(cur_node.state));

        if cur_node.state.is_goal() {
            debug!("Solved, backtracking path");
            return SolverOk::new(
                Some(backtrack_prevs(&prevs, cur_node.state)),
                stats,
                method,
            );
        }

        for neighbor_state in expand(&cur_node.state) {
            if prevs.contains_key(&neighbor_state) {
                continue;
            }
            let next_node = SearchNode::new(
                neighbor_state,
                Some(cur_node.state),
                cur_node.dist + 1,
                heuristic(&neighbor_state),
            );
            stats.add_created(&next_node);
            to_visit.push(next_node);
        }
    }

    debug!("Nothing left to visit");
    SolverOk::new(None, stats, method)
}

/// All valid states one crossing away, in `CROSSINGS` order
pub fn expand(state: &State) -> Vec<State> {
    let mut new_states = Vec::new();
    for crossing in &CROSSINGS {
        let new_state = crossing.apply(state);
        if new_state.is_valid() {
            new_states.push(new_state);
        }
    }
    new_states
}

/// People still on the left bank - less is better
pub fn heuristic(state: &State) -> u16 {
    (state.left_missionaries + state.left_cannibals) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::state::BoatSide::*;
    use crate::state::BOAT_CAPACITY;

    fn s(m: i8, c: i8, boat: BoatSide) -> State {
        State::new(m, c, boat)
    }

    fn classic_solution(method: Method) -> SolverOk {
        State::initial().solve(method, false).unwrap()
    }

    #[test]
    fn crossings_order() {
        let mut expected = Vec::new();
        for m in 0..=2 {
            for c in 0..=2 {
                if m + c >= 1 && m + c <= BOAT_CAPACITY {
                    expected.push(Crossing::new(m, c));
                }
            }
        }
        assert_eq!(CROSSINGS.to_vec(), expected);
    }

    #[test]
    fn crossing_apply() {
        let one_each = Crossing::new(1, 1);
        assert_eq!(one_each.apply(&s(3, 3, Left)), s(2, 2, Right));
        assert_eq!(one_each.apply(&s(2, 2, Right)), s(3, 3, Left));
        assert_eq!(Crossing::new(0, 2).apply(&s(0, 1, Left)), s(0, -1, Right));
        assert_eq!(
            Crossing::between(&s(3, 3, Left), &s(3, 1, Right)),
            Some(Crossing::new(0, 2))
        );
        assert_eq!(Crossing::between(&s(3, 3, Left), &s(3, 3, Right)), None);
        assert_eq!(Crossing::new(1, 1).to_string(), "1M 1C");
    }

    #[test]
    fn expand_initial() {
        assert_eq!(
            expand(&s(3, 3, Left)),
            vec![s(3, 2, Right), s(3, 1, Right), s(2, 2, Right)]
        );
    }

    #[test]
    fn expand_right_side() {
        assert_eq!(
            expand(&s(0, 0, Right)),
            vec![s(0, 1, Left), s(0, 2, Left), s(1, 1, Left)]
        );
        assert_eq!(expand(&s(1, 1, Left)), vec![s(0, 1, Right), s(0, 0, Right)]);
    }

    #[test]
    fn expand_dead_end() {
        // nobody on the right bank to row back
        assert!(expand(&s(3, 3, Right)).is_empty());
        assert!(expand(&s(0, 0, Left)).is_empty());
    }

    #[test]
    fn expand_only_valid() {
        for m in 0..=3 {
            for c in 0..=3 {
                for &boat in &[Left, Right] {
                    let state = s(m, c, boat);
                    if !state.is_valid() {
                        continue;
                    }
                    for new_state in expand(&state) {
                        assert!(new_state.is_valid(), "{:?} -> {:?}", state, new_state);
                        assert_eq!(new_state.boat, boat.other());
                    }
                }
            }
        }
    }

    #[test]
    fn heuristic_counts_left_bank() {
        assert_eq!(heuristic(&s(3, 3, Left)), 6);
        assert_eq!(heuristic(&s(2, 1, Right)), 3);
        assert_eq!(heuristic(&s(0, 0, Right)), 0);
    }

    #[test]
    fn breadth_first() {
        let solution = classic_solution(Method::BreadthFirst);
        assert_eq!(
            solution.path_states.unwrap(),
            vec![
                s(3, 3, Left),
                s(3, 1, Right),
                s(3, 2, Left),
                s(3, 0, Right),
                s(3, 1, Left),
                s(1, 1, Right),
                s(2, 2, Left),
                s(0, 2, Right),
                s(0, 3, Left),
                s(0, 1, Right),
                s(0, 2, Left),
                s(0, 0, Right),
            ]
        );
        assert_eq!(solution.stats.total_created(), 17);
        assert_eq!(solution.stats.total_unique_visited(), 15);
        assert_eq!(solution.stats.total_reached_duplicates(), 1);
    }

    #[test]
    fn depth_first() {
        let solution = classic_solution(Method::DepthFirst);
        assert_eq!(solution.crossing_cnt(), Some(11));
        assert_eq!(
            solution.path_states.unwrap(),
            vec![
                s(3, 3, Left),
                s(2, 2, Right),
                s(3, 2, Left),
                s(3, 0, Right),
                s(3, 1, Left),
                s(1, 1, Right),
                s(2, 2, Left),
                s(0, 2, Right),
                s(0, 3, Left),
                s(0, 1, Right),
                s(1, 1, Left),
                s(0, 0, Right),
            ]
        );
        assert_eq!(solution.stats.total_created(), 16);
        assert_eq!(solution.stats.total_unique_visited(), 12);
        assert_eq!(solution.stats.total_reached_duplicates(), 0);
    }

    #[test]
    fn best_first() {
        let solution = classic_solution(Method::BestFirst);
        assert_eq!(
            solution.path_states.unwrap(),
            vec![
                s(3, 3, Left),
                s(3, 1, Right),
                s(3, 2, Left),
                s(3, 0, Right),
                s(3, 1, Left),
                s(1, 1, Right),
                s(2, 2, Left),
                s(0, 2, Right),
                s(0, 3, Left),
                s(0, 1, Right),
                s(0, 2, Left),
                s(0, 0, Right),
            ]
        );
        assert_eq!(solution.stats.created_by_depth()[..3], [1, 3, 2]);
        assert_eq!(solution.stats.total_created(), 16);
        assert_eq!(solution.stats.total_unique_visited(), 14);
        assert_eq!(solution.stats.total_reached_duplicates(), 1);
    }

    #[test]
    fn paths_are_connected() {
        for &method in &Method::ALL {
            let path = classic_solution(method).path_states.unwrap();
            assert_eq!(path[0], State::initial());
            assert!(path.last().unwrap().is_goal());
            for pair in path.windows(2) {
                assert!(pair[1].is_valid());
                assert!(
                    Crossing::between(&pair[0], &pair[1]).is_some(),
                    "{}: {:?} -> {:?}",
                    method,
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn repeated_solves_are_identical() {
        for &method in &Method::ALL {
            let first = classic_solution(method);
            let second = classic_solution(method);
            assert_eq!(first.path_states, second.path_states);
            assert!(first.stats == second.stats);
        }
    }

    #[test]
    fn already_solved() {
        for &method in &Method::ALL {
            for &boat in &[Left, Right] {
                let initial = s(0, 0, boat);
                let solution = initial.solve(method, false).unwrap();
                assert_eq!(solution.path_states, Some(vec![initial]));
                assert_eq!(solution.crossing_cnt(), Some(0));
            }
        }
    }

    #[test]
    fn from_the_middle() {
        let solution = s(2, 2, Right).solve(Method::BreadthFirst, false).unwrap();
        assert_eq!(solution.crossing_cnt(), Some(10));
    }

    #[test]
    fn no_solution() {
        // everybody on the left, boat on the right
        for &method in &Method::ALL {
            let solution = s(3, 3, Right).solve(method, false).unwrap();
            assert_eq!(solution.path_states, None);
            assert_eq!(solution.crossing_cnt(), None);
            assert_eq!(solution.stats.total_created(), 1);
            assert_eq!(solution.stats.total_unique_visited(), 1);
            assert_eq!(format!("{:?}", solution).lines().next(), Some("No solution"));
        }
    }

    #[test]
    fn invalid_initial_state() {
        for &initial in &[s(4, 3, Left), s(-1, 0, Left), s(1, 2, Left), s(2, 1, Right)] {
            for &method in &Method::ALL {
                assert_eq!(
                    initial.solve(method, false).unwrap_err(),
                    SolverErr::InvalidInitialState(initial)
                );
            }
        }
    }
}
