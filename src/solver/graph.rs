use std::borrow::Cow;
use std::collections::VecDeque;
use std::io::{self, Write};

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::{FnvHashMap, FnvHashSet};

use crate::state::State;

use super::{expand, Crossing};

type Nd = usize;
type Ed = (usize, usize);

/// Every state reachable from the initial one, connected by crossings
#[derive(Debug)]
pub struct StateSpace {
    nodes: Vec<State>,
    edges: Vec<Ed>,
    on_path: FnvHashSet<State>,
}

impl StateSpace {
    pub fn new(initial: &State, path_states: Option<&[State]>) -> Self {
        let mut node_to_index = FnvHashMap::default();
        let mut nodes = vec![*initial];
        let mut edges = Vec::new();
        node_to_index.insert(*initial, 0);

        let mut to_visit = VecDeque::new();
        to_visit.push_back(0);
        while let Some(index) = to_visit.pop_front() {
            for neighbor in expand(&nodes[index]) {
                let neighbor_index = match node_to_index.get(&neighbor) {
                    Some(&i) => i,
                    None => {
                        let i = nodes.len();
                        nodes.push(neighbor);
                        node_to_index.insert(neighbor, i);
                        to_visit.push_back(i);
                        i
                    }
                };
                edges.push((index, neighbor_index));
            }
        }

        let on_path = path_states
            .map(|states| states.iter().cloned().collect())
            .unwrap_or_default();

        Self {
            nodes,
            edges,
            on_path,
        }
    }

    pub fn node_cnt(&self) -> usize {
        self.nodes.len()
    }

    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for StateSpace {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for StateSpace {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("StateSpace").expect("static id is valid")
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).expect("generated ids are alphanumeric")
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        LabelText::LabelStr(self.nodes[*n].banks().to_string().into())
    }

    fn edge_label(&'a self, e: &Ed) -> LabelText<'a> {
        let crossing = Crossing::between(&self.nodes[e.0], &self.nodes[e.1]);
        LabelText::LabelStr(crossing.map(|c| c.to_string()).unwrap_or_default().into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.on_path.contains(&self.nodes[*n]) {
            Style::Filled
        } else {
            Style::Solid
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        if self.on_path.contains(&self.nodes[*n]) {
            Some(LabelText::LabelStr("red".into()))
        } else {
            None
        }
    }
}
