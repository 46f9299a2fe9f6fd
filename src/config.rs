use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// How states are rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `Missionaries: 3, Cannibals: 3, Boat Position: left`
    Text,
    /// Both banks drawn with the river and boat between them
    Banks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    DepthFirst,
    BreadthFirst,
    BestFirst,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::DepthFirst, Method::BreadthFirst, Method::BestFirst];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::DepthFirst => write!(f, "depth-first"),
            Method::BreadthFirst => write!(f, "breadth-first"),
            Method::BestFirst => write!(f, "best-first"),
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-first" | "dfs" => Ok(Method::DepthFirst),
            "breadth-first" | "bfs" => Ok(Method::BreadthFirst),
            "best-first" | "a-star" => Ok(Method::BestFirst),
            _ => Err(format!("Unknown search method: {}", s)),
        }
    }
}
