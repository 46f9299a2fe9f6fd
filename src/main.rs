use std::process;

use clap::{value_t, App, Arg, ArgGroup, ArgMatches};
use log::debug;

use missionaries_solver::config::{Format, Method};
use missionaries_solver::solution_formatter::SolutionFormatter;
use missionaries_solver::{BoatSide, Solve, State};

fn main() {
    env_logger::init();

    let app = App::new("missionaries-solver")
        .author("martin-t")
        .version("0.1")
        .about("Ferries 3 missionaries and 3 cannibals across a river in a boat for 2")
        .arg(
            Arg::with_name("dfs")
                .short("d")
                .long("dfs")
                .help("depth-first search"),
        )
        .arg(
            Arg::with_name("bfs")
                .short("b")
                .long("bfs")
                .help("breadth-first search - fewest crossings (default)"),
        )
        .arg(
            Arg::with_name("best-first")
                .short("a")
                .long("best-first")
                .alias("a-star")
                .help("best-first search ordered by crossings made + people left"),
        )
        .group(ArgGroup::with_name("method").args(&["dfs", "bfs", "best-first"]))
        .arg(
            Arg::with_name("missionaries")
                .short("m")
                .long("missionaries")
                .takes_value(true)
                .default_value("3")
                .help("missionaries on the left bank at the start"),
        )
        .arg(
            Arg::with_name("cannibals")
                .short("c")
                .long("cannibals")
                .takes_value(true)
                .default_value("3")
                .help("cannibals on the left bank at the start"),
        )
        .arg(
            Arg::with_name("boat")
                .long("boat")
                .takes_value(true)
                .possible_values(&["left", "right"])
                .default_value("left")
                .help("bank the boat starts on"),
        )
        .arg(
            Arg::with_name("banks")
                .long("banks")
                .help("draw both banks instead of listing counts"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print progress whenever the search reaches a new depth"),
        );

    #[cfg(feature = "graph")]
    let app = app.arg(
        Arg::with_name("graph")
            .long("graph")
            .takes_value(true)
            .value_name("FILE")
            .help("write the reachable state space as a Graphviz dot file"),
    );

    let matches = app.get_matches();

    let method = if matches.is_present("dfs") {
        Method::DepthFirst
    } else if matches.is_present("best-first") {
        Method::BestFirst
    } else {
        Method::BreadthFirst
    };
    let format = if matches.is_present("banks") {
        Format::Banks
    } else {
        Format::Text
    };
    let initial = initial_state(&matches);
    debug!("Initial state: {:?}", initial);

    println!("Solving with {} search...", method);
    let solver_ok = initial
        .solve(method, matches.is_present("verbose"))
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.path_states {
        Some(ref path) => {
            println!("Found solution:");
            print!("{}", SolutionFormatter::new(path, format));
            println!("{} crossings", path.len() - 1);
        }
        None => println!("No solution found"),
    }

    #[cfg(feature = "graph")]
    {
        if let Some(path) = matches.value_of("graph") {
            if let Err(err) = write_graph(path, &initial, solver_ok.path_states.as_ref()) {
                eprintln!("Can't write graph to {}: {}", path, err);
                process::exit(1);
            }
        }
    }
}

fn initial_state(matches: &ArgMatches<'_>) -> State {
    let missionaries = value_t!(matches, "missionaries", i8).unwrap_or_else(|e| e.exit());
    let cannibals = value_t!(matches, "cannibals", i8).unwrap_or_else(|e| e.exit());
    let boat = value_t!(matches, "boat", BoatSide).unwrap_or_else(|e| e.exit());
    State::new(missionaries, cannibals, boat)
}

#[cfg(feature = "graph")]
fn write_graph(
    path: &str,
    initial: &State,
    path_states: Option<&Vec<State>>,
) -> std::io::Result<()> {
    use missionaries_solver::solver::graph::StateSpace;

    let space = StateSpace::new(initial, path_states.map(|states| &states[..]));
    let mut file = std::fs::File::create(path)?;
    space.render(&mut file)
}
