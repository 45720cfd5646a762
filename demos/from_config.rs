use grid_astar::{Config, Coord, EditMode, SearchError, Visualizer};
use std::env;

// Loads a board from a TOML file (demos/board.toml by default) and routes across it.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/board.toml").to_owned());
    let config = Config::load(&path)?;
    let (rows, cols) = (config.grid.rows, config.grid.cols);
    let mut visualizer = Visualizer::new(config)?;

    visualizer.click(Coord::new(rows / 2, 0))?;
    visualizer.set_mode(EditMode::End);
    visualizer.click(Coord::new(rows / 2, cols - 1))?;

    match visualizer.run() {
        Ok(outcome) => {
            let overlay = visualizer
                .grid()
                .render_overlay(&outcome.path, &outcome.visited_order);
            println!("{overlay}\n{} hops", outcome.hops());
        }
        Err(SearchError::NoPathFound) => println!("No path found!"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
