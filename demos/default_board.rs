use grid_astar::{Coord, EditMode, Visualizer};
use itertools::Itertools;

// The reference board: 20x20 with three horizontal barriers
//
// - S marks the start
// - E marks the end
// - # marks an obstacle
// - * marks the path
// - o marks settled cells that are not on the path

fn main() {
    env_logger::init();
    let mut visualizer = Visualizer::default();
    visualizer.click(Coord::new(2, 7)).unwrap();
    visualizer.set_mode(EditMode::End);
    visualizer.click(Coord::new(17, 12)).unwrap();
    println!("{}", visualizer.grid());

    match visualizer.run() {
        Ok(outcome) => {
            println!(
                "{}",
                visualizer
                    .grid()
                    .render_overlay(&outcome.path, &outcome.visited_order)
            );
            println!(
                "Path of {} hops, {} cells settled:",
                outcome.hops(),
                outcome.visited_order.len()
            );
            println!("{}", outcome.path.iter().join(" -> "));
        }
        Err(err) => println!("{err}"),
    }
}
