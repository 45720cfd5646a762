use grid_astar::{AstarSearch, Coord, Grid, SearchConfig};

// Steps through a search one settled cell at a time, the way a renderer paces an animation.
//  _____
// |S    |
// | ### |
// |   #E|
//  _____

fn main() {
    env_logger::init();
    let mut grid = Grid::new(3, 5);
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 3)] {
        grid.set_obstacle(Coord::new(row, col), true).unwrap();
    }
    grid.set_start(Coord::new(0, 0)).unwrap();
    grid.set_end(Coord::new(2, 4)).unwrap();

    let mut search = AstarSearch::new(&mut grid, &SearchConfig::default()).unwrap();
    while let Some(settled) = search.next() {
        println!(
            "settled {settled}, {} cells in the frontier",
            search.frontier_len()
        );
        println!("{}\n", search.grid().render_overlay(&[], search.visited()));
    }
    let outcome = search.finish().unwrap();
    println!("{}", grid.render_overlay(&outcome.path, &outcome.visited_order));
}
