use springgraph::prelude::*;

fn main() {
    let mut simulator = Simulator::builder()
        .world_size(400.0, 400.0)
        .seed(42)
        .build(Graph::demo())
        .expect("default parameters are valid");

    let mut frames = FrameLoop::new(ManualScheduler::new());
    frames.start();

    // Pin the centre of the clique halfway through.
    while let Some(state) = frames.run_pending(&mut simulator) {
        match simulator.ticks() {
            500 => {
                simulator.freeze_vertex("One");
                simulator.move_vertex("One", Vec2::new(200.0, 200.0));
            }
            2000 => frames.stop(),
            _ => {}
        }
        if simulator.ticks() % 500 == 0 {
            println!("tick {}", simulator.ticks());
            for (id, position) in state.positions() {
                println!("  {id:>5}: ({:7.2}, {:7.2})", position.x, position.y);
            }
        }
    }
}
