//! Non-interactive driver: carves a wall with a gap, solves, and
//! prints the board, the path overlay, and the distance field.

use wavegrid_core::Point;
use wavegrid_flood::{Edit, Session};

const WIDTH: i32 = 16;
const HEIGHT: i32 = 10;

fn render(session: &Session) -> String {
    let mut out = String::new();
    let board = session.board();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let p = Point::new(x, y);
            let glyph = if p == board.start() {
                'S'
            } else if p == board.end() {
                'E'
            } else if session.path().contains(&p) {
                '*'
            } else if board.is_obstacle(p) {
                '#'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut session = Session::new(WIDTH, HEIGHT, &mut rand::rng());

    // Wall down the middle with a single gap.
    let gap_y = 4;
    for y in 1..HEIGHT - 1 {
        if y != gap_y {
            session.apply(Edit::ToggleObstacle(Point::new(WIDTH / 2, y)));
        }
    }

    session.apply(Edit::Recompute { limited: false });
    println!("uncapped solve ({} path cells):", session.path().len());
    print!("{}", render(&session));

    // Tighten the cap until the flood falls short of the start.
    for _ in 0..10 {
        session.apply(Edit::LowerStepCap);
    }
    session.apply(Edit::Recompute { limited: true });
    println!(
        "\ncapped at {} generations ({} path cells):",
        session.step_cap(),
        session.path().len()
    );
    print!("{}", render(&session));

    if let Some(field) = session.field() {
        println!("\ndistance field:");
        print!("{field}");
    }
}
