//! A small scene whose color changes and spawned cubes can be undone and redone.
//!
//! Run with `RUST_LOG=rewind=trace cargo run --example scene` to see every
//! replayed operation.

use rewind::{History, Signal};
use std::fmt;
use tracing_subscriber::prelude::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Color {
    White,
    Red,
    Green,
    Blue,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug)]
struct Scene {
    color: Color,
    cubes: Vec<u32>,
    next_cube: u32,
}

type SceneHistory = History<Scene, Box<dyn FnMut(Signal)>>;

fn set_color(history: &mut SceneHistory, scene: &mut Scene, color: Color) -> rewind::Result {
    history.push(set_color, scene.color, format!("set color {color}"));
    scene.color = color;
    Ok(())
}

fn create_cube(history: &mut SceneHistory, scene: &mut Scene, _: ()) -> rewind::Result {
    let id = scene.next_cube;
    scene.next_cube += 1;
    scene.cubes.push(id);
    history.push(destroy_cube, id, "create cube");
    Ok(())
}

fn destroy_cube(history: &mut SceneHistory, scene: &mut Scene, id: u32) -> rewind::Result {
    let index = scene
        .cubes
        .iter()
        .position(|&cube| cube == id)
        .ok_or_else(|| format!("cube {id} does not exist"))?;
    scene.cubes.remove(index);
    history.push(create_cube, (), "destroy cube");
    Ok(())
}

/// Picks the same pseudo random colors on every run.
fn colors(mut seed: u32) -> impl Iterator<Item = Color> {
    std::iter::repeat_with(move || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        match (seed >> 16) % 3 {
            0 => Color::Red,
            1 => Color::Green,
            _ => Color::Blue,
        }
    })
}

fn main() -> rewind::Result {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rewind=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let mut scene = Scene {
        color: Color::White,
        cubes: Vec::new(),
        next_cube: 0,
    };
    let mut history = SceneHistory::builder()
        .limit(10)
        .connect(Box::new(|signal: Signal| match signal {
            Signal::Undo(on) => println!("undo button enabled: {on}"),
            Signal::Redo(on) => println!("redo button enabled: {on}"),
            _ => {}
        }))
        .build()?;

    for color in colors(7).take(10) {
        set_color(&mut history, &mut scene, color)?;
    }
    {
        let mut scope = history.transaction("spawn pair");
        create_cube(&mut scope, &mut scene, ())?;
        create_cube(&mut scope, &mut scene, ())?;
    }
    println!("{scene:?}");
    println!("{}", history.display());

    // U undoes and R redoes.
    for key in "UUURRU".chars() {
        match key {
            'U' => history.undo(&mut scene)?,
            'R' => history.redo(&mut scene)?,
            _ => unreachable!(),
        }
        println!("{key}: {scene:?}");
    }
    println!("{}", history.display());
    Ok(())
}
