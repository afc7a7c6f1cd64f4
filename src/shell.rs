use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use crossterm::style::{Color, Stylize};

use crate::codec;
use crate::generators;
use crate::maze::{Algorithm, Maze};
use crate::render::{self, RenderStyle};
use crate::solver;

/// Interactive labyrinth shell over stdin/stdout: generate, solve, show,
/// save and load mazes. One maze is "focused" at a time and every command
/// works on it.
pub struct Shell {
    maps_dir: PathBuf,
    style: RenderStyle,
    focused: Option<(String, Maze)>,
}

fn error_line(message: impl std::fmt::Display) {
    println!("{}", format!("*** {message}").with(Color::Red));
}

fn ok_line(message: impl std::fmt::Display) {
    println!("{}", message.to_string().with(Color::Green));
}

impl Shell {
    pub fn new(maps_dir: PathBuf) -> Self {
        Shell {
            maps_dir,
            style: RenderStyle::default(),
            focused: None,
        }
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        println!(
            "Labyrinth shell. Commands: generate <width> <height> <name> [dfs|wilson|prim], \
solve, show, save [name], load <name>, quit"
        );

        let mut line = String::new();
        loop {
            print!("> ");
            stdout.flush()?;

            line.clear();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                break; // end of input
            }
            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else {
                continue;
            };
            let args: Vec<&str> = parts.collect();

            match command {
                "generate" => self.generate(&args),
                "solve" => self.solve(),
                "show" => self.show(),
                "save" => self.save(&args)?,
                "load" => self.load(&args),
                "quit" | "exit" => break,
                _ => error_line(format!("unknown command `{command}`")),
            }
        }
        Ok(())
    }

    fn generate(&mut self, args: &[&str]) {
        let (Some(&w), Some(&h), Some(&name)) = (args.first(), args.get(1), args.get(2)) else {
            error_line("incorrect args set: generate <width> <height> <name> [algo]");
            return;
        };
        let (Ok(width), Ok(height)) = (w.parse::<u16>(), h.parse::<u16>()) else {
            error_line("incorrect args set: width and height must be numbers");
            return;
        };
        let algorithm = match args.get(3) {
            None => Algorithm::Dfs,
            Some(&tag) => match Algorithm::from_tag(tag) {
                Some(algorithm) => algorithm,
                None => {
                    error_line(format!("no such generation algorithm `{tag}`"));
                    return;
                }
            },
        };

        let begin = Instant::now();
        match generators::generate(algorithm, width, height, None) {
            Ok(maze) => {
                println!(
                    "Labyrinth generated in {:.3} ms",
                    begin.elapsed().as_secs_f64() * 1000.0
                );
                self.focused = Some((name.to_string(), maze));
            }
            Err(err) => error_line(err),
        }
    }

    fn solve(&self) {
        let Some((_, maze)) = &self.focused else {
            error_line("no labyrinth is focused");
            return;
        };
        let begin = Instant::now();
        match solver::solve(maze) {
            Ok(solution) => {
                let mut stdout = io::stdout();
                if let Err(err) = render::print_maze(&mut stdout, &solution.grid, &self.style) {
                    error_line(err);
                    return;
                }
                println!(
                    "Labyrinth solved in {:.3} ms",
                    begin.elapsed().as_secs_f64() * 1000.0
                );
            }
            Err(err) => error_line(err),
        }
    }

    fn show(&self) {
        let Some((name, maze)) = &self.focused else {
            error_line("no labyrinth is focused");
            return;
        };
        println!("Labyrinth `{name}`: {}x{}", maze.width, maze.height);
        println!("Start cell: ({}, {})", maze.start.0, maze.start.1);
        println!("Finish cell: ({}, {})", maze.finish.0, maze.finish.1);
        println!("Algo: {}", maze.algorithm);
        let mut stdout = io::stdout();
        if let Err(err) = render::print_maze(&mut stdout, &maze.grid, &self.style) {
            error_line(err);
        }
    }

    fn save(&self, args: &[&str]) -> io::Result<()> {
        let Some((focused_name, maze)) = &self.focused else {
            error_line("no labyrinth is focused");
            return Ok(());
        };
        let name = args.first().copied().unwrap_or(focused_name.as_str());

        if codec::exists(&self.maps_dir, name) {
            println!("Save named {name} already exists, overwrite? [y/n]");
            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if answer.trim() != "y" {
                return Ok(());
            }
        }

        match codec::save(maze, &self.maps_dir, name) {
            Ok(()) => ok_line(format!("Labyrinth '{name}' successfully saved")),
            Err(err) => error_line(err),
        }
        Ok(())
    }

    fn load(&mut self, args: &[&str]) {
        let Some(&name) = args.first() else {
            error_line("incorrect args set: load <name>");
            return;
        };
        if !codec::exists(&self.maps_dir, name) {
            error_line(format!("labyrinth '{name}' does not exist"));
            return;
        }
        match codec::load(&self.maps_dir, name) {
            Ok(maze) => {
                self.focused = Some((name.to_string(), maze));
                ok_line(format!("Labyrinth '{name}' successfully loaded"));
            }
            Err(err) => error_line(err),
        }
    }
}
