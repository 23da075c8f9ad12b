// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mazebench CLI entrypoint.
//!
//! Inspects a maze file (distances, correct moves, canonical history) and summarises trial
//! records stored as a JSON array of executions.

use std::error::Error;
use std::fs;

use mazebench::model::{Maze, Position};
use mazebench::stats::{
    group_by_maze, maze_name_from_path, summarize, CellStats, Execution, ExecutionFilter,
};
use tracing::info;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <maze-file> [--cell <x,y>]\n  {program} [<maze-file>] --executions \
         <file.json> [--maze <pattern>] [--model <pattern>] [--strategy <name>] [--history | \
         --no-history]\n\nWithout --executions, prints the distance to the goal and the correct \
         moves for every\nevaluated cell of the maze. --cell narrows this to one cell and adds \
         its canonical path.\n\n--executions reads a JSON array of trial records and prints \
         per-group accuracy and timing.\n--maze and --model match by substring, --strategy \
         exactly. If a maze file is given, only\nrecords for that maze are summarised.\n\nSet \
         RUST_LOG (e.g. RUST_LOG=debug) to control log output."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    maze_file: Option<String>,
    cell: Option<Position>,
    executions_file: Option<String>,
    maze: Option<String>,
    model: Option<String>,
    strategy: Option<String>,
    include_history: Option<bool>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--cell" => {
                if options.cell.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.cell = Some(raw.parse().map_err(|_| ())?);
            }
            "--executions" => {
                if options.executions_file.is_some() {
                    return Err(());
                }
                options.executions_file = Some(args.next().ok_or(())?);
            }
            "--maze" => {
                if options.maze.is_some() {
                    return Err(());
                }
                options.maze = Some(args.next().ok_or(())?);
            }
            "--model" => {
                if options.model.is_some() {
                    return Err(());
                }
                options.model = Some(args.next().ok_or(())?);
            }
            "--strategy" => {
                if options.strategy.is_some() {
                    return Err(());
                }
                options.strategy = Some(args.next().ok_or(())?);
            }
            "--history" | "--no-history" => {
                if options.include_history.is_some() {
                    return Err(());
                }
                options.include_history = Some(arg == "--history");
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.maze_file.is_some() {
                    return Err(());
                }
                options.maze_file = Some(arg);
            }
        }
    }

    if options.maze_file.is_none() && options.executions_file.is_none() {
        return Err(());
    }

    let filters_set = options.maze.is_some()
        || options.model.is_some()
        || options.strategy.is_some()
        || options.include_history.is_some();
    if options.executions_file.is_none() && filters_set {
        return Err(());
    }

    if options.executions_file.is_some() && options.cell.is_some() {
        return Err(());
    }

    Ok(options)
}

fn format_moves(maze: &Maze, position: Position) -> String {
    let moves = maze.directions_to_goal(position);
    if moves.is_empty() {
        return "-".to_owned();
    }
    moves.iter().map(|direction| direction.as_str()).collect::<Vec<_>>().join(",")
}

fn print_maze(maze: &Maze, cell: Option<Position>) {
    let info = maze.info();
    println!(
        "maze {}x{}  start {}  goal {}  passable {}  edges {}",
        maze.width(),
        maze.height(),
        maze.start(),
        maze.goal(),
        info.passable_cells,
        info.edges
    );

    if let Some(position) = cell {
        let distance = maze
            .distance_to_goal(position)
            .map_or_else(|| "unreachable".to_owned(), |d| d.to_string());
        let path = maze
            .path_from_start(position)
            .iter()
            .map(Position::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        println!("{position}  distance {distance}  moves {}", format_moves(maze, position));
        println!("history {path}");
        return;
    }

    for position in maze.evaluation_cells() {
        let distance =
            maze.distance_to_goal(position).map_or_else(|| "-".to_owned(), |d| d.to_string());
        println!("{position}\t{distance}\t{}", format_moves(maze, position));
    }
}

fn print_executions(executions: &[Execution], maze: Option<&Maze>) {
    for group in group_by_maze(executions) {
        println!("=== {} ===", group.maze_file);
        for (key, stats) in &group.groups {
            print_group(&key.to_string(), stats);
        }
    }

    println!();
    println!(
        "model,maze,size,category,strategy,history,total,correct,wrong,exceptions,accuracy,\
         wrongRate,exceptionRate,timePerCell,passableCells,edges"
    );
    for mut summary in summarize(executions) {
        if let Some(maze) = maze {
            summary.info = Some(maze.info());
        }
        let info = summary.info.unwrap_or_default();
        println!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            summary.model,
            summary.maze,
            summary.maze_name.size,
            summary.maze_name.category.as_str(),
            summary.strategy,
            if summary.include_history { "yes" } else { "no" },
            summary.total,
            summary.correct,
            summary.wrong,
            summary.exceptions,
            summary.accuracy(),
            summary.wrong_rate(),
            summary.exception_rate(),
            summary.seconds_per_cell(),
            info.passable_cells,
            info.edges
        );
    }
}

fn print_group(label: &str, stats: &CellStats) {
    let overall = stats.overall();
    let accuracy = overall
        .accuracy()
        .rate()
        .map_or_else(|| "n/a".to_owned(), |rate| format!("{:.1}%", rate * 100.0));
    let mean_time = overall
        .mean_time()
        .map_or_else(|| "n/a".to_owned(), |ms| format!("{ms:.0}ms"));
    println!(
        "--- {label} ({} trials) accuracy {accuracy} ({}/{}) mean {mean_time}",
        stats.trial_count(),
        overall.correct,
        overall.total
    );
}

fn main() {
    tracing_subscriber::fmt::init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mazebench".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let maze = match &options.maze_file {
            Some(path) => {
                let maze = Maze::from_file(path)?;
                info!(path = %path, width = maze.width(), height = maze.height(), "loaded maze");
                Some(maze)
            }
            None => None,
        };

        let Some(executions_file) = &options.executions_file else {
            if let Some(maze) = &maze {
                print_maze(maze, options.cell);
            }
            return Ok(());
        };

        let raw = fs::read_to_string(executions_file)?;
        let executions: Vec<Execution> = serde_json::from_str(&raw)?;
        info!(path = %executions_file, count = executions.len(), "loaded trial records");

        let filter = ExecutionFilter {
            model: options.model.clone(),
            maze: options.maze.clone(),
            strategy: options.strategy.clone(),
            include_history: options.include_history,
        };
        let maze_name = options.maze_file.as_deref().map(maze_name_from_path);
        let selected = filter
            .apply(&executions)
            .filter(|execution| maze_name.map_or(true, |name| execution.maze_name() == name))
            .cloned()
            .collect::<Vec<_>>();
        if selected.is_empty() {
            eprintln!("No executions found.");
            return Ok(());
        }

        print_executions(&selected, maze.as_ref());
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mazebench: {err}");
        std::process::exit(1);
    }
}
